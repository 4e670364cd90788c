use crate::codec::Channel;

/// Trait for audio components that support runtime control (e.g., codec chips).
pub trait AudioControl {
    /// Error type for control operations.
    type Error;

    /// Bring the component up with its current configuration.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Silence the outputs and stop the component.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Set the left/right gain of a channel in dB.
    fn set_gain(&mut self, channel: Channel, left_db: f32, right_db: f32)
        -> Result<(), Self::Error>;

    /// Mute or unmute a channel without losing its gain.
    fn mute(&mut self, channel: Channel, mute: bool) -> Result<(), Self::Error>;
}

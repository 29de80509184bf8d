use crate::traits::led::Led;
use embedded_hal::digital::{OutputPin, PinState};

/// Discriminator for outputs that are lit on high state.
pub struct ActiveHigh;

/// Discriminator for outputs that are lit on low state.
pub struct ActiveLow;

pub trait ActiveLevel {
    fn level(on: bool) -> PinState;
}

impl ActiveLevel for ActiveHigh {
    fn level(on: bool) -> PinState {
        PinState::from(on)
    }
}

impl ActiveLevel for ActiveLow {
    fn level(on: bool) -> PinState {
        PinState::from(!on)
    }
}

/// An LED on a GPIO output, remembering the last state written.
pub struct GpioLed<P, L = ActiveHigh>
where
    P: OutputPin,
    L: ActiveLevel,
{
    pin: P,
    state: bool,
    _level: core::marker::PhantomData<L>,
}

impl<P, L> GpioLed<P, L>
where
    P: OutputPin,
    L: ActiveLevel,
{
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            state: false,
            _level: core::marker::PhantomData,
        }
    }
}

impl<P, L> Led for GpioLed<P, L>
where
    P: OutputPin,
    L: ActiveLevel,
{
    type Error = P::Error;

    fn set(&mut self, state: bool) -> Result<(), Self::Error> {
        self.pin.set_state(L::level(state))?;
        self.state = state;
        Ok(())
    }

    fn state(&self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }
}

impl<P, L> From<P> for GpioLed<P, L>
where
    P: OutputPin,
    L: ActiveLevel,
{
    fn from(pin: P) -> Self {
        Self::new(pin)
    }
}

use crate::traits;
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::digital::Wait;

/// A push button wired to a pulled-up input, reading low while pressed.
pub struct Button<P: InputPin> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }
}

impl<P: InputPin + Wait> traits::button::Button for Button<P> {
    type Error = <P as ErrorType>::Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }

    async fn wait_pressed(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_low().await
    }

    async fn wait_released(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_high().await
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonId {
    A = 0x01,
    B = 0x02,
}

/// Set of buttons, stored as the gamepad bit mask.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & 0x03)
    }

    pub fn mask(&self) -> u8 {
        self.0
    }

    pub fn insert(&mut self, button: ButtonId) {
        self.0 |= button as u8;
    }

    pub fn contains(&self, button: ButtonId) -> bool {
        self.0 & button as u8 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = ButtonId> + '_ {
        [ButtonId::A, ButtonId::B]
            .into_iter()
            .filter(move |b| self.contains(*b))
    }
}

/// Latches presses of two buttons between reads.
pub struct GamePad<A: InputPin, B: InputPin<Error = A::Error>> {
    a: Button<A>,
    b: Button<B>,
    pressed: ButtonSet,
}

impl<A: InputPin, B: InputPin<Error = A::Error>> GamePad<A, B> {
    pub fn new(a: Button<A>, b: Button<B>) -> Self {
        Self {
            a,
            b,
            pressed: ButtonSet::empty(),
        }
    }

    /// Sample both buttons, remembering any that are down.
    pub fn poll(&mut self) -> Result<(), A::Error> {
        if self.a.is_pressed()? {
            self.pressed.insert(ButtonId::A);
        }
        if self.b.is_pressed()? {
            self.pressed.insert(ButtonId::B);
        }
        Ok(())
    }

    /// Buttons pressed since the previous call, including those held now.
    pub fn get_pressed(&mut self) -> Result<ButtonSet, A::Error> {
        self.poll()?;
        let pressed = self.pressed;
        self.pressed = ButtonSet::empty();
        Ok(pressed)
    }

    pub fn button_a(&mut self) -> &mut Button<A> {
        &mut self.a
    }

    pub fn button_b(&mut self) -> &mut Button<B> {
        &mut self.b
    }

    pub fn buttons(&mut self) -> (&mut Button<A>, &mut Button<B>) {
        (&mut self.a, &mut self.b)
    }
}

//! Board Support Packages (BSP).

pub mod boards;

/// A board capable of creating itself using peripherals.
pub trait Board: Sized {
    type Peripherals;

    fn new(peripherals: Self::Peripherals) -> Self;
}

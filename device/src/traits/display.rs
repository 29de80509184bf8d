use crate::domain::color::Rgb8;

/// A screen able to draw text with the built-in terminal font.
pub trait TextTarget {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw `text` with its baseline origin at `(x, y)`, glyphs enlarged `scale` times.
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Rgb8,
        scale: u8,
    ) -> Result<(), Self::Error>;

    /// Hand the screen back to the console output.
    fn release(&mut self) -> Result<(), Self::Error>;
}

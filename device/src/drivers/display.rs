//! Titled list of text lines for showing sensor readings on the display.

use crate::domain::color::{Rgb8, WHITE};
use crate::traits::display::TextTarget;
use core::ops::{Index, IndexMut};
use heapless::{String, Vec};

pub const MAX_TITLE_LEN: usize = 60;
pub const MAX_LINE_LEN: usize = 40;
/// Items one display group holds, title included.
pub const MAX_ITEMS: usize = 20;

const TITLE_Y: i32 = 8;
const FIRST_LINE_GAP: i32 = 20;
const LINE_SPACING: i32 = 13;

pub const DEFAULT_COLORS: [Rgb8; 10] = [
    Rgb8::new(255, 0, 255),
    Rgb8::new(0, 255, 0),
    Rgb8::new(255, 0, 0),
    Rgb8::new(0, 255, 255),
    Rgb8::new(255, 255, 0),
    Rgb8::new(0, 0, 255),
    Rgb8::new(255, 0, 180),
    Rgb8::new(0, 180, 255),
    Rgb8::new(255, 180, 0),
    Rgb8::new(180, 0, 255),
];

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Text longer than the label holds.
    InvalidArgument,
    /// No room left in the group for another line.
    Full,
}

/// A single line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel<const N: usize> {
    text: String<N>,
    color: Rgb8,
    x: i32,
    y: i32,
    scale: u8,
}

impl<const N: usize> TextLabel<N> {
    fn new(color: Rgb8, y: i32, scale: u8) -> Self {
        Self {
            text: String::new(),
            color,
            x: 0,
            y,
            scale,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Fails, leaving the old text, if `text` is longer than `N` bytes.
    pub fn set_text(&mut self, text: &str) -> Result<(), LayoutError> {
        self.text = String::try_from(text).map_err(|_| LayoutError::InvalidArgument)?;
        Ok(())
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb8) {
        self.color = color;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl<const N: usize> core::fmt::Write for TextLabel<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.text.push_str(s).map_err(|_| core::fmt::Error)
    }
}

pub struct SensorDisplayConfig<'a> {
    pub title: &'a str,
    pub title_color: Rgb8,
    pub title_scale: u8,
    /// Scale of the whole group, title included.
    pub sensor_scale: u8,
    pub num_sensors: usize,
    /// Line colors, reused in order when there are more lines than colors.
    pub colors: &'a [Rgb8],
}

impl Default for SensorDisplayConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Clue Sensor Data",
            title_color: WHITE,
            title_scale: 1,
            sensor_scale: 1,
            num_sensors: 1,
            colors: &DEFAULT_COLORS,
        }
    }
}

/// A title followed by text lines, 13 pixels apart.
pub struct SensorDisplay {
    title: TextLabel<MAX_TITLE_LEN>,
    lines: Vec<TextLabel<MAX_LINE_LEN>, { MAX_ITEMS - 1 }>,
    scale: u8,
    next_y: i32,
}

impl SensorDisplay {
    pub fn new(config: SensorDisplayConfig<'_>) -> Result<Self, LayoutError> {
        let mut title = TextLabel::new(config.title_color, TITLE_Y, config.title_scale);
        title.set_text(config.title)?;

        let mut display = Self {
            title,
            lines: Vec::new(),
            scale: config.sensor_scale.max(1),
            next_y: TITLE_Y + FIRST_LINE_GAP,
        };
        let colors = if config.colors.is_empty() {
            &DEFAULT_COLORS[..]
        } else {
            config.colors
        };
        for (_, color) in (0..config.num_sensors).zip(colors.iter().cycle()) {
            display.add_text_line(*color)?;
        }
        Ok(display)
    }

    /// Append an empty line below the last one.
    pub fn add_text_line(
        &mut self,
        color: Rgb8,
    ) -> Result<&mut TextLabel<MAX_LINE_LEN>, LayoutError> {
        let line = TextLabel::new(color, self.next_y, 1);
        self.lines.push(line).map_err(|_| LayoutError::Full)?;
        self.next_y += LINE_SPACING;
        let last = self.lines.len() - 1;
        Ok(&mut self.lines[last])
    }

    pub fn title(&self) -> &TextLabel<MAX_TITLE_LEN> {
        &self.title
    }

    pub fn line(&self, index: usize) -> Option<&TextLabel<MAX_LINE_LEN>> {
        self.lines.get(index)
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut TextLabel<MAX_LINE_LEN>> {
        self.lines.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Redraw the title and every line on `target`.
    pub fn show<T: TextTarget>(&self, target: &mut T) -> Result<(), T::Error> {
        target.clear()?;
        self.draw(target, &self.title)?;
        for line in self.lines.iter() {
            if !line.text.is_empty() {
                self.draw(target, line)?;
            }
        }
        Ok(())
    }

    /// Return the screen to the console.
    pub fn show_terminal<T: TextTarget>(&self, target: &mut T) -> Result<(), T::Error> {
        target.release()
    }

    fn draw<T: TextTarget, const N: usize>(
        &self,
        target: &mut T,
        label: &TextLabel<N>,
    ) -> Result<(), T::Error> {
        let scale = self.scale as i32;
        target.draw_text(
            label.x * scale,
            label.y * scale,
            &label.text,
            label.color,
            self.scale.saturating_mul(label.scale),
        )
    }
}

impl Index<usize> for SensorDisplay {
    type Output = TextLabel<MAX_LINE_LEN>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl IndexMut<usize> for SensorDisplay {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.lines[index]
    }
}

pub mod adafruit_clue;

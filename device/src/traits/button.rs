pub trait Button {
    type Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error>;

    async fn wait_pressed(&mut self) -> Result<(), Self::Error>;

    async fn wait_released(&mut self) -> Result<(), Self::Error>;
}

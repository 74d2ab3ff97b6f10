#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    IntensityUp,
    IntensityDown,
    Quit,
    UITick,
}

/// Policy selecting where the funds of each attempt go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestinationMode {
    /// Funds return to the sender's own address.
    #[default]
    SelfAddress,
    /// Each attempt targets a freshly generated, never-before-used address.
    Random,
}

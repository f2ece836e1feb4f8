#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    #[default]
    BeforeInit,
    Pending,
    Dirty,
    Clean,
}

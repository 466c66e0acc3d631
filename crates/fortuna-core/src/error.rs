use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("wheel must have at least one sector")]
    EmptyWheel,
    #[error("excluded sector out of range: {0}")]
    ExcludedSectorOutOfRange(usize),
    #[error("duplicate excluded sector: {0}")]
    DuplicateExcludedSector(usize),
    #[error("no selectable sectors remain")]
    NoSelectableSectors,
    #[error("identity data has no user")]
    MissingUser,
    #[error("identity data has no user id")]
    MissingUserId,
}

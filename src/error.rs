#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("{value:?} is not a non-negative integer, so it cannot be a curve index")]
    NonIntegralIndex{
        value: f64,
    },
    #[error("{value:?} is 2^53 or more, so the curve index it stands for may have been rounded")]
    InexactIndex{
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, crate::Error>;

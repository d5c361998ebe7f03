use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Heatmap grid has {cells} cells, more than the configured maximum of {max}")]
    GridTooLarge { cells: usize, max: usize },

    #[error("Model produced no rows")]
    NoRows,
}

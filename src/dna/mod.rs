// Stylometric DNA — extraction, similarity, and author matching.

pub mod extract;
pub mod matcher;
pub mod similarity;
pub mod vector;

pub mod network;
pub mod outdir;
pub mod rates;
pub mod status;
pub mod tsv;

mod export;

pub use export::{
    ExchangeSummary, summarize, write_csv, write_json, write_series, write_table,
};

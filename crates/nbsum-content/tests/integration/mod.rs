mod catalog_roundtrip;
mod writer_scenarios;

use bondgraph::core::io::table::CsvWriteOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub write_options: CsvWriteOptions,
    /// Whether the `components` command lists single-atom components.
    pub report_isolated: bool,
}

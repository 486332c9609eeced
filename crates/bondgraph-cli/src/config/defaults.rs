pub struct DefaultsConfig {
    pub sort_bonds: bool,
    pub include_orders: bool,
    pub report_isolated: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort_bonds: false,
            include_orders: true,
            report_isolated: true,
        }
    }
}

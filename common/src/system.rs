use crate::network::interface::LocalNetwork;

/// Host facts the scan needs before it starts.
pub trait SystemRepository: Send + Sync {
    /// Selectable /24 networks, in interface order.
    fn local_networks(&self) -> Vec<LocalNetwork>;

    /// Logical CPU count. Always at least 1.
    fn cpu_cores(&self) -> usize;

    /// Raises the soft open-file limit towards `target`. Returns the limit in
    /// effect afterwards.
    fn raise_fd_limit(&self, target: u64) -> anyhow::Result<u64>;
}

/// Logical CPU threads available to this process, never less than 1
pub fn available_lanes() -> usize {
    resolve_lanes(num_cpus::get())
}

/// Physical cores, for reports only
pub fn physical_cores() -> usize {
    resolve_lanes(num_cpus::get_physical())
}

/// Degenerate counts (0 from an unusual platform) fall back to one lane
pub fn resolve_lanes(reported: usize) -> usize {
    if reported == 0 {
        log::warn!("capability query reported 0 lanes, falling back to 1");
        1
    } else {
        reported
    }
}

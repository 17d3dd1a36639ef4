/// Data layer: core types, loading, transforms, and export.
///
/// Architecture:
/// ```text
///  SN_m_tot_V2.0.csv  (7 semicolon-separated fields per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split → coerce types → drop -1 sentinel rows
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SunspotDataset  │  ordered Vec<Observation>, read-only after load
///   └────────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ transform   │  smooth (trailing moving average)
///   │             │  fold   (phase = yr_fraction mod cycle_length)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  derived series → CSV / JSON
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod transform;

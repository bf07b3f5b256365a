// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Knobs for the maze benches, read from `MAZEROUTE_BENCH_*` variables.
///
/// `MAZEROUTE_BENCH_PROFILE_HZ=0` turns the flamegraph profiler off.
#[derive(Debug, Clone, Copy)]
struct BenchConfig {
    profile_hz: i32,
    samples: usize,
    warm_up: Duration,
    measurement: Duration,
}

impl BenchConfig {
    fn from_env() -> Self {
        let read = |suffix: &str| {
            std::env::var(format!("MAZEROUTE_BENCH_{suffix}"))
                .ok()
                .and_then(|raw| raw.trim().parse::<u64>().ok())
        };

        Self {
            profile_hz: read("PROFILE_HZ").map_or(100, |hz| hz.min(1000) as i32),
            samples: read("SAMPLES").map_or(40, |n| n.clamp(10, 200) as usize),
            warm_up: Duration::from_secs(read("WARMUP_SECS").map_or(2, |s| s.clamp(1, 60))),
            measurement: Duration::from_secs(
                read("MEASUREMENT_SECS").map_or(5, |s| s.clamp(1, 120)),
            ),
        }
    }
}

pub fn criterion() -> Criterion {
    let config = BenchConfig::from_env();
    let criterion = Criterion::default()
        .sample_size(config.samples)
        .warm_up_time(config.warm_up)
        .measurement_time(config.measurement);

    if config.profile_hz == 0 {
        return criterion;
    }
    criterion.with_profiler(PProfProfiler::new(config.profile_hz, Output::Flamegraph(None)))
}

// ABOUTME: Unit conversion constants for distances, paces and durations
// ABOUTME: Engine distances are miles, paces seconds per mile, race times seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Days in one week
pub const DAYS_PER_WEEK: i64 = 7;

/// Standard race distances in miles
pub mod race_miles {
    /// One mile
    pub const MILE: f64 = 1.0;
    /// 5 kilometers
    pub const FIVE_K: f64 = 3.106_856;
    /// 10 kilometers
    pub const TEN_K: f64 = 6.213_712;
    /// Half marathon (21.0975 km)
    pub const HALF_MARATHON: f64 = 13.109_375;
    /// Marathon (42.195 km)
    pub const MARATHON: f64 = 26.218_75;
}

//! Physical constants for the ellipsoidal Earth and air-sea coupling.

/// Nominal mean radius of the Earth (meters), used when no latitude is given.
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial radius (meters).
pub const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Polar radius (meters).
pub const POLAR_RADIUS_M: f64 = 6_356_752.0;

/// Earth's present-day rotation rate (rad/s).
pub const EARTH_ROTATION_RATE: f64 = 7.2921e-5;

/// Global average drag coefficient for 10 m winds (Kara et al., 2007).
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1.25e-3;

/// Air density at the sea surface (kg/m^3).
pub const DEFAULT_AIR_DENSITY: f64 = 1.225;

/// Sea water density (kg/m^3).
pub const DEFAULT_WATER_DENSITY: f64 = 1025.0;

/// Latitude limits (degrees).
pub const MAX_ABS_LATITUDE: f64 = 90.0;

/// Longitude limits (degrees). Both -180..180 and 0..360 conventions pass.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 360.0;

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

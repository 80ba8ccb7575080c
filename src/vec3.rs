//! 3D vector algebra for ray tracing.
//!
//! A single [`Vec3`] type serves as geometric point, direction, and RGB color
//! (components in [0, 1] per channel, by convention). The [`Point3`] and
//! [`Color`] aliases document intent at use sites without adding type
//! enforcement.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Three-component real-valued vector.
///
/// Immutable once constructed; all operations return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component (index 0)
    pub x: f64,
    /// Y component (index 1)
    pub y: f64,
    /// Z component (index 2)
    pub z: f64,
}

/// Geometric point in world space.
pub type Point3 = Vec3;

/// RGB color with channels in [0, 1].
pub type Color = Vec3;

impl Vec3 {
    /// The zero vector. Valid as a point or offset, invalid as input to
    /// [`Vec3::unit`].
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean norm.
    ///
    /// Cheaper than [`Vec3::length`] for magnitude comparisons and for the
    /// dot(v, v) identity used in intersection math.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product: sum of component products. Commutative.
    pub fn dot(&self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Standard 3D cross product. Anti-commutative: `v.cross(w) == -w.cross(v)`.
    pub fn cross(&self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unit vector pointing in the same direction.
    ///
    /// # Panics
    ///
    /// Panics when called on a zero-length vector; a degenerate direction is
    /// a geometry precondition violation, not a recoverable condition.
    pub fn unit(&self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            panic!("cannot normalize a zero-length vector");
        }
        *self / len
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    /// Component access by index: 0 is x, 1 is y, 2 is z.
    ///
    /// # Panics
    ///
    /// Panics for any other index.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid Vec3 index: {}", index),
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise (Hadamard) product, used for tinting colors.
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, t: f64) -> Vec3 {
        t * self
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self * v.x, self * v.y, self * v.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    /// Scalar division.
    ///
    /// # Panics
    ///
    /// Panics when `t` is exactly zero.
    fn div(self, t: f64) -> Vec3 {
        if t == 0.0 {
            panic!("Vec3 division by zero");
        }
        (1.0 / t) * self
    }
}

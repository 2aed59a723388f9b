//! CIE L*a*b* conversion (D65 white, 2° observer).
//!
//! Euclidean distance in Lab tracks perceived color difference far better
//! than distance in sRGB, so quantization and nearest-palette lookup both
//! work on Lab coordinates.

use crate::consts::{D65_WHITE_X, D65_WHITE_Y, D65_WHITE_Z, LAB_EPSILON, LAB_KAPPA};

use super::rgb::Rgb8;

/// linear sRGB -> XYZ
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ -> linear sRGB
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// A point in CIE Lab space.
///
/// `l` is lightness in [0, 100]; `a` (green-red) and `b` (blue-yellow) are
/// unbounded but stay within roughly ±128 for sRGB inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Component by axis index: 0 = L, 1 = a, 2 = b.
    #[inline]
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.l,
            1 => self.a,
            2 => self.b,
            _ => panic!("Lab axis {axis} out of range"),
        }
    }

    /// Squared Euclidean distance, enough for nearest-neighbour comparisons.
    #[inline]
    pub fn distance_squared(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Rgb8> for Lab {
    fn from(rgb: Rgb8) -> Self {
        to_lab(rgb)
    }
}

impl From<Lab> for Rgb8 {
    fn from(lab: Lab) -> Self {
        to_rgb(lab)
    }
}

#[inline]
fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(linear: f64) -> u8 {
    let c = if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / LAB_KAPPA
    }
}

fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert an 8-bit sRGB color to CIE Lab.
pub fn to_lab(rgb: Rgb8) -> Lab {
    let linear = [
        srgb_to_linear(rgb.r) * 100.0,
        srgb_to_linear(rgb.g) * 100.0,
        srgb_to_linear(rgb.b) * 100.0,
    ];
    let [x, y, z] = mul3(&RGB_TO_XYZ, linear);

    let fx = lab_f(x / D65_WHITE_X);
    let fy = lab_f(y / D65_WHITE_Y);
    let fz = lab_f(z / D65_WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a CIE Lab point back to 8-bit sRGB, clamping out-of-gamut
/// results to the nearest representable channel value.
pub fn to_rgb(lab: Lab) -> Rgb8 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let xyz = [
        lab_f_inv(fx) * D65_WHITE_X / 100.0,
        lab_f_inv(fy) * D65_WHITE_Y / 100.0,
        lab_f_inv(fz) * D65_WHITE_Z / 100.0,
    ];
    let [r, g, b] = mul3(&XYZ_TO_RGB, xyz);

    Rgb8::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

//! Pixel buffer, the desired state of the strip.
//!
//! The buffer is the only representation of what the LEDs should show.
//! Its length is the const `N` and never changes; index `i` is the `i`-th
//! LED in wiring order.

use core::ops::Index;

use crate::color::{OFF, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every LED off
    pub const fn new() -> Self {
        Self { pixels: [OFF; N] }
    }

    /// Number of LEDs in the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
    }

    /// Set a single pixel
    ///
    /// Returns `false` if `index` is outside the strip.
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels.iter().copied()
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for PixelBuffer<N> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.pixels[index]
    }
}

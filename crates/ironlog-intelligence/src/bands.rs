// ABOUTME: Ordered band catalog with resistance lookup and direction-aware neighbor search
// ABOUTME: Assistance bands invert the meaning of harder and easier relative to order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::progression::ensure_unique_bands;
use crate::config::ProgressionConfig;
use crate::errors::AppResult;
use crate::models::{Band, BandDirection, BandType};

/// Immutable set of bands sorted by ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct BandCatalog {
    bands: Vec<Band>,
}

impl BandCatalog {
    /// Build a catalog from bands in any order
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if two bands share a color or an
    /// order value
    pub fn new(mut bands: Vec<Band>) -> AppResult<Self> {
        ensure_unique_bands(&bands)?;
        bands.sort_by_key(|band| band.order);
        Ok(Self { bands })
    }

    /// Build the catalog described by a progression configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configured bands collide
    pub fn from_config(config: &ProgressionConfig) -> AppResult<Self> {
        Self::new(config.bands.clone())
    }

    /// Bands in ascending order
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Look up a band by color
    #[must_use]
    pub fn get(&self, color: &str) -> Option<&Band> {
        self.bands.iter().find(|band| band.color == color)
    }

    /// Nominal resistance of a color, `None` if the color is unknown
    #[must_use]
    pub fn resistance_of(&self, color: &str) -> Option<f64> {
        self.get(color).map(|band| band.resistance_value)
    }

    /// Band adjacent to `color` in `direction` for the given band type
    ///
    /// For resistance bands, harder means the next higher order. For
    /// assistance bands, harder means the next lower order. Returns `None`
    /// at either end of the catalog or for an unknown color.
    #[must_use]
    pub fn neighbor(
        &self,
        color: &str,
        band_type: BandType,
        direction: BandDirection,
    ) -> Option<&Band> {
        let index = self.bands.iter().position(|band| band.color == color)?;
        if Self::moves_up(band_type, direction) {
            self.bands.get(index + 1)
        } else {
            index.checked_sub(1).and_then(|below| self.bands.get(below))
        }
    }

    /// Most difficult band for the given band type
    #[must_use]
    pub fn hardest(&self, band_type: BandType) -> Option<&Band> {
        if Self::moves_up(band_type, BandDirection::Harder) {
            self.bands.last()
        } else {
            self.bands.first()
        }
    }

    /// Least difficult band for the given band type
    #[must_use]
    pub fn easiest(&self, band_type: BandType) -> Option<&Band> {
        if Self::moves_up(band_type, BandDirection::Easier) {
            self.bands.last()
        } else {
            self.bands.first()
        }
    }

    /// Number of bands
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the catalog holds no bands
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether moving in `direction` means ascending order
    const fn moves_up(band_type: BandType, direction: BandDirection) -> bool {
        matches!(
            (band_type, direction),
            (BandType::Resistance, BandDirection::Harder)
                | (BandType::Assistance, BandDirection::Easier)
        )
    }
}

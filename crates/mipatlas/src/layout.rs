//! Atlas geometry: level count, canvas size and level placement.
//!
//! The atlas keeps the original image at the origin and stacks every smaller
//! level in a single column to its right:
//!
//! ```text
//! +----------------+--------+
//! |                |   1    |
//! |                |        |
//! |       0        +----+---+
//! |                | 2  |
//! |                +--+-+
//! |                |3 |
//! |                +--+
//! +----------------+
//! ```

/// Number of mip levels for an image, including the original.
///
/// This is `floor(log2(max(width, height))) + 1`, or 0 for an empty image.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    width.max(height).checked_ilog2().map_or(0, |log| log + 1)
}

/// Size of the atlas canvas for a source of the given size.
///
/// The reserved column is as wide as level 1; every later level is narrower.
pub fn canvas_size(width: u32, height: u32) -> (u32, u32) {
    (width + width / 2, height)
}

/// Dimension of a level after halving `dim` once per level, with floor
/// division at every step.
pub fn mip_dimension(dim: u32, index: u32) -> u32 {
    (0..index).fold(dim, |d, _| d / 2)
}

/// A single level of the mip chain and its placement in the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipLevel {
    /// Level index (0 is the original image).
    pub index: u32,
    /// Level width in pixels.
    pub width: u32,
    /// Level height in pixels.
    pub height: u32,
    /// Left edge in the canvas.
    pub x: u32,
    /// Top edge in the canvas.
    pub y: u32,
}

impl MipLevel {
    /// Whether the level covers no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Complete placement plan for an atlas, computed from the source size alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasLayout {
    source_height: u32,
    canvas_width: u32,
    canvas_height: u32,
    levels: Vec<MipLevel>,
}

impl AtlasLayout {
    /// Plan the atlas for a source of `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        let mip_levels = mip_level_count(width, height);
        let (canvas_width, canvas_height) = canvas_size(width, height);

        let mut levels = Vec::with_capacity(mip_levels as usize);
        if mip_levels > 0 {
            levels.push(MipLevel {
                index: 0,
                width,
                height,
                x: 0,
                y: 0,
            });
        }

        let mut offset = 0;
        for index in 1..mip_levels {
            let level_height = mip_dimension(height, index);
            levels.push(MipLevel {
                index,
                width: mip_dimension(width, index),
                height: level_height,
                x: width,
                y: offset,
            });
            offset += level_height;
        }

        Self {
            source_height: height,
            canvas_width,
            canvas_height,
            levels,
        }
    }

    /// Canvas width.
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height.
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Number of levels, including the original.
    pub fn mip_levels(&self) -> u32 {
        self.levels.len() as u32
    }

    /// All levels in order, starting with the original.
    pub fn levels(&self) -> &[MipLevel] {
        &self.levels
    }

    /// Levels placed in the side column (index 1 and up).
    pub fn mip_chain(&self) -> &[MipLevel] {
        self.levels.get(1..).unwrap_or(&[])
    }

    /// Source height plus the heights of every level in the side column.
    ///
    /// The halved heights always sum to less than the source height, so the
    /// column itself fits inside the canvas.
    pub fn used_height(&self) -> u32 {
        self.source_height + self.mip_chain().iter().map(|l| l.height).sum::<u32>()
    }
}

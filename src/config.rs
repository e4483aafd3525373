//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_PAGES, MAX_ROWS};

/// Default column offset: 132-column RAM centred behind a 128-column panel
pub const DEFAULT_COLUMN_OFFSET: u8 = 2;

/// Panels taller than this use the large splash image
pub const SPLASH_HEIGHT_THRESHOLD: u16 = 32;

/// Physical panel dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (RAM columns used by the panel)
    pub width: u16,
    /// Height in pixels (COM rows scanned)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_COLUMNS (132)
    /// - height is 0 or > MAX_ROWS (64)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages the panel occupies
    pub fn pages(&self) -> u8 {
        self.height.div_ceil(8) as u8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Number of clockwise quarter turns (0-3)
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
        }
    }

    /// Whether logical axes are swapped relative to the panel
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = BuilderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rotate0),
            1 => Ok(Self::Rotate90),
            2 => Ok(Self::Rotate180),
            3 => Ok(Self::Rotate270),
            other => Err(BuilderError::InvalidRotation(other)),
        }
    }
}

/// Panel-specific register values chosen from the panel size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelProfile {
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Start-up contrast
    pub contrast: u8,
}

/// Known panels: (width, height, COM pins, contrast)
const KNOWN_PANELS: [(u16, u16, u8, u8); 4] = [
    (128, 64, 0x12, 0x8F),
    (128, 32, 0x02, 0x8F),
    (96, 16, 0x02, 0xAF),
    (64, 48, 0x12, 0x8F),
];

impl PanelProfile {
    /// Profile used when the panel size is not recognised
    pub const DEFAULT: Self = Self {
        com_pins: 0x12,
        contrast: 0x8F,
    };

    /// Look up the profile for a panel, falling back to [`PanelProfile::DEFAULT`]
    pub fn for_dimensions(dimensions: Dimensions) -> Self {
        KNOWN_PANELS
            .iter()
            .find(|(w, h, _, _)| *w == dimensions.width && *h == dimensions.height)
            .map_or_else(
                || {
                    log::debug!(
                        "no panel profile for {}x{}, using default",
                        dimensions.width,
                        dimensions.height
                    );
                    Self::DEFAULT
                },
                |&(_, _, com_pins, contrast)| Self { com_pins, contrast },
            )
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SH1106 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Physical panel dimensions
    pub dimensions: Dimensions,
    /// Initial display rotation
    pub rotation: Rotation,
    /// Skip the splash image and start with a blank screen
    pub no_splash: bool,
    /// RAM column shown at panel column 0
    pub column_offset: u8,
    /// RAM page shown at panel page 0
    pub page_offset: u8,
    /// Display offset register (vertical COM shift)
    pub display_offset: u8,
    /// Display start line register
    pub start_line: u8,
    /// Register values derived from the panel size
    pub profile: PanelProfile,
}

impl Config {
    /// Get the rotated (logical) dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        rotated(self.dimensions, self.rotation)
    }

    /// Multiplex ratio register value (rows scanned minus one)
    pub fn multiplex_ratio(&self) -> u8 {
        (self.dimensions.height - 1) as u8
    }
}

/// Dimensions as seen by a caller drawing at `rotation`
pub fn rotated(dimensions: Dimensions, rotation: Rotation) -> Dimensions {
    if rotation.swaps_axes() {
        Dimensions {
            width: dimensions.height,
            height: dimensions.width,
        }
    } else {
        dimensions
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use sh1106_oled::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.column_offset, 2);
/// assert_eq!(config.profile.com_pins, 0x12);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Skip the splash image
    no_splash: bool,
    /// RAM column offset
    column_offset: u8,
    /// RAM page offset
    page_offset: u8,
    /// Display offset register
    display_offset: u8,
    /// Start line register
    start_line: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            no_splash: false,
            column_offset: DEFAULT_COLUMN_OFFSET,
            page_offset: 0,
            display_offset: 0,
            start_line: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Skip the splash image during initialization
    pub fn no_splash(mut self, value: bool) -> Self {
        self.no_splash = value;
        self
    }

    /// Set the RAM column offset (default 2)
    pub fn column_offset(mut self, value: u8) -> Self {
        self.column_offset = value;
        self
    }

    /// Set the RAM page offset (default 0)
    pub fn page_offset(mut self, value: u8) -> Self {
        self.page_offset = value;
        self
    }

    /// Set the display offset register (default 0)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display start line register (default 0)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or a range error if an offset or register value cannot be represented.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;

        if u16::from(self.column_offset) + dimensions.width > MAX_COLUMNS {
            return Err(BuilderError::ColumnOffsetOutOfRange {
                offset: self.column_offset,
                width: dimensions.width,
            });
        }
        let pages = dimensions.pages();
        if u16::from(self.page_offset) + u16::from(pages) > u16::from(MAX_PAGES) {
            return Err(BuilderError::PageOffsetOutOfRange {
                offset: self.page_offset,
                pages,
            });
        }
        if self.display_offset > 63 {
            return Err(BuilderError::DisplayOffsetOutOfRange(self.display_offset));
        }
        if self.start_line > 63 {
            return Err(BuilderError::StartLineOutOfRange(self.start_line));
        }

        Ok(Config {
            dimensions,
            rotation: self.rotation,
            no_splash: self.no_splash,
            column_offset: self.column_offset,
            page_offset: self.page_offset,
            display_offset: self.display_offset,
            start_line: self.start_line,
            profile: PanelProfile::for_dimensions(dimensions),
        })
    }
}

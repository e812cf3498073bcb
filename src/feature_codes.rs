//! The built-in feature table: per-code metadata for the VCP feature
//! codes defined by MCCS 2.0, 2.1, 2.2, and 3.0.
//!
//! Codes 0xE0-0xFF are reserved for manufacturer use and never appear
//! here. Rows are populated only where a revision defined or changed
//! something; resolution falls through to earlier rows per aspect.

use paste::paste;

use crate::const_feature;
use crate::flags::{FeatureFlags, FeatureSubsets, SpecGroups};
use crate::formatters::FormatterTag;
use crate::registry::FeatureEntry;
use crate::version::VersionBand::{V2_0, V2_1, V2_2, V3_0};

// Well-known code constants.

const_feature!(0x01, DEGAUSS);
const_feature!(0x02, NEW_CONTROL_VALUE);
const_feature!(0x04, RESTORE_FACTORY_DEFAULTS);
const_feature!(0x08, RESTORE_COLOR_DEFAULTS);
const_feature!(0x0c, COLOR_TEMPERATURE_REQUEST);
const_feature!(0x10, BRIGHTNESS);
const_feature!(0x12, CONTRAST);
const_feature!(0x14, SELECT_COLOR_PRESET);
const_feature!(0x16, VIDEO_GAIN_RED);
const_feature!(0x18, VIDEO_GAIN_GREEN);
const_feature!(0x1a, VIDEO_GAIN_BLUE);
const_feature!(0x1e, AUTO_SETUP);
const_feature!(0x60, INPUT_SOURCE);
const_feature!(0x62, AUDIO_SPEAKER_VOLUME);
const_feature!(0x73, LUT_SIZE);
const_feature!(0x8d, AUDIO_MUTE);
const_feature!(0x90, HUE);
const_feature!(0xac, HORIZONTAL_FREQUENCY);
const_feature!(0xae, VERTICAL_FREQUENCY);
const_feature!(0xb2, FLAT_PANEL_SUBPIXEL_LAYOUT);
const_feature!(0xb6, DISPLAY_TECHNOLOGY_TYPE);
const_feature!(0xc0, DISPLAY_USAGE_TIME);
const_feature!(0xc8, DISPLAY_CONTROLLER_TYPE);
const_feature!(0xc9, DISPLAY_FIRMWARE_LEVEL);
const_feature!(0xca, OSD);
const_feature!(0xcc, OSD_LANGUAGE);
const_feature!(0xd6, POWER_MODE);
const_feature!(0xdc, DISPLAY_APPLICATION);
const_feature!(0xdf, VCP_VERSION);

// Flag shorthands for the table below.

const RW_CONT: FeatureFlags = FeatureFlags::RW.union(FeatureFlags::STD_CONT);
const RO_CONT: FeatureFlags = FeatureFlags::RO.union(FeatureFlags::STD_CONT);
const RO_CCONT: FeatureFlags = FeatureFlags::RO.union(FeatureFlags::COMPLEX_CONT);
const RW_SNC: FeatureFlags = FeatureFlags::RW.union(FeatureFlags::SIMPLE_NC);
const RO_SNC: FeatureFlags = FeatureFlags::RO.union(FeatureFlags::SIMPLE_NC);
const RW_CNC: FeatureFlags = FeatureFlags::RW.union(FeatureFlags::COMPLEX_NC);
const RO_CNC: FeatureFlags = FeatureFlags::RO.union(FeatureFlags::COMPLEX_NC);
const WO_NC: FeatureFlags = FeatureFlags::WO.union(FeatureFlags::WO_NC);
const RW_TABLE: FeatureFlags = FeatureFlags::RW.union(FeatureFlags::NORMAL_TABLE);
const RO_TABLE: FeatureFlags = FeatureFlags::RO.union(FeatureFlags::NORMAL_TABLE);
const WO_TABLE: FeatureFlags = FeatureFlags::WO.union(FeatureFlags::WO_TABLE);
const DEPRECATED: FeatureFlags = FeatureFlags::DEPRECATED;

const G_PRESET: SpecGroups = SpecGroups::PRESET;
const G_IMAGE: SpecGroups = SpecGroups::IMAGE;
const G_GEOMETRY: SpecGroups = SpecGroups::GEOMETRY;
const G_MISC: SpecGroups = SpecGroups::MISC;
const G_AUDIO: SpecGroups = SpecGroups::AUDIO;
const G_DPVL: SpecGroups = SpecGroups::DPVL;
const G_WINDOW: SpecGroups = SpecGroups::WINDOW;

const S_PROFILE: FeatureSubsets = FeatureSubsets::PROFILE;
const S_COLOR: FeatureSubsets = FeatureSubsets::COLOR;
const S_LUT: FeatureSubsets = FeatureSubsets::LUT;
const S_CRT: FeatureSubsets = FeatureSubsets::CRT;
const S_TV: FeatureSubsets = FeatureSubsets::TV;
const S_AUDIO: FeatureSubsets = FeatureSubsets::AUDIO;
const S_WINDOW: FeatureSubsets = FeatureSubsets::WINDOW;
const S_DPVL: FeatureSubsets = FeatureSubsets::DPVL;

// Value-name tables.

static X02_NEW_CONTROL_VALUES: &[(u8, &str)] = &[
    (0x01, "No new control values"),
    (0x02, "One or more new control values are present"),
    (0xff, "No user controls are present"),
];

static X03_SOFT_CONTROLS_VALUES: &[(u8, &str)] = &[
    (0x00, "No button active"),
    (0x01, "Power button"),
    (0x02, "Adjust up button"),
    (0x03, "Adjust down button"),
    (0x04, "Cancel button"),
    (0x05, "Input button"),
    (0x06, "On screen display button"),
    (0x07, "Adjust button"),
];

static X14_COLOR_PRESET_VALUES: &[(u8, &str)] = &[
    (0x01, "sRGB"),
    (0x02, "Display Native"),
    (0x03, "4000 K"),
    (0x04, "5000 K"),
    (0x05, "6500 K"),
    (0x06, "7500 K"),
    (0x07, "8200 K"),
    (0x08, "9300 K"),
    (0x09, "10000 K"),
    (0x0a, "11500 K"),
    (0x0b, "User 1"),
    (0x0c, "User 2"),
    (0x0d, "User 3"),
];

static X1E_AUTO_SETUP_VALUES: &[(u8, &str)] = &[
    (0x00, "Auto setup not active"),
    (0x01, "Performing auto setup"),
    (0x02, "Enable continuous/periodic auto setup"),
];

static X60_INPUT_SOURCE_VALUES: &[(u8, &str)] = &[
    (0x01, "VGA-1"),
    (0x02, "VGA-2"),
    (0x03, "DVI-1"),
    (0x04, "DVI-2"),
    (0x05, "Composite video 1"),
    (0x06, "Composite video 2"),
    (0x07, "S-video 1"),
    (0x08, "S-video 2"),
    (0x09, "Tuner 1"),
    (0x0a, "Tuner 2"),
    (0x0b, "Tuner 3"),
    (0x0c, "Component video (YPbPr/YCbCr) 1"),
    (0x0d, "Component video (YPbPr/YCbCr) 2"),
    (0x0e, "Component video (YPbPr/YCbCr) 3"),
    (0x0f, "DisplayPort-1"),
    (0x10, "DisplayPort-2"),
    (0x11, "HDMI-1"),
    (0x12, "HDMI-2"),
];

static X63_SPEAKER_SELECT_VALUES: &[(u8, &str)] = &[
    (0x00, "Front L/R"),
    (0x01, "Side L/R"),
    (0x02, "Rear L/R"),
    (0x03, "Center/Subwoofer"),
];

static X66_AMBIENT_LIGHT_SENSOR_VALUES: &[(u8, &str)] = &[
    (0x01, "Disabled"),
    (0x02, "Enabled"),
];

static X82_HORIZONTAL_MIRROR_VALUES: &[(u8, &str)] = &[
    (0x00, "Normal mode"),
    (0x01, "Mirrored horizontally"),
];

static X84_VERTICAL_MIRROR_VALUES: &[(u8, &str)] = &[
    (0x00, "Normal mode"),
    (0x01, "Mirrored vertically"),
];

static X86_DISPLAY_SCALING_VALUES: &[(u8, &str)] = &[
    (0x01, "No scaling"),
    (0x02, "Max image, no aspect ratio distortion"),
    (0x03, "Max vertical image, no aspect ratio distortion"),
    (0x04, "Max horizontal image, no aspect ratio distortion"),
    (0x05, "Max vertical image with aspect ratio distortion"),
    (0x06, "Max horizontal image with aspect ratio distortion"),
    (0x07, "Linear expansion (compression) on horizontal axis"),
    (0x08, "Linear expansion (compression) on horizontal and vertical axes"),
    (0x09, "Squeeze mode"),
    (0x0a, "Non-linear expansion"),
];

static X8D_AUDIO_MUTE_VALUES: &[(u8, &str)] = &[
    (0x01, "Mute the audio"),
    (0x02, "Unmute the audio"),
];

static X94_AUDIO_STEREO_MODE_VALUES: &[(u8, &str)] = &[
    (0x00, "Speaker off/Audio not supported"),
    (0x01, "Mono"),
    (0x02, "Stereo"),
    (0x03, "Stereo expanded"),
];

static X99_WINDOW_CONTROL_VALUES: &[(u8, &str)] = &[
    (0x00, "No effect"),
    (0x01, "Off"),
    (0x02, "On"),
];

static XA2_AUTO_SETUP_VALUES: &[(u8, &str)] = &[
    (0x01, "Off"),
    (0x02, "On"),
];

static XA5_WINDOW_SELECT_VALUES: &[(u8, &str)] = &[
    (0x00, "Full display image area selected except active windows"),
    (0x01, "Window 1 selected"),
    (0x02, "Window 2 selected"),
];

static XAA_SCREEN_ORIENTATION_VALUES: &[(u8, &str)] = &[
    (0x01, "0 degrees"),
    (0x02, "90 degrees"),
    (0x03, "180 degrees"),
    (0x04, "270 degrees"),
    (0xff, "Display cannot supply orientation"),
];

static XB0_SETTINGS_VALUES: &[(u8, &str)] = &[
    (0x01, "Store current settings in the monitor"),
    (0x02, "Restore factory defaults for current mode"),
];

static XB2_FLAT_PANEL_SUBPIXEL_LAYOUT_VALUES: &[(u8, &str)] = &[
    (0x00, "Sub-pixel layout not defined"),
    (0x01, "Red/Green/Blue vertical stripe"),
    (0x02, "Red/Green/Blue horizontal stripe"),
    (0x03, "Blue/Green/Red vertical stripe"),
    (0x04, "Blue/Green/Red horizontal stripe"),
    (0x05, "Quad-pixel, red at top left"),
    (0x06, "Quad-pixel, red at bottom left"),
    (0x07, "Delta (triad)"),
    (0x08, "Mosaic"),
];

static XB6_DISPLAY_TECHNOLOGY_VALUES: &[(u8, &str)] = &[
    (0x01, "CRT (shadow mask)"),
    (0x02, "CRT (aperture grill)"),
    (0x03, "LCD (active matrix)"),
    (0x04, "LCoS"),
    (0x05, "Plasma"),
    (0x06, "OLED"),
    (0x07, "EL"),
    (0x08, "MEM"),
];

static XBE_LINK_CONTROL_VALUES: &[(u8, &str)] = &[
    (0x00, "Link shutdown is disabled"),
    (0x01, "Link shutdown is enabled"),
];

static XC8_DISPLAY_CONTROLLER_VALUES: &[(u8, &str)] = &[
    (0x01, "Conexant"),
    (0x02, "Genesis"),
    (0x03, "Macronix"),
    (0x04, "IDT"),
    (0x05, "Mstar"),
    (0x06, "Novatek"),
    (0x07, "STMicroelectronics"),
    (0x08, "Realtek"),
    (0x09, "Parade"),
];

static XCA_OSD_VALUES: &[(u8, &str)] = &[
    (0x01, "OSD disabled"),
    (0x02, "OSD enabled"),
    (0xff, "Display cannot supply this information"),
];

static XCC_OSD_LANGUAGE_VALUES: &[(u8, &str)] = &[
    (0x00, "Reserved value, must be ignored"),
    (0x01, "Chinese (traditional, Hantai)"),
    (0x02, "English"),
    (0x03, "French"),
    (0x04, "German"),
    (0x05, "Italian"),
    (0x06, "Japanese"),
    (0x07, "Korean"),
    (0x08, "Portuguese (Portugal)"),
    (0x09, "Russian"),
    (0x0a, "Spanish"),
    (0x0b, "Swedish"),
    (0x0c, "Turkish"),
    (0x0d, "Chinese (simplified, Kantai)"),
    (0x0e, "Portuguese (Brazil)"),
    (0x0f, "Arabic"),
    (0x10, "Bulgarian"),
    (0x11, "Croatian"),
    (0x12, "Czech"),
    (0x13, "Danish"),
    (0x14, "Dutch"),
    (0x15, "Estonian"),
    (0x16, "Finnish"),
    (0x17, "Greek"),
    (0x18, "Hebrew"),
    (0x19, "Hindi"),
    (0x1a, "Hungarian"),
    (0x1b, "Latvian"),
    (0x1c, "Lithuanian"),
    (0x1d, "Norwegian"),
    (0x1e, "Polish"),
    (0x1f, "Romanian"),
    (0x20, "Serbian"),
    (0x21, "Slovak"),
    (0x22, "Slovenian"),
    (0x23, "Thai"),
    (0x24, "Ukrainian"),
    (0x25, "Vietnamese"),
];

static XD4_STEREO_VIDEO_MODE_VALUES: &[(u8, &str)] = &[
    (0x00, "Stereo video off"),
    (0x01, "Field-sequential, right eye first"),
    (0x02, "Field-sequential, left eye first"),
    (0x03, "Two-way interleaved, right eye first"),
    (0x04, "Two-way interleaved, left eye first"),
];

static XD6_POWER_MODE_VALUES: &[(u8, &str)] = &[
    (0x01, "DPM: On,  DPMS: Off"),
    (0x02, "DPM: Off, DPMS: Standby"),
    (0x03, "DPM: Off, DPMS: Suspend"),
    (0x04, "DPM: Off, DPMS: Off"),
    (0x05, "Write only value to turn off display"),
];

static XD7_AUX_POWER_VALUES: &[(u8, &str)] = &[
    (0x01, "Disable auxiliary power"),
    (0x02, "Enable auxiliary power"),
];

static XDA_SCAN_MODE_VALUES: &[(u8, &str)] = &[
    (0x00, "Normal operation"),
    (0x01, "Underscan"),
    (0x02, "Overscan"),
    (0x03, "Widescreen"),
];

static XDB_IMAGE_MODE_VALUES: &[(u8, &str)] = &[
    (0x00, "No effect"),
    (0x01, "Full mode"),
    (0x02, "Zoom mode"),
    (0x03, "Squeeze mode"),
    (0x04, "Variable"),
];

static XDC_DISPLAY_APPLICATION_VALUES: &[(u8, &str)] = &[
    (0x00, "Standard/Default mode"),
    (0x01, "Productivity"),
    (0x02, "Mixed"),
    (0x03, "Movie"),
    (0x04, "User defined"),
    (0x05, "Games"),
    (0x06, "Sports"),
    (0x07, "Professional (all signal processing disabled)"),
    (0x08, "Standard/Default mode with intermediate power consumption"),
    (0x09, "Standard/Default mode with low power consumption"),
    (0x0a, "Demonstration"),
    (0xf0, "Dynamic contrast"),
];

/// Builds the full feature table, in ascending code order.
pub(crate) fn build_feature_table() -> Vec<FeatureEntry> {
    vec![
        //
        // Preset operations
        //
        FeatureEntry::builder(0x01, "Perform a degauss cycle")
            .groups(G_PRESET)
            .subsets(S_CRT)
            .row(V2_0, "Degauss", WO_NC)
            .build(),
        FeatureEntry::builder(0x02, "Indicates that a display user control (other than power) has been used")
            .groups(G_MISC)
            .row(V2_0, "New control value", RW_SNC)
            .row_values(V2_0, X02_NEW_CONTROL_VALUES)
            .build(),
        FeatureEntry::builder(0x03, "Allows display controls to be used as soft keys")
            .groups(G_MISC)
            .row(V2_0, "Soft controls", RW_SNC)
            .row_values(V2_0, X03_SOFT_CONTROLS_VALUES)
            .build(),
        FeatureEntry::builder(0x04, "Restore all factory presets including brightness/contrast")
            .groups(G_PRESET)
            .row(V2_0, "Restore factory defaults", WO_NC)
            .build(),
        FeatureEntry::builder(0x05, "Restore factory defaults for brightness and contrast")
            .groups(G_PRESET)
            .row(V2_0, "Restore factory brightness/contrast defaults", WO_NC)
            .build(),
        FeatureEntry::builder(0x06, "Restore factory defaults for geometry adjustments")
            .groups(G_PRESET.union(G_GEOMETRY))
            .row(V2_0, "Restore factory geometry defaults", WO_NC)
            .build(),
        FeatureEntry::builder(0x08, "Restore factory defaults for color settings")
            .groups(G_PRESET)
            .subsets(S_COLOR)
            .row(V2_0, "Restore color defaults", WO_NC)
            .build(),
        FeatureEntry::builder(0x0b, "Color temperature increment used by feature 0Ch Color temperature request")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "Color temperature increment", RO_CNC)
            .build(),
        FeatureEntry::builder(0x0c, "Specifies color temperature (degrees Kelvin)")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "Color temperature request", RW_CONT)
            .build(),
        FeatureEntry::builder(0x0e, "Increase/decrease the sampling clock frequency")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Clock", RW_CONT)
            .build(),
        //
        // Image adjustment
        //
        FeatureEntry::builder(0x10, "Adjust the brightness of the image")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Brightness", RW_CONT)
            .row_name(V3_0, "Luminosity")
            .build(),
        FeatureEntry::builder(0x11, "Select contrast enhancement algorithm respecting flesh tone region")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "Flesh tone enhancement", RW_CNC)
            .build(),
        FeatureEntry::builder(0x12, "Adjust the contrast of the image")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Contrast", RW_CONT)
            .build(),
        FeatureEntry::builder(0x13, "Increase/decrease the specified backlight control value")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "Backlight control", RW_CONT)
            .row(V2_1, "Backlight control", DEPRECATED)
            .build(),
        FeatureEntry::builder(0x14, "Select a specified color temperature")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Select color preset", RW_SNC)
            .row_values(V2_0, X14_COLOR_PRESET_VALUES)
            .row(V3_0, "Select color preset", RW_CNC)
            .row_values(V3_0, X14_COLOR_PRESET_VALUES)
            .formatter(FormatterTag::ColorPreset)
            .build(),
        FeatureEntry::builder(0x16, "Increase/decrease the luminesence of red pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video gain: Red", RW_CONT)
            .build(),
        FeatureEntry::builder(0x17, "Increase/decrease the degree of compensation")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "User color vision compensation", RW_CONT)
            .build(),
        FeatureEntry::builder(0x18, "Increase/decrease the luminesence of green pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video gain: Green", RW_CONT)
            .build(),
        FeatureEntry::builder(0x1a, "Increase/decrease the luminesence of blue pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video gain: Blue", RW_CONT)
            .build(),
        FeatureEntry::builder(0x1c, "Increase/decrease the focus of the image")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Focus", RW_CONT)
            .build(),
        FeatureEntry::builder(0x1e, "Perform automatic setup of the display")
            .groups(G_IMAGE)
            .row(V2_0, "Auto setup", RW_SNC)
            .row_values(V2_0, X1E_AUTO_SETUP_VALUES)
            .build(),
        FeatureEntry::builder(0x1f, "Perform automatic color setup of the display")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_1, "Auto color setup", RW_SNC)
            .row_values(V2_1, X1E_AUTO_SETUP_VALUES)
            .build(),
        //
        // Geometry
        //
        FeatureEntry::builder(0x20, "Increasing (decreasing) this value moves the image toward the right (left) of the display")
            .groups(G_GEOMETRY)
            .row(V2_0, "Horizontal Position (Phase)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x22, "Increase/decrease the width of the image")
            .groups(G_GEOMETRY)
            .row(V2_0, "Horizontal Size", RW_CONT)
            .build(),
        FeatureEntry::builder(0x24, "Increasing (decreasing) this value causes the right and left sides of the image to become more (less) convex")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Pincushion", RW_CONT)
            .build(),
        FeatureEntry::builder(0x26, "Increasing (decreasing) this value moves the center section of the image toward the right (left) side of the display")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Pincushion Balance", RW_CONT)
            .build(),
        FeatureEntry::builder(0x28, "Increase/decrease the separation of the red and blue horizontal components of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Convergence R/B", RW_CONT)
            .build(),
        FeatureEntry::builder(0x29, "Increase/decrease the separation of the magenta and green horizontal components of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_2, "Horizontal Convergence M/G", RW_CONT)
            .build(),
        FeatureEntry::builder(0x2a, "Increase/decrease the density of pixels in the image center")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Linearity", RW_CONT)
            .build(),
        FeatureEntry::builder(0x2c, "Increasing (decreasing) this value shifts the density of pixels from the left (right) side to the right (left) side of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Linearity Balance", RW_CONT)
            .build(),
        FeatureEntry::builder(0x30, "Increasing (decreasing) this value moves the image toward the top (bottom) edge of the display")
            .groups(G_GEOMETRY)
            .row(V2_0, "Vertical Position (Phase)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x32, "Increase/decrease the height of the image")
            .groups(G_GEOMETRY)
            .row(V2_0, "Vertical Size", RW_CONT)
            .build(),
        FeatureEntry::builder(0x34, "Increasing (decreasing) this value causes the top and bottom edges of the image to become more (less) convex")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Pincushion", RW_CONT)
            .build(),
        FeatureEntry::builder(0x36, "Increasing (decreasing) this value moves the center section of the image toward the top (bottom) edge of the display")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Pincushion Balance", RW_CONT)
            .build(),
        FeatureEntry::builder(0x38, "Increase/decrease the separation of the red and blue vertical components of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Convergence R/B", RW_CONT)
            .build(),
        FeatureEntry::builder(0x39, "Increase/decrease the separation of the magenta and green vertical components of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_2, "Vertical Convergence M/G", RW_CONT)
            .build(),
        FeatureEntry::builder(0x3a, "Increase/decrease the density of scan lines in the image center")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Linearity", RW_CONT)
            .build(),
        FeatureEntry::builder(0x3c, "Increasing (decreasing) this value shifts the density of scan lines from the top (bottom) end to the bottom (top) end of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Linearity Balance", RW_CONT)
            .build(),
        FeatureEntry::builder(0x3e, "Increase/decrease the sampling clock phase shift")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Clock phase", RW_CONT)
            .build(),
        FeatureEntry::builder(0x40, "Increasing (decreasing) this value shifts the top section of the image to the right (left)")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Parallelogram", RW_CONT)
            .build(),
        FeatureEntry::builder(0x41, "Increasing (decreasing) this value shifts the right section of the image up (down)")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_2, "Vertical Parallelogram", RW_CONT)
            .build(),
        FeatureEntry::builder(0x42, "Increasing (decreasing) this value will increase (decrease) the ratio between the horizontal size at the top of the image and the horizontal size at the bottom of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Keystone", RW_CONT)
            .build(),
        FeatureEntry::builder(0x43, "Increasing (decreasing) this value will increase (decrease) the ratio between the vertical size at the left of the image and the vertical size at the right of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Keystone", RW_CONT)
            .build(),
        FeatureEntry::builder(0x44, "Increasing (decreasing) this value rotates the image (counter) clockwise about the center point of the screen")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Rotation", RW_CONT)
            .build(),
        FeatureEntry::builder(0x46, "Increase/decrease the distance between the left and right sides at the top of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Top Corner Flare", RW_CONT)
            .build(),
        FeatureEntry::builder(0x48, "Increasing (decreasing) this value moves the top of the image to the right (left)")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Top Corner Hook", RW_CONT)
            .build(),
        FeatureEntry::builder(0x4a, "Increase/decrease the distance between the left and right sides at the bottom of the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Bottom Corner Flare", RW_CONT)
            .build(),
        FeatureEntry::builder(0x4c, "Increasing (decreasing) this value moves the bottom of the image to the right (left)")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Bottom Corner Hook", RW_CONT)
            .build(),
        //
        // Miscellaneous and audio
        //
        FeatureEntry::builder(0x52, "Read id of one feature that has changed; 0x00 indicates no more")
            .groups(G_MISC)
            .row(V2_0, "Active control", RO_SNC)
            .build(),
        FeatureEntry::builder(0x54, "Controls features aimed at preserving display performance")
            .groups(G_MISC)
            .row(V2_2, "Performance preservation", RW_CNC)
            .build(),
        FeatureEntry::builder(0x56, "Increase/decrease horizontal moire cancellation")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Horizontal Moire", RW_CONT)
            .build(),
        FeatureEntry::builder(0x58, "Increase/decrease vertical moire cancellation")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Vertical Moire", RW_CONT)
            .build(),
        FeatureEntry::builder(0x59, "Adjust the red saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Red", RW_CONT)
            .build(),
        FeatureEntry::builder(0x5a, "Adjust the yellow saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Yellow", RW_CONT)
            .build(),
        FeatureEntry::builder(0x5b, "Adjust the green saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Green", RW_CONT)
            .build(),
        FeatureEntry::builder(0x5c, "Adjust the cyan saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Cyan", RW_CONT)
            .build(),
        FeatureEntry::builder(0x5d, "Adjust the blue saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Blue", RW_CONT)
            .build(),
        FeatureEntry::builder(0x5e, "Adjust the magenta saturation for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "6 axis saturation: Magenta", RW_CONT)
            .build(),
        FeatureEntry::builder(0x60, "Selects active video source")
            .groups(G_MISC)
            .row(V2_0, "Input Source", RW_SNC)
            .row_values(V2_0, X60_INPUT_SOURCE_VALUES)
            .row(V3_0, "Input Source", RW_TABLE)
            .row(V2_2, "Input Source", RW_SNC)
            .row_values(V2_2, X60_INPUT_SOURCE_VALUES)
            .build(),
        FeatureEntry::builder(0x62, "Adjust the audio volume")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_0, "Audio speaker volume", RW_CONT)
            .row(V3_0, "Audio speaker volume", RW_CNC)
            .row(V2_2, "Audio speaker volume", RW_CONT)
            .formatter(FormatterTag::AudioVolume)
            .build(),
        FeatureEntry::builder(0x63, "Selects a group of speakers")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_2, "Speaker Select", RW_SNC)
            .row_values(V2_2, X63_SPEAKER_SELECT_VALUES)
            .build(),
        FeatureEntry::builder(0x64, "Increase/decrease microphone gain")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_0, "Audio: Microphone Volume", RW_CONT)
            .build(),
        FeatureEntry::builder(0x66, "Enable/disable ambient light sensor")
            .groups(G_MISC)
            .row(V2_2, "Ambient light sensor", RW_SNC)
            .row_values(V2_2, X66_AMBIENT_LIGHT_SENSOR_VALUES)
            .build(),
        FeatureEntry::builder(0x6b, "Increase/decrease the white backlight level")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "Backlight Level: White", RW_CONT)
            .build(),
        FeatureEntry::builder(0x6c, "Increase/decrease the black level of red pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video black level: Red", RW_CONT)
            .build(),
        FeatureEntry::builder(0x6d, "Increase/decrease the red backlight level")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "Backlight Level: Red", RW_CONT)
            .build(),
        FeatureEntry::builder(0x6e, "Increase/decrease the black level of green pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video black level: Green", RW_CONT)
            .build(),
        FeatureEntry::builder(0x6f, "Increase/decrease the green backlight level")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "Backlight Level: Green", RW_CONT)
            .build(),
        FeatureEntry::builder(0x70, "Increase/decrease the black level of blue pixels")
            .groups(G_IMAGE)
            .subsets(S_PROFILE.union(S_COLOR))
            .row(V2_0, "Video black level: Blue", RW_CONT)
            .build(),
        FeatureEntry::builder(0x71, "Increase/decrease the blue backlight level")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "Backlight Level: Blue", RW_CONT)
            .build(),
        FeatureEntry::builder(0x72, "Select relative or absolute gamma")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_2, "Gamma", RW_CNC)
            .build(),
        FeatureEntry::builder(0x73, "Provides the size (number of entries and number of bits/entry) for the Red, Green, and Blue LUT in the display")
            .groups(G_IMAGE)
            .subsets(S_LUT)
            .row(V3_0, "LUT Size", RO_TABLE)
            .table_formatter(FormatterTag::LutSize)
            .build(),
        FeatureEntry::builder(0x74, "Writes a single point within the display's LUT, reads a single point from the LUT")
            .groups(G_IMAGE)
            .subsets(S_LUT)
            .row(V3_0, "Single point LUT operation", RW_TABLE)
            .build(),
        FeatureEntry::builder(0x75, "Loads (reads) multiple values into (from) the display's LUT")
            .groups(G_IMAGE)
            .subsets(S_LUT)
            .row(V3_0, "Block LUT operation", RW_TABLE)
            .build(),
        FeatureEntry::builder(0x76, "Initiates a routine resident in the display")
            .groups(G_MISC)
            .row(V3_0, "Remote Procedure Call", WO_TABLE)
            .build(),
        FeatureEntry::builder(0x78, "Causes a selected 128 byte block of Display Identification Data (EDID or Display ID) to be read")
            .groups(G_MISC)
            .row(V2_2, "EDID operation", RO_TABLE)
            .build(),
        FeatureEntry::builder(0x7a, "Increase/decrease the distance to the focal plane of the image")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Adjust Focal Plane", RW_CONT)
            .build(),
        FeatureEntry::builder(0x7c, "Increase/decrease the distance to the zoom function of the projection lens")
            .groups(G_IMAGE)
            .row(V2_0, "Adjust Zoom", RW_CONT)
            .build(),
        FeatureEntry::builder(0x7e, "Increase/decrease the trapezoid distortion in the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Trapezoid", RW_CONT)
            .build(),
        FeatureEntry::builder(0x80, "Increase/decrease the keystone distortion in the image")
            .groups(G_GEOMETRY)
            .subsets(S_CRT)
            .row(V2_0, "Keystone", RW_CONT)
            .build(),
        FeatureEntry::builder(0x82, "Flip the image horizontally about the vertical axis")
            .groups(G_GEOMETRY)
            .row(V2_2, "Horizontal Mirror (Flip)", RW_SNC)
            .row_values(V2_2, X82_HORIZONTAL_MIRROR_VALUES)
            .build(),
        FeatureEntry::builder(0x84, "Flip the image vertically about the horizontal axis")
            .groups(G_GEOMETRY)
            .row(V2_2, "Vertical Mirror (Flip)", RW_SNC)
            .row_values(V2_2, X84_VERTICAL_MIRROR_VALUES)
            .build(),
        FeatureEntry::builder(0x86, "Control the scaling (input vs output) of the display")
            .groups(G_IMAGE)
            .row(V2_0, "Display Scaling", RW_SNC)
            .row_values(V2_0, X86_DISPLAY_SCALING_VALUES)
            .build(),
        FeatureEntry::builder(0x87, "Selects one of a range of algorithms")
            .groups(G_IMAGE)
            .row(V2_0, "Sharpness", RW_CONT)
            .build(),
        FeatureEntry::builder(0x88, "Increase/decrease the velocity scan modulation")
            .groups(G_IMAGE)
            .subsets(S_CRT)
            .row(V2_0, "Velocity Scan Modulation", RW_CONT)
            .build(),
        FeatureEntry::builder(0x8a, "Increase/decrease the amplitude of the color difference components of the video signal")
            .groups(G_IMAGE)
            .subsets(S_COLOR.union(S_TV))
            .row(V2_0, "Color Saturation", RW_CONT)
            .build(),
        FeatureEntry::builder(0x8b, "Increment (1) or decrement (2) the TV channel")
            .groups(G_MISC)
            .subsets(S_TV)
            .row(V2_0, "TV Channel Up/Down", WO_NC)
            .build(),
        FeatureEntry::builder(0x8c, "Increase/decrease the amplitude of the high frequency components of the video signal")
            .groups(G_IMAGE)
            .subsets(S_TV)
            .row(V2_0, "TV Sharpness", RW_CONT)
            .build(),
        FeatureEntry::builder(0x8d, "Mute/unmute the audio")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_0, "Audio Mute", RW_SNC)
            .row_values(V2_0, X8D_AUDIO_MUTE_VALUES)
            .row(V3_0, "Audio Mute/Screen Blank", RW_CNC)
            .formatter(FormatterTag::ShSlLookup)
            .build(),
        FeatureEntry::builder(0x8e, "Increase/decrease the ratio between blacks and whites in the image")
            .groups(G_IMAGE)
            .subsets(S_TV)
            .row(V2_0, "TV Contrast", RW_CONT)
            .build(),
        FeatureEntry::builder(0x8f, "Emphasize/de-emphasize high frequency audio")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_0, "Audio Treble", RW_CONT)
            .row(V3_0, "Audio Treble", RW_CNC)
            .row(V2_2, "Audio Treble", RW_CONT)
            .formatter(FormatterTag::AudioVolume)
            .build(),
        FeatureEntry::builder(0x90, "Increase/decrease the wavelength of the color component of the video signal")
            .groups(G_IMAGE)
            .subsets(S_COLOR.union(S_TV))
            .row(V2_0, "Hue", RW_CONT)
            .build(),
        FeatureEntry::builder(0x91, "Emphasize/de-emphasize low frequency audio")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_0, "Audio Bass", RW_CONT)
            .row(V3_0, "Audio Bass", RW_CNC)
            .row(V2_2, "Audio Bass", RW_CONT)
            .formatter(FormatterTag::AudioVolume)
            .build(),
        FeatureEntry::builder(0x92, "Increase/decrease the black level of the video")
            .groups(G_IMAGE)
            .subsets(S_TV)
            .row(V2_0, "TV Black level/Luminesence", RW_CONT)
            .build(),
        FeatureEntry::builder(0x93, "Balance the left and right audio channels")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_2, "Audio Balance L/R", RW_CONT)
            .build(),
        FeatureEntry::builder(0x94, "Select the audio mode")
            .groups(G_AUDIO)
            .subsets(S_AUDIO)
            .row(V2_2, "Audio Stereo Mode", RW_SNC)
            .row_values(V2_2, X94_AUDIO_STEREO_MODE_VALUES)
            .build(),
        //
        // Window operations
        //
        FeatureEntry::builder(0x95, "Top left X pixel of an area of the image")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window Position (TL_X)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x96, "Top left Y pixel of an area of the image")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window Position (TL_Y)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x97, "Bottom right X pixel of an area of the image")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window Position (BR_X)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x98, "Bottom right Y pixel of an area of the image")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window Position (BR_Y)", RW_CONT)
            .build(),
        FeatureEntry::builder(0x99, "Enables the brightness and color within a window to be different from the desktop")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window control on/off", RW_SNC)
            .row_values(V2_0, X99_WINDOW_CONTROL_VALUES)
            .build(),
        FeatureEntry::builder(0x9a, "Changes the contrast ratio between the area of the window and the rest of the desktop")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Window background", RW_CONT)
            .build(),
        FeatureEntry::builder(0x9b, "Adjust the red hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Red", RW_CONT)
            .build(),
        FeatureEntry::builder(0x9c, "Adjust the yellow hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Yellow", RW_CONT)
            .build(),
        FeatureEntry::builder(0x9d, "Adjust the green hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Green", RW_CONT)
            .build(),
        FeatureEntry::builder(0x9e, "Adjust the cyan hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Cyan", RW_CONT)
            .build(),
        FeatureEntry::builder(0x9f, "Adjust the blue hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Blue", RW_CONT)
            .build(),
        FeatureEntry::builder(0xa0, "Adjust the magenta hue for 6-axis color")
            .groups(G_IMAGE)
            .subsets(S_COLOR)
            .row(V2_0, "6 axis hue: Magenta", RW_CONT)
            .build(),
        FeatureEntry::builder(0xa2, "Turn on/off an auto setup function")
            .groups(G_MISC)
            .row(V2_0, "Auto setup on/off", RW_SNC)
            .row_values(V2_0, XA2_AUTO_SETUP_VALUES)
            .build(),
        FeatureEntry::builder(0xa4, "Turn the selected window operation on/off, window mask")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Turn the selected window operation on/off", RW_CNC)
            .row(V3_0, "Turn the selected window operation on/off", RW_TABLE)
            .build(),
        FeatureEntry::builder(0xa5, "Change selected window (as defined by 95h..98h)")
            .groups(G_WINDOW)
            .subsets(S_WINDOW)
            .row(V2_0, "Change the selected window", RW_SNC)
            .row_values(V2_0, XA5_WINDOW_SELECT_VALUES)
            .build(),
        FeatureEntry::builder(0xaa, "Indicates the orientation of the screen")
            .groups(G_MISC)
            .row(V2_0, "Screen Orientation", RO_SNC)
            .row_values(V2_0, XAA_SCREEN_ORIENTATION_VALUES)
            .build(),
        FeatureEntry::builder(0xac, "Horizontal sync signal frequency as determined by the display")
            .groups(G_MISC)
            .row(V2_0, "Horizontal frequency", RO_CCONT)
            .formatter(FormatterTag::HorizontalFrequency)
            .build(),
        FeatureEntry::builder(0xae, "Vertical sync signal frequency as determined by the display, in .01 hz")
            .groups(G_MISC)
            .row(V2_0, "Vertical frequency", RO_CCONT)
            .formatter(FormatterTag::VerticalFrequency)
            .build(),
        FeatureEntry::builder(0xb0, "Store/restore the user saved values for the current mode")
            .groups(G_PRESET)
            .row(V2_0, "(Re)store user saved values for cur. mode", WO_NC)
            .row_values(V2_0, XB0_SETTINGS_VALUES)
            .build(),
        FeatureEntry::builder(0xb2, "LCD sub-pixel structure")
            .groups(G_MISC)
            .row(V2_0, "Flat panel sub-pixel layout", RO_SNC)
            .row_values(V2_0, XB2_FLAT_PANEL_SUBPIXEL_LAYOUT_VALUES)
            .build(),
        FeatureEntry::builder(0xb4, "Indicates the timing mode being sent by the host")
            .groups(G_MISC)
            .row(V2_2, "Source Timing Mode", RW_CNC)
            .build(),
        FeatureEntry::builder(0xb6, "Indicates the base technology type")
            .groups(G_MISC)
            .row(V2_0, "Display technology type", RO_SNC)
            .row_values(V2_0, XB6_DISPLAY_TECHNOLOGY_VALUES)
            .build(),
        //
        // DPVL support
        //
        FeatureEntry::builder(0xb7, "Video mode and status of a DPVL capable monitor")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Monitor status", RO_CNC)
            .build(),
        FeatureEntry::builder(0xb8, "Packet count")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Packet count", RO_CONT)
            .build(),
        FeatureEntry::builder(0xb9, "Monitor X origin")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Monitor X origin", RW_CONT)
            .build(),
        FeatureEntry::builder(0xba, "Monitor Y origin")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Monitor Y origin", RW_CONT)
            .build(),
        FeatureEntry::builder(0xbb, "Error counter for the DPVL header")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Header error count", RO_CONT)
            .build(),
        FeatureEntry::builder(0xbc, "CRC error counter for the DPVL body")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Body CRC error count", RO_CONT)
            .build(),
        FeatureEntry::builder(0xbd, "Assigned identification number for the monitor")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Client ID", RO_CONT)
            .build(),
        FeatureEntry::builder(0xbe, "Indicates status of the DVI link")
            .groups(G_DPVL)
            .subsets(S_DPVL)
            .row(V3_0, "Link control", RW_SNC)
            .row_values(V3_0, XBE_LINK_CONTROL_VALUES)
            .build(),
        //
        // Miscellaneous status and control
        //
        FeatureEntry::builder(0xc0, "Active power on time in hours")
            .groups(G_MISC)
            .row(V2_0, "Display usage time", RO_CCONT)
            .formatter(FormatterTag::UsageTime)
            .build(),
        FeatureEntry::builder(0xc2, "Length in bytes of non-volatile storage in the display available for writing a display descriptor")
            .groups(G_MISC)
            .row(V2_0, "Display descriptor length", RO_CONT)
            .build(),
        FeatureEntry::builder(0xc3, "Reads (writes) a display descriptor from (to) non-volatile storage in the display")
            .groups(G_MISC)
            .row(V2_0, "Transmit display descriptor", RW_TABLE)
            .build(),
        FeatureEntry::builder(0xc4, "If enabled, the display descriptor shall be displayed when no video is being received")
            .groups(G_MISC)
            .row(V2_0, "Enable display of 'display descriptor'", RW_CNC)
            .build(),
        FeatureEntry::builder(0xc6, "Application enable key")
            .groups(G_MISC)
            .row(V2_0, "Application enable key", RO_CNC)
            .build(),
        FeatureEntry::builder(0xc8, "Mfg id of display controller and 2 byte manufacturer-specific controller type")
            .groups(G_MISC)
            .row(V2_0, "Display controller type", RO_CNC)
            .row_values(V2_0, XC8_DISPLAY_CONTROLLER_VALUES)
            .formatter(FormatterTag::DisplayController)
            .build(),
        FeatureEntry::builder(0xc9, "2 byte firmware level")
            .groups(G_MISC)
            .row(V2_0, "Display firmware level", RO_CCONT)
            .formatter(FormatterTag::SpecVersion)
            .build(),
        FeatureEntry::builder(0xca, "Sets and indicates the current operational state of OSD (and buttons in v2.2)")
            .groups(G_MISC)
            .row(V2_0, "OSD", RW_SNC)
            .row_values(V2_0, XCA_OSD_VALUES)
            .row(V2_2, "OSD/Button Control", RW_CNC)
            .formatter(FormatterTag::ShSlLookup)
            .build(),
        FeatureEntry::builder(0xcc, "On Screen Display language")
            .groups(G_MISC)
            .row(V2_0, "OSD Language", RW_SNC)
            .row_values(V2_0, XCC_OSD_LANGUAGE_VALUES)
            .build(),
        FeatureEntry::builder(0xcd, "Control up to 16 LED (or similar) indicators to indicate system status")
            .groups(G_MISC)
            .row(V2_2, "Status Indicators", RW_CNC)
            .build(),
        FeatureEntry::builder(0xce, "Rows and characters/row of auxiliary display")
            .groups(G_MISC)
            .row(V2_2, "Auxiliary display size", RO_CNC)
            .build(),
        FeatureEntry::builder(0xcf, "Sends data to an auxiliary display attached to the display")
            .groups(G_MISC)
            .row(V2_2, "Auxiliary display data", WO_TABLE)
            .build(),
        FeatureEntry::builder(0xd0, "Selects the video output of a display with multiple outputs")
            .groups(G_MISC)
            .row(V2_2, "Output select", RW_SNC)
            .row_values(V2_2, X60_INPUT_SOURCE_VALUES)
            .build(),
        FeatureEntry::builder(0xd2, "Read an Asset Tag to/from the display")
            .groups(G_MISC)
            .row(V2_2, "Asset Tag", RO_TABLE)
            .build(),
        FeatureEntry::builder(0xd4, "Controls the stereo video mode of the display")
            .groups(G_MISC)
            .row(V2_2, "Stereo video mode", RW_SNC)
            .row_values(V2_2, XD4_STEREO_VIDEO_MODE_VALUES)
            .build(),
        FeatureEntry::builder(0xd6, "DPM and DPMS status")
            .groups(G_MISC)
            .row(V2_0, "Power mode", RW_SNC)
            .row_values(V2_0, XD6_POWER_MODE_VALUES)
            .build(),
        FeatureEntry::builder(0xd7, "Controls an auxiliary power output from a display to a host device")
            .groups(G_MISC)
            .row(V2_2, "Auxiliary power output", RW_SNC)
            .row_values(V2_2, XD7_AUX_POWER_VALUES)
            .build(),
        FeatureEntry::builder(0xda, "Controls scan characteristics (aka format)")
            .groups(G_GEOMETRY)
            .row(V2_0, "Scan mode", RW_SNC)
            .row_values(V2_0, XDA_SCAN_MODE_VALUES)
            .build(),
        FeatureEntry::builder(0xdb, "Controls aspects of the displayed image (TV applications)")
            .groups(G_MISC)
            .subsets(S_TV)
            .row(V2_2, "Image Mode", RW_SNC)
            .row_values(V2_2, XDB_IMAGE_MODE_VALUES)
            .build(),
        FeatureEntry::builder(0xdc, "Type of application used on display")
            .groups(G_MISC)
            .row(V2_0, "Display Mode", RW_SNC)
            .row_values(V2_0, XDC_DISPLAY_APPLICATION_VALUES)
            .build(),
        FeatureEntry::builder(0xde, "Operation mode (2.0) or scratch pad (3.0)")
            .groups(G_MISC)
            .row(V2_2, "Scratch Pad", RW_CNC)
            .build(),
        FeatureEntry::builder(0xdf, "MCCS version")
            .groups(G_MISC)
            .row(V2_0, "VCP Version", RO_CCONT)
            .formatter(FormatterTag::SpecVersion)
            .build(),
    ]
}

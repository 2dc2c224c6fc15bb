//! Enumerations exposed to scene descriptions.

use scene_registry::{Enumeration, RegistryResult};

/// deck.gl `COORDINATE_SYSTEM`.
pub fn coordinate_system() -> RegistryResult<Enumeration> {
    Enumeration::new(
        "COORDINATE_SYSTEM",
        [
            ("DEFAULT", -1),
            ("CARTESIAN", 0),
            ("LNGLAT", 1),
            ("METER_OFFSETS", 2),
            ("LNGLAT_OFFSETS", 3),
        ],
    )
}

/// WebGL constants commonly set through layer `parameters`.
pub fn gl() -> RegistryResult<Enumeration> {
    Enumeration::new(
        "GL",
        [
            // Primitive modes
            ("POINTS", 0x0000),
            ("LINES", 0x0001),
            ("LINE_LOOP", 0x0002),
            ("LINE_STRIP", 0x0003),
            ("TRIANGLES", 0x0004),
            ("TRIANGLE_STRIP", 0x0005),
            ("TRIANGLE_FAN", 0x0006),
            // Blend factors
            ("ZERO", 0),
            ("ONE", 1),
            ("SRC_COLOR", 0x0300),
            ("ONE_MINUS_SRC_COLOR", 0x0301),
            ("SRC_ALPHA", 0x0302),
            ("ONE_MINUS_SRC_ALPHA", 0x0303),
            ("DST_ALPHA", 0x0304),
            ("ONE_MINUS_DST_ALPHA", 0x0305),
            ("DST_COLOR", 0x0306),
            ("ONE_MINUS_DST_COLOR", 0x0307),
            // Blend equations
            ("FUNC_ADD", 0x8006),
            ("MIN", 0x8007),
            ("MAX", 0x8008),
            ("FUNC_SUBTRACT", 0x800A),
            ("FUNC_REVERSE_SUBTRACT", 0x800B),
            // Capabilities
            ("CULL_FACE", 0x0B44),
            ("DEPTH_TEST", 0x0B71),
            ("BLEND", 0x0BE2),
            ("POLYGON_OFFSET_FILL", 0x8037),
            // Depth functions
            ("NEVER", 0x0200),
            ("LESS", 0x0201),
            ("EQUAL", 0x0202),
            ("LEQUAL", 0x0203),
            ("GREATER", 0x0204),
            ("NOTEQUAL", 0x0205),
            ("GEQUAL", 0x0206),
            ("ALWAYS", 0x0207),
            // Texture parameters
            ("NEAREST", 0x2600),
            ("LINEAR", 0x2601),
            ("REPEAT", 0x2901),
            ("CLAMP_TO_EDGE", 0x812F),
        ],
    )
}

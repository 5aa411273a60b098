//! Memory layout constants for JV-880 performance data
//!
//! This module centralizes the offsets and sizes known for stored performances.
//! Constants are organized by structure type.

/// Layout of one stored performance record
pub mod performance {
    /// Stored performance size (0xCC = 204 bytes)
    pub const SIZE: usize = 0xCC;

    /// Name occupies the first 12 bytes
    pub const NAME_LEN: usize = 12;

    pub const KEY_MODE: usize = 12;

    // Reverb block (offsets 13-16)
    pub const REVERB_TYPE: usize = 13;
    pub const REVERB_LEVEL: usize = 14;
    pub const REVERB_TIME: usize = 15;
    pub const REVERB_FEEDBACK: usize = 16;

    // Chorus block (offsets 17-22)
    pub const CHORUS_TYPE: usize = 17;
    pub const CHORUS_OUTPUT: usize = 22;

    // Voice reserve, one byte per part (offsets 23-30)
    pub const VOICE_RESERVE: usize = 23;

    /// First byte after the common params (12 name + 19 params)
    pub const COMMON_END: usize = 31;

    /// Number of parts stored after the common params
    pub const PART_COUNT: usize = 8;

    /// Nominal stored part size: (204 - 31) / 8, leaving 5 bytes unassigned
    pub const NOMINAL_PART_SIZE: usize = (SIZE - COMMON_END) / PART_COUNT;
}

/// Bank locations inside ROM2
pub mod rom2 {
    pub const PRESET_A: usize = 0x10020;
    pub const PRESET_B: usize = 0x18020;
}

/// Bank locations inside the NVRAM snapshot
pub mod nvram {
    pub const INTERNAL: usize = 0x00B0;
}

/// Working copies inside the SRAM snapshot
pub mod sram {
    /// Temporary (edit buffer) performance
    pub const TEMP_PERFORMANCE: usize = 0x206A;
}

/// Performances stored per bank
pub const PERFORMANCES_PER_BANK: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_params_fill_name_and_param_bytes() {
        assert_eq!(performance::NAME_LEN + 19, performance::COMMON_END);
        assert_eq!(performance::VOICE_RESERVE + 8, performance::COMMON_END);
    }

    #[test]
    fn test_part_region_leaves_tail() {
        let remainder = performance::SIZE - performance::COMMON_END;
        assert_eq!(remainder, 173);
        assert_eq!(performance::NOMINAL_PART_SIZE, 21);
        assert_eq!(remainder % performance::PART_COUNT, 5);
    }

    #[test]
    fn test_preset_banks_do_not_overlap() {
        let bank_span = performance::SIZE * PERFORMANCES_PER_BANK;
        assert!(rom2::PRESET_A + bank_span <= rom2::PRESET_B);
    }
}

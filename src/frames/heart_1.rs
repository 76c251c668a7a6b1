pub const WORDS: [u32; 4] = [0x108883b8, 0x20820210, 0x00280220, 0x00000002];

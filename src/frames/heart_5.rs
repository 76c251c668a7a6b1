pub const WORDS: [u32; 4] = [0x1f88ffff, 0xe0fe03f0, 0xc1ef1e3d, 0x0000001f];

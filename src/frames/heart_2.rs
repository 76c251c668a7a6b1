pub const WORDS: [u32; 4] = [0x1988c7fc, 0x60c60330, 0x006c0630, 0x00000007];

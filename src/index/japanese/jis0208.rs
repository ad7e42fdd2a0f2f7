// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.
//
// AUTOGENERATED BY scripts/gen_index.py; DO NOT EDIT DIRECTLY.

//! JIS X 0208.

const ROWS: usize = 94;
const COLS: usize = 94;

static FORWARD: [u16; 8836] = [
    0x3000, 0x3001, 0x3002, 0xFF0C, 0xFF0E, 0x30FB, 0xFF1A, 0xFF1B,
    0xFF1F, 0xFF01, 0x309B, 0x309C, 0x00B4, 0xFF40, 0x00A8, 0xFF3E,
    0xFFE3, 0xFF3F, 0x30FD, 0x30FE, 0x309D, 0x309E, 0x3003, 0x4EDD,
    0x3005, 0x3006, 0x3007, 0x30FC, 0x2015, 0x2010, 0xFF0F, 0xFF3C,
    0x301C, 0x2016, 0xFF5C, 0x2026, 0x2025, 0x2018, 0x2019, 0x201C,
    0x201D, 0xFF08, 0xFF09, 0x3014, 0x3015, 0xFF3B, 0xFF3D, 0xFF5B,
    0xFF5D, 0x3008, 0x3009, 0x300A, 0x300B, 0x300C, 0x300D, 0x300E,
    0x300F, 0x3010, 0x3011, 0xFF0B, 0x2212, 0x00B1, 0x00D7, 0x00F7,
    0xFF1D, 0x2260, 0xFF1C, 0xFF1E, 0x2266, 0x2267, 0x221E, 0x2234,
    0x2642, 0x2640, 0x00B0, 0x2032, 0x2033, 0x2103, 0xFFE5, 0xFF04,
    0x00A2, 0x00A3, 0xFF05, 0xFF03, 0xFF06, 0xFF0A, 0xFF20, 0x00A7,
    0x2606, 0x2605, 0x25CB, 0x25CF, 0x25CE, 0x25C7, 0x25C6, 0x25A1,
    0x25A0, 0x25B3, 0x25B2, 0x25BD, 0x25BC, 0x203B, 0x3012, 0x2192,
    0x2190, 0x2191, 0x2193, 0x3013, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x2208,
    0x220B, 0x2286, 0x2287, 0x2282, 0x2283, 0x222A, 0x2229, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x2227,
    0x2228, 0x00AC, 0x21D2, 0x21D4, 0x2200, 0x2203, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0x2220, 0x22A5, 0x2312, 0x2202, 0x2207, 0x2261, 0x2252,
    0x226A, 0x226B, 0x221A, 0x223D, 0x221D, 0x2235, 0x222B, 0x222C,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x212B,
    0x2030, 0x266F, 0x266D, 0x266A, 0x2020, 0x2021, 0x00B6, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0x25EF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFF10, 0xFF11, 0xFF12, 0xFF13, 0xFF14,
    0xFF15, 0xFF16, 0xFF17, 0xFF18, 0xFF19, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFF21, 0xFF22, 0xFF23, 0xFF24,
    0xFF25, 0xFF26, 0xFF27, 0xFF28, 0xFF29, 0xFF2A, 0xFF2B, 0xFF2C,
    0xFF2D, 0xFF2E, 0xFF2F, 0xFF30, 0xFF31, 0xFF32, 0xFF33, 0xFF34,
    0xFF35, 0xFF36, 0xFF37, 0xFF38, 0xFF39, 0xFF3A, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFF41, 0xFF42, 0xFF43, 0xFF44,
    0xFF45, 0xFF46, 0xFF47, 0xFF48, 0xFF49, 0xFF4A, 0xFF4B, 0xFF4C,
    0xFF4D, 0xFF4E, 0xFF4F, 0xFF50, 0xFF51, 0xFF52, 0xFF53, 0xFF54,
    0xFF55, 0xFF56, 0xFF57, 0xFF58, 0xFF59, 0xFF5A, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0x3041, 0x3042, 0x3043, 0x3044, 0x3045, 0x3046,
    0x3047, 0x3048, 0x3049, 0x304A, 0x304B, 0x304C, 0x304D, 0x304E,
    0x304F, 0x3050, 0x3051, 0x3052, 0x3053, 0x3054, 0x3055, 0x3056,
    0x3057, 0x3058, 0x3059, 0x305A, 0x305B, 0x305C, 0x305D, 0x305E,
    0x305F, 0x3060, 0x3061, 0x3062, 0x3063, 0x3064, 0x3065, 0x3066,
    0x3067, 0x3068, 0x3069, 0x306A, 0x306B, 0x306C, 0x306D, 0x306E,
    0x306F, 0x3070, 0x3071, 0x3072, 0x3073, 0x3074, 0x3075, 0x3076,
    0x3077, 0x3078, 0x3079, 0x307A, 0x307B, 0x307C, 0x307D, 0x307E,
    0x307F, 0x3080, 0x3081, 0x3082, 0x3083, 0x3084, 0x3085, 0x3086,
    0x3087, 0x3088, 0x3089, 0x308A, 0x308B, 0x308C, 0x308D, 0x308E,
    0x308F, 0x3090, 0x3091, 0x3092, 0x3093, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0x30A1, 0x30A2, 0x30A3, 0x30A4, 0x30A5, 0x30A6, 0x30A7, 0x30A8,
    0x30A9, 0x30AA, 0x30AB, 0x30AC, 0x30AD, 0x30AE, 0x30AF, 0x30B0,
    0x30B1, 0x30B2, 0x30B3, 0x30B4, 0x30B5, 0x30B6, 0x30B7, 0x30B8,
    0x30B9, 0x30BA, 0x30BB, 0x30BC, 0x30BD, 0x30BE, 0x30BF, 0x30C0,
    0x30C1, 0x30C2, 0x30C3, 0x30C4, 0x30C5, 0x30C6, 0x30C7, 0x30C8,
    0x30C9, 0x30CA, 0x30CB, 0x30CC, 0x30CD, 0x30CE, 0x30CF, 0x30D0,
    0x30D1, 0x30D2, 0x30D3, 0x30D4, 0x30D5, 0x30D6, 0x30D7, 0x30D8,
    0x30D9, 0x30DA, 0x30DB, 0x30DC, 0x30DD, 0x30DE, 0x30DF, 0x30E0,
    0x30E1, 0x30E2, 0x30E3, 0x30E4, 0x30E5, 0x30E6, 0x30E7, 0x30E8,
    0x30E9, 0x30EA, 0x30EB, 0x30EC, 0x30ED, 0x30EE, 0x30EF, 0x30F0,
    0x30F1, 0x30F2, 0x30F3, 0x30F4, 0x30F5, 0x30F6, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0391, 0x0392,
    0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A,
    0x039B, 0x039C, 0x039D, 0x039E, 0x039F, 0x03A0, 0x03A1, 0x03A3,
    0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x03B1, 0x03B2,
    0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA,
    0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C3,
    0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0410, 0x0411, 0x0412, 0x0413,
    0x0414, 0x0415, 0x0401, 0x0416, 0x0417, 0x0418, 0x0419, 0x041A,
    0x041B, 0x041C, 0x041D, 0x041E, 0x041F, 0x0420, 0x0421, 0x0422,
    0x0423, 0x0424, 0x0425, 0x0426, 0x0427, 0x0428, 0x0429, 0x042A,
    0x042B, 0x042C, 0x042D, 0x042E, 0x042F, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0430, 0x0431, 0x0432, 0x0433,
    0x0434, 0x0435, 0x0451, 0x0436, 0x0437, 0x0438, 0x0439, 0x043A,
    0x043B, 0x043C, 0x043D, 0x043E, 0x043F, 0x0440, 0x0441, 0x0442,
    0x0443, 0x0444, 0x0445, 0x0446, 0x0447, 0x0448, 0x0449, 0x044A,
    0x044B, 0x044C, 0x044D, 0x044E, 0x044F, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0x2500, 0x2502, 0x250C, 0x2510, 0x2518, 0x2514,
    0x251C, 0x252C, 0x2524, 0x2534, 0x253C, 0x2501, 0x2503, 0x250F,
    0x2513, 0x251B, 0x2517, 0x2523, 0x2533, 0x252B, 0x253B, 0x254B,
    0x2520, 0x252F, 0x2528, 0x2537, 0x253F, 0x251D, 0x2530, 0x2525,
    0x2538, 0x2542, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0x4E9C, 0x5516, 0x5A03, 0x963F, 0x54C0, 0x611B,
    0x6328, 0x59F6, 0x9022, 0x8475, 0x831C, 0x7A50, 0x60AA, 0x63E1,
    0x6E25, 0x65ED, 0x8466, 0x82A6, 0x9BF5, 0x6893, 0x5727, 0x65A1,
    0x6271, 0x5B9B, 0x59D0, 0x867B, 0x98F4, 0x7D62, 0x7DBE, 0x9B8E,
    0x6216, 0x7C9F, 0x88B7, 0x5B89, 0x5EB5, 0x6309, 0x6697, 0x6848,
    0x95C7, 0x978D, 0x674F, 0x4EE5, 0x4F0A, 0x4F4D, 0x4F9D, 0x5049,
    0x56F2, 0x5937, 0x59D4, 0x5A01, 0x5C09, 0x60DF, 0x610F, 0x6170,
    0x6613, 0x6905, 0x70BA, 0x754F, 0x7570, 0x79FB, 0x7DAD, 0x7DEF,
    0x80C3, 0x840E, 0x8863, 0x8B02, 0x9055, 0x907A, 0x533B, 0x4E95,
    0x4EA5, 0x57DF, 0x80B2, 0x90C1, 0x78EF, 0x4E00, 0x58F1, 0x6EA2,
    0x9038, 0x7A32, 0x8328, 0x828B, 0x9C2F, 0x5141, 0x5370, 0x54BD,
    0x54E1, 0x56E0, 0x59FB, 0x5F15, 0x98F2, 0x6DEB, 0x80E4, 0x852D,
    0x9662, 0x9670, 0x96A0, 0x97FB, 0x540B, 0x53F3, 0x5B87, 0x70CF,
    0x7FBD, 0x8FC2, 0x96E8, 0x536F, 0x9D5C, 0x7ABA, 0x4E11, 0x7893,
    0x81FC, 0x6E26, 0x5618, 0x5504, 0x6B1D, 0x851A, 0x9C3B, 0x59E5,
    0x53A9, 0x6D66, 0x74DC, 0x958F, 0x5642, 0x4E91, 0x904B, 0x96F2,
    0x834F, 0x990C, 0x53E1, 0x55B6, 0x5B30, 0x5F71, 0x6620, 0x66F3,
    0x6804, 0x6C38, 0x6CF3, 0x6D29, 0x745B, 0x76C8, 0x7A4E, 0x9834,
    0x82F1, 0x885B, 0x8A60, 0x92ED, 0x6DB2, 0x75AB, 0x76CA, 0x99C5,
    0x60A6, 0x8B01, 0x8D8A, 0x95B2, 0x698E, 0x53AD, 0x5186, 0x5712,
    0x5830, 0x5944, 0x5BB4, 0x5EF6, 0x6028, 0x63A9, 0x63F4, 0x6CBF,
    0x6F14, 0x708E, 0x7114, 0x7159, 0x71D5, 0x733F, 0x7E01, 0x8276,
    0x82D1, 0x8597, 0x9060, 0x925B, 0x9D1B, 0x5869, 0x65BC, 0x6C5A,
    0x7525, 0x51F9, 0x592E, 0x5965, 0x5F80, 0x5FDC, 0x62BC, 0x65FA,
    0x6A2A, 0x6B27, 0x6BB4, 0x738B, 0x7FC1, 0x8956, 0x9D2C, 0x9D0E,
    0x9EC4, 0x5CA1, 0x6C96, 0x837B, 0x5104, 0x5C4B, 0x61B6, 0x81C6,
    0x6876, 0x7261, 0x4E59, 0x4FFA, 0x5378, 0x6069, 0x6E29, 0x7A4F,
    0x97F3, 0x4E0B, 0x5316, 0x4EEE, 0x4F55, 0x4F3D, 0x4FA1, 0x4F73,
    0x52A0, 0x53EF, 0x5609, 0x590F, 0x5AC1, 0x5BB6, 0x5BE1, 0x79D1,
    0x6687, 0x679C, 0x67B6, 0x6B4C, 0x6CB3, 0x706B, 0x73C2, 0x798D,
    0x79BE, 0x7A3C, 0x7B87, 0x82B1, 0x82DB, 0x8304, 0x8377, 0x83EF,
    0x83D3, 0x8766, 0x8AB2, 0x5629, 0x8CA8, 0x8FE6, 0x904E, 0x971E,
    0x868A, 0x4FC4, 0x5CE8, 0x6211, 0x7259, 0x753B, 0x81E5, 0x82BD,
    0x86FE, 0x8CC0, 0x96C5, 0x9913, 0x99D5, 0x4ECB, 0x4F1A, 0x89E3,
    0x56DE, 0x584A, 0x58CA, 0x5EFB, 0x5FEB, 0x602A, 0x6094, 0x6062,
    0x61D0, 0x6212, 0x62D0, 0x6539, 0x9B41, 0x6666, 0x68B0, 0x6D77,
    0x7070, 0x754C, 0x7686, 0x7D75, 0x82A5, 0x87F9, 0x958B, 0x968E,
    0x8C9D, 0x51F1, 0x52BE, 0x5916, 0x54B3, 0x5BB3, 0x5D16, 0x6168,
    0x6982, 0x6DAF, 0x788D, 0x84CB, 0x8857, 0x8A72, 0x93A7, 0x9AB8,
    0x6D6C, 0x99A8, 0x86D9, 0x57A3, 0x67FF, 0x86CE, 0x920E, 0x5283,
    0x5687, 0x5404, 0x5ED3, 0x62E1, 0x64B9, 0x683C, 0x6838, 0x6BBB,
    0x7372, 0x78BA, 0x7A6B, 0x899A, 0x89D2, 0x8D6B, 0x8F03, 0x90ED,
    0x95A3, 0x9694, 0x9769, 0x5B66, 0x5CB3, 0x697D, 0x984D, 0x984E,
    0x639B, 0x7B20, 0x6A2B, 0x6A7F, 0x68B6, 0x9C0D, 0x6F5F, 0x5272,
    0x559D, 0x6070, 0x62EC, 0x6D3B, 0x6E07, 0x6ED1, 0x845B, 0x8910,
    0x8F44, 0x4E14, 0x9C39, 0x53F6, 0x691B, 0x6A3A, 0x9784, 0x682A,
    0x515C, 0x7AC3, 0x84B2, 0x91DC, 0x938C, 0x565B, 0x9D28, 0x6822,
    0x8305, 0x8431, 0x7CA5, 0x5208, 0x82C5, 0x74E6, 0x4E7E, 0x4F83,
    0x51A0, 0x5BD2, 0x520A, 0x52D8, 0x52E7, 0x5DFB, 0x559A, 0x582A,
    0x59E6, 0x5B8C, 0x5B98, 0x5BDB, 0x5E72, 0x5E79, 0x60A3, 0x611F,
    0x6163, 0x61BE, 0x63DB, 0x6562, 0x67D1, 0x6853, 0x68FA, 0x6B3E,
    0x6B53, 0x6C57, 0x6F22, 0x6F97, 0x6F45, 0x74B0, 0x7518, 0x76E3,
    0x770B, 0x7AFF, 0x7BA1, 0x7C21, 0x7DE9, 0x7F36, 0x7FF0, 0x809D,
    0x8266, 0x839E, 0x89B3, 0x8ACC, 0x8CAB, 0x9084, 0x9451, 0x9593,
    0x9591, 0x95A2, 0x9665, 0x97D3, 0x9928, 0x8218, 0x4E38, 0x542B,
    0x5CB8, 0x5DCC, 0x73A9, 0x764C, 0x773C, 0x5CA9, 0x7FEB, 0x8D0B,
    0x96C1, 0x9811, 0x9854, 0x9858, 0x4F01, 0x4F0E, 0x5371, 0x559C,
    0x5668, 0x57FA, 0x5947, 0x5B09, 0x5BC4, 0x5C90, 0x5E0C, 0x5E7E,
    0x5FCC, 0x63EE, 0x673A, 0x65D7, 0x65E2, 0x671F, 0x68CB, 0x68C4,
    0x6A5F, 0x5E30, 0x6BC5, 0x6C17, 0x6C7D, 0x757F, 0x7948, 0x5B63,
    0x7A00, 0x7D00, 0x5FBD, 0x898F, 0x8A18, 0x8CB4, 0x8D77, 0x8ECC,
    0x8F1D, 0x98E2, 0x9A0E, 0x9B3C, 0x4E80, 0x507D, 0x5100, 0x5993,
    0x5B9C, 0x622F, 0x6280, 0x64EC, 0x6B3A, 0x72A0, 0x7591, 0x7947,
    0x7FA9, 0x87FB, 0x8ABC, 0x8B70, 0x63AC, 0x83CA, 0x97A0, 0x5409,
    0x5403, 0x55AB, 0x6854, 0x6A58, 0x8A70, 0x7827, 0x6775, 0x9ECD,
    0x5374, 0x5BA2, 0x811A, 0x8650, 0x9006, 0x4E18, 0x4E45, 0x4EC7,
    0x4F11, 0x53CA, 0x5438, 0x5BAE, 0x5F13, 0x6025, 0x6551, 0x673D,
    0x6C42, 0x6C72, 0x6CE3, 0x7078, 0x7403, 0x7A76, 0x7AAE, 0x7B08,
    0x7D1A, 0x7CFE, 0x7D66, 0x65E7, 0x725B, 0x53BB, 0x5C45, 0x5DE8,
    0x62D2, 0x62E0, 0x6319, 0x6E20, 0x865A, 0x8A31, 0x8DDD, 0x92F8,
    0x6F01, 0x79A6, 0x9B5A, 0x4EA8, 0x4EAB, 0x4EAC, 0x4F9B, 0x4FA0,
    0x50D1, 0x5147, 0x7AF6, 0x5171, 0x51F6, 0x5354, 0x5321, 0x537F,
    0x53EB, 0x55AC, 0x5883, 0x5CE1, 0x5F37, 0x5F4A, 0x602F, 0x6050,
    0x606D, 0x631F, 0x6559, 0x6A4B, 0x6CC1, 0x72C2, 0x72ED, 0x77EF,
    0x80F8, 0x8105, 0x8208, 0x854E, 0x90F7, 0x93E1, 0x97FF, 0x9957,
    0x9A5A, 0x4EF0, 0x51DD, 0x5C2D, 0x6681, 0x696D, 0x5C40, 0x66F2,
    0x6975, 0x7389, 0x6850, 0x7C81, 0x50C5, 0x52E4, 0x5747, 0x5DFE,
    0x9326, 0x65A4, 0x6B23, 0x6B3D, 0x7434, 0x7981, 0x79BD, 0x7B4B,
    0x7DCA, 0x82B9, 0x83CC, 0x887F, 0x895F, 0x8B39, 0x8FD1, 0x91D1,
    0x541F, 0x9280, 0x4E5D, 0x5036, 0x53E5, 0x533A, 0x72D7, 0x7396,
    0x77E9, 0x82E6, 0x8EAF, 0x99C6, 0x99C8, 0x99D2, 0x5177, 0x611A,
    0x865E, 0x55B0, 0x7A7A, 0x5076, 0x5BD3, 0x9047, 0x9685, 0x4E32,
    0x6ADB, 0x91E7, 0x5C51, 0x5C48, 0x6398, 0x7A9F, 0x6C93, 0x9774,
    0x8F61, 0x7AAA, 0x718A, 0x9688, 0x7C82, 0x6817, 0x7E70, 0x6851,
    0x936C, 0x52F2, 0x541B, 0x85AB, 0x8A13, 0x7FA4, 0x8ECD, 0x90E1,
    0x5366, 0x8888, 0x7941, 0x4FC2, 0x50BE, 0x5211, 0x5144, 0x5553,
    0x572D, 0x73EA, 0x578B, 0x5951, 0x5F62, 0x5F84, 0x6075, 0x6176,
    0x6167, 0x61A9, 0x63B2, 0x643A, 0x656C, 0x666F, 0x6842, 0x6E13,
    0x7566, 0x7A3D, 0x7CFB, 0x7D4C, 0x7D99, 0x7E4B, 0x7F6B, 0x830E,
    0x834A, 0x86CD, 0x8A08, 0x8A63, 0x8B66, 0x8EFD, 0x981A, 0x9D8F,
    0x82B8, 0x8FCE, 0x9BE8, 0x5287, 0x621F, 0x6483, 0x6FC0, 0x9699,
    0x6841, 0x5091, 0x6B20, 0x6C7A, 0x6F54, 0x7A74, 0x7D50, 0x8840,
    0x8A23, 0x6708, 0x4EF6, 0x5039, 0x5026, 0x5065, 0x517C, 0x5238,
    0x5263, 0x55A7, 0x570F, 0x5805, 0x5ACC, 0x5EFA, 0x61B2, 0x61F8,
    0x62F3, 0x6372, 0x691C, 0x6A29, 0x727D, 0x72AC, 0x732E, 0x7814,
    0x786F, 0x7D79, 0x770C, 0x80A9, 0x898B, 0x8B19, 0x8CE2, 0x8ED2,
    0x9063, 0x9375, 0x967A, 0x9855, 0x9A13, 0x9E78, 0x5143, 0x539F,
    0x53B3, 0x5E7B, 0x5F26, 0x6E1B, 0x6E90, 0x7384, 0x73FE, 0x7D43,
    0x8237, 0x8A00, 0x8AFA, 0x9650, 0x4E4E, 0x500B, 0x53E4, 0x547C,
    0x56FA, 0x59D1, 0x5B64, 0x5DF1, 0x5EAB, 0x5F27, 0x6238, 0x6545,
    0x67AF, 0x6E56, 0x72D0, 0x7CCA, 0x88B4, 0x80A1, 0x80E1, 0x83F0,
    0x864E, 0x8A87, 0x8DE8, 0x9237, 0x96C7, 0x9867, 0x9F13, 0x4E94,
    0x4E92, 0x4F0D, 0x5348, 0x5449, 0x543E, 0x5A2F, 0x5F8C, 0x5FA1,
    0x609F, 0x68A7, 0x6A8E, 0x745A, 0x7881, 0x8A9E, 0x8AA4, 0x8B77,
    0x9190, 0x4E5E, 0x9BC9, 0x4EA4, 0x4F7C, 0x4FAF, 0x5019, 0x5016,
    0x5149, 0x516C, 0x529F, 0x52B9, 0x52FE, 0x539A, 0x53E3, 0x5411,
    0x540E, 0x5589, 0x5751, 0x57A2, 0x597D, 0x5B54, 0x5B5D, 0x5B8F,
    0x5DE5, 0x5DE7, 0x5DF7, 0x5E78, 0x5E83, 0x5E9A, 0x5EB7, 0x5F18,
    0x6052, 0x614C, 0x6297, 0x62D8, 0x63A7, 0x653B, 0x6602, 0x6643,
    0x66F4, 0x676D, 0x6821, 0x6897, 0x69CB, 0x6C5F, 0x6D2A, 0x6D69,
    0x6E2F, 0x6E9D, 0x7532, 0x7687, 0x786C, 0x7A3F, 0x7CE0, 0x7D05,
    0x7D18, 0x7D5E, 0x7DB1, 0x8015, 0x8003, 0x80AF, 0x80B1, 0x8154,
    0x818F, 0x822A, 0x8352, 0x884C, 0x8861, 0x8B1B, 0x8CA2, 0x8CFC,
    0x90CA, 0x9175, 0x9271, 0x783F, 0x92FC, 0x95A4, 0x964D, 0x9805,
    0x9999, 0x9AD8, 0x9D3B, 0x525B, 0x52AB, 0x53F7, 0x5408, 0x58D5,
    0x62F7, 0x6FE0, 0x8C6A, 0x8F5F, 0x9EB9, 0x514B, 0x523B, 0x544A,
    0x56FD, 0x7A40, 0x9177, 0x9D60, 0x9ED2, 0x7344, 0x6F09, 0x8170,
    0x7511, 0x5FFD, 0x60DA, 0x9AA8, 0x72DB, 0x8FBC, 0x6B64, 0x9803,
    0x4ECA, 0x56F0, 0x5764, 0x58BE, 0x5A5A, 0x6068, 0x61C7, 0x660F,
    0x6606, 0x6839, 0x68B1, 0x6DF7, 0x75D5, 0x7D3A, 0x826E, 0x9B42,
    0x4E9B, 0x4F50, 0x53C9, 0x5506, 0x5D6F, 0x5DE6, 0x5DEE, 0x67FB,
    0x6C99, 0x7473, 0x7802, 0x8A50, 0x9396, 0x88DF, 0x5750, 0x5EA7,
    0x632B, 0x50B5, 0x50AC, 0x518D, 0x6700, 0x54C9, 0x585E, 0x59BB,
    0x5BB0, 0x5F69, 0x624D, 0x63A1, 0x683D, 0x6B73, 0x6E08, 0x707D,
    0x91C7, 0x7280, 0x7815, 0x7826, 0x796D, 0x658E, 0x7D30, 0x83DC,
    0x88C1, 0x8F09, 0x969B, 0x5264, 0x5728, 0x6750, 0x7F6A, 0x8CA1,
    0x51B4, 0x5742, 0x962A, 0x583A, 0x698A, 0x80B4, 0x54B2, 0x5D0E,
    0x57FC, 0x7895, 0x9DFA, 0x4F5C, 0x524A, 0x548B, 0x643E, 0x6628,
    0x6714, 0x67F5, 0x7A84, 0x7B56, 0x7D22, 0x932F, 0x685C, 0x9BAD,
    0x7B39, 0x5319, 0x518A, 0x5237, 0x5BDF, 0x62F6, 0x64AE, 0x64E6,
    0x672D, 0x6BBA, 0x85A9, 0x96D1, 0x7690, 0x9BD6, 0x634C, 0x9306,
    0x9BAB, 0x76BF, 0x6652, 0x4E09, 0x5098, 0x53C2, 0x5C71, 0x60E8,
    0x6492, 0x6563, 0x685F, 0x71E6, 0x73CA, 0x7523, 0x7B97, 0x7E82,
    0x8695, 0x8B83, 0x8CDB, 0x9178, 0x9910, 0x65AC, 0x66AB, 0x6B8B,
    0x4ED5, 0x4ED4, 0x4F3A, 0x4F7F, 0x523A, 0x53F8, 0x53F2, 0x55E3,
    0x56DB, 0x58EB, 0x59CB, 0x59C9, 0x59FF, 0x5B50, 0x5C4D, 0x5E02,
    0x5E2B, 0x5FD7, 0x601D, 0x6307, 0x652F, 0x5B5C, 0x65AF, 0x65BD,
    0x65E8, 0x679D, 0x6B62, 0x6B7B, 0x6C0F, 0x7345, 0x7949, 0x79C1,
    0x7CF8, 0x7D19, 0x7D2B, 0x80A2, 0x8102, 0x81F3, 0x8996, 0x8A5E,
    0x8A69, 0x8A66, 0x8A8C, 0x8AEE, 0x8CC7, 0x8CDC, 0x96CC, 0x98FC,
    0x6B6F, 0x4E8B, 0x4F3C, 0x4F8D, 0x5150, 0x5B57, 0x5BFA, 0x6148,
    0x6301, 0x6642, 0x6B21, 0x6ECB, 0x6CBB, 0x723E, 0x74BD, 0x75D4,
    0x78C1, 0x793A, 0x800C, 0x8033, 0x81EA, 0x8494, 0x8F9E, 0x6C50,
    0x9E7F, 0x5F0F, 0x8B58, 0x9D2B, 0x7AFA, 0x8EF8, 0x5B8D, 0x96EB,
    0x4E03, 0x53F1, 0x57F7, 0x5931, 0x5AC9, 0x5BA4, 0x6089, 0x6E7F,
    0x6F06, 0x75BE, 0x8CEA, 0x5B9F, 0x8500, 0x7BE0, 0x5072, 0x67F4,
    0x829D, 0x5C61, 0x854A, 0x7E1E, 0x820E, 0x5199, 0x5C04, 0x6368,
    0x8D66, 0x659C, 0x716E, 0x793E, 0x7D17, 0x8005, 0x8B1D, 0x8ECA,
    0x906E, 0x86C7, 0x90AA, 0x501F, 0x52FA, 0x5C3A, 0x6753, 0x707C,
    0x7235, 0x914C, 0x91C8, 0x932B, 0x82E5, 0x5BC2, 0x5F31, 0x60F9,
    0x4E3B, 0x53D6, 0x5B88, 0x624B, 0x6731, 0x6B8A, 0x72E9, 0x73E0,
    0x7A2E, 0x816B, 0x8DA3, 0x9152, 0x9996, 0x5112, 0x53D7, 0x546A,
    0x5BFF, 0x6388, 0x6A39, 0x7DAC, 0x9700, 0x56DA, 0x53CE, 0x5468,
    0x5B97, 0x5C31, 0x5DDE, 0x4FEE, 0x6101, 0x62FE, 0x6D32, 0x79C0,
    0x79CB, 0x7D42, 0x7E4D, 0x7FD2, 0x81ED, 0x821F, 0x8490, 0x8846,
    0x8972, 0x8B90, 0x8E74, 0x8F2F, 0x9031, 0x914B, 0x916C, 0x96C6,
    0x919C, 0x4EC0, 0x4F4F, 0x5145, 0x5341, 0x5F93, 0x620E, 0x67D4,
    0x6C41, 0x6E0B, 0x7363, 0x7E26, 0x91CD, 0x9283, 0x53D4, 0x5919,
    0x5BBF, 0x6DD1, 0x795D, 0x7E2E, 0x7C9B, 0x587E, 0x719F, 0x51FA,
    0x8853, 0x8FF0, 0x4FCA, 0x5CFB, 0x6625, 0x77AC, 0x7AE3, 0x821C,
    0x99FF, 0x51C6, 0x5FAA, 0x65EC, 0x696F, 0x6B89, 0x6DF3, 0x6E96,
    0x6F64, 0x76FE, 0x7D14, 0x5DE1, 0x9075, 0x9187, 0x9806, 0x51E6,
    0x521D, 0x6240, 0x6691, 0x66D9, 0x6E1A, 0x5EB6, 0x7DD2, 0x7F72,
    0x66F8, 0x85AF, 0x85F7, 0x8AF8, 0x52A9, 0x53D9, 0x5973, 0x5E8F,
    0x5F90, 0x6055, 0x92E4, 0x9664, 0x50B7, 0x511F, 0x52DD, 0x5320,
    0x5347, 0x53EC, 0x54E8, 0x5546, 0x5531, 0x5617, 0x5968, 0x59BE,
    0x5A3C, 0x5BB5, 0x5C06, 0x5C0F, 0x5C11, 0x5C1A, 0x5E84, 0x5E8A,
    0x5EE0, 0x5F70, 0x627F, 0x6284, 0x62DB, 0x638C, 0x6377, 0x6607,
    0x660C, 0x662D, 0x6676, 0x677E, 0x68A2, 0x6A1F, 0x6A35, 0x6CBC,
    0x6D88, 0x6E09, 0x6E58, 0x713C, 0x7126, 0x7167, 0x75C7, 0x7701,
    0x785D, 0x7901, 0x7965, 0x79F0, 0x7AE0, 0x7B11, 0x7CA7, 0x7D39,
    0x8096, 0x83D6, 0x848B, 0x8549, 0x885D, 0x88F3, 0x8A1F, 0x8A3C,
    0x8A54, 0x8A73, 0x8C61, 0x8CDE, 0x91A4, 0x9266, 0x937E, 0x9418,
    0x969C, 0x9798, 0x4E0A, 0x4E08, 0x4E1E, 0x4E57, 0x5197, 0x5270,
    0x57CE, 0x5834, 0x58CC, 0x5B22, 0x5E38, 0x60C5, 0x64FE, 0x6761,
    0x6756, 0x6D44, 0x72B6, 0x7573, 0x7A63, 0x84B8, 0x8B72, 0x91B8,
    0x9320, 0x5631, 0x57F4, 0x98FE, 0x62ED, 0x690D, 0x6B96, 0x71ED,
    0x7E54, 0x8077, 0x8272, 0x89E6, 0x98DF, 0x8755, 0x8FB1, 0x5C3B,
    0x4F38, 0x4FE1, 0x4FB5, 0x5507, 0x5A20, 0x5BDD, 0x5BE9, 0x5FC3,
    0x614E, 0x632F, 0x65B0, 0x664B, 0x68EE, 0x699B, 0x6D78, 0x6DF1,
    0x7533, 0x75B9, 0x771F, 0x795E, 0x79E6, 0x7D33, 0x81E3, 0x82AF,
    0x85AA, 0x89AA, 0x8A3A, 0x8EAB, 0x8F9B, 0x9032, 0x91DD, 0x9707,
    0x4EBA, 0x4EC1, 0x5203, 0x5875, 0x58EC, 0x5C0B, 0x751A, 0x5C3D,
    0x814E, 0x8A0A, 0x8FC5, 0x9663, 0x976D, 0x7B25, 0x8ACF, 0x9808,
    0x9162, 0x56F3, 0x53A8, 0x9017, 0x5439, 0x5782, 0x5E25, 0x63A8,
    0x6C34, 0x708A, 0x7761, 0x7C8B, 0x7FE0, 0x8870, 0x9042, 0x9154,
    0x9310, 0x9318, 0x968F, 0x745E, 0x9AC4, 0x5D07, 0x5D69, 0x6570,
    0x67A2, 0x8DA8, 0x96DB, 0x636E, 0x6749, 0x6919, 0x83C5, 0x9817,
    0x96C0, 0x88FE, 0x6F84, 0x647A, 0x5BF8, 0x4E16, 0x702C, 0x755D,
    0x662F, 0x51C4, 0x5236, 0x52E2, 0x59D3, 0x5F81, 0x6027, 0x6210,
    0x653F, 0x6574, 0x661F, 0x6674, 0x68F2, 0x6816, 0x6B63, 0x6E05,
    0x7272, 0x751F, 0x76DB, 0x7CBE, 0x8056, 0x58F0, 0x88FD, 0x897F,
    0x8AA0, 0x8A93, 0x8ACB, 0x901D, 0x9192, 0x9752, 0x9759, 0x6589,
    0x7A0E, 0x8106, 0x96BB, 0x5E2D, 0x60DC, 0x621A, 0x65A5, 0x6614,
    0x6790, 0x77F3, 0x7A4D, 0x7C4D, 0x7E3E, 0x810A, 0x8CAC, 0x8D64,
    0x8DE1, 0x8E5F, 0x78A9, 0x5207, 0x62D9, 0x63A5, 0x6442, 0x6298,
    0x8A2D, 0x7A83, 0x7BC0, 0x8AAC, 0x96EA, 0x7D76, 0x820C, 0x8749,
    0x4ED9, 0x5148, 0x5343, 0x5360, 0x5BA3, 0x5C02, 0x5C16, 0x5DDD,
    0x6226, 0x6247, 0x64B0, 0x6813, 0x6834, 0x6CC9, 0x6D45, 0x6D17,
    0x67D3, 0x6F5C, 0x714E, 0x717D, 0x65CB, 0x7A7F, 0x7BAD, 0x7DDA,
    0x7E4A, 0x7FA8, 0x817A, 0x821B, 0x8239, 0x85A6, 0x8A6E, 0x8CCE,
    0x8DF5, 0x9078, 0x9077, 0x92AD, 0x9291, 0x9583, 0x9BAE, 0x524D,
    0x5584, 0x6F38, 0x7136, 0x5168, 0x7985, 0x7E55, 0x81B3, 0x7CCE,
    0x564C, 0x5851, 0x5CA8, 0x63AA, 0x66FE, 0x66FD, 0x695A, 0x72D9,
    0x758F, 0x758E, 0x790E, 0x7956, 0x79DF, 0x7C97, 0x7D20, 0x7D44,
    0x8607, 0x8A34, 0x963B, 0x9061, 0x9F20, 0x50E7, 0x5275, 0x53CC,
    0x53E2, 0x5009, 0x55AA, 0x58EE, 0x594F, 0x723D, 0x5B8B, 0x5C64,
    0x531D, 0x60E3, 0x60F3, 0x635C, 0x6383, 0x633F, 0x63BB, 0x64CD,
    0x65E9, 0x66F9, 0x5DE3, 0x69CD, 0x69FD, 0x6F15, 0x71E5, 0x4E89,
    0x75E9, 0x76F8, 0x7A93, 0x7CDF, 0x7DCF, 0x7D9C, 0x8061, 0x8349,
    0x8358, 0x846C, 0x84BC, 0x85FB, 0x88C5, 0x8D70, 0x9001, 0x906D,
    0x9397, 0x971C, 0x9A12, 0x50CF, 0x5897, 0x618E, 0x81D3, 0x8535,
    0x8D08, 0x9020, 0x4FC3, 0x5074, 0x5247, 0x5373, 0x606F, 0x6349,
    0x675F, 0x6E2C, 0x8DB3, 0x901F, 0x4FD7, 0x5C5E, 0x8CCA, 0x65CF,
    0x7D9A, 0x5352, 0x8896, 0x5176, 0x63C3, 0x5B58, 0x5B6B, 0x5C0A,
    0x640D, 0x6751, 0x905C, 0x4ED6, 0x591A, 0x592A, 0x6C70, 0x8A51,
    0x553E, 0x5815, 0x59A5, 0x60F0, 0x6253, 0x67C1, 0x8235, 0x6955,
    0x9640, 0x99C4, 0x9A28, 0x4F53, 0x5806, 0x5BFE, 0x8010, 0x5CB1,
    0x5E2F, 0x5F85, 0x6020, 0x614B, 0x6234, 0x66FF, 0x6CF0, 0x6EDE,
    0x80CE, 0x817F, 0x82D4, 0x888B, 0x8CB8, 0x9000, 0x902E, 0x968A,
    0x9EDB, 0x9BDB, 0x4EE3, 0x53F0, 0x5927, 0x7B2C, 0x918D, 0x984C,
    0x9DF9, 0x6EDD, 0x7027, 0x5353, 0x5544, 0x5B85, 0x6258, 0x629E,
    0x62D3, 0x6CA2, 0x6FEF, 0x7422, 0x8A17, 0x9438, 0x6FC1, 0x8AFE,
    0x8338, 0x51E7, 0x86F8, 0x53EA, 0x53E9, 0x4F46, 0x9054, 0x8FB0,
    0x596A, 0x8131, 0x5DFD, 0x7AEA, 0x8FBF, 0x68DA, 0x8C37, 0x72F8,
    0x9C48, 0x6A3D, 0x8AB0, 0x4E39, 0x5358, 0x5606, 0x5766, 0x62C5,
    0x63A2, 0x65E6, 0x6B4E, 0x6DE1, 0x6E5B, 0x70AD, 0x77ED, 0x7AEF,
    0x7BAA, 0x7DBB, 0x803D, 0x80C6, 0x86CB, 0x8A95, 0x935B, 0x56E3,
    0x58C7, 0x5F3E, 0x65AD, 0x6696, 0x6A80, 0x6BB5, 0x7537, 0x8AC7,
    0x5024, 0x77E5, 0x5730, 0x5F1B, 0x6065, 0x667A, 0x6C60, 0x75F4,
    0x7A1A, 0x7F6E, 0x81F4, 0x8718, 0x9045, 0x99B3, 0x7BC9, 0x755C,
    0x7AF9, 0x7B51, 0x84C4, 0x9010, 0x79E9, 0x7A92, 0x8336, 0x5AE1,
    0x7740, 0x4E2D, 0x4EF2, 0x5B99, 0x5FE0, 0x62BD, 0x663C, 0x67F1,
    0x6CE8, 0x866B, 0x8877, 0x8A3B, 0x914E, 0x92F3, 0x99D0, 0x6A17,
    0x7026, 0x732A, 0x82E7, 0x8457, 0x8CAF, 0x4E01, 0x5146, 0x51CB,
    0x558B, 0x5BF5, 0x5E16, 0x5E33, 0x5E81, 0x5F14, 0x5F35, 0x5F6B,
    0x5FB4, 0x61F2, 0x6311, 0x66A2, 0x671D, 0x6F6E, 0x7252, 0x753A,
    0x773A, 0x8074, 0x8139, 0x8178, 0x8776, 0x8ABF, 0x8ADC, 0x8D85,
    0x8DF3, 0x929A, 0x9577, 0x9802, 0x9CE5, 0x52C5, 0x6357, 0x76F4,
    0x6715, 0x6C88, 0x73CD, 0x8CC3, 0x93AE, 0x9673, 0x6D25, 0x589C,
    0x690E, 0x69CC, 0x8FFD, 0x939A, 0x75DB, 0x901A, 0x585A, 0x6802,
    0x63B4, 0x69FB, 0x4F43, 0x6F2C, 0x67D8, 0x8FBB, 0x8526, 0x7DB4,
    0x9354, 0x693F, 0x6F70, 0x576A, 0x58F7, 0x5B2C, 0x7D2C, 0x722A,
    0x540A, 0x91E3, 0x9DB4, 0x4EAD, 0x4F4E, 0x505C, 0x5075, 0x5243,
    0x8C9E, 0x5448, 0x5824, 0x5B9A, 0x5E1D, 0x5E95, 0x5EAD, 0x5EF7,
    0x5F1F, 0x608C, 0x62B5, 0x633A, 0x63D0, 0x68AF, 0x6C40, 0x7887,
    0x798E, 0x7A0B, 0x7DE0, 0x8247, 0x8A02, 0x8AE6, 0x8E44, 0x9013,
    0x90B8, 0x912D, 0x91D8, 0x9F0E, 0x6CE5, 0x6458, 0x64E2, 0x6575,
    0x6EF4, 0x7684, 0x7B1B, 0x9069, 0x93D1, 0x6EBA, 0x54F2, 0x5FB9,
    0x64A4, 0x8F4D, 0x8FED, 0x9244, 0x5178, 0x586B, 0x5929, 0x5C55,
    0x5E97, 0x6DFB, 0x7E8F, 0x751C, 0x8CBC, 0x8EE2, 0x985B, 0x70B9,
    0x4F1D, 0x6BBF, 0x6FB1, 0x7530, 0x96FB, 0x514E, 0x5410, 0x5835,
    0x5857, 0x59AC, 0x5C60, 0x5F92, 0x6597, 0x675C, 0x6E21, 0x767B,
    0x83DF, 0x8CED, 0x9014, 0x90FD, 0x934D, 0x7825, 0x783A, 0x52AA,
    0x5EA6, 0x571F, 0x5974, 0x6012, 0x5012, 0x515A, 0x51AC, 0x51CD,
    0x5200, 0x5510, 0x5854, 0x5858, 0x5957, 0x5B95, 0x5CF6, 0x5D8B,
    0x60BC, 0x6295, 0x642D, 0x6771, 0x6843, 0x68BC, 0x68DF, 0x76D7,
    0x6DD8, 0x6E6F, 0x6D9B, 0x706F, 0x71C8, 0x5F53, 0x75D8, 0x7977,
    0x7B49, 0x7B54, 0x7B52, 0x7CD6, 0x7D71, 0x5230, 0x8463, 0x8569,
    0x85E4, 0x8A0E, 0x8B04, 0x8C46, 0x8E0F, 0x9003, 0x900F, 0x9419,
    0x9676, 0x982D, 0x9A30, 0x95D8, 0x50CD, 0x52D5, 0x540C, 0x5802,
    0x5C0E, 0x61A7, 0x649E, 0x6D1E, 0x77B3, 0x7AE5, 0x80F4, 0x8404,
    0x9053, 0x9285, 0x5CE0, 0x9D07, 0x533F, 0x5F97, 0x5FB3, 0x6D9C,
    0x7279, 0x7763, 0x79BF, 0x7BE4, 0x6BD2, 0x72EC, 0x8AAD, 0x6803,
    0x6A61, 0x51F8, 0x7A81, 0x6934, 0x5C4A, 0x9CF6, 0x82EB, 0x5BC5,
    0x9149, 0x701E, 0x5678, 0x5C6F, 0x60C7, 0x6566, 0x6C8C, 0x8C5A,
    0x9041, 0x9813, 0x5451, 0x66C7, 0x920D, 0x5948, 0x90A3, 0x5185,
    0x4E4D, 0x51EA, 0x8599, 0x8B0E, 0x7058, 0x637A, 0x934B, 0x6962,
    0x99B4, 0x7E04, 0x7577, 0x5357, 0x6960, 0x8EDF, 0x96E3, 0x6C5D,
    0x4E8C, 0x5C3C, 0x5F10, 0x8FE9, 0x5302, 0x8CD1, 0x8089, 0x8679,
    0x5EFF, 0x65E5, 0x4E73, 0x5165, 0x5982, 0x5C3F, 0x97EE, 0x4EFB,
    0x598A, 0x5FCD, 0x8A8D, 0x6FE1, 0x79B0, 0x7962, 0x5BE7, 0x8471,
    0x732B, 0x71B1, 0x5E74, 0x5FF5, 0x637B, 0x649A, 0x71C3, 0x7C98,
    0x4E43, 0x5EFC, 0x4E4B, 0x57DC, 0x56A2, 0x60A9, 0x6FC3, 0x7D0D,
    0x80FD, 0x8133, 0x81BF, 0x8FB2, 0x8997, 0x86A4, 0x5DF4, 0x628A,
    0x64AD, 0x8987, 0x6777, 0x6CE2, 0x6D3E, 0x7436, 0x7834, 0x5A46,
    0x7F75, 0x82AD, 0x99AC, 0x4FF3, 0x5EC3, 0x62DD, 0x6392, 0x6557,
    0x676F, 0x76C3, 0x724C, 0x80CC, 0x80BA, 0x8F29, 0x914D, 0x500D,
    0x57F9, 0x5A92, 0x6885, 0x6973, 0x7164, 0x72FD, 0x8CB7, 0x58F2,
    0x8CE0, 0x966A, 0x9019, 0x877F, 0x79E4, 0x77E7, 0x8429, 0x4F2F,
    0x5265, 0x535A, 0x62CD, 0x67CF, 0x6CCA, 0x767D, 0x7B94, 0x7C95,
    0x8236, 0x8584, 0x8FEB, 0x66DD, 0x6F20, 0x7206, 0x7E1B, 0x83AB,
    0x99C1, 0x9EA6, 0x51FD, 0x7BB1, 0x7872, 0x7BB8, 0x8087, 0x7B48,
    0x6AE8, 0x5E61, 0x808C, 0x7551, 0x7560, 0x516B, 0x9262, 0x6E8C,
    0x767A, 0x9197, 0x9AEA, 0x4F10, 0x7F70, 0x629C, 0x7B4F, 0x95A5,
    0x9CE9, 0x567A, 0x5859, 0x86E4, 0x96BC, 0x4F34, 0x5224, 0x534A,
    0x53CD, 0x53DB, 0x5E06, 0x642C, 0x6591, 0x677F, 0x6C3E, 0x6C4E,
    0x7248, 0x72AF, 0x73ED, 0x7554, 0x7E41, 0x822C, 0x85E9, 0x8CA9,
    0x7BC4, 0x91C6, 0x7169, 0x9812, 0x98EF, 0x633D, 0x6669, 0x756A,
    0x76E4, 0x78D0, 0x8543, 0x86EE, 0x532A, 0x5351, 0x5426, 0x5983,
    0x5E87, 0x5F7C, 0x60B2, 0x6249, 0x6279, 0x62AB, 0x6590, 0x6BD4,
    0x6CCC, 0x75B2, 0x76AE, 0x7891, 0x79D8, 0x7DCB, 0x7F77, 0x80A5,
    0x88AB, 0x8AB9, 0x8CBB, 0x907F, 0x975E, 0x98DB, 0x6A0B, 0x7C38,
    0x5099, 0x5C3E, 0x5FAE, 0x6787, 0x6BD8, 0x7435, 0x7709, 0x7F8E,
    0x9F3B, 0x67CA, 0x7A17, 0x5339, 0x758B, 0x9AED, 0x5F66, 0x819D,
    0x83F1, 0x8098, 0x5F3C, 0x5FC5, 0x7562, 0x7B46, 0x903C, 0x6867,
    0x59EB, 0x5A9B, 0x7D10, 0x767E, 0x8B2C, 0x4FF5, 0x5F6A, 0x6A19,
    0x6C37, 0x6F02, 0x74E2, 0x7968, 0x8868, 0x8A55, 0x8C79, 0x5EDF,
    0x63CF, 0x75C5, 0x79D2, 0x82D7, 0x9328, 0x92F2, 0x849C, 0x86ED,
    0x9C2D, 0x54C1, 0x5F6C, 0x658C, 0x6D5C, 0x7015, 0x8CA7, 0x8CD3,
    0x983B, 0x654F, 0x74F6, 0x4E0D, 0x4ED8, 0x57E0, 0x592B, 0x5A66,
    0x5BCC, 0x51A8, 0x5E03, 0x5E9C, 0x6016, 0x6276, 0x6577, 0x65A7,
    0x666E, 0x6D6E, 0x7236, 0x7B26, 0x8150, 0x819A, 0x8299, 0x8B5C,
    0x8CA0, 0x8CE6, 0x8D74, 0x961C, 0x9644, 0x4FAE, 0x64AB, 0x6B66,
    0x821E, 0x8461, 0x856A, 0x90E8, 0x5C01, 0x6953, 0x98A8, 0x847A,
    0x8557, 0x4F0F, 0x526F, 0x5FA9, 0x5E45, 0x670D, 0x798F, 0x8179,
    0x8907, 0x8986, 0x6DF5, 0x5F17, 0x6255, 0x6CB8, 0x4ECF, 0x7269,
    0x9B92, 0x5206, 0x543B, 0x5674, 0x58B3, 0x61A4, 0x626E, 0x711A,
    0x596E, 0x7C89, 0x7CDE, 0x7D1B, 0x96F0, 0x6587, 0x805E, 0x4E19,
    0x4F75, 0x5175, 0x5840, 0x5E63, 0x5E73, 0x5F0A, 0x67C4, 0x4E26,
    0x853D, 0x9589, 0x965B, 0x7C73, 0x9801, 0x50FB, 0x58C1, 0x7656,
    0x78A7, 0x5225, 0x77A5, 0x8511, 0x7B86, 0x504F, 0x5909, 0x7247,
    0x7BC7, 0x7DE8, 0x8FBA, 0x8FD4, 0x904D, 0x4FBF, 0x52C9, 0x5A29,
    0x5F01, 0x97AD, 0x4FDD, 0x8217, 0x92EA, 0x5703, 0x6355, 0x6B69,
    0x752B, 0x88DC, 0x8F14, 0x7A42, 0x52DF, 0x5893, 0x6155, 0x620A,
    0x66AE, 0x6BCD, 0x7C3F, 0x83E9, 0x5023, 0x4FF8, 0x5305, 0x5446,
    0x5831, 0x5949, 0x5B9D, 0x5CF0, 0x5CEF, 0x5D29, 0x5E96, 0x62B1,
    0x6367, 0x653E, 0x65B9, 0x670B, 0x6CD5, 0x6CE1, 0x70F9, 0x7832,
    0x7E2B, 0x80DE, 0x82B3, 0x840C, 0x84EC, 0x8702, 0x8912, 0x8A2A,
    0x8C4A, 0x90A6, 0x92D2, 0x98FD, 0x9CF3, 0x9D6C, 0x4E4F, 0x4EA1,
    0x508D, 0x5256, 0x574A, 0x59A8, 0x5E3D, 0x5FD8, 0x5FD9, 0x623F,
    0x66B4, 0x671B, 0x67D0, 0x68D2, 0x5192, 0x7D21, 0x80AA, 0x81A8,
    0x8B00, 0x8C8C, 0x8CBF, 0x927E, 0x9632, 0x5420, 0x982C, 0x5317,
    0x50D5, 0x535C, 0x58A8, 0x64B2, 0x6734, 0x7267, 0x7766, 0x7A46,
    0x91E6, 0x52C3, 0x6CA1, 0x6B86, 0x5800, 0x5E4C, 0x5954, 0x672C,
    0x7FFB, 0x51E1, 0x76C6, 0x6469, 0x78E8, 0x9B54, 0x9EBB, 0x57CB,
    0x59B9, 0x6627, 0x679A, 0x6BCE, 0x54E9, 0x69D9, 0x5E55, 0x819C,
    0x6795, 0x9BAA, 0x67FE, 0x9C52, 0x685D, 0x4EA6, 0x4FE3, 0x53C8,
    0x62B9, 0x672B, 0x6CAB, 0x8FC4, 0x4FAD, 0x7E6D, 0x9EBF, 0x4E07,
    0x6162, 0x6E80, 0x6F2B, 0x8513, 0x5473, 0x672A, 0x9B45, 0x5DF3,
    0x7B95, 0x5CAC, 0x5BC6, 0x871C, 0x6E4A, 0x84D1, 0x7A14, 0x8108,
    0x5999, 0x7C8D, 0x6C11, 0x7720, 0x52D9, 0x5922, 0x7121, 0x725F,
    0x77DB, 0x9727, 0x9D61, 0x690B, 0x5A7F, 0x5A18, 0x51A5, 0x540D,
    0x547D, 0x660E, 0x76DF, 0x8FF7, 0x9298, 0x9CF4, 0x59EA, 0x725D,
    0x6EC5, 0x514D, 0x68C9, 0x7DBF, 0x7DEC, 0x9762, 0x9EBA, 0x6478,
    0x6A21, 0x8302, 0x5984, 0x5B5F, 0x6BDB, 0x731B, 0x76F2, 0x7DB2,
    0x8017, 0x8499, 0x5132, 0x6728, 0x9ED9, 0x76EE, 0x6762, 0x52FF,
    0x9905, 0x5C24, 0x623B, 0x7C7E, 0x8CB0, 0x554F, 0x60B6, 0x7D0B,
    0x9580, 0x5301, 0x4E5F, 0x51B6, 0x591C, 0x723A, 0x8036, 0x91CE,
    0x5F25, 0x77E2, 0x5384, 0x5F79, 0x7D04, 0x85AC, 0x8A33, 0x8E8D,
    0x9756, 0x67F3, 0x85AE, 0x9453, 0x6109, 0x6108, 0x6CB9, 0x7652,
    0x8AED, 0x8F38, 0x552F, 0x4F51, 0x512A, 0x52C7, 0x53CB, 0x5BA5,
    0x5E7D, 0x60A0, 0x6182, 0x63D6, 0x6709, 0x67DA, 0x6E67, 0x6D8C,
    0x7336, 0x7337, 0x7531, 0x7950, 0x88D5, 0x8A98, 0x904A, 0x9091,
    0x90F5, 0x96C4, 0x878D, 0x5915, 0x4E88, 0x4F59, 0x4E0E, 0x8A89,
    0x8F3F, 0x9810, 0x50AD, 0x5E7C, 0x5996, 0x5BB9, 0x5EB8, 0x63DA,
    0x63FA, 0x64C1, 0x66DC, 0x694A, 0x69D8, 0x6D0B, 0x6EB6, 0x7194,
    0x7528, 0x7AAF, 0x7F8A, 0x8000, 0x8449, 0x84C9, 0x8981, 0x8B21,
    0x8E0A, 0x9065, 0x967D, 0x990A, 0x617E, 0x6291, 0x6B32, 0x6C83,
    0x6D74, 0x7FCC, 0x7FFC, 0x6DC0, 0x7F85, 0x87BA, 0x88F8, 0x6765,
    0x83B1, 0x983C, 0x96F7, 0x6D1B, 0x7D61, 0x843D, 0x916A, 0x4E71,
    0x5375, 0x5D50, 0x6B04, 0x6FEB, 0x85CD, 0x862D, 0x89A7, 0x5229,
    0x540F, 0x5C65, 0x674E, 0x68A8, 0x7406, 0x7483, 0x75E2, 0x88CF,
    0x88E1, 0x91CC, 0x96E2, 0x9678, 0x5F8B, 0x7387, 0x7ACB, 0x844E,
    0x63A0, 0x7565, 0x5289, 0x6D41, 0x6E9C, 0x7409, 0x7559, 0x786B,
    0x7C92, 0x9686, 0x7ADC, 0x9F8D, 0x4FB6, 0x616E, 0x65C5, 0x865C,
    0x4E86, 0x4EAE, 0x50DA, 0x4E21, 0x51CC, 0x5BEE, 0x6599, 0x6881,
    0x6DBC, 0x731F, 0x7642, 0x77AD, 0x7A1C, 0x7CE7, 0x826F, 0x8AD2,
    0x907C, 0x91CF, 0x9675, 0x9818, 0x529B, 0x7DD1, 0x502B, 0x5398,
    0x6797, 0x6DCB, 0x71D0, 0x7433, 0x81E8, 0x8F2A, 0x96A3, 0x9C57,
    0x9E9F, 0x7460, 0x5841, 0x6D99, 0x7D2F, 0x985E, 0x4EE4, 0x4F36,
    0x4F8B, 0x51B7, 0x52B1, 0x5DBA, 0x601C, 0x73B2, 0x793C, 0x82D3,
    0x9234, 0x96B7, 0x96F6, 0x970A, 0x9E97, 0x9F62, 0x66A6, 0x6B74,
    0x5217, 0x52A3, 0x70C8, 0x88C2, 0x5EC9, 0x604B, 0x6190, 0x6F23,
    0x7149, 0x7C3E, 0x7DF4, 0x806F, 0x84EE, 0x9023, 0x932C, 0x5442,
    0x9B6F, 0x6AD3, 0x7089, 0x8CC2, 0x8DEF, 0x9732, 0x52B4, 0x5A41,
    0x5ECA, 0x5F04, 0x6717, 0x697C, 0x6994, 0x6D6A, 0x6F0F, 0x7262,
    0x72FC, 0x7BED, 0x8001, 0x807E, 0x874B, 0x90CE, 0x516D, 0x9E93,
    0x7984, 0x808B, 0x9332, 0x8AD6, 0x502D, 0x548C, 0x8A71, 0x6B6A,
    0x8CC4, 0x8107, 0x60D1, 0x67A0, 0x9DF2, 0x4E99, 0x4E98, 0x9C10,
    0x8A6B, 0x85C1, 0x8568, 0x6900, 0x6E7E, 0x7897, 0x8155, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0x5F0C, 0x4E10, 0x4E15, 0x4E2A, 0x4E31, 0x4E36,
    0x4E3C, 0x4E3F, 0x4E42, 0x4E56, 0x4E58, 0x4E82, 0x4E85, 0x8C6B,
    0x4E8A, 0x8212, 0x5F0D, 0x4E8E, 0x4E9E, 0x4E9F, 0x4EA0, 0x4EA2,
    0x4EB0, 0x4EB3, 0x4EB6, 0x4ECE, 0x4ECD, 0x4EC4, 0x4EC6, 0x4EC2,
    0x4ED7, 0x4EDE, 0x4EED, 0x4EDF, 0x4EF7, 0x4F09, 0x4F5A, 0x4F30,
    0x4F5B, 0x4F5D, 0x4F57, 0x4F47, 0x4F76, 0x4F88, 0x4F8F, 0x4F98,
    0x4F7B, 0x4F69, 0x4F70, 0x4F91, 0x4F6F, 0x4F86, 0x4F96, 0x5118,
    0x4FD4, 0x4FDF, 0x4FCE, 0x4FD8, 0x4FDB, 0x4FD1, 0x4FDA, 0x4FD0,
    0x4FE4, 0x4FE5, 0x501A, 0x5028, 0x5014, 0x502A, 0x5025, 0x5005,
    0x4F1C, 0x4FF6, 0x5021, 0x5029, 0x502C, 0x4FFE, 0x4FEF, 0x5011,
    0x5006, 0x5043, 0x5047, 0x6703, 0x5055, 0x5050, 0x5048, 0x505A,
    0x5056, 0x506C, 0x5078, 0x5080, 0x509A, 0x5085, 0x50B4, 0x50B2,
    0x50C9, 0x50CA, 0x50B3, 0x50C2, 0x50D6, 0x50DE, 0x50E5, 0x50ED,
    0x50E3, 0x50EE, 0x50F9, 0x50F5, 0x5109, 0x5101, 0x5102, 0x5116,
    0x5115, 0x5114, 0x511A, 0x5121, 0x513A, 0x5137, 0x513C, 0x513B,
    0x513F, 0x5140, 0x5152, 0x514C, 0x5154, 0x5162, 0x7AF8, 0x5169,
    0x516A, 0x516E, 0x5180, 0x5182, 0x56D8, 0x518C, 0x5189, 0x518F,
    0x5191, 0x5193, 0x5195, 0x5196, 0x51A4, 0x51A6, 0x51A2, 0x51A9,
    0x51AA, 0x51AB, 0x51B3, 0x51B1, 0x51B2, 0x51B0, 0x51B5, 0x51BD,
    0x51C5, 0x51C9, 0x51DB, 0x51E0, 0x8655, 0x51E9, 0x51ED, 0x51F0,
    0x51F5, 0x51FE, 0x5204, 0x520B, 0x5214, 0x520E, 0x5227, 0x522A,
    0x522E, 0x5233, 0x5239, 0x524F, 0x5244, 0x524B, 0x524C, 0x525E,
    0x5254, 0x526A, 0x5274, 0x5269, 0x5273, 0x527F, 0x527D, 0x528D,
    0x5294, 0x5292, 0x5271, 0x5288, 0x5291, 0x8FA8, 0x8FA7, 0x52AC,
    0x52AD, 0x52BC, 0x52B5, 0x52C1, 0x52CD, 0x52D7, 0x52DE, 0x52E3,
    0x52E6, 0x98ED, 0x52E0, 0x52F3, 0x52F5, 0x52F8, 0x52F9, 0x5306,
    0x5308, 0x7538, 0x530D, 0x5310, 0x530F, 0x5315, 0x531A, 0x5323,
    0x532F, 0x5331, 0x5333, 0x5338, 0x5340, 0x5346, 0x5345, 0x4E17,
    0x5349, 0x534D, 0x51D6, 0x535E, 0x5369, 0x536E, 0x5918, 0x537B,
    0x5377, 0x5382, 0x5396, 0x53A0, 0x53A6, 0x53A5, 0x53AE, 0x53B0,
    0x53B6, 0x53C3, 0x7C12, 0x96D9, 0x53DF, 0x66FC, 0x71EE, 0x53EE,
    0x53E8, 0x53ED, 0x53FA, 0x5401, 0x543D, 0x5440, 0x542C, 0x542D,
    0x543C, 0x542E, 0x5436, 0x5429, 0x541D, 0x544E, 0x548F, 0x5475,
    0x548E, 0x545F, 0x5471, 0x5477, 0x5470, 0x5492, 0x547B, 0x5480,
    0x5476, 0x5484, 0x5490, 0x5486, 0x54C7, 0x54A2, 0x54B8, 0x54A5,
    0x54AC, 0x54C4, 0x54C8, 0x54A8, 0x54AB, 0x54C2, 0x54A4, 0x54BE,
    0x54BC, 0x54D8, 0x54E5, 0x54E6, 0x550F, 0x5514, 0x54FD, 0x54EE,
    0x54ED, 0x54FA, 0x54E2, 0x5539, 0x5540, 0x5563, 0x554C, 0x552E,
    0x555C, 0x5545, 0x5556, 0x5557, 0x5538, 0x5533, 0x555D, 0x5599,
    0x5580, 0x54AF, 0x558A, 0x559F, 0x557B, 0x557E, 0x5598, 0x559E,
    0x55AE, 0x557C, 0x5583, 0x55A9, 0x5587, 0x55A8, 0x55DA, 0x55C5,
    0x55DF, 0x55C4, 0x55DC, 0x55E4, 0x55D4, 0x5614, 0x55F7, 0x5616,
    0x55FE, 0x55FD, 0x561B, 0x55F9, 0x564E, 0x5650, 0x71DF, 0x5634,
    0x5636, 0x5632, 0x5638, 0x566B, 0x5664, 0x562F, 0x566C, 0x566A,
    0x5686, 0x5680, 0x568A, 0x56A0, 0x5694, 0x568F, 0x56A5, 0x56AE,
    0x56B6, 0x56B4, 0x56C2, 0x56BC, 0x56C1, 0x56C3, 0x56C0, 0x56C8,
    0x56CE, 0x56D1, 0x56D3, 0x56D7, 0x56EE, 0x56F9, 0x5700, 0x56FF,
    0x5704, 0x5709, 0x5708, 0x570B, 0x570D, 0x5713, 0x5718, 0x5716,
    0x55C7, 0x571C, 0x5726, 0x5737, 0x5738, 0x574E, 0x573B, 0x5740,
    0x574F, 0x5769, 0x57C0, 0x5788, 0x5761, 0x577F, 0x5789, 0x5793,
    0x57A0, 0x57B3, 0x57A4, 0x57AA, 0x57B0, 0x57C3, 0x57C6, 0x57D4,
    0x57D2, 0x57D3, 0x580A, 0x57D6, 0x57E3, 0x580B, 0x5819, 0x581D,
    0x5872, 0x5821, 0x5862, 0x584B, 0x5870, 0x6BC0, 0x5852, 0x583D,
    0x5879, 0x5885, 0x58B9, 0x589F, 0x58AB, 0x58BA, 0x58DE, 0x58BB,
    0x58B8, 0x58AE, 0x58C5, 0x58D3, 0x58D1, 0x58D7, 0x58D9, 0x58D8,
    0x58E5, 0x58DC, 0x58E4, 0x58DF, 0x58EF, 0x58FA, 0x58F9, 0x58FB,
    0x58FC, 0x58FD, 0x5902, 0x590A, 0x5910, 0x591B, 0x68A6, 0x5925,
    0x592C, 0x592D, 0x5932, 0x5938, 0x593E, 0x7AD2, 0x5955, 0x5950,
    0x594E, 0x595A, 0x5958, 0x5962, 0x5960, 0x5967, 0x596C, 0x5969,
    0x5978, 0x5981, 0x599D, 0x4F5E, 0x4FAB, 0x59A3, 0x59B2, 0x59C6,
    0x59E8, 0x59DC, 0x598D, 0x59D9, 0x59DA, 0x5A25, 0x5A1F, 0x5A11,
    0x5A1C, 0x5A09, 0x5A1A, 0x5A40, 0x5A6C, 0x5A49, 0x5A35, 0x5A36,
    0x5A62, 0x5A6A, 0x5A9A, 0x5ABC, 0x5ABE, 0x5ACB, 0x5AC2, 0x5ABD,
    0x5AE3, 0x5AD7, 0x5AE6, 0x5AE9, 0x5AD6, 0x5AFA, 0x5AFB, 0x5B0C,
    0x5B0B, 0x5B16, 0x5B32, 0x5AD0, 0x5B2A, 0x5B36, 0x5B3E, 0x5B43,
    0x5B45, 0x5B40, 0x5B51, 0x5B55, 0x5B5A, 0x5B5B, 0x5B65, 0x5B69,
    0x5B70, 0x5B73, 0x5B75, 0x5B78, 0x6588, 0x5B7A, 0x5B80, 0x5B83,
    0x5BA6, 0x5BB8, 0x5BC3, 0x5BC7, 0x5BC9, 0x5BD4, 0x5BD0, 0x5BE4,
    0x5BE6, 0x5BE2, 0x5BDE, 0x5BE5, 0x5BEB, 0x5BF0, 0x5BF6, 0x5BF3,
    0x5C05, 0x5C07, 0x5C08, 0x5C0D, 0x5C13, 0x5C20, 0x5C22, 0x5C28,
    0x5C38, 0x5C39, 0x5C41, 0x5C46, 0x5C4E, 0x5C53, 0x5C50, 0x5C4F,
    0x5B71, 0x5C6C, 0x5C6E, 0x4E62, 0x5C76, 0x5C79, 0x5C8C, 0x5C91,
    0x5C94, 0x599B, 0x5CAB, 0x5CBB, 0x5CB6, 0x5CBC, 0x5CB7, 0x5CC5,
    0x5CBE, 0x5CC7, 0x5CD9, 0x5CE9, 0x5CFD, 0x5CFA, 0x5CED, 0x5D8C,
    0x5CEA, 0x5D0B, 0x5D15, 0x5D17, 0x5D5C, 0x5D1F, 0x5D1B, 0x5D11,
    0x5D14, 0x5D22, 0x5D1A, 0x5D19, 0x5D18, 0x5D4C, 0x5D52, 0x5D4E,
    0x5D4B, 0x5D6C, 0x5D73, 0x5D76, 0x5D87, 0x5D84, 0x5D82, 0x5DA2,
    0x5D9D, 0x5DAC, 0x5DAE, 0x5DBD, 0x5D90, 0x5DB7, 0x5DBC, 0x5DC9,
    0x5DCD, 0x5DD3, 0x5DD2, 0x5DD6, 0x5DDB, 0x5DEB, 0x5DF2, 0x5DF5,
    0x5E0B, 0x5E1A, 0x5E19, 0x5E11, 0x5E1B, 0x5E36, 0x5E37, 0x5E44,
    0x5E43, 0x5E40, 0x5E4E, 0x5E57, 0x5E54, 0x5E5F, 0x5E62, 0x5E64,
    0x5E47, 0x5E75, 0x5E76, 0x5E7A, 0x9EBC, 0x5E7F, 0x5EA0, 0x5EC1,
    0x5EC2, 0x5EC8, 0x5ED0, 0x5ECF, 0x5ED6, 0x5EE3, 0x5EDD, 0x5EDA,
    0x5EDB, 0x5EE2, 0x5EE1, 0x5EE8, 0x5EE9, 0x5EEC, 0x5EF1, 0x5EF3,
    0x5EF0, 0x5EF4, 0x5EF8, 0x5EFE, 0x5F03, 0x5F09, 0x5F5D, 0x5F5C,
    0x5F0B, 0x5F11, 0x5F16, 0x5F29, 0x5F2D, 0x5F38, 0x5F41, 0x5F48,
    0x5F4C, 0x5F4E, 0x5F2F, 0x5F51, 0x5F56, 0x5F57, 0x5F59, 0x5F61,
    0x5F6D, 0x5F73, 0x5F77, 0x5F83, 0x5F82, 0x5F7F, 0x5F8A, 0x5F88,
    0x5F91, 0x5F87, 0x5F9E, 0x5F99, 0x5F98, 0x5FA0, 0x5FA8, 0x5FAD,
    0x5FBC, 0x5FD6, 0x5FFB, 0x5FE4, 0x5FF8, 0x5FF1, 0x5FDD, 0x60B3,
    0x5FFF, 0x6021, 0x6060, 0x6019, 0x6010, 0x6029, 0x600E, 0x6031,
    0x601B, 0x6015, 0x602B, 0x6026, 0x600F, 0x603A, 0x605A, 0x6041,
    0x606A, 0x6077, 0x605F, 0x604A, 0x6046, 0x604D, 0x6063, 0x6043,
    0x6064, 0x6042, 0x606C, 0x606B, 0x6059, 0x6081, 0x608D, 0x60E7,
    0x6083, 0x609A, 0x6084, 0x609B, 0x6096, 0x6097, 0x6092, 0x60A7,
    0x608B, 0x60E1, 0x60B8, 0x60E0, 0x60D3, 0x60B4, 0x5FF0, 0x60BD,
    0x60C6, 0x60B5, 0x60D8, 0x614D, 0x6115, 0x6106, 0x60F6, 0x60F7,
    0x6100, 0x60F4, 0x60FA, 0x6103, 0x6121, 0x60FB, 0x60F1, 0x610D,
    0x610E, 0x6147, 0x613E, 0x6128, 0x6127, 0x614A, 0x613F, 0x613C,
    0x612C, 0x6134, 0x613D, 0x6142, 0x6144, 0x6173, 0x6177, 0x6158,
    0x6159, 0x615A, 0x616B, 0x6174, 0x616F, 0x6165, 0x6171, 0x615F,
    0x615D, 0x6153, 0x6175, 0x6199, 0x6196, 0x6187, 0x61AC, 0x6194,
    0x619A, 0x618A, 0x6191, 0x61AB, 0x61AE, 0x61CC, 0x61CA, 0x61C9,
    0x61F7, 0x61C8, 0x61C3, 0x61C6, 0x61BA, 0x61CB, 0x7F79, 0x61CD,
    0x61E6, 0x61E3, 0x61F6, 0x61FA, 0x61F4, 0x61FF, 0x61FD, 0x61FC,
    0x61FE, 0x6200, 0x6208, 0x6209, 0x620D, 0x620C, 0x6214, 0x621B,
    0x621E, 0x6221, 0x622A, 0x622E, 0x6230, 0x6232, 0x6233, 0x6241,
    0x624E, 0x625E, 0x6263, 0x625B, 0x6260, 0x6268, 0x627C, 0x6282,
    0x6289, 0x627E, 0x6292, 0x6293, 0x6296, 0x62D4, 0x6283, 0x6294,
    0x62D7, 0x62D1, 0x62BB, 0x62CF, 0x62FF, 0x62C6, 0x64D4, 0x62C8,
    0x62DC, 0x62CC, 0x62CA, 0x62C2, 0x62C7, 0x629B, 0x62C9, 0x630C,
    0x62EE, 0x62F1, 0x6327, 0x6302, 0x6308, 0x62EF, 0x62F5, 0x6350,
    0x633E, 0x634D, 0x641C, 0x634F, 0x6396, 0x638E, 0x6380, 0x63AB,
    0x6376, 0x63A3, 0x638F, 0x6389, 0x639F, 0x63B5, 0x636B, 0x6369,
    0x63BE, 0x63E9, 0x63C0, 0x63C6, 0x63E3, 0x63C9, 0x63D2, 0x63F6,
    0x63C4, 0x6416, 0x6434, 0x6406, 0x6413, 0x6426, 0x6436, 0x651D,
    0x6417, 0x6428, 0x640F, 0x6467, 0x646F, 0x6476, 0x644E, 0x652A,
    0x6495, 0x6493, 0x64A5, 0x64A9, 0x6488, 0x64BC, 0x64DA, 0x64D2,
    0x64C5, 0x64C7, 0x64BB, 0x64D8, 0x64C2, 0x64F1, 0x64E7, 0x8209,
    0x64E0, 0x64E1, 0x62AC, 0x64E3, 0x64EF, 0x652C, 0x64F6, 0x64F4,
    0x64F2, 0x64FA, 0x6500, 0x64FD, 0x6518, 0x651C, 0x6505, 0x6524,
    0x6523, 0x652B, 0x6534, 0x6535, 0x6537, 0x6536, 0x6538, 0x754B,
    0x6548, 0x6556, 0x6555, 0x654D, 0x6558, 0x655E, 0x655D, 0x6572,
    0x6578, 0x6582, 0x6583, 0x8B8A, 0x659B, 0x659F, 0x65AB, 0x65B7,
    0x65C3, 0x65C6, 0x65C1, 0x65C4, 0x65CC, 0x65D2, 0x65DB, 0x65D9,
    0x65E0, 0x65E1, 0x65F1, 0x6772, 0x660A, 0x6603, 0x65FB, 0x6773,
    0x6635, 0x6636, 0x6634, 0x661C, 0x664F, 0x6644, 0x6649, 0x6641,
    0x665E, 0x665D, 0x6664, 0x6667, 0x6668, 0x665F, 0x6662, 0x6670,
    0x6683, 0x6688, 0x668E, 0x6689, 0x6684, 0x6698, 0x669D, 0x66C1,
    0x66B9, 0x66C9, 0x66BE, 0x66BC, 0x66C4, 0x66B8, 0x66D6, 0x66DA,
    0x66E0, 0x663F, 0x66E6, 0x66E9, 0x66F0, 0x66F5, 0x66F7, 0x670F,
    0x6716, 0x671E, 0x6726, 0x6727, 0x9738, 0x672E, 0x673F, 0x6736,
    0x6741, 0x6738, 0x6737, 0x6746, 0x675E, 0x6760, 0x6759, 0x6763,
    0x6764, 0x6789, 0x6770, 0x67A9, 0x677C, 0x676A, 0x678C, 0x678B,
    0x67A6, 0x67A1, 0x6785, 0x67B7, 0x67EF, 0x67B4, 0x67EC, 0x67B3,
    0x67E9, 0x67B8, 0x67E4, 0x67DE, 0x67DD, 0x67E2, 0x67EE, 0x67B9,
    0x67CE, 0x67C6, 0x67E7, 0x6A9C, 0x681E, 0x6846, 0x6829, 0x6840,
    0x684D, 0x6832, 0x684E, 0x68B3, 0x682B, 0x6859, 0x6863, 0x6877,
    0x687F, 0x689F, 0x688F, 0x68AD, 0x6894, 0x689D, 0x689B, 0x6883,
    0x6AAE, 0x68B9, 0x6874, 0x68B5, 0x68A0, 0x68BA, 0x690F, 0x688D,
    0x687E, 0x6901, 0x68CA, 0x6908, 0x68D8, 0x6922, 0x6926, 0x68E1,
    0x690C, 0x68CD, 0x68D4, 0x68E7, 0x68D5, 0x6936, 0x6912, 0x6904,
    0x68D7, 0x68E3, 0x6925, 0x68F9, 0x68E0, 0x68EF, 0x6928, 0x692A,
    0x691A, 0x6923, 0x6921, 0x68C6, 0x6979, 0x6977, 0x695C, 0x6978,
    0x696B, 0x6954, 0x697E, 0x696E, 0x6939, 0x6974, 0x693D, 0x6959,
    0x6930, 0x6961, 0x695E, 0x695D, 0x6981, 0x696A, 0x69B2, 0x69AE,
    0x69D0, 0x69BF, 0x69C1, 0x69D3, 0x69BE, 0x69CE, 0x5BE8, 0x69CA,
    0x69DD, 0x69BB, 0x69C3, 0x69A7, 0x6A2E, 0x6991, 0x69A0, 0x699C,
    0x6995, 0x69B4, 0x69DE, 0x69E8, 0x6A02, 0x6A1B, 0x69FF, 0x6B0A,
    0x69F9, 0x69F2, 0x69E7, 0x6A05, 0x69B1, 0x6A1E, 0x69ED, 0x6A14,
    0x69EB, 0x6A0A, 0x6A12, 0x6AC1, 0x6A23, 0x6A13, 0x6A44, 0x6A0C,
    0x6A72, 0x6A36, 0x6A78, 0x6A47, 0x6A62, 0x6A59, 0x6A66, 0x6A48,
    0x6A38, 0x6A22, 0x6A90, 0x6A8D, 0x6AA0, 0x6A84, 0x6AA2, 0x6AA3,
    0x6A97, 0x8617, 0x6ABB, 0x6AC3, 0x6AC2, 0x6AB8, 0x6AB3, 0x6AAC,
    0x6ADE, 0x6AD1, 0x6ADF, 0x6AAA, 0x6ADA, 0x6AEA, 0x6AFB, 0x6B05,
    0x8616, 0x6AFA, 0x6B12, 0x6B16, 0x9B31, 0x6B1F, 0x6B38, 0x6B37,
    0x76DC, 0x6B39, 0x98EE, 0x6B47, 0x6B43, 0x6B49, 0x6B50, 0x6B59,
    0x6B54, 0x6B5B, 0x6B5F, 0x6B61, 0x6B78, 0x6B79, 0x6B7F, 0x6B80,
    0x6B84, 0x6B83, 0x6B8D, 0x6B98, 0x6B95, 0x6B9E, 0x6BA4, 0x6BAA,
    0x6BAB, 0x6BAF, 0x6BB2, 0x6BB1, 0x6BB3, 0x6BB7, 0x6BBC, 0x6BC6,
    0x6BCB, 0x6BD3, 0x6BDF, 0x6BEC, 0x6BEB, 0x6BF3, 0x6BEF, 0x9EBE,
    0x6C08, 0x6C13, 0x6C14, 0x6C1B, 0x6C24, 0x6C23, 0x6C5E, 0x6C55,
    0x6C62, 0x6C6A, 0x6C82, 0x6C8D, 0x6C9A, 0x6C81, 0x6C9B, 0x6C7E,
    0x6C68, 0x6C73, 0x6C92, 0x6C90, 0x6CC4, 0x6CF1, 0x6CD3, 0x6CBD,
    0x6CD7, 0x6CC5, 0x6CDD, 0x6CAE, 0x6CB1, 0x6CBE, 0x6CBA, 0x6CDB,
    0x6CEF, 0x6CD9, 0x6CEA, 0x6D1F, 0x884D, 0x6D36, 0x6D2B, 0x6D3D,
    0x6D38, 0x6D19, 0x6D35, 0x6D33, 0x6D12, 0x6D0C, 0x6D63, 0x6D93,
    0x6D64, 0x6D5A, 0x6D79, 0x6D59, 0x6D8E, 0x6D95, 0x6FE4, 0x6D85,
    0x6DF9, 0x6E15, 0x6E0A, 0x6DB5, 0x6DC7, 0x6DE6, 0x6DB8, 0x6DC6,
    0x6DEC, 0x6DDE, 0x6DCC, 0x6DE8, 0x6DD2, 0x6DC5, 0x6DFA, 0x6DD9,
    0x6DE4, 0x6DD5, 0x6DEA, 0x6DEE, 0x6E2D, 0x6E6E, 0x6E2E, 0x6E19,
    0x6E72, 0x6E5F, 0x6E3E, 0x6E23, 0x6E6B, 0x6E2B, 0x6E76, 0x6E4D,
    0x6E1F, 0x6E43, 0x6E3A, 0x6E4E, 0x6E24, 0x6EFF, 0x6E1D, 0x6E38,
    0x6E82, 0x6EAA, 0x6E98, 0x6EC9, 0x6EB7, 0x6ED3, 0x6EBD, 0x6EAF,
    0x6EC4, 0x6EB2, 0x6ED4, 0x6ED5, 0x6E8F, 0x6EA5, 0x6EC2, 0x6E9F,
    0x6F41, 0x6F11, 0x704C, 0x6EEC, 0x6EF8, 0x6EFE, 0x6F3F, 0x6EF2,
    0x6F31, 0x6EEF, 0x6F32, 0x6ECC, 0x6F3E, 0x6F13, 0x6EF7, 0x6F86,
    0x6F7A, 0x6F78, 0x6F81, 0x6F80, 0x6F6F, 0x6F5B, 0x6FF3, 0x6F6D,
    0x6F82, 0x6F7C, 0x6F58, 0x6F8E, 0x6F91, 0x6FC2, 0x6F66, 0x6FB3,
    0x6FA3, 0x6FA1, 0x6FA4, 0x6FB9, 0x6FC6, 0x6FAA, 0x6FDF, 0x6FD5,
    0x6FEC, 0x6FD4, 0x6FD8, 0x6FF1, 0x6FEE, 0x6FDB, 0x7009, 0x700B,
    0x6FFA, 0x7011, 0x7001, 0x700F, 0x6FFE, 0x701B, 0x701A, 0x6F74,
    0x701D, 0x7018, 0x701F, 0x7030, 0x703E, 0x7032, 0x7051, 0x7063,
    0x7099, 0x7092, 0x70AF, 0x70F1, 0x70AC, 0x70B8, 0x70B3, 0x70AE,
    0x70DF, 0x70CB, 0x70DD, 0x70D9, 0x7109, 0x70FD, 0x711C, 0x7119,
    0x7165, 0x7155, 0x7188, 0x7166, 0x7162, 0x714C, 0x7156, 0x716C,
    0x718F, 0x71FB, 0x7184, 0x7195, 0x71A8, 0x71AC, 0x71D7, 0x71B9,
    0x71BE, 0x71D2, 0x71C9, 0x71D4, 0x71CE, 0x71E0, 0x71EC, 0x71E7,
    0x71F5, 0x71FC, 0x71F9, 0x71FF, 0x720D, 0x7210, 0x721B, 0x7228,
    0x722D, 0x722C, 0x7230, 0x7232, 0x723B, 0x723C, 0x723F, 0x7240,
    0x7246, 0x724B, 0x7258, 0x7274, 0x727E, 0x7282, 0x7281, 0x7287,
    0x7292, 0x7296, 0x72A2, 0x72A7, 0x72B9, 0x72B2, 0x72C3, 0x72C6,
    0x72C4, 0x72CE, 0x72D2, 0x72E2, 0x72E0, 0x72E1, 0x72F9, 0x72F7,
    0x500F, 0x7317, 0x730A, 0x731C, 0x7316, 0x731D, 0x7334, 0x732F,
    0x7329, 0x7325, 0x733E, 0x734E, 0x734F, 0x9ED8, 0x7357, 0x736A,
    0x7368, 0x7370, 0x7378, 0x7375, 0x737B, 0x737A, 0x73C8, 0x73B3,
    0x73CE, 0x73BB, 0x73C0, 0x73E5, 0x73EE, 0x73DE, 0x74A2, 0x7405,
    0x746F, 0x7425, 0x73F8, 0x7432, 0x743A, 0x7455, 0x743F, 0x745F,
    0x7459, 0x7441, 0x745C, 0x7469, 0x7470, 0x7463, 0x746A, 0x7476,
    0x747E, 0x748B, 0x749E, 0x74A7, 0x74CA, 0x74CF, 0x74D4, 0x73F1,
    0x74E0, 0x74E3, 0x74E7, 0x74E9, 0x74EE, 0x74F2, 0x74F0, 0x74F1,
    0x74F8, 0x74F7, 0x7504, 0x7503, 0x7505, 0x750C, 0x750E, 0x750D,
    0x7515, 0x7513, 0x751E, 0x7526, 0x752C, 0x753C, 0x7544, 0x754D,
    0x754A, 0x7549, 0x755B, 0x7546, 0x755A, 0x7569, 0x7564, 0x7567,
    0x756B, 0x756D, 0x7578, 0x7576, 0x7586, 0x7587, 0x7574, 0x758A,
    0x7589, 0x7582, 0x7594, 0x759A, 0x759D, 0x75A5, 0x75A3, 0x75C2,
    0x75B3, 0x75C3, 0x75B5, 0x75BD, 0x75B8, 0x75BC, 0x75B1, 0x75CD,
    0x75CA, 0x75D2, 0x75D9, 0x75E3, 0x75DE, 0x75FE, 0x75FF, 0x75FC,
    0x7601, 0x75F0, 0x75FA, 0x75F2, 0x75F3, 0x760B, 0x760D, 0x7609,
    0x761F, 0x7627, 0x7620, 0x7621, 0x7622, 0x7624, 0x7634, 0x7630,
    0x763B, 0x7647, 0x7648, 0x7646, 0x765C, 0x7658, 0x7661, 0x7662,
    0x7668, 0x7669, 0x766A, 0x7667, 0x766C, 0x7670, 0x7672, 0x7676,
    0x7678, 0x767C, 0x7680, 0x7683, 0x7688, 0x768B, 0x768E, 0x7696,
    0x7693, 0x7699, 0x769A, 0x76B0, 0x76B4, 0x76B8, 0x76B9, 0x76BA,
    0x76C2, 0x76CD, 0x76D6, 0x76D2, 0x76DE, 0x76E1, 0x76E5, 0x76E7,
    0x76EA, 0x862F, 0x76FB, 0x7708, 0x7707, 0x7704, 0x7729, 0x7724,
    0x771E, 0x7725, 0x7726, 0x771B, 0x7737, 0x7738, 0x7747, 0x775A,
    0x7768, 0x776B, 0x775B, 0x7765, 0x777F, 0x777E, 0x7779, 0x778E,
    0x778B, 0x7791, 0x77A0, 0x779E, 0x77B0, 0x77B6, 0x77B9, 0x77BF,
    0x77BC, 0x77BD, 0x77BB, 0x77C7, 0x77CD, 0x77D7, 0x77DA, 0x77DC,
    0x77E3, 0x77EE, 0x77FC, 0x780C, 0x7812, 0x7926, 0x7820, 0x792A,
    0x7845, 0x788E, 0x7874, 0x7886, 0x787C, 0x789A, 0x788C, 0x78A3,
    0x78B5, 0x78AA, 0x78AF, 0x78D1, 0x78C6, 0x78CB, 0x78D4, 0x78BE,
    0x78BC, 0x78C5, 0x78CA, 0x78EC, 0x78E7, 0x78DA, 0x78FD, 0x78F4,
    0x7907, 0x7912, 0x7911, 0x7919, 0x792C, 0x792B, 0x7940, 0x7960,
    0x7957, 0x795F, 0x795A, 0x7955, 0x7953, 0x797A, 0x797F, 0x798A,
    0x799D, 0x79A7, 0x9F4B, 0x79AA, 0x79AE, 0x79B3, 0x79B9, 0x79BA,
    0x79C9, 0x79D5, 0x79E7, 0x79EC, 0x79E1, 0x79E3, 0x7A08, 0x7A0D,
    0x7A18, 0x7A19, 0x7A20, 0x7A1F, 0x7980, 0x7A31, 0x7A3B, 0x7A3E,
    0x7A37, 0x7A43, 0x7A57, 0x7A49, 0x7A61, 0x7A62, 0x7A69, 0x9F9D,
    0x7A70, 0x7A79, 0x7A7D, 0x7A88, 0x7A97, 0x7A95, 0x7A98, 0x7A96,
    0x7AA9, 0x7AC8, 0x7AB0, 0x7AB6, 0x7AC5, 0x7AC4, 0x7ABF, 0x9083,
    0x7AC7, 0x7ACA, 0x7ACD, 0x7ACF, 0x7AD5, 0x7AD3, 0x7AD9, 0x7ADA,
    0x7ADD, 0x7AE1, 0x7AE2, 0x7AE6, 0x7AED, 0x7AF0, 0x7B02, 0x7B0F,
    0x7B0A, 0x7B06, 0x7B33, 0x7B18, 0x7B19, 0x7B1E, 0x7B35, 0x7B28,
    0x7B36, 0x7B50, 0x7B7A, 0x7B04, 0x7B4D, 0x7B0B, 0x7B4C, 0x7B45,
    0x7B75, 0x7B65, 0x7B74, 0x7B67, 0x7B70, 0x7B71, 0x7B6C, 0x7B6E,
    0x7B9D, 0x7B98, 0x7B9F, 0x7B8D, 0x7B9C, 0x7B9A, 0x7B8B, 0x7B92,
    0x7B8F, 0x7B5D, 0x7B99, 0x7BCB, 0x7BC1, 0x7BCC, 0x7BCF, 0x7BB4,
    0x7BC6, 0x7BDD, 0x7BE9, 0x7C11, 0x7C14, 0x7BE6, 0x7BE5, 0x7C60,
    0x7C00, 0x7C07, 0x7C13, 0x7BF3, 0x7BF7, 0x7C17, 0x7C0D, 0x7BF6,
    0x7C23, 0x7C27, 0x7C2A, 0x7C1F, 0x7C37, 0x7C2B, 0x7C3D, 0x7C4C,
    0x7C43, 0x7C54, 0x7C4F, 0x7C40, 0x7C50, 0x7C58, 0x7C5F, 0x7C64,
    0x7C56, 0x7C65, 0x7C6C, 0x7C75, 0x7C83, 0x7C90, 0x7CA4, 0x7CAD,
    0x7CA2, 0x7CAB, 0x7CA1, 0x7CA8, 0x7CB3, 0x7CB2, 0x7CB1, 0x7CAE,
    0x7CB9, 0x7CBD, 0x7CC0, 0x7CC5, 0x7CC2, 0x7CD8, 0x7CD2, 0x7CDC,
    0x7CE2, 0x9B3B, 0x7CEF, 0x7CF2, 0x7CF4, 0x7CF6, 0x7CFA, 0x7D06,
    0x7D02, 0x7D1C, 0x7D15, 0x7D0A, 0x7D45, 0x7D4B, 0x7D2E, 0x7D32,
    0x7D3F, 0x7D35, 0x7D46, 0x7D73, 0x7D56, 0x7D4E, 0x7D72, 0x7D68,
    0x7D6E, 0x7D4F, 0x7D63, 0x7D93, 0x7D89, 0x7D5B, 0x7D8F, 0x7D7D,
    0x7D9B, 0x7DBA, 0x7DAE, 0x7DA3, 0x7DB5, 0x7DC7, 0x7DBD, 0x7DAB,
    0x7E3D, 0x7DA2, 0x7DAF, 0x7DDC, 0x7DB8, 0x7D9F, 0x7DB0, 0x7DD8,
    0x7DDD, 0x7DE4, 0x7DDE, 0x7DFB, 0x7DF2, 0x7DE1, 0x7E05, 0x7E0A,
    0x7E23, 0x7E21, 0x7E12, 0x7E31, 0x7E1F, 0x7E09, 0x7E0B, 0x7E22,
    0x7E46, 0x7E66, 0x7E3B, 0x7E35, 0x7E39, 0x7E43, 0x7E37, 0x7E32,
    0x7E3A, 0x7E67, 0x7E5D, 0x7E56, 0x7E5E, 0x7E59, 0x7E5A, 0x7E79,
    0x7E6A, 0x7E69, 0x7E7C, 0x7E7B, 0x7E83, 0x7DD5, 0x7E7D, 0x8FAE,
    0x7E7F, 0x7E88, 0x7E89, 0x7E8C, 0x7E92, 0x7E90, 0x7E93, 0x7E94,
    0x7E96, 0x7E8E, 0x7E9B, 0x7E9C, 0x7F38, 0x7F3A, 0x7F45, 0x7F4C,
    0x7F4D, 0x7F4E, 0x7F50, 0x7F51, 0x7F55, 0x7F54, 0x7F58, 0x7F5F,
    0x7F60, 0x7F68, 0x7F69, 0x7F67, 0x7F78, 0x7F82, 0x7F86, 0x7F83,
    0x7F88, 0x7F87, 0x7F8C, 0x7F94, 0x7F9E, 0x7F9D, 0x7F9A, 0x7FA3,
    0x7FAF, 0x7FB2, 0x7FB9, 0x7FAE, 0x7FB6, 0x7FB8, 0x8B71, 0x7FC5,
    0x7FC6, 0x7FCA, 0x7FD5, 0x7FD4, 0x7FE1, 0x7FE6, 0x7FE9, 0x7FF3,
    0x7FF9, 0x98DC, 0x8006, 0x8004, 0x800B, 0x8012, 0x8018, 0x8019,
    0x801C, 0x8021, 0x8028, 0x803F, 0x803B, 0x804A, 0x8046, 0x8052,
    0x8058, 0x805A, 0x805F, 0x8062, 0x8068, 0x8073, 0x8072, 0x8070,
    0x8076, 0x8079, 0x807D, 0x807F, 0x8084, 0x8086, 0x8085, 0x809B,
    0x8093, 0x809A, 0x80AD, 0x5190, 0x80AC, 0x80DB, 0x80E5, 0x80D9,
    0x80DD, 0x80C4, 0x80DA, 0x80D6, 0x8109, 0x80EF, 0x80F1, 0x811B,
    0x8129, 0x8123, 0x812F, 0x814B, 0x968B, 0x8146, 0x813E, 0x8153,
    0x8151, 0x80FC, 0x8171, 0x816E, 0x8165, 0x8166, 0x8174, 0x8183,
    0x8188, 0x818A, 0x8180, 0x8182, 0x81A0, 0x8195, 0x81A4, 0x81A3,
    0x815F, 0x8193, 0x81A9, 0x81B0, 0x81B5, 0x81BE, 0x81B8, 0x81BD,
    0x81C0, 0x81C2, 0x81BA, 0x81C9, 0x81CD, 0x81D1, 0x81D9, 0x81D8,
    0x81C8, 0x81DA, 0x81DF, 0x81E0, 0x81E7, 0x81FA, 0x81FB, 0x81FE,
    0x8201, 0x8202, 0x8205, 0x8207, 0x820A, 0x820D, 0x8210, 0x8216,
    0x8229, 0x822B, 0x8238, 0x8233, 0x8240, 0x8259, 0x8258, 0x825D,
    0x825A, 0x825F, 0x8264, 0x8262, 0x8268, 0x826A, 0x826B, 0x822E,
    0x8271, 0x8277, 0x8278, 0x827E, 0x828D, 0x8292, 0x82AB, 0x829F,
    0x82BB, 0x82AC, 0x82E1, 0x82E3, 0x82DF, 0x82D2, 0x82F4, 0x82F3,
    0x82FA, 0x8393, 0x8303, 0x82FB, 0x82F9, 0x82DE, 0x8306, 0x82DC,
    0x8309, 0x82D9, 0x8335, 0x8334, 0x8316, 0x8332, 0x8331, 0x8340,
    0x8339, 0x8350, 0x8345, 0x832F, 0x832B, 0x8317, 0x8318, 0x8385,
    0x839A, 0x83AA, 0x839F, 0x83A2, 0x8396, 0x8323, 0x838E, 0x8387,
    0x838A, 0x837C, 0x83B5, 0x8373, 0x8375, 0x83A0, 0x8389, 0x83A8,
    0x83F4, 0x8413, 0x83EB, 0x83CE, 0x83FD, 0x8403, 0x83D8, 0x840B,
    0x83C1, 0x83F7, 0x8407, 0x83E0, 0x83F2, 0x840D, 0x8422, 0x8420,
    0x83BD, 0x8438, 0x8506, 0x83FB, 0x846D, 0x842A, 0x843C, 0x855A,
    0x8484, 0x8477, 0x846B, 0x84AD, 0x846E, 0x8482, 0x8469, 0x8446,
    0x842C, 0x846F, 0x8479, 0x8435, 0x84CA, 0x8462, 0x84B9, 0x84BF,
    0x849F, 0x84D9, 0x84CD, 0x84BB, 0x84DA, 0x84D0, 0x84C1, 0x84C6,
    0x84D6, 0x84A1, 0x8521, 0x84FF, 0x84F4, 0x8517, 0x8518, 0x852C,
    0x851F, 0x8515, 0x8514, 0x84FC, 0x8540, 0x8563, 0x8558, 0x8548,
    0x8541, 0x8602, 0x854B, 0x8555, 0x8580, 0x85A4, 0x8588, 0x8591,
    0x858A, 0x85A8, 0x856D, 0x8594, 0x859B, 0x85EA, 0x8587, 0x859C,
    0x8577, 0x857E, 0x8590, 0x85C9, 0x85BA, 0x85CF, 0x85B9, 0x85D0,
    0x85D5, 0x85DD, 0x85E5, 0x85DC, 0x85F9, 0x860A, 0x8613, 0x860B,
    0x85FE, 0x85FA, 0x8606, 0x8622, 0x861A, 0x8630, 0x863F, 0x864D,
    0x4E55, 0x8654, 0x865F, 0x8667, 0x8671, 0x8693, 0x86A3, 0x86A9,
    0x86AA, 0x868B, 0x868C, 0x86B6, 0x86AF, 0x86C4, 0x86C6, 0x86B0,
    0x86C9, 0x8823, 0x86AB, 0x86D4, 0x86DE, 0x86E9, 0x86EC, 0x86DF,
    0x86DB, 0x86EF, 0x8712, 0x8706, 0x8708, 0x8700, 0x8703, 0x86FB,
    0x8711, 0x8709, 0x870D, 0x86F9, 0x870A, 0x8734, 0x873F, 0x8737,
    0x873B, 0x8725, 0x8729, 0x871A, 0x8760, 0x875F, 0x8778, 0x874C,
    0x874E, 0x8774, 0x8757, 0x8768, 0x876E, 0x8759, 0x8753, 0x8763,
    0x876A, 0x8805, 0x87A2, 0x879F, 0x8782, 0x87AF, 0x87CB, 0x87BD,
    0x87C0, 0x87D0, 0x96D6, 0x87AB, 0x87C4, 0x87B3, 0x87C7, 0x87C6,
    0x87BB, 0x87EF, 0x87F2, 0x87E0, 0x880F, 0x880D, 0x87FE, 0x87F6,
    0x87F7, 0x880E, 0x87D2, 0x8811, 0x8816, 0x8815, 0x8822, 0x8821,
    0x8831, 0x8836, 0x8839, 0x8827, 0x883B, 0x8844, 0x8842, 0x8852,
    0x8859, 0x885E, 0x8862, 0x886B, 0x8881, 0x887E, 0x889E, 0x8875,
    0x887D, 0x88B5, 0x8872, 0x8882, 0x8897, 0x8892, 0x88AE, 0x8899,
    0x88A2, 0x888D, 0x88A4, 0x88B0, 0x88BF, 0x88B1, 0x88C3, 0x88C4,
    0x88D4, 0x88D8, 0x88D9, 0x88DD, 0x88F9, 0x8902, 0x88FC, 0x88F4,
    0x88E8, 0x88F2, 0x8904, 0x890C, 0x890A, 0x8913, 0x8943, 0x891E,
    0x8925, 0x892A, 0x892B, 0x8941, 0x8944, 0x893B, 0x8936, 0x8938,
    0x894C, 0x891D, 0x8960, 0x895E, 0x8966, 0x8964, 0x896D, 0x896A,
    0x896F, 0x8974, 0x8977, 0x897E, 0x8983, 0x8988, 0x898A, 0x8993,
    0x8998, 0x89A1, 0x89A9, 0x89A6, 0x89AC, 0x89AF, 0x89B2, 0x89BA,
    0x89BD, 0x89BF, 0x89C0, 0x89DA, 0x89DC, 0x89DD, 0x89E7, 0x89F4,
    0x89F8, 0x8A03, 0x8A16, 0x8A10, 0x8A0C, 0x8A1B, 0x8A1D, 0x8A25,
    0x8A36, 0x8A41, 0x8A5B, 0x8A52, 0x8A46, 0x8A48, 0x8A7C, 0x8A6D,
    0x8A6C, 0x8A62, 0x8A85, 0x8A82, 0x8A84, 0x8AA8, 0x8AA1, 0x8A91,
    0x8AA5, 0x8AA6, 0x8A9A, 0x8AA3, 0x8AC4, 0x8ACD, 0x8AC2, 0x8ADA,
    0x8AEB, 0x8AF3, 0x8AE7, 0x8AE4, 0x8AF1, 0x8B14, 0x8AE0, 0x8AE2,
    0x8AF7, 0x8ADE, 0x8ADB, 0x8B0C, 0x8B07, 0x8B1A, 0x8AE1, 0x8B16,
    0x8B10, 0x8B17, 0x8B20, 0x8B33, 0x97AB, 0x8B26, 0x8B2B, 0x8B3E,
    0x8B28, 0x8B41, 0x8B4C, 0x8B4F, 0x8B4E, 0x8B49, 0x8B56, 0x8B5B,
    0x8B5A, 0x8B6B, 0x8B5F, 0x8B6C, 0x8B6F, 0x8B74, 0x8B7D, 0x8B80,
    0x8B8C, 0x8B8E, 0x8B92, 0x8B93, 0x8B96, 0x8B99, 0x8B9A, 0x8C3A,
    0x8C41, 0x8C3F, 0x8C48, 0x8C4C, 0x8C4E, 0x8C50, 0x8C55, 0x8C62,
    0x8C6C, 0x8C78, 0x8C7A, 0x8C82, 0x8C89, 0x8C85, 0x8C8A, 0x8C8D,
    0x8C8E, 0x8C94, 0x8C7C, 0x8C98, 0x621D, 0x8CAD, 0x8CAA, 0x8CBD,
    0x8CB2, 0x8CB3, 0x8CAE, 0x8CB6, 0x8CC8, 0x8CC1, 0x8CE4, 0x8CE3,
    0x8CDA, 0x8CFD, 0x8CFA, 0x8CFB, 0x8D04, 0x8D05, 0x8D0A, 0x8D07,
    0x8D0F, 0x8D0D, 0x8D10, 0x9F4E, 0x8D13, 0x8CCD, 0x8D14, 0x8D16,
    0x8D67, 0x8D6D, 0x8D71, 0x8D73, 0x8D81, 0x8D99, 0x8DC2, 0x8DBE,
    0x8DBA, 0x8DCF, 0x8DDA, 0x8DD6, 0x8DCC, 0x8DDB, 0x8DCB, 0x8DEA,
    0x8DEB, 0x8DDF, 0x8DE3, 0x8DFC, 0x8E08, 0x8E09, 0x8DFF, 0x8E1D,
    0x8E1E, 0x8E10, 0x8E1F, 0x8E42, 0x8E35, 0x8E30, 0x8E34, 0x8E4A,
    0x8E47, 0x8E49, 0x8E4C, 0x8E50, 0x8E48, 0x8E59, 0x8E64, 0x8E60,
    0x8E2A, 0x8E63, 0x8E55, 0x8E76, 0x8E72, 0x8E7C, 0x8E81, 0x8E87,
    0x8E85, 0x8E84, 0x8E8B, 0x8E8A, 0x8E93, 0x8E91, 0x8E94, 0x8E99,
    0x8EAA, 0x8EA1, 0x8EAC, 0x8EB0, 0x8EC6, 0x8EB1, 0x8EBE, 0x8EC5,
    0x8EC8, 0x8ECB, 0x8EDB, 0x8EE3, 0x8EFC, 0x8EFB, 0x8EEB, 0x8EFE,
    0x8F0A, 0x8F05, 0x8F15, 0x8F12, 0x8F19, 0x8F13, 0x8F1C, 0x8F1F,
    0x8F1B, 0x8F0C, 0x8F26, 0x8F33, 0x8F3B, 0x8F39, 0x8F45, 0x8F42,
    0x8F3E, 0x8F4C, 0x8F49, 0x8F46, 0x8F4E, 0x8F57, 0x8F5C, 0x8F62,
    0x8F63, 0x8F64, 0x8F9C, 0x8F9F, 0x8FA3, 0x8FAD, 0x8FAF, 0x8FB7,
    0x8FDA, 0x8FE5, 0x8FE2, 0x8FEA, 0x8FEF, 0x9087, 0x8FF4, 0x9005,
    0x8FF9, 0x8FFA, 0x9011, 0x9015, 0x9021, 0x900D, 0x901E, 0x9016,
    0x900B, 0x9027, 0x9036, 0x9035, 0x9039, 0x8FF8, 0x904F, 0x9050,
    0x9051, 0x9052, 0x900E, 0x9049, 0x903E, 0x9056, 0x9058, 0x905E,
    0x9068, 0x906F, 0x9076, 0x96A8, 0x9072, 0x9082, 0x907D, 0x9081,
    0x9080, 0x908A, 0x9089, 0x908F, 0x90A8, 0x90AF, 0x90B1, 0x90B5,
    0x90E2, 0x90E4, 0x6248, 0x90DB, 0x9102, 0x9112, 0x9119, 0x9132,
    0x9130, 0x914A, 0x9156, 0x9158, 0x9163, 0x9165, 0x9169, 0x9173,
    0x9172, 0x918B, 0x9189, 0x9182, 0x91A2, 0x91AB, 0x91AF, 0x91AA,
    0x91B5, 0x91B4, 0x91BA, 0x91C0, 0x91C1, 0x91C9, 0x91CB, 0x91D0,
    0x91D6, 0x91DF, 0x91E1, 0x91DB, 0x91FC, 0x91F5, 0x91F6, 0x921E,
    0x91FF, 0x9214, 0x922C, 0x9215, 0x9211, 0x925E, 0x9257, 0x9245,
    0x9249, 0x9264, 0x9248, 0x9295, 0x923F, 0x924B, 0x9250, 0x929C,
    0x9296, 0x9293, 0x929B, 0x925A, 0x92CF, 0x92B9, 0x92B7, 0x92E9,
    0x930F, 0x92FA, 0x9344, 0x932E, 0x9319, 0x9322, 0x931A, 0x9323,
    0x933A, 0x9335, 0x933B, 0x935C, 0x9360, 0x937C, 0x936E, 0x9356,
    0x93B0, 0x93AC, 0x93AD, 0x9394, 0x93B9, 0x93D6, 0x93D7, 0x93E8,
    0x93E5, 0x93D8, 0x93C3, 0x93DD, 0x93D0, 0x93C8, 0x93E4, 0x941A,
    0x9414, 0x9413, 0x9403, 0x9407, 0x9410, 0x9436, 0x942B, 0x9435,
    0x9421, 0x943A, 0x9441, 0x9452, 0x9444, 0x945B, 0x9460, 0x9462,
    0x945E, 0x946A, 0x9229, 0x9470, 0x9475, 0x9477, 0x947D, 0x945A,
    0x947C, 0x947E, 0x9481, 0x947F, 0x9582, 0x9587, 0x958A, 0x9594,
    0x9596, 0x9598, 0x9599, 0x95A0, 0x95A8, 0x95A7, 0x95AD, 0x95BC,
    0x95BB, 0x95B9, 0x95BE, 0x95CA, 0x6FF6, 0x95C3, 0x95CD, 0x95CC,
    0x95D5, 0x95D4, 0x95D6, 0x95DC, 0x95E1, 0x95E5, 0x95E2, 0x9621,
    0x9628, 0x962E, 0x962F, 0x9642, 0x964C, 0x964F, 0x964B, 0x9677,
    0x965C, 0x965E, 0x965D, 0x965F, 0x9666, 0x9672, 0x966C, 0x968D,
    0x9698, 0x9695, 0x9697, 0x96AA, 0x96A7, 0x96B1, 0x96B2, 0x96B0,
    0x96B4, 0x96B6, 0x96B8, 0x96B9, 0x96CE, 0x96CB, 0x96C9, 0x96CD,
    0x894D, 0x96DC, 0x970D, 0x96D5, 0x96F9, 0x9704, 0x9706, 0x9708,
    0x9713, 0x970E, 0x9711, 0x970F, 0x9716, 0x9719, 0x9724, 0x972A,
    0x9730, 0x9739, 0x973D, 0x973E, 0x9744, 0x9746, 0x9748, 0x9742,
    0x9749, 0x975C, 0x9760, 0x9764, 0x9766, 0x9768, 0x52D2, 0x976B,
    0x9771, 0x9779, 0x9785, 0x977C, 0x9781, 0x977A, 0x9786, 0x978B,
    0x978F, 0x9790, 0x979C, 0x97A8, 0x97A6, 0x97A3, 0x97B3, 0x97B4,
    0x97C3, 0x97C6, 0x97C8, 0x97CB, 0x97DC, 0x97ED, 0x9F4F, 0x97F2,
    0x7ADF, 0x97F6, 0x97F5, 0x980F, 0x980C, 0x9838, 0x9824, 0x9821,
    0x9837, 0x983D, 0x9846, 0x984F, 0x984B, 0x986B, 0x986F, 0x9870,
    0x9871, 0x9874, 0x9873, 0x98AA, 0x98AF, 0x98B1, 0x98B6, 0x98C4,
    0x98C3, 0x98C6, 0x98E9, 0x98EB, 0x9903, 0x9909, 0x9912, 0x9914,
    0x9918, 0x9921, 0x991D, 0x991E, 0x9924, 0x9920, 0x992C, 0x992E,
    0x993D, 0x993E, 0x9942, 0x9949, 0x9945, 0x9950, 0x994B, 0x9951,
    0x9952, 0x994C, 0x9955, 0x9997, 0x9998, 0x99A5, 0x99AD, 0x99AE,
    0x99BC, 0x99DF, 0x99DB, 0x99DD, 0x99D8, 0x99D1, 0x99ED, 0x99EE,
    0x99F1, 0x99F2, 0x99FB, 0x99F8, 0x9A01, 0x9A0F, 0x9A05, 0x99E2,
    0x9A19, 0x9A2B, 0x9A37, 0x9A45, 0x9A42, 0x9A40, 0x9A43, 0x9A3E,
    0x9A55, 0x9A4D, 0x9A5B, 0x9A57, 0x9A5F, 0x9A62, 0x9A65, 0x9A64,
    0x9A69, 0x9A6B, 0x9A6A, 0x9AAD, 0x9AB0, 0x9ABC, 0x9AC0, 0x9ACF,
    0x9AD1, 0x9AD3, 0x9AD4, 0x9ADE, 0x9ADF, 0x9AE2, 0x9AE3, 0x9AE6,
    0x9AEF, 0x9AEB, 0x9AEE, 0x9AF4, 0x9AF1, 0x9AF7, 0x9AFB, 0x9B06,
    0x9B18, 0x9B1A, 0x9B1F, 0x9B22, 0x9B23, 0x9B25, 0x9B27, 0x9B28,
    0x9B29, 0x9B2A, 0x9B2E, 0x9B2F, 0x9B32, 0x9B44, 0x9B43, 0x9B4F,
    0x9B4D, 0x9B4E, 0x9B51, 0x9B58, 0x9B74, 0x9B93, 0x9B83, 0x9B91,
    0x9B96, 0x9B97, 0x9B9F, 0x9BA0, 0x9BA8, 0x9BB4, 0x9BC0, 0x9BCA,
    0x9BB9, 0x9BC6, 0x9BCF, 0x9BD1, 0x9BD2, 0x9BE3, 0x9BE2, 0x9BE4,
    0x9BD4, 0x9BE1, 0x9C3A, 0x9BF2, 0x9BF1, 0x9BF0, 0x9C15, 0x9C14,
    0x9C09, 0x9C13, 0x9C0C, 0x9C06, 0x9C08, 0x9C12, 0x9C0A, 0x9C04,
    0x9C2E, 0x9C1B, 0x9C25, 0x9C24, 0x9C21, 0x9C30, 0x9C47, 0x9C32,
    0x9C46, 0x9C3E, 0x9C5A, 0x9C60, 0x9C67, 0x9C76, 0x9C78, 0x9CE7,
    0x9CEC, 0x9CF0, 0x9D09, 0x9D08, 0x9CEB, 0x9D03, 0x9D06, 0x9D2A,
    0x9D26, 0x9DAF, 0x9D23, 0x9D1F, 0x9D44, 0x9D15, 0x9D12, 0x9D41,
    0x9D3F, 0x9D3E, 0x9D46, 0x9D48, 0x9D5D, 0x9D5E, 0x9D64, 0x9D51,
    0x9D50, 0x9D59, 0x9D72, 0x9D89, 0x9D87, 0x9DAB, 0x9D6F, 0x9D7A,
    0x9D9A, 0x9DA4, 0x9DA9, 0x9DB2, 0x9DC4, 0x9DC1, 0x9DBB, 0x9DB8,
    0x9DBA, 0x9DC6, 0x9DCF, 0x9DC2, 0x9DD9, 0x9DD3, 0x9DF8, 0x9DE6,
    0x9DED, 0x9DEF, 0x9DFD, 0x9E1A, 0x9E1B, 0x9E1E, 0x9E75, 0x9E79,
    0x9E7D, 0x9E81, 0x9E88, 0x9E8B, 0x9E8C, 0x9E92, 0x9E95, 0x9E91,
    0x9E9D, 0x9EA5, 0x9EA9, 0x9EB8, 0x9EAA, 0x9EAD, 0x9761, 0x9ECC,
    0x9ECE, 0x9ECF, 0x9ED0, 0x9ED4, 0x9EDC, 0x9EDE, 0x9EDD, 0x9EE0,
    0x9EE5, 0x9EE8, 0x9EEF, 0x9EF4, 0x9EF6, 0x9EF7, 0x9EF9, 0x9EFB,
    0x9EFC, 0x9EFD, 0x9F07, 0x9F08, 0x76B7, 0x9F15, 0x9F21, 0x9F2C,
    0x9F3E, 0x9F4A, 0x9F52, 0x9F54, 0x9F63, 0x9F5F, 0x9F60, 0x9F61,
    0x9F66, 0x9F67, 0x9F6C, 0x9F6A, 0x9F77, 0x9F72, 0x9F76, 0x9F95,
    0x9F9C, 0x9FA0, 0x582F, 0x69C7, 0x9059, 0x7464, 0x51DC, 0x7199,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
];

static BACKWARD: [(u16, u8, u8); 6879] = [
    (0x00A2, 0, 80), (0x00A3, 0, 81), (0x00A7, 0, 87), (0x00A8, 0, 14), (0x00AC, 1, 43),
    (0x00B0, 0, 74), (0x00B1, 0, 61), (0x00B4, 0, 12), (0x00B6, 1, 88), (0x00D7, 0, 62),
    (0x00F7, 0, 63), (0x0391, 5, 0), (0x0392, 5, 1), (0x0393, 5, 2), (0x0394, 5, 3),
    (0x0395, 5, 4), (0x0396, 5, 5), (0x0397, 5, 6), (0x0398, 5, 7), (0x0399, 5, 8),
    (0x039A, 5, 9), (0x039B, 5, 10), (0x039C, 5, 11), (0x039D, 5, 12), (0x039E, 5, 13),
    (0x039F, 5, 14), (0x03A0, 5, 15), (0x03A1, 5, 16), (0x03A3, 5, 17), (0x03A4, 5, 18),
    (0x03A5, 5, 19), (0x03A6, 5, 20), (0x03A7, 5, 21), (0x03A8, 5, 22), (0x03A9, 5, 23),
    (0x03B1, 5, 32), (0x03B2, 5, 33), (0x03B3, 5, 34), (0x03B4, 5, 35), (0x03B5, 5, 36),
    (0x03B6, 5, 37), (0x03B7, 5, 38), (0x03B8, 5, 39), (0x03B9, 5, 40), (0x03BA, 5, 41),
    (0x03BB, 5, 42), (0x03BC, 5, 43), (0x03BD, 5, 44), (0x03BE, 5, 45), (0x03BF, 5, 46),
    (0x03C0, 5, 47), (0x03C1, 5, 48), (0x03C3, 5, 49), (0x03C4, 5, 50), (0x03C5, 5, 51),
    (0x03C6, 5, 52), (0x03C7, 5, 53), (0x03C8, 5, 54), (0x03C9, 5, 55), (0x0401, 6, 6),
    (0x0410, 6, 0), (0x0411, 6, 1), (0x0412, 6, 2), (0x0413, 6, 3), (0x0414, 6, 4),
    (0x0415, 6, 5), (0x0416, 6, 7), (0x0417, 6, 8), (0x0418, 6, 9), (0x0419, 6, 10),
    (0x041A, 6, 11), (0x041B, 6, 12), (0x041C, 6, 13), (0x041D, 6, 14), (0x041E, 6, 15),
    (0x041F, 6, 16), (0x0420, 6, 17), (0x0421, 6, 18), (0x0422, 6, 19), (0x0423, 6, 20),
    (0x0424, 6, 21), (0x0425, 6, 22), (0x0426, 6, 23), (0x0427, 6, 24), (0x0428, 6, 25),
    (0x0429, 6, 26), (0x042A, 6, 27), (0x042B, 6, 28), (0x042C, 6, 29), (0x042D, 6, 30),
    (0x042E, 6, 31), (0x042F, 6, 32), (0x0430, 6, 48), (0x0431, 6, 49), (0x0432, 6, 50),
    (0x0433, 6, 51), (0x0434, 6, 52), (0x0435, 6, 53), (0x0436, 6, 55), (0x0437, 6, 56),
    (0x0438, 6, 57), (0x0439, 6, 58), (0x043A, 6, 59), (0x043B, 6, 60), (0x043C, 6, 61),
    (0x043D, 6, 62), (0x043E, 6, 63), (0x043F, 6, 64), (0x0440, 6, 65), (0x0441, 6, 66),
    (0x0442, 6, 67), (0x0443, 6, 68), (0x0444, 6, 69), (0x0445, 6, 70), (0x0446, 6, 71),
    (0x0447, 6, 72), (0x0448, 6, 73), (0x0449, 6, 74), (0x044A, 6, 75), (0x044B, 6, 76),
    (0x044C, 6, 77), (0x044D, 6, 78), (0x044E, 6, 79), (0x044F, 6, 80), (0x0451, 6, 54),
    (0x2010, 0, 29), (0x2015, 0, 28), (0x2016, 0, 33), (0x2018, 0, 37), (0x2019, 0, 38),
    (0x201C, 0, 39), (0x201D, 0, 40), (0x2020, 1, 86), (0x2021, 1, 87), (0x2025, 0, 36),
    (0x2026, 0, 35), (0x2030, 1, 82), (0x2032, 0, 75), (0x2033, 0, 76), (0x203B, 1, 7),
    (0x2103, 0, 77), (0x212B, 1, 81), (0x2190, 1, 10), (0x2191, 1, 11), (0x2192, 1, 9),
    (0x2193, 1, 12), (0x21D2, 1, 44), (0x21D4, 1, 45), (0x2200, 1, 46), (0x2202, 1, 62),
    (0x2203, 1, 47), (0x2207, 1, 63), (0x2208, 1, 25), (0x220B, 1, 26), (0x2212, 0, 60),
    (0x221A, 1, 68), (0x221D, 1, 70), (0x221E, 0, 70), (0x2220, 1, 59), (0x2227, 1, 41),
    (0x2228, 1, 42), (0x2229, 1, 32), (0x222A, 1, 31), (0x222B, 1, 72), (0x222C, 1, 73),
    (0x2234, 0, 71), (0x2235, 1, 71), (0x223D, 1, 69), (0x2252, 1, 65), (0x2260, 0, 65),
    (0x2261, 1, 64), (0x2266, 0, 68), (0x2267, 0, 69), (0x226A, 1, 66), (0x226B, 1, 67),
    (0x2282, 1, 29), (0x2283, 1, 30), (0x2286, 1, 27), (0x2287, 1, 28), (0x22A5, 1, 60),
    (0x2312, 1, 61), (0x2500, 7, 0), (0x2501, 7, 11), (0x2502, 7, 1), (0x2503, 7, 12),
    (0x250C, 7, 2), (0x250F, 7, 13), (0x2510, 7, 3), (0x2513, 7, 14), (0x2514, 7, 5),
    (0x2517, 7, 16), (0x2518, 7, 4), (0x251B, 7, 15), (0x251C, 7, 6), (0x251D, 7, 27),
    (0x2520, 7, 22), (0x2523, 7, 17), (0x2524, 7, 8), (0x2525, 7, 29), (0x2528, 7, 24),
    (0x252B, 7, 19), (0x252C, 7, 7), (0x252F, 7, 23), (0x2530, 7, 28), (0x2533, 7, 18),
    (0x2534, 7, 9), (0x2537, 7, 25), (0x2538, 7, 30), (0x253B, 7, 20), (0x253C, 7, 10),
    (0x253F, 7, 26), (0x2542, 7, 31), (0x254B, 7, 21), (0x25A0, 1, 2), (0x25A1, 1, 1),
    (0x25B2, 1, 4), (0x25B3, 1, 3), (0x25BC, 1, 6), (0x25BD, 1, 5), (0x25C6, 1, 0),
    (0x25C7, 0, 93), (0x25CB, 0, 90), (0x25CE, 0, 92), (0x25CF, 0, 91), (0x25EF, 1, 93),
    (0x2605, 0, 89), (0x2606, 0, 88), (0x2640, 0, 73), (0x2642, 0, 72), (0x266A, 1, 85),
    (0x266D, 1, 84), (0x266F, 1, 83), (0x3000, 0, 0), (0x3001, 0, 1), (0x3002, 0, 2),
    (0x3003, 0, 22), (0x3005, 0, 24), (0x3006, 0, 25), (0x3007, 0, 26), (0x3008, 0, 49),
    (0x3009, 0, 50), (0x300A, 0, 51), (0x300B, 0, 52), (0x300C, 0, 53), (0x300D, 0, 54),
    (0x300E, 0, 55), (0x300F, 0, 56), (0x3010, 0, 57), (0x3011, 0, 58), (0x3012, 1, 8),
    (0x3013, 1, 13), (0x3014, 0, 43), (0x3015, 0, 44), (0x301C, 0, 32), (0x3041, 3, 0),
    (0x3042, 3, 1), (0x3043, 3, 2), (0x3044, 3, 3), (0x3045, 3, 4), (0x3046, 3, 5),
    (0x3047, 3, 6), (0x3048, 3, 7), (0x3049, 3, 8), (0x304A, 3, 9), (0x304B, 3, 10),
    (0x304C, 3, 11), (0x304D, 3, 12), (0x304E, 3, 13), (0x304F, 3, 14), (0x3050, 3, 15),
    (0x3051, 3, 16), (0x3052, 3, 17), (0x3053, 3, 18), (0x3054, 3, 19), (0x3055, 3, 20),
    (0x3056, 3, 21), (0x3057, 3, 22), (0x3058, 3, 23), (0x3059, 3, 24), (0x305A, 3, 25),
    (0x305B, 3, 26), (0x305C, 3, 27), (0x305D, 3, 28), (0x305E, 3, 29), (0x305F, 3, 30),
    (0x3060, 3, 31), (0x3061, 3, 32), (0x3062, 3, 33), (0x3063, 3, 34), (0x3064, 3, 35),
    (0x3065, 3, 36), (0x3066, 3, 37), (0x3067, 3, 38), (0x3068, 3, 39), (0x3069, 3, 40),
    (0x306A, 3, 41), (0x306B, 3, 42), (0x306C, 3, 43), (0x306D, 3, 44), (0x306E, 3, 45),
    (0x306F, 3, 46), (0x3070, 3, 47), (0x3071, 3, 48), (0x3072, 3, 49), (0x3073, 3, 50),
    (0x3074, 3, 51), (0x3075, 3, 52), (0x3076, 3, 53), (0x3077, 3, 54), (0x3078, 3, 55),
    (0x3079, 3, 56), (0x307A, 3, 57), (0x307B, 3, 58), (0x307C, 3, 59), (0x307D, 3, 60),
    (0x307E, 3, 61), (0x307F, 3, 62), (0x3080, 3, 63), (0x3081, 3, 64), (0x3082, 3, 65),
    (0x3083, 3, 66), (0x3084, 3, 67), (0x3085, 3, 68), (0x3086, 3, 69), (0x3087, 3, 70),
    (0x3088, 3, 71), (0x3089, 3, 72), (0x308A, 3, 73), (0x308B, 3, 74), (0x308C, 3, 75),
    (0x308D, 3, 76), (0x308E, 3, 77), (0x308F, 3, 78), (0x3090, 3, 79), (0x3091, 3, 80),
    (0x3092, 3, 81), (0x3093, 3, 82), (0x309B, 0, 10), (0x309C, 0, 11), (0x309D, 0, 20),
    (0x309E, 0, 21), (0x30A1, 4, 0), (0x30A2, 4, 1), (0x30A3, 4, 2), (0x30A4, 4, 3),
    (0x30A5, 4, 4), (0x30A6, 4, 5), (0x30A7, 4, 6), (0x30A8, 4, 7), (0x30A9, 4, 8),
    (0x30AA, 4, 9), (0x30AB, 4, 10), (0x30AC, 4, 11), (0x30AD, 4, 12), (0x30AE, 4, 13),
    (0x30AF, 4, 14), (0x30B0, 4, 15), (0x30B1, 4, 16), (0x30B2, 4, 17), (0x30B3, 4, 18),
    (0x30B4, 4, 19), (0x30B5, 4, 20), (0x30B6, 4, 21), (0x30B7, 4, 22), (0x30B8, 4, 23),
    (0x30B9, 4, 24), (0x30BA, 4, 25), (0x30BB, 4, 26), (0x30BC, 4, 27), (0x30BD, 4, 28),
    (0x30BE, 4, 29), (0x30BF, 4, 30), (0x30C0, 4, 31), (0x30C1, 4, 32), (0x30C2, 4, 33),
    (0x30C3, 4, 34), (0x30C4, 4, 35), (0x30C5, 4, 36), (0x30C6, 4, 37), (0x30C7, 4, 38),
    (0x30C8, 4, 39), (0x30C9, 4, 40), (0x30CA, 4, 41), (0x30CB, 4, 42), (0x30CC, 4, 43),
    (0x30CD, 4, 44), (0x30CE, 4, 45), (0x30CF, 4, 46), (0x30D0, 4, 47), (0x30D1, 4, 48),
    (0x30D2, 4, 49), (0x30D3, 4, 50), (0x30D4, 4, 51), (0x30D5, 4, 52), (0x30D6, 4, 53),
    (0x30D7, 4, 54), (0x30D8, 4, 55), (0x30D9, 4, 56), (0x30DA, 4, 57), (0x30DB, 4, 58),
    (0x30DC, 4, 59), (0x30DD, 4, 60), (0x30DE, 4, 61), (0x30DF, 4, 62), (0x30E0, 4, 63),
    (0x30E1, 4, 64), (0x30E2, 4, 65), (0x30E3, 4, 66), (0x30E4, 4, 67), (0x30E5, 4, 68),
    (0x30E6, 4, 69), (0x30E7, 4, 70), (0x30E8, 4, 71), (0x30E9, 4, 72), (0x30EA, 4, 73),
    (0x30EB, 4, 74), (0x30EC, 4, 75), (0x30ED, 4, 76), (0x30EE, 4, 77), (0x30EF, 4, 78),
    (0x30F0, 4, 79), (0x30F1, 4, 80), (0x30F2, 4, 81), (0x30F3, 4, 82), (0x30F4, 4, 83),
    (0x30F5, 4, 84), (0x30F6, 4, 85), (0x30FB, 0, 5), (0x30FC, 0, 27), (0x30FD, 0, 18),
    (0x30FE, 0, 19), (0x4E00, 15, 75), (0x4E01, 34, 89), (0x4E03, 27, 22), (0x4E07, 42, 91),
    (0x4E08, 29, 69), (0x4E09, 26, 15), (0x4E0A, 29, 68), (0x4E0B, 17, 27), (0x4E0D, 40, 51),
    (0x4E0E, 44, 30), (0x4E10, 47, 1), (0x4E11, 16, 14), (0x4E14, 18, 77), (0x4E15, 47, 2),
    (0x4E16, 31, 3), (0x4E17, 49, 33), (0x4E18, 20, 53), (0x4E19, 41, 25), (0x4E1E, 29, 70),
    (0x4E21, 45, 29), (0x4E26, 41, 33), (0x4E2A, 47, 3), (0x4E2D, 34, 69), (0x4E31, 47, 4),
    (0x4E32, 21, 89), (0x4E36, 47, 5), (0x4E38, 19, 60), (0x4E39, 34, 15), (0x4E3B, 27, 70),
    (0x4E3C, 47, 6), (0x4E3F, 47, 7), (0x4E42, 47, 8), (0x4E43, 38, 20), (0x4E45, 20, 54),
    (0x4E4B, 38, 22), (0x4E4D, 37, 66), (0x4E4E, 23, 34), (0x4E4F, 42, 18), (0x4E55, 72, 40),
    (0x4E56, 47, 9), (0x4E57, 29, 71), (0x4E58, 47, 10), (0x4E59, 17, 20), (0x4E5D, 21, 68),
    (0x4E5E, 23, 79), (0x4E5F, 43, 72), (0x4E62, 53, 5), (0x4E71, 44, 79), (0x4E73, 37, 92),
    (0x4E7E, 19, 4), (0x4E80, 20, 20), (0x4E82, 47, 11), (0x4E85, 47, 12), (0x4E86, 45, 26),
    (0x4E88, 44, 28), (0x4E89, 32, 71), (0x4E8A, 47, 14), (0x4E8B, 26, 85), (0x4E8C, 37, 82),
    (0x4E8E, 47, 17), (0x4E91, 16, 29), (0x4E92, 23, 62), (0x4E94, 23, 61), (0x4E95, 15, 69),
    (0x4E98, 46, 42), (0x4E99, 46, 41), (0x4E9B, 25, 18), (0x4E9C, 15, 0), (0x4E9E, 47, 18),
    (0x4E9F, 47, 19), (0x4EA0, 47, 20), (0x4EA1, 42, 19), (0x4EA2, 47, 21), (0x4EA4, 23, 81),
    (0x4EA5, 15, 70), (0x4EA6, 42, 81), (0x4EA8, 20, 91), (0x4EAB, 20, 92), (0x4EAC, 20, 93),
    (0x4EAD, 35, 65), (0x4EAE, 45, 27), (0x4EB0, 47, 22), (0x4EB3, 47, 23), (0x4EB6, 47, 24),
    (0x4EBA, 30, 44), (0x4EC0, 28, 25), (0x4EC1, 30, 45), (0x4EC2, 47, 29), (0x4EC4, 47, 27),
    (0x4EC6, 47, 28), (0x4EC7, 20, 55), (0x4ECA, 25, 2), (0x4ECB, 17, 79), (0x4ECD, 47, 26),
    (0x4ECE, 47, 25), (0x4ECF, 41, 8), (0x4ED4, 26, 37), (0x4ED5, 26, 36), (0x4ED6, 33, 29),
    (0x4ED7, 47, 30), (0x4ED8, 40, 52), (0x4ED9, 31, 70), (0x4EDD, 0, 23), (0x4EDE, 47, 31),
    (0x4EDF, 47, 33), (0x4EE3, 33, 68), (0x4EE4, 45, 64), (0x4EE5, 15, 41), (0x4EED, 47, 32),
    (0x4EEE, 17, 29), (0x4EF0, 21, 35), (0x4EF2, 34, 70), (0x4EF6, 22, 78), (0x4EF7, 47, 34),
    (0x4EFB, 38, 3), (0x4F01, 19, 74), (0x4F09, 47, 35), (0x4F0A, 15, 42), (0x4F0D, 23, 63),
    (0x4F0E, 19, 75), (0x4F0F, 40, 89), (0x4F10, 39, 17), (0x4F11, 20, 56), (0x4F1A, 17, 80),
    (0x4F1C, 47, 70), (0x4F1D, 36, 32), (0x4F2F, 38, 75), (0x4F30, 47, 37), (0x4F34, 39, 27),
    (0x4F36, 45, 65), (0x4F38, 30, 12), (0x4F3A, 26, 38), (0x4F3C, 26, 86), (0x4F3D, 17, 31),
    (0x4F43, 35, 48), (0x4F46, 34, 1), (0x4F47, 47, 41), (0x4F4D, 15, 43), (0x4F4E, 35, 66),
    (0x4F4F, 28, 26), (0x4F50, 25, 19), (0x4F51, 44, 3), (0x4F53, 33, 45), (0x4F55, 17, 30),
    (0x4F57, 47, 40), (0x4F59, 44, 29), (0x4F5A, 47, 36), (0x4F5B, 47, 38), (0x4F5C, 25, 77),
    (0x4F5D, 47, 39), (0x4F5E, 52, 3), (0x4F69, 47, 47), (0x4F6F, 47, 50), (0x4F70, 47, 48),
    (0x4F73, 17, 33), (0x4F75, 41, 26), (0x4F76, 47, 42), (0x4F7B, 47, 46), (0x4F7C, 23, 82),
    (0x4F7F, 26, 39), (0x4F83, 19, 5), (0x4F86, 47, 51), (0x4F88, 47, 43), (0x4F8B, 45, 66),
    (0x4F8D, 26, 87), (0x4F8F, 47, 44), (0x4F91, 47, 49), (0x4F96, 47, 52), (0x4F98, 47, 45),
    (0x4F9B, 21, 0), (0x4F9D, 15, 44), (0x4FA0, 21, 1), (0x4FA1, 17, 32), (0x4FAB, 52, 4),
    (0x4FAD, 42, 88), (0x4FAE, 40, 77), (0x4FAF, 23, 83), (0x4FB5, 30, 14), (0x4FB6, 45, 22),
    (0x4FBF, 41, 55), (0x4FC2, 22, 23), (0x4FC3, 33, 4), (0x4FC4, 17, 67), (0x4FCA, 28, 50),
    (0x4FCE, 47, 56), (0x4FD0, 47, 61), (0x4FD1, 47, 59), (0x4FD4, 47, 54), (0x4FD7, 33, 14),
    (0x4FD8, 47, 57), (0x4FDA, 47, 60), (0x4FDB, 47, 58), (0x4FDD, 41, 60), (0x4FDF, 47, 55),
    (0x4FE1, 30, 13), (0x4FE3, 42, 82), (0x4FE4, 47, 62), (0x4FE5, 47, 63), (0x4FEE, 28, 3),
    (0x4FEF, 47, 76), (0x4FF3, 38, 47), (0x4FF5, 40, 21), (0x4FF6, 47, 71), (0x4FF8, 41, 79),
    (0x4FFA, 17, 21), (0x4FFE, 47, 75), (0x5005, 47, 69), (0x5006, 47, 78), (0x5009, 32, 49),
    (0x500B, 23, 35), (0x500D, 38, 59), (0x500F, 63, 38), (0x5011, 47, 77), (0x5012, 36, 60),
    (0x5014, 47, 66), (0x5016, 23, 85), (0x5019, 23, 84), (0x501A, 47, 64), (0x501F, 27, 57),
    (0x5021, 47, 72), (0x5023, 41, 78), (0x5024, 34, 44), (0x5025, 47, 68), (0x5026, 22, 80),
    (0x5028, 47, 65), (0x5029, 47, 73), (0x502A, 47, 67), (0x502B, 45, 48), (0x502C, 47, 74),
    (0x502D, 46, 32), (0x5036, 21, 69), (0x5039, 22, 79), (0x5043, 47, 79), (0x5047, 47, 80),
    (0x5048, 47, 84), (0x5049, 15, 45), (0x504F, 41, 47), (0x5050, 47, 83), (0x5055, 47, 82),
    (0x5056, 47, 86), (0x505A, 47, 85), (0x505C, 35, 67), (0x5065, 22, 81), (0x506C, 47, 87),
    (0x5072, 27, 36), (0x5074, 33, 5), (0x5075, 35, 68), (0x5076, 21, 85), (0x5078, 47, 88),
    (0x507D, 20, 21), (0x5080, 47, 89), (0x5085, 47, 91), (0x508D, 42, 20), (0x5091, 22, 69),
    (0x5098, 26, 16), (0x5099, 39, 86), (0x509A, 47, 90), (0x50AC, 25, 36), (0x50AD, 44, 34),
    (0x50B2, 47, 93), (0x50B3, 48, 2), (0x50B4, 47, 92), (0x50B5, 25, 35), (0x50B7, 28, 92),
    (0x50BE, 22, 24), (0x50C2, 48, 3), (0x50C5, 21, 46), (0x50C9, 48, 0), (0x50CA, 48, 1),
    (0x50CD, 37, 14), (0x50CF, 32, 91), (0x50D1, 21, 2), (0x50D5, 42, 44), (0x50D6, 48, 4),
    (0x50DA, 45, 28), (0x50DE, 48, 5), (0x50E3, 48, 8), (0x50E5, 48, 6), (0x50E7, 32, 45),
    (0x50ED, 48, 7), (0x50EE, 48, 9), (0x50F5, 48, 11), (0x50F9, 48, 10), (0x50FB, 41, 39),
    (0x5100, 20, 22), (0x5101, 48, 13), (0x5102, 48, 14), (0x5104, 17, 14), (0x5109, 48, 12),
    (0x5112, 27, 83), (0x5114, 48, 17), (0x5115, 48, 16), (0x5116, 48, 15), (0x5118, 47, 53),
    (0x511A, 48, 18), (0x511F, 28, 93), (0x5121, 48, 19), (0x512A, 44, 4), (0x5132, 43, 56),
    (0x5137, 48, 21), (0x513A, 48, 20), (0x513B, 48, 23), (0x513C, 48, 22), (0x513F, 48, 24),
    (0x5140, 48, 25), (0x5141, 15, 83), (0x5143, 23, 20), (0x5144, 22, 26), (0x5145, 28, 27),
    (0x5146, 34, 90), (0x5147, 21, 3), (0x5148, 31, 71), (0x5149, 23, 86), (0x514B, 24, 77),
    (0x514C, 48, 27), (0x514D, 43, 39), (0x514E, 36, 37), (0x5150, 26, 88), (0x5152, 48, 26),
    (0x5154, 48, 28), (0x515A, 36, 61), (0x515C, 18, 84), (0x5162, 48, 29), (0x5165, 37, 93),
    (0x5168, 32, 19), (0x5169, 48, 31), (0x516A, 48, 32), (0x516B, 39, 11), (0x516C, 23, 87),
    (0x516D, 46, 26), (0x516E, 48, 33), (0x5171, 21, 5), (0x5175, 41, 27), (0x5176, 33, 21),
    (0x5177, 21, 80), (0x5178, 36, 20), (0x517C, 22, 82), (0x5180, 48, 34), (0x5182, 48, 35),
    (0x5185, 37, 65), (0x5186, 16, 62), (0x5189, 48, 38), (0x518A, 25, 92), (0x518C, 48, 37),
    (0x518D, 25, 37), (0x518F, 48, 39), (0x5190, 69, 77), (0x5191, 48, 40), (0x5192, 42, 32),
    (0x5193, 48, 41), (0x5195, 48, 42), (0x5196, 48, 43), (0x5197, 29, 72), (0x5199, 27, 43),
    (0x51A0, 19, 6), (0x51A2, 48, 46), (0x51A4, 48, 44), (0x51A5, 43, 28), (0x51A6, 48, 45),
    (0x51A8, 40, 57), (0x51A9, 48, 47), (0x51AA, 48, 48), (0x51AB, 48, 49), (0x51AC, 36, 62),
    (0x51B0, 48, 53), (0x51B1, 48, 51), (0x51B2, 48, 52), (0x51B3, 48, 50), (0x51B4, 25, 66),
    (0x51B5, 48, 54), (0x51B6, 43, 73), (0x51B7, 45, 67), (0x51BD, 48, 55), (0x51C4, 31, 7),
    (0x51C5, 48, 56), (0x51C6, 28, 57), (0x51C9, 48, 57), (0x51CB, 34, 91), (0x51CC, 45, 30),
    (0x51CD, 36, 63), (0x51D6, 49, 36), (0x51DB, 48, 58), (0x51DC, 83, 4), (0x51DD, 21, 36),
    (0x51E0, 48, 59), (0x51E1, 42, 61), (0x51E6, 28, 71), (0x51E7, 33, 91), (0x51E9, 48, 61),
    (0x51EA, 37, 67), (0x51ED, 48, 62), (0x51F0, 48, 63), (0x51F1, 18, 13), (0x51F5, 48, 64),
    (0x51F6, 21, 6), (0x51F8, 37, 43), (0x51F9, 16, 89), (0x51FA, 28, 47), (0x51FD, 39, 0),
    (0x51FE, 48, 65), (0x5200, 36, 64), (0x5203, 30, 46), (0x5204, 48, 66), (0x5206, 41, 11),
    (0x5207, 31, 57), (0x5208, 19, 1), (0x520A, 19, 8), (0x520B, 48, 67), (0x520E, 48, 69),
    (0x5211, 22, 25), (0x5214, 48, 68), (0x5217, 45, 82), (0x521D, 28, 72), (0x5224, 39, 28),
    (0x5225, 41, 43), (0x5227, 48, 70), (0x5229, 44, 87), (0x522A, 48, 71), (0x522E, 48, 72),
    (0x5230, 36, 93), (0x5233, 48, 73), (0x5236, 31, 8), (0x5237, 25, 93), (0x5238, 22, 83),
    (0x5239, 48, 74), (0x523A, 26, 40), (0x523B, 24, 78), (0x5243, 35, 69), (0x5244, 48, 76),
    (0x5247, 33, 6), (0x524A, 25, 78), (0x524B, 48, 77), (0x524C, 48, 78), (0x524D, 32, 15),
    (0x524F, 48, 75), (0x5254, 48, 80), (0x5256, 42, 21), (0x525B, 24, 67), (0x525E, 48, 79),
    (0x5263, 22, 84), (0x5264, 25, 61), (0x5265, 38, 76), (0x5269, 48, 83), (0x526A, 48, 81),
    (0x526F, 40, 90), (0x5270, 29, 73), (0x5271, 48, 90), (0x5272, 18, 67), (0x5273, 48, 84),
    (0x5274, 48, 82), (0x5275, 32, 46), (0x527D, 48, 86), (0x527F, 48, 85), (0x5283, 18, 35),
    (0x5287, 22, 63), (0x5288, 48, 91), (0x5289, 45, 12), (0x528D, 48, 87), (0x5291, 48, 92),
    (0x5292, 48, 89), (0x5294, 48, 88), (0x529B, 45, 46), (0x529F, 23, 88), (0x52A0, 17, 34),
    (0x52A3, 45, 83), (0x52A9, 28, 84), (0x52AA, 36, 55), (0x52AB, 24, 68), (0x52AC, 49, 1),
    (0x52AD, 49, 2), (0x52B1, 45, 68), (0x52B4, 46, 10), (0x52B5, 49, 4), (0x52B9, 23, 89),
    (0x52BC, 49, 3), (0x52BE, 18, 14), (0x52C1, 49, 5), (0x52C3, 42, 53), (0x52C5, 35, 27),
    (0x52C7, 44, 5), (0x52C9, 41, 56), (0x52CD, 49, 6), (0x52D2, 79, 52), (0x52D5, 37, 15),
    (0x52D7, 49, 7), (0x52D8, 19, 9), (0x52D9, 43, 18), (0x52DD, 29, 0), (0x52DE, 49, 8),
    (0x52DF, 41, 70), (0x52E0, 49, 12), (0x52E2, 31, 9), (0x52E3, 49, 9), (0x52E4, 21, 47),
    (0x52E6, 49, 10), (0x52E7, 19, 10), (0x52F2, 22, 13), (0x52F3, 49, 13), (0x52F5, 49, 14),
    (0x52F8, 49, 15), (0x52F9, 49, 16), (0x52FA, 27, 58), (0x52FE, 23, 90), (0x52FF, 43, 61),
    (0x5301, 43, 71), (0x5302, 37, 86), (0x5305, 41, 80), (0x5306, 49, 17), (0x5308, 49, 18),
    (0x530D, 49, 20), (0x530F, 49, 22), (0x5310, 49, 21), (0x5315, 49, 23), (0x5316, 17, 28),
    (0x5317, 42, 43), (0x5319, 25, 91), (0x531A, 49, 24), (0x531D, 32, 56), (0x5320, 29, 1),
    (0x5321, 21, 8), (0x5323, 49, 25), (0x532A, 39, 58), (0x532F, 49, 26), (0x5331, 49, 27),
    (0x5333, 49, 28), (0x5338, 49, 29), (0x5339, 40, 3), (0x533A, 21, 71), (0x533B, 15, 68),
    (0x533F, 37, 30), (0x5340, 49, 30), (0x5341, 28, 28), (0x5343, 31, 72), (0x5345, 49, 32),
    (0x5346, 49, 31), (0x5347, 29, 2), (0x5348, 23, 64), (0x5349, 49, 34), (0x534A, 39, 29),
    (0x534D, 49, 35), (0x5351, 39, 59), (0x5352, 33, 19), (0x5353, 33, 77), (0x5354, 21, 7),
    (0x5357, 37, 77), (0x5358, 34, 16), (0x535A, 38, 77), (0x535C, 42, 45), (0x535E, 49, 37),
    (0x5360, 31, 73), (0x5366, 22, 20), (0x5369, 49, 38), (0x536E, 49, 39), (0x536F, 16, 11),
    (0x5370, 15, 84), (0x5371, 19, 76), (0x5373, 33, 7), (0x5374, 20, 48), (0x5375, 44, 80),
    (0x5377, 49, 42), (0x5378, 17, 22), (0x537B, 49, 41), (0x537F, 21, 9), (0x5382, 49, 43),
    (0x5384, 43, 80), (0x5396, 49, 44), (0x5398, 45, 49), (0x539A, 23, 91), (0x539F, 23, 21),
    (0x53A0, 49, 45), (0x53A5, 49, 47), (0x53A6, 49, 46), (0x53A8, 30, 62), (0x53A9, 16, 24),
    (0x53AD, 16, 61), (0x53AE, 49, 48), (0x53B0, 49, 49), (0x53B3, 23, 22), (0x53B6, 49, 50),
    (0x53BB, 20, 77), (0x53C2, 26, 17), (0x53C3, 49, 51), (0x53C8, 42, 83), (0x53C9, 25, 20),
    (0x53CA, 20, 57), (0x53CB, 44, 6), (0x53CC, 32, 47), (0x53CD, 39, 30), (0x53CE, 27, 92),
    (0x53D4, 28, 38), (0x53D6, 27, 71), (0x53D7, 27, 84), (0x53D9, 28, 85), (0x53DB, 39, 31),
    (0x53DF, 49, 54), (0x53E1, 16, 34), (0x53E2, 32, 48), (0x53E3, 23, 92), (0x53E4, 23, 36),
    (0x53E5, 21, 70), (0x53E8, 49, 58), (0x53E9, 34, 0), (0x53EA, 33, 93), (0x53EB, 21, 10),
    (0x53EC, 29, 3), (0x53ED, 49, 59), (0x53EE, 49, 57), (0x53EF, 17, 35), (0x53F0, 33, 69),
    (0x53F1, 27, 23), (0x53F2, 26, 42), (0x53F3, 16, 5), (0x53F6, 18, 79), (0x53F7, 24, 69),
    (0x53F8, 26, 41), (0x53FA, 49, 60), (0x5401, 49, 61), (0x5403, 20, 40), (0x5404, 18, 37),
    (0x5408, 24, 70), (0x5409, 20, 39), (0x540A, 35, 62), (0x540B, 16, 4), (0x540C, 37, 16),
    (0x540D, 43, 29), (0x540E, 24, 0), (0x540F, 44, 88), (0x5410, 36, 38), (0x5411, 23, 93),
    (0x541B, 22, 14), (0x541D, 49, 70), (0x541F, 21, 66), (0x5420, 42, 41), (0x5426, 39, 60),
    (0x5429, 49, 69), (0x542B, 19, 61), (0x542C, 49, 64), (0x542D, 49, 65), (0x542E, 49, 67),
    (0x5436, 49, 68), (0x5438, 20, 58), (0x5439, 30, 64), (0x543B, 41, 12), (0x543C, 49, 66),
    (0x543D, 49, 62), (0x543E, 23, 66), (0x5440, 49, 63), (0x5442, 46, 3), (0x5446, 41, 81),
    (0x5448, 35, 71), (0x5449, 23, 65), (0x544A, 24, 79), (0x544E, 49, 71), (0x5451, 37, 60),
    (0x545F, 49, 75), (0x5468, 27, 93), (0x546A, 27, 85), (0x5470, 49, 78), (0x5471, 49, 76),
    (0x5473, 43, 2), (0x5475, 49, 73), (0x5476, 49, 82), (0x5477, 49, 77), (0x547B, 49, 80),
    (0x547C, 23, 37), (0x547D, 43, 30), (0x5480, 49, 81), (0x5484, 49, 83), (0x5486, 49, 85),
    (0x548B, 25, 79), (0x548C, 46, 33), (0x548E, 49, 74), (0x548F, 49, 72), (0x5490, 49, 84),
    (0x5492, 49, 79), (0x54A2, 49, 87), (0x54A4, 50, 2), (0x54A5, 49, 89), (0x54A8, 49, 93),
    (0x54AB, 50, 0), (0x54AC, 49, 90), (0x54AF, 50, 29), (0x54B2, 25, 72), (0x54B3, 18, 16),
    (0x54B8, 49, 88), (0x54BC, 50, 4), (0x54BD, 15, 85), (0x54BE, 50, 3), (0x54C0, 15, 4),
    (0x54C1, 40, 41), (0x54C2, 50, 1), (0x54C4, 49, 91), (0x54C7, 49, 86), (0x54C8, 49, 92),
    (0x54C9, 25, 39), (0x54D8, 50, 5), (0x54E1, 15, 86), (0x54E2, 50, 14), (0x54E5, 50, 6),
    (0x54E6, 50, 7), (0x54E8, 29, 4), (0x54E9, 42, 72), (0x54ED, 50, 12), (0x54EE, 50, 11),
    (0x54F2, 36, 14), (0x54FA, 50, 13), (0x54FD, 50, 10), (0x5504, 16, 19), (0x5506, 25, 21),
    (0x5507, 30, 15), (0x550F, 50, 8), (0x5510, 36, 65), (0x5514, 50, 9), (0x5516, 15, 1),
    (0x552E, 50, 19), (0x552F, 44, 2), (0x5531, 29, 6), (0x5533, 50, 25), (0x5538, 50, 24),
    (0x5539, 50, 15), (0x553E, 33, 34), (0x5540, 50, 16), (0x5544, 33, 78), (0x5545, 50, 21),
    (0x5546, 29, 5), (0x554C, 50, 18), (0x554F, 43, 67), (0x5553, 22, 27), (0x5556, 50, 22),
    (0x5557, 50, 23), (0x555C, 50, 20), (0x555D, 50, 26), (0x5563, 50, 17), (0x557B, 50, 32),
    (0x557C, 50, 37), (0x557E, 50, 33), (0x5580, 50, 28), (0x5583, 50, 38), (0x5584, 32, 16),
    (0x5587, 50, 40), (0x5589, 24, 1), (0x558A, 50, 30), (0x558B, 34, 92), (0x5598, 50, 34),
    (0x5599, 50, 27), (0x559A, 19, 12), (0x559C, 19, 77), (0x559D, 18, 68), (0x559E, 50, 35),
    (0x559F, 50, 31), (0x55A7, 22, 85), (0x55A8, 50, 41), (0x55A9, 50, 39), (0x55AA, 32, 50),
    (0x55AB, 20, 41), (0x55AC, 21, 11), (0x55AE, 50, 36), (0x55B0, 21, 83), (0x55B6, 16, 35),
    (0x55C4, 50, 45), (0x55C5, 50, 43), (0x55C7, 51, 6), (0x55D4, 50, 48), (0x55DA, 50, 42),
    (0x55DC, 50, 46), (0x55DF, 50, 44), (0x55E3, 26, 43), (0x55E4, 50, 47), (0x55F7, 50, 50),
    (0x55F9, 50, 55), (0x55FD, 50, 53), (0x55FE, 50, 52), (0x5606, 34, 17), (0x5609, 17, 36),
    (0x5614, 50, 49), (0x5616, 50, 51), (0x5617, 29, 7), (0x5618, 16, 18), (0x561B, 50, 54),
    (0x5629, 17, 61), (0x562F, 50, 65), (0x5631, 29, 91), (0x5632, 50, 61), (0x5634, 50, 59),
    (0x5636, 50, 60), (0x5638, 50, 62), (0x5642, 16, 28), (0x564C, 32, 24), (0x564E, 50, 56),
    (0x5650, 50, 57), (0x565B, 18, 89), (0x5664, 50, 64), (0x5668, 19, 78), (0x566A, 50, 67),
    (0x566B, 50, 63), (0x566C, 50, 66), (0x5674, 41, 13), (0x5678, 37, 52), (0x567A, 39, 23),
    (0x5680, 50, 69), (0x5686, 50, 68), (0x5687, 18, 36), (0x568A, 50, 70), (0x568F, 50, 73),
    (0x5694, 50, 72), (0x56A0, 50, 71), (0x56A2, 38, 24), (0x56A5, 50, 74), (0x56AE, 50, 75),
    (0x56B4, 50, 77), (0x56B6, 50, 76), (0x56BC, 50, 79), (0x56C0, 50, 82), (0x56C1, 50, 80),
    (0x56C2, 50, 78), (0x56C3, 50, 81), (0x56C8, 50, 83), (0x56CE, 50, 84), (0x56D1, 50, 85),
    (0x56D3, 50, 86), (0x56D7, 50, 87), (0x56D8, 48, 36), (0x56DA, 27, 91), (0x56DB, 26, 44),
    (0x56DE, 17, 82), (0x56E0, 15, 87), (0x56E3, 34, 35), (0x56EE, 50, 88), (0x56F0, 25, 3),
    (0x56F2, 15, 46), (0x56F3, 30, 61), (0x56F9, 50, 89), (0x56FA, 23, 38), (0x56FD, 24, 80),
    (0x56FF, 50, 91), (0x5700, 50, 90), (0x5703, 41, 63), (0x5704, 50, 92), (0x5708, 51, 0),
    (0x5709, 50, 93), (0x570B, 51, 1), (0x570D, 51, 2), (0x570F, 22, 86), (0x5712, 16, 63),
    (0x5713, 51, 3), (0x5716, 51, 5), (0x5718, 51, 4), (0x571C, 51, 7), (0x571F, 36, 57),
    (0x5726, 51, 8), (0x5727, 15, 20), (0x5728, 25, 62), (0x572D, 22, 28), (0x5730, 34, 46),
    (0x5737, 51, 9), (0x5738, 51, 10), (0x573B, 51, 12), (0x5740, 51, 13), (0x5742, 25, 67),
    (0x5747, 21, 48), (0x574A, 42, 22), (0x574E, 51, 11), (0x574F, 51, 14), (0x5750, 25, 32),
    (0x5751, 24, 2), (0x5761, 51, 18), (0x5764, 25, 4), (0x5766, 34, 18), (0x5769, 51, 15),
    (0x576A, 35, 57), (0x577F, 51, 19), (0x5782, 30, 65), (0x5788, 51, 17), (0x5789, 51, 20),
    (0x578B, 22, 30), (0x5793, 51, 21), (0x57A0, 51, 22), (0x57A2, 24, 3), (0x57A3, 18, 31),
    (0x57A4, 51, 24), (0x57AA, 51, 25), (0x57B0, 51, 26), (0x57B3, 51, 23), (0x57C0, 51, 16),
    (0x57C3, 51, 27), (0x57C6, 51, 28), (0x57CB, 42, 67), (0x57CE, 29, 74), (0x57D2, 51, 30),
    (0x57D3, 51, 31), (0x57D4, 51, 29), (0x57D6, 51, 33), (0x57DC, 38, 23), (0x57DF, 15, 71),
    (0x57E0, 40, 53), (0x57E3, 51, 34), (0x57F4, 29, 92), (0x57F7, 27, 24), (0x57F9, 38, 60),
    (0x57FA, 19, 79), (0x57FC, 25, 74), (0x5800, 42, 56), (0x5802, 37, 17), (0x5805, 22, 87),
    (0x5806, 33, 46), (0x580A, 51, 32), (0x580B, 51, 35), (0x5815, 33, 35), (0x5819, 51, 36),
    (0x581D, 51, 37), (0x5821, 51, 39), (0x5824, 35, 72), (0x582A, 19, 13), (0x582F, 83, 0),
    (0x5830, 16, 64), (0x5831, 41, 82), (0x5834, 29, 75), (0x5835, 36, 39), (0x583A, 25, 69),
    (0x583D, 51, 45), (0x5840, 41, 28), (0x5841, 45, 60), (0x584A, 17, 83), (0x584B, 51, 41),
    (0x5851, 32, 25), (0x5852, 51, 44), (0x5854, 36, 66), (0x5857, 36, 40), (0x5858, 36, 67),
    (0x5859, 39, 24), (0x585A, 35, 44), (0x585E, 25, 40), (0x5862, 51, 40), (0x5869, 16, 85),
    (0x586B, 36, 21), (0x5870, 51, 42), (0x5872, 51, 38), (0x5875, 30, 47), (0x5879, 51, 46),
    (0x587E, 28, 45), (0x5883, 21, 12), (0x5885, 51, 47), (0x5893, 41, 71), (0x5897, 32, 92),
    (0x589C, 35, 37), (0x589F, 51, 49), (0x58A8, 42, 46), (0x58AB, 51, 50), (0x58AE, 51, 55),
    (0x58B3, 41, 14), (0x58B8, 51, 54), (0x58B9, 51, 48), (0x58BA, 51, 51), (0x58BB, 51, 53),
    (0x58BE, 25, 5), (0x58C1, 41, 40), (0x58C5, 51, 56), (0x58C7, 34, 36), (0x58CA, 17, 84),
    (0x58CC, 29, 76), (0x58D1, 51, 58), (0x58D3, 51, 57), (0x58D5, 24, 71), (0x58D7, 51, 59),
    (0x58D8, 51, 61), (0x58D9, 51, 60), (0x58DC, 51, 63), (0x58DE, 51, 52), (0x58DF, 51, 65),
    (0x58E4, 51, 64), (0x58E5, 51, 62), (0x58EB, 26, 45), (0x58EC, 30, 48), (0x58EE, 32, 51),
    (0x58EF, 51, 66), (0x58F0, 31, 27), (0x58F1, 15, 76), (0x58F2, 38, 67), (0x58F7, 35, 58),
    (0x58F9, 51, 68), (0x58FA, 51, 67), (0x58FB, 51, 69), (0x58FC, 51, 70), (0x58FD, 51, 71),
    (0x5902, 51, 72), (0x5909, 41, 48), (0x590A, 51, 73), (0x590F, 17, 37), (0x5910, 51, 74),
    (0x5915, 44, 27), (0x5916, 18, 15), (0x5918, 49, 40), (0x5919, 28, 39), (0x591A, 33, 30),
    (0x591B, 51, 75), (0x591C, 43, 74), (0x5922, 43, 19), (0x5925, 51, 77), (0x5927, 33, 70),
    (0x5929, 36, 22), (0x592A, 33, 31), (0x592B, 40, 54), (0x592C, 51, 78), (0x592D, 51, 79),
    (0x592E, 16, 90), (0x5931, 27, 25), (0x5932, 51, 80), (0x5937, 15, 47), (0x5938, 51, 81),
    (0x593E, 51, 82), (0x5944, 16, 65), (0x5947, 19, 80), (0x5948, 37, 63), (0x5949, 41, 83),
    (0x594E, 51, 86), (0x594F, 32, 52), (0x5950, 51, 85), (0x5951, 22, 31), (0x5954, 42, 58),
    (0x5955, 51, 84), (0x5957, 36, 68), (0x5958, 51, 88), (0x595A, 51, 87), (0x5960, 51, 90),
    (0x5962, 51, 89), (0x5965, 16, 91), (0x5967, 51, 91), (0x5968, 29, 8), (0x5969, 51, 93),
    (0x596A, 34, 4), (0x596C, 51, 92), (0x596E, 41, 18), (0x5973, 28, 86), (0x5974, 36, 58),
    (0x5978, 52, 0), (0x597D, 24, 4), (0x5981, 52, 1), (0x5982, 38, 0), (0x5983, 39, 61),
    (0x5984, 43, 48), (0x598A, 38, 4), (0x598D, 52, 10), (0x5993, 20, 23), (0x5996, 44, 36),
    (0x5999, 43, 14), (0x599B, 53, 11), (0x599D, 52, 2), (0x59A3, 52, 5), (0x59A5, 33, 36),
    (0x59A8, 42, 23), (0x59AC, 36, 41), (0x59B2, 52, 6), (0x59B9, 42, 68), (0x59BB, 25, 41),
    (0x59BE, 29, 9), (0x59C6, 52, 7), (0x59C9, 26, 47), (0x59CB, 26, 46), (0x59D0, 15, 24),
    (0x59D1, 23, 39), (0x59D3, 31, 10), (0x59D4, 15, 48), (0x59D9, 52, 11), (0x59DA, 52, 12),
    (0x59DC, 52, 9), (0x59E5, 16, 23), (0x59E6, 19, 14), (0x59E8, 52, 8), (0x59EA, 43, 36),
    (0x59EB, 40, 16), (0x59F6, 15, 7), (0x59FB, 15, 88), (0x59FF, 26, 48), (0x5A01, 15, 49),
    (0x5A03, 15, 2), (0x5A09, 52, 17), (0x5A11, 52, 15), (0x5A18, 43, 27), (0x5A1A, 52, 18),
    (0x5A1C, 52, 16), (0x5A1F, 52, 14), (0x5A20, 30, 16), (0x5A25, 52, 13), (0x5A29, 41, 57),
    (0x5A2F, 23, 67), (0x5A35, 52, 22), (0x5A36, 52, 23), (0x5A3C, 29, 10), (0x5A40, 52, 19),
    (0x5A41, 46, 11), (0x5A46, 38, 43), (0x5A49, 52, 21), (0x5A5A, 25, 6), (0x5A62, 52, 24),
    (0x5A66, 40, 55), (0x5A6A, 52, 25), (0x5A6C, 52, 20), (0x5A7F, 43, 26), (0x5A92, 38, 61),
    (0x5A9A, 52, 26), (0x5A9B, 40, 17), (0x5ABC, 52, 27), (0x5ABD, 52, 31), (0x5ABE, 52, 28),
    (0x5AC1, 17, 38), (0x5AC2, 52, 30), (0x5AC9, 27, 26), (0x5ACB, 52, 29), (0x5ACC, 22, 88),
    (0x5AD0, 52, 43), (0x5AD6, 52, 36), (0x5AD7, 52, 33), (0x5AE1, 34, 67), (0x5AE3, 52, 32),
    (0x5AE6, 52, 34), (0x5AE9, 52, 35), (0x5AFA, 52, 37), (0x5AFB, 52, 38), (0x5B09, 19, 81),
    (0x5B0B, 52, 40), (0x5B0C, 52, 39), (0x5B16, 52, 41), (0x5B22, 29, 77), (0x5B2A, 52, 44),
    (0x5B2C, 35, 59), (0x5B30, 16, 36), (0x5B32, 52, 42), (0x5B36, 52, 45), (0x5B3E, 52, 46),
    (0x5B40, 52, 49), (0x5B43, 52, 47), (0x5B45, 52, 48), (0x5B50, 26, 49), (0x5B51, 52, 50),
    (0x5B54, 24, 5), (0x5B55, 52, 51), (0x5B57, 26, 89), (0x5B58, 33, 23), (0x5B5A, 52, 52),
    (0x5B5B, 52, 53), (0x5B5C, 26, 57), (0x5B5D, 24, 6), (0x5B5F, 43, 49), (0x5B63, 20, 7),
    (0x5B64, 23, 40), (0x5B65, 52, 54), (0x5B66, 18, 55), (0x5B69, 52, 55), (0x5B6B, 33, 24),
    (0x5B70, 52, 56), (0x5B71, 53, 2), (0x5B73, 52, 57), (0x5B75, 52, 58), (0x5B78, 52, 59),
    (0x5B7A, 52, 61), (0x5B80, 52, 62), (0x5B83, 52, 63), (0x5B85, 33, 79), (0x5B87, 16, 6),
    (0x5B88, 27, 72), (0x5B89, 15, 33), (0x5B8B, 32, 54), (0x5B8C, 19, 15), (0x5B8D, 27, 20),
    (0x5B8F, 24, 7), (0x5B95, 36, 69), (0x5B97, 28, 0), (0x5B98, 19, 16), (0x5B99, 34, 71),
    (0x5B9A, 35, 73), (0x5B9B, 15, 23), (0x5B9C, 20, 24), (0x5B9D, 41, 84), (0x5B9F, 27, 33),
    (0x5BA2, 20, 49), (0x5BA3, 31, 74), (0x5BA4, 27, 27), (0x5BA5, 44, 7), (0x5BA6, 52, 64),
    (0x5BAE, 20, 59), (0x5BB0, 25, 42), (0x5BB3, 18, 17), (0x5BB4, 16, 66), (0x5BB5, 29, 11),
    (0x5BB6, 17, 39), (0x5BB8, 52, 65), (0x5BB9, 44, 37), (0x5BBF, 28, 40), (0x5BC2, 27, 67),
    (0x5BC3, 52, 66), (0x5BC4, 19, 82), (0x5BC5, 37, 49), (0x5BC6, 43, 8), (0x5BC7, 52, 67),
    (0x5BC9, 52, 68), (0x5BCC, 40, 56), (0x5BD0, 52, 70), (0x5BD2, 19, 7), (0x5BD3, 21, 86),
    (0x5BD4, 52, 69), (0x5BDB, 19, 17), (0x5BDD, 30, 17), (0x5BDE, 52, 74), (0x5BDF, 26, 0),
    (0x5BE1, 17, 40), (0x5BE2, 52, 73), (0x5BE4, 52, 71), (0x5BE5, 52, 75), (0x5BE6, 52, 72),
    (0x5BE7, 38, 10), (0x5BE8, 59, 44), (0x5BE9, 30, 18), (0x5BEB, 52, 76), (0x5BEE, 45, 31),
    (0x5BF0, 52, 77), (0x5BF3, 52, 79), (0x5BF5, 34, 93), (0x5BF6, 52, 78), (0x5BF8, 31, 2),
    (0x5BFA, 26, 90), (0x5BFE, 33, 47), (0x5BFF, 27, 86), (0x5C01, 40, 84), (0x5C02, 31, 75),
    (0x5C04, 27, 44), (0x5C05, 52, 80), (0x5C06, 29, 12), (0x5C07, 52, 81), (0x5C08, 52, 82),
    (0x5C09, 15, 50), (0x5C0A, 33, 25), (0x5C0B, 30, 49), (0x5C0D, 52, 83), (0x5C0E, 37, 18),
    (0x5C0F, 29, 13), (0x5C11, 29, 14), (0x5C13, 52, 84), (0x5C16, 31, 76), (0x5C1A, 29, 15),
    (0x5C20, 52, 85), (0x5C22, 52, 86), (0x5C24, 43, 63), (0x5C28, 52, 87), (0x5C2D, 21, 37),
    (0x5C31, 28, 1), (0x5C38, 52, 88), (0x5C39, 52, 89), (0x5C3A, 27, 59), (0x5C3B, 30, 11),
    (0x5C3C, 37, 83), (0x5C3D, 30, 51), (0x5C3E, 39, 87), (0x5C3F, 38, 1), (0x5C40, 21, 40),
    (0x5C41, 52, 90), (0x5C45, 20, 78), (0x5C46, 52, 91), (0x5C48, 21, 93), (0x5C4A, 37, 46),
    (0x5C4B, 17, 15), (0x5C4D, 26, 50), (0x5C4E, 52, 92), (0x5C4F, 53, 1), (0x5C50, 53, 0),
    (0x5C51, 21, 92), (0x5C53, 52, 93), (0x5C55, 36, 23), (0x5C5E, 33, 15), (0x5C60, 36, 42),
    (0x5C61, 27, 39), (0x5C64, 32, 55), (0x5C65, 44, 89), (0x5C6C, 53, 3), (0x5C6E, 53, 4),
    (0x5C6F, 37, 53), (0x5C71, 26, 18), (0x5C76, 53, 6), (0x5C79, 53, 7), (0x5C8C, 53, 8),
    (0x5C90, 19, 83), (0x5C91, 53, 9), (0x5C94, 53, 10), (0x5CA1, 17, 11), (0x5CA8, 32, 26),
    (0x5CA9, 19, 67), (0x5CAB, 53, 12), (0x5CAC, 43, 7), (0x5CB1, 33, 49), (0x5CB3, 18, 56),
    (0x5CB6, 53, 14), (0x5CB7, 53, 16), (0x5CB8, 19, 62), (0x5CBB, 53, 13), (0x5CBC, 53, 15),
    (0x5CBE, 53, 18), (0x5CC5, 53, 17), (0x5CC7, 53, 19), (0x5CD9, 53, 20), (0x5CE0, 37, 28),
    (0x5CE1, 21, 13), (0x5CE8, 17, 68), (0x5CE9, 53, 21), (0x5CEA, 53, 26), (0x5CED, 53, 24),
    (0x5CEF, 41, 86), (0x5CF0, 41, 85), (0x5CF6, 36, 70), (0x5CFA, 53, 23), (0x5CFB, 28, 51),
    (0x5CFD, 53, 22), (0x5D07, 30, 81), (0x5D0B, 53, 27), (0x5D0E, 25, 73), (0x5D11, 53, 33),
    (0x5D14, 53, 34), (0x5D15, 53, 28), (0x5D16, 18, 18), (0x5D17, 53, 29), (0x5D18, 53, 38),
    (0x5D19, 53, 37), (0x5D1A, 53, 36), (0x5D1B, 53, 32), (0x5D1F, 53, 31), (0x5D22, 53, 35),
    (0x5D29, 41, 87), (0x5D4B, 53, 42), (0x5D4C, 53, 39), (0x5D4E, 53, 41), (0x5D50, 44, 81),
    (0x5D52, 53, 40), (0x5D5C, 53, 30), (0x5D69, 30, 82), (0x5D6C, 53, 43), (0x5D6F, 25, 22),
    (0x5D73, 53, 44), (0x5D76, 53, 45), (0x5D82, 53, 48), (0x5D84, 53, 47), (0x5D87, 53, 46),
    (0x5D8B, 36, 71), (0x5D8C, 53, 25), (0x5D90, 53, 54), (0x5D9D, 53, 50), (0x5DA2, 53, 49),
    (0x5DAC, 53, 51), (0x5DAE, 53, 52), (0x5DB7, 53, 55), (0x5DBA, 45, 69), (0x5DBC, 53, 56),
    (0x5DBD, 53, 53), (0x5DC9, 53, 57), (0x5DCC, 19, 63), (0x5DCD, 53, 58), (0x5DD2, 53, 60),
    (0x5DD3, 53, 59), (0x5DD6, 53, 61), (0x5DDB, 53, 62), (0x5DDD, 31, 77), (0x5DDE, 28, 2),
    (0x5DE1, 28, 67), (0x5DE3, 32, 66), (0x5DE5, 24, 8), (0x5DE6, 25, 23), (0x5DE7, 24, 9),
    (0x5DE8, 20, 79), (0x5DEB, 53, 63), (0x5DEE, 25, 24), (0x5DF1, 23, 41), (0x5DF2, 53, 64),
    (0x5DF3, 43, 5), (0x5DF4, 38, 34), (0x5DF5, 53, 65), (0x5DF7, 24, 10), (0x5DFB, 19, 11),
    (0x5DFD, 34, 6), (0x5DFE, 21, 49), (0x5E02, 26, 51), (0x5E03, 40, 58), (0x5E06, 39, 32),
    (0x5E0B, 53, 66), (0x5E0C, 19, 84), (0x5E11, 53, 69), (0x5E16, 35, 0), (0x5E19, 53, 68),
    (0x5E1A, 53, 67), (0x5E1B, 53, 70), (0x5E1D, 35, 74), (0x5E25, 30, 66), (0x5E2B, 26, 52),
    (0x5E2D, 31, 41), (0x5E2F, 33, 50), (0x5E30, 20, 1), (0x5E33, 35, 1), (0x5E36, 53, 71),
    (0x5E37, 53, 72), (0x5E38, 29, 78), (0x5E3D, 42, 24), (0x5E40, 53, 75), (0x5E43, 53, 74),
    (0x5E44, 53, 73), (0x5E45, 40, 92), (0x5E47, 53, 82), (0x5E4C, 42, 57), (0x5E4E, 53, 76),
    (0x5E54, 53, 78), (0x5E55, 42, 74), (0x5E57, 53, 77), (0x5E5F, 53, 79), (0x5E61, 39, 7),
    (0x5E62, 53, 80), (0x5E63, 41, 29), (0x5E64, 53, 81), (0x5E72, 19, 18), (0x5E73, 41, 30),
    (0x5E74, 38, 14), (0x5E75, 53, 83), (0x5E76, 53, 84), (0x5E78, 24, 11), (0x5E79, 19, 19),
    (0x5E7A, 53, 85), (0x5E7B, 23, 23), (0x5E7C, 44, 35), (0x5E7D, 44, 8), (0x5E7E, 19, 85),
    (0x5E7F, 53, 87), (0x5E81, 35, 2), (0x5E83, 24, 12), (0x5E84, 29, 16), (0x5E87, 39, 62),
    (0x5E8A, 29, 17), (0x5E8F, 28, 87), (0x5E95, 35, 75), (0x5E96, 41, 88), (0x5E97, 36, 24),
    (0x5E9A, 24, 13), (0x5E9C, 40, 59), (0x5EA0, 53, 88), (0x5EA6, 36, 56), (0x5EA7, 25, 33),
    (0x5EAB, 23, 42), (0x5EAD, 35, 76), (0x5EB5, 15, 34), (0x5EB6, 28, 77), (0x5EB7, 24, 14),
    (0x5EB8, 44, 38), (0x5EC1, 53, 89), (0x5EC2, 53, 90), (0x5EC3, 38, 48), (0x5EC8, 53, 91),
    (0x5EC9, 45, 86), (0x5ECA, 46, 12), (0x5ECF, 53, 93), (0x5ED0, 53, 92), (0x5ED3, 18, 38),
    (0x5ED6, 54, 0), (0x5EDA, 54, 3), (0x5EDB, 54, 4), (0x5EDD, 54, 2), (0x5EDF, 40, 31),
    (0x5EE0, 29, 18), (0x5EE1, 54, 6), (0x5EE2, 54, 5), (0x5EE3, 54, 1), (0x5EE8, 54, 7),
    (0x5EE9, 54, 8), (0x5EEC, 54, 9), (0x5EF0, 54, 12), (0x5EF1, 54, 10), (0x5EF3, 54, 11),
    (0x5EF4, 54, 13), (0x5EF6, 16, 67), (0x5EF7, 35, 77), (0x5EF8, 54, 14), (0x5EFA, 22, 89),
    (0x5EFB, 17, 85), (0x5EFC, 38, 21), (0x5EFE, 54, 15), (0x5EFF, 37, 90), (0x5F01, 41, 58),
    (0x5F03, 54, 16), (0x5F04, 46, 13), (0x5F09, 54, 17), (0x5F0A, 41, 31), (0x5F0B, 54, 20),
    (0x5F0C, 47, 0), (0x5F0D, 47, 16), (0x5F0F, 27, 15), (0x5F10, 37, 84), (0x5F11, 54, 21),
    (0x5F13, 20, 60), (0x5F14, 35, 3), (0x5F15, 15, 89), (0x5F16, 54, 22), (0x5F17, 41, 5),
    (0x5F18, 24, 15), (0x5F1B, 34, 47), (0x5F1F, 35, 78), (0x5F25, 43, 78), (0x5F26, 23, 24),
    (0x5F27, 23, 43), (0x5F29, 54, 23), (0x5F2D, 54, 24), (0x5F2F, 54, 30), (0x5F31, 27, 68),
    (0x5F35, 35, 4), (0x5F37, 21, 14), (0x5F38, 54, 25), (0x5F3C, 40, 10), (0x5F3E, 34, 37),
    (0x5F41, 54, 26), (0x5F48, 54, 27), (0x5F4A, 21, 15), (0x5F4C, 54, 28), (0x5F4E, 54, 29),
    (0x5F51, 54, 31), (0x5F53, 36, 85), (0x5F56, 54, 32), (0x5F57, 54, 33), (0x5F59, 54, 34),
    (0x5F5C, 54, 19), (0x5F5D, 54, 18), (0x5F61, 54, 35), (0x5F62, 22, 32), (0x5F66, 40, 6),
    (0x5F69, 25, 43), (0x5F6A, 40, 22), (0x5F6B, 35, 5), (0x5F6C, 40, 42), (0x5F6D, 54, 36),
    (0x5F70, 29, 19), (0x5F71, 16, 37), (0x5F73, 54, 37), (0x5F77, 54, 38), (0x5F79, 43, 81),
    (0x5F7C, 39, 63), (0x5F7F, 54, 41), (0x5F80, 16, 92), (0x5F81, 31, 11), (0x5F82, 54, 40),
    (0x5F83, 54, 39), (0x5F84, 22, 33), (0x5F85, 33, 51), (0x5F87, 54, 45), (0x5F88, 54, 43),
    (0x5F8A, 54, 42), (0x5F8B, 45, 6), (0x5F8C, 23, 68), (0x5F90, 28, 88), (0x5F91, 54, 44),
    (0x5F92, 36, 43), (0x5F93, 28, 29), (0x5F97, 37, 31), (0x5F98, 54, 48), (0x5F99, 54, 47),
    (0x5F9E, 54, 46), (0x5FA0, 54, 49), (0x5FA1, 23, 69), (0x5FA8, 54, 50), (0x5FA9, 40, 91),
    (0x5FAA, 28, 58), (0x5FAD, 54, 51), (0x5FAE, 39, 88), (0x5FB3, 37, 32), (0x5FB4, 35, 6),
    (0x5FB9, 36, 15), (0x5FBC, 54, 52), (0x5FBD, 20, 10), (0x5FC3, 30, 19), (0x5FC5, 40, 11),
    (0x5FCC, 19, 86), (0x5FCD, 38, 5), (0x5FD6, 54, 53), (0x5FD7, 26, 53), (0x5FD8, 42, 25),
    (0x5FD9, 42, 26), (0x5FDC, 16, 93), (0x5FDD, 54, 58), (0x5FE0, 34, 72), (0x5FE4, 54, 55),
    (0x5FEB, 17, 86), (0x5FF0, 55, 12), (0x5FF1, 54, 57), (0x5FF5, 38, 15), (0x5FF8, 54, 56),
    (0x5FFB, 54, 54), (0x5FFD, 24, 89), (0x5FFF, 54, 60), (0x600E, 54, 66), (0x600F, 54, 72),
    (0x6010, 54, 64), (0x6012, 36, 59), (0x6015, 54, 69), (0x6016, 40, 60), (0x6019, 54, 63),
    (0x601B, 54, 68), (0x601C, 45, 70), (0x601D, 26, 54), (0x6020, 33, 52), (0x6021, 54, 61),
    (0x6025, 20, 61), (0x6026, 54, 71), (0x6027, 31, 12), (0x6028, 16, 68), (0x6029, 54, 65),
    (0x602A, 17, 87), (0x602B, 54, 70), (0x602F, 21, 16), (0x6031, 54, 67), (0x603A, 54, 73),
    (0x6041, 54, 75), (0x6042, 54, 85), (0x6043, 54, 83), (0x6046, 54, 80), (0x604A, 54, 79),
    (0x604B, 45, 87), (0x604D, 54, 81), (0x6050, 21, 17), (0x6052, 24, 16), (0x6055, 28, 89),
    (0x6059, 54, 88), (0x605A, 54, 74), (0x605F, 54, 78), (0x6060, 54, 62), (0x6062, 17, 89),
    (0x6063, 54, 82), (0x6064, 54, 84), (0x6065, 34, 48), (0x6068, 25, 7), (0x6069, 17, 23),
    (0x606A, 54, 76), (0x606B, 54, 87), (0x606C, 54, 86), (0x606D, 21, 18), (0x606F, 33, 8),
    (0x6070, 18, 69), (0x6075, 22, 34), (0x6077, 54, 77), (0x6081, 54, 89), (0x6083, 54, 92),
    (0x6084, 55, 0), (0x6089, 27, 28), (0x608B, 55, 6), (0x608C, 35, 79), (0x608D, 54, 90),
    (0x6092, 55, 4), (0x6094, 17, 88), (0x6096, 55, 2), (0x6097, 55, 3), (0x609A, 54, 93),
    (0x609B, 55, 1), (0x609F, 23, 70), (0x60A0, 44, 9), (0x60A3, 19, 20), (0x60A6, 16, 56),
    (0x60A7, 55, 5), (0x60A9, 38, 25), (0x60AA, 15, 12), (0x60B2, 39, 64), (0x60B3, 54, 59),
    (0x60B4, 55, 11), (0x60B5, 55, 15), (0x60B6, 43, 68), (0x60B8, 55, 8), (0x60BC, 36, 72),
    (0x60BD, 55, 13), (0x60C5, 29, 79), (0x60C6, 55, 14), (0x60C7, 37, 54), (0x60D1, 46, 38),
    (0x60D3, 55, 10), (0x60D8, 55, 16), (0x60DA, 24, 90), (0x60DC, 31, 42), (0x60DF, 15, 51),
    (0x60E0, 55, 9), (0x60E1, 55, 7), (0x60E3, 32, 57), (0x60E7, 54, 91), (0x60E8, 26, 19),
    (0x60F0, 33, 37), (0x60F1, 55, 28), (0x60F3, 32, 58), (0x60F4, 55, 23), (0x60F6, 55, 20),
    (0x60F7, 55, 21), (0x60F9, 27, 69), (0x60FA, 55, 24), (0x60FB, 55, 27), (0x6100, 55, 22),
    (0x6101, 28, 4), (0x6103, 55, 25), (0x6106, 55, 19), (0x6108, 43, 91), (0x6109, 43, 90),
    (0x610D, 55, 29), (0x610E, 55, 30), (0x610F, 15, 52), (0x6115, 55, 18), (0x611A, 21, 81),
    (0x611B, 15, 5), (0x611F, 19, 21), (0x6121, 55, 26), (0x6127, 55, 34), (0x6128, 55, 33),
    (0x612C, 55, 38), (0x6134, 55, 39), (0x613C, 55, 37), (0x613D, 55, 40), (0x613E, 55, 32),
    (0x613F, 55, 36), (0x6142, 55, 41), (0x6144, 55, 42), (0x6147, 55, 31), (0x6148, 26, 91),
    (0x614A, 55, 35), (0x614B, 33, 53), (0x614C, 24, 17), (0x614D, 55, 17), (0x614E, 30, 20),
    (0x6153, 55, 55), (0x6155, 41, 72), (0x6158, 55, 45), (0x6159, 55, 46), (0x615A, 55, 47),
    (0x615D, 55, 54), (0x615F, 55, 53), (0x6162, 42, 92), (0x6163, 19, 22), (0x6165, 55, 51),
    (0x6167, 22, 36), (0x6168, 18, 19), (0x616B, 55, 48), (0x616E, 45, 23), (0x616F, 55, 50),
    (0x6170, 15, 53), (0x6171, 55, 52), (0x6173, 55, 43), (0x6174, 55, 49), (0x6175, 55, 56),
    (0x6176, 22, 35), (0x6177, 55, 44), (0x617E, 44, 60), (0x6182, 44, 10), (0x6187, 55, 59),
    (0x618A, 55, 63), (0x618E, 32, 93), (0x6190, 45, 88), (0x6191, 55, 64), (0x6194, 55, 61),
    (0x6196, 55, 58), (0x6199, 55, 57), (0x619A, 55, 62), (0x61A4, 41, 15), (0x61A7, 37, 19),
    (0x61A9, 22, 37), (0x61AB, 55, 65), (0x61AC, 55, 60), (0x61AE, 55, 66), (0x61B2, 22, 90),
    (0x61B6, 17, 16), (0x61BA, 55, 74), (0x61BE, 19, 23), (0x61C3, 55, 72), (0x61C6, 55, 73),
    (0x61C7, 25, 8), (0x61C8, 55, 71), (0x61C9, 55, 69), (0x61CA, 55, 68), (0x61CB, 55, 75),
    (0x61CC, 55, 67), (0x61CD, 55, 77), (0x61D0, 17, 90), (0x61E3, 55, 79), (0x61E6, 55, 78),
    (0x61F2, 35, 7), (0x61F4, 55, 82), (0x61F6, 55, 80), (0x61F7, 55, 70), (0x61F8, 22, 91),
    (0x61FA, 55, 81), (0x61FC, 55, 85), (0x61FD, 55, 84), (0x61FE, 55, 86), (0x61FF, 55, 83),
    (0x6200, 55, 87), (0x6208, 55, 88), (0x6209, 55, 89), (0x620A, 41, 73), (0x620C, 55, 91),
    (0x620D, 55, 90), (0x620E, 28, 30), (0x6210, 31, 13), (0x6211, 17, 69), (0x6212, 17, 91),
    (0x6214, 55, 92), (0x6216, 15, 30), (0x621A, 31, 43), (0x621B, 55, 93), (0x621D, 75, 34),
    (0x621E, 56, 0), (0x621F, 22, 64), (0x6221, 56, 1), (0x6226, 31, 78), (0x622A, 56, 2),
    (0x622E, 56, 3), (0x622F, 20, 25), (0x6230, 56, 4), (0x6232, 56, 5), (0x6233, 56, 6),
    (0x6234, 33, 54), (0x6238, 23, 44), (0x623B, 43, 64), (0x623F, 42, 27), (0x6240, 28, 73),
    (0x6241, 56, 7), (0x6247, 31, 79), (0x6248, 77, 28), (0x6249, 39, 65), (0x624B, 27, 73),
    (0x624D, 25, 44), (0x624E, 56, 8), (0x6253, 33, 38), (0x6255, 41, 6), (0x6258, 33, 80),
    (0x625B, 56, 11), (0x625E, 56, 9), (0x6260, 56, 12), (0x6263, 56, 10), (0x6268, 56, 13),
    (0x626E, 41, 16), (0x6271, 15, 22), (0x6276, 40, 61), (0x6279, 39, 66), (0x627C, 56, 14),
    (0x627E, 56, 17), (0x627F, 29, 20), (0x6280, 20, 26), (0x6282, 56, 15), (0x6283, 56, 22),
    (0x6284, 29, 21), (0x6289, 56, 16), (0x628A, 38, 35), (0x6291, 44, 61), (0x6292, 56, 18),
    (0x6293, 56, 19), (0x6294, 56, 23), (0x6295, 36, 73), (0x6296, 56, 20), (0x6297, 24, 18),
    (0x6298, 31, 61), (0x629B, 56, 37), (0x629C, 39, 19), (0x629E, 33, 81), (0x62AB, 39, 67),
    (0x62AC, 57, 12), (0x62B1, 41, 89), (0x62B5, 35, 80), (0x62B9, 42, 84), (0x62BB, 56, 26),
    (0x62BC, 17, 0), (0x62BD, 34, 73), (0x62C2, 56, 35), (0x62C5, 34, 19), (0x62C6, 56, 29),
    (0x62C7, 56, 36), (0x62C8, 56, 31), (0x62C9, 56, 38), (0x62CA, 56, 34), (0x62CC, 56, 33),
    (0x62CD, 38, 78), (0x62CF, 56, 27), (0x62D0, 17, 92), (0x62D1, 56, 25), (0x62D2, 20, 80),
    (0x62D3, 33, 82), (0x62D4, 56, 21), (0x62D7, 56, 24), (0x62D8, 24, 19), (0x62D9, 31, 58),
    (0x62DB, 29, 22), (0x62DC, 56, 32), (0x62DD, 38, 49), (0x62E0, 20, 81), (0x62E1, 18, 39),
    (0x62EC, 18, 70), (0x62ED, 30, 0), (0x62EE, 56, 40), (0x62EF, 56, 45), (0x62F1, 56, 41),
    (0x62F3, 22, 92), (0x62F5, 56, 46), (0x62F6, 26, 1), (0x62F7, 24, 72), (0x62FE, 28, 5),
    (0x62FF, 56, 28), (0x6301, 26, 92), (0x6302, 56, 43), (0x6307, 26, 55), (0x6308, 56, 44),
    (0x6309, 15, 35), (0x630C, 56, 39), (0x6311, 35, 8), (0x6319, 20, 82), (0x631F, 21, 19),
    (0x6327, 56, 42), (0x6328, 15, 6), (0x632B, 25, 34), (0x632F, 30, 21), (0x633A, 35, 81),
    (0x633D, 39, 51), (0x633E, 56, 48), (0x633F, 32, 61), (0x6349, 33, 9), (0x634C, 26, 10),
    (0x634D, 56, 49), (0x634F, 56, 51), (0x6350, 56, 47), (0x6355, 41, 64), (0x6357, 35, 28),
    (0x635C, 32, 59), (0x6367, 41, 90), (0x6368, 27, 45), (0x6369, 56, 63), (0x636B, 56, 62),
    (0x636E, 30, 87), (0x6372, 22, 93), (0x6376, 56, 56), (0x6377, 29, 24), (0x637A, 37, 71),
    (0x637B, 38, 16), (0x6380, 56, 54), (0x6383, 32, 60), (0x6388, 27, 87), (0x6389, 56, 59),
    (0x638C, 29, 23), (0x638E, 56, 53), (0x638F, 56, 58), (0x6392, 38, 50), (0x6396, 56, 52),
    (0x6398, 22, 0), (0x639B, 18, 60), (0x639F, 56, 60), (0x63A0, 45, 10), (0x63A1, 25, 45),
    (0x63A2, 34, 20), (0x63A3, 56, 57), (0x63A5, 31, 59), (0x63A7, 24, 20), (0x63A8, 30, 67),
    (0x63A9, 16, 69), (0x63AA, 32, 27), (0x63AB, 56, 55), (0x63AC, 20, 36), (0x63B2, 22, 38),
    (0x63B4, 35, 46), (0x63B5, 56, 61), (0x63BB, 32, 62), (0x63BE, 56, 64), (0x63C0, 56, 66),
    (0x63C3, 33, 22), (0x63C4, 56, 72), (0x63C6, 56, 67), (0x63C9, 56, 69), (0x63CF, 40, 32),
    (0x63D0, 35, 82), (0x63D2, 56, 70), (0x63D6, 44, 11), (0x63DA, 44, 39), (0x63DB, 19, 24),
    (0x63E1, 15, 13), (0x63E3, 56, 68), (0x63E9, 56, 65), (0x63EE, 19, 87), (0x63F4, 16, 70),
    (0x63F6, 56, 71), (0x63FA, 44, 40), (0x6406, 56, 75), (0x640D, 33, 26), (0x640F, 56, 82),
    (0x6413, 56, 76), (0x6416, 56, 73), (0x6417, 56, 80), (0x641C, 56, 50), (0x6426, 56, 77),
    (0x6428, 56, 81), (0x642C, 39, 33), (0x642D, 36, 74), (0x6434, 56, 74), (0x6436, 56, 78),
    (0x643A, 22, 39), (0x643E, 25, 80), (0x6442, 31, 60), (0x644E, 56, 86), (0x6458, 36, 5),
    (0x6467, 56, 83), (0x6469, 42, 63), (0x646F, 56, 84), (0x6476, 56, 85), (0x6478, 43, 45),
    (0x647A, 31, 1), (0x6483, 22, 65), (0x6488, 56, 92), (0x6492, 26, 20), (0x6493, 56, 89),
    (0x6495, 56, 88), (0x649A, 38, 17), (0x649E, 37, 20), (0x64A4, 36, 16), (0x64A5, 56, 90),
    (0x64A9, 56, 91), (0x64AB, 40, 78), (0x64AD, 38, 36), (0x64AE, 26, 2), (0x64B0, 31, 80),
    (0x64B2, 42, 47), (0x64B9, 18, 40), (0x64BB, 57, 4), (0x64BC, 56, 93), (0x64C1, 44, 41),
    (0x64C2, 57, 6), (0x64C5, 57, 2), (0x64C7, 57, 3), (0x64CD, 32, 63), (0x64D2, 57, 1),
    (0x64D4, 56, 30), (0x64D8, 57, 5), (0x64DA, 57, 0), (0x64E0, 57, 10), (0x64E1, 57, 11),
    (0x64E2, 36, 6), (0x64E3, 57, 13), (0x64E6, 26, 3), (0x64E7, 57, 8), (0x64EC, 20, 27),
    (0x64EF, 57, 14), (0x64F1, 57, 7), (0x64F2, 57, 18), (0x64F4, 57, 17), (0x64F6, 57, 16),
    (0x64FA, 57, 19), (0x64FD, 57, 21), (0x64FE, 29, 80), (0x6500, 57, 20), (0x6505, 57, 24),
    (0x6518, 57, 22), (0x651C, 57, 23), (0x651D, 56, 79), (0x6523, 57, 26), (0x6524, 57, 25),
    (0x652A, 56, 87), (0x652B, 57, 27), (0x652C, 57, 15), (0x652F, 26, 56), (0x6534, 57, 28),
    (0x6535, 57, 29), (0x6536, 57, 31), (0x6537, 57, 30), (0x6538, 57, 32), (0x6539, 17, 93),
    (0x653B, 24, 21), (0x653E, 41, 91), (0x653F, 31, 14), (0x6545, 23, 45), (0x6548, 57, 34),
    (0x654D, 57, 37), (0x654F, 40, 49), (0x6551, 20, 62), (0x6555, 57, 36), (0x6556, 57, 35),
    (0x6557, 38, 51), (0x6558, 57, 38), (0x6559, 21, 20), (0x655D, 57, 40), (0x655E, 57, 39),
    (0x6562, 19, 25), (0x6563, 26, 21), (0x6566, 37, 55), (0x656C, 22, 40), (0x6570, 30, 83),
    (0x6572, 57, 41), (0x6574, 31, 15), (0x6575, 36, 7), (0x6577, 40, 62), (0x6578, 57, 42),
    (0x6582, 57, 43), (0x6583, 57, 44), (0x6587, 41, 23), (0x6588, 52, 60), (0x6589, 31, 37),
    (0x658C, 40, 43), (0x658E, 25, 55), (0x6590, 39, 68), (0x6591, 39, 34), (0x6597, 36, 44),
    (0x6599, 45, 32), (0x659B, 57, 46), (0x659C, 27, 47), (0x659F, 57, 47), (0x65A1, 15, 21),
    (0x65A4, 21, 51), (0x65A5, 31, 44), (0x65A7, 40, 63), (0x65AB, 57, 48), (0x65AC, 26, 33),
    (0x65AD, 34, 38), (0x65AF, 26, 58), (0x65B0, 30, 22), (0x65B7, 57, 49), (0x65B9, 41, 92),
    (0x65BC, 16, 86), (0x65BD, 26, 59), (0x65C1, 57, 52), (0x65C3, 57, 50), (0x65C4, 57, 53),
    (0x65C5, 45, 24), (0x65C6, 57, 51), (0x65CB, 31, 90), (0x65CC, 57, 54), (0x65CF, 33, 17),
    (0x65D2, 57, 55), (0x65D7, 19, 89), (0x65D9, 57, 57), (0x65DB, 57, 56), (0x65E0, 57, 58),
    (0x65E1, 57, 59), (0x65E2, 19, 90), (0x65E5, 37, 91), (0x65E6, 34, 21), (0x65E7, 20, 75),
    (0x65E8, 26, 60), (0x65E9, 32, 64), (0x65EC, 28, 59), (0x65ED, 15, 15), (0x65F1, 57, 60),
    (0x65FA, 17, 1), (0x65FB, 57, 64), (0x6602, 24, 22), (0x6603, 57, 63), (0x6606, 25, 10),
    (0x6607, 29, 25), (0x660A, 57, 62), (0x660C, 29, 26), (0x660E, 43, 31), (0x660F, 25, 9),
    (0x6613, 15, 54), (0x6614, 31, 45), (0x661C, 57, 69), (0x661F, 31, 16), (0x6620, 16, 38),
    (0x6625, 28, 52), (0x6627, 42, 69), (0x6628, 25, 81), (0x662D, 29, 27), (0x662F, 31, 6),
    (0x6634, 57, 68), (0x6635, 57, 66), (0x6636, 57, 67), (0x663C, 34, 74), (0x663F, 58, 5),
    (0x6641, 57, 73), (0x6642, 26, 93), (0x6643, 24, 23), (0x6644, 57, 71), (0x6649, 57, 72),
    (0x664B, 30, 23), (0x664F, 57, 70), (0x6652, 26, 14), (0x665D, 57, 75), (0x665E, 57, 74),
    (0x665F, 57, 79), (0x6662, 57, 80), (0x6664, 57, 76), (0x6666, 18, 1), (0x6667, 57, 77),
    (0x6668, 57, 78), (0x6669, 39, 52), (0x666E, 40, 64), (0x666F, 22, 41), (0x6670, 57, 81),
    (0x6674, 31, 17), (0x6676, 29, 28), (0x667A, 34, 49), (0x6681, 21, 38), (0x6683, 57, 82),
    (0x6684, 57, 86), (0x6687, 17, 42), (0x6688, 57, 83), (0x6689, 57, 85), (0x668E, 57, 84),
    (0x6691, 28, 74), (0x6696, 34, 39), (0x6697, 15, 36), (0x6698, 57, 87), (0x669D, 57, 88),
    (0x66A2, 35, 9), (0x66A6, 45, 80), (0x66AB, 26, 34), (0x66AE, 41, 74), (0x66B4, 42, 28),
    (0x66B8, 58, 1), (0x66B9, 57, 90), (0x66BC, 57, 93), (0x66BE, 57, 92), (0x66C1, 57, 89),
    (0x66C4, 58, 0), (0x66C7, 37, 61), (0x66C9, 57, 91), (0x66D6, 58, 2), (0x66D9, 28, 75),
    (0x66DA, 58, 3), (0x66DC, 44, 42), (0x66DD, 38, 87), (0x66E0, 58, 4), (0x66E6, 58, 6),
    (0x66E9, 58, 7), (0x66F0, 58, 8), (0x66F2, 21, 41), (0x66F3, 16, 39), (0x66F4, 24, 24),
    (0x66F5, 58, 9), (0x66F7, 58, 10), (0x66F8, 28, 80), (0x66F9, 32, 65), (0x66FC, 49, 55),
    (0x66FD, 32, 29), (0x66FE, 32, 28), (0x66FF, 33, 55), (0x6700, 25, 38), (0x6703, 47, 81),
    (0x6708, 22, 77), (0x6709, 44, 12), (0x670B, 41, 93), (0x670D, 40, 93), (0x670F, 58, 11),
    (0x6714, 25, 82), (0x6715, 35, 30), (0x6716, 58, 12), (0x6717, 46, 14), (0x671B, 42, 29),
    (0x671D, 35, 10), (0x671E, 58, 13), (0x671F, 19, 91), (0x6726, 58, 14), (0x6727, 58, 15),
    (0x6728, 43, 57), (0x672A, 43, 3), (0x672B, 42, 85), (0x672C, 42, 59), (0x672D, 26, 4),
    (0x672E, 58, 17), (0x6731, 27, 74), (0x6734, 42, 48), (0x6736, 58, 19), (0x6737, 58, 22),
    (0x6738, 58, 21), (0x673A, 19, 88), (0x673D, 20, 63), (0x673F, 58, 18), (0x6741, 58, 20),
    (0x6746, 58, 23), (0x6749, 30, 88), (0x674E, 44, 90), (0x674F, 15, 40), (0x6750, 25, 63),
    (0x6751, 33, 27), (0x6753, 27, 60), (0x6756, 29, 82), (0x6759, 58, 26), (0x675C, 36, 45),
    (0x675E, 58, 24), (0x675F, 33, 10), (0x6760, 58, 25), (0x6761, 29, 81), (0x6762, 43, 60),
    (0x6763, 58, 27), (0x6764, 58, 28), (0x6765, 44, 71), (0x676A, 58, 33), (0x676D, 24, 25),
    (0x676F, 38, 52), (0x6770, 58, 30), (0x6771, 36, 75), (0x6772, 57, 61), (0x6773, 57, 65),
    (0x6775, 20, 46), (0x6777, 38, 38), (0x677C, 58, 32), (0x677E, 29, 29), (0x677F, 39, 35),
    (0x6785, 58, 38), (0x6787, 39, 89), (0x6789, 58, 29), (0x678B, 58, 35), (0x678C, 58, 34),
    (0x6790, 31, 46), (0x6795, 42, 76), (0x6797, 45, 50), (0x679A, 42, 70), (0x679C, 17, 43),
    (0x679D, 26, 61), (0x67A0, 46, 39), (0x67A1, 58, 37), (0x67A2, 30, 84), (0x67A6, 58, 36),
    (0x67A9, 58, 31), (0x67AF, 23, 46), (0x67B3, 58, 43), (0x67B4, 58, 41), (0x67B6, 17, 44),
    (0x67B7, 58, 39), (0x67B8, 58, 45), (0x67B9, 58, 51), (0x67C1, 33, 39), (0x67C4, 41, 32),
    (0x67C6, 58, 53), (0x67CA, 40, 1), (0x67CE, 58, 52), (0x67CF, 38, 79), (0x67D0, 42, 30),
    (0x67D1, 19, 26), (0x67D3, 31, 86), (0x67D4, 28, 31), (0x67D8, 35, 50), (0x67DA, 44, 13),
    (0x67DD, 58, 48), (0x67DE, 58, 47), (0x67E2, 58, 49), (0x67E4, 58, 46), (0x67E7, 58, 54),
    (0x67E9, 58, 44), (0x67EC, 58, 42), (0x67EE, 58, 50), (0x67EF, 58, 40), (0x67F1, 34, 75),
    (0x67F3, 43, 87), (0x67F4, 27, 37), (0x67F5, 25, 83), (0x67FB, 25, 25), (0x67FE, 42, 78),
    (0x67FF, 18, 32), (0x6802, 35, 45), (0x6803, 37, 41), (0x6804, 16, 40), (0x6813, 31, 81),
    (0x6816, 31, 19), (0x6817, 22, 9), (0x681E, 58, 56), (0x6821, 24, 26), (0x6822, 18, 91),
    (0x6829, 58, 58), (0x682A, 18, 83), (0x682B, 58, 64), (0x6832, 58, 61), (0x6834, 31, 82),
    (0x6838, 18, 42), (0x6839, 25, 11), (0x683C, 18, 41), (0x683D, 25, 46), (0x6840, 58, 59),
    (0x6841, 22, 68), (0x6842, 22, 42), (0x6843, 36, 76), (0x6846, 58, 57), (0x6848, 15, 37),
    (0x684D, 58, 60), (0x684E, 58, 62), (0x6850, 21, 44), (0x6851, 22, 11), (0x6853, 19, 27),
    (0x6854, 20, 42), (0x6859, 58, 65), (0x685C, 25, 88), (0x685D, 42, 80), (0x685F, 26, 22),
    (0x6863, 58, 66), (0x6867, 40, 15), (0x6874, 58, 78), (0x6876, 17, 18), (0x6877, 58, 67),
    (0x687E, 58, 84), (0x687F, 58, 68), (0x6881, 45, 33), (0x6883, 58, 75), (0x6885, 38, 62),
    (0x688D, 58, 83), (0x688F, 58, 70), (0x6893, 15, 19), (0x6894, 58, 72), (0x6897, 24, 27),
    (0x689B, 58, 74), (0x689D, 58, 73), (0x689F, 58, 69), (0x68A0, 58, 80), (0x68A2, 29, 30),
    (0x68A6, 51, 76), (0x68A7, 23, 71), (0x68A8, 44, 91), (0x68AD, 58, 71), (0x68AF, 35, 83),
    (0x68B0, 18, 2), (0x68B1, 25, 12), (0x68B3, 58, 63), (0x68B5, 58, 79), (0x68B6, 18, 64),
    (0x68B9, 58, 77), (0x68BA, 58, 81), (0x68BC, 36, 77), (0x68C4, 19, 93), (0x68C6, 59, 17),
    (0x68C9, 43, 40), (0x68CA, 58, 86), (0x68CB, 19, 92), (0x68CD, 58, 93), (0x68D2, 42, 31),
    (0x68D4, 59, 0), (0x68D5, 59, 2), (0x68D7, 59, 6), (0x68D8, 58, 88), (0x68DA, 34, 9),
    (0x68DF, 36, 78), (0x68E0, 59, 10), (0x68E1, 58, 91), (0x68E3, 59, 7), (0x68E7, 59, 1),
    (0x68EE, 30, 24), (0x68EF, 59, 11), (0x68F2, 31, 18), (0x68F9, 59, 9), (0x68FA, 19, 28),
    (0x6900, 46, 47), (0x6901, 58, 85), (0x6904, 59, 5), (0x6905, 15, 55), (0x6908, 58, 87),
    (0x690B, 43, 25), (0x690C, 58, 92), (0x690D, 30, 1), (0x690E, 35, 38), (0x690F, 58, 82),
    (0x6912, 59, 4), (0x6919, 30, 89), (0x691A, 59, 14), (0x691B, 18, 80), (0x691C, 23, 0),
    (0x6921, 59, 16), (0x6922, 58, 89), (0x6923, 59, 15), (0x6925, 59, 8), (0x6926, 58, 90),
    (0x6928, 59, 12), (0x692A, 59, 13), (0x6930, 59, 30), (0x6934, 37, 45), (0x6936, 59, 3),
    (0x6939, 59, 26), (0x693D, 59, 28), (0x693F, 35, 55), (0x694A, 44, 43), (0x6953, 40, 85),
    (0x6954, 59, 23), (0x6955, 33, 41), (0x6959, 59, 29), (0x695A, 32, 30), (0x695C, 59, 20),
    (0x695D, 59, 33), (0x695E, 59, 32), (0x6960, 37, 78), (0x6961, 59, 31), (0x6962, 37, 73),
    (0x696A, 59, 35), (0x696B, 59, 22), (0x696D, 21, 39), (0x696E, 59, 25), (0x696F, 28, 60),
    (0x6973, 38, 63), (0x6974, 59, 27), (0x6975, 21, 42), (0x6977, 59, 19), (0x6978, 59, 21),
    (0x6979, 59, 18), (0x697C, 46, 15), (0x697D, 18, 57), (0x697E, 59, 24), (0x6981, 59, 34),
    (0x6982, 18, 20), (0x698A, 25, 70), (0x698E, 16, 60), (0x6991, 59, 51), (0x6994, 46, 16),
    (0x6995, 59, 54), (0x699B, 30, 25), (0x699C, 59, 53), (0x69A0, 59, 52), (0x69A7, 59, 49),
    (0x69AE, 59, 37), (0x69B1, 59, 66), (0x69B2, 59, 36), (0x69B4, 59, 55), (0x69BB, 59, 47),
    (0x69BE, 59, 42), (0x69BF, 59, 39), (0x69C1, 59, 40), (0x69C3, 59, 48), (0x69C7, 83, 1),
    (0x69CA, 59, 45), (0x69CB, 24, 28), (0x69CC, 35, 39), (0x69CD, 32, 67), (0x69CE, 59, 43),
    (0x69D0, 59, 38), (0x69D3, 59, 41), (0x69D8, 44, 44), (0x69D9, 42, 73), (0x69DD, 59, 46),
    (0x69DE, 59, 56), (0x69E7, 59, 64), (0x69E8, 59, 57), (0x69EB, 59, 70), (0x69ED, 59, 68),
    (0x69F2, 59, 63), (0x69F9, 59, 62), (0x69FB, 35, 47), (0x69FD, 32, 68), (0x69FF, 59, 60),
    (0x6A02, 59, 58), (0x6A05, 59, 65), (0x6A0A, 59, 71), (0x6A0B, 39, 84), (0x6A0C, 59, 77),
    (0x6A12, 59, 72), (0x6A13, 59, 75), (0x6A14, 59, 69), (0x6A17, 34, 83), (0x6A19, 40, 23),
    (0x6A1B, 59, 59), (0x6A1E, 59, 67), (0x6A1F, 29, 31), (0x6A21, 43, 46), (0x6A22, 59, 87),
    (0x6A23, 59, 74), (0x6A29, 23, 1), (0x6A2A, 17, 2), (0x6A2B, 18, 62), (0x6A2E, 59, 50),
    (0x6A35, 29, 32), (0x6A36, 59, 79), (0x6A38, 59, 86), (0x6A39, 27, 88), (0x6A3A, 18, 81),
    (0x6A3D, 34, 13), (0x6A44, 59, 76), (0x6A47, 59, 81), (0x6A48, 59, 85), (0x6A4B, 21, 21),
    (0x6A58, 20, 43), (0x6A59, 59, 83), (0x6A5F, 20, 0), (0x6A61, 37, 42), (0x6A62, 59, 82),
    (0x6A66, 59, 84), (0x6A72, 59, 78), (0x6A78, 59, 80), (0x6A7F, 18, 63), (0x6A80, 34, 40),
    (0x6A84, 59, 91), (0x6A8D, 59, 89), (0x6A8E, 23, 72), (0x6A90, 59, 88), (0x6A97, 60, 0),
    (0x6A9C, 58, 55), (0x6AA0, 59, 90), (0x6AA2, 59, 92), (0x6AA3, 59, 93), (0x6AAA, 60, 11),
    (0x6AAC, 60, 7), (0x6AAE, 58, 76), (0x6AB3, 60, 6), (0x6AB8, 60, 5), (0x6ABB, 60, 2),
    (0x6AC1, 59, 73), (0x6AC2, 60, 4), (0x6AC3, 60, 3), (0x6AD1, 60, 9), (0x6AD3, 46, 5),
    (0x6ADA, 60, 12), (0x6ADB, 21, 90), (0x6ADE, 60, 8), (0x6ADF, 60, 10), (0x6AE8, 39, 6),
    (0x6AEA, 60, 13), (0x6AFA, 60, 17), (0x6AFB, 60, 14), (0x6B04, 44, 82), (0x6B05, 60, 15),
    (0x6B0A, 59, 61), (0x6B12, 60, 18), (0x6B16, 60, 19), (0x6B1D, 16, 20), (0x6B1F, 60, 21),
    (0x6B20, 22, 70), (0x6B21, 27, 0), (0x6B23, 21, 52), (0x6B27, 17, 3), (0x6B32, 44, 62),
    (0x6B37, 60, 23), (0x6B38, 60, 22), (0x6B39, 60, 25), (0x6B3A, 20, 28), (0x6B3D, 21, 53),
    (0x6B3E, 19, 29), (0x6B43, 60, 28), (0x6B47, 60, 27), (0x6B49, 60, 29), (0x6B4C, 17, 45),
    (0x6B4E, 34, 22), (0x6B50, 60, 30), (0x6B53, 19, 30), (0x6B54, 60, 32), (0x6B59, 60, 31),
    (0x6B5B, 60, 33), (0x6B5F, 60, 34), (0x6B61, 60, 35), (0x6B62, 26, 62), (0x6B63, 31, 20),
    (0x6B64, 25, 0), (0x6B66, 40, 79), (0x6B69, 41, 65), (0x6B6A, 46, 35), (0x6B6F, 26, 84),
    (0x6B73, 25, 47), (0x6B74, 45, 81), (0x6B78, 60, 36), (0x6B79, 60, 37), (0x6B7B, 26, 63),
    (0x6B7F, 60, 38), (0x6B80, 60, 39), (0x6B83, 60, 41), (0x6B84, 60, 40), (0x6B86, 42, 55),
    (0x6B89, 28, 61), (0x6B8A, 27, 75), (0x6B8B, 26, 35), (0x6B8D, 60, 42), (0x6B95, 60, 44),
    (0x6B96, 30, 2), (0x6B98, 60, 43), (0x6B9E, 60, 45), (0x6BA4, 60, 46), (0x6BAA, 60, 47),
    (0x6BAB, 60, 48), (0x6BAF, 60, 49), (0x6BB1, 60, 51), (0x6BB2, 60, 50), (0x6BB3, 60, 52),
    (0x6BB4, 17, 4), (0x6BB5, 34, 41), (0x6BB7, 60, 53), (0x6BBA, 26, 5), (0x6BBB, 18, 43),
    (0x6BBC, 60, 54), (0x6BBF, 36, 33), (0x6BC0, 51, 43), (0x6BC5, 20, 2), (0x6BC6, 60, 55),
    (0x6BCB, 60, 56), (0x6BCD, 41, 75), (0x6BCE, 42, 71), (0x6BD2, 37, 38), (0x6BD3, 60, 57),
    (0x6BD4, 39, 69), (0x6BD8, 39, 90), (0x6BDB, 43, 50), (0x6BDF, 60, 58), (0x6BEB, 60, 60),
    (0x6BEC, 60, 59), (0x6BEF, 60, 62), (0x6BF3, 60, 61), (0x6C08, 60, 64), (0x6C0F, 26, 64),
    (0x6C11, 43, 16), (0x6C13, 60, 65), (0x6C14, 60, 66), (0x6C17, 20, 3), (0x6C1B, 60, 67),
    (0x6C23, 60, 69), (0x6C24, 60, 68), (0x6C34, 30, 68), (0x6C37, 40, 24), (0x6C38, 16, 41),
    (0x6C3E, 39, 36), (0x6C40, 35, 84), (0x6C41, 28, 32), (0x6C42, 20, 64), (0x6C4E, 39, 37),
    (0x6C50, 27, 13), (0x6C55, 60, 71), (0x6C57, 19, 31), (0x6C5A, 16, 87), (0x6C5D, 37, 81),
    (0x6C5E, 60, 70), (0x6C5F, 24, 29), (0x6C60, 34, 50), (0x6C62, 60, 72), (0x6C68, 60, 80),
    (0x6C6A, 60, 73), (0x6C70, 33, 32), (0x6C72, 20, 65), (0x6C73, 60, 81), (0x6C7A, 22, 71),
    (0x6C7D, 20, 4), (0x6C7E, 60, 79), (0x6C81, 60, 77), (0x6C82, 60, 74), (0x6C83, 44, 63),
    (0x6C88, 35, 31), (0x6C8C, 37, 56), (0x6C8D, 60, 75), (0x6C90, 60, 83), (0x6C92, 60, 82),
    (0x6C93, 22, 2), (0x6C96, 17, 12), (0x6C99, 25, 26), (0x6C9A, 60, 76), (0x6C9B, 60, 78),
    (0x6CA1, 42, 54), (0x6CA2, 33, 83), (0x6CAB, 42, 86), (0x6CAE, 60, 91), (0x6CB1, 60, 92),
    (0x6CB3, 17, 46), (0x6CB8, 41, 7), (0x6CB9, 43, 92), (0x6CBA, 61, 0), (0x6CBB, 27, 2),
    (0x6CBC, 29, 33), (0x6CBD, 60, 87), (0x6CBE, 60, 93), (0x6CBF, 16, 71), (0x6CC1, 21, 22),
    (0x6CC4, 60, 84), (0x6CC5, 60, 89), (0x6CC9, 31, 83), (0x6CCA, 38, 80), (0x6CCC, 39, 70),
    (0x6CD3, 60, 86), (0x6CD5, 42, 0), (0x6CD7, 60, 88), (0x6CD9, 61, 3), (0x6CDB, 61, 1),
    (0x6CDD, 60, 90), (0x6CE1, 42, 1), (0x6CE2, 38, 39), (0x6CE3, 20, 66), (0x6CE5, 36, 4),
    (0x6CE8, 34, 76), (0x6CEA, 61, 4), (0x6CEF, 61, 2), (0x6CF0, 33, 56), (0x6CF1, 60, 85),
    (0x6CF3, 16, 42), (0x6D0B, 44, 45), (0x6D0C, 61, 15), (0x6D12, 61, 14), (0x6D17, 31, 85),
    (0x6D19, 61, 11), (0x6D1B, 44, 75), (0x6D1E, 37, 21), (0x6D1F, 61, 5), (0x6D25, 35, 36),
    (0x6D29, 16, 43), (0x6D2A, 24, 30), (0x6D2B, 61, 8), (0x6D32, 28, 6), (0x6D33, 61, 13),
    (0x6D35, 61, 12), (0x6D36, 61, 7), (0x6D38, 61, 10), (0x6D3B, 18, 71), (0x6D3D, 61, 9),
    (0x6D3E, 38, 40), (0x6D41, 45, 13), (0x6D44, 29, 83), (0x6D45, 31, 84), (0x6D59, 61, 21),
    (0x6D5A, 61, 19), (0x6D5C, 40, 44), (0x6D63, 61, 16), (0x6D64, 61, 18), (0x6D66, 16, 25),
    (0x6D69, 24, 31), (0x6D6A, 46, 17), (0x6D6C, 18, 28), (0x6D6E, 40, 65), (0x6D74, 44, 64),
    (0x6D77, 18, 3), (0x6D78, 30, 26), (0x6D79, 61, 20), (0x6D85, 61, 25), (0x6D88, 29, 34),
    (0x6D8C, 44, 15), (0x6D8E, 61, 22), (0x6D93, 61, 17), (0x6D95, 61, 23), (0x6D99, 45, 61),
    (0x6D9B, 36, 82), (0x6D9C, 37, 33), (0x6DAF, 18, 21), (0x6DB2, 16, 52), (0x6DB5, 61, 29),
    (0x6DB8, 61, 32), (0x6DBC, 45, 34), (0x6DC0, 44, 67), (0x6DC5, 61, 39), (0x6DC6, 61, 33),
    (0x6DC7, 61, 30), (0x6DCB, 45, 51), (0x6DCC, 61, 36), (0x6DD1, 28, 41), (0x6DD2, 61, 38),
    (0x6DD5, 61, 43), (0x6DD8, 36, 80), (0x6DD9, 61, 41), (0x6DDE, 61, 35), (0x6DE1, 34, 23),
    (0x6DE4, 61, 42), (0x6DE6, 61, 31), (0x6DE8, 61, 37), (0x6DEA, 61, 44), (0x6DEB, 15, 91),
    (0x6DEC, 61, 34), (0x6DEE, 61, 45), (0x6DF1, 30, 27), (0x6DF3, 28, 62), (0x6DF5, 41, 4),
    (0x6DF7, 25, 13), (0x6DF9, 61, 26), (0x6DFA, 61, 40), (0x6DFB, 36, 25), (0x6E05, 31, 21),
    (0x6E07, 18, 72), (0x6E08, 25, 48), (0x6E09, 29, 35), (0x6E0A, 61, 28), (0x6E0B, 28, 33),
    (0x6E13, 22, 43), (0x6E15, 61, 27), (0x6E19, 61, 49), (0x6E1A, 28, 76), (0x6E1B, 23, 25),
    (0x6E1D, 61, 64), (0x6E1F, 61, 58), (0x6E20, 20, 83), (0x6E21, 36, 46), (0x6E23, 61, 53),
    (0x6E24, 61, 62), (0x6E25, 15, 14), (0x6E26, 16, 17), (0x6E29, 17, 24), (0x6E2B, 61, 55),
    (0x6E2C, 33, 11), (0x6E2D, 61, 46), (0x6E2E, 61, 48), (0x6E2F, 24, 32), (0x6E38, 61, 65),
    (0x6E3A, 61, 60), (0x6E3E, 61, 52), (0x6E43, 61, 59), (0x6E4A, 43, 10), (0x6E4D, 61, 57),
    (0x6E4E, 61, 61), (0x6E56, 23, 47), (0x6E58, 29, 36), (0x6E5B, 34, 24), (0x6E5F, 61, 51),
    (0x6E67, 44, 14), (0x6E6B, 61, 54), (0x6E6E, 61, 47), (0x6E6F, 36, 81), (0x6E72, 61, 50),
    (0x6E76, 61, 56), (0x6E7E, 46, 48), (0x6E7F, 27, 29), (0x6E80, 42, 93), (0x6E82, 61, 66),
    (0x6E8C, 39, 13), (0x6E8F, 61, 78), (0x6E90, 23, 26), (0x6E96, 28, 63), (0x6E98, 61, 68),
    (0x6E9C, 45, 14), (0x6E9D, 24, 33), (0x6E9F, 61, 81), (0x6EA2, 15, 77), (0x6EA5, 61, 79),
    (0x6EAA, 61, 67), (0x6EAF, 61, 73), (0x6EB2, 61, 75), (0x6EB6, 44, 46), (0x6EB7, 61, 70),
    (0x6EBA, 36, 13), (0x6EBD, 61, 72), (0x6EC2, 61, 80), (0x6EC4, 61, 74), (0x6EC5, 43, 38),
    (0x6EC9, 61, 69), (0x6ECB, 27, 1), (0x6ECC, 61, 93), (0x6ED1, 18, 73), (0x6ED3, 61, 71),
    (0x6ED4, 61, 76), (0x6ED5, 61, 77), (0x6EDD, 33, 75), (0x6EDE, 33, 57), (0x6EEC, 61, 85),
    (0x6EEF, 61, 91), (0x6EF2, 61, 89), (0x6EF4, 36, 8), (0x6EF7, 62, 2), (0x6EF8, 61, 86),
    (0x6EFE, 61, 87), (0x6EFF, 61, 63), (0x6F01, 20, 88), (0x6F02, 40, 25), (0x6F06, 27, 30),
    (0x6F09, 24, 86), (0x6F0F, 46, 18), (0x6F11, 61, 83), (0x6F13, 62, 1), (0x6F14, 16, 72),
    (0x6F15, 32, 69), (0x6F20, 38, 88), (0x6F22, 19, 32), (0x6F23, 45, 89), (0x6F2B, 43, 0),
    (0x6F2C, 35, 49), (0x6F31, 61, 90), (0x6F32, 61, 92), (0x6F38, 32, 17), (0x6F3E, 62, 0),
    (0x6F3F, 61, 88), (0x6F41, 61, 82), (0x6F45, 19, 34), (0x6F54, 22, 72), (0x6F58, 62, 14),
    (0x6F5B, 62, 9), (0x6F5C, 31, 87), (0x6F5F, 18, 66), (0x6F64, 28, 64), (0x6F66, 62, 18),
    (0x6F6D, 62, 11), (0x6F6E, 35, 11), (0x6F6F, 62, 8), (0x6F70, 35, 56), (0x6F74, 62, 43),
    (0x6F78, 62, 5), (0x6F7A, 62, 4), (0x6F7C, 62, 13), (0x6F80, 62, 7), (0x6F81, 62, 6),
    (0x6F82, 62, 12), (0x6F84, 31, 0), (0x6F86, 62, 3), (0x6F8E, 62, 15), (0x6F91, 62, 16),
    (0x6F97, 19, 33), (0x6FA1, 62, 21), (0x6FA3, 62, 20), (0x6FA4, 62, 22), (0x6FAA, 62, 25),
    (0x6FB1, 36, 34), (0x6FB3, 62, 19), (0x6FB9, 62, 23), (0x6FC0, 22, 66), (0x6FC1, 33, 88),
    (0x6FC2, 62, 17), (0x6FC3, 38, 26), (0x6FC6, 62, 24), (0x6FD4, 62, 29), (0x6FD5, 62, 27),
    (0x6FD8, 62, 30), (0x6FDB, 62, 33), (0x6FDF, 62, 26), (0x6FE0, 24, 73), (0x6FE1, 38, 7),
    (0x6FE4, 61, 24), (0x6FEB, 44, 83), (0x6FEC, 62, 28), (0x6FEE, 62, 32), (0x6FEF, 33, 84),
    (0x6FF1, 62, 31), (0x6FF3, 62, 10), (0x6FF6, 78, 72), (0x6FFA, 62, 36), (0x6FFE, 62, 40),
    (0x7001, 62, 38), (0x7009, 62, 34), (0x700B, 62, 35), (0x700F, 62, 39), (0x7011, 62, 37),
    (0x7015, 40, 45), (0x7018, 62, 45), (0x701A, 62, 42), (0x701B, 62, 41), (0x701D, 62, 44),
    (0x701E, 37, 51), (0x701F, 62, 46), (0x7026, 34, 84), (0x7027, 33, 76), (0x702C, 31, 4),
    (0x7030, 62, 47), (0x7032, 62, 49), (0x703E, 62, 48), (0x704C, 61, 84), (0x7051, 62, 50),
    (0x7058, 37, 70), (0x7063, 62, 51), (0x706B, 17, 47), (0x706F, 36, 83), (0x7070, 18, 4),
    (0x7078, 20, 67), (0x707C, 27, 61), (0x707D, 25, 49), (0x7089, 46, 6), (0x708A, 30, 69),
    (0x708E, 16, 73), (0x7092, 62, 53), (0x7099, 62, 52), (0x70AC, 62, 56), (0x70AD, 34, 25),
    (0x70AE, 62, 59), (0x70AF, 62, 54), (0x70B3, 62, 58), (0x70B8, 62, 57), (0x70B9, 36, 31),
    (0x70BA, 15, 56), (0x70C8, 45, 84), (0x70CB, 62, 61), (0x70CF, 16, 7), (0x70D9, 62, 63),
    (0x70DD, 62, 62), (0x70DF, 62, 60), (0x70F1, 62, 55), (0x70F9, 42, 2), (0x70FD, 62, 65),
    (0x7109, 62, 64), (0x7114, 16, 74), (0x7119, 62, 67), (0x711A, 41, 17), (0x711C, 62, 66),
    (0x7121, 43, 20), (0x7126, 29, 38), (0x7136, 32, 18), (0x713C, 29, 37), (0x7149, 45, 90),
    (0x714C, 62, 73), (0x714E, 31, 88), (0x7155, 62, 69), (0x7156, 62, 74), (0x7159, 16, 75),
    (0x7162, 62, 72), (0x7164, 38, 64), (0x7165, 62, 68), (0x7166, 62, 71), (0x7167, 29, 39),
    (0x7169, 39, 48), (0x716C, 62, 75), (0x716E, 27, 48), (0x717D, 31, 89), (0x7184, 62, 78),
    (0x7188, 62, 70), (0x718A, 22, 6), (0x718F, 62, 76), (0x7194, 44, 47), (0x7195, 62, 79),
    (0x7199, 83, 5), (0x719F, 28, 46), (0x71A8, 62, 80), (0x71AC, 62, 81), (0x71B1, 38, 13),
    (0x71B9, 62, 83), (0x71BE, 62, 84), (0x71C3, 38, 18), (0x71C8, 36, 84), (0x71C9, 62, 86),
    (0x71CE, 62, 88), (0x71D0, 45, 52), (0x71D2, 62, 85), (0x71D4, 62, 87), (0x71D5, 16, 76),
    (0x71D7, 62, 82), (0x71DF, 50, 58), (0x71E0, 62, 89), (0x71E5, 32, 70), (0x71E6, 26, 23),
    (0x71E7, 62, 91), (0x71EC, 62, 90), (0x71ED, 30, 3), (0x71EE, 49, 56), (0x71F5, 62, 92),
    (0x71F9, 63, 0), (0x71FB, 62, 77), (0x71FC, 62, 93), (0x71FF, 63, 1), (0x7206, 38, 89),
    (0x720D, 63, 2), (0x7210, 63, 3), (0x721B, 63, 4), (0x7228, 63, 5), (0x722A, 35, 61),
    (0x722C, 63, 7), (0x722D, 63, 6), (0x7230, 63, 8), (0x7232, 63, 9), (0x7235, 27, 62),
    (0x7236, 40, 66), (0x723A, 43, 75), (0x723B, 63, 10), (0x723C, 63, 11), (0x723D, 32, 53),
    (0x723E, 27, 3), (0x723F, 63, 12), (0x7240, 63, 13), (0x7246, 63, 14), (0x7247, 41, 49),
    (0x7248, 39, 38), (0x724B, 63, 15), (0x724C, 38, 54), (0x7252, 35, 12), (0x7258, 63, 16),
    (0x7259, 17, 70), (0x725B, 20, 76), (0x725D, 43, 37), (0x725F, 43, 21), (0x7261, 17, 19),
    (0x7262, 46, 19), (0x7267, 42, 49), (0x7269, 41, 9), (0x7272, 31, 22), (0x7274, 63, 17),
    (0x7279, 37, 34), (0x727D, 23, 2), (0x727E, 63, 18), (0x7280, 25, 51), (0x7281, 63, 20),
    (0x7282, 63, 19), (0x7287, 63, 21), (0x7292, 63, 22), (0x7296, 63, 23), (0x72A0, 20, 29),
    (0x72A2, 63, 24), (0x72A7, 63, 25), (0x72AC, 23, 3), (0x72AF, 39, 39), (0x72B2, 63, 27),
    (0x72B6, 29, 84), (0x72B9, 63, 26), (0x72C2, 21, 23), (0x72C3, 63, 28), (0x72C4, 63, 30),
    (0x72C6, 63, 29), (0x72CE, 63, 31), (0x72D0, 23, 48), (0x72D2, 63, 32), (0x72D7, 21, 72),
    (0x72D9, 32, 31), (0x72DB, 24, 92), (0x72E0, 63, 34), (0x72E1, 63, 35), (0x72E2, 63, 33),
    (0x72E9, 27, 76), (0x72EC, 37, 39), (0x72ED, 21, 24), (0x72F7, 63, 37), (0x72F8, 34, 11),
    (0x72F9, 63, 36), (0x72FC, 46, 20), (0x72FD, 38, 65), (0x730A, 63, 40), (0x7316, 63, 42),
    (0x7317, 63, 39), (0x731B, 43, 51), (0x731C, 63, 41), (0x731D, 63, 43), (0x731F, 45, 35),
    (0x7325, 63, 47), (0x7329, 63, 46), (0x732A, 34, 85), (0x732B, 38, 12), (0x732E, 23, 4),
    (0x732F, 63, 45), (0x7334, 63, 44), (0x7336, 44, 16), (0x7337, 44, 17), (0x733E, 63, 48),
    (0x733F, 16, 77), (0x7344, 24, 85), (0x7345, 26, 65), (0x734E, 63, 49), (0x734F, 63, 50),
    (0x7357, 63, 52), (0x7363, 28, 34), (0x7368, 63, 54), (0x736A, 63, 53), (0x7370, 63, 55),
    (0x7372, 18, 44), (0x7375, 63, 57), (0x7378, 63, 56), (0x737A, 63, 59), (0x737B, 63, 58),
    (0x7384, 23, 27), (0x7387, 45, 7), (0x7389, 21, 43), (0x738B, 17, 5), (0x7396, 21, 73),
    (0x73A9, 19, 64), (0x73B2, 45, 71), (0x73B3, 63, 61), (0x73BB, 63, 63), (0x73C0, 63, 64),
    (0x73C2, 17, 48), (0x73C8, 63, 60), (0x73CA, 26, 24), (0x73CD, 35, 32), (0x73CE, 63, 62),
    (0x73DE, 63, 67), (0x73E0, 27, 77), (0x73E5, 63, 65), (0x73EA, 22, 29), (0x73ED, 39, 40),
    (0x73EE, 63, 66), (0x73F1, 63, 93), (0x73F8, 63, 72), (0x73FE, 23, 28), (0x7403, 20, 68),
    (0x7405, 63, 69), (0x7406, 44, 92), (0x7409, 45, 15), (0x7422, 33, 85), (0x7425, 63, 71),
    (0x7432, 63, 73), (0x7433, 45, 53), (0x7434, 21, 54), (0x7435, 39, 91), (0x7436, 38, 41),
    (0x743A, 63, 74), (0x743F, 63, 76), (0x7441, 63, 79), (0x7455, 63, 75), (0x7459, 63, 78),
    (0x745A, 23, 73), (0x745B, 16, 44), (0x745C, 63, 80), (0x745E, 30, 79), (0x745F, 63, 77),
    (0x7460, 45, 59), (0x7463, 63, 83), (0x7464, 83, 3), (0x7469, 63, 81), (0x746A, 63, 84),
    (0x746F, 63, 70), (0x7470, 63, 82), (0x7473, 25, 27), (0x7476, 63, 85), (0x747E, 63, 86),
    (0x7483, 44, 93), (0x748B, 63, 87), (0x749E, 63, 88), (0x74A2, 63, 68), (0x74A7, 63, 89),
    (0x74B0, 19, 35), (0x74BD, 27, 4), (0x74CA, 63, 90), (0x74CF, 63, 91), (0x74D4, 63, 92),
    (0x74DC, 16, 26), (0x74E0, 64, 0), (0x74E2, 40, 26), (0x74E3, 64, 1), (0x74E6, 19, 3),
    (0x74E7, 64, 2), (0x74E9, 64, 3), (0x74EE, 64, 4), (0x74F0, 64, 6), (0x74F1, 64, 7),
    (0x74F2, 64, 5), (0x74F6, 40, 50), (0x74F7, 64, 9), (0x74F8, 64, 8), (0x7503, 64, 11),
    (0x7504, 64, 10), (0x7505, 64, 12), (0x750C, 64, 13), (0x750D, 64, 15), (0x750E, 64, 14),
    (0x7511, 24, 88), (0x7513, 64, 17), (0x7515, 64, 16), (0x7518, 19, 36), (0x751A, 30, 50),
    (0x751C, 36, 27), (0x751E, 64, 18), (0x751F, 31, 23), (0x7523, 26, 25), (0x7525, 16, 88),
    (0x7526, 64, 19), (0x7528, 44, 48), (0x752B, 41, 66), (0x752C, 64, 20), (0x7530, 36, 35),
    (0x7531, 44, 18), (0x7532, 24, 34), (0x7533, 30, 28), (0x7537, 34, 42), (0x7538, 49, 19),
    (0x753A, 35, 13), (0x753B, 17, 71), (0x753C, 64, 21), (0x7544, 64, 22), (0x7546, 64, 27),
    (0x7549, 64, 25), (0x754A, 64, 24), (0x754B, 57, 33), (0x754C, 18, 5), (0x754D, 64, 23),
    (0x754F, 15, 57), (0x7551, 39, 9), (0x7554, 39, 41), (0x7559, 45, 16), (0x755A, 64, 28),
    (0x755B, 64, 26), (0x755C, 34, 59), (0x755D, 31, 5), (0x7560, 39, 10), (0x7562, 40, 12),
    (0x7564, 64, 30), (0x7565, 45, 11), (0x7566, 22, 44), (0x7567, 64, 31), (0x7569, 64, 29),
    (0x756A, 39, 53), (0x756B, 64, 32), (0x756D, 64, 33), (0x7570, 15, 58), (0x7573, 29, 85),
    (0x7574, 64, 38), (0x7576, 64, 35), (0x7577, 37, 76), (0x7578, 64, 34), (0x757F, 20, 5),
    (0x7582, 64, 41), (0x7586, 64, 36), (0x7587, 64, 37), (0x7589, 64, 40), (0x758A, 64, 39),
    (0x758B, 40, 4), (0x758E, 32, 33), (0x758F, 32, 32), (0x7591, 20, 30), (0x7594, 64, 42),
    (0x759A, 64, 43), (0x759D, 64, 44), (0x75A3, 64, 46), (0x75A5, 64, 45), (0x75AB, 16, 53),
    (0x75B1, 64, 54), (0x75B2, 39, 71), (0x75B3, 64, 48), (0x75B5, 64, 50), (0x75B8, 64, 52),
    (0x75B9, 30, 29), (0x75BC, 64, 53), (0x75BD, 64, 51), (0x75BE, 27, 31), (0x75C2, 64, 47),
    (0x75C3, 64, 49), (0x75C5, 40, 33), (0x75C7, 29, 40), (0x75CA, 64, 56), (0x75CD, 64, 55),
    (0x75D2, 64, 57), (0x75D4, 27, 5), (0x75D5, 25, 14), (0x75D8, 36, 86), (0x75D9, 64, 58),
    (0x75DB, 35, 42), (0x75DE, 64, 60), (0x75E2, 45, 0), (0x75E3, 64, 59), (0x75E9, 32, 72),
    (0x75F0, 64, 65), (0x75F2, 64, 67), (0x75F3, 64, 68), (0x75F4, 34, 51), (0x75FA, 64, 66),
    (0x75FC, 64, 63), (0x75FE, 64, 61), (0x75FF, 64, 62), (0x7601, 64, 64), (0x7609, 64, 71),
    (0x760B, 64, 69), (0x760D, 64, 70), (0x761F, 64, 72), (0x7620, 64, 74), (0x7621, 64, 75),
    (0x7622, 64, 76), (0x7624, 64, 77), (0x7627, 64, 73), (0x7630, 64, 79), (0x7634, 64, 78),
    (0x763B, 64, 80), (0x7642, 45, 36), (0x7646, 64, 83), (0x7647, 64, 81), (0x7648, 64, 82),
    (0x764C, 19, 65), (0x7652, 43, 93), (0x7656, 41, 41), (0x7658, 64, 85), (0x765C, 64, 84),
    (0x7661, 64, 86), (0x7662, 64, 87), (0x7667, 64, 91), (0x7668, 64, 88), (0x7669, 64, 89),
    (0x766A, 64, 90), (0x766C, 64, 92), (0x7670, 64, 93), (0x7672, 65, 0), (0x7676, 65, 1),
    (0x7678, 65, 2), (0x767A, 39, 14), (0x767B, 36, 47), (0x767C, 65, 3), (0x767D, 38, 81),
    (0x767E, 40, 19), (0x7680, 65, 4), (0x7683, 65, 5), (0x7684, 36, 9), (0x7686, 18, 6),
    (0x7687, 24, 35), (0x7688, 65, 6), (0x768B, 65, 7), (0x768E, 65, 8), (0x7690, 26, 8),
    (0x7693, 65, 10), (0x7696, 65, 9), (0x7699, 65, 11), (0x769A, 65, 12), (0x76AE, 39, 72),
    (0x76B0, 65, 13), (0x76B4, 65, 14), (0x76B7, 82, 72), (0x76B8, 65, 15), (0x76B9, 65, 16),
    (0x76BA, 65, 17), (0x76BF, 26, 13), (0x76C2, 65, 18), (0x76C3, 38, 53), (0x76C6, 42, 62),
    (0x76C8, 16, 45), (0x76CA, 16, 54), (0x76CD, 65, 19), (0x76D2, 65, 21), (0x76D6, 65, 20),
    (0x76D7, 36, 79), (0x76DB, 31, 24), (0x76DC, 60, 24), (0x76DE, 65, 22), (0x76DF, 43, 32),
    (0x76E1, 65, 23), (0x76E3, 19, 37), (0x76E4, 39, 54), (0x76E5, 65, 24), (0x76E7, 65, 25),
    (0x76EA, 65, 26), (0x76EE, 43, 59), (0x76F2, 43, 52), (0x76F4, 35, 29), (0x76F8, 32, 73),
    (0x76FB, 65, 28), (0x76FE, 28, 65), (0x7701, 29, 41), (0x7704, 65, 31), (0x7707, 65, 30),
    (0x7708, 65, 29), (0x7709, 39, 92), (0x770B, 19, 38), (0x770C, 23, 8), (0x771B, 65, 37),
    (0x771E, 65, 34), (0x771F, 30, 30), (0x7720, 43, 17), (0x7724, 65, 33), (0x7725, 65, 35),
    (0x7726, 65, 36), (0x7729, 65, 32), (0x7737, 65, 38), (0x7738, 65, 39), (0x773A, 35, 14),
    (0x773C, 19, 66), (0x7740, 34, 68), (0x7747, 65, 40), (0x775A, 65, 41), (0x775B, 65, 44),
    (0x7761, 30, 70), (0x7763, 37, 35), (0x7765, 65, 45), (0x7766, 42, 50), (0x7768, 65, 42),
    (0x776B, 65, 43), (0x7779, 65, 48), (0x777E, 65, 47), (0x777F, 65, 46), (0x778B, 65, 50),
    (0x778E, 65, 49), (0x7791, 65, 51), (0x779E, 65, 53), (0x77A0, 65, 52), (0x77A5, 41, 44),
    (0x77AC, 28, 53), (0x77AD, 45, 37), (0x77B0, 65, 54), (0x77B3, 37, 22), (0x77B6, 65, 55),
    (0x77B9, 65, 56), (0x77BB, 65, 60), (0x77BC, 65, 58), (0x77BD, 65, 59), (0x77BF, 65, 57),
    (0x77C7, 65, 61), (0x77CD, 65, 62), (0x77D7, 65, 63), (0x77DA, 65, 64), (0x77DB, 43, 22),
    (0x77DC, 65, 65), (0x77E2, 43, 79), (0x77E3, 65, 66), (0x77E5, 34, 45), (0x77E7, 38, 73),
    (0x77E9, 21, 74), (0x77ED, 34, 26), (0x77EE, 65, 67), (0x77EF, 21, 25), (0x77F3, 31, 47),
    (0x77FC, 65, 68), (0x7802, 25, 28), (0x780C, 65, 69), (0x7812, 65, 70), (0x7814, 23, 5),
    (0x7815, 25, 52), (0x7820, 65, 72), (0x7825, 36, 53), (0x7826, 25, 53), (0x7827, 20, 45),
    (0x7832, 42, 3), (0x7834, 38, 42), (0x783A, 36, 54), (0x783F, 24, 59), (0x7845, 65, 74),
    (0x785D, 29, 42), (0x786B, 45, 17), (0x786C, 24, 36), (0x786F, 23, 6), (0x7872, 39, 2),
    (0x7874, 65, 76), (0x787C, 65, 78), (0x7881, 23, 74), (0x7886, 65, 77), (0x7887, 35, 85),
    (0x788C, 65, 80), (0x788D, 18, 22), (0x788E, 65, 75), (0x7891, 39, 73), (0x7893, 16, 15),
    (0x7895, 25, 75), (0x7897, 46, 49), (0x789A, 65, 79), (0x78A3, 65, 81), (0x78A7, 41, 42),
    (0x78A9, 31, 56), (0x78AA, 65, 83), (0x78AF, 65, 84), (0x78B5, 65, 82), (0x78BA, 18, 45),
    (0x78BC, 65, 90), (0x78BE, 65, 89), (0x78C1, 27, 6), (0x78C5, 65, 91), (0x78C6, 65, 86),
    (0x78CA, 65, 92), (0x78CB, 65, 87), (0x78D0, 39, 55), (0x78D1, 65, 85), (0x78D4, 65, 88),
    (0x78DA, 66, 1), (0x78E7, 66, 0), (0x78E8, 42, 64), (0x78EC, 65, 93), (0x78EF, 15, 74),
    (0x78F4, 66, 3), (0x78FD, 66, 2), (0x7901, 29, 43), (0x7907, 66, 4), (0x790E, 32, 34),
    (0x7911, 66, 6), (0x7912, 66, 5), (0x7919, 66, 7), (0x7926, 65, 71), (0x792A, 65, 73),
    (0x792B, 66, 9), (0x792C, 66, 8), (0x793A, 27, 7), (0x793C, 45, 72), (0x793E, 27, 49),
    (0x7940, 66, 10), (0x7941, 22, 22), (0x7947, 20, 31), (0x7948, 20, 6), (0x7949, 26, 66),
    (0x7950, 44, 19), (0x7953, 66, 16), (0x7955, 66, 15), (0x7956, 32, 35), (0x7957, 66, 12),
    (0x795A, 66, 14), (0x795D, 28, 42), (0x795E, 30, 31), (0x795F, 66, 13), (0x7960, 66, 11),
    (0x7962, 38, 9), (0x7965, 29, 44), (0x7968, 40, 27), (0x796D, 25, 54), (0x7977, 36, 87),
    (0x797A, 66, 17), (0x797F, 66, 18), (0x7980, 66, 40), (0x7981, 21, 55), (0x7984, 46, 28),
    (0x7985, 32, 20), (0x798A, 66, 19), (0x798D, 17, 49), (0x798E, 35, 86), (0x798F, 41, 0),
    (0x799D, 66, 20), (0x79A6, 20, 89), (0x79A7, 66, 21), (0x79AA, 66, 23), (0x79AE, 66, 24),
    (0x79B0, 38, 8), (0x79B3, 66, 25), (0x79B9, 66, 26), (0x79BA, 66, 27), (0x79BD, 21, 56),
    (0x79BE, 17, 50), (0x79BF, 37, 36), (0x79C0, 28, 7), (0x79C1, 26, 67), (0x79C9, 66, 28),
    (0x79CB, 28, 8), (0x79D1, 17, 41), (0x79D2, 40, 34), (0x79D5, 66, 29), (0x79D8, 39, 74),
    (0x79DF, 32, 36), (0x79E1, 66, 32), (0x79E3, 66, 33), (0x79E4, 38, 72), (0x79E6, 30, 32),
    (0x79E7, 66, 30), (0x79E9, 34, 64), (0x79EC, 66, 31), (0x79F0, 29, 45), (0x79FB, 15, 59),
    (0x7A00, 20, 8), (0x7A08, 66, 34), (0x7A0B, 35, 87), (0x7A0D, 66, 35), (0x7A0E, 31, 38),
    (0x7A14, 43, 12), (0x7A17, 40, 2), (0x7A18, 66, 36), (0x7A19, 66, 37), (0x7A1A, 34, 52),
    (0x7A1C, 45, 38), (0x7A1F, 66, 39), (0x7A20, 66, 38), (0x7A2E, 27, 78), (0x7A31, 66, 41),
    (0x7A32, 15, 79), (0x7A37, 66, 44), (0x7A3B, 66, 42), (0x7A3C, 17, 51), (0x7A3D, 22, 45),
    (0x7A3E, 66, 43), (0x7A3F, 24, 37), (0x7A40, 24, 81), (0x7A42, 41, 69), (0x7A43, 66, 45),
    (0x7A46, 42, 51), (0x7A49, 66, 47), (0x7A4D, 31, 48), (0x7A4E, 16, 46), (0x7A4F, 17, 25),
    (0x7A50, 15, 11), (0x7A57, 66, 46), (0x7A61, 66, 48), (0x7A62, 66, 49), (0x7A63, 29, 86),
    (0x7A69, 66, 50), (0x7A6B, 18, 46), (0x7A70, 66, 52), (0x7A74, 22, 73), (0x7A76, 20, 69),
    (0x7A79, 66, 53), (0x7A7A, 21, 84), (0x7A7D, 66, 54), (0x7A7F, 31, 91), (0x7A81, 37, 44),
    (0x7A83, 31, 63), (0x7A84, 25, 84), (0x7A88, 66, 55), (0x7A92, 34, 65), (0x7A93, 32, 74),
    (0x7A95, 66, 57), (0x7A96, 66, 59), (0x7A97, 66, 56), (0x7A98, 66, 58), (0x7A9F, 22, 1),
    (0x7AA9, 66, 60), (0x7AAA, 22, 5), (0x7AAE, 20, 70), (0x7AAF, 44, 49), (0x7AB0, 66, 62),
    (0x7AB6, 66, 63), (0x7ABA, 16, 13), (0x7ABF, 66, 66), (0x7AC3, 18, 85), (0x7AC4, 66, 65),
    (0x7AC5, 66, 64), (0x7AC7, 66, 68), (0x7AC8, 66, 61), (0x7ACA, 66, 69), (0x7ACB, 45, 8),
    (0x7ACD, 66, 70), (0x7ACF, 66, 71), (0x7AD2, 51, 83), (0x7AD3, 66, 73), (0x7AD5, 66, 72),
    (0x7AD9, 66, 74), (0x7ADA, 66, 75), (0x7ADC, 45, 20), (0x7ADD, 66, 76), (0x7ADF, 79, 78),
    (0x7AE0, 29, 46), (0x7AE1, 66, 77), (0x7AE2, 66, 78), (0x7AE3, 28, 54), (0x7AE5, 37, 23),
    (0x7AE6, 66, 79), (0x7AEA, 34, 7), (0x7AED, 66, 80), (0x7AEF, 34, 27), (0x7AF0, 66, 81),
    (0x7AF6, 21, 4), (0x7AF8, 48, 30), (0x7AF9, 34, 60), (0x7AFA, 27, 18), (0x7AFF, 19, 39),
    (0x7B02, 66, 82), (0x7B04, 67, 1), (0x7B06, 66, 85), (0x7B08, 20, 71), (0x7B0A, 66, 84),
    (0x7B0B, 67, 3), (0x7B0F, 66, 83), (0x7B11, 29, 47), (0x7B18, 66, 87), (0x7B19, 66, 88),
    (0x7B1B, 36, 10), (0x7B1E, 66, 89), (0x7B20, 18, 61), (0x7B25, 30, 57), (0x7B26, 40, 67),
    (0x7B28, 66, 91), (0x7B2C, 33, 71), (0x7B33, 66, 86), (0x7B35, 66, 90), (0x7B36, 66, 92),
    (0x7B39, 25, 90), (0x7B45, 67, 5), (0x7B46, 40, 13), (0x7B48, 39, 5), (0x7B49, 36, 88),
    (0x7B4B, 21, 57), (0x7B4C, 67, 4), (0x7B4D, 67, 2), (0x7B4F, 39, 20), (0x7B50, 66, 93),
    (0x7B51, 34, 61), (0x7B52, 36, 90), (0x7B54, 36, 89), (0x7B56, 25, 85), (0x7B5D, 67, 23),
    (0x7B65, 67, 7), (0x7B67, 67, 9), (0x7B6C, 67, 12), (0x7B6E, 67, 13), (0x7B70, 67, 10),
    (0x7B71, 67, 11), (0x7B74, 67, 8), (0x7B75, 67, 6), (0x7B7A, 67, 0), (0x7B86, 41, 46),
    (0x7B87, 17, 52), (0x7B8B, 67, 20), (0x7B8D, 67, 17), (0x7B8F, 67, 22), (0x7B92, 67, 21),
    (0x7B94, 38, 82), (0x7B95, 43, 6), (0x7B97, 26, 26), (0x7B98, 67, 15), (0x7B99, 67, 24),
    (0x7B9A, 67, 19), (0x7B9C, 67, 18), (0x7B9D, 67, 14), (0x7B9F, 67, 16), (0x7BA1, 19, 40),
    (0x7BAA, 34, 28), (0x7BAD, 31, 92), (0x7BB1, 39, 1), (0x7BB4, 67, 29), (0x7BB8, 39, 3),
    (0x7BC0, 31, 64), (0x7BC1, 67, 26), (0x7BC4, 39, 46), (0x7BC6, 67, 30), (0x7BC7, 41, 50),
    (0x7BC9, 34, 58), (0x7BCB, 67, 25), (0x7BCC, 67, 27), (0x7BCF, 67, 28), (0x7BDD, 67, 31),
    (0x7BE0, 27, 35), (0x7BE4, 37, 37), (0x7BE5, 67, 36), (0x7BE6, 67, 35), (0x7BE9, 67, 32),
    (0x7BED, 46, 21), (0x7BF3, 67, 41), (0x7BF6, 67, 45), (0x7BF7, 67, 42), (0x7C00, 67, 38),
    (0x7C07, 67, 39), (0x7C0D, 67, 44), (0x7C11, 67, 33), (0x7C12, 49, 52), (0x7C13, 67, 40),
    (0x7C14, 67, 34), (0x7C17, 67, 43), (0x7C1F, 67, 49), (0x7C21, 19, 41), (0x7C23, 67, 46),
    (0x7C27, 67, 47), (0x7C2A, 67, 48), (0x7C2B, 67, 51), (0x7C37, 67, 50), (0x7C38, 39, 85),
    (0x7C3D, 67, 52), (0x7C3E, 45, 91), (0x7C3F, 41, 76), (0x7C40, 67, 57), (0x7C43, 67, 54),
    (0x7C4C, 67, 53), (0x7C4D, 31, 49), (0x7C4F, 67, 56), (0x7C50, 67, 58), (0x7C54, 67, 55),
    (0x7C56, 67, 62), (0x7C58, 67, 59), (0x7C5F, 67, 60), (0x7C60, 67, 37), (0x7C64, 67, 61),
    (0x7C65, 67, 63), (0x7C6C, 67, 64), (0x7C73, 41, 37), (0x7C75, 67, 65), (0x7C7E, 43, 65),
    (0x7C81, 21, 45), (0x7C82, 22, 8), (0x7C83, 67, 66), (0x7C89, 41, 19), (0x7C8B, 30, 71),
    (0x7C8D, 43, 15), (0x7C90, 67, 67), (0x7C92, 45, 18), (0x7C95, 38, 83), (0x7C97, 32, 37),
    (0x7C98, 38, 19), (0x7C9B, 28, 44), (0x7C9F, 15, 31), (0x7CA1, 67, 72), (0x7CA2, 67, 70),
    (0x7CA4, 67, 68), (0x7CA5, 19, 0), (0x7CA7, 29, 48), (0x7CA8, 67, 73), (0x7CAB, 67, 71),
    (0x7CAD, 67, 69), (0x7CAE, 67, 77), (0x7CB1, 67, 76), (0x7CB2, 67, 75), (0x7CB3, 67, 74),
    (0x7CB9, 67, 78), (0x7CBD, 67, 79), (0x7CBE, 31, 25), (0x7CC0, 67, 80), (0x7CC2, 67, 82),
    (0x7CC5, 67, 81), (0x7CCA, 23, 49), (0x7CCE, 32, 23), (0x7CD2, 67, 84), (0x7CD6, 36, 91),
    (0x7CD8, 67, 83), (0x7CDC, 67, 85), (0x7CDE, 41, 20), (0x7CDF, 32, 75), (0x7CE0, 24, 38),
    (0x7CE2, 67, 86), (0x7CE7, 45, 39), (0x7CEF, 67, 88), (0x7CF2, 67, 89), (0x7CF4, 67, 90),
    (0x7CF6, 67, 91), (0x7CF8, 26, 68), (0x7CFA, 67, 92), (0x7CFB, 22, 46), (0x7CFE, 20, 73),
    (0x7D00, 20, 9), (0x7D02, 68, 0), (0x7D04, 43, 82), (0x7D05, 24, 39), (0x7D06, 67, 93),
    (0x7D0A, 68, 3), (0x7D0B, 43, 69), (0x7D0D, 38, 27), (0x7D10, 40, 18), (0x7D14, 28, 66),
    (0x7D15, 68, 2), (0x7D17, 27, 50), (0x7D18, 24, 40), (0x7D19, 26, 69), (0x7D1A, 20, 72),
    (0x7D1B, 41, 21), (0x7D1C, 68, 1), (0x7D20, 32, 38), (0x7D21, 42, 33), (0x7D22, 25, 86),
    (0x7D2B, 26, 70), (0x7D2C, 35, 60), (0x7D2E, 68, 6), (0x7D2F, 45, 62), (0x7D30, 25, 56),
    (0x7D32, 68, 7), (0x7D33, 30, 33), (0x7D35, 68, 9), (0x7D39, 29, 49), (0x7D3A, 25, 15),
    (0x7D3F, 68, 8), (0x7D42, 28, 9), (0x7D43, 23, 29), (0x7D44, 32, 39), (0x7D45, 68, 4),
    (0x7D46, 68, 10), (0x7D4B, 68, 5), (0x7D4C, 22, 47), (0x7D4E, 68, 13), (0x7D4F, 68, 17),
    (0x7D50, 22, 74), (0x7D56, 68, 12), (0x7D5B, 68, 21), (0x7D5E, 24, 41), (0x7D61, 44, 76),
    (0x7D62, 15, 27), (0x7D63, 68, 18), (0x7D66, 20, 74), (0x7D68, 68, 15), (0x7D6E, 68, 16),
    (0x7D71, 36, 92), (0x7D72, 68, 14), (0x7D73, 68, 11), (0x7D75, 18, 7), (0x7D76, 31, 67),
    (0x7D79, 23, 7), (0x7D7D, 68, 23), (0x7D89, 68, 20), (0x7D8F, 68, 22), (0x7D93, 68, 19),
    (0x7D99, 22, 48), (0x7D9A, 33, 18), (0x7D9B, 68, 24), (0x7D9C, 32, 77), (0x7D9F, 68, 37),
    (0x7DA2, 68, 33), (0x7DA3, 68, 27), (0x7DAB, 68, 31), (0x7DAC, 27, 89), (0x7DAD, 15, 60),
    (0x7DAE, 68, 26), (0x7DAF, 68, 34), (0x7DB0, 68, 38), (0x7DB1, 24, 42), (0x7DB2, 43, 53),
    (0x7DB4, 35, 53), (0x7DB5, 68, 28), (0x7DB8, 68, 36), (0x7DBA, 68, 25), (0x7DBB, 34, 29),
    (0x7DBD, 68, 30), (0x7DBE, 15, 28), (0x7DBF, 43, 41), (0x7DC7, 68, 29), (0x7DCA, 21, 58),
    (0x7DCB, 39, 75), (0x7DCF, 32, 76), (0x7DD1, 45, 47), (0x7DD2, 28, 78), (0x7DD5, 68, 77),
    (0x7DD8, 68, 39), (0x7DDA, 31, 93), (0x7DDC, 68, 35), (0x7DDD, 68, 40), (0x7DDE, 68, 42),
    (0x7DE0, 35, 88), (0x7DE1, 68, 45), (0x7DE4, 68, 41), (0x7DE8, 41, 51), (0x7DE9, 19, 42),
    (0x7DEC, 43, 42), (0x7DEF, 15, 61), (0x7DF2, 68, 44), (0x7DF4, 45, 92), (0x7DFB, 68, 43),
    (0x7E01, 16, 78), (0x7E04, 37, 75), (0x7E05, 68, 46), (0x7E09, 68, 53), (0x7E0A, 68, 47),
    (0x7E0B, 68, 54), (0x7E12, 68, 50), (0x7E1B, 38, 90), (0x7E1E, 27, 41), (0x7E1F, 68, 52),
    (0x7E21, 68, 49), (0x7E22, 68, 55), (0x7E23, 68, 48), (0x7E26, 28, 35), (0x7E2B, 42, 4),
    (0x7E2E, 28, 43), (0x7E31, 68, 51), (0x7E32, 68, 63), (0x7E35, 68, 59), (0x7E37, 68, 62),
    (0x7E39, 68, 60), (0x7E3A, 68, 64), (0x7E3B, 68, 58), (0x7E3D, 68, 32), (0x7E3E, 31, 50),
    (0x7E41, 39, 42), (0x7E43, 68, 61), (0x7E46, 68, 56), (0x7E4A, 32, 0), (0x7E4B, 22, 49),
    (0x7E4D, 28, 10), (0x7E54, 30, 4), (0x7E55, 32, 21), (0x7E56, 68, 67), (0x7E59, 68, 69),
    (0x7E5A, 68, 70), (0x7E5D, 68, 66), (0x7E5E, 68, 68), (0x7E66, 68, 57), (0x7E67, 68, 65),
    (0x7E69, 68, 73), (0x7E6A, 68, 72), (0x7E6D, 42, 89), (0x7E70, 22, 10), (0x7E79, 68, 71),
    (0x7E7B, 68, 75), (0x7E7C, 68, 74), (0x7E7D, 68, 78), (0x7E7F, 68, 80), (0x7E82, 26, 27),
    (0x7E83, 68, 76), (0x7E88, 68, 81), (0x7E89, 68, 82), (0x7E8C, 68, 83), (0x7E8E, 68, 89),
    (0x7E8F, 36, 26), (0x7E90, 68, 85), (0x7E92, 68, 84), (0x7E93, 68, 86), (0x7E94, 68, 87),
    (0x7E96, 68, 88), (0x7E9B, 68, 90), (0x7E9C, 68, 91), (0x7F36, 19, 43), (0x7F38, 68, 92),
    (0x7F3A, 68, 93), (0x7F45, 69, 0), (0x7F4C, 69, 1), (0x7F4D, 69, 2), (0x7F4E, 69, 3),
    (0x7F50, 69, 4), (0x7F51, 69, 5), (0x7F54, 69, 7), (0x7F55, 69, 6), (0x7F58, 69, 8),
    (0x7F5F, 69, 9), (0x7F60, 69, 10), (0x7F67, 69, 13), (0x7F68, 69, 11), (0x7F69, 69, 12),
    (0x7F6A, 25, 64), (0x7F6B, 22, 50), (0x7F6E, 34, 53), (0x7F70, 39, 18), (0x7F72, 28, 79),
    (0x7F75, 38, 44), (0x7F77, 39, 76), (0x7F78, 69, 14), (0x7F79, 55, 76), (0x7F82, 69, 15),
    (0x7F83, 69, 17), (0x7F85, 44, 68), (0x7F86, 69, 16), (0x7F87, 69, 19), (0x7F88, 69, 18),
    (0x7F8A, 44, 50), (0x7F8C, 69, 20), (0x7F8E, 39, 93), (0x7F94, 69, 21), (0x7F9A, 69, 24),
    (0x7F9D, 69, 23), (0x7F9E, 69, 22), (0x7FA3, 69, 25), (0x7FA4, 22, 17), (0x7FA8, 32, 1),
    (0x7FA9, 20, 32), (0x7FAE, 69, 29), (0x7FAF, 69, 26), (0x7FB2, 69, 27), (0x7FB6, 69, 30),
    (0x7FB8, 69, 31), (0x7FB9, 69, 28), (0x7FBD, 16, 8), (0x7FC1, 17, 6), (0x7FC5, 69, 33),
    (0x7FC6, 69, 34), (0x7FCA, 69, 35), (0x7FCC, 44, 65), (0x7FD2, 28, 11), (0x7FD4, 69, 37),
    (0x7FD5, 69, 36), (0x7FE0, 30, 72), (0x7FE1, 69, 38), (0x7FE6, 69, 39), (0x7FE9, 69, 40),
    (0x7FEB, 19, 68), (0x7FF0, 19, 44), (0x7FF3, 69, 41), (0x7FF9, 69, 42), (0x7FFB, 42, 60),
    (0x7FFC, 44, 66), (0x8000, 44, 51), (0x8001, 46, 22), (0x8003, 24, 44), (0x8004, 69, 45),
    (0x8005, 27, 51), (0x8006, 69, 44), (0x800B, 69, 46), (0x800C, 27, 8), (0x8010, 33, 48),
    (0x8012, 69, 47), (0x8015, 24, 43), (0x8017, 43, 54), (0x8018, 69, 48), (0x8019, 69, 49),
    (0x801C, 69, 50), (0x8021, 69, 51), (0x8028, 69, 52), (0x8033, 27, 9), (0x8036, 43, 76),
    (0x803B, 69, 54), (0x803D, 34, 30), (0x803F, 69, 53), (0x8046, 69, 56), (0x804A, 69, 55),
    (0x8052, 69, 57), (0x8056, 31, 26), (0x8058, 69, 58), (0x805A, 69, 59), (0x805E, 41, 24),
    (0x805F, 69, 60), (0x8061, 32, 78), (0x8062, 69, 61), (0x8068, 69, 62), (0x806F, 45, 93),
    (0x8070, 69, 65), (0x8072, 69, 64), (0x8073, 69, 63), (0x8074, 35, 15), (0x8076, 69, 66),
    (0x8077, 30, 5), (0x8079, 69, 67), (0x807D, 69, 68), (0x807E, 46, 23), (0x807F, 69, 69),
    (0x8084, 69, 70), (0x8085, 69, 72), (0x8086, 69, 71), (0x8087, 39, 4), (0x8089, 37, 88),
    (0x808B, 46, 29), (0x808C, 39, 8), (0x8093, 69, 74), (0x8096, 29, 50), (0x8098, 40, 9),
    (0x809A, 69, 75), (0x809B, 69, 73), (0x809D, 19, 45), (0x80A1, 23, 51), (0x80A2, 26, 71),
    (0x80A5, 39, 77), (0x80A9, 23, 9), (0x80AA, 42, 34), (0x80AC, 69, 78), (0x80AD, 69, 76),
    (0x80AF, 24, 45), (0x80B1, 24, 46), (0x80B2, 15, 72), (0x80B4, 25, 71), (0x80BA, 38, 56),
    (0x80C3, 15, 62), (0x80C4, 69, 83), (0x80C6, 34, 31), (0x80CC, 38, 55), (0x80CE, 33, 58),
    (0x80D6, 69, 85), (0x80D9, 69, 81), (0x80DA, 69, 84), (0x80DB, 69, 79), (0x80DD, 69, 82),
    (0x80DE, 42, 5), (0x80E1, 23, 52), (0x80E4, 15, 92), (0x80E5, 69, 80), (0x80EF, 69, 87),
    (0x80F1, 69, 88), (0x80F4, 37, 24), (0x80F8, 21, 26), (0x80FC, 70, 5), (0x80FD, 38, 28),
    (0x8102, 26, 72), (0x8105, 21, 27), (0x8106, 31, 39), (0x8107, 46, 37), (0x8108, 43, 13),
    (0x8109, 69, 86), (0x810A, 31, 51), (0x811A, 20, 50), (0x811B, 69, 89), (0x8123, 69, 91),
    (0x8129, 69, 90), (0x812F, 69, 92), (0x8131, 34, 5), (0x8133, 38, 29), (0x8139, 35, 16),
    (0x813E, 70, 2), (0x8146, 70, 1), (0x814B, 69, 93), (0x814E, 30, 52), (0x8150, 40, 68),
    (0x8151, 70, 4), (0x8153, 70, 3), (0x8154, 24, 47), (0x8155, 46, 50), (0x815F, 70, 20),
    (0x8165, 70, 8), (0x8166, 70, 9), (0x816B, 27, 79), (0x816E, 70, 7), (0x8170, 24, 87),
    (0x8171, 70, 6), (0x8174, 70, 10), (0x8178, 35, 17), (0x8179, 41, 1), (0x817A, 32, 2),
    (0x817F, 33, 59), (0x8180, 70, 14), (0x8182, 70, 15), (0x8183, 70, 11), (0x8188, 70, 12),
    (0x818A, 70, 13), (0x818F, 24, 48), (0x8193, 70, 21), (0x8195, 70, 17), (0x819A, 40, 69),
    (0x819C, 42, 75), (0x819D, 40, 7), (0x81A0, 70, 16), (0x81A3, 70, 19), (0x81A4, 70, 18),
    (0x81A8, 42, 35), (0x81A9, 70, 22), (0x81B0, 70, 23), (0x81B3, 32, 22), (0x81B5, 70, 24),
    (0x81B8, 70, 26), (0x81BA, 70, 30), (0x81BD, 70, 27), (0x81BE, 70, 25), (0x81BF, 38, 30),
    (0x81C0, 70, 28), (0x81C2, 70, 29), (0x81C6, 17, 17), (0x81C8, 70, 36), (0x81C9, 70, 31),
    (0x81CD, 70, 32), (0x81D1, 70, 33), (0x81D3, 33, 0), (0x81D8, 70, 35), (0x81D9, 70, 34),
    (0x81DA, 70, 37), (0x81DF, 70, 38), (0x81E0, 70, 39), (0x81E3, 30, 34), (0x81E5, 17, 72),
    (0x81E7, 70, 40), (0x81E8, 45, 54), (0x81EA, 27, 10), (0x81ED, 28, 12), (0x81F3, 26, 73),
    (0x81F4, 34, 54), (0x81FA, 70, 41), (0x81FB, 70, 42), (0x81FC, 16, 16), (0x81FE, 70, 43),
    (0x8201, 70, 44), (0x8202, 70, 45), (0x8205, 70, 46), (0x8207, 70, 47), (0x8208, 21, 28),
    (0x8209, 57, 9), (0x820A, 70, 48), (0x820C, 31, 68), (0x820D, 70, 49), (0x820E, 27, 42),
    (0x8210, 70, 50), (0x8212, 47, 15), (0x8216, 70, 51), (0x8217, 41, 61), (0x8218, 19, 59),
    (0x821B, 32, 3), (0x821C, 28, 55), (0x821E, 40, 80), (0x821F, 28, 13), (0x8229, 70, 52),
    (0x822A, 24, 49), (0x822B, 70, 53), (0x822C, 39, 43), (0x822E, 70, 67), (0x8233, 70, 55),
    (0x8235, 33, 40), (0x8236, 38, 84), (0x8237, 23, 30), (0x8238, 70, 54), (0x8239, 32, 4),
    (0x8240, 70, 56), (0x8247, 35, 89), (0x8258, 70, 58), (0x8259, 70, 57), (0x825A, 70, 60),
    (0x825D, 70, 59), (0x825F, 70, 61), (0x8262, 70, 63), (0x8264, 70, 62), (0x8266, 19, 46),
    (0x8268, 70, 64), (0x826A, 70, 65), (0x826B, 70, 66), (0x826E, 25, 16), (0x826F, 45, 40),
    (0x8271, 70, 68), (0x8272, 30, 6), (0x8276, 16, 79), (0x8277, 70, 69), (0x8278, 70, 70),
    (0x827E, 70, 71), (0x828B, 15, 81), (0x828D, 70, 72), (0x8292, 70, 73), (0x8299, 40, 70),
    (0x829D, 27, 38), (0x829F, 70, 75), (0x82A5, 18, 8), (0x82A6, 15, 17), (0x82AB, 70, 74),
    (0x82AC, 70, 77), (0x82AD, 38, 45), (0x82AF, 30, 35), (0x82B1, 17, 53), (0x82B3, 42, 6),
    (0x82B8, 22, 60), (0x82B9, 21, 59), (0x82BB, 70, 76), (0x82BD, 17, 73), (0x82C5, 19, 2),
    (0x82D1, 16, 80), (0x82D2, 70, 81), (0x82D3, 45, 73), (0x82D4, 33, 60), (0x82D7, 40, 35),
    (0x82D9, 70, 93), (0x82DB, 17, 54), (0x82DC, 70, 91), (0x82DE, 70, 89), (0x82DF, 70, 80),
    (0x82E1, 70, 78), (0x82E3, 70, 79), (0x82E5, 27, 66), (0x82E6, 21, 75), (0x82E7, 34, 86),
    (0x82EB, 37, 48), (0x82F1, 16, 48), (0x82F3, 70, 83), (0x82F4, 70, 82), (0x82F9, 70, 88),
    (0x82FA, 70, 84), (0x82FB, 70, 87), (0x8302, 43, 47), (0x8303, 70, 86), (0x8304, 17, 55),
    (0x8305, 18, 92), (0x8306, 70, 90), (0x8309, 70, 92), (0x830E, 22, 51), (0x8316, 71, 2),
    (0x8317, 71, 11), (0x8318, 71, 12), (0x831C, 15, 10), (0x8323, 71, 19), (0x8328, 15, 80),
    (0x832B, 71, 10), (0x832F, 71, 9), (0x8331, 71, 4), (0x8332, 71, 3), (0x8334, 71, 1),
    (0x8335, 71, 0), (0x8336, 34, 66), (0x8338, 33, 90), (0x8339, 71, 6), (0x8340, 71, 5),
    (0x8345, 71, 8), (0x8349, 32, 79), (0x834A, 22, 52), (0x834F, 16, 32), (0x8350, 71, 7),
    (0x8352, 24, 50), (0x8358, 32, 80), (0x8373, 71, 25), (0x8375, 71, 26), (0x8377, 17, 56),
    (0x837B, 17, 13), (0x837C, 71, 23), (0x8385, 71, 13), (0x8387, 71, 21), (0x8389, 71, 28),
    (0x838A, 71, 22), (0x838E, 71, 20), (0x8393, 70, 85), (0x8396, 71, 18), (0x839A, 71, 14),
    (0x839E, 19, 47), (0x839F, 71, 16), (0x83A0, 71, 27), (0x83A2, 71, 17), (0x83A8, 71, 29),
    (0x83AA, 71, 15), (0x83AB, 38, 91), (0x83B1, 44, 72), (0x83B5, 71, 24), (0x83BD, 71, 46),
    (0x83C1, 71, 38), (0x83C5, 30, 90), (0x83CA, 20, 37), (0x83CC, 21, 60), (0x83CE, 71, 33),
    (0x83D3, 17, 58), (0x83D6, 29, 51), (0x83D8, 71, 36), (0x83DC, 25, 57), (0x83DF, 36, 48),
    (0x83E0, 71, 41), (0x83E9, 41, 77), (0x83EB, 71, 32), (0x83EF, 17, 57), (0x83F0, 23, 53),
    (0x83F1, 40, 8), (0x83F2, 71, 42), (0x83F4, 71, 30), (0x83F7, 71, 39), (0x83FB, 71, 49),
    (0x83FD, 71, 34), (0x8403, 71, 35), (0x8404, 37, 25), (0x8407, 71, 40), (0x840B, 71, 37),
    (0x840C, 42, 7), (0x840D, 71, 43), (0x840E, 15, 63), (0x8413, 71, 31), (0x8420, 71, 45),
    (0x8422, 71, 44), (0x8429, 38, 74), (0x842A, 71, 51), (0x842C, 71, 62), (0x8431, 18, 93),
    (0x8435, 71, 65), (0x8438, 71, 47), (0x843C, 71, 52), (0x843D, 44, 77), (0x8446, 71, 61),
    (0x8449, 44, 52), (0x844E, 45, 9), (0x8457, 34, 87), (0x845B, 18, 74), (0x8461, 40, 81),
    (0x8462, 71, 67), (0x8463, 37, 0), (0x8466, 15, 16), (0x8469, 71, 60), (0x846B, 71, 56),
    (0x846C, 32, 81), (0x846D, 71, 50), (0x846E, 71, 58), (0x846F, 71, 63), (0x8471, 38, 11),
    (0x8475, 15, 9), (0x8477, 71, 55), (0x8479, 71, 64), (0x847A, 40, 87), (0x8482, 71, 59),
    (0x8484, 71, 54), (0x848B, 29, 52), (0x8490, 28, 14), (0x8494, 27, 11), (0x8499, 43, 55),
    (0x849C, 40, 38), (0x849F, 71, 70), (0x84A1, 71, 79), (0x84AD, 71, 57), (0x84B2, 18, 86),
    (0x84B8, 29, 87), (0x84B9, 71, 68), (0x84BB, 71, 73), (0x84BC, 32, 82), (0x84BF, 71, 69),
    (0x84C1, 71, 76), (0x84C4, 34, 62), (0x84C6, 71, 77), (0x84C9, 44, 53), (0x84CA, 71, 66),
    (0x84CB, 18, 23), (0x84CD, 71, 72), (0x84D0, 71, 75), (0x84D1, 43, 11), (0x84D6, 71, 78),
    (0x84D9, 71, 71), (0x84DA, 71, 74), (0x84EC, 42, 8), (0x84EE, 46, 0), (0x84F4, 71, 82),
    (0x84FC, 71, 89), (0x84FF, 71, 81), (0x8500, 27, 34), (0x8506, 71, 48), (0x8511, 41, 45),
    (0x8513, 43, 1), (0x8514, 71, 88), (0x8515, 71, 87), (0x8517, 71, 83), (0x8518, 71, 84),
    (0x851A, 16, 21), (0x851F, 71, 86), (0x8521, 71, 80), (0x8526, 35, 52), (0x852C, 71, 85),
    (0x852D, 15, 93), (0x8535, 33, 1), (0x853D, 41, 34), (0x8540, 71, 90), (0x8541, 72, 0),
    (0x8543, 39, 56), (0x8548, 71, 93), (0x8549, 29, 53), (0x854A, 27, 40), (0x854B, 72, 2),
    (0x854E, 21, 29), (0x8555, 72, 3), (0x8557, 40, 88), (0x8558, 71, 92), (0x855A, 71, 53),
    (0x8563, 71, 91), (0x8568, 46, 46), (0x8569, 37, 1), (0x856A, 40, 82), (0x856D, 72, 10),
    (0x8577, 72, 16), (0x857E, 72, 17), (0x8580, 72, 4), (0x8584, 38, 85), (0x8587, 72, 14),
    (0x8588, 72, 6), (0x858A, 72, 8), (0x8590, 72, 18), (0x8591, 72, 7), (0x8594, 72, 11),
    (0x8597, 16, 81), (0x8599, 37, 68), (0x859B, 72, 12), (0x859C, 72, 15), (0x85A4, 72, 5),
    (0x85A6, 32, 5), (0x85A8, 72, 9), (0x85A9, 26, 6), (0x85AA, 30, 36), (0x85AB, 22, 15),
    (0x85AC, 43, 83), (0x85AE, 43, 88), (0x85AF, 28, 81), (0x85B9, 72, 22), (0x85BA, 72, 20),
    (0x85C1, 46, 45), (0x85C9, 72, 19), (0x85CD, 44, 84), (0x85CF, 72, 21), (0x85D0, 72, 23),
    (0x85D5, 72, 24), (0x85DC, 72, 27), (0x85DD, 72, 25), (0x85E4, 37, 2), (0x85E5, 72, 26),
    (0x85E9, 39, 44), (0x85EA, 72, 13), (0x85F7, 28, 82), (0x85F9, 72, 28), (0x85FA, 72, 33),
    (0x85FB, 32, 83), (0x85FE, 72, 32), (0x8602, 72, 1), (0x8606, 72, 34), (0x8607, 32, 40),
    (0x860A, 72, 29), (0x860B, 72, 31), (0x8613, 72, 30), (0x8616, 60, 16), (0x8617, 60, 1),
    (0x861A, 72, 36), (0x8622, 72, 35), (0x862D, 44, 85), (0x862F, 65, 27), (0x8630, 72, 37),
    (0x863F, 72, 38), (0x864D, 72, 39), (0x864E, 23, 54), (0x8650, 20, 51), (0x8654, 72, 41),
    (0x8655, 48, 60), (0x865A, 20, 84), (0x865C, 45, 25), (0x865E, 21, 82), (0x865F, 72, 42),
    (0x8667, 72, 43), (0x866B, 34, 77), (0x8671, 72, 44), (0x8679, 37, 89), (0x867B, 15, 25),
    (0x868A, 17, 66), (0x868B, 72, 49), (0x868C, 72, 50), (0x8693, 72, 45), (0x8695, 26, 28),
    (0x86A3, 72, 46), (0x86A4, 38, 33), (0x86A9, 72, 47), (0x86AA, 72, 48), (0x86AB, 72, 58),
    (0x86AF, 72, 52), (0x86B0, 72, 55), (0x86B6, 72, 51), (0x86C4, 72, 53), (0x86C6, 72, 54),
    (0x86C7, 27, 55), (0x86C9, 72, 56), (0x86CB, 34, 32), (0x86CD, 22, 53), (0x86CE, 18, 33),
    (0x86D4, 72, 59), (0x86D9, 18, 30), (0x86DB, 72, 64), (0x86DE, 72, 60), (0x86DF, 72, 63),
    (0x86E4, 39, 25), (0x86E9, 72, 61), (0x86EC, 72, 62), (0x86ED, 40, 39), (0x86EE, 39, 57),
    (0x86EF, 72, 65), (0x86F8, 33, 92), (0x86F9, 72, 75), (0x86FB, 72, 71), (0x86FE, 17, 74),
    (0x8700, 72, 69), (0x8702, 42, 9), (0x8703, 72, 70), (0x8706, 72, 67), (0x8708, 72, 68),
    (0x8709, 72, 73), (0x870A, 72, 76), (0x870D, 72, 74), (0x8711, 72, 72), (0x8712, 72, 66),
    (0x8718, 34, 55), (0x871A, 72, 83), (0x871C, 43, 9), (0x8725, 72, 81), (0x8729, 72, 82),
    (0x8734, 72, 77), (0x8737, 72, 79), (0x873B, 72, 80), (0x873F, 72, 78), (0x8749, 31, 69),
    (0x874B, 46, 24), (0x874C, 72, 87), (0x874E, 72, 88), (0x8753, 73, 0), (0x8755, 30, 9),
    (0x8757, 72, 90), (0x8759, 72, 93), (0x875F, 72, 85), (0x8760, 72, 84), (0x8763, 73, 1),
    (0x8766, 17, 59), (0x8768, 72, 91), (0x876A, 73, 2), (0x876E, 72, 92), (0x8774, 72, 89),
    (0x8776, 35, 18), (0x8778, 72, 86), (0x877F, 38, 71), (0x8782, 73, 6), (0x878D, 44, 26),
    (0x879F, 73, 5), (0x87A2, 73, 4), (0x87AB, 73, 13), (0x87AF, 73, 7), (0x87B3, 73, 15),
    (0x87BA, 44, 69), (0x87BB, 73, 18), (0x87BD, 73, 9), (0x87C0, 73, 10), (0x87C4, 73, 14),
    (0x87C6, 73, 17), (0x87C7, 73, 16), (0x87CB, 73, 8), (0x87D0, 73, 11), (0x87D2, 73, 28),
    (0x87E0, 73, 21), (0x87EF, 73, 19), (0x87F2, 73, 20), (0x87F6, 73, 25), (0x87F7, 73, 26),
    (0x87F9, 18, 9), (0x87FB, 20, 33), (0x87FE, 73, 24), (0x8805, 73, 3), (0x880D, 73, 23),
    (0x880E, 73, 27), (0x880F, 73, 22), (0x8811, 73, 29), (0x8815, 73, 31), (0x8816, 73, 30),
    (0x8821, 73, 33), (0x8822, 73, 32), (0x8823, 72, 57), (0x8827, 73, 37), (0x8831, 73, 34),
    (0x8836, 73, 35), (0x8839, 73, 36), (0x883B, 73, 38), (0x8840, 22, 75), (0x8842, 73, 40),
    (0x8844, 73, 39), (0x8846, 28, 15), (0x884C, 24, 51), (0x884D, 61, 6), (0x8852, 73, 41),
    (0x8853, 28, 48), (0x8857, 18, 24), (0x8859, 73, 42), (0x885B, 16, 49), (0x885D, 29, 54),
    (0x885E, 73, 43), (0x8861, 24, 52), (0x8862, 73, 44), (0x8863, 15, 64), (0x8868, 40, 28),
    (0x886B, 73, 45), (0x8870, 30, 73), (0x8872, 73, 52), (0x8875, 73, 49), (0x8877, 34, 78),
    (0x887D, 73, 50), (0x887E, 73, 47), (0x887F, 21, 61), (0x8881, 73, 46), (0x8882, 73, 53),
    (0x8888, 22, 21), (0x888B, 33, 61), (0x888D, 73, 59), (0x8892, 73, 55), (0x8896, 33, 20),
    (0x8897, 73, 54), (0x8899, 73, 57), (0x889E, 73, 48), (0x88A2, 73, 58), (0x88A4, 73, 60),
    (0x88AB, 39, 78), (0x88AE, 73, 56), (0x88B0, 73, 61), (0x88B1, 73, 63), (0x88B4, 23, 50),
    (0x88B5, 73, 51), (0x88B7, 15, 32), (0x88BF, 73, 62), (0x88C1, 25, 58), (0x88C2, 45, 85),
    (0x88C3, 73, 64), (0x88C4, 73, 65), (0x88C5, 32, 84), (0x88CF, 45, 1), (0x88D4, 73, 66),
    (0x88D5, 44, 20), (0x88D8, 73, 67), (0x88D9, 73, 68), (0x88DC, 41, 67), (0x88DD, 73, 69),
    (0x88DF, 25, 31), (0x88E1, 45, 2), (0x88E8, 73, 74), (0x88F2, 73, 75), (0x88F3, 29, 55),
    (0x88F4, 73, 73), (0x88F8, 44, 70), (0x88F9, 73, 70), (0x88FC, 73, 72), (0x88FD, 31, 28),
    (0x88FE, 30, 93), (0x8902, 73, 71), (0x8904, 73, 76), (0x8907, 41, 2), (0x890A, 73, 78),
    (0x890C, 73, 77), (0x8910, 18, 75), (0x8912, 42, 10), (0x8913, 73, 79), (0x891D, 73, 91),
    (0x891E, 73, 81), (0x8925, 73, 82), (0x892A, 73, 83), (0x892B, 73, 84), (0x8936, 73, 88),
    (0x8938, 73, 89), (0x893B, 73, 87), (0x8941, 73, 85), (0x8943, 73, 80), (0x8944, 73, 86),
    (0x894C, 73, 90), (0x894D, 79, 22), (0x8956, 17, 7), (0x895E, 73, 93), (0x895F, 21, 62),
    (0x8960, 73, 92), (0x8964, 74, 1), (0x8966, 74, 0), (0x896A, 74, 3), (0x896D, 74, 2),
    (0x896F, 74, 4), (0x8972, 28, 16), (0x8974, 74, 5), (0x8977, 74, 6), (0x897E, 74, 7),
    (0x897F, 31, 29), (0x8981, 44, 54), (0x8983, 74, 8), (0x8986, 41, 3), (0x8987, 38, 37),
    (0x8988, 74, 9), (0x898A, 74, 10), (0x898B, 23, 10), (0x898F, 20, 11), (0x8993, 74, 11),
    (0x8996, 26, 74), (0x8997, 38, 32), (0x8998, 74, 12), (0x899A, 18, 47), (0x89A1, 74, 13),
    (0x89A6, 74, 15), (0x89A7, 44, 86), (0x89A9, 74, 14), (0x89AA, 30, 37), (0x89AC, 74, 16),
    (0x89AF, 74, 17), (0x89B2, 74, 18), (0x89B3, 19, 48), (0x89BA, 74, 19), (0x89BD, 74, 20),
    (0x89BF, 74, 21), (0x89C0, 74, 22), (0x89D2, 18, 48), (0x89DA, 74, 23), (0x89DC, 74, 24),
    (0x89DD, 74, 25), (0x89E3, 17, 81), (0x89E6, 30, 7), (0x89E7, 74, 26), (0x89F4, 74, 27),
    (0x89F8, 74, 28), (0x8A00, 23, 31), (0x8A02, 35, 90), (0x8A03, 74, 29), (0x8A08, 22, 54),
    (0x8A0A, 30, 53), (0x8A0C, 74, 32), (0x8A0E, 37, 3), (0x8A10, 74, 31), (0x8A13, 22, 16),
    (0x8A16, 74, 30), (0x8A17, 33, 86), (0x8A18, 20, 12), (0x8A1B, 74, 33), (0x8A1D, 74, 34),
    (0x8A1F, 29, 56), (0x8A23, 22, 76), (0x8A25, 74, 35), (0x8A2A, 42, 11), (0x8A2D, 31, 62),
    (0x8A31, 20, 85), (0x8A33, 43, 84), (0x8A34, 32, 41), (0x8A36, 74, 36), (0x8A3A, 30, 38),
    (0x8A3B, 34, 79), (0x8A3C, 29, 57), (0x8A41, 74, 37), (0x8A46, 74, 40), (0x8A48, 74, 41),
    (0x8A50, 25, 29), (0x8A51, 33, 33), (0x8A52, 74, 39), (0x8A54, 29, 58), (0x8A55, 40, 29),
    (0x8A5B, 74, 38), (0x8A5E, 26, 75), (0x8A60, 16, 50), (0x8A62, 74, 45), (0x8A63, 22, 55),
    (0x8A66, 26, 77), (0x8A69, 26, 76), (0x8A6B, 46, 44), (0x8A6C, 74, 44), (0x8A6D, 74, 43),
    (0x8A6E, 32, 6), (0x8A70, 20, 44), (0x8A71, 46, 34), (0x8A72, 18, 25), (0x8A73, 29, 59),
    (0x8A7C, 74, 42), (0x8A82, 74, 47), (0x8A84, 74, 48), (0x8A85, 74, 46), (0x8A87, 23, 55),
    (0x8A89, 44, 31), (0x8A8C, 26, 78), (0x8A8D, 38, 6), (0x8A91, 74, 51), (0x8A93, 31, 31),
    (0x8A95, 34, 33), (0x8A98, 44, 21), (0x8A9A, 74, 54), (0x8A9E, 23, 75), (0x8AA0, 31, 30),
    (0x8AA1, 74, 50), (0x8AA3, 74, 55), (0x8AA4, 23, 76), (0x8AA5, 74, 52), (0x8AA6, 74, 53),
    (0x8AA8, 74, 49), (0x8AAC, 31, 65), (0x8AAD, 37, 40), (0x8AB0, 34, 14), (0x8AB2, 17, 60),
    (0x8AB9, 39, 79), (0x8ABC, 20, 34), (0x8ABF, 35, 19), (0x8AC2, 74, 58), (0x8AC4, 74, 56),
    (0x8AC7, 34, 43), (0x8ACB, 31, 32), (0x8ACC, 19, 49), (0x8ACD, 74, 57), (0x8ACF, 30, 58),
    (0x8AD2, 45, 41), (0x8AD6, 46, 31), (0x8ADA, 74, 59), (0x8ADB, 74, 70), (0x8ADC, 35, 20),
    (0x8ADE, 74, 69), (0x8AE0, 74, 66), (0x8AE1, 74, 74), (0x8AE2, 74, 67), (0x8AE4, 74, 63),
    (0x8AE6, 35, 91), (0x8AE7, 74, 62), (0x8AEB, 74, 60), (0x8AED, 44, 0), (0x8AEE, 26, 79),
    (0x8AF1, 74, 64), (0x8AF3, 74, 61), (0x8AF7, 74, 68), (0x8AF8, 28, 83), (0x8AFA, 23, 32),
    (0x8AFE, 33, 89), (0x8B00, 42, 36), (0x8B01, 16, 57), (0x8B02, 15, 65), (0x8B04, 37, 4),
    (0x8B07, 74, 72), (0x8B0C, 74, 71), (0x8B0E, 37, 69), (0x8B10, 74, 76), (0x8B14, 74, 65),
    (0x8B16, 74, 75), (0x8B17, 74, 77), (0x8B19, 23, 11), (0x8B1A, 74, 73), (0x8B1B, 24, 53),
    (0x8B1D, 27, 52), (0x8B20, 74, 78), (0x8B21, 44, 55), (0x8B26, 74, 81), (0x8B28, 74, 84),
    (0x8B2B, 74, 82), (0x8B2C, 40, 20), (0x8B33, 74, 79), (0x8B39, 21, 63), (0x8B3E, 74, 83),
    (0x8B41, 74, 85), (0x8B49, 74, 89), (0x8B4C, 74, 86), (0x8B4E, 74, 88), (0x8B4F, 74, 87),
    (0x8B56, 74, 90), (0x8B58, 27, 16), (0x8B5A, 74, 92), (0x8B5B, 74, 91), (0x8B5C, 40, 71),
    (0x8B5F, 75, 0), (0x8B66, 22, 56), (0x8B6B, 74, 93), (0x8B6C, 75, 1), (0x8B6F, 75, 2),
    (0x8B70, 20, 35), (0x8B71, 69, 32), (0x8B72, 29, 88), (0x8B74, 75, 3), (0x8B77, 23, 77),
    (0x8B7D, 75, 4), (0x8B80, 75, 5), (0x8B83, 26, 29), (0x8B8A, 57, 45), (0x8B8C, 75, 6),
    (0x8B8E, 75, 7), (0x8B90, 28, 17), (0x8B92, 75, 8), (0x8B93, 75, 9), (0x8B96, 75, 10),
    (0x8B99, 75, 11), (0x8B9A, 75, 12), (0x8C37, 34, 10), (0x8C3A, 75, 13), (0x8C3F, 75, 15),
    (0x8C41, 75, 14), (0x8C46, 37, 5), (0x8C48, 75, 16), (0x8C4A, 42, 12), (0x8C4C, 75, 17),
    (0x8C4E, 75, 18), (0x8C50, 75, 19), (0x8C55, 75, 20), (0x8C5A, 37, 57), (0x8C61, 29, 60),
    (0x8C62, 75, 21), (0x8C6A, 24, 74), (0x8C6B, 47, 13), (0x8C6C, 75, 22), (0x8C78, 75, 23),
    (0x8C79, 40, 30), (0x8C7A, 75, 24), (0x8C7C, 75, 32), (0x8C82, 75, 25), (0x8C85, 75, 27),
    (0x8C89, 75, 26), (0x8C8A, 75, 28), (0x8C8C, 42, 37), (0x8C8D, 75, 29), (0x8C8E, 75, 30),
    (0x8C94, 75, 31), (0x8C98, 75, 33), (0x8C9D, 18, 12), (0x8C9E, 35, 70), (0x8CA0, 40, 72),
    (0x8CA1, 25, 65), (0x8CA2, 24, 54), (0x8CA7, 40, 46), (0x8CA8, 17, 62), (0x8CA9, 39, 45),
    (0x8CAA, 75, 36), (0x8CAB, 19, 50), (0x8CAC, 31, 52), (0x8CAD, 75, 35), (0x8CAE, 75, 40),
    (0x8CAF, 34, 88), (0x8CB0, 43, 66), (0x8CB2, 75, 38), (0x8CB3, 75, 39), (0x8CB4, 20, 13),
    (0x8CB6, 75, 41), (0x8CB7, 38, 66), (0x8CB8, 33, 62), (0x8CBB, 39, 80), (0x8CBC, 36, 28),
    (0x8CBD, 75, 37), (0x8CBF, 42, 38), (0x8CC0, 17, 75), (0x8CC1, 75, 43), (0x8CC2, 46, 7),
    (0x8CC3, 35, 33), (0x8CC4, 46, 36), (0x8CC7, 26, 80), (0x8CC8, 75, 42), (0x8CCA, 33, 16),
    (0x8CCD, 75, 59), (0x8CCE, 32, 7), (0x8CD1, 37, 87), (0x8CD3, 40, 47), (0x8CDA, 75, 46),
    (0x8CDB, 26, 30), (0x8CDC, 26, 81), (0x8CDE, 29, 61), (0x8CE0, 38, 68), (0x8CE2, 23, 12),
    (0x8CE3, 75, 45), (0x8CE4, 75, 44), (0x8CE6, 40, 73), (0x8CEA, 27, 32), (0x8CED, 36, 49),
    (0x8CFA, 75, 48), (0x8CFB, 75, 49), (0x8CFC, 24, 55), (0x8CFD, 75, 47), (0x8D04, 75, 50),
    (0x8D05, 75, 51), (0x8D07, 75, 53), (0x8D08, 33, 2), (0x8D0A, 75, 52), (0x8D0B, 19, 69),
    (0x8D0D, 75, 55), (0x8D0F, 75, 54), (0x8D10, 75, 56), (0x8D13, 75, 58), (0x8D14, 75, 60),
    (0x8D16, 75, 61), (0x8D64, 31, 53), (0x8D66, 27, 46), (0x8D67, 75, 62), (0x8D6B, 18, 49),
    (0x8D6D, 75, 63), (0x8D70, 32, 85), (0x8D71, 75, 64), (0x8D73, 75, 65), (0x8D74, 40, 74),
    (0x8D77, 20, 14), (0x8D81, 75, 66), (0x8D85, 35, 21), (0x8D8A, 16, 58), (0x8D99, 75, 67),
    (0x8DA3, 27, 80), (0x8DA8, 30, 85), (0x8DB3, 33, 12), (0x8DBA, 75, 70), (0x8DBE, 75, 69),
    (0x8DC2, 75, 68), (0x8DCB, 75, 76), (0x8DCC, 75, 74), (0x8DCF, 75, 71), (0x8DD6, 75, 73),
    (0x8DDA, 75, 72), (0x8DDB, 75, 75), (0x8DDD, 20, 86), (0x8DDF, 75, 79), (0x8DE1, 31, 54),
    (0x8DE3, 75, 80), (0x8DE8, 23, 56), (0x8DEA, 75, 77), (0x8DEB, 75, 78), (0x8DEF, 46, 8),
    (0x8DF3, 35, 22), (0x8DF5, 32, 8), (0x8DFC, 75, 81), (0x8DFF, 75, 84), (0x8E08, 75, 82),
    (0x8E09, 75, 83), (0x8E0A, 44, 56), (0x8E0F, 37, 6), (0x8E10, 75, 87), (0x8E1D, 75, 85),
    (0x8E1E, 75, 86), (0x8E1F, 75, 88), (0x8E2A, 76, 8), (0x8E30, 75, 91), (0x8E34, 75, 92),
    (0x8E35, 75, 90), (0x8E42, 75, 89), (0x8E44, 35, 92), (0x8E47, 76, 0), (0x8E48, 76, 4),
    (0x8E49, 76, 1), (0x8E4A, 75, 93), (0x8E4C, 76, 2), (0x8E50, 76, 3), (0x8E55, 76, 10),
    (0x8E59, 76, 5), (0x8E5F, 31, 55), (0x8E60, 76, 7), (0x8E63, 76, 9), (0x8E64, 76, 6),
    (0x8E72, 76, 12), (0x8E74, 28, 18), (0x8E76, 76, 11), (0x8E7C, 76, 13), (0x8E81, 76, 14),
    (0x8E84, 76, 17), (0x8E85, 76, 16), (0x8E87, 76, 15), (0x8E8A, 76, 19), (0x8E8B, 76, 18),
    (0x8E8D, 43, 85), (0x8E91, 76, 21), (0x8E93, 76, 20), (0x8E94, 76, 22), (0x8E99, 76, 23),
    (0x8EA1, 76, 25), (0x8EAA, 76, 24), (0x8EAB, 30, 39), (0x8EAC, 76, 26), (0x8EAF, 21, 76),
    (0x8EB0, 76, 27), (0x8EB1, 76, 29), (0x8EBE, 76, 30), (0x8EC5, 76, 31), (0x8EC6, 76, 28),
    (0x8EC8, 76, 32), (0x8ECA, 27, 53), (0x8ECB, 76, 33), (0x8ECC, 20, 15), (0x8ECD, 22, 18),
    (0x8ED2, 23, 13), (0x8EDB, 76, 34), (0x8EDF, 37, 79), (0x8EE2, 36, 29), (0x8EE3, 76, 35),
    (0x8EEB, 76, 38), (0x8EF8, 27, 19), (0x8EFB, 76, 37), (0x8EFC, 76, 36), (0x8EFD, 22, 57),
    (0x8EFE, 76, 39), (0x8F03, 18, 50), (0x8F05, 76, 41), (0x8F09, 25, 59), (0x8F0A, 76, 40),
    (0x8F0C, 76, 49), (0x8F12, 76, 43), (0x8F13, 76, 45), (0x8F14, 41, 68), (0x8F15, 76, 42),
    (0x8F19, 76, 44), (0x8F1B, 76, 48), (0x8F1C, 76, 46), (0x8F1D, 20, 16), (0x8F1F, 76, 47),
    (0x8F26, 76, 50), (0x8F29, 38, 57), (0x8F2A, 45, 55), (0x8F2F, 28, 19), (0x8F33, 76, 51),
    (0x8F38, 44, 1), (0x8F39, 76, 53), (0x8F3B, 76, 52), (0x8F3E, 76, 56), (0x8F3F, 44, 32),
    (0x8F42, 76, 55), (0x8F44, 18, 76), (0x8F45, 76, 54), (0x8F46, 76, 59), (0x8F49, 76, 58),
    (0x8F4C, 76, 57), (0x8F4D, 36, 17), (0x8F4E, 76, 60), (0x8F57, 76, 61), (0x8F5C, 76, 62),
    (0x8F5F, 24, 75), (0x8F61, 22, 4), (0x8F62, 76, 63), (0x8F63, 76, 64), (0x8F64, 76, 65),
    (0x8F9B, 30, 40), (0x8F9C, 76, 66), (0x8F9E, 27, 12), (0x8F9F, 76, 67), (0x8FA3, 76, 68),
    (0x8FA7, 49, 0), (0x8FA8, 48, 93), (0x8FAD, 76, 69), (0x8FAE, 68, 79), (0x8FAF, 76, 70),
    (0x8FB0, 34, 3), (0x8FB1, 30, 10), (0x8FB2, 38, 31), (0x8FB7, 76, 71), (0x8FBA, 41, 52),
    (0x8FBB, 35, 51), (0x8FBC, 24, 93), (0x8FBF, 34, 8), (0x8FC2, 16, 9), (0x8FC4, 42, 87),
    (0x8FC5, 30, 54), (0x8FCE, 22, 61), (0x8FD1, 21, 64), (0x8FD4, 41, 53), (0x8FDA, 76, 72),
    (0x8FE2, 76, 74), (0x8FE5, 76, 73), (0x8FE6, 17, 63), (0x8FE9, 37, 85), (0x8FEA, 76, 75),
    (0x8FEB, 38, 86), (0x8FED, 36, 18), (0x8FEF, 76, 76), (0x8FF0, 28, 49), (0x8FF4, 76, 78),
    (0x8FF7, 43, 33), (0x8FF8, 76, 93), (0x8FF9, 76, 80), (0x8FFA, 76, 81), (0x8FFD, 35, 40),
    (0x9000, 33, 63), (0x9001, 32, 86), (0x9003, 37, 7), (0x9005, 76, 79), (0x9006, 20, 52),
    (0x900B, 76, 88), (0x900D, 76, 85), (0x900E, 77, 4), (0x900F, 37, 8), (0x9010, 34, 63),
    (0x9011, 76, 82), (0x9013, 35, 93), (0x9014, 36, 50), (0x9015, 76, 83), (0x9016, 76, 87),
    (0x9017, 30, 63), (0x9019, 38, 70), (0x901A, 35, 43), (0x901D, 31, 33), (0x901E, 76, 86),
    (0x901F, 33, 13), (0x9020, 33, 3), (0x9021, 76, 84), (0x9022, 15, 8), (0x9023, 46, 1),
    (0x9027, 76, 89), (0x902E, 33, 64), (0x9031, 28, 20), (0x9032, 30, 41), (0x9035, 76, 91),
    (0x9036, 76, 90), (0x9038, 15, 78), (0x9039, 76, 92), (0x903C, 40, 14), (0x903E, 77, 6),
    (0x9041, 37, 58), (0x9042, 30, 74), (0x9045, 34, 56), (0x9047, 21, 87), (0x9049, 77, 5),
    (0x904A, 44, 22), (0x904B, 16, 30), (0x904D, 41, 54), (0x904E, 17, 64), (0x904F, 77, 0),
    (0x9050, 77, 1), (0x9051, 77, 2), (0x9052, 77, 3), (0x9053, 37, 26), (0x9054, 34, 2),
    (0x9055, 15, 66), (0x9056, 77, 7), (0x9058, 77, 8), (0x9059, 83, 2), (0x905C, 33, 28),
    (0x905E, 77, 9), (0x9060, 16, 82), (0x9061, 32, 43), (0x9063, 23, 14), (0x9065, 44, 57),
    (0x9068, 77, 10), (0x9069, 36, 11), (0x906D, 32, 87), (0x906E, 27, 54), (0x906F, 77, 11),
    (0x9072, 77, 14), (0x9075, 28, 68), (0x9076, 77, 12), (0x9077, 32, 10), (0x9078, 32, 9),
    (0x907A, 15, 67), (0x907C, 45, 42), (0x907D, 77, 16), (0x907F, 39, 81), (0x9080, 77, 18),
    (0x9081, 77, 17), (0x9082, 77, 15), (0x9083, 66, 67), (0x9084, 19, 51), (0x9087, 76, 77),
    (0x9089, 77, 20), (0x908A, 77, 19), (0x908F, 77, 21), (0x9091, 44, 23), (0x90A3, 37, 64),
    (0x90A6, 42, 13), (0x90A8, 77, 22), (0x90AA, 27, 56), (0x90AF, 77, 23), (0x90B1, 77, 24),
    (0x90B5, 77, 25), (0x90B8, 36, 0), (0x90C1, 15, 73), (0x90CA, 24, 56), (0x90CE, 46, 25),
    (0x90DB, 77, 29), (0x90E1, 22, 19), (0x90E2, 77, 26), (0x90E4, 77, 27), (0x90E8, 40, 83),
    (0x90ED, 18, 51), (0x90F5, 44, 24), (0x90F7, 21, 30), (0x90FD, 36, 51), (0x9102, 77, 30),
    (0x9112, 77, 31), (0x9119, 77, 32), (0x912D, 36, 1), (0x9130, 77, 34), (0x9132, 77, 33),
    (0x9149, 37, 50), (0x914A, 77, 35), (0x914B, 28, 21), (0x914C, 27, 63), (0x914D, 38, 58),
    (0x914E, 34, 80), (0x9152, 27, 81), (0x9154, 30, 75), (0x9156, 77, 36), (0x9158, 77, 37),
    (0x9162, 30, 60), (0x9163, 77, 38), (0x9165, 77, 39), (0x9169, 77, 40), (0x916A, 44, 78),
    (0x916C, 28, 22), (0x9172, 77, 42), (0x9173, 77, 41), (0x9175, 24, 57), (0x9177, 24, 82),
    (0x9178, 26, 31), (0x9182, 77, 45), (0x9187, 28, 69), (0x9189, 77, 44), (0x918B, 77, 43),
    (0x918D, 33, 72), (0x9190, 23, 78), (0x9192, 31, 34), (0x9197, 39, 15), (0x919C, 28, 24),
    (0x91A2, 77, 46), (0x91A4, 29, 62), (0x91AA, 77, 49), (0x91AB, 77, 47), (0x91AF, 77, 48),
    (0x91B4, 77, 51), (0x91B5, 77, 50), (0x91B8, 29, 89), (0x91BA, 77, 52), (0x91C0, 77, 53),
    (0x91C1, 77, 54), (0x91C6, 39, 47), (0x91C7, 25, 50), (0x91C8, 27, 64), (0x91C9, 77, 55),
    (0x91CB, 77, 56), (0x91CC, 45, 3), (0x91CD, 28, 36), (0x91CE, 43, 77), (0x91CF, 45, 43),
    (0x91D0, 77, 57), (0x91D1, 21, 65), (0x91D6, 77, 58), (0x91D8, 36, 2), (0x91DB, 77, 61),
    (0x91DC, 18, 87), (0x91DD, 30, 42), (0x91DF, 77, 59), (0x91E1, 77, 60), (0x91E3, 35, 63),
    (0x91E6, 42, 52), (0x91E7, 21, 91), (0x91F5, 77, 63), (0x91F6, 77, 64), (0x91FC, 77, 62),
    (0x91FF, 77, 66), (0x920D, 37, 62), (0x920E, 18, 34), (0x9211, 77, 70), (0x9214, 77, 67),
    (0x9215, 77, 69), (0x921E, 77, 65), (0x9229, 78, 46), (0x922C, 77, 68), (0x9234, 45, 74),
    (0x9237, 23, 57), (0x923F, 77, 78), (0x9244, 36, 19), (0x9245, 77, 73), (0x9248, 77, 76),
    (0x9249, 77, 74), (0x924B, 77, 79), (0x9250, 77, 80), (0x9257, 77, 72), (0x925A, 77, 85),
    (0x925B, 16, 83), (0x925E, 77, 71), (0x9262, 39, 12), (0x9264, 77, 75), (0x9266, 29, 63),
    (0x9271, 24, 58), (0x927E, 42, 39), (0x9280, 21, 67), (0x9283, 28, 37), (0x9285, 37, 27),
    (0x9291, 32, 12), (0x9293, 77, 83), (0x9295, 77, 77), (0x9296, 77, 82), (0x9298, 43, 34),
    (0x929A, 35, 23), (0x929B, 77, 84), (0x929C, 77, 81), (0x92AD, 32, 11), (0x92B7, 77, 88),
    (0x92B9, 77, 87), (0x92CF, 77, 86), (0x92D2, 42, 14), (0x92E4, 28, 90), (0x92E9, 77, 89),
    (0x92EA, 41, 62), (0x92ED, 16, 51), (0x92F2, 40, 37), (0x92F3, 34, 81), (0x92F8, 20, 87),
    (0x92FA, 77, 91), (0x92FC, 24, 60), (0x9306, 26, 11), (0x930F, 77, 90), (0x9310, 30, 76),
    (0x9318, 30, 77), (0x9319, 78, 0), (0x931A, 78, 2), (0x9320, 29, 90), (0x9322, 78, 1),
    (0x9323, 78, 3), (0x9326, 21, 50), (0x9328, 40, 36), (0x932B, 27, 65), (0x932C, 46, 2),
    (0x932E, 77, 93), (0x932F, 25, 87), (0x9332, 46, 30), (0x9335, 78, 5), (0x933A, 78, 4),
    (0x933B, 78, 6), (0x9344, 77, 92), (0x934B, 37, 72), (0x934D, 36, 52), (0x9354, 35, 54),
    (0x9356, 78, 11), (0x935B, 34, 34), (0x935C, 78, 7), (0x9360, 78, 8), (0x936C, 22, 12),
    (0x936E, 78, 10), (0x9375, 23, 15), (0x937C, 78, 9), (0x937E, 29, 64), (0x938C, 18, 88),
    (0x9394, 78, 15), (0x9396, 25, 30), (0x9397, 32, 88), (0x939A, 35, 41), (0x93A7, 18, 26),
    (0x93AC, 78, 13), (0x93AD, 78, 14), (0x93AE, 35, 34), (0x93B0, 78, 12), (0x93B9, 78, 16),
    (0x93C3, 78, 22), (0x93C8, 78, 25), (0x93D0, 78, 24), (0x93D1, 36, 12), (0x93D6, 78, 17),
    (0x93D7, 78, 18), (0x93D8, 78, 21), (0x93DD, 78, 23), (0x93E1, 21, 31), (0x93E4, 78, 26),
    (0x93E5, 78, 20), (0x93E8, 78, 19), (0x9403, 78, 30), (0x9407, 78, 31), (0x9410, 78, 32),
    (0x9413, 78, 29), (0x9414, 78, 28), (0x9418, 29, 65), (0x9419, 37, 9), (0x941A, 78, 27),
    (0x9421, 78, 36), (0x942B, 78, 34), (0x9435, 78, 35), (0x9436, 78, 33), (0x9438, 33, 87),
    (0x943A, 78, 37), (0x9441, 78, 38), (0x9444, 78, 40), (0x9451, 19, 52), (0x9452, 78, 39),
    (0x9453, 43, 89), (0x945A, 78, 51), (0x945B, 78, 41), (0x945E, 78, 44), (0x9460, 78, 42),
    (0x9462, 78, 43), (0x946A, 78, 45), (0x9470, 78, 47), (0x9475, 78, 48), (0x9477, 78, 49),
    (0x947C, 78, 52), (0x947D, 78, 50), (0x947E, 78, 53), (0x947F, 78, 55), (0x9481, 78, 54),
    (0x9577, 35, 24), (0x9580, 43, 70), (0x9582, 78, 56), (0x9583, 32, 13), (0x9587, 78, 57),
    (0x9589, 41, 35), (0x958A, 78, 58), (0x958B, 18, 10), (0x958F, 16, 27), (0x9591, 19, 54),
    (0x9593, 19, 53), (0x9594, 78, 59), (0x9596, 78, 60), (0x9598, 78, 61), (0x9599, 78, 62),
    (0x95A0, 78, 63), (0x95A2, 19, 55), (0x95A3, 18, 52), (0x95A4, 24, 61), (0x95A5, 39, 21),
    (0x95A7, 78, 65), (0x95A8, 78, 64), (0x95AD, 78, 66), (0x95B2, 16, 59), (0x95B9, 78, 69),
    (0x95BB, 78, 68), (0x95BC, 78, 67), (0x95BE, 78, 70), (0x95C3, 78, 73), (0x95C7, 15, 38),
    (0x95CA, 78, 71), (0x95CC, 78, 75), (0x95CD, 78, 74), (0x95D4, 78, 77), (0x95D5, 78, 76),
    (0x95D6, 78, 78), (0x95D8, 37, 13), (0x95DC, 78, 79), (0x95E1, 78, 80), (0x95E2, 78, 82),
    (0x95E5, 78, 81), (0x961C, 40, 75), (0x9621, 78, 83), (0x9628, 78, 84), (0x962A, 25, 68),
    (0x962E, 78, 85), (0x962F, 78, 86), (0x9632, 42, 40), (0x963B, 32, 42), (0x963F, 15, 3),
    (0x9640, 33, 42), (0x9642, 78, 87), (0x9644, 40, 76), (0x964B, 78, 90), (0x964C, 78, 88),
    (0x964D, 24, 62), (0x964F, 78, 89), (0x9650, 23, 33), (0x965B, 41, 36), (0x965C, 78, 92),
    (0x965D, 79, 0), (0x965E, 78, 93), (0x965F, 79, 1), (0x9662, 16, 0), (0x9663, 30, 55),
    (0x9664, 28, 91), (0x9665, 19, 56), (0x9666, 79, 2), (0x966A, 38, 69), (0x966C, 79, 4),
    (0x9670, 16, 1), (0x9672, 79, 3), (0x9673, 35, 35), (0x9675, 45, 44), (0x9676, 37, 10),
    (0x9677, 78, 91), (0x9678, 45, 5), (0x967A, 23, 16), (0x967D, 44, 58), (0x9685, 21, 88),
    (0x9686, 45, 19), (0x9688, 22, 7), (0x968A, 33, 65), (0x968B, 70, 0), (0x968D, 79, 5),
    (0x968E, 18, 11), (0x968F, 30, 78), (0x9694, 18, 53), (0x9695, 79, 7), (0x9697, 79, 8),
    (0x9698, 79, 6), (0x9699, 22, 67), (0x969B, 25, 60), (0x969C, 29, 66), (0x96A0, 16, 2),
    (0x96A3, 45, 56), (0x96A7, 79, 10), (0x96A8, 77, 13), (0x96AA, 79, 9), (0x96B0, 79, 13),
    (0x96B1, 79, 11), (0x96B2, 79, 12), (0x96B4, 79, 14), (0x96B6, 79, 15), (0x96B7, 45, 75),
    (0x96B8, 79, 16), (0x96B9, 79, 17), (0x96BB, 31, 40), (0x96BC, 39, 26), (0x96C0, 30, 92),
    (0x96C1, 19, 70), (0x96C4, 44, 25), (0x96C5, 17, 76), (0x96C6, 28, 23), (0x96C7, 23, 58),
    (0x96C9, 79, 20), (0x96CB, 79, 19), (0x96CC, 26, 82), (0x96CD, 79, 21), (0x96CE, 79, 18),
    (0x96D1, 26, 7), (0x96D5, 79, 25), (0x96D6, 73, 12), (0x96D9, 49, 53), (0x96DB, 30, 86),
    (0x96DC, 79, 23), (0x96E2, 45, 4), (0x96E3, 37, 80), (0x96E8, 16, 10), (0x96EA, 31, 66),
    (0x96EB, 27, 21), (0x96F0, 41, 22), (0x96F2, 16, 31), (0x96F6, 45, 76), (0x96F7, 44, 74),
    (0x96F9, 79, 26), (0x96FB, 36, 36), (0x9700, 27, 90), (0x9704, 79, 27), (0x9706, 79, 28),
    (0x9707, 30, 43), (0x9708, 79, 29), (0x970A, 45, 77), (0x970D, 79, 24), (0x970E, 79, 31),
    (0x970F, 79, 33), (0x9711, 79, 32), (0x9713, 79, 30), (0x9716, 79, 34), (0x9719, 79, 35),
    (0x971C, 32, 89), (0x971E, 17, 65), (0x9724, 79, 36), (0x9727, 43, 23), (0x972A, 79, 37),
    (0x9730, 79, 38), (0x9732, 46, 9), (0x9738, 58, 16), (0x9739, 79, 39), (0x973D, 79, 40),
    (0x973E, 79, 41), (0x9742, 79, 45), (0x9744, 79, 42), (0x9746, 79, 43), (0x9748, 79, 44),
    (0x9749, 79, 46), (0x9752, 31, 35), (0x9756, 43, 86), (0x9759, 31, 36), (0x975C, 79, 47),
    (0x975E, 39, 82), (0x9760, 79, 48), (0x9761, 82, 50), (0x9762, 43, 43), (0x9764, 79, 49),
    (0x9766, 79, 50), (0x9768, 79, 51), (0x9769, 18, 54), (0x976B, 79, 53), (0x976D, 30, 56),
    (0x9771, 79, 54), (0x9774, 22, 3), (0x9779, 79, 55), (0x977A, 79, 59), (0x977C, 79, 57),
    (0x9781, 79, 58), (0x9784, 18, 82), (0x9785, 79, 56), (0x9786, 79, 60), (0x978B, 79, 61),
    (0x978D, 15, 39), (0x978F, 79, 62), (0x9790, 79, 63), (0x9798, 29, 67), (0x979C, 79, 64),
    (0x97A0, 20, 38), (0x97A3, 79, 67), (0x97A6, 79, 66), (0x97A8, 79, 65), (0x97AB, 74, 80),
    (0x97AD, 41, 59), (0x97B3, 79, 68), (0x97B4, 79, 69), (0x97C3, 79, 70), (0x97C6, 79, 71),
    (0x97C8, 79, 72), (0x97CB, 79, 73), (0x97D3, 19, 57), (0x97DC, 79, 74), (0x97ED, 79, 75),
    (0x97EE, 38, 2), (0x97F2, 79, 77), (0x97F3, 17, 26), (0x97F5, 79, 80), (0x97F6, 79, 79),
    (0x97FB, 16, 3), (0x97FF, 21, 32), (0x9801, 41, 38), (0x9802, 35, 25), (0x9803, 25, 1),
    (0x9805, 24, 63), (0x9806, 28, 70), (0x9808, 30, 59), (0x980C, 79, 82), (0x980F, 79, 81),
    (0x9810, 44, 33), (0x9811, 19, 71), (0x9812, 39, 49), (0x9813, 37, 59), (0x9817, 30, 91),
    (0x9818, 45, 45), (0x981A, 22, 58), (0x9821, 79, 85), (0x9824, 79, 84), (0x982C, 42, 42),
    (0x982D, 37, 11), (0x9834, 16, 47), (0x9837, 79, 86), (0x9838, 79, 83), (0x983B, 40, 48),
    (0x983C, 44, 73), (0x983D, 79, 87), (0x9846, 79, 88), (0x984B, 79, 90), (0x984C, 33, 73),
    (0x984D, 18, 58), (0x984E, 18, 59), (0x984F, 79, 89), (0x9854, 19, 72), (0x9855, 23, 17),
    (0x9858, 19, 73), (0x985B, 36, 30), (0x985E, 45, 63), (0x9867, 23, 59), (0x986B, 79, 91),
    (0x986F, 79, 92), (0x9870, 79, 93), (0x9871, 80, 0), (0x9873, 80, 2), (0x9874, 80, 1),
    (0x98A8, 40, 86), (0x98AA, 80, 3), (0x98AF, 80, 4), (0x98B1, 80, 5), (0x98B6, 80, 6),
    (0x98C3, 80, 8), (0x98C4, 80, 7), (0x98C6, 80, 9), (0x98DB, 39, 83), (0x98DC, 69, 43),
    (0x98DF, 30, 8), (0x98E2, 20, 17), (0x98E9, 80, 10), (0x98EB, 80, 11), (0x98ED, 49, 11),
    (0x98EE, 60, 26), (0x98EF, 39, 50), (0x98F2, 15, 90), (0x98F4, 15, 26), (0x98FC, 26, 83),
    (0x98FD, 42, 15), (0x98FE, 29, 93), (0x9903, 80, 12), (0x9905, 43, 62), (0x9909, 80, 13),
    (0x990A, 44, 59), (0x990C, 16, 33), (0x9910, 26, 32), (0x9912, 80, 14), (0x9913, 17, 77),
    (0x9914, 80, 15), (0x9918, 80, 16), (0x991D, 80, 18), (0x991E, 80, 19), (0x9920, 80, 21),
    (0x9921, 80, 17), (0x9924, 80, 20), (0x9928, 19, 58), (0x992C, 80, 22), (0x992E, 80, 23),
    (0x993D, 80, 24), (0x993E, 80, 25), (0x9942, 80, 26), (0x9945, 80, 28), (0x9949, 80, 27),
    (0x994B, 80, 30), (0x994C, 80, 33), (0x9950, 80, 29), (0x9951, 80, 31), (0x9952, 80, 32),
    (0x9955, 80, 34), (0x9957, 21, 33), (0x9996, 27, 82), (0x9997, 80, 35), (0x9998, 80, 36),
    (0x9999, 24, 64), (0x99A5, 80, 37), (0x99A8, 18, 29), (0x99AC, 38, 46), (0x99AD, 80, 38),
    (0x99AE, 80, 39), (0x99B3, 34, 57), (0x99B4, 37, 74), (0x99BC, 80, 40), (0x99C1, 38, 92),
    (0x99C4, 33, 43), (0x99C5, 16, 55), (0x99C6, 21, 77), (0x99C8, 21, 78), (0x99D0, 34, 82),
    (0x99D1, 80, 45), (0x99D2, 21, 79), (0x99D5, 17, 78), (0x99D8, 80, 44), (0x99DB, 80, 42),
    (0x99DD, 80, 43), (0x99DF, 80, 41), (0x99E2, 80, 55), (0x99ED, 80, 46), (0x99EE, 80, 47),
    (0x99F1, 80, 48), (0x99F2, 80, 49), (0x99F8, 80, 51), (0x99FB, 80, 50), (0x99FF, 28, 56),
    (0x9A01, 80, 52), (0x9A05, 80, 54), (0x9A0E, 20, 18), (0x9A0F, 80, 53), (0x9A12, 32, 90),
    (0x9A13, 23, 18), (0x9A19, 80, 56), (0x9A28, 33, 44), (0x9A2B, 80, 57), (0x9A30, 37, 12),
    (0x9A37, 80, 58), (0x9A3E, 80, 63), (0x9A40, 80, 61), (0x9A42, 80, 60), (0x9A43, 80, 62),
    (0x9A45, 80, 59), (0x9A4D, 80, 65), (0x9A55, 80, 64), (0x9A57, 80, 67), (0x9A5A, 21, 34),
    (0x9A5B, 80, 66), (0x9A5F, 80, 68), (0x9A62, 80, 69), (0x9A64, 80, 71), (0x9A65, 80, 70),
    (0x9A69, 80, 72), (0x9A6A, 80, 74), (0x9A6B, 80, 73), (0x9AA8, 24, 91), (0x9AAD, 80, 75),
    (0x9AB0, 80, 76), (0x9AB8, 18, 27), (0x9ABC, 80, 77), (0x9AC0, 80, 78), (0x9AC4, 30, 80),
    (0x9ACF, 80, 79), (0x9AD1, 80, 80), (0x9AD3, 80, 81), (0x9AD4, 80, 82), (0x9AD8, 24, 65),
    (0x9ADE, 80, 83), (0x9ADF, 80, 84), (0x9AE2, 80, 85), (0x9AE3, 80, 86), (0x9AE6, 80, 87),
    (0x9AEA, 39, 16), (0x9AEB, 80, 89), (0x9AED, 40, 5), (0x9AEE, 80, 90), (0x9AEF, 80, 88),
    (0x9AF1, 80, 92), (0x9AF4, 80, 91), (0x9AF7, 80, 93), (0x9AFB, 81, 0), (0x9B06, 81, 1),
    (0x9B18, 81, 2), (0x9B1A, 81, 3), (0x9B1F, 81, 4), (0x9B22, 81, 5), (0x9B23, 81, 6),
    (0x9B25, 81, 7), (0x9B27, 81, 8), (0x9B28, 81, 9), (0x9B29, 81, 10), (0x9B2A, 81, 11),
    (0x9B2E, 81, 12), (0x9B2F, 81, 13), (0x9B31, 60, 20), (0x9B32, 81, 14), (0x9B3B, 67, 87),
    (0x9B3C, 20, 19), (0x9B41, 18, 0), (0x9B42, 25, 17), (0x9B43, 81, 16), (0x9B44, 81, 15),
    (0x9B45, 43, 4), (0x9B4D, 81, 18), (0x9B4E, 81, 19), (0x9B4F, 81, 17), (0x9B51, 81, 20),
    (0x9B54, 42, 65), (0x9B58, 81, 21), (0x9B5A, 20, 90), (0x9B6F, 46, 4), (0x9B74, 81, 22),
    (0x9B83, 81, 24), (0x9B8E, 15, 29), (0x9B91, 81, 25), (0x9B92, 41, 10), (0x9B93, 81, 23),
    (0x9B96, 81, 26), (0x9B97, 81, 27), (0x9B9F, 81, 28), (0x9BA0, 81, 29), (0x9BA8, 81, 30),
    (0x9BAA, 42, 77), (0x9BAB, 26, 12), (0x9BAD, 25, 89), (0x9BAE, 32, 14), (0x9BB4, 81, 31),
    (0x9BB9, 81, 34), (0x9BC0, 81, 32), (0x9BC6, 81, 35), (0x9BC9, 23, 80), (0x9BCA, 81, 33),
    (0x9BCF, 81, 36), (0x9BD1, 81, 37), (0x9BD2, 81, 38), (0x9BD4, 81, 42), (0x9BD6, 26, 9),
    (0x9BDB, 33, 67), (0x9BE1, 81, 43), (0x9BE2, 81, 40), (0x9BE3, 81, 39), (0x9BE4, 81, 41),
    (0x9BE8, 22, 62), (0x9BF0, 81, 47), (0x9BF1, 81, 46), (0x9BF2, 81, 45), (0x9BF5, 15, 18),
    (0x9C04, 81, 57), (0x9C06, 81, 53), (0x9C08, 81, 54), (0x9C09, 81, 50), (0x9C0A, 81, 56),
    (0x9C0C, 81, 52), (0x9C0D, 18, 65), (0x9C10, 46, 43), (0x9C12, 81, 55), (0x9C13, 81, 51),
    (0x9C14, 81, 49), (0x9C15, 81, 48), (0x9C1B, 81, 59), (0x9C21, 81, 62), (0x9C24, 81, 61),
    (0x9C25, 81, 60), (0x9C2D, 40, 40), (0x9C2E, 81, 58), (0x9C2F, 15, 82), (0x9C30, 81, 63),
    (0x9C32, 81, 65), (0x9C39, 18, 78), (0x9C3A, 81, 44), (0x9C3B, 16, 22), (0x9C3E, 81, 67),
    (0x9C46, 81, 66), (0x9C47, 81, 64), (0x9C48, 34, 12), (0x9C52, 42, 79), (0x9C57, 45, 57),
    (0x9C5A, 81, 68), (0x9C60, 81, 69), (0x9C67, 81, 70), (0x9C76, 81, 71), (0x9C78, 81, 72),
    (0x9CE5, 35, 26), (0x9CE7, 81, 73), (0x9CE9, 39, 22), (0x9CEB, 81, 78), (0x9CEC, 81, 74),
    (0x9CF0, 81, 75), (0x9CF3, 42, 16), (0x9CF4, 43, 35), (0x9CF6, 37, 47), (0x9D03, 81, 79),
    (0x9D06, 81, 80), (0x9D07, 37, 29), (0x9D08, 81, 77), (0x9D09, 81, 76), (0x9D0E, 17, 9),
    (0x9D12, 81, 88), (0x9D15, 81, 87), (0x9D1B, 16, 84), (0x9D1F, 81, 85), (0x9D23, 81, 84),
    (0x9D26, 81, 82), (0x9D28, 18, 90), (0x9D2A, 81, 81), (0x9D2B, 27, 17), (0x9D2C, 17, 8),
    (0x9D3B, 24, 66), (0x9D3E, 81, 91), (0x9D3F, 81, 90), (0x9D41, 81, 89), (0x9D44, 81, 86),
    (0x9D46, 81, 92), (0x9D48, 81, 93), (0x9D50, 82, 4), (0x9D51, 82, 3), (0x9D59, 82, 5),
    (0x9D5C, 16, 12), (0x9D5D, 82, 0), (0x9D5E, 82, 1), (0x9D60, 24, 83), (0x9D61, 43, 24),
    (0x9D64, 82, 2), (0x9D6C, 42, 17), (0x9D6F, 82, 10), (0x9D72, 82, 6), (0x9D7A, 82, 11),
    (0x9D87, 82, 8), (0x9D89, 82, 7), (0x9D8F, 22, 59), (0x9D9A, 82, 12), (0x9DA4, 82, 13),
    (0x9DA9, 82, 14), (0x9DAB, 82, 9), (0x9DAF, 81, 83), (0x9DB2, 82, 15), (0x9DB4, 35, 64),
    (0x9DB8, 82, 19), (0x9DBA, 82, 20), (0x9DBB, 82, 18), (0x9DC1, 82, 17), (0x9DC2, 82, 23),
    (0x9DC4, 82, 16), (0x9DC6, 82, 21), (0x9DCF, 82, 22), (0x9DD3, 82, 25), (0x9DD9, 82, 24),
    (0x9DE6, 82, 27), (0x9DED, 82, 28), (0x9DEF, 82, 29), (0x9DF2, 46, 40), (0x9DF8, 82, 26),
    (0x9DF9, 33, 74), (0x9DFA, 25, 76), (0x9DFD, 82, 30), (0x9E1A, 82, 31), (0x9E1B, 82, 32),
    (0x9E1E, 82, 33), (0x9E75, 82, 34), (0x9E78, 23, 19), (0x9E79, 82, 35), (0x9E7D, 82, 36),
    (0x9E7F, 27, 14), (0x9E81, 82, 37), (0x9E88, 82, 38), (0x9E8B, 82, 39), (0x9E8C, 82, 40),
    (0x9E91, 82, 43), (0x9E92, 82, 41), (0x9E93, 46, 27), (0x9E95, 82, 42), (0x9E97, 45, 78),
    (0x9E9D, 82, 44), (0x9E9F, 45, 58), (0x9EA5, 82, 45), (0x9EA6, 38, 93), (0x9EA9, 82, 46),
    (0x9EAA, 82, 48), (0x9EAD, 82, 49), (0x9EB8, 82, 47), (0x9EB9, 24, 76), (0x9EBA, 43, 44),
    (0x9EBB, 42, 66), (0x9EBC, 53, 86), (0x9EBE, 60, 63), (0x9EBF, 42, 90), (0x9EC4, 17, 10),
    (0x9ECC, 82, 51), (0x9ECD, 20, 47), (0x9ECE, 82, 52), (0x9ECF, 82, 53), (0x9ED0, 82, 54),
    (0x9ED2, 24, 84), (0x9ED4, 82, 55), (0x9ED8, 63, 51), (0x9ED9, 43, 58), (0x9EDB, 33, 66),
    (0x9EDC, 82, 56), (0x9EDD, 82, 58), (0x9EDE, 82, 57), (0x9EE0, 82, 59), (0x9EE5, 82, 60),
    (0x9EE8, 82, 61), (0x9EEF, 82, 62), (0x9EF4, 82, 63), (0x9EF6, 82, 64), (0x9EF7, 82, 65),
    (0x9EF9, 82, 66), (0x9EFB, 82, 67), (0x9EFC, 82, 68), (0x9EFD, 82, 69), (0x9F07, 82, 70),
    (0x9F08, 82, 71), (0x9F0E, 36, 3), (0x9F13, 23, 60), (0x9F15, 82, 73), (0x9F20, 32, 44),
    (0x9F21, 82, 74), (0x9F2C, 82, 75), (0x9F3B, 40, 0), (0x9F3E, 82, 76), (0x9F4A, 82, 77),
    (0x9F4B, 66, 22), (0x9F4E, 75, 57), (0x9F4F, 79, 76), (0x9F52, 82, 78), (0x9F54, 82, 79),
    (0x9F5F, 82, 81), (0x9F60, 82, 82), (0x9F61, 82, 83), (0x9F62, 45, 79), (0x9F63, 82, 80),
    (0x9F66, 82, 84), (0x9F67, 82, 85), (0x9F6A, 82, 87), (0x9F6C, 82, 86), (0x9F72, 82, 89),
    (0x9F76, 82, 90), (0x9F77, 82, 88), (0x9F8D, 45, 21), (0x9F95, 82, 91), (0x9F9C, 82, 92),
    (0x9F9D, 66, 51), (0x9FA0, 82, 93), (0xFF01, 0, 9), (0xFF03, 0, 83), (0xFF04, 0, 79),
    (0xFF05, 0, 82), (0xFF06, 0, 84), (0xFF08, 0, 41), (0xFF09, 0, 42), (0xFF0A, 0, 85),
    (0xFF0B, 0, 59), (0xFF0C, 0, 3), (0xFF0E, 0, 4), (0xFF0F, 0, 30), (0xFF10, 2, 15),
    (0xFF11, 2, 16), (0xFF12, 2, 17), (0xFF13, 2, 18), (0xFF14, 2, 19), (0xFF15, 2, 20),
    (0xFF16, 2, 21), (0xFF17, 2, 22), (0xFF18, 2, 23), (0xFF19, 2, 24), (0xFF1A, 0, 6),
    (0xFF1B, 0, 7), (0xFF1C, 0, 66), (0xFF1D, 0, 64), (0xFF1E, 0, 67), (0xFF1F, 0, 8),
    (0xFF20, 0, 86), (0xFF21, 2, 32), (0xFF22, 2, 33), (0xFF23, 2, 34), (0xFF24, 2, 35),
    (0xFF25, 2, 36), (0xFF26, 2, 37), (0xFF27, 2, 38), (0xFF28, 2, 39), (0xFF29, 2, 40),
    (0xFF2A, 2, 41), (0xFF2B, 2, 42), (0xFF2C, 2, 43), (0xFF2D, 2, 44), (0xFF2E, 2, 45),
    (0xFF2F, 2, 46), (0xFF30, 2, 47), (0xFF31, 2, 48), (0xFF32, 2, 49), (0xFF33, 2, 50),
    (0xFF34, 2, 51), (0xFF35, 2, 52), (0xFF36, 2, 53), (0xFF37, 2, 54), (0xFF38, 2, 55),
    (0xFF39, 2, 56), (0xFF3A, 2, 57), (0xFF3B, 0, 45), (0xFF3C, 0, 31), (0xFF3D, 0, 46),
    (0xFF3E, 0, 15), (0xFF3F, 0, 17), (0xFF40, 0, 13), (0xFF41, 2, 64), (0xFF42, 2, 65),
    (0xFF43, 2, 66), (0xFF44, 2, 67), (0xFF45, 2, 68), (0xFF46, 2, 69), (0xFF47, 2, 70),
    (0xFF48, 2, 71), (0xFF49, 2, 72), (0xFF4A, 2, 73), (0xFF4B, 2, 74), (0xFF4C, 2, 75),
    (0xFF4D, 2, 76), (0xFF4E, 2, 77), (0xFF4F, 2, 78), (0xFF50, 2, 79), (0xFF51, 2, 80),
    (0xFF52, 2, 81), (0xFF53, 2, 82), (0xFF54, 2, 83), (0xFF55, 2, 84), (0xFF56, 2, 85),
    (0xFF57, 2, 86), (0xFF58, 2, 87), (0xFF59, 2, 88), (0xFF5A, 2, 89), (0xFF5B, 0, 47),
    (0xFF5C, 0, 34), (0xFF5D, 0, 48), (0xFFE3, 0, 16), (0xFFE5, 0, 78),
];

/// Looks up a zero-based (row, column) pair.
#[inline]
pub fn forward(r: u32, c: u32) -> u16 {
    if (r as usize) < ROWS && (c as usize) < COLS {
        FORWARD[(r as usize) * COLS + c as usize]
    } else {
        0xFFFF
    }
}

/// Finds the (row, column) pair for a scalar value, if any.
#[inline]
pub fn backward(code: u32) -> Option<(u8, u8)> {
    if code > 0xFFFF {
        return None;
    }
    BACKWARD
        .binary_search_by_key(&(code as u16), |e| e.0)
        .ok()
        .map(|i| (BACKWARD[i].1, BACKWARD[i].2))
}

// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.
//
// AUTOGENERATED BY scripts/gen_index.py; DO NOT EDIT DIRECTLY.

//! Windows code page 949.

const ROWS: usize = 126;
const COLS: usize = 192;

static FORWARD: [u16; 24192] = [
    0xFFFF, 0xAC02, 0xAC03, 0xAC05, 0xAC06, 0xAC0B, 0xAC0C, 0xAC0D,
    0xAC0E, 0xAC0F, 0xAC18, 0xAC1E, 0xAC1F, 0xAC21, 0xAC22, 0xAC23,
    0xAC25, 0xAC26, 0xAC27, 0xAC28, 0xAC29, 0xAC2A, 0xAC2B, 0xAC2E,
    0xAC32, 0xAC33, 0xAC34, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAC35, 0xAC36, 0xAC37, 0xAC3A, 0xAC3B, 0xAC3D, 0xAC3E,
    0xAC3F, 0xAC41, 0xAC42, 0xAC43, 0xAC44, 0xAC45, 0xAC46, 0xAC47,
    0xAC48, 0xAC49, 0xAC4A, 0xAC4C, 0xAC4E, 0xAC4F, 0xAC50, 0xAC51,
    0xAC52, 0xAC53, 0xAC55, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAC56, 0xAC57, 0xAC59, 0xAC5A, 0xAC5B, 0xAC5D, 0xAC5E,
    0xAC5F, 0xAC60, 0xAC61, 0xAC62, 0xAC63, 0xAC64, 0xAC65, 0xAC66,
    0xAC67, 0xAC68, 0xAC69, 0xAC6A, 0xAC6B, 0xAC6C, 0xAC6D, 0xAC6E,
    0xAC6F, 0xAC72, 0xAC73, 0xAC75, 0xAC76, 0xAC79, 0xAC7B, 0xAC7C,
    0xAC7D, 0xAC7E, 0xAC7F, 0xAC82, 0xAC87, 0xAC88, 0xAC8D, 0xAC8E,
    0xAC8F, 0xAC91, 0xAC92, 0xAC93, 0xAC95, 0xAC96, 0xAC97, 0xAC98,
    0xAC99, 0xAC9A, 0xAC9B, 0xAC9E, 0xACA2, 0xACA3, 0xACA4, 0xACA5,
    0xACA6, 0xACA7, 0xACAB, 0xACAD, 0xACAE, 0xACB1, 0xACB2, 0xACB3,
    0xACB4, 0xACB5, 0xACB6, 0xACB7, 0xACBA, 0xACBE, 0xACBF, 0xACC0,
    0xACC2, 0xACC3, 0xACC5, 0xACC6, 0xACC7, 0xACC9, 0xACCA, 0xACCB,
    0xACCD, 0xACCE, 0xACCF, 0xACD0, 0xACD1, 0xACD2, 0xACD3, 0xACD4,
    0xACD6, 0xACD8, 0xACD9, 0xACDA, 0xACDB, 0xACDC, 0xACDD, 0xACDE,
    0xACDF, 0xACE2, 0xACE3, 0xACE5, 0xACE6, 0xACE9, 0xACEB, 0xACED,
    0xACEE, 0xACF2, 0xACF4, 0xACF7, 0xACF8, 0xACF9, 0xACFA, 0xACFB,
    0xACFE, 0xACFF, 0xAD01, 0xAD02, 0xAD03, 0xAD05, 0xAD07, 0xAD08,
    0xAD09, 0xAD0A, 0xAD0B, 0xAD0E, 0xAD10, 0xAD12, 0xAD13, 0xFFFF,
    0xFFFF, 0xAD14, 0xAD15, 0xAD16, 0xAD17, 0xAD19, 0xAD1A, 0xAD1B,
    0xAD1D, 0xAD1E, 0xAD1F, 0xAD21, 0xAD22, 0xAD23, 0xAD24, 0xAD25,
    0xAD26, 0xAD27, 0xAD28, 0xAD2A, 0xAD2B, 0xAD2E, 0xAD2F, 0xAD30,
    0xAD31, 0xAD32, 0xAD33, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAD36, 0xAD37, 0xAD39, 0xAD3A, 0xAD3B, 0xAD3D, 0xAD3E,
    0xAD3F, 0xAD40, 0xAD41, 0xAD42, 0xAD43, 0xAD46, 0xAD48, 0xAD4A,
    0xAD4B, 0xAD4C, 0xAD4D, 0xAD4E, 0xAD4F, 0xAD51, 0xAD52, 0xAD53,
    0xAD55, 0xAD56, 0xAD57, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAD59, 0xAD5A, 0xAD5B, 0xAD5C, 0xAD5D, 0xAD5E, 0xAD5F,
    0xAD60, 0xAD62, 0xAD64, 0xAD65, 0xAD66, 0xAD67, 0xAD68, 0xAD69,
    0xAD6A, 0xAD6B, 0xAD6E, 0xAD6F, 0xAD71, 0xAD72, 0xAD77, 0xAD78,
    0xAD79, 0xAD7A, 0xAD7E, 0xAD80, 0xAD83, 0xAD84, 0xAD85, 0xAD86,
    0xAD87, 0xAD8A, 0xAD8B, 0xAD8D, 0xAD8E, 0xAD8F, 0xAD91, 0xAD92,
    0xAD93, 0xAD94, 0xAD95, 0xAD96, 0xAD97, 0xAD98, 0xAD99, 0xAD9A,
    0xAD9B, 0xAD9E, 0xAD9F, 0xADA0, 0xADA1, 0xADA2, 0xADA3, 0xADA5,
    0xADA6, 0xADA7, 0xADA8, 0xADA9, 0xADAA, 0xADAB, 0xADAC, 0xADAD,
    0xADAE, 0xADAF, 0xADB0, 0xADB1, 0xADB2, 0xADB3, 0xADB4, 0xADB5,
    0xADB6, 0xADB8, 0xADB9, 0xADBA, 0xADBB, 0xADBC, 0xADBD, 0xADBE,
    0xADBF, 0xADC2, 0xADC3, 0xADC5, 0xADC6, 0xADC7, 0xADC9, 0xADCA,
    0xADCB, 0xADCC, 0xADCD, 0xADCE, 0xADCF, 0xADD2, 0xADD4, 0xADD5,
    0xADD6, 0xADD7, 0xADD8, 0xADD9, 0xADDA, 0xADDB, 0xADDD, 0xADDE,
    0xADDF, 0xADE1, 0xADE2, 0xADE3, 0xADE5, 0xADE6, 0xADE7, 0xADE8,
    0xADE9, 0xADEA, 0xADEB, 0xADEC, 0xADED, 0xADEE, 0xADEF, 0xADF0,
    0xADF1, 0xADF2, 0xADF3, 0xADF4, 0xADF5, 0xADF6, 0xADF7, 0xFFFF,
    0xFFFF, 0xADFA, 0xADFB, 0xADFD, 0xADFE, 0xAE02, 0xAE03, 0xAE04,
    0xAE05, 0xAE06, 0xAE07, 0xAE0A, 0xAE0C, 0xAE0E, 0xAE0F, 0xAE10,
    0xAE11, 0xAE12, 0xAE13, 0xAE15, 0xAE16, 0xAE17, 0xAE18, 0xAE19,
    0xAE1A, 0xAE1B, 0xAE1C, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAE1D, 0xAE1E, 0xAE1F, 0xAE20, 0xAE21, 0xAE22, 0xAE23,
    0xAE24, 0xAE25, 0xAE26, 0xAE27, 0xAE28, 0xAE29, 0xAE2A, 0xAE2B,
    0xAE2C, 0xAE2D, 0xAE2E, 0xAE2F, 0xAE32, 0xAE33, 0xAE35, 0xAE36,
    0xAE39, 0xAE3B, 0xAE3C, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAE3D, 0xAE3E, 0xAE3F, 0xAE42, 0xAE44, 0xAE47, 0xAE48,
    0xAE49, 0xAE4B, 0xAE4F, 0xAE51, 0xAE52, 0xAE53, 0xAE55, 0xAE57,
    0xAE58, 0xAE59, 0xAE5A, 0xAE5B, 0xAE5E, 0xAE62, 0xAE63, 0xAE64,
    0xAE66, 0xAE67, 0xAE6A, 0xAE6B, 0xAE6D, 0xAE6E, 0xAE6F, 0xAE71,
    0xAE72, 0xAE73, 0xAE74, 0xAE75, 0xAE76, 0xAE77, 0xAE7A, 0xAE7E,
    0xAE7F, 0xAE80, 0xAE81, 0xAE82, 0xAE83, 0xAE86, 0xAE87, 0xAE88,
    0xAE89, 0xAE8A, 0xAE8B, 0xAE8D, 0xAE8E, 0xAE8F, 0xAE90, 0xAE91,
    0xAE92, 0xAE93, 0xAE94, 0xAE95, 0xAE96, 0xAE97, 0xAE98, 0xAE99,
    0xAE9A, 0xAE9B, 0xAE9C, 0xAE9D, 0xAE9E, 0xAE9F, 0xAEA0, 0xAEA1,
    0xAEA2, 0xAEA3, 0xAEA4, 0xAEA5, 0xAEA6, 0xAEA7, 0xAEA8, 0xAEA9,
    0xAEAA, 0xAEAB, 0xAEAC, 0xAEAD, 0xAEAE, 0xAEAF, 0xAEB0, 0xAEB1,
    0xAEB2, 0xAEB3, 0xAEB4, 0xAEB5, 0xAEB6, 0xAEB7, 0xAEB8, 0xAEB9,
    0xAEBA, 0xAEBB, 0xAEBF, 0xAEC1, 0xAEC2, 0xAEC3, 0xAEC5, 0xAEC6,
    0xAEC7, 0xAEC8, 0xAEC9, 0xAECA, 0xAECB, 0xAECE, 0xAED2, 0xAED3,
    0xAED4, 0xAED5, 0xAED6, 0xAED7, 0xAEDA, 0xAEDB, 0xAEDD, 0xAEDE,
    0xAEDF, 0xAEE0, 0xAEE1, 0xAEE2, 0xAEE3, 0xAEE4, 0xAEE5, 0xFFFF,
    0xFFFF, 0xAEE6, 0xAEE7, 0xAEE9, 0xAEEA, 0xAEEC, 0xAEEE, 0xAEEF,
    0xAEF0, 0xAEF1, 0xAEF2, 0xAEF3, 0xAEF5, 0xAEF6, 0xAEF7, 0xAEF9,
    0xAEFA, 0xAEFB, 0xAEFD, 0xAEFE, 0xAEFF, 0xAF00, 0xAF01, 0xAF02,
    0xAF03, 0xAF04, 0xAF05, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAF06, 0xAF09, 0xAF0A, 0xAF0B, 0xAF0C, 0xAF0E, 0xAF0F,
    0xAF11, 0xAF12, 0xAF13, 0xAF14, 0xAF15, 0xAF16, 0xAF17, 0xAF18,
    0xAF19, 0xAF1A, 0xAF1B, 0xAF1C, 0xAF1D, 0xAF1E, 0xAF1F, 0xAF20,
    0xAF21, 0xAF22, 0xAF23, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAF24, 0xAF25, 0xAF26, 0xAF27, 0xAF28, 0xAF29, 0xAF2A,
    0xAF2B, 0xAF2E, 0xAF2F, 0xAF31, 0xAF33, 0xAF35, 0xAF36, 0xAF37,
    0xAF38, 0xAF39, 0xAF3A, 0xAF3B, 0xAF3E, 0xAF40, 0xAF44, 0xAF45,
    0xAF46, 0xAF47, 0xAF4A, 0xAF4B, 0xAF4C, 0xAF4D, 0xAF4E, 0xAF4F,
    0xAF51, 0xAF52, 0xAF53, 0xAF54, 0xAF55, 0xAF56, 0xAF57, 0xAF58,
    0xAF59, 0xAF5A, 0xAF5B, 0xAF5E, 0xAF5F, 0xAF60, 0xAF61, 0xAF62,
    0xAF63, 0xAF66, 0xAF67, 0xAF68, 0xAF69, 0xAF6A, 0xAF6B, 0xAF6C,
    0xAF6D, 0xAF6E, 0xAF6F, 0xAF70, 0xAF71, 0xAF72, 0xAF73, 0xAF74,
    0xAF75, 0xAF76, 0xAF77, 0xAF78, 0xAF7A, 0xAF7B, 0xAF7C, 0xAF7D,
    0xAF7E, 0xAF7F, 0xAF81, 0xAF82, 0xAF83, 0xAF85, 0xAF86, 0xAF87,
    0xAF89, 0xAF8A, 0xAF8B, 0xAF8C, 0xAF8D, 0xAF8E, 0xAF8F, 0xAF92,
    0xAF93, 0xAF94, 0xAF96, 0xAF97, 0xAF98, 0xAF99, 0xAF9A, 0xAF9B,
    0xAF9D, 0xAF9E, 0xAF9F, 0xAFA0, 0xAFA1, 0xAFA2, 0xAFA3, 0xAFA4,
    0xAFA5, 0xAFA6, 0xAFA7, 0xAFA8, 0xAFA9, 0xAFAA, 0xAFAB, 0xAFAC,
    0xAFAD, 0xAFAE, 0xAFAF, 0xAFB0, 0xAFB1, 0xAFB2, 0xAFB3, 0xAFB4,
    0xAFB5, 0xAFB6, 0xAFB7, 0xAFBA, 0xAFBB, 0xAFBD, 0xAFBE, 0xFFFF,
    0xFFFF, 0xAFBF, 0xAFC1, 0xAFC2, 0xAFC3, 0xAFC4, 0xAFC5, 0xAFC6,
    0xAFCA, 0xAFCC, 0xAFCF, 0xAFD0, 0xAFD1, 0xAFD2, 0xAFD3, 0xAFD5,
    0xAFD6, 0xAFD7, 0xAFD8, 0xAFD9, 0xAFDA, 0xAFDB, 0xAFDD, 0xAFDE,
    0xAFDF, 0xAFE0, 0xAFE1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xAFE2, 0xAFE3, 0xAFE4, 0xAFE5, 0xAFE6, 0xAFE7, 0xAFEA,
    0xAFEB, 0xAFEC, 0xAFED, 0xAFEE, 0xAFEF, 0xAFF2, 0xAFF3, 0xAFF5,
    0xAFF6, 0xAFF7, 0xAFF9, 0xAFFA, 0xAFFB, 0xAFFC, 0xAFFD, 0xAFFE,
    0xAFFF, 0xB002, 0xB003, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB005, 0xB006, 0xB007, 0xB008, 0xB009, 0xB00A, 0xB00B,
    0xB00D, 0xB00E, 0xB00F, 0xB011, 0xB012, 0xB013, 0xB015, 0xB016,
    0xB017, 0xB018, 0xB019, 0xB01A, 0xB01B, 0xB01E, 0xB01F, 0xB020,
    0xB021, 0xB022, 0xB023, 0xB024, 0xB025, 0xB026, 0xB027, 0xB029,
    0xB02A, 0xB02B, 0xB02C, 0xB02D, 0xB02E, 0xB02F, 0xB030, 0xB031,
    0xB032, 0xB033, 0xB034, 0xB035, 0xB036, 0xB037, 0xB038, 0xB039,
    0xB03A, 0xB03B, 0xB03C, 0xB03D, 0xB03E, 0xB03F, 0xB040, 0xB041,
    0xB042, 0xB043, 0xB046, 0xB047, 0xB049, 0xB04B, 0xB04D, 0xB04F,
    0xB050, 0xB051, 0xB052, 0xB056, 0xB058, 0xB05A, 0xB05B, 0xB05C,
    0xB05E, 0xB05F, 0xB060, 0xB061, 0xB062, 0xB063, 0xB064, 0xB065,
    0xB066, 0xB067, 0xB068, 0xB069, 0xB06A, 0xB06B, 0xB06C, 0xB06D,
    0xB06E, 0xB06F, 0xB070, 0xB071, 0xB072, 0xB073, 0xB074, 0xB075,
    0xB076, 0xB077, 0xB078, 0xB079, 0xB07A, 0xB07B, 0xB07E, 0xB07F,
    0xB081, 0xB082, 0xB083, 0xB085, 0xB086, 0xB087, 0xB088, 0xB089,
    0xB08A, 0xB08B, 0xB08E, 0xB090, 0xB092, 0xB093, 0xB094, 0xB095,
    0xB096, 0xB097, 0xB09B, 0xB09D, 0xB09E, 0xB0A3, 0xB0A4, 0xFFFF,
    0xFFFF, 0xB0A5, 0xB0A6, 0xB0A7, 0xB0AA, 0xB0B0, 0xB0B2, 0xB0B6,
    0xB0B7, 0xB0B9, 0xB0BA, 0xB0BB, 0xB0BD, 0xB0BE, 0xB0BF, 0xB0C0,
    0xB0C1, 0xB0C2, 0xB0C3, 0xB0C6, 0xB0CA, 0xB0CB, 0xB0CC, 0xB0CD,
    0xB0CE, 0xB0CF, 0xB0D2, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB0D3, 0xB0D5, 0xB0D6, 0xB0D7, 0xB0D9, 0xB0DA, 0xB0DB,
    0xB0DC, 0xB0DD, 0xB0DE, 0xB0DF, 0xB0E1, 0xB0E2, 0xB0E3, 0xB0E4,
    0xB0E6, 0xB0E7, 0xB0E8, 0xB0E9, 0xB0EA, 0xB0EB, 0xB0EC, 0xB0ED,
    0xB0EE, 0xB0EF, 0xB0F0, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB0F1, 0xB0F2, 0xB0F3, 0xB0F4, 0xB0F5, 0xB0F6, 0xB0F7,
    0xB0F8, 0xB0F9, 0xB0FA, 0xB0FB, 0xB0FC, 0xB0FD, 0xB0FE, 0xB0FF,
    0xB100, 0xB101, 0xB102, 0xB103, 0xB104, 0xB105, 0xB106, 0xB107,
    0xB10A, 0xB10D, 0xB10E, 0xB10F, 0xB111, 0xB114, 0xB115, 0xB116,
    0xB117, 0xB11A, 0xB11E, 0xB11F, 0xB120, 0xB121, 0xB122, 0xB126,
    0xB127, 0xB129, 0xB12A, 0xB12B, 0xB12D, 0xB12E, 0xB12F, 0xB130,
    0xB131, 0xB132, 0xB133, 0xB136, 0xB13A, 0xB13B, 0xB13C, 0xB13D,
    0xB13E, 0xB13F, 0xB142, 0xB143, 0xB145, 0xB146, 0xB147, 0xB149,
    0xB14A, 0xB14B, 0xB14C, 0xB14D, 0xB14E, 0xB14F, 0xB152, 0xB153,
    0xB156, 0xB157, 0xB159, 0xB15A, 0xB15B, 0xB15D, 0xB15E, 0xB15F,
    0xB161, 0xB162, 0xB163, 0xB164, 0xB165, 0xB166, 0xB167, 0xB168,
    0xB169, 0xB16A, 0xB16B, 0xB16C, 0xB16D, 0xB16E, 0xB16F, 0xB170,
    0xB171, 0xB172, 0xB173, 0xB174, 0xB175, 0xB176, 0xB177, 0xB17A,
    0xB17B, 0xB17D, 0xB17E, 0xB17F, 0xB181, 0xB183, 0xB184, 0xB185,
    0xB186, 0xB187, 0xB18A, 0xB18C, 0xB18E, 0xB18F, 0xB190, 0xB191,
    0xB195, 0xB196, 0xB197, 0xB199, 0xB19A, 0xB19B, 0xB19D, 0xFFFF,
    0xFFFF, 0xB19E, 0xB19F, 0xB1A0, 0xB1A1, 0xB1A2, 0xB1A3, 0xB1A4,
    0xB1A5, 0xB1A6, 0xB1A7, 0xB1A9, 0xB1AA, 0xB1AB, 0xB1AC, 0xB1AD,
    0xB1AE, 0xB1AF, 0xB1B0, 0xB1B1, 0xB1B2, 0xB1B3, 0xB1B4, 0xB1B5,
    0xB1B6, 0xB1B7, 0xB1B8, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB1B9, 0xB1BA, 0xB1BB, 0xB1BC, 0xB1BD, 0xB1BE, 0xB1BF,
    0xB1C0, 0xB1C1, 0xB1C2, 0xB1C3, 0xB1C4, 0xB1C5, 0xB1C6, 0xB1C7,
    0xB1C8, 0xB1C9, 0xB1CA, 0xB1CB, 0xB1CD, 0xB1CE, 0xB1CF, 0xB1D1,
    0xB1D2, 0xB1D3, 0xB1D5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB1D6, 0xB1D7, 0xB1D8, 0xB1D9, 0xB1DA, 0xB1DB, 0xB1DE,
    0xB1E0, 0xB1E1, 0xB1E2, 0xB1E3, 0xB1E4, 0xB1E5, 0xB1E6, 0xB1E7,
    0xB1EA, 0xB1EB, 0xB1ED, 0xB1EE, 0xB1EF, 0xB1F1, 0xB1F2, 0xB1F3,
    0xB1F4, 0xB1F5, 0xB1F6, 0xB1F7, 0xB1F8, 0xB1FA, 0xB1FC, 0xB1FE,
    0xB1FF, 0xB200, 0xB201, 0xB202, 0xB203, 0xB206, 0xB207, 0xB209,
    0xB20A, 0xB20D, 0xB20E, 0xB20F, 0xB210, 0xB211, 0xB212, 0xB213,
    0xB216, 0xB218, 0xB21A, 0xB21B, 0xB21C, 0xB21D, 0xB21E, 0xB21F,
    0xB221, 0xB222, 0xB223, 0xB224, 0xB225, 0xB226, 0xB227, 0xB228,
    0xB229, 0xB22A, 0xB22B, 0xB22C, 0xB22D, 0xB22E, 0xB22F, 0xB230,
    0xB231, 0xB232, 0xB233, 0xB235, 0xB236, 0xB237, 0xB238, 0xB239,
    0xB23A, 0xB23B, 0xB23D, 0xB23E, 0xB23F, 0xB240, 0xB241, 0xB242,
    0xB243, 0xB244, 0xB245, 0xB246, 0xB247, 0xB248, 0xB249, 0xB24A,
    0xB24B, 0xB24C, 0xB24D, 0xB24E, 0xB24F, 0xB250, 0xB251, 0xB252,
    0xB253, 0xB254, 0xB255, 0xB256, 0xB257, 0xB259, 0xB25A, 0xB25B,
    0xB25D, 0xB25E, 0xB25F, 0xB261, 0xB262, 0xB263, 0xB264, 0xB265,
    0xB266, 0xB267, 0xB26A, 0xB26B, 0xB26C, 0xB26D, 0xB26E, 0xFFFF,
    0xFFFF, 0xB26F, 0xB270, 0xB271, 0xB272, 0xB273, 0xB276, 0xB277,
    0xB278, 0xB279, 0xB27A, 0xB27B, 0xB27D, 0xB27E, 0xB27F, 0xB280,
    0xB281, 0xB282, 0xB283, 0xB286, 0xB287, 0xB288, 0xB28A, 0xB28B,
    0xB28C, 0xB28D, 0xB28E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB28F, 0xB292, 0xB293, 0xB295, 0xB296, 0xB297, 0xB29B,
    0xB29C, 0xB29D, 0xB29E, 0xB29F, 0xB2A2, 0xB2A4, 0xB2A7, 0xB2A8,
    0xB2A9, 0xB2AB, 0xB2AD, 0xB2AE, 0xB2AF, 0xB2B1, 0xB2B2, 0xB2B3,
    0xB2B5, 0xB2B6, 0xB2B7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB2B8, 0xB2B9, 0xB2BA, 0xB2BB, 0xB2BC, 0xB2BD, 0xB2BE,
    0xB2BF, 0xB2C0, 0xB2C1, 0xB2C2, 0xB2C3, 0xB2C4, 0xB2C5, 0xB2C6,
    0xB2C7, 0xB2CA, 0xB2CB, 0xB2CD, 0xB2CE, 0xB2CF, 0xB2D1, 0xB2D3,
    0xB2D4, 0xB2D5, 0xB2D6, 0xB2D7, 0xB2DA, 0xB2DC, 0xB2DE, 0xB2DF,
    0xB2E0, 0xB2E1, 0xB2E3, 0xB2E7, 0xB2E9, 0xB2EA, 0xB2F0, 0xB2F1,
    0xB2F2, 0xB2F6, 0xB2FC, 0xB2FD, 0xB2FE, 0xB302, 0xB303, 0xB305,
    0xB306, 0xB307, 0xB309, 0xB30A, 0xB30B, 0xB30C, 0xB30D, 0xB30E,
    0xB30F, 0xB312, 0xB316, 0xB317, 0xB318, 0xB319, 0xB31A, 0xB31B,
    0xB31D, 0xB31E, 0xB31F, 0xB320, 0xB321, 0xB322, 0xB323, 0xB324,
    0xB325, 0xB326, 0xB327, 0xB328, 0xB329, 0xB32A, 0xB32B, 0xB32C,
    0xB32D, 0xB32E, 0xB32F, 0xB330, 0xB331, 0xB332, 0xB333, 0xB334,
    0xB335, 0xB336, 0xB337, 0xB338, 0xB339, 0xB33A, 0xB33B, 0xB33C,
    0xB33D, 0xB33E, 0xB33F, 0xB340, 0xB341, 0xB342, 0xB343, 0xB344,
    0xB345, 0xB346, 0xB347, 0xB348, 0xB349, 0xB34A, 0xB34B, 0xB34C,
    0xB34D, 0xB34E, 0xB34F, 0xB350, 0xB351, 0xB352, 0xB353, 0xB357,
    0xB359, 0xB35A, 0xB35D, 0xB360, 0xB361, 0xB362, 0xB363, 0xFFFF,
    0xFFFF, 0xB366, 0xB368, 0xB36A, 0xB36C, 0xB36D, 0xB36F, 0xB372,
    0xB373, 0xB375, 0xB376, 0xB377, 0xB379, 0xB37A, 0xB37B, 0xB37C,
    0xB37D, 0xB37E, 0xB37F, 0xB382, 0xB386, 0xB387, 0xB388, 0xB389,
    0xB38A, 0xB38B, 0xB38D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB38E, 0xB38F, 0xB391, 0xB392, 0xB393, 0xB395, 0xB396,
    0xB397, 0xB398, 0xB399, 0xB39A, 0xB39B, 0xB39C, 0xB39D, 0xB39E,
    0xB39F, 0xB3A2, 0xB3A3, 0xB3A4, 0xB3A5, 0xB3A6, 0xB3A7, 0xB3A9,
    0xB3AA, 0xB3AB, 0xB3AD, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB3AE, 0xB3AF, 0xB3B0, 0xB3B1, 0xB3B2, 0xB3B3, 0xB3B4,
    0xB3B5, 0xB3B6, 0xB3B7, 0xB3B8, 0xB3B9, 0xB3BA, 0xB3BB, 0xB3BC,
    0xB3BD, 0xB3BE, 0xB3BF, 0xB3C0, 0xB3C1, 0xB3C2, 0xB3C3, 0xB3C6,
    0xB3C7, 0xB3C9, 0xB3CA, 0xB3CD, 0xB3CF, 0xB3D1, 0xB3D2, 0xB3D3,
    0xB3D6, 0xB3D8, 0xB3DA, 0xB3DC, 0xB3DE, 0xB3DF, 0xB3E1, 0xB3E2,
    0xB3E3, 0xB3E5, 0xB3E6, 0xB3E7, 0xB3E9, 0xB3EA, 0xB3EB, 0xB3EC,
    0xB3ED, 0xB3EE, 0xB3EF, 0xB3F0, 0xB3F1, 0xB3F2, 0xB3F3, 0xB3F4,
    0xB3F5, 0xB3F6, 0xB3F7, 0xB3F8, 0xB3F9, 0xB3FA, 0xB3FB, 0xB3FD,
    0xB3FE, 0xB3FF, 0xB400, 0xB401, 0xB402, 0xB403, 0xB404, 0xB405,
    0xB406, 0xB407, 0xB408, 0xB409, 0xB40A, 0xB40B, 0xB40C, 0xB40D,
    0xB40E, 0xB40F, 0xB411, 0xB412, 0xB413, 0xB414, 0xB415, 0xB416,
    0xB417, 0xB419, 0xB41A, 0xB41B, 0xB41D, 0xB41E, 0xB41F, 0xB421,
    0xB422, 0xB423, 0xB424, 0xB425, 0xB426, 0xB427, 0xB42A, 0xB42C,
    0xB42D, 0xB42E, 0xB42F, 0xB430, 0xB431, 0xB432, 0xB433, 0xB435,
    0xB436, 0xB437, 0xB438, 0xB439, 0xB43A, 0xB43B, 0xB43C, 0xB43D,
    0xB43E, 0xB43F, 0xB440, 0xB441, 0xB442, 0xB443, 0xB444, 0xFFFF,
    0xFFFF, 0xB445, 0xB446, 0xB447, 0xB448, 0xB449, 0xB44A, 0xB44B,
    0xB44C, 0xB44D, 0xB44E, 0xB44F, 0xB452, 0xB453, 0xB455, 0xB456,
    0xB457, 0xB459, 0xB45A, 0xB45B, 0xB45C, 0xB45D, 0xB45E, 0xB45F,
    0xB462, 0xB464, 0xB466, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB467, 0xB468, 0xB469, 0xB46A, 0xB46B, 0xB46D, 0xB46E,
    0xB46F, 0xB470, 0xB471, 0xB472, 0xB473, 0xB474, 0xB475, 0xB476,
    0xB477, 0xB478, 0xB479, 0xB47A, 0xB47B, 0xB47C, 0xB47D, 0xB47E,
    0xB47F, 0xB481, 0xB482, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB483, 0xB484, 0xB485, 0xB486, 0xB487, 0xB489, 0xB48A,
    0xB48B, 0xB48C, 0xB48D, 0xB48E, 0xB48F, 0xB490, 0xB491, 0xB492,
    0xB493, 0xB494, 0xB495, 0xB496, 0xB497, 0xB498, 0xB499, 0xB49A,
    0xB49B, 0xB49C, 0xB49E, 0xB49F, 0xB4A0, 0xB4A1, 0xB4A2, 0xB4A3,
    0xB4A5, 0xB4A6, 0xB4A7, 0xB4A9, 0xB4AA, 0xB4AB, 0xB4AD, 0xB4AE,
    0xB4AF, 0xB4B0, 0xB4B1, 0xB4B2, 0xB4B3, 0xB4B4, 0xB4B6, 0xB4B8,
    0xB4BA, 0xB4BB, 0xB4BC, 0xB4BD, 0xB4BE, 0xB4BF, 0xB4C1, 0xB4C2,
    0xB4C3, 0xB4C5, 0xB4C6, 0xB4C7, 0xB4C9, 0xB4CA, 0xB4CB, 0xB4CC,
    0xB4CD, 0xB4CE, 0xB4CF, 0xB4D1, 0xB4D2, 0xB4D3, 0xB4D4, 0xB4D6,
    0xB4D7, 0xB4D8, 0xB4D9, 0xB4DA, 0xB4DB, 0xB4DE, 0xB4DF, 0xB4E1,
    0xB4E2, 0xB4E5, 0xB4E7, 0xB4E8, 0xB4E9, 0xB4EA, 0xB4EB, 0xB4EE,
    0xB4F0, 0xB4F2, 0xB4F3, 0xB4F4, 0xB4F5, 0xB4F6, 0xB4F7, 0xB4F9,
    0xB4FA, 0xB4FB, 0xB4FC, 0xB4FD, 0xB4FE, 0xB4FF, 0xB500, 0xB501,
    0xB502, 0xB503, 0xB504, 0xB505, 0xB506, 0xB507, 0xB508, 0xB509,
    0xB50A, 0xB50B, 0xB50C, 0xB50D, 0xB50E, 0xB50F, 0xB510, 0xB511,
    0xB512, 0xB513, 0xB516, 0xB517, 0xB519, 0xB51A, 0xB51D, 0xFFFF,
    0xFFFF, 0xB51E, 0xB51F, 0xB520, 0xB521, 0xB522, 0xB523, 0xB526,
    0xB52B, 0xB52C, 0xB52D, 0xB52E, 0xB52F, 0xB532, 0xB533, 0xB535,
    0xB536, 0xB537, 0xB539, 0xB53A, 0xB53B, 0xB53C, 0xB53D, 0xB53E,
    0xB53F, 0xB542, 0xB546, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB547, 0xB548, 0xB549, 0xB54A, 0xB54E, 0xB54F, 0xB551,
    0xB552, 0xB553, 0xB555, 0xB556, 0xB557, 0xB558, 0xB559, 0xB55A,
    0xB55B, 0xB55E, 0xB562, 0xB563, 0xB564, 0xB565, 0xB566, 0xB567,
    0xB568, 0xB569, 0xB56A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB56B, 0xB56C, 0xB56D, 0xB56E, 0xB56F, 0xB570, 0xB571,
    0xB572, 0xB573, 0xB574, 0xB575, 0xB576, 0xB577, 0xB578, 0xB579,
    0xB57A, 0xB57B, 0xB57C, 0xB57D, 0xB57E, 0xB57F, 0xB580, 0xB581,
    0xB582, 0xB583, 0xB584, 0xB585, 0xB586, 0xB587, 0xB588, 0xB589,
    0xB58A, 0xB58B, 0xB58C, 0xB58D, 0xB58E, 0xB58F, 0xB590, 0xB591,
    0xB592, 0xB593, 0xB594, 0xB595, 0xB596, 0xB597, 0xB598, 0xB599,
    0xB59A, 0xB59B, 0xB59C, 0xB59D, 0xB59E, 0xB59F, 0xB5A2, 0xB5A3,
    0xB5A5, 0xB5A6, 0xB5A7, 0xB5A9, 0xB5AC, 0xB5AD, 0xB5AE, 0xB5AF,
    0xB5B2, 0xB5B6, 0xB5B7, 0xB5B8, 0xB5B9, 0xB5BA, 0xB5BE, 0xB5BF,
    0xB5C1, 0xB5C2, 0xB5C3, 0xB5C5, 0xB5C6, 0xB5C7, 0xB5C8, 0xB5C9,
    0xB5CA, 0xB5CB, 0xB5CE, 0xB5D2, 0xB5D3, 0xB5D4, 0xB5D5, 0xB5D6,
    0xB5D7, 0xB5D9, 0xB5DA, 0xB5DB, 0xB5DC, 0xB5DD, 0xB5DE, 0xB5DF,
    0xB5E0, 0xB5E1, 0xB5E2, 0xB5E3, 0xB5E4, 0xB5E5, 0xB5E6, 0xB5E7,
    0xB5E8, 0xB5E9, 0xB5EA, 0xB5EB, 0xB5ED, 0xB5EE, 0xB5EF, 0xB5F0,
    0xB5F1, 0xB5F2, 0xB5F3, 0xB5F4, 0xB5F5, 0xB5F6, 0xB5F7, 0xB5F8,
    0xB5F9, 0xB5FA, 0xB5FB, 0xB5FC, 0xB5FD, 0xB5FE, 0xB5FF, 0xFFFF,
    0xFFFF, 0xB600, 0xB601, 0xB602, 0xB603, 0xB604, 0xB605, 0xB606,
    0xB607, 0xB608, 0xB609, 0xB60A, 0xB60B, 0xB60C, 0xB60D, 0xB60E,
    0xB60F, 0xB612, 0xB613, 0xB615, 0xB616, 0xB617, 0xB619, 0xB61A,
    0xB61B, 0xB61C, 0xB61D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB61E, 0xB61F, 0xB620, 0xB621, 0xB622, 0xB623, 0xB624,
    0xB626, 0xB627, 0xB628, 0xB629, 0xB62A, 0xB62B, 0xB62D, 0xB62E,
    0xB62F, 0xB630, 0xB631, 0xB632, 0xB633, 0xB635, 0xB636, 0xB637,
    0xB638, 0xB639, 0xB63A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB63B, 0xB63C, 0xB63D, 0xB63E, 0xB63F, 0xB640, 0xB641,
    0xB642, 0xB643, 0xB644, 0xB645, 0xB646, 0xB647, 0xB649, 0xB64A,
    0xB64B, 0xB64C, 0xB64D, 0xB64E, 0xB64F, 0xB650, 0xB651, 0xB652,
    0xB653, 0xB654, 0xB655, 0xB656, 0xB657, 0xB658, 0xB659, 0xB65A,
    0xB65B, 0xB65C, 0xB65D, 0xB65E, 0xB65F, 0xB660, 0xB661, 0xB662,
    0xB663, 0xB665, 0xB666, 0xB667, 0xB669, 0xB66A, 0xB66B, 0xB66C,
    0xB66D, 0xB66E, 0xB66F, 0xB670, 0xB671, 0xB672, 0xB673, 0xB674,
    0xB675, 0xB676, 0xB677, 0xB678, 0xB679, 0xB67A, 0xB67B, 0xB67C,
    0xB67D, 0xB67E, 0xB67F, 0xB680, 0xB681, 0xB682, 0xB683, 0xB684,
    0xB685, 0xB686, 0xB687, 0xB688, 0xB689, 0xB68A, 0xB68B, 0xB68C,
    0xB68D, 0xB68E, 0xB68F, 0xB690, 0xB691, 0xB692, 0xB693, 0xB694,
    0xB695, 0xB696, 0xB697, 0xB698, 0xB699, 0xB69A, 0xB69B, 0xB69E,
    0xB69F, 0xB6A1, 0xB6A2, 0xB6A3, 0xB6A5, 0xB6A6, 0xB6A7, 0xB6A8,
    0xB6A9, 0xB6AA, 0xB6AD, 0xB6AE, 0xB6AF, 0xB6B0, 0xB6B2, 0xB6B3,
    0xB6B4, 0xB6B5, 0xB6B6, 0xB6B7, 0xB6B8, 0xB6B9, 0xB6BA, 0xB6BB,
    0xB6BC, 0xB6BD, 0xB6BE, 0xB6BF, 0xB6C0, 0xB6C1, 0xB6C2, 0xFFFF,
    0xFFFF, 0xB6C3, 0xB6C4, 0xB6C5, 0xB6C6, 0xB6C7, 0xB6C8, 0xB6C9,
    0xB6CA, 0xB6CB, 0xB6CC, 0xB6CD, 0xB6CE, 0xB6CF, 0xB6D0, 0xB6D1,
    0xB6D2, 0xB6D3, 0xB6D5, 0xB6D6, 0xB6D7, 0xB6D8, 0xB6D9, 0xB6DA,
    0xB6DB, 0xB6DC, 0xB6DD, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB6DE, 0xB6DF, 0xB6E0, 0xB6E1, 0xB6E2, 0xB6E3, 0xB6E4,
    0xB6E5, 0xB6E6, 0xB6E7, 0xB6E8, 0xB6E9, 0xB6EA, 0xB6EB, 0xB6EC,
    0xB6ED, 0xB6EE, 0xB6EF, 0xB6F1, 0xB6F2, 0xB6F3, 0xB6F5, 0xB6F6,
    0xB6F7, 0xB6F9, 0xB6FA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB6FB, 0xB6FC, 0xB6FD, 0xB6FE, 0xB6FF, 0xB702, 0xB703,
    0xB704, 0xB706, 0xB707, 0xB708, 0xB709, 0xB70A, 0xB70B, 0xB70C,
    0xB70D, 0xB70E, 0xB70F, 0xB710, 0xB711, 0xB712, 0xB713, 0xB714,
    0xB715, 0xB716, 0xB717, 0xB718, 0xB719, 0xB71A, 0xB71B, 0xB71C,
    0xB71D, 0xB71E, 0xB71F, 0xB720, 0xB721, 0xB722, 0xB723, 0xB724,
    0xB725, 0xB726, 0xB727, 0xB72A, 0xB72B, 0xB72D, 0xB72E, 0xB731,
    0xB732, 0xB733, 0xB734, 0xB735, 0xB736, 0xB737, 0xB73A, 0xB73C,
    0xB73D, 0xB73E, 0xB73F, 0xB740, 0xB741, 0xB742, 0xB743, 0xB745,
    0xB746, 0xB747, 0xB749, 0xB74A, 0xB74B, 0xB74D, 0xB74E, 0xB74F,
    0xB750, 0xB751, 0xB752, 0xB753, 0xB756, 0xB757, 0xB758, 0xB759,
    0xB75A, 0xB75B, 0xB75C, 0xB75D, 0xB75E, 0xB75F, 0xB761, 0xB762,
    0xB763, 0xB765, 0xB766, 0xB767, 0xB769, 0xB76A, 0xB76B, 0xB76C,
    0xB76D, 0xB76E, 0xB76F, 0xB772, 0xB774, 0xB776, 0xB777, 0xB778,
    0xB779, 0xB77A, 0xB77B, 0xB77E, 0xB77F, 0xB781, 0xB782, 0xB783,
    0xB785, 0xB786, 0xB787, 0xB788, 0xB789, 0xB78A, 0xB78B, 0xB78E,
    0xB793, 0xB794, 0xB795, 0xB79A, 0xB79B, 0xB79D, 0xB79E, 0xFFFF,
    0xFFFF, 0xB79F, 0xB7A1, 0xB7A2, 0xB7A3, 0xB7A4, 0xB7A5, 0xB7A6,
    0xB7A7, 0xB7AA, 0xB7AE, 0xB7AF, 0xB7B0, 0xB7B1, 0xB7B2, 0xB7B3,
    0xB7B6, 0xB7B7, 0xB7B9, 0xB7BA, 0xB7BB, 0xB7BC, 0xB7BD, 0xB7BE,
    0xB7BF, 0xB7C0, 0xB7C1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB7C2, 0xB7C3, 0xB7C4, 0xB7C5, 0xB7C6, 0xB7C8, 0xB7CA,
    0xB7CB, 0xB7CC, 0xB7CD, 0xB7CE, 0xB7CF, 0xB7D0, 0xB7D1, 0xB7D2,
    0xB7D3, 0xB7D4, 0xB7D5, 0xB7D6, 0xB7D7, 0xB7D8, 0xB7D9, 0xB7DA,
    0xB7DB, 0xB7DC, 0xB7DD, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB7DE, 0xB7DF, 0xB7E0, 0xB7E1, 0xB7E2, 0xB7E3, 0xB7E4,
    0xB7E5, 0xB7E6, 0xB7E7, 0xB7E8, 0xB7E9, 0xB7EA, 0xB7EB, 0xB7EE,
    0xB7EF, 0xB7F1, 0xB7F2, 0xB7F3, 0xB7F5, 0xB7F6, 0xB7F7, 0xB7F8,
    0xB7F9, 0xB7FA, 0xB7FB, 0xB7FE, 0xB802, 0xB803, 0xB804, 0xB805,
    0xB806, 0xB80A, 0xB80B, 0xB80D, 0xB80E, 0xB80F, 0xB811, 0xB812,
    0xB813, 0xB814, 0xB815, 0xB816, 0xB817, 0xB81A, 0xB81C, 0xB81E,
    0xB81F, 0xB820, 0xB821, 0xB822, 0xB823, 0xB826, 0xB827, 0xB829,
    0xB82A, 0xB82B, 0xB82D, 0xB82E, 0xB82F, 0xB830, 0xB831, 0xB832,
    0xB833, 0xB836, 0xB83A, 0xB83B, 0xB83C, 0xB83D, 0xB83E, 0xB83F,
    0xB841, 0xB842, 0xB843, 0xB845, 0xB846, 0xB847, 0xB848, 0xB849,
    0xB84A, 0xB84B, 0xB84C, 0xB84D, 0xB84E, 0xB84F, 0xB850, 0xB852,
    0xB854, 0xB855, 0xB856, 0xB857, 0xB858, 0xB859, 0xB85A, 0xB85B,
    0xB85E, 0xB85F, 0xB861, 0xB862, 0xB863, 0xB865, 0xB866, 0xB867,
    0xB868, 0xB869, 0xB86A, 0xB86B, 0xB86E, 0xB870, 0xB872, 0xB873,
    0xB874, 0xB875, 0xB876, 0xB877, 0xB879, 0xB87A, 0xB87B, 0xB87D,
    0xB87E, 0xB87F, 0xB880, 0xB881, 0xB882, 0xB883, 0xB884, 0xFFFF,
    0xFFFF, 0xB885, 0xB886, 0xB887, 0xB888, 0xB889, 0xB88A, 0xB88B,
    0xB88C, 0xB88E, 0xB88F, 0xB890, 0xB891, 0xB892, 0xB893, 0xB894,
    0xB895, 0xB896, 0xB897, 0xB898, 0xB899, 0xB89A, 0xB89B, 0xB89C,
    0xB89D, 0xB89E, 0xB89F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB8A0, 0xB8A1, 0xB8A2, 0xB8A3, 0xB8A4, 0xB8A5, 0xB8A6,
    0xB8A7, 0xB8A9, 0xB8AA, 0xB8AB, 0xB8AC, 0xB8AD, 0xB8AE, 0xB8AF,
    0xB8B1, 0xB8B2, 0xB8B3, 0xB8B5, 0xB8B6, 0xB8B7, 0xB8B9, 0xB8BA,
    0xB8BB, 0xB8BC, 0xB8BD, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB8BE, 0xB8BF, 0xB8C2, 0xB8C4, 0xB8C6, 0xB8C7, 0xB8C8,
    0xB8C9, 0xB8CA, 0xB8CB, 0xB8CD, 0xB8CE, 0xB8CF, 0xB8D1, 0xB8D2,
    0xB8D3, 0xB8D5, 0xB8D6, 0xB8D7, 0xB8D8, 0xB8D9, 0xB8DA, 0xB8DB,
    0xB8DC, 0xB8DE, 0xB8E0, 0xB8E2, 0xB8E3, 0xB8E4, 0xB8E5, 0xB8E6,
    0xB8E7, 0xB8EA, 0xB8EB, 0xB8ED, 0xB8EE, 0xB8EF, 0xB8F1, 0xB8F2,
    0xB8F3, 0xB8F4, 0xB8F5, 0xB8F6, 0xB8F7, 0xB8FA, 0xB8FC, 0xB8FE,
    0xB8FF, 0xB900, 0xB901, 0xB902, 0xB903, 0xB905, 0xB906, 0xB907,
    0xB908, 0xB909, 0xB90A, 0xB90B, 0xB90C, 0xB90D, 0xB90E, 0xB90F,
    0xB910, 0xB911, 0xB912, 0xB913, 0xB914, 0xB915, 0xB916, 0xB917,
    0xB919, 0xB91A, 0xB91B, 0xB91C, 0xB91D, 0xB91E, 0xB91F, 0xB921,
    0xB922, 0xB923, 0xB924, 0xB925, 0xB926, 0xB927, 0xB928, 0xB929,
    0xB92A, 0xB92B, 0xB92C, 0xB92D, 0xB92E, 0xB92F, 0xB930, 0xB931,
    0xB932, 0xB933, 0xB934, 0xB935, 0xB936, 0xB937, 0xB938, 0xB939,
    0xB93A, 0xB93B, 0xB93E, 0xB93F, 0xB941, 0xB942, 0xB943, 0xB945,
    0xB946, 0xB947, 0xB948, 0xB949, 0xB94A, 0xB94B, 0xB94D, 0xB94E,
    0xB950, 0xB952, 0xB953, 0xB954, 0xB955, 0xB956, 0xB957, 0xFFFF,
    0xFFFF, 0xB95A, 0xB95B, 0xB95D, 0xB95E, 0xB95F, 0xB961, 0xB962,
    0xB963, 0xB964, 0xB965, 0xB966, 0xB967, 0xB96A, 0xB96C, 0xB96E,
    0xB96F, 0xB970, 0xB971, 0xB972, 0xB973, 0xB976, 0xB977, 0xB979,
    0xB97A, 0xB97B, 0xB97D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB97E, 0xB97F, 0xB980, 0xB981, 0xB982, 0xB983, 0xB986,
    0xB988, 0xB98B, 0xB98C, 0xB98F, 0xB990, 0xB991, 0xB992, 0xB993,
    0xB994, 0xB995, 0xB996, 0xB997, 0xB998, 0xB999, 0xB99A, 0xB99B,
    0xB99C, 0xB99D, 0xB99E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xB99F, 0xB9A0, 0xB9A1, 0xB9A2, 0xB9A3, 0xB9A4, 0xB9A5,
    0xB9A6, 0xB9A7, 0xB9A8, 0xB9A9, 0xB9AA, 0xB9AB, 0xB9AE, 0xB9AF,
    0xB9B1, 0xB9B2, 0xB9B3, 0xB9B5, 0xB9B6, 0xB9B7, 0xB9B8, 0xB9B9,
    0xB9BA, 0xB9BB, 0xB9BE, 0xB9C0, 0xB9C2, 0xB9C3, 0xB9C4, 0xB9C5,
    0xB9C6, 0xB9C7, 0xB9CA, 0xB9CB, 0xB9CD, 0xB9D3, 0xB9D4, 0xB9D5,
    0xB9D6, 0xB9D7, 0xB9DA, 0xB9DC, 0xB9DF, 0xB9E0, 0xB9E2, 0xB9E6,
    0xB9E7, 0xB9E9, 0xB9EA, 0xB9EB, 0xB9ED, 0xB9EE, 0xB9EF, 0xB9F0,
    0xB9F1, 0xB9F2, 0xB9F3, 0xB9F6, 0xB9FB, 0xB9FC, 0xB9FD, 0xB9FE,
    0xB9FF, 0xBA02, 0xBA03, 0xBA04, 0xBA05, 0xBA06, 0xBA07, 0xBA09,
    0xBA0A, 0xBA0B, 0xBA0C, 0xBA0D, 0xBA0E, 0xBA0F, 0xBA10, 0xBA11,
    0xBA12, 0xBA13, 0xBA14, 0xBA16, 0xBA17, 0xBA18, 0xBA19, 0xBA1A,
    0xBA1B, 0xBA1C, 0xBA1D, 0xBA1E, 0xBA1F, 0xBA20, 0xBA21, 0xBA22,
    0xBA23, 0xBA24, 0xBA25, 0xBA26, 0xBA27, 0xBA28, 0xBA29, 0xBA2A,
    0xBA2B, 0xBA2C, 0xBA2D, 0xBA2E, 0xBA2F, 0xBA30, 0xBA31, 0xBA32,
    0xBA33, 0xBA34, 0xBA35, 0xBA36, 0xBA37, 0xBA3A, 0xBA3B, 0xBA3D,
    0xBA3E, 0xBA3F, 0xBA41, 0xBA43, 0xBA44, 0xBA45, 0xBA46, 0xFFFF,
    0xFFFF, 0xBA47, 0xBA4A, 0xBA4C, 0xBA4F, 0xBA50, 0xBA51, 0xBA52,
    0xBA56, 0xBA57, 0xBA59, 0xBA5A, 0xBA5B, 0xBA5D, 0xBA5E, 0xBA5F,
    0xBA60, 0xBA61, 0xBA62, 0xBA63, 0xBA66, 0xBA6A, 0xBA6B, 0xBA6C,
    0xBA6D, 0xBA6E, 0xBA6F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBA72, 0xBA73, 0xBA75, 0xBA76, 0xBA77, 0xBA79, 0xBA7A,
    0xBA7B, 0xBA7C, 0xBA7D, 0xBA7E, 0xBA7F, 0xBA80, 0xBA81, 0xBA82,
    0xBA86, 0xBA88, 0xBA89, 0xBA8A, 0xBA8B, 0xBA8D, 0xBA8E, 0xBA8F,
    0xBA90, 0xBA91, 0xBA92, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBA93, 0xBA94, 0xBA95, 0xBA96, 0xBA97, 0xBA98, 0xBA99,
    0xBA9A, 0xBA9B, 0xBA9C, 0xBA9D, 0xBA9E, 0xBA9F, 0xBAA0, 0xBAA1,
    0xBAA2, 0xBAA3, 0xBAA4, 0xBAA5, 0xBAA6, 0xBAA7, 0xBAAA, 0xBAAD,
    0xBAAE, 0xBAAF, 0xBAB1, 0xBAB3, 0xBAB4, 0xBAB5, 0xBAB6, 0xBAB7,
    0xBABA, 0xBABC, 0xBABE, 0xBABF, 0xBAC0, 0xBAC1, 0xBAC2, 0xBAC3,
    0xBAC5, 0xBAC6, 0xBAC7, 0xBAC9, 0xBACA, 0xBACB, 0xBACC, 0xBACD,
    0xBACE, 0xBACF, 0xBAD0, 0xBAD1, 0xBAD2, 0xBAD3, 0xBAD4, 0xBAD5,
    0xBAD6, 0xBAD7, 0xBADA, 0xBADB, 0xBADC, 0xBADD, 0xBADE, 0xBADF,
    0xBAE0, 0xBAE1, 0xBAE2, 0xBAE3, 0xBAE4, 0xBAE5, 0xBAE6, 0xBAE7,
    0xBAE8, 0xBAE9, 0xBAEA, 0xBAEB, 0xBAEC, 0xBAED, 0xBAEE, 0xBAEF,
    0xBAF0, 0xBAF1, 0xBAF2, 0xBAF3, 0xBAF4, 0xBAF5, 0xBAF6, 0xBAF7,
    0xBAF8, 0xBAF9, 0xBAFA, 0xBAFB, 0xBAFD, 0xBAFE, 0xBAFF, 0xBB01,
    0xBB02, 0xBB03, 0xBB05, 0xBB06, 0xBB07, 0xBB08, 0xBB09, 0xBB0A,
    0xBB0B, 0xBB0C, 0xBB0E, 0xBB10, 0xBB12, 0xBB13, 0xBB14, 0xBB15,
    0xBB16, 0xBB17, 0xBB19, 0xBB1A, 0xBB1B, 0xBB1D, 0xBB1E, 0xBB1F,
    0xBB21, 0xBB22, 0xBB23, 0xBB24, 0xBB25, 0xBB26, 0xBB27, 0xFFFF,
    0xFFFF, 0xBB28, 0xBB2A, 0xBB2C, 0xBB2D, 0xBB2E, 0xBB2F, 0xBB30,
    0xBB31, 0xBB32, 0xBB33, 0xBB37, 0xBB39, 0xBB3A, 0xBB3F, 0xBB40,
    0xBB41, 0xBB42, 0xBB43, 0xBB46, 0xBB48, 0xBB4A, 0xBB4B, 0xBB4C,
    0xBB4E, 0xBB51, 0xBB52, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBB53, 0xBB55, 0xBB56, 0xBB57, 0xBB59, 0xBB5A, 0xBB5B,
    0xBB5C, 0xBB5D, 0xBB5E, 0xBB5F, 0xBB60, 0xBB62, 0xBB64, 0xBB65,
    0xBB66, 0xBB67, 0xBB68, 0xBB69, 0xBB6A, 0xBB6B, 0xBB6D, 0xBB6E,
    0xBB6F, 0xBB70, 0xBB71, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBB72, 0xBB73, 0xBB74, 0xBB75, 0xBB76, 0xBB77, 0xBB78,
    0xBB79, 0xBB7A, 0xBB7B, 0xBB7C, 0xBB7D, 0xBB7E, 0xBB7F, 0xBB80,
    0xBB81, 0xBB82, 0xBB83, 0xBB84, 0xBB85, 0xBB86, 0xBB87, 0xBB89,
    0xBB8A, 0xBB8B, 0xBB8D, 0xBB8E, 0xBB8F, 0xBB91, 0xBB92, 0xBB93,
    0xBB94, 0xBB95, 0xBB96, 0xBB97, 0xBB98, 0xBB99, 0xBB9A, 0xBB9B,
    0xBB9C, 0xBB9D, 0xBB9E, 0xBB9F, 0xBBA0, 0xBBA1, 0xBBA2, 0xBBA3,
    0xBBA5, 0xBBA6, 0xBBA7, 0xBBA9, 0xBBAA, 0xBBAB, 0xBBAD, 0xBBAE,
    0xBBAF, 0xBBB0, 0xBBB1, 0xBBB2, 0xBBB3, 0xBBB5, 0xBBB6, 0xBBB8,
    0xBBB9, 0xBBBA, 0xBBBB, 0xBBBC, 0xBBBD, 0xBBBE, 0xBBBF, 0xBBC1,
    0xBBC2, 0xBBC3, 0xBBC5, 0xBBC6, 0xBBC7, 0xBBC9, 0xBBCA, 0xBBCB,
    0xBBCC, 0xBBCD, 0xBBCE, 0xBBCF, 0xBBD1, 0xBBD2, 0xBBD4, 0xBBD5,
    0xBBD6, 0xBBD7, 0xBBD8, 0xBBD9, 0xBBDA, 0xBBDB, 0xBBDC, 0xBBDD,
    0xBBDE, 0xBBDF, 0xBBE0, 0xBBE1, 0xBBE2, 0xBBE3, 0xBBE4, 0xBBE5,
    0xBBE6, 0xBBE7, 0xBBE8, 0xBBE9, 0xBBEA, 0xBBEB, 0xBBEC, 0xBBED,
    0xBBEE, 0xBBEF, 0xBBF0, 0xBBF1, 0xBBF2, 0xBBF3, 0xBBF4, 0xBBF5,
    0xBBF6, 0xBBF7, 0xBBFA, 0xBBFB, 0xBBFD, 0xBBFE, 0xBC01, 0xFFFF,
    0xFFFF, 0xBC03, 0xBC04, 0xBC05, 0xBC06, 0xBC07, 0xBC0A, 0xBC0E,
    0xBC10, 0xBC12, 0xBC13, 0xBC19, 0xBC1A, 0xBC20, 0xBC21, 0xBC22,
    0xBC23, 0xBC26, 0xBC28, 0xBC2A, 0xBC2B, 0xBC2C, 0xBC2E, 0xBC2F,
    0xBC32, 0xBC33, 0xBC35, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBC36, 0xBC37, 0xBC39, 0xBC3A, 0xBC3B, 0xBC3C, 0xBC3D,
    0xBC3E, 0xBC3F, 0xBC42, 0xBC46, 0xBC47, 0xBC48, 0xBC4A, 0xBC4B,
    0xBC4E, 0xBC4F, 0xBC51, 0xBC52, 0xBC53, 0xBC54, 0xBC55, 0xBC56,
    0xBC57, 0xBC58, 0xBC59, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBC5A, 0xBC5B, 0xBC5C, 0xBC5E, 0xBC5F, 0xBC60, 0xBC61,
    0xBC62, 0xBC63, 0xBC64, 0xBC65, 0xBC66, 0xBC67, 0xBC68, 0xBC69,
    0xBC6A, 0xBC6B, 0xBC6C, 0xBC6D, 0xBC6E, 0xBC6F, 0xBC70, 0xBC71,
    0xBC72, 0xBC73, 0xBC74, 0xBC75, 0xBC76, 0xBC77, 0xBC78, 0xBC79,
    0xBC7A, 0xBC7B, 0xBC7C, 0xBC7D, 0xBC7E, 0xBC7F, 0xBC80, 0xBC81,
    0xBC82, 0xBC83, 0xBC86, 0xBC87, 0xBC89, 0xBC8A, 0xBC8D, 0xBC8F,
    0xBC90, 0xBC91, 0xBC92, 0xBC93, 0xBC96, 0xBC98, 0xBC9B, 0xBC9C,
    0xBC9D, 0xBC9E, 0xBC9F, 0xBCA2, 0xBCA3, 0xBCA5, 0xBCA6, 0xBCA9,
    0xBCAA, 0xBCAB, 0xBCAC, 0xBCAD, 0xBCAE, 0xBCAF, 0xBCB2, 0xBCB6,
    0xBCB7, 0xBCB8, 0xBCB9, 0xBCBA, 0xBCBB, 0xBCBE, 0xBCBF, 0xBCC1,
    0xBCC2, 0xBCC3, 0xBCC5, 0xBCC6, 0xBCC7, 0xBCC8, 0xBCC9, 0xBCCA,
    0xBCCB, 0xBCCC, 0xBCCE, 0xBCD2, 0xBCD3, 0xBCD4, 0xBCD6, 0xBCD7,
    0xBCD9, 0xBCDA, 0xBCDB, 0xBCDD, 0xBCDE, 0xBCDF, 0xBCE0, 0xBCE1,
    0xBCE2, 0xBCE3, 0xBCE4, 0xBCE5, 0xBCE6, 0xBCE7, 0xBCE8, 0xBCE9,
    0xBCEA, 0xBCEB, 0xBCEC, 0xBCED, 0xBCEE, 0xBCEF, 0xBCF0, 0xBCF1,
    0xBCF2, 0xBCF3, 0xBCF7, 0xBCF9, 0xBCFA, 0xBCFB, 0xBCFD, 0xFFFF,
    0xFFFF, 0xBCFE, 0xBCFF, 0xBD00, 0xBD01, 0xBD02, 0xBD03, 0xBD06,
    0xBD08, 0xBD0A, 0xBD0B, 0xBD0C, 0xBD0D, 0xBD0E, 0xBD0F, 0xBD11,
    0xBD12, 0xBD13, 0xBD15, 0xBD16, 0xBD17, 0xBD18, 0xBD19, 0xBD1A,
    0xBD1B, 0xBD1C, 0xBD1D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBD1E, 0xBD1F, 0xBD20, 0xBD21, 0xBD22, 0xBD23, 0xBD25,
    0xBD26, 0xBD27, 0xBD28, 0xBD29, 0xBD2A, 0xBD2B, 0xBD2D, 0xBD2E,
    0xBD2F, 0xBD30, 0xBD31, 0xBD32, 0xBD33, 0xBD34, 0xBD35, 0xBD36,
    0xBD37, 0xBD38, 0xBD39, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBD3A, 0xBD3B, 0xBD3C, 0xBD3D, 0xBD3E, 0xBD3F, 0xBD41,
    0xBD42, 0xBD43, 0xBD44, 0xBD45, 0xBD46, 0xBD47, 0xBD4A, 0xBD4B,
    0xBD4D, 0xBD4E, 0xBD4F, 0xBD51, 0xBD52, 0xBD53, 0xBD54, 0xBD55,
    0xBD56, 0xBD57, 0xBD5A, 0xBD5B, 0xBD5C, 0xBD5D, 0xBD5E, 0xBD5F,
    0xBD60, 0xBD61, 0xBD62, 0xBD63, 0xBD65, 0xBD66, 0xBD67, 0xBD69,
    0xBD6A, 0xBD6B, 0xBD6C, 0xBD6D, 0xBD6E, 0xBD6F, 0xBD70, 0xBD71,
    0xBD72, 0xBD73, 0xBD74, 0xBD75, 0xBD76, 0xBD77, 0xBD78, 0xBD79,
    0xBD7A, 0xBD7B, 0xBD7C, 0xBD7D, 0xBD7E, 0xBD7F, 0xBD82, 0xBD83,
    0xBD85, 0xBD86, 0xBD8B, 0xBD8C, 0xBD8D, 0xBD8E, 0xBD8F, 0xBD92,
    0xBD94, 0xBD96, 0xBD97, 0xBD98, 0xBD9B, 0xBD9D, 0xBD9E, 0xBD9F,
    0xBDA0, 0xBDA1, 0xBDA2, 0xBDA3, 0xBDA5, 0xBDA6, 0xBDA7, 0xBDA8,
    0xBDA9, 0xBDAA, 0xBDAB, 0xBDAC, 0xBDAD, 0xBDAE, 0xBDAF, 0xBDB1,
    0xBDB2, 0xBDB3, 0xBDB4, 0xBDB5, 0xBDB6, 0xBDB7, 0xBDB9, 0xBDBA,
    0xBDBB, 0xBDBC, 0xBDBD, 0xBDBE, 0xBDBF, 0xBDC0, 0xBDC1, 0xBDC2,
    0xBDC3, 0xBDC4, 0xBDC5, 0xBDC6, 0xBDC7, 0xBDC8, 0xBDC9, 0xBDCA,
    0xBDCB, 0xBDCC, 0xBDCD, 0xBDCE, 0xBDCF, 0xBDD0, 0xBDD1, 0xFFFF,
    0xFFFF, 0xBDD2, 0xBDD3, 0xBDD6, 0xBDD7, 0xBDD9, 0xBDDA, 0xBDDB,
    0xBDDD, 0xBDDE, 0xBDDF, 0xBDE0, 0xBDE1, 0xBDE2, 0xBDE3, 0xBDE4,
    0xBDE5, 0xBDE6, 0xBDE7, 0xBDE8, 0xBDEA, 0xBDEB, 0xBDEC, 0xBDED,
    0xBDEE, 0xBDEF, 0xBDF1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBDF2, 0xBDF3, 0xBDF5, 0xBDF6, 0xBDF7, 0xBDF9, 0xBDFA,
    0xBDFB, 0xBDFC, 0xBDFD, 0xBDFE, 0xBDFF, 0xBE01, 0xBE02, 0xBE04,
    0xBE06, 0xBE07, 0xBE08, 0xBE09, 0xBE0A, 0xBE0B, 0xBE0E, 0xBE0F,
    0xBE11, 0xBE12, 0xBE13, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBE15, 0xBE16, 0xBE17, 0xBE18, 0xBE19, 0xBE1A, 0xBE1B,
    0xBE1E, 0xBE20, 0xBE21, 0xBE22, 0xBE23, 0xBE24, 0xBE25, 0xBE26,
    0xBE27, 0xBE28, 0xBE29, 0xBE2A, 0xBE2B, 0xBE2C, 0xBE2D, 0xBE2E,
    0xBE2F, 0xBE30, 0xBE31, 0xBE32, 0xBE33, 0xBE34, 0xBE35, 0xBE36,
    0xBE37, 0xBE38, 0xBE39, 0xBE3A, 0xBE3B, 0xBE3C, 0xBE3D, 0xBE3E,
    0xBE3F, 0xBE40, 0xBE41, 0xBE42, 0xBE43, 0xBE46, 0xBE47, 0xBE49,
    0xBE4A, 0xBE4B, 0xBE4D, 0xBE4F, 0xBE50, 0xBE51, 0xBE52, 0xBE53,
    0xBE56, 0xBE58, 0xBE5C, 0xBE5D, 0xBE5E, 0xBE5F, 0xBE62, 0xBE63,
    0xBE65, 0xBE66, 0xBE67, 0xBE69, 0xBE6B, 0xBE6C, 0xBE6D, 0xBE6E,
    0xBE6F, 0xBE72, 0xBE76, 0xBE77, 0xBE78, 0xBE79, 0xBE7A, 0xBE7E,
    0xBE7F, 0xBE81, 0xBE82, 0xBE83, 0xBE85, 0xBE86, 0xBE87, 0xBE88,
    0xBE89, 0xBE8A, 0xBE8B, 0xBE8E, 0xBE92, 0xBE93, 0xBE94, 0xBE95,
    0xBE96, 0xBE97, 0xBE9A, 0xBE9B, 0xBE9C, 0xBE9D, 0xBE9E, 0xBE9F,
    0xBEA0, 0xBEA1, 0xBEA2, 0xBEA3, 0xBEA4, 0xBEA5, 0xBEA6, 0xBEA7,
    0xBEA9, 0xBEAA, 0xBEAB, 0xBEAC, 0xBEAD, 0xBEAE, 0xBEAF, 0xBEB0,
    0xBEB1, 0xBEB2, 0xBEB3, 0xBEB4, 0xBEB5, 0xBEB6, 0xBEB7, 0xFFFF,
    0xFFFF, 0xBEB8, 0xBEB9, 0xBEBA, 0xBEBB, 0xBEBC, 0xBEBD, 0xBEBE,
    0xBEBF, 0xBEC0, 0xBEC1, 0xBEC2, 0xBEC3, 0xBEC4, 0xBEC5, 0xBEC6,
    0xBEC7, 0xBEC8, 0xBEC9, 0xBECA, 0xBECB, 0xBECC, 0xBECD, 0xBECE,
    0xBECF, 0xBED2, 0xBED3, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBED5, 0xBED6, 0xBED9, 0xBEDA, 0xBEDB, 0xBEDC, 0xBEDD,
    0xBEDE, 0xBEDF, 0xBEE1, 0xBEE2, 0xBEE6, 0xBEE7, 0xBEE8, 0xBEE9,
    0xBEEA, 0xBEEB, 0xBEED, 0xBEEE, 0xBEEF, 0xBEF0, 0xBEF1, 0xBEF2,
    0xBEF3, 0xBEF4, 0xBEF5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBEF6, 0xBEF7, 0xBEF8, 0xBEF9, 0xBEFA, 0xBEFB, 0xBEFC,
    0xBEFD, 0xBEFE, 0xBEFF, 0xBF00, 0xBF02, 0xBF03, 0xBF04, 0xBF05,
    0xBF06, 0xBF07, 0xBF0A, 0xBF0B, 0xBF0C, 0xBF0D, 0xBF0E, 0xBF0F,
    0xBF10, 0xBF11, 0xBF12, 0xBF13, 0xBF14, 0xBF15, 0xBF16, 0xBF17,
    0xBF1A, 0xBF1E, 0xBF1F, 0xBF20, 0xBF21, 0xBF22, 0xBF23, 0xBF24,
    0xBF25, 0xBF26, 0xBF27, 0xBF28, 0xBF29, 0xBF2A, 0xBF2B, 0xBF2C,
    0xBF2D, 0xBF2E, 0xBF2F, 0xBF30, 0xBF31, 0xBF32, 0xBF33, 0xBF34,
    0xBF35, 0xBF36, 0xBF37, 0xBF38, 0xBF39, 0xBF3A, 0xBF3B, 0xBF3C,
    0xBF3D, 0xBF3E, 0xBF3F, 0xBF42, 0xBF43, 0xBF45, 0xBF46, 0xBF47,
    0xBF49, 0xBF4A, 0xBF4B, 0xBF4C, 0xBF4D, 0xBF4E, 0xBF4F, 0xBF52,
    0xBF53, 0xBF54, 0xBF56, 0xBF57, 0xBF58, 0xBF59, 0xBF5A, 0xBF5B,
    0xBF5C, 0xBF5D, 0xBF5E, 0xBF5F, 0xBF60, 0xBF61, 0xBF62, 0xBF63,
    0xBF64, 0xBF65, 0xBF66, 0xBF67, 0xBF68, 0xBF69, 0xBF6A, 0xBF6B,
    0xBF6C, 0xBF6D, 0xBF6E, 0xBF6F, 0xBF70, 0xBF71, 0xBF72, 0xBF73,
    0xBF74, 0xBF75, 0xBF76, 0xBF77, 0xBF78, 0xBF79, 0xBF7A, 0xBF7B,
    0xBF7C, 0xBF7D, 0xBF7E, 0xBF7F, 0xBF80, 0xBF81, 0xBF82, 0xFFFF,
    0xFFFF, 0xBF83, 0xBF84, 0xBF85, 0xBF86, 0xBF87, 0xBF88, 0xBF89,
    0xBF8A, 0xBF8B, 0xBF8C, 0xBF8D, 0xBF8E, 0xBF8F, 0xBF90, 0xBF91,
    0xBF92, 0xBF93, 0xBF95, 0xBF96, 0xBF97, 0xBF98, 0xBF99, 0xBF9A,
    0xBF9B, 0xBF9C, 0xBF9D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBF9E, 0xBF9F, 0xBFA0, 0xBFA1, 0xBFA2, 0xBFA3, 0xBFA4,
    0xBFA5, 0xBFA6, 0xBFA7, 0xBFA8, 0xBFA9, 0xBFAA, 0xBFAB, 0xBFAC,
    0xBFAD, 0xBFAE, 0xBFAF, 0xBFB1, 0xBFB2, 0xBFB3, 0xBFB4, 0xBFB5,
    0xBFB6, 0xBFB7, 0xBFB8, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xBFB9, 0xBFBA, 0xBFBB, 0xBFBC, 0xBFBD, 0xBFBE, 0xBFBF,
    0xBFC0, 0xBFC1, 0xBFC2, 0xBFC3, 0xBFC4, 0xBFC6, 0xBFC7, 0xBFC8,
    0xBFC9, 0xBFCA, 0xBFCB, 0xBFCE, 0xBFCF, 0xBFD1, 0xBFD2, 0xBFD3,
    0xBFD5, 0xBFD6, 0xBFD7, 0xBFD8, 0xBFD9, 0xBFDA, 0xBFDB, 0xBFDD,
    0xBFDE, 0xBFE0, 0xBFE2, 0xBFE3, 0xBFE4, 0xBFE5, 0xBFE6, 0xBFE7,
    0xBFE8, 0xBFE9, 0xBFEA, 0xBFEB, 0xBFEC, 0xBFED, 0xBFEE, 0xBFEF,
    0xBFF0, 0xBFF1, 0xBFF2, 0xBFF3, 0xBFF4, 0xBFF5, 0xBFF6, 0xBFF7,
    0xBFF8, 0xBFF9, 0xBFFA, 0xBFFB, 0xBFFC, 0xBFFD, 0xBFFE, 0xBFFF,
    0xC000, 0xC001, 0xC002, 0xC003, 0xC004, 0xC005, 0xC006, 0xC007,
    0xC008, 0xC009, 0xC00A, 0xC00B, 0xC00C, 0xC00D, 0xC00E, 0xC00F,
    0xC010, 0xC011, 0xC012, 0xC013, 0xC014, 0xC015, 0xC016, 0xC017,
    0xC018, 0xC019, 0xC01A, 0xC01B, 0xC01C, 0xC01D, 0xC01E, 0xC01F,
    0xC020, 0xC021, 0xC022, 0xC023, 0xC024, 0xC025, 0xC026, 0xC027,
    0xC028, 0xC029, 0xC02A, 0xC02B, 0xC02C, 0xC02D, 0xC02E, 0xC02F,
    0xC030, 0xC031, 0xC032, 0xC033, 0xC034, 0xC035, 0xC036, 0xC037,
    0xC038, 0xC039, 0xC03A, 0xC03B, 0xC03D, 0xC03E, 0xC03F, 0xFFFF,
    0xFFFF, 0xC040, 0xC041, 0xC042, 0xC043, 0xC044, 0xC045, 0xC046,
    0xC047, 0xC048, 0xC049, 0xC04A, 0xC04B, 0xC04C, 0xC04D, 0xC04E,
    0xC04F, 0xC050, 0xC052, 0xC053, 0xC054, 0xC055, 0xC056, 0xC057,
    0xC059, 0xC05A, 0xC05B, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC05D, 0xC05E, 0xC05F, 0xC061, 0xC062, 0xC063, 0xC064,
    0xC065, 0xC066, 0xC067, 0xC06A, 0xC06B, 0xC06C, 0xC06D, 0xC06E,
    0xC06F, 0xC070, 0xC071, 0xC072, 0xC073, 0xC074, 0xC075, 0xC076,
    0xC077, 0xC078, 0xC079, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC07A, 0xC07B, 0xC07C, 0xC07D, 0xC07E, 0xC07F, 0xC080,
    0xC081, 0xC082, 0xC083, 0xC084, 0xC085, 0xC086, 0xC087, 0xC088,
    0xC089, 0xC08A, 0xC08B, 0xC08C, 0xC08D, 0xC08E, 0xC08F, 0xC092,
    0xC093, 0xC095, 0xC096, 0xC097, 0xC099, 0xC09A, 0xC09B, 0xC09C,
    0xC09D, 0xC09E, 0xC09F, 0xC0A2, 0xC0A4, 0xC0A6, 0xC0A7, 0xC0A8,
    0xC0A9, 0xC0AA, 0xC0AB, 0xC0AE, 0xC0B1, 0xC0B2, 0xC0B7, 0xC0B8,
    0xC0B9, 0xC0BA, 0xC0BB, 0xC0BE, 0xC0C2, 0xC0C3, 0xC0C4, 0xC0C6,
    0xC0C7, 0xC0CA, 0xC0CB, 0xC0CD, 0xC0CE, 0xC0CF, 0xC0D1, 0xC0D2,
    0xC0D3, 0xC0D4, 0xC0D5, 0xC0D6, 0xC0D7, 0xC0DA, 0xC0DE, 0xC0DF,
    0xC0E0, 0xC0E1, 0xC0E2, 0xC0E3, 0xC0E6, 0xC0E7, 0xC0E9, 0xC0EA,
    0xC0EB, 0xC0ED, 0xC0EE, 0xC0EF, 0xC0F0, 0xC0F1, 0xC0F2, 0xC0F3,
    0xC0F6, 0xC0F8, 0xC0FA, 0xC0FB, 0xC0FC, 0xC0FD, 0xC0FE, 0xC0FF,
    0xC101, 0xC102, 0xC103, 0xC105, 0xC106, 0xC107, 0xC109, 0xC10A,
    0xC10B, 0xC10C, 0xC10D, 0xC10E, 0xC10F, 0xC111, 0xC112, 0xC113,
    0xC114, 0xC116, 0xC117, 0xC118, 0xC119, 0xC11A, 0xC11B, 0xC121,
    0xC122, 0xC125, 0xC128, 0xC129, 0xC12A, 0xC12B, 0xC12E, 0xFFFF,
    0xFFFF, 0xC132, 0xC133, 0xC134, 0xC135, 0xC137, 0xC13A, 0xC13B,
    0xC13D, 0xC13E, 0xC13F, 0xC141, 0xC142, 0xC143, 0xC144, 0xC145,
    0xC146, 0xC147, 0xC14A, 0xC14E, 0xC14F, 0xC150, 0xC151, 0xC152,
    0xC153, 0xC156, 0xC157, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC159, 0xC15A, 0xC15B, 0xC15D, 0xC15E, 0xC15F, 0xC160,
    0xC161, 0xC162, 0xC163, 0xC166, 0xC16A, 0xC16B, 0xC16C, 0xC16D,
    0xC16E, 0xC16F, 0xC171, 0xC172, 0xC173, 0xC175, 0xC176, 0xC177,
    0xC179, 0xC17A, 0xC17B, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC17C, 0xC17D, 0xC17E, 0xC17F, 0xC180, 0xC181, 0xC182,
    0xC183, 0xC184, 0xC186, 0xC187, 0xC188, 0xC189, 0xC18A, 0xC18B,
    0xC18F, 0xC191, 0xC192, 0xC193, 0xC195, 0xC197, 0xC198, 0xC199,
    0xC19A, 0xC19B, 0xC19E, 0xC1A0, 0xC1A2, 0xC1A3, 0xC1A4, 0xC1A6,
    0xC1A7, 0xC1AA, 0xC1AB, 0xC1AD, 0xC1AE, 0xC1AF, 0xC1B1, 0xC1B2,
    0xC1B3, 0xC1B4, 0xC1B5, 0xC1B6, 0xC1B7, 0xC1B8, 0xC1B9, 0xC1BA,
    0xC1BB, 0xC1BC, 0xC1BE, 0xC1BF, 0xC1C0, 0xC1C1, 0xC1C2, 0xC1C3,
    0xC1C5, 0xC1C6, 0xC1C7, 0xC1C9, 0xC1CA, 0xC1CB, 0xC1CD, 0xC1CE,
    0xC1CF, 0xC1D0, 0xC1D1, 0xC1D2, 0xC1D3, 0xC1D5, 0xC1D6, 0xC1D9,
    0xC1DA, 0xC1DB, 0xC1DC, 0xC1DD, 0xC1DE, 0xC1DF, 0xC1E1, 0xC1E2,
    0xC1E3, 0xC1E5, 0xC1E6, 0xC1E7, 0xC1E9, 0xC1EA, 0xC1EB, 0xC1EC,
    0xC1ED, 0xC1EE, 0xC1EF, 0xC1F2, 0xC1F4, 0xC1F5, 0xC1F6, 0xC1F7,
    0xC1F8, 0xC1F9, 0xC1FA, 0xC1FB, 0xC1FE, 0xC1FF, 0xC201, 0xC202,
    0xC203, 0xC205, 0xC206, 0xC207, 0xC208, 0xC209, 0xC20A, 0xC20B,
    0xC20E, 0xC210, 0xC212, 0xC213, 0xC214, 0xC215, 0xC216, 0xC217,
    0xC21A, 0xC21B, 0xC21D, 0xC21E, 0xC221, 0xC222, 0xC223, 0xFFFF,
    0xFFFF, 0xC224, 0xC225, 0xC226, 0xC227, 0xC22A, 0xC22C, 0xC22E,
    0xC230, 0xC233, 0xC235, 0xC236, 0xC237, 0xC238, 0xC239, 0xC23A,
    0xC23B, 0xC23C, 0xC23D, 0xC23E, 0xC23F, 0xC240, 0xC241, 0xC242,
    0xC243, 0xC244, 0xC245, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC246, 0xC247, 0xC249, 0xC24A, 0xC24B, 0xC24C, 0xC24D,
    0xC24E, 0xC24F, 0xC252, 0xC253, 0xC255, 0xC256, 0xC257, 0xC259,
    0xC25A, 0xC25B, 0xC25C, 0xC25D, 0xC25E, 0xC25F, 0xC261, 0xC262,
    0xC263, 0xC264, 0xC266, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC267, 0xC268, 0xC269, 0xC26A, 0xC26B, 0xC26E, 0xC26F,
    0xC271, 0xC272, 0xC273, 0xC275, 0xC276, 0xC277, 0xC278, 0xC279,
    0xC27A, 0xC27B, 0xC27E, 0xC280, 0xC282, 0xC283, 0xC284, 0xC285,
    0xC286, 0xC287, 0xC28A, 0xC28B, 0xC28C, 0xC28D, 0xC28E, 0xC28F,
    0xC291, 0xC292, 0xC293, 0xC294, 0xC295, 0xC296, 0xC297, 0xC299,
    0xC29A, 0xC29C, 0xC29E, 0xC29F, 0xC2A0, 0xC2A1, 0xC2A2, 0xC2A3,
    0xC2A6, 0xC2A7, 0xC2A9, 0xC2AA, 0xC2AB, 0xC2AE, 0xC2AF, 0xC2B0,
    0xC2B1, 0xC2B2, 0xC2B3, 0xC2B6, 0xC2B8, 0xC2BA, 0xC2BB, 0xC2BC,
    0xC2BD, 0xC2BE, 0xC2BF, 0xC2C0, 0xC2C1, 0xC2C2, 0xC2C3, 0xC2C4,
    0xC2C5, 0xC2C6, 0xC2C7, 0xC2C8, 0xC2C9, 0xC2CA, 0xC2CB, 0xC2CC,
    0xC2CD, 0xC2CE, 0xC2CF, 0xC2D0, 0xC2D1, 0xC2D2, 0xC2D3, 0xC2D4,
    0xC2D5, 0xC2D6, 0xC2D7, 0xC2D8, 0xC2D9, 0xC2DA, 0xC2DB, 0xC2DE,
    0xC2DF, 0xC2E1, 0xC2E2, 0xC2E5, 0xC2E6, 0xC2E7, 0xC2E8, 0xC2E9,
    0xC2EA, 0xC2EE, 0xC2F0, 0xC2F2, 0xC2F3, 0xC2F4, 0xC2F5, 0xC2F7,
    0xC2FA, 0xC2FD, 0xC2FE, 0xC2FF, 0xC301, 0xC302, 0xC303, 0xC304,
    0xC305, 0xC306, 0xC307, 0xC30A, 0xC30B, 0xC30E, 0xC30F, 0xFFFF,
    0xFFFF, 0xC310, 0xC311, 0xC312, 0xC316, 0xC317, 0xC319, 0xC31A,
    0xC31B, 0xC31D, 0xC31E, 0xC31F, 0xC320, 0xC321, 0xC322, 0xC323,
    0xC326, 0xC327, 0xC32A, 0xC32B, 0xC32C, 0xC32D, 0xC32E, 0xC32F,
    0xC330, 0xC331, 0xC332, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC333, 0xC334, 0xC335, 0xC336, 0xC337, 0xC338, 0xC339,
    0xC33A, 0xC33B, 0xC33C, 0xC33D, 0xC33E, 0xC33F, 0xC340, 0xC341,
    0xC342, 0xC343, 0xC344, 0xC346, 0xC347, 0xC348, 0xC349, 0xC34A,
    0xC34B, 0xC34C, 0xC34D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC34E, 0xC34F, 0xC350, 0xC351, 0xC352, 0xC353, 0xC354,
    0xC355, 0xC356, 0xC357, 0xC358, 0xC359, 0xC35A, 0xC35B, 0xC35C,
    0xC35D, 0xC35E, 0xC35F, 0xC360, 0xC361, 0xC362, 0xC363, 0xC364,
    0xC365, 0xC366, 0xC367, 0xC36A, 0xC36B, 0xC36D, 0xC36E, 0xC36F,
    0xC371, 0xC373, 0xC374, 0xC375, 0xC376, 0xC377, 0xC37A, 0xC37B,
    0xC37E, 0xC37F, 0xC380, 0xC381, 0xC382, 0xC383, 0xC385, 0xC386,
    0xC387, 0xC389, 0xC38A, 0xC38B, 0xC38D, 0xC38E, 0xC38F, 0xC390,
    0xC391, 0xC392, 0xC393, 0xC394, 0xC395, 0xC396, 0xC397, 0xC398,
    0xC399, 0xC39A, 0xC39B, 0xC39C, 0xC39D, 0xC39E, 0xC39F, 0xC3A0,
    0xC3A1, 0xC3A2, 0xC3A3, 0xC3A4, 0xC3A5, 0xC3A6, 0xC3A7, 0xC3A8,
    0xC3A9, 0xC3AA, 0xC3AB, 0xC3AC, 0xC3AD, 0xC3AE, 0xC3AF, 0xC3B0,
    0xC3B1, 0xC3B2, 0xC3B3, 0xC3B4, 0xC3B5, 0xC3B6, 0xC3B7, 0xC3B8,
    0xC3B9, 0xC3BA, 0xC3BB, 0xC3BC, 0xC3BD, 0xC3BE, 0xC3BF, 0xC3C1,
    0xC3C2, 0xC3C3, 0xC3C4, 0xC3C5, 0xC3C6, 0xC3C7, 0xC3C8, 0xC3C9,
    0xC3CA, 0xC3CB, 0xC3CC, 0xC3CD, 0xC3CE, 0xC3CF, 0xC3D0, 0xC3D1,
    0xC3D2, 0xC3D3, 0xC3D4, 0xC3D5, 0xC3D6, 0xC3D7, 0xC3DA, 0xFFFF,
    0xFFFF, 0xC3DB, 0xC3DD, 0xC3DE, 0xC3E1, 0xC3E3, 0xC3E4, 0xC3E5,
    0xC3E6, 0xC3E7, 0xC3EA, 0xC3EB, 0xC3EC, 0xC3EE, 0xC3EF, 0xC3F0,
    0xC3F1, 0xC3F2, 0xC3F3, 0xC3F6, 0xC3F7, 0xC3F9, 0xC3FA, 0xC3FB,
    0xC3FC, 0xC3FD, 0xC3FE, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC3FF, 0xC400, 0xC401, 0xC402, 0xC403, 0xC404, 0xC405,
    0xC406, 0xC407, 0xC409, 0xC40A, 0xC40B, 0xC40C, 0xC40D, 0xC40E,
    0xC40F, 0xC411, 0xC412, 0xC413, 0xC414, 0xC415, 0xC416, 0xC417,
    0xC418, 0xC419, 0xC41A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC41B, 0xC41C, 0xC41D, 0xC41E, 0xC41F, 0xC420, 0xC421,
    0xC422, 0xC423, 0xC425, 0xC426, 0xC427, 0xC428, 0xC429, 0xC42A,
    0xC42B, 0xC42D, 0xC42E, 0xC42F, 0xC431, 0xC432, 0xC433, 0xC435,
    0xC436, 0xC437, 0xC438, 0xC439, 0xC43A, 0xC43B, 0xC43E, 0xC43F,
    0xC440, 0xC441, 0xC442, 0xC443, 0xC444, 0xC445, 0xC446, 0xC447,
    0xC449, 0xC44A, 0xC44B, 0xC44C, 0xC44D, 0xC44E, 0xC44F, 0xC450,
    0xC451, 0xC452, 0xC453, 0xC454, 0xC455, 0xC456, 0xC457, 0xC458,
    0xC459, 0xC45A, 0xC45B, 0xC45C, 0xC45D, 0xC45E, 0xC45F, 0xC460,
    0xC461, 0xC462, 0xC463, 0xC466, 0xC467, 0xC469, 0xC46A, 0xC46B,
    0xC46D, 0xC46E, 0xC46F, 0xC470, 0xC471, 0xC472, 0xC473, 0xC476,
    0xC477, 0xC478, 0xC47A, 0xC47B, 0xC47C, 0xC47D, 0xC47E, 0xC47F,
    0xC481, 0xC482, 0xC483, 0xC484, 0xC485, 0xC486, 0xC487, 0xC488,
    0xC489, 0xC48A, 0xC48B, 0xC48C, 0xC48D, 0xC48E, 0xC48F, 0xC490,
    0xC491, 0xC492, 0xC493, 0xC495, 0xC496, 0xC497, 0xC498, 0xC499,
    0xC49A, 0xC49B, 0xC49D, 0xC49E, 0xC49F, 0xC4A0, 0xC4A1, 0xC4A2,
    0xC4A3, 0xC4A4, 0xC4A5, 0xC4A6, 0xC4A7, 0xC4A8, 0xC4A9, 0xFFFF,
    0xFFFF, 0xC4AA, 0xC4AB, 0xC4AC, 0xC4AD, 0xC4AE, 0xC4AF, 0xC4B0,
    0xC4B1, 0xC4B2, 0xC4B3, 0xC4B4, 0xC4B5, 0xC4B6, 0xC4B7, 0xC4B9,
    0xC4BA, 0xC4BB, 0xC4BD, 0xC4BE, 0xC4BF, 0xC4C0, 0xC4C1, 0xC4C2,
    0xC4C3, 0xC4C4, 0xC4C5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC4C6, 0xC4C7, 0xC4C8, 0xC4C9, 0xC4CA, 0xC4CB, 0xC4CC,
    0xC4CD, 0xC4CE, 0xC4CF, 0xC4D0, 0xC4D1, 0xC4D2, 0xC4D3, 0xC4D4,
    0xC4D5, 0xC4D6, 0xC4D7, 0xC4D8, 0xC4D9, 0xC4DA, 0xC4DB, 0xC4DC,
    0xC4DD, 0xC4DE, 0xC4DF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC4E0, 0xC4E1, 0xC4E2, 0xC4E3, 0xC4E4, 0xC4E5, 0xC4E6,
    0xC4E7, 0xC4E8, 0xC4EA, 0xC4EB, 0xC4EC, 0xC4ED, 0xC4EE, 0xC4EF,
    0xC4F2, 0xC4F3, 0xC4F5, 0xC4F6, 0xC4F7, 0xC4F9, 0xC4FB, 0xC4FC,
    0xC4FD, 0xC4FE, 0xC502, 0xC503, 0xC504, 0xC505, 0xC506, 0xC507,
    0xC508, 0xC509, 0xC50A, 0xC50B, 0xC50D, 0xC50E, 0xC50F, 0xC511,
    0xC512, 0xC513, 0xC515, 0xC516, 0xC517, 0xC518, 0xC519, 0xC51A,
    0xC51B, 0xC51D, 0xC51E, 0xC51F, 0xC520, 0xC521, 0xC522, 0xC523,
    0xC524, 0xC525, 0xC526, 0xC527, 0xC52A, 0xC52B, 0xC52D, 0xC52E,
    0xC52F, 0xC531, 0xC532, 0xC533, 0xC534, 0xC535, 0xC536, 0xC537,
    0xC53A, 0xC53C, 0xC53E, 0xC53F, 0xC540, 0xC541, 0xC542, 0xC543,
    0xC546, 0xC547, 0xC54B, 0xC54F, 0xC550, 0xC551, 0xC552, 0xC556,
    0xC55A, 0xC55B, 0xC55C, 0xC55F, 0xC562, 0xC563, 0xC565, 0xC566,
    0xC567, 0xC569, 0xC56A, 0xC56B, 0xC56C, 0xC56D, 0xC56E, 0xC56F,
    0xC572, 0xC576, 0xC577, 0xC578, 0xC579, 0xC57A, 0xC57B, 0xC57E,
    0xC57F, 0xC581, 0xC582, 0xC583, 0xC585, 0xC586, 0xC588, 0xC589,
    0xC58A, 0xC58B, 0xC58E, 0xC590, 0xC592, 0xC593, 0xC594, 0xFFFF,
    0xFFFF, 0xC596, 0xC599, 0xC59A, 0xC59B, 0xC59D, 0xC59E, 0xC59F,
    0xC5A1, 0xC5A2, 0xC5A3, 0xC5A4, 0xC5A5, 0xC5A6, 0xC5A7, 0xC5A8,
    0xC5AA, 0xC5AB, 0xC5AC, 0xC5AD, 0xC5AE, 0xC5AF, 0xC5B0, 0xC5B1,
    0xC5B2, 0xC5B3, 0xC5B6, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC5B7, 0xC5BA, 0xC5BF, 0xC5C0, 0xC5C1, 0xC5C2, 0xC5C3,
    0xC5CB, 0xC5CD, 0xC5CF, 0xC5D2, 0xC5D3, 0xC5D5, 0xC5D6, 0xC5D7,
    0xC5D9, 0xC5DA, 0xC5DB, 0xC5DC, 0xC5DD, 0xC5DE, 0xC5DF, 0xC5E2,
    0xC5E4, 0xC5E6, 0xC5E7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC5E8, 0xC5E9, 0xC5EA, 0xC5EB, 0xC5EF, 0xC5F1, 0xC5F2,
    0xC5F3, 0xC5F5, 0xC5F8, 0xC5F9, 0xC5FA, 0xC5FB, 0xC602, 0xC603,
    0xC604, 0xC609, 0xC60A, 0xC60B, 0xC60D, 0xC60E, 0xC60F, 0xC611,
    0xC612, 0xC613, 0xC614, 0xC615, 0xC616, 0xC617, 0xC61A, 0xC61D,
    0xC61E, 0xC61F, 0xC620, 0xC621, 0xC622, 0xC623, 0xC626, 0xC627,
    0xC629, 0xC62A, 0xC62B, 0xC62F, 0xC631, 0xC632, 0xC636, 0xC638,
    0xC63A, 0xC63C, 0xC63D, 0xC63E, 0xC63F, 0xC642, 0xC643, 0xC645,
    0xC646, 0xC647, 0xC649, 0xC64A, 0xC64B, 0xC64C, 0xC64D, 0xC64E,
    0xC64F, 0xC652, 0xC656, 0xC657, 0xC658, 0xC659, 0xC65A, 0xC65B,
    0xC65E, 0xC65F, 0xC661, 0xC662, 0xC663, 0xC664, 0xC665, 0xC666,
    0xC667, 0xC668, 0xC669, 0xC66A, 0xC66B, 0xC66D, 0xC66E, 0xC670,
    0xC672, 0xC673, 0xC674, 0xC675, 0xC676, 0xC677, 0xC67A, 0xC67B,
    0xC67D, 0xC67E, 0xC67F, 0xC681, 0xC682, 0xC683, 0xC684, 0xC685,
    0xC686, 0xC687, 0xC68A, 0xC68C, 0xC68E, 0xC68F, 0xC690, 0xC691,
    0xC692, 0xC693, 0xC696, 0xC697, 0xC699, 0xC69A, 0xC69B, 0xC69D,
    0xC69E, 0xC69F, 0xC6A0, 0xC6A1, 0xC6A2, 0xC6A3, 0xC6A6, 0xFFFF,
    0xFFFF, 0xC6A8, 0xC6AA, 0xC6AB, 0xC6AC, 0xC6AD, 0xC6AE, 0xC6AF,
    0xC6B2, 0xC6B3, 0xC6B5, 0xC6B6, 0xC6B7, 0xC6BB, 0xC6BC, 0xC6BD,
    0xC6BE, 0xC6BF, 0xC6C2, 0xC6C4, 0xC6C6, 0xC6C7, 0xC6C8, 0xC6C9,
    0xC6CA, 0xC6CB, 0xC6CE, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC6CF, 0xC6D1, 0xC6D2, 0xC6D3, 0xC6D5, 0xC6D6, 0xC6D7,
    0xC6D8, 0xC6D9, 0xC6DA, 0xC6DB, 0xC6DE, 0xC6DF, 0xC6E2, 0xC6E3,
    0xC6E4, 0xC6E5, 0xC6E6, 0xC6E7, 0xC6EA, 0xC6EB, 0xC6ED, 0xC6EE,
    0xC6EF, 0xC6F1, 0xC6F2, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC6F3, 0xC6F4, 0xC6F5, 0xC6F6, 0xC6F7, 0xC6FA, 0xC6FB,
    0xC6FC, 0xC6FE, 0xC6FF, 0xC700, 0xC701, 0xC702, 0xC703, 0xC706,
    0xC707, 0xC709, 0xC70A, 0xC70B, 0xC70D, 0xC70E, 0xC70F, 0xC710,
    0xC711, 0xC712, 0xC713, 0xC716, 0xC718, 0xC71A, 0xC71B, 0xC71C,
    0xC71D, 0xC71E, 0xC71F, 0xC722, 0xC723, 0xC725, 0xC726, 0xC727,
    0xC729, 0xC72A, 0xC72B, 0xC72C, 0xC72D, 0xC72E, 0xC72F, 0xC732,
    0xC734, 0xC736, 0xC738, 0xC739, 0xC73A, 0xC73B, 0xC73E, 0xC73F,
    0xC741, 0xC742, 0xC743, 0xC745, 0xC746, 0xC747, 0xC748, 0xC749,
    0xC74B, 0xC74E, 0xC750, 0xC759, 0xC75A, 0xC75B, 0xC75D, 0xC75E,
    0xC75F, 0xC761, 0xC762, 0xC763, 0xC764, 0xC765, 0xC766, 0xC767,
    0xC769, 0xC76A, 0xC76C, 0xC76D, 0xC76E, 0xC76F, 0xC770, 0xC771,
    0xC772, 0xC773, 0xC776, 0xC777, 0xC779, 0xC77A, 0xC77B, 0xC77F,
    0xC780, 0xC781, 0xC782, 0xC786, 0xC78B, 0xC78C, 0xC78D, 0xC78F,
    0xC792, 0xC793, 0xC795, 0xC799, 0xC79B, 0xC79C, 0xC79D, 0xC79E,
    0xC79F, 0xC7A2, 0xC7A7, 0xC7A8, 0xC7A9, 0xC7AA, 0xC7AB, 0xC7AE,
    0xC7AF, 0xC7B1, 0xC7B2, 0xC7B3, 0xC7B5, 0xC7B6, 0xC7B7, 0xFFFF,
    0xFFFF, 0xC7B8, 0xC7B9, 0xC7BA, 0xC7BB, 0xC7BE, 0xC7C2, 0xC7C3,
    0xC7C4, 0xC7C5, 0xC7C6, 0xC7C7, 0xC7CA, 0xC7CB, 0xC7CD, 0xC7CF,
    0xC7D1, 0xC7D2, 0xC7D3, 0xC7D4, 0xC7D5, 0xC7D6, 0xC7D7, 0xC7D9,
    0xC7DA, 0xC7DB, 0xC7DC, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC7DE, 0xC7DF, 0xC7E0, 0xC7E1, 0xC7E2, 0xC7E3, 0xC7E5,
    0xC7E6, 0xC7E7, 0xC7E9, 0xC7EA, 0xC7EB, 0xC7ED, 0xC7EE, 0xC7EF,
    0xC7F0, 0xC7F1, 0xC7F2, 0xC7F3, 0xC7F4, 0xC7F5, 0xC7F6, 0xC7F7,
    0xC7F8, 0xC7F9, 0xC7FA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC7FB, 0xC7FC, 0xC7FD, 0xC7FE, 0xC7FF, 0xC802, 0xC803,
    0xC805, 0xC806, 0xC807, 0xC809, 0xC80B, 0xC80C, 0xC80D, 0xC80E,
    0xC80F, 0xC812, 0xC814, 0xC817, 0xC818, 0xC819, 0xC81A, 0xC81B,
    0xC81E, 0xC81F, 0xC821, 0xC822, 0xC823, 0xC825, 0xC826, 0xC827,
    0xC828, 0xC829, 0xC82A, 0xC82B, 0xC82E, 0xC830, 0xC832, 0xC833,
    0xC834, 0xC835, 0xC836, 0xC837, 0xC839, 0xC83A, 0xC83B, 0xC83D,
    0xC83E, 0xC83F, 0xC841, 0xC842, 0xC843, 0xC844, 0xC845, 0xC846,
    0xC847, 0xC84A, 0xC84B, 0xC84E, 0xC84F, 0xC850, 0xC851, 0xC852,
    0xC853, 0xC855, 0xC856, 0xC857, 0xC858, 0xC859, 0xC85A, 0xC85B,
    0xC85C, 0xC85D, 0xC85E, 0xC85F, 0xC860, 0xC861, 0xC862, 0xC863,
    0xC864, 0xC865, 0xC866, 0xC867, 0xC868, 0xC869, 0xC86A, 0xC86B,
    0xC86C, 0xC86D, 0xC86E, 0xC86F, 0xC872, 0xC873, 0xC875, 0xC876,
    0xC877, 0xC879, 0xC87B, 0xC87C, 0xC87D, 0xC87E, 0xC87F, 0xC882,
    0xC884, 0xC888, 0xC889, 0xC88A, 0xC88E, 0xC88F, 0xC890, 0xC891,
    0xC892, 0xC893, 0xC895, 0xC896, 0xC897, 0xC898, 0xC899, 0xC89A,
    0xC89B, 0xC89C, 0xC89E, 0xC8A0, 0xC8A2, 0xC8A3, 0xC8A4, 0xFFFF,
    0xFFFF, 0xC8A5, 0xC8A6, 0xC8A7, 0xC8A9, 0xC8AA, 0xC8AB, 0xC8AC,
    0xC8AD, 0xC8AE, 0xC8AF, 0xC8B0, 0xC8B1, 0xC8B2, 0xC8B3, 0xC8B4,
    0xC8B5, 0xC8B6, 0xC8B7, 0xC8B8, 0xC8B9, 0xC8BA, 0xC8BB, 0xC8BE,
    0xC8BF, 0xC8C0, 0xC8C1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC8C2, 0xC8C3, 0xC8C5, 0xC8C6, 0xC8C7, 0xC8C9, 0xC8CA,
    0xC8CB, 0xC8CD, 0xC8CE, 0xC8CF, 0xC8D0, 0xC8D1, 0xC8D2, 0xC8D3,
    0xC8D6, 0xC8D8, 0xC8DA, 0xC8DB, 0xC8DC, 0xC8DD, 0xC8DE, 0xC8DF,
    0xC8E2, 0xC8E3, 0xC8E5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC8E6, 0xC8E7, 0xC8E8, 0xC8E9, 0xC8EA, 0xC8EB, 0xC8EC,
    0xC8ED, 0xC8EE, 0xC8EF, 0xC8F0, 0xC8F1, 0xC8F2, 0xC8F3, 0xC8F4,
    0xC8F6, 0xC8F7, 0xC8F8, 0xC8F9, 0xC8FA, 0xC8FB, 0xC8FE, 0xC8FF,
    0xC901, 0xC902, 0xC903, 0xC907, 0xC908, 0xC909, 0xC90A, 0xC90B,
    0xC90E, 0x3000, 0x3001, 0x3002, 0x00B7, 0x2025, 0x2026, 0x00A8,
    0x3003, 0x00AD, 0x2015, 0x2225, 0xFF3C, 0x223C, 0x2018, 0x2019,
    0x201C, 0x201D, 0x3014, 0x3015, 0x3008, 0x3009, 0x300A, 0x300B,
    0x300C, 0x300D, 0x300E, 0x300F, 0x3010, 0x3011, 0x00B1, 0x00D7,
    0x00F7, 0x2260, 0x2264, 0x2265, 0x221E, 0x2234, 0x00B0, 0x2032,
    0x2033, 0x2103, 0x212B, 0xFFE0, 0xFFE1, 0xFFE5, 0x2642, 0x2640,
    0x2220, 0x22A5, 0x2312, 0x2202, 0x2207, 0x2261, 0x2252, 0x00A7,
    0x203B, 0x2606, 0x2605, 0x25CB, 0x25CF, 0x25CE, 0x25C7, 0x25C6,
    0x25A1, 0x25A0, 0x25B3, 0x25B2, 0x25BD, 0x25BC, 0x2192, 0x2190,
    0x2191, 0x2193, 0x2194, 0x3013, 0x226A, 0x226B, 0x221A, 0x223D,
    0x221D, 0x2235, 0x222B, 0x222C, 0x2208, 0x220B, 0x2286, 0x2287,
    0x2282, 0x2283, 0x222A, 0x2229, 0x2227, 0x2228, 0xFFE2, 0xFFFF,
    0xFFFF, 0xC910, 0xC912, 0xC913, 0xC914, 0xC915, 0xC916, 0xC917,
    0xC919, 0xC91A, 0xC91B, 0xC91C, 0xC91D, 0xC91E, 0xC91F, 0xC920,
    0xC921, 0xC922, 0xC923, 0xC924, 0xC925, 0xC926, 0xC927, 0xC928,
    0xC929, 0xC92A, 0xC92B, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC92D, 0xC92E, 0xC92F, 0xC930, 0xC931, 0xC932, 0xC933,
    0xC935, 0xC936, 0xC937, 0xC938, 0xC939, 0xC93A, 0xC93B, 0xC93C,
    0xC93D, 0xC93E, 0xC93F, 0xC940, 0xC941, 0xC942, 0xC943, 0xC944,
    0xC945, 0xC946, 0xC947, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC948, 0xC949, 0xC94A, 0xC94B, 0xC94C, 0xC94D, 0xC94E,
    0xC94F, 0xC952, 0xC953, 0xC955, 0xC956, 0xC957, 0xC959, 0xC95A,
    0xC95B, 0xC95C, 0xC95D, 0xC95E, 0xC95F, 0xC962, 0xC964, 0xC965,
    0xC966, 0xC967, 0xC968, 0xC969, 0xC96A, 0xC96B, 0xC96D, 0xC96E,
    0xC96F, 0x21D2, 0x21D4, 0x2200, 0x2203, 0x00B4, 0xFF5E, 0x02C7,
    0x02D8, 0x02DD, 0x02DA, 0x02D9, 0x00B8, 0x02DB, 0x00A1, 0x00BF,
    0x02D0, 0x222E, 0x2211, 0x220F, 0x00A4, 0x2109, 0x2030, 0x25C1,
    0x25C0, 0x25B7, 0x25B6, 0x2664, 0x2660, 0x2661, 0x2665, 0x2667,
    0x2663, 0x2299, 0x25C8, 0x25A3, 0x25D0, 0x25D1, 0x2592, 0x25A4,
    0x25A5, 0x25A8, 0x25A7, 0x25A6, 0x25A9, 0x2668, 0x260F, 0x260E,
    0x261C, 0x261E, 0x00B6, 0x2020, 0x2021, 0x2195, 0x2197, 0x2199,
    0x2196, 0x2198, 0x266D, 0x2669, 0x266A, 0x266C, 0x327F, 0x321C,
    0x2116, 0x33C7, 0x2122, 0x33C2, 0x33D8, 0x2121, 0x20AC, 0x00AE,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC971, 0xC972, 0xC973, 0xC975, 0xC976, 0xC977, 0xC978,
    0xC979, 0xC97A, 0xC97B, 0xC97D, 0xC97E, 0xC97F, 0xC980, 0xC981,
    0xC982, 0xC983, 0xC984, 0xC985, 0xC986, 0xC987, 0xC98A, 0xC98B,
    0xC98D, 0xC98E, 0xC98F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC991, 0xC992, 0xC993, 0xC994, 0xC995, 0xC996, 0xC997,
    0xC99A, 0xC99C, 0xC99E, 0xC99F, 0xC9A0, 0xC9A1, 0xC9A2, 0xC9A3,
    0xC9A4, 0xC9A5, 0xC9A6, 0xC9A7, 0xC9A8, 0xC9A9, 0xC9AA, 0xC9AB,
    0xC9AC, 0xC9AD, 0xC9AE, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xC9AF, 0xC9B0, 0xC9B1, 0xC9B2, 0xC9B3, 0xC9B4, 0xC9B5,
    0xC9B6, 0xC9B7, 0xC9B8, 0xC9B9, 0xC9BA, 0xC9BB, 0xC9BC, 0xC9BD,
    0xC9BE, 0xC9BF, 0xC9C2, 0xC9C3, 0xC9C5, 0xC9C6, 0xC9C9, 0xC9CB,
    0xC9CC, 0xC9CD, 0xC9CE, 0xC9CF, 0xC9D2, 0xC9D4, 0xC9D7, 0xC9D8,
    0xC9DB, 0xFF01, 0xFF02, 0xFF03, 0xFF04, 0xFF05, 0xFF06, 0xFF07,
    0xFF08, 0xFF09, 0xFF0A, 0xFF0B, 0xFF0C, 0xFF0D, 0xFF0E, 0xFF0F,
    0xFF10, 0xFF11, 0xFF12, 0xFF13, 0xFF14, 0xFF15, 0xFF16, 0xFF17,
    0xFF18, 0xFF19, 0xFF1A, 0xFF1B, 0xFF1C, 0xFF1D, 0xFF1E, 0xFF1F,
    0xFF20, 0xFF21, 0xFF22, 0xFF23, 0xFF24, 0xFF25, 0xFF26, 0xFF27,
    0xFF28, 0xFF29, 0xFF2A, 0xFF2B, 0xFF2C, 0xFF2D, 0xFF2E, 0xFF2F,
    0xFF30, 0xFF31, 0xFF32, 0xFF33, 0xFF34, 0xFF35, 0xFF36, 0xFF37,
    0xFF38, 0xFF39, 0xFF3A, 0xFF3B, 0xFFE6, 0xFF3D, 0xFF3E, 0xFF3F,
    0xFF40, 0xFF41, 0xFF42, 0xFF43, 0xFF44, 0xFF45, 0xFF46, 0xFF47,
    0xFF48, 0xFF49, 0xFF4A, 0xFF4B, 0xFF4C, 0xFF4D, 0xFF4E, 0xFF4F,
    0xFF50, 0xFF51, 0xFF52, 0xFF53, 0xFF54, 0xFF55, 0xFF56, 0xFF57,
    0xFF58, 0xFF59, 0xFF5A, 0xFF5B, 0xFF5C, 0xFF5D, 0xFFE3, 0xFFFF,
    0xFFFF, 0xC9DE, 0xC9DF, 0xC9E1, 0xC9E3, 0xC9E5, 0xC9E6, 0xC9E8,
    0xC9E9, 0xC9EA, 0xC9EB, 0xC9EE, 0xC9F2, 0xC9F3, 0xC9F4, 0xC9F5,
    0xC9F6, 0xC9F7, 0xC9FA, 0xC9FB, 0xC9FD, 0xC9FE, 0xC9FF, 0xCA01,
    0xCA02, 0xCA03, 0xCA04, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCA05, 0xCA06, 0xCA07, 0xCA0A, 0xCA0E, 0xCA0F, 0xCA10,
    0xCA11, 0xCA12, 0xCA13, 0xCA15, 0xCA16, 0xCA17, 0xCA19, 0xCA1A,
    0xCA1B, 0xCA1C, 0xCA1D, 0xCA1E, 0xCA1F, 0xCA20, 0xCA21, 0xCA22,
    0xCA23, 0xCA24, 0xCA25, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCA26, 0xCA27, 0xCA28, 0xCA2A, 0xCA2B, 0xCA2C, 0xCA2D,
    0xCA2E, 0xCA2F, 0xCA30, 0xCA31, 0xCA32, 0xCA33, 0xCA34, 0xCA35,
    0xCA36, 0xCA37, 0xCA38, 0xCA39, 0xCA3A, 0xCA3B, 0xCA3C, 0xCA3D,
    0xCA3E, 0xCA3F, 0xCA40, 0xCA41, 0xCA42, 0xCA43, 0xCA44, 0xCA45,
    0xCA46, 0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137,
    0x3138, 0x3139, 0x313A, 0x313B, 0x313C, 0x313D, 0x313E, 0x313F,
    0x3140, 0x3141, 0x3142, 0x3143, 0x3144, 0x3145, 0x3146, 0x3147,
    0x3148, 0x3149, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E, 0x314F,
    0x3150, 0x3151, 0x3152, 0x3153, 0x3154, 0x3155, 0x3156, 0x3157,
    0x3158, 0x3159, 0x315A, 0x315B, 0x315C, 0x315D, 0x315E, 0x315F,
    0x3160, 0x3161, 0x3162, 0x3163, 0x3164, 0x3165, 0x3166, 0x3167,
    0x3168, 0x3169, 0x316A, 0x316B, 0x316C, 0x316D, 0x316E, 0x316F,
    0x3170, 0x3171, 0x3172, 0x3173, 0x3174, 0x3175, 0x3176, 0x3177,
    0x3178, 0x3179, 0x317A, 0x317B, 0x317C, 0x317D, 0x317E, 0x317F,
    0x3180, 0x3181, 0x3182, 0x3183, 0x3184, 0x3185, 0x3186, 0x3187,
    0x3188, 0x3189, 0x318A, 0x318B, 0x318C, 0x318D, 0x318E, 0xFFFF,
    0xFFFF, 0xCA47, 0xCA48, 0xCA49, 0xCA4A, 0xCA4B, 0xCA4E, 0xCA4F,
    0xCA51, 0xCA52, 0xCA53, 0xCA55, 0xCA56, 0xCA57, 0xCA58, 0xCA59,
    0xCA5A, 0xCA5B, 0xCA5E, 0xCA62, 0xCA63, 0xCA64, 0xCA65, 0xCA66,
    0xCA67, 0xCA69, 0xCA6A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCA6B, 0xCA6C, 0xCA6D, 0xCA6E, 0xCA6F, 0xCA70, 0xCA71,
    0xCA72, 0xCA73, 0xCA74, 0xCA75, 0xCA76, 0xCA77, 0xCA78, 0xCA79,
    0xCA7A, 0xCA7B, 0xCA7C, 0xCA7E, 0xCA7F, 0xCA80, 0xCA81, 0xCA82,
    0xCA83, 0xCA85, 0xCA86, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCA87, 0xCA88, 0xCA89, 0xCA8A, 0xCA8B, 0xCA8C, 0xCA8D,
    0xCA8E, 0xCA8F, 0xCA90, 0xCA91, 0xCA92, 0xCA93, 0xCA94, 0xCA95,
    0xCA96, 0xCA97, 0xCA99, 0xCA9A, 0xCA9B, 0xCA9C, 0xCA9D, 0xCA9E,
    0xCA9F, 0xCAA0, 0xCAA1, 0xCAA2, 0xCAA3, 0xCAA4, 0xCAA5, 0xCAA6,
    0xCAA7, 0x2170, 0x2171, 0x2172, 0x2173, 0x2174, 0x2175, 0x2176,
    0x2177, 0x2178, 0x2179, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0x2160, 0x2161, 0x2162, 0x2163, 0x2164, 0x2165, 0x2166, 0x2167,
    0x2168, 0x2169, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397,
    0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F,
    0x03A0, 0x03A1, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8,
    0x03A9, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7,
    0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF,
    0x03C0, 0x03C1, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8,
    0x03C9, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCAA8, 0xCAA9, 0xCAAA, 0xCAAB, 0xCAAC, 0xCAAD, 0xCAAE,
    0xCAAF, 0xCAB0, 0xCAB1, 0xCAB2, 0xCAB3, 0xCAB4, 0xCAB5, 0xCAB6,
    0xCAB7, 0xCAB8, 0xCAB9, 0xCABA, 0xCABB, 0xCABE, 0xCABF, 0xCAC1,
    0xCAC2, 0xCAC3, 0xCAC5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCAC6, 0xCAC7, 0xCAC8, 0xCAC9, 0xCACA, 0xCACB, 0xCACE,
    0xCAD0, 0xCAD2, 0xCAD4, 0xCAD5, 0xCAD6, 0xCAD7, 0xCADA, 0xCADB,
    0xCADC, 0xCADD, 0xCADE, 0xCADF, 0xCAE1, 0xCAE2, 0xCAE3, 0xCAE4,
    0xCAE5, 0xCAE6, 0xCAE7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCAE8, 0xCAE9, 0xCAEA, 0xCAEB, 0xCAED, 0xCAEE, 0xCAEF,
    0xCAF0, 0xCAF1, 0xCAF2, 0xCAF3, 0xCAF5, 0xCAF6, 0xCAF7, 0xCAF8,
    0xCAF9, 0xCAFA, 0xCAFB, 0xCAFC, 0xCAFD, 0xCAFE, 0xCAFF, 0xCB00,
    0xCB01, 0xCB02, 0xCB03, 0xCB04, 0xCB05, 0xCB06, 0xCB07, 0xCB09,
    0xCB0A, 0x2500, 0x2502, 0x250C, 0x2510, 0x2518, 0x2514, 0x251C,
    0x252C, 0x2524, 0x2534, 0x253C, 0x2501, 0x2503, 0x250F, 0x2513,
    0x251B, 0x2517, 0x2523, 0x2533, 0x252B, 0x253B, 0x254B, 0x2520,
    0x252F, 0x2528, 0x2537, 0x253F, 0x251D, 0x2530, 0x2525, 0x2538,
    0x2542, 0x2512, 0x2511, 0x251A, 0x2519, 0x2516, 0x2515, 0x250E,
    0x250D, 0x251E, 0x251F, 0x2521, 0x2522, 0x2526, 0x2527, 0x2529,
    0x252A, 0x252D, 0x252E, 0x2531, 0x2532, 0x2535, 0x2536, 0x2539,
    0x253A, 0x253D, 0x253E, 0x2540, 0x2541, 0x2543, 0x2544, 0x2545,
    0x2546, 0x2547, 0x2548, 0x2549, 0x254A, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCB0B, 0xCB0C, 0xCB0D, 0xCB0E, 0xCB0F, 0xCB11, 0xCB12,
    0xCB13, 0xCB15, 0xCB16, 0xCB17, 0xCB19, 0xCB1A, 0xCB1B, 0xCB1C,
    0xCB1D, 0xCB1E, 0xCB1F, 0xCB22, 0xCB23, 0xCB24, 0xCB25, 0xCB26,
    0xCB27, 0xCB28, 0xCB29, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCB2A, 0xCB2B, 0xCB2C, 0xCB2D, 0xCB2E, 0xCB2F, 0xCB30,
    0xCB31, 0xCB32, 0xCB33, 0xCB34, 0xCB35, 0xCB36, 0xCB37, 0xCB38,
    0xCB39, 0xCB3A, 0xCB3B, 0xCB3C, 0xCB3D, 0xCB3E, 0xCB3F, 0xCB40,
    0xCB42, 0xCB43, 0xCB44, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCB45, 0xCB46, 0xCB47, 0xCB4A, 0xCB4B, 0xCB4D, 0xCB4E,
    0xCB4F, 0xCB51, 0xCB52, 0xCB53, 0xCB54, 0xCB55, 0xCB56, 0xCB57,
    0xCB5A, 0xCB5B, 0xCB5C, 0xCB5E, 0xCB5F, 0xCB60, 0xCB61, 0xCB62,
    0xCB63, 0xCB65, 0xCB66, 0xCB67, 0xCB68, 0xCB69, 0xCB6A, 0xCB6B,
    0xCB6C, 0x3395, 0x3396, 0x3397, 0x2113, 0x3398, 0x33C4, 0x33A3,
    0x33A4, 0x33A5, 0x33A6, 0x3399, 0x339A, 0x339B, 0x339C, 0x339D,
    0x339E, 0x339F, 0x33A0, 0x33A1, 0x33A2, 0x33CA, 0x338D, 0x338E,
    0x338F, 0x33CF, 0x3388, 0x3389, 0x33C8, 0x33A7, 0x33A8, 0x33B0,
    0x33B1, 0x33B2, 0x33B3, 0x33B4, 0x33B5, 0x33B6, 0x33B7, 0x33B8,
    0x33B9, 0x3380, 0x3381, 0x3382, 0x3383, 0x3384, 0x33BA, 0x33BB,
    0x33BC, 0x33BD, 0x33BE, 0x33BF, 0x3390, 0x3391, 0x3392, 0x3393,
    0x3394, 0x2126, 0x33C0, 0x33C1, 0x338A, 0x338B, 0x338C, 0x33D6,
    0x33C5, 0x33AD, 0x33AE, 0x33AF, 0x33DB, 0x33A9, 0x33AA, 0x33AB,
    0x33AC, 0x33DD, 0x33D0, 0x33D3, 0x33C3, 0x33C9, 0x33DC, 0x33C6,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCB6D, 0xCB6E, 0xCB6F, 0xCB70, 0xCB71, 0xCB72, 0xCB73,
    0xCB74, 0xCB75, 0xCB76, 0xCB77, 0xCB7A, 0xCB7B, 0xCB7C, 0xCB7D,
    0xCB7E, 0xCB7F, 0xCB80, 0xCB81, 0xCB82, 0xCB83, 0xCB84, 0xCB85,
    0xCB86, 0xCB87, 0xCB88, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCB89, 0xCB8A, 0xCB8B, 0xCB8C, 0xCB8D, 0xCB8E, 0xCB8F,
    0xCB90, 0xCB91, 0xCB92, 0xCB93, 0xCB94, 0xCB95, 0xCB96, 0xCB97,
    0xCB98, 0xCB99, 0xCB9A, 0xCB9B, 0xCB9D, 0xCB9E, 0xCB9F, 0xCBA0,
    0xCBA1, 0xCBA2, 0xCBA3, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCBA4, 0xCBA5, 0xCBA6, 0xCBA7, 0xCBA8, 0xCBA9, 0xCBAA,
    0xCBAB, 0xCBAC, 0xCBAD, 0xCBAE, 0xCBAF, 0xCBB0, 0xCBB1, 0xCBB2,
    0xCBB3, 0xCBB4, 0xCBB5, 0xCBB6, 0xCBB7, 0xCBB9, 0xCBBA, 0xCBBB,
    0xCBBC, 0xCBBD, 0xCBBE, 0xCBBF, 0xCBC0, 0xCBC1, 0xCBC2, 0xCBC3,
    0xCBC4, 0x00C6, 0x00D0, 0x00AA, 0x0126, 0xFFFF, 0x0132, 0xFFFF,
    0x013F, 0x0141, 0x00D8, 0x0152, 0x00BA, 0x00DE, 0x0166, 0x014A,
    0xFFFF, 0x3260, 0x3261, 0x3262, 0x3263, 0x3264, 0x3265, 0x3266,
    0x3267, 0x3268, 0x3269, 0x326A, 0x326B, 0x326C, 0x326D, 0x326E,
    0x326F, 0x3270, 0x3271, 0x3272, 0x3273, 0x3274, 0x3275, 0x3276,
    0x3277, 0x3278, 0x3279, 0x327A, 0x327B, 0x24D0, 0x24D1, 0x24D2,
    0x24D3, 0x24D4, 0x24D5, 0x24D6, 0x24D7, 0x24D8, 0x24D9, 0x24DA,
    0x24DB, 0x24DC, 0x24DD, 0x24DE, 0x24DF, 0x24E0, 0x24E1, 0x24E2,
    0x24E3, 0x24E4, 0x24E5, 0x24E6, 0x24E7, 0x24E8, 0x24E9, 0x2460,
    0x2461, 0x2462, 0x2463, 0x2464, 0x2465, 0x2466, 0x2467, 0x2468,
    0x2469, 0x246A, 0x246B, 0x246C, 0x246D, 0x246E, 0x00BD, 0x2153,
    0x2154, 0x00BC, 0x00BE, 0x215B, 0x215C, 0x215D, 0x215E, 0xFFFF,
    0xFFFF, 0xCBC5, 0xCBC6, 0xCBC7, 0xCBC8, 0xCBC9, 0xCBCA, 0xCBCB,
    0xCBCC, 0xCBCD, 0xCBCE, 0xCBCF, 0xCBD0, 0xCBD1, 0xCBD2, 0xCBD3,
    0xCBD5, 0xCBD6, 0xCBD7, 0xCBD8, 0xCBD9, 0xCBDA, 0xCBDB, 0xCBDC,
    0xCBDD, 0xCBDE, 0xCBDF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCBE0, 0xCBE1, 0xCBE2, 0xCBE3, 0xCBE5, 0xCBE6, 0xCBE8,
    0xCBEA, 0xCBEB, 0xCBEC, 0xCBED, 0xCBEE, 0xCBEF, 0xCBF0, 0xCBF1,
    0xCBF2, 0xCBF3, 0xCBF4, 0xCBF5, 0xCBF6, 0xCBF7, 0xCBF8, 0xCBF9,
    0xCBFA, 0xCBFB, 0xCBFC, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCBFD, 0xCBFE, 0xCBFF, 0xCC00, 0xCC01, 0xCC02, 0xCC03,
    0xCC04, 0xCC05, 0xCC06, 0xCC07, 0xCC08, 0xCC09, 0xCC0A, 0xCC0B,
    0xCC0E, 0xCC0F, 0xCC11, 0xCC12, 0xCC13, 0xCC15, 0xCC16, 0xCC17,
    0xCC18, 0xCC19, 0xCC1A, 0xCC1B, 0xCC1E, 0xCC1F, 0xCC20, 0xCC23,
    0xCC24, 0x00E6, 0x0111, 0x00F0, 0x0127, 0x0131, 0x0133, 0x0138,
    0x0140, 0x0142, 0x00F8, 0x0153, 0x00DF, 0x00FE, 0x0167, 0x014B,
    0x0149, 0x3200, 0x3201, 0x3202, 0x3203, 0x3204, 0x3205, 0x3206,
    0x3207, 0x3208, 0x3209, 0x320A, 0x320B, 0x320C, 0x320D, 0x320E,
    0x320F, 0x3210, 0x3211, 0x3212, 0x3213, 0x3214, 0x3215, 0x3216,
    0x3217, 0x3218, 0x3219, 0x321A, 0x321B, 0x249C, 0x249D, 0x249E,
    0x249F, 0x24A0, 0x24A1, 0x24A2, 0x24A3, 0x24A4, 0x24A5, 0x24A6,
    0x24A7, 0x24A8, 0x24A9, 0x24AA, 0x24AB, 0x24AC, 0x24AD, 0x24AE,
    0x24AF, 0x24B0, 0x24B1, 0x24B2, 0x24B3, 0x24B4, 0x24B5, 0x2474,
    0x2475, 0x2476, 0x2477, 0x2478, 0x2479, 0x247A, 0x247B, 0x247C,
    0x247D, 0x247E, 0x247F, 0x2480, 0x2481, 0x2482, 0x00B9, 0x00B2,
    0x00B3, 0x2074, 0x207F, 0x2081, 0x2082, 0x2083, 0x2084, 0xFFFF,
    0xFFFF, 0xCC25, 0xCC26, 0xCC2A, 0xCC2B, 0xCC2D, 0xCC2F, 0xCC31,
    0xCC32, 0xCC33, 0xCC34, 0xCC35, 0xCC36, 0xCC37, 0xCC3A, 0xCC3F,
    0xCC40, 0xCC41, 0xCC42, 0xCC43, 0xCC46, 0xCC47, 0xCC49, 0xCC4A,
    0xCC4B, 0xCC4D, 0xCC4E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCC4F, 0xCC50, 0xCC51, 0xCC52, 0xCC53, 0xCC56, 0xCC5A,
    0xCC5B, 0xCC5C, 0xCC5D, 0xCC5E, 0xCC5F, 0xCC61, 0xCC62, 0xCC63,
    0xCC65, 0xCC67, 0xCC69, 0xCC6A, 0xCC6B, 0xCC6C, 0xCC6D, 0xCC6E,
    0xCC6F, 0xCC71, 0xCC72, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCC73, 0xCC74, 0xCC76, 0xCC77, 0xCC78, 0xCC79, 0xCC7A,
    0xCC7B, 0xCC7C, 0xCC7D, 0xCC7E, 0xCC7F, 0xCC80, 0xCC81, 0xCC82,
    0xCC83, 0xCC84, 0xCC85, 0xCC86, 0xCC87, 0xCC88, 0xCC89, 0xCC8A,
    0xCC8B, 0xCC8C, 0xCC8D, 0xCC8E, 0xCC8F, 0xCC90, 0xCC91, 0xCC92,
    0xCC93, 0x3041, 0x3042, 0x3043, 0x3044, 0x3045, 0x3046, 0x3047,
    0x3048, 0x3049, 0x304A, 0x304B, 0x304C, 0x304D, 0x304E, 0x304F,
    0x3050, 0x3051, 0x3052, 0x3053, 0x3054, 0x3055, 0x3056, 0x3057,
    0x3058, 0x3059, 0x305A, 0x305B, 0x305C, 0x305D, 0x305E, 0x305F,
    0x3060, 0x3061, 0x3062, 0x3063, 0x3064, 0x3065, 0x3066, 0x3067,
    0x3068, 0x3069, 0x306A, 0x306B, 0x306C, 0x306D, 0x306E, 0x306F,
    0x3070, 0x3071, 0x3072, 0x3073, 0x3074, 0x3075, 0x3076, 0x3077,
    0x3078, 0x3079, 0x307A, 0x307B, 0x307C, 0x307D, 0x307E, 0x307F,
    0x3080, 0x3081, 0x3082, 0x3083, 0x3084, 0x3085, 0x3086, 0x3087,
    0x3088, 0x3089, 0x308A, 0x308B, 0x308C, 0x308D, 0x308E, 0x308F,
    0x3090, 0x3091, 0x3092, 0x3093, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCC94, 0xCC95, 0xCC96, 0xCC97, 0xCC9A, 0xCC9B, 0xCC9D,
    0xCC9E, 0xCC9F, 0xCCA1, 0xCCA2, 0xCCA3, 0xCCA4, 0xCCA5, 0xCCA6,
    0xCCA7, 0xCCAA, 0xCCAE, 0xCCAF, 0xCCB0, 0xCCB1, 0xCCB2, 0xCCB3,
    0xCCB6, 0xCCB7, 0xCCB9, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCCBA, 0xCCBB, 0xCCBD, 0xCCBE, 0xCCBF, 0xCCC0, 0xCCC1,
    0xCCC2, 0xCCC3, 0xCCC6, 0xCCC8, 0xCCCA, 0xCCCB, 0xCCCC, 0xCCCD,
    0xCCCE, 0xCCCF, 0xCCD1, 0xCCD2, 0xCCD3, 0xCCD5, 0xCCD6, 0xCCD7,
    0xCCD8, 0xCCD9, 0xCCDA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCCDB, 0xCCDC, 0xCCDD, 0xCCDE, 0xCCDF, 0xCCE0, 0xCCE1,
    0xCCE2, 0xCCE3, 0xCCE5, 0xCCE6, 0xCCE7, 0xCCE8, 0xCCE9, 0xCCEA,
    0xCCEB, 0xCCED, 0xCCEE, 0xCCEF, 0xCCF1, 0xCCF2, 0xCCF3, 0xCCF4,
    0xCCF5, 0xCCF6, 0xCCF7, 0xCCF8, 0xCCF9, 0xCCFA, 0xCCFB, 0xCCFC,
    0xCCFD, 0x30A1, 0x30A2, 0x30A3, 0x30A4, 0x30A5, 0x30A6, 0x30A7,
    0x30A8, 0x30A9, 0x30AA, 0x30AB, 0x30AC, 0x30AD, 0x30AE, 0x30AF,
    0x30B0, 0x30B1, 0x30B2, 0x30B3, 0x30B4, 0x30B5, 0x30B6, 0x30B7,
    0x30B8, 0x30B9, 0x30BA, 0x30BB, 0x30BC, 0x30BD, 0x30BE, 0x30BF,
    0x30C0, 0x30C1, 0x30C2, 0x30C3, 0x30C4, 0x30C5, 0x30C6, 0x30C7,
    0x30C8, 0x30C9, 0x30CA, 0x30CB, 0x30CC, 0x30CD, 0x30CE, 0x30CF,
    0x30D0, 0x30D1, 0x30D2, 0x30D3, 0x30D4, 0x30D5, 0x30D6, 0x30D7,
    0x30D8, 0x30D9, 0x30DA, 0x30DB, 0x30DC, 0x30DD, 0x30DE, 0x30DF,
    0x30E0, 0x30E1, 0x30E2, 0x30E3, 0x30E4, 0x30E5, 0x30E6, 0x30E7,
    0x30E8, 0x30E9, 0x30EA, 0x30EB, 0x30EC, 0x30ED, 0x30EE, 0x30EF,
    0x30F0, 0x30F1, 0x30F2, 0x30F3, 0x30F4, 0x30F5, 0x30F6, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCCFE, 0xCCFF, 0xCD00, 0xCD02, 0xCD03, 0xCD04, 0xCD05,
    0xCD06, 0xCD07, 0xCD0A, 0xCD0B, 0xCD0D, 0xCD0E, 0xCD0F, 0xCD11,
    0xCD12, 0xCD13, 0xCD14, 0xCD15, 0xCD16, 0xCD17, 0xCD1A, 0xCD1C,
    0xCD1E, 0xCD1F, 0xCD20, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCD21, 0xCD22, 0xCD23, 0xCD25, 0xCD26, 0xCD27, 0xCD29,
    0xCD2A, 0xCD2B, 0xCD2D, 0xCD2E, 0xCD2F, 0xCD30, 0xCD31, 0xCD32,
    0xCD33, 0xCD34, 0xCD35, 0xCD36, 0xCD37, 0xCD38, 0xCD3A, 0xCD3B,
    0xCD3C, 0xCD3D, 0xCD3E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCD3F, 0xCD40, 0xCD41, 0xCD42, 0xCD43, 0xCD44, 0xCD45,
    0xCD46, 0xCD47, 0xCD48, 0xCD49, 0xCD4A, 0xCD4B, 0xCD4C, 0xCD4D,
    0xCD4E, 0xCD4F, 0xCD50, 0xCD51, 0xCD52, 0xCD53, 0xCD54, 0xCD55,
    0xCD56, 0xCD57, 0xCD58, 0xCD59, 0xCD5A, 0xCD5B, 0xCD5D, 0xCD5E,
    0xCD5F, 0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0415, 0x0401,
    0x0416, 0x0417, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D,
    0x041E, 0x041F, 0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425,
    0x0426, 0x0427, 0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D,
    0x042E, 0x042F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0x0430, 0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0451,
    0x0436, 0x0437, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D,
    0x043E, 0x043F, 0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445,
    0x0446, 0x0447, 0x0448, 0x0449, 0x044A, 0x044B, 0x044C, 0x044D,
    0x044E, 0x044F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCD61, 0xCD62, 0xCD63, 0xCD65, 0xCD66, 0xCD67, 0xCD68,
    0xCD69, 0xCD6A, 0xCD6B, 0xCD6E, 0xCD70, 0xCD72, 0xCD73, 0xCD74,
    0xCD75, 0xCD76, 0xCD77, 0xCD79, 0xCD7A, 0xCD7B, 0xCD7C, 0xCD7D,
    0xCD7E, 0xCD7F, 0xCD80, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCD81, 0xCD82, 0xCD83, 0xCD84, 0xCD85, 0xCD86, 0xCD87,
    0xCD89, 0xCD8A, 0xCD8B, 0xCD8C, 0xCD8D, 0xCD8E, 0xCD8F, 0xCD90,
    0xCD91, 0xCD92, 0xCD93, 0xCD96, 0xCD97, 0xCD99, 0xCD9A, 0xCD9B,
    0xCD9D, 0xCD9E, 0xCD9F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCDA0, 0xCDA1, 0xCDA2, 0xCDA3, 0xCDA6, 0xCDA8, 0xCDAA,
    0xCDAB, 0xCDAC, 0xCDAD, 0xCDAE, 0xCDAF, 0xCDB1, 0xCDB2, 0xCDB3,
    0xCDB4, 0xCDB5, 0xCDB6, 0xCDB7, 0xCDB8, 0xCDB9, 0xCDBA, 0xCDBB,
    0xCDBC, 0xCDBD, 0xCDBE, 0xCDBF, 0xCDC0, 0xCDC1, 0xCDC2, 0xCDC3,
    0xCDC5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
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
    0xFFFF, 0xCDC6, 0xCDC7, 0xCDC8, 0xCDC9, 0xCDCA, 0xCDCB, 0xCDCD,
    0xCDCE, 0xCDCF, 0xCDD1, 0xCDD2, 0xCDD3, 0xCDD4, 0xCDD5, 0xCDD6,
    0xCDD7, 0xCDD8, 0xCDD9, 0xCDDA, 0xCDDB, 0xCDDC, 0xCDDD, 0xCDDE,
    0xCDDF, 0xCDE0, 0xCDE1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCDE2, 0xCDE3, 0xCDE4, 0xCDE5, 0xCDE6, 0xCDE7, 0xCDE9,
    0xCDEA, 0xCDEB, 0xCDED, 0xCDEE, 0xCDEF, 0xCDF1, 0xCDF2, 0xCDF3,
    0xCDF4, 0xCDF5, 0xCDF6, 0xCDF7, 0xCDFA, 0xCDFC, 0xCDFE, 0xCDFF,
    0xCE00, 0xCE01, 0xCE02, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCE03, 0xCE05, 0xCE06, 0xCE07, 0xCE09, 0xCE0A, 0xCE0B,
    0xCE0D, 0xCE0E, 0xCE0F, 0xCE10, 0xCE11, 0xCE12, 0xCE13, 0xCE15,
    0xCE16, 0xCE17, 0xCE18, 0xCE1A, 0xCE1B, 0xCE1C, 0xCE1D, 0xCE1E,
    0xCE1F, 0xCE22, 0xCE23, 0xCE25, 0xCE26, 0xCE27, 0xCE29, 0xCE2A,
    0xCE2B, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
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
    0xFFFF, 0xCE2C, 0xCE2D, 0xCE2E, 0xCE2F, 0xCE32, 0xCE34, 0xCE36,
    0xCE37, 0xCE38, 0xCE39, 0xCE3A, 0xCE3B, 0xCE3C, 0xCE3D, 0xCE3E,
    0xCE3F, 0xCE40, 0xCE41, 0xCE42, 0xCE43, 0xCE44, 0xCE45, 0xCE46,
    0xCE47, 0xCE48, 0xCE49, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCE4A, 0xCE4B, 0xCE4C, 0xCE4D, 0xCE4E, 0xCE4F, 0xCE50,
    0xCE51, 0xCE52, 0xCE53, 0xCE54, 0xCE55, 0xCE56, 0xCE57, 0xCE5A,
    0xCE5B, 0xCE5D, 0xCE5E, 0xCE62, 0xCE63, 0xCE64, 0xCE65, 0xCE66,
    0xCE67, 0xCE6A, 0xCE6C, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCE6E, 0xCE6F, 0xCE70, 0xCE71, 0xCE72, 0xCE73, 0xCE76,
    0xCE77, 0xCE79, 0xCE7A, 0xCE7B, 0xCE7D, 0xCE7E, 0xCE7F, 0xCE80,
    0xCE81, 0xCE82, 0xCE83, 0xCE86, 0xCE88, 0xCE8A, 0xCE8B, 0xCE8C,
    0xCE8D, 0xCE8E, 0xCE8F, 0xCE92, 0xCE93, 0xCE95, 0xCE96, 0xCE97,
    0xCE99, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
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
    0xFFFF, 0xCE9A, 0xCE9B, 0xCE9C, 0xCE9D, 0xCE9E, 0xCE9F, 0xCEA2,
    0xCEA6, 0xCEA7, 0xCEA8, 0xCEA9, 0xCEAA, 0xCEAB, 0xCEAE, 0xCEAF,
    0xCEB0, 0xCEB1, 0xCEB2, 0xCEB3, 0xCEB4, 0xCEB5, 0xCEB6, 0xCEB7,
    0xCEB8, 0xCEB9, 0xCEBA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCEBB, 0xCEBC, 0xCEBD, 0xCEBE, 0xCEBF, 0xCEC0, 0xCEC2,
    0xCEC3, 0xCEC4, 0xCEC5, 0xCEC6, 0xCEC7, 0xCEC8, 0xCEC9, 0xCECA,
    0xCECB, 0xCECC, 0xCECD, 0xCECE, 0xCECF, 0xCED0, 0xCED1, 0xCED2,
    0xCED3, 0xCED4, 0xCED5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCED6, 0xCED7, 0xCED8, 0xCED9, 0xCEDA, 0xCEDB, 0xCEDC,
    0xCEDD, 0xCEDE, 0xCEDF, 0xCEE0, 0xCEE1, 0xCEE2, 0xCEE3, 0xCEE6,
    0xCEE7, 0xCEE9, 0xCEEA, 0xCEED, 0xCEEE, 0xCEEF, 0xCEF0, 0xCEF1,
    0xCEF2, 0xCEF3, 0xCEF6, 0xCEFA, 0xCEFB, 0xCEFC, 0xCEFD, 0xCEFE,
    0xCEFF, 0xAC00, 0xAC01, 0xAC04, 0xAC07, 0xAC08, 0xAC09, 0xAC0A,
    0xAC10, 0xAC11, 0xAC12, 0xAC13, 0xAC14, 0xAC15, 0xAC16, 0xAC17,
    0xAC19, 0xAC1A, 0xAC1B, 0xAC1C, 0xAC1D, 0xAC20, 0xAC24, 0xAC2C,
    0xAC2D, 0xAC2F, 0xAC30, 0xAC31, 0xAC38, 0xAC39, 0xAC3C, 0xAC40,
    0xAC4B, 0xAC4D, 0xAC54, 0xAC58, 0xAC5C, 0xAC70, 0xAC71, 0xAC74,
    0xAC77, 0xAC78, 0xAC7A, 0xAC80, 0xAC81, 0xAC83, 0xAC84, 0xAC85,
    0xAC86, 0xAC89, 0xAC8A, 0xAC8B, 0xAC8C, 0xAC90, 0xAC94, 0xAC9C,
    0xAC9D, 0xAC9F, 0xACA0, 0xACA1, 0xACA8, 0xACA9, 0xACAA, 0xACAC,
    0xACAF, 0xACB0, 0xACB8, 0xACB9, 0xACBB, 0xACBC, 0xACBD, 0xACC1,
    0xACC4, 0xACC8, 0xACCC, 0xACD5, 0xACD7, 0xACE0, 0xACE1, 0xACE4,
    0xACE7, 0xACE8, 0xACEA, 0xACEC, 0xACEF, 0xACF0, 0xACF1, 0xACF3,
    0xACF5, 0xACF6, 0xACFC, 0xACFD, 0xAD00, 0xAD04, 0xAD06, 0xFFFF,
    0xFFFF, 0xCF02, 0xCF03, 0xCF05, 0xCF06, 0xCF07, 0xCF09, 0xCF0A,
    0xCF0B, 0xCF0C, 0xCF0D, 0xCF0E, 0xCF0F, 0xCF12, 0xCF14, 0xCF16,
    0xCF17, 0xCF18, 0xCF19, 0xCF1A, 0xCF1B, 0xCF1D, 0xCF1E, 0xCF1F,
    0xCF21, 0xCF22, 0xCF23, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCF25, 0xCF26, 0xCF27, 0xCF28, 0xCF29, 0xCF2A, 0xCF2B,
    0xCF2E, 0xCF32, 0xCF33, 0xCF34, 0xCF35, 0xCF36, 0xCF37, 0xCF39,
    0xCF3A, 0xCF3B, 0xCF3C, 0xCF3D, 0xCF3E, 0xCF3F, 0xCF40, 0xCF41,
    0xCF42, 0xCF43, 0xCF44, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCF45, 0xCF46, 0xCF47, 0xCF48, 0xCF49, 0xCF4A, 0xCF4B,
    0xCF4C, 0xCF4D, 0xCF4E, 0xCF4F, 0xCF50, 0xCF51, 0xCF52, 0xCF53,
    0xCF56, 0xCF57, 0xCF59, 0xCF5A, 0xCF5B, 0xCF5D, 0xCF5E, 0xCF5F,
    0xCF60, 0xCF61, 0xCF62, 0xCF63, 0xCF66, 0xCF68, 0xCF6A, 0xCF6B,
    0xCF6C, 0xAD0C, 0xAD0D, 0xAD0F, 0xAD11, 0xAD18, 0xAD1C, 0xAD20,
    0xAD29, 0xAD2C, 0xAD2D, 0xAD34, 0xAD35, 0xAD38, 0xAD3C, 0xAD44,
    0xAD45, 0xAD47, 0xAD49, 0xAD50, 0xAD54, 0xAD58, 0xAD61, 0xAD63,
    0xAD6C, 0xAD6D, 0xAD70, 0xAD73, 0xAD74, 0xAD75, 0xAD76, 0xAD7B,
    0xAD7C, 0xAD7D, 0xAD7F, 0xAD81, 0xAD82, 0xAD88, 0xAD89, 0xAD8C,
    0xAD90, 0xAD9C, 0xAD9D, 0xADA4, 0xADB7, 0xADC0, 0xADC1, 0xADC4,
    0xADC8, 0xADD0, 0xADD1, 0xADD3, 0xADDC, 0xADE0, 0xADE4, 0xADF8,
    0xADF9, 0xADFC, 0xADFF, 0xAE00, 0xAE01, 0xAE08, 0xAE09, 0xAE0B,
    0xAE0D, 0xAE14, 0xAE30, 0xAE31, 0xAE34, 0xAE37, 0xAE38, 0xAE3A,
    0xAE40, 0xAE41, 0xAE43, 0xAE45, 0xAE46, 0xAE4A, 0xAE4C, 0xAE4D,
    0xAE4E, 0xAE50, 0xAE54, 0xAE56, 0xAE5C, 0xAE5D, 0xAE5F, 0xAE60,
    0xAE61, 0xAE65, 0xAE68, 0xAE69, 0xAE6C, 0xAE70, 0xAE78, 0xFFFF,
    0xFFFF, 0xCF6D, 0xCF6E, 0xCF6F, 0xCF72, 0xCF73, 0xCF75, 0xCF76,
    0xCF77, 0xCF79, 0xCF7A, 0xCF7B, 0xCF7C, 0xCF7D, 0xCF7E, 0xCF7F,
    0xCF81, 0xCF82, 0xCF83, 0xCF84, 0xCF86, 0xCF87, 0xCF88, 0xCF89,
    0xCF8A, 0xCF8B, 0xCF8D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCF8E, 0xCF8F, 0xCF90, 0xCF91, 0xCF92, 0xCF93, 0xCF94,
    0xCF95, 0xCF96, 0xCF97, 0xCF98, 0xCF99, 0xCF9A, 0xCF9B, 0xCF9C,
    0xCF9D, 0xCF9E, 0xCF9F, 0xCFA0, 0xCFA2, 0xCFA3, 0xCFA4, 0xCFA5,
    0xCFA6, 0xCFA7, 0xCFA9, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCFAA, 0xCFAB, 0xCFAC, 0xCFAD, 0xCFAE, 0xCFAF, 0xCFB1,
    0xCFB2, 0xCFB3, 0xCFB4, 0xCFB5, 0xCFB6, 0xCFB7, 0xCFB8, 0xCFB9,
    0xCFBA, 0xCFBB, 0xCFBC, 0xCFBD, 0xCFBE, 0xCFBF, 0xCFC0, 0xCFC1,
    0xCFC2, 0xCFC3, 0xCFC5, 0xCFC6, 0xCFC7, 0xCFC8, 0xCFC9, 0xCFCA,
    0xCFCB, 0xAE79, 0xAE7B, 0xAE7C, 0xAE7D, 0xAE84, 0xAE85, 0xAE8C,
    0xAEBC, 0xAEBD, 0xAEBE, 0xAEC0, 0xAEC4, 0xAECC, 0xAECD, 0xAECF,
    0xAED0, 0xAED1, 0xAED8, 0xAED9, 0xAEDC, 0xAEE8, 0xAEEB, 0xAEED,
    0xAEF4, 0xAEF8, 0xAEFC, 0xAF07, 0xAF08, 0xAF0D, 0xAF10, 0xAF2C,
    0xAF2D, 0xAF30, 0xAF32, 0xAF34, 0xAF3C, 0xAF3D, 0xAF3F, 0xAF41,
    0xAF42, 0xAF43, 0xAF48, 0xAF49, 0xAF50, 0xAF5C, 0xAF5D, 0xAF64,
    0xAF65, 0xAF79, 0xAF80, 0xAF84, 0xAF88, 0xAF90, 0xAF91, 0xAF95,
    0xAF9C, 0xAFB8, 0xAFB9, 0xAFBC, 0xAFC0, 0xAFC7, 0xAFC8, 0xAFC9,
    0xAFCB, 0xAFCD, 0xAFCE, 0xAFD4, 0xAFDC, 0xAFE8, 0xAFE9, 0xAFF0,
    0xAFF1, 0xAFF4, 0xAFF8, 0xB000, 0xB001, 0xB004, 0xB00C, 0xB010,
    0xB014, 0xB01C, 0xB01D, 0xB028, 0xB044, 0xB045, 0xB048, 0xB04A,
    0xB04C, 0xB04E, 0xB053, 0xB054, 0xB055, 0xB057, 0xB059, 0xFFFF,
    0xFFFF, 0xCFCC, 0xCFCD, 0xCFCE, 0xCFCF, 0xCFD0, 0xCFD1, 0xCFD2,
    0xCFD3, 0xCFD4, 0xCFD5, 0xCFD6, 0xCFD7, 0xCFD8, 0xCFD9, 0xCFDA,
    0xCFDB, 0xCFDC, 0xCFDD, 0xCFDE, 0xCFDF, 0xCFE2, 0xCFE3, 0xCFE5,
    0xCFE6, 0xCFE7, 0xCFE9, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xCFEA, 0xCFEB, 0xCFEC, 0xCFED, 0xCFEE, 0xCFEF, 0xCFF2,
    0xCFF4, 0xCFF6, 0xCFF7, 0xCFF8, 0xCFF9, 0xCFFA, 0xCFFB, 0xCFFD,
    0xCFFE, 0xCFFF, 0xD001, 0xD002, 0xD003, 0xD005, 0xD006, 0xD007,
    0xD008, 0xD009, 0xD00A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD00B, 0xD00C, 0xD00D, 0xD00E, 0xD00F, 0xD010, 0xD012,
    0xD013, 0xD014, 0xD015, 0xD016, 0xD017, 0xD019, 0xD01A, 0xD01B,
    0xD01C, 0xD01D, 0xD01E, 0xD01F, 0xD020, 0xD021, 0xD022, 0xD023,
    0xD024, 0xD025, 0xD026, 0xD027, 0xD028, 0xD029, 0xD02A, 0xD02B,
    0xD02C, 0xB05D, 0xB07C, 0xB07D, 0xB080, 0xB084, 0xB08C, 0xB08D,
    0xB08F, 0xB091, 0xB098, 0xB099, 0xB09A, 0xB09C, 0xB09F, 0xB0A0,
    0xB0A1, 0xB0A2, 0xB0A8, 0xB0A9, 0xB0AB, 0xB0AC, 0xB0AD, 0xB0AE,
    0xB0AF, 0xB0B1, 0xB0B3, 0xB0B4, 0xB0B5, 0xB0B8, 0xB0BC, 0xB0C4,
    0xB0C5, 0xB0C7, 0xB0C8, 0xB0C9, 0xB0D0, 0xB0D1, 0xB0D4, 0xB0D8,
    0xB0E0, 0xB0E5, 0xB108, 0xB109, 0xB10B, 0xB10C, 0xB110, 0xB112,
    0xB113, 0xB118, 0xB119, 0xB11B, 0xB11C, 0xB11D, 0xB123, 0xB124,
    0xB125, 0xB128, 0xB12C, 0xB134, 0xB135, 0xB137, 0xB138, 0xB139,
    0xB140, 0xB141, 0xB144, 0xB148, 0xB150, 0xB151, 0xB154, 0xB155,
    0xB158, 0xB15C, 0xB160, 0xB178, 0xB179, 0xB17C, 0xB180, 0xB182,
    0xB188, 0xB189, 0xB18B, 0xB18D, 0xB192, 0xB193, 0xB194, 0xB198,
    0xB19C, 0xB1A8, 0xB1CC, 0xB1D0, 0xB1D4, 0xB1DC, 0xB1DD, 0xFFFF,
    0xFFFF, 0xD02E, 0xD02F, 0xD030, 0xD031, 0xD032, 0xD033, 0xD036,
    0xD037, 0xD039, 0xD03A, 0xD03B, 0xD03D, 0xD03E, 0xD03F, 0xD040,
    0xD041, 0xD042, 0xD043, 0xD046, 0xD048, 0xD04A, 0xD04B, 0xD04C,
    0xD04D, 0xD04E, 0xD04F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD051, 0xD052, 0xD053, 0xD055, 0xD056, 0xD057, 0xD059,
    0xD05A, 0xD05B, 0xD05C, 0xD05D, 0xD05E, 0xD05F, 0xD061, 0xD062,
    0xD063, 0xD064, 0xD065, 0xD066, 0xD067, 0xD068, 0xD069, 0xD06A,
    0xD06B, 0xD06E, 0xD06F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD071, 0xD072, 0xD073, 0xD075, 0xD076, 0xD077, 0xD078,
    0xD079, 0xD07A, 0xD07B, 0xD07E, 0xD07F, 0xD080, 0xD082, 0xD083,
    0xD084, 0xD085, 0xD086, 0xD087, 0xD088, 0xD089, 0xD08A, 0xD08B,
    0xD08C, 0xD08D, 0xD08E, 0xD08F, 0xD090, 0xD091, 0xD092, 0xD093,
    0xD094, 0xB1DF, 0xB1E8, 0xB1E9, 0xB1EC, 0xB1F0, 0xB1F9, 0xB1FB,
    0xB1FD, 0xB204, 0xB205, 0xB208, 0xB20B, 0xB20C, 0xB214, 0xB215,
    0xB217, 0xB219, 0xB220, 0xB234, 0xB23C, 0xB258, 0xB25C, 0xB260,
    0xB268, 0xB269, 0xB274, 0xB275, 0xB27C, 0xB284, 0xB285, 0xB289,
    0xB290, 0xB291, 0xB294, 0xB298, 0xB299, 0xB29A, 0xB2A0, 0xB2A1,
    0xB2A3, 0xB2A5, 0xB2A6, 0xB2AA, 0xB2AC, 0xB2B0, 0xB2B4, 0xB2C8,
    0xB2C9, 0xB2CC, 0xB2D0, 0xB2D2, 0xB2D8, 0xB2D9, 0xB2DB, 0xB2DD,
    0xB2E2, 0xB2E4, 0xB2E5, 0xB2E6, 0xB2E8, 0xB2EB, 0xB2EC, 0xB2ED,
    0xB2EE, 0xB2EF, 0xB2F3, 0xB2F4, 0xB2F5, 0xB2F7, 0xB2F8, 0xB2F9,
    0xB2FA, 0xB2FB, 0xB2FF, 0xB300, 0xB301, 0xB304, 0xB308, 0xB310,
    0xB311, 0xB313, 0xB314, 0xB315, 0xB31C, 0xB354, 0xB355, 0xB356,
    0xB358, 0xB35B, 0xB35C, 0xB35E, 0xB35F, 0xB364, 0xB365, 0xFFFF,
    0xFFFF, 0xD095, 0xD096, 0xD097, 0xD098, 0xD099, 0xD09A, 0xD09B,
    0xD09C, 0xD09D, 0xD09E, 0xD09F, 0xD0A0, 0xD0A1, 0xD0A2, 0xD0A3,
    0xD0A6, 0xD0A7, 0xD0A9, 0xD0AA, 0xD0AB, 0xD0AD, 0xD0AE, 0xD0AF,
    0xD0B0, 0xD0B1, 0xD0B2, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD0B3, 0xD0B6, 0xD0B8, 0xD0BA, 0xD0BB, 0xD0BC, 0xD0BD,
    0xD0BE, 0xD0BF, 0xD0C2, 0xD0C3, 0xD0C5, 0xD0C6, 0xD0C7, 0xD0CA,
    0xD0CB, 0xD0CC, 0xD0CD, 0xD0CE, 0xD0CF, 0xD0D2, 0xD0D6, 0xD0D7,
    0xD0D8, 0xD0D9, 0xD0DA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD0DB, 0xD0DE, 0xD0DF, 0xD0E1, 0xD0E2, 0xD0E3, 0xD0E5,
    0xD0E6, 0xD0E7, 0xD0E8, 0xD0E9, 0xD0EA, 0xD0EB, 0xD0EE, 0xD0F2,
    0xD0F3, 0xD0F4, 0xD0F5, 0xD0F6, 0xD0F7, 0xD0F9, 0xD0FA, 0xD0FB,
    0xD0FC, 0xD0FD, 0xD0FE, 0xD0FF, 0xD100, 0xD101, 0xD102, 0xD103,
    0xD104, 0xB367, 0xB369, 0xB36B, 0xB36E, 0xB370, 0xB371, 0xB374,
    0xB378, 0xB380, 0xB381, 0xB383, 0xB384, 0xB385, 0xB38C, 0xB390,
    0xB394, 0xB3A0, 0xB3A1, 0xB3A8, 0xB3AC, 0xB3C4, 0xB3C5, 0xB3C8,
    0xB3CB, 0xB3CC, 0xB3CE, 0xB3D0, 0xB3D4, 0xB3D5, 0xB3D7, 0xB3D9,
    0xB3DB, 0xB3DD, 0xB3E0, 0xB3E4, 0xB3E8, 0xB3FC, 0xB410, 0xB418,
    0xB41C, 0xB420, 0xB428, 0xB429, 0xB42B, 0xB434, 0xB450, 0xB451,
    0xB454, 0xB458, 0xB460, 0xB461, 0xB463, 0xB465, 0xB46C, 0xB480,
    0xB488, 0xB49D, 0xB4A4, 0xB4A8, 0xB4AC, 0xB4B5, 0xB4B7, 0xB4B9,
    0xB4C0, 0xB4C4, 0xB4C8, 0xB4D0, 0xB4D5, 0xB4DC, 0xB4DD, 0xB4E0,
    0xB4E3, 0xB4E4, 0xB4E6, 0xB4EC, 0xB4ED, 0xB4EF, 0xB4F1, 0xB4F8,
    0xB514, 0xB515, 0xB518, 0xB51B, 0xB51C, 0xB524, 0xB525, 0xB527,
    0xB528, 0xB529, 0xB52A, 0xB530, 0xB531, 0xB534, 0xB538, 0xFFFF,
    0xFFFF, 0xD105, 0xD106, 0xD107, 0xD108, 0xD109, 0xD10A, 0xD10B,
    0xD10C, 0xD10E, 0xD10F, 0xD110, 0xD111, 0xD112, 0xD113, 0xD114,
    0xD115, 0xD116, 0xD117, 0xD118, 0xD119, 0xD11A, 0xD11B, 0xD11C,
    0xD11D, 0xD11E, 0xD11F, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD120, 0xD121, 0xD122, 0xD123, 0xD124, 0xD125, 0xD126,
    0xD127, 0xD128, 0xD129, 0xD12A, 0xD12B, 0xD12C, 0xD12D, 0xD12E,
    0xD12F, 0xD132, 0xD133, 0xD135, 0xD136, 0xD137, 0xD139, 0xD13B,
    0xD13C, 0xD13D, 0xD13E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD13F, 0xD142, 0xD146, 0xD147, 0xD148, 0xD149, 0xD14A,
    0xD14B, 0xD14E, 0xD14F, 0xD151, 0xD152, 0xD153, 0xD155, 0xD156,
    0xD157, 0xD158, 0xD159, 0xD15A, 0xD15B, 0xD15E, 0xD160, 0xD162,
    0xD163, 0xD164, 0xD165, 0xD166, 0xD167, 0xD169, 0xD16A, 0xD16B,
    0xD16D, 0xB540, 0xB541, 0xB543, 0xB544, 0xB545, 0xB54B, 0xB54C,
    0xB54D, 0xB550, 0xB554, 0xB55C, 0xB55D, 0xB55F, 0xB560, 0xB561,
    0xB5A0, 0xB5A1, 0xB5A4, 0xB5A8, 0xB5AA, 0xB5AB, 0xB5B0, 0xB5B1,
    0xB5B3, 0xB5B4, 0xB5B5, 0xB5BB, 0xB5BC, 0xB5BD, 0xB5C0, 0xB5C4,
    0xB5CC, 0xB5CD, 0xB5CF, 0xB5D0, 0xB5D1, 0xB5D8, 0xB5EC, 0xB610,
    0xB611, 0xB614, 0xB618, 0xB625, 0xB62C, 0xB634, 0xB648, 0xB664,
    0xB668, 0xB69C, 0xB69D, 0xB6A0, 0xB6A4, 0xB6AB, 0xB6AC, 0xB6B1,
    0xB6D4, 0xB6F0, 0xB6F4, 0xB6F8, 0xB700, 0xB701, 0xB705, 0xB728,
    0xB729, 0xB72C, 0xB72F, 0xB730, 0xB738, 0xB739, 0xB73B, 0xB744,
    0xB748, 0xB74C, 0xB754, 0xB755, 0xB760, 0xB764, 0xB768, 0xB770,
    0xB771, 0xB773, 0xB775, 0xB77C, 0xB77D, 0xB780, 0xB784, 0xB78C,
    0xB78D, 0xB78F, 0xB790, 0xB791, 0xB792, 0xB796, 0xB797, 0xFFFF,
    0xFFFF, 0xD16E, 0xD16F, 0xD170, 0xD171, 0xD172, 0xD173, 0xD174,
    0xD175, 0xD176, 0xD177, 0xD178, 0xD179, 0xD17A, 0xD17B, 0xD17D,
    0xD17E, 0xD17F, 0xD180, 0xD181, 0xD182, 0xD183, 0xD185, 0xD186,
    0xD187, 0xD189, 0xD18A, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD18B, 0xD18C, 0xD18D, 0xD18E, 0xD18F, 0xD190, 0xD191,
    0xD192, 0xD193, 0xD194, 0xD195, 0xD196, 0xD197, 0xD198, 0xD199,
    0xD19A, 0xD19B, 0xD19C, 0xD19D, 0xD19E, 0xD19F, 0xD1A2, 0xD1A3,
    0xD1A5, 0xD1A6, 0xD1A7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD1A9, 0xD1AA, 0xD1AB, 0xD1AC, 0xD1AD, 0xD1AE, 0xD1AF,
    0xD1B2, 0xD1B4, 0xD1B6, 0xD1B7, 0xD1B8, 0xD1B9, 0xD1BB, 0xD1BD,
    0xD1BE, 0xD1BF, 0xD1C1, 0xD1C2, 0xD1C3, 0xD1C4, 0xD1C5, 0xD1C6,
    0xD1C7, 0xD1C8, 0xD1C9, 0xD1CA, 0xD1CB, 0xD1CC, 0xD1CD, 0xD1CE,
    0xD1CF, 0xB798, 0xB799, 0xB79C, 0xB7A0, 0xB7A8, 0xB7A9, 0xB7AB,
    0xB7AC, 0xB7AD, 0xB7B4, 0xB7B5, 0xB7B8, 0xB7C7, 0xB7C9, 0xB7EC,
    0xB7ED, 0xB7F0, 0xB7F4, 0xB7FC, 0xB7FD, 0xB7FF, 0xB800, 0xB801,
    0xB807, 0xB808, 0xB809, 0xB80C, 0xB810, 0xB818, 0xB819, 0xB81B,
    0xB81D, 0xB824, 0xB825, 0xB828, 0xB82C, 0xB834, 0xB835, 0xB837,
    0xB838, 0xB839, 0xB840, 0xB844, 0xB851, 0xB853, 0xB85C, 0xB85D,
    0xB860, 0xB864, 0xB86C, 0xB86D, 0xB86F, 0xB871, 0xB878, 0xB87C,
    0xB88D, 0xB8A8, 0xB8B0, 0xB8B4, 0xB8B8, 0xB8C0, 0xB8C1, 0xB8C3,
    0xB8C5, 0xB8CC, 0xB8D0, 0xB8D4, 0xB8DD, 0xB8DF, 0xB8E1, 0xB8E8,
    0xB8E9, 0xB8EC, 0xB8F0, 0xB8F8, 0xB8F9, 0xB8FB, 0xB8FD, 0xB904,
    0xB918, 0xB920, 0xB93C, 0xB93D, 0xB940, 0xB944, 0xB94C, 0xB94F,
    0xB951, 0xB958, 0xB959, 0xB95C, 0xB960, 0xB968, 0xB969, 0xFFFF,
    0xFFFF, 0xD1D0, 0xD1D1, 0xD1D2, 0xD1D3, 0xD1D4, 0xD1D5, 0xD1D6,
    0xD1D7, 0xD1D9, 0xD1DA, 0xD1DB, 0xD1DC, 0xD1DD, 0xD1DE, 0xD1DF,
    0xD1E0, 0xD1E1, 0xD1E2, 0xD1E3, 0xD1E4, 0xD1E5, 0xD1E6, 0xD1E7,
    0xD1E8, 0xD1E9, 0xD1EA, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD1EB, 0xD1EC, 0xD1ED, 0xD1EE, 0xD1EF, 0xD1F0, 0xD1F1,
    0xD1F2, 0xD1F3, 0xD1F5, 0xD1F6, 0xD1F7, 0xD1F9, 0xD1FA, 0xD1FB,
    0xD1FC, 0xD1FD, 0xD1FE, 0xD1FF, 0xD200, 0xD201, 0xD202, 0xD203,
    0xD204, 0xD205, 0xD206, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD208, 0xD20A, 0xD20B, 0xD20C, 0xD20D, 0xD20E, 0xD20F,
    0xD211, 0xD212, 0xD213, 0xD214, 0xD215, 0xD216, 0xD217, 0xD218,
    0xD219, 0xD21A, 0xD21B, 0xD21C, 0xD21D, 0xD21E, 0xD21F, 0xD220,
    0xD221, 0xD222, 0xD223, 0xD224, 0xD225, 0xD226, 0xD227, 0xD228,
    0xD229, 0xB96B, 0xB96D, 0xB974, 0xB975, 0xB978, 0xB97C, 0xB984,
    0xB985, 0xB987, 0xB989, 0xB98A, 0xB98D, 0xB98E, 0xB9AC, 0xB9AD,
    0xB9B0, 0xB9B4, 0xB9BC, 0xB9BD, 0xB9BF, 0xB9C1, 0xB9C8, 0xB9C9,
    0xB9CC, 0xB9CE, 0xB9CF, 0xB9D0, 0xB9D1, 0xB9D2, 0xB9D8, 0xB9D9,
    0xB9DB, 0xB9DD, 0xB9DE, 0xB9E1, 0xB9E3, 0xB9E4, 0xB9E5, 0xB9E8,
    0xB9EC, 0xB9F4, 0xB9F5, 0xB9F7, 0xB9F8, 0xB9F9, 0xB9FA, 0xBA00,
    0xBA01, 0xBA08, 0xBA15, 0xBA38, 0xBA39, 0xBA3C, 0xBA40, 0xBA42,
    0xBA48, 0xBA49, 0xBA4B, 0xBA4D, 0xBA4E, 0xBA53, 0xBA54, 0xBA55,
    0xBA58, 0xBA5C, 0xBA64, 0xBA65, 0xBA67, 0xBA68, 0xBA69, 0xBA70,
    0xBA71, 0xBA74, 0xBA78, 0xBA83, 0xBA84, 0xBA85, 0xBA87, 0xBA8C,
    0xBAA8, 0xBAA9, 0xBAAB, 0xBAAC, 0xBAB0, 0xBAB2, 0xBAB8, 0xBAB9,
    0xBABB, 0xBABD, 0xBAC4, 0xBAC8, 0xBAD8, 0xBAD9, 0xBAFC, 0xFFFF,
    0xFFFF, 0xD22A, 0xD22B, 0xD22E, 0xD22F, 0xD231, 0xD232, 0xD233,
    0xD235, 0xD236, 0xD237, 0xD238, 0xD239, 0xD23A, 0xD23B, 0xD23E,
    0xD240, 0xD242, 0xD243, 0xD244, 0xD245, 0xD246, 0xD247, 0xD249,
    0xD24A, 0xD24B, 0xD24C, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD24D, 0xD24E, 0xD24F, 0xD250, 0xD251, 0xD252, 0xD253,
    0xD254, 0xD255, 0xD256, 0xD257, 0xD258, 0xD259, 0xD25A, 0xD25B,
    0xD25D, 0xD25E, 0xD25F, 0xD260, 0xD261, 0xD262, 0xD263, 0xD265,
    0xD266, 0xD267, 0xD268, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD269, 0xD26A, 0xD26B, 0xD26C, 0xD26D, 0xD26E, 0xD26F,
    0xD270, 0xD271, 0xD272, 0xD273, 0xD274, 0xD275, 0xD276, 0xD277,
    0xD278, 0xD279, 0xD27A, 0xD27B, 0xD27C, 0xD27D, 0xD27E, 0xD27F,
    0xD282, 0xD283, 0xD285, 0xD286, 0xD287, 0xD289, 0xD28A, 0xD28B,
    0xD28C, 0xBB00, 0xBB04, 0xBB0D, 0xBB0F, 0xBB11, 0xBB18, 0xBB1C,
    0xBB20, 0xBB29, 0xBB2B, 0xBB34, 0xBB35, 0xBB36, 0xBB38, 0xBB3B,
    0xBB3C, 0xBB3D, 0xBB3E, 0xBB44, 0xBB45, 0xBB47, 0xBB49, 0xBB4D,
    0xBB4F, 0xBB50, 0xBB54, 0xBB58, 0xBB61, 0xBB63, 0xBB6C, 0xBB88,
    0xBB8C, 0xBB90, 0xBBA4, 0xBBA8, 0xBBAC, 0xBBB4, 0xBBB7, 0xBBC0,
    0xBBC4, 0xBBC8, 0xBBD0, 0xBBD3, 0xBBF8, 0xBBF9, 0xBBFC, 0xBBFF,
    0xBC00, 0xBC02, 0xBC08, 0xBC09, 0xBC0B, 0xBC0C, 0xBC0D, 0xBC0F,
    0xBC11, 0xBC14, 0xBC15, 0xBC16, 0xBC17, 0xBC18, 0xBC1B, 0xBC1C,
    0xBC1D, 0xBC1E, 0xBC1F, 0xBC24, 0xBC25, 0xBC27, 0xBC29, 0xBC2D,
    0xBC30, 0xBC31, 0xBC34, 0xBC38, 0xBC40, 0xBC41, 0xBC43, 0xBC44,
    0xBC45, 0xBC49, 0xBC4C, 0xBC4D, 0xBC50, 0xBC5D, 0xBC84, 0xBC85,
    0xBC88, 0xBC8B, 0xBC8C, 0xBC8E, 0xBC94, 0xBC95, 0xBC97, 0xFFFF,
    0xFFFF, 0xD28D, 0xD28E, 0xD28F, 0xD292, 0xD293, 0xD294, 0xD296,
    0xD297, 0xD298, 0xD299, 0xD29A, 0xD29B, 0xD29D, 0xD29E, 0xD29F,
    0xD2A1, 0xD2A2, 0xD2A3, 0xD2A5, 0xD2A6, 0xD2A7, 0xD2A8, 0xD2A9,
    0xD2AA, 0xD2AB, 0xD2AD, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD2AE, 0xD2AF, 0xD2B0, 0xD2B2, 0xD2B3, 0xD2B4, 0xD2B5,
    0xD2B6, 0xD2B7, 0xD2BA, 0xD2BB, 0xD2BD, 0xD2BE, 0xD2C1, 0xD2C3,
    0xD2C4, 0xD2C5, 0xD2C6, 0xD2C7, 0xD2CA, 0xD2CC, 0xD2CD, 0xD2CE,
    0xD2CF, 0xD2D0, 0xD2D1, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD2D2, 0xD2D3, 0xD2D5, 0xD2D6, 0xD2D7, 0xD2D9, 0xD2DA,
    0xD2DB, 0xD2DD, 0xD2DE, 0xD2DF, 0xD2E0, 0xD2E1, 0xD2E2, 0xD2E3,
    0xD2E6, 0xD2E7, 0xD2E8, 0xD2E9, 0xD2EA, 0xD2EB, 0xD2EC, 0xD2ED,
    0xD2EE, 0xD2EF, 0xD2F2, 0xD2F3, 0xD2F5, 0xD2F6, 0xD2F7, 0xD2F9,
    0xD2FA, 0xBC99, 0xBC9A, 0xBCA0, 0xBCA1, 0xBCA4, 0xBCA7, 0xBCA8,
    0xBCB0, 0xBCB1, 0xBCB3, 0xBCB4, 0xBCB5, 0xBCBC, 0xBCBD, 0xBCC0,
    0xBCC4, 0xBCCD, 0xBCCF, 0xBCD0, 0xBCD1, 0xBCD5, 0xBCD8, 0xBCDC,
    0xBCF4, 0xBCF5, 0xBCF6, 0xBCF8, 0xBCFC, 0xBD04, 0xBD05, 0xBD07,
    0xBD09, 0xBD10, 0xBD14, 0xBD24, 0xBD2C, 0xBD40, 0xBD48, 0xBD49,
    0xBD4C, 0xBD50, 0xBD58, 0xBD59, 0xBD64, 0xBD68, 0xBD80, 0xBD81,
    0xBD84, 0xBD87, 0xBD88, 0xBD89, 0xBD8A, 0xBD90, 0xBD91, 0xBD93,
    0xBD95, 0xBD99, 0xBD9A, 0xBD9C, 0xBDA4, 0xBDB0, 0xBDB8, 0xBDD4,
    0xBDD5, 0xBDD8, 0xBDDC, 0xBDE9, 0xBDF0, 0xBDF4, 0xBDF8, 0xBE00,
    0xBE03, 0xBE05, 0xBE0C, 0xBE0D, 0xBE10, 0xBE14, 0xBE1C, 0xBE1D,
    0xBE1F, 0xBE44, 0xBE45, 0xBE48, 0xBE4C, 0xBE4E, 0xBE54, 0xBE55,
    0xBE57, 0xBE59, 0xBE5A, 0xBE5B, 0xBE60, 0xBE61, 0xBE64, 0xFFFF,
    0xFFFF, 0xD2FB, 0xD2FC, 0xD2FD, 0xD2FE, 0xD2FF, 0xD302, 0xD304,
    0xD306, 0xD307, 0xD308, 0xD309, 0xD30A, 0xD30B, 0xD30F, 0xD311,
    0xD312, 0xD313, 0xD315, 0xD317, 0xD318, 0xD319, 0xD31A, 0xD31B,
    0xD31E, 0xD322, 0xD323, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD324, 0xD326, 0xD327, 0xD32A, 0xD32B, 0xD32D, 0xD32E,
    0xD32F, 0xD331, 0xD332, 0xD333, 0xD334, 0xD335, 0xD336, 0xD337,
    0xD33A, 0xD33E, 0xD33F, 0xD340, 0xD341, 0xD342, 0xD343, 0xD346,
    0xD347, 0xD348, 0xD349, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD34A, 0xD34B, 0xD34C, 0xD34D, 0xD34E, 0xD34F, 0xD350,
    0xD351, 0xD352, 0xD353, 0xD354, 0xD355, 0xD356, 0xD357, 0xD358,
    0xD359, 0xD35A, 0xD35B, 0xD35C, 0xD35D, 0xD35E, 0xD35F, 0xD360,
    0xD361, 0xD362, 0xD363, 0xD364, 0xD365, 0xD366, 0xD367, 0xD368,
    0xD369, 0xBE68, 0xBE6A, 0xBE70, 0xBE71, 0xBE73, 0xBE74, 0xBE75,
    0xBE7B, 0xBE7C, 0xBE7D, 0xBE80, 0xBE84, 0xBE8C, 0xBE8D, 0xBE8F,
    0xBE90, 0xBE91, 0xBE98, 0xBE99, 0xBEA8, 0xBED0, 0xBED1, 0xBED4,
    0xBED7, 0xBED8, 0xBEE0, 0xBEE3, 0xBEE4, 0xBEE5, 0xBEEC, 0xBF01,
    0xBF08, 0xBF09, 0xBF18, 0xBF19, 0xBF1B, 0xBF1C, 0xBF1D, 0xBF40,
    0xBF41, 0xBF44, 0xBF48, 0xBF50, 0xBF51, 0xBF55, 0xBF94, 0xBFB0,
    0xBFC5, 0xBFCC, 0xBFCD, 0xBFD0, 0xBFD4, 0xBFDC, 0xBFDF, 0xBFE1,
    0xC03C, 0xC051, 0xC058, 0xC05C, 0xC060, 0xC068, 0xC069, 0xC090,
    0xC091, 0xC094, 0xC098, 0xC0A0, 0xC0A1, 0xC0A3, 0xC0A5, 0xC0AC,
    0xC0AD, 0xC0AF, 0xC0B0, 0xC0B3, 0xC0B4, 0xC0B5, 0xC0B6, 0xC0BC,
    0xC0BD, 0xC0BF, 0xC0C0, 0xC0C1, 0xC0C5, 0xC0C8, 0xC0C9, 0xC0CC,
    0xC0D0, 0xC0D8, 0xC0D9, 0xC0DB, 0xC0DC, 0xC0DD, 0xC0E4, 0xFFFF,
    0xFFFF, 0xD36A, 0xD36B, 0xD36C, 0xD36D, 0xD36E, 0xD36F, 0xD370,
    0xD371, 0xD372, 0xD373, 0xD374, 0xD375, 0xD376, 0xD377, 0xD378,
    0xD379, 0xD37A, 0xD37B, 0xD37E, 0xD37F, 0xD381, 0xD382, 0xD383,
    0xD385, 0xD386, 0xD387, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD388, 0xD389, 0xD38A, 0xD38B, 0xD38E, 0xD392, 0xD393,
    0xD394, 0xD395, 0xD396, 0xD397, 0xD39A, 0xD39B, 0xD39D, 0xD39E,
    0xD39F, 0xD3A1, 0xD3A2, 0xD3A3, 0xD3A4, 0xD3A5, 0xD3A6, 0xD3A7,
    0xD3AA, 0xD3AC, 0xD3AE, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD3AF, 0xD3B0, 0xD3B1, 0xD3B2, 0xD3B3, 0xD3B5, 0xD3B6,
    0xD3B7, 0xD3B9, 0xD3BA, 0xD3BB, 0xD3BD, 0xD3BE, 0xD3BF, 0xD3C0,
    0xD3C1, 0xD3C2, 0xD3C3, 0xD3C6, 0xD3C7, 0xD3CA, 0xD3CB, 0xD3CC,
    0xD3CD, 0xD3CE, 0xD3CF, 0xD3D1, 0xD3D2, 0xD3D3, 0xD3D4, 0xD3D5,
    0xD3D6, 0xC0E5, 0xC0E8, 0xC0EC, 0xC0F4, 0xC0F5, 0xC0F7, 0xC0F9,
    0xC100, 0xC104, 0xC108, 0xC110, 0xC115, 0xC11C, 0xC11D, 0xC11E,
    0xC11F, 0xC120, 0xC123, 0xC124, 0xC126, 0xC127, 0xC12C, 0xC12D,
    0xC12F, 0xC130, 0xC131, 0xC136, 0xC138, 0xC139, 0xC13C, 0xC140,
    0xC148, 0xC149, 0xC14B, 0xC14C, 0xC14D, 0xC154, 0xC155, 0xC158,
    0xC15C, 0xC164, 0xC165, 0xC167, 0xC168, 0xC169, 0xC170, 0xC174,
    0xC178, 0xC185, 0xC18C, 0xC18D, 0xC18E, 0xC190, 0xC194, 0xC196,
    0xC19C, 0xC19D, 0xC19F, 0xC1A1, 0xC1A5, 0xC1A8, 0xC1A9, 0xC1AC,
    0xC1B0, 0xC1BD, 0xC1C4, 0xC1C8, 0xC1CC, 0xC1D4, 0xC1D7, 0xC1D8,
    0xC1E0, 0xC1E4, 0xC1E8, 0xC1F0, 0xC1F1, 0xC1F3, 0xC1FC, 0xC1FD,
    0xC200, 0xC204, 0xC20C, 0xC20D, 0xC20F, 0xC211, 0xC218, 0xC219,
    0xC21C, 0xC21F, 0xC220, 0xC228, 0xC229, 0xC22B, 0xC22D, 0xFFFF,
    0xFFFF, 0xD3D7, 0xD3D9, 0xD3DA, 0xD3DB, 0xD3DC, 0xD3DD, 0xD3DE,
    0xD3DF, 0xD3E0, 0xD3E2, 0xD3E4, 0xD3E5, 0xD3E6, 0xD3E7, 0xD3E8,
    0xD3E9, 0xD3EA, 0xD3EB, 0xD3EE, 0xD3EF, 0xD3F1, 0xD3F2, 0xD3F3,
    0xD3F5, 0xD3F6, 0xD3F7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD3F8, 0xD3F9, 0xD3FA, 0xD3FB, 0xD3FE, 0xD400, 0xD402,
    0xD403, 0xD404, 0xD405, 0xD406, 0xD407, 0xD409, 0xD40A, 0xD40B,
    0xD40C, 0xD40D, 0xD40E, 0xD40F, 0xD410, 0xD411, 0xD412, 0xD413,
    0xD414, 0xD415, 0xD416, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD417, 0xD418, 0xD419, 0xD41A, 0xD41B, 0xD41C, 0xD41E,
    0xD41F, 0xD420, 0xD421, 0xD422, 0xD423, 0xD424, 0xD425, 0xD426,
    0xD427, 0xD428, 0xD429, 0xD42A, 0xD42B, 0xD42C, 0xD42D, 0xD42E,
    0xD42F, 0xD430, 0xD431, 0xD432, 0xD433, 0xD434, 0xD435, 0xD436,
    0xD437, 0xC22F, 0xC231, 0xC232, 0xC234, 0xC248, 0xC250, 0xC251,
    0xC254, 0xC258, 0xC260, 0xC265, 0xC26C, 0xC26D, 0xC270, 0xC274,
    0xC27C, 0xC27D, 0xC27F, 0xC281, 0xC288, 0xC289, 0xC290, 0xC298,
    0xC29B, 0xC29D, 0xC2A4, 0xC2A5, 0xC2A8, 0xC2AC, 0xC2AD, 0xC2B4,
    0xC2B5, 0xC2B7, 0xC2B9, 0xC2DC, 0xC2DD, 0xC2E0, 0xC2E3, 0xC2E4,
    0xC2EB, 0xC2EC, 0xC2ED, 0xC2EF, 0xC2F1, 0xC2F6, 0xC2F8, 0xC2F9,
    0xC2FB, 0xC2FC, 0xC300, 0xC308, 0xC309, 0xC30C, 0xC30D, 0xC313,
    0xC314, 0xC315, 0xC318, 0xC31C, 0xC324, 0xC325, 0xC328, 0xC329,
    0xC345, 0xC368, 0xC369, 0xC36C, 0xC370, 0xC372, 0xC378, 0xC379,
    0xC37C, 0xC37D, 0xC384, 0xC388, 0xC38C, 0xC3C0, 0xC3D8, 0xC3D9,
    0xC3DC, 0xC3DF, 0xC3E0, 0xC3E2, 0xC3E8, 0xC3E9, 0xC3ED, 0xC3F4,
    0xC3F5, 0xC3F8, 0xC408, 0xC410, 0xC424, 0xC42C, 0xC430, 0xFFFF,
    0xFFFF, 0xD438, 0xD439, 0xD43A, 0xD43B, 0xD43C, 0xD43D, 0xD43E,
    0xD43F, 0xD441, 0xD442, 0xD443, 0xD445, 0xD446, 0xD447, 0xD448,
    0xD449, 0xD44A, 0xD44B, 0xD44C, 0xD44D, 0xD44E, 0xD44F, 0xD450,
    0xD451, 0xD452, 0xD453, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD454, 0xD455, 0xD456, 0xD457, 0xD458, 0xD459, 0xD45A,
    0xD45B, 0xD45D, 0xD45E, 0xD45F, 0xD461, 0xD462, 0xD463, 0xD465,
    0xD466, 0xD467, 0xD468, 0xD469, 0xD46A, 0xD46B, 0xD46C, 0xD46E,
    0xD470, 0xD471, 0xD472, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD473, 0xD474, 0xD475, 0xD476, 0xD477, 0xD47A, 0xD47B,
    0xD47D, 0xD47E, 0xD481, 0xD483, 0xD484, 0xD485, 0xD486, 0xD487,
    0xD48A, 0xD48C, 0xD48E, 0xD48F, 0xD490, 0xD491, 0xD492, 0xD493,
    0xD495, 0xD496, 0xD497, 0xD498, 0xD499, 0xD49A, 0xD49B, 0xD49C,
    0xD49D, 0xC434, 0xC43C, 0xC43D, 0xC448, 0xC464, 0xC465, 0xC468,
    0xC46C, 0xC474, 0xC475, 0xC479, 0xC480, 0xC494, 0xC49C, 0xC4B8,
    0xC4BC, 0xC4E9, 0xC4F0, 0xC4F1, 0xC4F4, 0xC4F8, 0xC4FA, 0xC4FF,
    0xC500, 0xC501, 0xC50C, 0xC510, 0xC514, 0xC51C, 0xC528, 0xC529,
    0xC52C, 0xC530, 0xC538, 0xC539, 0xC53B, 0xC53D, 0xC544, 0xC545,
    0xC548, 0xC549, 0xC54A, 0xC54C, 0xC54D, 0xC54E, 0xC553, 0xC554,
    0xC555, 0xC557, 0xC558, 0xC559, 0xC55D, 0xC55E, 0xC560, 0xC561,
    0xC564, 0xC568, 0xC570, 0xC571, 0xC573, 0xC574, 0xC575, 0xC57C,
    0xC57D, 0xC580, 0xC584, 0xC587, 0xC58C, 0xC58D, 0xC58F, 0xC591,
    0xC595, 0xC597, 0xC598, 0xC59C, 0xC5A0, 0xC5A9, 0xC5B4, 0xC5B5,
    0xC5B8, 0xC5B9, 0xC5BB, 0xC5BC, 0xC5BD, 0xC5BE, 0xC5C4, 0xC5C5,
    0xC5C6, 0xC5C7, 0xC5C8, 0xC5C9, 0xC5CA, 0xC5CC, 0xC5CE, 0xFFFF,
    0xFFFF, 0xD49E, 0xD49F, 0xD4A0, 0xD4A1, 0xD4A2, 0xD4A3, 0xD4A4,
    0xD4A5, 0xD4A6, 0xD4A7, 0xD4A8, 0xD4AA, 0xD4AB, 0xD4AC, 0xD4AD,
    0xD4AE, 0xD4AF, 0xD4B0, 0xD4B1, 0xD4B2, 0xD4B3, 0xD4B4, 0xD4B5,
    0xD4B6, 0xD4B7, 0xD4B8, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD4B9, 0xD4BA, 0xD4BB, 0xD4BC, 0xD4BD, 0xD4BE, 0xD4BF,
    0xD4C0, 0xD4C1, 0xD4C2, 0xD4C3, 0xD4C4, 0xD4C5, 0xD4C6, 0xD4C7,
    0xD4C8, 0xD4C9, 0xD4CA, 0xD4CB, 0xD4CD, 0xD4CE, 0xD4CF, 0xD4D1,
    0xD4D2, 0xD4D3, 0xD4D5, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD4D6, 0xD4D7, 0xD4D8, 0xD4D9, 0xD4DA, 0xD4DB, 0xD4DD,
    0xD4DE, 0xD4E0, 0xD4E1, 0xD4E2, 0xD4E3, 0xD4E4, 0xD4E5, 0xD4E6,
    0xD4E7, 0xD4E9, 0xD4EA, 0xD4EB, 0xD4ED, 0xD4EE, 0xD4EF, 0xD4F1,
    0xD4F2, 0xD4F3, 0xD4F4, 0xD4F5, 0xD4F6, 0xD4F7, 0xD4F9, 0xD4FA,
    0xD4FC, 0xC5D0, 0xC5D1, 0xC5D4, 0xC5D8, 0xC5E0, 0xC5E1, 0xC5E3,
    0xC5E5, 0xC5EC, 0xC5ED, 0xC5EE, 0xC5F0, 0xC5F4, 0xC5F6, 0xC5F7,
    0xC5FC, 0xC5FD, 0xC5FE, 0xC5FF, 0xC600, 0xC601, 0xC605, 0xC606,
    0xC607, 0xC608, 0xC60C, 0xC610, 0xC618, 0xC619, 0xC61B, 0xC61C,
    0xC624, 0xC625, 0xC628, 0xC62C, 0xC62D, 0xC62E, 0xC630, 0xC633,
    0xC634, 0xC635, 0xC637, 0xC639, 0xC63B, 0xC640, 0xC641, 0xC644,
    0xC648, 0xC650, 0xC651, 0xC653, 0xC654, 0xC655, 0xC65C, 0xC65D,
    0xC660, 0xC66C, 0xC66F, 0xC671, 0xC678, 0xC679, 0xC67C, 0xC680,
    0xC688, 0xC689, 0xC68B, 0xC68D, 0xC694, 0xC695, 0xC698, 0xC69C,
    0xC6A4, 0xC6A5, 0xC6A7, 0xC6A9, 0xC6B0, 0xC6B1, 0xC6B4, 0xC6B8,
    0xC6B9, 0xC6BA, 0xC6C0, 0xC6C1, 0xC6C3, 0xC6C5, 0xC6CC, 0xC6CD,
    0xC6D0, 0xC6D4, 0xC6DC, 0xC6DD, 0xC6E0, 0xC6E1, 0xC6E8, 0xFFFF,
    0xFFFF, 0xD4FE, 0xD4FF, 0xD500, 0xD501, 0xD502, 0xD503, 0xD505,
    0xD506, 0xD507, 0xD509, 0xD50A, 0xD50B, 0xD50D, 0xD50E, 0xD50F,
    0xD510, 0xD511, 0xD512, 0xD513, 0xD516, 0xD518, 0xD519, 0xD51A,
    0xD51B, 0xD51C, 0xD51D, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD51E, 0xD51F, 0xD520, 0xD521, 0xD522, 0xD523, 0xD524,
    0xD525, 0xD526, 0xD527, 0xD528, 0xD529, 0xD52A, 0xD52B, 0xD52C,
    0xD52D, 0xD52E, 0xD52F, 0xD530, 0xD531, 0xD532, 0xD533, 0xD534,
    0xD535, 0xD536, 0xD537, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD538, 0xD539, 0xD53A, 0xD53B, 0xD53E, 0xD53F, 0xD541,
    0xD542, 0xD543, 0xD545, 0xD546, 0xD547, 0xD548, 0xD549, 0xD54A,
    0xD54B, 0xD54E, 0xD550, 0xD552, 0xD553, 0xD554, 0xD555, 0xD556,
    0xD557, 0xD55A, 0xD55B, 0xD55D, 0xD55E, 0xD55F, 0xD561, 0xD562,
    0xD563, 0xC6E9, 0xC6EC, 0xC6F0, 0xC6F8, 0xC6F9, 0xC6FD, 0xC704,
    0xC705, 0xC708, 0xC70C, 0xC714, 0xC715, 0xC717, 0xC719, 0xC720,
    0xC721, 0xC724, 0xC728, 0xC730, 0xC731, 0xC733, 0xC735, 0xC737,
    0xC73C, 0xC73D, 0xC740, 0xC744, 0xC74A, 0xC74C, 0xC74D, 0xC74F,
    0xC751, 0xC752, 0xC753, 0xC754, 0xC755, 0xC756, 0xC757, 0xC758,
    0xC75C, 0xC760, 0xC768, 0xC76B, 0xC774, 0xC775, 0xC778, 0xC77C,
    0xC77D, 0xC77E, 0xC783, 0xC784, 0xC785, 0xC787, 0xC788, 0xC789,
    0xC78A, 0xC78E, 0xC790, 0xC791, 0xC794, 0xC796, 0xC797, 0xC798,
    0xC79A, 0xC7A0, 0xC7A1, 0xC7A3, 0xC7A4, 0xC7A5, 0xC7A6, 0xC7AC,
    0xC7AD, 0xC7B0, 0xC7B4, 0xC7BC, 0xC7BD, 0xC7BF, 0xC7C0, 0xC7C1,
    0xC7C8, 0xC7C9, 0xC7CC, 0xC7CE, 0xC7D0, 0xC7D8, 0xC7DD, 0xC7E4,
    0xC7E8, 0xC7EC, 0xC800, 0xC801, 0xC804, 0xC808, 0xC80A, 0xFFFF,
    0xFFFF, 0xD564, 0xD566, 0xD567, 0xD56A, 0xD56C, 0xD56E, 0xD56F,
    0xD570, 0xD571, 0xD572, 0xD573, 0xD576, 0xD577, 0xD579, 0xD57A,
    0xD57B, 0xD57D, 0xD57E, 0xD57F, 0xD580, 0xD581, 0xD582, 0xD583,
    0xD586, 0xD58A, 0xD58B, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD58C, 0xD58D, 0xD58E, 0xD58F, 0xD591, 0xD592, 0xD593,
    0xD594, 0xD595, 0xD596, 0xD597, 0xD598, 0xD599, 0xD59A, 0xD59B,
    0xD59C, 0xD59D, 0xD59E, 0xD59F, 0xD5A0, 0xD5A1, 0xD5A2, 0xD5A3,
    0xD5A4, 0xD5A6, 0xD5A7, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD5A8, 0xD5A9, 0xD5AA, 0xD5AB, 0xD5AC, 0xD5AD, 0xD5AE,
    0xD5AF, 0xD5B0, 0xD5B1, 0xD5B2, 0xD5B3, 0xD5B4, 0xD5B5, 0xD5B6,
    0xD5B7, 0xD5B8, 0xD5B9, 0xD5BA, 0xD5BB, 0xD5BC, 0xD5BD, 0xD5BE,
    0xD5BF, 0xD5C0, 0xD5C1, 0xD5C2, 0xD5C3, 0xD5C4, 0xD5C5, 0xD5C6,
    0xD5C7, 0xC810, 0xC811, 0xC813, 0xC815, 0xC816, 0xC81C, 0xC81D,
    0xC820, 0xC824, 0xC82C, 0xC82D, 0xC82F, 0xC831, 0xC838, 0xC83C,
    0xC840, 0xC848, 0xC849, 0xC84C, 0xC84D, 0xC854, 0xC870, 0xC871,
    0xC874, 0xC878, 0xC87A, 0xC880, 0xC881, 0xC883, 0xC885, 0xC886,
    0xC887, 0xC88B, 0xC88C, 0xC88D, 0xC894, 0xC89D, 0xC89F, 0xC8A1,
    0xC8A8, 0xC8BC, 0xC8BD, 0xC8C4, 0xC8C8, 0xC8CC, 0xC8D4, 0xC8D5,
    0xC8D7, 0xC8D9, 0xC8E0, 0xC8E1, 0xC8E4, 0xC8F5, 0xC8FC, 0xC8FD,
    0xC900, 0xC904, 0xC905, 0xC906, 0xC90C, 0xC90D, 0xC90F, 0xC911,
    0xC918, 0xC92C, 0xC934, 0xC950, 0xC951, 0xC954, 0xC958, 0xC960,
    0xC961, 0xC963, 0xC96C, 0xC970, 0xC974, 0xC97C, 0xC988, 0xC989,
    0xC98C, 0xC990, 0xC998, 0xC999, 0xC99B, 0xC99D, 0xC9C0, 0xC9C1,
    0xC9C4, 0xC9C7, 0xC9C8, 0xC9CA, 0xC9D0, 0xC9D1, 0xC9D3, 0xFFFF,
    0xFFFF, 0xD5CA, 0xD5CB, 0xD5CD, 0xD5CE, 0xD5CF, 0xD5D1, 0xD5D3,
    0xD5D4, 0xD5D5, 0xD5D6, 0xD5D7, 0xD5DA, 0xD5DC, 0xD5DE, 0xD5DF,
    0xD5E0, 0xD5E1, 0xD5E2, 0xD5E3, 0xD5E6, 0xD5E7, 0xD5E9, 0xD5EA,
    0xD5EB, 0xD5ED, 0xD5EE, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD5EF, 0xD5F0, 0xD5F1, 0xD5F2, 0xD5F3, 0xD5F6, 0xD5F8,
    0xD5FA, 0xD5FB, 0xD5FC, 0xD5FD, 0xD5FE, 0xD5FF, 0xD602, 0xD603,
    0xD605, 0xD606, 0xD607, 0xD609, 0xD60A, 0xD60B, 0xD60C, 0xD60D,
    0xD60E, 0xD60F, 0xD612, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD616, 0xD617, 0xD618, 0xD619, 0xD61A, 0xD61B, 0xD61D,
    0xD61E, 0xD61F, 0xD621, 0xD622, 0xD623, 0xD625, 0xD626, 0xD627,
    0xD628, 0xD629, 0xD62A, 0xD62B, 0xD62C, 0xD62E, 0xD62F, 0xD630,
    0xD631, 0xD632, 0xD633, 0xD634, 0xD635, 0xD636, 0xD637, 0xD63A,
    0xD63B, 0xC9D5, 0xC9D6, 0xC9D9, 0xC9DA, 0xC9DC, 0xC9DD, 0xC9E0,
    0xC9E2, 0xC9E4, 0xC9E7, 0xC9EC, 0xC9ED, 0xC9EF, 0xC9F0, 0xC9F1,
    0xC9F8, 0xC9F9, 0xC9FC, 0xCA00, 0xCA08, 0xCA09, 0xCA0B, 0xCA0C,
    0xCA0D, 0xCA14, 0xCA18, 0xCA29, 0xCA4C, 0xCA4D, 0xCA50, 0xCA54,
    0xCA5C, 0xCA5D, 0xCA5F, 0xCA60, 0xCA61, 0xCA68, 0xCA7D, 0xCA84,
    0xCA98, 0xCABC, 0xCABD, 0xCAC0, 0xCAC4, 0xCACC, 0xCACD, 0xCACF,
    0xCAD1, 0xCAD3, 0xCAD8, 0xCAD9, 0xCAE0, 0xCAEC, 0xCAF4, 0xCB08,
    0xCB10, 0xCB14, 0xCB18, 0xCB20, 0xCB21, 0xCB41, 0xCB48, 0xCB49,
    0xCB4C, 0xCB50, 0xCB58, 0xCB59, 0xCB5D, 0xCB64, 0xCB78, 0xCB79,
    0xCB9C, 0xCBB8, 0xCBD4, 0xCBE4, 0xCBE7, 0xCBE9, 0xCC0C, 0xCC0D,
    0xCC10, 0xCC14, 0xCC1C, 0xCC1D, 0xCC21, 0xCC22, 0xCC27, 0xCC28,
    0xCC29, 0xCC2C, 0xCC2E, 0xCC30, 0xCC38, 0xCC39, 0xCC3B, 0xFFFF,
    0xFFFF, 0xD63D, 0xD63E, 0xD63F, 0xD641, 0xD642, 0xD643, 0xD644,
    0xD646, 0xD647, 0xD64A, 0xD64C, 0xD64E, 0xD64F, 0xD650, 0xD652,
    0xD653, 0xD656, 0xD657, 0xD659, 0xD65A, 0xD65B, 0xD65D, 0xD65E,
    0xD65F, 0xD660, 0xD661, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD662, 0xD663, 0xD664, 0xD665, 0xD666, 0xD668, 0xD66A,
    0xD66B, 0xD66C, 0xD66D, 0xD66E, 0xD66F, 0xD672, 0xD673, 0xD675,
    0xD676, 0xD677, 0xD678, 0xD679, 0xD67A, 0xD67B, 0xD67C, 0xD67D,
    0xD67E, 0xD67F, 0xD680, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD681, 0xD682, 0xD684, 0xD686, 0xD687, 0xD688, 0xD689,
    0xD68A, 0xD68B, 0xD68E, 0xD68F, 0xD691, 0xD692, 0xD693, 0xD695,
    0xD696, 0xD697, 0xD698, 0xD699, 0xD69A, 0xD69B, 0xD69C, 0xD69E,
    0xD6A0, 0xD6A2, 0xD6A3, 0xD6A4, 0xD6A5, 0xD6A6, 0xD6A7, 0xD6A9,
    0xD6AA, 0xCC3C, 0xCC3D, 0xCC3E, 0xCC44, 0xCC45, 0xCC48, 0xCC4C,
    0xCC54, 0xCC55, 0xCC57, 0xCC58, 0xCC59, 0xCC60, 0xCC64, 0xCC66,
    0xCC68, 0xCC70, 0xCC75, 0xCC98, 0xCC99, 0xCC9C, 0xCCA0, 0xCCA8,
    0xCCA9, 0xCCAB, 0xCCAC, 0xCCAD, 0xCCB4, 0xCCB5, 0xCCB8, 0xCCBC,
    0xCCC4, 0xCCC5, 0xCCC7, 0xCCC9, 0xCCD0, 0xCCD4, 0xCCE4, 0xCCEC,
    0xCCF0, 0xCD01, 0xCD08, 0xCD09, 0xCD0C, 0xCD10, 0xCD18, 0xCD19,
    0xCD1B, 0xCD1D, 0xCD24, 0xCD28, 0xCD2C, 0xCD39, 0xCD5C, 0xCD60,
    0xCD64, 0xCD6C, 0xCD6D, 0xCD6F, 0xCD71, 0xCD78, 0xCD88, 0xCD94,
    0xCD95, 0xCD98, 0xCD9C, 0xCDA4, 0xCDA5, 0xCDA7, 0xCDA9, 0xCDB0,
    0xCDC4, 0xCDCC, 0xCDD0, 0xCDE8, 0xCDEC, 0xCDF0, 0xCDF8, 0xCDF9,
    0xCDFB, 0xCDFD, 0xCE04, 0xCE08, 0xCE0C, 0xCE14, 0xCE19, 0xCE20,
    0xCE21, 0xCE24, 0xCE28, 0xCE30, 0xCE31, 0xCE33, 0xCE35, 0xFFFF,
    0xFFFF, 0xD6AB, 0xD6AD, 0xD6AE, 0xD6AF, 0xD6B1, 0xD6B2, 0xD6B3,
    0xD6B4, 0xD6B5, 0xD6B6, 0xD6B7, 0xD6B8, 0xD6BA, 0xD6BC, 0xD6BD,
    0xD6BE, 0xD6BF, 0xD6C0, 0xD6C1, 0xD6C2, 0xD6C3, 0xD6C6, 0xD6C7,
    0xD6C9, 0xD6CA, 0xD6CB, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD6CD, 0xD6CE, 0xD6CF, 0xD6D0, 0xD6D2, 0xD6D3, 0xD6D5,
    0xD6D6, 0xD6D8, 0xD6DA, 0xD6DB, 0xD6DC, 0xD6DD, 0xD6DE, 0xD6DF,
    0xD6E1, 0xD6E2, 0xD6E3, 0xD6E5, 0xD6E6, 0xD6E7, 0xD6E9, 0xD6EA,
    0xD6EB, 0xD6EC, 0xD6ED, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD6EE, 0xD6EF, 0xD6F1, 0xD6F2, 0xD6F3, 0xD6F4, 0xD6F6,
    0xD6F7, 0xD6F8, 0xD6F9, 0xD6FA, 0xD6FB, 0xD6FE, 0xD6FF, 0xD701,
    0xD702, 0xD703, 0xD705, 0xD706, 0xD707, 0xD708, 0xD709, 0xD70A,
    0xD70B, 0xD70C, 0xD70D, 0xD70E, 0xD70F, 0xD710, 0xD712, 0xD713,
    0xD714, 0xCE58, 0xCE59, 0xCE5C, 0xCE5F, 0xCE60, 0xCE61, 0xCE68,
    0xCE69, 0xCE6B, 0xCE6D, 0xCE74, 0xCE75, 0xCE78, 0xCE7C, 0xCE84,
    0xCE85, 0xCE87, 0xCE89, 0xCE90, 0xCE91, 0xCE94, 0xCE98, 0xCEA0,
    0xCEA1, 0xCEA3, 0xCEA4, 0xCEA5, 0xCEAC, 0xCEAD, 0xCEC1, 0xCEE4,
    0xCEE5, 0xCEE8, 0xCEEB, 0xCEEC, 0xCEF4, 0xCEF5, 0xCEF7, 0xCEF8,
    0xCEF9, 0xCF00, 0xCF01, 0xCF04, 0xCF08, 0xCF10, 0xCF11, 0xCF13,
    0xCF15, 0xCF1C, 0xCF20, 0xCF24, 0xCF2C, 0xCF2D, 0xCF2F, 0xCF30,
    0xCF31, 0xCF38, 0xCF54, 0xCF55, 0xCF58, 0xCF5C, 0xCF64, 0xCF65,
    0xCF67, 0xCF69, 0xCF70, 0xCF71, 0xCF74, 0xCF78, 0xCF80, 0xCF85,
    0xCF8C, 0xCFA1, 0xCFA8, 0xCFB0, 0xCFC4, 0xCFE0, 0xCFE1, 0xCFE4,
    0xCFE8, 0xCFF0, 0xCFF1, 0xCFF3, 0xCFF5, 0xCFFC, 0xD000, 0xD004,
    0xD011, 0xD018, 0xD02D, 0xD034, 0xD035, 0xD038, 0xD03C, 0xFFFF,
    0xFFFF, 0xD715, 0xD716, 0xD717, 0xD71A, 0xD71B, 0xD71D, 0xD71E,
    0xD71F, 0xD721, 0xD722, 0xD723, 0xD724, 0xD725, 0xD726, 0xD727,
    0xD72A, 0xD72C, 0xD72E, 0xD72F, 0xD730, 0xD731, 0xD732, 0xD733,
    0xD736, 0xD737, 0xD739, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD73A, 0xD73B, 0xD73D, 0xD73E, 0xD73F, 0xD740, 0xD741,
    0xD742, 0xD743, 0xD745, 0xD746, 0xD748, 0xD74A, 0xD74B, 0xD74C,
    0xD74D, 0xD74E, 0xD74F, 0xD752, 0xD753, 0xD755, 0xD75A, 0xD75B,
    0xD75C, 0xD75D, 0xD75E, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD75F, 0xD762, 0xD764, 0xD766, 0xD767, 0xD768, 0xD76A,
    0xD76B, 0xD76D, 0xD76E, 0xD76F, 0xD771, 0xD772, 0xD773, 0xD775,
    0xD776, 0xD777, 0xD778, 0xD779, 0xD77A, 0xD77B, 0xD77E, 0xD77F,
    0xD780, 0xD782, 0xD783, 0xD784, 0xD785, 0xD786, 0xD787, 0xD78A,
    0xD78B, 0xD044, 0xD045, 0xD047, 0xD049, 0xD050, 0xD054, 0xD058,
    0xD060, 0xD06C, 0xD06D, 0xD070, 0xD074, 0xD07C, 0xD07D, 0xD081,
    0xD0A4, 0xD0A5, 0xD0A8, 0xD0AC, 0xD0B4, 0xD0B5, 0xD0B7, 0xD0B9,
    0xD0C0, 0xD0C1, 0xD0C4, 0xD0C8, 0xD0C9, 0xD0D0, 0xD0D1, 0xD0D3,
    0xD0D4, 0xD0D5, 0xD0DC, 0xD0DD, 0xD0E0, 0xD0E4, 0xD0EC, 0xD0ED,
    0xD0EF, 0xD0F0, 0xD0F1, 0xD0F8, 0xD10D, 0xD130, 0xD131, 0xD134,
    0xD138, 0xD13A, 0xD140, 0xD141, 0xD143, 0xD144, 0xD145, 0xD14C,
    0xD14D, 0xD150, 0xD154, 0xD15C, 0xD15D, 0xD15F, 0xD161, 0xD168,
    0xD16C, 0xD17C, 0xD184, 0xD188, 0xD1A0, 0xD1A1, 0xD1A4, 0xD1A8,
    0xD1B0, 0xD1B1, 0xD1B3, 0xD1B5, 0xD1BA, 0xD1BC, 0xD1C0, 0xD1D8,
    0xD1F4, 0xD1F8, 0xD207, 0xD209, 0xD210, 0xD22C, 0xD22D, 0xD230,
    0xD234, 0xD23C, 0xD23D, 0xD23F, 0xD241, 0xD248, 0xD25C, 0xFFFF,
    0xFFFF, 0xD78D, 0xD78E, 0xD78F, 0xD791, 0xD792, 0xD793, 0xD794,
    0xD795, 0xD796, 0xD797, 0xD79A, 0xD79C, 0xD79E, 0xD79F, 0xD7A0,
    0xD7A1, 0xD7A2, 0xD7A3, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,
    0xFFFF, 0xD264, 0xD280, 0xD281, 0xD284, 0xD288, 0xD290, 0xD291,
    0xD295, 0xD29C, 0xD2A0, 0xD2A4, 0xD2AC, 0xD2B1, 0xD2B8, 0xD2B9,
    0xD2BC, 0xD2BF, 0xD2C0, 0xD2C2, 0xD2C8, 0xD2C9, 0xD2CB, 0xD2D4,
    0xD2D8, 0xD2DC, 0xD2E4, 0xD2E5, 0xD2F0, 0xD2F1, 0xD2F4, 0xD2F8,
    0xD300, 0xD301, 0xD303, 0xD305, 0xD30C, 0xD30D, 0xD30E, 0xD310,
    0xD314, 0xD316, 0xD31C, 0xD31D, 0xD31F, 0xD320, 0xD321, 0xD325,
    0xD328, 0xD329, 0xD32C, 0xD330, 0xD338, 0xD339, 0xD33B, 0xD33C,
    0xD33D, 0xD344, 0xD345, 0xD37C, 0xD37D, 0xD380, 0xD384, 0xD38C,
    0xD38D, 0xD38F, 0xD390, 0xD391, 0xD398, 0xD399, 0xD39C, 0xD3A0,
    0xD3A8, 0xD3A9, 0xD3AB, 0xD3AD, 0xD3B4, 0xD3B8, 0xD3BC, 0xD3C4,
    0xD3C5, 0xD3C8, 0xD3C9, 0xD3D0, 0xD3D8, 0xD3E1, 0xD3E3, 0xD3EC,
    0xD3ED, 0xD3F0, 0xD3F4, 0xD3FC, 0xD3FD, 0xD3FF, 0xD401, 0xFFFF,
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
    0xFFFF, 0xD408, 0xD41D, 0xD440, 0xD444, 0xD45C, 0xD460, 0xD464,
    0xD46D, 0xD46F, 0xD478, 0xD479, 0xD47C, 0xD47F, 0xD480, 0xD482,
    0xD488, 0xD489, 0xD48B, 0xD48D, 0xD494, 0xD4A9, 0xD4CC, 0xD4D0,
    0xD4D4, 0xD4DC, 0xD4DF, 0xD4E8, 0xD4EC, 0xD4F0, 0xD4F8, 0xD4FB,
    0xD4FD, 0xD504, 0xD508, 0xD50C, 0xD514, 0xD515, 0xD517, 0xD53C,
    0xD53D, 0xD540, 0xD544, 0xD54C, 0xD54D, 0xD54F, 0xD551, 0xD558,
    0xD559, 0xD55C, 0xD560, 0xD565, 0xD568, 0xD569, 0xD56B, 0xD56D,
    0xD574, 0xD575, 0xD578, 0xD57C, 0xD584, 0xD585, 0xD587, 0xD588,
    0xD589, 0xD590, 0xD5A5, 0xD5C8, 0xD5C9, 0xD5CC, 0xD5D0, 0xD5D2,
    0xD5D8, 0xD5D9, 0xD5DB, 0xD5DD, 0xD5E4, 0xD5E5, 0xD5E8, 0xD5EC,
    0xD5F4, 0xD5F5, 0xD5F7, 0xD5F9, 0xD600, 0xD601, 0xD604, 0xD608,
    0xD610, 0xD611, 0xD613, 0xD614, 0xD615, 0xD61C, 0xD620, 0xFFFF,
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
    0xFFFF, 0xD624, 0xD62D, 0xD638, 0xD639, 0xD63C, 0xD640, 0xD645,
    0xD648, 0xD649, 0xD64B, 0xD64D, 0xD651, 0xD654, 0xD655, 0xD658,
    0xD65C, 0xD667, 0xD669, 0xD670, 0xD671, 0xD674, 0xD683, 0xD685,
    0xD68C, 0xD68D, 0xD690, 0xD694, 0xD69D, 0xD69F, 0xD6A1, 0xD6A8,
    0xD6AC, 0xD6B0, 0xD6B9, 0xD6BB, 0xD6C4, 0xD6C5, 0xD6C8, 0xD6CC,
    0xD6D1, 0xD6D4, 0xD6D7, 0xD6D9, 0xD6E0, 0xD6E4, 0xD6E8, 0xD6F0,
    0xD6F5, 0xD6FC, 0xD6FD, 0xD700, 0xD704, 0xD711, 0xD718, 0xD719,
    0xD71C, 0xD720, 0xD728, 0xD729, 0xD72B, 0xD72D, 0xD734, 0xD735,
    0xD738, 0xD73C, 0xD744, 0xD747, 0xD749, 0xD750, 0xD751, 0xD754,
    0xD756, 0xD757, 0xD758, 0xD759, 0xD760, 0xD761, 0xD763, 0xD765,
    0xD769, 0xD76C, 0xD770, 0xD774, 0xD77C, 0xD77D, 0xD781, 0xD788,
    0xD789, 0xD78C, 0xD790, 0xD798, 0xD799, 0xD79B, 0xD79D, 0xFFFF,
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
    0xFFFF, 0x4F3D, 0x4F73, 0x5047, 0x50F9, 0x52A0, 0x53EF, 0x5475,
    0x54E5, 0x5609, 0x5AC1, 0x5BB6, 0x6687, 0x67B6, 0x67B7, 0x67EF,
    0x6B4C, 0x73C2, 0x75C2, 0x7A3C, 0x82DB, 0x8304, 0x8857, 0x8888,
    0x8A36, 0x8CC8, 0x8DCF, 0x8EFB, 0x8FE6, 0x99D5, 0x523B, 0x5374,
    0x5404, 0x606A, 0x6164, 0x6BBC, 0x73CF, 0x811A, 0x89BA, 0x89D2,
    0x95A3, 0x4F83, 0x520A, 0x58BE, 0x5978, 0x59E6, 0x5E72, 0x5E79,
    0x61C7, 0x63C0, 0x6746, 0x67EC, 0x687F, 0x6F97, 0x764E, 0x770B,
    0x78F5, 0x7A08, 0x7AFF, 0x7C21, 0x809D, 0x826E, 0x8271, 0x8AEB,
    0x9593, 0x4E6B, 0x559D, 0x66F7, 0x6E34, 0x78A3, 0x7AED, 0x845B,
    0x8910, 0x874E, 0x97A8, 0x52D8, 0x574E, 0x582A, 0x5D4C, 0x611F,
    0x61BE, 0x6221, 0x6562, 0x67D1, 0x6A44, 0x6E1B, 0x7518, 0x75B3,
    0x76E3, 0x77B0, 0x7D3A, 0x90AF, 0x9451, 0x9452, 0x9F95, 0xFFFF,
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
    0xFFFF, 0x5323, 0x5CAC, 0x7532, 0x80DB, 0x9240, 0x9598, 0x525B,
    0x5808, 0x59DC, 0x5CA1, 0x5D17, 0x5EB7, 0x5F3A, 0x5F4A, 0x6177,
    0x6C5F, 0x757A, 0x7586, 0x7CE0, 0x7D73, 0x7DB1, 0x7F8C, 0x8154,
    0x8221, 0x8591, 0x8941, 0x8B1B, 0x92FC, 0x964D, 0x9C47, 0x4ECB,
    0x4EF7, 0x500B, 0x51F1, 0x584F, 0x6137, 0x613E, 0x6168, 0x6539,
    0x69EA, 0x6F11, 0x75A5, 0x7686, 0x76D6, 0x7B87, 0x82A5, 0x84CB,
    0xF900, 0x93A7, 0x958B, 0x5580, 0x5BA2, 0x5751, 0xF901, 0x7CB3,
    0x7FB9, 0x91B5, 0x5028, 0x53BB, 0x5C45, 0x5DE8, 0x62D2, 0x636E,
    0x64DA, 0x64E7, 0x6E20, 0x70AC, 0x795B, 0x8DDD, 0x8E1E, 0xF902,
    0x907D, 0x9245, 0x92F8, 0x4E7E, 0x4EF6, 0x5065, 0x5DFE, 0x5EFA,
    0x6106, 0x6957, 0x8171, 0x8654, 0x8E47, 0x9375, 0x9A2B, 0x4E5E,
    0x5091, 0x6770, 0x6840, 0x5109, 0x528D, 0x5292, 0x6AA2, 0xFFFF,
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
    0xFFFF, 0x77BC, 0x9210, 0x9ED4, 0x52AB, 0x602F, 0x8FF2, 0x5048,
    0x61A9, 0x63ED, 0x64CA, 0x683C, 0x6A84, 0x6FC0, 0x8188, 0x89A1,
    0x9694, 0x5805, 0x727D, 0x72AC, 0x7504, 0x7D79, 0x7E6D, 0x80A9,
    0x898B, 0x8B74, 0x9063, 0x9D51, 0x6289, 0x6C7A, 0x6F54, 0x7D50,
    0x7F3A, 0x8A23, 0x517C, 0x614A, 0x7B9D, 0x8B19, 0x9257, 0x938C,
    0x4EAC, 0x4FD3, 0x501E, 0x50BE, 0x5106, 0x52C1, 0x52CD, 0x537F,
    0x5770, 0x5883, 0x5E9A, 0x5F91, 0x6176, 0x61AC, 0x64CE, 0x656C,
    0x666F, 0x66BB, 0x66F4, 0x6897, 0x6D87, 0x7085, 0x70F1, 0x749F,
    0x74A5, 0x74CA, 0x75D9, 0x786C, 0x78EC, 0x7ADF, 0x7AF6, 0x7D45,
    0x7D93, 0x8015, 0x803F, 0x811B, 0x8396, 0x8B66, 0x8F15, 0x9015,
    0x93E1, 0x9803, 0x9838, 0x9A5A, 0x9BE8, 0x4FC2, 0x5553, 0x583A,
    0x5951, 0x5B63, 0x5C46, 0x60B8, 0x6212, 0x6842, 0x68B0, 0xFFFF,
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
    0xFFFF, 0x68E8, 0x6EAA, 0x754C, 0x7678, 0x78CE, 0x7A3D, 0x7CFB,
    0x7E6B, 0x7E7C, 0x8A08, 0x8AA1, 0x8C3F, 0x968E, 0x9DC4, 0x53E4,
    0x53E9, 0x544A, 0x5471, 0x56FA, 0x59D1, 0x5B64, 0x5C3B, 0x5EAB,
    0x62F7, 0x6537, 0x6545, 0x6572, 0x66A0, 0x67AF, 0x69C1, 0x6CBD,
    0x75FC, 0x7690, 0x777E, 0x7A3F, 0x7F94, 0x8003, 0x80A1, 0x818F,
    0x82E6, 0x82FD, 0x83F0, 0x85C1, 0x8831, 0x88B4, 0x8AA5, 0xF903,
    0x8F9C, 0x932E, 0x96C7, 0x9867, 0x9AD8, 0x9F13, 0x54ED, 0x659B,
    0x66F2, 0x688F, 0x7A40, 0x8C37, 0x9D60, 0x56F0, 0x5764, 0x5D11,
    0x6606, 0x68B1, 0x68CD, 0x6EFE, 0x7428, 0x889E, 0x9BE4, 0x6C68,
    0xF904, 0x9AA8, 0x4F9B, 0x516C, 0x5171, 0x529F, 0x5B54, 0x5DE5,
    0x6050, 0x606D, 0x62F1, 0x63A7, 0x653B, 0x73D9, 0x7A7A, 0x86A3,
    0x8CA2, 0x978F, 0x4E32, 0x5BE1, 0x6208, 0x679C, 0x74DC, 0xFFFF,
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
    0xFFFF, 0x79D1, 0x83D3, 0x8A87, 0x8AB2, 0x8DE8, 0x904E, 0x934B,
    0x9846, 0x5ED3, 0x69E8, 0x85FF, 0x90ED, 0xF905, 0x51A0, 0x5B98,
    0x5BEC, 0x6163, 0x68FA, 0x6B3E, 0x704C, 0x742F, 0x74D8, 0x7BA1,
    0x7F50, 0x83C5, 0x89C0, 0x8CAB, 0x95DC, 0x9928, 0x522E, 0x605D,
    0x62EC, 0x9002, 0x4F8A, 0x5149, 0x5321, 0x58D9, 0x5EE3, 0x66E0,
    0x6D38, 0x709A, 0x72C2, 0x73D6, 0x7B50, 0x80F1, 0x945B, 0x5366,
    0x639B, 0x7F6B, 0x4E56, 0x5080, 0x584A, 0x58DE, 0x602A, 0x6127,
    0x62D0, 0x69D0, 0x9B41, 0x5B8F, 0x7D18, 0x80B1, 0x8F5F, 0x4EA4,
    0x50D1, 0x54AC, 0x55AC, 0x5B0C, 0x5DA0, 0x5DE7, 0x652A, 0x654E,
    0x6821, 0x6A4B, 0x72E1, 0x768E, 0x77EF, 0x7D5E, 0x7FF9, 0x81A0,
    0x854E, 0x86DF, 0x8F03, 0x8F4E, 0x90CA, 0x9903, 0x9A55, 0x9BAB,
    0x4E18, 0x4E45, 0x4E5D, 0x4EC7, 0x4FF1, 0x5177, 0x52FE, 0xFFFF,
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
    0xFFFF, 0x5340, 0x53E3, 0x53E5, 0x548E, 0x5614, 0x5775, 0x57A2,
    0x5BC7, 0x5D87, 0x5ED0, 0x61FC, 0x62D8, 0x6551, 0x67B8, 0x67E9,
    0x69CB, 0x6B50, 0x6BC6, 0x6BEC, 0x6C42, 0x6E9D, 0x7078, 0x72D7,
    0x7396, 0x7403, 0x77BF, 0x77E9, 0x7A76, 0x7D7F, 0x8009, 0x81FC,
    0x8205, 0x820A, 0x82DF, 0x8862, 0x8B33, 0x8CFC, 0x8EC0, 0x9011,
    0x90B1, 0x9264, 0x92B6, 0x99D2, 0x9A45, 0x9CE9, 0x9DD7, 0x9F9C,
    0x570B, 0x5C40, 0x83CA, 0x97A0, 0x97AB, 0x9EB4, 0x541B, 0x7A98,
    0x7FA4, 0x88D9, 0x8ECD, 0x90E1, 0x5800, 0x5C48, 0x6398, 0x7A9F,
    0x5BAE, 0x5F13, 0x7A79, 0x7AAE, 0x828E, 0x8EAC, 0x5026, 0x5238,
    0x52F8, 0x5377, 0x5708, 0x62F3, 0x6372, 0x6B0A, 0x6DC3, 0x7737,
    0x53A5, 0x7357, 0x8568, 0x8E76, 0x95D5, 0x673A, 0x6AC3, 0x6F70,
    0x8A6D, 0x8ECC, 0x994B, 0xF906, 0x6677, 0x6B78, 0x8CB4, 0xFFFF,
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
    0xFFFF, 0x9B3C, 0xF907, 0x53EB, 0x572D, 0x594E, 0x63C6, 0x69FB,
    0x73EA, 0x7845, 0x7ABA, 0x7AC5, 0x7CFE, 0x8475, 0x898F, 0x8D73,
    0x9035, 0x95A8, 0x52FB, 0x5747, 0x7547, 0x7B60, 0x83CC, 0x921E,
    0xF908, 0x6A58, 0x514B, 0x524B, 0x5287, 0x621F, 0x68D8, 0x6975,
    0x9699, 0x50C5, 0x52A4, 0x52E4, 0x61C3, 0x65A4, 0x6839, 0x69FF,
    0x747E, 0x7B4B, 0x82B9, 0x83EB, 0x89B2, 0x8B39, 0x8FD1, 0x9949,
    0xF909, 0x4ECA, 0x5997, 0x64D2, 0x6611, 0x6A8E, 0x7434, 0x7981,
    0x79BD, 0x82A9, 0x887E, 0x887F, 0x895F, 0xF90A, 0x9326, 0x4F0B,
    0x53CA, 0x6025, 0x6271, 0x6C72, 0x7D1A, 0x7D66, 0x4E98, 0x5162,
    0x77DC, 0x80AF, 0x4F01, 0x4F0E, 0x5176, 0x5180, 0x55DC, 0x5668,
    0x573B, 0x57FA, 0x57FC, 0x5914, 0x5947, 0x5993, 0x5BC4, 0x5C90,
    0x5D0E, 0x5DF1, 0x5E7E, 0x5FCC, 0x6280, 0x65D7, 0x65E3, 0xFFFF,
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
    0xFFFF, 0x671E, 0x671F, 0x675E, 0x68CB, 0x68C4, 0x6A5F, 0x6B3A,
    0x6C23, 0x6C7D, 0x6C82, 0x6DC7, 0x7398, 0x7426, 0x742A, 0x7482,
    0x74A3, 0x7578, 0x757F, 0x7881, 0x78EF, 0x7941, 0x7947, 0x7948,
    0x797A, 0x7B95, 0x7D00, 0x7DBA, 0x7F88, 0x8006, 0x802D, 0x808C,
    0x8A18, 0x8B4F, 0x8C48, 0x8D77, 0x9321, 0x9324, 0x98E2, 0x9951,
    0x9A0E, 0x9A0F, 0x9A65, 0x9E92, 0x7DCA, 0x4F76, 0x5409, 0x62EE,
    0x6854, 0x91D1, 0x55AB, 0x513A, 0xF90B, 0xF90C, 0x5A1C, 0x61E6,
    0xF90D, 0x62CF, 0x62FF, 0xF90E, 0xF90F, 0xF910, 0xF911, 0xF912,
    0xF913, 0x90A3, 0xF914, 0xF915, 0xF916, 0xF917, 0xF918, 0x8AFE,
    0xF919, 0xF91A, 0xF91B, 0xF91C, 0x6696, 0xF91D, 0x7156, 0xF91E,
    0xF91F, 0x96E3, 0xF920, 0x634F, 0x637A, 0x5357, 0xF921, 0x678F,
    0x6960, 0x6E73, 0xF922, 0x7537, 0xF923, 0xF924, 0xF925, 0xFFFF,
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
    0xFFFF, 0x7D0D, 0xF926, 0xF927, 0x8872, 0x56CA, 0x5A18, 0xF928,
    0xF929, 0xF92A, 0xF92B, 0xF92C, 0x4E43, 0xF92D, 0x5167, 0x5948,
    0x67F0, 0x8010, 0xF92E, 0x5973, 0x5E74, 0x649A, 0x79CA, 0x5FF5,
    0x606C, 0x62C8, 0x637B, 0x5BE7, 0x5BD7, 0x52AA, 0xF92F, 0x5974,
    0x5F29, 0x6012, 0xF930, 0xF931, 0xF932, 0x7459, 0xF933, 0xF934,
    0xF935, 0xF936, 0xF937, 0xF938, 0x99D1, 0xF939, 0xF93A, 0xF93B,
    0xF93C, 0xF93D, 0xF93E, 0xF93F, 0xF940, 0xF941, 0xF942, 0xF943,
    0x6FC3, 0xF944, 0xF945, 0x81BF, 0x8FB2, 0x60F1, 0xF946, 0xF947,
    0x8166, 0xF948, 0xF949, 0x5C3F, 0xF94A, 0xF94B, 0xF94C, 0xF94D,
    0xF94E, 0xF94F, 0xF950, 0xF951, 0x5AE9, 0x8A25, 0x677B, 0x7D10,
    0xF952, 0xF953, 0xF954, 0xF955, 0xF956, 0xF957, 0x80FD, 0xF958,
    0xF959, 0x5C3C, 0x6CE5, 0x533F, 0x6EBA, 0x591A, 0x8336, 0xFFFF,
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
    0xFFFF, 0x4E39, 0x4EB6, 0x4F46, 0x55AE, 0x5718, 0x58C7, 0x5F56,
    0x65B7, 0x65E6, 0x6A80, 0x6BB5, 0x6E4D, 0x77ED, 0x7AEF, 0x7C1E,
    0x7DDE, 0x86CB, 0x8892, 0x9132, 0x935B, 0x64BB, 0x6FBE, 0x737A,
    0x75B8, 0x9054, 0x5556, 0x574D, 0x61BA, 0x64D4, 0x66C7, 0x6DE1,
    0x6E5B, 0x6F6D, 0x6FB9, 0x75F0, 0x8043, 0x81BD, 0x8541, 0x8983,
    0x8AC7, 0x8B5A, 0x931F, 0x6C93, 0x7553, 0x7B54, 0x8E0F, 0x905D,
    0x5510, 0x5802, 0x5858, 0x5E62, 0x6207, 0x649E, 0x68E0, 0x7576,
    0x7CD6, 0x87B3, 0x9EE8, 0x4EE3, 0x5788, 0x576E, 0x5927, 0x5C0D,
    0x5CB1, 0x5E36, 0x5F85, 0x6234, 0x64E1, 0x73B3, 0x81FA, 0x888B,
    0x8CB8, 0x968A, 0x9EDB, 0x5B85, 0x5FB7, 0x60B3, 0x5012, 0x5200,
    0x5230, 0x5716, 0x5835, 0x5857, 0x5C0E, 0x5C60, 0x5CF6, 0x5D8B,
    0x5EA6, 0x5F92, 0x60BC, 0x6311, 0x6389, 0x6417, 0x6843, 0xFFFF,
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
    0xFFFF, 0x68F9, 0x6AC2, 0x6DD8, 0x6E21, 0x6ED4, 0x6FE4, 0x71FE,
    0x76DC, 0x7779, 0x79B1, 0x7A3B, 0x8404, 0x89A9, 0x8CED, 0x8DF3,
    0x8E48, 0x9003, 0x9014, 0x9053, 0x90FD, 0x934D, 0x9676, 0x97DC,
    0x6BD2, 0x7006, 0x7258, 0x72A2, 0x7368, 0x7763, 0x79BF, 0x7BE4,
    0x7E9B, 0x8B80, 0x58A9, 0x60C7, 0x6566, 0x65FD, 0x66BE, 0x6C8C,
    0x711E, 0x71C9, 0x8C5A, 0x9813, 0x4E6D, 0x7A81, 0x4EDD, 0x51AC,
    0x51CD, 0x52D5, 0x540C, 0x61A7, 0x6771, 0x6850, 0x68DF, 0x6D1E,
    0x6F7C, 0x75BC, 0x77B3, 0x7AE5, 0x80F4, 0x8463, 0x9285, 0x515C,
    0x6597, 0x675C, 0x6793, 0x75D8, 0x7AC7, 0x8373, 0xF95A, 0x8C46,
    0x9017, 0x982D, 0x5C6F, 0x81C0, 0x829A, 0x9041, 0x906F, 0x920D,
    0x5F97, 0x5D9D, 0x6A59, 0x71C8, 0x767B, 0x7B49, 0x85E4, 0x8B04,
    0x9127, 0x9A30, 0x5587, 0x61F6, 0xF95B, 0x7669, 0x7F85, 0xFFFF,
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
    0xFFFF, 0x863F, 0x87BA, 0x88F8, 0x908F, 0xF95C, 0x6D1B, 0x70D9,
    0x73DE, 0x7D61, 0x843D, 0xF95D, 0x916A, 0x99F1, 0xF95E, 0x4E82,
    0x5375, 0x6B04, 0x6B12, 0x703E, 0x721B, 0x862D, 0x9E1E, 0x524C,
    0x8FA3, 0x5D50, 0x64E5, 0x652C, 0x6B16, 0x6FEB, 0x7C43, 0x7E9C,
    0x85CD, 0x8964, 0x89BD, 0x62C9, 0x81D8, 0x881F, 0x5ECA, 0x6717,
    0x6D6A, 0x72FC, 0x7405, 0x746F, 0x8782, 0x90DE, 0x4F86, 0x5D0D,
    0x5FA0, 0x840A, 0x51B7, 0x63A0, 0x7565, 0x4EAE, 0x5006, 0x5169,
    0x51C9, 0x6881, 0x6A11, 0x7CAE, 0x7CB1, 0x7CE7, 0x826F, 0x8AD2,
    0x8F1B, 0x91CF, 0x4FB6, 0x5137, 0x52F5, 0x5442, 0x5EEC, 0x616E,
    0x623E, 0x65C5, 0x6ADA, 0x6FFE, 0x792A, 0x85DC, 0x8823, 0x95AD,
    0x9A62, 0x9A6A, 0x9E97, 0x9ECE, 0x529B, 0x66C6, 0x6B77, 0x701D,
    0x792B, 0x8F62, 0x9742, 0x6190, 0x6200, 0x6523, 0x6F23, 0xFFFF,
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
    0xFFFF, 0x7149, 0x7489, 0x7DF4, 0x806F, 0x84EE, 0x8F26, 0x9023,
    0x934A, 0x51BD, 0x5217, 0x52A3, 0x6D0C, 0x70C8, 0x88C2, 0x5EC9,
    0x6582, 0x6BAE, 0x6FC2, 0x7C3E, 0x7375, 0x4EE4, 0x4F36, 0x56F9,
    0xF95F, 0x5CBA, 0x5DBA, 0x601C, 0x73B2, 0x7B2D, 0x7F9A, 0x7FCE,
    0x8046, 0x901E, 0x9234, 0x96F6, 0x9748, 0x9818, 0x9F61, 0x4F8B,
    0x6FA7, 0x79AE, 0x91B4, 0x96B7, 0x52DE, 0xF960, 0x6488, 0x64C4,
    0x6AD3, 0x6F5E, 0x7018, 0x7210, 0x76E7, 0x8001, 0x8606, 0x865C,
    0x8DEF, 0x8F05, 0x9732, 0x9B6F, 0x9DFA, 0x9E75, 0x788C, 0x797F,
    0x7DA0, 0x83C9, 0x9304, 0x9E7F, 0x9E93, 0x8AD6, 0x58DF, 0x5F04,
    0x6727, 0x7027, 0x74CF, 0x7C60, 0x807E, 0x5121, 0x7028, 0x7262,
    0x78CA, 0x8CC2, 0x8CDA, 0x8CF4, 0x96F7, 0x4E86, 0x50DA, 0x5BEE,
    0x5ED6, 0x6599, 0x71CE, 0x7642, 0x77AD, 0x804A, 0x84FC, 0xFFFF,
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
    0xFFFF, 0x907C, 0x9B27, 0x9F8D, 0x58D8, 0x5A41, 0x5C62, 0x6A13,
    0x6DDA, 0x6F0F, 0x763B, 0x7D2F, 0x7E37, 0x851E, 0x8938, 0x93E4,
    0x964B, 0x5289, 0x65D2, 0x67F3, 0x69B4, 0x6D41, 0x6E9C, 0x700F,
    0x7409, 0x7460, 0x7559, 0x7624, 0x786B, 0x8B2C, 0x985E, 0x516D,
    0x622E, 0x9678, 0x4F96, 0x502B, 0x5D19, 0x6DEA, 0x7DB8, 0x8F2A,
    0x5F8B, 0x6144, 0x6817, 0xF961, 0x9686, 0x52D2, 0x808B, 0x51DC,
    0x51CC, 0x695E, 0x7A1C, 0x7DBE, 0x83F1, 0x9675, 0x4FDA, 0x5229,
    0x5398, 0x540F, 0x550E, 0x5C65, 0x60A7, 0x674E, 0x68A8, 0x6D6C,
    0x7281, 0x72F8, 0x7406, 0x7483, 0xF962, 0x75E2, 0x7C6C, 0x7F79,
    0x7FB8, 0x8389, 0x88CF, 0x88E1, 0x91CC, 0x91D0, 0x96E2, 0x9BC9,
    0x541D, 0x6F7E, 0x71D0, 0x7498, 0x85FA, 0x8EAA, 0x96A3, 0x9C57,
    0x9E9F, 0x6797, 0x6DCB, 0x7433, 0x81E8, 0x9716, 0x782C, 0xFFFF,
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
    0xFFFF, 0x7ACB, 0x7B20, 0x7C92, 0x6469, 0x746A, 0x75F2, 0x78BC,
    0x78E8, 0x99AC, 0x9B54, 0x9EBB, 0x5BDE, 0x5E55, 0x6F20, 0x819C,
    0x83AB, 0x9088, 0x4E07, 0x534D, 0x5A29, 0x5DD2, 0x5F4E, 0x6162,
    0x633D, 0x6669, 0x66FC, 0x6EFF, 0x6F2B, 0x7063, 0x779E, 0x842C,
    0x8513, 0x883B, 0x8F13, 0x9945, 0x9C3B, 0x551C, 0x62B9, 0x672B,
    0x6CAB, 0x8309, 0x896A, 0x977A, 0x4EA1, 0x5984, 0x5FD8, 0x5FD9,
    0x671B, 0x7DB2, 0x7F54, 0x8292, 0x832B, 0x83BD, 0x8F1E, 0x9099,
    0x57CB, 0x59B9, 0x5A92, 0x5BD0, 0x6627, 0x679A, 0x6885, 0x6BCF,
    0x7164, 0x7F75, 0x8CB7, 0x8CE3, 0x9081, 0x9B45, 0x8108, 0x8C8A,
    0x964C, 0x9A40, 0x9EA5, 0x5B5F, 0x6C13, 0x731B, 0x76F2, 0x76DF,
    0x840C, 0x51AA, 0x8993, 0x514D, 0x5195, 0x52C9, 0x68C9, 0x6C94,
    0x7704, 0x7720, 0x7DBF, 0x7DEC, 0x9762, 0x9EB5, 0x6EC5, 0xFFFF,
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
    0xFFFF, 0x8511, 0x51A5, 0x540D, 0x547D, 0x660E, 0x669D, 0x6927,
    0x6E9F, 0x76BF, 0x7791, 0x8317, 0x84C2, 0x879F, 0x9169, 0x9298,
    0x9CF4, 0x8882, 0x4FAE, 0x5192, 0x52DF, 0x59C6, 0x5E3D, 0x6155,
    0x6478, 0x6479, 0x66AE, 0x67D0, 0x6A21, 0x6BCD, 0x6BDB, 0x725F,
    0x7261, 0x7441, 0x7738, 0x77DB, 0x8017, 0x82BC, 0x8305, 0x8B00,
    0x8B28, 0x8C8C, 0x6728, 0x6C90, 0x7267, 0x76EE, 0x7766, 0x7A46,
    0x9DA9, 0x6B7F, 0x6C92, 0x5922, 0x6726, 0x8499, 0x536F, 0x5893,
    0x5999, 0x5EDF, 0x63CF, 0x6634, 0x6773, 0x6E3A, 0x732B, 0x7AD7,
    0x82D7, 0x9328, 0x52D9, 0x5DEB, 0x61AE, 0x61CB, 0x620A, 0x62C7,
    0x64AB, 0x65E0, 0x6959, 0x6B66, 0x6BCB, 0x7121, 0x73F7, 0x755D,
    0x7E46, 0x821E, 0x8302, 0x856A, 0x8AA3, 0x8CBF, 0x9727, 0x9D61,
    0x58A8, 0x9ED8, 0x5011, 0x520E, 0x543B, 0x554F, 0x6587, 0xFFFF,
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
    0xFFFF, 0x6C76, 0x7D0A, 0x7D0B, 0x805E, 0x868A, 0x9580, 0x96EF,
    0x52FF, 0x6C95, 0x7269, 0x5473, 0x5A9A, 0x5C3E, 0x5D4B, 0x5F4C,
    0x5FAE, 0x672A, 0x68B6, 0x6963, 0x6E3C, 0x6E44, 0x7709, 0x7C73,
    0x7F8E, 0x8587, 0x8B0E, 0x8FF7, 0x9761, 0x9EF4, 0x5CB7, 0x60B6,
    0x610D, 0x61AB, 0x654F, 0x65FB, 0x65FC, 0x6C11, 0x6CEF, 0x739F,
    0x73C9, 0x7DE1, 0x9594, 0x5BC6, 0x871C, 0x8B10, 0x525D, 0x535A,
    0x62CD, 0x640F, 0x64B2, 0x6734, 0x6A38, 0x6CCA, 0x73C0, 0x749E,
    0x7B94, 0x7C95, 0x7E1B, 0x818A, 0x8236, 0x8584, 0x8FEB, 0x96F9,
    0x99C1, 0x4F34, 0x534A, 0x53CD, 0x53DB, 0x62CC, 0x642C, 0x6500,
    0x6591, 0x69C3, 0x6CEE, 0x6F58, 0x73ED, 0x7554, 0x7622, 0x76E4,
    0x76FC, 0x78D0, 0x78FB, 0x792C, 0x7D46, 0x822C, 0x87E0, 0x8FD4,
    0x9812, 0x98EF, 0x52C3, 0x62D4, 0x64A5, 0x6E24, 0x6F51, 0xFFFF,
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
    0xFFFF, 0x767C, 0x8DCB, 0x91B1, 0x9262, 0x9AEE, 0x9B43, 0x5023,
    0x508D, 0x574A, 0x59A8, 0x5C28, 0x5E47, 0x5F77, 0x623F, 0x653E,
    0x65B9, 0x65C1, 0x6609, 0x678B, 0x699C, 0x6EC2, 0x78C5, 0x7D21,
    0x80AA, 0x8180, 0x822B, 0x82B3, 0x84A1, 0x868C, 0x8A2A, 0x8B17,
    0x90A6, 0x9632, 0x9F90, 0x500D, 0x4FF3, 0xF963, 0x57F9, 0x5F98,
    0x62DC, 0x6392, 0x676F, 0x6E43, 0x7119, 0x76C3, 0x80CC, 0x80DA,
    0x88F4, 0x88F5, 0x8919, 0x8CE0, 0x8F29, 0x914D, 0x966A, 0x4F2F,
    0x4F70, 0x5E1B, 0x67CF, 0x6822, 0x767D, 0x767E, 0x9B44, 0x5E61,
    0x6A0A, 0x7169, 0x71D4, 0x756A, 0xF964, 0x7E41, 0x8543, 0x85E9,
    0x98DC, 0x4F10, 0x7B4F, 0x7F70, 0x95A5, 0x51E1, 0x5E06, 0x68B5,
    0x6C3E, 0x6C4E, 0x6CDB, 0x72AF, 0x7BC4, 0x8303, 0x6CD5, 0x743A,
    0x50FB, 0x5288, 0x58C1, 0x64D8, 0x6A97, 0x74A7, 0x7656, 0xFFFF,
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
    0xFFFF, 0x78A7, 0x8617, 0x95E2, 0x9739, 0xF965, 0x535E, 0x5F01,
    0x8B8A, 0x8FA8, 0x8FAF, 0x908A, 0x5225, 0x77A5, 0x9C49, 0x9F08,
    0x4E19, 0x5002, 0x5175, 0x5C5B, 0x5E77, 0x661E, 0x663A, 0x67C4,
    0x68C5, 0x70B3, 0x7501, 0x75C5, 0x79C9, 0x7ADD, 0x8F27, 0x9920,
    0x9A08, 0x4FDD, 0x5821, 0x5831, 0x5BF6, 0x666E, 0x6B65, 0x6D11,
    0x6E7A, 0x6F7D, 0x73E4, 0x752B, 0x83E9, 0x88DC, 0x8913, 0x8B5C,
    0x8F14, 0x4F0F, 0x50D5, 0x5310, 0x535C, 0x5B93, 0x5FA9, 0x670D,
    0x798F, 0x8179, 0x832F, 0x8514, 0x8907, 0x8986, 0x8F39, 0x8F3B,
    0x99A5, 0x9C12, 0x672C, 0x4E76, 0x4FF8, 0x5949, 0x5C01, 0x5CEF,
    0x5CF0, 0x6367, 0x68D2, 0x70FD, 0x71A2, 0x742B, 0x7E2B, 0x84EC,
    0x8702, 0x9022, 0x92D2, 0x9CF3, 0x4E0D, 0x4ED8, 0x4FEF, 0x5085,
    0x5256, 0x526F, 0x5426, 0x5490, 0x57E0, 0x592B, 0x5A66, 0xFFFF,
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
    0xFFFF, 0x5B5A, 0x5B75, 0x5BCC, 0x5E9C, 0xF966, 0x6276, 0x6577,
    0x65A7, 0x6D6E, 0x6EA5, 0x7236, 0x7B26, 0x7C3F, 0x7F36, 0x8150,
    0x8151, 0x819A, 0x8240, 0x8299, 0x83A9, 0x8A03, 0x8CA0, 0x8CE6,
    0x8CFB, 0x8D74, 0x8DBA, 0x90E8, 0x91DC, 0x961C, 0x9644, 0x99D9,
    0x9CE7, 0x5317, 0x5206, 0x5429, 0x5674, 0x58B3, 0x5954, 0x596E,
    0x5FFF, 0x61A4, 0x626E, 0x6610, 0x6C7E, 0x711A, 0x76C6, 0x7C89,
    0x7CDE, 0x7D1B, 0x82AC, 0x8CC1, 0x96F0, 0xF967, 0x4F5B, 0x5F17,
    0x5F7F, 0x62C2, 0x5D29, 0x670B, 0x68DA, 0x787C, 0x7E43, 0x9D6C,
    0x4E15, 0x5099, 0x5315, 0x532A, 0x5351, 0x5983, 0x5A62, 0x5E87,
    0x60B2, 0x618A, 0x6249, 0x6279, 0x6590, 0x6787, 0x69A7, 0x6BD4,
    0x6BD6, 0x6BD7, 0x6BD8, 0x6CB8, 0xF968, 0x7435, 0x75FA, 0x7812,
    0x7891, 0x79D5, 0x79D8, 0x7C83, 0x7DCB, 0x7FE1, 0x80A5, 0xFFFF,
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
    0xFFFF, 0x813E, 0x81C2, 0x83F2, 0x871A, 0x88E8, 0x8AB9, 0x8B6C,
    0x8CBB, 0x9119, 0x975E, 0x98DB, 0x9F3B, 0x56AC, 0x5B2A, 0x5F6C,
    0x658C, 0x6AB3, 0x6BAF, 0x6D5C, 0x6FF1, 0x7015, 0x725D, 0x73AD,
    0x8CA7, 0x8CD3, 0x983B, 0x6191, 0x6C37, 0x8058, 0x9A01, 0x4E4D,
    0x4E8B, 0x4E9B, 0x4ED5, 0x4F3A, 0x4F3C, 0x4F7F, 0x4FDF, 0x50FF,
    0x53F2, 0x53F8, 0x5506, 0x55E3, 0x56DB, 0x58EB, 0x5962, 0x5A11,
    0x5BEB, 0x5BFA, 0x5C04, 0x5DF3, 0x5E2B, 0x5F99, 0x601D, 0x6368,
    0x659C, 0x65AF, 0x67F6, 0x67FB, 0x68AD, 0x6B7B, 0x6C99, 0x6CD7,
    0x6E23, 0x7009, 0x7345, 0x7802, 0x793E, 0x7940, 0x7960, 0x79C1,
    0x7BE9, 0x7D17, 0x7D72, 0x8086, 0x820D, 0x838E, 0x84D1, 0x86C7,
    0x88DF, 0x8A50, 0x8A5E, 0x8B1D, 0x8CDC, 0x8D66, 0x8FAD, 0x90AA,
    0x98FC, 0x99DF, 0x9E9D, 0x524A, 0xF969, 0x6714, 0xF96A, 0xFFFF,
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
    0xFFFF, 0x5098, 0x522A, 0x5C71, 0x6563, 0x6C55, 0x73CA, 0x7523,
    0x759D, 0x7B97, 0x849C, 0x9178, 0x9730, 0x4E77, 0x6492, 0x6BBA,
    0x715E, 0x85A9, 0x4E09, 0xF96B, 0x6749, 0x68EE, 0x6E17, 0x829F,
    0x8518, 0x886B, 0x63F7, 0x6F81, 0x9212, 0x98AF, 0x4E0A, 0x50B7,
    0x50CF, 0x511F, 0x5546, 0x55AA, 0x5617, 0x5B40, 0x5C19, 0x5CE0,
    0x5E38, 0x5E8A, 0x5EA0, 0x5EC2, 0x60F3, 0x6851, 0x6A61, 0x6E58,
    0x723D, 0x7240, 0x72C0, 0x76F8, 0x7965, 0x7BB1, 0x7FD4, 0x88F3,
    0x89F4, 0x8A73, 0x8C61, 0x8CDE, 0x971C, 0x585E, 0x74BD, 0x8CFD,
    0x55C7, 0xF96C, 0x7A61, 0x7D22, 0x8272, 0x7272, 0x751F, 0x7525,
    0xF96D, 0x7B19, 0x5885, 0x58FB, 0x5DBC, 0x5E8F, 0x5EB6, 0x5F90,
    0x6055, 0x6292, 0x637F, 0x654D, 0x6691, 0x66D9, 0x66F8, 0x6816,
    0x68F2, 0x7280, 0x745E, 0x7B6E, 0x7D6E, 0x7DD6, 0x7F72, 0xFFFF,
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
    0xFFFF, 0x80E5, 0x8212, 0x85AF, 0x897F, 0x8A93, 0x901D, 0x92E4,
    0x9ECD, 0x9F20, 0x5915, 0x596D, 0x5E2D, 0x60DC, 0x6614, 0x6673,
    0x6790, 0x6C50, 0x6DC5, 0x6F5F, 0x77F3, 0x78A9, 0x84C6, 0x91CB,
    0x932B, 0x4ED9, 0x50CA, 0x5148, 0x5584, 0x5B0B, 0x5BA3, 0x6247,
    0x657E, 0x65CB, 0x6E32, 0x717D, 0x7401, 0x7444, 0x7487, 0x74BF,
    0x766C, 0x79AA, 0x7DDA, 0x7E55, 0x7FA8, 0x817A, 0x81B3, 0x8239,
    0x861A, 0x87EC, 0x8A75, 0x8DE3, 0x9078, 0x9291, 0x9425, 0x994D,
    0x9BAE, 0x5368, 0x5C51, 0x6954, 0x6CC4, 0x6D29, 0x6E2B, 0x820C,
    0x859B, 0x893B, 0x8A2D, 0x8AAA, 0x96EA, 0x9F67, 0x5261, 0x66B9,
    0x6BB2, 0x7E96, 0x87FE, 0x8D0D, 0x9583, 0x965D, 0x651D, 0x6D89,
    0x71EE, 0xF96E, 0x57CE, 0x59D3, 0x5BAC, 0x6027, 0x60FA, 0x6210,
    0x661F, 0x665F, 0x7329, 0x73F9, 0x76DB, 0x7701, 0x7B6C, 0xFFFF,
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
    0xFFFF, 0x8056, 0x8072, 0x8165, 0x8AA0, 0x9192, 0x4E16, 0x52E2,
    0x6B72, 0x6D17, 0x7A05, 0x7B39, 0x7D30, 0xF96F, 0x8CB0, 0x53EC,
    0x562F, 0x5851, 0x5BB5, 0x5C0F, 0x5C11, 0x5DE2, 0x6240, 0x6383,
    0x6414, 0x662D, 0x68B3, 0x6CBC, 0x6D88, 0x6EAF, 0x701F, 0x70A4,
    0x71D2, 0x7526, 0x758F, 0x758E, 0x7619, 0x7B11, 0x7BE0, 0x7C2B,
    0x7D20, 0x7D39, 0x852C, 0x856D, 0x8607, 0x8A34, 0x900D, 0x9061,
    0x90B5, 0x92B7, 0x97F6, 0x9A37, 0x4FD7, 0x5C6C, 0x675F, 0x6D91,
    0x7C9F, 0x7E8C, 0x8B16, 0x8D16, 0x901F, 0x5B6B, 0x5DFD, 0x640D,
    0x84C0, 0x905C, 0x98E1, 0x7387, 0x5B8B, 0x609A, 0x677E, 0x6DDE,
    0x8A1F, 0x8AA6, 0x9001, 0x980C, 0x5237, 0xF970, 0x7051, 0x788E,
    0x9396, 0x8870, 0x91D7, 0x4FEE, 0x53D7, 0x55FD, 0x56DA, 0x5782,
    0x58FD, 0x5AC2, 0x5B88, 0x5CAB, 0x5CC0, 0x5E25, 0x6101, 0xFFFF,
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
    0xFFFF, 0x620D, 0x624B, 0x6388, 0x641C, 0x6536, 0x6578, 0x6A39,
    0x6B8A, 0x6C34, 0x6D19, 0x6F31, 0x71E7, 0x72E9, 0x7378, 0x7407,
    0x74B2, 0x7626, 0x7761, 0x79C0, 0x7A57, 0x7AEA, 0x7CB9, 0x7D8F,
    0x7DAC, 0x7E61, 0x7F9E, 0x8129, 0x8331, 0x8490, 0x84DA, 0x85EA,
    0x8896, 0x8AB0, 0x8B90, 0x8F38, 0x9042, 0x9083, 0x916C, 0x9296,
    0x92B9, 0x968B, 0x96A7, 0x96A8, 0x96D6, 0x9700, 0x9808, 0x9996,
    0x9AD3, 0x9B1A, 0x53D4, 0x587E, 0x5919, 0x5B70, 0x5BBF, 0x6DD1,
    0x6F5A, 0x719F, 0x7421, 0x74B9, 0x8085, 0x83FD, 0x5DE1, 0x5F87,
    0x5FAA, 0x6042, 0x65EC, 0x6812, 0x696F, 0x6A53, 0x6B89, 0x6D35,
    0x6DF3, 0x73E3, 0x76FE, 0x77AC, 0x7B4D, 0x7D14, 0x8123, 0x821C,
    0x8340, 0x84F4, 0x8563, 0x8A62, 0x8AC4, 0x9187, 0x931E, 0x9806,
    0x99B4, 0x620C, 0x8853, 0x8FF0, 0x9265, 0x5D07, 0x5D27, 0xFFFF,
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
    0xFFFF, 0x5D69, 0x745F, 0x819D, 0x8768, 0x6FD5, 0x62FE, 0x7FD2,
    0x8936, 0x8972, 0x4E1E, 0x4E58, 0x50E7, 0x52DD, 0x5347, 0x627F,
    0x6607, 0x7E69, 0x8805, 0x965E, 0x4F8D, 0x5319, 0x5636, 0x59CB,
    0x5AA4, 0x5C38, 0x5C4E, 0x5C4D, 0x5E02, 0x5F11, 0x6043, 0x65BD,
    0x662F, 0x6642, 0x67BE, 0x67F4, 0x731C, 0x77E2, 0x793A, 0x7FC5,
    0x8494, 0x84CD, 0x8996, 0x8A66, 0x8A69, 0x8AE1, 0x8C55, 0x8C7A,
    0x57F4, 0x5BD4, 0x5F0F, 0x606F, 0x62ED, 0x690D, 0x6B96, 0x6E5C,
    0x7184, 0x7BD2, 0x8755, 0x8B58, 0x8EFE, 0x98DF, 0x98FE, 0x4F38,
    0x4F81, 0x4FE1, 0x547B, 0x5A20, 0x5BB8, 0x613C, 0x65B0, 0x6668,
    0x71FC, 0x7533, 0x795E, 0x7D33, 0x814E, 0x81E3, 0x8398, 0x85AA,
    0x85CE, 0x8703, 0x8A0A, 0x8EAB, 0x8F9B, 0xF971, 0x8FC5, 0x5931,
    0x5BA4, 0x5BE6, 0x6089, 0x5BE9, 0x5C0B, 0x5FC3, 0x6C81, 0xFFFF,
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
    0xFFFF, 0xF972, 0x6DF1, 0x700B, 0x751A, 0x82AF, 0x8AF6, 0x4EC0,
    0x5341, 0xF973, 0x96D9, 0x6C0F, 0x4E9E, 0x4FC4, 0x5152, 0x555E,
    0x5A25, 0x5CE8, 0x6211, 0x7259, 0x82BD, 0x83AA, 0x86FE, 0x8859,
    0x8A1D, 0x963F, 0x96C5, 0x9913, 0x9D09, 0x9D5D, 0x580A, 0x5CB3,
    0x5DBD, 0x5E44, 0x60E1, 0x6115, 0x63E1, 0x6A02, 0x6E25, 0x9102,
    0x9354, 0x984E, 0x9C10, 0x9F77, 0x5B89, 0x5CB8, 0x6309, 0x664F,
    0x6848, 0x773C, 0x96C1, 0x978D, 0x9854, 0x9B9F, 0x65A1, 0x8B01,
    0x8ECB, 0x95BC, 0x5535, 0x5CA9, 0x5DD6, 0x5EB5, 0x6697, 0x764C,
    0x83F4, 0x95C7, 0x58D3, 0x62BC, 0x72CE, 0x9D28, 0x4EF0, 0x592E,
    0x600F, 0x663B, 0x6B83, 0x79E7, 0x9D26, 0x5393, 0x54C0, 0x57C3,
    0x5D16, 0x611B, 0x66D6, 0x6DAF, 0x788D, 0x827E, 0x9698, 0x9744,
    0x5384, 0x627C, 0x6396, 0x6DB2, 0x7E0A, 0x814B, 0x984D, 0xFFFF,
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
    0xFFFF, 0x6AFB, 0x7F4C, 0x9DAF, 0x9E1A, 0x4E5F, 0x503B, 0x51B6,
    0x591C, 0x60F9, 0x63F6, 0x6930, 0x723A, 0x8036, 0xF974, 0x91CE,
    0x5F31, 0xF975, 0xF976, 0x7D04, 0x82E5, 0x846F, 0x84BB, 0x85E5,
    0x8E8D, 0xF977, 0x4F6F, 0xF978, 0xF979, 0x58E4, 0x5B43, 0x6059,
    0x63DA, 0x6518, 0x656D, 0x6698, 0xF97A, 0x694A, 0x6A23, 0x6D0B,
    0x7001, 0x716C, 0x75D2, 0x760D, 0x79B3, 0x7A70, 0xF97B, 0x7F8A,
    0xF97C, 0x8944, 0xF97D, 0x8B93, 0x91C0, 0x967D, 0xF97E, 0x990A,
    0x5704, 0x5FA1, 0x65BC, 0x6F01, 0x7600, 0x79A6, 0x8A9E, 0x99AD,
    0x9B5A, 0x9F6C, 0x5104, 0x61B6, 0x6291, 0x6A8D, 0x81C6, 0x5043,
    0x5830, 0x5F66, 0x7109, 0x8A00, 0x8AFA, 0x5B7C, 0x8616, 0x4FFA,
    0x513C, 0x56B4, 0x5944, 0x63A9, 0x6DF9, 0x5DAA, 0x696D, 0x5186,
    0x4E88, 0x4F59, 0xF97F, 0xF980, 0xF981, 0x5982, 0xF982, 0xFFFF,
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
    0xFFFF, 0xF983, 0x6B5F, 0x6C5D, 0xF984, 0x74B5, 0x7916, 0xF985,
    0x8207, 0x8245, 0x8339, 0x8F3F, 0x8F5D, 0xF986, 0x9918, 0xF987,
    0xF988, 0xF989, 0x4EA6, 0xF98A, 0x57DF, 0x5F79, 0x6613, 0xF98B,
    0xF98C, 0x75AB, 0x7E79, 0x8B6F, 0xF98D, 0x9006, 0x9A5B, 0x56A5,
    0x5827, 0x59F8, 0x5A1F, 0x5BB4, 0xF98E, 0x5EF6, 0xF98F, 0xF990,
    0x6350, 0x633B, 0xF991, 0x693D, 0x6C87, 0x6CBF, 0x6D8E, 0x6D93,
    0x6DF5, 0x6F14, 0xF992, 0x70DF, 0x7136, 0x7159, 0xF993, 0x71C3,
    0x71D5, 0xF994, 0x784F, 0x786F, 0xF995, 0x7B75, 0x7DE3, 0xF996,
    0x7E2F, 0xF997, 0x884D, 0x8EDF, 0xF998, 0xF999, 0xF99A, 0x925B,
    0xF99B, 0x9CF6, 0xF99C, 0xF99D, 0xF99E, 0x6085, 0x6D85, 0xF99F,
    0x71B1, 0xF9A0, 0xF9A1, 0x95B1, 0x53AD, 0xF9A2, 0xF9A3, 0xF9A4,
    0x67D3, 0xF9A5, 0x708E, 0x7130, 0x7430, 0x8276, 0x82D2, 0xFFFF,
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
    0xFFFF, 0xF9A6, 0x95BB, 0x9AE5, 0x9E7D, 0x66C4, 0xF9A7, 0x71C1,
    0x8449, 0xF9A8, 0xF9A9, 0x584B, 0xF9AA, 0xF9AB, 0x5DB8, 0x5F71,
    0xF9AC, 0x6620, 0x668E, 0x6979, 0x69AE, 0x6C38, 0x6CF3, 0x6E36,
    0x6F41, 0x6FDA, 0x701B, 0x702F, 0x7150, 0x71DF, 0x7370, 0xF9AD,
    0x745B, 0xF9AE, 0x74D4, 0x76C8, 0x7A4E, 0x7E93, 0xF9AF, 0xF9B0,
    0x82F1, 0x8A60, 0x8FCE, 0xF9B1, 0x9348, 0xF9B2, 0x9719, 0xF9B3,
    0xF9B4, 0x4E42, 0x502A, 0xF9B5, 0x5208, 0x53E1, 0x66F3, 0x6C6D,
    0x6FCA, 0x730A, 0x777F, 0x7A62, 0x82AE, 0x85DD, 0x8602, 0xF9B6,
    0x88D4, 0x8A63, 0x8B7D, 0x8C6B, 0xF9B7, 0x92B3, 0xF9B8, 0x9713,
    0x9810, 0x4E94, 0x4F0D, 0x4FC9, 0x50B2, 0x5348, 0x543E, 0x5433,
    0x55DA, 0x5862, 0x58BA, 0x5967, 0x5A1B, 0x5BE4, 0x609F, 0xF9B9,
    0x61CA, 0x6556, 0x65FF, 0x6664, 0x68A7, 0x6C5A, 0x6FB3, 0xFFFF,
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
    0xFFFF, 0x70CF, 0x71AC, 0x7352, 0x7B7D, 0x8708, 0x8AA4, 0x9C32,
    0x9F07, 0x5C4B, 0x6C83, 0x7344, 0x7389, 0x923A, 0x6EAB, 0x7465,
    0x761F, 0x7A69, 0x7E15, 0x860A, 0x5140, 0x58C5, 0x64C1, 0x74EE,
    0x7515, 0x7670, 0x7FC1, 0x9095, 0x96CD, 0x9954, 0x6E26, 0x74E6,
    0x7AA9, 0x7AAA, 0x81E5, 0x86D9, 0x8778, 0x8A1B, 0x5A49, 0x5B8C,
    0x5B9B, 0x68A1, 0x6900, 0x6D63, 0x73A9, 0x7413, 0x742C, 0x7897,
    0x7DE9, 0x7FEB, 0x8118, 0x8155, 0x839E, 0x8C4C, 0x962E, 0x9811,
    0x66F0, 0x5F80, 0x65FA, 0x6789, 0x6C6A, 0x738B, 0x502D, 0x5A03,
    0x6B6A, 0x77EE, 0x5916, 0x5D6C, 0x5DCD, 0x7325, 0x754F, 0xF9BA,
    0xF9BB, 0x50E5, 0x51F9, 0x582F, 0x592D, 0x5996, 0x59DA, 0x5BE5,
    0xF9BC, 0xF9BD, 0x5DA2, 0x62D7, 0x6416, 0x6493, 0x64FE, 0xF9BE,
    0x66DC, 0xF9BF, 0x6A48, 0xF9C0, 0x71FF, 0x7464, 0xF9C1, 0xFFFF,
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
    0xFFFF, 0x7A88, 0x7AAF, 0x7E47, 0x7E5E, 0x8000, 0x8170, 0xF9C2,
    0x87EF, 0x8981, 0x8B20, 0x9059, 0xF9C3, 0x9080, 0x9952, 0x617E,
    0x6B32, 0x6D74, 0x7E1F, 0x8925, 0x8FB1, 0x4FD1, 0x50AD, 0x5197,
    0x52C7, 0x57C7, 0x5889, 0x5BB9, 0x5EB8, 0x6142, 0x6995, 0x6D8C,
    0x6E67, 0x6EB6, 0x7194, 0x7462, 0x7528, 0x752C, 0x8073, 0x8338,
    0x84C9, 0x8E0A, 0x9394, 0x93DE, 0xF9C4, 0x4E8E, 0x4F51, 0x5076,
    0x512A, 0x53C8, 0x53CB, 0x53F3, 0x5B87, 0x5BD3, 0x5C24, 0x611A,
    0x6182, 0x65F4, 0x725B, 0x7397, 0x7440, 0x76C2, 0x7950, 0x7991,
    0x79B9, 0x7D06, 0x7FBD, 0x828B, 0x85D5, 0x865E, 0x8FC2, 0x9047,
    0x90F5, 0x91EA, 0x9685, 0x96E8, 0x96E9, 0x52D6, 0x5F67, 0x65ED,
    0x6631, 0x682F, 0x715C, 0x7A36, 0x90C1, 0x980A, 0x4E91, 0xF9C5,
    0x6A52, 0x6B9E, 0x6F90, 0x7189, 0x8018, 0x82B8, 0x8553, 0xFFFF,
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
    0xFFFF, 0x904B, 0x9695, 0x96F2, 0x97FB, 0x851A, 0x9B31, 0x4E90,
    0x718A, 0x96C4, 0x5143, 0x539F, 0x54E1, 0x5713, 0x5712, 0x57A3,
    0x5A9B, 0x5AC4, 0x5BC3, 0x6028, 0x613F, 0x63F4, 0x6C85, 0x6D39,
    0x6E72, 0x6E90, 0x7230, 0x733F, 0x7457, 0x82D1, 0x8881, 0x8F45,
    0x9060, 0xF9C6, 0x9662, 0x9858, 0x9D1B, 0x6708, 0x8D8A, 0x925E,
    0x4F4D, 0x5049, 0x50DE, 0x5371, 0x570D, 0x59D4, 0x5A01, 0x5C09,
    0x6170, 0x6690, 0x6E2D, 0x7232, 0x744B, 0x7DEF, 0x80C3, 0x840E,
    0x8466, 0x853F, 0x875F, 0x885B, 0x8918, 0x8B02, 0x9055, 0x97CB,
    0x9B4F, 0x4E73, 0x4F91, 0x5112, 0x516A, 0xF9C7, 0x552F, 0x55A9,
    0x5B7A, 0x5BA5, 0x5E7C, 0x5E7D, 0x5EBE, 0x60A0, 0x60DF, 0x6108,
    0x6109, 0x63C4, 0x6538, 0x6709, 0xF9C8, 0x67D4, 0x67DA, 0xF9C9,
    0x6961, 0x6962, 0x6CB9, 0x6D27, 0xF9CA, 0x6E38, 0xF9CB, 0xFFFF,
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
    0xFFFF, 0x6FE1, 0x7336, 0x7337, 0xF9CC, 0x745C, 0x7531, 0xF9CD,
    0x7652, 0xF9CE, 0xF9CF, 0x7DAD, 0x81FE, 0x8438, 0x88D5, 0x8A98,
    0x8ADB, 0x8AED, 0x8E30, 0x8E42, 0x904A, 0x903E, 0x907A, 0x9149,
    0x91C9, 0x936E, 0xF9D0, 0xF9D1, 0x5809, 0xF9D2, 0x6BD3, 0x8089,
    0x80B2, 0xF9D3, 0xF9D4, 0x5141, 0x596B, 0x5C39, 0xF9D5, 0xF9D6,
    0x6F64, 0x73A7, 0x80E4, 0x8D07, 0xF9D7, 0x9217, 0x958F, 0xF9D8,
    0xF9D9, 0xF9DA, 0xF9DB, 0x807F, 0x620E, 0x701C, 0x7D68, 0x878D,
    0xF9DC, 0x57A0, 0x6069, 0x6147, 0x6BB7, 0x8ABE, 0x9280, 0x96B1,
    0x4E59, 0x541F, 0x6DEB, 0x852D, 0x9670, 0x97F3, 0x98EE, 0x63D6,
    0x6CE3, 0x9091, 0x51DD, 0x61C9, 0x81BA, 0x9DF9, 0x4F9D, 0x501A,
    0x5100, 0x5B9C, 0x610F, 0x61FF, 0x64EC, 0x6905, 0x6BC5, 0x7591,
    0x77E3, 0x7FA9, 0x8264, 0x858F, 0x87FB, 0x8863, 0x8ABC, 0xFFFF,
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
    0xFFFF, 0x8B70, 0x91AB, 0x4E8C, 0x4EE5, 0x4F0A, 0xF9DD, 0xF9DE,
    0x5937, 0x59E8, 0xF9DF, 0x5DF2, 0x5F1B, 0x5F5B, 0x6021, 0xF9E0,
    0xF9E1, 0xF9E2, 0xF9E3, 0x723E, 0x73E5, 0xF9E4, 0x7570, 0x75CD,
    0xF9E5, 0x79FB, 0xF9E6, 0x800C, 0x8033, 0x8084, 0x82E1, 0x8351,
    0xF9E7, 0xF9E8, 0x8CBD, 0x8CB3, 0x9087, 0xF9E9, 0xF9EA, 0x98F4,
    0x990C, 0xF9EB, 0xF9EC, 0x7037, 0x76CA, 0x7FCA, 0x7FCC, 0x7FFC,
    0x8B1A, 0x4EBA, 0x4EC1, 0x5203, 0x5370, 0xF9ED, 0x54BD, 0x56E0,
    0x59FB, 0x5BC5, 0x5F15, 0x5FCD, 0x6E6E, 0xF9EE, 0xF9EF, 0x7D6A,
    0x8335, 0xF9F0, 0x8693, 0x8A8D, 0xF9F1, 0x976D, 0x9777, 0xF9F2,
    0xF9F3, 0x4E00, 0x4F5A, 0x4F7E, 0x58F9, 0x65E5, 0x6EA2, 0x9038,
    0x93B0, 0x99B9, 0x4EFB, 0x58EC, 0x598A, 0x59D9, 0x6041, 0xF9F4,
    0xF9F5, 0x7A14, 0xF9F6, 0x834F, 0x8CC3, 0x5165, 0x5344, 0xFFFF,
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
    0xFFFF, 0xF9F7, 0xF9F8, 0xF9F9, 0x4ECD, 0x5269, 0x5B55, 0x82BF,
    0x4ED4, 0x523A, 0x54A8, 0x59C9, 0x59FF, 0x5B50, 0x5B57, 0x5B5C,
    0x6063, 0x6148, 0x6ECB, 0x7099, 0x716E, 0x7386, 0x74F7, 0x75B5,
    0x78C1, 0x7D2B, 0x8005, 0x81EA, 0x8328, 0x8517, 0x85C9, 0x8AEE,
    0x8CC7, 0x96CC, 0x4F5C, 0x52FA, 0x56BC, 0x65AB, 0x6628, 0x707C,
    0x70B8, 0x7235, 0x7DBD, 0x828D, 0x914C, 0x96C0, 0x9D72, 0x5B71,
    0x68E7, 0x6B98, 0x6F7A, 0x76DE, 0x5C91, 0x66AB, 0x6F5B, 0x7BB4,
    0x7C2A, 0x8836, 0x96DC, 0x4E08, 0x4ED7, 0x5320, 0x5834, 0x58BB,
    0x58EF, 0x596C, 0x5C07, 0x5E33, 0x5E84, 0x5F35, 0x638C, 0x66B2,
    0x6756, 0x6A1F, 0x6AA3, 0x6B0C, 0x6F3F, 0x7246, 0xF9FA, 0x7350,
    0x748B, 0x7AE0, 0x7CA7, 0x8178, 0x81DF, 0x81E7, 0x838A, 0x846C,
    0x8523, 0x8594, 0x85CF, 0x88DD, 0x8D13, 0x91AC, 0x9577, 0xFFFF,
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
    0xFFFF, 0x969C, 0x518D, 0x54C9, 0x5728, 0x5BB0, 0x624D, 0x6750,
    0x683D, 0x6893, 0x6E3D, 0x6ED3, 0x707D, 0x7E21, 0x88C1, 0x8CA1,
    0x8F09, 0x9F4B, 0x9F4E, 0x722D, 0x7B8F, 0x8ACD, 0x931A, 0x4F47,
    0x4F4E, 0x5132, 0x5480, 0x59D0, 0x5E95, 0x62B5, 0x6775, 0x696E,
    0x6A17, 0x6CAE, 0x6E1A, 0x72D9, 0x732A, 0x75BD, 0x7BB8, 0x7D35,
    0x82E7, 0x83F9, 0x8457, 0x85F7, 0x8A5B, 0x8CAF, 0x8E87, 0x9019,
    0x90B8, 0x96CE, 0x9F5F, 0x52E3, 0x540A, 0x5AE1, 0x5BC2, 0x6458,
    0x6575, 0x6EF4, 0x72C4, 0xF9FB, 0x7684, 0x7A4D, 0x7B1B, 0x7C4D,
    0x7E3E, 0x7FDF, 0x837B, 0x8B2B, 0x8CCA, 0x8D64, 0x8DE1, 0x8E5F,
    0x8FEA, 0x8FF9, 0x9069, 0x93D1, 0x4F43, 0x4F7A, 0x50B3, 0x5168,
    0x5178, 0x524D, 0x526A, 0x5861, 0x587C, 0x5960, 0x5C08, 0x5C55,
    0x5EDB, 0x609B, 0x6230, 0x6813, 0x6BBF, 0x6C08, 0x6FB1, 0xFFFF,
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
    0xFFFF, 0x714E, 0x7420, 0x7530, 0x7538, 0x7551, 0x7672, 0x7B4C,
    0x7B8B, 0x7BAD, 0x7BC6, 0x7E8F, 0x8A6E, 0x8F3E, 0x8F49, 0x923F,
    0x9293, 0x9322, 0x942B, 0x96FB, 0x985A, 0x986B, 0x991E, 0x5207,
    0x622A, 0x6298, 0x6D59, 0x7664, 0x7ACA, 0x7BC0, 0x7D76, 0x5360,
    0x5CBE, 0x5E97, 0x6F38, 0x70B9, 0x7C98, 0x9711, 0x9B8E, 0x9EDE,
    0x63A5, 0x647A, 0x8776, 0x4E01, 0x4E95, 0x4EAD, 0x505C, 0x5075,
    0x5448, 0x59C3, 0x5B9A, 0x5E40, 0x5EAD, 0x5EF7, 0x5F81, 0x60C5,
    0x633A, 0x653F, 0x6574, 0x65CC, 0x6676, 0x6678, 0x67FE, 0x6968,
    0x6A89, 0x6B63, 0x6C40, 0x6DC0, 0x6DE8, 0x6E1F, 0x6E5E, 0x701E,
    0x70A1, 0x738E, 0x73FD, 0x753A, 0x775B, 0x7887, 0x798E, 0x7A0B,
    0x7A7D, 0x7CBE, 0x7D8E, 0x8247, 0x8A02, 0x8AEA, 0x8C9E, 0x912D,
    0x914A, 0x91D8, 0x9266, 0x92CC, 0x9320, 0x9706, 0x9756, 0xFFFF,
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
    0xFFFF, 0x975C, 0x9802, 0x9F0E, 0x5236, 0x5291, 0x557C, 0x5824,
    0x5E1D, 0x5F1F, 0x608C, 0x63D0, 0x68AF, 0x6FDF, 0x796D, 0x7B2C,
    0x81CD, 0x85BA, 0x88FD, 0x8AF8, 0x8E44, 0x918D, 0x9664, 0x969B,
    0x973D, 0x984C, 0x9F4A, 0x4FCE, 0x5146, 0x51CB, 0x52A9, 0x5632,
    0x5F14, 0x5F6B, 0x63AA, 0x64CD, 0x65E9, 0x6641, 0x66FA, 0x66F9,
    0x671D, 0x689D, 0x68D7, 0x69FD, 0x6F15, 0x6F6E, 0x7167, 0x71E5,
    0x722A, 0x74AA, 0x773A, 0x7956, 0x795A, 0x79DF, 0x7A20, 0x7A95,
    0x7C97, 0x7CDF, 0x7D44, 0x7E70, 0x8087, 0x85FB, 0x86A4, 0x8A54,
    0x8ABF, 0x8D99, 0x8E81, 0x9020, 0x906D, 0x91E3, 0x963B, 0x96D5,
    0x9CE5, 0x65CF, 0x7C07, 0x8DB3, 0x93C3, 0x5B58, 0x5C0A, 0x5352,
    0x62D9, 0x731D, 0x5027, 0x5B97, 0x5F9E, 0x60B0, 0x616B, 0x68D5,
    0x6DD9, 0x742E, 0x7A2E, 0x7D42, 0x7D9C, 0x7E31, 0x816B, 0xFFFF,
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
    0xFFFF, 0x8E2A, 0x8E35, 0x937E, 0x9418, 0x4F50, 0x5750, 0x5DE6,
    0x5EA7, 0x632B, 0x7F6A, 0x4E3B, 0x4F4F, 0x4F8F, 0x505A, 0x59DD,
    0x80C4, 0x546A, 0x5468, 0x55FE, 0x594F, 0x5B99, 0x5DDE, 0x5EDA,
    0x665D, 0x6731, 0x67F1, 0x682A, 0x6CE8, 0x6D32, 0x6E4A, 0x6F8D,
    0x70B7, 0x73E0, 0x7587, 0x7C4C, 0x7D02, 0x7D2C, 0x7DA2, 0x821F,
    0x86DB, 0x8A3B, 0x8A85, 0x8D70, 0x8E8A, 0x8F33, 0x9031, 0x914E,
    0x9152, 0x9444, 0x99D0, 0x7AF9, 0x7CA5, 0x4FCA, 0x5101, 0x51C6,
    0x57C8, 0x5BEF, 0x5CFB, 0x6659, 0x6A3D, 0x6D5A, 0x6E96, 0x6FEC,
    0x710C, 0x756F, 0x7AE3, 0x8822, 0x9021, 0x9075, 0x96CB, 0x99FF,
    0x8301, 0x4E2D, 0x4EF2, 0x8846, 0x91CD, 0x537D, 0x6ADB, 0x696B,
    0x6C41, 0x847A, 0x589E, 0x618E, 0x66FE, 0x62EF, 0x70DD, 0x7511,
    0x75C7, 0x7E52, 0x84B8, 0x8B49, 0x8D08, 0x4E4B, 0x53EA, 0xFFFF,
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
    0xFFFF, 0x54AB, 0x5730, 0x5740, 0x5FD7, 0x6301, 0x6307, 0x646F,
    0x652F, 0x65E8, 0x667A, 0x679D, 0x67B3, 0x6B62, 0x6C60, 0x6C9A,
    0x6F2C, 0x77E5, 0x7825, 0x7949, 0x7957, 0x7D19, 0x80A2, 0x8102,
    0x81F3, 0x829D, 0x82B7, 0x8718, 0x8A8C, 0xF9FC, 0x8D04, 0x8DBE,
    0x9072, 0x76F4, 0x7A19, 0x7A37, 0x7E54, 0x8077, 0x5507, 0x55D4,
    0x5875, 0x632F, 0x6422, 0x6649, 0x664B, 0x686D, 0x699B, 0x6B84,
    0x6D25, 0x6EB1, 0x73CD, 0x7468, 0x74A1, 0x755B, 0x75B9, 0x76E1,
    0x771E, 0x778B, 0x79E6, 0x7E09, 0x7E1D, 0x81FB, 0x852F, 0x8897,
    0x8A3A, 0x8CD1, 0x8EEB, 0x8FB0, 0x9032, 0x93AD, 0x9663, 0x9673,
    0x9707, 0x4F84, 0x53F1, 0x59EA, 0x5AC9, 0x5E19, 0x684E, 0x74C6,
    0x75BE, 0x79E9, 0x7A92, 0x81A3, 0x86ED, 0x8CEA, 0x8DCC, 0x8FED,
    0x659F, 0x6715, 0xF9FD, 0x57F7, 0x6F57, 0x7DDD, 0x8F2F, 0xFFFF,
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
    0xFFFF, 0x93F6, 0x96C6, 0x5FB5, 0x61F2, 0x6F84, 0x4E14, 0x4F98,
    0x501F, 0x53C9, 0x55DF, 0x5D6F, 0x5DEE, 0x6B21, 0x6B64, 0x78CB,
    0x7B9A, 0xF9FE, 0x8E49, 0x8ECA, 0x906E, 0x6349, 0x643E, 0x7740,
    0x7A84, 0x932F, 0x947F, 0x9F6A, 0x64B0, 0x6FAF, 0x71E6, 0x74A8,
    0x74DA, 0x7AC4, 0x7C12, 0x7E82, 0x7CB2, 0x7E98, 0x8B9A, 0x8D0A,
    0x947D, 0x9910, 0x994C, 0x5239, 0x5BDF, 0x64E6, 0x672D, 0x7D2E,
    0x50ED, 0x53C3, 0x5879, 0x6158, 0x6159, 0x61FA, 0x65AC, 0x7AD9,
    0x8B92, 0x8B96, 0x5009, 0x5021, 0x5275, 0x5531, 0x5A3C, 0x5EE0,
    0x5F70, 0x6134, 0x655E, 0x660C, 0x6636, 0x66A2, 0x69CD, 0x6EC4,
    0x6F32, 0x7316, 0x7621, 0x7A93, 0x8139, 0x8259, 0x83D6, 0x84BC,
    0x50B5, 0x57F0, 0x5BC0, 0x5BE8, 0x5F69, 0x63A1, 0x7826, 0x7DB5,
    0x83DC, 0x8521, 0x91C7, 0x91F5, 0x518A, 0x67F5, 0x7B56, 0xFFFF,
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
    0xFFFF, 0x8CAC, 0x51C4, 0x59BB, 0x60BD, 0x8655, 0x501C, 0xF9FF,
    0x5254, 0x5C3A, 0x617D, 0x621A, 0x62D3, 0x64F2, 0x65A5, 0x6ECC,
    0x7620, 0x810A, 0x8E60, 0x965F, 0x96BB, 0x4EDF, 0x5343, 0x5598,
    0x5929, 0x5DDD, 0x64C5, 0x6CC9, 0x6DFA, 0x7394, 0x7A7F, 0x821B,
    0x85A6, 0x8CE4, 0x8E10, 0x9077, 0x91E7, 0x95E1, 0x9621, 0x97C6,
    0x51F8, 0x54F2, 0x5586, 0x5FB9, 0x64A4, 0x6F88, 0x7DB4, 0x8F1F,
    0x8F4D, 0x9435, 0x50C9, 0x5C16, 0x6CBE, 0x6DFB, 0x751B, 0x77BB,
    0x7C3D, 0x7C64, 0x8A79, 0x8AC2, 0x581E, 0x59BE, 0x5E16, 0x6377,
    0x7252, 0x758A, 0x776B, 0x8ADC, 0x8CBC, 0x8F12, 0x5EF3, 0x6674,
    0x6DF8, 0x807D, 0x83C1, 0x8ACB, 0x9751, 0x9BD6, 0xFA00, 0x5243,
    0x66FF, 0x6D95, 0x6EEF, 0x7DE0, 0x8AE6, 0x902E, 0x905E, 0x9AD4,
    0x521D, 0x527F, 0x54E8, 0x6194, 0x6284, 0x62DB, 0x68A2, 0xFFFF,
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
    0xFFFF, 0x6912, 0x695A, 0x6A35, 0x7092, 0x7126, 0x785D, 0x7901,
    0x790E, 0x79D2, 0x7A0D, 0x8096, 0x8278, 0x82D5, 0x8349, 0x8549,
    0x8C82, 0x8D85, 0x9162, 0x918B, 0x91AE, 0x4FC3, 0x56D1, 0x71ED,
    0x77D7, 0x8700, 0x89F8, 0x5BF8, 0x5FD6, 0x6751, 0x90A8, 0x53E2,
    0x585A, 0x5BF5, 0x60A4, 0x6181, 0x6460, 0x7E3D, 0x8070, 0x8525,
    0x9283, 0x64AE, 0x50AC, 0x5D14, 0x6700, 0x589C, 0x62BD, 0x63A8,
    0x690E, 0x6978, 0x6A1E, 0x6E6B, 0x76BA, 0x79CB, 0x82BB, 0x8429,
    0x8ACF, 0x8DA8, 0x8FFD, 0x9112, 0x914B, 0x919C, 0x9310, 0x9318,
    0x939A, 0x96DB, 0x9A36, 0x9C0D, 0x4E11, 0x755C, 0x795D, 0x7AFA,
    0x7B51, 0x7BC9, 0x7E2E, 0x84C4, 0x8E59, 0x8E74, 0x8EF8, 0x9010,
    0x6625, 0x693F, 0x7443, 0x51FA, 0x672E, 0x9EDC, 0x5145, 0x5FE0,
    0x6C96, 0x87F2, 0x885D, 0x8877, 0x60B4, 0x81B5, 0x8403, 0xFFFF,
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
    0xFFFF, 0x8D05, 0x53D6, 0x5439, 0x5634, 0x5A36, 0x5C31, 0x708A,
    0x7FE0, 0x805A, 0x8106, 0x81ED, 0x8DA3, 0x9189, 0x9A5F, 0x9DF2,
    0x5074, 0x4EC4, 0x53A0, 0x60FB, 0x6E2C, 0x5C64, 0x4F88, 0x5024,
    0x55E4, 0x5CD9, 0x5E5F, 0x6065, 0x6894, 0x6CBB, 0x6DC4, 0x71BE,
    0x75D4, 0x75F4, 0x7661, 0x7A1A, 0x7A49, 0x7DC7, 0x7DFB, 0x7F6E,
    0x81F4, 0x86A9, 0x8F1C, 0x96C9, 0x99B3, 0x9F52, 0x5247, 0x52C5,
    0x98ED, 0x89AA, 0x4E03, 0x67D2, 0x6F06, 0x4FB5, 0x5BE2, 0x6795,
    0x6C88, 0x6D78, 0x741B, 0x7827, 0x91DD, 0x937C, 0x87C4, 0x79E4,
    0x7A31, 0x5FEB, 0x4ED6, 0x54A4, 0x553E, 0x58AE, 0x59A5, 0x60F0,
    0x6253, 0x62D6, 0x6736, 0x6955, 0x8235, 0x9640, 0x99B1, 0x99DD,
    0x502C, 0x5353, 0x5544, 0x577C, 0xFA01, 0x6258, 0xFA02, 0x64E2,
    0x666B, 0x67DD, 0x6FC1, 0x6FEF, 0x7422, 0x7438, 0x8A17, 0xFFFF,
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
    0xFFFF, 0x9438, 0x5451, 0x5606, 0x5766, 0x5F48, 0x619A, 0x6B4E,
    0x7058, 0x70AD, 0x7DBB, 0x8A95, 0x596A, 0x812B, 0x63A2, 0x7708,
    0x803D, 0x8CAA, 0x5854, 0x642D, 0x69BB, 0x5B95, 0x5E11, 0x6E6F,
    0xFA03, 0x8569, 0x514C, 0x53F0, 0x592A, 0x6020, 0x614B, 0x6B86,
    0x6C70, 0x6CF0, 0x7B1E, 0x80CE, 0x82D4, 0x8DC6, 0x90B0, 0x98B1,
    0xFA04, 0x64C7, 0x6FA4, 0x6491, 0x6504, 0x514E, 0x5410, 0x571F,
    0x8A0E, 0x615F, 0x6876, 0xFA05, 0x75DB, 0x7B52, 0x7D71, 0x901A,
    0x5806, 0x69CC, 0x817F, 0x892A, 0x9000, 0x9839, 0x5078, 0x5957,
    0x59AC, 0x6295, 0x900F, 0x9B2A, 0x615D, 0x7279, 0x95D6, 0x5761,
    0x5A46, 0x5DF4, 0x628A, 0x64AD, 0x64FA, 0x6777, 0x6CE2, 0x6D3E,
    0x722C, 0x7436, 0x7834, 0x7F77, 0x82AD, 0x8DDB, 0x9817, 0x5224,
    0x5742, 0x677F, 0x7248, 0x74E3, 0x8CA9, 0x8FA6, 0x9211, 0xFFFF,
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
    0xFFFF, 0x962A, 0x516B, 0x53ED, 0x634C, 0x4F69, 0x5504, 0x6096,
    0x6557, 0x6C9B, 0x6D7F, 0x724C, 0x72FD, 0x7A17, 0x8987, 0x8C9D,
    0x5F6D, 0x6F8E, 0x70F9, 0x81A8, 0x610E, 0x4FBF, 0x504F, 0x6241,
    0x7247, 0x7BC7, 0x7DE8, 0x7FE9, 0x904D, 0x97AD, 0x9A19, 0x8CB6,
    0x576A, 0x5E73, 0x67B0, 0x840D, 0x8A55, 0x5420, 0x5B16, 0x5E63,
    0x5EE2, 0x5F0A, 0x6583, 0x80BA, 0x853D, 0x9589, 0x965B, 0x4F48,
    0x5305, 0x530D, 0x530F, 0x5486, 0x54FA, 0x5703, 0x5E03, 0x6016,
    0x629B, 0x62B1, 0x6355, 0xFA06, 0x6CE1, 0x6D66, 0x75B1, 0x7832,
    0x80DE, 0x812F, 0x82DE, 0x8461, 0x84B2, 0x888D, 0x8912, 0x900B,
    0x92EA, 0x98FD, 0x9B91, 0x5E45, 0x66B4, 0x66DD, 0x7011, 0x7206,
    0xFA07, 0x4FF5, 0x527D, 0x5F6A, 0x6153, 0x6753, 0x6A19, 0x6F02,
    0x74E2, 0x7968, 0x8868, 0x8C79, 0x98C7, 0x98C4, 0x9A43, 0xFFFF,
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
    0xFFFF, 0x54C1, 0x7A1F, 0x6953, 0x8AF7, 0x8C4A, 0x98A8, 0x99AE,
    0x5F7C, 0x62AB, 0x75B2, 0x76AE, 0x88AB, 0x907F, 0x9642, 0x5339,
    0x5F3C, 0x5FC5, 0x6CCC, 0x73CC, 0x7562, 0x758B, 0x7B46, 0x82FE,
    0x999D, 0x4E4F, 0x903C, 0x4E0B, 0x4F55, 0x53A6, 0x590F, 0x5EC8,
    0x6630, 0x6CB3, 0x7455, 0x8377, 0x8766, 0x8CC0, 0x9050, 0x971E,
    0x9C15, 0x58D1, 0x5B78, 0x8650, 0x8B14, 0x9DB4, 0x5BD2, 0x6068,
    0x608D, 0x65F1, 0x6C57, 0x6F22, 0x6FA3, 0x701A, 0x7F55, 0x7FF0,
    0x9591, 0x9592, 0x9650, 0x97D3, 0x5272, 0x8F44, 0x51FD, 0x542B,
    0x54B8, 0x5563, 0x558A, 0x6ABB, 0x6DB5, 0x7DD8, 0x8266, 0x929C,
    0x9677, 0x9E79, 0x5408, 0x54C8, 0x76D2, 0x86E4, 0x95A4, 0x95D4,
    0x965C, 0x4EA2, 0x4F09, 0x59EE, 0x5AE6, 0x5DF7, 0x6052, 0x6297,
    0x676D, 0x6841, 0x6C86, 0x6E2F, 0x7F38, 0x809B, 0x822A, 0xFFFF,
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
    0xFFFF, 0xFA08, 0xFA09, 0x9805, 0x4EA5, 0x5055, 0x54B3, 0x5793,
    0x595A, 0x5B69, 0x5BB3, 0x61C8, 0x6977, 0x6D77, 0x7023, 0x87F9,
    0x89E3, 0x8A72, 0x8AE7, 0x9082, 0x99ED, 0x9AB8, 0x52BE, 0x6838,
    0x5016, 0x5E78, 0x674F, 0x8347, 0x884C, 0x4EAB, 0x5411, 0x56AE,
    0x73E6, 0x9115, 0x97FF, 0x9909, 0x9957, 0x9999, 0x5653, 0x589F,
    0x865B, 0x8A31, 0x61B2, 0x6AF6, 0x737B, 0x8ED2, 0x6B47, 0x96AA,
    0x9A57, 0x5955, 0x7200, 0x8D6B, 0x9769, 0x4FD4, 0x5CF4, 0x5F26,
    0x61F8, 0x665B, 0x6CEB, 0x70AB, 0x7384, 0x73B9, 0x73FE, 0x7729,
    0x774D, 0x7D43, 0x7D62, 0x7E23, 0x8237, 0x8852, 0xFA0A, 0x8CE2,
    0x9249, 0x986F, 0x5B51, 0x7A74, 0x8840, 0x9801, 0x5ACC, 0x4FE0,
    0x5354, 0x593E, 0x5CFD, 0x633E, 0x6D79, 0x72F9, 0x8105, 0x8107,
    0x83A2, 0x92CF, 0x9830, 0x4EA8, 0x5144, 0x5211, 0x578B, 0xFFFF,
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
    0xFFFF, 0x5F62, 0x6CC2, 0x6ECE, 0x7005, 0x7050, 0x70AF, 0x7192,
    0x73E9, 0x7469, 0x834A, 0x87A2, 0x8861, 0x9008, 0x90A2, 0x93A3,
    0x99A8, 0x516E, 0x5F57, 0x60E0, 0x6167, 0x66B3, 0x8559, 0x8E4A,
    0x91AF, 0x978B, 0x4E4E, 0x4E92, 0x547C, 0x58D5, 0x58FA, 0x597D,
    0x5CB5, 0x5F27, 0x6236, 0x6248, 0x660A, 0x6667, 0x6BEB, 0x6D69,
    0x6DCF, 0x6E56, 0x6EF8, 0x6F94, 0x6FE0, 0x6FE9, 0x705D, 0x72D0,
    0x7425, 0x745A, 0x74E0, 0x7693, 0x795C, 0x7CCA, 0x7E1E, 0x80E1,
    0x82A6, 0x846B, 0x84BF, 0x864E, 0x865F, 0x8774, 0x8B77, 0x8C6A,
    0x93AC, 0x9800, 0x9865, 0x60D1, 0x6216, 0x9177, 0x5A5A, 0x660F,
    0x6DF7, 0x6E3E, 0x743F, 0x9B42, 0x5FFD, 0x60DA, 0x7B0F, 0x54C4,
    0x5F18, 0x6C5E, 0x6CD3, 0x6D2A, 0x70D8, 0x7D05, 0x8679, 0x8A0C,
    0x9D3B, 0x5316, 0x548C, 0x5B05, 0x6A3A, 0x706B, 0x7575, 0xFFFF,
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
    0xFFFF, 0x798D, 0x79BE, 0x82B1, 0x83EF, 0x8A71, 0x8B41, 0x8CA8,
    0x9774, 0xFA0B, 0x64F4, 0x652B, 0x78BA, 0x78BB, 0x7A6B, 0x4E38,
    0x559A, 0x5950, 0x5BA6, 0x5E7B, 0x60A3, 0x63DB, 0x6B61, 0x6665,
    0x6853, 0x6E19, 0x7165, 0x74B0, 0x7D08, 0x9084, 0x9A69, 0x9C25,
    0x6D3B, 0x6ED1, 0x733E, 0x8C41, 0x95CA, 0x51F0, 0x5E4C, 0x5FA8,
    0x604D, 0x60F6, 0x6130, 0x614C, 0x6643, 0x6644, 0x69A5, 0x6CC1,
    0x6E5F, 0x6EC9, 0x6F62, 0x714C, 0x749C, 0x7687, 0x7BC1, 0x7C27,
    0x8352, 0x8757, 0x9051, 0x968D, 0x9EC3, 0x532F, 0x56DE, 0x5EFB,
    0x5F8A, 0x6062, 0x6094, 0x61F7, 0x6666, 0x6703, 0x6A9C, 0x6DEE,
    0x6FAE, 0x7070, 0x736A, 0x7E6A, 0x81BE, 0x8334, 0x86D4, 0x8AA8,
    0x8CC4, 0x5283, 0x7372, 0x5B96, 0x6A6B, 0x9404, 0x54EE, 0x5686,
    0x5B5D, 0x6548, 0x6585, 0x66C9, 0x689F, 0x6D8D, 0x6DC6, 0xFFFF,
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
    0xFFFF, 0x723B, 0x80B4, 0x9175, 0x9A4D, 0x4FAF, 0x5019, 0x539A,
    0x540E, 0x543C, 0x5589, 0x55C5, 0x5E3F, 0x5F8C, 0x673D, 0x7166,
    0x73DD, 0x9005, 0x52DB, 0x52F3, 0x5864, 0x58CE, 0x7104, 0x718F,
    0x71FB, 0x85B0, 0x8A13, 0x6688, 0x85A8, 0x55A7, 0x6684, 0x714A,
    0x8431, 0x5349, 0x5599, 0x6BC1, 0x5F59, 0x5FBD, 0x63EE, 0x6689,
    0x7147, 0x8AF1, 0x8F1D, 0x9EBE, 0x4F11, 0x643A, 0x70CB, 0x7566,
    0x8667, 0x6064, 0x8B4E, 0x9DF8, 0x5147, 0x51F6, 0x5308, 0x6D36,
    0x80F8, 0x9ED1, 0x6615, 0x6B23, 0x7098, 0x75D5, 0x5403, 0x5C79,
    0x7D07, 0x8A16, 0x6B20, 0x6B3D, 0x6B46, 0x5438, 0x6070, 0x6D3D,
    0x7FD5, 0x8208, 0x50D6, 0x51DE, 0x559C, 0x566B, 0x56CD, 0x59EC,
    0x5B09, 0x5E0C, 0x6199, 0x6198, 0x6231, 0x665E, 0x66E6, 0x7199,
    0x71B9, 0x71BA, 0x72A7, 0x79A7, 0x7A00, 0x7FB2, 0x8A70, 0xFFFF,
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
];

static BACKWARD: [(u16, u8, u8); 17048] = [
    (0x00A1, 33, 110), (0x00A4, 33, 116), (0x00A7, 32, 151), (0x00A8, 32, 103), (0x00AA, 39, 99),
    (0x00AD, 32, 105), (0x00AE, 33, 167), (0x00B0, 32, 134), (0x00B1, 32, 126), (0x00B2, 40, 183),
    (0x00B3, 40, 184), (0x00B4, 33, 101), (0x00B6, 33, 146), (0x00B7, 32, 100), (0x00B8, 33, 108),
    (0x00B9, 40, 182), (0x00BA, 39, 108), (0x00BC, 39, 185), (0x00BD, 39, 182), (0x00BE, 39, 186),
    (0x00BF, 33, 111), (0x00C6, 39, 97), (0x00D0, 39, 98), (0x00D7, 32, 127), (0x00D8, 39, 106),
    (0x00DE, 39, 109), (0x00DF, 40, 108), (0x00E6, 40, 97), (0x00F0, 40, 99), (0x00F7, 32, 128),
    (0x00F8, 40, 106), (0x00FE, 40, 109), (0x0111, 40, 98), (0x0126, 39, 100), (0x0127, 40, 100),
    (0x0131, 40, 101), (0x0132, 39, 102), (0x0133, 40, 102), (0x0138, 40, 103), (0x013F, 39, 104),
    (0x0140, 40, 104), (0x0141, 39, 105), (0x0142, 40, 105), (0x0149, 40, 112), (0x014A, 39, 111),
    (0x014B, 40, 111), (0x0152, 39, 107), (0x0153, 40, 107), (0x0166, 39, 110), (0x0167, 40, 110),
    (0x02C7, 33, 103), (0x02D0, 33, 112), (0x02D8, 33, 104), (0x02D9, 33, 107), (0x02DA, 33, 106),
    (0x02DB, 33, 109), (0x02DD, 33, 105), (0x0391, 36, 129), (0x0392, 36, 130), (0x0393, 36, 131),
    (0x0394, 36, 132), (0x0395, 36, 133), (0x0396, 36, 134), (0x0397, 36, 135), (0x0398, 36, 136),
    (0x0399, 36, 137), (0x039A, 36, 138), (0x039B, 36, 139), (0x039C, 36, 140), (0x039D, 36, 141),
    (0x039E, 36, 142), (0x039F, 36, 143), (0x03A0, 36, 144), (0x03A1, 36, 145), (0x03A3, 36, 146),
    (0x03A4, 36, 147), (0x03A5, 36, 148), (0x03A6, 36, 149), (0x03A7, 36, 150), (0x03A8, 36, 151),
    (0x03A9, 36, 152), (0x03B1, 36, 161), (0x03B2, 36, 162), (0x03B3, 36, 163), (0x03B4, 36, 164),
    (0x03B5, 36, 165), (0x03B6, 36, 166), (0x03B7, 36, 167), (0x03B8, 36, 168), (0x03B9, 36, 169),
    (0x03BA, 36, 170), (0x03BB, 36, 171), (0x03BC, 36, 172), (0x03BD, 36, 173), (0x03BE, 36, 174),
    (0x03BF, 36, 175), (0x03C0, 36, 176), (0x03C1, 36, 177), (0x03C3, 36, 178), (0x03C4, 36, 179),
    (0x03C5, 36, 180), (0x03C6, 36, 181), (0x03C7, 36, 182), (0x03C8, 36, 183), (0x03C9, 36, 184),
    (0x0401, 43, 103), (0x0410, 43, 97), (0x0411, 43, 98), (0x0412, 43, 99), (0x0413, 43, 100),
    (0x0414, 43, 101), (0x0415, 43, 102), (0x0416, 43, 104), (0x0417, 43, 105), (0x0418, 43, 106),
    (0x0419, 43, 107), (0x041A, 43, 108), (0x041B, 43, 109), (0x041C, 43, 110), (0x041D, 43, 111),
    (0x041E, 43, 112), (0x041F, 43, 113), (0x0420, 43, 114), (0x0421, 43, 115), (0x0422, 43, 116),
    (0x0423, 43, 117), (0x0424, 43, 118), (0x0425, 43, 119), (0x0426, 43, 120), (0x0427, 43, 121),
    (0x0428, 43, 122), (0x0429, 43, 123), (0x042A, 43, 124), (0x042B, 43, 125), (0x042C, 43, 126),
    (0x042D, 43, 127), (0x042E, 43, 128), (0x042F, 43, 129), (0x0430, 43, 145), (0x0431, 43, 146),
    (0x0432, 43, 147), (0x0433, 43, 148), (0x0434, 43, 149), (0x0435, 43, 150), (0x0436, 43, 152),
    (0x0437, 43, 153), (0x0438, 43, 154), (0x0439, 43, 155), (0x043A, 43, 156), (0x043B, 43, 157),
    (0x043C, 43, 158), (0x043D, 43, 159), (0x043E, 43, 160), (0x043F, 43, 161), (0x0440, 43, 162),
    (0x0441, 43, 163), (0x0442, 43, 164), (0x0443, 43, 165), (0x0444, 43, 166), (0x0445, 43, 167),
    (0x0446, 43, 168), (0x0447, 43, 169), (0x0448, 43, 170), (0x0449, 43, 171), (0x044A, 43, 172),
    (0x044B, 43, 173), (0x044C, 43, 174), (0x044D, 43, 175), (0x044E, 43, 176), (0x044F, 43, 177),
    (0x0451, 43, 151), (0x2015, 32, 106), (0x2018, 32, 110), (0x2019, 32, 111), (0x201C, 32, 112),
    (0x201D, 32, 113), (0x2020, 33, 147), (0x2021, 33, 148), (0x2025, 32, 101), (0x2026, 32, 102),
    (0x2030, 33, 118), (0x2032, 32, 135), (0x2033, 32, 136), (0x203B, 32, 152), (0x2074, 40, 185),
    (0x207F, 40, 186), (0x2081, 40, 187), (0x2082, 40, 188), (0x2083, 40, 189), (0x2084, 40, 190),
    (0x20AC, 33, 166), (0x2103, 32, 137), (0x2109, 33, 117), (0x2113, 38, 100), (0x2116, 33, 160),
    (0x2121, 33, 165), (0x2122, 33, 162), (0x2126, 38, 153), (0x212B, 32, 138), (0x2153, 39, 183),
    (0x2154, 39, 184), (0x215B, 39, 187), (0x215C, 39, 188), (0x215D, 39, 189), (0x215E, 39, 190),
    (0x2160, 36, 112), (0x2161, 36, 113), (0x2162, 36, 114), (0x2163, 36, 115), (0x2164, 36, 116),
    (0x2165, 36, 117), (0x2166, 36, 118), (0x2167, 36, 119), (0x2168, 36, 120), (0x2169, 36, 121),
    (0x2170, 36, 97), (0x2171, 36, 98), (0x2172, 36, 99), (0x2173, 36, 100), (0x2174, 36, 101),
    (0x2175, 36, 102), (0x2176, 36, 103), (0x2177, 36, 104), (0x2178, 36, 105), (0x2179, 36, 106),
    (0x2190, 32, 167), (0x2191, 32, 168), (0x2192, 32, 166), (0x2193, 32, 169), (0x2194, 32, 170),
    (0x2195, 33, 149), (0x2196, 33, 152), (0x2197, 33, 150), (0x2198, 33, 153), (0x2199, 33, 151),
    (0x21D2, 33, 97), (0x21D4, 33, 98), (0x2200, 33, 99), (0x2202, 32, 147), (0x2203, 33, 100),
    (0x2207, 32, 148), (0x2208, 32, 180), (0x220B, 32, 181), (0x220F, 33, 115), (0x2211, 33, 114),
    (0x221A, 32, 174), (0x221D, 32, 176), (0x221E, 32, 132), (0x2220, 32, 144), (0x2225, 32, 107),
    (0x2227, 32, 188), (0x2228, 32, 189), (0x2229, 32, 187), (0x222A, 32, 186), (0x222B, 32, 178),
    (0x222C, 32, 179), (0x222E, 33, 113), (0x2234, 32, 133), (0x2235, 32, 177), (0x223C, 32, 109),
    (0x223D, 32, 175), (0x2252, 32, 150), (0x2260, 32, 129), (0x2261, 32, 149), (0x2264, 32, 130),
    (0x2265, 32, 131), (0x226A, 32, 172), (0x226B, 32, 173), (0x2282, 32, 184), (0x2283, 32, 185),
    (0x2286, 32, 182), (0x2287, 32, 183), (0x2299, 33, 129), (0x22A5, 32, 145), (0x2312, 32, 146),
    (0x2460, 39, 167), (0x2461, 39, 168), (0x2462, 39, 169), (0x2463, 39, 170), (0x2464, 39, 171),
    (0x2465, 39, 172), (0x2466, 39, 173), (0x2467, 39, 174), (0x2468, 39, 175), (0x2469, 39, 176),
    (0x246A, 39, 177), (0x246B, 39, 178), (0x246C, 39, 179), (0x246D, 39, 180), (0x246E, 39, 181),
    (0x2474, 40, 167), (0x2475, 40, 168), (0x2476, 40, 169), (0x2477, 40, 170), (0x2478, 40, 171),
    (0x2479, 40, 172), (0x247A, 40, 173), (0x247B, 40, 174), (0x247C, 40, 175), (0x247D, 40, 176),
    (0x247E, 40, 177), (0x247F, 40, 178), (0x2480, 40, 179), (0x2481, 40, 180), (0x2482, 40, 181),
    (0x249C, 40, 141), (0x249D, 40, 142), (0x249E, 40, 143), (0x249F, 40, 144), (0x24A0, 40, 145),
    (0x24A1, 40, 146), (0x24A2, 40, 147), (0x24A3, 40, 148), (0x24A4, 40, 149), (0x24A5, 40, 150),
    (0x24A6, 40, 151), (0x24A7, 40, 152), (0x24A8, 40, 153), (0x24A9, 40, 154), (0x24AA, 40, 155),
    (0x24AB, 40, 156), (0x24AC, 40, 157), (0x24AD, 40, 158), (0x24AE, 40, 159), (0x24AF, 40, 160),
    (0x24B0, 40, 161), (0x24B1, 40, 162), (0x24B2, 40, 163), (0x24B3, 40, 164), (0x24B4, 40, 165),
    (0x24B5, 40, 166), (0x24D0, 39, 141), (0x24D1, 39, 142), (0x24D2, 39, 143), (0x24D3, 39, 144),
    (0x24D4, 39, 145), (0x24D5, 39, 146), (0x24D6, 39, 147), (0x24D7, 39, 148), (0x24D8, 39, 149),
    (0x24D9, 39, 150), (0x24DA, 39, 151), (0x24DB, 39, 152), (0x24DC, 39, 153), (0x24DD, 39, 154),
    (0x24DE, 39, 155), (0x24DF, 39, 156), (0x24E0, 39, 157), (0x24E1, 39, 158), (0x24E2, 39, 159),
    (0x24E3, 39, 160), (0x24E4, 39, 161), (0x24E5, 39, 162), (0x24E6, 39, 163), (0x24E7, 39, 164),
    (0x24E8, 39, 165), (0x24E9, 39, 166), (0x2500, 37, 97), (0x2501, 37, 108), (0x2502, 37, 98),
    (0x2503, 37, 109), (0x250C, 37, 99), (0x250D, 37, 136), (0x250E, 37, 135), (0x250F, 37, 110),
    (0x2510, 37, 100), (0x2511, 37, 130), (0x2512, 37, 129), (0x2513, 37, 111), (0x2514, 37, 102),
    (0x2515, 37, 134), (0x2516, 37, 133), (0x2517, 37, 113), (0x2518, 37, 101), (0x2519, 37, 132),
    (0x251A, 37, 131), (0x251B, 37, 112), (0x251C, 37, 103), (0x251D, 37, 124), (0x251E, 37, 137),
    (0x251F, 37, 138), (0x2520, 37, 119), (0x2521, 37, 139), (0x2522, 37, 140), (0x2523, 37, 114),
    (0x2524, 37, 105), (0x2525, 37, 126), (0x2526, 37, 141), (0x2527, 37, 142), (0x2528, 37, 121),
    (0x2529, 37, 143), (0x252A, 37, 144), (0x252B, 37, 116), (0x252C, 37, 104), (0x252D, 37, 145),
    (0x252E, 37, 146), (0x252F, 37, 120), (0x2530, 37, 125), (0x2531, 37, 147), (0x2532, 37, 148),
    (0x2533, 37, 115), (0x2534, 37, 106), (0x2535, 37, 149), (0x2536, 37, 150), (0x2537, 37, 122),
    (0x2538, 37, 127), (0x2539, 37, 151), (0x253A, 37, 152), (0x253B, 37, 117), (0x253C, 37, 107),
    (0x253D, 37, 153), (0x253E, 37, 154), (0x253F, 37, 123), (0x2540, 37, 155), (0x2541, 37, 156),
    (0x2542, 37, 128), (0x2543, 37, 157), (0x2544, 37, 158), (0x2545, 37, 159), (0x2546, 37, 160),
    (0x2547, 37, 161), (0x2548, 37, 162), (0x2549, 37, 163), (0x254A, 37, 164), (0x254B, 37, 118),
    (0x2592, 33, 134), (0x25A0, 32, 161), (0x25A1, 32, 160), (0x25A3, 33, 131), (0x25A4, 33, 135),
    (0x25A5, 33, 136), (0x25A6, 33, 139), (0x25A7, 33, 138), (0x25A8, 33, 137), (0x25A9, 33, 140),
    (0x25B2, 32, 163), (0x25B3, 32, 162), (0x25B6, 33, 122), (0x25B7, 33, 121), (0x25BC, 32, 165),
    (0x25BD, 32, 164), (0x25C0, 33, 120), (0x25C1, 33, 119), (0x25C6, 32, 159), (0x25C7, 32, 158),
    (0x25C8, 33, 130), (0x25CB, 32, 155), (0x25CE, 32, 157), (0x25CF, 32, 156), (0x25D0, 33, 132),
    (0x25D1, 33, 133), (0x2605, 32, 154), (0x2606, 32, 153), (0x260E, 33, 143), (0x260F, 33, 142),
    (0x261C, 33, 144), (0x261E, 33, 145), (0x2640, 32, 143), (0x2642, 32, 142), (0x2660, 33, 124),
    (0x2661, 33, 125), (0x2663, 33, 128), (0x2664, 33, 123), (0x2665, 33, 126), (0x2667, 33, 127),
    (0x2668, 33, 141), (0x2669, 33, 155), (0x266A, 33, 156), (0x266C, 33, 157), (0x266D, 33, 154),
    (0x3000, 32, 97), (0x3001, 32, 98), (0x3002, 32, 99), (0x3003, 32, 104), (0x3008, 32, 116),
    (0x3009, 32, 117), (0x300A, 32, 118), (0x300B, 32, 119), (0x300C, 32, 120), (0x300D, 32, 121),
    (0x300E, 32, 122), (0x300F, 32, 123), (0x3010, 32, 124), (0x3011, 32, 125), (0x3013, 32, 171),
    (0x3014, 32, 114), (0x3015, 32, 115), (0x3041, 41, 97), (0x3042, 41, 98), (0x3043, 41, 99),
    (0x3044, 41, 100), (0x3045, 41, 101), (0x3046, 41, 102), (0x3047, 41, 103), (0x3048, 41, 104),
    (0x3049, 41, 105), (0x304A, 41, 106), (0x304B, 41, 107), (0x304C, 41, 108), (0x304D, 41, 109),
    (0x304E, 41, 110), (0x304F, 41, 111), (0x3050, 41, 112), (0x3051, 41, 113), (0x3052, 41, 114),
    (0x3053, 41, 115), (0x3054, 41, 116), (0x3055, 41, 117), (0x3056, 41, 118), (0x3057, 41, 119),
    (0x3058, 41, 120), (0x3059, 41, 121), (0x305A, 41, 122), (0x305B, 41, 123), (0x305C, 41, 124),
    (0x305D, 41, 125), (0x305E, 41, 126), (0x305F, 41, 127), (0x3060, 41, 128), (0x3061, 41, 129),
    (0x3062, 41, 130), (0x3063, 41, 131), (0x3064, 41, 132), (0x3065, 41, 133), (0x3066, 41, 134),
    (0x3067, 41, 135), (0x3068, 41, 136), (0x3069, 41, 137), (0x306A, 41, 138), (0x306B, 41, 139),
    (0x306C, 41, 140), (0x306D, 41, 141), (0x306E, 41, 142), (0x306F, 41, 143), (0x3070, 41, 144),
    (0x3071, 41, 145), (0x3072, 41, 146), (0x3073, 41, 147), (0x3074, 41, 148), (0x3075, 41, 149),
    (0x3076, 41, 150), (0x3077, 41, 151), (0x3078, 41, 152), (0x3079, 41, 153), (0x307A, 41, 154),
    (0x307B, 41, 155), (0x307C, 41, 156), (0x307D, 41, 157), (0x307E, 41, 158), (0x307F, 41, 159),
    (0x3080, 41, 160), (0x3081, 41, 161), (0x3082, 41, 162), (0x3083, 41, 163), (0x3084, 41, 164),
    (0x3085, 41, 165), (0x3086, 41, 166), (0x3087, 41, 167), (0x3088, 41, 168), (0x3089, 41, 169),
    (0x308A, 41, 170), (0x308B, 41, 171), (0x308C, 41, 172), (0x308D, 41, 173), (0x308E, 41, 174),
    (0x308F, 41, 175), (0x3090, 41, 176), (0x3091, 41, 177), (0x3092, 41, 178), (0x3093, 41, 179),
    (0x30A1, 42, 97), (0x30A2, 42, 98), (0x30A3, 42, 99), (0x30A4, 42, 100), (0x30A5, 42, 101),
    (0x30A6, 42, 102), (0x30A7, 42, 103), (0x30A8, 42, 104), (0x30A9, 42, 105), (0x30AA, 42, 106),
    (0x30AB, 42, 107), (0x30AC, 42, 108), (0x30AD, 42, 109), (0x30AE, 42, 110), (0x30AF, 42, 111),
    (0x30B0, 42, 112), (0x30B1, 42, 113), (0x30B2, 42, 114), (0x30B3, 42, 115), (0x30B4, 42, 116),
    (0x30B5, 42, 117), (0x30B6, 42, 118), (0x30B7, 42, 119), (0x30B8, 42, 120), (0x30B9, 42, 121),
    (0x30BA, 42, 122), (0x30BB, 42, 123), (0x30BC, 42, 124), (0x30BD, 42, 125), (0x30BE, 42, 126),
    (0x30BF, 42, 127), (0x30C0, 42, 128), (0x30C1, 42, 129), (0x30C2, 42, 130), (0x30C3, 42, 131),
    (0x30C4, 42, 132), (0x30C5, 42, 133), (0x30C6, 42, 134), (0x30C7, 42, 135), (0x30C8, 42, 136),
    (0x30C9, 42, 137), (0x30CA, 42, 138), (0x30CB, 42, 139), (0x30CC, 42, 140), (0x30CD, 42, 141),
    (0x30CE, 42, 142), (0x30CF, 42, 143), (0x30D0, 42, 144), (0x30D1, 42, 145), (0x30D2, 42, 146),
    (0x30D3, 42, 147), (0x30D4, 42, 148), (0x30D5, 42, 149), (0x30D6, 42, 150), (0x30D7, 42, 151),
    (0x30D8, 42, 152), (0x30D9, 42, 153), (0x30DA, 42, 154), (0x30DB, 42, 155), (0x30DC, 42, 156),
    (0x30DD, 42, 157), (0x30DE, 42, 158), (0x30DF, 42, 159), (0x30E0, 42, 160), (0x30E1, 42, 161),
    (0x30E2, 42, 162), (0x30E3, 42, 163), (0x30E4, 42, 164), (0x30E5, 42, 165), (0x30E6, 42, 166),
    (0x30E7, 42, 167), (0x30E8, 42, 168), (0x30E9, 42, 169), (0x30EA, 42, 170), (0x30EB, 42, 171),
    (0x30EC, 42, 172), (0x30ED, 42, 173), (0x30EE, 42, 174), (0x30EF, 42, 175), (0x30F0, 42, 176),
    (0x30F1, 42, 177), (0x30F2, 42, 178), (0x30F3, 42, 179), (0x30F4, 42, 180), (0x30F5, 42, 181),
    (0x30F6, 42, 182), (0x3131, 35, 97), (0x3132, 35, 98), (0x3133, 35, 99), (0x3134, 35, 100),
    (0x3135, 35, 101), (0x3136, 35, 102), (0x3137, 35, 103), (0x3138, 35, 104), (0x3139, 35, 105),
    (0x313A, 35, 106), (0x313B, 35, 107), (0x313C, 35, 108), (0x313D, 35, 109), (0x313E, 35, 110),
    (0x313F, 35, 111), (0x3140, 35, 112), (0x3141, 35, 113), (0x3142, 35, 114), (0x3143, 35, 115),
    (0x3144, 35, 116), (0x3145, 35, 117), (0x3146, 35, 118), (0x3147, 35, 119), (0x3148, 35, 120),
    (0x3149, 35, 121), (0x314A, 35, 122), (0x314B, 35, 123), (0x314C, 35, 124), (0x314D, 35, 125),
    (0x314E, 35, 126), (0x314F, 35, 127), (0x3150, 35, 128), (0x3151, 35, 129), (0x3152, 35, 130),
    (0x3153, 35, 131), (0x3154, 35, 132), (0x3155, 35, 133), (0x3156, 35, 134), (0x3157, 35, 135),
    (0x3158, 35, 136), (0x3159, 35, 137), (0x315A, 35, 138), (0x315B, 35, 139), (0x315C, 35, 140),
    (0x315D, 35, 141), (0x315E, 35, 142), (0x315F, 35, 143), (0x3160, 35, 144), (0x3161, 35, 145),
    (0x3162, 35, 146), (0x3163, 35, 147), (0x3164, 35, 148), (0x3165, 35, 149), (0x3166, 35, 150),
    (0x3167, 35, 151), (0x3168, 35, 152), (0x3169, 35, 153), (0x316A, 35, 154), (0x316B, 35, 155),
    (0x316C, 35, 156), (0x316D, 35, 157), (0x316E, 35, 158), (0x316F, 35, 159), (0x3170, 35, 160),
    (0x3171, 35, 161), (0x3172, 35, 162), (0x3173, 35, 163), (0x3174, 35, 164), (0x3175, 35, 165),
    (0x3176, 35, 166), (0x3177, 35, 167), (0x3178, 35, 168), (0x3179, 35, 169), (0x317A, 35, 170),
    (0x317B, 35, 171), (0x317C, 35, 172), (0x317D, 35, 173), (0x317E, 35, 174), (0x317F, 35, 175),
    (0x3180, 35, 176), (0x3181, 35, 177), (0x3182, 35, 178), (0x3183, 35, 179), (0x3184, 35, 180),
    (0x3185, 35, 181), (0x3186, 35, 182), (0x3187, 35, 183), (0x3188, 35, 184), (0x3189, 35, 185),
    (0x318A, 35, 186), (0x318B, 35, 187), (0x318C, 35, 188), (0x318D, 35, 189), (0x318E, 35, 190),
    (0x3200, 40, 113), (0x3201, 40, 114), (0x3202, 40, 115), (0x3203, 40, 116), (0x3204, 40, 117),
    (0x3205, 40, 118), (0x3206, 40, 119), (0x3207, 40, 120), (0x3208, 40, 121), (0x3209, 40, 122),
    (0x320A, 40, 123), (0x320B, 40, 124), (0x320C, 40, 125), (0x320D, 40, 126), (0x320E, 40, 127),
    (0x320F, 40, 128), (0x3210, 40, 129), (0x3211, 40, 130), (0x3212, 40, 131), (0x3213, 40, 132),
    (0x3214, 40, 133), (0x3215, 40, 134), (0x3216, 40, 135), (0x3217, 40, 136), (0x3218, 40, 137),
    (0x3219, 40, 138), (0x321A, 40, 139), (0x321B, 40, 140), (0x321C, 33, 159), (0x3260, 39, 113),
    (0x3261, 39, 114), (0x3262, 39, 115), (0x3263, 39, 116), (0x3264, 39, 117), (0x3265, 39, 118),
    (0x3266, 39, 119), (0x3267, 39, 120), (0x3268, 39, 121), (0x3269, 39, 122), (0x326A, 39, 123),
    (0x326B, 39, 124), (0x326C, 39, 125), (0x326D, 39, 126), (0x326E, 39, 127), (0x326F, 39, 128),
    (0x3270, 39, 129), (0x3271, 39, 130), (0x3272, 39, 131), (0x3273, 39, 132), (0x3274, 39, 133),
    (0x3275, 39, 134), (0x3276, 39, 135), (0x3277, 39, 136), (0x3278, 39, 137), (0x3279, 39, 138),
    (0x327A, 39, 139), (0x327B, 39, 140), (0x327F, 33, 158), (0x3380, 38, 137), (0x3381, 38, 138),
    (0x3382, 38, 139), (0x3383, 38, 140), (0x3384, 38, 141), (0x3388, 38, 122), (0x3389, 38, 123),
    (0x338A, 38, 156), (0x338B, 38, 157), (0x338C, 38, 158), (0x338D, 38, 118), (0x338E, 38, 119),
    (0x338F, 38, 120), (0x3390, 38, 148), (0x3391, 38, 149), (0x3392, 38, 150), (0x3393, 38, 151),
    (0x3394, 38, 152), (0x3395, 38, 97), (0x3396, 38, 98), (0x3397, 38, 99), (0x3398, 38, 101),
    (0x3399, 38, 107), (0x339A, 38, 108), (0x339B, 38, 109), (0x339C, 38, 110), (0x339D, 38, 111),
    (0x339E, 38, 112), (0x339F, 38, 113), (0x33A0, 38, 114), (0x33A1, 38, 115), (0x33A2, 38, 116),
    (0x33A3, 38, 103), (0x33A4, 38, 104), (0x33A5, 38, 105), (0x33A6, 38, 106), (0x33A7, 38, 125),
    (0x33A8, 38, 126), (0x33A9, 38, 165), (0x33AA, 38, 166), (0x33AB, 38, 167), (0x33AC, 38, 168),
    (0x33AD, 38, 161), (0x33AE, 38, 162), (0x33AF, 38, 163), (0x33B0, 38, 127), (0x33B1, 38, 128),
    (0x33B2, 38, 129), (0x33B3, 38, 130), (0x33B4, 38, 131), (0x33B5, 38, 132), (0x33B6, 38, 133),
    (0x33B7, 38, 134), (0x33B8, 38, 135), (0x33B9, 38, 136), (0x33BA, 38, 142), (0x33BB, 38, 143),
    (0x33BC, 38, 144), (0x33BD, 38, 145), (0x33BE, 38, 146), (0x33BF, 38, 147), (0x33C0, 38, 154),
    (0x33C1, 38, 155), (0x33C2, 33, 163), (0x33C3, 38, 172), (0x33C4, 38, 102), (0x33C5, 38, 160),
    (0x33C6, 38, 175), (0x33C7, 33, 161), (0x33C8, 38, 124), (0x33C9, 38, 173), (0x33CA, 38, 117),
    (0x33CF, 38, 121), (0x33D0, 38, 170), (0x33D3, 38, 171), (0x33D6, 38, 159), (0x33D8, 33, 164),
    (0x33DB, 38, 164), (0x33DC, 38, 174), (0x33DD, 38, 169), (0x4E00, 107, 169), (0x4E01, 110, 139),
    (0x4E03, 117, 146), (0x4E07, 87, 114), (0x4E08, 108, 155), (0x4E09, 94, 114), (0x4E0A, 94, 126),
    (0x4E0B, 120, 123), (0x4E0D, 91, 180), (0x4E11, 116, 164), (0x4E14, 114, 102), (0x4E15, 92, 160),
    (0x4E16, 96, 102), (0x4E18, 77, 184), (0x4E19, 91, 112), (0x4E1E, 98, 106), (0x4E2D, 112, 169),
    (0x4E32, 76, 186), (0x4E38, 123, 111), (0x4E39, 82, 97), (0x4E3B, 112, 107), (0x4E42, 102, 145),
    (0x4E43, 81, 108), (0x4E45, 77, 185), (0x4E4B, 112, 189), (0x4E4D, 93, 127), (0x4E4E, 122, 122),
    (0x4E4F, 120, 121), (0x4E56, 77, 146), (0x4E58, 98, 107), (0x4E59, 106, 160), (0x4E5D, 77, 186),
    (0x4E5E, 74, 183), (0x4E5F, 100, 101), (0x4E6B, 73, 161), (0x4E6D, 83, 140), (0x4E73, 105, 161),
    (0x4E76, 91, 163), (0x4E77, 94, 109), (0x4E7E, 74, 171), (0x4E82, 84, 111), (0x4E86, 85, 181),
    (0x4E88, 100, 184), (0x4E8B, 93, 128), (0x4E8C, 107, 99), (0x4E8E, 104, 141), (0x4E90, 105, 103),
    (0x4E91, 104, 182), (0x4E92, 122, 123), (0x4E94, 102, 169), (0x4E95, 110, 140), (0x4E98, 79, 166),
    (0x4E9B, 93, 129), (0x4E9E, 99, 108), (0x4EA1, 87, 140), (0x4EA2, 120, 177), (0x4EA4, 77, 159),
    (0x4EA5, 121, 100), (0x4EA6, 101, 114), (0x4EA8, 121, 187), (0x4EAB, 121, 125), (0x4EAC, 75, 136),
    (0x4EAD, 110, 141), (0x4EAE, 84, 149), (0x4EB6, 82, 98), (0x4EBA, 107, 145), (0x4EC0, 99, 103),
    (0x4EC1, 107, 146), (0x4EC4, 117, 113), (0x4EC7, 77, 187), (0x4ECA, 79, 145), (0x4ECB, 74, 127),
    (0x4ECD, 108, 100), (0x4ED4, 108, 104), (0x4ED5, 93, 130), (0x4ED6, 117, 162), (0x4ED7, 108, 156),
    (0x4ED8, 91, 181), (0x4ED9, 95, 121), (0x4EDD, 83, 142), (0x4EDF, 115, 117), (0x4EE3, 82, 155),
    (0x4EE4, 85, 117), (0x4EE5, 107, 100), (0x4EF0, 99, 166), (0x4EF2, 112, 170), (0x4EF6, 74, 172),
    (0x4EF7, 74, 128), (0x4EFB, 107, 178), (0x4F01, 79, 170), (0x4F09, 120, 178), (0x4F0A, 107, 101),
    (0x4F0B, 79, 159), (0x4F0D, 102, 170), (0x4F0E, 79, 171), (0x4F0F, 91, 145), (0x4F10, 90, 169),
    (0x4F11, 124, 140), (0x4F2F, 90, 151), (0x4F34, 89, 161), (0x4F36, 85, 118), (0x4F38, 98, 159),
    (0x4F3A, 93, 131), (0x4F3C, 93, 132), (0x4F3D, 73, 97), (0x4F43, 109, 172), (0x4F46, 82, 99),
    (0x4F47, 109, 119), (0x4F48, 119, 143), (0x4F4D, 105, 136), (0x4F4E, 109, 120), (0x4F4F, 112, 108),
    (0x4F50, 112, 101), (0x4F51, 104, 142), (0x4F55, 120, 124), (0x4F59, 100, 185), (0x4F5A, 107, 170),
    (0x4F5B, 92, 150), (0x4F5C, 108, 130), (0x4F69, 119, 101), (0x4F6F, 100, 122), (0x4F70, 90, 152),
    (0x4F73, 73, 98), (0x4F76, 80, 141), (0x4F7A, 109, 173), (0x4F7E, 107, 171), (0x4F7F, 93, 133),
    (0x4F81, 98, 160), (0x4F83, 73, 137), (0x4F84, 113, 169), (0x4F86, 84, 142), (0x4F88, 117, 118),
    (0x4F8A, 77, 130), (0x4F8B, 85, 135), (0x4F8D, 98, 116), (0x4F8F, 112, 109), (0x4F91, 105, 162),
    (0x4F96, 86, 130), (0x4F98, 114, 103), (0x4F9B, 76, 170), (0x4F9D, 106, 174), (0x4FAE, 88, 114),
    (0x4FAF, 124, 101), (0x4FB5, 117, 149), (0x4FB6, 84, 162), (0x4FBF, 119, 117), (0x4FC2, 75, 181),
    (0x4FC3, 116, 117), (0x4FC4, 99, 109), (0x4FC9, 102, 171), (0x4FCA, 112, 149), (0x4FCE, 111, 123),
    (0x4FD1, 104, 117), (0x4FD3, 75, 137), (0x4FD4, 121, 149), (0x4FD7, 96, 148), (0x4FDA, 86, 150),
    (0x4FDD, 91, 129), (0x4FDF, 93, 134), (0x4FE0, 121, 175), (0x4FE1, 98, 161), (0x4FEE, 96, 179),
    (0x4FEF, 91, 182), (0x4FF1, 77, 188), (0x4FF3, 90, 132), (0x4FF5, 119, 177), (0x4FF8, 91, 164),
    (0x4FFA, 100, 175), (0x5002, 91, 113), (0x5006, 84, 150), (0x5009, 114, 154), (0x500B, 74, 129),
    (0x500D, 90, 131), (0x5011, 88, 186), (0x5012, 82, 174), (0x5016, 121, 120), (0x5019, 124, 102),
    (0x501A, 106, 175), (0x501C, 115, 102), (0x501E, 75, 138), (0x501F, 114, 104), (0x5021, 114, 155),
    (0x5023, 90, 103), (0x5024, 117, 119), (0x5026, 78, 166), (0x5027, 111, 178), (0x5028, 74, 154),
    (0x502A, 102, 146), (0x502B, 86, 131), (0x502C, 117, 176), (0x502D, 103, 158), (0x503B, 100, 102),
    (0x5043, 100, 167), (0x5047, 73, 99), (0x5048, 75, 103), (0x5049, 105, 137), (0x504F, 119, 118),
    (0x5055, 121, 101), (0x505A, 112, 110), (0x505C, 110, 142), (0x5065, 74, 173), (0x5074, 117, 112),
    (0x5075, 110, 143), (0x5076, 104, 143), (0x5078, 118, 158), (0x5080, 77, 147), (0x5085, 91, 183),
    (0x508D, 90, 104), (0x5091, 74, 184), (0x5098, 94, 97), (0x5099, 92, 161), (0x50AC, 116, 138),
    (0x50AD, 104, 118), (0x50B2, 102, 172), (0x50B3, 109, 174), (0x50B5, 114, 176), (0x50B7, 94, 127),
    (0x50BE, 75, 139), (0x50C5, 79, 129), (0x50C9, 115, 146), (0x50CA, 95, 122), (0x50CF, 94, 128),
    (0x50D1, 77, 160), (0x50D5, 91, 146), (0x50D6, 124, 170), (0x50DA, 85, 182), (0x50DE, 105, 138),
    (0x50E5, 103, 169), (0x50E7, 98, 108), (0x50ED, 114, 144), (0x50F9, 73, 100), (0x50FB, 90, 184),
    (0x50FF, 93, 135), (0x5100, 106, 176), (0x5101, 112, 150), (0x5104, 100, 162), (0x5106, 75, 140),
    (0x5109, 74, 187), (0x5112, 105, 163), (0x511F, 94, 129), (0x5121, 85, 173), (0x512A, 104, 144),
    (0x5132, 109, 121), (0x5137, 84, 163), (0x513A, 80, 147), (0x513C, 100, 176), (0x5140, 103, 116),
    (0x5141, 106, 131), (0x5143, 105, 106), (0x5144, 121, 188), (0x5145, 116, 182), (0x5146, 111, 124),
    (0x5147, 124, 148), (0x5148, 95, 123), (0x5149, 77, 131), (0x514B, 79, 122), (0x514C, 118, 122),
    (0x514D, 87, 179), (0x514E, 118, 141), (0x5152, 99, 110), (0x515C, 83, 159), (0x5162, 79, 167),
    (0x5165, 107, 189), (0x5167, 81, 110), (0x5168, 109, 175), (0x5169, 84, 151), (0x516A, 105, 164),
    (0x516B, 119, 98), (0x516C, 76, 171), (0x516D, 86, 127), (0x516E, 122, 113), (0x5171, 76, 172),
    (0x5175, 91, 114), (0x5176, 79, 172), (0x5177, 77, 189), (0x5178, 109, 176), (0x517C, 75, 130),
    (0x5180, 79, 173), (0x5186, 100, 183), (0x518A, 114, 188), (0x518D, 109, 98), (0x5192, 88, 115),
    (0x5195, 87, 180), (0x5197, 104, 119), (0x51A0, 77, 110), (0x51A5, 88, 98), (0x51AA, 87, 177),
    (0x51AC, 83, 143), (0x51B6, 100, 103), (0x51B7, 84, 146), (0x51BD, 85, 105), (0x51C4, 115, 98),
    (0x51C6, 112, 151), (0x51C9, 84, 152), (0x51CB, 111, 125), (0x51CC, 86, 144), (0x51CD, 83, 144),
    (0x51DC, 86, 143), (0x51DD, 106, 170), (0x51DE, 124, 171), (0x51E1, 90, 173), (0x51F0, 123, 133),
    (0x51F1, 74, 130), (0x51F6, 124, 149), (0x51F8, 115, 136), (0x51F9, 103, 170), (0x51FA, 116, 179),
    (0x51FD, 120, 158), (0x5200, 82, 175), (0x5203, 107, 147), (0x5206, 92, 130), (0x5207, 110, 119),
    (0x5208, 102, 148), (0x520A, 73, 138), (0x520E, 88, 187), (0x5211, 121, 189), (0x5217, 85, 106),
    (0x521D, 115, 184), (0x5224, 118, 183), (0x5225, 91, 108), (0x5229, 86, 151), (0x522A, 94, 98),
    (0x522E, 77, 126), (0x5230, 82, 176), (0x5236, 111, 100), (0x5237, 96, 172), (0x5238, 78, 167),
    (0x5239, 114, 139), (0x523A, 108, 105), (0x523B, 73, 126), (0x5243, 115, 175), (0x5247, 117, 142),
    (0x524A, 93, 187), (0x524B, 79, 123), (0x524C, 84, 119), (0x524D, 109, 177), (0x5254, 115, 104),
    (0x5256, 91, 184), (0x525B, 74, 103), (0x525D, 89, 142), (0x5261, 95, 166), (0x5269, 108, 101),
    (0x526A, 109, 178), (0x526F, 91, 185), (0x5272, 120, 156), (0x5275, 114, 156), (0x527D, 119, 178),
    (0x527F, 115, 185), (0x5283, 123, 177), (0x5287, 79, 124), (0x5288, 90, 185), (0x5289, 86, 113),
    (0x528D, 74, 188), (0x5291, 111, 101), (0x5292, 74, 189), (0x529B, 84, 180), (0x529F, 76, 173),
    (0x52A0, 73, 101), (0x52A3, 85, 107), (0x52A4, 79, 130), (0x52A9, 111, 126), (0x52AA, 81, 125),
    (0x52AB, 75, 100), (0x52BE, 121, 118), (0x52C1, 75, 141), (0x52C3, 89, 186), (0x52C5, 117, 143),
    (0x52C7, 104, 120), (0x52C9, 87, 181), (0x52CD, 75, 142), (0x52D2, 86, 141), (0x52D5, 83, 145),
    (0x52D6, 104, 173), (0x52D8, 73, 171), (0x52D9, 88, 162), (0x52DB, 124, 114), (0x52DD, 98, 109),
    (0x52DE, 85, 140), (0x52DF, 88, 116), (0x52E2, 96, 103), (0x52E3, 109, 147), (0x52E4, 79, 131),
    (0x52F3, 124, 115), (0x52F5, 84, 164), (0x52F8, 78, 168), (0x52FA, 108, 131), (0x52FB, 79, 114),
    (0x52FE, 77, 190), (0x52FF, 89, 104), (0x5305, 119, 144), (0x5308, 124, 150), (0x530D, 119, 145),
    (0x530F, 119, 146), (0x5310, 91, 147), (0x5315, 92, 162), (0x5316, 122, 185), (0x5317, 92, 129),
    (0x5319, 98, 117), (0x5320, 108, 157), (0x5321, 77, 132), (0x5323, 74, 97), (0x532A, 92, 163),
    (0x532F, 123, 157), (0x5339, 120, 111), (0x533F, 81, 187), (0x5340, 78, 97), (0x5341, 99, 104),
    (0x5343, 115, 118), (0x5344, 107, 190), (0x5347, 98, 110), (0x5348, 102, 173), (0x5349, 124, 129),
    (0x534A, 89, 162), (0x534D, 87, 115), (0x5351, 92, 164), (0x5352, 111, 175), (0x5353, 117, 177),
    (0x5354, 121, 176), (0x5357, 80, 181), (0x535A, 89, 143), (0x535C, 91, 148), (0x535E, 91, 102),
    (0x5360, 110, 127), (0x5366, 77, 143), (0x5368, 95, 153), (0x536F, 88, 150), (0x5370, 107, 148),
    (0x5371, 105, 139), (0x5374, 73, 127), (0x5375, 84, 112), (0x5377, 78, 169), (0x537D, 112, 173),
    (0x537F, 75, 143), (0x5384, 99, 184), (0x5393, 99, 173), (0x5398, 86, 152), (0x539A, 124, 103),
    (0x539F, 105, 107), (0x53A0, 117, 114), (0x53A5, 78, 176), (0x53A6, 120, 125), (0x53AD, 101, 180),
    (0x53BB, 74, 155), (0x53C3, 114, 145), (0x53C8, 104, 145), (0x53C9, 114, 105), (0x53CA, 79, 160),
    (0x53CB, 104, 146), (0x53CD, 89, 163), (0x53D4, 97, 146), (0x53D6, 117, 98), (0x53D7, 96, 180),
    (0x53DB, 89, 164), (0x53E1, 102, 149), (0x53E2, 116, 127), (0x53E3, 78, 98), (0x53E4, 76, 111),
    (0x53E5, 78, 99), (0x53E9, 76, 112), (0x53EA, 112, 190), (0x53EB, 79, 99), (0x53EC, 96, 111),
    (0x53ED, 119, 99), (0x53EF, 73, 102), (0x53F0, 118, 123), (0x53F1, 113, 170), (0x53F2, 93, 136),
    (0x53F3, 104, 147), (0x53F8, 93, 137), (0x5403, 124, 158), (0x5404, 73, 128), (0x5408, 120, 170),
    (0x5409, 80, 142), (0x540A, 109, 148), (0x540C, 83, 146), (0x540D, 88, 99), (0x540E, 124, 104),
    (0x540F, 86, 153), (0x5410, 118, 142), (0x5411, 121, 126), (0x541B, 78, 150), (0x541D, 86, 176),
    (0x541F, 106, 161), (0x5420, 119, 133), (0x5426, 91, 186), (0x5429, 92, 131), (0x542B, 120, 159),
    (0x5433, 102, 175), (0x5438, 124, 165), (0x5439, 117, 99), (0x543B, 88, 188), (0x543C, 124, 105),
    (0x543E, 102, 174), (0x5442, 84, 165), (0x5448, 110, 144), (0x544A, 76, 113), (0x5451, 118, 98),
    (0x5468, 112, 114), (0x546A, 112, 113), (0x5471, 76, 114), (0x5473, 89, 107), (0x5475, 73, 103),
    (0x547B, 98, 162), (0x547C, 122, 124), (0x547D, 88, 100), (0x5480, 109, 122), (0x5486, 119, 147),
    (0x548C, 122, 186), (0x548E, 78, 100), (0x5490, 91, 187), (0x54A4, 117, 163), (0x54A8, 108, 106),
    (0x54AB, 113, 97), (0x54AC, 77, 161), (0x54B3, 121, 102), (0x54B8, 120, 160), (0x54BD, 107, 150),
    (0x54C0, 99, 174), (0x54C1, 120, 97), (0x54C4, 122, 175), (0x54C8, 120, 171), (0x54C9, 109, 99),
    (0x54E1, 105, 108), (0x54E5, 73, 104), (0x54E8, 115, 186), (0x54ED, 76, 150), (0x54EE, 123, 182),
    (0x54F2, 115, 137), (0x54FA, 119, 148), (0x5504, 119, 102), (0x5506, 93, 138), (0x5507, 113, 134),
    (0x550E, 86, 154), (0x5510, 82, 144), (0x551C, 87, 133), (0x552F, 105, 166), (0x5531, 114, 157),
    (0x5535, 99, 154), (0x553E, 117, 164), (0x5544, 117, 178), (0x5546, 94, 130), (0x554F, 88, 189),
    (0x5553, 75, 182), (0x5556, 82, 122), (0x555E, 99, 111), (0x5563, 120, 161), (0x557C, 111, 102),
    (0x5580, 74, 147), (0x5584, 95, 124), (0x5586, 115, 138), (0x5587, 83, 186), (0x5589, 124, 106),
    (0x558A, 120, 162), (0x5598, 115, 119), (0x5599, 124, 130), (0x559A, 123, 112), (0x559C, 124, 172),
    (0x559D, 73, 162), (0x55A7, 124, 125), (0x55A9, 105, 167), (0x55AA, 94, 131), (0x55AB, 80, 146),
    (0x55AC, 77, 162), (0x55AE, 82, 100), (0x55C5, 124, 107), (0x55C7, 94, 160), (0x55D4, 113, 135),
    (0x55DA, 102, 176), (0x55DC, 79, 174), (0x55DF, 114, 106), (0x55E3, 93, 139), (0x55E4, 117, 120),
    (0x55FD, 96, 181), (0x55FE, 112, 115), (0x5606, 118, 99), (0x5609, 73, 105), (0x5614, 78, 101),
    (0x5617, 94, 132), (0x562F, 96, 112), (0x5632, 111, 127), (0x5634, 117, 100), (0x5636, 98, 118),
    (0x5653, 121, 134), (0x5668, 79, 175), (0x566B, 124, 173), (0x5674, 92, 132), (0x5686, 123, 183),
    (0x56A5, 101, 127), (0x56AC, 93, 109), (0x56AE, 121, 127), (0x56B4, 100, 177), (0x56BC, 108, 132),
    (0x56CA, 81, 101), (0x56CD, 124, 174), (0x56D1, 116, 118), (0x56DA, 96, 182), (0x56DB, 93, 140),
    (0x56DE, 123, 158), (0x56E0, 107, 151), (0x56F0, 76, 157), (0x56F9, 85, 119), (0x56FA, 76, 115),
    (0x5703, 119, 149), (0x5704, 100, 152), (0x5708, 78, 170), (0x570B, 78, 144), (0x570D, 105, 140),
    (0x5712, 105, 110), (0x5713, 105, 109), (0x5716, 82, 177), (0x5718, 82, 101), (0x571F, 118, 143),
    (0x5728, 109, 100), (0x572D, 79, 100), (0x5730, 113, 98), (0x573B, 79, 176), (0x5740, 113, 99),
    (0x5742, 118, 184), (0x5747, 79, 115), (0x574A, 90, 105), (0x574D, 82, 123), (0x574E, 73, 172),
    (0x5750, 112, 102), (0x5751, 74, 149), (0x5761, 118, 167), (0x5764, 76, 158), (0x5766, 118, 100),
    (0x576A, 119, 128), (0x576E, 82, 157), (0x5770, 75, 144), (0x5775, 78, 102), (0x577C, 117, 179),
    (0x5782, 96, 183), (0x5788, 82, 156), (0x578B, 121, 190), (0x5793, 121, 103), (0x57A0, 106, 153),
    (0x57A2, 78, 103), (0x57A3, 105, 111), (0x57C3, 99, 175), (0x57C7, 104, 121), (0x57C8, 112, 152),
    (0x57CB, 87, 152), (0x57CE, 95, 178), (0x57DF, 101, 116), (0x57E0, 91, 188), (0x57F0, 114, 177),
    (0x57F4, 98, 144), (0x57F7, 113, 187), (0x57F9, 90, 134), (0x57FA, 79, 177), (0x57FC, 79, 178),
    (0x5800, 78, 156), (0x5802, 82, 145), (0x5805, 75, 113), (0x5806, 118, 152), (0x5808, 74, 104),
    (0x5809, 106, 124), (0x580A, 99, 126), (0x581E, 115, 156), (0x5821, 91, 130), (0x5824, 111, 103),
    (0x5827, 101, 128), (0x582A, 73, 173), (0x582F, 103, 171), (0x5830, 100, 168), (0x5831, 91, 131),
    (0x5834, 108, 158), (0x5835, 82, 178), (0x583A, 75, 183), (0x584A, 77, 148), (0x584B, 102, 107),
    (0x584F, 74, 131), (0x5851, 96, 113), (0x5854, 118, 114), (0x5857, 82, 179), (0x5858, 82, 146),
    (0x585A, 116, 128), (0x585E, 94, 157), (0x5861, 109, 179), (0x5862, 102, 177), (0x5864, 124, 116),
    (0x5875, 113, 136), (0x5879, 114, 146), (0x587C, 109, 180), (0x587E, 97, 147), (0x5883, 75, 145),
    (0x5885, 94, 170), (0x5889, 104, 122), (0x5893, 88, 151), (0x589C, 116, 141), (0x589E, 112, 178),
    (0x589F, 121, 135), (0x58A8, 88, 184), (0x58A9, 83, 130), (0x58AE, 117, 165), (0x58B3, 92, 133),
    (0x58BA, 102, 178), (0x58BB, 108, 159), (0x58BE, 73, 139), (0x58C1, 90, 186), (0x58C5, 103, 117),
    (0x58C7, 82, 102), (0x58CE, 124, 117), (0x58D1, 120, 137), (0x58D3, 99, 162), (0x58D5, 122, 125),
    (0x58D8, 86, 100), (0x58D9, 77, 133), (0x58DE, 77, 149), (0x58DF, 85, 166), (0x58E4, 100, 125),
    (0x58EB, 93, 141), (0x58EC, 107, 179), (0x58EF, 108, 160), (0x58F9, 107, 172), (0x58FA, 122, 126),
    (0x58FB, 94, 171), (0x58FD, 96, 184), (0x590F, 120, 126), (0x5914, 79, 179), (0x5915, 95, 106),
    (0x5916, 103, 162), (0x5919, 97, 148), (0x591A, 81, 189), (0x591C, 100, 104), (0x5922, 88, 147),
    (0x5927, 82, 158), (0x5929, 115, 120), (0x592A, 118, 124), (0x592B, 91, 189), (0x592D, 103, 172),
    (0x592E, 99, 167), (0x5931, 98, 183), (0x5937, 107, 104), (0x593E, 121, 177), (0x5944, 100, 178),
    (0x5947, 79, 180), (0x5948, 81, 111), (0x5949, 91, 165), (0x594E, 79, 101), (0x594F, 112, 116),
    (0x5950, 123, 113), (0x5951, 75, 184), (0x5954, 92, 134), (0x5955, 121, 145), (0x5957, 118, 159),
    (0x595A, 121, 104), (0x5960, 109, 181), (0x5962, 93, 142), (0x5967, 102, 179), (0x596A, 118, 108),
    (0x596B, 106, 132), (0x596C, 108, 161), (0x596D, 95, 107), (0x596E, 92, 135), (0x5973, 81, 115),
    (0x5974, 81, 127), (0x5978, 73, 140), (0x597D, 122, 127), (0x5982, 100, 189), (0x5983, 92, 165),
    (0x5984, 87, 141), (0x598A, 107, 180), (0x5993, 79, 181), (0x5996, 103, 173), (0x5997, 79, 146),
    (0x5999, 88, 152), (0x59A5, 117, 166), (0x59A8, 90, 106), (0x59AC, 118, 160), (0x59B9, 87, 153),
    (0x59BB, 115, 99), (0x59BE, 115, 157), (0x59C3, 110, 145), (0x59C6, 88, 117), (0x59C9, 108, 107),
    (0x59CB, 98, 119), (0x59D0, 109, 123), (0x59D1, 76, 116), (0x59D3, 95, 179), (0x59D4, 105, 141),
    (0x59D9, 107, 181), (0x59DA, 103, 174), (0x59DC, 74, 105), (0x59DD, 112, 111), (0x59E6, 73, 141),
    (0x59E8, 107, 105), (0x59EA, 113, 171), (0x59EC, 124, 175), (0x59EE, 120, 179), (0x59F8, 101, 129),
    (0x59FB, 107, 152), (0x59FF, 108, 108), (0x5A01, 105, 142), (0x5A03, 103, 159), (0x5A11, 93, 143),
    (0x5A18, 81, 102), (0x5A1B, 102, 180), (0x5A1C, 80, 150), (0x5A1F, 101, 130), (0x5A20, 98, 163),
    (0x5A25, 99, 112), (0x5A29, 87, 116), (0x5A36, 117, 101), (0x5A3C, 114, 158), (0x5A41, 86, 101),
    (0x5A46, 118, 168), (0x5A49, 103, 134), (0x5A5A, 122, 166), (0x5A62, 92, 166), (0x5A66, 91, 190),
    (0x5A92, 87, 154), (0x5A9A, 89, 108), (0x5A9B, 105, 112), (0x5AA4, 98, 120), (0x5AC1, 73, 106),
    (0x5AC2, 96, 185), (0x5AC4, 105, 113), (0x5AC9, 113, 172), (0x5ACC, 121, 174), (0x5AE1, 109, 149),
    (0x5AE6, 120, 180), (0x5AE9, 81, 172), (0x5B05, 122, 187), (0x5B09, 124, 176), (0x5B0B, 95, 125),
    (0x5B0C, 77, 163), (0x5B16, 119, 134), (0x5B2A, 93, 110), (0x5B40, 94, 133), (0x5B43, 100, 126),
    (0x5B50, 108, 109), (0x5B51, 121, 170), (0x5B54, 76, 174), (0x5B55, 108, 102), (0x5B57, 108, 110),
    (0x5B58, 111, 173), (0x5B5A, 92, 97), (0x5B5C, 108, 111), (0x5B5D, 123, 184), (0x5B5F, 87, 171),
    (0x5B63, 75, 185), (0x5B64, 76, 117), (0x5B69, 121, 105), (0x5B6B, 96, 157), (0x5B70, 97, 149),
    (0x5B71, 108, 143), (0x5B75, 92, 98), (0x5B78, 120, 138), (0x5B7A, 105, 168), (0x5B7C, 100, 173),
    (0x5B85, 82, 171), (0x5B87, 104, 148), (0x5B88, 96, 186), (0x5B89, 99, 140), (0x5B8B, 96, 164),
    (0x5B8C, 103, 135), (0x5B8F, 77, 155), (0x5B93, 91, 149), (0x5B95, 118, 117), (0x5B96, 123, 179),
    (0x5B97, 111, 179), (0x5B98, 77, 111), (0x5B99, 112, 117), (0x5B9A, 110, 146), (0x5B9B, 103, 136),
    (0x5B9C, 106, 177), (0x5BA2, 74, 148), (0x5BA3, 95, 126), (0x5BA4, 98, 184), (0x5BA5, 105, 169),
    (0x5BA6, 123, 114), (0x5BAC, 95, 180), (0x5BAE, 78, 160), (0x5BB0, 109, 101), (0x5BB3, 121, 106),
    (0x5BB4, 101, 131), (0x5BB5, 96, 114), (0x5BB6, 73, 107), (0x5BB8, 98, 164), (0x5BB9, 104, 123),
    (0x5BBF, 97, 150), (0x5BC0, 114, 178), (0x5BC2, 109, 150), (0x5BC3, 105, 114), (0x5BC4, 79, 182),
    (0x5BC5, 107, 153), (0x5BC6, 89, 139), (0x5BC7, 78, 104), (0x5BCC, 92, 99), (0x5BD0, 87, 155),
    (0x5BD2, 120, 142), (0x5BD3, 104, 149), (0x5BD4, 98, 145), (0x5BD7, 81, 124), (0x5BDE, 87, 108),
    (0x5BDF, 114, 140), (0x5BE1, 76, 187), (0x5BE2, 117, 150), (0x5BE4, 102, 181), (0x5BE5, 103, 175),
    (0x5BE6, 98, 185), (0x5BE7, 81, 123), (0x5BE8, 114, 179), (0x5BE9, 98, 187), (0x5BEB, 93, 144),
    (0x5BEC, 77, 112), (0x5BEE, 85, 183), (0x5BEF, 112, 153), (0x5BF5, 116, 129), (0x5BF6, 91, 132),
    (0x5BF8, 116, 123), (0x5BFA, 93, 145), (0x5C01, 91, 166), (0x5C04, 93, 146), (0x5C07, 108, 162),
    (0x5C08, 109, 182), (0x5C09, 105, 143), (0x5C0A, 111, 174), (0x5C0B, 98, 188), (0x5C0D, 82, 159),
    (0x5C0E, 82, 180), (0x5C0F, 96, 115), (0x5C11, 96, 116), (0x5C16, 115, 147), (0x5C19, 94, 134),
    (0x5C24, 104, 150), (0x5C28, 90, 107), (0x5C31, 117, 102), (0x5C38, 98, 121), (0x5C39, 106, 133),
    (0x5C3A, 115, 105), (0x5C3B, 76, 118), (0x5C3C, 81, 185), (0x5C3E, 89, 109), (0x5C3F, 81, 163),
    (0x5C40, 78, 145), (0x5C45, 74, 156), (0x5C46, 75, 186), (0x5C48, 78, 157), (0x5C4B, 103, 105),
    (0x5C4D, 98, 123), (0x5C4E, 98, 122), (0x5C51, 95, 154), (0x5C55, 109, 183), (0x5C5B, 91, 115),
    (0x5C60, 82, 181), (0x5C62, 86, 102), (0x5C64, 117, 117), (0x5C65, 86, 155), (0x5C6C, 96, 149),
    (0x5C6F, 83, 170), (0x5C71, 94, 99), (0x5C79, 124, 159), (0x5C90, 79, 183), (0x5C91, 108, 148),
    (0x5CA1, 74, 106), (0x5CA9, 99, 155), (0x5CAB, 96, 187), (0x5CAC, 74, 98), (0x5CB1, 82, 160),
    (0x5CB3, 99, 127), (0x5CB5, 122, 128), (0x5CB7, 89, 126), (0x5CB8, 99, 141), (0x5CBA, 85, 121),
    (0x5CBE, 110, 128), (0x5CC0, 96, 188), (0x5CD9, 117, 121), (0x5CE0, 94, 135), (0x5CE8, 99, 113),
    (0x5CEF, 91, 167), (0x5CF0, 91, 168), (0x5CF4, 121, 150), (0x5CF6, 82, 182), (0x5CFB, 112, 154),
    (0x5CFD, 121, 178), (0x5D07, 97, 189), (0x5D0D, 84, 143), (0x5D0E, 79, 184), (0x5D11, 76, 159),
    (0x5D14, 116, 139), (0x5D16, 99, 176), (0x5D17, 74, 107), (0x5D19, 86, 132), (0x5D27, 97, 190),
    (0x5D29, 92, 154), (0x5D4B, 89, 110), (0x5D4C, 73, 174), (0x5D50, 84, 121), (0x5D69, 98, 97),
    (0x5D6C, 103, 163), (0x5D6F, 114, 107), (0x5D87, 78, 105), (0x5D8B, 82, 183), (0x5D9D, 83, 177),
    (0x5DA0, 77, 164), (0x5DA2, 103, 178), (0x5DAA, 100, 181), (0x5DB8, 102, 110), (0x5DBA, 85, 122),
    (0x5DBC, 94, 172), (0x5DBD, 99, 128), (0x5DCD, 103, 164), (0x5DD2, 87, 117), (0x5DD6, 99, 156),
    (0x5DDD, 115, 121), (0x5DDE, 112, 118), (0x5DE1, 97, 158), (0x5DE2, 96, 117), (0x5DE5, 76, 175),
    (0x5DE6, 112, 103), (0x5DE7, 77, 165), (0x5DE8, 74, 157), (0x5DEB, 88, 163), (0x5DEE, 114, 108),
    (0x5DF1, 79, 185), (0x5DF2, 107, 107), (0x5DF3, 93, 147), (0x5DF4, 118, 169), (0x5DF7, 120, 181),
    (0x5DFD, 96, 158), (0x5DFE, 74, 174), (0x5E02, 98, 124), (0x5E03, 119, 150), (0x5E06, 90, 174),
    (0x5E0C, 124, 177), (0x5E11, 118, 118), (0x5E16, 115, 158), (0x5E19, 113, 173), (0x5E1B, 90, 153),
    (0x5E1D, 111, 104), (0x5E25, 96, 189), (0x5E2B, 93, 148), (0x5E2D, 95, 108), (0x5E33, 108, 163),
    (0x5E36, 82, 161), (0x5E38, 94, 136), (0x5E3D, 88, 118), (0x5E3F, 124, 108), (0x5E40, 110, 147),
    (0x5E44, 99, 129), (0x5E45, 119, 171), (0x5E47, 90, 108), (0x5E4C, 123, 134), (0x5E55, 87, 109),
    (0x5E5F, 117, 122), (0x5E61, 90, 159), (0x5E62, 82, 147), (0x5E63, 119, 135), (0x5E72, 73, 142),
    (0x5E73, 119, 129), (0x5E74, 81, 116), (0x5E77, 91, 116), (0x5E78, 121, 121), (0x5E79, 73, 143),
    (0x5E7B, 123, 115), (0x5E7C, 105, 170), (0x5E7D, 105, 171), (0x5E7E, 79, 186), (0x5E84, 108, 164),
    (0x5E87, 92, 167), (0x5E8A, 94, 137), (0x5E8F, 94, 173), (0x5E95, 109, 124), (0x5E97, 110, 129),
    (0x5E9A, 75, 146), (0x5E9C, 92, 100), (0x5EA0, 94, 138), (0x5EA6, 82, 184), (0x5EA7, 112, 104),
    (0x5EAB, 76, 119), (0x5EAD, 110, 148), (0x5EB5, 99, 157), (0x5EB6, 94, 174), (0x5EB7, 74, 108),
    (0x5EB8, 104, 124), (0x5EBE, 105, 172), (0x5EC2, 94, 139), (0x5EC8, 120, 127), (0x5EC9, 85, 111),
    (0x5ECA, 84, 134), (0x5ED0, 78, 106), (0x5ED3, 77, 105), (0x5ED6, 85, 184), (0x5EDA, 112, 119),
    (0x5EDB, 109, 184), (0x5EDF, 88, 153), (0x5EE0, 114, 159), (0x5EE2, 119, 136), (0x5EE3, 77, 134),
    (0x5EEC, 84, 166), (0x5EF3, 115, 166), (0x5EF6, 101, 133), (0x5EF7, 110, 149), (0x5EFA, 74, 175),
    (0x5EFB, 123, 159), (0x5F01, 91, 103), (0x5F04, 85, 167), (0x5F0A, 119, 137), (0x5F0F, 98, 146),
    (0x5F11, 98, 125), (0x5F13, 78, 161), (0x5F14, 111, 128), (0x5F15, 107, 154), (0x5F17, 92, 151),
    (0x5F18, 122, 176), (0x5F1B, 107, 108), (0x5F1F, 111, 105), (0x5F26, 121, 151), (0x5F27, 122, 129),
    (0x5F29, 81, 128), (0x5F31, 100, 112), (0x5F35, 108, 165), (0x5F3A, 74, 109), (0x5F3C, 120, 112),
    (0x5F48, 118, 101), (0x5F4A, 74, 110), (0x5F4C, 89, 111), (0x5F4E, 87, 118), (0x5F56, 82, 103),
    (0x5F57, 122, 114), (0x5F59, 124, 132), (0x5F5B, 107, 109), (0x5F62, 122, 97), (0x5F66, 100, 169),
    (0x5F67, 104, 174), (0x5F69, 114, 180), (0x5F6A, 119, 179), (0x5F6B, 111, 129), (0x5F6C, 93, 111),
    (0x5F6D, 119, 112), (0x5F70, 114, 160), (0x5F71, 102, 111), (0x5F77, 90, 109), (0x5F79, 101, 117),
    (0x5F7C, 120, 104), (0x5F7F, 92, 152), (0x5F80, 103, 153), (0x5F81, 110, 150), (0x5F85, 82, 162),
    (0x5F87, 97, 159), (0x5F8A, 123, 160), (0x5F8B, 86, 136), (0x5F8C, 124, 109), (0x5F90, 94, 175),
    (0x5F91, 75, 147), (0x5F92, 82, 185), (0x5F97, 83, 176), (0x5F98, 90, 135), (0x5F99, 93, 149),
    (0x5F9E, 111, 180), (0x5FA0, 84, 144), (0x5FA1, 100, 153), (0x5FA8, 123, 135), (0x5FA9, 91, 150),
    (0x5FAA, 97, 160), (0x5FAE, 89, 112), (0x5FB5, 114, 99), (0x5FB7, 82, 172), (0x5FB9, 115, 139),
    (0x5FBD, 124, 133), (0x5FC3, 98, 189), (0x5FC5, 120, 113), (0x5FCC, 79, 187), (0x5FCD, 107, 155),
    (0x5FD6, 116, 124), (0x5FD7, 113, 100), (0x5FD8, 87, 142), (0x5FD9, 87, 143), (0x5FE0, 116, 183),
    (0x5FEB, 117, 161), (0x5FF5, 81, 119), (0x5FFD, 122, 172), (0x5FFF, 92, 136), (0x600F, 99, 168),
    (0x6012, 81, 129), (0x6016, 119, 151), (0x601C, 85, 123), (0x601D, 93, 150), (0x6020, 118, 125),
    (0x6021, 107, 110), (0x6025, 79, 161), (0x6027, 95, 181), (0x6028, 105, 115), (0x602A, 77, 150),
    (0x602F, 75, 101), (0x6041, 107, 182), (0x6042, 97, 161), (0x6043, 98, 126), (0x604D, 123, 136),
    (0x6050, 76, 176), (0x6052, 120, 182), (0x6055, 94, 176), (0x6059, 100, 127), (0x605D, 77, 127),
    (0x6062, 123, 161), (0x6063, 108, 112), (0x6064, 124, 145), (0x6065, 117, 123), (0x6068, 120, 143),
    (0x6069, 106, 154), (0x606A, 73, 129), (0x606C, 81, 120), (0x606D, 76, 177), (0x606F, 98, 147),
    (0x6070, 124, 166), (0x6085, 101, 173), (0x6089, 98, 186), (0x608C, 111, 106), (0x608D, 120, 144),
    (0x6094, 123, 162), (0x6096, 119, 103), (0x609A, 96, 165), (0x609B, 109, 185), (0x609F, 102, 182),
    (0x60A0, 105, 173), (0x60A3, 123, 116), (0x60A4, 116, 130), (0x60A7, 86, 156), (0x60B0, 111, 181),
    (0x60B2, 92, 168), (0x60B3, 82, 173), (0x60B4, 116, 188), (0x60B6, 89, 127), (0x60B8, 75, 187),
    (0x60BC, 82, 186), (0x60BD, 115, 100), (0x60C5, 110, 151), (0x60C7, 83, 131), (0x60D1, 122, 163),
    (0x60DA, 122, 173), (0x60DC, 95, 109), (0x60DF, 105, 174), (0x60E0, 122, 115), (0x60E1, 99, 130),
    (0x60F0, 117, 167), (0x60F1, 81, 157), (0x60F3, 94, 140), (0x60F6, 123, 137), (0x60F9, 100, 105),
    (0x60FA, 95, 182), (0x60FB, 117, 115), (0x6101, 96, 190), (0x6106, 74, 176), (0x6108, 105, 175),
    (0x6109, 105, 176), (0x610D, 89, 128), (0x610E, 119, 116), (0x610F, 106, 178), (0x6115, 99, 131),
    (0x611A, 104, 151), (0x611B, 99, 177), (0x611F, 73, 175), (0x6127, 77, 151), (0x6130, 123, 138),
    (0x6134, 114, 161), (0x6137, 74, 132), (0x613C, 98, 165), (0x613E, 74, 133), (0x613F, 105, 116),
    (0x6142, 104, 125), (0x6144, 86, 137), (0x6147, 106, 155), (0x6148, 108, 113), (0x614A, 75, 131),
    (0x614B, 118, 126), (0x614C, 123, 139), (0x6153, 119, 180), (0x6155, 88, 119), (0x6158, 114, 147),
    (0x6159, 114, 148), (0x615D, 118, 164), (0x615F, 118, 145), (0x6162, 87, 119), (0x6163, 77, 113),
    (0x6164, 73, 130), (0x6167, 122, 116), (0x6168, 74, 134), (0x616B, 111, 182), (0x616E, 84, 167),
    (0x6170, 105, 144), (0x6176, 75, 148), (0x6177, 74, 111), (0x617D, 115, 106), (0x617E, 104, 111),
    (0x6181, 116, 131), (0x6182, 104, 152), (0x618A, 92, 169), (0x618E, 112, 179), (0x6190, 84, 187),
    (0x6191, 93, 123), (0x6194, 115, 187), (0x6198, 124, 179), (0x6199, 124, 178), (0x619A, 118, 102),
    (0x61A4, 92, 137), (0x61A7, 83, 147), (0x61A9, 75, 104), (0x61AB, 89, 129), (0x61AC, 75, 149),
    (0x61AE, 88, 164), (0x61B2, 121, 138), (0x61B6, 100, 163), (0x61BA, 82, 124), (0x61BE, 73, 176),
    (0x61C3, 79, 132), (0x61C7, 73, 144), (0x61C8, 121, 107), (0x61C9, 106, 171), (0x61CA, 102, 184),
    (0x61CB, 88, 165), (0x61E6, 80, 151), (0x61F2, 114, 100), (0x61F6, 83, 187), (0x61F7, 123, 163),
    (0x61F8, 121, 152), (0x61FA, 114, 149), (0x61FC, 78, 107), (0x61FF, 106, 179), (0x6200, 84, 188),
    (0x6207, 82, 148), (0x6208, 76, 188), (0x620A, 88, 166), (0x620C, 97, 185), (0x620D, 97, 97),
    (0x620E, 106, 148), (0x6210, 95, 183), (0x6211, 99, 114), (0x6212, 75, 188), (0x6216, 122, 164),
    (0x621A, 115, 107), (0x621F, 79, 125), (0x6221, 73, 177), (0x622A, 110, 120), (0x622E, 86, 128),
    (0x6230, 109, 186), (0x6231, 124, 180), (0x6234, 82, 163), (0x6236, 122, 130), (0x623E, 84, 168),
    (0x623F, 90, 110), (0x6240, 96, 118), (0x6241, 119, 119), (0x6247, 95, 127), (0x6248, 122, 131),
    (0x6249, 92, 170), (0x624B, 97, 98), (0x624D, 109, 102), (0x6253, 117, 168), (0x6258, 117, 181),
    (0x626E, 92, 138), (0x6271, 79, 162), (0x6276, 92, 102), (0x6279, 92, 171), (0x627C, 99, 185),
    (0x627F, 98, 111), (0x6280, 79, 188), (0x6284, 115, 188), (0x6289, 75, 124), (0x628A, 118, 170),
    (0x6291, 100, 164), (0x6292, 94, 177), (0x6295, 118, 161), (0x6297, 120, 183), (0x6298, 110, 121),
    (0x629B, 119, 152), (0x62AB, 120, 105), (0x62B1, 119, 153), (0x62B5, 109, 125), (0x62B9, 87, 134),
    (0x62BC, 99, 163), (0x62BD, 116, 142), (0x62C2, 92, 153), (0x62C7, 88, 167), (0x62C8, 81, 121),
    (0x62C9, 84, 131), (0x62CC, 89, 165), (0x62CD, 89, 144), (0x62CF, 80, 153), (0x62D0, 77, 152),
    (0x62D2, 74, 158), (0x62D3, 115, 108), (0x62D4, 89, 187), (0x62D6, 117, 169), (0x62D7, 103, 179),
    (0x62D8, 78, 108), (0x62D9, 111, 176), (0x62DB, 115, 189), (0x62DC, 90, 136), (0x62EC, 77, 128),
    (0x62ED, 98, 148), (0x62EE, 80, 143), (0x62EF, 112, 181), (0x62F1, 76, 178), (0x62F3, 78, 171),
    (0x62F7, 76, 120), (0x62FE, 98, 102), (0x62FF, 80, 154), (0x6301, 113, 101), (0x6307, 113, 102),
    (0x6309, 99, 142), (0x6311, 82, 187), (0x632B, 112, 105), (0x632F, 113, 137), (0x633A, 110, 152),
    (0x633B, 101, 137), (0x633D, 87, 120), (0x633E, 121, 179), (0x6349, 114, 117), (0x634C, 119, 100),
    (0x634F, 80, 179), (0x6350, 101, 136), (0x6355, 119, 154), (0x6367, 91, 169), (0x6368, 93, 151),
    (0x636E, 74, 159), (0x6372, 78, 172), (0x6377, 115, 159), (0x637A, 80, 180), (0x637B, 81, 122),
    (0x637F, 94, 178), (0x6383, 96, 119), (0x6388, 97, 99), (0x6389, 82, 188), (0x638C, 108, 166),
    (0x6392, 90, 137), (0x6396, 99, 186), (0x6398, 78, 158), (0x639B, 77, 144), (0x63A0, 84, 147),
    (0x63A1, 114, 181), (0x63A2, 118, 110), (0x63A5, 110, 136), (0x63A7, 76, 179), (0x63A8, 116, 143),
    (0x63A9, 100, 179), (0x63AA, 111, 130), (0x63C0, 73, 145), (0x63C4, 105, 177), (0x63C6, 79, 102),
    (0x63CF, 88, 154), (0x63D0, 111, 107), (0x63D6, 106, 167), (0x63DA, 100, 128), (0x63DB, 123, 117),
    (0x63E1, 99, 132), (0x63ED, 75, 105), (0x63EE, 124, 134), (0x63F4, 105, 117), (0x63F6, 100, 106),
    (0x63F7, 94, 122), (0x640D, 96, 159), (0x640F, 89, 145), (0x6414, 96, 120), (0x6416, 103, 180),
    (0x6417, 82, 189), (0x641C, 97, 100), (0x6422, 113, 138), (0x642C, 89, 166), (0x642D, 118, 115),
    (0x643A, 124, 141), (0x643E, 114, 118), (0x6458, 109, 151), (0x6460, 116, 132), (0x6469, 87, 100),
    (0x646F, 113, 103), (0x6478, 88, 120), (0x6479, 88, 121), (0x647A, 110, 137), (0x6488, 85, 142),
    (0x6491, 118, 139), (0x6492, 94, 110), (0x6493, 103, 181), (0x649A, 81, 117), (0x649E, 82, 149),
    (0x64A4, 115, 140), (0x64A5, 89, 188), (0x64AB, 88, 168), (0x64AD, 118, 171), (0x64AE, 116, 137),
    (0x64B0, 114, 124), (0x64B2, 89, 146), (0x64BB, 82, 117), (0x64C1, 103, 118), (0x64C4, 85, 143),
    (0x64C5, 115, 122), (0x64C7, 118, 137), (0x64CA, 75, 106), (0x64CD, 111, 131), (0x64CE, 75, 150),
    (0x64D2, 79, 147), (0x64D4, 82, 125), (0x64D8, 90, 187), (0x64DA, 74, 160), (0x64E1, 82, 164),
    (0x64E2, 117, 183), (0x64E5, 84, 122), (0x64E6, 114, 141), (0x64E7, 74, 161), (0x64EC, 106, 180),
    (0x64F2, 115, 109), (0x64F4, 123, 106), (0x64FA, 118, 172), (0x64FE, 103, 182), (0x6500, 89, 167),
    (0x6504, 118, 140), (0x6518, 100, 129), (0x651D, 95, 174), (0x6523, 84, 189), (0x652A, 77, 166),
    (0x652B, 123, 107), (0x652C, 84, 123), (0x652F, 113, 104), (0x6536, 97, 101), (0x6537, 76, 121),
    (0x6538, 105, 178), (0x6539, 74, 135), (0x653B, 76, 180), (0x653E, 90, 111), (0x653F, 110, 153),
    (0x6545, 76, 122), (0x6548, 123, 185), (0x654D, 94, 179), (0x654E, 77, 167), (0x654F, 89, 130),
    (0x6551, 78, 109), (0x6556, 102, 185), (0x6557, 119, 104), (0x655E, 114, 162), (0x6562, 73, 178),
    (0x6563, 94, 100), (0x6566, 83, 132), (0x656C, 75, 151), (0x656D, 100, 130), (0x6572, 76, 123),
    (0x6574, 110, 154), (0x6575, 109, 152), (0x6577, 92, 103), (0x6578, 97, 102), (0x657E, 95, 128),
    (0x6582, 85, 112), (0x6583, 119, 138), (0x6585, 123, 186), (0x6587, 88, 190), (0x658C, 93, 112),
    (0x6590, 92, 172), (0x6591, 89, 168), (0x6597, 83, 160), (0x6599, 85, 185), (0x659B, 76, 151),
    (0x659C, 93, 152), (0x659F, 113, 184), (0x65A1, 99, 150), (0x65A4, 79, 133), (0x65A5, 115, 110),
    (0x65A7, 92, 104), (0x65AB, 108, 133), (0x65AC, 114, 150), (0x65AF, 93, 153), (0x65B0, 98, 166),
    (0x65B7, 82, 104), (0x65B9, 90, 112), (0x65BC, 100, 154), (0x65BD, 98, 127), (0x65C1, 90, 113),
    (0x65C5, 84, 169), (0x65CB, 95, 129), (0x65CC, 110, 155), (0x65CF, 111, 169), (0x65D2, 86, 114),
    (0x65D7, 79, 189), (0x65E0, 88, 169), (0x65E3, 79, 190), (0x65E5, 107, 173), (0x65E6, 82, 105),
    (0x65E8, 113, 105), (0x65E9, 111, 132), (0x65EC, 97, 162), (0x65ED, 104, 175), (0x65F1, 120, 145),
    (0x65F4, 104, 153), (0x65FA, 103, 154), (0x65FB, 89, 131), (0x65FC, 89, 132), (0x65FD, 83, 133),
    (0x65FF, 102, 186), (0x6606, 76, 160), (0x6607, 98, 112), (0x6609, 90, 114), (0x660A, 122, 132),
    (0x660C, 114, 163), (0x660E, 88, 101), (0x660F, 122, 167), (0x6610, 92, 139), (0x6611, 79, 148),
    (0x6613, 101, 118), (0x6614, 95, 110), (0x6615, 124, 154), (0x661E, 91, 117), (0x661F, 95, 184),
    (0x6620, 102, 113), (0x6625, 116, 176), (0x6627, 87, 156), (0x6628, 108, 134), (0x662D, 96, 121),
    (0x662F, 98, 128), (0x6630, 120, 128), (0x6631, 104, 176), (0x6634, 88, 155), (0x6636, 114, 164),
    (0x663A, 91, 118), (0x663B, 99, 169), (0x6641, 111, 133), (0x6642, 98, 129), (0x6643, 123, 140),
    (0x6644, 123, 141), (0x6649, 113, 139), (0x664B, 113, 140), (0x664F, 99, 143), (0x6659, 112, 155),
    (0x665B, 121, 153), (0x665D, 112, 120), (0x665E, 124, 181), (0x665F, 95, 185), (0x6664, 102, 187),
    (0x6665, 123, 119), (0x6666, 123, 164), (0x6667, 122, 133), (0x6668, 98, 167), (0x6669, 87, 121),
    (0x666B, 117, 184), (0x666E, 91, 133), (0x666F, 75, 152), (0x6673, 95, 111), (0x6674, 115, 167),
    (0x6676, 110, 156), (0x6677, 78, 188), (0x6678, 110, 157), (0x667A, 113, 106), (0x6684, 124, 126),
    (0x6687, 73, 108), (0x6688, 124, 123), (0x6689, 124, 135), (0x668E, 102, 114), (0x6690, 105, 145),
    (0x6691, 94, 180), (0x6696, 80, 172), (0x6697, 99, 158), (0x6698, 100, 131), (0x669D, 88, 102),
    (0x66A0, 76, 124), (0x66A2, 114, 165), (0x66AB, 108, 149), (0x66AE, 88, 122), (0x66B2, 108, 167),
    (0x66B3, 122, 117), (0x66B4, 119, 172), (0x66B9, 95, 167), (0x66BB, 75, 153), (0x66BE, 83, 134),
    (0x66C4, 102, 101), (0x66C6, 84, 181), (0x66C7, 82, 126), (0x66C9, 123, 187), (0x66D6, 99, 178),
    (0x66D9, 94, 181), (0x66DC, 103, 184), (0x66DD, 119, 173), (0x66E0, 77, 135), (0x66E6, 124, 182),
    (0x66F0, 103, 152), (0x66F2, 76, 152), (0x66F3, 102, 150), (0x66F4, 75, 154), (0x66F7, 73, 163),
    (0x66F8, 94, 182), (0x66F9, 111, 135), (0x66FA, 111, 134), (0x66FC, 87, 122), (0x66FE, 112, 180),
    (0x66FF, 115, 176), (0x6700, 116, 140), (0x6703, 123, 165), (0x6708, 105, 133), (0x6709, 105, 179),
    (0x670B, 92, 155), (0x670D, 91, 151), (0x6714, 93, 189), (0x6715, 113, 185), (0x6717, 84, 135),
    (0x671B, 87, 144), (0x671D, 111, 136), (0x671E, 80, 97), (0x671F, 80, 98), (0x6726, 88, 148),
    (0x6727, 85, 168), (0x6728, 88, 138), (0x672A, 89, 113), (0x672B, 87, 135), (0x672C, 91, 162),
    (0x672D, 114, 142), (0x672E, 116, 180), (0x6731, 112, 121), (0x6734, 89, 147), (0x6736, 117, 170),
    (0x673A, 78, 181), (0x673D, 124, 110), (0x6746, 73, 146), (0x6749, 94, 116), (0x674E, 86, 157),
    (0x674F, 121, 122), (0x6750, 109, 103), (0x6751, 116, 125), (0x6753, 119, 181), (0x6756, 108, 168),
    (0x675C, 83, 161), (0x675E, 80, 99), (0x675F, 96, 150), (0x676D, 120, 184), (0x676F, 90, 138),
    (0x6770, 74, 185), (0x6771, 83, 148), (0x6773, 88, 156), (0x6775, 109, 126), (0x6777, 118, 173),
    (0x677B, 81, 174), (0x677E, 96, 166), (0x677F, 118, 185), (0x6787, 92, 173), (0x6789, 103, 155),
    (0x678B, 90, 115), (0x678F, 80, 183), (0x6790, 95, 112), (0x6793, 83, 162), (0x6795, 117, 151),
    (0x6797, 86, 185), (0x679A, 87, 157), (0x679C, 76, 189), (0x679D, 113, 107), (0x67AF, 76, 125),
    (0x67B0, 119, 130), (0x67B3, 113, 108), (0x67B6, 73, 109), (0x67B7, 73, 110), (0x67B8, 78, 110),
    (0x67BE, 98, 130), (0x67C4, 91, 119), (0x67CF, 90, 154), (0x67D0, 88, 123), (0x67D1, 73, 179),
    (0x67D2, 117, 147), (0x67D3, 101, 184), (0x67D4, 105, 181), (0x67DA, 105, 182), (0x67DD, 117, 185),
    (0x67E9, 78, 111), (0x67EC, 73, 147), (0x67EF, 73, 111), (0x67F0, 81, 112), (0x67F1, 112, 122),
    (0x67F3, 86, 115), (0x67F4, 98, 131), (0x67F5, 114, 189), (0x67F6, 93, 154), (0x67FB, 93, 155),
    (0x67FE, 110, 158), (0x6812, 97, 163), (0x6813, 109, 187), (0x6816, 94, 183), (0x6817, 86, 138),
    (0x6821, 77, 168), (0x6822, 90, 155), (0x682A, 112, 123), (0x682F, 104, 177), (0x6838, 121, 119),
    (0x6839, 79, 134), (0x683C, 75, 107), (0x683D, 109, 104), (0x6840, 74, 186), (0x6841, 120, 185),
    (0x6842, 75, 189), (0x6843, 82, 190), (0x6848, 99, 144), (0x684E, 113, 174), (0x6850, 83, 149),
    (0x6851, 94, 141), (0x6853, 123, 120), (0x6854, 80, 144), (0x686D, 113, 141), (0x6876, 118, 146),
    (0x687F, 73, 148), (0x6881, 84, 153), (0x6885, 87, 158), (0x688F, 76, 153), (0x6893, 109, 105),
    (0x6894, 117, 124), (0x6897, 75, 155), (0x689D, 111, 137), (0x689F, 123, 188), (0x68A1, 103, 137),
    (0x68A2, 115, 190), (0x68A7, 102, 188), (0x68A8, 86, 158), (0x68AD, 93, 156), (0x68AF, 111, 108),
    (0x68B0, 75, 190), (0x68B1, 76, 161), (0x68B3, 96, 122), (0x68B5, 90, 175), (0x68B6, 89, 114),
    (0x68C4, 80, 101), (0x68C5, 91, 120), (0x68C9, 87, 182), (0x68CB, 80, 100), (0x68CD, 76, 162),
    (0x68D2, 91, 170), (0x68D5, 111, 183), (0x68D7, 111, 138), (0x68D8, 79, 126), (0x68DA, 92, 156),
    (0x68DF, 83, 150), (0x68E0, 82, 150), (0x68E7, 108, 144), (0x68E8, 76, 97), (0x68EE, 94, 117),
    (0x68F2, 94, 184), (0x68F9, 83, 97), (0x68FA, 77, 114), (0x6900, 103, 138), (0x6905, 106, 181),
    (0x690D, 98, 149), (0x690E, 116, 144), (0x6912, 116, 97), (0x6927, 88, 103), (0x6930, 100, 107),
    (0x693D, 101, 139), (0x693F, 116, 177), (0x694A, 100, 133), (0x6953, 120, 99), (0x6954, 95, 155),
    (0x6955, 117, 171), (0x6957, 74, 177), (0x6959, 88, 170), (0x695A, 116, 98), (0x695E, 86, 145),
    (0x6960, 80, 184), (0x6961, 105, 184), (0x6962, 105, 185), (0x6963, 89, 115), (0x6968, 110, 159),
    (0x696B, 112, 175), (0x696D, 100, 182), (0x696E, 109, 127), (0x696F, 97, 164), (0x6975, 79, 127),
    (0x6977, 121, 108), (0x6978, 116, 145), (0x6979, 102, 115), (0x6995, 104, 126), (0x699B, 113, 142),
    (0x699C, 90, 116), (0x69A5, 123, 142), (0x69A7, 92, 174), (0x69AE, 102, 116), (0x69B4, 86, 116),
    (0x69BB, 118, 116), (0x69C1, 76, 126), (0x69C3, 89, 169), (0x69CB, 78, 112), (0x69CC, 118, 153),
    (0x69CD, 114, 166), (0x69D0, 77, 153), (0x69E8, 77, 106), (0x69EA, 74, 136), (0x69FB, 79, 103),
    (0x69FD, 111, 139), (0x69FF, 79, 135), (0x6A02, 99, 133), (0x6A0A, 90, 160), (0x6A11, 84, 154),
    (0x6A13, 86, 103), (0x6A17, 109, 128), (0x6A19, 119, 182), (0x6A1E, 116, 146), (0x6A1F, 108, 169),
    (0x6A21, 88, 124), (0x6A23, 100, 134), (0x6A35, 116, 99), (0x6A38, 89, 148), (0x6A39, 97, 103),
    (0x6A3A, 122, 188), (0x6A3D, 112, 156), (0x6A44, 73, 180), (0x6A48, 103, 186), (0x6A4B, 77, 169),
    (0x6A52, 104, 184), (0x6A53, 97, 165), (0x6A58, 79, 121), (0x6A59, 83, 178), (0x6A5F, 80, 102),
    (0x6A61, 94, 142), (0x6A6B, 123, 180), (0x6A80, 82, 106), (0x6A84, 75, 108), (0x6A89, 110, 160),
    (0x6A8D, 100, 165), (0x6A8E, 79, 149), (0x6A97, 90, 188), (0x6A9C, 123, 166), (0x6AA2, 74, 190),
    (0x6AA3, 108, 170), (0x6AB3, 93, 113), (0x6ABB, 120, 163), (0x6AC2, 83, 98), (0x6AC3, 78, 182),
    (0x6AD3, 85, 144), (0x6ADA, 84, 170), (0x6ADB, 112, 174), (0x6AF6, 121, 139), (0x6AFB, 100, 97),
    (0x6B04, 84, 113), (0x6B0A, 78, 173), (0x6B0C, 108, 171), (0x6B12, 84, 114), (0x6B16, 84, 124),
    (0x6B20, 124, 162), (0x6B21, 114, 109), (0x6B23, 124, 155), (0x6B32, 104, 112), (0x6B3A, 80, 103),
    (0x6B3D, 124, 163), (0x6B3E, 77, 115), (0x6B46, 124, 164), (0x6B47, 121, 142), (0x6B4C, 73, 112),
    (0x6B4E, 118, 103), (0x6B50, 78, 113), (0x6B5F, 101, 98), (0x6B61, 123, 118), (0x6B62, 113, 109),
    (0x6B63, 110, 161), (0x6B64, 114, 110), (0x6B65, 91, 134), (0x6B66, 88, 171), (0x6B6A, 103, 160),
    (0x6B72, 96, 104), (0x6B77, 84, 182), (0x6B78, 78, 189), (0x6B7B, 93, 157), (0x6B7F, 88, 145),
    (0x6B83, 99, 170), (0x6B84, 113, 143), (0x6B86, 118, 127), (0x6B89, 97, 166), (0x6B8A, 97, 104),
    (0x6B96, 98, 150), (0x6B98, 108, 145), (0x6B9E, 104, 185), (0x6BAE, 85, 113), (0x6BAF, 93, 114),
    (0x6BB2, 95, 168), (0x6BB5, 82, 107), (0x6BB7, 106, 156), (0x6BBA, 94, 111), (0x6BBC, 73, 131),
    (0x6BBF, 109, 188), (0x6BC1, 124, 131), (0x6BC5, 106, 182), (0x6BC6, 78, 114), (0x6BCB, 88, 172),
    (0x6BCD, 88, 125), (0x6BCF, 87, 159), (0x6BD2, 83, 120), (0x6BD3, 106, 126), (0x6BD4, 92, 175),
    (0x6BD6, 92, 176), (0x6BD7, 92, 177), (0x6BD8, 92, 178), (0x6BDB, 88, 126), (0x6BEB, 122, 134),
    (0x6BEC, 78, 115), (0x6C08, 109, 189), (0x6C0F, 99, 107), (0x6C11, 89, 133), (0x6C13, 87, 172),
    (0x6C23, 80, 104), (0x6C34, 97, 105), (0x6C37, 93, 124), (0x6C38, 102, 117), (0x6C3E, 90, 176),
    (0x6C40, 110, 162), (0x6C41, 112, 176), (0x6C42, 78, 116), (0x6C4E, 90, 177), (0x6C50, 95, 113),
    (0x6C55, 94, 101), (0x6C57, 120, 146), (0x6C5A, 102, 189), (0x6C5D, 101, 99), (0x6C5E, 122, 177),
    (0x6C5F, 74, 112), (0x6C60, 113, 110), (0x6C68, 76, 167), (0x6C6A, 103, 156), (0x6C6D, 102, 151),
    (0x6C70, 118, 128), (0x6C72, 79, 163), (0x6C76, 89, 97), (0x6C7A, 75, 125), (0x6C7D, 80, 105),
    (0x6C7E, 92, 140), (0x6C81, 98, 190), (0x6C82, 80, 106), (0x6C83, 103, 106), (0x6C85, 105, 118),
    (0x6C86, 120, 186), (0x6C87, 101, 140), (0x6C88, 117, 152), (0x6C8C, 83, 135), (0x6C90, 88, 139),
    (0x6C92, 88, 146), (0x6C93, 82, 139), (0x6C94, 87, 183), (0x6C95, 89, 105), (0x6C96, 116, 184),
    (0x6C99, 93, 158), (0x6C9A, 113, 111), (0x6C9B, 119, 105), (0x6CAB, 87, 136), (0x6CAE, 109, 129),
    (0x6CB3, 120, 129), (0x6CB8, 92, 179), (0x6CB9, 105, 186), (0x6CBB, 117, 125), (0x6CBC, 96, 123),
    (0x6CBD, 76, 127), (0x6CBE, 115, 148), (0x6CBF, 101, 141), (0x6CC1, 123, 143), (0x6CC2, 122, 98),
    (0x6CC4, 95, 156), (0x6CC9, 115, 123), (0x6CCA, 89, 149), (0x6CCC, 120, 114), (0x6CD3, 122, 178),
    (0x6CD5, 90, 182), (0x6CD7, 93, 159), (0x6CDB, 90, 178), (0x6CE1, 119, 156), (0x6CE2, 118, 174),
    (0x6CE3, 106, 168), (0x6CE5, 81, 186), (0x6CE8, 112, 124), (0x6CEB, 121, 154), (0x6CEE, 89, 170),
    (0x6CEF, 89, 134), (0x6CF0, 118, 129), (0x6CF3, 102, 118), (0x6D0B, 100, 135), (0x6D0C, 85, 108),
    (0x6D11, 91, 135), (0x6D17, 96, 105), (0x6D19, 97, 106), (0x6D1B, 84, 102), (0x6D1E, 83, 151),
    (0x6D25, 113, 144), (0x6D27, 105, 187), (0x6D29, 95, 157), (0x6D2A, 122, 179), (0x6D32, 112, 125),
    (0x6D35, 97, 167), (0x6D36, 124, 151), (0x6D38, 77, 136), (0x6D39, 105, 119), (0x6D3B, 123, 128),
    (0x6D3D, 124, 167), (0x6D3E, 118, 175), (0x6D41, 86, 117), (0x6D59, 110, 122), (0x6D5A, 112, 157),
    (0x6D5C, 93, 115), (0x6D63, 103, 139), (0x6D66, 119, 157), (0x6D69, 122, 135), (0x6D6A, 84, 136),
    (0x6D6C, 86, 159), (0x6D6E, 92, 105), (0x6D74, 104, 113), (0x6D77, 121, 109), (0x6D78, 117, 153),
    (0x6D79, 121, 180), (0x6D7F, 119, 106), (0x6D85, 101, 174), (0x6D87, 75, 156), (0x6D88, 96, 124),
    (0x6D89, 95, 175), (0x6D8C, 104, 127), (0x6D8D, 123, 189), (0x6D8E, 101, 142), (0x6D91, 96, 151),
    (0x6D93, 101, 143), (0x6D95, 115, 177), (0x6DAF, 99, 179), (0x6DB2, 99, 187), (0x6DB5, 120, 164),
    (0x6DC0, 110, 163), (0x6DC3, 78, 174), (0x6DC4, 117, 126), (0x6DC5, 95, 114), (0x6DC6, 123, 190),
    (0x6DC7, 80, 107), (0x6DCB, 86, 186), (0x6DCF, 122, 136), (0x6DD1, 97, 151), (0x6DD8, 83, 99),
    (0x6DD9, 111, 184), (0x6DDA, 86, 104), (0x6DDE, 96, 167), (0x6DE1, 82, 127), (0x6DE8, 110, 164),
    (0x6DEA, 86, 133), (0x6DEB, 106, 162), (0x6DEE, 123, 167), (0x6DF1, 99, 98), (0x6DF3, 97, 168),
    (0x6DF5, 101, 144), (0x6DF7, 122, 168), (0x6DF8, 115, 168), (0x6DF9, 100, 180), (0x6DFA, 115, 124),
    (0x6DFB, 115, 149), (0x6E17, 94, 118), (0x6E19, 123, 121), (0x6E1A, 109, 130), (0x6E1B, 73, 181),
    (0x6E1F, 110, 165), (0x6E20, 74, 162), (0x6E21, 83, 100), (0x6E23, 93, 160), (0x6E24, 89, 189),
    (0x6E25, 99, 134), (0x6E26, 103, 126), (0x6E2B, 95, 158), (0x6E2C, 117, 116), (0x6E2D, 105, 146),
    (0x6E2F, 120, 187), (0x6E32, 95, 130), (0x6E34, 73, 164), (0x6E36, 102, 119), (0x6E38, 105, 189),
    (0x6E3A, 88, 157), (0x6E3C, 89, 116), (0x6E3D, 109, 106), (0x6E3E, 122, 169), (0x6E43, 90, 139),
    (0x6E44, 89, 117), (0x6E4A, 112, 126), (0x6E4D, 82, 108), (0x6E56, 122, 137), (0x6E58, 94, 143),
    (0x6E5B, 82, 128), (0x6E5C, 98, 151), (0x6E5E, 110, 166), (0x6E5F, 123, 144), (0x6E67, 104, 128),
    (0x6E6B, 116, 147), (0x6E6E, 107, 156), (0x6E6F, 118, 119), (0x6E72, 105, 120), (0x6E73, 80, 185),
    (0x6E7A, 91, 136), (0x6E90, 105, 121), (0x6E96, 112, 158), (0x6E9C, 86, 118), (0x6E9D, 78, 117),
    (0x6E9F, 88, 104), (0x6EA2, 107, 174), (0x6EA5, 92, 106), (0x6EAA, 76, 98), (0x6EAB, 103, 110),
    (0x6EAF, 96, 125), (0x6EB1, 113, 145), (0x6EB6, 104, 129), (0x6EBA, 81, 188), (0x6EC2, 90, 117),
    (0x6EC4, 114, 167), (0x6EC5, 87, 190), (0x6EC9, 123, 145), (0x6ECB, 108, 114), (0x6ECC, 115, 111),
    (0x6ECE, 122, 99), (0x6ED1, 123, 129), (0x6ED3, 109, 107), (0x6ED4, 83, 101), (0x6EEF, 115, 178),
    (0x6EF4, 109, 153), (0x6EF8, 122, 138), (0x6EFE, 76, 163), (0x6EFF, 87, 123), (0x6F01, 100, 155),
    (0x6F02, 119, 183), (0x6F06, 117, 148), (0x6F0F, 86, 105), (0x6F11, 74, 137), (0x6F14, 101, 145),
    (0x6F15, 111, 140), (0x6F20, 87, 110), (0x6F22, 120, 147), (0x6F23, 84, 190), (0x6F2B, 87, 124),
    (0x6F2C, 113, 112), (0x6F31, 97, 107), (0x6F32, 114, 168), (0x6F38, 110, 130), (0x6F3F, 108, 172),
    (0x6F41, 102, 120), (0x6F51, 89, 190), (0x6F54, 75, 126), (0x6F57, 113, 188), (0x6F58, 89, 171),
    (0x6F5A, 97, 152), (0x6F5B, 108, 150), (0x6F5E, 85, 145), (0x6F5F, 95, 115), (0x6F62, 123, 146),
    (0x6F64, 106, 136), (0x6F6D, 82, 129), (0x6F6E, 111, 141), (0x6F70, 78, 183), (0x6F7A, 108, 146),
    (0x6F7C, 83, 152), (0x6F7D, 91, 137), (0x6F7E, 86, 177), (0x6F81, 94, 123), (0x6F84, 114, 101),
    (0x6F88, 115, 141), (0x6F8D, 112, 127), (0x6F8E, 119, 113), (0x6F90, 104, 186), (0x6F94, 122, 139),
    (0x6F97, 73, 149), (0x6FA3, 120, 148), (0x6FA4, 118, 138), (0x6FA7, 85, 136), (0x6FAE, 123, 168),
    (0x6FAF, 114, 125), (0x6FB1, 109, 190), (0x6FB3, 102, 190), (0x6FB9, 82, 130), (0x6FBE, 82, 118),
    (0x6FC0, 75, 109), (0x6FC1, 117, 186), (0x6FC2, 85, 114), (0x6FC3, 81, 152), (0x6FCA, 102, 152),
    (0x6FD5, 98, 101), (0x6FDA, 102, 121), (0x6FDF, 111, 109), (0x6FE0, 122, 140), (0x6FE1, 106, 97),
    (0x6FE4, 83, 102), (0x6FE9, 122, 141), (0x6FEB, 84, 125), (0x6FEC, 112, 159), (0x6FEF, 117, 187),
    (0x6FF1, 93, 116), (0x6FFE, 84, 171), (0x7001, 100, 136), (0x7005, 122, 100), (0x7006, 83, 121),
    (0x7009, 93, 161), (0x700B, 99, 99), (0x700F, 86, 119), (0x7011, 119, 174), (0x7015, 93, 117),
    (0x7018, 85, 146), (0x701A, 120, 149), (0x701B, 102, 122), (0x701C, 106, 149), (0x701D, 84, 183),
    (0x701E, 110, 167), (0x701F, 96, 126), (0x7023, 121, 110), (0x7027, 85, 169), (0x7028, 85, 174),
    (0x702F, 102, 123), (0x7037, 107, 139), (0x703E, 84, 115), (0x704C, 77, 116), (0x7050, 122, 101),
    (0x7051, 96, 174), (0x7058, 118, 104), (0x705D, 122, 142), (0x7063, 87, 125), (0x706B, 122, 189),
    (0x7070, 123, 169), (0x7078, 78, 118), (0x707C, 108, 135), (0x707D, 109, 108), (0x7085, 75, 157),
    (0x708A, 117, 103), (0x708E, 101, 186), (0x7092, 116, 100), (0x7098, 124, 156), (0x7099, 108, 115),
    (0x709A, 77, 137), (0x70A1, 110, 168), (0x70A4, 96, 127), (0x70AB, 121, 155), (0x70AC, 74, 163),
    (0x70AD, 118, 105), (0x70AF, 122, 102), (0x70B3, 91, 121), (0x70B7, 112, 128), (0x70B8, 108, 136),
    (0x70B9, 110, 131), (0x70C8, 85, 109), (0x70CB, 124, 142), (0x70CF, 103, 97), (0x70D8, 122, 180),
    (0x70D9, 84, 103), (0x70DD, 112, 182), (0x70DF, 101, 147), (0x70F1, 75, 158), (0x70F9, 119, 114),
    (0x70FD, 91, 171), (0x7104, 124, 118), (0x7109, 100, 170), (0x710C, 112, 160), (0x7119, 90, 140),
    (0x711A, 92, 141), (0x711E, 83, 136), (0x7121, 88, 173), (0x7126, 116, 101), (0x7130, 101, 187),
    (0x7136, 101, 148), (0x7147, 124, 136), (0x7149, 85, 97), (0x714A, 124, 127), (0x714C, 123, 147),
    (0x714E, 110, 97), (0x7150, 102, 124), (0x7156, 80, 174), (0x7159, 101, 149), (0x715C, 104, 178),
    (0x715E, 94, 112), (0x7164, 87, 160), (0x7165, 123, 122), (0x7166, 124, 111), (0x7167, 111, 142),
    (0x7169, 90, 161), (0x716C, 100, 137), (0x716E, 108, 116), (0x717D, 95, 131), (0x7184, 98, 152),
    (0x7189, 104, 187), (0x718A, 105, 104), (0x718F, 124, 119), (0x7192, 122, 103), (0x7194, 104, 130),
    (0x7199, 124, 183), (0x719F, 97, 153), (0x71A2, 91, 172), (0x71AC, 103, 98), (0x71B1, 101, 176),
    (0x71B9, 124, 184), (0x71BA, 124, 185), (0x71BE, 117, 127), (0x71C1, 102, 103), (0x71C3, 101, 151),
    (0x71C8, 83, 179), (0x71C9, 83, 137), (0x71CE, 85, 186), (0x71D0, 86, 178), (0x71D2, 96, 128),
    (0x71D4, 90, 162), (0x71D5, 101, 152), (0x71DF, 102, 125), (0x71E5, 111, 143), (0x71E6, 114, 126),
    (0x71E7, 97, 108), (0x71ED, 116, 119), (0x71EE, 95, 176), (0x71FB, 124, 120), (0x71FC, 98, 168),
    (0x71FE, 83, 103), (0x71FF, 103, 188), (0x7200, 121, 146), (0x7206, 119, 175), (0x7210, 85, 147),
    (0x721B, 84, 116), (0x722A, 111, 144), (0x722C, 118, 176), (0x722D, 109, 115), (0x7230, 105, 122),
    (0x7232, 105, 147), (0x7235, 108, 137), (0x7236, 92, 107), (0x723A, 100, 108), (0x723B, 124, 97),
    (0x723D, 94, 144), (0x723E, 107, 115), (0x7240, 94, 145), (0x7246, 108, 173), (0x7247, 119, 120),
    (0x7248, 118, 186), (0x724C, 119, 107), (0x7252, 115, 160), (0x7258, 83, 122), (0x7259, 99, 115),
    (0x725B, 104, 154), (0x725D, 93, 118), (0x725F, 88, 127), (0x7261, 88, 128), (0x7262, 85, 175),
    (0x7267, 88, 140), (0x7269, 89, 106), (0x7272, 94, 165), (0x7279, 118, 165), (0x727D, 75, 114),
    (0x7280, 94, 185), (0x7281, 86, 160), (0x72A2, 83, 123), (0x72A7, 124, 186), (0x72AC, 75, 115),
    (0x72AF, 90, 179), (0x72C0, 94, 146), (0x72C2, 77, 138), (0x72C4, 109, 154), (0x72CE, 99, 164),
    (0x72D0, 122, 143), (0x72D7, 78, 119), (0x72D9, 109, 131), (0x72E1, 77, 170), (0x72E9, 97, 109),
    (0x72F8, 86, 161), (0x72F9, 121, 181), (0x72FC, 84, 137), (0x72FD, 119, 108), (0x730A, 102, 153),
    (0x7316, 114, 169), (0x731B, 87, 173), (0x731C, 98, 132), (0x731D, 111, 177), (0x7325, 103, 165),
    (0x7329, 95, 186), (0x732A, 109, 132), (0x732B, 88, 158), (0x7336, 106, 98), (0x7337, 106, 99),
    (0x733E, 123, 130), (0x733F, 105, 123), (0x7344, 103, 107), (0x7345, 93, 162), (0x7350, 108, 175),
    (0x7352, 103, 99), (0x7357, 78, 177), (0x7368, 83, 124), (0x736A, 123, 170), (0x7370, 102, 126),
    (0x7372, 123, 178), (0x7375, 85, 116), (0x7378, 97, 110), (0x737A, 82, 119), (0x737B, 121, 140),
    (0x7384, 121, 156), (0x7386, 108, 117), (0x7387, 96, 163), (0x7389, 103, 108), (0x738B, 103, 157),
    (0x738E, 110, 169), (0x7394, 115, 125), (0x7396, 78, 120), (0x7397, 104, 155), (0x7398, 80, 108),
    (0x739F, 89, 135), (0x73A7, 106, 137), (0x73A9, 103, 140), (0x73AD, 93, 119), (0x73B2, 85, 124),
    (0x73B3, 82, 165), (0x73B9, 121, 157), (0x73C0, 89, 150), (0x73C2, 73, 113), (0x73C9, 89, 136),
    (0x73CA, 94, 102), (0x73CC, 120, 115), (0x73CD, 113, 146), (0x73CF, 73, 132), (0x73D6, 77, 139),
    (0x73D9, 76, 181), (0x73DD, 124, 112), (0x73DE, 84, 104), (0x73E0, 112, 129), (0x73E3, 97, 169),
    (0x73E4, 91, 138), (0x73E5, 107, 116), (0x73E6, 121, 128), (0x73E9, 122, 104), (0x73EA, 79, 104),
    (0x73ED, 89, 172), (0x73F7, 88, 174), (0x73F9, 95, 187), (0x73FD, 110, 170), (0x73FE, 121, 158),
    (0x7401, 95, 132), (0x7403, 78, 121), (0x7405, 84, 138), (0x7406, 86, 162), (0x7407, 97, 111),
    (0x7409, 86, 120), (0x7413, 103, 141), (0x741B, 117, 154), (0x7420, 110, 98), (0x7421, 97, 154),
    (0x7422, 117, 188), (0x7425, 122, 144), (0x7426, 80, 109), (0x7428, 76, 164), (0x742A, 80, 110),
    (0x742B, 91, 173), (0x742C, 103, 142), (0x742E, 111, 185), (0x742F, 77, 117), (0x7430, 101, 188),
    (0x7433, 86, 187), (0x7434, 79, 150), (0x7435, 92, 181), (0x7436, 118, 177), (0x7438, 117, 189),
    (0x743A, 90, 183), (0x743F, 122, 170), (0x7440, 104, 156), (0x7441, 88, 129), (0x7443, 116, 178),
    (0x7444, 95, 133), (0x744B, 105, 148), (0x7455, 120, 130), (0x7457, 105, 124), (0x7459, 81, 133),
    (0x745A, 122, 145), (0x745B, 102, 128), (0x745C, 106, 101), (0x745E, 94, 186), (0x745F, 98, 98),
    (0x7460, 86, 121), (0x7462, 104, 131), (0x7464, 103, 189), (0x7465, 103, 111), (0x7468, 113, 147),
    (0x7469, 122, 105), (0x746A, 87, 101), (0x746F, 84, 139), (0x747E, 79, 136), (0x7482, 80, 111),
    (0x7483, 86, 163), (0x7487, 95, 134), (0x7489, 85, 98), (0x748B, 108, 176), (0x7498, 86, 179),
    (0x749C, 123, 148), (0x749E, 89, 151), (0x749F, 75, 159), (0x74A1, 113, 148), (0x74A3, 80, 112),
    (0x74A5, 75, 160), (0x74A7, 90, 189), (0x74A8, 114, 127), (0x74AA, 111, 145), (0x74B0, 123, 123),
    (0x74B2, 97, 112), (0x74B5, 101, 101), (0x74B9, 97, 155), (0x74BD, 94, 158), (0x74BF, 95, 135),
    (0x74C6, 113, 175), (0x74CA, 75, 161), (0x74CF, 85, 170), (0x74D4, 102, 130), (0x74D8, 77, 118),
    (0x74DA, 114, 128), (0x74DC, 76, 190), (0x74E0, 122, 146), (0x74E2, 119, 184), (0x74E3, 118, 187),
    (0x74E6, 103, 127), (0x74EE, 103, 119), (0x74F7, 108, 118), (0x7501, 91, 122), (0x7504, 75, 116),
    (0x7511, 112, 183), (0x7515, 103, 120), (0x7518, 73, 182), (0x751A, 99, 100), (0x751B, 115, 150),
    (0x751F, 94, 166), (0x7523, 94, 103), (0x7525, 94, 167), (0x7526, 96, 129), (0x7528, 104, 132),
    (0x752B, 91, 139), (0x752C, 104, 133), (0x7530, 110, 99), (0x7531, 106, 102), (0x7532, 74, 99),
    (0x7533, 98, 169), (0x7537, 80, 187), (0x7538, 110, 100), (0x753A, 110, 171), (0x7547, 79, 116),
    (0x754C, 76, 99), (0x754F, 103, 166), (0x7551, 110, 101), (0x7553, 82, 140), (0x7554, 89, 173),
    (0x7559, 86, 122), (0x755B, 113, 149), (0x755C, 116, 165), (0x755D, 88, 175), (0x7562, 120, 116),
    (0x7565, 84, 148), (0x7566, 124, 143), (0x756A, 90, 163), (0x756F, 112, 161), (0x7570, 107, 118),
    (0x7575, 122, 190), (0x7576, 82, 151), (0x7578, 80, 113), (0x757A, 74, 113), (0x757F, 80, 114),
    (0x7586, 74, 114), (0x7587, 112, 130), (0x758A, 115, 161), (0x758B, 120, 117), (0x758E, 96, 131),
    (0x758F, 96, 130), (0x7591, 106, 183), (0x759D, 94, 104), (0x75A5, 74, 138), (0x75AB, 101, 121),
    (0x75B1, 119, 158), (0x75B2, 120, 106), (0x75B3, 73, 183), (0x75B5, 108, 119), (0x75B8, 82, 120),
    (0x75B9, 113, 150), (0x75BC, 83, 153), (0x75BD, 109, 133), (0x75BE, 113, 176), (0x75C2, 73, 114),
    (0x75C5, 91, 123), (0x75C7, 112, 184), (0x75CD, 107, 119), (0x75D2, 100, 138), (0x75D4, 117, 128),
    (0x75D5, 124, 157), (0x75D8, 83, 163), (0x75D9, 75, 162), (0x75DB, 118, 148), (0x75E2, 86, 165),
    (0x75F0, 82, 131), (0x75F2, 87, 102), (0x75F4, 117, 129), (0x75FA, 92, 182), (0x75FC, 76, 128),
    (0x7600, 100, 156), (0x760D, 100, 139), (0x7619, 96, 132), (0x761F, 103, 112), (0x7620, 115, 112),
    (0x7621, 114, 170), (0x7622, 89, 174), (0x7624, 86, 123), (0x7626, 97, 113), (0x763B, 86, 106),
    (0x7642, 85, 187), (0x764C, 99, 159), (0x764E, 73, 150), (0x7652, 106, 104), (0x7656, 90, 190),
    (0x7661, 117, 130), (0x7664, 110, 123), (0x7669, 83, 189), (0x766C, 95, 136), (0x7670, 103, 121),
    (0x7672, 110, 102), (0x7678, 76, 100), (0x767B, 83, 180), (0x767C, 90, 97), (0x767D, 90, 156),
    (0x767E, 90, 157), (0x7684, 109, 156), (0x7686, 74, 139), (0x7687, 123, 149), (0x768E, 77, 171),
    (0x7690, 76, 129), (0x7693, 122, 147), (0x76AE, 120, 107), (0x76BA, 116, 148), (0x76BF, 88, 105),
    (0x76C2, 104, 157), (0x76C3, 90, 141), (0x76C6, 92, 142), (0x76C8, 102, 131), (0x76CA, 107, 140),
    (0x76D2, 120, 172), (0x76D6, 74, 140), (0x76DB, 95, 188), (0x76DC, 83, 104), (0x76DE, 108, 147),
    (0x76DF, 87, 175), (0x76E1, 113, 151), (0x76E3, 73, 184), (0x76E4, 89, 175), (0x76E7, 85, 148),
    (0x76EE, 88, 141), (0x76F2, 87, 174), (0x76F4, 113, 129), (0x76F8, 94, 147), (0x76FC, 89, 176),
    (0x76FE, 97, 170), (0x7701, 95, 189), (0x7704, 87, 184), (0x7708, 118, 111), (0x7709, 89, 118),
    (0x770B, 73, 151), (0x771E, 113, 152), (0x7720, 87, 185), (0x7729, 121, 159), (0x7737, 78, 175),
    (0x7738, 88, 130), (0x773A, 111, 146), (0x773C, 99, 145), (0x7740, 114, 119), (0x774D, 121, 160),
    (0x775B, 110, 172), (0x7761, 97, 114), (0x7763, 83, 125), (0x7766, 88, 142), (0x776B, 115, 162),
    (0x7779, 83, 105), (0x777E, 76, 130), (0x777F, 102, 154), (0x778B, 113, 153), (0x7791, 88, 106),
    (0x779E, 87, 126), (0x77A5, 91, 109), (0x77AC, 97, 171), (0x77AD, 85, 188), (0x77B0, 73, 185),
    (0x77B3, 83, 154), (0x77BB, 115, 151), (0x77BC, 75, 97), (0x77BF, 78, 122), (0x77D7, 116, 120),
    (0x77DB, 88, 131), (0x77DC, 79, 168), (0x77E2, 98, 133), (0x77E3, 106, 184), (0x77E5, 113, 113),
    (0x77E9, 78, 123), (0x77ED, 82, 109), (0x77EE, 103, 161), (0x77EF, 77, 172), (0x77F3, 95, 116),
    (0x7802, 93, 163), (0x7812, 92, 183), (0x7825, 113, 114), (0x7826, 114, 182), (0x7827, 117, 155),
    (0x782C, 86, 190), (0x7832, 119, 159), (0x7834, 118, 178), (0x7845, 79, 105), (0x784F, 101, 154),
    (0x785D, 116, 102), (0x786B, 86, 124), (0x786C, 75, 163), (0x786F, 101, 155), (0x787C, 92, 157),
    (0x7881, 80, 115), (0x7887, 110, 173), (0x788C, 85, 158), (0x788D, 99, 180), (0x788E, 96, 175),
    (0x7891, 92, 184), (0x7897, 103, 143), (0x78A3, 73, 165), (0x78A7, 91, 97), (0x78A9, 95, 117),
    (0x78BA, 123, 108), (0x78BB, 123, 109), (0x78BC, 87, 103), (0x78C1, 108, 120), (0x78C5, 90, 118),
    (0x78CA, 85, 176), (0x78CB, 114, 111), (0x78CE, 76, 101), (0x78D0, 89, 177), (0x78E8, 87, 104),
    (0x78EC, 75, 164), (0x78EF, 80, 116), (0x78F5, 73, 152), (0x78FB, 89, 178), (0x7901, 116, 103),
    (0x790E, 116, 104), (0x7916, 101, 102), (0x792A, 84, 172), (0x792B, 84, 184), (0x792C, 89, 179),
    (0x793A, 98, 134), (0x793E, 93, 164), (0x7940, 93, 165), (0x7941, 80, 117), (0x7947, 80, 118),
    (0x7948, 80, 119), (0x7949, 113, 115), (0x7950, 104, 158), (0x7956, 111, 147), (0x7957, 113, 116),
    (0x795A, 111, 148), (0x795B, 74, 164), (0x795C, 122, 148), (0x795D, 116, 166), (0x795E, 98, 170),
    (0x7960, 93, 166), (0x7965, 94, 148), (0x7968, 119, 185), (0x796D, 111, 110), (0x797A, 80, 120),
    (0x797F, 85, 159), (0x7981, 79, 151), (0x798D, 123, 97), (0x798E, 110, 174), (0x798F, 91, 152),
    (0x7991, 104, 159), (0x79A6, 100, 157), (0x79A7, 124, 187), (0x79AA, 95, 137), (0x79AE, 85, 137),
    (0x79B1, 83, 106), (0x79B3, 100, 140), (0x79B9, 104, 160), (0x79BD, 79, 152), (0x79BE, 123, 98),
    (0x79BF, 83, 126), (0x79C0, 97, 115), (0x79C1, 93, 167), (0x79C9, 91, 124), (0x79CA, 81, 118),
    (0x79CB, 116, 149), (0x79D1, 77, 97), (0x79D2, 116, 105), (0x79D5, 92, 185), (0x79D8, 92, 186),
    (0x79DF, 111, 149), (0x79E4, 117, 159), (0x79E6, 113, 154), (0x79E7, 99, 171), (0x79E9, 113, 177),
    (0x79FB, 107, 121), (0x7A00, 124, 188), (0x7A05, 96, 106), (0x7A08, 73, 153), (0x7A0B, 110, 175),
    (0x7A0D, 116, 106), (0x7A14, 107, 185), (0x7A17, 119, 109), (0x7A19, 113, 130), (0x7A1A, 117, 131),
    (0x7A1C, 86, 146), (0x7A1F, 120, 98), (0x7A20, 111, 150), (0x7A2E, 111, 186), (0x7A31, 117, 160),
    (0x7A36, 104, 179), (0x7A37, 113, 131), (0x7A3B, 83, 107), (0x7A3C, 73, 115), (0x7A3D, 76, 102),
    (0x7A3F, 76, 131), (0x7A40, 76, 154), (0x7A46, 88, 143), (0x7A49, 117, 132), (0x7A4D, 109, 157),
    (0x7A4E, 102, 132), (0x7A57, 97, 116), (0x7A61, 94, 162), (0x7A62, 102, 155), (0x7A69, 103, 113),
    (0x7A6B, 123, 110), (0x7A70, 100, 141), (0x7A74, 121, 171), (0x7A76, 78, 124), (0x7A79, 78, 162),
    (0x7A7A, 76, 182), (0x7A7D, 110, 176), (0x7A7F, 115, 126), (0x7A81, 83, 141), (0x7A84, 114, 120),
    (0x7A88, 104, 97), (0x7A92, 113, 178), (0x7A93, 114, 171), (0x7A95, 111, 151), (0x7A98, 78, 151),
    (0x7A9F, 78, 159), (0x7AA9, 103, 128), (0x7AAA, 103, 129), (0x7AAE, 78, 163), (0x7AAF, 104, 98),
    (0x7ABA, 79, 106), (0x7AC4, 114, 129), (0x7AC5, 79, 107), (0x7AC7, 83, 164), (0x7ACA, 110, 124),
    (0x7ACB, 87, 97), (0x7AD7, 88, 159), (0x7AD9, 114, 151), (0x7ADD, 91, 125), (0x7ADF, 75, 165),
    (0x7AE0, 108, 177), (0x7AE3, 112, 162), (0x7AE5, 83, 155), (0x7AEA, 97, 117), (0x7AED, 73, 166),
    (0x7AEF, 82, 110), (0x7AF6, 75, 166), (0x7AF9, 112, 147), (0x7AFA, 116, 167), (0x7AFF, 73, 154),
    (0x7B0F, 122, 174), (0x7B11, 96, 133), (0x7B19, 94, 169), (0x7B1B, 109, 158), (0x7B1E, 118, 130),
    (0x7B20, 87, 98), (0x7B26, 92, 108), (0x7B2C, 111, 111), (0x7B2D, 85, 125), (0x7B39, 96, 107),
    (0x7B46, 120, 118), (0x7B49, 83, 181), (0x7B4B, 79, 137), (0x7B4C, 110, 103), (0x7B4D, 97, 172),
    (0x7B4F, 90, 170), (0x7B50, 77, 140), (0x7B51, 116, 168), (0x7B52, 118, 149), (0x7B54, 82, 141),
    (0x7B56, 114, 190), (0x7B60, 79, 117), (0x7B6C, 95, 190), (0x7B6E, 94, 187), (0x7B75, 101, 157),
    (0x7B7D, 103, 100), (0x7B87, 74, 141), (0x7B8B, 110, 104), (0x7B8F, 109, 116), (0x7B94, 89, 152),
    (0x7B95, 80, 121), (0x7B97, 94, 105), (0x7B9A, 114, 112), (0x7B9D, 75, 132), (0x7BA1, 77, 119),
    (0x7BAD, 110, 105), (0x7BB1, 94, 149), (0x7BB4, 108, 151), (0x7BB8, 109, 134), (0x7BC0, 110, 125),
    (0x7BC1, 123, 150), (0x7BC4, 90, 180), (0x7BC6, 110, 106), (0x7BC7, 119, 121), (0x7BC9, 116, 169),
    (0x7BD2, 98, 153), (0x7BE0, 96, 134), (0x7BE4, 83, 127), (0x7BE9, 93, 168), (0x7C07, 111, 170),
    (0x7C12, 114, 130), (0x7C1E, 82, 111), (0x7C21, 73, 155), (0x7C27, 123, 151), (0x7C2A, 108, 152),
    (0x7C2B, 96, 135), (0x7C3D, 115, 152), (0x7C3E, 85, 115), (0x7C3F, 92, 109), (0x7C43, 84, 126),
    (0x7C4C, 112, 131), (0x7C4D, 109, 159), (0x7C60, 85, 171), (0x7C64, 115, 153), (0x7C6C, 86, 166),
    (0x7C73, 89, 119), (0x7C83, 92, 187), (0x7C89, 92, 143), (0x7C92, 87, 99), (0x7C95, 89, 153),
    (0x7C97, 111, 152), (0x7C98, 110, 132), (0x7C9F, 96, 152), (0x7CA5, 112, 148), (0x7CA7, 108, 178),
    (0x7CAE, 84, 155), (0x7CB1, 84, 156), (0x7CB2, 114, 132), (0x7CB3, 74, 151), (0x7CB9, 97, 118),
    (0x7CBE, 110, 177), (0x7CCA, 122, 149), (0x7CD6, 82, 152), (0x7CDE, 92, 144), (0x7CDF, 111, 153),
    (0x7CE0, 74, 115), (0x7CE7, 84, 157), (0x7CFB, 76, 103), (0x7CFE, 79, 108), (0x7D00, 80, 122),
    (0x7D02, 112, 132), (0x7D04, 100, 115), (0x7D05, 122, 181), (0x7D06, 104, 161), (0x7D07, 124, 160),
    (0x7D08, 123, 124), (0x7D0A, 89, 98), (0x7D0B, 89, 99), (0x7D0D, 81, 97), (0x7D10, 81, 175),
    (0x7D14, 97, 173), (0x7D17, 93, 169), (0x7D18, 77, 156), (0x7D19, 113, 117), (0x7D1A, 79, 164),
    (0x7D1B, 92, 145), (0x7D20, 96, 136), (0x7D21, 90, 119), (0x7D22, 94, 163), (0x7D2B, 108, 121),
    (0x7D2C, 112, 133), (0x7D2E, 114, 143), (0x7D2F, 86, 107), (0x7D30, 96, 108), (0x7D33, 98, 171),
    (0x7D35, 109, 135), (0x7D39, 96, 137), (0x7D3A, 73, 186), (0x7D42, 111, 187), (0x7D43, 121, 161),
    (0x7D44, 111, 154), (0x7D45, 75, 167), (0x7D46, 89, 180), (0x7D50, 75, 127), (0x7D5E, 77, 173),
    (0x7D61, 84, 105), (0x7D62, 121, 162), (0x7D66, 79, 165), (0x7D68, 106, 150), (0x7D6A, 107, 159),
    (0x7D6E, 94, 188), (0x7D71, 118, 150), (0x7D72, 93, 170), (0x7D73, 74, 116), (0x7D76, 110, 126),
    (0x7D79, 75, 117), (0x7D7F, 78, 125), (0x7D8E, 110, 178), (0x7D8F, 97, 119), (0x7D93, 75, 168),
    (0x7D9C, 111, 188), (0x7DA0, 85, 160), (0x7DA2, 112, 134), (0x7DAC, 97, 120), (0x7DAD, 106, 107),
    (0x7DB1, 74, 117), (0x7DB2, 87, 145), (0x7DB4, 115, 142), (0x7DB5, 114, 183), (0x7DB8, 86, 134),
    (0x7DBA, 80, 123), (0x7DBB, 118, 106), (0x7DBD, 108, 138), (0x7DBE, 86, 147), (0x7DBF, 87, 186),
    (0x7DC7, 117, 133), (0x7DCA, 80, 140), (0x7DCB, 92, 188), (0x7DD6, 94, 189), (0x7DD8, 120, 165),
    (0x7DDA, 95, 138), (0x7DDD, 113, 189), (0x7DDE, 82, 112), (0x7DE0, 115, 179), (0x7DE1, 89, 137),
    (0x7DE3, 101, 158), (0x7DE8, 119, 122), (0x7DE9, 103, 144), (0x7DEC, 87, 187), (0x7DEF, 105, 149),
    (0x7DF4, 85, 99), (0x7DFB, 117, 134), (0x7E09, 113, 155), (0x7E0A, 99, 188), (0x7E15, 103, 114),
    (0x7E1B, 89, 154), (0x7E1D, 113, 156), (0x7E1E, 122, 150), (0x7E1F, 104, 114), (0x7E21, 109, 109),
    (0x7E23, 121, 163), (0x7E2B, 91, 174), (0x7E2E, 116, 170), (0x7E2F, 101, 160), (0x7E31, 111, 189),
    (0x7E37, 86, 108), (0x7E3D, 116, 133), (0x7E3E, 109, 160), (0x7E41, 90, 165), (0x7E43, 92, 158),
    (0x7E46, 88, 176), (0x7E47, 104, 99), (0x7E52, 112, 185), (0x7E54, 113, 132), (0x7E55, 95, 139),
    (0x7E5E, 104, 100), (0x7E61, 97, 121), (0x7E69, 98, 113), (0x7E6A, 123, 171), (0x7E6B, 76, 104),
    (0x7E6D, 75, 118), (0x7E70, 111, 155), (0x7E79, 101, 122), (0x7E7C, 76, 105), (0x7E82, 114, 131),
    (0x7E8C, 96, 153), (0x7E8F, 110, 107), (0x7E93, 102, 133), (0x7E96, 95, 169), (0x7E98, 114, 133),
    (0x7E9B, 83, 128), (0x7E9C, 84, 127), (0x7F36, 92, 110), (0x7F38, 120, 188), (0x7F3A, 75, 128),
    (0x7F4C, 100, 98), (0x7F50, 77, 120), (0x7F54, 87, 146), (0x7F55, 120, 150), (0x7F6A, 112, 106),
    (0x7F6B, 77, 145), (0x7F6E, 117, 135), (0x7F70, 90, 171), (0x7F72, 94, 190), (0x7F75, 87, 161),
    (0x7F77, 118, 179), (0x7F79, 86, 167), (0x7F85, 83, 190), (0x7F88, 80, 124), (0x7F8A, 100, 143),
    (0x7F8C, 74, 118), (0x7F8E, 89, 120), (0x7F94, 76, 132), (0x7F9A, 85, 126), (0x7F9E, 97, 122),
    (0x7FA4, 78, 152), (0x7FA8, 95, 140), (0x7FA9, 106, 185), (0x7FB2, 124, 189), (0x7FB8, 86, 168),
    (0x7FB9, 74, 152), (0x7FBD, 104, 162), (0x7FC1, 103, 122), (0x7FC5, 98, 135), (0x7FCA, 107, 141),
    (0x7FCC, 107, 142), (0x7FCE, 85, 127), (0x7FD2, 98, 103), (0x7FD4, 94, 150), (0x7FD5, 124, 168),
    (0x7FDF, 109, 161), (0x7FE0, 117, 104), (0x7FE1, 92, 189), (0x7FE9, 119, 123), (0x7FEB, 103, 145),
    (0x7FF0, 120, 151), (0x7FF9, 77, 174), (0x7FFC, 107, 143), (0x8000, 104, 101), (0x8001, 85, 149),
    (0x8003, 76, 133), (0x8005, 108, 122), (0x8006, 80, 125), (0x8009, 78, 126), (0x800C, 107, 123),
    (0x8010, 81, 113), (0x8015, 75, 169), (0x8017, 88, 132), (0x8018, 104, 188), (0x802D, 80, 126),
    (0x8033, 107, 124), (0x8036, 100, 109), (0x803D, 118, 112), (0x803F, 75, 170), (0x8043, 82, 132),
    (0x8046, 85, 128), (0x804A, 85, 189), (0x8056, 96, 97), (0x8058, 93, 125), (0x805A, 117, 105),
    (0x805E, 89, 100), (0x806F, 85, 100), (0x8070, 116, 134), (0x8072, 96, 98), (0x8073, 104, 134),
    (0x8077, 113, 133), (0x807D, 115, 169), (0x807E, 85, 172), (0x807F, 106, 147), (0x8084, 107, 125),
    (0x8085, 97, 156), (0x8086, 93, 171), (0x8087, 111, 156), (0x8089, 106, 127), (0x808B, 86, 142),
    (0x808C, 80, 127), (0x8096, 116, 107), (0x809B, 120, 189), (0x809D, 73, 156), (0x80A1, 76, 134),
    (0x80A2, 113, 118), (0x80A5, 92, 190), (0x80A9, 75, 119), (0x80AA, 90, 120), (0x80AF, 79, 169),
    (0x80B1, 77, 157), (0x80B2, 106, 128), (0x80B4, 124, 98), (0x80BA, 119, 139), (0x80C3, 105, 150),
    (0x80C4, 112, 112), (0x80CC, 90, 142), (0x80CE, 118, 131), (0x80DA, 90, 143), (0x80DB, 74, 100),
    (0x80DE, 119, 160), (0x80E1, 122, 151), (0x80E4, 106, 138), (0x80E5, 95, 97), (0x80F1, 77, 141),
    (0x80F4, 83, 156), (0x80F8, 124, 152), (0x80FD, 81, 182), (0x8102, 113, 119), (0x8105, 121, 182),
    (0x8106, 117, 106), (0x8107, 121, 183), (0x8108, 87, 166), (0x810A, 115, 113), (0x8118, 103, 146),
    (0x811A, 73, 133), (0x811B, 75, 171), (0x8123, 97, 174), (0x8129, 97, 123), (0x812B, 118, 109),
    (0x812F, 119, 161), (0x8139, 114, 172), (0x813E, 93, 97), (0x814B, 99, 189), (0x814E, 98, 172),
    (0x8150, 92, 111), (0x8151, 92, 112), (0x8154, 74, 119), (0x8155, 103, 147), (0x8165, 96, 99),
    (0x8166, 81, 160), (0x816B, 111, 190), (0x8170, 104, 102), (0x8171, 74, 178), (0x8178, 108, 179),
    (0x8179, 91, 153), (0x817A, 95, 141), (0x817F, 118, 154), (0x8180, 90, 121), (0x8188, 75, 110),
    (0x818A, 89, 155), (0x818F, 76, 135), (0x819A, 92, 113), (0x819C, 87, 111), (0x819D, 98, 99),
    (0x81A0, 77, 175), (0x81A3, 113, 179), (0x81A8, 119, 115), (0x81B3, 95, 142), (0x81B5, 116, 189),
    (0x81BA, 106, 172), (0x81BD, 82, 133), (0x81BE, 123, 172), (0x81BF, 81, 155), (0x81C0, 83, 171),
    (0x81C2, 93, 98), (0x81C6, 100, 166), (0x81CD, 111, 112), (0x81D8, 84, 132), (0x81DF, 108, 180),
    (0x81E3, 98, 173), (0x81E5, 103, 130), (0x81E7, 108, 181), (0x81E8, 86, 188), (0x81EA, 108, 123),
    (0x81ED, 117, 107), (0x81F3, 113, 120), (0x81F4, 117, 136), (0x81FA, 82, 166), (0x81FB, 113, 157),
    (0x81FC, 78, 127), (0x81FE, 106, 108), (0x8205, 78, 128), (0x8207, 101, 104), (0x8208, 124, 169),
    (0x820A, 78, 129), (0x820C, 95, 159), (0x820D, 93, 172), (0x8212, 95, 98), (0x821B, 115, 127),
    (0x821C, 97, 175), (0x821E, 88, 177), (0x821F, 112, 135), (0x8221, 74, 120), (0x822A, 120, 190),
    (0x822B, 90, 122), (0x822C, 89, 181), (0x8235, 117, 172), (0x8236, 89, 156), (0x8237, 121, 164),
    (0x8239, 95, 143), (0x8240, 92, 114), (0x8245, 101, 105), (0x8247, 110, 179), (0x8259, 114, 173),
    (0x8264, 106, 186), (0x8266, 120, 166), (0x826E, 73, 157), (0x826F, 84, 158), (0x8271, 73, 158),
    (0x8272, 94, 164), (0x8276, 101, 189), (0x8278, 116, 108), (0x827E, 99, 181), (0x828B, 104, 163),
    (0x828D, 108, 139), (0x828E, 78, 164), (0x8292, 87, 147), (0x8299, 92, 115), (0x829A, 83, 172),
    (0x829D, 113, 121), (0x829F, 94, 119), (0x82A5, 74, 142), (0x82A6, 122, 152), (0x82A9, 79, 153),
    (0x82AC, 92, 146), (0x82AD, 118, 180), (0x82AE, 102, 156), (0x82AF, 99, 101), (0x82B1, 123, 99),
    (0x82B3, 90, 123), (0x82B7, 113, 122), (0x82B8, 104, 189), (0x82B9, 79, 138), (0x82BB, 116, 150),
    (0x82BC, 88, 133), (0x82BD, 99, 116), (0x82BF, 108, 103), (0x82D1, 105, 125), (0x82D2, 101, 190),
    (0x82D4, 118, 132), (0x82D5, 116, 109), (0x82D7, 88, 160), (0x82DB, 73, 116), (0x82DE, 119, 162),
    (0x82DF, 78, 130), (0x82E1, 107, 126), (0x82E5, 100, 116), (0x82E6, 76, 136), (0x82E7, 109, 136),
    (0x82F1, 102, 136), (0x82FD, 76, 137), (0x82FE, 120, 119), (0x8301, 112, 168), (0x8302, 88, 178),
    (0x8303, 90, 181), (0x8304, 73, 117), (0x8305, 88, 134), (0x8309, 87, 137), (0x8317, 88, 107),
    (0x8328, 108, 124), (0x832B, 87, 148), (0x832F, 91, 154), (0x8331, 97, 124), (0x8334, 123, 173),
    (0x8335, 107, 160), (0x8336, 81, 190), (0x8338, 104, 135), (0x8339, 101, 106), (0x8340, 97, 176),
    (0x8347, 121, 123), (0x8349, 116, 110), (0x834A, 122, 106), (0x834F, 107, 187), (0x8351, 107, 127),
    (0x8352, 123, 152), (0x8373, 83, 165), (0x8377, 120, 131), (0x837B, 109, 162), (0x8389, 86, 169),
    (0x838A, 108, 182), (0x838E, 93, 173), (0x8396, 75, 172), (0x8398, 98, 174), (0x839E, 103, 148),
    (0x83A2, 121, 184), (0x83A9, 92, 116), (0x83AA, 99, 117), (0x83AB, 87, 112), (0x83BD, 87, 149),
    (0x83C1, 115, 170), (0x83C5, 77, 121), (0x83C9, 85, 161), (0x83CA, 78, 146), (0x83CC, 79, 118),
    (0x83D3, 77, 98), (0x83D6, 114, 174), (0x83DC, 114, 184), (0x83E9, 91, 140), (0x83EB, 79, 139),
    (0x83EF, 123, 100), (0x83F0, 76, 138), (0x83F1, 86, 148), (0x83F2, 93, 99), (0x83F4, 99, 160),
    (0x83F9, 109, 137), (0x83FD, 97, 157), (0x8403, 116, 190), (0x8404, 83, 108), (0x840A, 84, 145),
    (0x840C, 87, 176), (0x840D, 119, 131), (0x840E, 105, 151), (0x8429, 116, 151), (0x842C, 87, 127),
    (0x8431, 124, 128), (0x8438, 106, 109), (0x843D, 84, 106), (0x8449, 102, 104), (0x8457, 109, 138),
    (0x845B, 73, 167), (0x8461, 119, 163), (0x8463, 83, 157), (0x8466, 105, 152), (0x846B, 122, 153),
    (0x846C, 108, 183), (0x846F, 100, 117), (0x8475, 79, 109), (0x847A, 112, 177), (0x8490, 97, 125),
    (0x8494, 98, 136), (0x8499, 88, 149), (0x849C, 94, 106), (0x84A1, 90, 124), (0x84B2, 119, 164),
    (0x84B8, 112, 186), (0x84BB, 100, 118), (0x84BC, 114, 175), (0x84BF, 122, 154), (0x84C0, 96, 160),
    (0x84C2, 88, 108), (0x84C4, 116, 171), (0x84C6, 95, 118), (0x84C9, 104, 136), (0x84CB, 74, 143),
    (0x84CD, 98, 137), (0x84D1, 93, 174), (0x84DA, 97, 126), (0x84EC, 91, 175), (0x84EE, 85, 101),
    (0x84F4, 97, 177), (0x84FC, 85, 190), (0x8511, 88, 97), (0x8513, 87, 128), (0x8514, 91, 155),
    (0x8517, 108, 125), (0x8518, 94, 120), (0x851A, 105, 101), (0x851E, 86, 109), (0x8521, 114, 185),
    (0x8523, 108, 184), (0x8525, 116, 135), (0x852C, 96, 138), (0x852D, 106, 163), (0x852F, 113, 158),
    (0x853D, 119, 140), (0x853F, 105, 153), (0x8541, 82, 134), (0x8543, 90, 166), (0x8549, 116, 111),
    (0x854E, 77, 176), (0x8553, 104, 190), (0x8559, 122, 118), (0x8563, 97, 178), (0x8568, 78, 178),
    (0x8569, 118, 121), (0x856A, 88, 179), (0x856D, 96, 139), (0x8584, 89, 157), (0x8587, 89, 121),
    (0x858F, 106, 187), (0x8591, 74, 121), (0x8594, 108, 185), (0x859B, 95, 160), (0x85A6, 115, 128),
    (0x85A8, 124, 124), (0x85A9, 94, 113), (0x85AA, 98, 175), (0x85AF, 95, 99), (0x85B0, 124, 121),
    (0x85BA, 111, 113), (0x85C1, 76, 139), (0x85C9, 108, 126), (0x85CD, 84, 128), (0x85CE, 98, 176),
    (0x85CF, 108, 186), (0x85D5, 104, 164), (0x85DC, 84, 173), (0x85DD, 102, 157), (0x85E4, 83, 182),
    (0x85E5, 100, 119), (0x85E9, 90, 167), (0x85EA, 97, 127), (0x85F7, 109, 139), (0x85FA, 86, 180),
    (0x85FB, 111, 157), (0x85FF, 77, 107), (0x8602, 102, 158), (0x8606, 85, 150), (0x8607, 96, 140),
    (0x860A, 103, 115), (0x8616, 100, 174), (0x8617, 91, 98), (0x861A, 95, 144), (0x862D, 84, 117),
    (0x863F, 84, 97), (0x864E, 122, 155), (0x8650, 120, 139), (0x8654, 74, 179), (0x8655, 115, 101),
    (0x865B, 121, 136), (0x865C, 85, 151), (0x865E, 104, 165), (0x865F, 122, 156), (0x8667, 124, 144),
    (0x8679, 122, 182), (0x868A, 89, 101), (0x868C, 90, 125), (0x8693, 107, 162), (0x86A3, 76, 183),
    (0x86A4, 111, 158), (0x86A9, 117, 137), (0x86C7, 93, 175), (0x86CB, 82, 113), (0x86D4, 123, 174),
    (0x86D9, 103, 131), (0x86DB, 112, 136), (0x86DF, 77, 177), (0x86E4, 120, 173), (0x86ED, 113, 180),
    (0x86FE, 99, 118), (0x8700, 116, 121), (0x8702, 91, 176), (0x8703, 98, 177), (0x8708, 103, 101),
    (0x8718, 113, 123), (0x871A, 93, 100), (0x871C, 89, 140), (0x874E, 73, 169), (0x8755, 98, 154),
    (0x8757, 123, 153), (0x875F, 105, 154), (0x8766, 120, 132), (0x8768, 98, 100), (0x8774, 122, 157),
    (0x8776, 110, 138), (0x8778, 103, 132), (0x8782, 84, 140), (0x878D, 106, 151), (0x879F, 88, 109),
    (0x87A2, 122, 107), (0x87B3, 82, 153), (0x87BA, 84, 98), (0x87C4, 117, 158), (0x87E0, 89, 182),
    (0x87EC, 95, 145), (0x87EF, 104, 104), (0x87F2, 116, 185), (0x87F9, 121, 111), (0x87FB, 106, 188),
    (0x87FE, 95, 170), (0x8805, 98, 114), (0x881F, 84, 133), (0x8822, 112, 163), (0x8823, 84, 174),
    (0x8831, 76, 140), (0x8836, 108, 153), (0x883B, 87, 129), (0x8840, 121, 172), (0x8846, 112, 171),
    (0x884C, 121, 124), (0x884D, 101, 162), (0x8852, 121, 165), (0x8853, 97, 186), (0x8857, 73, 118),
    (0x8859, 99, 119), (0x885B, 105, 155), (0x885D, 116, 186), (0x8861, 122, 108), (0x8862, 78, 131),
    (0x8863, 106, 189), (0x8868, 119, 186), (0x886B, 94, 121), (0x8870, 96, 177), (0x8872, 81, 100),
    (0x8877, 116, 187), (0x887E, 79, 154), (0x887F, 79, 155), (0x8881, 105, 126), (0x8882, 88, 113),
    (0x8888, 73, 119), (0x888B, 82, 167), (0x888D, 119, 165), (0x8892, 82, 114), (0x8896, 97, 128),
    (0x8897, 113, 159), (0x889E, 76, 165), (0x88AB, 120, 108), (0x88B4, 76, 141), (0x88C1, 109, 110),
    (0x88C2, 85, 110), (0x88CF, 86, 170), (0x88D4, 102, 160), (0x88D5, 106, 110), (0x88D9, 78, 153),
    (0x88DC, 91, 141), (0x88DD, 108, 187), (0x88DF, 93, 176), (0x88E1, 86, 171), (0x88E8, 93, 101),
    (0x88F3, 94, 151), (0x88F4, 90, 144), (0x88F5, 90, 145), (0x88F8, 84, 99), (0x88FD, 111, 114),
    (0x8907, 91, 156), (0x8910, 73, 168), (0x8912, 119, 166), (0x8913, 91, 142), (0x8918, 105, 156),
    (0x8919, 90, 146), (0x8925, 104, 115), (0x892A, 118, 155), (0x8936, 98, 104), (0x8938, 86, 110),
    (0x893B, 95, 161), (0x8941, 74, 122), (0x8944, 100, 145), (0x895F, 79, 156), (0x8964, 84, 129),
    (0x896A, 87, 138), (0x8972, 98, 105), (0x897F, 95, 100), (0x8981, 104, 105), (0x8983, 82, 135),
    (0x8986, 91, 157), (0x8987, 119, 110), (0x898B, 75, 120), (0x898F, 79, 110), (0x8993, 87, 178),
    (0x8996, 98, 138), (0x89A1, 75, 111), (0x89A9, 83, 109), (0x89AA, 117, 145), (0x89B2, 79, 140),
    (0x89BA, 73, 134), (0x89BD, 84, 130), (0x89C0, 77, 122), (0x89D2, 73, 135), (0x89E3, 121, 112),
    (0x89F4, 94, 152), (0x89F8, 116, 122), (0x8A00, 100, 171), (0x8A02, 110, 180), (0x8A03, 92, 117),
    (0x8A08, 76, 106), (0x8A0A, 98, 178), (0x8A0C, 122, 183), (0x8A0E, 118, 144), (0x8A13, 124, 122),
    (0x8A16, 124, 161), (0x8A17, 117, 190), (0x8A18, 80, 128), (0x8A1B, 103, 133), (0x8A1D, 99, 120),
    (0x8A1F, 96, 168), (0x8A23, 75, 129), (0x8A25, 81, 173), (0x8A2A, 90, 126), (0x8A2D, 95, 162),
    (0x8A31, 121, 137), (0x8A34, 96, 141), (0x8A36, 73, 120), (0x8A3A, 113, 160), (0x8A3B, 112, 137),
    (0x8A50, 93, 177), (0x8A54, 111, 159), (0x8A55, 119, 132), (0x8A5B, 109, 140), (0x8A5E, 93, 178),
    (0x8A60, 102, 137), (0x8A62, 97, 179), (0x8A63, 102, 161), (0x8A66, 98, 139), (0x8A69, 98, 140),
    (0x8A6D, 78, 184), (0x8A6E, 110, 108), (0x8A70, 124, 190), (0x8A71, 123, 101), (0x8A72, 121, 113),
    (0x8A73, 94, 153), (0x8A75, 95, 146), (0x8A79, 115, 154), (0x8A85, 112, 138), (0x8A87, 77, 99),
    (0x8A8C, 113, 124), (0x8A8D, 107, 163), (0x8A93, 95, 101), (0x8A95, 118, 107), (0x8A98, 106, 111),
    (0x8A9E, 100, 158), (0x8AA0, 96, 100), (0x8AA1, 76, 107), (0x8AA3, 88, 180), (0x8AA4, 103, 102),
    (0x8AA5, 76, 142), (0x8AA6, 96, 169), (0x8AA8, 123, 175), (0x8AAA, 95, 163), (0x8AB0, 97, 129),
    (0x8AB2, 77, 100), (0x8AB9, 93, 102), (0x8ABC, 106, 190), (0x8ABE, 106, 157), (0x8ABF, 111, 160),
    (0x8AC2, 115, 155), (0x8AC4, 97, 180), (0x8AC7, 82, 136), (0x8ACB, 115, 171), (0x8ACD, 109, 117),
    (0x8ACF, 116, 152), (0x8AD2, 84, 159), (0x8AD6, 85, 165), (0x8ADB, 106, 112), (0x8ADC, 115, 163),
    (0x8AE1, 98, 141), (0x8AE6, 115, 180), (0x8AE7, 121, 114), (0x8AEA, 110, 181), (0x8AEB, 73, 159),
    (0x8AED, 106, 113), (0x8AEE, 108, 127), (0x8AF1, 124, 137), (0x8AF6, 99, 102), (0x8AF7, 120, 100),
    (0x8AF8, 111, 115), (0x8AFA, 100, 172), (0x8AFE, 80, 167), (0x8B00, 88, 135), (0x8B01, 99, 151),
    (0x8B02, 105, 157), (0x8B04, 83, 183), (0x8B0E, 89, 122), (0x8B10, 89, 141), (0x8B14, 120, 140),
    (0x8B16, 96, 154), (0x8B17, 90, 127), (0x8B19, 75, 133), (0x8B1A, 107, 144), (0x8B1B, 74, 123),
    (0x8B1D, 93, 179), (0x8B20, 104, 106), (0x8B28, 88, 136), (0x8B2B, 109, 163), (0x8B2C, 86, 125),
    (0x8B33, 78, 132), (0x8B39, 79, 141), (0x8B41, 123, 102), (0x8B49, 112, 187), (0x8B4E, 124, 146),
    (0x8B4F, 80, 129), (0x8B58, 98, 155), (0x8B5A, 82, 137), (0x8B5C, 91, 143), (0x8B66, 75, 173),
    (0x8B6C, 93, 103), (0x8B6F, 101, 123), (0x8B70, 107, 97), (0x8B74, 75, 121), (0x8B77, 122, 158),
    (0x8B7D, 102, 162), (0x8B80, 83, 129), (0x8B8A, 91, 104), (0x8B90, 97, 130), (0x8B92, 114, 152),
    (0x8B93, 100, 147), (0x8B96, 114, 153), (0x8B9A, 114, 134), (0x8C37, 76, 155), (0x8C3F, 76, 108),
    (0x8C41, 123, 131), (0x8C46, 83, 167), (0x8C48, 80, 130), (0x8C4A, 120, 101), (0x8C4C, 103, 149),
    (0x8C55, 98, 142), (0x8C5A, 83, 138), (0x8C61, 94, 154), (0x8C6A, 122, 159), (0x8C6B, 102, 163),
    (0x8C79, 119, 187), (0x8C7A, 98, 143), (0x8C82, 116, 112), (0x8C8A, 87, 167), (0x8C8C, 88, 137),
    (0x8C9D, 119, 111), (0x8C9E, 110, 182), (0x8CA0, 92, 118), (0x8CA1, 109, 111), (0x8CA2, 76, 184),
    (0x8CA7, 93, 120), (0x8CA8, 123, 103), (0x8CA9, 118, 188), (0x8CAA, 118, 113), (0x8CAB, 77, 123),
    (0x8CAC, 115, 97), (0x8CAF, 109, 141), (0x8CB0, 96, 110), (0x8CB3, 107, 131), (0x8CB4, 78, 190),
    (0x8CB6, 119, 127), (0x8CB7, 87, 162), (0x8CB8, 82, 168), (0x8CBB, 93, 104), (0x8CBC, 115, 164),
    (0x8CBD, 107, 130), (0x8CBF, 88, 181), (0x8CC0, 120, 133), (0x8CC1, 92, 147), (0x8CC2, 85, 177),
    (0x8CC3, 107, 188), (0x8CC4, 123, 176), (0x8CC7, 108, 128), (0x8CC8, 73, 121), (0x8CCA, 109, 164),
    (0x8CD1, 113, 161), (0x8CD3, 93, 121), (0x8CDA, 85, 178), (0x8CDC, 93, 180), (0x8CDE, 94, 155),
    (0x8CE0, 90, 147), (0x8CE2, 121, 167), (0x8CE3, 87, 163), (0x8CE4, 115, 129), (0x8CE6, 92, 119),
    (0x8CEA, 113, 181), (0x8CED, 83, 110), (0x8CF4, 85, 179), (0x8CFB, 92, 120), (0x8CFC, 78, 133),
    (0x8CFD, 94, 159), (0x8D04, 113, 126), (0x8D05, 117, 97), (0x8D07, 106, 139), (0x8D08, 112, 188),
    (0x8D0A, 114, 135), (0x8D0D, 95, 171), (0x8D13, 108, 188), (0x8D16, 96, 155), (0x8D64, 109, 165),
    (0x8D66, 93, 181), (0x8D6B, 121, 147), (0x8D70, 112, 139), (0x8D73, 79, 111), (0x8D74, 92, 121),
    (0x8D77, 80, 131), (0x8D85, 116, 113), (0x8D8A, 105, 134), (0x8D99, 111, 161), (0x8DA3, 117, 108),
    (0x8DA8, 116, 153), (0x8DB3, 111, 171), (0x8DBA, 92, 122), (0x8DBE, 113, 127), (0x8DC6, 118, 133),
    (0x8DCB, 90, 98), (0x8DCC, 113, 182), (0x8DCF, 73, 122), (0x8DDB, 118, 181), (0x8DDD, 74, 165),
    (0x8DE1, 109, 166), (0x8DE3, 95, 147), (0x8DE8, 77, 101), (0x8DEF, 85, 152), (0x8DF3, 83, 111),
    (0x8E0A, 104, 137), (0x8E0F, 82, 142), (0x8E10, 115, 130), (0x8E1E, 74, 166), (0x8E2A, 112, 97),
    (0x8E30, 106, 114), (0x8E35, 112, 98), (0x8E42, 106, 115), (0x8E44, 111, 116), (0x8E47, 74, 180),
    (0x8E48, 83, 112), (0x8E49, 114, 114), (0x8E4A, 122, 119), (0x8E59, 116, 172), (0x8E5F, 109, 167),
    (0x8E60, 115, 114), (0x8E74, 116, 173), (0x8E76, 78, 179), (0x8E81, 111, 162), (0x8E87, 109, 142),
    (0x8E8A, 112, 140), (0x8E8D, 100, 120), (0x8EAA, 86, 181), (0x8EAB, 98, 179), (0x8EAC, 78, 165),
    (0x8EC0, 78, 134), (0x8ECA, 114, 115), (0x8ECB, 99, 152), (0x8ECC, 78, 185), (0x8ECD, 78, 154),
    (0x8ED2, 121, 141), (0x8EDF, 101, 163), (0x8EEB, 113, 162), (0x8EF8, 116, 174), (0x8EFB, 73, 123),
    (0x8EFE, 98, 156), (0x8F03, 77, 178), (0x8F05, 85, 153), (0x8F09, 109, 112), (0x8F12, 115, 165),
    (0x8F13, 87, 130), (0x8F14, 91, 144), (0x8F15, 75, 174), (0x8F1B, 84, 160), (0x8F1C, 117, 138),
    (0x8F1D, 124, 138), (0x8F1E, 87, 150), (0x8F1F, 115, 143), (0x8F26, 85, 102), (0x8F27, 91, 126),
    (0x8F29, 90, 148), (0x8F2A, 86, 135), (0x8F2F, 113, 190), (0x8F33, 112, 141), (0x8F38, 97, 131),
    (0x8F39, 91, 158), (0x8F3B, 91, 159), (0x8F3E, 110, 109), (0x8F3F, 101, 107), (0x8F44, 120, 157),
    (0x8F45, 105, 127), (0x8F49, 110, 110), (0x8F4D, 115, 144), (0x8F4E, 77, 179), (0x8F5D, 101, 108),
    (0x8F5F, 77, 158), (0x8F62, 84, 185), (0x8F9B, 98, 180), (0x8F9C, 76, 144), (0x8FA3, 84, 120),
    (0x8FA6, 118, 189), (0x8FA8, 91, 105), (0x8FAD, 93, 182), (0x8FAF, 91, 106), (0x8FB0, 113, 163),
    (0x8FB1, 104, 116), (0x8FB2, 81, 156), (0x8FC2, 104, 166), (0x8FC5, 98, 182), (0x8FCE, 102, 138),
    (0x8FD1, 79, 142), (0x8FD4, 89, 183), (0x8FE6, 73, 124), (0x8FEA, 109, 168), (0x8FEB, 89, 158),
    (0x8FED, 113, 183), (0x8FF0, 97, 187), (0x8FF2, 75, 102), (0x8FF7, 89, 123), (0x8FF9, 109, 169),
    (0x8FFD, 116, 154), (0x9000, 118, 156), (0x9001, 96, 170), (0x9002, 77, 129), (0x9003, 83, 113),
    (0x9005, 124, 113), (0x9006, 101, 125), (0x9008, 122, 109), (0x900B, 119, 167), (0x900D, 96, 142),
    (0x900F, 118, 162), (0x9010, 116, 175), (0x9011, 78, 135), (0x9014, 83, 114), (0x9015, 75, 175),
    (0x9017, 83, 168), (0x9019, 109, 143), (0x901A, 118, 151), (0x901D, 95, 102), (0x901E, 85, 129),
    (0x901F, 96, 156), (0x9020, 111, 163), (0x9021, 112, 164), (0x9022, 91, 177), (0x9023, 85, 103),
    (0x902E, 115, 181), (0x9031, 112, 142), (0x9032, 113, 164), (0x9035, 79, 112), (0x9038, 107, 175),
    (0x903C, 120, 122), (0x903E, 106, 117), (0x9041, 83, 173), (0x9042, 97, 132), (0x9047, 104, 167),
    (0x904A, 106, 116), (0x904B, 105, 97), (0x904D, 119, 124), (0x904E, 77, 102), (0x9050, 120, 134),
    (0x9051, 123, 154), (0x9053, 83, 115), (0x9054, 82, 121), (0x9055, 105, 158), (0x9059, 104, 107),
    (0x905C, 96, 161), (0x905D, 82, 143), (0x905E, 115, 182), (0x9060, 105, 128), (0x9061, 96, 143),
    (0x9063, 75, 122), (0x9069, 109, 170), (0x906D, 111, 164), (0x906E, 114, 116), (0x906F, 83, 174),
    (0x9072, 113, 128), (0x9075, 112, 165), (0x9077, 115, 131), (0x9078, 95, 148), (0x907A, 106, 118),
    (0x907C, 86, 97), (0x907D, 74, 168), (0x907F, 120, 109), (0x9080, 104, 109), (0x9081, 87, 164),
    (0x9082, 121, 115), (0x9083, 97, 133), (0x9084, 123, 125), (0x9087, 107, 132), (0x9088, 87, 113),
    (0x908A, 91, 107), (0x908F, 84, 100), (0x9091, 106, 169), (0x9095, 103, 123), (0x9099, 87, 151),
    (0x90A2, 122, 110), (0x90A3, 80, 161), (0x90A6, 90, 128), (0x90A8, 116, 126), (0x90AA, 93, 183),
    (0x90AF, 73, 187), (0x90B0, 118, 134), (0x90B1, 78, 136), (0x90B5, 96, 144), (0x90B8, 109, 144),
    (0x90C1, 104, 180), (0x90CA, 77, 180), (0x90DE, 84, 141), (0x90E1, 78, 155), (0x90E8, 92, 123),
    (0x90ED, 77, 108), (0x90F5, 104, 168), (0x90FD, 83, 116), (0x9102, 99, 135), (0x9112, 116, 155),
    (0x9115, 121, 129), (0x9119, 93, 105), (0x9127, 83, 184), (0x912D, 110, 183), (0x9132, 82, 115),
    (0x9149, 106, 119), (0x914A, 110, 184), (0x914B, 116, 156), (0x914C, 108, 140), (0x914D, 90, 149),
    (0x914E, 112, 143), (0x9152, 112, 144), (0x9162, 116, 114), (0x9169, 88, 110), (0x916A, 84, 108),
    (0x916C, 97, 134), (0x9175, 124, 99), (0x9177, 122, 165), (0x9178, 94, 107), (0x9187, 97, 181),
    (0x9189, 117, 109), (0x918B, 116, 115), (0x918D, 111, 117), (0x9192, 96, 101), (0x919C, 116, 157),
    (0x91AB, 107, 98), (0x91AC, 108, 189), (0x91AE, 116, 116), (0x91AF, 122, 120), (0x91B1, 90, 99),
    (0x91B4, 85, 138), (0x91B5, 74, 153), (0x91C0, 100, 148), (0x91C7, 114, 186), (0x91C9, 106, 120),
    (0x91CB, 95, 119), (0x91CC, 86, 172), (0x91CD, 112, 172), (0x91CE, 100, 111), (0x91CF, 84, 161),
    (0x91D0, 86, 173), (0x91D1, 80, 145), (0x91D7, 96, 178), (0x91D8, 110, 185), (0x91DC, 92, 124),
    (0x91DD, 117, 156), (0x91E3, 111, 165), (0x91E7, 115, 132), (0x91EA, 104, 169), (0x91F5, 114, 187),
    (0x920D, 83, 175), (0x9210, 75, 98), (0x9211, 118, 190), (0x9212, 94, 124), (0x9217, 106, 141),
    (0x921E, 79, 119), (0x9234, 85, 130), (0x923A, 103, 109), (0x923F, 110, 111), (0x9240, 74, 101),
    (0x9245, 74, 169), (0x9249, 121, 168), (0x9257, 75, 134), (0x925B, 101, 167), (0x925E, 105, 135),
    (0x9262, 90, 100), (0x9264, 78, 137), (0x9265, 97, 188), (0x9266, 110, 186), (0x9280, 106, 158),
    (0x9283, 116, 136), (0x9285, 83, 158), (0x9291, 95, 149), (0x9293, 110, 112), (0x9296, 97, 135),
    (0x9298, 88, 111), (0x929C, 120, 167), (0x92B3, 102, 165), (0x92B6, 78, 138), (0x92B7, 96, 145),
    (0x92B9, 97, 136), (0x92CC, 110, 187), (0x92CF, 121, 185), (0x92D2, 91, 178), (0x92E4, 95, 103),
    (0x92EA, 119, 168), (0x92F8, 74, 170), (0x92FC, 74, 124), (0x9304, 85, 162), (0x9310, 116, 158),
    (0x9318, 116, 159), (0x931A, 109, 118), (0x931E, 97, 182), (0x931F, 82, 138), (0x9320, 110, 188),
    (0x9321, 80, 132), (0x9322, 110, 113), (0x9324, 80, 133), (0x9326, 79, 158), (0x9328, 88, 161),
    (0x932B, 95, 120), (0x932E, 76, 145), (0x932F, 114, 121), (0x9348, 102, 140), (0x934A, 85, 104),
    (0x934B, 77, 103), (0x934D, 83, 117), (0x9354, 99, 136), (0x935B, 82, 116), (0x936E, 106, 121),
    (0x9375, 74, 181), (0x937C, 117, 157), (0x937E, 112, 99), (0x938C, 75, 135), (0x9394, 104, 138),
    (0x9396, 96, 176), (0x939A, 116, 160), (0x93A3, 122, 111), (0x93A7, 74, 145), (0x93AC, 122, 160),
    (0x93AD, 113, 165), (0x93B0, 107, 176), (0x93C3, 111, 172), (0x93D1, 109, 171), (0x93DE, 104, 139),
    (0x93E1, 75, 176), (0x93E4, 86, 111), (0x93F6, 114, 97), (0x9404, 123, 181), (0x9418, 112, 100),
    (0x9425, 95, 150), (0x942B, 110, 114), (0x9435, 115, 145), (0x9438, 118, 97), (0x9444, 112, 145),
    (0x9451, 73, 188), (0x9452, 73, 189), (0x945B, 77, 142), (0x947D, 114, 136), (0x947F, 114, 122),
    (0x9577, 108, 190), (0x9580, 89, 102), (0x9583, 95, 172), (0x9589, 119, 141), (0x958B, 74, 146),
    (0x958F, 106, 142), (0x9591, 120, 152), (0x9592, 120, 153), (0x9593, 73, 160), (0x9594, 89, 138),
    (0x9598, 74, 102), (0x95A3, 73, 136), (0x95A4, 120, 174), (0x95A5, 90, 172), (0x95A8, 79, 113),
    (0x95AD, 84, 175), (0x95B1, 101, 179), (0x95BB, 102, 98), (0x95BC, 99, 153), (0x95C7, 99, 161),
    (0x95CA, 123, 132), (0x95D4, 120, 175), (0x95D5, 78, 180), (0x95D6, 118, 166), (0x95DC, 77, 124),
    (0x95E1, 115, 133), (0x95E2, 91, 99), (0x961C, 92, 125), (0x9621, 115, 134), (0x962A, 119, 97),
    (0x962E, 103, 150), (0x9632, 90, 129), (0x963B, 111, 166), (0x963F, 99, 121), (0x9640, 117, 173),
    (0x9642, 120, 110), (0x9644, 92, 126), (0x964B, 86, 112), (0x964C, 87, 168), (0x964D, 74, 125),
    (0x9650, 120, 154), (0x965B, 119, 142), (0x965C, 120, 176), (0x965D, 95, 173), (0x965E, 98, 115),
    (0x965F, 115, 115), (0x9662, 105, 130), (0x9663, 113, 166), (0x9664, 111, 118), (0x966A, 90, 150),
    (0x9670, 106, 164), (0x9673, 113, 167), (0x9675, 86, 149), (0x9676, 83, 118), (0x9677, 120, 168),
    (0x9678, 86, 129), (0x967D, 100, 149), (0x9685, 104, 170), (0x9686, 86, 140), (0x968A, 82, 169),
    (0x968B, 97, 137), (0x968D, 123, 155), (0x968E, 76, 109), (0x9694, 75, 112), (0x9695, 105, 98),
    (0x9698, 99, 182), (0x9699, 79, 128), (0x969B, 111, 119), (0x969C, 109, 97), (0x96A3, 86, 182),
    (0x96A7, 97, 138), (0x96A8, 97, 139), (0x96AA, 121, 143), (0x96B1, 106, 159), (0x96B7, 85, 139),
    (0x96BB, 115, 116), (0x96C0, 108, 141), (0x96C1, 99, 146), (0x96C4, 105, 105), (0x96C5, 99, 122),
    (0x96C6, 114, 98), (0x96C7, 76, 146), (0x96C9, 117, 139), (0x96CB, 112, 166), (0x96CC, 108, 129),
    (0x96CD, 103, 124), (0x96CE, 109, 145), (0x96D5, 111, 167), (0x96D6, 97, 140), (0x96D9, 99, 106),
    (0x96DB, 116, 161), (0x96DC, 108, 154), (0x96E2, 86, 174), (0x96E3, 80, 177), (0x96E8, 104, 171),
    (0x96E9, 104, 172), (0x96EA, 95, 164), (0x96EF, 89, 103), (0x96F0, 92, 148), (0x96F2, 105, 99),
    (0x96F6, 85, 131), (0x96F7, 85, 180), (0x96F9, 89, 159), (0x96FB, 110, 115), (0x9700, 97, 141),
    (0x9706, 110, 189), (0x9707, 113, 168), (0x9711, 110, 133), (0x9713, 102, 167), (0x9716, 86, 189),
    (0x9719, 102, 142), (0x971C, 94, 156), (0x971E, 120, 135), (0x9727, 88, 182), (0x9730, 94, 108),
    (0x9732, 85, 154), (0x9739, 91, 100), (0x973D, 111, 120), (0x9742, 84, 186), (0x9744, 99, 183),
    (0x9748, 85, 132), (0x9751, 115, 172), (0x9756, 110, 190), (0x975C, 111, 97), (0x975E, 93, 106),
    (0x9761, 89, 124), (0x9762, 87, 188), (0x9769, 121, 148), (0x976D, 107, 165), (0x9774, 123, 104),
    (0x9777, 107, 166), (0x977A, 87, 139), (0x978B, 122, 121), (0x978D, 99, 147), (0x978F, 76, 185),
    (0x97A0, 78, 147), (0x97A8, 73, 170), (0x97AB, 78, 148), (0x97AD, 119, 125), (0x97C6, 115, 135),
    (0x97CB, 105, 159), (0x97D3, 120, 155), (0x97DC, 83, 119), (0x97F3, 106, 165), (0x97F6, 96, 146),
    (0x97FB, 105, 100), (0x97FF, 121, 130), (0x9800, 122, 161), (0x9801, 121, 173), (0x9802, 111, 98),
    (0x9803, 75, 177), (0x9805, 121, 99), (0x9806, 97, 183), (0x9808, 97, 142), (0x980A, 104, 181),
    (0x980C, 96, 171), (0x9810, 102, 168), (0x9811, 103, 151), (0x9812, 89, 184), (0x9813, 83, 139),
    (0x9817, 118, 182), (0x9818, 85, 133), (0x982D, 83, 169), (0x9830, 121, 186), (0x9838, 75, 178),
    (0x9839, 118, 157), (0x983B, 93, 122), (0x9846, 77, 104), (0x984C, 111, 121), (0x984D, 99, 190),
    (0x984E, 99, 137), (0x9854, 99, 148), (0x9858, 105, 131), (0x985A, 110, 116), (0x985E, 86, 126),
    (0x9865, 122, 162), (0x9867, 76, 147), (0x986B, 110, 117), (0x986F, 121, 169), (0x98A8, 120, 102),
    (0x98AF, 94, 125), (0x98B1, 118, 135), (0x98C4, 119, 189), (0x98C7, 119, 188), (0x98DB, 93, 107),
    (0x98DC, 90, 168), (0x98DF, 98, 157), (0x98E1, 96, 162), (0x98E2, 80, 134), (0x98ED, 117, 144),
    (0x98EE, 106, 166), (0x98EF, 89, 185), (0x98F4, 107, 135), (0x98FC, 93, 184), (0x98FD, 119, 169),
    (0x98FE, 98, 158), (0x9903, 77, 181), (0x9909, 121, 131), (0x990A, 100, 151), (0x990C, 107, 136),
    (0x9910, 114, 137), (0x9913, 99, 123), (0x9918, 101, 110), (0x991E, 110, 118), (0x9920, 91, 127),
    (0x9928, 77, 125), (0x9945, 87, 131), (0x9949, 79, 143), (0x994B, 78, 186), (0x994C, 114, 138),
    (0x994D, 95, 151), (0x9951, 80, 135), (0x9952, 104, 110), (0x9954, 103, 125), (0x9957, 121, 132),
    (0x9996, 97, 143), (0x9999, 121, 133), (0x999D, 120, 120), (0x99A5, 91, 160), (0x99A8, 122, 112),
    (0x99AC, 87, 105), (0x99AD, 100, 159), (0x99AE, 120, 103), (0x99B1, 117, 174), (0x99B3, 117, 140),
    (0x99B4, 97, 184), (0x99B9, 107, 177), (0x99C1, 89, 160), (0x99D0, 112, 146), (0x99D1, 81, 140),
    (0x99D2, 78, 139), (0x99D5, 73, 125), (0x99D9, 92, 127), (0x99DD, 117, 175), (0x99DF, 93, 185),
    (0x99ED, 121, 116), (0x99F1, 84, 109), (0x99FF, 112, 167), (0x9A01, 93, 126), (0x9A08, 91, 128),
    (0x9A0E, 80, 136), (0x9A0F, 80, 137), (0x9A19, 119, 126), (0x9A2B, 74, 182), (0x9A30, 83, 185),
    (0x9A36, 116, 162), (0x9A37, 96, 147), (0x9A40, 87, 169), (0x9A43, 119, 190), (0x9A45, 78, 140),
    (0x9A4D, 124, 100), (0x9A55, 77, 182), (0x9A57, 121, 144), (0x9A5A, 75, 179), (0x9A5B, 101, 126),
    (0x9A5F, 117, 110), (0x9A62, 84, 176), (0x9A65, 80, 138), (0x9A69, 123, 126), (0x9A6A, 84, 177),
    (0x9AA8, 76, 169), (0x9AB8, 121, 117), (0x9AD3, 97, 144), (0x9AD4, 115, 183), (0x9AD8, 76, 148),
    (0x9AE5, 102, 99), (0x9AEE, 90, 101), (0x9B1A, 97, 145), (0x9B27, 86, 98), (0x9B2A, 118, 163),
    (0x9B31, 105, 102), (0x9B3C, 79, 97), (0x9B41, 77, 154), (0x9B42, 122, 171), (0x9B43, 90, 102),
    (0x9B44, 90, 158), (0x9B45, 87, 165), (0x9B4F, 105, 160), (0x9B54, 87, 106), (0x9B5A, 100, 160),
    (0x9B6F, 85, 155), (0x9B8E, 110, 134), (0x9B91, 119, 170), (0x9B9F, 99, 149), (0x9BAB, 77, 183),
    (0x9BAE, 95, 152), (0x9BC9, 86, 175), (0x9BD6, 115, 173), (0x9BE4, 76, 166), (0x9BE8, 75, 180),
    (0x9C0D, 116, 163), (0x9C10, 99, 138), (0x9C12, 91, 161), (0x9C15, 120, 136), (0x9C25, 123, 127),
    (0x9C32, 103, 103), (0x9C3B, 87, 132), (0x9C47, 74, 126), (0x9C49, 91, 110), (0x9C57, 86, 183),
    (0x9CE5, 111, 168), (0x9CE7, 92, 128), (0x9CE9, 78, 141), (0x9CF3, 91, 179), (0x9CF4, 88, 112),
    (0x9CF6, 101, 169), (0x9D09, 99, 124), (0x9D1B, 105, 132), (0x9D26, 99, 172), (0x9D28, 99, 165),
    (0x9D3B, 122, 184), (0x9D51, 75, 123), (0x9D5D, 99, 125), (0x9D60, 76, 156), (0x9D61, 88, 183),
    (0x9D6C, 92, 159), (0x9D72, 108, 142), (0x9DA9, 88, 144), (0x9DAF, 100, 99), (0x9DB4, 120, 141),
    (0x9DC4, 76, 110), (0x9DD7, 78, 142), (0x9DF2, 117, 111), (0x9DF8, 124, 147), (0x9DF9, 106, 173),
    (0x9DFA, 85, 156), (0x9E1A, 100, 100), (0x9E1E, 84, 118), (0x9E75, 85, 157), (0x9E79, 120, 169),
    (0x9E7D, 102, 100), (0x9E7F, 85, 163), (0x9E92, 80, 139), (0x9E93, 85, 164), (0x9E97, 84, 178),
    (0x9E9D, 93, 186), (0x9E9F, 86, 184), (0x9EA5, 87, 170), (0x9EB4, 78, 149), (0x9EB5, 87, 189),
    (0x9EBB, 87, 107), (0x9EBE, 124, 139), (0x9EC3, 123, 156), (0x9ECD, 95, 104), (0x9ECE, 84, 179),
    (0x9ED1, 124, 153), (0x9ED4, 75, 99), (0x9ED8, 88, 185), (0x9EDB, 82, 170), (0x9EDC, 116, 181),
    (0x9EDE, 110, 135), (0x9EE8, 82, 154), (0x9EF4, 89, 125), (0x9F07, 103, 104), (0x9F08, 91, 111),
    (0x9F0E, 111, 99), (0x9F13, 76, 149), (0x9F20, 95, 105), (0x9F3B, 93, 108), (0x9F4A, 111, 122),
    (0x9F4B, 109, 113), (0x9F4E, 109, 114), (0x9F52, 117, 141), (0x9F5F, 109, 146), (0x9F61, 85, 134),
    (0x9F67, 95, 165), (0x9F6A, 114, 123), (0x9F6C, 100, 161), (0x9F77, 99, 139), (0x9F8D, 86, 99),
    (0x9F90, 90, 130), (0x9F95, 73, 190), (0x9F9C, 78, 143), (0xAC00, 47, 97), (0xAC01, 47, 98),
    (0xAC02, 0, 1), (0xAC03, 0, 2), (0xAC04, 47, 99), (0xAC05, 0, 3), (0xAC06, 0, 4),
    (0xAC07, 47, 100), (0xAC08, 47, 101), (0xAC09, 47, 102), (0xAC0A, 47, 103), (0xAC0B, 0, 5),
    (0xAC0C, 0, 6), (0xAC0D, 0, 7), (0xAC0E, 0, 8), (0xAC0F, 0, 9), (0xAC10, 47, 104),
    (0xAC11, 47, 105), (0xAC12, 47, 106), (0xAC13, 47, 107), (0xAC14, 47, 108), (0xAC15, 47, 109),
    (0xAC16, 47, 110), (0xAC17, 47, 111), (0xAC18, 0, 10), (0xAC19, 47, 112), (0xAC1A, 47, 113),
    (0xAC1B, 47, 114), (0xAC1C, 47, 115), (0xAC1D, 47, 116), (0xAC1E, 0, 11), (0xAC1F, 0, 12),
    (0xAC20, 47, 117), (0xAC21, 0, 13), (0xAC22, 0, 14), (0xAC23, 0, 15), (0xAC24, 47, 118),
    (0xAC25, 0, 16), (0xAC26, 0, 17), (0xAC27, 0, 18), (0xAC28, 0, 19), (0xAC29, 0, 20),
    (0xAC2A, 0, 21), (0xAC2B, 0, 22), (0xAC2C, 47, 119), (0xAC2D, 47, 120), (0xAC2E, 0, 23),
    (0xAC2F, 47, 121), (0xAC30, 47, 122), (0xAC31, 47, 123), (0xAC32, 0, 24), (0xAC33, 0, 25),
    (0xAC34, 0, 26), (0xAC35, 0, 33), (0xAC36, 0, 34), (0xAC37, 0, 35), (0xAC38, 47, 124),
    (0xAC39, 47, 125), (0xAC3A, 0, 36), (0xAC3B, 0, 37), (0xAC3C, 47, 126), (0xAC3D, 0, 38),
    (0xAC3E, 0, 39), (0xAC3F, 0, 40), (0xAC40, 47, 127), (0xAC41, 0, 41), (0xAC42, 0, 42),
    (0xAC43, 0, 43), (0xAC44, 0, 44), (0xAC45, 0, 45), (0xAC46, 0, 46), (0xAC47, 0, 47),
    (0xAC48, 0, 48), (0xAC49, 0, 49), (0xAC4A, 0, 50), (0xAC4B, 47, 128), (0xAC4C, 0, 51),
    (0xAC4D, 47, 129), (0xAC4E, 0, 52), (0xAC4F, 0, 53), (0xAC50, 0, 54), (0xAC51, 0, 55),
    (0xAC52, 0, 56), (0xAC53, 0, 57), (0xAC54, 47, 130), (0xAC55, 0, 58), (0xAC56, 0, 65),
    (0xAC57, 0, 66), (0xAC58, 47, 131), (0xAC59, 0, 67), (0xAC5A, 0, 68), (0xAC5B, 0, 69),
    (0xAC5C, 47, 132), (0xAC5D, 0, 70), (0xAC5E, 0, 71), (0xAC5F, 0, 72), (0xAC60, 0, 73),
    (0xAC61, 0, 74), (0xAC62, 0, 75), (0xAC63, 0, 76), (0xAC64, 0, 77), (0xAC65, 0, 78),
    (0xAC66, 0, 79), (0xAC67, 0, 80), (0xAC68, 0, 81), (0xAC69, 0, 82), (0xAC6A, 0, 83),
    (0xAC6B, 0, 84), (0xAC6C, 0, 85), (0xAC6D, 0, 86), (0xAC6E, 0, 87), (0xAC6F, 0, 88),
    (0xAC70, 47, 133), (0xAC71, 47, 134), (0xAC72, 0, 89), (0xAC73, 0, 90), (0xAC74, 47, 135),
    (0xAC75, 0, 91), (0xAC76, 0, 92), (0xAC77, 47, 136), (0xAC78, 47, 137), (0xAC79, 0, 93),
    (0xAC7A, 47, 138), (0xAC7B, 0, 94), (0xAC7C, 0, 95), (0xAC7D, 0, 96), (0xAC7E, 0, 97),
    (0xAC7F, 0, 98), (0xAC80, 47, 139), (0xAC81, 47, 140), (0xAC82, 0, 99), (0xAC83, 47, 141),
    (0xAC84, 47, 142), (0xAC85, 47, 143), (0xAC86, 47, 144), (0xAC87, 0, 100), (0xAC88, 0, 101),
    (0xAC89, 47, 145), (0xAC8A, 47, 146), (0xAC8B, 47, 147), (0xAC8C, 47, 148), (0xAC8D, 0, 102),
    (0xAC8E, 0, 103), (0xAC8F, 0, 104), (0xAC90, 47, 149), (0xAC91, 0, 105), (0xAC92, 0, 106),
    (0xAC93, 0, 107), (0xAC94, 47, 150), (0xAC95, 0, 108), (0xAC96, 0, 109), (0xAC97, 0, 110),
    (0xAC98, 0, 111), (0xAC99, 0, 112), (0xAC9A, 0, 113), (0xAC9B, 0, 114), (0xAC9C, 47, 151),
    (0xAC9D, 47, 152), (0xAC9E, 0, 115), (0xAC9F, 47, 153), (0xACA0, 47, 154), (0xACA1, 47, 155),
    (0xACA2, 0, 116), (0xACA3, 0, 117), (0xACA4, 0, 118), (0xACA5, 0, 119), (0xACA6, 0, 120),
    (0xACA7, 0, 121), (0xACA8, 47, 156), (0xACA9, 47, 157), (0xACAA, 47, 158), (0xACAB, 0, 122),
    (0xACAC, 47, 159), (0xACAD, 0, 123), (0xACAE, 0, 124), (0xACAF, 47, 160), (0xACB0, 47, 161),
    (0xACB1, 0, 125), (0xACB2, 0, 126), (0xACB3, 0, 127), (0xACB4, 0, 128), (0xACB5, 0, 129),
    (0xACB6, 0, 130), (0xACB7, 0, 131), (0xACB8, 47, 162), (0xACB9, 47, 163), (0xACBA, 0, 132),
    (0xACBB, 47, 164), (0xACBC, 47, 165), (0xACBD, 47, 166), (0xACBE, 0, 133), (0xACBF, 0, 134),
    (0xACC0, 0, 135), (0xACC1, 47, 167), (0xACC2, 0, 136), (0xACC3, 0, 137), (0xACC4, 47, 168),
    (0xACC5, 0, 138), (0xACC6, 0, 139), (0xACC7, 0, 140), (0xACC8, 47, 169), (0xACC9, 0, 141),
    (0xACCA, 0, 142), (0xACCB, 0, 143), (0xACCC, 47, 170), (0xACCD, 0, 144), (0xACCE, 0, 145),
    (0xACCF, 0, 146), (0xACD0, 0, 147), (0xACD1, 0, 148), (0xACD2, 0, 149), (0xACD3, 0, 150),
    (0xACD4, 0, 151), (0xACD5, 47, 171), (0xACD6, 0, 152), (0xACD7, 47, 172), (0xACD8, 0, 153),
    (0xACD9, 0, 154), (0xACDA, 0, 155), (0xACDB, 0, 156), (0xACDC, 0, 157), (0xACDD, 0, 158),
    (0xACDE, 0, 159), (0xACDF, 0, 160), (0xACE0, 47, 173), (0xACE1, 47, 174), (0xACE2, 0, 161),
    (0xACE3, 0, 162), (0xACE4, 47, 175), (0xACE5, 0, 163), (0xACE6, 0, 164), (0xACE7, 47, 176),
    (0xACE8, 47, 177), (0xACE9, 0, 165), (0xACEA, 47, 178), (0xACEB, 0, 166), (0xACEC, 47, 179),
    (0xACED, 0, 167), (0xACEE, 0, 168), (0xACEF, 47, 180), (0xACF0, 47, 181), (0xACF1, 47, 182),
    (0xACF2, 0, 169), (0xACF3, 47, 183), (0xACF4, 0, 170), (0xACF5, 47, 184), (0xACF6, 47, 185),
    (0xACF7, 0, 171), (0xACF8, 0, 172), (0xACF9, 0, 173), (0xACFA, 0, 174), (0xACFB, 0, 175),
    (0xACFC, 47, 186), (0xACFD, 47, 187), (0xACFE, 0, 176), (0xACFF, 0, 177), (0xAD00, 47, 188),
    (0xAD01, 0, 178), (0xAD02, 0, 179), (0xAD03, 0, 180), (0xAD04, 47, 189), (0xAD05, 0, 181),
    (0xAD06, 47, 190), (0xAD07, 0, 182), (0xAD08, 0, 183), (0xAD09, 0, 184), (0xAD0A, 0, 185),
    (0xAD0B, 0, 186), (0xAD0C, 48, 97), (0xAD0D, 48, 98), (0xAD0E, 0, 187), (0xAD0F, 48, 99),
    (0xAD10, 0, 188), (0xAD11, 48, 100), (0xAD12, 0, 189), (0xAD13, 0, 190), (0xAD14, 1, 1),
    (0xAD15, 1, 2), (0xAD16, 1, 3), (0xAD17, 1, 4), (0xAD18, 48, 101), (0xAD19, 1, 5),
    (0xAD1A, 1, 6), (0xAD1B, 1, 7), (0xAD1C, 48, 102), (0xAD1D, 1, 8), (0xAD1E, 1, 9),
    (0xAD1F, 1, 10), (0xAD20, 48, 103), (0xAD21, 1, 11), (0xAD22, 1, 12), (0xAD23, 1, 13),
    (0xAD24, 1, 14), (0xAD25, 1, 15), (0xAD26, 1, 16), (0xAD27, 1, 17), (0xAD28, 1, 18),
    (0xAD29, 48, 104), (0xAD2A, 1, 19), (0xAD2B, 1, 20), (0xAD2C, 48, 105), (0xAD2D, 48, 106),
    (0xAD2E, 1, 21), (0xAD2F, 1, 22), (0xAD30, 1, 23), (0xAD31, 1, 24), (0xAD32, 1, 25),
    (0xAD33, 1, 26), (0xAD34, 48, 107), (0xAD35, 48, 108), (0xAD36, 1, 33), (0xAD37, 1, 34),
    (0xAD38, 48, 109), (0xAD39, 1, 35), (0xAD3A, 1, 36), (0xAD3B, 1, 37), (0xAD3C, 48, 110),
    (0xAD3D, 1, 38), (0xAD3E, 1, 39), (0xAD3F, 1, 40), (0xAD40, 1, 41), (0xAD41, 1, 42),
    (0xAD42, 1, 43), (0xAD43, 1, 44), (0xAD44, 48, 111), (0xAD45, 48, 112), (0xAD46, 1, 45),
    (0xAD47, 48, 113), (0xAD48, 1, 46), (0xAD49, 48, 114), (0xAD4A, 1, 47), (0xAD4B, 1, 48),
    (0xAD4C, 1, 49), (0xAD4D, 1, 50), (0xAD4E, 1, 51), (0xAD4F, 1, 52), (0xAD50, 48, 115),
    (0xAD51, 1, 53), (0xAD52, 1, 54), (0xAD53, 1, 55), (0xAD54, 48, 116), (0xAD55, 1, 56),
    (0xAD56, 1, 57), (0xAD57, 1, 58), (0xAD58, 48, 117), (0xAD59, 1, 65), (0xAD5A, 1, 66),
    (0xAD5B, 1, 67), (0xAD5C, 1, 68), (0xAD5D, 1, 69), (0xAD5E, 1, 70), (0xAD5F, 1, 71),
    (0xAD60, 1, 72), (0xAD61, 48, 118), (0xAD62, 1, 73), (0xAD63, 48, 119), (0xAD64, 1, 74),
    (0xAD65, 1, 75), (0xAD66, 1, 76), (0xAD67, 1, 77), (0xAD68, 1, 78), (0xAD69, 1, 79),
    (0xAD6A, 1, 80), (0xAD6B, 1, 81), (0xAD6C, 48, 120), (0xAD6D, 48, 121), (0xAD6E, 1, 82),
    (0xAD6F, 1, 83), (0xAD70, 48, 122), (0xAD71, 1, 84), (0xAD72, 1, 85), (0xAD73, 48, 123),
    (0xAD74, 48, 124), (0xAD75, 48, 125), (0xAD76, 48, 126), (0xAD77, 1, 86), (0xAD78, 1, 87),
    (0xAD79, 1, 88), (0xAD7A, 1, 89), (0xAD7B, 48, 127), (0xAD7C, 48, 128), (0xAD7D, 48, 129),
    (0xAD7E, 1, 90), (0xAD7F, 48, 130), (0xAD80, 1, 91), (0xAD81, 48, 131), (0xAD82, 48, 132),
    (0xAD83, 1, 92), (0xAD84, 1, 93), (0xAD85, 1, 94), (0xAD86, 1, 95), (0xAD87, 1, 96),
    (0xAD88, 48, 133), (0xAD89, 48, 134), (0xAD8A, 1, 97), (0xAD8B, 1, 98), (0xAD8C, 48, 135),
    (0xAD8D, 1, 99), (0xAD8E, 1, 100), (0xAD8F, 1, 101), (0xAD90, 48, 136), (0xAD91, 1, 102),
    (0xAD92, 1, 103), (0xAD93, 1, 104), (0xAD94, 1, 105), (0xAD95, 1, 106), (0xAD96, 1, 107),
    (0xAD97, 1, 108), (0xAD98, 1, 109), (0xAD99, 1, 110), (0xAD9A, 1, 111), (0xAD9B, 1, 112),
    (0xAD9C, 48, 137), (0xAD9D, 48, 138), (0xAD9E, 1, 113), (0xAD9F, 1, 114), (0xADA0, 1, 115),
    (0xADA1, 1, 116), (0xADA2, 1, 117), (0xADA3, 1, 118), (0xADA4, 48, 139), (0xADA5, 1, 119),
    (0xADA6, 1, 120), (0xADA7, 1, 121), (0xADA8, 1, 122), (0xADA9, 1, 123), (0xADAA, 1, 124),
    (0xADAB, 1, 125), (0xADAC, 1, 126), (0xADAD, 1, 127), (0xADAE, 1, 128), (0xADAF, 1, 129),
    (0xADB0, 1, 130), (0xADB1, 1, 131), (0xADB2, 1, 132), (0xADB3, 1, 133), (0xADB4, 1, 134),
    (0xADB5, 1, 135), (0xADB6, 1, 136), (0xADB7, 48, 140), (0xADB8, 1, 137), (0xADB9, 1, 138),
    (0xADBA, 1, 139), (0xADBB, 1, 140), (0xADBC, 1, 141), (0xADBD, 1, 142), (0xADBE, 1, 143),
    (0xADBF, 1, 144), (0xADC0, 48, 141), (0xADC1, 48, 142), (0xADC2, 1, 145), (0xADC3, 1, 146),
    (0xADC4, 48, 143), (0xADC5, 1, 147), (0xADC6, 1, 148), (0xADC7, 1, 149), (0xADC8, 48, 144),
    (0xADC9, 1, 150), (0xADCA, 1, 151), (0xADCB, 1, 152), (0xADCC, 1, 153), (0xADCD, 1, 154),
    (0xADCE, 1, 155), (0xADCF, 1, 156), (0xADD0, 48, 145), (0xADD1, 48, 146), (0xADD2, 1, 157),
    (0xADD3, 48, 147), (0xADD4, 1, 158), (0xADD5, 1, 159), (0xADD6, 1, 160), (0xADD7, 1, 161),
    (0xADD8, 1, 162), (0xADD9, 1, 163), (0xADDA, 1, 164), (0xADDB, 1, 165), (0xADDC, 48, 148),
    (0xADDD, 1, 166), (0xADDE, 1, 167), (0xADDF, 1, 168), (0xADE0, 48, 149), (0xADE1, 1, 169),
    (0xADE2, 1, 170), (0xADE3, 1, 171), (0xADE4, 48, 150), (0xADE5, 1, 172), (0xADE6, 1, 173),
    (0xADE7, 1, 174), (0xADE8, 1, 175), (0xADE9, 1, 176), (0xADEA, 1, 177), (0xADEB, 1, 178),
    (0xADEC, 1, 179), (0xADED, 1, 180), (0xADEE, 1, 181), (0xADEF, 1, 182), (0xADF0, 1, 183),
    (0xADF1, 1, 184), (0xADF2, 1, 185), (0xADF3, 1, 186), (0xADF4, 1, 187), (0xADF5, 1, 188),
    (0xADF6, 1, 189), (0xADF7, 1, 190), (0xADF8, 48, 151), (0xADF9, 48, 152), (0xADFA, 2, 1),
    (0xADFB, 2, 2), (0xADFC, 48, 153), (0xADFD, 2, 3), (0xADFE, 2, 4), (0xADFF, 48, 154),
    (0xAE00, 48, 155), (0xAE01, 48, 156), (0xAE02, 2, 5), (0xAE03, 2, 6), (0xAE04, 2, 7),
    (0xAE05, 2, 8), (0xAE06, 2, 9), (0xAE07, 2, 10), (0xAE08, 48, 157), (0xAE09, 48, 158),
    (0xAE0A, 2, 11), (0xAE0B, 48, 159), (0xAE0C, 2, 12), (0xAE0D, 48, 160), (0xAE0E, 2, 13),
    (0xAE0F, 2, 14), (0xAE10, 2, 15), (0xAE11, 2, 16), (0xAE12, 2, 17), (0xAE13, 2, 18),
    (0xAE14, 48, 161), (0xAE15, 2, 19), (0xAE16, 2, 20), (0xAE17, 2, 21), (0xAE18, 2, 22),
    (0xAE19, 2, 23), (0xAE1A, 2, 24), (0xAE1B, 2, 25), (0xAE1C, 2, 26), (0xAE1D, 2, 33),
    (0xAE1E, 2, 34), (0xAE1F, 2, 35), (0xAE20, 2, 36), (0xAE21, 2, 37), (0xAE22, 2, 38),
    (0xAE23, 2, 39), (0xAE24, 2, 40), (0xAE25, 2, 41), (0xAE26, 2, 42), (0xAE27, 2, 43),
    (0xAE28, 2, 44), (0xAE29, 2, 45), (0xAE2A, 2, 46), (0xAE2B, 2, 47), (0xAE2C, 2, 48),
    (0xAE2D, 2, 49), (0xAE2E, 2, 50), (0xAE2F, 2, 51), (0xAE30, 48, 162), (0xAE31, 48, 163),
    (0xAE32, 2, 52), (0xAE33, 2, 53), (0xAE34, 48, 164), (0xAE35, 2, 54), (0xAE36, 2, 55),
    (0xAE37, 48, 165), (0xAE38, 48, 166), (0xAE39, 2, 56), (0xAE3A, 48, 167), (0xAE3B, 2, 57),
    (0xAE3C, 2, 58), (0xAE3D, 2, 65), (0xAE3E, 2, 66), (0xAE3F, 2, 67), (0xAE40, 48, 168),
    (0xAE41, 48, 169), (0xAE42, 2, 68), (0xAE43, 48, 170), (0xAE44, 2, 69), (0xAE45, 48, 171),
    (0xAE46, 48, 172), (0xAE47, 2, 70), (0xAE48, 2, 71), (0xAE49, 2, 72), (0xAE4A, 48, 173),
    (0xAE4B, 2, 73), (0xAE4C, 48, 174), (0xAE4D, 48, 175), (0xAE4E, 48, 176), (0xAE4F, 2, 74),
    (0xAE50, 48, 177), (0xAE51, 2, 75), (0xAE52, 2, 76), (0xAE53, 2, 77), (0xAE54, 48, 178),
    (0xAE55, 2, 78), (0xAE56, 48, 179), (0xAE57, 2, 79), (0xAE58, 2, 80), (0xAE59, 2, 81),
    (0xAE5A, 2, 82), (0xAE5B, 2, 83), (0xAE5C, 48, 180), (0xAE5D, 48, 181), (0xAE5E, 2, 84),
    (0xAE5F, 48, 182), (0xAE60, 48, 183), (0xAE61, 48, 184), (0xAE62, 2, 85), (0xAE63, 2, 86),
    (0xAE64, 2, 87), (0xAE65, 48, 185), (0xAE66, 2, 88), (0xAE67, 2, 89), (0xAE68, 48, 186),
    (0xAE69, 48, 187), (0xAE6A, 2, 90), (0xAE6B, 2, 91), (0xAE6C, 48, 188), (0xAE6D, 2, 92),
    (0xAE6E, 2, 93), (0xAE6F, 2, 94), (0xAE70, 48, 189), (0xAE71, 2, 95), (0xAE72, 2, 96),
    (0xAE73, 2, 97), (0xAE74, 2, 98), (0xAE75, 2, 99), (0xAE76, 2, 100), (0xAE77, 2, 101),
    (0xAE78, 48, 190), (0xAE79, 49, 97), (0xAE7A, 2, 102), (0xAE7B, 49, 98), (0xAE7C, 49, 99),
    (0xAE7D, 49, 100), (0xAE7E, 2, 103), (0xAE7F, 2, 104), (0xAE80, 2, 105), (0xAE81, 2, 106),
    (0xAE82, 2, 107), (0xAE83, 2, 108), (0xAE84, 49, 101), (0xAE85, 49, 102), (0xAE86, 2, 109),
    (0xAE87, 2, 110), (0xAE88, 2, 111), (0xAE89, 2, 112), (0xAE8A, 2, 113), (0xAE8B, 2, 114),
    (0xAE8C, 49, 103), (0xAE8D, 2, 115), (0xAE8E, 2, 116), (0xAE8F, 2, 117), (0xAE90, 2, 118),
    (0xAE91, 2, 119), (0xAE92, 2, 120), (0xAE93, 2, 121), (0xAE94, 2, 122), (0xAE95, 2, 123),
    (0xAE96, 2, 124), (0xAE97, 2, 125), (0xAE98, 2, 126), (0xAE99, 2, 127), (0xAE9A, 2, 128),
    (0xAE9B, 2, 129), (0xAE9C, 2, 130), (0xAE9D, 2, 131), (0xAE9E, 2, 132), (0xAE9F, 2, 133),
    (0xAEA0, 2, 134), (0xAEA1, 2, 135), (0xAEA2, 2, 136), (0xAEA3, 2, 137), (0xAEA4, 2, 138),
    (0xAEA5, 2, 139), (0xAEA6, 2, 140), (0xAEA7, 2, 141), (0xAEA8, 2, 142), (0xAEA9, 2, 143),
    (0xAEAA, 2, 144), (0xAEAB, 2, 145), (0xAEAC, 2, 146), (0xAEAD, 2, 147), (0xAEAE, 2, 148),
    (0xAEAF, 2, 149), (0xAEB0, 2, 150), (0xAEB1, 2, 151), (0xAEB2, 2, 152), (0xAEB3, 2, 153),
    (0xAEB4, 2, 154), (0xAEB5, 2, 155), (0xAEB6, 2, 156), (0xAEB7, 2, 157), (0xAEB8, 2, 158),
    (0xAEB9, 2, 159), (0xAEBA, 2, 160), (0xAEBB, 2, 161), (0xAEBC, 49, 104), (0xAEBD, 49, 105),
    (0xAEBE, 49, 106), (0xAEBF, 2, 162), (0xAEC0, 49, 107), (0xAEC1, 2, 163), (0xAEC2, 2, 164),
    (0xAEC3, 2, 165), (0xAEC4, 49, 108), (0xAEC5, 2, 166), (0xAEC6, 2, 167), (0xAEC7, 2, 168),
    (0xAEC8, 2, 169), (0xAEC9, 2, 170), (0xAECA, 2, 171), (0xAECB, 2, 172), (0xAECC, 49, 109),
    (0xAECD, 49, 110), (0xAECE, 2, 173), (0xAECF, 49, 111), (0xAED0, 49, 112), (0xAED1, 49, 113),
    (0xAED2, 2, 174), (0xAED3, 2, 175), (0xAED4, 2, 176), (0xAED5, 2, 177), (0xAED6, 2, 178),
    (0xAED7, 2, 179), (0xAED8, 49, 114), (0xAED9, 49, 115), (0xAEDA, 2, 180), (0xAEDB, 2, 181),
    (0xAEDC, 49, 116), (0xAEDD, 2, 182), (0xAEDE, 2, 183), (0xAEDF, 2, 184), (0xAEE0, 2, 185),
    (0xAEE1, 2, 186), (0xAEE2, 2, 187), (0xAEE3, 2, 188), (0xAEE4, 2, 189), (0xAEE5, 2, 190),
    (0xAEE6, 3, 1), (0xAEE7, 3, 2), (0xAEE8, 49, 117), (0xAEE9, 3, 3), (0xAEEA, 3, 4),
    (0xAEEB, 49, 118), (0xAEEC, 3, 5), (0xAEED, 49, 119), (0xAEEE, 3, 6), (0xAEEF, 3, 7),
    (0xAEF0, 3, 8), (0xAEF1, 3, 9), (0xAEF2, 3, 10), (0xAEF3, 3, 11), (0xAEF4, 49, 120),
    (0xAEF5, 3, 12), (0xAEF6, 3, 13), (0xAEF7, 3, 14), (0xAEF8, 49, 121), (0xAEF9, 3, 15),
    (0xAEFA, 3, 16), (0xAEFB, 3, 17), (0xAEFC, 49, 122), (0xAEFD, 3, 18), (0xAEFE, 3, 19),
    (0xAEFF, 3, 20), (0xAF00, 3, 21), (0xAF01, 3, 22), (0xAF02, 3, 23), (0xAF03, 3, 24),
    (0xAF04, 3, 25), (0xAF05, 3, 26), (0xAF06, 3, 33), (0xAF07, 49, 123), (0xAF08, 49, 124),
    (0xAF09, 3, 34), (0xAF0A, 3, 35), (0xAF0B, 3, 36), (0xAF0C, 3, 37), (0xAF0D, 49, 125),
    (0xAF0E, 3, 38), (0xAF0F, 3, 39), (0xAF10, 49, 126), (0xAF11, 3, 40), (0xAF12, 3, 41),
    (0xAF13, 3, 42), (0xAF14, 3, 43), (0xAF15, 3, 44), (0xAF16, 3, 45), (0xAF17, 3, 46),
    (0xAF18, 3, 47), (0xAF19, 3, 48), (0xAF1A, 3, 49), (0xAF1B, 3, 50), (0xAF1C, 3, 51),
    (0xAF1D, 3, 52), (0xAF1E, 3, 53), (0xAF1F, 3, 54), (0xAF20, 3, 55), (0xAF21, 3, 56),
    (0xAF22, 3, 57), (0xAF23, 3, 58), (0xAF24, 3, 65), (0xAF25, 3, 66), (0xAF26, 3, 67),
    (0xAF27, 3, 68), (0xAF28, 3, 69), (0xAF29, 3, 70), (0xAF2A, 3, 71), (0xAF2B, 3, 72),
    (0xAF2C, 49, 127), (0xAF2D, 49, 128), (0xAF2E, 3, 73), (0xAF2F, 3, 74), (0xAF30, 49, 129),
    (0xAF31, 3, 75), (0xAF32, 49, 130), (0xAF33, 3, 76), (0xAF34, 49, 131), (0xAF35, 3, 77),
    (0xAF36, 3, 78), (0xAF37, 3, 79), (0xAF38, 3, 80), (0xAF39, 3, 81), (0xAF3A, 3, 82),
    (0xAF3B, 3, 83), (0xAF3C, 49, 132), (0xAF3D, 49, 133), (0xAF3E, 3, 84), (0xAF3F, 49, 134),
    (0xAF40, 3, 85), (0xAF41, 49, 135), (0xAF42, 49, 136), (0xAF43, 49, 137), (0xAF44, 3, 86),
    (0xAF45, 3, 87), (0xAF46, 3, 88), (0xAF47, 3, 89), (0xAF48, 49, 138), (0xAF49, 49, 139),
    (0xAF4A, 3, 90), (0xAF4B, 3, 91), (0xAF4C, 3, 92), (0xAF4D, 3, 93), (0xAF4E, 3, 94),
    (0xAF4F, 3, 95), (0xAF50, 49, 140), (0xAF51, 3, 96), (0xAF52, 3, 97), (0xAF53, 3, 98),
    (0xAF54, 3, 99), (0xAF55, 3, 100), (0xAF56, 3, 101), (0xAF57, 3, 102), (0xAF58, 3, 103),
    (0xAF59, 3, 104), (0xAF5A, 3, 105), (0xAF5B, 3, 106), (0xAF5C, 49, 141), (0xAF5D, 49, 142),
    (0xAF5E, 3, 107), (0xAF5F, 3, 108), (0xAF60, 3, 109), (0xAF61, 3, 110), (0xAF62, 3, 111),
    (0xAF63, 3, 112), (0xAF64, 49, 143), (0xAF65, 49, 144), (0xAF66, 3, 113), (0xAF67, 3, 114),
    (0xAF68, 3, 115), (0xAF69, 3, 116), (0xAF6A, 3, 117), (0xAF6B, 3, 118), (0xAF6C, 3, 119),
    (0xAF6D, 3, 120), (0xAF6E, 3, 121), (0xAF6F, 3, 122), (0xAF70, 3, 123), (0xAF71, 3, 124),
    (0xAF72, 3, 125), (0xAF73, 3, 126), (0xAF74, 3, 127), (0xAF75, 3, 128), (0xAF76, 3, 129),
    (0xAF77, 3, 130), (0xAF78, 3, 131), (0xAF79, 49, 145), (0xAF7A, 3, 132), (0xAF7B, 3, 133),
    (0xAF7C, 3, 134), (0xAF7D, 3, 135), (0xAF7E, 3, 136), (0xAF7F, 3, 137), (0xAF80, 49, 146),
    (0xAF81, 3, 138), (0xAF82, 3, 139), (0xAF83, 3, 140), (0xAF84, 49, 147), (0xAF85, 3, 141),
    (0xAF86, 3, 142), (0xAF87, 3, 143), (0xAF88, 49, 148), (0xAF89, 3, 144), (0xAF8A, 3, 145),
    (0xAF8B, 3, 146), (0xAF8C, 3, 147), (0xAF8D, 3, 148), (0xAF8E, 3, 149), (0xAF8F, 3, 150),
    (0xAF90, 49, 149), (0xAF91, 49, 150), (0xAF92, 3, 151), (0xAF93, 3, 152), (0xAF94, 3, 153),
    (0xAF95, 49, 151), (0xAF96, 3, 154), (0xAF97, 3, 155), (0xAF98, 3, 156), (0xAF99, 3, 157),
    (0xAF9A, 3, 158), (0xAF9B, 3, 159), (0xAF9C, 49, 152), (0xAF9D, 3, 160), (0xAF9E, 3, 161),
    (0xAF9F, 3, 162), (0xAFA0, 3, 163), (0xAFA1, 3, 164), (0xAFA2, 3, 165), (0xAFA3, 3, 166),
    (0xAFA4, 3, 167), (0xAFA5, 3, 168), (0xAFA6, 3, 169), (0xAFA7, 3, 170), (0xAFA8, 3, 171),
    (0xAFA9, 3, 172), (0xAFAA, 3, 173), (0xAFAB, 3, 174), (0xAFAC, 3, 175), (0xAFAD, 3, 176),
    (0xAFAE, 3, 177), (0xAFAF, 3, 178), (0xAFB0, 3, 179), (0xAFB1, 3, 180), (0xAFB2, 3, 181),
    (0xAFB3, 3, 182), (0xAFB4, 3, 183), (0xAFB5, 3, 184), (0xAFB6, 3, 185), (0xAFB7, 3, 186),
    (0xAFB8, 49, 153), (0xAFB9, 49, 154), (0xAFBA, 3, 187), (0xAFBB, 3, 188), (0xAFBC, 49, 155),
    (0xAFBD, 3, 189), (0xAFBE, 3, 190), (0xAFBF, 4, 1), (0xAFC0, 49, 156), (0xAFC1, 4, 2),
    (0xAFC2, 4, 3), (0xAFC3, 4, 4), (0xAFC4, 4, 5), (0xAFC5, 4, 6), (0xAFC6, 4, 7),
    (0xAFC7, 49, 157), (0xAFC8, 49, 158), (0xAFC9, 49, 159), (0xAFCA, 4, 8), (0xAFCB, 49, 160),
    (0xAFCC, 4, 9), (0xAFCD, 49, 161), (0xAFCE, 49, 162), (0xAFCF, 4, 10), (0xAFD0, 4, 11),
    (0xAFD1, 4, 12), (0xAFD2, 4, 13), (0xAFD3, 4, 14), (0xAFD4, 49, 163), (0xAFD5, 4, 15),
    (0xAFD6, 4, 16), (0xAFD7, 4, 17), (0xAFD8, 4, 18), (0xAFD9, 4, 19), (0xAFDA, 4, 20),
    (0xAFDB, 4, 21), (0xAFDC, 49, 164), (0xAFDD, 4, 22), (0xAFDE, 4, 23), (0xAFDF, 4, 24),
    (0xAFE0, 4, 25), (0xAFE1, 4, 26), (0xAFE2, 4, 33), (0xAFE3, 4, 34), (0xAFE4, 4, 35),
    (0xAFE5, 4, 36), (0xAFE6, 4, 37), (0xAFE7, 4, 38), (0xAFE8, 49, 165), (0xAFE9, 49, 166),
    (0xAFEA, 4, 39), (0xAFEB, 4, 40), (0xAFEC, 4, 41), (0xAFED, 4, 42), (0xAFEE, 4, 43),
    (0xAFEF, 4, 44), (0xAFF0, 49, 167), (0xAFF1, 49, 168), (0xAFF2, 4, 45), (0xAFF3, 4, 46),
    (0xAFF4, 49, 169), (0xAFF5, 4, 47), (0xAFF6, 4, 48), (0xAFF7, 4, 49), (0xAFF8, 49, 170),
    (0xAFF9, 4, 50), (0xAFFA, 4, 51), (0xAFFB, 4, 52), (0xAFFC, 4, 53), (0xAFFD, 4, 54),
    (0xAFFE, 4, 55), (0xAFFF, 4, 56), (0xB000, 49, 171), (0xB001, 49, 172), (0xB002, 4, 57),
    (0xB003, 4, 58), (0xB004, 49, 173), (0xB005, 4, 65), (0xB006, 4, 66), (0xB007, 4, 67),
    (0xB008, 4, 68), (0xB009, 4, 69), (0xB00A, 4, 70), (0xB00B, 4, 71), (0xB00C, 49, 174),
    (0xB00D, 4, 72), (0xB00E, 4, 73), (0xB00F, 4, 74), (0xB010, 49, 175), (0xB011, 4, 75),
    (0xB012, 4, 76), (0xB013, 4, 77), (0xB014, 49, 176), (0xB015, 4, 78), (0xB016, 4, 79),
    (0xB017, 4, 80), (0xB018, 4, 81), (0xB019, 4, 82), (0xB01A, 4, 83), (0xB01B, 4, 84),
    (0xB01C, 49, 177), (0xB01D, 49, 178), (0xB01E, 4, 85), (0xB01F, 4, 86), (0xB020, 4, 87),
    (0xB021, 4, 88), (0xB022, 4, 89), (0xB023, 4, 90), (0xB024, 4, 91), (0xB025, 4, 92),
    (0xB026, 4, 93), (0xB027, 4, 94), (0xB028, 49, 179), (0xB029, 4, 95), (0xB02A, 4, 96),
    (0xB02B, 4, 97), (0xB02C, 4, 98), (0xB02D, 4, 99), (0xB02E, 4, 100), (0xB02F, 4, 101),
    (0xB030, 4, 102), (0xB031, 4, 103), (0xB032, 4, 104), (0xB033, 4, 105), (0xB034, 4, 106),
    (0xB035, 4, 107), (0xB036, 4, 108), (0xB037, 4, 109), (0xB038, 4, 110), (0xB039, 4, 111),
    (0xB03A, 4, 112), (0xB03B, 4, 113), (0xB03C, 4, 114), (0xB03D, 4, 115), (0xB03E, 4, 116),
    (0xB03F, 4, 117), (0xB040, 4, 118), (0xB041, 4, 119), (0xB042, 4, 120), (0xB043, 4, 121),
    (0xB044, 49, 180), (0xB045, 49, 181), (0xB046, 4, 122), (0xB047, 4, 123), (0xB048, 49, 182),
    (0xB049, 4, 124), (0xB04A, 49, 183), (0xB04B, 4, 125), (0xB04C, 49, 184), (0xB04D, 4, 126),
    (0xB04E, 49, 185), (0xB04F, 4, 127), (0xB050, 4, 128), (0xB051, 4, 129), (0xB052, 4, 130),
    (0xB053, 49, 186), (0xB054, 49, 187), (0xB055, 49, 188), (0xB056, 4, 131), (0xB057, 49, 189),
    (0xB058, 4, 132), (0xB059, 49, 190), (0xB05A, 4, 133), (0xB05B, 4, 134), (0xB05C, 4, 135),
    (0xB05D, 50, 97), (0xB05E, 4, 136), (0xB05F, 4, 137), (0xB060, 4, 138), (0xB061, 4, 139),
    (0xB062, 4, 140), (0xB063, 4, 141), (0xB064, 4, 142), (0xB065, 4, 143), (0xB066, 4, 144),
    (0xB067, 4, 145), (0xB068, 4, 146), (0xB069, 4, 147), (0xB06A, 4, 148), (0xB06B, 4, 149),
    (0xB06C, 4, 150), (0xB06D, 4, 151), (0xB06E, 4, 152), (0xB06F, 4, 153), (0xB070, 4, 154),
    (0xB071, 4, 155), (0xB072, 4, 156), (0xB073, 4, 157), (0xB074, 4, 158), (0xB075, 4, 159),
    (0xB076, 4, 160), (0xB077, 4, 161), (0xB078, 4, 162), (0xB079, 4, 163), (0xB07A, 4, 164),
    (0xB07B, 4, 165), (0xB07C, 50, 98), (0xB07D, 50, 99), (0xB07E, 4, 166), (0xB07F, 4, 167),
    (0xB080, 50, 100), (0xB081, 4, 168), (0xB082, 4, 169), (0xB083, 4, 170), (0xB084, 50, 101),
    (0xB085, 4, 171), (0xB086, 4, 172), (0xB087, 4, 173), (0xB088, 4, 174), (0xB089, 4, 175),
    (0xB08A, 4, 176), (0xB08B, 4, 177), (0xB08C, 50, 102), (0xB08D, 50, 103), (0xB08E, 4, 178),
    (0xB08F, 50, 104), (0xB090, 4, 179), (0xB091, 50, 105), (0xB092, 4, 180), (0xB093, 4, 181),
    (0xB094, 4, 182), (0xB095, 4, 183), (0xB096, 4, 184), (0xB097, 4, 185), (0xB098, 50, 106),
    (0xB099, 50, 107), (0xB09A, 50, 108), (0xB09B, 4, 186), (0xB09C, 50, 109), (0xB09D, 4, 187),
    (0xB09E, 4, 188), (0xB09F, 50, 110), (0xB0A0, 50, 111), (0xB0A1, 50, 112), (0xB0A2, 50, 113),
    (0xB0A3, 4, 189), (0xB0A4, 4, 190), (0xB0A5, 5, 1), (0xB0A6, 5, 2), (0xB0A7, 5, 3),
    (0xB0A8, 50, 114), (0xB0A9, 50, 115), (0xB0AA, 5, 4), (0xB0AB, 50, 116), (0xB0AC, 50, 117),
    (0xB0AD, 50, 118), (0xB0AE, 50, 119), (0xB0AF, 50, 120), (0xB0B0, 5, 5), (0xB0B1, 50, 121),
    (0xB0B2, 5, 6), (0xB0B3, 50, 122), (0xB0B4, 50, 123), (0xB0B5, 50, 124), (0xB0B6, 5, 7),
    (0xB0B7, 5, 8), (0xB0B8, 50, 125), (0xB0B9, 5, 9), (0xB0BA, 5, 10), (0xB0BB, 5, 11),
    (0xB0BC, 50, 126), (0xB0BD, 5, 12), (0xB0BE, 5, 13), (0xB0BF, 5, 14), (0xB0C0, 5, 15),
    (0xB0C1, 5, 16), (0xB0C2, 5, 17), (0xB0C3, 5, 18), (0xB0C4, 50, 127), (0xB0C5, 50, 128),
    (0xB0C6, 5, 19), (0xB0C7, 50, 129), (0xB0C8, 50, 130), (0xB0C9, 50, 131), (0xB0CA, 5, 20),
    (0xB0CB, 5, 21), (0xB0CC, 5, 22), (0xB0CD, 5, 23), (0xB0CE, 5, 24), (0xB0CF, 5, 25),
    (0xB0D0, 50, 132), (0xB0D1, 50, 133), (0xB0D2, 5, 26), (0xB0D3, 5, 33), (0xB0D4, 50, 134),
    (0xB0D5, 5, 34), (0xB0D6, 5, 35), (0xB0D7, 5, 36), (0xB0D8, 50, 135), (0xB0D9, 5, 37),
    (0xB0DA, 5, 38), (0xB0DB, 5, 39), (0xB0DC, 5, 40), (0xB0DD, 5, 41), (0xB0DE, 5, 42),
    (0xB0DF, 5, 43), (0xB0E0, 50, 136), (0xB0E1, 5, 44), (0xB0E2, 5, 45), (0xB0E3, 5, 46),
    (0xB0E4, 5, 47), (0xB0E5, 50, 137), (0xB0E6, 5, 48), (0xB0E7, 5, 49), (0xB0E8, 5, 50),
    (0xB0E9, 5, 51), (0xB0EA, 5, 52), (0xB0EB, 5, 53), (0xB0EC, 5, 54), (0xB0ED, 5, 55),
    (0xB0EE, 5, 56), (0xB0EF, 5, 57), (0xB0F0, 5, 58), (0xB0F1, 5, 65), (0xB0F2, 5, 66),
    (0xB0F3, 5, 67), (0xB0F4, 5, 68), (0xB0F5, 5, 69), (0xB0F6, 5, 70), (0xB0F7, 5, 71),
    (0xB0F8, 5, 72), (0xB0F9, 5, 73), (0xB0FA, 5, 74), (0xB0FB, 5, 75), (0xB0FC, 5, 76),
    (0xB0FD, 5, 77), (0xB0FE, 5, 78), (0xB0FF, 5, 79), (0xB100, 5, 80), (0xB101, 5, 81),
    (0xB102, 5, 82), (0xB103, 5, 83), (0xB104, 5, 84), (0xB105, 5, 85), (0xB106, 5, 86),
    (0xB107, 5, 87), (0xB108, 50, 138), (0xB109, 50, 139), (0xB10A, 5, 88), (0xB10B, 50, 140),
    (0xB10C, 50, 141), (0xB10D, 5, 89), (0xB10E, 5, 90), (0xB10F, 5, 91), (0xB110, 50, 142),
    (0xB111, 5, 92), (0xB112, 50, 143), (0xB113, 50, 144), (0xB114, 5, 93), (0xB115, 5, 94),
    (0xB116, 5, 95), (0xB117, 5, 96), (0xB118, 50, 145), (0xB119, 50, 146), (0xB11A, 5, 97),
    (0xB11B, 50, 147), (0xB11C, 50, 148), (0xB11D, 50, 149), (0xB11E, 5, 98), (0xB11F, 5, 99),
    (0xB120, 5, 100), (0xB121, 5, 101), (0xB122, 5, 102), (0xB123, 50, 150), (0xB124, 50, 151),
    (0xB125, 50, 152), (0xB126, 5, 103), (0xB127, 5, 104), (0xB128, 50, 153), (0xB129, 5, 105),
    (0xB12A, 5, 106), (0xB12B, 5, 107), (0xB12C, 50, 154), (0xB12D, 5, 108), (0xB12E, 5, 109),
    (0xB12F, 5, 110), (0xB130, 5, 111), (0xB131, 5, 112), (0xB132, 5, 113), (0xB133, 5, 114),
    (0xB134, 50, 155), (0xB135, 50, 156), (0xB136, 5, 115), (0xB137, 50, 157), (0xB138, 50, 158),
    (0xB139, 50, 159), (0xB13A, 5, 116), (0xB13B, 5, 117), (0xB13C, 5, 118), (0xB13D, 5, 119),
    (0xB13E, 5, 120), (0xB13F, 5, 121), (0xB140, 50, 160), (0xB141, 50, 161), (0xB142, 5, 122),
    (0xB143, 5, 123), (0xB144, 50, 162), (0xB145, 5, 124), (0xB146, 5, 125), (0xB147, 5, 126),
    (0xB148, 50, 163), (0xB149, 5, 127), (0xB14A, 5, 128), (0xB14B, 5, 129), (0xB14C, 5, 130),
    (0xB14D, 5, 131), (0xB14E, 5, 132), (0xB14F, 5, 133), (0xB150, 50, 164), (0xB151, 50, 165),
    (0xB152, 5, 134), (0xB153, 5, 135), (0xB154, 50, 166), (0xB155, 50, 167), (0xB156, 5, 136),
    (0xB157, 5, 137), (0xB158, 50, 168), (0xB159, 5, 138), (0xB15A, 5, 139), (0xB15B, 5, 140),
    (0xB15C, 50, 169), (0xB15D, 5, 141), (0xB15E, 5, 142), (0xB15F, 5, 143), (0xB160, 50, 170),
    (0xB161, 5, 144), (0xB162, 5, 145), (0xB163, 5, 146), (0xB164, 5, 147), (0xB165, 5, 148),
    (0xB166, 5, 149), (0xB167, 5, 150), (0xB168, 5, 151), (0xB169, 5, 152), (0xB16A, 5, 153),
    (0xB16B, 5, 154), (0xB16C, 5, 155), (0xB16D, 5, 156), (0xB16E, 5, 157), (0xB16F, 5, 158),
    (0xB170, 5, 159), (0xB171, 5, 160), (0xB172, 5, 161), (0xB173, 5, 162), (0xB174, 5, 163),
    (0xB175, 5, 164), (0xB176, 5, 165), (0xB177, 5, 166), (0xB178, 50, 171), (0xB179, 50, 172),
    (0xB17A, 5, 167), (0xB17B, 5, 168), (0xB17C, 50, 173), (0xB17D, 5, 169), (0xB17E, 5, 170),
    (0xB17F, 5, 171), (0xB180, 50, 174), (0xB181, 5, 172), (0xB182, 50, 175), (0xB183, 5, 173),
    (0xB184, 5, 174), (0xB185, 5, 175), (0xB186, 5, 176), (0xB187, 5, 177), (0xB188, 50, 176),
    (0xB189, 50, 177), (0xB18A, 5, 178), (0xB18B, 50, 178), (0xB18C, 5, 179), (0xB18D, 50, 179),
    (0xB18E, 5, 180), (0xB18F, 5, 181), (0xB190, 5, 182), (0xB191, 5, 183), (0xB192, 50, 180),
    (0xB193, 50, 181), (0xB194, 50, 182), (0xB195, 5, 184), (0xB196, 5, 185), (0xB197, 5, 186),
    (0xB198, 50, 183), (0xB199, 5, 187), (0xB19A, 5, 188), (0xB19B, 5, 189), (0xB19C, 50, 184),
    (0xB19D, 5, 190), (0xB19E, 6, 1), (0xB19F, 6, 2), (0xB1A0, 6, 3), (0xB1A1, 6, 4),
    (0xB1A2, 6, 5), (0xB1A3, 6, 6), (0xB1A4, 6, 7), (0xB1A5, 6, 8), (0xB1A6, 6, 9),
    (0xB1A7, 6, 10), (0xB1A8, 50, 185), (0xB1A9, 6, 11), (0xB1AA, 6, 12), (0xB1AB, 6, 13),
    (0xB1AC, 6, 14), (0xB1AD, 6, 15), (0xB1AE, 6, 16), (0xB1AF, 6, 17), (0xB1B0, 6, 18),
    (0xB1B1, 6, 19), (0xB1B2, 6, 20), (0xB1B3, 6, 21), (0xB1B4, 6, 22), (0xB1B5, 6, 23),
    (0xB1B6, 6, 24), (0xB1B7, 6, 25), (0xB1B8, 6, 26), (0xB1B9, 6, 33), (0xB1BA, 6, 34),
    (0xB1BB, 6, 35), (0xB1BC, 6, 36), (0xB1BD, 6, 37), (0xB1BE, 6, 38), (0xB1BF, 6, 39),
    (0xB1C0, 6, 40), (0xB1C1, 6, 41), (0xB1C2, 6, 42), (0xB1C3, 6, 43), (0xB1C4, 6, 44),
    (0xB1C5, 6, 45), (0xB1C6, 6, 46), (0xB1C7, 6, 47), (0xB1C8, 6, 48), (0xB1C9, 6, 49),
    (0xB1CA, 6, 50), (0xB1CB, 6, 51), (0xB1CC, 50, 186), (0xB1CD, 6, 52), (0xB1CE, 6, 53),
    (0xB1CF, 6, 54), (0xB1D0, 50, 187), (0xB1D1, 6, 55), (0xB1D2, 6, 56), (0xB1D3, 6, 57),
    (0xB1D4, 50, 188), (0xB1D5, 6, 58), (0xB1D6, 6, 65), (0xB1D7, 6, 66), (0xB1D8, 6, 67),
    (0xB1D9, 6, 68), (0xB1DA, 6, 69), (0xB1DB, 6, 70), (0xB1DC, 50, 189), (0xB1DD, 50, 190),
    (0xB1DE, 6, 71), (0xB1DF, 51, 97), (0xB1E0, 6, 72), (0xB1E1, 6, 73), (0xB1E2, 6, 74),
    (0xB1E3, 6, 75), (0xB1E4, 6, 76), (0xB1E5, 6, 77), (0xB1E6, 6, 78), (0xB1E7, 6, 79),
    (0xB1E8, 51, 98), (0xB1E9, 51, 99), (0xB1EA, 6, 80), (0xB1EB, 6, 81), (0xB1EC, 51, 100),
    (0xB1ED, 6, 82), (0xB1EE, 6, 83), (0xB1EF, 6, 84), (0xB1F0, 51, 101), (0xB1F1, 6, 85),
    (0xB1F2, 6, 86), (0xB1F3, 6, 87), (0xB1F4, 6, 88), (0xB1F5, 6, 89), (0xB1F6, 6, 90),
    (0xB1F7, 6, 91), (0xB1F8, 6, 92), (0xB1F9, 51, 102), (0xB1FA, 6, 93), (0xB1FB, 51, 103),
    (0xB1FC, 6, 94), (0xB1FD, 51, 104), (0xB1FE, 6, 95), (0xB1FF, 6, 96), (0xB200, 6, 97),
    (0xB201, 6, 98), (0xB202, 6, 99), (0xB203, 6, 100), (0xB204, 51, 105), (0xB205, 51, 106),
    (0xB206, 6, 101), (0xB207, 6, 102), (0xB208, 51, 107), (0xB209, 6, 103), (0xB20A, 6, 104),
    (0xB20B, 51, 108), (0xB20C, 51, 109), (0xB20D, 6, 105), (0xB20E, 6, 106), (0xB20F, 6, 107),
    (0xB210, 6, 108), (0xB211, 6, 109), (0xB212, 6, 110), (0xB213, 6, 111), (0xB214, 51, 110),
    (0xB215, 51, 111), (0xB216, 6, 112), (0xB217, 51, 112), (0xB218, 6, 113), (0xB219, 51, 113),
    (0xB21A, 6, 114), (0xB21B, 6, 115), (0xB21C, 6, 116), (0xB21D, 6, 117), (0xB21E, 6, 118),
    (0xB21F, 6, 119), (0xB220, 51, 114), (0xB221, 6, 120), (0xB222, 6, 121), (0xB223, 6, 122),
    (0xB224, 6, 123), (0xB225, 6, 124), (0xB226, 6, 125), (0xB227, 6, 126), (0xB228, 6, 127),
    (0xB229, 6, 128), (0xB22A, 6, 129), (0xB22B, 6, 130), (0xB22C, 6, 131), (0xB22D, 6, 132),
    (0xB22E, 6, 133), (0xB22F, 6, 134), (0xB230, 6, 135), (0xB231, 6, 136), (0xB232, 6, 137),
    (0xB233, 6, 138), (0xB234, 51, 115), (0xB235, 6, 139), (0xB236, 6, 140), (0xB237, 6, 141),
    (0xB238, 6, 142), (0xB239, 6, 143), (0xB23A, 6, 144), (0xB23B, 6, 145), (0xB23C, 51, 116),
    (0xB23D, 6, 146), (0xB23E, 6, 147), (0xB23F, 6, 148), (0xB240, 6, 149), (0xB241, 6, 150),
    (0xB242, 6, 151), (0xB243, 6, 152), (0xB244, 6, 153), (0xB245, 6, 154), (0xB246, 6, 155),
    (0xB247, 6, 156), (0xB248, 6, 157), (0xB249, 6, 158), (0xB24A, 6, 159), (0xB24B, 6, 160),
    (0xB24C, 6, 161), (0xB24D, 6, 162), (0xB24E, 6, 163), (0xB24F, 6, 164), (0xB250, 6, 165),
    (0xB251, 6, 166), (0xB252, 6, 167), (0xB253, 6, 168), (0xB254, 6, 169), (0xB255, 6, 170),
    (0xB256, 6, 171), (0xB257, 6, 172), (0xB258, 51, 117), (0xB259, 6, 173), (0xB25A, 6, 174),
    (0xB25B, 6, 175), (0xB25C, 51, 118), (0xB25D, 6, 176), (0xB25E, 6, 177), (0xB25F, 6, 178),
    (0xB260, 51, 119), (0xB261, 6, 179), (0xB262, 6, 180), (0xB263, 6, 181), (0xB264, 6, 182),
    (0xB265, 6, 183), (0xB266, 6, 184), (0xB267, 6, 185), (0xB268, 51, 120), (0xB269, 51, 121),
    (0xB26A, 6, 186), (0xB26B, 6, 187), (0xB26C, 6, 188), (0xB26D, 6, 189), (0xB26E, 6, 190),
    (0xB26F, 7, 1), (0xB270, 7, 2), (0xB271, 7, 3), (0xB272, 7, 4), (0xB273, 7, 5),
    (0xB274, 51, 122), (0xB275, 51, 123), (0xB276, 7, 6), (0xB277, 7, 7), (0xB278, 7, 8),
    (0xB279, 7, 9), (0xB27A, 7, 10), (0xB27B, 7, 11), (0xB27C, 51, 124), (0xB27D, 7, 12),
    (0xB27E, 7, 13), (0xB27F, 7, 14), (0xB280, 7, 15), (0xB281, 7, 16), (0xB282, 7, 17),
    (0xB283, 7, 18), (0xB284, 51, 125), (0xB285, 51, 126), (0xB286, 7, 19), (0xB287, 7, 20),
    (0xB288, 7, 21), (0xB289, 51, 127), (0xB28A, 7, 22), (0xB28B, 7, 23), (0xB28C, 7, 24),
    (0xB28D, 7, 25), (0xB28E, 7, 26), (0xB28F, 7, 33), (0xB290, 51, 128), (0xB291, 51, 129),
    (0xB292, 7, 34), (0xB293, 7, 35), (0xB294, 51, 130), (0xB295, 7, 36), (0xB296, 7, 37),
    (0xB297, 7, 38), (0xB298, 51, 131), (0xB299, 51, 132), (0xB29A, 51, 133), (0xB29B, 7, 39),
    (0xB29C, 7, 40), (0xB29D, 7, 41), (0xB29E, 7, 42), (0xB29F, 7, 43), (0xB2A0, 51, 134),
    (0xB2A1, 51, 135), (0xB2A2, 7, 44), (0xB2A3, 51, 136), (0xB2A4, 7, 45), (0xB2A5, 51, 137),
    (0xB2A6, 51, 138), (0xB2A7, 7, 46), (0xB2A8, 7, 47), (0xB2A9, 7, 48), (0xB2AA, 51, 139),
    (0xB2AB, 7, 49), (0xB2AC, 51, 140), (0xB2AD, 7, 50), (0xB2AE, 7, 51), (0xB2AF, 7, 52),
    (0xB2B0, 51, 141), (0xB2B1, 7, 53), (0xB2B2, 7, 54), (0xB2B3, 7, 55), (0xB2B4, 51, 142),
    (0xB2B5, 7, 56), (0xB2B6, 7, 57), (0xB2B7, 7, 58), (0xB2B8, 7, 65), (0xB2B9, 7, 66),
    (0xB2BA, 7, 67), (0xB2BB, 7, 68), (0xB2BC, 7, 69), (0xB2BD, 7, 70), (0xB2BE, 7, 71),
    (0xB2BF, 7, 72), (0xB2C0, 7, 73), (0xB2C1, 7, 74), (0xB2C2, 7, 75), (0xB2C3, 7, 76),
    (0xB2C4, 7, 77), (0xB2C5, 7, 78), (0xB2C6, 7, 79), (0xB2C7, 7, 80), (0xB2C8, 51, 143),
    (0xB2C9, 51, 144), (0xB2CA, 7, 81), (0xB2CB, 7, 82), (0xB2CC, 51, 145), (0xB2CD, 7, 83),
    (0xB2CE, 7, 84), (0xB2CF, 7, 85), (0xB2D0, 51, 146), (0xB2D1, 7, 86), (0xB2D2, 51, 147),
    (0xB2D3, 7, 87), (0xB2D4, 7, 88), (0xB2D5, 7, 89), (0xB2D6, 7, 90), (0xB2D7, 7, 91),
    (0xB2D8, 51, 148), (0xB2D9, 51, 149), (0xB2DA, 7, 92), (0xB2DB, 51, 150), (0xB2DC, 7, 93),
    (0xB2DD, 51, 151), (0xB2DE, 7, 94), (0xB2DF, 7, 95), (0xB2E0, 7, 96), (0xB2E1, 7, 97),
    (0xB2E2, 51, 152), (0xB2E3, 7, 98), (0xB2E4, 51, 153), (0xB2E5, 51, 154), (0xB2E6, 51, 155),
    (0xB2E7, 7, 99), (0xB2E8, 51, 156), (0xB2E9, 7, 100), (0xB2EA, 7, 101), (0xB2EB, 51, 157),
    (0xB2EC, 51, 158), (0xB2ED, 51, 159), (0xB2EE, 51, 160), (0xB2EF, 51, 161), (0xB2F0, 7, 102),
    (0xB2F1, 7, 103), (0xB2F2, 7, 104), (0xB2F3, 51, 162), (0xB2F4, 51, 163), (0xB2F5, 51, 164),
    (0xB2F6, 7, 105), (0xB2F7, 51, 165), (0xB2F8, 51, 166), (0xB2F9, 51, 167), (0xB2FA, 51, 168),
    (0xB2FB, 51, 169), (0xB2FC, 7, 106), (0xB2FD, 7, 107), (0xB2FE, 7, 108), (0xB2FF, 51, 170),
    (0xB300, 51, 171), (0xB301, 51, 172), (0xB302, 7, 109), (0xB303, 7, 110), (0xB304, 51, 173),
    (0xB305, 7, 111), (0xB306, 7, 112), (0xB307, 7, 113), (0xB308, 51, 174), (0xB309, 7, 114),
    (0xB30A, 7, 115), (0xB30B, 7, 116), (0xB30C, 7, 117), (0xB30D, 7, 118), (0xB30E, 7, 119),
    (0xB30F, 7, 120), (0xB310, 51, 175), (0xB311, 51, 176), (0xB312, 7, 121), (0xB313, 51, 177),
    (0xB314, 51, 178), (0xB315, 51, 179), (0xB316, 7, 122), (0xB317, 7, 123), (0xB318, 7, 124),
    (0xB319, 7, 125), (0xB31A, 7, 126), (0xB31B, 7, 127), (0xB31C, 51, 180), (0xB31D, 7, 128),
    (0xB31E, 7, 129), (0xB31F, 7, 130), (0xB320, 7, 131), (0xB321, 7, 132), (0xB322, 7, 133),
    (0xB323, 7, 134), (0xB324, 7, 135), (0xB325, 7, 136), (0xB326, 7, 137), (0xB327, 7, 138),
    (0xB328, 7, 139), (0xB329, 7, 140), (0xB32A, 7, 141), (0xB32B, 7, 142), (0xB32C, 7, 143),
    (0xB32D, 7, 144), (0xB32E, 7, 145), (0xB32F, 7, 146), (0xB330, 7, 147), (0xB331, 7, 148),
    (0xB332, 7, 149), (0xB333, 7, 150), (0xB334, 7, 151), (0xB335, 7, 152), (0xB336, 7, 153),
    (0xB337, 7, 154), (0xB338, 7, 155), (0xB339, 7, 156), (0xB33A, 7, 157), (0xB33B, 7, 158),
    (0xB33C, 7, 159), (0xB33D, 7, 160), (0xB33E, 7, 161), (0xB33F, 7, 162), (0xB340, 7, 163),
    (0xB341, 7, 164), (0xB342, 7, 165), (0xB343, 7, 166), (0xB344, 7, 167), (0xB345, 7, 168),
    (0xB346, 7, 169), (0xB347, 7, 170), (0xB348, 7, 171), (0xB349, 7, 172), (0xB34A, 7, 173),
    (0xB34B, 7, 174), (0xB34C, 7, 175), (0xB34D, 7, 176), (0xB34E, 7, 177), (0xB34F, 7, 178),
    (0xB350, 7, 179), (0xB351, 7, 180), (0xB352, 7, 181), (0xB353, 7, 182), (0xB354, 51, 181),
    (0xB355, 51, 182), (0xB356, 51, 183), (0xB357, 7, 183), (0xB358, 51, 184), (0xB359, 7, 184),
    (0xB35A, 7, 185), (0xB35B, 51, 185), (0xB35C, 51, 186), (0xB35D, 7, 186), (0xB35E, 51, 187),
    (0xB35F, 51, 188), (0xB360, 7, 187), (0xB361, 7, 188), (0xB362, 7, 189), (0xB363, 7, 190),
    (0xB364, 51, 189), (0xB365, 51, 190), (0xB366, 8, 1), (0xB367, 52, 97), (0xB368, 8, 2),
    (0xB369, 52, 98), (0xB36A, 8, 3), (0xB36B, 52, 99), (0xB36C, 8, 4), (0xB36D, 8, 5),
    (0xB36E, 52, 100), (0xB36F, 8, 6), (0xB370, 52, 101), (0xB371, 52, 102), (0xB372, 8, 7),
    (0xB373, 8, 8), (0xB374, 52, 103), (0xB375, 8, 9), (0xB376, 8, 10), (0xB377, 8, 11),
    (0xB378, 52, 104), (0xB379, 8, 12), (0xB37A, 8, 13), (0xB37B, 8, 14), (0xB37C, 8, 15),
    (0xB37D, 8, 16), (0xB37E, 8, 17), (0xB37F, 8, 18), (0xB380, 52, 105), (0xB381, 52, 106),
    (0xB382, 8, 19), (0xB383, 52, 107), (0xB384, 52, 108), (0xB385, 52, 109), (0xB386, 8, 20),
    (0xB387, 8, 21), (0xB388, 8, 22), (0xB389, 8, 23), (0xB38A, 8, 24), (0xB38B, 8, 25),
    (0xB38C, 52, 110), (0xB38D, 8, 26), (0xB38E, 8, 33), (0xB38F, 8, 34), (0xB390, 52, 111),
    (0xB391, 8, 35), (0xB392, 8, 36), (0xB393, 8, 37), (0xB394, 52, 112), (0xB395, 8, 38),
    (0xB396, 8, 39), (0xB397, 8, 40), (0xB398, 8, 41), (0xB399, 8, 42), (0xB39A, 8, 43),
    (0xB39B, 8, 44), (0xB39C, 8, 45), (0xB39D, 8, 46), (0xB39E, 8, 47), (0xB39F, 8, 48),
    (0xB3A0, 52, 113), (0xB3A1, 52, 114), (0xB3A2, 8, 49), (0xB3A3, 8, 50), (0xB3A4, 8, 51),
    (0xB3A5, 8, 52), (0xB3A6, 8, 53), (0xB3A7, 8, 54), (0xB3A8, 52, 115), (0xB3A9, 8, 55),
    (0xB3AA, 8, 56), (0xB3AB, 8, 57), (0xB3AC, 52, 116), (0xB3AD, 8, 58), (0xB3AE, 8, 65),
    (0xB3AF, 8, 66), (0xB3B0, 8, 67), (0xB3B1, 8, 68), (0xB3B2, 8, 69), (0xB3B3, 8, 70),
    (0xB3B4, 8, 71), (0xB3B5, 8, 72), (0xB3B6, 8, 73), (0xB3B7, 8, 74), (0xB3B8, 8, 75),
    (0xB3B9, 8, 76), (0xB3BA, 8, 77), (0xB3BB, 8, 78), (0xB3BC, 8, 79), (0xB3BD, 8, 80),
    (0xB3BE, 8, 81), (0xB3BF, 8, 82), (0xB3C0, 8, 83), (0xB3C1, 8, 84), (0xB3C2, 8, 85),
    (0xB3C3, 8, 86), (0xB3C4, 52, 117), (0xB3C5, 52, 118), (0xB3C6, 8, 87), (0xB3C7, 8, 88),
    (0xB3C8, 52, 119), (0xB3C9, 8, 89), (0xB3CA, 8, 90), (0xB3CB, 52, 120), (0xB3CC, 52, 121),
    (0xB3CD, 8, 91), (0xB3CE, 52, 122), (0xB3CF, 8, 92), (0xB3D0, 52, 123), (0xB3D1, 8, 93),
    (0xB3D2, 8, 94), (0xB3D3, 8, 95), (0xB3D4, 52, 124), (0xB3D5, 52, 125), (0xB3D6, 8, 96),
    (0xB3D7, 52, 126), (0xB3D8, 8, 97), (0xB3D9, 52, 127), (0xB3DA, 8, 98), (0xB3DB, 52, 128),
    (0xB3DC, 8, 99), (0xB3DD, 52, 129), (0xB3DE, 8, 100), (0xB3DF, 8, 101), (0xB3E0, 52, 130),
    (0xB3E1, 8, 102), (0xB3E2, 8, 103), (0xB3E3, 8, 104), (0xB3E4, 52, 131), (0xB3E5, 8, 105),
    (0xB3E6, 8, 106), (0xB3E7, 8, 107), (0xB3E8, 52, 132), (0xB3E9, 8, 108), (0xB3EA, 8, 109),
    (0xB3EB, 8, 110), (0xB3EC, 8, 111), (0xB3ED, 8, 112), (0xB3EE, 8, 113), (0xB3EF, 8, 114),
    (0xB3F0, 8, 115), (0xB3F1, 8, 116), (0xB3F2, 8, 117), (0xB3F3, 8, 118), (0xB3F4, 8, 119),
    (0xB3F5, 8, 120), (0xB3F6, 8, 121), (0xB3F7, 8, 122), (0xB3F8, 8, 123), (0xB3F9, 8, 124),
    (0xB3FA, 8, 125), (0xB3FB, 8, 126), (0xB3FC, 52, 133), (0xB3FD, 8, 127), (0xB3FE, 8, 128),
    (0xB3FF, 8, 129), (0xB400, 8, 130), (0xB401, 8, 131), (0xB402, 8, 132), (0xB403, 8, 133),
    (0xB404, 8, 134), (0xB405, 8, 135), (0xB406, 8, 136), (0xB407, 8, 137), (0xB408, 8, 138),
    (0xB409, 8, 139), (0xB40A, 8, 140), (0xB40B, 8, 141), (0xB40C, 8, 142), (0xB40D, 8, 143),
    (0xB40E, 8, 144), (0xB40F, 8, 145), (0xB410, 52, 134), (0xB411, 8, 146), (0xB412, 8, 147),
    (0xB413, 8, 148), (0xB414, 8, 149), (0xB415, 8, 150), (0xB416, 8, 151), (0xB417, 8, 152),
    (0xB418, 52, 135), (0xB419, 8, 153), (0xB41A, 8, 154), (0xB41B, 8, 155), (0xB41C, 52, 136),
    (0xB41D, 8, 156), (0xB41E, 8, 157), (0xB41F, 8, 158), (0xB420, 52, 137), (0xB421, 8, 159),
    (0xB422, 8, 160), (0xB423, 8, 161), (0xB424, 8, 162), (0xB425, 8, 163), (0xB426, 8, 164),
    (0xB427, 8, 165), (0xB428, 52, 138), (0xB429, 52, 139), (0xB42A, 8, 166), (0xB42B, 52, 140),
    (0xB42C, 8, 167), (0xB42D, 8, 168), (0xB42E, 8, 169), (0xB42F, 8, 170), (0xB430, 8, 171),
    (0xB431, 8, 172), (0xB432, 8, 173), (0xB433, 8, 174), (0xB434, 52, 141), (0xB435, 8, 175),
    (0xB436, 8, 176), (0xB437, 8, 177), (0xB438, 8, 178), (0xB439, 8, 179), (0xB43A, 8, 180),
    (0xB43B, 8, 181), (0xB43C, 8, 182), (0xB43D, 8, 183), (0xB43E, 8, 184), (0xB43F, 8, 185),
    (0xB440, 8, 186), (0xB441, 8, 187), (0xB442, 8, 188), (0xB443, 8, 189), (0xB444, 8, 190),
    (0xB445, 9, 1), (0xB446, 9, 2), (0xB447, 9, 3), (0xB448, 9, 4), (0xB449, 9, 5),
    (0xB44A, 9, 6), (0xB44B, 9, 7), (0xB44C, 9, 8), (0xB44D, 9, 9), (0xB44E, 9, 10),
    (0xB44F, 9, 11), (0xB450, 52, 142), (0xB451, 52, 143), (0xB452, 9, 12), (0xB453, 9, 13),
    (0xB454, 52, 144), (0xB455, 9, 14), (0xB456, 9, 15), (0xB457, 9, 16), (0xB458, 52, 145),
    (0xB459, 9, 17), (0xB45A, 9, 18), (0xB45B, 9, 19), (0xB45C, 9, 20), (0xB45D, 9, 21),
    (0xB45E, 9, 22), (0xB45F, 9, 23), (0xB460, 52, 146), (0xB461, 52, 147), (0xB462, 9, 24),
    (0xB463, 52, 148), (0xB464, 9, 25), (0xB465, 52, 149), (0xB466, 9, 26), (0xB467, 9, 33),
    (0xB468, 9, 34), (0xB469, 9, 35), (0xB46A, 9, 36), (0xB46B, 9, 37), (0xB46C, 52, 150),
    (0xB46D, 9, 38), (0xB46E, 9, 39), (0xB46F, 9, 40), (0xB470, 9, 41), (0xB471, 9, 42),
    (0xB472, 9, 43), (0xB473, 9, 44), (0xB474, 9, 45), (0xB475, 9, 46), (0xB476, 9, 47),
    (0xB477, 9, 48), (0xB478, 9, 49), (0xB479, 9, 50), (0xB47A, 9, 51), (0xB47B, 9, 52),
    (0xB47C, 9, 53), (0xB47D, 9, 54), (0xB47E, 9, 55), (0xB47F, 9, 56), (0xB480, 52, 151),
    (0xB481, 9, 57), (0xB482, 9, 58), (0xB483, 9, 65), (0xB484, 9, 66), (0xB485, 9, 67),
    (0xB486, 9, 68), (0xB487, 9, 69), (0xB488, 52, 152), (0xB489, 9, 70), (0xB48A, 9, 71),
    (0xB48B, 9, 72), (0xB48C, 9, 73), (0xB48D, 9, 74), (0xB48E, 9, 75), (0xB48F, 9, 76),
    (0xB490, 9, 77), (0xB491, 9, 78), (0xB492, 9, 79), (0xB493, 9, 80), (0xB494, 9, 81),
    (0xB495, 9, 82), (0xB496, 9, 83), (0xB497, 9, 84), (0xB498, 9, 85), (0xB499, 9, 86),
    (0xB49A, 9, 87), (0xB49B, 9, 88), (0xB49C, 9, 89), (0xB49D, 52, 153), (0xB49E, 9, 90),
    (0xB49F, 9, 91), (0xB4A0, 9, 92), (0xB4A1, 9, 93), (0xB4A2, 9, 94), (0xB4A3, 9, 95),
    (0xB4A4, 52, 154), (0xB4A5, 9, 96), (0xB4A6, 9, 97), (0xB4A7, 9, 98), (0xB4A8, 52, 155),
    (0xB4A9, 9, 99), (0xB4AA, 9, 100), (0xB4AB, 9, 101), (0xB4AC, 52, 156), (0xB4AD, 9, 102),
    (0xB4AE, 9, 103), (0xB4AF, 9, 104), (0xB4B0, 9, 105), (0xB4B1, 9, 106), (0xB4B2, 9, 107),
    (0xB4B3, 9, 108), (0xB4B4, 9, 109), (0xB4B5, 52, 157), (0xB4B6, 9, 110), (0xB4B7, 52, 158),
    (0xB4B8, 9, 111), (0xB4B9, 52, 159), (0xB4BA, 9, 112), (0xB4BB, 9, 113), (0xB4BC, 9, 114),
    (0xB4BD, 9, 115), (0xB4BE, 9, 116), (0xB4BF, 9, 117), (0xB4C0, 52, 160), (0xB4C1, 9, 118),
    (0xB4C2, 9, 119), (0xB4C3, 9, 120), (0xB4C4, 52, 161), (0xB4C5, 9, 121), (0xB4C6, 9, 122),
    (0xB4C7, 9, 123), (0xB4C8, 52, 162), (0xB4C9, 9, 124), (0xB4CA, 9, 125), (0xB4CB, 9, 126),
    (0xB4CC, 9, 127), (0xB4CD, 9, 128), (0xB4CE, 9, 129), (0xB4CF, 9, 130), (0xB4D0, 52, 163),
    (0xB4D1, 9, 131), (0xB4D2, 9, 132), (0xB4D3, 9, 133), (0xB4D4, 9, 134), (0xB4D5, 52, 164),
    (0xB4D6, 9, 135), (0xB4D7, 9, 136), (0xB4D8, 9, 137), (0xB4D9, 9, 138), (0xB4DA, 9, 139),
    (0xB4DB, 9, 140), (0xB4DC, 52, 165), (0xB4DD, 52, 166), (0xB4DE, 9, 141), (0xB4DF, 9, 142),
    (0xB4E0, 52, 167), (0xB4E1, 9, 143), (0xB4E2, 9, 144), (0xB4E3, 52, 168), (0xB4E4, 52, 169),
    (0xB4E5, 9, 145), (0xB4E6, 52, 170), (0xB4E7, 9, 146), (0xB4E8, 9, 147), (0xB4E9, 9, 148),
    (0xB4EA, 9, 149), (0xB4EB, 9, 150), (0xB4EC, 52, 171), (0xB4ED, 52, 172), (0xB4EE, 9, 151),
    (0xB4EF, 52, 173), (0xB4F0, 9, 152), (0xB4F1, 52, 174), (0xB4F2, 9, 153), (0xB4F3, 9, 154),
    (0xB4F4, 9, 155), (0xB4F5, 9, 156), (0xB4F6, 9, 157), (0xB4F7, 9, 158), (0xB4F8, 52, 175),
    (0xB4F9, 9, 159), (0xB4FA, 9, 160), (0xB4FB, 9, 161), (0xB4FC, 9, 162), (0xB4FD, 9, 163),
    (0xB4FE, 9, 164), (0xB4FF, 9, 165), (0xB500, 9, 166), (0xB501, 9, 167), (0xB502, 9, 168),
    (0xB503, 9, 169), (0xB504, 9, 170), (0xB505, 9, 171), (0xB506, 9, 172), (0xB507, 9, 173),
    (0xB508, 9, 174), (0xB509, 9, 175), (0xB50A, 9, 176), (0xB50B, 9, 177), (0xB50C, 9, 178),
    (0xB50D, 9, 179), (0xB50E, 9, 180), (0xB50F, 9, 181), (0xB510, 9, 182), (0xB511, 9, 183),
    (0xB512, 9, 184), (0xB513, 9, 185), (0xB514, 52, 176), (0xB515, 52, 177), (0xB516, 9, 186),
    (0xB517, 9, 187), (0xB518, 52, 178), (0xB519, 9, 188), (0xB51A, 9, 189), (0xB51B, 52, 179),
    (0xB51C, 52, 180), (0xB51D, 9, 190), (0xB51E, 10, 1), (0xB51F, 10, 2), (0xB520, 10, 3),
    (0xB521, 10, 4), (0xB522, 10, 5), (0xB523, 10, 6), (0xB524, 52, 181), (0xB525, 52, 182),
    (0xB526, 10, 7), (0xB527, 52, 183), (0xB528, 52, 184), (0xB529, 52, 185), (0xB52A, 52, 186),
    (0xB52B, 10, 8), (0xB52C, 10, 9), (0xB52D, 10, 10), (0xB52E, 10, 11), (0xB52F, 10, 12),
    (0xB530, 52, 187), (0xB531, 52, 188), (0xB532, 10, 13), (0xB533, 10, 14), (0xB534, 52, 189),
    (0xB535, 10, 15), (0xB536, 10, 16), (0xB537, 10, 17), (0xB538, 52, 190), (0xB539, 10, 18),
    (0xB53A, 10, 19), (0xB53B, 10, 20), (0xB53C, 10, 21), (0xB53D, 10, 22), (0xB53E, 10, 23),
    (0xB53F, 10, 24), (0xB540, 53, 97), (0xB541, 53, 98), (0xB542, 10, 25), (0xB543, 53, 99),
    (0xB544, 53, 100), (0xB545, 53, 101), (0xB546, 10, 26), (0xB547, 10, 33), (0xB548, 10, 34),
    (0xB549, 10, 35), (0xB54A, 10, 36), (0xB54B, 53, 102), (0xB54C, 53, 103), (0xB54D, 53, 104),
    (0xB54E, 10, 37), (0xB54F, 10, 38), (0xB550, 53, 105), (0xB551, 10, 39), (0xB552, 10, 40),
    (0xB553, 10, 41), (0xB554, 53, 106), (0xB555, 10, 42), (0xB556, 10, 43), (0xB557, 10, 44),
    (0xB558, 10, 45), (0xB559, 10, 46), (0xB55A, 10, 47), (0xB55B, 10, 48), (0xB55C, 53, 107),
    (0xB55D, 53, 108), (0xB55E, 10, 49), (0xB55F, 53, 109), (0xB560, 53, 110), (0xB561, 53, 111),
    (0xB562, 10, 50), (0xB563, 10, 51), (0xB564, 10, 52), (0xB565, 10, 53), (0xB566, 10, 54),
    (0xB567, 10, 55), (0xB568, 10, 56), (0xB569, 10, 57), (0xB56A, 10, 58), (0xB56B, 10, 65),
    (0xB56C, 10, 66), (0xB56D, 10, 67), (0xB56E, 10, 68), (0xB56F, 10, 69), (0xB570, 10, 70),
    (0xB571, 10, 71), (0xB572, 10, 72), (0xB573, 10, 73), (0xB574, 10, 74), (0xB575, 10, 75),
    (0xB576, 10, 76), (0xB577, 10, 77), (0xB578, 10, 78), (0xB579, 10, 79), (0xB57A, 10, 80),
    (0xB57B, 10, 81), (0xB57C, 10, 82), (0xB57D, 10, 83), (0xB57E, 10, 84), (0xB57F, 10, 85),
    (0xB580, 10, 86), (0xB581, 10, 87), (0xB582, 10, 88), (0xB583, 10, 89), (0xB584, 10, 90),
    (0xB585, 10, 91), (0xB586, 10, 92), (0xB587, 10, 93), (0xB588, 10, 94), (0xB589, 10, 95),
    (0xB58A, 10, 96), (0xB58B, 10, 97), (0xB58C, 10, 98), (0xB58D, 10, 99), (0xB58E, 10, 100),
    (0xB58F, 10, 101), (0xB590, 10, 102), (0xB591, 10, 103), (0xB592, 10, 104), (0xB593, 10, 105),
    (0xB594, 10, 106), (0xB595, 10, 107), (0xB596, 10, 108), (0xB597, 10, 109), (0xB598, 10, 110),
    (0xB599, 10, 111), (0xB59A, 10, 112), (0xB59B, 10, 113), (0xB59C, 10, 114), (0xB59D, 10, 115),
    (0xB59E, 10, 116), (0xB59F, 10, 117), (0xB5A0, 53, 112), (0xB5A1, 53, 113), (0xB5A2, 10, 118),
    (0xB5A3, 10, 119), (0xB5A4, 53, 114), (0xB5A5, 10, 120), (0xB5A6, 10, 121), (0xB5A7, 10, 122),
    (0xB5A8, 53, 115), (0xB5A9, 10, 123), (0xB5AA, 53, 116), (0xB5AB, 53, 117), (0xB5AC, 10, 124),
    (0xB5AD, 10, 125), (0xB5AE, 10, 126), (0xB5AF, 10, 127), (0xB5B0, 53, 118), (0xB5B1, 53, 119),
    (0xB5B2, 10, 128), (0xB5B3, 53, 120), (0xB5B4, 53, 121), (0xB5B5, 53, 122), (0xB5B6, 10, 129),
    (0xB5B7, 10, 130), (0xB5B8, 10, 131), (0xB5B9, 10, 132), (0xB5BA, 10, 133), (0xB5BB, 53, 123),
    (0xB5BC, 53, 124), (0xB5BD, 53, 125), (0xB5BE, 10, 134), (0xB5BF, 10, 135), (0xB5C0, 53, 126),
    (0xB5C1, 10, 136), (0xB5C2, 10, 137), (0xB5C3, 10, 138), (0xB5C4, 53, 127), (0xB5C5, 10, 139),
    (0xB5C6, 10, 140), (0xB5C7, 10, 141), (0xB5C8, 10, 142), (0xB5C9, 10, 143), (0xB5CA, 10, 144),
    (0xB5CB, 10, 145), (0xB5CC, 53, 128), (0xB5CD, 53, 129), (0xB5CE, 10, 146), (0xB5CF, 53, 130),
    (0xB5D0, 53, 131), (0xB5D1, 53, 132), (0xB5D2, 10, 147), (0xB5D3, 10, 148), (0xB5D4, 10, 149),
    (0xB5D5, 10, 150), (0xB5D6, 10, 151), (0xB5D7, 10, 152), (0xB5D8, 53, 133), (0xB5D9, 10, 153),
    (0xB5DA, 10, 154), (0xB5DB, 10, 155), (0xB5DC, 10, 156), (0xB5DD, 10, 157), (0xB5DE, 10, 158),
    (0xB5DF, 10, 159), (0xB5E0, 10, 160), (0xB5E1, 10, 161), (0xB5E2, 10, 162), (0xB5E3, 10, 163),
    (0xB5E4, 10, 164), (0xB5E5, 10, 165), (0xB5E6, 10, 166), (0xB5E7, 10, 167), (0xB5E8, 10, 168),
    (0xB5E9, 10, 169), (0xB5EA, 10, 170), (0xB5EB, 10, 171), (0xB5EC, 53, 134), (0xB5ED, 10, 172),
    (0xB5EE, 10, 173), (0xB5EF, 10, 174), (0xB5F0, 10, 175), (0xB5F1, 10, 176), (0xB5F2, 10, 177),
    (0xB5F3, 10, 178), (0xB5F4, 10, 179), (0xB5F5, 10, 180), (0xB5F6, 10, 181), (0xB5F7, 10, 182),
    (0xB5F8, 10, 183), (0xB5F9, 10, 184), (0xB5FA, 10, 185), (0xB5FB, 10, 186), (0xB5FC, 10, 187),
    (0xB5FD, 10, 188), (0xB5FE, 10, 189), (0xB5FF, 10, 190), (0xB600, 11, 1), (0xB601, 11, 2),
    (0xB602, 11, 3), (0xB603, 11, 4), (0xB604, 11, 5), (0xB605, 11, 6), (0xB606, 11, 7),
    (0xB607, 11, 8), (0xB608, 11, 9), (0xB609, 11, 10), (0xB60A, 11, 11), (0xB60B, 11, 12),
    (0xB60C, 11, 13), (0xB60D, 11, 14), (0xB60E, 11, 15), (0xB60F, 11, 16), (0xB610, 53, 135),
    (0xB611, 53, 136), (0xB612, 11, 17), (0xB613, 11, 18), (0xB614, 53, 137), (0xB615, 11, 19),
    (0xB616, 11, 20), (0xB617, 11, 21), (0xB618, 53, 138), (0xB619, 11, 22), (0xB61A, 11, 23),
    (0xB61B, 11, 24), (0xB61C, 11, 25), (0xB61D, 11, 26), (0xB61E, 11, 33), (0xB61F, 11, 34),
    (0xB620, 11, 35), (0xB621, 11, 36), (0xB622, 11, 37), (0xB623, 11, 38), (0xB624, 11, 39),
    (0xB625, 53, 139), (0xB626, 11, 40), (0xB627, 11, 41), (0xB628, 11, 42), (0xB629, 11, 43),
    (0xB62A, 11, 44), (0xB62B, 11, 45), (0xB62C, 53, 140), (0xB62D, 11, 46), (0xB62E, 11, 47),
    (0xB62F, 11, 48), (0xB630, 11, 49), (0xB631, 11, 50), (0xB632, 11, 51), (0xB633, 11, 52),
    (0xB634, 53, 141), (0xB635, 11, 53), (0xB636, 11, 54), (0xB637, 11, 55), (0xB638, 11, 56),
    (0xB639, 11, 57), (0xB63A, 11, 58), (0xB63B, 11, 65), (0xB63C, 11, 66), (0xB63D, 11, 67),
    (0xB63E, 11, 68), (0xB63F, 11, 69), (0xB640, 11, 70), (0xB641, 11, 71), (0xB642, 11, 72),
    (0xB643, 11, 73), (0xB644, 11, 74), (0xB645, 11, 75), (0xB646, 11, 76), (0xB647, 11, 77),
    (0xB648, 53, 142), (0xB649, 11, 78), (0xB64A, 11, 79), (0xB64B, 11, 80), (0xB64C, 11, 81),
    (0xB64D, 11, 82), (0xB64E, 11, 83), (0xB64F, 11, 84), (0xB650, 11, 85), (0xB651, 11, 86),
    (0xB652, 11, 87), (0xB653, 11, 88), (0xB654, 11, 89), (0xB655, 11, 90), (0xB656, 11, 91),
    (0xB657, 11, 92), (0xB658, 11, 93), (0xB659, 11, 94), (0xB65A, 11, 95), (0xB65B, 11, 96),
    (0xB65C, 11, 97), (0xB65D, 11, 98), (0xB65E, 11, 99), (0xB65F, 11, 100), (0xB660, 11, 101),
    (0xB661, 11, 102), (0xB662, 11, 103), (0xB663, 11, 104), (0xB664, 53, 143), (0xB665, 11, 105),
    (0xB666, 11, 106), (0xB667, 11, 107), (0xB668, 53, 144), (0xB669, 11, 108), (0xB66A, 11, 109),
    (0xB66B, 11, 110), (0xB66C, 11, 111), (0xB66D, 11, 112), (0xB66E, 11, 113), (0xB66F, 11, 114),
    (0xB670, 11, 115), (0xB671, 11, 116), (0xB672, 11, 117), (0xB673, 11, 118), (0xB674, 11, 119),
    (0xB675, 11, 120), (0xB676, 11, 121), (0xB677, 11, 122), (0xB678, 11, 123), (0xB679, 11, 124),
    (0xB67A, 11, 125), (0xB67B, 11, 126), (0xB67C, 11, 127), (0xB67D, 11, 128), (0xB67E, 11, 129),
    (0xB67F, 11, 130), (0xB680, 11, 131), (0xB681, 11, 132), (0xB682, 11, 133), (0xB683, 11, 134),
    (0xB684, 11, 135), (0xB685, 11, 136), (0xB686, 11, 137), (0xB687, 11, 138), (0xB688, 11, 139),
    (0xB689, 11, 140), (0xB68A, 11, 141), (0xB68B, 11, 142), (0xB68C, 11, 143), (0xB68D, 11, 144),
    (0xB68E, 11, 145), (0xB68F, 11, 146), (0xB690, 11, 147), (0xB691, 11, 148), (0xB692, 11, 149),
    (0xB693, 11, 150), (0xB694, 11, 151), (0xB695, 11, 152), (0xB696, 11, 153), (0xB697, 11, 154),
    (0xB698, 11, 155), (0xB699, 11, 156), (0xB69A, 11, 157), (0xB69B, 11, 158), (0xB69C, 53, 145),
    (0xB69D, 53, 146), (0xB69E, 11, 159), (0xB69F, 11, 160), (0xB6A0, 53, 147), (0xB6A1, 11, 161),
    (0xB6A2, 11, 162), (0xB6A3, 11, 163), (0xB6A4, 53, 148), (0xB6A5, 11, 164), (0xB6A6, 11, 165),
    (0xB6A7, 11, 166), (0xB6A8, 11, 167), (0xB6A9, 11, 168), (0xB6AA, 11, 169), (0xB6AB, 53, 149),
    (0xB6AC, 53, 150), (0xB6AD, 11, 170), (0xB6AE, 11, 171), (0xB6AF, 11, 172), (0xB6B0, 11, 173),
    (0xB6B1, 53, 151), (0xB6B2, 11, 174), (0xB6B3, 11, 175), (0xB6B4, 11, 176), (0xB6B5, 11, 177),
    (0xB6B6, 11, 178), (0xB6B7, 11, 179), (0xB6B8, 11, 180), (0xB6B9, 11, 181), (0xB6BA, 11, 182),
    (0xB6BB, 11, 183), (0xB6BC, 11, 184), (0xB6BD, 11, 185), (0xB6BE, 11, 186), (0xB6BF, 11, 187),
    (0xB6C0, 11, 188), (0xB6C1, 11, 189), (0xB6C2, 11, 190), (0xB6C3, 12, 1), (0xB6C4, 12, 2),
    (0xB6C5, 12, 3), (0xB6C6, 12, 4), (0xB6C7, 12, 5), (0xB6C8, 12, 6), (0xB6C9, 12, 7),
    (0xB6CA, 12, 8), (0xB6CB, 12, 9), (0xB6CC, 12, 10), (0xB6CD, 12, 11), (0xB6CE, 12, 12),
    (0xB6CF, 12, 13), (0xB6D0, 12, 14), (0xB6D1, 12, 15), (0xB6D2, 12, 16), (0xB6D3, 12, 17),
    (0xB6D4, 53, 152), (0xB6D5, 12, 18), (0xB6D6, 12, 19), (0xB6D7, 12, 20), (0xB6D8, 12, 21),
    (0xB6D9, 12, 22), (0xB6DA, 12, 23), (0xB6DB, 12, 24), (0xB6DC, 12, 25), (0xB6DD, 12, 26),
    (0xB6DE, 12, 33), (0xB6DF, 12, 34), (0xB6E0, 12, 35), (0xB6E1, 12, 36), (0xB6E2, 12, 37),
    (0xB6E3, 12, 38), (0xB6E4, 12, 39), (0xB6E5, 12, 40), (0xB6E6, 12, 41), (0xB6E7, 12, 42),
    (0xB6E8, 12, 43), (0xB6E9, 12, 44), (0xB6EA, 12, 45), (0xB6EB, 12, 46), (0xB6EC, 12, 47),
    (0xB6ED, 12, 48), (0xB6EE, 12, 49), (0xB6EF, 12, 50), (0xB6F0, 53, 153), (0xB6F1, 12, 51),
    (0xB6F2, 12, 52), (0xB6F3, 12, 53), (0xB6F4, 53, 154), (0xB6F5, 12, 54), (0xB6F6, 12, 55),
    (0xB6F7, 12, 56), (0xB6F8, 53, 155), (0xB6F9, 12, 57), (0xB6FA, 12, 58), (0xB6FB, 12, 65),
    (0xB6FC, 12, 66), (0xB6FD, 12, 67), (0xB6FE, 12, 68), (0xB6FF, 12, 69), (0xB700, 53, 156),
    (0xB701, 53, 157), (0xB702, 12, 70), (0xB703, 12, 71), (0xB704, 12, 72), (0xB705, 53, 158),
    (0xB706, 12, 73), (0xB707, 12, 74), (0xB708, 12, 75), (0xB709, 12, 76), (0xB70A, 12, 77),
    (0xB70B, 12, 78), (0xB70C, 12, 79), (0xB70D, 12, 80), (0xB70E, 12, 81), (0xB70F, 12, 82),
    (0xB710, 12, 83), (0xB711, 12, 84), (0xB712, 12, 85), (0xB713, 12, 86), (0xB714, 12, 87),
    (0xB715, 12, 88), (0xB716, 12, 89), (0xB717, 12, 90), (0xB718, 12, 91), (0xB719, 12, 92),
    (0xB71A, 12, 93), (0xB71B, 12, 94), (0xB71C, 12, 95), (0xB71D, 12, 96), (0xB71E, 12, 97),
    (0xB71F, 12, 98), (0xB720, 12, 99), (0xB721, 12, 100), (0xB722, 12, 101), (0xB723, 12, 102),
    (0xB724, 12, 103), (0xB725, 12, 104), (0xB726, 12, 105), (0xB727, 12, 106), (0xB728, 53, 159),
    (0xB729, 53, 160), (0xB72A, 12, 107), (0xB72B, 12, 108), (0xB72C, 53, 161), (0xB72D, 12, 109),
    (0xB72E, 12, 110), (0xB72F, 53, 162), (0xB730, 53, 163), (0xB731, 12, 111), (0xB732, 12, 112),
    (0xB733, 12, 113), (0xB734, 12, 114), (0xB735, 12, 115), (0xB736, 12, 116), (0xB737, 12, 117),
    (0xB738, 53, 164), (0xB739, 53, 165), (0xB73A, 12, 118), (0xB73B, 53, 166), (0xB73C, 12, 119),
    (0xB73D, 12, 120), (0xB73E, 12, 121), (0xB73F, 12, 122), (0xB740, 12, 123), (0xB741, 12, 124),
    (0xB742, 12, 125), (0xB743, 12, 126), (0xB744, 53, 167), (0xB745, 12, 127), (0xB746, 12, 128),
    (0xB747, 12, 129), (0xB748, 53, 168), (0xB749, 12, 130), (0xB74A, 12, 131), (0xB74B, 12, 132),
    (0xB74C, 53, 169), (0xB74D, 12, 133), (0xB74E, 12, 134), (0xB74F, 12, 135), (0xB750, 12, 136),
    (0xB751, 12, 137), (0xB752, 12, 138), (0xB753, 12, 139), (0xB754, 53, 170), (0xB755, 53, 171),
    (0xB756, 12, 140), (0xB757, 12, 141), (0xB758, 12, 142), (0xB759, 12, 143), (0xB75A, 12, 144),
    (0xB75B, 12, 145), (0xB75C, 12, 146), (0xB75D, 12, 147), (0xB75E, 12, 148), (0xB75F, 12, 149),
    (0xB760, 53, 172), (0xB761, 12, 150), (0xB762, 12, 151), (0xB763, 12, 152), (0xB764, 53, 173),
    (0xB765, 12, 153), (0xB766, 12, 154), (0xB767, 12, 155), (0xB768, 53, 174), (0xB769, 12, 156),
    (0xB76A, 12, 157), (0xB76B, 12, 158), (0xB76C, 12, 159), (0xB76D, 12, 160), (0xB76E, 12, 161),
    (0xB76F, 12, 162), (0xB770, 53, 175), (0xB771, 53, 176), (0xB772, 12, 163), (0xB773, 53, 177),
    (0xB774, 12, 164), (0xB775, 53, 178), (0xB776, 12, 165), (0xB777, 12, 166), (0xB778, 12, 167),
    (0xB779, 12, 168), (0xB77A, 12, 169), (0xB77B, 12, 170), (0xB77C, 53, 179), (0xB77D, 53, 180),
    (0xB77E, 12, 171), (0xB77F, 12, 172), (0xB780, 53, 181), (0xB781, 12, 173), (0xB782, 12, 174),
    (0xB783, 12, 175), (0xB784, 53, 182), (0xB785, 12, 176), (0xB786, 12, 177), (0xB787, 12, 178),
    (0xB788, 12, 179), (0xB789, 12, 180), (0xB78A, 12, 181), (0xB78B, 12, 182), (0xB78C, 53, 183),
    (0xB78D, 53, 184), (0xB78E, 12, 183), (0xB78F, 53, 185), (0xB790, 53, 186), (0xB791, 53, 187),
    (0xB792, 53, 188), (0xB793, 12, 184), (0xB794, 12, 185), (0xB795, 12, 186), (0xB796, 53, 189),
    (0xB797, 53, 190), (0xB798, 54, 97), (0xB799, 54, 98), (0xB79A, 12, 187), (0xB79B, 12, 188),
    (0xB79C, 54, 99), (0xB79D, 12, 189), (0xB79E, 12, 190), (0xB79F, 13, 1), (0xB7A0, 54, 100),
    (0xB7A1, 13, 2), (0xB7A2, 13, 3), (0xB7A3, 13, 4), (0xB7A4, 13, 5), (0xB7A5, 13, 6),
    (0xB7A6, 13, 7), (0xB7A7, 13, 8), (0xB7A8, 54, 101), (0xB7A9, 54, 102), (0xB7AA, 13, 9),
    (0xB7AB, 54, 103), (0xB7AC, 54, 104), (0xB7AD, 54, 105), (0xB7AE, 13, 10), (0xB7AF, 13, 11),
    (0xB7B0, 13, 12), (0xB7B1, 13, 13), (0xB7B2, 13, 14), (0xB7B3, 13, 15), (0xB7B4, 54, 106),
    (0xB7B5, 54, 107), (0xB7B6, 13, 16), (0xB7B7, 13, 17), (0xB7B8, 54, 108), (0xB7B9, 13, 18),
    (0xB7BA, 13, 19), (0xB7BB, 13, 20), (0xB7BC, 13, 21), (0xB7BD, 13, 22), (0xB7BE, 13, 23),
    (0xB7BF, 13, 24), (0xB7C0, 13, 25), (0xB7C1, 13, 26), (0xB7C2, 13, 33), (0xB7C3, 13, 34),
    (0xB7C4, 13, 35), (0xB7C5, 13, 36), (0xB7C6, 13, 37), (0xB7C7, 54, 109), (0xB7C8, 13, 38),
    (0xB7C9, 54, 110), (0xB7CA, 13, 39), (0xB7CB, 13, 40), (0xB7CC, 13, 41), (0xB7CD, 13, 42),
    (0xB7CE, 13, 43), (0xB7CF, 13, 44), (0xB7D0, 13, 45), (0xB7D1, 13, 46), (0xB7D2, 13, 47),
    (0xB7D3, 13, 48), (0xB7D4, 13, 49), (0xB7D5, 13, 50), (0xB7D6, 13, 51), (0xB7D7, 13, 52),
    (0xB7D8, 13, 53), (0xB7D9, 13, 54), (0xB7DA, 13, 55), (0xB7DB, 13, 56), (0xB7DC, 13, 57),
    (0xB7DD, 13, 58), (0xB7DE, 13, 65), (0xB7DF, 13, 66), (0xB7E0, 13, 67), (0xB7E1, 13, 68),
    (0xB7E2, 13, 69), (0xB7E3, 13, 70), (0xB7E4, 13, 71), (0xB7E5, 13, 72), (0xB7E6, 13, 73),
    (0xB7E7, 13, 74), (0xB7E8, 13, 75), (0xB7E9, 13, 76), (0xB7EA, 13, 77), (0xB7EB, 13, 78),
    (0xB7EC, 54, 111), (0xB7ED, 54, 112), (0xB7EE, 13, 79), (0xB7EF, 13, 80), (0xB7F0, 54, 113),
    (0xB7F1, 13, 81), (0xB7F2, 13, 82), (0xB7F3, 13, 83), (0xB7F4, 54, 114), (0xB7F5, 13, 84),
    (0xB7F6, 13, 85), (0xB7F7, 13, 86), (0xB7F8, 13, 87), (0xB7F9, 13, 88), (0xB7FA, 13, 89),
    (0xB7FB, 13, 90), (0xB7FC, 54, 115), (0xB7FD, 54, 116), (0xB7FE, 13, 91), (0xB7FF, 54, 117),
    (0xB800, 54, 118), (0xB801, 54, 119), (0xB802, 13, 92), (0xB803, 13, 93), (0xB804, 13, 94),
    (0xB805, 13, 95), (0xB806, 13, 96), (0xB807, 54, 120), (0xB808, 54, 121), (0xB809, 54, 122),
    (0xB80A, 13, 97), (0xB80B, 13, 98), (0xB80C, 54, 123), (0xB80D, 13, 99), (0xB80E, 13, 100),
    (0xB80F, 13, 101), (0xB810, 54, 124), (0xB811, 13, 102), (0xB812, 13, 103), (0xB813, 13, 104),
    (0xB814, 13, 105), (0xB815, 13, 106), (0xB816, 13, 107), (0xB817, 13, 108), (0xB818, 54, 125),
    (0xB819, 54, 126), (0xB81A, 13, 109), (0xB81B, 54, 127), (0xB81C, 13, 110), (0xB81D, 54, 128),
    (0xB81E, 13, 111), (0xB81F, 13, 112), (0xB820, 13, 113), (0xB821, 13, 114), (0xB822, 13, 115),
    (0xB823, 13, 116), (0xB824, 54, 129), (0xB825, 54, 130), (0xB826, 13, 117), (0xB827, 13, 118),
    (0xB828, 54, 131), (0xB829, 13, 119), (0xB82A, 13, 120), (0xB82B, 13, 121), (0xB82C, 54, 132),
    (0xB82D, 13, 122), (0xB82E, 13, 123), (0xB82F, 13, 124), (0xB830, 13, 125), (0xB831, 13, 126),
    (0xB832, 13, 127), (0xB833, 13, 128), (0xB834, 54, 133), (0xB835, 54, 134), (0xB836, 13, 129),
    (0xB837, 54, 135), (0xB838, 54, 136), (0xB839, 54, 137), (0xB83A, 13, 130), (0xB83B, 13, 131),
    (0xB83C, 13, 132), (0xB83D, 13, 133), (0xB83E, 13, 134), (0xB83F, 13, 135), (0xB840, 54, 138),
    (0xB841, 13, 136), (0xB842, 13, 137), (0xB843, 13, 138), (0xB844, 54, 139), (0xB845, 13, 139),
    (0xB846, 13, 140), (0xB847, 13, 141), (0xB848, 13, 142), (0xB849, 13, 143), (0xB84A, 13, 144),
    (0xB84B, 13, 145), (0xB84C, 13, 146), (0xB84D, 13, 147), (0xB84E, 13, 148), (0xB84F, 13, 149),
    (0xB850, 13, 150), (0xB851, 54, 140), (0xB852, 13, 151), (0xB853, 54, 141), (0xB854, 13, 152),
    (0xB855, 13, 153), (0xB856, 13, 154), (0xB857, 13, 155), (0xB858, 13, 156), (0xB859, 13, 157),
    (0xB85A, 13, 158), (0xB85B, 13, 159), (0xB85C, 54, 142), (0xB85D, 54, 143), (0xB85E, 13, 160),
    (0xB85F, 13, 161), (0xB860, 54, 144), (0xB861, 13, 162), (0xB862, 13, 163), (0xB863, 13, 164),
    (0xB864, 54, 145), (0xB865, 13, 165), (0xB866, 13, 166), (0xB867, 13, 167), (0xB868, 13, 168),
    (0xB869, 13, 169), (0xB86A, 13, 170), (0xB86B, 13, 171), (0xB86C, 54, 146), (0xB86D, 54, 147),
    (0xB86E, 13, 172), (0xB86F, 54, 148), (0xB870, 13, 173), (0xB871, 54, 149), (0xB872, 13, 174),
    (0xB873, 13, 175), (0xB874, 13, 176), (0xB875, 13, 177), (0xB876, 13, 178), (0xB877, 13, 179),
    (0xB878, 54, 150), (0xB879, 13, 180), (0xB87A, 13, 181), (0xB87B, 13, 182), (0xB87C, 54, 151),
    (0xB87D, 13, 183), (0xB87E, 13, 184), (0xB87F, 13, 185), (0xB880, 13, 186), (0xB881, 13, 187),
    (0xB882, 13, 188), (0xB883, 13, 189), (0xB884, 13, 190), (0xB885, 14, 1), (0xB886, 14, 2),
    (0xB887, 14, 3), (0xB888, 14, 4), (0xB889, 14, 5), (0xB88A, 14, 6), (0xB88B, 14, 7),
    (0xB88C, 14, 8), (0xB88D, 54, 152), (0xB88E, 14, 9), (0xB88F, 14, 10), (0xB890, 14, 11),
    (0xB891, 14, 12), (0xB892, 14, 13), (0xB893, 14, 14), (0xB894, 14, 15), (0xB895, 14, 16),
    (0xB896, 14, 17), (0xB897, 14, 18), (0xB898, 14, 19), (0xB899, 14, 20), (0xB89A, 14, 21),
    (0xB89B, 14, 22), (0xB89C, 14, 23), (0xB89D, 14, 24), (0xB89E, 14, 25), (0xB89F, 14, 26),
    (0xB8A0, 14, 33), (0xB8A1, 14, 34), (0xB8A2, 14, 35), (0xB8A3, 14, 36), (0xB8A4, 14, 37),
    (0xB8A5, 14, 38), (0xB8A6, 14, 39), (0xB8A7, 14, 40), (0xB8A8, 54, 153), (0xB8A9, 14, 41),
    (0xB8AA, 14, 42), (0xB8AB, 14, 43), (0xB8AC, 14, 44), (0xB8AD, 14, 45), (0xB8AE, 14, 46),
    (0xB8AF, 14, 47), (0xB8B0, 54, 154), (0xB8B1, 14, 48), (0xB8B2, 14, 49), (0xB8B3, 14, 50),
    (0xB8B4, 54, 155), (0xB8B5, 14, 51), (0xB8B6, 14, 52), (0xB8B7, 14, 53), (0xB8B8, 54, 156),
    (0xB8B9, 14, 54), (0xB8BA, 14, 55), (0xB8BB, 14, 56), (0xB8BC, 14, 57), (0xB8BD, 14, 58),
    (0xB8BE, 14, 65), (0xB8BF, 14, 66), (0xB8C0, 54, 157), (0xB8C1, 54, 158), (0xB8C2, 14, 67),
    (0xB8C3, 54, 159), (0xB8C4, 14, 68), (0xB8C5, 54, 160), (0xB8C6, 14, 69), (0xB8C7, 14, 70),
    (0xB8C8, 14, 71), (0xB8C9, 14, 72), (0xB8CA, 14, 73), (0xB8CB, 14, 74), (0xB8CC, 54, 161),
    (0xB8CD, 14, 75), (0xB8CE, 14, 76), (0xB8CF, 14, 77), (0xB8D0, 54, 162), (0xB8D1, 14, 78),
    (0xB8D2, 14, 79), (0xB8D3, 14, 80), (0xB8D4, 54, 163), (0xB8D5, 14, 81), (0xB8D6, 14, 82),
    (0xB8D7, 14, 83), (0xB8D8, 14, 84), (0xB8D9, 14, 85), (0xB8DA, 14, 86), (0xB8DB, 14, 87),
    (0xB8DC, 14, 88), (0xB8DD, 54, 164), (0xB8DE, 14, 89), (0xB8DF, 54, 165), (0xB8E0, 14, 90),
    (0xB8E1, 54, 166), (0xB8E2, 14, 91), (0xB8E3, 14, 92), (0xB8E4, 14, 93), (0xB8E5, 14, 94),
    (0xB8E6, 14, 95), (0xB8E7, 14, 96), (0xB8E8, 54, 167), (0xB8E9, 54, 168), (0xB8EA, 14, 97),
    (0xB8EB, 14, 98), (0xB8EC, 54, 169), (0xB8ED, 14, 99), (0xB8EE, 14, 100), (0xB8EF, 14, 101),
    (0xB8F0, 54, 170), (0xB8F1, 14, 102), (0xB8F2, 14, 103), (0xB8F3, 14, 104), (0xB8F4, 14, 105),
    (0xB8F5, 14, 106), (0xB8F6, 14, 107), (0xB8F7, 14, 108), (0xB8F8, 54, 171), (0xB8F9, 54, 172),
    (0xB8FA, 14, 109), (0xB8FB, 54, 173), (0xB8FC, 14, 110), (0xB8FD, 54, 174), (0xB8FE, 14, 111),
    (0xB8FF, 14, 112), (0xB900, 14, 113), (0xB901, 14, 114), (0xB902, 14, 115), (0xB903, 14, 116),
    (0xB904, 54, 175), (0xB905, 14, 117), (0xB906, 14, 118), (0xB907, 14, 119), (0xB908, 14, 120),
    (0xB909, 14, 121), (0xB90A, 14, 122), (0xB90B, 14, 123), (0xB90C, 14, 124), (0xB90D, 14, 125),
    (0xB90E, 14, 126), (0xB90F, 14, 127), (0xB910, 14, 128), (0xB911, 14, 129), (0xB912, 14, 130),
    (0xB913, 14, 131), (0xB914, 14, 132), (0xB915, 14, 133), (0xB916, 14, 134), (0xB917, 14, 135),
    (0xB918, 54, 176), (0xB919, 14, 136), (0xB91A, 14, 137), (0xB91B, 14, 138), (0xB91C, 14, 139),
    (0xB91D, 14, 140), (0xB91E, 14, 141), (0xB91F, 14, 142), (0xB920, 54, 177), (0xB921, 14, 143),
    (0xB922, 14, 144), (0xB923, 14, 145), (0xB924, 14, 146), (0xB925, 14, 147), (0xB926, 14, 148),
    (0xB927, 14, 149), (0xB928, 14, 150), (0xB929, 14, 151), (0xB92A, 14, 152), (0xB92B, 14, 153),
    (0xB92C, 14, 154), (0xB92D, 14, 155), (0xB92E, 14, 156), (0xB92F, 14, 157), (0xB930, 14, 158),
    (0xB931, 14, 159), (0xB932, 14, 160), (0xB933, 14, 161), (0xB934, 14, 162), (0xB935, 14, 163),
    (0xB936, 14, 164), (0xB937, 14, 165), (0xB938, 14, 166), (0xB939, 14, 167), (0xB93A, 14, 168),
    (0xB93B, 14, 169), (0xB93C, 54, 178), (0xB93D, 54, 179), (0xB93E, 14, 170), (0xB93F, 14, 171),
    (0xB940, 54, 180), (0xB941, 14, 172), (0xB942, 14, 173), (0xB943, 14, 174), (0xB944, 54, 181),
    (0xB945, 14, 175), (0xB946, 14, 176), (0xB947, 14, 177), (0xB948, 14, 178), (0xB949, 14, 179),
    (0xB94A, 14, 180), (0xB94B, 14, 181), (0xB94C, 54, 182), (0xB94D, 14, 182), (0xB94E, 14, 183),
    (0xB94F, 54, 183), (0xB950, 14, 184), (0xB951, 54, 184), (0xB952, 14, 185), (0xB953, 14, 186),
    (0xB954, 14, 187), (0xB955, 14, 188), (0xB956, 14, 189), (0xB957, 14, 190), (0xB958, 54, 185),
    (0xB959, 54, 186), (0xB95A, 15, 1), (0xB95B, 15, 2), (0xB95C, 54, 187), (0xB95D, 15, 3),
    (0xB95E, 15, 4), (0xB95F, 15, 5), (0xB960, 54, 188), (0xB961, 15, 6), (0xB962, 15, 7),
    (0xB963, 15, 8), (0xB964, 15, 9), (0xB965, 15, 10), (0xB966, 15, 11), (0xB967, 15, 12),
    (0xB968, 54, 189), (0xB969, 54, 190), (0xB96A, 15, 13), (0xB96B, 55, 97), (0xB96C, 15, 14),
    (0xB96D, 55, 98), (0xB96E, 15, 15), (0xB96F, 15, 16), (0xB970, 15, 17), (0xB971, 15, 18),
    (0xB972, 15, 19), (0xB973, 15, 20), (0xB974, 55, 99), (0xB975, 55, 100), (0xB976, 15, 21),
    (0xB977, 15, 22), (0xB978, 55, 101), (0xB979, 15, 23), (0xB97A, 15, 24), (0xB97B, 15, 25),
    (0xB97C, 55, 102), (0xB97D, 15, 26), (0xB97E, 15, 33), (0xB97F, 15, 34), (0xB980, 15, 35),
    (0xB981, 15, 36), (0xB982, 15, 37), (0xB983, 15, 38), (0xB984, 55, 103), (0xB985, 55, 104),
    (0xB986, 15, 39), (0xB987, 55, 105), (0xB988, 15, 40), (0xB989, 55, 106), (0xB98A, 55, 107),
    (0xB98B, 15, 41), (0xB98C, 15, 42), (0xB98D, 55, 108), (0xB98E, 55, 109), (0xB98F, 15, 43),
    (0xB990, 15, 44), (0xB991, 15, 45), (0xB992, 15, 46), (0xB993, 15, 47), (0xB994, 15, 48),
    (0xB995, 15, 49), (0xB996, 15, 50), (0xB997, 15, 51), (0xB998, 15, 52), (0xB999, 15, 53),
    (0xB99A, 15, 54), (0xB99B, 15, 55), (0xB99C, 15, 56), (0xB99D, 15, 57), (0xB99E, 15, 58),
    (0xB99F, 15, 65), (0xB9A0, 15, 66), (0xB9A1, 15, 67), (0xB9A2, 15, 68), (0xB9A3, 15, 69),
    (0xB9A4, 15, 70), (0xB9A5, 15, 71), (0xB9A6, 15, 72), (0xB9A7, 15, 73), (0xB9A8, 15, 74),
    (0xB9A9, 15, 75), (0xB9AA, 15, 76), (0xB9AB, 15, 77), (0xB9AC, 55, 110), (0xB9AD, 55, 111),
    (0xB9AE, 15, 78), (0xB9AF, 15, 79), (0xB9B0, 55, 112), (0xB9B1, 15, 80), (0xB9B2, 15, 81),
    (0xB9B3, 15, 82), (0xB9B4, 55, 113), (0xB9B5, 15, 83), (0xB9B6, 15, 84), (0xB9B7, 15, 85),
    (0xB9B8, 15, 86), (0xB9B9, 15, 87), (0xB9BA, 15, 88), (0xB9BB, 15, 89), (0xB9BC, 55, 114),
    (0xB9BD, 55, 115), (0xB9BE, 15, 90), (0xB9BF, 55, 116), (0xB9C0, 15, 91), (0xB9C1, 55, 117),
    (0xB9C2, 15, 92), (0xB9C3, 15, 93), (0xB9C4, 15, 94), (0xB9C5, 15, 95), (0xB9C6, 15, 96),
    (0xB9C7, 15, 97), (0xB9C8, 55, 118), (0xB9C9, 55, 119), (0xB9CA, 15, 98), (0xB9CB, 15, 99),
    (0xB9CC, 55, 120), (0xB9CD, 15, 100), (0xB9CE, 55, 121), (0xB9CF, 55, 122), (0xB9D0, 55, 123),
    (0xB9D1, 55, 124), (0xB9D2, 55, 125), (0xB9D3, 15, 101), (0xB9D4, 15, 102), (0xB9D5, 15, 103),
    (0xB9D6, 15, 104), (0xB9D7, 15, 105), (0xB9D8, 55, 126), (0xB9D9, 55, 127), (0xB9DA, 15, 106),
    (0xB9DB, 55, 128), (0xB9DC, 15, 107), (0xB9DD, 55, 129), (0xB9DE, 55, 130), (0xB9DF, 15, 108),
    (0xB9E0, 15, 109), (0xB9E1, 55, 131), (0xB9E2, 15, 110), (0xB9E3, 55, 132), (0xB9E4, 55, 133),
    (0xB9E5, 55, 134), (0xB9E6, 15, 111), (0xB9E7, 15, 112), (0xB9E8, 55, 135), (0xB9E9, 15, 113),
    (0xB9EA, 15, 114), (0xB9EB, 15, 115), (0xB9EC, 55, 136), (0xB9ED, 15, 116), (0xB9EE, 15, 117),
    (0xB9EF, 15, 118), (0xB9F0, 15, 119), (0xB9F1, 15, 120), (0xB9F2, 15, 121), (0xB9F3, 15, 122),
    (0xB9F4, 55, 137), (0xB9F5, 55, 138), (0xB9F6, 15, 123), (0xB9F7, 55, 139), (0xB9F8, 55, 140),
    (0xB9F9, 55, 141), (0xB9FA, 55, 142), (0xB9FB, 15, 124), (0xB9FC, 15, 125), (0xB9FD, 15, 126),
    (0xB9FE, 15, 127), (0xB9FF, 15, 128), (0xBA00, 55, 143), (0xBA01, 55, 144), (0xBA02, 15, 129),
    (0xBA03, 15, 130), (0xBA04, 15, 131), (0xBA05, 15, 132), (0xBA06, 15, 133), (0xBA07, 15, 134),
    (0xBA08, 55, 145), (0xBA09, 15, 135), (0xBA0A, 15, 136), (0xBA0B, 15, 137), (0xBA0C, 15, 138),
    (0xBA0D, 15, 139), (0xBA0E, 15, 140), (0xBA0F, 15, 141), (0xBA10, 15, 142), (0xBA11, 15, 143),
    (0xBA12, 15, 144), (0xBA13, 15, 145), (0xBA14, 15, 146), (0xBA15, 55, 146), (0xBA16, 15, 147),
    (0xBA17, 15, 148), (0xBA18, 15, 149), (0xBA19, 15, 150), (0xBA1A, 15, 151), (0xBA1B, 15, 152),
    (0xBA1C, 15, 153), (0xBA1D, 15, 154), (0xBA1E, 15, 155), (0xBA1F, 15, 156), (0xBA20, 15, 157),
    (0xBA21, 15, 158), (0xBA22, 15, 159), (0xBA23, 15, 160), (0xBA24, 15, 161), (0xBA25, 15, 162),
    (0xBA26, 15, 163), (0xBA27, 15, 164), (0xBA28, 15, 165), (0xBA29, 15, 166), (0xBA2A, 15, 167),
    (0xBA2B, 15, 168), (0xBA2C, 15, 169), (0xBA2D, 15, 170), (0xBA2E, 15, 171), (0xBA2F, 15, 172),
    (0xBA30, 15, 173), (0xBA31, 15, 174), (0xBA32, 15, 175), (0xBA33, 15, 176), (0xBA34, 15, 177),
    (0xBA35, 15, 178), (0xBA36, 15, 179), (0xBA37, 15, 180), (0xBA38, 55, 147), (0xBA39, 55, 148),
    (0xBA3A, 15, 181), (0xBA3B, 15, 182), (0xBA3C, 55, 149), (0xBA3D, 15, 183), (0xBA3E, 15, 184),
    (0xBA3F, 15, 185), (0xBA40, 55, 150), (0xBA41, 15, 186), (0xBA42, 55, 151), (0xBA43, 15, 187),
    (0xBA44, 15, 188), (0xBA45, 15, 189), (0xBA46, 15, 190), (0xBA47, 16, 1), (0xBA48, 55, 152),
    (0xBA49, 55, 153), (0xBA4A, 16, 2), (0xBA4B, 55, 154), (0xBA4C, 16, 3), (0xBA4D, 55, 155),
    (0xBA4E, 55, 156), (0xBA4F, 16, 4), (0xBA50, 16, 5), (0xBA51, 16, 6), (0xBA52, 16, 7),
    (0xBA53, 55, 157), (0xBA54, 55, 158), (0xBA55, 55, 159), (0xBA56, 16, 8), (0xBA57, 16, 9),
    (0xBA58, 55, 160), (0xBA59, 16, 10), (0xBA5A, 16, 11), (0xBA5B, 16, 12), (0xBA5C, 55, 161),
    (0xBA5D, 16, 13), (0xBA5E, 16, 14), (0xBA5F, 16, 15), (0xBA60, 16, 16), (0xBA61, 16, 17),
    (0xBA62, 16, 18), (0xBA63, 16, 19), (0xBA64, 55, 162), (0xBA65, 55, 163), (0xBA66, 16, 20),
    (0xBA67, 55, 164), (0xBA68, 55, 165), (0xBA69, 55, 166), (0xBA6A, 16, 21), (0xBA6B, 16, 22),
    (0xBA6C, 16, 23), (0xBA6D, 16, 24), (0xBA6E, 16, 25), (0xBA6F, 16, 26), (0xBA70, 55, 167),
    (0xBA71, 55, 168), (0xBA72, 16, 33), (0xBA73, 16, 34), (0xBA74, 55, 169), (0xBA75, 16, 35),
    (0xBA76, 16, 36), (0xBA77, 16, 37), (0xBA78, 55, 170), (0xBA79, 16, 38), (0xBA7A, 16, 39),
    (0xBA7B, 16, 40), (0xBA7C, 16, 41), (0xBA7D, 16, 42), (0xBA7E, 16, 43), (0xBA7F, 16, 44),
    (0xBA80, 16, 45), (0xBA81, 16, 46), (0xBA82, 16, 47), (0xBA83, 55, 171), (0xBA84, 55, 172),
    (0xBA85, 55, 173), (0xBA86, 16, 48), (0xBA87, 55, 174), (0xBA88, 16, 49), (0xBA89, 16, 50),
    (0xBA8A, 16, 51), (0xBA8B, 16, 52), (0xBA8C, 55, 175), (0xBA8D, 16, 53), (0xBA8E, 16, 54),
    (0xBA8F, 16, 55), (0xBA90, 16, 56), (0xBA91, 16, 57), (0xBA92, 16, 58), (0xBA93, 16, 65),
    (0xBA94, 16, 66), (0xBA95, 16, 67), (0xBA96, 16, 68), (0xBA97, 16, 69), (0xBA98, 16, 70),
    (0xBA99, 16, 71), (0xBA9A, 16, 72), (0xBA9B, 16, 73), (0xBA9C, 16, 74), (0xBA9D, 16, 75),
    (0xBA9E, 16, 76), (0xBA9F, 16, 77), (0xBAA0, 16, 78), (0xBAA1, 16, 79), (0xBAA2, 16, 80),
    (0xBAA3, 16, 81), (0xBAA4, 16, 82), (0xBAA5, 16, 83), (0xBAA6, 16, 84), (0xBAA7, 16, 85),
    (0xBAA8, 55, 176), (0xBAA9, 55, 177), (0xBAAA, 16, 86), (0xBAAB, 55, 178), (0xBAAC, 55, 179),
    (0xBAAD, 16, 87), (0xBAAE, 16, 88), (0xBAAF, 16, 89), (0xBAB0, 55, 180), (0xBAB1, 16, 90),
    (0xBAB2, 55, 181), (0xBAB3, 16, 91), (0xBAB4, 16, 92), (0xBAB5, 16, 93), (0xBAB6, 16, 94),
    (0xBAB7, 16, 95), (0xBAB8, 55, 182), (0xBAB9, 55, 183), (0xBABA, 16, 96), (0xBABB, 55, 184),
    (0xBABC, 16, 97), (0xBABD, 55, 185), (0xBABE, 16, 98), (0xBABF, 16, 99), (0xBAC0, 16, 100),
    (0xBAC1, 16, 101), (0xBAC2, 16, 102), (0xBAC3, 16, 103), (0xBAC4, 55, 186), (0xBAC5, 16, 104),
    (0xBAC6, 16, 105), (0xBAC7, 16, 106), (0xBAC8, 55, 187), (0xBAC9, 16, 107), (0xBACA, 16, 108),
    (0xBACB, 16, 109), (0xBACC, 16, 110), (0xBACD, 16, 111), (0xBACE, 16, 112), (0xBACF, 16, 113),
    (0xBAD0, 16, 114), (0xBAD1, 16, 115), (0xBAD2, 16, 116), (0xBAD3, 16, 117), (0xBAD4, 16, 118),
    (0xBAD5, 16, 119), (0xBAD6, 16, 120), (0xBAD7, 16, 121), (0xBAD8, 55, 188), (0xBAD9, 55, 189),
    (0xBADA, 16, 122), (0xBADB, 16, 123), (0xBADC, 16, 124), (0xBADD, 16, 125), (0xBADE, 16, 126),
    (0xBADF, 16, 127), (0xBAE0, 16, 128), (0xBAE1, 16, 129), (0xBAE2, 16, 130), (0xBAE3, 16, 131),
    (0xBAE4, 16, 132), (0xBAE5, 16, 133), (0xBAE6, 16, 134), (0xBAE7, 16, 135), (0xBAE8, 16, 136),
    (0xBAE9, 16, 137), (0xBAEA, 16, 138), (0xBAEB, 16, 139), (0xBAEC, 16, 140), (0xBAED, 16, 141),
    (0xBAEE, 16, 142), (0xBAEF, 16, 143), (0xBAF0, 16, 144), (0xBAF1, 16, 145), (0xBAF2, 16, 146),
    (0xBAF3, 16, 147), (0xBAF4, 16, 148), (0xBAF5, 16, 149), (0xBAF6, 16, 150), (0xBAF7, 16, 151),
    (0xBAF8, 16, 152), (0xBAF9, 16, 153), (0xBAFA, 16, 154), (0xBAFB, 16, 155), (0xBAFC, 55, 190),
    (0xBAFD, 16, 156), (0xBAFE, 16, 157), (0xBAFF, 16, 158), (0xBB00, 56, 97), (0xBB01, 16, 159),
    (0xBB02, 16, 160), (0xBB03, 16, 161), (0xBB04, 56, 98), (0xBB05, 16, 162), (0xBB06, 16, 163),
    (0xBB07, 16, 164), (0xBB08, 16, 165), (0xBB09, 16, 166), (0xBB0A, 16, 167), (0xBB0B, 16, 168),
    (0xBB0C, 16, 169), (0xBB0D, 56, 99), (0xBB0E, 16, 170), (0xBB0F, 56, 100), (0xBB10, 16, 171),
    (0xBB11, 56, 101), (0xBB12, 16, 172), (0xBB13, 16, 173), (0xBB14, 16, 174), (0xBB15, 16, 175),
    (0xBB16, 16, 176), (0xBB17, 16, 177), (0xBB18, 56, 102), (0xBB19, 16, 178), (0xBB1A, 16, 179),
    (0xBB1B, 16, 180), (0xBB1C, 56, 103), (0xBB1D, 16, 181), (0xBB1E, 16, 182), (0xBB1F, 16, 183),
    (0xBB20, 56, 104), (0xBB21, 16, 184), (0xBB22, 16, 185), (0xBB23, 16, 186), (0xBB24, 16, 187),
    (0xBB25, 16, 188), (0xBB26, 16, 189), (0xBB27, 16, 190), (0xBB28, 17, 1), (0xBB29, 56, 105),
    (0xBB2A, 17, 2), (0xBB2B, 56, 106), (0xBB2C, 17, 3), (0xBB2D, 17, 4), (0xBB2E, 17, 5),
    (0xBB2F, 17, 6), (0xBB30, 17, 7), (0xBB31, 17, 8), (0xBB32, 17, 9), (0xBB33, 17, 10),
    (0xBB34, 56, 107), (0xBB35, 56, 108), (0xBB36, 56, 109), (0xBB37, 17, 11), (0xBB38, 56, 110),
    (0xBB39, 17, 12), (0xBB3A, 17, 13), (0xBB3B, 56, 111), (0xBB3C, 56, 112), (0xBB3D, 56, 113),
    (0xBB3E, 56, 114), (0xBB3F, 17, 14), (0xBB40, 17, 15), (0xBB41, 17, 16), (0xBB42, 17, 17),
    (0xBB43, 17, 18), (0xBB44, 56, 115), (0xBB45, 56, 116), (0xBB46, 17, 19), (0xBB47, 56, 117),
    (0xBB48, 17, 20), (0xBB49, 56, 118), (0xBB4A, 17, 21), (0xBB4B, 17, 22), (0xBB4C, 17, 23),
    (0xBB4D, 56, 119), (0xBB4E, 17, 24), (0xBB4F, 56, 120), (0xBB50, 56, 121), (0xBB51, 17, 25),
    (0xBB52, 17, 26), (0xBB53, 17, 33), (0xBB54, 56, 122), (0xBB55, 17, 34), (0xBB56, 17, 35),
    (0xBB57, 17, 36), (0xBB58, 56, 123), (0xBB59, 17, 37), (0xBB5A, 17, 38), (0xBB5B, 17, 39),
    (0xBB5C, 17, 40), (0xBB5D, 17, 41), (0xBB5E, 17, 42), (0xBB5F, 17, 43), (0xBB60, 17, 44),
    (0xBB61, 56, 124), (0xBB62, 17, 45), (0xBB63, 56, 125), (0xBB64, 17, 46), (0xBB65, 17, 47),
    (0xBB66, 17, 48), (0xBB67, 17, 49), (0xBB68, 17, 50), (0xBB69, 17, 51), (0xBB6A, 17, 52),
    (0xBB6B, 17, 53), (0xBB6C, 56, 126), (0xBB6D, 17, 54), (0xBB6E, 17, 55), (0xBB6F, 17, 56),
    (0xBB70, 17, 57), (0xBB71, 17, 58), (0xBB72, 17, 65), (0xBB73, 17, 66), (0xBB74, 17, 67),
    (0xBB75, 17, 68), (0xBB76, 17, 69), (0xBB77, 17, 70), (0xBB78, 17, 71), (0xBB79, 17, 72),
    (0xBB7A, 17, 73), (0xBB7B, 17, 74), (0xBB7C, 17, 75), (0xBB7D, 17, 76), (0xBB7E, 17, 77),
    (0xBB7F, 17, 78), (0xBB80, 17, 79), (0xBB81, 17, 80), (0xBB82, 17, 81), (0xBB83, 17, 82),
    (0xBB84, 17, 83), (0xBB85, 17, 84), (0xBB86, 17, 85), (0xBB87, 17, 86), (0xBB88, 56, 127),
    (0xBB89, 17, 87), (0xBB8A, 17, 88), (0xBB8B, 17, 89), (0xBB8C, 56, 128), (0xBB8D, 17, 90),
    (0xBB8E, 17, 91), (0xBB8F, 17, 92), (0xBB90, 56, 129), (0xBB91, 17, 93), (0xBB92, 17, 94),
    (0xBB93, 17, 95), (0xBB94, 17, 96), (0xBB95, 17, 97), (0xBB96, 17, 98), (0xBB97, 17, 99),
    (0xBB98, 17, 100), (0xBB99, 17, 101), (0xBB9A, 17, 102), (0xBB9B, 17, 103), (0xBB9C, 17, 104),
    (0xBB9D, 17, 105), (0xBB9E, 17, 106), (0xBB9F, 17, 107), (0xBBA0, 17, 108), (0xBBA1, 17, 109),
    (0xBBA2, 17, 110), (0xBBA3, 17, 111), (0xBBA4, 56, 130), (0xBBA5, 17, 112), (0xBBA6, 17, 113),
    (0xBBA7, 17, 114), (0xBBA8, 56, 131), (0xBBA9, 17, 115), (0xBBAA, 17, 116), (0xBBAB, 17, 117),
    (0xBBAC, 56, 132), (0xBBAD, 17, 118), (0xBBAE, 17, 119), (0xBBAF, 17, 120), (0xBBB0, 17, 121),
    (0xBBB1, 17, 122), (0xBBB2, 17, 123), (0xBBB3, 17, 124), (0xBBB4, 56, 133), (0xBBB5, 17, 125),
    (0xBBB6, 17, 126), (0xBBB7, 56, 134), (0xBBB8, 17, 127), (0xBBB9, 17, 128), (0xBBBA, 17, 129),
    (0xBBBB, 17, 130), (0xBBBC, 17, 131), (0xBBBD, 17, 132), (0xBBBE, 17, 133), (0xBBBF, 17, 134),
    (0xBBC0, 56, 135), (0xBBC1, 17, 135), (0xBBC2, 17, 136), (0xBBC3, 17, 137), (0xBBC4, 56, 136),
    (0xBBC5, 17, 138), (0xBBC6, 17, 139), (0xBBC7, 17, 140), (0xBBC8, 56, 137), (0xBBC9, 17, 141),
    (0xBBCA, 17, 142), (0xBBCB, 17, 143), (0xBBCC, 17, 144), (0xBBCD, 17, 145), (0xBBCE, 17, 146),
    (0xBBCF, 17, 147), (0xBBD0, 56, 138), (0xBBD1, 17, 148), (0xBBD2, 17, 149), (0xBBD3, 56, 139),
    (0xBBD4, 17, 150), (0xBBD5, 17, 151), (0xBBD6, 17, 152), (0xBBD7, 17, 153), (0xBBD8, 17, 154),
    (0xBBD9, 17, 155), (0xBBDA, 17, 156), (0xBBDB, 17, 157), (0xBBDC, 17, 158), (0xBBDD, 17, 159),
    (0xBBDE, 17, 160), (0xBBDF, 17, 161), (0xBBE0, 17, 162), (0xBBE1, 17, 163), (0xBBE2, 17, 164),
    (0xBBE3, 17, 165), (0xBBE4, 17, 166), (0xBBE5, 17, 167), (0xBBE6, 17, 168), (0xBBE7, 17, 169),
    (0xBBE8, 17, 170), (0xBBE9, 17, 171), (0xBBEA, 17, 172), (0xBBEB, 17, 173), (0xBBEC, 17, 174),
    (0xBBED, 17, 175), (0xBBEE, 17, 176), (0xBBEF, 17, 177), (0xBBF0, 17, 178), (0xBBF1, 17, 179),
    (0xBBF2, 17, 180), (0xBBF3, 17, 181), (0xBBF4, 17, 182), (0xBBF5, 17, 183), (0xBBF6, 17, 184),
    (0xBBF7, 17, 185), (0xBBF8, 56, 140), (0xBBF9, 56, 141), (0xBBFA, 17, 186), (0xBBFB, 17, 187),
    (0xBBFC, 56, 142), (0xBBFD, 17, 188), (0xBBFE, 17, 189), (0xBBFF, 56, 143), (0xBC00, 56, 144),
    (0xBC01, 17, 190), (0xBC02, 56, 145), (0xBC03, 18, 1), (0xBC04, 18, 2), (0xBC05, 18, 3),
    (0xBC06, 18, 4), (0xBC07, 18, 5), (0xBC08, 56, 146), (0xBC09, 56, 147), (0xBC0A, 18, 6),
    (0xBC0B, 56, 148), (0xBC0C, 56, 149), (0xBC0D, 56, 150), (0xBC0E, 18, 7), (0xBC0F, 56, 151),
    (0xBC10, 18, 8), (0xBC11, 56, 152), (0xBC12, 18, 9), (0xBC13, 18, 10), (0xBC14, 56, 153),
    (0xBC15, 56, 154), (0xBC16, 56, 155), (0xBC17, 56, 156), (0xBC18, 56, 157), (0xBC19, 18, 11),
    (0xBC1A, 18, 12), (0xBC1B, 56, 158), (0xBC1C, 56, 159), (0xBC1D, 56, 160), (0xBC1E, 56, 161),
    (0xBC1F, 56, 162), (0xBC20, 18, 13), (0xBC21, 18, 14), (0xBC22, 18, 15), (0xBC23, 18, 16),
    (0xBC24, 56, 163), (0xBC25, 56, 164), (0xBC26, 18, 17), (0xBC27, 56, 165), (0xBC28, 18, 18),
    (0xBC29, 56, 166), (0xBC2A, 18, 19), (0xBC2B, 18, 20), (0xBC2C, 18, 21), (0xBC2D, 56, 167),
    (0xBC2E, 18, 22), (0xBC2F, 18, 23), (0xBC30, 56, 168), (0xBC31, 56, 169), (0xBC32, 18, 24),
    (0xBC33, 18, 25), (0xBC34, 56, 170), (0xBC35, 18, 26), (0xBC36, 18, 33), (0xBC37, 18, 34),
    (0xBC38, 56, 171), (0xBC39, 18, 35), (0xBC3A, 18, 36), (0xBC3B, 18, 37), (0xBC3C, 18, 38),
    (0xBC3D, 18, 39), (0xBC3E, 18, 40), (0xBC3F, 18, 41), (0xBC40, 56, 172), (0xBC41, 56, 173),
    (0xBC42, 18, 42), (0xBC43, 56, 174), (0xBC44, 56, 175), (0xBC45, 56, 176), (0xBC46, 18, 43),
    (0xBC47, 18, 44), (0xBC48, 18, 45), (0xBC49, 56, 177), (0xBC4A, 18, 46), (0xBC4B, 18, 47),
    (0xBC4C, 56, 178), (0xBC4D, 56, 179), (0xBC4E, 18, 48), (0xBC4F, 18, 49), (0xBC50, 56, 180),
    (0xBC51, 18, 50), (0xBC52, 18, 51), (0xBC53, 18, 52), (0xBC54, 18, 53), (0xBC55, 18, 54),
    (0xBC56, 18, 55), (0xBC57, 18, 56), (0xBC58, 18, 57), (0xBC59, 18, 58), (0xBC5A, 18, 65),
    (0xBC5B, 18, 66), (0xBC5C, 18, 67), (0xBC5D, 56, 181), (0xBC5E, 18, 68), (0xBC5F, 18, 69),
    (0xBC60, 18, 70), (0xBC61, 18, 71), (0xBC62, 18, 72), (0xBC63, 18, 73), (0xBC64, 18, 74),
    (0xBC65, 18, 75), (0xBC66, 18, 76), (0xBC67, 18, 77), (0xBC68, 18, 78), (0xBC69, 18, 79),
    (0xBC6A, 18, 80), (0xBC6B, 18, 81), (0xBC6C, 18, 82), (0xBC6D, 18, 83), (0xBC6E, 18, 84),
    (0xBC6F, 18, 85), (0xBC70, 18, 86), (0xBC71, 18, 87), (0xBC72, 18, 88), (0xBC73, 18, 89),
    (0xBC74, 18, 90), (0xBC75, 18, 91), (0xBC76, 18, 92), (0xBC77, 18, 93), (0xBC78, 18, 94),
    (0xBC79, 18, 95), (0xBC7A, 18, 96), (0xBC7B, 18, 97), (0xBC7C, 18, 98), (0xBC7D, 18, 99),
    (0xBC7E, 18, 100), (0xBC7F, 18, 101), (0xBC80, 18, 102), (0xBC81, 18, 103), (0xBC82, 18, 104),
    (0xBC83, 18, 105), (0xBC84, 56, 182), (0xBC85, 56, 183), (0xBC86, 18, 106), (0xBC87, 18, 107),
    (0xBC88, 56, 184), (0xBC89, 18, 108), (0xBC8A, 18, 109), (0xBC8B, 56, 185), (0xBC8C, 56, 186),
    (0xBC8D, 18, 110), (0xBC8E, 56, 187), (0xBC8F, 18, 111), (0xBC90, 18, 112), (0xBC91, 18, 113),
    (0xBC92, 18, 114), (0xBC93, 18, 115), (0xBC94, 56, 188), (0xBC95, 56, 189), (0xBC96, 18, 116),
    (0xBC97, 56, 190), (0xBC98, 18, 117), (0xBC99, 57, 97), (0xBC9A, 57, 98), (0xBC9B, 18, 118),
    (0xBC9C, 18, 119), (0xBC9D, 18, 120), (0xBC9E, 18, 121), (0xBC9F, 18, 122), (0xBCA0, 57, 99),
    (0xBCA1, 57, 100), (0xBCA2, 18, 123), (0xBCA3, 18, 124), (0xBCA4, 57, 101), (0xBCA5, 18, 125),
    (0xBCA6, 18, 126), (0xBCA7, 57, 102), (0xBCA8, 57, 103), (0xBCA9, 18, 127), (0xBCAA, 18, 128),
    (0xBCAB, 18, 129), (0xBCAC, 18, 130), (0xBCAD, 18, 131), (0xBCAE, 18, 132), (0xBCAF, 18, 133),
    (0xBCB0, 57, 104), (0xBCB1, 57, 105), (0xBCB2, 18, 134), (0xBCB3, 57, 106), (0xBCB4, 57, 107),
    (0xBCB5, 57, 108), (0xBCB6, 18, 135), (0xBCB7, 18, 136), (0xBCB8, 18, 137), (0xBCB9, 18, 138),
    (0xBCBA, 18, 139), (0xBCBB, 18, 140), (0xBCBC, 57, 109), (0xBCBD, 57, 110), (0xBCBE, 18, 141),
    (0xBCBF, 18, 142), (0xBCC0, 57, 111), (0xBCC1, 18, 143), (0xBCC2, 18, 144), (0xBCC3, 18, 145),
    (0xBCC4, 57, 112), (0xBCC5, 18, 146), (0xBCC6, 18, 147), (0xBCC7, 18, 148), (0xBCC8, 18, 149),
    (0xBCC9, 18, 150), (0xBCCA, 18, 151), (0xBCCB, 18, 152), (0xBCCC, 18, 153), (0xBCCD, 57, 113),
    (0xBCCE, 18, 154), (0xBCCF, 57, 114), (0xBCD0, 57, 115), (0xBCD1, 57, 116), (0xBCD2, 18, 155),
    (0xBCD3, 18, 156), (0xBCD4, 18, 157), (0xBCD5, 57, 117), (0xBCD6, 18, 158), (0xBCD7, 18, 159),
    (0xBCD8, 57, 118), (0xBCD9, 18, 160), (0xBCDA, 18, 161), (0xBCDB, 18, 162), (0xBCDC, 57, 119),
    (0xBCDD, 18, 163), (0xBCDE, 18, 164), (0xBCDF, 18, 165), (0xBCE0, 18, 166), (0xBCE1, 18, 167),
    (0xBCE2, 18, 168), (0xBCE3, 18, 169), (0xBCE4, 18, 170), (0xBCE5, 18, 171), (0xBCE6, 18, 172),
    (0xBCE7, 18, 173), (0xBCE8, 18, 174), (0xBCE9, 18, 175), (0xBCEA, 18, 176), (0xBCEB, 18, 177),
    (0xBCEC, 18, 178), (0xBCED, 18, 179), (0xBCEE, 18, 180), (0xBCEF, 18, 181), (0xBCF0, 18, 182),
    (0xBCF1, 18, 183), (0xBCF2, 18, 184), (0xBCF3, 18, 185), (0xBCF4, 57, 120), (0xBCF5, 57, 121),
    (0xBCF6, 57, 122), (0xBCF7, 18, 186), (0xBCF8, 57, 123), (0xBCF9, 18, 187), (0xBCFA, 18, 188),
    (0xBCFB, 18, 189), (0xBCFC, 57, 124), (0xBCFD, 18, 190), (0xBCFE, 19, 1), (0xBCFF, 19, 2),
    (0xBD00, 19, 3), (0xBD01, 19, 4), (0xBD02, 19, 5), (0xBD03, 19, 6), (0xBD04, 57, 125),
    (0xBD05, 57, 126), (0xBD06, 19, 7), (0xBD07, 57, 127), (0xBD08, 19, 8), (0xBD09, 57, 128),
    (0xBD0A, 19, 9), (0xBD0B, 19, 10), (0xBD0C, 19, 11), (0xBD0D, 19, 12), (0xBD0E, 19, 13),
    (0xBD0F, 19, 14), (0xBD10, 57, 129), (0xBD11, 19, 15), (0xBD12, 19, 16), (0xBD13, 19, 17),
    (0xBD14, 57, 130), (0xBD15, 19, 18), (0xBD16, 19, 19), (0xBD17, 19, 20), (0xBD18, 19, 21),
    (0xBD19, 19, 22), (0xBD1A, 19, 23), (0xBD1B, 19, 24), (0xBD1C, 19, 25), (0xBD1D, 19, 26),
    (0xBD1E, 19, 33), (0xBD1F, 19, 34), (0xBD20, 19, 35), (0xBD21, 19, 36), (0xBD22, 19, 37),
    (0xBD23, 19, 38), (0xBD24, 57, 131), (0xBD25, 19, 39), (0xBD26, 19, 40), (0xBD27, 19, 41),
    (0xBD28, 19, 42), (0xBD29, 19, 43), (0xBD2A, 19, 44), (0xBD2B, 19, 45), (0xBD2C, 57, 132),
    (0xBD2D, 19, 46), (0xBD2E, 19, 47), (0xBD2F, 19, 48), (0xBD30, 19, 49), (0xBD31, 19, 50),
    (0xBD32, 19, 51), (0xBD33, 19, 52), (0xBD34, 19, 53), (0xBD35, 19, 54), (0xBD36, 19, 55),
    (0xBD37, 19, 56), (0xBD38, 19, 57), (0xBD39, 19, 58), (0xBD3A, 19, 65), (0xBD3B, 19, 66),
    (0xBD3C, 19, 67), (0xBD3D, 19, 68), (0xBD3E, 19, 69), (0xBD3F, 19, 70), (0xBD40, 57, 133),
    (0xBD41, 19, 71), (0xBD42, 19, 72), (0xBD43, 19, 73), (0xBD44, 19, 74), (0xBD45, 19, 75),
    (0xBD46, 19, 76), (0xBD47, 19, 77), (0xBD48, 57, 134), (0xBD49, 57, 135), (0xBD4A, 19, 78),
    (0xBD4B, 19, 79), (0xBD4C, 57, 136), (0xBD4D, 19, 80), (0xBD4E, 19, 81), (0xBD4F, 19, 82),
    (0xBD50, 57, 137), (0xBD51, 19, 83), (0xBD52, 19, 84), (0xBD53, 19, 85), (0xBD54, 19, 86),
    (0xBD55, 19, 87), (0xBD56, 19, 88), (0xBD57, 19, 89), (0xBD58, 57, 138), (0xBD59, 57, 139),
    (0xBD5A, 19, 90), (0xBD5B, 19, 91), (0xBD5C, 19, 92), (0xBD5D, 19, 93), (0xBD5E, 19, 94),
    (0xBD5F, 19, 95), (0xBD60, 19, 96), (0xBD61, 19, 97), (0xBD62, 19, 98), (0xBD63, 19, 99),
    (0xBD64, 57, 140), (0xBD65, 19, 100), (0xBD66, 19, 101), (0xBD67, 19, 102), (0xBD68, 57, 141),
    (0xBD69, 19, 103), (0xBD6A, 19, 104), (0xBD6B, 19, 105), (0xBD6C, 19, 106), (0xBD6D, 19, 107),
    (0xBD6E, 19, 108), (0xBD6F, 19, 109), (0xBD70, 19, 110), (0xBD71, 19, 111), (0xBD72, 19, 112),
    (0xBD73, 19, 113), (0xBD74, 19, 114), (0xBD75, 19, 115), (0xBD76, 19, 116), (0xBD77, 19, 117),
    (0xBD78, 19, 118), (0xBD79, 19, 119), (0xBD7A, 19, 120), (0xBD7B, 19, 121), (0xBD7C, 19, 122),
    (0xBD7D, 19, 123), (0xBD7E, 19, 124), (0xBD7F, 19, 125), (0xBD80, 57, 142), (0xBD81, 57, 143),
    (0xBD82, 19, 126), (0xBD83, 19, 127), (0xBD84, 57, 144), (0xBD85, 19, 128), (0xBD86, 19, 129),
    (0xBD87, 57, 145), (0xBD88, 57, 146), (0xBD89, 57, 147), (0xBD8A, 57, 148), (0xBD8B, 19, 130),
    (0xBD8C, 19, 131), (0xBD8D, 19, 132), (0xBD8E, 19, 133), (0xBD8F, 19, 134), (0xBD90, 57, 149),
    (0xBD91, 57, 150), (0xBD92, 19, 135), (0xBD93, 57, 151), (0xBD94, 19, 136), (0xBD95, 57, 152),
    (0xBD96, 19, 137), (0xBD97, 19, 138), (0xBD98, 19, 139), (0xBD99, 57, 153), (0xBD9A, 57, 154),
    (0xBD9B, 19, 140), (0xBD9C, 57, 155), (0xBD9D, 19, 141), (0xBD9E, 19, 142), (0xBD9F, 19, 143),
    (0xBDA0, 19, 144), (0xBDA1, 19, 145), (0xBDA2, 19, 146), (0xBDA3, 19, 147), (0xBDA4, 57, 156),
    (0xBDA5, 19, 148), (0xBDA6, 19, 149), (0xBDA7, 19, 150), (0xBDA8, 19, 151), (0xBDA9, 19, 152),
    (0xBDAA, 19, 153), (0xBDAB, 19, 154), (0xBDAC, 19, 155), (0xBDAD, 19, 156), (0xBDAE, 19, 157),
    (0xBDAF, 19, 158), (0xBDB0, 57, 157), (0xBDB1, 19, 159), (0xBDB2, 19, 160), (0xBDB3, 19, 161),
    (0xBDB4, 19, 162), (0xBDB5, 19, 163), (0xBDB6, 19, 164), (0xBDB7, 19, 165), (0xBDB8, 57, 158),
    (0xBDB9, 19, 166), (0xBDBA, 19, 167), (0xBDBB, 19, 168), (0xBDBC, 19, 169), (0xBDBD, 19, 170),
    (0xBDBE, 19, 171), (0xBDBF, 19, 172), (0xBDC0, 19, 173), (0xBDC1, 19, 174), (0xBDC2, 19, 175),
    (0xBDC3, 19, 176), (0xBDC4, 19, 177), (0xBDC5, 19, 178), (0xBDC6, 19, 179), (0xBDC7, 19, 180),
    (0xBDC8, 19, 181), (0xBDC9, 19, 182), (0xBDCA, 19, 183), (0xBDCB, 19, 184), (0xBDCC, 19, 185),
    (0xBDCD, 19, 186), (0xBDCE, 19, 187), (0xBDCF, 19, 188), (0xBDD0, 19, 189), (0xBDD1, 19, 190),
    (0xBDD2, 20, 1), (0xBDD3, 20, 2), (0xBDD4, 57, 159), (0xBDD5, 57, 160), (0xBDD6, 20, 3),
    (0xBDD7, 20, 4), (0xBDD8, 57, 161), (0xBDD9, 20, 5), (0xBDDA, 20, 6), (0xBDDB, 20, 7),
    (0xBDDC, 57, 162), (0xBDDD, 20, 8), (0xBDDE, 20, 9), (0xBDDF, 20, 10), (0xBDE0, 20, 11),
    (0xBDE1, 20, 12), (0xBDE2, 20, 13), (0xBDE3, 20, 14), (0xBDE4, 20, 15), (0xBDE5, 20, 16),
    (0xBDE6, 20, 17), (0xBDE7, 20, 18), (0xBDE8, 20, 19), (0xBDE9, 57, 163), (0xBDEA, 20, 20),
    (0xBDEB, 20, 21), (0xBDEC, 20, 22), (0xBDED, 20, 23), (0xBDEE, 20, 24), (0xBDEF, 20, 25),
    (0xBDF0, 57, 164), (0xBDF1, 20, 26), (0xBDF2, 20, 33), (0xBDF3, 20, 34), (0xBDF4, 57, 165),
    (0xBDF5, 20, 35), (0xBDF6, 20, 36), (0xBDF7, 20, 37), (0xBDF8, 57, 166), (0xBDF9, 20, 38),
    (0xBDFA, 20, 39), (0xBDFB, 20, 40), (0xBDFC, 20, 41), (0xBDFD, 20, 42), (0xBDFE, 20, 43),
    (0xBDFF, 20, 44), (0xBE00, 57, 167), (0xBE01, 20, 45), (0xBE02, 20, 46), (0xBE03, 57, 168),
    (0xBE04, 20, 47), (0xBE05, 57, 169), (0xBE06, 20, 48), (0xBE07, 20, 49), (0xBE08, 20, 50),
    (0xBE09, 20, 51), (0xBE0A, 20, 52), (0xBE0B, 20, 53), (0xBE0C, 57, 170), (0xBE0D, 57, 171),
    (0xBE0E, 20, 54), (0xBE0F, 20, 55), (0xBE10, 57, 172), (0xBE11, 20, 56), (0xBE12, 20, 57),
    (0xBE13, 20, 58), (0xBE14, 57, 173), (0xBE15, 20, 65), (0xBE16, 20, 66), (0xBE17, 20, 67),
    (0xBE18, 20, 68), (0xBE19, 20, 69), (0xBE1A, 20, 70), (0xBE1B, 20, 71), (0xBE1C, 57, 174),
    (0xBE1D, 57, 175), (0xBE1E, 20, 72), (0xBE1F, 57, 176), (0xBE20, 20, 73), (0xBE21, 20, 74),
    (0xBE22, 20, 75), (0xBE23, 20, 76), (0xBE24, 20, 77), (0xBE25, 20, 78), (0xBE26, 20, 79),
    (0xBE27, 20, 80), (0xBE28, 20, 81), (0xBE29, 20, 82), (0xBE2A, 20, 83), (0xBE2B, 20, 84),
    (0xBE2C, 20, 85), (0xBE2D, 20, 86), (0xBE2E, 20, 87), (0xBE2F, 20, 88), (0xBE30, 20, 89),
    (0xBE31, 20, 90), (0xBE32, 20, 91), (0xBE33, 20, 92), (0xBE34, 20, 93), (0xBE35, 20, 94),
    (0xBE36, 20, 95), (0xBE37, 20, 96), (0xBE38, 20, 97), (0xBE39, 20, 98), (0xBE3A, 20, 99),
    (0xBE3B, 20, 100), (0xBE3C, 20, 101), (0xBE3D, 20, 102), (0xBE3E, 20, 103), (0xBE3F, 20, 104),
    (0xBE40, 20, 105), (0xBE41, 20, 106), (0xBE42, 20, 107), (0xBE43, 20, 108), (0xBE44, 57, 177),
    (0xBE45, 57, 178), (0xBE46, 20, 109), (0xBE47, 20, 110), (0xBE48, 57, 179), (0xBE49, 20, 111),
    (0xBE4A, 20, 112), (0xBE4B, 20, 113), (0xBE4C, 57, 180), (0xBE4D, 20, 114), (0xBE4E, 57, 181),
    (0xBE4F, 20, 115), (0xBE50, 20, 116), (0xBE51, 20, 117), (0xBE52, 20, 118), (0xBE53, 20, 119),
    (0xBE54, 57, 182), (0xBE55, 57, 183), (0xBE56, 20, 120), (0xBE57, 57, 184), (0xBE58, 20, 121),
    (0xBE59, 57, 185), (0xBE5A, 57, 186), (0xBE5B, 57, 187), (0xBE5C, 20, 122), (0xBE5D, 20, 123),
    (0xBE5E, 20, 124), (0xBE5F, 20, 125), (0xBE60, 57, 188), (0xBE61, 57, 189), (0xBE62, 20, 126),
    (0xBE63, 20, 127), (0xBE64, 57, 190), (0xBE65, 20, 128), (0xBE66, 20, 129), (0xBE67, 20, 130),
    (0xBE68, 58, 97), (0xBE69, 20, 131), (0xBE6A, 58, 98), (0xBE6B, 20, 132), (0xBE6C, 20, 133),
    (0xBE6D, 20, 134), (0xBE6E, 20, 135), (0xBE6F, 20, 136), (0xBE70, 58, 99), (0xBE71, 58, 100),
    (0xBE72, 20, 137), (0xBE73, 58, 101), (0xBE74, 58, 102), (0xBE75, 58, 103), (0xBE76, 20, 138),
    (0xBE77, 20, 139), (0xBE78, 20, 140), (0xBE79, 20, 141), (0xBE7A, 20, 142), (0xBE7B, 58, 104),
    (0xBE7C, 58, 105), (0xBE7D, 58, 106), (0xBE7E, 20, 143), (0xBE7F, 20, 144), (0xBE80, 58, 107),
    (0xBE81, 20, 145), (0xBE82, 20, 146), (0xBE83, 20, 147), (0xBE84, 58, 108), (0xBE85, 20, 148),
    (0xBE86, 20, 149), (0xBE87, 20, 150), (0xBE88, 20, 151), (0xBE89, 20, 152), (0xBE8A, 20, 153),
    (0xBE8B, 20, 154), (0xBE8C, 58, 109), (0xBE8D, 58, 110), (0xBE8E, 20, 155), (0xBE8F, 58, 111),
    (0xBE90, 58, 112), (0xBE91, 58, 113), (0xBE92, 20, 156), (0xBE93, 20, 157), (0xBE94, 20, 158),
    (0xBE95, 20, 159), (0xBE96, 20, 160), (0xBE97, 20, 161), (0xBE98, 58, 114), (0xBE99, 58, 115),
    (0xBE9A, 20, 162), (0xBE9B, 20, 163), (0xBE9C, 20, 164), (0xBE9D, 20, 165), (0xBE9E, 20, 166),
    (0xBE9F, 20, 167), (0xBEA0, 20, 168), (0xBEA1, 20, 169), (0xBEA2, 20, 170), (0xBEA3, 20, 171),
    (0xBEA4, 20, 172), (0xBEA5, 20, 173), (0xBEA6, 20, 174), (0xBEA7, 20, 175), (0xBEA8, 58, 116),
    (0xBEA9, 20, 176), (0xBEAA, 20, 177), (0xBEAB, 20, 178), (0xBEAC, 20, 179), (0xBEAD, 20, 180),
    (0xBEAE, 20, 181), (0xBEAF, 20, 182), (0xBEB0, 20, 183), (0xBEB1, 20, 184), (0xBEB2, 20, 185),
    (0xBEB3, 20, 186), (0xBEB4, 20, 187), (0xBEB5, 20, 188), (0xBEB6, 20, 189), (0xBEB7, 20, 190),
    (0xBEB8, 21, 1), (0xBEB9, 21, 2), (0xBEBA, 21, 3), (0xBEBB, 21, 4), (0xBEBC, 21, 5),
    (0xBEBD, 21, 6), (0xBEBE, 21, 7), (0xBEBF, 21, 8), (0xBEC0, 21, 9), (0xBEC1, 21, 10),
    (0xBEC2, 21, 11), (0xBEC3, 21, 12), (0xBEC4, 21, 13), (0xBEC5, 21, 14), (0xBEC6, 21, 15),
    (0xBEC7, 21, 16), (0xBEC8, 21, 17), (0xBEC9, 21, 18), (0xBECA, 21, 19), (0xBECB, 21, 20),
    (0xBECC, 21, 21), (0xBECD, 21, 22), (0xBECE, 21, 23), (0xBECF, 21, 24), (0xBED0, 58, 117),
    (0xBED1, 58, 118), (0xBED2, 21, 25), (0xBED3, 21, 26), (0xBED4, 58, 119), (0xBED5, 21, 33),
    (0xBED6, 21, 34), (0xBED7, 58, 120), (0xBED8, 58, 121), (0xBED9, 21, 35), (0xBEDA, 21, 36),
    (0xBEDB, 21, 37), (0xBEDC, 21, 38), (0xBEDD, 21, 39), (0xBEDE, 21, 40), (0xBEDF, 21, 41),
    (0xBEE0, 58, 122), (0xBEE1, 21, 42), (0xBEE2, 21, 43), (0xBEE3, 58, 123), (0xBEE4, 58, 124),
    (0xBEE5, 58, 125), (0xBEE6, 21, 44), (0xBEE7, 21, 45), (0xBEE8, 21, 46), (0xBEE9, 21, 47),
    (0xBEEA, 21, 48), (0xBEEB, 21, 49), (0xBEEC, 58, 126), (0xBEED, 21, 50), (0xBEEE, 21, 51),
    (0xBEEF, 21, 52), (0xBEF0, 21, 53), (0xBEF1, 21, 54), (0xBEF2, 21, 55), (0xBEF3, 21, 56),
    (0xBEF4, 21, 57), (0xBEF5, 21, 58), (0xBEF6, 21, 65), (0xBEF7, 21, 66), (0xBEF8, 21, 67),
    (0xBEF9, 21, 68), (0xBEFA, 21, 69), (0xBEFB, 21, 70), (0xBEFC, 21, 71), (0xBEFD, 21, 72),
    (0xBEFE, 21, 73), (0xBEFF, 21, 74), (0xBF00, 21, 75), (0xBF01, 58, 127), (0xBF02, 21, 76),
    (0xBF03, 21, 77), (0xBF04, 21, 78), (0xBF05, 21, 79), (0xBF06, 21, 80), (0xBF07, 21, 81),
    (0xBF08, 58, 128), (0xBF09, 58, 129), (0xBF0A, 21, 82), (0xBF0B, 21, 83), (0xBF0C, 21, 84),
    (0xBF0D, 21, 85), (0xBF0E, 21, 86), (0xBF0F, 21, 87), (0xBF10, 21, 88), (0xBF11, 21, 89),
    (0xBF12, 21, 90), (0xBF13, 21, 91), (0xBF14, 21, 92), (0xBF15, 21, 93), (0xBF16, 21, 94),
    (0xBF17, 21, 95), (0xBF18, 58, 130), (0xBF19, 58, 131), (0xBF1A, 21, 96), (0xBF1B, 58, 132),
    (0xBF1C, 58, 133), (0xBF1D, 58, 134), (0xBF1E, 21, 97), (0xBF1F, 21, 98), (0xBF20, 21, 99),
    (0xBF21, 21, 100), (0xBF22, 21, 101), (0xBF23, 21, 102), (0xBF24, 21, 103), (0xBF25, 21, 104),
    (0xBF26, 21, 105), (0xBF27, 21, 106), (0xBF28, 21, 107), (0xBF29, 21, 108), (0xBF2A, 21, 109),
    (0xBF2B, 21, 110), (0xBF2C, 21, 111), (0xBF2D, 21, 112), (0xBF2E, 21, 113), (0xBF2F, 21, 114),
    (0xBF30, 21, 115), (0xBF31, 21, 116), (0xBF32, 21, 117), (0xBF33, 21, 118), (0xBF34, 21, 119),
    (0xBF35, 21, 120), (0xBF36, 21, 121), (0xBF37, 21, 122), (0xBF38, 21, 123), (0xBF39, 21, 124),
    (0xBF3A, 21, 125), (0xBF3B, 21, 126), (0xBF3C, 21, 127), (0xBF3D, 21, 128), (0xBF3E, 21, 129),
    (0xBF3F, 21, 130), (0xBF40, 58, 135), (0xBF41, 58, 136), (0xBF42, 21, 131), (0xBF43, 21, 132),
    (0xBF44, 58, 137), (0xBF45, 21, 133), (0xBF46, 21, 134), (0xBF47, 21, 135), (0xBF48, 58, 138),
    (0xBF49, 21, 136), (0xBF4A, 21, 137), (0xBF4B, 21, 138), (0xBF4C, 21, 139), (0xBF4D, 21, 140),
    (0xBF4E, 21, 141), (0xBF4F, 21, 142), (0xBF50, 58, 139), (0xBF51, 58, 140), (0xBF52, 21, 143),
    (0xBF53, 21, 144), (0xBF54, 21, 145), (0xBF55, 58, 141), (0xBF56, 21, 146), (0xBF57, 21, 147),
    (0xBF58, 21, 148), (0xBF59, 21, 149), (0xBF5A, 21, 150), (0xBF5B, 21, 151), (0xBF5C, 21, 152),
    (0xBF5D, 21, 153), (0xBF5E, 21, 154), (0xBF5F, 21, 155), (0xBF60, 21, 156), (0xBF61, 21, 157),
    (0xBF62, 21, 158), (0xBF63, 21, 159), (0xBF64, 21, 160), (0xBF65, 21, 161), (0xBF66, 21, 162),
    (0xBF67, 21, 163), (0xBF68, 21, 164), (0xBF69, 21, 165), (0xBF6A, 21, 166), (0xBF6B, 21, 167),
    (0xBF6C, 21, 168), (0xBF6D, 21, 169), (0xBF6E, 21, 170), (0xBF6F, 21, 171), (0xBF70, 21, 172),
    (0xBF71, 21, 173), (0xBF72, 21, 174), (0xBF73, 21, 175), (0xBF74, 21, 176), (0xBF75, 21, 177),
    (0xBF76, 21, 178), (0xBF77, 21, 179), (0xBF78, 21, 180), (0xBF79, 21, 181), (0xBF7A, 21, 182),
    (0xBF7B, 21, 183), (0xBF7C, 21, 184), (0xBF7D, 21, 185), (0xBF7E, 21, 186), (0xBF7F, 21, 187),
    (0xBF80, 21, 188), (0xBF81, 21, 189), (0xBF82, 21, 190), (0xBF83, 22, 1), (0xBF84, 22, 2),
    (0xBF85, 22, 3), (0xBF86, 22, 4), (0xBF87, 22, 5), (0xBF88, 22, 6), (0xBF89, 22, 7),
    (0xBF8A, 22, 8), (0xBF8B, 22, 9), (0xBF8C, 22, 10), (0xBF8D, 22, 11), (0xBF8E, 22, 12),
    (0xBF8F, 22, 13), (0xBF90, 22, 14), (0xBF91, 22, 15), (0xBF92, 22, 16), (0xBF93, 22, 17),
    (0xBF94, 58, 142), (0xBF95, 22, 18), (0xBF96, 22, 19), (0xBF97, 22, 20), (0xBF98, 22, 21),
    (0xBF99, 22, 22), (0xBF9A, 22, 23), (0xBF9B, 22, 24), (0xBF9C, 22, 25), (0xBF9D, 22, 26),
    (0xBF9E, 22, 33), (0xBF9F, 22, 34), (0xBFA0, 22, 35), (0xBFA1, 22, 36), (0xBFA2, 22, 37),
    (0xBFA3, 22, 38), (0xBFA4, 22, 39), (0xBFA5, 22, 40), (0xBFA6, 22, 41), (0xBFA7, 22, 42),
    (0xBFA8, 22, 43), (0xBFA9, 22, 44), (0xBFAA, 22, 45), (0xBFAB, 22, 46), (0xBFAC, 22, 47),
    (0xBFAD, 22, 48), (0xBFAE, 22, 49), (0xBFAF, 22, 50), (0xBFB0, 58, 143), (0xBFB1, 22, 51),
    (0xBFB2, 22, 52), (0xBFB3, 22, 53), (0xBFB4, 22, 54), (0xBFB5, 22, 55), (0xBFB6, 22, 56),
    (0xBFB7, 22, 57), (0xBFB8, 22, 58), (0xBFB9, 22, 65), (0xBFBA, 22, 66), (0xBFBB, 22, 67),
    (0xBFBC, 22, 68), (0xBFBD, 22, 69), (0xBFBE, 22, 70), (0xBFBF, 22, 71), (0xBFC0, 22, 72),
    (0xBFC1, 22, 73), (0xBFC2, 22, 74), (0xBFC3, 22, 75), (0xBFC4, 22, 76), (0xBFC5, 58, 144),
    (0xBFC6, 22, 77), (0xBFC7, 22, 78), (0xBFC8, 22, 79), (0xBFC9, 22, 80), (0xBFCA, 22, 81),
    (0xBFCB, 22, 82), (0xBFCC, 58, 145), (0xBFCD, 58, 146), (0xBFCE, 22, 83), (0xBFCF, 22, 84),
    (0xBFD0, 58, 147), (0xBFD1, 22, 85), (0xBFD2, 22, 86), (0xBFD3, 22, 87), (0xBFD4, 58, 148),
    (0xBFD5, 22, 88), (0xBFD6, 22, 89), (0xBFD7, 22, 90), (0xBFD8, 22, 91), (0xBFD9, 22, 92),
    (0xBFDA, 22, 93), (0xBFDB, 22, 94), (0xBFDC, 58, 149), (0xBFDD, 22, 95), (0xBFDE, 22, 96),
    (0xBFDF, 58, 150), (0xBFE0, 22, 97), (0xBFE1, 58, 151), (0xBFE2, 22, 98), (0xBFE3, 22, 99),
    (0xBFE4, 22, 100), (0xBFE5, 22, 101), (0xBFE6, 22, 102), (0xBFE7, 22, 103), (0xBFE8, 22, 104),
    (0xBFE9, 22, 105), (0xBFEA, 22, 106), (0xBFEB, 22, 107), (0xBFEC, 22, 108), (0xBFED, 22, 109),
    (0xBFEE, 22, 110), (0xBFEF, 22, 111), (0xBFF0, 22, 112), (0xBFF1, 22, 113), (0xBFF2, 22, 114),
    (0xBFF3, 22, 115), (0xBFF4, 22, 116), (0xBFF5, 22, 117), (0xBFF6, 22, 118), (0xBFF7, 22, 119),
    (0xBFF8, 22, 120), (0xBFF9, 22, 121), (0xBFFA, 22, 122), (0xBFFB, 22, 123), (0xBFFC, 22, 124),
    (0xBFFD, 22, 125), (0xBFFE, 22, 126), (0xBFFF, 22, 127), (0xC000, 22, 128), (0xC001, 22, 129),
    (0xC002, 22, 130), (0xC003, 22, 131), (0xC004, 22, 132), (0xC005, 22, 133), (0xC006, 22, 134),
    (0xC007, 22, 135), (0xC008, 22, 136), (0xC009, 22, 137), (0xC00A, 22, 138), (0xC00B, 22, 139),
    (0xC00C, 22, 140), (0xC00D, 22, 141), (0xC00E, 22, 142), (0xC00F, 22, 143), (0xC010, 22, 144),
    (0xC011, 22, 145), (0xC012, 22, 146), (0xC013, 22, 147), (0xC014, 22, 148), (0xC015, 22, 149),
    (0xC016, 22, 150), (0xC017, 22, 151), (0xC018, 22, 152), (0xC019, 22, 153), (0xC01A, 22, 154),
    (0xC01B, 22, 155), (0xC01C, 22, 156), (0xC01D, 22, 157), (0xC01E, 22, 158), (0xC01F, 22, 159),
    (0xC020, 22, 160), (0xC021, 22, 161), (0xC022, 22, 162), (0xC023, 22, 163), (0xC024, 22, 164),
    (0xC025, 22, 165), (0xC026, 22, 166), (0xC027, 22, 167), (0xC028, 22, 168), (0xC029, 22, 169),
    (0xC02A, 22, 170), (0xC02B, 22, 171), (0xC02C, 22, 172), (0xC02D, 22, 173), (0xC02E, 22, 174),
    (0xC02F, 22, 175), (0xC030, 22, 176), (0xC031, 22, 177), (0xC032, 22, 178), (0xC033, 22, 179),
    (0xC034, 22, 180), (0xC035, 22, 181), (0xC036, 22, 182), (0xC037, 22, 183), (0xC038, 22, 184),
    (0xC039, 22, 185), (0xC03A, 22, 186), (0xC03B, 22, 187), (0xC03C, 58, 152), (0xC03D, 22, 188),
    (0xC03E, 22, 189), (0xC03F, 22, 190), (0xC040, 23, 1), (0xC041, 23, 2), (0xC042, 23, 3),
    (0xC043, 23, 4), (0xC044, 23, 5), (0xC045, 23, 6), (0xC046, 23, 7), (0xC047, 23, 8),
    (0xC048, 23, 9), (0xC049, 23, 10), (0xC04A, 23, 11), (0xC04B, 23, 12), (0xC04C, 23, 13),
    (0xC04D, 23, 14), (0xC04E, 23, 15), (0xC04F, 23, 16), (0xC050, 23, 17), (0xC051, 58, 153),
    (0xC052, 23, 18), (0xC053, 23, 19), (0xC054, 23, 20), (0xC055, 23, 21), (0xC056, 23, 22),
    (0xC057, 23, 23), (0xC058, 58, 154), (0xC059, 23, 24), (0xC05A, 23, 25), (0xC05B, 23, 26),
    (0xC05C, 58, 155), (0xC05D, 23, 33), (0xC05E, 23, 34), (0xC05F, 23, 35), (0xC060, 58, 156),
    (0xC061, 23, 36), (0xC062, 23, 37), (0xC063, 23, 38), (0xC064, 23, 39), (0xC065, 23, 40),
    (0xC066, 23, 41), (0xC067, 23, 42), (0xC068, 58, 157), (0xC069, 58, 158), (0xC06A, 23, 43),
    (0xC06B, 23, 44), (0xC06C, 23, 45), (0xC06D, 23, 46), (0xC06E, 23, 47), (0xC06F, 23, 48),
    (0xC070, 23, 49), (0xC071, 23, 50), (0xC072, 23, 51), (0xC073, 23, 52), (0xC074, 23, 53),
    (0xC075, 23, 54), (0xC076, 23, 55), (0xC077, 23, 56), (0xC078, 23, 57), (0xC079, 23, 58),
    (0xC07A, 23, 65), (0xC07B, 23, 66), (0xC07C, 23, 67), (0xC07D, 23, 68), (0xC07E, 23, 69),
    (0xC07F, 23, 70), (0xC080, 23, 71), (0xC081, 23, 72), (0xC082, 23, 73), (0xC083, 23, 74),
    (0xC084, 23, 75), (0xC085, 23, 76), (0xC086, 23, 77), (0xC087, 23, 78), (0xC088, 23, 79),
    (0xC089, 23, 80), (0xC08A, 23, 81), (0xC08B, 23, 82), (0xC08C, 23, 83), (0xC08D, 23, 84),
    (0xC08E, 23, 85), (0xC08F, 23, 86), (0xC090, 58, 159), (0xC091, 58, 160), (0xC092, 23, 87),
    (0xC093, 23, 88), (0xC094, 58, 161), (0xC095, 23, 89), (0xC096, 23, 90), (0xC097, 23, 91),
    (0xC098, 58, 162), (0xC099, 23, 92), (0xC09A, 23, 93), (0xC09B, 23, 94), (0xC09C, 23, 95),
    (0xC09D, 23, 96), (0xC09E, 23, 97), (0xC09F, 23, 98), (0xC0A0, 58, 163), (0xC0A1, 58, 164),
    (0xC0A2, 23, 99), (0xC0A3, 58, 165), (0xC0A4, 23, 100), (0xC0A5, 58, 166), (0xC0A6, 23, 101),
    (0xC0A7, 23, 102), (0xC0A8, 23, 103), (0xC0A9, 23, 104), (0xC0AA, 23, 105), (0xC0AB, 23, 106),
    (0xC0AC, 58, 167), (0xC0AD, 58, 168), (0xC0AE, 23, 107), (0xC0AF, 58, 169), (0xC0B0, 58, 170),
    (0xC0B1, 23, 108), (0xC0B2, 23, 109), (0xC0B3, 58, 171), (0xC0B4, 58, 172), (0xC0B5, 58, 173),
    (0xC0B6, 58, 174), (0xC0B7, 23, 110), (0xC0B8, 23, 111), (0xC0B9, 23, 112), (0xC0BA, 23, 113),
    (0xC0BB, 23, 114), (0xC0BC, 58, 175), (0xC0BD, 58, 176), (0xC0BE, 23, 115), (0xC0BF, 58, 177),
    (0xC0C0, 58, 178), (0xC0C1, 58, 179), (0xC0C2, 23, 116), (0xC0C3, 23, 117), (0xC0C4, 23, 118),
    (0xC0C5, 58, 180), (0xC0C6, 23, 119), (0xC0C7, 23, 120), (0xC0C8, 58, 181), (0xC0C9, 58, 182),
    (0xC0CA, 23, 121), (0xC0CB, 23, 122), (0xC0CC, 58, 183), (0xC0CD, 23, 123), (0xC0CE, 23, 124),
    (0xC0CF, 23, 125), (0xC0D0, 58, 184), (0xC0D1, 23, 126), (0xC0D2, 23, 127), (0xC0D3, 23, 128),
    (0xC0D4, 23, 129), (0xC0D5, 23, 130), (0xC0D6, 23, 131), (0xC0D7, 23, 132), (0xC0D8, 58, 185),
    (0xC0D9, 58, 186), (0xC0DA, 23, 133), (0xC0DB, 58, 187), (0xC0DC, 58, 188), (0xC0DD, 58, 189),
    (0xC0DE, 23, 134), (0xC0DF, 23, 135), (0xC0E0, 23, 136), (0xC0E1, 23, 137), (0xC0E2, 23, 138),
    (0xC0E3, 23, 139), (0xC0E4, 58, 190), (0xC0E5, 59, 97), (0xC0E6, 23, 140), (0xC0E7, 23, 141),
    (0xC0E8, 59, 98), (0xC0E9, 23, 142), (0xC0EA, 23, 143), (0xC0EB, 23, 144), (0xC0EC, 59, 99),
    (0xC0ED, 23, 145), (0xC0EE, 23, 146), (0xC0EF, 23, 147), (0xC0F0, 23, 148), (0xC0F1, 23, 149),
    (0xC0F2, 23, 150), (0xC0F3, 23, 151), (0xC0F4, 59, 100), (0xC0F5, 59, 101), (0xC0F6, 23, 152),
    (0xC0F7, 59, 102), (0xC0F8, 23, 153), (0xC0F9, 59, 103), (0xC0FA, 23, 154), (0xC0FB, 23, 155),
    (0xC0FC, 23, 156), (0xC0FD, 23, 157), (0xC0FE, 23, 158), (0xC0FF, 23, 159), (0xC100, 59, 104),
    (0xC101, 23, 160), (0xC102, 23, 161), (0xC103, 23, 162), (0xC104, 59, 105), (0xC105, 23, 163),
    (0xC106, 23, 164), (0xC107, 23, 165), (0xC108, 59, 106), (0xC109, 23, 166), (0xC10A, 23, 167),
    (0xC10B, 23, 168), (0xC10C, 23, 169), (0xC10D, 23, 170), (0xC10E, 23, 171), (0xC10F, 23, 172),
    (0xC110, 59, 107), (0xC111, 23, 173), (0xC112, 23, 174), (0xC113, 23, 175), (0xC114, 23, 176),
    (0xC115, 59, 108), (0xC116, 23, 177), (0xC117, 23, 178), (0xC118, 23, 179), (0xC119, 23, 180),
    (0xC11A, 23, 181), (0xC11B, 23, 182), (0xC11C, 59, 109), (0xC11D, 59, 110), (0xC11E, 59, 111),
    (0xC11F, 59, 112), (0xC120, 59, 113), (0xC121, 23, 183), (0xC122, 23, 184), (0xC123, 59, 114),
    (0xC124, 59, 115), (0xC125, 23, 185), (0xC126, 59, 116), (0xC127, 59, 117), (0xC128, 23, 186),
    (0xC129, 23, 187), (0xC12A, 23, 188), (0xC12B, 23, 189), (0xC12C, 59, 118), (0xC12D, 59, 119),
    (0xC12E, 23, 190), (0xC12F, 59, 120), (0xC130, 59, 121), (0xC131, 59, 122), (0xC132, 24, 1),
    (0xC133, 24, 2), (0xC134, 24, 3), (0xC135, 24, 4), (0xC136, 59, 123), (0xC137, 24, 5),
    (0xC138, 59, 124), (0xC139, 59, 125), (0xC13A, 24, 6), (0xC13B, 24, 7), (0xC13C, 59, 126),
    (0xC13D, 24, 8), (0xC13E, 24, 9), (0xC13F, 24, 10), (0xC140, 59, 127), (0xC141, 24, 11),
    (0xC142, 24, 12), (0xC143, 24, 13), (0xC144, 24, 14), (0xC145, 24, 15), (0xC146, 24, 16),
    (0xC147, 24, 17), (0xC148, 59, 128), (0xC149, 59, 129), (0xC14A, 24, 18), (0xC14B, 59, 130),
    (0xC14C, 59, 131), (0xC14D, 59, 132), (0xC14E, 24, 19), (0xC14F, 24, 20), (0xC150, 24, 21),
    (0xC151, 24, 22), (0xC152, 24, 23), (0xC153, 24, 24), (0xC154, 59, 133), (0xC155, 59, 134),
    (0xC156, 24, 25), (0xC157, 24, 26), (0xC158, 59, 135), (0xC159, 24, 33), (0xC15A, 24, 34),
    (0xC15B, 24, 35), (0xC15C, 59, 136), (0xC15D, 24, 36), (0xC15E, 24, 37), (0xC15F, 24, 38),
    (0xC160, 24, 39), (0xC161, 24, 40), (0xC162, 24, 41), (0xC163, 24, 42), (0xC164, 59, 137),
    (0xC165, 59, 138), (0xC166, 24, 43), (0xC167, 59, 139), (0xC168, 59, 140), (0xC169, 59, 141),
    (0xC16A, 24, 44), (0xC16B, 24, 45), (0xC16C, 24, 46), (0xC16D, 24, 47), (0xC16E, 24, 48),
    (0xC16F, 24, 49), (0xC170, 59, 142), (0xC171, 24, 50), (0xC172, 24, 51), (0xC173, 24, 52),
    (0xC174, 59, 143), (0xC175, 24, 53), (0xC176, 24, 54), (0xC177, 24, 55), (0xC178, 59, 144),
    (0xC179, 24, 56), (0xC17A, 24, 57), (0xC17B, 24, 58), (0xC17C, 24, 65), (0xC17D, 24, 66),
    (0xC17E, 24, 67), (0xC17F, 24, 68), (0xC180, 24, 69), (0xC181, 24, 70), (0xC182, 24, 71),
    (0xC183, 24, 72), (0xC184, 24, 73), (0xC185, 59, 145), (0xC186, 24, 74), (0xC187, 24, 75),
    (0xC188, 24, 76), (0xC189, 24, 77), (0xC18A, 24, 78), (0xC18B, 24, 79), (0xC18C, 59, 146),
    (0xC18D, 59, 147), (0xC18E, 59, 148), (0xC18F, 24, 80), (0xC190, 59, 149), (0xC191, 24, 81),
    (0xC192, 24, 82), (0xC193, 24, 83), (0xC194, 59, 150), (0xC195, 24, 84), (0xC196, 59, 151),
    (0xC197, 24, 85), (0xC198, 24, 86), (0xC199, 24, 87), (0xC19A, 24, 88), (0xC19B, 24, 89),
    (0xC19C, 59, 152), (0xC19D, 59, 153), (0xC19E, 24, 90), (0xC19F, 59, 154), (0xC1A0, 24, 91),
    (0xC1A1, 59, 155), (0xC1A2, 24, 92), (0xC1A3, 24, 93), (0xC1A4, 24, 94), (0xC1A5, 59, 156),
    (0xC1A6, 24, 95), (0xC1A7, 24, 96), (0xC1A8, 59, 157), (0xC1A9, 59, 158), (0xC1AA, 24, 97),
    (0xC1AB, 24, 98), (0xC1AC, 59, 159), (0xC1AD, 24, 99), (0xC1AE, 24, 100), (0xC1AF, 24, 101),
    (0xC1B0, 59, 160), (0xC1B1, 24, 102), (0xC1B2, 24, 103), (0xC1B3, 24, 104), (0xC1B4, 24, 105),
    (0xC1B5, 24, 106), (0xC1B6, 24, 107), (0xC1B7, 24, 108), (0xC1B8, 24, 109), (0xC1B9, 24, 110),
    (0xC1BA, 24, 111), (0xC1BB, 24, 112), (0xC1BC, 24, 113), (0xC1BD, 59, 161), (0xC1BE, 24, 114),
    (0xC1BF, 24, 115), (0xC1C0, 24, 116), (0xC1C1, 24, 117), (0xC1C2, 24, 118), (0xC1C3, 24, 119),
    (0xC1C4, 59, 162), (0xC1C5, 24, 120), (0xC1C6, 24, 121), (0xC1C7, 24, 122), (0xC1C8, 59, 163),
    (0xC1C9, 24, 123), (0xC1CA, 24, 124), (0xC1CB, 24, 125), (0xC1CC, 59, 164), (0xC1CD, 24, 126),
    (0xC1CE, 24, 127), (0xC1CF, 24, 128), (0xC1D0, 24, 129), (0xC1D1, 24, 130), (0xC1D2, 24, 131),
    (0xC1D3, 24, 132), (0xC1D4, 59, 165), (0xC1D5, 24, 133), (0xC1D6, 24, 134), (0xC1D7, 59, 166),
    (0xC1D8, 59, 167), (0xC1D9, 24, 135), (0xC1DA, 24, 136), (0xC1DB, 24, 137), (0xC1DC, 24, 138),
    (0xC1DD, 24, 139), (0xC1DE, 24, 140), (0xC1DF, 24, 141), (0xC1E0, 59, 168), (0xC1E1, 24, 142),
    (0xC1E2, 24, 143), (0xC1E3, 24, 144), (0xC1E4, 59, 169), (0xC1E5, 24, 145), (0xC1E6, 24, 146),
    (0xC1E7, 24, 147), (0xC1E8, 59, 170), (0xC1E9, 24, 148), (0xC1EA, 24, 149), (0xC1EB, 24, 150),
    (0xC1EC, 24, 151), (0xC1ED, 24, 152), (0xC1EE, 24, 153), (0xC1EF, 24, 154), (0xC1F0, 59, 171),
    (0xC1F1, 59, 172), (0xC1F2, 24, 155), (0xC1F3, 59, 173), (0xC1F4, 24, 156), (0xC1F5, 24, 157),
    (0xC1F6, 24, 158), (0xC1F7, 24, 159), (0xC1F8, 24, 160), (0xC1F9, 24, 161), (0xC1FA, 24, 162),
    (0xC1FB, 24, 163), (0xC1FC, 59, 174), (0xC1FD, 59, 175), (0xC1FE, 24, 164), (0xC1FF, 24, 165),
    (0xC200, 59, 176), (0xC201, 24, 166), (0xC202, 24, 167), (0xC203, 24, 168), (0xC204, 59, 177),
    (0xC205, 24, 169), (0xC206, 24, 170), (0xC207, 24, 171), (0xC208, 24, 172), (0xC209, 24, 173),
    (0xC20A, 24, 174), (0xC20B, 24, 175), (0xC20C, 59, 178), (0xC20D, 59, 179), (0xC20E, 24, 176),
    (0xC20F, 59, 180), (0xC210, 24, 177), (0xC211, 59, 181), (0xC212, 24, 178), (0xC213, 24, 179),
    (0xC214, 24, 180), (0xC215, 24, 181), (0xC216, 24, 182), (0xC217, 24, 183), (0xC218, 59, 182),
    (0xC219, 59, 183), (0xC21A, 24, 184), (0xC21B, 24, 185), (0xC21C, 59, 184), (0xC21D, 24, 186),
    (0xC21E, 24, 187), (0xC21F, 59, 185), (0xC220, 59, 186), (0xC221, 24, 188), (0xC222, 24, 189),
    (0xC223, 24, 190), (0xC224, 25, 1), (0xC225, 25, 2), (0xC226, 25, 3), (0xC227, 25, 4),
    (0xC228, 59, 187), (0xC229, 59, 188), (0xC22A, 25, 5), (0xC22B, 59, 189), (0xC22C, 25, 6),
    (0xC22D, 59, 190), (0xC22E, 25, 7), (0xC22F, 60, 97), (0xC230, 25, 8), (0xC231, 60, 98),
    (0xC232, 60, 99), (0xC233, 25, 9), (0xC234, 60, 100), (0xC235, 25, 10), (0xC236, 25, 11),
    (0xC237, 25, 12), (0xC238, 25, 13), (0xC239, 25, 14), (0xC23A, 25, 15), (0xC23B, 25, 16),
    (0xC23C, 25, 17), (0xC23D, 25, 18), (0xC23E, 25, 19), (0xC23F, 25, 20), (0xC240, 25, 21),
    (0xC241, 25, 22), (0xC242, 25, 23), (0xC243, 25, 24), (0xC244, 25, 25), (0xC245, 25, 26),
    (0xC246, 25, 33), (0xC247, 25, 34), (0xC248, 60, 101), (0xC249, 25, 35), (0xC24A, 25, 36),
    (0xC24B, 25, 37), (0xC24C, 25, 38), (0xC24D, 25, 39), (0xC24E, 25, 40), (0xC24F, 25, 41),
    (0xC250, 60, 102), (0xC251, 60, 103), (0xC252, 25, 42), (0xC253, 25, 43), (0xC254, 60, 104),
    (0xC255, 25, 44), (0xC256, 25, 45), (0xC257, 25, 46), (0xC258, 60, 105), (0xC259, 25, 47),
    (0xC25A, 25, 48), (0xC25B, 25, 49), (0xC25C, 25, 50), (0xC25D, 25, 51), (0xC25E, 25, 52),
    (0xC25F, 25, 53), (0xC260, 60, 106), (0xC261, 25, 54), (0xC262, 25, 55), (0xC263, 25, 56),
    (0xC264, 25, 57), (0xC265, 60, 107), (0xC266, 25, 58), (0xC267, 25, 65), (0xC268, 25, 66),
    (0xC269, 25, 67), (0xC26A, 25, 68), (0xC26B, 25, 69), (0xC26C, 60, 108), (0xC26D, 60, 109),
    (0xC26E, 25, 70), (0xC26F, 25, 71), (0xC270, 60, 110), (0xC271, 25, 72), (0xC272, 25, 73),
    (0xC273, 25, 74), (0xC274, 60, 111), (0xC275, 25, 75), (0xC276, 25, 76), (0xC277, 25, 77),
    (0xC278, 25, 78), (0xC279, 25, 79), (0xC27A, 25, 80), (0xC27B, 25, 81), (0xC27C, 60, 112),
    (0xC27D, 60, 113), (0xC27E, 25, 82), (0xC27F, 60, 114), (0xC280, 25, 83), (0xC281, 60, 115),
    (0xC282, 25, 84), (0xC283, 25, 85), (0xC284, 25, 86), (0xC285, 25, 87), (0xC286, 25, 88),
    (0xC287, 25, 89), (0xC288, 60, 116), (0xC289, 60, 117), (0xC28A, 25, 90), (0xC28B, 25, 91),
    (0xC28C, 25, 92), (0xC28D, 25, 93), (0xC28E, 25, 94), (0xC28F, 25, 95), (0xC290, 60, 118),
    (0xC291, 25, 96), (0xC292, 25, 97), (0xC293, 25, 98), (0xC294, 25, 99), (0xC295, 25, 100),
    (0xC296, 25, 101), (0xC297, 25, 102), (0xC298, 60, 119), (0xC299, 25, 103), (0xC29A, 25, 104),
    (0xC29B, 60, 120), (0xC29C, 25, 105), (0xC29D, 60, 121), (0xC29E, 25, 106), (0xC29F, 25, 107),
    (0xC2A0, 25, 108), (0xC2A1, 25, 109), (0xC2A2, 25, 110), (0xC2A3, 25, 111), (0xC2A4, 60, 122),
    (0xC2A5, 60, 123), (0xC2A6, 25, 112), (0xC2A7, 25, 113), (0xC2A8, 60, 124), (0xC2A9, 25, 114),
    (0xC2AA, 25, 115), (0xC2AB, 25, 116), (0xC2AC, 60, 125), (0xC2AD, 60, 126), (0xC2AE, 25, 117),
    (0xC2AF, 25, 118), (0xC2B0, 25, 119), (0xC2B1, 25, 120), (0xC2B2, 25, 121), (0xC2B3, 25, 122),
    (0xC2B4, 60, 127), (0xC2B5, 60, 128), (0xC2B6, 25, 123), (0xC2B7, 60, 129), (0xC2B8, 25, 124),
    (0xC2B9, 60, 130), (0xC2BA, 25, 125), (0xC2BB, 25, 126), (0xC2BC, 25, 127), (0xC2BD, 25, 128),
    (0xC2BE, 25, 129), (0xC2BF, 25, 130), (0xC2C0, 25, 131), (0xC2C1, 25, 132), (0xC2C2, 25, 133),
    (0xC2C3, 25, 134), (0xC2C4, 25, 135), (0xC2C5, 25, 136), (0xC2C6, 25, 137), (0xC2C7, 25, 138),
    (0xC2C8, 25, 139), (0xC2C9, 25, 140), (0xC2CA, 25, 141), (0xC2CB, 25, 142), (0xC2CC, 25, 143),
    (0xC2CD, 25, 144), (0xC2CE, 25, 145), (0xC2CF, 25, 146), (0xC2D0, 25, 147), (0xC2D1, 25, 148),
    (0xC2D2, 25, 149), (0xC2D3, 25, 150), (0xC2D4, 25, 151), (0xC2D5, 25, 152), (0xC2D6, 25, 153),
    (0xC2D7, 25, 154), (0xC2D8, 25, 155), (0xC2D9, 25, 156), (0xC2DA, 25, 157), (0xC2DB, 25, 158),
    (0xC2DC, 60, 131), (0xC2DD, 60, 132), (0xC2DE, 25, 159), (0xC2DF, 25, 160), (0xC2E0, 60, 133),
    (0xC2E1, 25, 161), (0xC2E2, 25, 162), (0xC2E3, 60, 134), (0xC2E4, 60, 135), (0xC2E5, 25, 163),
    (0xC2E6, 25, 164), (0xC2E7, 25, 165), (0xC2E8, 25, 166), (0xC2E9, 25, 167), (0xC2EA, 25, 168),
    (0xC2EB, 60, 136), (0xC2EC, 60, 137), (0xC2ED, 60, 138), (0xC2EE, 25, 169), (0xC2EF, 60, 139),
    (0xC2F0, 25, 170), (0xC2F1, 60, 140), (0xC2F2, 25, 171), (0xC2F3, 25, 172), (0xC2F4, 25, 173),
    (0xC2F5, 25, 174), (0xC2F6, 60, 141), (0xC2F7, 25, 175), (0xC2F8, 60, 142), (0xC2F9, 60, 143),
    (0xC2FA, 25, 176), (0xC2FB, 60, 144), (0xC2FC, 60, 145), (0xC2FD, 25, 177), (0xC2FE, 25, 178),
    (0xC2FF, 25, 179), (0xC300, 60, 146), (0xC301, 25, 180), (0xC302, 25, 181), (0xC303, 25, 182),
    (0xC304, 25, 183), (0xC305, 25, 184), (0xC306, 25, 185), (0xC307, 25, 186), (0xC308, 60, 147),
    (0xC309, 60, 148), (0xC30A, 25, 187), (0xC30B, 25, 188), (0xC30C, 60, 149), (0xC30D, 60, 150),
    (0xC30E, 25, 189), (0xC30F, 25, 190), (0xC310, 26, 1), (0xC311, 26, 2), (0xC312, 26, 3),
    (0xC313, 60, 151), (0xC314, 60, 152), (0xC315, 60, 153), (0xC316, 26, 4), (0xC317, 26, 5),
    (0xC318, 60, 154), (0xC319, 26, 6), (0xC31A, 26, 7), (0xC31B, 26, 8), (0xC31C, 60, 155),
    (0xC31D, 26, 9), (0xC31E, 26, 10), (0xC31F, 26, 11), (0xC320, 26, 12), (0xC321, 26, 13),
    (0xC322, 26, 14), (0xC323, 26, 15), (0xC324, 60, 156), (0xC325, 60, 157), (0xC326, 26, 16),
    (0xC327, 26, 17), (0xC328, 60, 158), (0xC329, 60, 159), (0xC32A, 26, 18), (0xC32B, 26, 19),
    (0xC32C, 26, 20), (0xC32D, 26, 21), (0xC32E, 26, 22), (0xC32F, 26, 23), (0xC330, 26, 24),
    (0xC331, 26, 25), (0xC332, 26, 26), (0xC333, 26, 33), (0xC334, 26, 34), (0xC335, 26, 35),
    (0xC336, 26, 36), (0xC337, 26, 37), (0xC338, 26, 38), (0xC339, 26, 39), (0xC33A, 26, 40),
    (0xC33B, 26, 41), (0xC33C, 26, 42), (0xC33D, 26, 43), (0xC33E, 26, 44), (0xC33F, 26, 45),
    (0xC340, 26, 46), (0xC341, 26, 47), (0xC342, 26, 48), (0xC343, 26, 49), (0xC344, 26, 50),
    (0xC345, 60, 160), (0xC346, 26, 51), (0xC347, 26, 52), (0xC348, 26, 53), (0xC349, 26, 54),
    (0xC34A, 26, 55), (0xC34B, 26, 56), (0xC34C, 26, 57), (0xC34D, 26, 58), (0xC34E, 26, 65),
    (0xC34F, 26, 66), (0xC350, 26, 67), (0xC351, 26, 68), (0xC352, 26, 69), (0xC353, 26, 70),
    (0xC354, 26, 71), (0xC355, 26, 72), (0xC356, 26, 73), (0xC357, 26, 74), (0xC358, 26, 75),
    (0xC359, 26, 76), (0xC35A, 26, 77), (0xC35B, 26, 78), (0xC35C, 26, 79), (0xC35D, 26, 80),
    (0xC35E, 26, 81), (0xC35F, 26, 82), (0xC360, 26, 83), (0xC361, 26, 84), (0xC362, 26, 85),
    (0xC363, 26, 86), (0xC364, 26, 87), (0xC365, 26, 88), (0xC366, 26, 89), (0xC367, 26, 90),
    (0xC368, 60, 161), (0xC369, 60, 162), (0xC36A, 26, 91), (0xC36B, 26, 92), (0xC36C, 60, 163),
    (0xC36D, 26, 93), (0xC36E, 26, 94), (0xC36F, 26, 95), (0xC370, 60, 164), (0xC371, 26, 96),
    (0xC372, 60, 165), (0xC373, 26, 97), (0xC374, 26, 98), (0xC375, 26, 99), (0xC376, 26, 100),
    (0xC377, 26, 101), (0xC378, 60, 166), (0xC379, 60, 167), (0xC37A, 26, 102), (0xC37B, 26, 103),
    (0xC37C, 60, 168), (0xC37D, 60, 169), (0xC37E, 26, 104), (0xC37F, 26, 105), (0xC380, 26, 106),
    (0xC381, 26, 107), (0xC382, 26, 108), (0xC383, 26, 109), (0xC384, 60, 170), (0xC385, 26, 110),
    (0xC386, 26, 111), (0xC387, 26, 112), (0xC388, 60, 171), (0xC389, 26, 113), (0xC38A, 26, 114),
    (0xC38B, 26, 115), (0xC38C, 60, 172), (0xC38D, 26, 116), (0xC38E, 26, 117), (0xC38F, 26, 118),
    (0xC390, 26, 119), (0xC391, 26, 120), (0xC392, 26, 121), (0xC393, 26, 122), (0xC394, 26, 123),
    (0xC395, 26, 124), (0xC396, 26, 125), (0xC397, 26, 126), (0xC398, 26, 127), (0xC399, 26, 128),
    (0xC39A, 26, 129), (0xC39B, 26, 130), (0xC39C, 26, 131), (0xC39D, 26, 132), (0xC39E, 26, 133),
    (0xC39F, 26, 134), (0xC3A0, 26, 135), (0xC3A1, 26, 136), (0xC3A2, 26, 137), (0xC3A3, 26, 138),
    (0xC3A4, 26, 139), (0xC3A5, 26, 140), (0xC3A6, 26, 141), (0xC3A7, 26, 142), (0xC3A8, 26, 143),
    (0xC3A9, 26, 144), (0xC3AA, 26, 145), (0xC3AB, 26, 146), (0xC3AC, 26, 147), (0xC3AD, 26, 148),
    (0xC3AE, 26, 149), (0xC3AF, 26, 150), (0xC3B0, 26, 151), (0xC3B1, 26, 152), (0xC3B2, 26, 153),
    (0xC3B3, 26, 154), (0xC3B4, 26, 155), (0xC3B5, 26, 156), (0xC3B6, 26, 157), (0xC3B7, 26, 158),
    (0xC3B8, 26, 159), (0xC3B9, 26, 160), (0xC3BA, 26, 161), (0xC3BB, 26, 162), (0xC3BC, 26, 163),
    (0xC3BD, 26, 164), (0xC3BE, 26, 165), (0xC3BF, 26, 166), (0xC3C0, 60, 173), (0xC3C1, 26, 167),
    (0xC3C2, 26, 168), (0xC3C3, 26, 169), (0xC3C4, 26, 170), (0xC3C5, 26, 171), (0xC3C6, 26, 172),
    (0xC3C7, 26, 173), (0xC3C8, 26, 174), (0xC3C9, 26, 175), (0xC3CA, 26, 176), (0xC3CB, 26, 177),
    (0xC3CC, 26, 178), (0xC3CD, 26, 179), (0xC3CE, 26, 180), (0xC3CF, 26, 181), (0xC3D0, 26, 182),
    (0xC3D1, 26, 183), (0xC3D2, 26, 184), (0xC3D3, 26, 185), (0xC3D4, 26, 186), (0xC3D5, 26, 187),
    (0xC3D6, 26, 188), (0xC3D7, 26, 189), (0xC3D8, 60, 174), (0xC3D9, 60, 175), (0xC3DA, 26, 190),
    (0xC3DB, 27, 1), (0xC3DC, 60, 176), (0xC3DD, 27, 2), (0xC3DE, 27, 3), (0xC3DF, 60, 177),
    (0xC3E0, 60, 178), (0xC3E1, 27, 4), (0xC3E2, 60, 179), (0xC3E3, 27, 5), (0xC3E4, 27, 6),
    (0xC3E5, 27, 7), (0xC3E6, 27, 8), (0xC3E7, 27, 9), (0xC3E8, 60, 180), (0xC3E9, 60, 181),
    (0xC3EA, 27, 10), (0xC3EB, 27, 11), (0xC3EC, 27, 12), (0xC3ED, 60, 182), (0xC3EE, 27, 13),
    (0xC3EF, 27, 14), (0xC3F0, 27, 15), (0xC3F1, 27, 16), (0xC3F2, 27, 17), (0xC3F3, 27, 18),
    (0xC3F4, 60, 183), (0xC3F5, 60, 184), (0xC3F6, 27, 19), (0xC3F7, 27, 20), (0xC3F8, 60, 185),
    (0xC3F9, 27, 21), (0xC3FA, 27, 22), (0xC3FB, 27, 23), (0xC3FC, 27, 24), (0xC3FD, 27, 25),
    (0xC3FE, 27, 26), (0xC3FF, 27, 33), (0xC400, 27, 34), (0xC401, 27, 35), (0xC402, 27, 36),
    (0xC403, 27, 37), (0xC404, 27, 38), (0xC405, 27, 39), (0xC406, 27, 40), (0xC407, 27, 41),
    (0xC408, 60, 186), (0xC409, 27, 42), (0xC40A, 27, 43), (0xC40B, 27, 44), (0xC40C, 27, 45),
    (0xC40D, 27, 46), (0xC40E, 27, 47), (0xC40F, 27, 48), (0xC410, 60, 187), (0xC411, 27, 49),
    (0xC412, 27, 50), (0xC413, 27, 51), (0xC414, 27, 52), (0xC415, 27, 53), (0xC416, 27, 54),
    (0xC417, 27, 55), (0xC418, 27, 56), (0xC419, 27, 57), (0xC41A, 27, 58), (0xC41B, 27, 65),
    (0xC41C, 27, 66), (0xC41D, 27, 67), (0xC41E, 27, 68), (0xC41F, 27, 69), (0xC420, 27, 70),
    (0xC421, 27, 71), (0xC422, 27, 72), (0xC423, 27, 73), (0xC424, 60, 188), (0xC425, 27, 74),
    (0xC426, 27, 75), (0xC427, 27, 76), (0xC428, 27, 77), (0xC429, 27, 78), (0xC42A, 27, 79),
    (0xC42B, 27, 80), (0xC42C, 60, 189), (0xC42D, 27, 81), (0xC42E, 27, 82), (0xC42F, 27, 83),
    (0xC430, 60, 190), (0xC431, 27, 84), (0xC432, 27, 85), (0xC433, 27, 86), (0xC434, 61, 97),
    (0xC435, 27, 87), (0xC436, 27, 88), (0xC437, 27, 89), (0xC438, 27, 90), (0xC439, 27, 91),
    (0xC43A, 27, 92), (0xC43B, 27, 93), (0xC43C, 61, 98), (0xC43D, 61, 99), (0xC43E, 27, 94),
    (0xC43F, 27, 95), (0xC440, 27, 96), (0xC441, 27, 97), (0xC442, 27, 98), (0xC443, 27, 99),
    (0xC444, 27, 100), (0xC445, 27, 101), (0xC446, 27, 102), (0xC447, 27, 103), (0xC448, 61, 100),
    (0xC449, 27, 104), (0xC44A, 27, 105), (0xC44B, 27, 106), (0xC44C, 27, 107), (0xC44D, 27, 108),
    (0xC44E, 27, 109), (0xC44F, 27, 110), (0xC450, 27, 111), (0xC451, 27, 112), (0xC452, 27, 113),
    (0xC453, 27, 114), (0xC454, 27, 115), (0xC455, 27, 116), (0xC456, 27, 117), (0xC457, 27, 118),
    (0xC458, 27, 119), (0xC459, 27, 120), (0xC45A, 27, 121), (0xC45B, 27, 122), (0xC45C, 27, 123),
    (0xC45D, 27, 124), (0xC45E, 27, 125), (0xC45F, 27, 126), (0xC460, 27, 127), (0xC461, 27, 128),
    (0xC462, 27, 129), (0xC463, 27, 130), (0xC464, 61, 101), (0xC465, 61, 102), (0xC466, 27, 131),
    (0xC467, 27, 132), (0xC468, 61, 103), (0xC469, 27, 133), (0xC46A, 27, 134), (0xC46B, 27, 135),
    (0xC46C, 61, 104), (0xC46D, 27, 136), (0xC46E, 27, 137), (0xC46F, 27, 138), (0xC470, 27, 139),
    (0xC471, 27, 140), (0xC472, 27, 141), (0xC473, 27, 142), (0xC474, 61, 105), (0xC475, 61, 106),
    (0xC476, 27, 143), (0xC477, 27, 144), (0xC478, 27, 145), (0xC479, 61, 107), (0xC47A, 27, 146),
    (0xC47B, 27, 147), (0xC47C, 27, 148), (0xC47D, 27, 149), (0xC47E, 27, 150), (0xC47F, 27, 151),
    (0xC480, 61, 108), (0xC481, 27, 152), (0xC482, 27, 153), (0xC483, 27, 154), (0xC484, 27, 155),
    (0xC485, 27, 156), (0xC486, 27, 157), (0xC487, 27, 158), (0xC488, 27, 159), (0xC489, 27, 160),
    (0xC48A, 27, 161), (0xC48B, 27, 162), (0xC48C, 27, 163), (0xC48D, 27, 164), (0xC48E, 27, 165),
    (0xC48F, 27, 166), (0xC490, 27, 167), (0xC491, 27, 168), (0xC492, 27, 169), (0xC493, 27, 170),
    (0xC494, 61, 109), (0xC495, 27, 171), (0xC496, 27, 172), (0xC497, 27, 173), (0xC498, 27, 174),
    (0xC499, 27, 175), (0xC49A, 27, 176), (0xC49B, 27, 177), (0xC49C, 61, 110), (0xC49D, 27, 178),
    (0xC49E, 27, 179), (0xC49F, 27, 180), (0xC4A0, 27, 181), (0xC4A1, 27, 182), (0xC4A2, 27, 183),
    (0xC4A3, 27, 184), (0xC4A4, 27, 185), (0xC4A5, 27, 186), (0xC4A6, 27, 187), (0xC4A7, 27, 188),
    (0xC4A8, 27, 189), (0xC4A9, 27, 190), (0xC4AA, 28, 1), (0xC4AB, 28, 2), (0xC4AC, 28, 3),
    (0xC4AD, 28, 4), (0xC4AE, 28, 5), (0xC4AF, 28, 6), (0xC4B0, 28, 7), (0xC4B1, 28, 8),
    (0xC4B2, 28, 9), (0xC4B3, 28, 10), (0xC4B4, 28, 11), (0xC4B5, 28, 12), (0xC4B6, 28, 13),
    (0xC4B7, 28, 14), (0xC4B8, 61, 111), (0xC4B9, 28, 15), (0xC4BA, 28, 16), (0xC4BB, 28, 17),
    (0xC4BC, 61, 112), (0xC4BD, 28, 18), (0xC4BE, 28, 19), (0xC4BF, 28, 20), (0xC4C0, 28, 21),
    (0xC4C1, 28, 22), (0xC4C2, 28, 23), (0xC4C3, 28, 24), (0xC4C4, 28, 25), (0xC4C5, 28, 26),
    (0xC4C6, 28, 33), (0xC4C7, 28, 34), (0xC4C8, 28, 35), (0xC4C9, 28, 36), (0xC4CA, 28, 37),
    (0xC4CB, 28, 38), (0xC4CC, 28, 39), (0xC4CD, 28, 40), (0xC4CE, 28, 41), (0xC4CF, 28, 42),
    (0xC4D0, 28, 43), (0xC4D1, 28, 44), (0xC4D2, 28, 45), (0xC4D3, 28, 46), (0xC4D4, 28, 47),
    (0xC4D5, 28, 48), (0xC4D6, 28, 49), (0xC4D7, 28, 50), (0xC4D8, 28, 51), (0xC4D9, 28, 52),
    (0xC4DA, 28, 53), (0xC4DB, 28, 54), (0xC4DC, 28, 55), (0xC4DD, 28, 56), (0xC4DE, 28, 57),
    (0xC4DF, 28, 58), (0xC4E0, 28, 65), (0xC4E1, 28, 66), (0xC4E2, 28, 67), (0xC4E3, 28, 68),
    (0xC4E4, 28, 69), (0xC4E5, 28, 70), (0xC4E6, 28, 71), (0xC4E7, 28, 72), (0xC4E8, 28, 73),
    (0xC4E9, 61, 113), (0xC4EA, 28, 74), (0xC4EB, 28, 75), (0xC4EC, 28, 76), (0xC4ED, 28, 77),
    (0xC4EE, 28, 78), (0xC4EF, 28, 79), (0xC4F0, 61, 114), (0xC4F1, 61, 115), (0xC4F2, 28, 80),
    (0xC4F3, 28, 81), (0xC4F4, 61, 116), (0xC4F5, 28, 82), (0xC4F6, 28, 83), (0xC4F7, 28, 84),
    (0xC4F8, 61, 117), (0xC4F9, 28, 85), (0xC4FA, 61, 118), (0xC4FB, 28, 86), (0xC4FC, 28, 87),
    (0xC4FD, 28, 88), (0xC4FE, 28, 89), (0xC4FF, 61, 119), (0xC500, 61, 120), (0xC501, 61, 121),
    (0xC502, 28, 90), (0xC503, 28, 91), (0xC504, 28, 92), (0xC505, 28, 93), (0xC506, 28, 94),
    (0xC507, 28, 95), (0xC508, 28, 96), (0xC509, 28, 97), (0xC50A, 28, 98), (0xC50B, 28, 99),
    (0xC50C, 61, 122), (0xC50D, 28, 100), (0xC50E, 28, 101), (0xC50F, 28, 102), (0xC510, 61, 123),
    (0xC511, 28, 103), (0xC512, 28, 104), (0xC513, 28, 105), (0xC514, 61, 124), (0xC515, 28, 106),
    (0xC516, 28, 107), (0xC517, 28, 108), (0xC518, 28, 109), (0xC519, 28, 110), (0xC51A, 28, 111),
    (0xC51B, 28, 112), (0xC51C, 61, 125), (0xC51D, 28, 113), (0xC51E, 28, 114), (0xC51F, 28, 115),
    (0xC520, 28, 116), (0xC521, 28, 117), (0xC522, 28, 118), (0xC523, 28, 119), (0xC524, 28, 120),
    (0xC525, 28, 121), (0xC526, 28, 122), (0xC527, 28, 123), (0xC528, 61, 126), (0xC529, 61, 127),
    (0xC52A, 28, 124), (0xC52B, 28, 125), (0xC52C, 61, 128), (0xC52D, 28, 126), (0xC52E, 28, 127),
    (0xC52F, 28, 128), (0xC530, 61, 129), (0xC531, 28, 129), (0xC532, 28, 130), (0xC533, 28, 131),
    (0xC534, 28, 132), (0xC535, 28, 133), (0xC536, 28, 134), (0xC537, 28, 135), (0xC538, 61, 130),
    (0xC539, 61, 131), (0xC53A, 28, 136), (0xC53B, 61, 132), (0xC53C, 28, 137), (0xC53D, 61, 133),
    (0xC53E, 28, 138), (0xC53F, 28, 139), (0xC540, 28, 140), (0xC541, 28, 141), (0xC542, 28, 142),
    (0xC543, 28, 143), (0xC544, 61, 134), (0xC545, 61, 135), (0xC546, 28, 144), (0xC547, 28, 145),
    (0xC548, 61, 136), (0xC549, 61, 137), (0xC54A, 61, 138), (0xC54B, 28, 146), (0xC54C, 61, 139),
    (0xC54D, 61, 140), (0xC54E, 61, 141), (0xC54F, 28, 147), (0xC550, 28, 148), (0xC551, 28, 149),
    (0xC552, 28, 150), (0xC553, 61, 142), (0xC554, 61, 143), (0xC555, 61, 144), (0xC556, 28, 151),
    (0xC557, 61, 145), (0xC558, 61, 146), (0xC559, 61, 147), (0xC55A, 28, 152), (0xC55B, 28, 153),
    (0xC55C, 28, 154), (0xC55D, 61, 148), (0xC55E, 61, 149), (0xC55F, 28, 155), (0xC560, 61, 150),
    (0xC561, 61, 151), (0xC562, 28, 156), (0xC563, 28, 157), (0xC564, 61, 152), (0xC565, 28, 158),
    (0xC566, 28, 159), (0xC567, 28, 160), (0xC568, 61, 153), (0xC569, 28, 161), (0xC56A, 28, 162),
    (0xC56B, 28, 163), (0xC56C, 28, 164), (0xC56D, 28, 165), (0xC56E, 28, 166), (0xC56F, 28, 167),
    (0xC570, 61, 154), (0xC571, 61, 155), (0xC572, 28, 168), (0xC573, 61, 156), (0xC574, 61, 157),
    (0xC575, 61, 158), (0xC576, 28, 169), (0xC577, 28, 170), (0xC578, 28, 171), (0xC579, 28, 172),
    (0xC57A, 28, 173), (0xC57B, 28, 174), (0xC57C, 61, 159), (0xC57D, 61, 160), (0xC57E, 28, 175),
    (0xC57F, 28, 176), (0xC580, 61, 161), (0xC581, 28, 177), (0xC582, 28, 178), (0xC583, 28, 179),
    (0xC584, 61, 162), (0xC585, 28, 180), (0xC586, 28, 181), (0xC587, 61, 163), (0xC588, 28, 182),
    (0xC589, 28, 183), (0xC58A, 28, 184), (0xC58B, 28, 185), (0xC58C, 61, 164), (0xC58D, 61, 165),
    (0xC58E, 28, 186), (0xC58F, 61, 166), (0xC590, 28, 187), (0xC591, 61, 167), (0xC592, 28, 188),
    (0xC593, 28, 189), (0xC594, 28, 190), (0xC595, 61, 168), (0xC596, 29, 1), (0xC597, 61, 169),
    (0xC598, 61, 170), (0xC599, 29, 2), (0xC59A, 29, 3), (0xC59B, 29, 4), (0xC59C, 61, 171),
    (0xC59D, 29, 5), (0xC59E, 29, 6), (0xC59F, 29, 7), (0xC5A0, 61, 172), (0xC5A1, 29, 8),
    (0xC5A2, 29, 9), (0xC5A3, 29, 10), (0xC5A4, 29, 11), (0xC5A5, 29, 12), (0xC5A6, 29, 13),
    (0xC5A7, 29, 14), (0xC5A8, 29, 15), (0xC5A9, 61, 173), (0xC5AA, 29, 16), (0xC5AB, 29, 17),
    (0xC5AC, 29, 18), (0xC5AD, 29, 19), (0xC5AE, 29, 20), (0xC5AF, 29, 21), (0xC5B0, 29, 22),
    (0xC5B1, 29, 23), (0xC5B2, 29, 24), (0xC5B3, 29, 25), (0xC5B4, 61, 174), (0xC5B5, 61, 175),
    (0xC5B6, 29, 26), (0xC5B7, 29, 33), (0xC5B8, 61, 176), (0xC5B9, 61, 177), (0xC5BA, 29, 34),
    (0xC5BB, 61, 178), (0xC5BC, 61, 179), (0xC5BD, 61, 180), (0xC5BE, 61, 181), (0xC5BF, 29, 35),
    (0xC5C0, 29, 36), (0xC5C1, 29, 37), (0xC5C2, 29, 38), (0xC5C3, 29, 39), (0xC5C4, 61, 182),
    (0xC5C5, 61, 183), (0xC5C6, 61, 184), (0xC5C7, 61, 185), (0xC5C8, 61, 186), (0xC5C9, 61, 187),
    (0xC5CA, 61, 188), (0xC5CB, 29, 40), (0xC5CC, 61, 189), (0xC5CD, 29, 41), (0xC5CE, 61, 190),
    (0xC5CF, 29, 42), (0xC5D0, 62, 97), (0xC5D1, 62, 98), (0xC5D2, 29, 43), (0xC5D3, 29, 44),
    (0xC5D4, 62, 99), (0xC5D5, 29, 45), (0xC5D6, 29, 46), (0xC5D7, 29, 47), (0xC5D8, 62, 100),
    (0xC5D9, 29, 48), (0xC5DA, 29, 49), (0xC5DB, 29, 50), (0xC5DC, 29, 51), (0xC5DD, 29, 52),
    (0xC5DE, 29, 53), (0xC5DF, 29, 54), (0xC5E0, 62, 101), (0xC5E1, 62, 102), (0xC5E2, 29, 55),
    (0xC5E3, 62, 103), (0xC5E4, 29, 56), (0xC5E5, 62, 104), (0xC5E6, 29, 57), (0xC5E7, 29, 58),
    (0xC5E8, 29, 65), (0xC5E9, 29, 66), (0xC5EA, 29, 67), (0xC5EB, 29, 68), (0xC5EC, 62, 105),
    (0xC5ED, 62, 106), (0xC5EE, 62, 107), (0xC5EF, 29, 69), (0xC5F0, 62, 108), (0xC5F1, 29, 70),
    (0xC5F2, 29, 71), (0xC5F3, 29, 72), (0xC5F4, 62, 109), (0xC5F5, 29, 73), (0xC5F6, 62, 110),
    (0xC5F7, 62, 111), (0xC5F8, 29, 74), (0xC5F9, 29, 75), (0xC5FA, 29, 76), (0xC5FB, 29, 77),
    (0xC5FC, 62, 112), (0xC5FD, 62, 113), (0xC5FE, 62, 114), (0xC5FF, 62, 115), (0xC600, 62, 116),
    (0xC601, 62, 117), (0xC602, 29, 78), (0xC603, 29, 79), (0xC604, 29, 80), (0xC605, 62, 118),
    (0xC606, 62, 119), (0xC607, 62, 120), (0xC608, 62, 121), (0xC609, 29, 81), (0xC60A, 29, 82),
    (0xC60B, 29, 83), (0xC60C, 62, 122), (0xC60D, 29, 84), (0xC60E, 29, 85), (0xC60F, 29, 86),
    (0xC610, 62, 123), (0xC611, 29, 87), (0xC612, 29, 88), (0xC613, 29, 89), (0xC614, 29, 90),
    (0xC615, 29, 91), (0xC616, 29, 92), (0xC617, 29, 93), (0xC618, 62, 124), (0xC619, 62, 125),
    (0xC61A, 29, 94), (0xC61B, 62, 126), (0xC61C, 62, 127), (0xC61D, 29, 95), (0xC61E, 29, 96),
    (0xC61F, 29, 97), (0xC620, 29, 98), (0xC621, 29, 99), (0xC622, 29, 100), (0xC623, 29, 101),
    (0xC624, 62, 128), (0xC625, 62, 129), (0xC626, 29, 102), (0xC627, 29, 103), (0xC628, 62, 130),
    (0xC629, 29, 104), (0xC62A, 29, 105), (0xC62B, 29, 106), (0xC62C, 62, 131), (0xC62D, 62, 132),
    (0xC62E, 62, 133), (0xC62F, 29, 107), (0xC630, 62, 134), (0xC631, 29, 108), (0xC632, 29, 109),
    (0xC633, 62, 135), (0xC634, 62, 136), (0xC635, 62, 137), (0xC636, 29, 110), (0xC637, 62, 138),
    (0xC638, 29, 111), (0xC639, 62, 139), (0xC63A, 29, 112), (0xC63B, 62, 140), (0xC63C, 29, 113),
    (0xC63D, 29, 114), (0xC63E, 29, 115), (0xC63F, 29, 116), (0xC640, 62, 141), (0xC641, 62, 142),
    (0xC642, 29, 117), (0xC643, 29, 118), (0xC644, 62, 143), (0xC645, 29, 119), (0xC646, 29, 120),
    (0xC647, 29, 121), (0xC648, 62, 144), (0xC649, 29, 122), (0xC64A, 29, 123), (0xC64B, 29, 124),
    (0xC64C, 29, 125), (0xC64D, 29, 126), (0xC64E, 29, 127), (0xC64F, 29, 128), (0xC650, 62, 145),
    (0xC651, 62, 146), (0xC652, 29, 129), (0xC653, 62, 147), (0xC654, 62, 148), (0xC655, 62, 149),
    (0xC656, 29, 130), (0xC657, 29, 131), (0xC658, 29, 132), (0xC659, 29, 133), (0xC65A, 29, 134),
    (0xC65B, 29, 135), (0xC65C, 62, 150), (0xC65D, 62, 151), (0xC65E, 29, 136), (0xC65F, 29, 137),
    (0xC660, 62, 152), (0xC661, 29, 138), (0xC662, 29, 139), (0xC663, 29, 140), (0xC664, 29, 141),
    (0xC665, 29, 142), (0xC666, 29, 143), (0xC667, 29, 144), (0xC668, 29, 145), (0xC669, 29, 146),
    (0xC66A, 29, 147), (0xC66B, 29, 148), (0xC66C, 62, 153), (0xC66D, 29, 149), (0xC66E, 29, 150),
    (0xC66F, 62, 154), (0xC670, 29, 151), (0xC671, 62, 155), (0xC672, 29, 152), (0xC673, 29, 153),
    (0xC674, 29, 154), (0xC675, 29, 155), (0xC676, 29, 156), (0xC677, 29, 157), (0xC678, 62, 156),
    (0xC679, 62, 157), (0xC67A, 29, 158), (0xC67B, 29, 159), (0xC67C, 62, 158), (0xC67D, 29, 160),
    (0xC67E, 29, 161), (0xC67F, 29, 162), (0xC680, 62, 159), (0xC681, 29, 163), (0xC682, 29, 164),
    (0xC683, 29, 165), (0xC684, 29, 166), (0xC685, 29, 167), (0xC686, 29, 168), (0xC687, 29, 169),
    (0xC688, 62, 160), (0xC689, 62, 161), (0xC68A, 29, 170), (0xC68B, 62, 162), (0xC68C, 29, 171),
    (0xC68D, 62, 163), (0xC68E, 29, 172), (0xC68F, 29, 173), (0xC690, 29, 174), (0xC691, 29, 175),
    (0xC692, 29, 176), (0xC693, 29, 177), (0xC694, 62, 164), (0xC695, 62, 165), (0xC696, 29, 178),
    (0xC697, 29, 179), (0xC698, 62, 166), (0xC699, 29, 180), (0xC69A, 29, 181), (0xC69B, 29, 182),
    (0xC69C, 62, 167), (0xC69D, 29, 183), (0xC69E, 29, 184), (0xC69F, 29, 185), (0xC6A0, 29, 186),
    (0xC6A1, 29, 187), (0xC6A2, 29, 188), (0xC6A3, 29, 189), (0xC6A4, 62, 168), (0xC6A5, 62, 169),
    (0xC6A6, 29, 190), (0xC6A7, 62, 170), (0xC6A8, 30, 1), (0xC6A9, 62, 171), (0xC6AA, 30, 2),
    (0xC6AB, 30, 3), (0xC6AC, 30, 4), (0xC6AD, 30, 5), (0xC6AE, 30, 6), (0xC6AF, 30, 7),
    (0xC6B0, 62, 172), (0xC6B1, 62, 173), (0xC6B2, 30, 8), (0xC6B3, 30, 9), (0xC6B4, 62, 174),
    (0xC6B5, 30, 10), (0xC6B6, 30, 11), (0xC6B7, 30, 12), (0xC6B8, 62, 175), (0xC6B9, 62, 176),
    (0xC6BA, 62, 177), (0xC6BB, 30, 13), (0xC6BC, 30, 14), (0xC6BD, 30, 15), (0xC6BE, 30, 16),
    (0xC6BF, 30, 17), (0xC6C0, 62, 178), (0xC6C1, 62, 179), (0xC6C2, 30, 18), (0xC6C3, 62, 180),
    (0xC6C4, 30, 19), (0xC6C5, 62, 181), (0xC6C6, 30, 20), (0xC6C7, 30, 21), (0xC6C8, 30, 22),
    (0xC6C9, 30, 23), (0xC6CA, 30, 24), (0xC6CB, 30, 25), (0xC6CC, 62, 182), (0xC6CD, 62, 183),
    (0xC6CE, 30, 26), (0xC6CF, 30, 33), (0xC6D0, 62, 184), (0xC6D1, 30, 34), (0xC6D2, 30, 35),
    (0xC6D3, 30, 36), (0xC6D4, 62, 185), (0xC6D5, 30, 37), (0xC6D6, 30, 38), (0xC6D7, 30, 39),
    (0xC6D8, 30, 40), (0xC6D9, 30, 41), (0xC6DA, 30, 42), (0xC6DB, 30, 43), (0xC6DC, 62, 186),
    (0xC6DD, 62, 187), (0xC6DE, 30, 44), (0xC6DF, 30, 45), (0xC6E0, 62, 188), (0xC6E1, 62, 189),
    (0xC6E2, 30, 46), (0xC6E3, 30, 47), (0xC6E4, 30, 48), (0xC6E5, 30, 49), (0xC6E6, 30, 50),
    (0xC6E7, 30, 51), (0xC6E8, 62, 190), (0xC6E9, 63, 97), (0xC6EA, 30, 52), (0xC6EB, 30, 53),
    (0xC6EC, 63, 98), (0xC6ED, 30, 54), (0xC6EE, 30, 55), (0xC6EF, 30, 56), (0xC6F0, 63, 99),
    (0xC6F1, 30, 57), (0xC6F2, 30, 58), (0xC6F3, 30, 65), (0xC6F4, 30, 66), (0xC6F5, 30, 67),
    (0xC6F6, 30, 68), (0xC6F7, 30, 69), (0xC6F8, 63, 100), (0xC6F9, 63, 101), (0xC6FA, 30, 70),
    (0xC6FB, 30, 71), (0xC6FC, 30, 72), (0xC6FD, 63, 102), (0xC6FE, 30, 73), (0xC6FF, 30, 74),
    (0xC700, 30, 75), (0xC701, 30, 76), (0xC702, 30, 77), (0xC703, 30, 78), (0xC704, 63, 103),
    (0xC705, 63, 104), (0xC706, 30, 79), (0xC707, 30, 80), (0xC708, 63, 105), (0xC709, 30, 81),
    (0xC70A, 30, 82), (0xC70B, 30, 83), (0xC70C, 63, 106), (0xC70D, 30, 84), (0xC70E, 30, 85),
    (0xC70F, 30, 86), (0xC710, 30, 87), (0xC711, 30, 88), (0xC712, 30, 89), (0xC713, 30, 90),
    (0xC714, 63, 107), (0xC715, 63, 108), (0xC716, 30, 91), (0xC717, 63, 109), (0xC718, 30, 92),
    (0xC719, 63, 110), (0xC71A, 30, 93), (0xC71B, 30, 94), (0xC71C, 30, 95), (0xC71D, 30, 96),
    (0xC71E, 30, 97), (0xC71F, 30, 98), (0xC720, 63, 111), (0xC721, 63, 112), (0xC722, 30, 99),
    (0xC723, 30, 100), (0xC724, 63, 113), (0xC725, 30, 101), (0xC726, 30, 102), (0xC727, 30, 103),
    (0xC728, 63, 114), (0xC729, 30, 104), (0xC72A, 30, 105), (0xC72B, 30, 106), (0xC72C, 30, 107),
    (0xC72D, 30, 108), (0xC72E, 30, 109), (0xC72F, 30, 110), (0xC730, 63, 115), (0xC731, 63, 116),
    (0xC732, 30, 111), (0xC733, 63, 117), (0xC734, 30, 112), (0xC735, 63, 118), (0xC736, 30, 113),
    (0xC737, 63, 119), (0xC738, 30, 114), (0xC739, 30, 115), (0xC73A, 30, 116), (0xC73B, 30, 117),
    (0xC73C, 63, 120), (0xC73D, 63, 121), (0xC73E, 30, 118), (0xC73F, 30, 119), (0xC740, 63, 122),
    (0xC741, 30, 120), (0xC742, 30, 121), (0xC743, 30, 122), (0xC744, 63, 123), (0xC745, 30, 123),
    (0xC746, 30, 124), (0xC747, 30, 125), (0xC748, 30, 126), (0xC749, 30, 127), (0xC74A, 63, 124),
    (0xC74B, 30, 128), (0xC74C, 63, 125), (0xC74D, 63, 126), (0xC74E, 30, 129), (0xC74F, 63, 127),
    (0xC750, 30, 130), (0xC751, 63, 128), (0xC752, 63, 129), (0xC753, 63, 130), (0xC754, 63, 131),
    (0xC755, 63, 132), (0xC756, 63, 133), (0xC757, 63, 134), (0xC758, 63, 135), (0xC759, 30, 131),
    (0xC75A, 30, 132), (0xC75B, 30, 133), (0xC75C, 63, 136), (0xC75D, 30, 134), (0xC75E, 30, 135),
    (0xC75F, 30, 136), (0xC760, 63, 137), (0xC761, 30, 137), (0xC762, 30, 138), (0xC763, 30, 139),
    (0xC764, 30, 140), (0xC765, 30, 141), (0xC766, 30, 142), (0xC767, 30, 143), (0xC768, 63, 138),
    (0xC769, 30, 144), (0xC76A, 30, 145), (0xC76B, 63, 139), (0xC76C, 30, 146), (0xC76D, 30, 147),
    (0xC76E, 30, 148), (0xC76F, 30, 149), (0xC770, 30, 150), (0xC771, 30, 151), (0xC772, 30, 152),
    (0xC773, 30, 153), (0xC774, 63, 140), (0xC775, 63, 141), (0xC776, 30, 154), (0xC777, 30, 155),
    (0xC778, 63, 142), (0xC779, 30, 156), (0xC77A, 30, 157), (0xC77B, 30, 158), (0xC77C, 63, 143),
    (0xC77D, 63, 144), (0xC77E, 63, 145), (0xC77F, 30, 159), (0xC780, 30, 160), (0xC781, 30, 161),
    (0xC782, 30, 162), (0xC783, 63, 146), (0xC784, 63, 147), (0xC785, 63, 148), (0xC786, 30, 163),
    (0xC787, 63, 149), (0xC788, 63, 150), (0xC789, 63, 151), (0xC78A, 63, 152), (0xC78B, 30, 164),
    (0xC78C, 30, 165), (0xC78D, 30, 166), (0xC78E, 63, 153), (0xC78F, 30, 167), (0xC790, 63, 154),
    (0xC791, 63, 155), (0xC792, 30, 168), (0xC793, 30, 169), (0xC794, 63, 156), (0xC795, 30, 170),
    (0xC796, 63, 157), (0xC797, 63, 158), (0xC798, 63, 159), (0xC799, 30, 171), (0xC79A, 63, 160),
    (0xC79B, 30, 172), (0xC79C, 30, 173), (0xC79D, 30, 174), (0xC79E, 30, 175), (0xC79F, 30, 176),
    (0xC7A0, 63, 161), (0xC7A1, 63, 162), (0xC7A2, 30, 177), (0xC7A3, 63, 163), (0xC7A4, 63, 164),
    (0xC7A5, 63, 165), (0xC7A6, 63, 166), (0xC7A7, 30, 178), (0xC7A8, 30, 179), (0xC7A9, 30, 180),
    (0xC7AA, 30, 181), (0xC7AB, 30, 182), (0xC7AC, 63, 167), (0xC7AD, 63, 168), (0xC7AE, 30, 183),
    (0xC7AF, 30, 184), (0xC7B0, 63, 169), (0xC7B1, 30, 185), (0xC7B2, 30, 186), (0xC7B3, 30, 187),
    (0xC7B4, 63, 170), (0xC7B5, 30, 188), (0xC7B6, 30, 189), (0xC7B7, 30, 190), (0xC7B8, 31, 1),
    (0xC7B9, 31, 2), (0xC7BA, 31, 3), (0xC7BB, 31, 4), (0xC7BC, 63, 171), (0xC7BD, 63, 172),
    (0xC7BE, 31, 5), (0xC7BF, 63, 173), (0xC7C0, 63, 174), (0xC7C1, 63, 175), (0xC7C2, 31, 6),
    (0xC7C3, 31, 7), (0xC7C4, 31, 8), (0xC7C5, 31, 9), (0xC7C6, 31, 10), (0xC7C7, 31, 11),
    (0xC7C8, 63, 176), (0xC7C9, 63, 177), (0xC7CA, 31, 12), (0xC7CB, 31, 13), (0xC7CC, 63, 178),
    (0xC7CD, 31, 14), (0xC7CE, 63, 179), (0xC7CF, 31, 15), (0xC7D0, 63, 180), (0xC7D1, 31, 16),
    (0xC7D2, 31, 17), (0xC7D3, 31, 18), (0xC7D4, 31, 19), (0xC7D5, 31, 20), (0xC7D6, 31, 21),
    (0xC7D7, 31, 22), (0xC7D8, 63, 181), (0xC7D9, 31, 23), (0xC7DA, 31, 24), (0xC7DB, 31, 25),
    (0xC7DC, 31, 26), (0xC7DD, 63, 182), (0xC7DE, 31, 33), (0xC7DF, 31, 34), (0xC7E0, 31, 35),
    (0xC7E1, 31, 36), (0xC7E2, 31, 37), (0xC7E3, 31, 38), (0xC7E4, 63, 183), (0xC7E5, 31, 39),
    (0xC7E6, 31, 40), (0xC7E7, 31, 41), (0xC7E8, 63, 184), (0xC7E9, 31, 42), (0xC7EA, 31, 43),
    (0xC7EB, 31, 44), (0xC7EC, 63, 185), (0xC7ED, 31, 45), (0xC7EE, 31, 46), (0xC7EF, 31, 47),
    (0xC7F0, 31, 48), (0xC7F1, 31, 49), (0xC7F2, 31, 50), (0xC7F3, 31, 51), (0xC7F4, 31, 52),
    (0xC7F5, 31, 53), (0xC7F6, 31, 54), (0xC7F7, 31, 55), (0xC7F8, 31, 56), (0xC7F9, 31, 57),
    (0xC7FA, 31, 58), (0xC7FB, 31, 65), (0xC7FC, 31, 66), (0xC7FD, 31, 67), (0xC7FE, 31, 68),
    (0xC7FF, 31, 69), (0xC800, 63, 186), (0xC801, 63, 187), (0xC802, 31, 70), (0xC803, 31, 71),
    (0xC804, 63, 188), (0xC805, 31, 72), (0xC806, 31, 73), (0xC807, 31, 74), (0xC808, 63, 189),
    (0xC809, 31, 75), (0xC80A, 63, 190), (0xC80B, 31, 76), (0xC80C, 31, 77), (0xC80D, 31, 78),
    (0xC80E, 31, 79), (0xC80F, 31, 80), (0xC810, 64, 97), (0xC811, 64, 98), (0xC812, 31, 81),
    (0xC813, 64, 99), (0xC814, 31, 82), (0xC815, 64, 100), (0xC816, 64, 101), (0xC817, 31, 83),
    (0xC818, 31, 84), (0xC819, 31, 85), (0xC81A, 31, 86), (0xC81B, 31, 87), (0xC81C, 64, 102),
    (0xC81D, 64, 103), (0xC81E, 31, 88), (0xC81F, 31, 89), (0xC820, 64, 104), (0xC821, 31, 90),
    (0xC822, 31, 91), (0xC823, 31, 92), (0xC824, 64, 105), (0xC825, 31, 93), (0xC826, 31, 94),
    (0xC827, 31, 95), (0xC828, 31, 96), (0xC829, 31, 97), (0xC82A, 31, 98), (0xC82B, 31, 99),
    (0xC82C, 64, 106), (0xC82D, 64, 107), (0xC82E, 31, 100), (0xC82F, 64, 108), (0xC830, 31, 101),
    (0xC831, 64, 109), (0xC832, 31, 102), (0xC833, 31, 103), (0xC834, 31, 104), (0xC835, 31, 105),
    (0xC836, 31, 106), (0xC837, 31, 107), (0xC838, 64, 110), (0xC839, 31, 108), (0xC83A, 31, 109),
    (0xC83B, 31, 110), (0xC83C, 64, 111), (0xC83D, 31, 111), (0xC83E, 31, 112), (0xC83F, 31, 113),
    (0xC840, 64, 112), (0xC841, 31, 114), (0xC842, 31, 115), (0xC843, 31, 116), (0xC844, 31, 117),
    (0xC845, 31, 118), (0xC846, 31, 119), (0xC847, 31, 120), (0xC848, 64, 113), (0xC849, 64, 114),
    (0xC84A, 31, 121), (0xC84B, 31, 122), (0xC84C, 64, 115), (0xC84D, 64, 116), (0xC84E, 31, 123),
    (0xC84F, 31, 124), (0xC850, 31, 125), (0xC851, 31, 126), (0xC852, 31, 127), (0xC853, 31, 128),
    (0xC854, 64, 117), (0xC855, 31, 129), (0xC856, 31, 130), (0xC857, 31, 131), (0xC858, 31, 132),
    (0xC859, 31, 133), (0xC85A, 31, 134), (0xC85B, 31, 135), (0xC85C, 31, 136), (0xC85D, 31, 137),
    (0xC85E, 31, 138), (0xC85F, 31, 139), (0xC860, 31, 140), (0xC861, 31, 141), (0xC862, 31, 142),
    (0xC863, 31, 143), (0xC864, 31, 144), (0xC865, 31, 145), (0xC866, 31, 146), (0xC867, 31, 147),
    (0xC868, 31, 148), (0xC869, 31, 149), (0xC86A, 31, 150), (0xC86B, 31, 151), (0xC86C, 31, 152),
    (0xC86D, 31, 153), (0xC86E, 31, 154), (0xC86F, 31, 155), (0xC870, 64, 118), (0xC871, 64, 119),
    (0xC872, 31, 156), (0xC873, 31, 157), (0xC874, 64, 120), (0xC875, 31, 158), (0xC876, 31, 159),
    (0xC877, 31, 160), (0xC878, 64, 121), (0xC879, 31, 161), (0xC87A, 64, 122), (0xC87B, 31, 162),
    (0xC87C, 31, 163), (0xC87D, 31, 164), (0xC87E, 31, 165), (0xC87F, 31, 166), (0xC880, 64, 123),
    (0xC881, 64, 124), (0xC882, 31, 167), (0xC883, 64, 125), (0xC884, 31, 168), (0xC885, 64, 126),
    (0xC886, 64, 127), (0xC887, 64, 128), (0xC888, 31, 169), (0xC889, 31, 170), (0xC88A, 31, 171),
    (0xC88B, 64, 129), (0xC88C, 64, 130), (0xC88D, 64, 131), (0xC88E, 31, 172), (0xC88F, 31, 173),
    (0xC890, 31, 174), (0xC891, 31, 175), (0xC892, 31, 176), (0xC893, 31, 177), (0xC894, 64, 132),
    (0xC895, 31, 178), (0xC896, 31, 179), (0xC897, 31, 180), (0xC898, 31, 181), (0xC899, 31, 182),
    (0xC89A, 31, 183), (0xC89B, 31, 184), (0xC89C, 31, 185), (0xC89D, 64, 133), (0xC89E, 31, 186),
    (0xC89F, 64, 134), (0xC8A0, 31, 187), (0xC8A1, 64, 135), (0xC8A2, 31, 188), (0xC8A3, 31, 189),
    (0xC8A4, 31, 190), (0xC8A5, 32, 1), (0xC8A6, 32, 2), (0xC8A7, 32, 3), (0xC8A8, 64, 136),
    (0xC8A9, 32, 4), (0xC8AA, 32, 5), (0xC8AB, 32, 6), (0xC8AC, 32, 7), (0xC8AD, 32, 8),
    (0xC8AE, 32, 9), (0xC8AF, 32, 10), (0xC8B0, 32, 11), (0xC8B1, 32, 12), (0xC8B2, 32, 13),
    (0xC8B3, 32, 14), (0xC8B4, 32, 15), (0xC8B5, 32, 16), (0xC8B6, 32, 17), (0xC8B7, 32, 18),
    (0xC8B8, 32, 19), (0xC8B9, 32, 20), (0xC8BA, 32, 21), (0xC8BB, 32, 22), (0xC8BC, 64, 137),
    (0xC8BD, 64, 138), (0xC8BE, 32, 23), (0xC8BF, 32, 24), (0xC8C0, 32, 25), (0xC8C1, 32, 26),
    (0xC8C2, 32, 33), (0xC8C3, 32, 34), (0xC8C4, 64, 139), (0xC8C5, 32, 35), (0xC8C6, 32, 36),
    (0xC8C7, 32, 37), (0xC8C8, 64, 140), (0xC8C9, 32, 38), (0xC8CA, 32, 39), (0xC8CB, 32, 40),
    (0xC8CC, 64, 141), (0xC8CD, 32, 41), (0xC8CE, 32, 42), (0xC8CF, 32, 43), (0xC8D0, 32, 44),
    (0xC8D1, 32, 45), (0xC8D2, 32, 46), (0xC8D3, 32, 47), (0xC8D4, 64, 142), (0xC8D5, 64, 143),
    (0xC8D6, 32, 48), (0xC8D7, 64, 144), (0xC8D8, 32, 49), (0xC8D9, 64, 145), (0xC8DA, 32, 50),
    (0xC8DB, 32, 51), (0xC8DC, 32, 52), (0xC8DD, 32, 53), (0xC8DE, 32, 54), (0xC8DF, 32, 55),
    (0xC8E0, 64, 146), (0xC8E1, 64, 147), (0xC8E2, 32, 56), (0xC8E3, 32, 57), (0xC8E4, 64, 148),
    (0xC8E5, 32, 58), (0xC8E6, 32, 65), (0xC8E7, 32, 66), (0xC8E8, 32, 67), (0xC8E9, 32, 68),
    (0xC8EA, 32, 69), (0xC8EB, 32, 70), (0xC8EC, 32, 71), (0xC8ED, 32, 72), (0xC8EE, 32, 73),
    (0xC8EF, 32, 74), (0xC8F0, 32, 75), (0xC8F1, 32, 76), (0xC8F2, 32, 77), (0xC8F3, 32, 78),
    (0xC8F4, 32, 79), (0xC8F5, 64, 149), (0xC8F6, 32, 80), (0xC8F7, 32, 81), (0xC8F8, 32, 82),
    (0xC8F9, 32, 83), (0xC8FA, 32, 84), (0xC8FB, 32, 85), (0xC8FC, 64, 150), (0xC8FD, 64, 151),
    (0xC8FE, 32, 86), (0xC8FF, 32, 87), (0xC900, 64, 152), (0xC901, 32, 88), (0xC902, 32, 89),
    (0xC903, 32, 90), (0xC904, 64, 153), (0xC905, 64, 154), (0xC906, 64, 155), (0xC907, 32, 91),
    (0xC908, 32, 92), (0xC909, 32, 93), (0xC90A, 32, 94), (0xC90B, 32, 95), (0xC90C, 64, 156),
    (0xC90D, 64, 157), (0xC90E, 32, 96), (0xC90F, 64, 158), (0xC910, 33, 1), (0xC911, 64, 159),
    (0xC912, 33, 2), (0xC913, 33, 3), (0xC914, 33, 4), (0xC915, 33, 5), (0xC916, 33, 6),
    (0xC917, 33, 7), (0xC918, 64, 160), (0xC919, 33, 8), (0xC91A, 33, 9), (0xC91B, 33, 10),
    (0xC91C, 33, 11), (0xC91D, 33, 12), (0xC91E, 33, 13), (0xC91F, 33, 14), (0xC920, 33, 15),
    (0xC921, 33, 16), (0xC922, 33, 17), (0xC923, 33, 18), (0xC924, 33, 19), (0xC925, 33, 20),
    (0xC926, 33, 21), (0xC927, 33, 22), (0xC928, 33, 23), (0xC929, 33, 24), (0xC92A, 33, 25),
    (0xC92B, 33, 26), (0xC92C, 64, 161), (0xC92D, 33, 33), (0xC92E, 33, 34), (0xC92F, 33, 35),
    (0xC930, 33, 36), (0xC931, 33, 37), (0xC932, 33, 38), (0xC933, 33, 39), (0xC934, 64, 162),
    (0xC935, 33, 40), (0xC936, 33, 41), (0xC937, 33, 42), (0xC938, 33, 43), (0xC939, 33, 44),
    (0xC93A, 33, 45), (0xC93B, 33, 46), (0xC93C, 33, 47), (0xC93D, 33, 48), (0xC93E, 33, 49),
    (0xC93F, 33, 50), (0xC940, 33, 51), (0xC941, 33, 52), (0xC942, 33, 53), (0xC943, 33, 54),
    (0xC944, 33, 55), (0xC945, 33, 56), (0xC946, 33, 57), (0xC947, 33, 58), (0xC948, 33, 65),
    (0xC949, 33, 66), (0xC94A, 33, 67), (0xC94B, 33, 68), (0xC94C, 33, 69), (0xC94D, 33, 70),
    (0xC94E, 33, 71), (0xC94F, 33, 72), (0xC950, 64, 163), (0xC951, 64, 164), (0xC952, 33, 73),
    (0xC953, 33, 74), (0xC954, 64, 165), (0xC955, 33, 75), (0xC956, 33, 76), (0xC957, 33, 77),
    (0xC958, 64, 166), (0xC959, 33, 78), (0xC95A, 33, 79), (0xC95B, 33, 80), (0xC95C, 33, 81),
    (0xC95D, 33, 82), (0xC95E, 33, 83), (0xC95F, 33, 84), (0xC960, 64, 167), (0xC961, 64, 168),
    (0xC962, 33, 85), (0xC963, 64, 169), (0xC964, 33, 86), (0xC965, 33, 87), (0xC966, 33, 88),
    (0xC967, 33, 89), (0xC968, 33, 90), (0xC969, 33, 91), (0xC96A, 33, 92), (0xC96B, 33, 93),
    (0xC96C, 64, 170), (0xC96D, 33, 94), (0xC96E, 33, 95), (0xC96F, 33, 96), (0xC970, 64, 171),
    (0xC971, 34, 1), (0xC972, 34, 2), (0xC973, 34, 3), (0xC974, 64, 172), (0xC975, 34, 4),
    (0xC976, 34, 5), (0xC977, 34, 6), (0xC978, 34, 7), (0xC979, 34, 8), (0xC97A, 34, 9),
    (0xC97B, 34, 10), (0xC97C, 64, 173), (0xC97D, 34, 11), (0xC97E, 34, 12), (0xC97F, 34, 13),
    (0xC980, 34, 14), (0xC981, 34, 15), (0xC982, 34, 16), (0xC983, 34, 17), (0xC984, 34, 18),
    (0xC985, 34, 19), (0xC986, 34, 20), (0xC987, 34, 21), (0xC988, 64, 174), (0xC989, 64, 175),
    (0xC98A, 34, 22), (0xC98B, 34, 23), (0xC98C, 64, 176), (0xC98D, 34, 24), (0xC98E, 34, 25),
    (0xC98F, 34, 26), (0xC990, 64, 177), (0xC991, 34, 33), (0xC992, 34, 34), (0xC993, 34, 35),
    (0xC994, 34, 36), (0xC995, 34, 37), (0xC996, 34, 38), (0xC997, 34, 39), (0xC998, 64, 178),
    (0xC999, 64, 179), (0xC99A, 34, 40), (0xC99B, 64, 180), (0xC99C, 34, 41), (0xC99D, 64, 181),
    (0xC99E, 34, 42), (0xC99F, 34, 43), (0xC9A0, 34, 44), (0xC9A1, 34, 45), (0xC9A2, 34, 46),
    (0xC9A3, 34, 47), (0xC9A4, 34, 48), (0xC9A5, 34, 49), (0xC9A6, 34, 50), (0xC9A7, 34, 51),
    (0xC9A8, 34, 52), (0xC9A9, 34, 53), (0xC9AA, 34, 54), (0xC9AB, 34, 55), (0xC9AC, 34, 56),
    (0xC9AD, 34, 57), (0xC9AE, 34, 58), (0xC9AF, 34, 65), (0xC9B0, 34, 66), (0xC9B1, 34, 67),
    (0xC9B2, 34, 68), (0xC9B3, 34, 69), (0xC9B4, 34, 70), (0xC9B5, 34, 71), (0xC9B6, 34, 72),
    (0xC9B7, 34, 73), (0xC9B8, 34, 74), (0xC9B9, 34, 75), (0xC9BA, 34, 76), (0xC9BB, 34, 77),
    (0xC9BC, 34, 78), (0xC9BD, 34, 79), (0xC9BE, 34, 80), (0xC9BF, 34, 81), (0xC9C0, 64, 182),
    (0xC9C1, 64, 183), (0xC9C2, 34, 82), (0xC9C3, 34, 83), (0xC9C4, 64, 184), (0xC9C5, 34, 84),
    (0xC9C6, 34, 85), (0xC9C7, 64, 185), (0xC9C8, 64, 186), (0xC9C9, 34, 86), (0xC9CA, 64, 187),
    (0xC9CB, 34, 87), (0xC9CC, 34, 88), (0xC9CD, 34, 89), (0xC9CE, 34, 90), (0xC9CF, 34, 91),
    (0xC9D0, 64, 188), (0xC9D1, 64, 189), (0xC9D2, 34, 92), (0xC9D3, 64, 190), (0xC9D4, 34, 93),
    (0xC9D5, 65, 97), (0xC9D6, 65, 98), (0xC9D7, 34, 94), (0xC9D8, 34, 95), (0xC9D9, 65, 99),
    (0xC9DA, 65, 100), (0xC9DB, 34, 96), (0xC9DC, 65, 101), (0xC9DD, 65, 102), (0xC9DE, 35, 1),
    (0xC9DF, 35, 2), (0xC9E0, 65, 103), (0xC9E1, 35, 3), (0xC9E2, 65, 104), (0xC9E3, 35, 4),
    (0xC9E4, 65, 105), (0xC9E5, 35, 5), (0xC9E6, 35, 6), (0xC9E7, 65, 106), (0xC9E8, 35, 7),
    (0xC9E9, 35, 8), (0xC9EA, 35, 9), (0xC9EB, 35, 10), (0xC9EC, 65, 107), (0xC9ED, 65, 108),
    (0xC9EE, 35, 11), (0xC9EF, 65, 109), (0xC9F0, 65, 110), (0xC9F1, 65, 111), (0xC9F2, 35, 12),
    (0xC9F3, 35, 13), (0xC9F4, 35, 14), (0xC9F5, 35, 15), (0xC9F6, 35, 16), (0xC9F7, 35, 17),
    (0xC9F8, 65, 112), (0xC9F9, 65, 113), (0xC9FA, 35, 18), (0xC9FB, 35, 19), (0xC9FC, 65, 114),
    (0xC9FD, 35, 20), (0xC9FE, 35, 21), (0xC9FF, 35, 22), (0xCA00, 65, 115), (0xCA01, 35, 23),
    (0xCA02, 35, 24), (0xCA03, 35, 25), (0xCA04, 35, 26), (0xCA05, 35, 33), (0xCA06, 35, 34),
    (0xCA07, 35, 35), (0xCA08, 65, 116), (0xCA09, 65, 117), (0xCA0A, 35, 36), (0xCA0B, 65, 118),
    (0xCA0C, 65, 119), (0xCA0D, 65, 120), (0xCA0E, 35, 37), (0xCA0F, 35, 38), (0xCA10, 35, 39),
    (0xCA11, 35, 40), (0xCA12, 35, 41), (0xCA13, 35, 42), (0xCA14, 65, 121), (0xCA15, 35, 43),
    (0xCA16, 35, 44), (0xCA17, 35, 45), (0xCA18, 65, 122), (0xCA19, 35, 46), (0xCA1A, 35, 47),
    (0xCA1B, 35, 48), (0xCA1C, 35, 49), (0xCA1D, 35, 50), (0xCA1E, 35, 51), (0xCA1F, 35, 52),
    (0xCA20, 35, 53), (0xCA21, 35, 54), (0xCA22, 35, 55), (0xCA23, 35, 56), (0xCA24, 35, 57),
    (0xCA25, 35, 58), (0xCA26, 35, 65), (0xCA27, 35, 66), (0xCA28, 35, 67), (0xCA29, 65, 123),
    (0xCA2A, 35, 68), (0xCA2B, 35, 69), (0xCA2C, 35, 70), (0xCA2D, 35, 71), (0xCA2E, 35, 72),
    (0xCA2F, 35, 73), (0xCA30, 35, 74), (0xCA31, 35, 75), (0xCA32, 35, 76), (0xCA33, 35, 77),
    (0xCA34, 35, 78), (0xCA35, 35, 79), (0xCA36, 35, 80), (0xCA37, 35, 81), (0xCA38, 35, 82),
    (0xCA39, 35, 83), (0xCA3A, 35, 84), (0xCA3B, 35, 85), (0xCA3C, 35, 86), (0xCA3D, 35, 87),
    (0xCA3E, 35, 88), (0xCA3F, 35, 89), (0xCA40, 35, 90), (0xCA41, 35, 91), (0xCA42, 35, 92),
    (0xCA43, 35, 93), (0xCA44, 35, 94), (0xCA45, 35, 95), (0xCA46, 35, 96), (0xCA47, 36, 1),
    (0xCA48, 36, 2), (0xCA49, 36, 3), (0xCA4A, 36, 4), (0xCA4B, 36, 5), (0xCA4C, 65, 124),
    (0xCA4D, 65, 125), (0xCA4E, 36, 6), (0xCA4F, 36, 7), (0xCA50, 65, 126), (0xCA51, 36, 8),
    (0xCA52, 36, 9), (0xCA53, 36, 10), (0xCA54, 65, 127), (0xCA55, 36, 11), (0xCA56, 36, 12),
    (0xCA57, 36, 13), (0xCA58, 36, 14), (0xCA59, 36, 15), (0xCA5A, 36, 16), (0xCA5B, 36, 17),
    (0xCA5C, 65, 128), (0xCA5D, 65, 129), (0xCA5E, 36, 18), (0xCA5F, 65, 130), (0xCA60, 65, 131),
    (0xCA61, 65, 132), (0xCA62, 36, 19), (0xCA63, 36, 20), (0xCA64, 36, 21), (0xCA65, 36, 22),
    (0xCA66, 36, 23), (0xCA67, 36, 24), (0xCA68, 65, 133), (0xCA69, 36, 25), (0xCA6A, 36, 26),
    (0xCA6B, 36, 33), (0xCA6C, 36, 34), (0xCA6D, 36, 35), (0xCA6E, 36, 36), (0xCA6F, 36, 37),
    (0xCA70, 36, 38), (0xCA71, 36, 39), (0xCA72, 36, 40), (0xCA73, 36, 41), (0xCA74, 36, 42),
    (0xCA75, 36, 43), (0xCA76, 36, 44), (0xCA77, 36, 45), (0xCA78, 36, 46), (0xCA79, 36, 47),
    (0xCA7A, 36, 48), (0xCA7B, 36, 49), (0xCA7C, 36, 50), (0xCA7D, 65, 134), (0xCA7E, 36, 51),
    (0xCA7F, 36, 52), (0xCA80, 36, 53), (0xCA81, 36, 54), (0xCA82, 36, 55), (0xCA83, 36, 56),
    (0xCA84, 65, 135), (0xCA85, 36, 57), (0xCA86, 36, 58), (0xCA87, 36, 65), (0xCA88, 36, 66),
    (0xCA89, 36, 67), (0xCA8A, 36, 68), (0xCA8B, 36, 69), (0xCA8C, 36, 70), (0xCA8D, 36, 71),
    (0xCA8E, 36, 72), (0xCA8F, 36, 73), (0xCA90, 36, 74), (0xCA91, 36, 75), (0xCA92, 36, 76),
    (0xCA93, 36, 77), (0xCA94, 36, 78), (0xCA95, 36, 79), (0xCA96, 36, 80), (0xCA97, 36, 81),
    (0xCA98, 65, 136), (0xCA99, 36, 82), (0xCA9A, 36, 83), (0xCA9B, 36, 84), (0xCA9C, 36, 85),
    (0xCA9D, 36, 86), (0xCA9E, 36, 87), (0xCA9F, 36, 88), (0xCAA0, 36, 89), (0xCAA1, 36, 90),
    (0xCAA2, 36, 91), (0xCAA3, 36, 92), (0xCAA4, 36, 93), (0xCAA5, 36, 94), (0xCAA6, 36, 95),
    (0xCAA7, 36, 96), (0xCAA8, 37, 1), (0xCAA9, 37, 2), (0xCAAA, 37, 3), (0xCAAB, 37, 4),
    (0xCAAC, 37, 5), (0xCAAD, 37, 6), (0xCAAE, 37, 7), (0xCAAF, 37, 8), (0xCAB0, 37, 9),
    (0xCAB1, 37, 10), (0xCAB2, 37, 11), (0xCAB3, 37, 12), (0xCAB4, 37, 13), (0xCAB5, 37, 14),
    (0xCAB6, 37, 15), (0xCAB7, 37, 16), (0xCAB8, 37, 17), (0xCAB9, 37, 18), (0xCABA, 37, 19),
    (0xCABB, 37, 20), (0xCABC, 65, 137), (0xCABD, 65, 138), (0xCABE, 37, 21), (0xCABF, 37, 22),
    (0xCAC0, 65, 139), (0xCAC1, 37, 23), (0xCAC2, 37, 24), (0xCAC3, 37, 25), (0xCAC4, 65, 140),
    (0xCAC5, 37, 26), (0xCAC6, 37, 33), (0xCAC7, 37, 34), (0xCAC8, 37, 35), (0xCAC9, 37, 36),
    (0xCACA, 37, 37), (0xCACB, 37, 38), (0xCACC, 65, 141), (0xCACD, 65, 142), (0xCACE, 37, 39),
    (0xCACF, 65, 143), (0xCAD0, 37, 40), (0xCAD1, 65, 144), (0xCAD2, 37, 41), (0xCAD3, 65, 145),
    (0xCAD4, 37, 42), (0xCAD5, 37, 43), (0xCAD6, 37, 44), (0xCAD7, 37, 45), (0xCAD8, 65, 146),
    (0xCAD9, 65, 147), (0xCADA, 37, 46), (0xCADB, 37, 47), (0xCADC, 37, 48), (0xCADD, 37, 49),
    (0xCADE, 37, 50), (0xCADF, 37, 51), (0xCAE0, 65, 148), (0xCAE1, 37, 52), (0xCAE2, 37, 53),
    (0xCAE3, 37, 54), (0xCAE4, 37, 55), (0xCAE5, 37, 56), (0xCAE6, 37, 57), (0xCAE7, 37, 58),
    (0xCAE8, 37, 65), (0xCAE9, 37, 66), (0xCAEA, 37, 67), (0xCAEB, 37, 68), (0xCAEC, 65, 149),
    (0xCAED, 37, 69), (0xCAEE, 37, 70), (0xCAEF, 37, 71), (0xCAF0, 37, 72), (0xCAF1, 37, 73),
    (0xCAF2, 37, 74), (0xCAF3, 37, 75), (0xCAF4, 65, 150), (0xCAF5, 37, 76), (0xCAF6, 37, 77),
    (0xCAF7, 37, 78), (0xCAF8, 37, 79), (0xCAF9, 37, 80), (0xCAFA, 37, 81), (0xCAFB, 37, 82),
    (0xCAFC, 37, 83), (0xCAFD, 37, 84), (0xCAFE, 37, 85), (0xCAFF, 37, 86), (0xCB00, 37, 87),
    (0xCB01, 37, 88), (0xCB02, 37, 89), (0xCB03, 37, 90), (0xCB04, 37, 91), (0xCB05, 37, 92),
    (0xCB06, 37, 93), (0xCB07, 37, 94), (0xCB08, 65, 151), (0xCB09, 37, 95), (0xCB0A, 37, 96),
    (0xCB0B, 38, 1), (0xCB0C, 38, 2), (0xCB0D, 38, 3), (0xCB0E, 38, 4), (0xCB0F, 38, 5),
    (0xCB10, 65, 152), (0xCB11, 38, 6), (0xCB12, 38, 7), (0xCB13, 38, 8), (0xCB14, 65, 153),
    (0xCB15, 38, 9), (0xCB16, 38, 10), (0xCB17, 38, 11), (0xCB18, 65, 154), (0xCB19, 38, 12),
    (0xCB1A, 38, 13), (0xCB1B, 38, 14), (0xCB1C, 38, 15), (0xCB1D, 38, 16), (0xCB1E, 38, 17),
    (0xCB1F, 38, 18), (0xCB20, 65, 155), (0xCB21, 65, 156), (0xCB22, 38, 19), (0xCB23, 38, 20),
    (0xCB24, 38, 21), (0xCB25, 38, 22), (0xCB26, 38, 23), (0xCB27, 38, 24), (0xCB28, 38, 25),
    (0xCB29, 38, 26), (0xCB2A, 38, 33), (0xCB2B, 38, 34), (0xCB2C, 38, 35), (0xCB2D, 38, 36),
    (0xCB2E, 38, 37), (0xCB2F, 38, 38), (0xCB30, 38, 39), (0xCB31, 38, 40), (0xCB32, 38, 41),
    (0xCB33, 38, 42), (0xCB34, 38, 43), (0xCB35, 38, 44), (0xCB36, 38, 45), (0xCB37, 38, 46),
    (0xCB38, 38, 47), (0xCB39, 38, 48), (0xCB3A, 38, 49), (0xCB3B, 38, 50), (0xCB3C, 38, 51),
    (0xCB3D, 38, 52), (0xCB3E, 38, 53), (0xCB3F, 38, 54), (0xCB40, 38, 55), (0xCB41, 65, 157),
    (0xCB42, 38, 56), (0xCB43, 38, 57), (0xCB44, 38, 58), (0xCB45, 38, 65), (0xCB46, 38, 66),
    (0xCB47, 38, 67), (0xCB48, 65, 158), (0xCB49, 65, 159), (0xCB4A, 38, 68), (0xCB4B, 38, 69),
    (0xCB4C, 65, 160), (0xCB4D, 38, 70), (0xCB4E, 38, 71), (0xCB4F, 38, 72), (0xCB50, 65, 161),
    (0xCB51, 38, 73), (0xCB52, 38, 74), (0xCB53, 38, 75), (0xCB54, 38, 76), (0xCB55, 38, 77),
    (0xCB56, 38, 78), (0xCB57, 38, 79), (0xCB58, 65, 162), (0xCB59, 65, 163), (0xCB5A, 38, 80),
    (0xCB5B, 38, 81), (0xCB5C, 38, 82), (0xCB5D, 65, 164), (0xCB5E, 38, 83), (0xCB5F, 38, 84),
    (0xCB60, 38, 85), (0xCB61, 38, 86), (0xCB62, 38, 87), (0xCB63, 38, 88), (0xCB64, 65, 165),
    (0xCB65, 38, 89), (0xCB66, 38, 90), (0xCB67, 38, 91), (0xCB68, 38, 92), (0xCB69, 38, 93),
    (0xCB6A, 38, 94), (0xCB6B, 38, 95), (0xCB6C, 38, 96), (0xCB6D, 39, 1), (0xCB6E, 39, 2),
    (0xCB6F, 39, 3), (0xCB70, 39, 4), (0xCB71, 39, 5), (0xCB72, 39, 6), (0xCB73, 39, 7),
    (0xCB74, 39, 8), (0xCB75, 39, 9), (0xCB76, 39, 10), (0xCB77, 39, 11), (0xCB78, 65, 166),
    (0xCB79, 65, 167), (0xCB7A, 39, 12), (0xCB7B, 39, 13), (0xCB7C, 39, 14), (0xCB7D, 39, 15),
    (0xCB7E, 39, 16), (0xCB7F, 39, 17), (0xCB80, 39, 18), (0xCB81, 39, 19), (0xCB82, 39, 20),
    (0xCB83, 39, 21), (0xCB84, 39, 22), (0xCB85, 39, 23), (0xCB86, 39, 24), (0xCB87, 39, 25),
    (0xCB88, 39, 26), (0xCB89, 39, 33), (0xCB8A, 39, 34), (0xCB8B, 39, 35), (0xCB8C, 39, 36),
    (0xCB8D, 39, 37), (0xCB8E, 39, 38), (0xCB8F, 39, 39), (0xCB90, 39, 40), (0xCB91, 39, 41),
    (0xCB92, 39, 42), (0xCB93, 39, 43), (0xCB94, 39, 44), (0xCB95, 39, 45), (0xCB96, 39, 46),
    (0xCB97, 39, 47), (0xCB98, 39, 48), (0xCB99, 39, 49), (0xCB9A, 39, 50), (0xCB9B, 39, 51),
    (0xCB9C, 65, 168), (0xCB9D, 39, 52), (0xCB9E, 39, 53), (0xCB9F, 39, 54), (0xCBA0, 39, 55),
    (0xCBA1, 39, 56), (0xCBA2, 39, 57), (0xCBA3, 39, 58), (0xCBA4, 39, 65), (0xCBA5, 39, 66),
    (0xCBA6, 39, 67), (0xCBA7, 39, 68), (0xCBA8, 39, 69), (0xCBA9, 39, 70), (0xCBAA, 39, 71),
    (0xCBAB, 39, 72), (0xCBAC, 39, 73), (0xCBAD, 39, 74), (0xCBAE, 39, 75), (0xCBAF, 39, 76),
    (0xCBB0, 39, 77), (0xCBB1, 39, 78), (0xCBB2, 39, 79), (0xCBB3, 39, 80), (0xCBB4, 39, 81),
    (0xCBB5, 39, 82), (0xCBB6, 39, 83), (0xCBB7, 39, 84), (0xCBB8, 65, 169), (0xCBB9, 39, 85),
    (0xCBBA, 39, 86), (0xCBBB, 39, 87), (0xCBBC, 39, 88), (0xCBBD, 39, 89), (0xCBBE, 39, 90),
    (0xCBBF, 39, 91), (0xCBC0, 39, 92), (0xCBC1, 39, 93), (0xCBC2, 39, 94), (0xCBC3, 39, 95),
    (0xCBC4, 39, 96), (0xCBC5, 40, 1), (0xCBC6, 40, 2), (0xCBC7, 40, 3), (0xCBC8, 40, 4),
    (0xCBC9, 40, 5), (0xCBCA, 40, 6), (0xCBCB, 40, 7), (0xCBCC, 40, 8), (0xCBCD, 40, 9),
    (0xCBCE, 40, 10), (0xCBCF, 40, 11), (0xCBD0, 40, 12), (0xCBD1, 40, 13), (0xCBD2, 40, 14),
    (0xCBD3, 40, 15), (0xCBD4, 65, 170), (0xCBD5, 40, 16), (0xCBD6, 40, 17), (0xCBD7, 40, 18),
    (0xCBD8, 40, 19), (0xCBD9, 40, 20), (0xCBDA, 40, 21), (0xCBDB, 40, 22), (0xCBDC, 40, 23),
    (0xCBDD, 40, 24), (0xCBDE, 40, 25), (0xCBDF, 40, 26), (0xCBE0, 40, 33), (0xCBE1, 40, 34),
    (0xCBE2, 40, 35), (0xCBE3, 40, 36), (0xCBE4, 65, 171), (0xCBE5, 40, 37), (0xCBE6, 40, 38),
    (0xCBE7, 65, 172), (0xCBE8, 40, 39), (0xCBE9, 65, 173), (0xCBEA, 40, 40), (0xCBEB, 40, 41),
    (0xCBEC, 40, 42), (0xCBED, 40, 43), (0xCBEE, 40, 44), (0xCBEF, 40, 45), (0xCBF0, 40, 46),
    (0xCBF1, 40, 47), (0xCBF2, 40, 48), (0xCBF3, 40, 49), (0xCBF4, 40, 50), (0xCBF5, 40, 51),
    (0xCBF6, 40, 52), (0xCBF7, 40, 53), (0xCBF8, 40, 54), (0xCBF9, 40, 55), (0xCBFA, 40, 56),
    (0xCBFB, 40, 57), (0xCBFC, 40, 58), (0xCBFD, 40, 65), (0xCBFE, 40, 66), (0xCBFF, 40, 67),
    (0xCC00, 40, 68), (0xCC01, 40, 69), (0xCC02, 40, 70), (0xCC03, 40, 71), (0xCC04, 40, 72),
    (0xCC05, 40, 73), (0xCC06, 40, 74), (0xCC07, 40, 75), (0xCC08, 40, 76), (0xCC09, 40, 77),
    (0xCC0A, 40, 78), (0xCC0B, 40, 79), (0xCC0C, 65, 174), (0xCC0D, 65, 175), (0xCC0E, 40, 80),
    (0xCC0F, 40, 81), (0xCC10, 65, 176), (0xCC11, 40, 82), (0xCC12, 40, 83), (0xCC13, 40, 84),
    (0xCC14, 65, 177), (0xCC15, 40, 85), (0xCC16, 40, 86), (0xCC17, 40, 87), (0xCC18, 40, 88),
    (0xCC19, 40, 89), (0xCC1A, 40, 90), (0xCC1B, 40, 91), (0xCC1C, 65, 178), (0xCC1D, 65, 179),
    (0xCC1E, 40, 92), (0xCC1F, 40, 93), (0xCC20, 40, 94), (0xCC21, 65, 180), (0xCC22, 65, 181),
    (0xCC23, 40, 95), (0xCC24, 40, 96), (0xCC25, 41, 1), (0xCC26, 41, 2), (0xCC27, 65, 182),
    (0xCC28, 65, 183), (0xCC29, 65, 184), (0xCC2A, 41, 3), (0xCC2B, 41, 4), (0xCC2C, 65, 185),
    (0xCC2D, 41, 5), (0xCC2E, 65, 186), (0xCC2F, 41, 6), (0xCC30, 65, 187), (0xCC31, 41, 7),
    (0xCC32, 41, 8), (0xCC33, 41, 9), (0xCC34, 41, 10), (0xCC35, 41, 11), (0xCC36, 41, 12),
    (0xCC37, 41, 13), (0xCC38, 65, 188), (0xCC39, 65, 189), (0xCC3A, 41, 14), (0xCC3B, 65, 190),
    (0xCC3C, 66, 97), (0xCC3D, 66, 98), (0xCC3E, 66, 99), (0xCC3F, 41, 15), (0xCC40, 41, 16),
    (0xCC41, 41, 17), (0xCC42, 41, 18), (0xCC43, 41, 19), (0xCC44, 66, 100), (0xCC45, 66, 101),
    (0xCC46, 41, 20), (0xCC47, 41, 21), (0xCC48, 66, 102), (0xCC49, 41, 22), (0xCC4A, 41, 23),
    (0xCC4B, 41, 24), (0xCC4C, 66, 103), (0xCC4D, 41, 25), (0xCC4E, 41, 26), (0xCC4F, 41, 33),
    (0xCC50, 41, 34), (0xCC51, 41, 35), (0xCC52, 41, 36), (0xCC53, 41, 37), (0xCC54, 66, 104),
    (0xCC55, 66, 105), (0xCC56, 41, 38), (0xCC57, 66, 106), (0xCC58, 66, 107), (0xCC59, 66, 108),
    (0xCC5A, 41, 39), (0xCC5B, 41, 40), (0xCC5C, 41, 41), (0xCC5D, 41, 42), (0xCC5E, 41, 43),
    (0xCC5F, 41, 44), (0xCC60, 66, 109), (0xCC61, 41, 45), (0xCC62, 41, 46), (0xCC63, 41, 47),
    (0xCC64, 66, 110), (0xCC65, 41, 48), (0xCC66, 66, 111), (0xCC67, 41, 49), (0xCC68, 66, 112),
    (0xCC69, 41, 50), (0xCC6A, 41, 51), (0xCC6B, 41, 52), (0xCC6C, 41, 53), (0xCC6D, 41, 54),
    (0xCC6E, 41, 55), (0xCC6F, 41, 56), (0xCC70, 66, 113), (0xCC71, 41, 57), (0xCC72, 41, 58),
    (0xCC73, 41, 65), (0xCC74, 41, 66), (0xCC75, 66, 114), (0xCC76, 41, 67), (0xCC77, 41, 68),
    (0xCC78, 41, 69), (0xCC79, 41, 70), (0xCC7A, 41, 71), (0xCC7B, 41, 72), (0xCC7C, 41, 73),
    (0xCC7D, 41, 74), (0xCC7E, 41, 75), (0xCC7F, 41, 76), (0xCC80, 41, 77), (0xCC81, 41, 78),
    (0xCC82, 41, 79), (0xCC83, 41, 80), (0xCC84, 41, 81), (0xCC85, 41, 82), (0xCC86, 41, 83),
    (0xCC87, 41, 84), (0xCC88, 41, 85), (0xCC89, 41, 86), (0xCC8A, 41, 87), (0xCC8B, 41, 88),
    (0xCC8C, 41, 89), (0xCC8D, 41, 90), (0xCC8E, 41, 91), (0xCC8F, 41, 92), (0xCC90, 41, 93),
    (0xCC91, 41, 94), (0xCC92, 41, 95), (0xCC93, 41, 96), (0xCC94, 42, 1), (0xCC95, 42, 2),
    (0xCC96, 42, 3), (0xCC97, 42, 4), (0xCC98, 66, 115), (0xCC99, 66, 116), (0xCC9A, 42, 5),
    (0xCC9B, 42, 6), (0xCC9C, 66, 117), (0xCC9D, 42, 7), (0xCC9E, 42, 8), (0xCC9F, 42, 9),
    (0xCCA0, 66, 118), (0xCCA1, 42, 10), (0xCCA2, 42, 11), (0xCCA3, 42, 12), (0xCCA4, 42, 13),
    (0xCCA5, 42, 14), (0xCCA6, 42, 15), (0xCCA7, 42, 16), (0xCCA8, 66, 119), (0xCCA9, 66, 120),
    (0xCCAA, 42, 17), (0xCCAB, 66, 121), (0xCCAC, 66, 122), (0xCCAD, 66, 123), (0xCCAE, 42, 18),
    (0xCCAF, 42, 19), (0xCCB0, 42, 20), (0xCCB1, 42, 21), (0xCCB2, 42, 22), (0xCCB3, 42, 23),
    (0xCCB4, 66, 124), (0xCCB5, 66, 125), (0xCCB6, 42, 24), (0xCCB7, 42, 25), (0xCCB8, 66, 126),
    (0xCCB9, 42, 26), (0xCCBA, 42, 33), (0xCCBB, 42, 34), (0xCCBC, 66, 127), (0xCCBD, 42, 35),
    (0xCCBE, 42, 36), (0xCCBF, 42, 37), (0xCCC0, 42, 38), (0xCCC1, 42, 39), (0xCCC2, 42, 40),
    (0xCCC3, 42, 41), (0xCCC4, 66, 128), (0xCCC5, 66, 129), (0xCCC6, 42, 42), (0xCCC7, 66, 130),
    (0xCCC8, 42, 43), (0xCCC9, 66, 131), (0xCCCA, 42, 44), (0xCCCB, 42, 45), (0xCCCC, 42, 46),
    (0xCCCD, 42, 47), (0xCCCE, 42, 48), (0xCCCF, 42, 49), (0xCCD0, 66, 132), (0xCCD1, 42, 50),
    (0xCCD2, 42, 51), (0xCCD3, 42, 52), (0xCCD4, 66, 133), (0xCCD5, 42, 53), (0xCCD6, 42, 54),
    (0xCCD7, 42, 55), (0xCCD8, 42, 56), (0xCCD9, 42, 57), (0xCCDA, 42, 58), (0xCCDB, 42, 65),
    (0xCCDC, 42, 66), (0xCCDD, 42, 67), (0xCCDE, 42, 68), (0xCCDF, 42, 69), (0xCCE0, 42, 70),
    (0xCCE1, 42, 71), (0xCCE2, 42, 72), (0xCCE3, 42, 73), (0xCCE4, 66, 134), (0xCCE5, 42, 74),
    (0xCCE6, 42, 75), (0xCCE7, 42, 76), (0xCCE8, 42, 77), (0xCCE9, 42, 78), (0xCCEA, 42, 79),
    (0xCCEB, 42, 80), (0xCCEC, 66, 135), (0xCCED, 42, 81), (0xCCEE, 42, 82), (0xCCEF, 42, 83),
    (0xCCF0, 66, 136), (0xCCF1, 42, 84), (0xCCF2, 42, 85), (0xCCF3, 42, 86), (0xCCF4, 42, 87),
    (0xCCF5, 42, 88), (0xCCF6, 42, 89), (0xCCF7, 42, 90), (0xCCF8, 42, 91), (0xCCF9, 42, 92),
    (0xCCFA, 42, 93), (0xCCFB, 42, 94), (0xCCFC, 42, 95), (0xCCFD, 42, 96), (0xCCFE, 43, 1),
    (0xCCFF, 43, 2), (0xCD00, 43, 3), (0xCD01, 66, 137), (0xCD02, 43, 4), (0xCD03, 43, 5),
    (0xCD04, 43, 6), (0xCD05, 43, 7), (0xCD06, 43, 8), (0xCD07, 43, 9), (0xCD08, 66, 138),
    (0xCD09, 66, 139), (0xCD0A, 43, 10), (0xCD0B, 43, 11), (0xCD0C, 66, 140), (0xCD0D, 43, 12),
    (0xCD0E, 43, 13), (0xCD0F, 43, 14), (0xCD10, 66, 141), (0xCD11, 43, 15), (0xCD12, 43, 16),
    (0xCD13, 43, 17), (0xCD14, 43, 18), (0xCD15, 43, 19), (0xCD16, 43, 20), (0xCD17, 43, 21),
    (0xCD18, 66, 142), (0xCD19, 66, 143), (0xCD1A, 43, 22), (0xCD1B, 66, 144), (0xCD1C, 43, 23),
    (0xCD1D, 66, 145), (0xCD1E, 43, 24), (0xCD1F, 43, 25), (0xCD20, 43, 26), (0xCD21, 43, 33),
    (0xCD22, 43, 34), (0xCD23, 43, 35), (0xCD24, 66, 146), (0xCD25, 43, 36), (0xCD26, 43, 37),
    (0xCD27, 43, 38), (0xCD28, 66, 147), (0xCD29, 43, 39), (0xCD2A, 43, 40), (0xCD2B, 43, 41),
    (0xCD2C, 66, 148), (0xCD2D, 43, 42), (0xCD2E, 43, 43), (0xCD2F, 43, 44), (0xCD30, 43, 45),
    (0xCD31, 43, 46), (0xCD32, 43, 47), (0xCD33, 43, 48), (0xCD34, 43, 49), (0xCD35, 43, 50),
    (0xCD36, 43, 51), (0xCD37, 43, 52), (0xCD38, 43, 53), (0xCD39, 66, 149), (0xCD3A, 43, 54),
    (0xCD3B, 43, 55), (0xCD3C, 43, 56), (0xCD3D, 43, 57), (0xCD3E, 43, 58), (0xCD3F, 43, 65),
    (0xCD40, 43, 66), (0xCD41, 43, 67), (0xCD42, 43, 68), (0xCD43, 43, 69), (0xCD44, 43, 70),
    (0xCD45, 43, 71), (0xCD46, 43, 72), (0xCD47, 43, 73), (0xCD48, 43, 74), (0xCD49, 43, 75),
    (0xCD4A, 43, 76), (0xCD4B, 43, 77), (0xCD4C, 43, 78), (0xCD4D, 43, 79), (0xCD4E, 43, 80),
    (0xCD4F, 43, 81), (0xCD50, 43, 82), (0xCD51, 43, 83), (0xCD52, 43, 84), (0xCD53, 43, 85),
    (0xCD54, 43, 86), (0xCD55, 43, 87), (0xCD56, 43, 88), (0xCD57, 43, 89), (0xCD58, 43, 90),
    (0xCD59, 43, 91), (0xCD5A, 43, 92), (0xCD5B, 43, 93), (0xCD5C, 66, 150), (0xCD5D, 43, 94),
    (0xCD5E, 43, 95), (0xCD5F, 43, 96), (0xCD60, 66, 151), (0xCD61, 44, 1), (0xCD62, 44, 2),
    (0xCD63, 44, 3), (0xCD64, 66, 152), (0xCD65, 44, 4), (0xCD66, 44, 5), (0xCD67, 44, 6),
    (0xCD68, 44, 7), (0xCD69, 44, 8), (0xCD6A, 44, 9), (0xCD6B, 44, 10), (0xCD6C, 66, 153),
    (0xCD6D, 66, 154), (0xCD6E, 44, 11), (0xCD6F, 66, 155), (0xCD70, 44, 12), (0xCD71, 66, 156),
    (0xCD72, 44, 13), (0xCD73, 44, 14), (0xCD74, 44, 15), (0xCD75, 44, 16), (0xCD76, 44, 17),
    (0xCD77, 44, 18), (0xCD78, 66, 157), (0xCD79, 44, 19), (0xCD7A, 44, 20), (0xCD7B, 44, 21),
    (0xCD7C, 44, 22), (0xCD7D, 44, 23), (0xCD7E, 44, 24), (0xCD7F, 44, 25), (0xCD80, 44, 26),
    (0xCD81, 44, 33), (0xCD82, 44, 34), (0xCD83, 44, 35), (0xCD84, 44, 36), (0xCD85, 44, 37),
    (0xCD86, 44, 38), (0xCD87, 44, 39), (0xCD88, 66, 158), (0xCD89, 44, 40), (0xCD8A, 44, 41),
    (0xCD8B, 44, 42), (0xCD8C, 44, 43), (0xCD8D, 44, 44), (0xCD8E, 44, 45), (0xCD8F, 44, 46),
    (0xCD90, 44, 47), (0xCD91, 44, 48), (0xCD92, 44, 49), (0xCD93, 44, 50), (0xCD94, 66, 159),
    (0xCD95, 66, 160), (0xCD96, 44, 51), (0xCD97, 44, 52), (0xCD98, 66, 161), (0xCD99, 44, 53),
    (0xCD9A, 44, 54), (0xCD9B, 44, 55), (0xCD9C, 66, 162), (0xCD9D, 44, 56), (0xCD9E, 44, 57),
    (0xCD9F, 44, 58), (0xCDA0, 44, 65), (0xCDA1, 44, 66), (0xCDA2, 44, 67), (0xCDA3, 44, 68),
    (0xCDA4, 66, 163), (0xCDA5, 66, 164), (0xCDA6, 44, 69), (0xCDA7, 66, 165), (0xCDA8, 44, 70),
    (0xCDA9, 66, 166), (0xCDAA, 44, 71), (0xCDAB, 44, 72), (0xCDAC, 44, 73), (0xCDAD, 44, 74),
    (0xCDAE, 44, 75), (0xCDAF, 44, 76), (0xCDB0, 66, 167), (0xCDB1, 44, 77), (0xCDB2, 44, 78),
    (0xCDB3, 44, 79), (0xCDB4, 44, 80), (0xCDB5, 44, 81), (0xCDB6, 44, 82), (0xCDB7, 44, 83),
    (0xCDB8, 44, 84), (0xCDB9, 44, 85), (0xCDBA, 44, 86), (0xCDBB, 44, 87), (0xCDBC, 44, 88),
    (0xCDBD, 44, 89), (0xCDBE, 44, 90), (0xCDBF, 44, 91), (0xCDC0, 44, 92), (0xCDC1, 44, 93),
    (0xCDC2, 44, 94), (0xCDC3, 44, 95), (0xCDC4, 66, 168), (0xCDC5, 44, 96), (0xCDC6, 45, 1),
    (0xCDC7, 45, 2), (0xCDC8, 45, 3), (0xCDC9, 45, 4), (0xCDCA, 45, 5), (0xCDCB, 45, 6),
    (0xCDCC, 66, 169), (0xCDCD, 45, 7), (0xCDCE, 45, 8), (0xCDCF, 45, 9), (0xCDD0, 66, 170),
    (0xCDD1, 45, 10), (0xCDD2, 45, 11), (0xCDD3, 45, 12), (0xCDD4, 45, 13), (0xCDD5, 45, 14),
    (0xCDD6, 45, 15), (0xCDD7, 45, 16), (0xCDD8, 45, 17), (0xCDD9, 45, 18), (0xCDDA, 45, 19),
    (0xCDDB, 45, 20), (0xCDDC, 45, 21), (0xCDDD, 45, 22), (0xCDDE, 45, 23), (0xCDDF, 45, 24),
    (0xCDE0, 45, 25), (0xCDE1, 45, 26), (0xCDE2, 45, 33), (0xCDE3, 45, 34), (0xCDE4, 45, 35),
    (0xCDE5, 45, 36), (0xCDE6, 45, 37), (0xCDE7, 45, 38), (0xCDE8, 66, 171), (0xCDE9, 45, 39),
    (0xCDEA, 45, 40), (0xCDEB, 45, 41), (0xCDEC, 66, 172), (0xCDED, 45, 42), (0xCDEE, 45, 43),
    (0xCDEF, 45, 44), (0xCDF0, 66, 173), (0xCDF1, 45, 45), (0xCDF2, 45, 46), (0xCDF3, 45, 47),
    (0xCDF4, 45, 48), (0xCDF5, 45, 49), (0xCDF6, 45, 50), (0xCDF7, 45, 51), (0xCDF8, 66, 174),
    (0xCDF9, 66, 175), (0xCDFA, 45, 52), (0xCDFB, 66, 176), (0xCDFC, 45, 53), (0xCDFD, 66, 177),
    (0xCDFE, 45, 54), (0xCDFF, 45, 55), (0xCE00, 45, 56), (0xCE01, 45, 57), (0xCE02, 45, 58),
    (0xCE03, 45, 65), (0xCE04, 66, 178), (0xCE05, 45, 66), (0xCE06, 45, 67), (0xCE07, 45, 68),
    (0xCE08, 66, 179), (0xCE09, 45, 69), (0xCE0A, 45, 70), (0xCE0B, 45, 71), (0xCE0C, 66, 180),
    (0xCE0D, 45, 72), (0xCE0E, 45, 73), (0xCE0F, 45, 74), (0xCE10, 45, 75), (0xCE11, 45, 76),
    (0xCE12, 45, 77), (0xCE13, 45, 78), (0xCE14, 66, 181), (0xCE15, 45, 79), (0xCE16, 45, 80),
    (0xCE17, 45, 81), (0xCE18, 45, 82), (0xCE19, 66, 182), (0xCE1A, 45, 83), (0xCE1B, 45, 84),
    (0xCE1C, 45, 85), (0xCE1D, 45, 86), (0xCE1E, 45, 87), (0xCE1F, 45, 88), (0xCE20, 66, 183),
    (0xCE21, 66, 184), (0xCE22, 45, 89), (0xCE23, 45, 90), (0xCE24, 66, 185), (0xCE25, 45, 91),
    (0xCE26, 45, 92), (0xCE27, 45, 93), (0xCE28, 66, 186), (0xCE29, 45, 94), (0xCE2A, 45, 95),
    (0xCE2B, 45, 96), (0xCE2C, 46, 1), (0xCE2D, 46, 2), (0xCE2E, 46, 3), (0xCE2F, 46, 4),
    (0xCE30, 66, 187), (0xCE31, 66, 188), (0xCE32, 46, 5), (0xCE33, 66, 189), (0xCE34, 46, 6),
    (0xCE35, 66, 190), (0xCE36, 46, 7), (0xCE37, 46, 8), (0xCE38, 46, 9), (0xCE39, 46, 10),
    (0xCE3A, 46, 11), (0xCE3B, 46, 12), (0xCE3C, 46, 13), (0xCE3D, 46, 14), (0xCE3E, 46, 15),
    (0xCE3F, 46, 16), (0xCE40, 46, 17), (0xCE41, 46, 18), (0xCE42, 46, 19), (0xCE43, 46, 20),
    (0xCE44, 46, 21), (0xCE45, 46, 22), (0xCE46, 46, 23), (0xCE47, 46, 24), (0xCE48, 46, 25),
    (0xCE49, 46, 26), (0xCE4A, 46, 33), (0xCE4B, 46, 34), (0xCE4C, 46, 35), (0xCE4D, 46, 36),
    (0xCE4E, 46, 37), (0xCE4F, 46, 38), (0xCE50, 46, 39), (0xCE51, 46, 40), (0xCE52, 46, 41),
    (0xCE53, 46, 42), (0xCE54, 46, 43), (0xCE55, 46, 44), (0xCE56, 46, 45), (0xCE57, 46, 46),
    (0xCE58, 67, 97), (0xCE59, 67, 98), (0xCE5A, 46, 47), (0xCE5B, 46, 48), (0xCE5C, 67, 99),
    (0xCE5D, 46, 49), (0xCE5E, 46, 50), (0xCE5F, 67, 100), (0xCE60, 67, 101), (0xCE61, 67, 102),
    (0xCE62, 46, 51), (0xCE63, 46, 52), (0xCE64, 46, 53), (0xCE65, 46, 54), (0xCE66, 46, 55),
    (0xCE67, 46, 56), (0xCE68, 67, 103), (0xCE69, 67, 104), (0xCE6A, 46, 57), (0xCE6B, 67, 105),
    (0xCE6C, 46, 58), (0xCE6D, 67, 106), (0xCE6E, 46, 65), (0xCE6F, 46, 66), (0xCE70, 46, 67),
    (0xCE71, 46, 68), (0xCE72, 46, 69), (0xCE73, 46, 70), (0xCE74, 67, 107), (0xCE75, 67, 108),
    (0xCE76, 46, 71), (0xCE77, 46, 72), (0xCE78, 67, 109), (0xCE79, 46, 73), (0xCE7A, 46, 74),
    (0xCE7B, 46, 75), (0xCE7C, 67, 110), (0xCE7D, 46, 76), (0xCE7E, 46, 77), (0xCE7F, 46, 78),
    (0xCE80, 46, 79), (0xCE81, 46, 80), (0xCE82, 46, 81), (0xCE83, 46, 82), (0xCE84, 67, 111),
    (0xCE85, 67, 112), (0xCE86, 46, 83), (0xCE87, 67, 113), (0xCE88, 46, 84), (0xCE89, 67, 114),
    (0xCE8A, 46, 85), (0xCE8B, 46, 86), (0xCE8C, 46, 87), (0xCE8D, 46, 88), (0xCE8E, 46, 89),
    (0xCE8F, 46, 90), (0xCE90, 67, 115), (0xCE91, 67, 116), (0xCE92, 46, 91), (0xCE93, 46, 92),
    (0xCE94, 67, 117), (0xCE95, 46, 93), (0xCE96, 46, 94), (0xCE97, 46, 95), (0xCE98, 67, 118),
    (0xCE99, 46, 96), (0xCE9A, 47, 1), (0xCE9B, 47, 2), (0xCE9C, 47, 3), (0xCE9D, 47, 4),
    (0xCE9E, 47, 5), (0xCE9F, 47, 6), (0xCEA0, 67, 119), (0xCEA1, 67, 120), (0xCEA2, 47, 7),
    (0xCEA3, 67, 121), (0xCEA4, 67, 122), (0xCEA5, 67, 123), (0xCEA6, 47, 8), (0xCEA7, 47, 9),
    (0xCEA8, 47, 10), (0xCEA9, 47, 11), (0xCEAA, 47, 12), (0xCEAB, 47, 13), (0xCEAC, 67, 124),
    (0xCEAD, 67, 125), (0xCEAE, 47, 14), (0xCEAF, 47, 15), (0xCEB0, 47, 16), (0xCEB1, 47, 17),
    (0xCEB2, 47, 18), (0xCEB3, 47, 19), (0xCEB4, 47, 20), (0xCEB5, 47, 21), (0xCEB6, 47, 22),
    (0xCEB7, 47, 23), (0xCEB8, 47, 24), (0xCEB9, 47, 25), (0xCEBA, 47, 26), (0xCEBB, 47, 33),
    (0xCEBC, 47, 34), (0xCEBD, 47, 35), (0xCEBE, 47, 36), (0xCEBF, 47, 37), (0xCEC0, 47, 38),
    (0xCEC1, 67, 126), (0xCEC2, 47, 39), (0xCEC3, 47, 40), (0xCEC4, 47, 41), (0xCEC5, 47, 42),
    (0xCEC6, 47, 43), (0xCEC7, 47, 44), (0xCEC8, 47, 45), (0xCEC9, 47, 46), (0xCECA, 47, 47),
    (0xCECB, 47, 48), (0xCECC, 47, 49), (0xCECD, 47, 50), (0xCECE, 47, 51), (0xCECF, 47, 52),
    (0xCED0, 47, 53), (0xCED1, 47, 54), (0xCED2, 47, 55), (0xCED3, 47, 56), (0xCED4, 47, 57),
    (0xCED5, 47, 58), (0xCED6, 47, 65), (0xCED7, 47, 66), (0xCED8, 47, 67), (0xCED9, 47, 68),
    (0xCEDA, 47, 69), (0xCEDB, 47, 70), (0xCEDC, 47, 71), (0xCEDD, 47, 72), (0xCEDE, 47, 73),
    (0xCEDF, 47, 74), (0xCEE0, 47, 75), (0xCEE1, 47, 76), (0xCEE2, 47, 77), (0xCEE3, 47, 78),
    (0xCEE4, 67, 127), (0xCEE5, 67, 128), (0xCEE6, 47, 79), (0xCEE7, 47, 80), (0xCEE8, 67, 129),
    (0xCEE9, 47, 81), (0xCEEA, 47, 82), (0xCEEB, 67, 130), (0xCEEC, 67, 131), (0xCEED, 47, 83),
    (0xCEEE, 47, 84), (0xCEEF, 47, 85), (0xCEF0, 47, 86), (0xCEF1, 47, 87), (0xCEF2, 47, 88),
    (0xCEF3, 47, 89), (0xCEF4, 67, 132), (0xCEF5, 67, 133), (0xCEF6, 47, 90), (0xCEF7, 67, 134),
    (0xCEF8, 67, 135), (0xCEF9, 67, 136), (0xCEFA, 47, 91), (0xCEFB, 47, 92), (0xCEFC, 47, 93),
    (0xCEFD, 47, 94), (0xCEFE, 47, 95), (0xCEFF, 47, 96), (0xCF00, 67, 137), (0xCF01, 67, 138),
    (0xCF02, 48, 1), (0xCF03, 48, 2), (0xCF04, 67, 139), (0xCF05, 48, 3), (0xCF06, 48, 4),
    (0xCF07, 48, 5), (0xCF08, 67, 140), (0xCF09, 48, 6), (0xCF0A, 48, 7), (0xCF0B, 48, 8),
    (0xCF0C, 48, 9), (0xCF0D, 48, 10), (0xCF0E, 48, 11), (0xCF0F, 48, 12), (0xCF10, 67, 141),
    (0xCF11, 67, 142), (0xCF12, 48, 13), (0xCF13, 67, 143), (0xCF14, 48, 14), (0xCF15, 67, 144),
    (0xCF16, 48, 15), (0xCF17, 48, 16), (0xCF18, 48, 17), (0xCF19, 48, 18), (0xCF1A, 48, 19),
    (0xCF1B, 48, 20), (0xCF1C, 67, 145), (0xCF1D, 48, 21), (0xCF1E, 48, 22), (0xCF1F, 48, 23),
    (0xCF20, 67, 146), (0xCF21, 48, 24), (0xCF22, 48, 25), (0xCF23, 48, 26), (0xCF24, 67, 147),
    (0xCF25, 48, 33), (0xCF26, 48, 34), (0xCF27, 48, 35), (0xCF28, 48, 36), (0xCF29, 48, 37),
    (0xCF2A, 48, 38), (0xCF2B, 48, 39), (0xCF2C, 67, 148), (0xCF2D, 67, 149), (0xCF2E, 48, 40),
    (0xCF2F, 67, 150), (0xCF30, 67, 151), (0xCF31, 67, 152), (0xCF32, 48, 41), (0xCF33, 48, 42),
    (0xCF34, 48, 43), (0xCF35, 48, 44), (0xCF36, 48, 45), (0xCF37, 48, 46), (0xCF38, 67, 153),
    (0xCF39, 48, 47), (0xCF3A, 48, 48), (0xCF3B, 48, 49), (0xCF3C, 48, 50), (0xCF3D, 48, 51),
    (0xCF3E, 48, 52), (0xCF3F, 48, 53), (0xCF40, 48, 54), (0xCF41, 48, 55), (0xCF42, 48, 56),
    (0xCF43, 48, 57), (0xCF44, 48, 58), (0xCF45, 48, 65), (0xCF46, 48, 66), (0xCF47, 48, 67),
    (0xCF48, 48, 68), (0xCF49, 48, 69), (0xCF4A, 48, 70), (0xCF4B, 48, 71), (0xCF4C, 48, 72),
    (0xCF4D, 48, 73), (0xCF4E, 48, 74), (0xCF4F, 48, 75), (0xCF50, 48, 76), (0xCF51, 48, 77),
    (0xCF52, 48, 78), (0xCF53, 48, 79), (0xCF54, 67, 154), (0xCF55, 67, 155), (0xCF56, 48, 80),
    (0xCF57, 48, 81), (0xCF58, 67, 156), (0xCF59, 48, 82), (0xCF5A, 48, 83), (0xCF5B, 48, 84),
    (0xCF5C, 67, 157), (0xCF5D, 48, 85), (0xCF5E, 48, 86), (0xCF5F, 48, 87), (0xCF60, 48, 88),
    (0xCF61, 48, 89), (0xCF62, 48, 90), (0xCF63, 48, 91), (0xCF64, 67, 158), (0xCF65, 67, 159),
    (0xCF66, 48, 92), (0xCF67, 67, 160), (0xCF68, 48, 93), (0xCF69, 67, 161), (0xCF6A, 48, 94),
    (0xCF6B, 48, 95), (0xCF6C, 48, 96), (0xCF6D, 49, 1), (0xCF6E, 49, 2), (0xCF6F, 49, 3),
    (0xCF70, 67, 162), (0xCF71, 67, 163), (0xCF72, 49, 4), (0xCF73, 49, 5), (0xCF74, 67, 164),
    (0xCF75, 49, 6), (0xCF76, 49, 7), (0xCF77, 49, 8), (0xCF78, 67, 165), (0xCF79, 49, 9),
    (0xCF7A, 49, 10), (0xCF7B, 49, 11), (0xCF7C, 49, 12), (0xCF7D, 49, 13), (0xCF7E, 49, 14),
    (0xCF7F, 49, 15), (0xCF80, 67, 166), (0xCF81, 49, 16), (0xCF82, 49, 17), (0xCF83, 49, 18),
    (0xCF84, 49, 19), (0xCF85, 67, 167), (0xCF86, 49, 20), (0xCF87, 49, 21), (0xCF88, 49, 22),
    (0xCF89, 49, 23), (0xCF8A, 49, 24), (0xCF8B, 49, 25), (0xCF8C, 67, 168), (0xCF8D, 49, 26),
    (0xCF8E, 49, 33), (0xCF8F, 49, 34), (0xCF90, 49, 35), (0xCF91, 49, 36), (0xCF92, 49, 37),
    (0xCF93, 49, 38), (0xCF94, 49, 39), (0xCF95, 49, 40), (0xCF96, 49, 41), (0xCF97, 49, 42),
    (0xCF98, 49, 43), (0xCF99, 49, 44), (0xCF9A, 49, 45), (0xCF9B, 49, 46), (0xCF9C, 49, 47),
    (0xCF9D, 49, 48), (0xCF9E, 49, 49), (0xCF9F, 49, 50), (0xCFA0, 49, 51), (0xCFA1, 67, 169),
    (0xCFA2, 49, 52), (0xCFA3, 49, 53), (0xCFA4, 49, 54), (0xCFA5, 49, 55), (0xCFA6, 49, 56),
    (0xCFA7, 49, 57), (0xCFA8, 67, 170), (0xCFA9, 49, 58), (0xCFAA, 49, 65), (0xCFAB, 49, 66),
    (0xCFAC, 49, 67), (0xCFAD, 49, 68), (0xCFAE, 49, 69), (0xCFAF, 49, 70), (0xCFB0, 67, 171),
    (0xCFB1, 49, 71), (0xCFB2, 49, 72), (0xCFB3, 49, 73), (0xCFB4, 49, 74), (0xCFB5, 49, 75),
    (0xCFB6, 49, 76), (0xCFB7, 49, 77), (0xCFB8, 49, 78), (0xCFB9, 49, 79), (0xCFBA, 49, 80),
    (0xCFBB, 49, 81), (0xCFBC, 49, 82), (0xCFBD, 49, 83), (0xCFBE, 49, 84), (0xCFBF, 49, 85),
    (0xCFC0, 49, 86), (0xCFC1, 49, 87), (0xCFC2, 49, 88), (0xCFC3, 49, 89), (0xCFC4, 67, 172),
    (0xCFC5, 49, 90), (0xCFC6, 49, 91), (0xCFC7, 49, 92), (0xCFC8, 49, 93), (0xCFC9, 49, 94),
    (0xCFCA, 49, 95), (0xCFCB, 49, 96), (0xCFCC, 50, 1), (0xCFCD, 50, 2), (0xCFCE, 50, 3),
    (0xCFCF, 50, 4), (0xCFD0, 50, 5), (0xCFD1, 50, 6), (0xCFD2, 50, 7), (0xCFD3, 50, 8),
    (0xCFD4, 50, 9), (0xCFD5, 50, 10), (0xCFD6, 50, 11), (0xCFD7, 50, 12), (0xCFD8, 50, 13),
    (0xCFD9, 50, 14), (0xCFDA, 50, 15), (0xCFDB, 50, 16), (0xCFDC, 50, 17), (0xCFDD, 50, 18),
    (0xCFDE, 50, 19), (0xCFDF, 50, 20), (0xCFE0, 67, 173), (0xCFE1, 67, 174), (0xCFE2, 50, 21),
    (0xCFE3, 50, 22), (0xCFE4, 67, 175), (0xCFE5, 50, 23), (0xCFE6, 50, 24), (0xCFE7, 50, 25),
    (0xCFE8, 67, 176), (0xCFE9, 50, 26), (0xCFEA, 50, 33), (0xCFEB, 50, 34), (0xCFEC, 50, 35),
    (0xCFED, 50, 36), (0xCFEE, 50, 37), (0xCFEF, 50, 38), (0xCFF0, 67, 177), (0xCFF1, 67, 178),
    (0xCFF2, 50, 39), (0xCFF3, 67, 179), (0xCFF4, 50, 40), (0xCFF5, 67, 180), (0xCFF6, 50, 41),
    (0xCFF7, 50, 42), (0xCFF8, 50, 43), (0xCFF9, 50, 44), (0xCFFA, 50, 45), (0xCFFB, 50, 46),
    (0xCFFC, 67, 181), (0xCFFD, 50, 47), (0xCFFE, 50, 48), (0xCFFF, 50, 49), (0xD000, 67, 182),
    (0xD001, 50, 50), (0xD002, 50, 51), (0xD003, 50, 52), (0xD004, 67, 183), (0xD005, 50, 53),
    (0xD006, 50, 54), (0xD007, 50, 55), (0xD008, 50, 56), (0xD009, 50, 57), (0xD00A, 50, 58),
    (0xD00B, 50, 65), (0xD00C, 50, 66), (0xD00D, 50, 67), (0xD00E, 50, 68), (0xD00F, 50, 69),
    (0xD010, 50, 70), (0xD011, 67, 184), (0xD012, 50, 71), (0xD013, 50, 72), (0xD014, 50, 73),
    (0xD015, 50, 74), (0xD016, 50, 75), (0xD017, 50, 76), (0xD018, 67, 185), (0xD019, 50, 77),
    (0xD01A, 50, 78), (0xD01B, 50, 79), (0xD01C, 50, 80), (0xD01D, 50, 81), (0xD01E, 50, 82),
    (0xD01F, 50, 83), (0xD020, 50, 84), (0xD021, 50, 85), (0xD022, 50, 86), (0xD023, 50, 87),
    (0xD024, 50, 88), (0xD025, 50, 89), (0xD026, 50, 90), (0xD027, 50, 91), (0xD028, 50, 92),
    (0xD029, 50, 93), (0xD02A, 50, 94), (0xD02B, 50, 95), (0xD02C, 50, 96), (0xD02D, 67, 186),
    (0xD02E, 51, 1), (0xD02F, 51, 2), (0xD030, 51, 3), (0xD031, 51, 4), (0xD032, 51, 5),
    (0xD033, 51, 6), (0xD034, 67, 187), (0xD035, 67, 188), (0xD036, 51, 7), (0xD037, 51, 8),
    (0xD038, 67, 189), (0xD039, 51, 9), (0xD03A, 51, 10), (0xD03B, 51, 11), (0xD03C, 67, 190),
    (0xD03D, 51, 12), (0xD03E, 51, 13), (0xD03F, 51, 14), (0xD040, 51, 15), (0xD041, 51, 16),
    (0xD042, 51, 17), (0xD043, 51, 18), (0xD044, 68, 97), (0xD045, 68, 98), (0xD046, 51, 19),
    (0xD047, 68, 99), (0xD048, 51, 20), (0xD049, 68, 100), (0xD04A, 51, 21), (0xD04B, 51, 22),
    (0xD04C, 51, 23), (0xD04D, 51, 24), (0xD04E, 51, 25), (0xD04F, 51, 26), (0xD050, 68, 101),
    (0xD051, 51, 33), (0xD052, 51, 34), (0xD053, 51, 35), (0xD054, 68, 102), (0xD055, 51, 36),
    (0xD056, 51, 37), (0xD057, 51, 38), (0xD058, 68, 103), (0xD059, 51, 39), (0xD05A, 51, 40),
    (0xD05B, 51, 41), (0xD05C, 51, 42), (0xD05D, 51, 43), (0xD05E, 51, 44), (0xD05F, 51, 45),
    (0xD060, 68, 104), (0xD061, 51, 46), (0xD062, 51, 47), (0xD063, 51, 48), (0xD064, 51, 49),
    (0xD065, 51, 50), (0xD066, 51, 51), (0xD067, 51, 52), (0xD068, 51, 53), (0xD069, 51, 54),
    (0xD06A, 51, 55), (0xD06B, 51, 56), (0xD06C, 68, 105), (0xD06D, 68, 106), (0xD06E, 51, 57),
    (0xD06F, 51, 58), (0xD070, 68, 107), (0xD071, 51, 65), (0xD072, 51, 66), (0xD073, 51, 67),
    (0xD074, 68, 108), (0xD075, 51, 68), (0xD076, 51, 69), (0xD077, 51, 70), (0xD078, 51, 71),
    (0xD079, 51, 72), (0xD07A, 51, 73), (0xD07B, 51, 74), (0xD07C, 68, 109), (0xD07D, 68, 110),
    (0xD07E, 51, 75), (0xD07F, 51, 76), (0xD080, 51, 77), (0xD081, 68, 111), (0xD082, 51, 78),
    (0xD083, 51, 79), (0xD084, 51, 80), (0xD085, 51, 81), (0xD086, 51, 82), (0xD087, 51, 83),
    (0xD088, 51, 84), (0xD089, 51, 85), (0xD08A, 51, 86), (0xD08B, 51, 87), (0xD08C, 51, 88),
    (0xD08D, 51, 89), (0xD08E, 51, 90), (0xD08F, 51, 91), (0xD090, 51, 92), (0xD091, 51, 93),
    (0xD092, 51, 94), (0xD093, 51, 95), (0xD094, 51, 96), (0xD095, 52, 1), (0xD096, 52, 2),
    (0xD097, 52, 3), (0xD098, 52, 4), (0xD099, 52, 5), (0xD09A, 52, 6), (0xD09B, 52, 7),
    (0xD09C, 52, 8), (0xD09D, 52, 9), (0xD09E, 52, 10), (0xD09F, 52, 11), (0xD0A0, 52, 12),
    (0xD0A1, 52, 13), (0xD0A2, 52, 14), (0xD0A3, 52, 15), (0xD0A4, 68, 112), (0xD0A5, 68, 113),
    (0xD0A6, 52, 16), (0xD0A7, 52, 17), (0xD0A8, 68, 114), (0xD0A9, 52, 18), (0xD0AA, 52, 19),
    (0xD0AB, 52, 20), (0xD0AC, 68, 115), (0xD0AD, 52, 21), (0xD0AE, 52, 22), (0xD0AF, 52, 23),
    (0xD0B0, 52, 24), (0xD0B1, 52, 25), (0xD0B2, 52, 26), (0xD0B3, 52, 33), (0xD0B4, 68, 116),
    (0xD0B5, 68, 117), (0xD0B6, 52, 34), (0xD0B7, 68, 118), (0xD0B8, 52, 35), (0xD0B9, 68, 119),
    (0xD0BA, 52, 36), (0xD0BB, 52, 37), (0xD0BC, 52, 38), (0xD0BD, 52, 39), (0xD0BE, 52, 40),
    (0xD0BF, 52, 41), (0xD0C0, 68, 120), (0xD0C1, 68, 121), (0xD0C2, 52, 42), (0xD0C3, 52, 43),
    (0xD0C4, 68, 122), (0xD0C5, 52, 44), (0xD0C6, 52, 45), (0xD0C7, 52, 46), (0xD0C8, 68, 123),
    (0xD0C9, 68, 124), (0xD0CA, 52, 47), (0xD0CB, 52, 48), (0xD0CC, 52, 49), (0xD0CD, 52, 50),
    (0xD0CE, 52, 51), (0xD0CF, 52, 52), (0xD0D0, 68, 125), (0xD0D1, 68, 126), (0xD0D2, 52, 53),
    (0xD0D3, 68, 127), (0xD0D4, 68, 128), (0xD0D5, 68, 129), (0xD0D6, 52, 54), (0xD0D7, 52, 55),
    (0xD0D8, 52, 56), (0xD0D9, 52, 57), (0xD0DA, 52, 58), (0xD0DB, 52, 65), (0xD0DC, 68, 130),
    (0xD0DD, 68, 131), (0xD0DE, 52, 66), (0xD0DF, 52, 67), (0xD0E0, 68, 132), (0xD0E1, 52, 68),
    (0xD0E2, 52, 69), (0xD0E3, 52, 70), (0xD0E4, 68, 133), (0xD0E5, 52, 71), (0xD0E6, 52, 72),
    (0xD0E7, 52, 73), (0xD0E8, 52, 74), (0xD0E9, 52, 75), (0xD0EA, 52, 76), (0xD0EB, 52, 77),
    (0xD0EC, 68, 134), (0xD0ED, 68, 135), (0xD0EE, 52, 78), (0xD0EF, 68, 136), (0xD0F0, 68, 137),
    (0xD0F1, 68, 138), (0xD0F2, 52, 79), (0xD0F3, 52, 80), (0xD0F4, 52, 81), (0xD0F5, 52, 82),
    (0xD0F6, 52, 83), (0xD0F7, 52, 84), (0xD0F8, 68, 139), (0xD0F9, 52, 85), (0xD0FA, 52, 86),
    (0xD0FB, 52, 87), (0xD0FC, 52, 88), (0xD0FD, 52, 89), (0xD0FE, 52, 90), (0xD0FF, 52, 91),
    (0xD100, 52, 92), (0xD101, 52, 93), (0xD102, 52, 94), (0xD103, 52, 95), (0xD104, 52, 96),
    (0xD105, 53, 1), (0xD106, 53, 2), (0xD107, 53, 3), (0xD108, 53, 4), (0xD109, 53, 5),
    (0xD10A, 53, 6), (0xD10B, 53, 7), (0xD10C, 53, 8), (0xD10D, 68, 140), (0xD10E, 53, 9),
    (0xD10F, 53, 10), (0xD110, 53, 11), (0xD111, 53, 12), (0xD112, 53, 13), (0xD113, 53, 14),
    (0xD114, 53, 15), (0xD115, 53, 16), (0xD116, 53, 17), (0xD117, 53, 18), (0xD118, 53, 19),
    (0xD119, 53, 20), (0xD11A, 53, 21), (0xD11B, 53, 22), (0xD11C, 53, 23), (0xD11D, 53, 24),
    (0xD11E, 53, 25), (0xD11F, 53, 26), (0xD120, 53, 33), (0xD121, 53, 34), (0xD122, 53, 35),
    (0xD123, 53, 36), (0xD124, 53, 37), (0xD125, 53, 38), (0xD126, 53, 39), (0xD127, 53, 40),
    (0xD128, 53, 41), (0xD129, 53, 42), (0xD12A, 53, 43), (0xD12B, 53, 44), (0xD12C, 53, 45),
    (0xD12D, 53, 46), (0xD12E, 53, 47), (0xD12F, 53, 48), (0xD130, 68, 141), (0xD131, 68, 142),
    (0xD132, 53, 49), (0xD133, 53, 50), (0xD134, 68, 143), (0xD135, 53, 51), (0xD136, 53, 52),
    (0xD137, 53, 53), (0xD138, 68, 144), (0xD139, 53, 54), (0xD13A, 68, 145), (0xD13B, 53, 55),
    (0xD13C, 53, 56), (0xD13D, 53, 57), (0xD13E, 53, 58), (0xD13F, 53, 65), (0xD140, 68, 146),
    (0xD141, 68, 147), (0xD142, 53, 66), (0xD143, 68, 148), (0xD144, 68, 149), (0xD145, 68, 150),
    (0xD146, 53, 67), (0xD147, 53, 68), (0xD148, 53, 69), (0xD149, 53, 70), (0xD14A, 53, 71),
    (0xD14B, 53, 72), (0xD14C, 68, 151), (0xD14D, 68, 152), (0xD14E, 53, 73), (0xD14F, 53, 74),
    (0xD150, 68, 153), (0xD151, 53, 75), (0xD152, 53, 76), (0xD153, 53, 77), (0xD154, 68, 154),
    (0xD155, 53, 78), (0xD156, 53, 79), (0xD157, 53, 80), (0xD158, 53, 81), (0xD159, 53, 82),
    (0xD15A, 53, 83), (0xD15B, 53, 84), (0xD15C, 68, 155), (0xD15D, 68, 156), (0xD15E, 53, 85),
    (0xD15F, 68, 157), (0xD160, 53, 86), (0xD161, 68, 158), (0xD162, 53, 87), (0xD163, 53, 88),
    (0xD164, 53, 89), (0xD165, 53, 90), (0xD166, 53, 91), (0xD167, 53, 92), (0xD168, 68, 159),
    (0xD169, 53, 93), (0xD16A, 53, 94), (0xD16B, 53, 95), (0xD16C, 68, 160), (0xD16D, 53, 96),
    (0xD16E, 54, 1), (0xD16F, 54, 2), (0xD170, 54, 3), (0xD171, 54, 4), (0xD172, 54, 5),
    (0xD173, 54, 6), (0xD174, 54, 7), (0xD175, 54, 8), (0xD176, 54, 9), (0xD177, 54, 10),
    (0xD178, 54, 11), (0xD179, 54, 12), (0xD17A, 54, 13), (0xD17B, 54, 14), (0xD17C, 68, 161),
    (0xD17D, 54, 15), (0xD17E, 54, 16), (0xD17F, 54, 17), (0xD180, 54, 18), (0xD181, 54, 19),
    (0xD182, 54, 20), (0xD183, 54, 21), (0xD184, 68, 162), (0xD185, 54, 22), (0xD186, 54, 23),
    (0xD187, 54, 24), (0xD188, 68, 163), (0xD189, 54, 25), (0xD18A, 54, 26), (0xD18B, 54, 33),
    (0xD18C, 54, 34), (0xD18D, 54, 35), (0xD18E, 54, 36), (0xD18F, 54, 37), (0xD190, 54, 38),
    (0xD191, 54, 39), (0xD192, 54, 40), (0xD193, 54, 41), (0xD194, 54, 42), (0xD195, 54, 43),
    (0xD196, 54, 44), (0xD197, 54, 45), (0xD198, 54, 46), (0xD199, 54, 47), (0xD19A, 54, 48),
    (0xD19B, 54, 49), (0xD19C, 54, 50), (0xD19D, 54, 51), (0xD19E, 54, 52), (0xD19F, 54, 53),
    (0xD1A0, 68, 164), (0xD1A1, 68, 165), (0xD1A2, 54, 54), (0xD1A3, 54, 55), (0xD1A4, 68, 166),
    (0xD1A5, 54, 56), (0xD1A6, 54, 57), (0xD1A7, 54, 58), (0xD1A8, 68, 167), (0xD1A9, 54, 65),
    (0xD1AA, 54, 66), (0xD1AB, 54, 67), (0xD1AC, 54, 68), (0xD1AD, 54, 69), (0xD1AE, 54, 70),
    (0xD1AF, 54, 71), (0xD1B0, 68, 168), (0xD1B1, 68, 169), (0xD1B2, 54, 72), (0xD1B3, 68, 170),
    (0xD1B4, 54, 73), (0xD1B5, 68, 171), (0xD1B6, 54, 74), (0xD1B7, 54, 75), (0xD1B8, 54, 76),
    (0xD1B9, 54, 77), (0xD1BA, 68, 172), (0xD1BB, 54, 78), (0xD1BC, 68, 173), (0xD1BD, 54, 79),
    (0xD1BE, 54, 80), (0xD1BF, 54, 81), (0xD1C0, 68, 174), (0xD1C1, 54, 82), (0xD1C2, 54, 83),
    (0xD1C3, 54, 84), (0xD1C4, 54, 85), (0xD1C5, 54, 86), (0xD1C6, 54, 87), (0xD1C7, 54, 88),
    (0xD1C8, 54, 89), (0xD1C9, 54, 90), (0xD1CA, 54, 91), (0xD1CB, 54, 92), (0xD1CC, 54, 93),
    (0xD1CD, 54, 94), (0xD1CE, 54, 95), (0xD1CF, 54, 96), (0xD1D0, 55, 1), (0xD1D1, 55, 2),
    (0xD1D2, 55, 3), (0xD1D3, 55, 4), (0xD1D4, 55, 5), (0xD1D5, 55, 6), (0xD1D6, 55, 7),
    (0xD1D7, 55, 8), (0xD1D8, 68, 175), (0xD1D9, 55, 9), (0xD1DA, 55, 10), (0xD1DB, 55, 11),
    (0xD1DC, 55, 12), (0xD1DD, 55, 13), (0xD1DE, 55, 14), (0xD1DF, 55, 15), (0xD1E0, 55, 16),
    (0xD1E1, 55, 17), (0xD1E2, 55, 18), (0xD1E3, 55, 19), (0xD1E4, 55, 20), (0xD1E5, 55, 21),
    (0xD1E6, 55, 22), (0xD1E7, 55, 23), (0xD1E8, 55, 24), (0xD1E9, 55, 25), (0xD1EA, 55, 26),
    (0xD1EB, 55, 33), (0xD1EC, 55, 34), (0xD1ED, 55, 35), (0xD1EE, 55, 36), (0xD1EF, 55, 37),
    (0xD1F0, 55, 38), (0xD1F1, 55, 39), (0xD1F2, 55, 40), (0xD1F3, 55, 41), (0xD1F4, 68, 176),
    (0xD1F5, 55, 42), (0xD1F6, 55, 43), (0xD1F7, 55, 44), (0xD1F8, 68, 177), (0xD1F9, 55, 45),
    (0xD1FA, 55, 46), (0xD1FB, 55, 47), (0xD1FC, 55, 48), (0xD1FD, 55, 49), (0xD1FE, 55, 50),
    (0xD1FF, 55, 51), (0xD200, 55, 52), (0xD201, 55, 53), (0xD202, 55, 54), (0xD203, 55, 55),
    (0xD204, 55, 56), (0xD205, 55, 57), (0xD206, 55, 58), (0xD207, 68, 178), (0xD208, 55, 65),
    (0xD209, 68, 179), (0xD20A, 55, 66), (0xD20B, 55, 67), (0xD20C, 55, 68), (0xD20D, 55, 69),
    (0xD20E, 55, 70), (0xD20F, 55, 71), (0xD210, 68, 180), (0xD211, 55, 72), (0xD212, 55, 73),
    (0xD213, 55, 74), (0xD214, 55, 75), (0xD215, 55, 76), (0xD216, 55, 77), (0xD217, 55, 78),
    (0xD218, 55, 79), (0xD219, 55, 80), (0xD21A, 55, 81), (0xD21B, 55, 82), (0xD21C, 55, 83),
    (0xD21D, 55, 84), (0xD21E, 55, 85), (0xD21F, 55, 86), (0xD220, 55, 87), (0xD221, 55, 88),
    (0xD222, 55, 89), (0xD223, 55, 90), (0xD224, 55, 91), (0xD225, 55, 92), (0xD226, 55, 93),
    (0xD227, 55, 94), (0xD228, 55, 95), (0xD229, 55, 96), (0xD22A, 56, 1), (0xD22B, 56, 2),
    (0xD22C, 68, 181), (0xD22D, 68, 182), (0xD22E, 56, 3), (0xD22F, 56, 4), (0xD230, 68, 183),
    (0xD231, 56, 5), (0xD232, 56, 6), (0xD233, 56, 7), (0xD234, 68, 184), (0xD235, 56, 8),
    (0xD236, 56, 9), (0xD237, 56, 10), (0xD238, 56, 11), (0xD239, 56, 12), (0xD23A, 56, 13),
    (0xD23B, 56, 14), (0xD23C, 68, 185), (0xD23D, 68, 186), (0xD23E, 56, 15), (0xD23F, 68, 187),
    (0xD240, 56, 16), (0xD241, 68, 188), (0xD242, 56, 17), (0xD243, 56, 18), (0xD244, 56, 19),
    (0xD245, 56, 20), (0xD246, 56, 21), (0xD247, 56, 22), (0xD248, 68, 189), (0xD249, 56, 23),
    (0xD24A, 56, 24), (0xD24B, 56, 25), (0xD24C, 56, 26), (0xD24D, 56, 33), (0xD24E, 56, 34),
    (0xD24F, 56, 35), (0xD250, 56, 36), (0xD251, 56, 37), (0xD252, 56, 38), (0xD253, 56, 39),
    (0xD254, 56, 40), (0xD255, 56, 41), (0xD256, 56, 42), (0xD257, 56, 43), (0xD258, 56, 44),
    (0xD259, 56, 45), (0xD25A, 56, 46), (0xD25B, 56, 47), (0xD25C, 68, 190), (0xD25D, 56, 48),
    (0xD25E, 56, 49), (0xD25F, 56, 50), (0xD260, 56, 51), (0xD261, 56, 52), (0xD262, 56, 53),
    (0xD263, 56, 54), (0xD264, 69, 97), (0xD265, 56, 55), (0xD266, 56, 56), (0xD267, 56, 57),
    (0xD268, 56, 58), (0xD269, 56, 65), (0xD26A, 56, 66), (0xD26B, 56, 67), (0xD26C, 56, 68),
    (0xD26D, 56, 69), (0xD26E, 56, 70), (0xD26F, 56, 71), (0xD270, 56, 72), (0xD271, 56, 73),
    (0xD272, 56, 74), (0xD273, 56, 75), (0xD274, 56, 76), (0xD275, 56, 77), (0xD276, 56, 78),
    (0xD277, 56, 79), (0xD278, 56, 80), (0xD279, 56, 81), (0xD27A, 56, 82), (0xD27B, 56, 83),
    (0xD27C, 56, 84), (0xD27D, 56, 85), (0xD27E, 56, 86), (0xD27F, 56, 87), (0xD280, 69, 98),
    (0xD281, 69, 99), (0xD282, 56, 88), (0xD283, 56, 89), (0xD284, 69, 100), (0xD285, 56, 90),
    (0xD286, 56, 91), (0xD287, 56, 92), (0xD288, 69, 101), (0xD289, 56, 93), (0xD28A, 56, 94),
    (0xD28B, 56, 95), (0xD28C, 56, 96), (0xD28D, 57, 1), (0xD28E, 57, 2), (0xD28F, 57, 3),
    (0xD290, 69, 102), (0xD291, 69, 103), (0xD292, 57, 4), (0xD293, 57, 5), (0xD294, 57, 6),
    (0xD295, 69, 104), (0xD296, 57, 7), (0xD297, 57, 8), (0xD298, 57, 9), (0xD299, 57, 10),
    (0xD29A, 57, 11), (0xD29B, 57, 12), (0xD29C, 69, 105), (0xD29D, 57, 13), (0xD29E, 57, 14),
    (0xD29F, 57, 15), (0xD2A0, 69, 106), (0xD2A1, 57, 16), (0xD2A2, 57, 17), (0xD2A3, 57, 18),
    (0xD2A4, 69, 107), (0xD2A5, 57, 19), (0xD2A6, 57, 20), (0xD2A7, 57, 21), (0xD2A8, 57, 22),
    (0xD2A9, 57, 23), (0xD2AA, 57, 24), (0xD2AB, 57, 25), (0xD2AC, 69, 108), (0xD2AD, 57, 26),
    (0xD2AE, 57, 33), (0xD2AF, 57, 34), (0xD2B0, 57, 35), (0xD2B1, 69, 109), (0xD2B2, 57, 36),
    (0xD2B3, 57, 37), (0xD2B4, 57, 38), (0xD2B5, 57, 39), (0xD2B6, 57, 40), (0xD2B7, 57, 41),
    (0xD2B8, 69, 110), (0xD2B9, 69, 111), (0xD2BA, 57, 42), (0xD2BB, 57, 43), (0xD2BC, 69, 112),
    (0xD2BD, 57, 44), (0xD2BE, 57, 45), (0xD2BF, 69, 113), (0xD2C0, 69, 114), (0xD2C1, 57, 46),
    (0xD2C2, 69, 115), (0xD2C3, 57, 47), (0xD2C4, 57, 48), (0xD2C5, 57, 49), (0xD2C6, 57, 50),
    (0xD2C7, 57, 51), (0xD2C8, 69, 116), (0xD2C9, 69, 117), (0xD2CA, 57, 52), (0xD2CB, 69, 118),
    (0xD2CC, 57, 53), (0xD2CD, 57, 54), (0xD2CE, 57, 55), (0xD2CF, 57, 56), (0xD2D0, 57, 57),
    (0xD2D1, 57, 58), (0xD2D2, 57, 65), (0xD2D3, 57, 66), (0xD2D4, 69, 119), (0xD2D5, 57, 67),
    (0xD2D6, 57, 68), (0xD2D7, 57, 69), (0xD2D8, 69, 120), (0xD2D9, 57, 70), (0xD2DA, 57, 71),
    (0xD2DB, 57, 72), (0xD2DC, 69, 121), (0xD2DD, 57, 73), (0xD2DE, 57, 74), (0xD2DF, 57, 75),
    (0xD2E0, 57, 76), (0xD2E1, 57, 77), (0xD2E2, 57, 78), (0xD2E3, 57, 79), (0xD2E4, 69, 122),
    (0xD2E5, 69, 123), (0xD2E6, 57, 80), (0xD2E7, 57, 81), (0xD2E8, 57, 82), (0xD2E9, 57, 83),
    (0xD2EA, 57, 84), (0xD2EB, 57, 85), (0xD2EC, 57, 86), (0xD2ED, 57, 87), (0xD2EE, 57, 88),
    (0xD2EF, 57, 89), (0xD2F0, 69, 124), (0xD2F1, 69, 125), (0xD2F2, 57, 90), (0xD2F3, 57, 91),
    (0xD2F4, 69, 126), (0xD2F5, 57, 92), (0xD2F6, 57, 93), (0xD2F7, 57, 94), (0xD2F8, 69, 127),
    (0xD2F9, 57, 95), (0xD2FA, 57, 96), (0xD2FB, 58, 1), (0xD2FC, 58, 2), (0xD2FD, 58, 3),
    (0xD2FE, 58, 4), (0xD2FF, 58, 5), (0xD300, 69, 128), (0xD301, 69, 129), (0xD302, 58, 6),
    (0xD303, 69, 130), (0xD304, 58, 7), (0xD305, 69, 131), (0xD306, 58, 8), (0xD307, 58, 9),
    (0xD308, 58, 10), (0xD309, 58, 11), (0xD30A, 58, 12), (0xD30B, 58, 13), (0xD30C, 69, 132),
    (0xD30D, 69, 133), (0xD30E, 69, 134), (0xD30F, 58, 14), (0xD310, 69, 135), (0xD311, 58, 15),
    (0xD312, 58, 16), (0xD313, 58, 17), (0xD314, 69, 136), (0xD315, 58, 18), (0xD316, 69, 137),
    (0xD317, 58, 19), (0xD318, 58, 20), (0xD319, 58, 21), (0xD31A, 58, 22), (0xD31B, 58, 23),
    (0xD31C, 69, 138), (0xD31D, 69, 139), (0xD31E, 58, 24), (0xD31F, 69, 140), (0xD320, 69, 141),
    (0xD321, 69, 142), (0xD322, 58, 25), (0xD323, 58, 26), (0xD324, 58, 33), (0xD325, 69, 143),
    (0xD326, 58, 34), (0xD327, 58, 35), (0xD328, 69, 144), (0xD329, 69, 145), (0xD32A, 58, 36),
    (0xD32B, 58, 37), (0xD32C, 69, 146), (0xD32D, 58, 38), (0xD32E, 58, 39), (0xD32F, 58, 40),
    (0xD330, 69, 147), (0xD331, 58, 41), (0xD332, 58, 42), (0xD333, 58, 43), (0xD334, 58, 44),
    (0xD335, 58, 45), (0xD336, 58, 46), (0xD337, 58, 47), (0xD338, 69, 148), (0xD339, 69, 149),
    (0xD33A, 58, 48), (0xD33B, 69, 150), (0xD33C, 69, 151), (0xD33D, 69, 152), (0xD33E, 58, 49),
    (0xD33F, 58, 50), (0xD340, 58, 51), (0xD341, 58, 52), (0xD342, 58, 53), (0xD343, 58, 54),
    (0xD344, 69, 153), (0xD345, 69, 154), (0xD346, 58, 55), (0xD347, 58, 56), (0xD348, 58, 57),
    (0xD349, 58, 58), (0xD34A, 58, 65), (0xD34B, 58, 66), (0xD34C, 58, 67), (0xD34D, 58, 68),
    (0xD34E, 58, 69), (0xD34F, 58, 70), (0xD350, 58, 71), (0xD351, 58, 72), (0xD352, 58, 73),
    (0xD353, 58, 74), (0xD354, 58, 75), (0xD355, 58, 76), (0xD356, 58, 77), (0xD357, 58, 78),
    (0xD358, 58, 79), (0xD359, 58, 80), (0xD35A, 58, 81), (0xD35B, 58, 82), (0xD35C, 58, 83),
    (0xD35D, 58, 84), (0xD35E, 58, 85), (0xD35F, 58, 86), (0xD360, 58, 87), (0xD361, 58, 88),
    (0xD362, 58, 89), (0xD363, 58, 90), (0xD364, 58, 91), (0xD365, 58, 92), (0xD366, 58, 93),
    (0xD367, 58, 94), (0xD368, 58, 95), (0xD369, 58, 96), (0xD36A, 59, 1), (0xD36B, 59, 2),
    (0xD36C, 59, 3), (0xD36D, 59, 4), (0xD36E, 59, 5), (0xD36F, 59, 6), (0xD370, 59, 7),
    (0xD371, 59, 8), (0xD372, 59, 9), (0xD373, 59, 10), (0xD374, 59, 11), (0xD375, 59, 12),
    (0xD376, 59, 13), (0xD377, 59, 14), (0xD378, 59, 15), (0xD379, 59, 16), (0xD37A, 59, 17),
    (0xD37B, 59, 18), (0xD37C, 69, 155), (0xD37D, 69, 156), (0xD37E, 59, 19), (0xD37F, 59, 20),
    (0xD380, 69, 157), (0xD381, 59, 21), (0xD382, 59, 22), (0xD383, 59, 23), (0xD384, 69, 158),
    (0xD385, 59, 24), (0xD386, 59, 25), (0xD387, 59, 26), (0xD388, 59, 33), (0xD389, 59, 34),
    (0xD38A, 59, 35), (0xD38B, 59, 36), (0xD38C, 69, 159), (0xD38D, 69, 160), (0xD38E, 59, 37),
    (0xD38F, 69, 161), (0xD390, 69, 162), (0xD391, 69, 163), (0xD392, 59, 38), (0xD393, 59, 39),
    (0xD394, 59, 40), (0xD395, 59, 41), (0xD396, 59, 42), (0xD397, 59, 43), (0xD398, 69, 164),
    (0xD399, 69, 165), (0xD39A, 59, 44), (0xD39B, 59, 45), (0xD39C, 69, 166), (0xD39D, 59, 46),
    (0xD39E, 59, 47), (0xD39F, 59, 48), (0xD3A0, 69, 167), (0xD3A1, 59, 49), (0xD3A2, 59, 50),
    (0xD3A3, 59, 51), (0xD3A4, 59, 52), (0xD3A5, 59, 53), (0xD3A6, 59, 54), (0xD3A7, 59, 55),
    (0xD3A8, 69, 168), (0xD3A9, 69, 169), (0xD3AA, 59, 56), (0xD3AB, 69, 170), (0xD3AC, 59, 57),
    (0xD3AD, 69, 171), (0xD3AE, 59, 58), (0xD3AF, 59, 65), (0xD3B0, 59, 66), (0xD3B1, 59, 67),
    (0xD3B2, 59, 68), (0xD3B3, 59, 69), (0xD3B4, 69, 172), (0xD3B5, 59, 70), (0xD3B6, 59, 71),
    (0xD3B7, 59, 72), (0xD3B8, 69, 173), (0xD3B9, 59, 73), (0xD3BA, 59, 74), (0xD3BB, 59, 75),
    (0xD3BC, 69, 174), (0xD3BD, 59, 76), (0xD3BE, 59, 77), (0xD3BF, 59, 78), (0xD3C0, 59, 79),
    (0xD3C1, 59, 80), (0xD3C2, 59, 81), (0xD3C3, 59, 82), (0xD3C4, 69, 175), (0xD3C5, 69, 176),
    (0xD3C6, 59, 83), (0xD3C7, 59, 84), (0xD3C8, 69, 177), (0xD3C9, 69, 178), (0xD3CA, 59, 85),
    (0xD3CB, 59, 86), (0xD3CC, 59, 87), (0xD3CD, 59, 88), (0xD3CE, 59, 89), (0xD3CF, 59, 90),
    (0xD3D0, 69, 179), (0xD3D1, 59, 91), (0xD3D2, 59, 92), (0xD3D3, 59, 93), (0xD3D4, 59, 94),
    (0xD3D5, 59, 95), (0xD3D6, 59, 96), (0xD3D7, 60, 1), (0xD3D8, 69, 180), (0xD3D9, 60, 2),
    (0xD3DA, 60, 3), (0xD3DB, 60, 4), (0xD3DC, 60, 5), (0xD3DD, 60, 6), (0xD3DE, 60, 7),
    (0xD3DF, 60, 8), (0xD3E0, 60, 9), (0xD3E1, 69, 181), (0xD3E2, 60, 10), (0xD3E3, 69, 182),
    (0xD3E4, 60, 11), (0xD3E5, 60, 12), (0xD3E6, 60, 13), (0xD3E7, 60, 14), (0xD3E8, 60, 15),
    (0xD3E9, 60, 16), (0xD3EA, 60, 17), (0xD3EB, 60, 18), (0xD3EC, 69, 183), (0xD3ED, 69, 184),
    (0xD3EE, 60, 19), (0xD3EF, 60, 20), (0xD3F0, 69, 185), (0xD3F1, 60, 21), (0xD3F2, 60, 22),
    (0xD3F3, 60, 23), (0xD3F4, 69, 186), (0xD3F5, 60, 24), (0xD3F6, 60, 25), (0xD3F7, 60, 26),
    (0xD3F8, 60, 33), (0xD3F9, 60, 34), (0xD3FA, 60, 35), (0xD3FB, 60, 36), (0xD3FC, 69, 187),
    (0xD3FD, 69, 188), (0xD3FE, 60, 37), (0xD3FF, 69, 189), (0xD400, 60, 38), (0xD401, 69, 190),
    (0xD402, 60, 39), (0xD403, 60, 40), (0xD404, 60, 41), (0xD405, 60, 42), (0xD406, 60, 43),
    (0xD407, 60, 44), (0xD408, 70, 97), (0xD409, 60, 45), (0xD40A, 60, 46), (0xD40B, 60, 47),
    (0xD40C, 60, 48), (0xD40D, 60, 49), (0xD40E, 60, 50), (0xD40F, 60, 51), (0xD410, 60, 52),
    (0xD411, 60, 53), (0xD412, 60, 54), (0xD413, 60, 55), (0xD414, 60, 56), (0xD415, 60, 57),
    (0xD416, 60, 58), (0xD417, 60, 65), (0xD418, 60, 66), (0xD419, 60, 67), (0xD41A, 60, 68),
    (0xD41B, 60, 69), (0xD41C, 60, 70), (0xD41D, 70, 98), (0xD41E, 60, 71), (0xD41F, 60, 72),
    (0xD420, 60, 73), (0xD421, 60, 74), (0xD422, 60, 75), (0xD423, 60, 76), (0xD424, 60, 77),
    (0xD425, 60, 78), (0xD426, 60, 79), (0xD427, 60, 80), (0xD428, 60, 81), (0xD429, 60, 82),
    (0xD42A, 60, 83), (0xD42B, 60, 84), (0xD42C, 60, 85), (0xD42D, 60, 86), (0xD42E, 60, 87),
    (0xD42F, 60, 88), (0xD430, 60, 89), (0xD431, 60, 90), (0xD432, 60, 91), (0xD433, 60, 92),
    (0xD434, 60, 93), (0xD435, 60, 94), (0xD436, 60, 95), (0xD437, 60, 96), (0xD438, 61, 1),
    (0xD439, 61, 2), (0xD43A, 61, 3), (0xD43B, 61, 4), (0xD43C, 61, 5), (0xD43D, 61, 6),
    (0xD43E, 61, 7), (0xD43F, 61, 8), (0xD440, 70, 99), (0xD441, 61, 9), (0xD442, 61, 10),
    (0xD443, 61, 11), (0xD444, 70, 100), (0xD445, 61, 12), (0xD446, 61, 13), (0xD447, 61, 14),
    (0xD448, 61, 15), (0xD449, 61, 16), (0xD44A, 61, 17), (0xD44B, 61, 18), (0xD44C, 61, 19),
    (0xD44D, 61, 20), (0xD44E, 61, 21), (0xD44F, 61, 22), (0xD450, 61, 23), (0xD451, 61, 24),
    (0xD452, 61, 25), (0xD453, 61, 26), (0xD454, 61, 33), (0xD455, 61, 34), (0xD456, 61, 35),
    (0xD457, 61, 36), (0xD458, 61, 37), (0xD459, 61, 38), (0xD45A, 61, 39), (0xD45B, 61, 40),
    (0xD45C, 70, 101), (0xD45D, 61, 41), (0xD45E, 61, 42), (0xD45F, 61, 43), (0xD460, 70, 102),
    (0xD461, 61, 44), (0xD462, 61, 45), (0xD463, 61, 46), (0xD464, 70, 103), (0xD465, 61, 47),
    (0xD466, 61, 48), (0xD467, 61, 49), (0xD468, 61, 50), (0xD469, 61, 51), (0xD46A, 61, 52),
    (0xD46B, 61, 53), (0xD46C, 61, 54), (0xD46D, 70, 104), (0xD46E, 61, 55), (0xD46F, 70, 105),
    (0xD470, 61, 56), (0xD471, 61, 57), (0xD472, 61, 58), (0xD473, 61, 65), (0xD474, 61, 66),
    (0xD475, 61, 67), (0xD476, 61, 68), (0xD477, 61, 69), (0xD478, 70, 106), (0xD479, 70, 107),
    (0xD47A, 61, 70), (0xD47B, 61, 71), (0xD47C, 70, 108), (0xD47D, 61, 72), (0xD47E, 61, 73),
    (0xD47F, 70, 109), (0xD480, 70, 110), (0xD481, 61, 74), (0xD482, 70, 111), (0xD483, 61, 75),
    (0xD484, 61, 76), (0xD485, 61, 77), (0xD486, 61, 78), (0xD487, 61, 79), (0xD488, 70, 112),
    (0xD489, 70, 113), (0xD48A, 61, 80), (0xD48B, 70, 114), (0xD48C, 61, 81), (0xD48D, 70, 115),
    (0xD48E, 61, 82), (0xD48F, 61, 83), (0xD490, 61, 84), (0xD491, 61, 85), (0xD492, 61, 86),
    (0xD493, 61, 87), (0xD494, 70, 116), (0xD495, 61, 88), (0xD496, 61, 89), (0xD497, 61, 90),
    (0xD498, 61, 91), (0xD499, 61, 92), (0xD49A, 61, 93), (0xD49B, 61, 94), (0xD49C, 61, 95),
    (0xD49D, 61, 96), (0xD49E, 62, 1), (0xD49F, 62, 2), (0xD4A0, 62, 3), (0xD4A1, 62, 4),
    (0xD4A2, 62, 5), (0xD4A3, 62, 6), (0xD4A4, 62, 7), (0xD4A5, 62, 8), (0xD4A6, 62, 9),
    (0xD4A7, 62, 10), (0xD4A8, 62, 11), (0xD4A9, 70, 117), (0xD4AA, 62, 12), (0xD4AB, 62, 13),
    (0xD4AC, 62, 14), (0xD4AD, 62, 15), (0xD4AE, 62, 16), (0xD4AF, 62, 17), (0xD4B0, 62, 18),
    (0xD4B1, 62, 19), (0xD4B2, 62, 20), (0xD4B3, 62, 21), (0xD4B4, 62, 22), (0xD4B5, 62, 23),
    (0xD4B6, 62, 24), (0xD4B7, 62, 25), (0xD4B8, 62, 26), (0xD4B9, 62, 33), (0xD4BA, 62, 34),
    (0xD4BB, 62, 35), (0xD4BC, 62, 36), (0xD4BD, 62, 37), (0xD4BE, 62, 38), (0xD4BF, 62, 39),
    (0xD4C0, 62, 40), (0xD4C1, 62, 41), (0xD4C2, 62, 42), (0xD4C3, 62, 43), (0xD4C4, 62, 44),
    (0xD4C5, 62, 45), (0xD4C6, 62, 46), (0xD4C7, 62, 47), (0xD4C8, 62, 48), (0xD4C9, 62, 49),
    (0xD4CA, 62, 50), (0xD4CB, 62, 51), (0xD4CC, 70, 118), (0xD4CD, 62, 52), (0xD4CE, 62, 53),
    (0xD4CF, 62, 54), (0xD4D0, 70, 119), (0xD4D1, 62, 55), (0xD4D2, 62, 56), (0xD4D3, 62, 57),
    (0xD4D4, 70, 120), (0xD4D5, 62, 58), (0xD4D6, 62, 65), (0xD4D7, 62, 66), (0xD4D8, 62, 67),
    (0xD4D9, 62, 68), (0xD4DA, 62, 69), (0xD4DB, 62, 70), (0xD4DC, 70, 121), (0xD4DD, 62, 71),
    (0xD4DE, 62, 72), (0xD4DF, 70, 122), (0xD4E0, 62, 73), (0xD4E1, 62, 74), (0xD4E2, 62, 75),
    (0xD4E3, 62, 76), (0xD4E4, 62, 77), (0xD4E5, 62, 78), (0xD4E6, 62, 79), (0xD4E7, 62, 80),
    (0xD4E8, 70, 123), (0xD4E9, 62, 81), (0xD4EA, 62, 82), (0xD4EB, 62, 83), (0xD4EC, 70, 124),
    (0xD4ED, 62, 84), (0xD4EE, 62, 85), (0xD4EF, 62, 86), (0xD4F0, 70, 125), (0xD4F1, 62, 87),
    (0xD4F2, 62, 88), (0xD4F3, 62, 89), (0xD4F4, 62, 90), (0xD4F5, 62, 91), (0xD4F6, 62, 92),
    (0xD4F7, 62, 93), (0xD4F8, 70, 126), (0xD4F9, 62, 94), (0xD4FA, 62, 95), (0xD4FB, 70, 127),
    (0xD4FC, 62, 96), (0xD4FD, 70, 128), (0xD4FE, 63, 1), (0xD4FF, 63, 2), (0xD500, 63, 3),
    (0xD501, 63, 4), (0xD502, 63, 5), (0xD503, 63, 6), (0xD504, 70, 129), (0xD505, 63, 7),
    (0xD506, 63, 8), (0xD507, 63, 9), (0xD508, 70, 130), (0xD509, 63, 10), (0xD50A, 63, 11),
    (0xD50B, 63, 12), (0xD50C, 70, 131), (0xD50D, 63, 13), (0xD50E, 63, 14), (0xD50F, 63, 15),
    (0xD510, 63, 16), (0xD511, 63, 17), (0xD512, 63, 18), (0xD513, 63, 19), (0xD514, 70, 132),
    (0xD515, 70, 133), (0xD516, 63, 20), (0xD517, 70, 134), (0xD518, 63, 21), (0xD519, 63, 22),
    (0xD51A, 63, 23), (0xD51B, 63, 24), (0xD51C, 63, 25), (0xD51D, 63, 26), (0xD51E, 63, 33),
    (0xD51F, 63, 34), (0xD520, 63, 35), (0xD521, 63, 36), (0xD522, 63, 37), (0xD523, 63, 38),
    (0xD524, 63, 39), (0xD525, 63, 40), (0xD526, 63, 41), (0xD527, 63, 42), (0xD528, 63, 43),
    (0xD529, 63, 44), (0xD52A, 63, 45), (0xD52B, 63, 46), (0xD52C, 63, 47), (0xD52D, 63, 48),
    (0xD52E, 63, 49), (0xD52F, 63, 50), (0xD530, 63, 51), (0xD531, 63, 52), (0xD532, 63, 53),
    (0xD533, 63, 54), (0xD534, 63, 55), (0xD535, 63, 56), (0xD536, 63, 57), (0xD537, 63, 58),
    (0xD538, 63, 65), (0xD539, 63, 66), (0xD53A, 63, 67), (0xD53B, 63, 68), (0xD53C, 70, 135),
    (0xD53D, 70, 136), (0xD53E, 63, 69), (0xD53F, 63, 70), (0xD540, 70, 137), (0xD541, 63, 71),
    (0xD542, 63, 72), (0xD543, 63, 73), (0xD544, 70, 138), (0xD545, 63, 74), (0xD546, 63, 75),
    (0xD547, 63, 76), (0xD548, 63, 77), (0xD549, 63, 78), (0xD54A, 63, 79), (0xD54B, 63, 80),
    (0xD54C, 70, 139), (0xD54D, 70, 140), (0xD54E, 63, 81), (0xD54F, 70, 141), (0xD550, 63, 82),
    (0xD551, 70, 142), (0xD552, 63, 83), (0xD553, 63, 84), (0xD554, 63, 85), (0xD555, 63, 86),
    (0xD556, 63, 87), (0xD557, 63, 88), (0xD558, 70, 143), (0xD559, 70, 144), (0xD55A, 63, 89),
    (0xD55B, 63, 90), (0xD55C, 70, 145), (0xD55D, 63, 91), (0xD55E, 63, 92), (0xD55F, 63, 93),
    (0xD560, 70, 146), (0xD561, 63, 94), (0xD562, 63, 95), (0xD563, 63, 96), (0xD564, 64, 1),
    (0xD565, 70, 147), (0xD566, 64, 2), (0xD567, 64, 3), (0xD568, 70, 148), (0xD569, 70, 149),
    (0xD56A, 64, 4), (0xD56B, 70, 150), (0xD56C, 64, 5), (0xD56D, 70, 151), (0xD56E, 64, 6),
    (0xD56F, 64, 7), (0xD570, 64, 8), (0xD571, 64, 9), (0xD572, 64, 10), (0xD573, 64, 11),
    (0xD574, 70, 152), (0xD575, 70, 153), (0xD576, 64, 12), (0xD577, 64, 13), (0xD578, 70, 154),
    (0xD579, 64, 14), (0xD57A, 64, 15), (0xD57B, 64, 16), (0xD57C, 70, 155), (0xD57D, 64, 17),
    (0xD57E, 64, 18), (0xD57F, 64, 19), (0xD580, 64, 20), (0xD581, 64, 21), (0xD582, 64, 22),
    (0xD583, 64, 23), (0xD584, 70, 156), (0xD585, 70, 157), (0xD586, 64, 24), (0xD587, 70, 158),
    (0xD588, 70, 159), (0xD589, 70, 160), (0xD58A, 64, 25), (0xD58B, 64, 26), (0xD58C, 64, 33),
    (0xD58D, 64, 34), (0xD58E, 64, 35), (0xD58F, 64, 36), (0xD590, 70, 161), (0xD591, 64, 37),
    (0xD592, 64, 38), (0xD593, 64, 39), (0xD594, 64, 40), (0xD595, 64, 41), (0xD596, 64, 42),
    (0xD597, 64, 43), (0xD598, 64, 44), (0xD599, 64, 45), (0xD59A, 64, 46), (0xD59B, 64, 47),
    (0xD59C, 64, 48), (0xD59D, 64, 49), (0xD59E, 64, 50), (0xD59F, 64, 51), (0xD5A0, 64, 52),
    (0xD5A1, 64, 53), (0xD5A2, 64, 54), (0xD5A3, 64, 55), (0xD5A4, 64, 56), (0xD5A5, 70, 162),
    (0xD5A6, 64, 57), (0xD5A7, 64, 58), (0xD5A8, 64, 65), (0xD5A9, 64, 66), (0xD5AA, 64, 67),
    (0xD5AB, 64, 68), (0xD5AC, 64, 69), (0xD5AD, 64, 70), (0xD5AE, 64, 71), (0xD5AF, 64, 72),
    (0xD5B0, 64, 73), (0xD5B1, 64, 74), (0xD5B2, 64, 75), (0xD5B3, 64, 76), (0xD5B4, 64, 77),
    (0xD5B5, 64, 78), (0xD5B6, 64, 79), (0xD5B7, 64, 80), (0xD5B8, 64, 81), (0xD5B9, 64, 82),
    (0xD5BA, 64, 83), (0xD5BB, 64, 84), (0xD5BC, 64, 85), (0xD5BD, 64, 86), (0xD5BE, 64, 87),
    (0xD5BF, 64, 88), (0xD5C0, 64, 89), (0xD5C1, 64, 90), (0xD5C2, 64, 91), (0xD5C3, 64, 92),
    (0xD5C4, 64, 93), (0xD5C5, 64, 94), (0xD5C6, 64, 95), (0xD5C7, 64, 96), (0xD5C8, 70, 163),
    (0xD5C9, 70, 164), (0xD5CA, 65, 1), (0xD5CB, 65, 2), (0xD5CC, 70, 165), (0xD5CD, 65, 3),
    (0xD5CE, 65, 4), (0xD5CF, 65, 5), (0xD5D0, 70, 166), (0xD5D1, 65, 6), (0xD5D2, 70, 167),
    (0xD5D3, 65, 7), (0xD5D4, 65, 8), (0xD5D5, 65, 9), (0xD5D6, 65, 10), (0xD5D7, 65, 11),
    (0xD5D8, 70, 168), (0xD5D9, 70, 169), (0xD5DA, 65, 12), (0xD5DB, 70, 170), (0xD5DC, 65, 13),
    (0xD5DD, 70, 171), (0xD5DE, 65, 14), (0xD5DF, 65, 15), (0xD5E0, 65, 16), (0xD5E1, 65, 17),
    (0xD5E2, 65, 18), (0xD5E3, 65, 19), (0xD5E4, 70, 172), (0xD5E5, 70, 173), (0xD5E6, 65, 20),
    (0xD5E7, 65, 21), (0xD5E8, 70, 174), (0xD5E9, 65, 22), (0xD5EA, 65, 23), (0xD5EB, 65, 24),
    (0xD5EC, 70, 175), (0xD5ED, 65, 25), (0xD5EE, 65, 26), (0xD5EF, 65, 33), (0xD5F0, 65, 34),
    (0xD5F1, 65, 35), (0xD5F2, 65, 36), (0xD5F3, 65, 37), (0xD5F4, 70, 176), (0xD5F5, 70, 177),
    (0xD5F6, 65, 38), (0xD5F7, 70, 178), (0xD5F8, 65, 39), (0xD5F9, 70, 179), (0xD5FA, 65, 40),
    (0xD5FB, 65, 41), (0xD5FC, 65, 42), (0xD5FD, 65, 43), (0xD5FE, 65, 44), (0xD5FF, 65, 45),
    (0xD600, 70, 180), (0xD601, 70, 181), (0xD602, 65, 46), (0xD603, 65, 47), (0xD604, 70, 182),
    (0xD605, 65, 48), (0xD606, 65, 49), (0xD607, 65, 50), (0xD608, 70, 183), (0xD609, 65, 51),
    (0xD60A, 65, 52), (0xD60B, 65, 53), (0xD60C, 65, 54), (0xD60D, 65, 55), (0xD60E, 65, 56),
    (0xD60F, 65, 57), (0xD610, 70, 184), (0xD611, 70, 185), (0xD612, 65, 58), (0xD613, 70, 186),
    (0xD614, 70, 187), (0xD615, 70, 188), (0xD616, 65, 65), (0xD617, 65, 66), (0xD618, 65, 67),
    (0xD619, 65, 68), (0xD61A, 65, 69), (0xD61B, 65, 70), (0xD61C, 70, 189), (0xD61D, 65, 71),
    (0xD61E, 65, 72), (0xD61F, 65, 73), (0xD620, 70, 190), (0xD621, 65, 74), (0xD622, 65, 75),
    (0xD623, 65, 76), (0xD624, 71, 97), (0xD625, 65, 77), (0xD626, 65, 78), (0xD627, 65, 79),
    (0xD628, 65, 80), (0xD629, 65, 81), (0xD62A, 65, 82), (0xD62B, 65, 83), (0xD62C, 65, 84),
    (0xD62D, 71, 98), (0xD62E, 65, 85), (0xD62F, 65, 86), (0xD630, 65, 87), (0xD631, 65, 88),
    (0xD632, 65, 89), (0xD633, 65, 90), (0xD634, 65, 91), (0xD635, 65, 92), (0xD636, 65, 93),
    (0xD637, 65, 94), (0xD638, 71, 99), (0xD639, 71, 100), (0xD63A, 65, 95), (0xD63B, 65, 96),
    (0xD63C, 71, 101), (0xD63D, 66, 1), (0xD63E, 66, 2), (0xD63F, 66, 3), (0xD640, 71, 102),
    (0xD641, 66, 4), (0xD642, 66, 5), (0xD643, 66, 6), (0xD644, 66, 7), (0xD645, 71, 103),
    (0xD646, 66, 8), (0xD647, 66, 9), (0xD648, 71, 104), (0xD649, 71, 105), (0xD64A, 66, 10),
    (0xD64B, 71, 106), (0xD64C, 66, 11), (0xD64D, 71, 107), (0xD64E, 66, 12), (0xD64F, 66, 13),
    (0xD650, 66, 14), (0xD651, 71, 108), (0xD652, 66, 15), (0xD653, 66, 16), (0xD654, 71, 109),
    (0xD655, 71, 110), (0xD656, 66, 17), (0xD657, 66, 18), (0xD658, 71, 111), (0xD659, 66, 19),
    (0xD65A, 66, 20), (0xD65B, 66, 21), (0xD65C, 71, 112), (0xD65D, 66, 22), (0xD65E, 66, 23),
    (0xD65F, 66, 24), (0xD660, 66, 25), (0xD661, 66, 26), (0xD662, 66, 33), (0xD663, 66, 34),
    (0xD664, 66, 35), (0xD665, 66, 36), (0xD666, 66, 37), (0xD667, 71, 113), (0xD668, 66, 38),
    (0xD669, 71, 114), (0xD66A, 66, 39), (0xD66B, 66, 40), (0xD66C, 66, 41), (0xD66D, 66, 42),
    (0xD66E, 66, 43), (0xD66F, 66, 44), (0xD670, 71, 115), (0xD671, 71, 116), (0xD672, 66, 45),
    (0xD673, 66, 46), (0xD674, 71, 117), (0xD675, 66, 47), (0xD676, 66, 48), (0xD677, 66, 49),
    (0xD678, 66, 50), (0xD679, 66, 51), (0xD67A, 66, 52), (0xD67B, 66, 53), (0xD67C, 66, 54),
    (0xD67D, 66, 55), (0xD67E, 66, 56), (0xD67F, 66, 57), (0xD680, 66, 58), (0xD681, 66, 65),
    (0xD682, 66, 66), (0xD683, 71, 118), (0xD684, 66, 67), (0xD685, 71, 119), (0xD686, 66, 68),
    (0xD687, 66, 69), (0xD688, 66, 70), (0xD689, 66, 71), (0xD68A, 66, 72), (0xD68B, 66, 73),
    (0xD68C, 71, 120), (0xD68D, 71, 121), (0xD68E, 66, 74), (0xD68F, 66, 75), (0xD690, 71, 122),
    (0xD691, 66, 76), (0xD692, 66, 77), (0xD693, 66, 78), (0xD694, 71, 123), (0xD695, 66, 79),
    (0xD696, 66, 80), (0xD697, 66, 81), (0xD698, 66, 82), (0xD699, 66, 83), (0xD69A, 66, 84),
    (0xD69B, 66, 85), (0xD69C, 66, 86), (0xD69D, 71, 124), (0xD69E, 66, 87), (0xD69F, 71, 125),
    (0xD6A0, 66, 88), (0xD6A1, 71, 126), (0xD6A2, 66, 89), (0xD6A3, 66, 90), (0xD6A4, 66, 91),
    (0xD6A5, 66, 92), (0xD6A6, 66, 93), (0xD6A7, 66, 94), (0xD6A8, 71, 127), (0xD6A9, 66, 95),
    (0xD6AA, 66, 96), (0xD6AB, 67, 1), (0xD6AC, 71, 128), (0xD6AD, 67, 2), (0xD6AE, 67, 3),
    (0xD6AF, 67, 4), (0xD6B0, 71, 129), (0xD6B1, 67, 5), (0xD6B2, 67, 6), (0xD6B3, 67, 7),
    (0xD6B4, 67, 8), (0xD6B5, 67, 9), (0xD6B6, 67, 10), (0xD6B7, 67, 11), (0xD6B8, 67, 12),
    (0xD6B9, 71, 130), (0xD6BA, 67, 13), (0xD6BB, 71, 131), (0xD6BC, 67, 14), (0xD6BD, 67, 15),
    (0xD6BE, 67, 16), (0xD6BF, 67, 17), (0xD6C0, 67, 18), (0xD6C1, 67, 19), (0xD6C2, 67, 20),
    (0xD6C3, 67, 21), (0xD6C4, 71, 132), (0xD6C5, 71, 133), (0xD6C6, 67, 22), (0xD6C7, 67, 23),
    (0xD6C8, 71, 134), (0xD6C9, 67, 24), (0xD6CA, 67, 25), (0xD6CB, 67, 26), (0xD6CC, 71, 135),
    (0xD6CD, 67, 33), (0xD6CE, 67, 34), (0xD6CF, 67, 35), (0xD6D0, 67, 36), (0xD6D1, 71, 136),
    (0xD6D2, 67, 37), (0xD6D3, 67, 38), (0xD6D4, 71, 137), (0xD6D5, 67, 39), (0xD6D6, 67, 40),
    (0xD6D7, 71, 138), (0xD6D8, 67, 41), (0xD6D9, 71, 139), (0xD6DA, 67, 42), (0xD6DB, 67, 43),
    (0xD6DC, 67, 44), (0xD6DD, 67, 45), (0xD6DE, 67, 46), (0xD6DF, 67, 47), (0xD6E0, 71, 140),
    (0xD6E1, 67, 48), (0xD6E2, 67, 49), (0xD6E3, 67, 50), (0xD6E4, 71, 141), (0xD6E5, 67, 51),
    (0xD6E6, 67, 52), (0xD6E7, 67, 53), (0xD6E8, 71, 142), (0xD6E9, 67, 54), (0xD6EA, 67, 55),
    (0xD6EB, 67, 56), (0xD6EC, 67, 57), (0xD6ED, 67, 58), (0xD6EE, 67, 65), (0xD6EF, 67, 66),
    (0xD6F0, 71, 143), (0xD6F1, 67, 67), (0xD6F2, 67, 68), (0xD6F3, 67, 69), (0xD6F4, 67, 70),
    (0xD6F5, 71, 144), (0xD6F6, 67, 71), (0xD6F7, 67, 72), (0xD6F8, 67, 73), (0xD6F9, 67, 74),
    (0xD6FA, 67, 75), (0xD6FB, 67, 76), (0xD6FC, 71, 145), (0xD6FD, 71, 146), (0xD6FE, 67, 77),
    (0xD6FF, 67, 78), (0xD700, 71, 147), (0xD701, 67, 79), (0xD702, 67, 80), (0xD703, 67, 81),
    (0xD704, 71, 148), (0xD705, 67, 82), (0xD706, 67, 83), (0xD707, 67, 84), (0xD708, 67, 85),
    (0xD709, 67, 86), (0xD70A, 67, 87), (0xD70B, 67, 88), (0xD70C, 67, 89), (0xD70D, 67, 90),
    (0xD70E, 67, 91), (0xD70F, 67, 92), (0xD710, 67, 93), (0xD711, 71, 149), (0xD712, 67, 94),
    (0xD713, 67, 95), (0xD714, 67, 96), (0xD715, 68, 1), (0xD716, 68, 2), (0xD717, 68, 3),
    (0xD718, 71, 150), (0xD719, 71, 151), (0xD71A, 68, 4), (0xD71B, 68, 5), (0xD71C, 71, 152),
    (0xD71D, 68, 6), (0xD71E, 68, 7), (0xD71F, 68, 8), (0xD720, 71, 153), (0xD721, 68, 9),
    (0xD722, 68, 10), (0xD723, 68, 11), (0xD724, 68, 12), (0xD725, 68, 13), (0xD726, 68, 14),
    (0xD727, 68, 15), (0xD728, 71, 154), (0xD729, 71, 155), (0xD72A, 68, 16), (0xD72B, 71, 156),
    (0xD72C, 68, 17), (0xD72D, 71, 157), (0xD72E, 68, 18), (0xD72F, 68, 19), (0xD730, 68, 20),
    (0xD731, 68, 21), (0xD732, 68, 22), (0xD733, 68, 23), (0xD734, 71, 158), (0xD735, 71, 159),
    (0xD736, 68, 24), (0xD737, 68, 25), (0xD738, 71, 160), (0xD739, 68, 26), (0xD73A, 68, 33),
    (0xD73B, 68, 34), (0xD73C, 71, 161), (0xD73D, 68, 35), (0xD73E, 68, 36), (0xD73F, 68, 37),
    (0xD740, 68, 38), (0xD741, 68, 39), (0xD742, 68, 40), (0xD743, 68, 41), (0xD744, 71, 162),
    (0xD745, 68, 42), (0xD746, 68, 43), (0xD747, 71, 163), (0xD748, 68, 44), (0xD749, 71, 164),
    (0xD74A, 68, 45), (0xD74B, 68, 46), (0xD74C, 68, 47), (0xD74D, 68, 48), (0xD74E, 68, 49),
    (0xD74F, 68, 50), (0xD750, 71, 165), (0xD751, 71, 166), (0xD752, 68, 51), (0xD753, 68, 52),
    (0xD754, 71, 167), (0xD755, 68, 53), (0xD756, 71, 168), (0xD757, 71, 169), (0xD758, 71, 170),
    (0xD759, 71, 171), (0xD75A, 68, 54), (0xD75B, 68, 55), (0xD75C, 68, 56), (0xD75D, 68, 57),
    (0xD75E, 68, 58), (0xD75F, 68, 65), (0xD760, 71, 172), (0xD761, 71, 173), (0xD762, 68, 66),
    (0xD763, 71, 174), (0xD764, 68, 67), (0xD765, 71, 175), (0xD766, 68, 68), (0xD767, 68, 69),
    (0xD768, 68, 70), (0xD769, 71, 176), (0xD76A, 68, 71), (0xD76B, 68, 72), (0xD76C, 71, 177),
    (0xD76D, 68, 73), (0xD76E, 68, 74), (0xD76F, 68, 75), (0xD770, 71, 178), (0xD771, 68, 76),
    (0xD772, 68, 77), (0xD773, 68, 78), (0xD774, 71, 179), (0xD775, 68, 79), (0xD776, 68, 80),
    (0xD777, 68, 81), (0xD778, 68, 82), (0xD779, 68, 83), (0xD77A, 68, 84), (0xD77B, 68, 85),
    (0xD77C, 71, 180), (0xD77D, 71, 181), (0xD77E, 68, 86), (0xD77F, 68, 87), (0xD780, 68, 88),
    (0xD781, 71, 182), (0xD782, 68, 89), (0xD783, 68, 90), (0xD784, 68, 91), (0xD785, 68, 92),
    (0xD786, 68, 93), (0xD787, 68, 94), (0xD788, 71, 183), (0xD789, 71, 184), (0xD78A, 68, 95),
    (0xD78B, 68, 96), (0xD78C, 71, 185), (0xD78D, 69, 1), (0xD78E, 69, 2), (0xD78F, 69, 3),
    (0xD790, 71, 186), (0xD791, 69, 4), (0xD792, 69, 5), (0xD793, 69, 6), (0xD794, 69, 7),
    (0xD795, 69, 8), (0xD796, 69, 9), (0xD797, 69, 10), (0xD798, 71, 187), (0xD799, 71, 188),
    (0xD79A, 69, 11), (0xD79B, 71, 189), (0xD79C, 69, 12), (0xD79D, 71, 190), (0xD79E, 69, 13),
    (0xD79F, 69, 14), (0xD7A0, 69, 15), (0xD7A1, 69, 16), (0xD7A2, 69, 17), (0xD7A3, 69, 18),
    (0xF900, 74, 144), (0xF901, 74, 150), (0xF902, 74, 167), (0xF903, 76, 143), (0xF904, 76, 168),
    (0xF905, 77, 109), (0xF906, 78, 187), (0xF907, 79, 98), (0xF908, 79, 120), (0xF909, 79, 144),
    (0xF90A, 79, 157), (0xF90B, 80, 148), (0xF90C, 80, 149), (0xF90D, 80, 152), (0xF90E, 80, 155),
    (0xF90F, 80, 156), (0xF910, 80, 157), (0xF911, 80, 158), (0xF912, 80, 159), (0xF913, 80, 160),
    (0xF914, 80, 162), (0xF915, 80, 163), (0xF916, 80, 164), (0xF917, 80, 165), (0xF918, 80, 166),
    (0xF919, 80, 168), (0xF91A, 80, 169), (0xF91B, 80, 170), (0xF91C, 80, 171), (0xF91D, 80, 173),
    (0xF91E, 80, 175), (0xF91F, 80, 176), (0xF920, 80, 178), (0xF921, 80, 182), (0xF922, 80, 186),
    (0xF923, 80, 188), (0xF924, 80, 189), (0xF925, 80, 190), (0xF926, 81, 98), (0xF927, 81, 99),
    (0xF928, 81, 103), (0xF929, 81, 104), (0xF92A, 81, 105), (0xF92B, 81, 106), (0xF92C, 81, 107),
    (0xF92D, 81, 109), (0xF92E, 81, 114), (0xF92F, 81, 126), (0xF930, 81, 130), (0xF931, 81, 131),
    (0xF932, 81, 132), (0xF933, 81, 134), (0xF934, 81, 135), (0xF935, 81, 136), (0xF936, 81, 137),
    (0xF937, 81, 138), (0xF938, 81, 139), (0xF939, 81, 141), (0xF93A, 81, 142), (0xF93B, 81, 143),
    (0xF93C, 81, 144), (0xF93D, 81, 145), (0xF93E, 81, 146), (0xF93F, 81, 147), (0xF940, 81, 148),
    (0xF941, 81, 149), (0xF942, 81, 150), (0xF943, 81, 151), (0xF944, 81, 153), (0xF945, 81, 154),
    (0xF946, 81, 158), (0xF947, 81, 159), (0xF948, 81, 161), (0xF949, 81, 162), (0xF94A, 81, 164),
    (0xF94B, 81, 165), (0xF94C, 81, 166), (0xF94D, 81, 167), (0xF94E, 81, 168), (0xF94F, 81, 169),
    (0xF950, 81, 170), (0xF951, 81, 171), (0xF952, 81, 176), (0xF953, 81, 177), (0xF954, 81, 178),
    (0xF955, 81, 179), (0xF956, 81, 180), (0xF957, 81, 181), (0xF958, 81, 183), (0xF959, 81, 184),
    (0xF95A, 83, 166), (0xF95B, 83, 188), (0xF95C, 84, 101), (0xF95D, 84, 107), (0xF95E, 84, 110),
    (0xF95F, 85, 120), (0xF960, 85, 141), (0xF961, 86, 139), (0xF962, 86, 164), (0xF963, 90, 133),
    (0xF964, 90, 164), (0xF965, 91, 101), (0xF966, 92, 101), (0xF967, 92, 149), (0xF968, 92, 180),
    (0xF969, 93, 188), (0xF96A, 93, 190), (0xF96B, 94, 115), (0xF96C, 94, 161), (0xF96D, 94, 168),
    (0xF96E, 95, 177), (0xF96F, 96, 109), (0xF970, 96, 173), (0xF971, 98, 181), (0xF972, 99, 97),
    (0xF973, 99, 105), (0xF974, 100, 110), (0xF975, 100, 113), (0xF976, 100, 114), (0xF977, 100, 121),
    (0xF978, 100, 123), (0xF979, 100, 124), (0xF97A, 100, 132), (0xF97B, 100, 142), (0xF97C, 100, 144),
    (0xF97D, 100, 146), (0xF97E, 100, 150), (0xF97F, 100, 186), (0xF980, 100, 187), (0xF981, 100, 188),
    (0xF982, 100, 190), (0xF983, 101, 97), (0xF984, 101, 100), (0xF985, 101, 103), (0xF986, 101, 109),
    (0xF987, 101, 111), (0xF988, 101, 112), (0xF989, 101, 113), (0xF98A, 101, 115), (0xF98B, 101, 119),
    (0xF98C, 101, 120), (0xF98D, 101, 124), (0xF98E, 101, 132), (0xF98F, 101, 134), (0xF990, 101, 135),
    (0xF991, 101, 138), (0xF992, 101, 146), (0xF993, 101, 150), (0xF994, 101, 153), (0xF995, 101, 156),
    (0xF996, 101, 159), (0xF997, 101, 161), (0xF998, 101, 164), (0xF999, 101, 165), (0xF99A, 101, 166),
    (0xF99B, 101, 168), (0xF99C, 101, 170), (0xF99D, 101, 171), (0xF99E, 101, 172), (0xF99F, 101, 175),
    (0xF9A0, 101, 177), (0xF9A1, 101, 178), (0xF9A2, 101, 181), (0xF9A3, 101, 182), (0xF9A4, 101, 183),
    (0xF9A5, 101, 185), (0xF9A6, 102, 97), (0xF9A7, 102, 102), (0xF9A8, 102, 105), (0xF9A9, 102, 106),
    (0xF9AA, 102, 108), (0xF9AB, 102, 109), (0xF9AC, 102, 112), (0xF9AD, 102, 127), (0xF9AE, 102, 129),
    (0xF9AF, 102, 134), (0xF9B0, 102, 135), (0xF9B1, 102, 139), (0xF9B2, 102, 141), (0xF9B3, 102, 143),
    (0xF9B4, 102, 144), (0xF9B5, 102, 147), (0xF9B6, 102, 159), (0xF9B7, 102, 164), (0xF9B8, 102, 166),
    (0xF9B9, 102, 183), (0xF9BA, 103, 167), (0xF9BB, 103, 168), (0xF9BC, 103, 176), (0xF9BD, 103, 177),
    (0xF9BE, 103, 183), (0xF9BF, 103, 185), (0xF9C0, 103, 187), (0xF9C1, 103, 190), (0xF9C2, 104, 103),
    (0xF9C3, 104, 108), (0xF9C4, 104, 140), (0xF9C5, 104, 183), (0xF9C6, 105, 129), (0xF9C7, 105, 165),
    (0xF9C8, 105, 180), (0xF9C9, 105, 183), (0xF9CA, 105, 188), (0xF9CB, 105, 190), (0xF9CC, 106, 100),
    (0xF9CD, 106, 103), (0xF9CE, 106, 105), (0xF9CF, 106, 106), (0xF9D0, 106, 122), (0xF9D1, 106, 123),
    (0xF9D2, 106, 125), (0xF9D3, 106, 129), (0xF9D4, 106, 130), (0xF9D5, 106, 134), (0xF9D6, 106, 135),
    (0xF9D7, 106, 140), (0xF9D8, 106, 143), (0xF9D9, 106, 144), (0xF9DA, 106, 145), (0xF9DB, 106, 146),
    (0xF9DC, 106, 152), (0xF9DD, 107, 102), (0xF9DE, 107, 103), (0xF9DF, 107, 106), (0xF9E0, 107, 111),
    (0xF9E1, 107, 112), (0xF9E2, 107, 113), (0xF9E3, 107, 114), (0xF9E4, 107, 117), (0xF9E5, 107, 120),
    (0xF9E6, 107, 122), (0xF9E7, 107, 128), (0xF9E8, 107, 129), (0xF9E9, 107, 133), (0xF9EA, 107, 134),
    (0xF9EB, 107, 137), (0xF9EC, 107, 138), (0xF9ED, 107, 149), (0xF9EE, 107, 157), (0xF9EF, 107, 158),
    (0xF9F0, 107, 161), (0xF9F1, 107, 164), (0xF9F2, 107, 167), (0xF9F3, 107, 168), (0xF9F4, 107, 183),
    (0xF9F5, 107, 184), (0xF9F6, 107, 186), (0xF9F7, 108, 97), (0xF9F8, 108, 98), (0xF9F9, 108, 99),
    (0xF9FA, 108, 174), (0xF9FB, 109, 155), (0xF9FC, 113, 125), (0xF9FD, 113, 186), (0xF9FE, 114, 113),
    (0xF9FF, 115, 103), (0xFA00, 115, 174), (0xFA01, 117, 180), (0xFA02, 117, 182), (0xFA03, 118, 120),
    (0xFA04, 118, 136), (0xFA05, 118, 147), (0xFA06, 119, 155), (0xFA07, 119, 176), (0xFA08, 121, 97),
    (0xFA09, 121, 98), (0xFA0A, 121, 166), (0xFA0B, 123, 105), (0xFF01, 34, 97), (0xFF02, 34, 98),
    (0xFF03, 34, 99), (0xFF04, 34, 100), (0xFF05, 34, 101), (0xFF06, 34, 102), (0xFF07, 34, 103),
    (0xFF08, 34, 104), (0xFF09, 34, 105), (0xFF0A, 34, 106), (0xFF0B, 34, 107), (0xFF0C, 34, 108),
    (0xFF0D, 34, 109), (0xFF0E, 34, 110), (0xFF0F, 34, 111), (0xFF10, 34, 112), (0xFF11, 34, 113),
    (0xFF12, 34, 114), (0xFF13, 34, 115), (0xFF14, 34, 116), (0xFF15, 34, 117), (0xFF16, 34, 118),
    (0xFF17, 34, 119), (0xFF18, 34, 120), (0xFF19, 34, 121), (0xFF1A, 34, 122), (0xFF1B, 34, 123),
    (0xFF1C, 34, 124), (0xFF1D, 34, 125), (0xFF1E, 34, 126), (0xFF1F, 34, 127), (0xFF20, 34, 128),
    (0xFF21, 34, 129), (0xFF22, 34, 130), (0xFF23, 34, 131), (0xFF24, 34, 132), (0xFF25, 34, 133),
    (0xFF26, 34, 134), (0xFF27, 34, 135), (0xFF28, 34, 136), (0xFF29, 34, 137), (0xFF2A, 34, 138),
    (0xFF2B, 34, 139), (0xFF2C, 34, 140), (0xFF2D, 34, 141), (0xFF2E, 34, 142), (0xFF2F, 34, 143),
    (0xFF30, 34, 144), (0xFF31, 34, 145), (0xFF32, 34, 146), (0xFF33, 34, 147), (0xFF34, 34, 148),
    (0xFF35, 34, 149), (0xFF36, 34, 150), (0xFF37, 34, 151), (0xFF38, 34, 152), (0xFF39, 34, 153),
    (0xFF3A, 34, 154), (0xFF3B, 34, 155), (0xFF3C, 32, 108), (0xFF3D, 34, 157), (0xFF3E, 34, 158),
    (0xFF3F, 34, 159), (0xFF40, 34, 160), (0xFF41, 34, 161), (0xFF42, 34, 162), (0xFF43, 34, 163),
    (0xFF44, 34, 164), (0xFF45, 34, 165), (0xFF46, 34, 166), (0xFF47, 34, 167), (0xFF48, 34, 168),
    (0xFF49, 34, 169), (0xFF4A, 34, 170), (0xFF4B, 34, 171), (0xFF4C, 34, 172), (0xFF4D, 34, 173),
    (0xFF4E, 34, 174), (0xFF4F, 34, 175), (0xFF50, 34, 176), (0xFF51, 34, 177), (0xFF52, 34, 178),
    (0xFF53, 34, 179), (0xFF54, 34, 180), (0xFF55, 34, 181), (0xFF56, 34, 182), (0xFF57, 34, 183),
    (0xFF58, 34, 184), (0xFF59, 34, 185), (0xFF5A, 34, 186), (0xFF5B, 34, 187), (0xFF5C, 34, 188),
    (0xFF5D, 34, 189), (0xFF5E, 33, 102), (0xFFE0, 32, 139), (0xFFE1, 32, 140), (0xFFE2, 32, 190),
    (0xFFE3, 34, 190), (0xFFE5, 32, 141), (0xFFE6, 34, 156),
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

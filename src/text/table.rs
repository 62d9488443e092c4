/// Generation IV game codes paired with the Unicode character each renders as.
///
/// Order matters: when a character appears more than once, the first code wins on encode.
pub(super) static GEN4_TABLE: &[(u16, char)] = &[
    (0x0000, '\u{0000}'), (0x0001, '\u{3000}'), (0x0002, '\u{3041}'), (0x0003, '\u{3042}'), (0x0004, '\u{3043}'), (0x0005, '\u{3044}'),
    (0x0006, '\u{3045}'), (0x0007, '\u{3046}'), (0x0008, '\u{3047}'), (0x0009, '\u{3048}'), (0x000A, '\u{3049}'), (0x000B, '\u{304A}'),
    (0x000C, '\u{304B}'), (0x000D, '\u{304C}'), (0x000E, '\u{304D}'), (0x000F, '\u{304E}'), (0x0010, '\u{304F}'), (0x0011, '\u{3050}'),
    (0x0012, '\u{3051}'), (0x0013, '\u{3052}'), (0x0014, '\u{3053}'), (0x0015, '\u{3054}'), (0x0016, '\u{3055}'), (0x0017, '\u{3056}'),
    (0x0018, '\u{3057}'), (0x0019, '\u{3058}'), (0x001A, '\u{3059}'), (0x001B, '\u{305A}'), (0x001C, '\u{305B}'), (0x001D, '\u{305C}'),
    (0x001E, '\u{305D}'), (0x001F, '\u{305E}'), (0x0020, '\u{305F}'), (0x0021, '\u{3060}'), (0x0022, '\u{3061}'), (0x0023, '\u{3062}'),
    (0x0024, '\u{3063}'), (0x0025, '\u{3064}'), (0x0026, '\u{3065}'), (0x0027, '\u{3066}'), (0x0028, '\u{3067}'), (0x0029, '\u{3068}'),
    (0x002A, '\u{3069}'), (0x002B, '\u{306A}'), (0x002C, '\u{306B}'), (0x002D, '\u{306C}'), (0x002E, '\u{306D}'), (0x002F, '\u{306E}'),
    (0x0030, '\u{306F}'), (0x0031, '\u{3070}'), (0x0032, '\u{3071}'), (0x0033, '\u{3072}'), (0x0034, '\u{3073}'), (0x0035, '\u{3074}'),
    (0x0036, '\u{3075}'), (0x0037, '\u{3076}'), (0x0038, '\u{3077}'), (0x0039, '\u{3078}'), (0x003A, '\u{3079}'), (0x003B, '\u{307A}'),
    (0x003C, '\u{307B}'), (0x003D, '\u{307C}'), (0x003E, '\u{307D}'), (0x003F, '\u{307E}'), (0x0040, '\u{307F}'), (0x0041, '\u{3080}'),
    (0x0042, '\u{3081}'), (0x0043, '\u{3082}'), (0x0044, '\u{3083}'), (0x0045, '\u{3084}'), (0x0046, '\u{3085}'), (0x0047, '\u{3086}'),
    (0x0048, '\u{3087}'), (0x0049, '\u{3088}'), (0x004A, '\u{3089}'), (0x004B, '\u{308A}'), (0x004C, '\u{308B}'), (0x004D, '\u{308C}'),
    (0x004E, '\u{308D}'), (0x004F, '\u{308F}'), (0x0050, '\u{3092}'), (0x0051, '\u{3093}'), (0x0052, '\u{30A1}'), (0x0053, '\u{30A2}'),
    (0x0054, '\u{30A3}'), (0x0055, '\u{30A4}'), (0x0056, '\u{30A5}'), (0x0057, '\u{30A6}'), (0x0058, '\u{30A7}'), (0x0059, '\u{30A8}'),
    (0x005A, '\u{30A9}'), (0x005B, '\u{30AA}'), (0x005C, '\u{30AB}'), (0x005D, '\u{30AC}'), (0x005E, '\u{30AD}'), (0x005F, '\u{30AE}'),
    (0x0060, '\u{30AF}'), (0x0061, '\u{30B0}'), (0x0062, '\u{30B1}'), (0x0063, '\u{30B2}'), (0x0064, '\u{30B3}'), (0x0065, '\u{30B4}'),
    (0x0066, '\u{30B5}'), (0x0067, '\u{30B6}'), (0x0068, '\u{30B7}'), (0x0069, '\u{30B8}'), (0x006A, '\u{30B9}'), (0x006B, '\u{30BA}'),
    (0x006C, '\u{30BB}'), (0x006D, '\u{30BC}'), (0x006E, '\u{30BD}'), (0x006F, '\u{30BE}'), (0x0070, '\u{30BF}'), (0x0071, '\u{30C0}'),
    (0x0072, '\u{30C1}'), (0x0073, '\u{30C2}'), (0x0074, '\u{30C3}'), (0x0075, '\u{30C4}'), (0x0076, '\u{30C5}'), (0x0077, '\u{30C6}'),
    (0x0078, '\u{30C7}'), (0x0079, '\u{30C8}'), (0x007A, '\u{30C9}'), (0x007B, '\u{30CA}'), (0x007C, '\u{30CB}'), (0x007D, '\u{30CC}'),
    (0x007E, '\u{30CD}'), (0x007F, '\u{30CE}'), (0x0080, '\u{30CF}'), (0x0081, '\u{30D0}'), (0x0082, '\u{30D1}'), (0x0083, '\u{30D2}'),
    (0x0084, '\u{30D3}'), (0x0085, '\u{30D4}'), (0x0086, '\u{30D5}'), (0x0087, '\u{30D6}'), (0x0088, '\u{30D7}'), (0x0089, '\u{30D8}'),
    (0x008A, '\u{30D9}'), (0x008B, '\u{30DA}'), (0x008C, '\u{30DB}'), (0x008D, '\u{30DC}'), (0x008E, '\u{30DD}'), (0x008F, '\u{30DE}'),
    (0x0090, '\u{30DF}'), (0x0091, '\u{30E0}'), (0x0092, '\u{30E1}'), (0x0093, '\u{30E2}'), (0x0094, '\u{30E3}'), (0x0095, '\u{30E4}'),
    (0x0096, '\u{30E5}'), (0x0097, '\u{30E6}'), (0x0098, '\u{30E7}'), (0x0099, '\u{30E8}'), (0x009A, '\u{30E9}'), (0x009B, '\u{30EA}'),
    (0x009C, '\u{30EB}'), (0x009D, '\u{30EC}'), (0x009E, '\u{30ED}'), (0x009F, '\u{30EF}'), (0x00A0, '\u{30F2}'), (0x00A1, '\u{30F3}'),
    (0x00A2, '\u{FF10}'), (0x00A3, '\u{FF11}'), (0x00A4, '\u{FF12}'), (0x00A5, '\u{FF13}'), (0x00A6, '\u{FF14}'), (0x00A7, '\u{FF15}'),
    (0x00A8, '\u{FF16}'), (0x00A9, '\u{FF17}'), (0x00AA, '\u{FF18}'), (0x00AB, '\u{FF19}'), (0x00AC, '\u{FF21}'), (0x00AD, '\u{FF22}'),
    (0x00AE, '\u{FF23}'), (0x00AF, '\u{FF24}'), (0x00B0, '\u{FF25}'), (0x00B1, '\u{FF26}'), (0x00B2, '\u{FF27}'), (0x00B3, '\u{FF28}'),
    (0x00B4, '\u{FF29}'), (0x00B5, '\u{FF2A}'), (0x00B6, '\u{FF2B}'), (0x00B7, '\u{FF2C}'), (0x00B8, '\u{FF2D}'), (0x00B9, '\u{FF2E}'),
    (0x00BA, '\u{FF2F}'), (0x00BB, '\u{FF30}'), (0x00BC, '\u{FF31}'), (0x00BD, '\u{FF32}'), (0x00BE, '\u{FF33}'), (0x00BF, '\u{FF34}'),
    (0x00C0, '\u{FF35}'), (0x00C1, '\u{FF36}'), (0x00C2, '\u{FF37}'), (0x00C3, '\u{FF38}'), (0x00C4, '\u{FF39}'), (0x00C5, '\u{FF3A}'),
    (0x00C6, '\u{FF41}'), (0x00C7, '\u{FF42}'), (0x00C8, '\u{FF43}'), (0x00C9, '\u{FF44}'), (0x00CA, '\u{FF45}'), (0x00CB, '\u{FF46}'),
    (0x00CC, '\u{FF47}'), (0x00CD, '\u{FF48}'), (0x00CE, '\u{FF49}'), (0x00CF, '\u{FF4A}'), (0x00D0, '\u{FF4B}'), (0x00D1, '\u{FF4C}'),
    (0x00D2, '\u{FF4D}'), (0x00D3, '\u{FF4E}'), (0x00D4, '\u{FF4F}'), (0x00D5, '\u{FF50}'), (0x00D6, '\u{FF51}'), (0x00D7, '\u{FF52}'),
    (0x00D8, '\u{FF53}'), (0x00D9, '\u{FF54}'), (0x00DA, '\u{FF55}'), (0x00DB, '\u{FF56}'), (0x00DC, '\u{FF57}'), (0x00DD, '\u{FF58}'),
    (0x00DE, '\u{FF59}'), (0x00DF, '\u{FF5A}'), (0x00E1, '\u{FF01}'), (0x00E2, '\u{FF1F}'), (0x00E3, '\u{3001}'), (0x00E4, '\u{3002}'),
    (0x00E5, '\u{22EF}'), (0x00E6, '\u{30FB}'), (0x00E7, '\u{FF0F}'), (0x00E8, '\u{300C}'), (0x00E9, '\u{300D}'), (0x00EA, '\u{300E}'),
    (0x00EB, '\u{300F}'), (0x00EC, '\u{FF08}'), (0x00ED, '\u{FF09}'), (0x00EE, '\u{329A}'), (0x00EF, '\u{329B}'), (0x00F0, '\u{FF0B}'),
    (0x00F1, '\u{FF0D}'), (0x00F2, '\u{2297}'), (0x00F3, '\u{2298}'), (0x00F4, '\u{FF1D}'), (0x00F5, '\u{FF5A}'), (0x00F6, '\u{FF1A}'),
    (0x00F7, '\u{FF1B}'), (0x00F8, '\u{FF0E}'), (0x00F9, '\u{FF0C}'), (0x00FA, '\u{2664}'), (0x00FB, '\u{2667}'), (0x00FC, '\u{2661}'),
    (0x00FD, '\u{2662}'), (0x00FE, '\u{2606}'), (0x00FF, '\u{25CE}'), (0x0100, '\u{25CB}'), (0x0101, '\u{25A1}'), (0x0102, '\u{25B3}'),
    (0x0103, '\u{25C7}'), (0x0104, '\u{FF20}'), (0x0105, '\u{266B}'), (0x0106, '\u{FF05}'), (0x0107, '\u{263C}'), (0x0108, '\u{2614}'),
    (0x0109, '\u{2630}'), (0x010A, '\u{2744}'), (0x010B, '\u{260B}'), (0x010C, '\u{2654}'), (0x010D, '\u{2655}'), (0x010E, '\u{260A}'),
    (0x010F, '\u{21D7}'), (0x0110, '\u{21D8}'), (0x0111, '\u{263E}'), (0x0112, '\u{00A5}'), (0x0113, '\u{2648}'), (0x0114, '\u{2649}'),
    (0x0115, '\u{264A}'), (0x0116, '\u{264B}'), (0x0117, '\u{264C}'), (0x0118, '\u{264D}'), (0x0119, '\u{264E}'), (0x011A, '\u{264F}'),
    (0x011B, '\u{2190}'), (0x011C, '\u{2191}'), (0x011D, '\u{2193}'), (0x011E, '\u{2192}'), (0x011F, '\u{2023}'), (0x0120, '\u{FF06}'),
    (0x0121, '\u{0030}'), (0x0122, '\u{0031}'), (0x0123, '\u{0032}'), (0x0124, '\u{0033}'), (0x0125, '\u{0034}'), (0x0126, '\u{0035}'),
    (0x0127, '\u{0036}'), (0x0128, '\u{0037}'), (0x0129, '\u{0038}'), (0x012A, '\u{0039}'), (0x012B, '\u{0041}'), (0x012C, '\u{0042}'),
    (0x012D, '\u{0043}'), (0x012E, '\u{0044}'), (0x012F, '\u{0045}'), (0x0130, '\u{0046}'), (0x0131, '\u{0047}'), (0x0132, '\u{0048}'),
    (0x0133, '\u{0049}'), (0x0134, '\u{004A}'), (0x0135, '\u{004B}'), (0x0136, '\u{004C}'), (0x0137, '\u{004D}'), (0x0138, '\u{004E}'),
    (0x0139, '\u{004F}'), (0x013A, '\u{0050}'), (0x013B, '\u{0051}'), (0x013C, '\u{0052}'), (0x013D, '\u{0053}'), (0x013E, '\u{0054}'),
    (0x013F, '\u{0055}'), (0x0140, '\u{0056}'), (0x0141, '\u{0057}'), (0x0142, '\u{0058}'), (0x0143, '\u{0059}'), (0x0144, '\u{005A}'),
    (0x0145, '\u{0061}'), (0x0146, '\u{0062}'), (0x0147, '\u{0063}'), (0x0148, '\u{0064}'), (0x0149, '\u{0065}'), (0x014A, '\u{0066}'),
    (0x014B, '\u{0067}'), (0x014C, '\u{0068}'), (0x014D, '\u{0069}'), (0x014E, '\u{006A}'), (0x014F, '\u{006B}'), (0x0150, '\u{006C}'),
    (0x0151, '\u{006D}'), (0x0152, '\u{006E}'), (0x0153, '\u{006F}'), (0x0154, '\u{0070}'), (0x0155, '\u{0071}'), (0x0156, '\u{0072}'),
    (0x0157, '\u{0073}'), (0x0158, '\u{0074}'), (0x0159, '\u{0075}'), (0x015A, '\u{0076}'), (0x015B, '\u{0077}'), (0x015C, '\u{0078}'),
    (0x015D, '\u{0079}'), (0x015E, '\u{007A}'), (0x015F, '\u{00C0}'), (0x0160, '\u{00C1}'), (0x0161, '\u{00C2}'), (0x0162, '\u{00C3}'),
    (0x0163, '\u{00C4}'), (0x0164, '\u{00C5}'), (0x0165, '\u{00C6}'), (0x0166, '\u{00C7}'), (0x0167, '\u{00C8}'), (0x0168, '\u{00C9}'),
    (0x0169, '\u{00CA}'), (0x016A, '\u{00CB}'), (0x016B, '\u{00CC}'), (0x016C, '\u{00CD}'), (0x016D, '\u{00CE}'), (0x016E, '\u{00CF}'),
    (0x016F, '\u{00D0}'), (0x0170, '\u{00D1}'), (0x0171, '\u{00D2}'), (0x0172, '\u{00D3}'), (0x0173, '\u{00D4}'), (0x0174, '\u{00D5}'),
    (0x0175, '\u{00D6}'), (0x0176, '\u{00D7}'), (0x0177, '\u{00D8}'), (0x0178, '\u{00D9}'), (0x0179, '\u{00DA}'), (0x017A, '\u{00DB}'),
    (0x017B, '\u{00DC}'), (0x017C, '\u{00DD}'), (0x017D, '\u{00DE}'), (0x017E, '\u{00DF}'), (0x017F, '\u{00E0}'), (0x0180, '\u{00E1}'),
    (0x0181, '\u{00E2}'), (0x0182, '\u{00E3}'), (0x0183, '\u{00E4}'), (0x0184, '\u{00E5}'), (0x0185, '\u{00E6}'), (0x0186, '\u{00E7}'),
    (0x0187, '\u{00E8}'), (0x0188, '\u{00E9}'), (0x0189, '\u{00EA}'), (0x018A, '\u{00EB}'), (0x018B, '\u{00EC}'), (0x018C, '\u{00ED}'),
    (0x018D, '\u{00EE}'), (0x018E, '\u{00EF}'), (0x018F, '\u{00F0}'), (0x0190, '\u{00F1}'), (0x0191, '\u{00F2}'), (0x0192, '\u{00F3}'),
    (0x0193, '\u{00F4}'), (0x0194, '\u{00F5}'), (0x0195, '\u{00F6}'), (0x0196, '\u{00F7}'), (0x0197, '\u{00F8}'), (0x0198, '\u{00F9}'),
    (0x0199, '\u{00FA}'), (0x019A, '\u{00FB}'), (0x019B, '\u{00FC}'), (0x019C, '\u{00FD}'), (0x019D, '\u{00FE}'), (0x019E, '\u{00FF}'),
    (0x019F, '\u{0152}'), (0x01A0, '\u{0153}'), (0x01A1, '\u{015E}'), (0x01A2, '\u{015F}'), (0x01A3, '\u{00AA}'), (0x01A4, '\u{00BA}'),
    (0x01A5, '\u{00B9}'), (0x01A6, '\u{00B2}'), (0x01A7, '\u{00B3}'), (0x01A8, '\u{0024}'), (0x01A9, '\u{00A1}'), (0x01AA, '\u{00BF}'),
    (0x01AB, '\u{0021}'), (0x01AC, '\u{003F}'), (0x01AD, '\u{002C}'), (0x01AE, '\u{002E}'), (0x01AF, '\u{2026}'), (0x01B0, '\u{00B7}'),
    (0x01B1, '\u{002F}'), (0x01B2, '\u{2018}'), (0x01B3, '\u{2019}'), (0x01B4, '\u{201C}'), (0x01B5, '\u{201D}'), (0x01B6, '\u{201E}'),
    (0x01B7, '\u{300A}'), (0x01B8, '\u{300B}'), (0x01B9, '\u{0028}'), (0x01BA, '\u{0029}'), (0x01BB, '\u{2642}'), (0x01BC, '\u{2640}'),
    (0x01BD, '\u{002B}'), (0x01BE, '\u{002D}'), (0x01BF, '\u{002A}'), (0x01C0, '\u{0023}'), (0x01C1, '\u{003D}'), (0x01C2, '\u{0026}'),
    (0x01C3, '\u{007E}'), (0x01C4, '\u{003A}'), (0x01C5, '\u{003B}'), (0x01C6, '\u{2660}'), (0x01C7, '\u{2663}'), (0x01C8, '\u{2665}'),
    (0x01C9, '\u{2666}'), (0x01CA, '\u{2605}'), (0x01CB, '\u{25C9}'), (0x01CC, '\u{25CF}'), (0x01CD, '\u{25A0}'), (0x01CE, '\u{25B2}'),
    (0x01CF, '\u{25C6}'), (0x01D0, '\u{0040}'), (0x01D1, '\u{266A}'), (0x01D2, '\u{0025}'), (0x01D3, '\u{2600}'), (0x01D4, '\u{2601}'),
    (0x01D5, '\u{2602}'), (0x01D6, '\u{2603}'), (0x01D7, '\u{263A}'), (0x01D8, '\u{265A}'), (0x01D9, '\u{265B}'), (0x01DA, '\u{2639}'),
    (0x01DB, '\u{2197}'), (0x01DC, '\u{2198}'), (0x01DD, '\u{263D}'), (0x01DE, '\u{0020}'), (0x01DF, '\u{2074}'), (0x01E0, '\u{20A7}'),
    (0x01E1, '\u{20A6}'), (0x01E8, '\u{00B0}'), (0x01E9, '\u{005F}'), (0x01EA, '\u{FF3F}'), (0x0400, '\u{AC00}'), (0x0401, '\u{AC01}'),
    (0x0402, '\u{AC04}'), (0x0403, '\u{AC07}'), (0x0404, '\u{AC08}'), (0x0405, '\u{AC09}'), (0x0406, '\u{AC0A}'), (0x0407, '\u{AC10}'),
    (0x0408, '\u{AC11}'), (0x0409, '\u{AC12}'), (0x040A, '\u{AC13}'), (0x040B, '\u{AC14}'), (0x040C, '\u{AC15}'), (0x040D, '\u{AC16}'),
    (0x040E, '\u{AC17}'), (0x0410, '\u{AC19}'), (0x0411, '\u{AC1A}'), (0x0412, '\u{AC1B}'), (0x0413, '\u{AC1C}'), (0x0414, '\u{AC1D}'),
    (0x0415, '\u{AC20}'), (0x0416, '\u{AC24}'), (0x0417, '\u{AC2C}'), (0x0418, '\u{AC2D}'), (0x0419, '\u{AC2F}'), (0x041A, '\u{AC30}'),
    (0x041B, '\u{AC31}'), (0x041C, '\u{AC38}'), (0x041D, '\u{AC39}'), (0x041E, '\u{AC3C}'), (0x041F, '\u{AC40}'), (0x0420, '\u{AC4B}'),
    (0x0421, '\u{AC4D}'), (0x0422, '\u{AC54}'), (0x0423, '\u{AC58}'), (0x0424, '\u{AC5C}'), (0x0425, '\u{AC70}'), (0x0426, '\u{AC71}'),
    (0x0427, '\u{AC74}'), (0x0428, '\u{AC77}'), (0x0429, '\u{AC78}'), (0x042A, '\u{AC7A}'), (0x042B, '\u{AC80}'), (0x042C, '\u{AC81}'),
    (0x042D, '\u{AC83}'), (0x042E, '\u{AC84}'), (0x042F, '\u{AC85}'), (0x0430, '\u{AC86}'), (0x0431, '\u{AC89}'), (0x0432, '\u{AC8A}'),
    (0x0433, '\u{AC8B}'), (0x0434, '\u{AC8C}'), (0x0435, '\u{AC90}'), (0x0436, '\u{AC94}'), (0x0437, '\u{AC9C}'), (0x0438, '\u{AC9D}'),
    (0x0439, '\u{AC9F}'), (0x043A, '\u{ACA0}'), (0x043B, '\u{ACA1}'), (0x043C, '\u{ACA8}'), (0x043D, '\u{ACA9}'), (0x043E, '\u{ACAA}'),
    (0x043F, '\u{ACAC}'), (0x0440, '\u{ACAF}'), (0x0441, '\u{ACB0}'), (0x0442, '\u{ACB8}'), (0x0443, '\u{ACB9}'), (0x0444, '\u{ACBB}'),
    (0x0445, '\u{ACBC}'), (0x0446, '\u{ACBD}'), (0x0447, '\u{ACC1}'), (0x0448, '\u{ACC4}'), (0x0449, '\u{ACC8}'), (0x044A, '\u{ACCC}'),
    (0x044B, '\u{ACD5}'), (0x044C, '\u{ACD7}'), (0x044D, '\u{ACE0}'), (0x044E, '\u{ACE1}'), (0x044F, '\u{ACE4}'), (0x0450, '\u{ACE7}'),
    (0x0451, '\u{ACE8}'), (0x0452, '\u{ACEA}'), (0x0453, '\u{ACEC}'), (0x0454, '\u{ACEF}'), (0x0455, '\u{ACF0}'), (0x0456, '\u{ACF1}'),
    (0x0457, '\u{ACF3}'), (0x0458, '\u{ACF5}'), (0x0459, '\u{ACF6}'), (0x045A, '\u{ACFC}'), (0x045B, '\u{ACFD}'), (0x045C, '\u{AD00}'),
    (0x045D, '\u{AD04}'), (0x045E, '\u{AD06}'), (0x045F, '\u{AD0C}'), (0x0460, '\u{AD0D}'), (0x0461, '\u{AD0F}'), (0x0462, '\u{AD11}'),
    (0x0463, '\u{AD18}'), (0x0464, '\u{AD1C}'), (0x0465, '\u{AD20}'), (0x0466, '\u{AD29}'), (0x0467, '\u{AD2C}'), (0x0468, '\u{AD2D}'),
    (0x0469, '\u{AD34}'), (0x046A, '\u{AD35}'), (0x046B, '\u{AD38}'), (0x046C, '\u{AD3C}'), (0x046D, '\u{AD44}'), (0x046E, '\u{AD45}'),
    (0x046F, '\u{AD47}'), (0x0470, '\u{AD49}'), (0x0471, '\u{AD50}'), (0x0472, '\u{AD54}'), (0x0473, '\u{AD58}'), (0x0474, '\u{AD61}'),
    (0x0475, '\u{AD63}'), (0x0476, '\u{AD6C}'), (0x0477, '\u{AD6D}'), (0x0478, '\u{AD70}'), (0x0479, '\u{AD73}'), (0x047A, '\u{AD74}'),
    (0x047B, '\u{AD75}'), (0x047C, '\u{AD76}'), (0x047D, '\u{AD7B}'), (0x047E, '\u{AD7C}'), (0x047F, '\u{AD7D}'), (0x0480, '\u{AD7F}'),
    (0x0481, '\u{AD81}'), (0x0482, '\u{AD82}'), (0x0483, '\u{AD88}'), (0x0484, '\u{AD89}'), (0x0485, '\u{AD8C}'), (0x0486, '\u{AD90}'),
    (0x0487, '\u{AD9C}'), (0x0488, '\u{AD9D}'), (0x0489, '\u{ADA4}'), (0x048A, '\u{ADB7}'), (0x048B, '\u{ADC0}'), (0x048C, '\u{ADC1}'),
    (0x048D, '\u{ADC4}'), (0x048E, '\u{ADC8}'), (0x048F, '\u{ADD0}'), (0x0490, '\u{ADD1}'), (0x0491, '\u{ADD3}'), (0x0492, '\u{ADDC}'),
    (0x0493, '\u{ADE0}'), (0x0494, '\u{ADE4}'), (0x0495, '\u{ADF8}'), (0x0496, '\u{ADF9}'), (0x0497, '\u{ADFC}'), (0x0498, '\u{ADFF}'),
    (0x0499, '\u{AE00}'), (0x049A, '\u{AE01}'), (0x049B, '\u{AE08}'), (0x049C, '\u{AE09}'), (0x049D, '\u{AE0B}'), (0x049E, '\u{AE0D}'),
    (0x049F, '\u{AE14}'), (0x04A0, '\u{AE30}'), (0x04A1, '\u{AE31}'), (0x04A2, '\u{AE34}'), (0x04A3, '\u{AE37}'), (0x04A4, '\u{AE38}'),
    (0x04A5, '\u{AE3A}'), (0x04A6, '\u{AE40}'), (0x04A7, '\u{AE41}'), (0x04A8, '\u{AE43}'), (0x04A9, '\u{AE45}'), (0x04AA, '\u{AE46}'),
    (0x04AB, '\u{AE4A}'), (0x04AC, '\u{AE4C}'), (0x04AD, '\u{AE4D}'), (0x04AE, '\u{AE4E}'), (0x04AF, '\u{AE50}'), (0x04B0, '\u{AE54}'),
    (0x04B1, '\u{AE56}'), (0x04B2, '\u{AE5C}'), (0x04B3, '\u{AE5D}'), (0x04B4, '\u{AE5F}'), (0x04B5, '\u{AE60}'), (0x04B6, '\u{AE61}'),
    (0x04B7, '\u{AE65}'), (0x04B8, '\u{AE68}'), (0x04B9, '\u{AE69}'), (0x04BA, '\u{AE6C}'), (0x04BB, '\u{AE70}'), (0x04BC, '\u{AE78}'),
    (0x04BD, '\u{AE79}'), (0x04BE, '\u{AE7B}'), (0x04BF, '\u{AE7C}'), (0x04C0, '\u{AE7D}'), (0x04C1, '\u{AE84}'), (0x04C2, '\u{AE85}'),
    (0x04C3, '\u{AE8C}'), (0x04C4, '\u{AEBC}'), (0x04C5, '\u{AEBD}'), (0x04C6, '\u{AEBE}'), (0x04C7, '\u{AEC0}'), (0x04C8, '\u{AEC4}'),
    (0x04C9, '\u{AECC}'), (0x04CA, '\u{AECD}'), (0x04CB, '\u{AECF}'), (0x04CC, '\u{AED0}'), (0x04CD, '\u{AED1}'), (0x04CE, '\u{AED8}'),
    (0x04CF, '\u{AED9}'), (0x04D0, '\u{AEDC}'), (0x04D1, '\u{AEE8}'), (0x04D2, '\u{AEEB}'), (0x04D3, '\u{AEED}'), (0x04D4, '\u{AEF4}'),
    (0x04D5, '\u{AEF8}'), (0x04D6, '\u{AEFC}'), (0x04D7, '\u{AF07}'), (0x04D8, '\u{AF08}'), (0x04D9, '\u{AF0D}'), (0x04DA, '\u{AF10}'),
    (0x04DB, '\u{AF2C}'), (0x04DC, '\u{AF2D}'), (0x04DD, '\u{AF30}'), (0x04DE, '\u{AF32}'), (0x04DF, '\u{AF34}'), (0x04E0, '\u{AF3C}'),
    (0x04E1, '\u{AF3D}'), (0x04E2, '\u{AF3F}'), (0x04E3, '\u{AF41}'), (0x04E4, '\u{AF42}'), (0x04E5, '\u{AF43}'), (0x04E6, '\u{AF48}'),
    (0x04E7, '\u{AF49}'), (0x04E8, '\u{AF50}'), (0x04E9, '\u{AF5C}'), (0x04EA, '\u{AF5D}'), (0x04EB, '\u{AF64}'), (0x04EC, '\u{AF65}'),
    (0x04ED, '\u{AF79}'), (0x04EE, '\u{AF80}'), (0x04EF, '\u{AF84}'), (0x04F0, '\u{AF88}'), (0x04F1, '\u{AF90}'), (0x04F2, '\u{AF91}'),
    (0x04F3, '\u{AF95}'), (0x04F4, '\u{AF9C}'), (0x04F5, '\u{AFB8}'), (0x04F6, '\u{AFB9}'), (0x04F7, '\u{AFBC}'), (0x04F8, '\u{AFC0}'),
    (0x04F9, '\u{AFC7}'), (0x04FA, '\u{AFC8}'), (0x04FB, '\u{AFC9}'), (0x04FC, '\u{AFCB}'), (0x04FD, '\u{AFCD}'), (0x04FE, '\u{AFCE}'),
    (0x04FF, '\u{AFD4}'), (0x0500, '\u{AFDC}'), (0x0501, '\u{AFE8}'), (0x0502, '\u{AFE9}'), (0x0503, '\u{AFF0}'), (0x0504, '\u{AFF1}'),
    (0x0505, '\u{AFF4}'), (0x0506, '\u{AFF8}'), (0x0507, '\u{B000}'), (0x0508, '\u{B001}'), (0x0509, '\u{B004}'), (0x050A, '\u{B00C}'),
    (0x050B, '\u{B010}'), (0x050C, '\u{B014}'), (0x050D, '\u{B01C}'), (0x050E, '\u{B01D}'), (0x050F, '\u{B028}'), (0x0510, '\u{B044}'),
    (0x0511, '\u{B045}'), (0x0512, '\u{B048}'), (0x0513, '\u{B04A}'), (0x0514, '\u{B04C}'), (0x0515, '\u{B04E}'), (0x0516, '\u{B053}'),
    (0x0517, '\u{B054}'), (0x0518, '\u{B055}'), (0x0519, '\u{B057}'), (0x051A, '\u{B059}'), (0x051B, '\u{B05D}'), (0x051C, '\u{B07C}'),
    (0x051D, '\u{B07D}'), (0x051E, '\u{B080}'), (0x051F, '\u{B084}'), (0x0520, '\u{B08C}'), (0x0521, '\u{B08D}'), (0x0522, '\u{B08F}'),
    (0x0523, '\u{B091}'), (0x0524, '\u{B098}'), (0x0525, '\u{B099}'), (0x0526, '\u{B09A}'), (0x0527, '\u{B09C}'), (0x0528, '\u{B09F}'),
    (0x0529, '\u{B0A0}'), (0x052A, '\u{B0A1}'), (0x052B, '\u{B0A2}'), (0x052C, '\u{B0A8}'), (0x052D, '\u{B0A9}'), (0x052E, '\u{B0AB}'),
    (0x052F, '\u{B0AC}'), (0x0530, '\u{B0AD}'), (0x0531, '\u{B0AE}'), (0x0532, '\u{B0AF}'), (0x0533, '\u{B0B1}'), (0x0534, '\u{B0B3}'),
    (0x0535, '\u{B0B4}'), (0x0536, '\u{B0B5}'), (0x0537, '\u{B0B8}'), (0x0538, '\u{B0BC}'), (0x0539, '\u{B0C4}'), (0x053A, '\u{B0C5}'),
    (0x053B, '\u{B0C7}'), (0x053C, '\u{B0C8}'), (0x053D, '\u{B0C9}'), (0x053E, '\u{B0D0}'), (0x053F, '\u{B0D1}'), (0x0540, '\u{B0D4}'),
    (0x0541, '\u{B0D8}'), (0x0542, '\u{B0E0}'), (0x0543, '\u{B0E5}'), (0x0544, '\u{B108}'), (0x0545, '\u{B109}'), (0x0546, '\u{B10B}'),
    (0x0547, '\u{B10C}'), (0x0548, '\u{B110}'), (0x0549, '\u{B112}'), (0x054A, '\u{B113}'), (0x054B, '\u{B118}'), (0x054C, '\u{B119}'),
    (0x054D, '\u{B11B}'), (0x054E, '\u{B11C}'), (0x054F, '\u{B11D}'), (0x0550, '\u{B123}'), (0x0551, '\u{B124}'), (0x0552, '\u{B125}'),
    (0x0553, '\u{B128}'), (0x0554, '\u{B12C}'), (0x0555, '\u{B134}'), (0x0556, '\u{B135}'), (0x0557, '\u{B137}'), (0x0558, '\u{B138}'),
    (0x0559, '\u{B139}'), (0x055A, '\u{B140}'), (0x055B, '\u{B141}'), (0x055C, '\u{B144}'), (0x055D, '\u{B148}'), (0x055E, '\u{B150}'),
    (0x055F, '\u{B151}'), (0x0560, '\u{B154}'), (0x0561, '\u{B155}'), (0x0562, '\u{B158}'), (0x0563, '\u{B15C}'), (0x0564, '\u{B160}'),
    (0x0565, '\u{B178}'), (0x0566, '\u{B179}'), (0x0567, '\u{B17C}'), (0x0568, '\u{B180}'), (0x0569, '\u{B182}'), (0x056A, '\u{B188}'),
    (0x056B, '\u{B189}'), (0x056C, '\u{B18B}'), (0x056D, '\u{B18D}'), (0x056E, '\u{B192}'), (0x056F, '\u{B193}'), (0x0570, '\u{B194}'),
    (0x0571, '\u{B198}'), (0x0572, '\u{B19C}'), (0x0573, '\u{B1A8}'), (0x0574, '\u{B1CC}'), (0x0575, '\u{B1D0}'), (0x0576, '\u{B1D4}'),
    (0x0577, '\u{B1DC}'), (0x0578, '\u{B1DD}'), (0x0579, '\u{B1DF}'), (0x057A, '\u{B1E8}'), (0x057B, '\u{B1E9}'), (0x057C, '\u{B1EC}'),
    (0x057D, '\u{B1F0}'), (0x057E, '\u{B1F9}'), (0x057F, '\u{B1FB}'), (0x0580, '\u{B1FD}'), (0x0581, '\u{B204}'), (0x0582, '\u{B205}'),
    (0x0583, '\u{B208}'), (0x0584, '\u{B20B}'), (0x0585, '\u{B20C}'), (0x0586, '\u{B214}'), (0x0587, '\u{B215}'), (0x0588, '\u{B217}'),
    (0x0589, '\u{B219}'), (0x058A, '\u{B220}'), (0x058B, '\u{B234}'), (0x058C, '\u{B23C}'), (0x058D, '\u{B258}'), (0x058E, '\u{B25C}'),
    (0x058F, '\u{B260}'), (0x0590, '\u{B268}'), (0x0591, '\u{B269}'), (0x0592, '\u{B274}'), (0x0593, '\u{B275}'), (0x0594, '\u{B27C}'),
    (0x0595, '\u{B284}'), (0x0596, '\u{B285}'), (0x0597, '\u{B289}'), (0x0598, '\u{B290}'), (0x0599, '\u{B291}'), (0x059A, '\u{B294}'),
    (0x059B, '\u{B298}'), (0x059C, '\u{B299}'), (0x059D, '\u{B29A}'), (0x059E, '\u{B2A0}'), (0x059F, '\u{B2A1}'), (0x05A0, '\u{B2A3}'),
    (0x05A1, '\u{B2A5}'), (0x05A2, '\u{B2A6}'), (0x05A3, '\u{B2AA}'), (0x05A4, '\u{B2AC}'), (0x05A5, '\u{B2B0}'), (0x05A6, '\u{B2B4}'),
    (0x05A7, '\u{B2C8}'), (0x05A8, '\u{B2C9}'), (0x05A9, '\u{B2CC}'), (0x05AA, '\u{B2D0}'), (0x05AB, '\u{B2D2}'), (0x05AC, '\u{B2D8}'),
    (0x05AD, '\u{B2D9}'), (0x05AE, '\u{B2DB}'), (0x05AF, '\u{B2DD}'), (0x05B0, '\u{B2E2}'), (0x05B1, '\u{B2E4}'), (0x05B2, '\u{B2E5}'),
    (0x05B3, '\u{B2E6}'), (0x05B4, '\u{B2E8}'), (0x05B5, '\u{B2EB}'), (0x05B6, '\u{B2EC}'), (0x05B7, '\u{B2ED}'), (0x05B8, '\u{B2EE}'),
    (0x05B9, '\u{B2EF}'), (0x05BA, '\u{B2F3}'), (0x05BB, '\u{B2F4}'), (0x05BC, '\u{B2F5}'), (0x05BD, '\u{B2F7}'), (0x05BE, '\u{B2F8}'),
    (0x05BF, '\u{B2F9}'), (0x05C0, '\u{B2FA}'), (0x05C1, '\u{B2FB}'), (0x05C2, '\u{B2FF}'), (0x05C3, '\u{B300}'), (0x05C4, '\u{B301}'),
    (0x05C5, '\u{B304}'), (0x05C6, '\u{B308}'), (0x05C7, '\u{B310}'), (0x05C8, '\u{B311}'), (0x05C9, '\u{B313}'), (0x05CA, '\u{B314}'),
    (0x05CB, '\u{B315}'), (0x05CC, '\u{B31C}'), (0x05CD, '\u{B354}'), (0x05CE, '\u{B355}'), (0x05CF, '\u{B356}'), (0x05D0, '\u{B358}'),
    (0x05D1, '\u{B35B}'), (0x05D2, '\u{B35C}'), (0x05D3, '\u{B35E}'), (0x05D4, '\u{B35F}'), (0x05D5, '\u{B364}'), (0x05D6, '\u{B365}'),
    (0x05D7, '\u{B367}'), (0x05D8, '\u{B369}'), (0x05D9, '\u{B36B}'), (0x05DA, '\u{B36E}'), (0x05DB, '\u{B370}'), (0x05DC, '\u{B371}'),
    (0x05DD, '\u{B374}'), (0x05DE, '\u{B378}'), (0x05DF, '\u{B380}'), (0x05E0, '\u{B381}'), (0x05E1, '\u{B383}'), (0x05E2, '\u{B384}'),
    (0x05E3, '\u{B385}'), (0x05E4, '\u{B38C}'), (0x05E5, '\u{B390}'), (0x05E6, '\u{B394}'), (0x05E7, '\u{B3A0}'), (0x05E8, '\u{B3A1}'),
    (0x05E9, '\u{B3A8}'), (0x05EA, '\u{B3AC}'), (0x05EB, '\u{B3C4}'), (0x05EC, '\u{B3C5}'), (0x05ED, '\u{B3C8}'), (0x05EE, '\u{B3CB}'),
    (0x05EF, '\u{B3CC}'), (0x05F0, '\u{B3CE}'), (0x05F1, '\u{B3D0}'), (0x05F2, '\u{B3D4}'), (0x05F3, '\u{B3D5}'), (0x05F4, '\u{B3D7}'),
    (0x05F5, '\u{B3D9}'), (0x05F6, '\u{B3DB}'), (0x05F7, '\u{B3DD}'), (0x05F8, '\u{B3E0}'), (0x05F9, '\u{B3E4}'), (0x05FA, '\u{B3E8}'),
    (0x05FB, '\u{B3FC}'), (0x05FC, '\u{B410}'), (0x05FD, '\u{B418}'), (0x05FE, '\u{B41C}'), (0x05FF, '\u{B420}'), (0x0600, '\u{B428}'),
    (0x0601, '\u{B429}'), (0x0602, '\u{B42B}'), (0x0603, '\u{B434}'), (0x0604, '\u{B450}'), (0x0605, '\u{B451}'), (0x0606, '\u{B454}'),
    (0x0607, '\u{B458}'), (0x0608, '\u{B460}'), (0x0609, '\u{B461}'), (0x060A, '\u{B463}'), (0x060B, '\u{B465}'), (0x060C, '\u{B46C}'),
    (0x060D, '\u{B480}'), (0x060E, '\u{B488}'), (0x060F, '\u{B49D}'), (0x0610, '\u{B4A4}'), (0x0611, '\u{B4A8}'), (0x0612, '\u{B4AC}'),
    (0x0613, '\u{B4B5}'), (0x0614, '\u{B4B7}'), (0x0615, '\u{B4B9}'), (0x0616, '\u{B4C0}'), (0x0617, '\u{B4C4}'), (0x0618, '\u{B4C8}'),
    (0x0619, '\u{B4D0}'), (0x061A, '\u{B4D5}'), (0x061B, '\u{B4DC}'), (0x061C, '\u{B4DD}'), (0x061D, '\u{B4E0}'), (0x061E, '\u{B4E3}'),
    (0x061F, '\u{B4E4}'), (0x0620, '\u{B4E6}'), (0x0621, '\u{B4EC}'), (0x0622, '\u{B4ED}'), (0x0623, '\u{B4EF}'), (0x0624, '\u{B4F1}'),
    (0x0625, '\u{B4F8}'), (0x0626, '\u{B514}'), (0x0627, '\u{B515}'), (0x0628, '\u{B518}'), (0x0629, '\u{B51B}'), (0x062A, '\u{B51C}'),
    (0x062B, '\u{B524}'), (0x062C, '\u{B525}'), (0x062D, '\u{B527}'), (0x062E, '\u{B528}'), (0x062F, '\u{B529}'), (0x0630, '\u{B52A}'),
    (0x0631, '\u{B530}'), (0x0632, '\u{B531}'), (0x0633, '\u{B534}'), (0x0634, '\u{B538}'), (0x0635, '\u{B540}'), (0x0636, '\u{B541}'),
    (0x0637, '\u{B543}'), (0x0638, '\u{B544}'), (0x0639, '\u{B545}'), (0x063A, '\u{B54B}'), (0x063B, '\u{B54C}'), (0x063C, '\u{B54D}'),
    (0x063D, '\u{B550}'), (0x063E, '\u{B554}'), (0x063F, '\u{B55C}'), (0x0640, '\u{B55D}'), (0x0641, '\u{B55F}'), (0x0642, '\u{B560}'),
    (0x0643, '\u{B561}'), (0x0644, '\u{B5A0}'), (0x0645, '\u{B5A1}'), (0x0646, '\u{B5A4}'), (0x0647, '\u{B5A8}'), (0x0648, '\u{B5AA}'),
    (0x0649, '\u{B5AB}'), (0x064A, '\u{B5B0}'), (0x064B, '\u{B5B1}'), (0x064C, '\u{B5B3}'), (0x064D, '\u{B5B4}'), (0x064E, '\u{B5B5}'),
    (0x064F, '\u{B5BB}'), (0x0650, '\u{B5BC}'), (0x0651, '\u{B5BD}'), (0x0652, '\u{B5C0}'), (0x0653, '\u{B5C4}'), (0x0654, '\u{B5CC}'),
    (0x0655, '\u{B5CD}'), (0x0656, '\u{B5CF}'), (0x0657, '\u{B5D0}'), (0x0658, '\u{B5D1}'), (0x0659, '\u{B5D8}'), (0x065A, '\u{B5EC}'),
    (0x065B, '\u{B610}'), (0x065C, '\u{B611}'), (0x065D, '\u{B614}'), (0x065E, '\u{B618}'), (0x065F, '\u{B625}'), (0x0660, '\u{B62C}'),
    (0x0661, '\u{B634}'), (0x0662, '\u{B648}'), (0x0663, '\u{B664}'), (0x0664, '\u{B668}'), (0x0665, '\u{B69C}'), (0x0666, '\u{B69D}'),
    (0x0667, '\u{B6A0}'), (0x0668, '\u{B6A4}'), (0x0669, '\u{B6AB}'), (0x066A, '\u{B6AC}'), (0x066B, '\u{B6B1}'), (0x066C, '\u{B6D4}'),
    (0x066D, '\u{B6F0}'), (0x066E, '\u{B6F4}'), (0x066F, '\u{B6F8}'), (0x0670, '\u{B700}'), (0x0671, '\u{B701}'), (0x0672, '\u{B705}'),
    (0x0673, '\u{B728}'), (0x0674, '\u{B729}'), (0x0675, '\u{B72C}'), (0x0676, '\u{B72F}'), (0x0677, '\u{B730}'), (0x0678, '\u{B738}'),
    (0x0679, '\u{B739}'), (0x067A, '\u{B73B}'), (0x067B, '\u{B744}'), (0x067C, '\u{B748}'), (0x067D, '\u{B74C}'), (0x067E, '\u{B754}'),
    (0x067F, '\u{B755}'), (0x0680, '\u{B760}'), (0x0681, '\u{B764}'), (0x0682, '\u{B768}'), (0x0683, '\u{B770}'), (0x0684, '\u{B771}'),
    (0x0685, '\u{B773}'), (0x0686, '\u{B775}'), (0x0687, '\u{B77C}'), (0x0688, '\u{B77D}'), (0x0689, '\u{B780}'), (0x068A, '\u{B784}'),
    (0x068B, '\u{B78C}'), (0x068C, '\u{B78D}'), (0x068D, '\u{B78F}'), (0x068E, '\u{B790}'), (0x068F, '\u{B791}'), (0x0690, '\u{B792}'),
    (0x0691, '\u{B796}'), (0x0692, '\u{B797}'), (0x0693, '\u{B798}'), (0x0694, '\u{B799}'), (0x0695, '\u{B79C}'), (0x0696, '\u{B7A0}'),
    (0x0697, '\u{B7A8}'), (0x0698, '\u{B7A9}'), (0x0699, '\u{B7AB}'), (0x069A, '\u{B7AC}'), (0x069B, '\u{B7AD}'), (0x069C, '\u{B7B4}'),
    (0x069D, '\u{B7B5}'), (0x069E, '\u{B7B8}'), (0x069F, '\u{B7C7}'), (0x06A0, '\u{B7C9}'), (0x06A1, '\u{B7EC}'), (0x06A2, '\u{B7ED}'),
    (0x06A3, '\u{B7F0}'), (0x06A4, '\u{B7F4}'), (0x06A5, '\u{B7FC}'), (0x06A6, '\u{B7FD}'), (0x06A7, '\u{B7FF}'), (0x06A8, '\u{B800}'),
    (0x06A9, '\u{B801}'), (0x06AA, '\u{B807}'), (0x06AB, '\u{B808}'), (0x06AC, '\u{B809}'), (0x06AD, '\u{B80C}'), (0x06AE, '\u{B810}'),
    (0x06AF, '\u{B818}'), (0x06B0, '\u{B819}'), (0x06B1, '\u{B81B}'), (0x06B2, '\u{B81D}'), (0x06B3, '\u{B824}'), (0x06B4, '\u{B825}'),
    (0x06B5, '\u{B828}'), (0x06B6, '\u{B82C}'), (0x06B7, '\u{B834}'), (0x06B8, '\u{B835}'), (0x06B9, '\u{B837}'), (0x06BA, '\u{B838}'),
    (0x06BB, '\u{B839}'), (0x06BC, '\u{B840}'), (0x06BD, '\u{B844}'), (0x06BE, '\u{B851}'), (0x06BF, '\u{B853}'), (0x06C0, '\u{B85C}'),
    (0x06C1, '\u{B85D}'), (0x06C2, '\u{B860}'), (0x06C3, '\u{B864}'), (0x06C4, '\u{B86C}'), (0x06C5, '\u{B86D}'), (0x06C6, '\u{B86F}'),
    (0x06C7, '\u{B871}'), (0x06C8, '\u{B878}'), (0x06C9, '\u{B87C}'), (0x06CA, '\u{B88D}'), (0x06CB, '\u{B8A8}'), (0x06CC, '\u{B8B0}'),
    (0x06CD, '\u{B8B4}'), (0x06CE, '\u{B8B8}'), (0x06CF, '\u{B8C0}'), (0x06D0, '\u{B8C1}'), (0x06D1, '\u{B8C3}'), (0x06D2, '\u{B8C5}'),
    (0x06D3, '\u{B8CC}'), (0x06D4, '\u{B8D0}'), (0x06D5, '\u{B8D4}'), (0x06D6, '\u{B8DD}'), (0x06D7, '\u{B8DF}'), (0x06D8, '\u{B8E1}'),
    (0x06D9, '\u{B8E8}'), (0x06DA, '\u{B8E9}'), (0x06DB, '\u{B8EC}'), (0x06DC, '\u{B8F0}'), (0x06DD, '\u{B8F8}'), (0x06DE, '\u{B8F9}'),
    (0x06DF, '\u{B8FB}'), (0x06E0, '\u{B8FD}'), (0x06E1, '\u{B904}'), (0x06E2, '\u{B918}'), (0x06E3, '\u{B920}'), (0x06E4, '\u{B93C}'),
    (0x06E5, '\u{B93D}'), (0x06E6, '\u{B940}'), (0x06E7, '\u{B944}'), (0x06E8, '\u{B94C}'), (0x06E9, '\u{B94F}'), (0x06EA, '\u{B951}'),
    (0x06EB, '\u{B958}'), (0x06EC, '\u{B959}'), (0x06ED, '\u{B95C}'), (0x06EE, '\u{B960}'), (0x06EF, '\u{B968}'), (0x06F0, '\u{B969}'),
    (0x06F1, '\u{B96B}'), (0x06F2, '\u{B96D}'), (0x06F3, '\u{B974}'), (0x06F4, '\u{B975}'), (0x06F5, '\u{B978}'), (0x06F6, '\u{B97C}'),
    (0x06F7, '\u{B984}'), (0x06F8, '\u{B985}'), (0x06F9, '\u{B987}'), (0x06FA, '\u{B989}'), (0x06FB, '\u{B98A}'), (0x06FC, '\u{B98D}'),
    (0x06FD, '\u{B98E}'), (0x06FE, '\u{B9AC}'), (0x06FF, '\u{B9AD}'), (0x0700, '\u{B9B0}'), (0x0701, '\u{B9B4}'), (0x0702, '\u{B9BC}'),
    (0x0703, '\u{B9BD}'), (0x0704, '\u{B9BF}'), (0x0705, '\u{B9C1}'), (0x0706, '\u{B9C8}'), (0x0707, '\u{B9C9}'), (0x0708, '\u{B9CC}'),
    (0x0709, '\u{B9CE}'), (0x070A, '\u{B9CF}'), (0x070B, '\u{B9D0}'), (0x070C, '\u{B9D1}'), (0x070D, '\u{B9D2}'), (0x070E, '\u{B9D8}'),
    (0x070F, '\u{B9D9}'), (0x0710, '\u{B9DB}'), (0x0711, '\u{B9DD}'), (0x0712, '\u{B9DE}'), (0x0713, '\u{B9E1}'), (0x0714, '\u{B9E3}'),
    (0x0715, '\u{B9E4}'), (0x0716, '\u{B9E5}'), (0x0717, '\u{B9E8}'), (0x0718, '\u{B9EC}'), (0x0719, '\u{B9F4}'), (0x071A, '\u{B9F5}'),
    (0x071B, '\u{B9F7}'), (0x071C, '\u{B9F8}'), (0x071D, '\u{B9F9}'), (0x071E, '\u{B9FA}'), (0x071F, '\u{BA00}'), (0x0720, '\u{BA01}'),
    (0x0721, '\u{BA08}'), (0x0722, '\u{BA15}'), (0x0723, '\u{BA38}'), (0x0724, '\u{BA39}'), (0x0725, '\u{BA3C}'), (0x0726, '\u{BA40}'),
    (0x0727, '\u{BA42}'), (0x0728, '\u{BA48}'), (0x0729, '\u{BA49}'), (0x072A, '\u{BA4B}'), (0x072B, '\u{BA4D}'), (0x072C, '\u{BA4E}'),
    (0x072D, '\u{BA53}'), (0x072E, '\u{BA54}'), (0x072F, '\u{BA55}'), (0x0730, '\u{BA58}'), (0x0731, '\u{BA5C}'), (0x0732, '\u{BA64}'),
    (0x0733, '\u{BA65}'), (0x0734, '\u{BA67}'), (0x0735, '\u{BA68}'), (0x0736, '\u{BA69}'), (0x0737, '\u{BA70}'), (0x0738, '\u{BA71}'),
    (0x0739, '\u{BA74}'), (0x073A, '\u{BA78}'), (0x073B, '\u{BA83}'), (0x073C, '\u{BA84}'), (0x073D, '\u{BA85}'), (0x073E, '\u{BA87}'),
    (0x073F, '\u{BA8C}'), (0x0740, '\u{BAA8}'), (0x0741, '\u{BAA9}'), (0x0742, '\u{BAAB}'), (0x0743, '\u{BAAC}'), (0x0744, '\u{BAB0}'),
    (0x0745, '\u{BAB2}'), (0x0746, '\u{BAB8}'), (0x0747, '\u{BAB9}'), (0x0748, '\u{BABB}'), (0x0749, '\u{BABD}'), (0x074A, '\u{BAC4}'),
    (0x074B, '\u{BAC8}'), (0x074C, '\u{BAD8}'), (0x074D, '\u{BAD9}'), (0x074E, '\u{BAFC}'), (0x074F, '\u{BB00}'), (0x0750, '\u{BB04}'),
    (0x0751, '\u{BB0D}'), (0x0752, '\u{BB0F}'), (0x0753, '\u{BB11}'), (0x0754, '\u{BB18}'), (0x0755, '\u{BB1C}'), (0x0756, '\u{BB20}'),
    (0x0757, '\u{BB29}'), (0x0758, '\u{BB2B}'), (0x0759, '\u{BB34}'), (0x075A, '\u{BB35}'), (0x075B, '\u{BB36}'), (0x075C, '\u{BB38}'),
    (0x075D, '\u{BB3B}'), (0x075E, '\u{BB3C}'), (0x075F, '\u{BB3D}'), (0x0760, '\u{BB3E}'), (0x0761, '\u{BB44}'), (0x0762, '\u{BB45}'),
    (0x0763, '\u{BB47}'), (0x0764, '\u{BB49}'), (0x0765, '\u{BB4D}'), (0x0766, '\u{BB4F}'), (0x0767, '\u{BB50}'), (0x0768, '\u{BB54}'),
    (0x0769, '\u{BB58}'), (0x076A, '\u{BB61}'), (0x076B, '\u{BB63}'), (0x076C, '\u{BB6C}'), (0x076D, '\u{BB88}'), (0x076E, '\u{BB8C}'),
    (0x076F, '\u{BB90}'), (0x0770, '\u{BBA4}'), (0x0771, '\u{BBA8}'), (0x0772, '\u{BBAC}'), (0x0773, '\u{BBB4}'), (0x0774, '\u{BBB7}'),
    (0x0775, '\u{BBC0}'), (0x0776, '\u{BBC4}'), (0x0777, '\u{BBC8}'), (0x0778, '\u{BBD0}'), (0x0779, '\u{BBD3}'), (0x077A, '\u{BBF8}'),
    (0x077B, '\u{BBF9}'), (0x077C, '\u{BBFC}'), (0x077D, '\u{BBFF}'), (0x077E, '\u{BC00}'), (0x077F, '\u{BC02}'), (0x0780, '\u{BC08}'),
    (0x0781, '\u{BC09}'), (0x0782, '\u{BC0B}'), (0x0783, '\u{BC0C}'), (0x0784, '\u{BC0D}'), (0x0785, '\u{BC0F}'), (0x0786, '\u{BC11}'),
    (0x0787, '\u{BC14}'), (0x0788, '\u{BC15}'), (0x0789, '\u{BC16}'), (0x078A, '\u{BC17}'), (0x078B, '\u{BC18}'), (0x078C, '\u{BC1B}'),
    (0x078D, '\u{BC1C}'), (0x078E, '\u{BC1D}'), (0x078F, '\u{BC1E}'), (0x0790, '\u{BC1F}'), (0x0791, '\u{BC24}'), (0x0792, '\u{BC25}'),
    (0x0793, '\u{BC27}'), (0x0794, '\u{BC29}'), (0x0795, '\u{BC2D}'), (0x0796, '\u{BC30}'), (0x0797, '\u{BC31}'), (0x0798, '\u{BC34}'),
    (0x0799, '\u{BC38}'), (0x079A, '\u{BC40}'), (0x079B, '\u{BC41}'), (0x079C, '\u{BC43}'), (0x079D, '\u{BC44}'), (0x079E, '\u{BC45}'),
    (0x079F, '\u{BC49}'), (0x07A0, '\u{BC4C}'), (0x07A1, '\u{BC4D}'), (0x07A2, '\u{BC50}'), (0x07A3, '\u{BC5D}'), (0x07A4, '\u{BC84}'),
    (0x07A5, '\u{BC85}'), (0x07A6, '\u{BC88}'), (0x07A7, '\u{BC8B}'), (0x07A8, '\u{BC8C}'), (0x07A9, '\u{BC8E}'), (0x07AA, '\u{BC94}'),
    (0x07AB, '\u{BC95}'), (0x07AC, '\u{BC97}'), (0x07AD, '\u{BC99}'), (0x07AE, '\u{BC9A}'), (0x07AF, '\u{BCA0}'), (0x07B0, '\u{BCA1}'),
    (0x07B1, '\u{BCA4}'), (0x07B2, '\u{BCA7}'), (0x07B3, '\u{BCA8}'), (0x07B4, '\u{BCB0}'), (0x07B5, '\u{BCB1}'), (0x07B6, '\u{BCB3}'),
    (0x07B7, '\u{BCB4}'), (0x07B8, '\u{BCB5}'), (0x07B9, '\u{BCBC}'), (0x07BA, '\u{BCBD}'), (0x07BB, '\u{BCC0}'), (0x07BC, '\u{BCC4}'),
    (0x07BD, '\u{BCCD}'), (0x07BE, '\u{BCCF}'), (0x07BF, '\u{BCD0}'), (0x07C0, '\u{BCD1}'), (0x07C1, '\u{BCD5}'), (0x07C2, '\u{BCD8}'),
    (0x07C3, '\u{BCDC}'), (0x07C4, '\u{BCF4}'), (0x07C5, '\u{BCF5}'), (0x07C6, '\u{BCF6}'), (0x07C7, '\u{BCF8}'), (0x07C8, '\u{BCFC}'),
    (0x07C9, '\u{BD04}'), (0x07CA, '\u{BD05}'), (0x07CB, '\u{BD07}'), (0x07CC, '\u{BD09}'), (0x07CD, '\u{BD10}'), (0x07CE, '\u{BD14}'),
    (0x07CF, '\u{BD24}'), (0x07D0, '\u{BD2C}'), (0x07D1, '\u{BD40}'), (0x07D2, '\u{BD48}'), (0x07D3, '\u{BD49}'), (0x07D4, '\u{BD4C}'),
    (0x07D5, '\u{BD50}'), (0x07D6, '\u{BD58}'), (0x07D7, '\u{BD59}'), (0x07D8, '\u{BD64}'), (0x07D9, '\u{BD68}'), (0x07DA, '\u{BD80}'),
    (0x07DB, '\u{BD81}'), (0x07DC, '\u{BD84}'), (0x07DD, '\u{BD87}'), (0x07DE, '\u{BD88}'), (0x07DF, '\u{BD89}'), (0x07E0, '\u{BD8A}'),
    (0x07E1, '\u{BD90}'), (0x07E2, '\u{BD91}'), (0x07E3, '\u{BD93}'), (0x07E4, '\u{BD95}'), (0x07E5, '\u{BD99}'), (0x07E6, '\u{BD9A}'),
    (0x07E7, '\u{BD9C}'), (0x07E8, '\u{BDA4}'), (0x07E9, '\u{BDB0}'), (0x07EA, '\u{BDB8}'), (0x07EB, '\u{BDD4}'), (0x07EC, '\u{BDD5}'),
    (0x07ED, '\u{BDD8}'), (0x07EE, '\u{BDDC}'), (0x07EF, '\u{BDE9}'), (0x07F0, '\u{BDF0}'), (0x07F1, '\u{BDF4}'), (0x07F2, '\u{BDF8}'),
    (0x07F3, '\u{BE00}'), (0x07F4, '\u{BE03}'), (0x07F5, '\u{BE05}'), (0x07F6, '\u{BE0C}'), (0x07F7, '\u{BE0D}'), (0x07F8, '\u{BE10}'),
    (0x07F9, '\u{BE14}'), (0x07FA, '\u{BE1C}'), (0x07FB, '\u{BE1D}'), (0x07FC, '\u{BE1F}'), (0x07FD, '\u{BE44}'), (0x07FE, '\u{BE45}'),
    (0x07FF, '\u{BE48}'), (0x0800, '\u{BE4C}'), (0x0801, '\u{BE4E}'), (0x0802, '\u{BE54}'), (0x0803, '\u{BE55}'), (0x0804, '\u{BE57}'),
    (0x0805, '\u{BE59}'), (0x0806, '\u{BE5A}'), (0x0807, '\u{BE5B}'), (0x0808, '\u{BE60}'), (0x0809, '\u{BE61}'), (0x080A, '\u{BE64}'),
    (0x080B, '\u{BE68}'), (0x080C, '\u{BE6A}'), (0x080D, '\u{BE70}'), (0x080E, '\u{BE71}'), (0x080F, '\u{BE73}'), (0x0810, '\u{BE74}'),
    (0x0811, '\u{BE75}'), (0x0812, '\u{BE7B}'), (0x0813, '\u{BE7C}'), (0x0814, '\u{BE7D}'), (0x0815, '\u{BE80}'), (0x0816, '\u{BE84}'),
    (0x0817, '\u{BE8C}'), (0x0818, '\u{BE8D}'), (0x0819, '\u{BE8F}'), (0x081A, '\u{BE90}'), (0x081B, '\u{BE91}'), (0x081C, '\u{BE98}'),
    (0x081D, '\u{BE99}'), (0x081E, '\u{BEA8}'), (0x081F, '\u{BED0}'), (0x0820, '\u{BED1}'), (0x0821, '\u{BED4}'), (0x0822, '\u{BED7}'),
    (0x0823, '\u{BED8}'), (0x0824, '\u{BEE0}'), (0x0825, '\u{BEE3}'), (0x0826, '\u{BEE4}'), (0x0827, '\u{BEE5}'), (0x0828, '\u{BEEC}'),
    (0x0829, '\u{BF01}'), (0x082A, '\u{BF08}'), (0x082B, '\u{BF09}'), (0x082C, '\u{BF18}'), (0x082D, '\u{BF19}'), (0x082E, '\u{BF1B}'),
    (0x082F, '\u{BF1C}'), (0x0830, '\u{BF1D}'), (0x0831, '\u{BF40}'), (0x0832, '\u{BF41}'), (0x0833, '\u{BF44}'), (0x0834, '\u{BF48}'),
    (0x0835, '\u{BF50}'), (0x0836, '\u{BF51}'), (0x0837, '\u{BF55}'), (0x0838, '\u{BF94}'), (0x0839, '\u{BFB0}'), (0x083A, '\u{BFC5}'),
    (0x083B, '\u{BFCC}'), (0x083C, '\u{BFCD}'), (0x083D, '\u{BFD0}'), (0x083E, '\u{BFD4}'), (0x083F, '\u{BFDC}'), (0x0840, '\u{BFDF}'),
    (0x0841, '\u{BFE1}'), (0x0842, '\u{C03C}'), (0x0843, '\u{C051}'), (0x0844, '\u{C058}'), (0x0845, '\u{C05C}'), (0x0846, '\u{C060}'),
    (0x0847, '\u{C068}'), (0x0848, '\u{C069}'), (0x0849, '\u{C090}'), (0x084A, '\u{C091}'), (0x084B, '\u{C094}'), (0x084C, '\u{C098}'),
    (0x084D, '\u{C0A0}'), (0x084E, '\u{C0A1}'), (0x084F, '\u{C0A3}'), (0x0850, '\u{C0A5}'), (0x0851, '\u{C0AC}'), (0x0852, '\u{C0AD}'),
    (0x0853, '\u{C0AF}'), (0x0854, '\u{C0B0}'), (0x0855, '\u{C0B3}'), (0x0856, '\u{C0B4}'), (0x0857, '\u{C0B5}'), (0x0858, '\u{C0B6}'),
    (0x0859, '\u{C0BC}'), (0x085A, '\u{C0BD}'), (0x085B, '\u{C0BF}'), (0x085C, '\u{C0C0}'), (0x085D, '\u{C0C1}'), (0x085E, '\u{C0C5}'),
    (0x085F, '\u{C0C8}'), (0x0860, '\u{C0C9}'), (0x0861, '\u{C0CC}'), (0x0862, '\u{C0D0}'), (0x0863, '\u{C0D8}'), (0x0864, '\u{C0D9}'),
    (0x0865, '\u{C0DB}'), (0x0866, '\u{C0DC}'), (0x0867, '\u{C0DD}'), (0x0868, '\u{C0E4}'), (0x0869, '\u{C0E5}'), (0x086A, '\u{C0E8}'),
    (0x086B, '\u{C0EC}'), (0x086C, '\u{C0F4}'), (0x086D, '\u{C0F5}'), (0x086E, '\u{C0F7}'), (0x086F, '\u{C0F9}'), (0x0870, '\u{C100}'),
    (0x0871, '\u{C104}'), (0x0872, '\u{C108}'), (0x0873, '\u{C110}'), (0x0874, '\u{C115}'), (0x0875, '\u{C11C}'), (0x0876, '\u{C11D}'),
    (0x0877, '\u{C11E}'), (0x0878, '\u{C11F}'), (0x0879, '\u{C120}'), (0x087A, '\u{C123}'), (0x087B, '\u{C124}'), (0x087C, '\u{C126}'),
    (0x087D, '\u{C127}'), (0x087E, '\u{C12C}'), (0x087F, '\u{C12D}'), (0x0880, '\u{C12F}'), (0x0881, '\u{C130}'), (0x0882, '\u{C131}'),
    (0x0883, '\u{C136}'), (0x0884, '\u{C138}'), (0x0885, '\u{C139}'), (0x0886, '\u{C13C}'), (0x0887, '\u{C140}'), (0x0888, '\u{C148}'),
    (0x0889, '\u{C149}'), (0x088A, '\u{C14B}'), (0x088B, '\u{C14C}'), (0x088C, '\u{C14D}'), (0x088D, '\u{C154}'), (0x088E, '\u{C155}'),
    (0x088F, '\u{C158}'), (0x0890, '\u{C15C}'), (0x0891, '\u{C164}'), (0x0892, '\u{C165}'), (0x0893, '\u{C167}'), (0x0894, '\u{C168}'),
    (0x0895, '\u{C169}'), (0x0896, '\u{C170}'), (0x0897, '\u{C174}'), (0x0898, '\u{C178}'), (0x0899, '\u{C185}'), (0x089A, '\u{C18C}'),
    (0x089B, '\u{C18D}'), (0x089C, '\u{C18E}'), (0x089D, '\u{C190}'), (0x089E, '\u{C194}'), (0x089F, '\u{C196}'), (0x08A0, '\u{C19C}'),
    (0x08A1, '\u{C19D}'), (0x08A2, '\u{C19F}'), (0x08A3, '\u{C1A1}'), (0x08A4, '\u{C1A5}'), (0x08A5, '\u{C1A8}'), (0x08A6, '\u{C1A9}'),
    (0x08A7, '\u{C1AC}'), (0x08A8, '\u{C1B0}'), (0x08A9, '\u{C1BD}'), (0x08AA, '\u{C1C4}'), (0x08AB, '\u{C1C8}'), (0x08AC, '\u{C1CC}'),
    (0x08AD, '\u{C1D4}'), (0x08AE, '\u{C1D7}'), (0x08AF, '\u{C1D8}'), (0x08B0, '\u{C1E0}'), (0x08B1, '\u{C1E4}'), (0x08B2, '\u{C1E8}'),
    (0x08B3, '\u{C1F0}'), (0x08B4, '\u{C1F1}'), (0x08B5, '\u{C1F3}'), (0x08B6, '\u{C1FC}'), (0x08B7, '\u{C1FD}'), (0x08B8, '\u{C200}'),
    (0x08B9, '\u{C204}'), (0x08BA, '\u{C20C}'), (0x08BB, '\u{C20D}'), (0x08BC, '\u{C20F}'), (0x08BD, '\u{C211}'), (0x08BE, '\u{C218}'),
    (0x08BF, '\u{C219}'), (0x08C0, '\u{C21C}'), (0x08C1, '\u{C21F}'), (0x08C2, '\u{C220}'), (0x08C3, '\u{C228}'), (0x08C4, '\u{C229}'),
    (0x08C5, '\u{C22B}'), (0x08C6, '\u{C22D}'), (0x08C7, '\u{C22F}'), (0x08C8, '\u{C231}'), (0x08C9, '\u{C232}'), (0x08CA, '\u{C234}'),
    (0x08CB, '\u{C248}'), (0x08CC, '\u{C250}'), (0x08CD, '\u{C251}'), (0x08CE, '\u{C254}'), (0x08CF, '\u{C258}'), (0x08D0, '\u{C260}'),
    (0x08D1, '\u{C265}'), (0x08D2, '\u{C26C}'), (0x08D3, '\u{C26D}'), (0x08D4, '\u{C270}'), (0x08D5, '\u{C274}'), (0x08D6, '\u{C27C}'),
    (0x08D7, '\u{C27D}'), (0x08D8, '\u{C27F}'), (0x08D9, '\u{C281}'), (0x08DA, '\u{C288}'), (0x08DB, '\u{C289}'), (0x08DC, '\u{C290}'),
    (0x08DD, '\u{C298}'), (0x08DE, '\u{C29B}'), (0x08DF, '\u{C29D}'), (0x08E0, '\u{C2A4}'), (0x08E1, '\u{C2A5}'), (0x08E2, '\u{C2A8}'),
    (0x08E3, '\u{C2AC}'), (0x08E4, '\u{C2AD}'), (0x08E5, '\u{C2B4}'), (0x08E6, '\u{C2B5}'), (0x08E7, '\u{C2B7}'), (0x08E8, '\u{C2B9}'),
    (0x08E9, '\u{C2DC}'), (0x08EA, '\u{C2DD}'), (0x08EB, '\u{C2E0}'), (0x08EC, '\u{C2E3}'), (0x08ED, '\u{C2E4}'), (0x08EE, '\u{C2EB}'),
    (0x08EF, '\u{C2EC}'), (0x08F0, '\u{C2ED}'), (0x08F1, '\u{C2EF}'), (0x08F2, '\u{C2F1}'), (0x08F3, '\u{C2F6}'), (0x08F4, '\u{C2F8}'),
    (0x08F5, '\u{C2F9}'), (0x08F6, '\u{C2FB}'), (0x08F7, '\u{C2FC}'), (0x08F8, '\u{C300}'), (0x08F9, '\u{C308}'), (0x08FA, '\u{C309}'),
    (0x08FB, '\u{C30C}'), (0x08FC, '\u{C30D}'), (0x08FD, '\u{C313}'), (0x08FE, '\u{C314}'), (0x08FF, '\u{C315}'), (0x0900, '\u{C318}'),
    (0x0901, '\u{C31C}'), (0x0902, '\u{C324}'), (0x0903, '\u{C325}'), (0x0904, '\u{C328}'), (0x0905, '\u{C329}'), (0x0906, '\u{C345}'),
    (0x0907, '\u{C368}'), (0x0908, '\u{C369}'), (0x0909, '\u{C36C}'), (0x090A, '\u{C370}'), (0x090B, '\u{C372}'), (0x090C, '\u{C378}'),
    (0x090D, '\u{C379}'), (0x090E, '\u{C37C}'), (0x090F, '\u{C37D}'), (0x0910, '\u{C384}'), (0x0911, '\u{C388}'), (0x0912, '\u{C38C}'),
    (0x0913, '\u{C3C0}'), (0x0914, '\u{C3D8}'), (0x0915, '\u{C3D9}'), (0x0916, '\u{C3DC}'), (0x0917, '\u{C3DF}'), (0x0918, '\u{C3E0}'),
    (0x0919, '\u{C3E2}'), (0x091A, '\u{C3E8}'), (0x091B, '\u{C3E9}'), (0x091C, '\u{C3ED}'), (0x091D, '\u{C3F4}'), (0x091E, '\u{C3F5}'),
    (0x091F, '\u{C3F8}'), (0x0920, '\u{C408}'), (0x0921, '\u{C410}'), (0x0922, '\u{C424}'), (0x0923, '\u{C42C}'), (0x0924, '\u{C430}'),
    (0x0925, '\u{C434}'), (0x0926, '\u{C43C}'), (0x0927, '\u{C43D}'), (0x0928, '\u{C448}'), (0x0929, '\u{C464}'), (0x092A, '\u{C465}'),
    (0x092B, '\u{C468}'), (0x092C, '\u{C46C}'), (0x092D, '\u{C474}'), (0x092E, '\u{C475}'), (0x092F, '\u{C479}'), (0x0930, '\u{C480}'),
    (0x0931, '\u{C494}'), (0x0932, '\u{C49C}'), (0x0933, '\u{C4B8}'), (0x0934, '\u{C4BC}'), (0x0935, '\u{C4E9}'), (0x0936, '\u{C4F0}'),
    (0x0937, '\u{C4F1}'), (0x0938, '\u{C4F4}'), (0x0939, '\u{C4F8}'), (0x093A, '\u{C4FA}'), (0x093B, '\u{C4FF}'), (0x093C, '\u{C500}'),
    (0x093D, '\u{C501}'), (0x093E, '\u{C50C}'), (0x093F, '\u{C510}'), (0x0940, '\u{C514}'), (0x0941, '\u{C51C}'), (0x0942, '\u{C528}'),
    (0x0943, '\u{C529}'), (0x0944, '\u{C52C}'), (0x0945, '\u{C530}'), (0x0946, '\u{C538}'), (0x0947, '\u{C539}'), (0x0948, '\u{C53B}'),
    (0x0949, '\u{C53D}'), (0x094A, '\u{C544}'), (0x094B, '\u{C545}'), (0x094C, '\u{C548}'), (0x094D, '\u{C549}'), (0x094E, '\u{C54A}'),
    (0x094F, '\u{C54C}'), (0x0950, '\u{C54D}'), (0x0951, '\u{C54E}'), (0x0952, '\u{C553}'), (0x0953, '\u{C554}'), (0x0954, '\u{C555}'),
    (0x0955, '\u{C557}'), (0x0956, '\u{C558}'), (0x0957, '\u{C559}'), (0x0958, '\u{C55D}'), (0x0959, '\u{C55E}'), (0x095A, '\u{C560}'),
    (0x095B, '\u{C561}'), (0x095C, '\u{C564}'), (0x095D, '\u{C568}'), (0x095E, '\u{C570}'), (0x095F, '\u{C571}'), (0x0960, '\u{C573}'),
    (0x0961, '\u{C574}'), (0x0962, '\u{C575}'), (0x0963, '\u{C57C}'), (0x0964, '\u{C57D}'), (0x0965, '\u{C580}'), (0x0966, '\u{C584}'),
    (0x0967, '\u{C587}'), (0x0968, '\u{C58C}'), (0x0969, '\u{C58D}'), (0x096A, '\u{C58F}'), (0x096B, '\u{C591}'), (0x096C, '\u{C595}'),
    (0x096D, '\u{C597}'), (0x096E, '\u{C598}'), (0x096F, '\u{C59C}'), (0x0970, '\u{C5A0}'), (0x0971, '\u{C5A9}'), (0x0972, '\u{C5B4}'),
    (0x0973, '\u{C5B5}'), (0x0974, '\u{C5B8}'), (0x0975, '\u{C5B9}'), (0x0976, '\u{C5BB}'), (0x0977, '\u{C5BC}'), (0x0978, '\u{C5BD}'),
    (0x0979, '\u{C5BE}'), (0x097A, '\u{C5C4}'), (0x097B, '\u{C5C5}'), (0x097C, '\u{C5C6}'), (0x097D, '\u{C5C7}'), (0x097E, '\u{C5C8}'),
    (0x097F, '\u{C5C9}'), (0x0980, '\u{C5CA}'), (0x0981, '\u{C5CC}'), (0x0982, '\u{C5CE}'), (0x0983, '\u{C5D0}'), (0x0984, '\u{C5D1}'),
    (0x0985, '\u{C5D4}'), (0x0986, '\u{C5D8}'), (0x0987, '\u{C5E0}'), (0x0988, '\u{C5E1}'), (0x0989, '\u{C5E3}'), (0x098A, '\u{C5E5}'),
    (0x098B, '\u{C5EC}'), (0x098C, '\u{C5ED}'), (0x098D, '\u{C5EE}'), (0x098E, '\u{C5F0}'), (0x098F, '\u{C5F4}'), (0x0990, '\u{C5F6}'),
    (0x0991, '\u{C5F7}'), (0x0992, '\u{C5FC}'), (0x0993, '\u{C5FD}'), (0x0994, '\u{C5FE}'), (0x0995, '\u{C5FF}'), (0x0996, '\u{C600}'),
    (0x0997, '\u{C601}'), (0x0998, '\u{C605}'), (0x0999, '\u{C606}'), (0x099A, '\u{C607}'), (0x099B, '\u{C608}'), (0x099C, '\u{C60C}'),
    (0x099D, '\u{C610}'), (0x099E, '\u{C618}'), (0x099F, '\u{C619}'), (0x09A0, '\u{C61B}'), (0x09A1, '\u{C61C}'), (0x09A2, '\u{C624}'),
    (0x09A3, '\u{C625}'), (0x09A4, '\u{C628}'), (0x09A5, '\u{C62C}'), (0x09A6, '\u{C62D}'), (0x09A7, '\u{C62E}'), (0x09A8, '\u{C630}'),
    (0x09A9, '\u{C633}'), (0x09AA, '\u{C634}'), (0x09AB, '\u{C635}'), (0x09AC, '\u{C637}'), (0x09AD, '\u{C639}'), (0x09AE, '\u{C63B}'),
    (0x09AF, '\u{C640}'), (0x09B0, '\u{C641}'), (0x09B1, '\u{C644}'), (0x09B2, '\u{C648}'), (0x09B3, '\u{C650}'), (0x09B4, '\u{C651}'),
    (0x09B5, '\u{C653}'), (0x09B6, '\u{C654}'), (0x09B7, '\u{C655}'), (0x09B8, '\u{C65C}'), (0x09B9, '\u{C65D}'), (0x09BA, '\u{C660}'),
    (0x09BB, '\u{C66C}'), (0x09BC, '\u{C66F}'), (0x09BD, '\u{C671}'), (0x09BE, '\u{C678}'), (0x09BF, '\u{C679}'), (0x09C0, '\u{C67C}'),
    (0x09C1, '\u{C680}'), (0x09C2, '\u{C688}'), (0x09C3, '\u{C689}'), (0x09C4, '\u{C68B}'), (0x09C5, '\u{C68D}'), (0x09C6, '\u{C694}'),
    (0x09C7, '\u{C695}'), (0x09C8, '\u{C698}'), (0x09C9, '\u{C69C}'), (0x09CA, '\u{C6A4}'), (0x09CB, '\u{C6A5}'), (0x09CC, '\u{C6A7}'),
    (0x09CD, '\u{C6A9}'), (0x09CE, '\u{C6B0}'), (0x09CF, '\u{C6B1}'), (0x09D0, '\u{C6B4}'), (0x09D1, '\u{C6B8}'), (0x09D2, '\u{C6B9}'),
    (0x09D3, '\u{C6BA}'), (0x09D4, '\u{C6C0}'), (0x09D5, '\u{C6C1}'), (0x09D6, '\u{C6C3}'), (0x09D7, '\u{C6C5}'), (0x09D8, '\u{C6CC}'),
    (0x09D9, '\u{C6CD}'), (0x09DA, '\u{C6D0}'), (0x09DB, '\u{C6D4}'), (0x09DC, '\u{C6DC}'), (0x09DD, '\u{C6DD}'), (0x09DE, '\u{C6E0}'),
    (0x09DF, '\u{C6E1}'), (0x09E0, '\u{C6E8}'), (0x09E1, '\u{C6E9}'), (0x09E2, '\u{C6EC}'), (0x09E3, '\u{C6F0}'), (0x09E4, '\u{C6F8}'),
    (0x09E5, '\u{C6F9}'), (0x09E6, '\u{C6FD}'), (0x09E7, '\u{C704}'), (0x09E8, '\u{C705}'), (0x09E9, '\u{C708}'), (0x09EA, '\u{C70C}'),
    (0x09EB, '\u{C714}'), (0x09EC, '\u{C715}'), (0x09ED, '\u{C717}'), (0x09EE, '\u{C719}'), (0x09EF, '\u{C720}'), (0x09F0, '\u{C721}'),
    (0x09F1, '\u{C724}'), (0x09F2, '\u{C728}'), (0x09F3, '\u{C730}'), (0x09F4, '\u{C731}'), (0x09F5, '\u{C733}'), (0x09F6, '\u{C735}'),
    (0x09F7, '\u{C737}'), (0x09F8, '\u{C73C}'), (0x09F9, '\u{C73D}'), (0x09FA, '\u{C740}'), (0x09FB, '\u{C744}'), (0x09FC, '\u{C74A}'),
    (0x09FD, '\u{C74C}'), (0x09FE, '\u{C74D}'), (0x09FF, '\u{C74F}'), (0x0A00, '\u{C751}'), (0x0A01, '\u{C752}'), (0x0A02, '\u{C753}'),
    (0x0A03, '\u{C754}'), (0x0A04, '\u{C755}'), (0x0A05, '\u{C756}'), (0x0A06, '\u{C757}'), (0x0A07, '\u{C758}'), (0x0A08, '\u{C75C}'),
    (0x0A09, '\u{C760}'), (0x0A0A, '\u{C768}'), (0x0A0B, '\u{C76B}'), (0x0A0C, '\u{C774}'), (0x0A0D, '\u{C775}'), (0x0A0E, '\u{C778}'),
    (0x0A0F, '\u{C77C}'), (0x0A10, '\u{C77D}'), (0x0A11, '\u{C77E}'), (0x0A12, '\u{C783}'), (0x0A13, '\u{C784}'), (0x0A14, '\u{C785}'),
    (0x0A15, '\u{C787}'), (0x0A16, '\u{C788}'), (0x0A17, '\u{C789}'), (0x0A18, '\u{C78A}'), (0x0A19, '\u{C78E}'), (0x0A1A, '\u{C790}'),
    (0x0A1B, '\u{C791}'), (0x0A1C, '\u{C794}'), (0x0A1D, '\u{C796}'), (0x0A1E, '\u{C797}'), (0x0A1F, '\u{C798}'), (0x0A20, '\u{C79A}'),
    (0x0A21, '\u{C7A0}'), (0x0A22, '\u{C7A1}'), (0x0A23, '\u{C7A3}'), (0x0A24, '\u{C7A4}'), (0x0A25, '\u{C7A5}'), (0x0A26, '\u{C7A6}'),
    (0x0A27, '\u{C7AC}'), (0x0A28, '\u{C7AD}'), (0x0A29, '\u{C7B0}'), (0x0A2A, '\u{C7B4}'), (0x0A2B, '\u{C7BC}'), (0x0A2C, '\u{C7BD}'),
    (0x0A2D, '\u{C7BF}'), (0x0A2E, '\u{C7C0}'), (0x0A2F, '\u{C7C1}'), (0x0A30, '\u{C7C8}'), (0x0A31, '\u{C7C9}'), (0x0A32, '\u{C7CC}'),
    (0x0A33, '\u{C7CE}'), (0x0A34, '\u{C7D0}'), (0x0A35, '\u{C7D8}'), (0x0A36, '\u{C7DD}'), (0x0A37, '\u{C7E4}'), (0x0A38, '\u{C7E8}'),
    (0x0A39, '\u{C7EC}'), (0x0A3A, '\u{C800}'), (0x0A3B, '\u{C801}'), (0x0A3C, '\u{C804}'), (0x0A3D, '\u{C808}'), (0x0A3E, '\u{C80A}'),
    (0x0A3F, '\u{C810}'), (0x0A40, '\u{C811}'), (0x0A41, '\u{C813}'), (0x0A42, '\u{C815}'), (0x0A43, '\u{C816}'), (0x0A44, '\u{C81C}'),
    (0x0A45, '\u{C81D}'), (0x0A46, '\u{C820}'), (0x0A47, '\u{C824}'), (0x0A48, '\u{C82C}'), (0x0A49, '\u{C82D}'), (0x0A4A, '\u{C82F}'),
    (0x0A4B, '\u{C831}'), (0x0A4C, '\u{C838}'), (0x0A4D, '\u{C83C}'), (0x0A4E, '\u{C840}'), (0x0A4F, '\u{C848}'), (0x0A50, '\u{C849}'),
    (0x0A51, '\u{C84C}'), (0x0A52, '\u{C84D}'), (0x0A53, '\u{C854}'), (0x0A54, '\u{C870}'), (0x0A55, '\u{C871}'), (0x0A56, '\u{C874}'),
    (0x0A57, '\u{C878}'), (0x0A58, '\u{C87A}'), (0x0A59, '\u{C880}'), (0x0A5A, '\u{C881}'), (0x0A5B, '\u{C883}'), (0x0A5C, '\u{C885}'),
    (0x0A5D, '\u{C886}'), (0x0A5E, '\u{C887}'), (0x0A5F, '\u{C88B}'), (0x0A60, '\u{C88C}'), (0x0A61, '\u{C88D}'), (0x0A62, '\u{C894}'),
    (0x0A63, '\u{C89D}'), (0x0A64, '\u{C89F}'), (0x0A65, '\u{C8A1}'), (0x0A66, '\u{C8A8}'), (0x0A67, '\u{C8BC}'), (0x0A68, '\u{C8BD}'),
    (0x0A69, '\u{C8C4}'), (0x0A6A, '\u{C8C8}'), (0x0A6B, '\u{C8CC}'), (0x0A6C, '\u{C8D4}'), (0x0A6D, '\u{C8D5}'), (0x0A6E, '\u{C8D7}'),
    (0x0A6F, '\u{C8D9}'), (0x0A70, '\u{C8E0}'), (0x0A71, '\u{C8E1}'), (0x0A72, '\u{C8E4}'), (0x0A73, '\u{C8F5}'), (0x0A74, '\u{C8FC}'),
    (0x0A75, '\u{C8FD}'), (0x0A76, '\u{C900}'), (0x0A77, '\u{C904}'), (0x0A78, '\u{C905}'), (0x0A79, '\u{C906}'), (0x0A7A, '\u{C90C}'),
    (0x0A7B, '\u{C90D}'), (0x0A7C, '\u{C90F}'), (0x0A7D, '\u{C911}'), (0x0A7E, '\u{C918}'), (0x0A7F, '\u{C92C}'), (0x0A80, '\u{C934}'),
    (0x0A81, '\u{C950}'), (0x0A82, '\u{C951}'), (0x0A83, '\u{C954}'), (0x0A84, '\u{C958}'), (0x0A85, '\u{C960}'), (0x0A86, '\u{C961}'),
    (0x0A87, '\u{C963}'), (0x0A88, '\u{C96C}'), (0x0A89, '\u{C970}'), (0x0A8A, '\u{C974}'), (0x0A8B, '\u{C97C}'), (0x0A8C, '\u{C988}'),
    (0x0A8D, '\u{C989}'), (0x0A8E, '\u{C98C}'), (0x0A8F, '\u{C990}'), (0x0A90, '\u{C998}'), (0x0A91, '\u{C999}'), (0x0A92, '\u{C99B}'),
    (0x0A93, '\u{C99D}'), (0x0A94, '\u{C9C0}'), (0x0A95, '\u{C9C1}'), (0x0A96, '\u{C9C4}'), (0x0A97, '\u{C9C7}'), (0x0A98, '\u{C9C8}'),
    (0x0A99, '\u{C9CA}'), (0x0A9A, '\u{C9D0}'), (0x0A9B, '\u{C9D1}'), (0x0A9C, '\u{C9D3}'), (0x0A9D, '\u{C9D5}'), (0x0A9E, '\u{C9D6}'),
    (0x0A9F, '\u{C9D9}'), (0x0AA0, '\u{C9DA}'), (0x0AA1, '\u{C9DC}'), (0x0AA2, '\u{C9DD}'), (0x0AA3, '\u{C9E0}'), (0x0AA4, '\u{C9E2}'),
    (0x0AA5, '\u{C9E4}'), (0x0AA6, '\u{C9E7}'), (0x0AA7, '\u{C9EC}'), (0x0AA8, '\u{C9ED}'), (0x0AA9, '\u{C9EF}'), (0x0AAA, '\u{C9F0}'),
    (0x0AAB, '\u{C9F1}'), (0x0AAC, '\u{C9F8}'), (0x0AAD, '\u{C9F9}'), (0x0AAE, '\u{C9FC}'), (0x0AAF, '\u{CA00}'), (0x0AB0, '\u{CA08}'),
    (0x0AB1, '\u{CA09}'), (0x0AB2, '\u{CA0B}'), (0x0AB3, '\u{CA0C}'), (0x0AB4, '\u{CA0D}'), (0x0AB5, '\u{CA14}'), (0x0AB6, '\u{CA18}'),
    (0x0AB7, '\u{CA29}'), (0x0AB8, '\u{CA4C}'), (0x0AB9, '\u{CA4D}'), (0x0ABA, '\u{CA50}'), (0x0ABB, '\u{CA54}'), (0x0ABC, '\u{CA5C}'),
    (0x0ABD, '\u{CA5D}'), (0x0ABE, '\u{CA5F}'), (0x0ABF, '\u{CA60}'), (0x0AC0, '\u{CA61}'), (0x0AC1, '\u{CA68}'), (0x0AC2, '\u{CA7D}'),
    (0x0AC3, '\u{CA84}'), (0x0AC4, '\u{CA98}'), (0x0AC5, '\u{CABC}'), (0x0AC6, '\u{CABD}'), (0x0AC7, '\u{CAC0}'), (0x0AC8, '\u{CAC4}'),
    (0x0AC9, '\u{CACC}'), (0x0ACA, '\u{CACD}'), (0x0ACB, '\u{CACF}'), (0x0ACC, '\u{CAD1}'), (0x0ACD, '\u{CAD3}'), (0x0ACE, '\u{CAD8}'),
    (0x0ACF, '\u{CAD9}'), (0x0AD0, '\u{CAE0}'), (0x0AD1, '\u{CAEC}'), (0x0AD2, '\u{CAF4}'), (0x0AD3, '\u{CB08}'), (0x0AD4, '\u{CB10}'),
    (0x0AD5, '\u{CB14}'), (0x0AD6, '\u{CB18}'), (0x0AD7, '\u{CB20}'), (0x0AD8, '\u{CB21}'), (0x0AD9, '\u{CB41}'), (0x0ADA, '\u{CB48}'),
    (0x0ADB, '\u{CB49}'), (0x0ADC, '\u{CB4C}'), (0x0ADD, '\u{CB50}'), (0x0ADE, '\u{CB58}'), (0x0ADF, '\u{CB59}'), (0x0AE0, '\u{CB5D}'),
    (0x0AE1, '\u{CB64}'), (0x0AE2, '\u{CB78}'), (0x0AE3, '\u{CB79}'), (0x0AE4, '\u{CB9C}'), (0x0AE5, '\u{CBB8}'), (0x0AE6, '\u{CBD4}'),
    (0x0AE7, '\u{CBE4}'), (0x0AE8, '\u{CBE7}'), (0x0AE9, '\u{CBE9}'), (0x0AEA, '\u{CC0C}'), (0x0AEB, '\u{CC0D}'), (0x0AEC, '\u{CC10}'),
    (0x0AED, '\u{CC14}'), (0x0AEE, '\u{CC1C}'), (0x0AEF, '\u{CC1D}'), (0x0AF0, '\u{CC21}'), (0x0AF1, '\u{CC22}'), (0x0AF2, '\u{CC27}'),
    (0x0AF3, '\u{CC28}'), (0x0AF4, '\u{CC29}'), (0x0AF5, '\u{CC2C}'), (0x0AF6, '\u{CC2E}'), (0x0AF7, '\u{CC30}'), (0x0AF8, '\u{CC38}'),
    (0x0AF9, '\u{CC39}'), (0x0AFA, '\u{CC3B}'), (0x0AFB, '\u{CC3C}'), (0x0AFC, '\u{CC3D}'), (0x0AFD, '\u{CC3E}'), (0x0AFE, '\u{CC44}'),
    (0x0AFF, '\u{CC45}'), (0x0B00, '\u{CC48}'), (0x0B01, '\u{CC4C}'), (0x0B02, '\u{CC54}'), (0x0B03, '\u{CC55}'), (0x0B04, '\u{CC57}'),
    (0x0B05, '\u{CC58}'), (0x0B06, '\u{CC59}'), (0x0B07, '\u{CC60}'), (0x0B08, '\u{CC64}'), (0x0B09, '\u{CC66}'), (0x0B0A, '\u{CC68}'),
    (0x0B0B, '\u{CC70}'), (0x0B0C, '\u{CC75}'), (0x0B0D, '\u{CC98}'), (0x0B0E, '\u{CC99}'), (0x0B0F, '\u{CC9C}'), (0x0B10, '\u{CCA0}'),
    (0x0B11, '\u{CCA8}'), (0x0B12, '\u{CCA9}'), (0x0B13, '\u{CCAB}'), (0x0B14, '\u{CCAC}'), (0x0B15, '\u{CCAD}'), (0x0B16, '\u{CCB4}'),
    (0x0B17, '\u{CCB5}'), (0x0B18, '\u{CCB8}'), (0x0B19, '\u{CCBC}'), (0x0B1A, '\u{CCC4}'), (0x0B1B, '\u{CCC5}'), (0x0B1C, '\u{CCC7}'),
    (0x0B1D, '\u{CCC9}'), (0x0B1E, '\u{CCD0}'), (0x0B1F, '\u{CCD4}'), (0x0B20, '\u{CCE4}'), (0x0B21, '\u{CCEC}'), (0x0B22, '\u{CCF0}'),
    (0x0B23, '\u{CD01}'), (0x0B24, '\u{CD08}'), (0x0B25, '\u{CD09}'), (0x0B26, '\u{CD0C}'), (0x0B27, '\u{CD10}'), (0x0B28, '\u{CD18}'),
    (0x0B29, '\u{CD19}'), (0x0B2A, '\u{CD1B}'), (0x0B2B, '\u{CD1D}'), (0x0B2C, '\u{CD24}'), (0x0B2D, '\u{CD28}'), (0x0B2E, '\u{CD2C}'),
    (0x0B2F, '\u{CD39}'), (0x0B30, '\u{CD5C}'), (0x0B31, '\u{CD60}'), (0x0B32, '\u{CD64}'), (0x0B33, '\u{CD6C}'), (0x0B34, '\u{CD6D}'),
    (0x0B35, '\u{CD6F}'), (0x0B36, '\u{CD71}'), (0x0B37, '\u{CD78}'), (0x0B38, '\u{CD88}'), (0x0B39, '\u{CD94}'), (0x0B3A, '\u{CD95}'),
    (0x0B3B, '\u{CD98}'), (0x0B3C, '\u{CD9C}'), (0x0B3D, '\u{CDA4}'), (0x0B3E, '\u{CDA5}'), (0x0B3F, '\u{CDA7}'), (0x0B40, '\u{CDA9}'),
    (0x0B41, '\u{CDB0}'), (0x0B42, '\u{CDC4}'), (0x0B43, '\u{CDCC}'), (0x0B44, '\u{CDD0}'), (0x0B45, '\u{CDE8}'), (0x0B46, '\u{CDEC}'),
    (0x0B47, '\u{CDF0}'), (0x0B48, '\u{CDF8}'), (0x0B49, '\u{CDF9}'), (0x0B4A, '\u{CDFB}'), (0x0B4B, '\u{CDFD}'), (0x0B4C, '\u{CE04}'),
    (0x0B4D, '\u{CE08}'), (0x0B4E, '\u{CE0C}'), (0x0B4F, '\u{CE14}'), (0x0B50, '\u{CE19}'), (0x0B51, '\u{CE20}'), (0x0B52, '\u{CE21}'),
    (0x0B53, '\u{CE24}'), (0x0B54, '\u{CE28}'), (0x0B55, '\u{CE30}'), (0x0B56, '\u{CE31}'), (0x0B57, '\u{CE33}'), (0x0B58, '\u{CE35}'),
    (0x0B59, '\u{CE58}'), (0x0B5A, '\u{CE59}'), (0x0B5B, '\u{CE5C}'), (0x0B5C, '\u{CE5F}'), (0x0B5D, '\u{CE60}'), (0x0B5E, '\u{CE61}'),
    (0x0B5F, '\u{CE68}'), (0x0B60, '\u{CE69}'), (0x0B61, '\u{CE6B}'), (0x0B62, '\u{CE6D}'), (0x0B63, '\u{CE74}'), (0x0B64, '\u{CE75}'),
    (0x0B65, '\u{CE78}'), (0x0B66, '\u{CE7C}'), (0x0B67, '\u{CE84}'), (0x0B68, '\u{CE85}'), (0x0B69, '\u{CE87}'), (0x0B6A, '\u{CE89}'),
    (0x0B6B, '\u{CE90}'), (0x0B6C, '\u{CE91}'), (0x0B6D, '\u{CE94}'), (0x0B6E, '\u{CE98}'), (0x0B6F, '\u{CEA0}'), (0x0B70, '\u{CEA1}'),
    (0x0B71, '\u{CEA3}'), (0x0B72, '\u{CEA4}'), (0x0B73, '\u{CEA5}'), (0x0B74, '\u{CEAC}'), (0x0B75, '\u{CEAD}'), (0x0B76, '\u{CEC1}'),
    (0x0B77, '\u{CEE4}'), (0x0B78, '\u{CEE5}'), (0x0B79, '\u{CEE8}'), (0x0B7A, '\u{CEEB}'), (0x0B7B, '\u{CEEC}'), (0x0B7C, '\u{CEF4}'),
    (0x0B7D, '\u{CEF5}'), (0x0B7E, '\u{CEF7}'), (0x0B7F, '\u{CEF8}'), (0x0B80, '\u{CEF9}'), (0x0B81, '\u{CF00}'), (0x0B82, '\u{CF01}'),
    (0x0B83, '\u{CF04}'), (0x0B84, '\u{CF08}'), (0x0B85, '\u{CF10}'), (0x0B86, '\u{CF11}'), (0x0B87, '\u{CF13}'), (0x0B88, '\u{CF15}'),
    (0x0B89, '\u{CF1C}'), (0x0B8A, '\u{CF20}'), (0x0B8B, '\u{CF24}'), (0x0B8C, '\u{CF2C}'), (0x0B8D, '\u{CF2D}'), (0x0B8E, '\u{CF2F}'),
    (0x0B8F, '\u{CF30}'), (0x0B90, '\u{CF31}'), (0x0B91, '\u{CF38}'), (0x0B92, '\u{CF54}'), (0x0B93, '\u{CF55}'), (0x0B94, '\u{CF58}'),
    (0x0B95, '\u{CF5C}'), (0x0B96, '\u{CF64}'), (0x0B97, '\u{CF65}'), (0x0B98, '\u{CF67}'), (0x0B99, '\u{CF69}'), (0x0B9A, '\u{CF70}'),
    (0x0B9B, '\u{CF71}'), (0x0B9C, '\u{CF74}'), (0x0B9D, '\u{CF78}'), (0x0B9E, '\u{CF80}'), (0x0B9F, '\u{CF85}'), (0x0BA0, '\u{CF8C}'),
    (0x0BA1, '\u{CFA1}'), (0x0BA2, '\u{CFA8}'), (0x0BA3, '\u{CFB0}'), (0x0BA4, '\u{CFC4}'), (0x0BA5, '\u{CFE0}'), (0x0BA6, '\u{CFE1}'),
    (0x0BA7, '\u{CFE4}'), (0x0BA8, '\u{CFE8}'), (0x0BA9, '\u{CFF0}'), (0x0BAA, '\u{CFF1}'), (0x0BAB, '\u{CFF3}'), (0x0BAC, '\u{CFF5}'),
    (0x0BAD, '\u{CFFC}'), (0x0BAE, '\u{D000}'), (0x0BAF, '\u{D004}'), (0x0BB0, '\u{D011}'), (0x0BB1, '\u{D018}'), (0x0BB2, '\u{D02D}'),
    (0x0BB3, '\u{D034}'), (0x0BB4, '\u{D035}'), (0x0BB5, '\u{D038}'), (0x0BB6, '\u{D03C}'), (0x0BB7, '\u{D044}'), (0x0BB8, '\u{D045}'),
    (0x0BB9, '\u{D047}'), (0x0BBA, '\u{D049}'), (0x0BBB, '\u{D050}'), (0x0BBC, '\u{D054}'), (0x0BBD, '\u{D058}'), (0x0BBE, '\u{D060}'),
    (0x0BBF, '\u{D06C}'), (0x0BC0, '\u{D06D}'), (0x0BC1, '\u{D070}'), (0x0BC2, '\u{D074}'), (0x0BC3, '\u{D07C}'), (0x0BC4, '\u{D07D}'),
    (0x0BC5, '\u{D081}'), (0x0BC6, '\u{D0A4}'), (0x0BC7, '\u{D0A5}'), (0x0BC8, '\u{D0A8}'), (0x0BC9, '\u{D0AC}'), (0x0BCA, '\u{D0B4}'),
    (0x0BCB, '\u{D0B5}'), (0x0BCC, '\u{D0B7}'), (0x0BCD, '\u{D0B9}'), (0x0BCE, '\u{D0C0}'), (0x0BCF, '\u{D0C1}'), (0x0BD0, '\u{D0C4}'),
    (0x0BD1, '\u{D0C8}'), (0x0BD2, '\u{D0C9}'), (0x0BD3, '\u{D0D0}'), (0x0BD4, '\u{D0D1}'), (0x0BD5, '\u{D0D3}'), (0x0BD6, '\u{D0D4}'),
    (0x0BD7, '\u{D0D5}'), (0x0BD8, '\u{D0DC}'), (0x0BD9, '\u{D0DD}'), (0x0BDA, '\u{D0E0}'), (0x0BDB, '\u{D0E4}'), (0x0BDC, '\u{D0EC}'),
    (0x0BDD, '\u{D0ED}'), (0x0BDE, '\u{D0EF}'), (0x0BDF, '\u{D0F0}'), (0x0BE0, '\u{D0F1}'), (0x0BE1, '\u{D0F8}'), (0x0BE2, '\u{D10D}'),
    (0x0BE3, '\u{D130}'), (0x0BE4, '\u{D131}'), (0x0BE5, '\u{D134}'), (0x0BE6, '\u{D138}'), (0x0BE7, '\u{D13A}'), (0x0BE8, '\u{D140}'),
    (0x0BE9, '\u{D141}'), (0x0BEA, '\u{D143}'), (0x0BEB, '\u{D144}'), (0x0BEC, '\u{D145}'), (0x0BED, '\u{D14C}'), (0x0BEE, '\u{D14D}'),
    (0x0BEF, '\u{D150}'), (0x0BF0, '\u{D154}'), (0x0BF1, '\u{D15C}'), (0x0BF2, '\u{D15D}'), (0x0BF3, '\u{D15F}'), (0x0BF4, '\u{D161}'),
    (0x0BF5, '\u{D168}'), (0x0BF6, '\u{D16C}'), (0x0BF7, '\u{D17C}'), (0x0BF8, '\u{D184}'), (0x0BF9, '\u{D188}'), (0x0BFA, '\u{D1A0}'),
    (0x0BFB, '\u{D1A1}'), (0x0BFC, '\u{D1A4}'), (0x0BFD, '\u{D1A8}'), (0x0BFE, '\u{D1B0}'), (0x0BFF, '\u{D1B1}'), (0x0C00, '\u{D1B3}'),
    (0x0C01, '\u{D1B5}'), (0x0C02, '\u{D1BA}'), (0x0C03, '\u{D1BC}'), (0x0C04, '\u{D1C0}'), (0x0C05, '\u{D1D8}'), (0x0C06, '\u{D1F4}'),
    (0x0C07, '\u{D1F8}'), (0x0C08, '\u{D207}'), (0x0C09, '\u{D209}'), (0x0C0A, '\u{D210}'), (0x0C0B, '\u{D22C}'), (0x0C0C, '\u{D22D}'),
    (0x0C0D, '\u{D230}'), (0x0C0E, '\u{D234}'), (0x0C0F, '\u{D23C}'), (0x0C10, '\u{D23D}'), (0x0C11, '\u{D23F}'), (0x0C12, '\u{D241}'),
    (0x0C13, '\u{D248}'), (0x0C14, '\u{D25C}'), (0x0C15, '\u{D264}'), (0x0C16, '\u{D280}'), (0x0C17, '\u{D281}'), (0x0C18, '\u{D284}'),
    (0x0C19, '\u{D288}'), (0x0C1A, '\u{D290}'), (0x0C1B, '\u{D291}'), (0x0C1C, '\u{D295}'), (0x0C1D, '\u{D29C}'), (0x0C1E, '\u{D2A0}'),
    (0x0C1F, '\u{D2A4}'), (0x0C20, '\u{D2AC}'), (0x0C21, '\u{D2B1}'), (0x0C22, '\u{D2B8}'), (0x0C23, '\u{D2B9}'), (0x0C24, '\u{D2BC}'),
    (0x0C25, '\u{D2BF}'), (0x0C26, '\u{D2C0}'), (0x0C27, '\u{D2C2}'), (0x0C28, '\u{D2C8}'), (0x0C29, '\u{D2C9}'), (0x0C2A, '\u{D2CB}'),
    (0x0C2B, '\u{D2D4}'), (0x0C2C, '\u{D2D8}'), (0x0C2D, '\u{D2DC}'), (0x0C2E, '\u{D2E4}'), (0x0C2F, '\u{D2E5}'), (0x0C30, '\u{D2F0}'),
    (0x0C31, '\u{D2F1}'), (0x0C32, '\u{D2F4}'), (0x0C33, '\u{D2F8}'), (0x0C34, '\u{D300}'), (0x0C35, '\u{D301}'), (0x0C36, '\u{D303}'),
    (0x0C37, '\u{D305}'), (0x0C38, '\u{D30C}'), (0x0C39, '\u{D30D}'), (0x0C3A, '\u{D30E}'), (0x0C3B, '\u{D310}'), (0x0C3C, '\u{D314}'),
    (0x0C3D, '\u{D316}'), (0x0C3E, '\u{D31C}'), (0x0C3F, '\u{D31D}'), (0x0C40, '\u{D31F}'), (0x0C41, '\u{D320}'), (0x0C42, '\u{D321}'),
    (0x0C43, '\u{D325}'), (0x0C44, '\u{D328}'), (0x0C45, '\u{D329}'), (0x0C46, '\u{D32C}'), (0x0C47, '\u{D330}'), (0x0C48, '\u{D338}'),
    (0x0C49, '\u{D339}'), (0x0C4A, '\u{D33B}'), (0x0C4B, '\u{D33C}'), (0x0C4C, '\u{D33D}'), (0x0C4D, '\u{D344}'), (0x0C4E, '\u{D345}'),
    (0x0C4F, '\u{D37C}'), (0x0C50, '\u{D37D}'), (0x0C51, '\u{D380}'), (0x0C52, '\u{D384}'), (0x0C53, '\u{D38C}'), (0x0C54, '\u{D38D}'),
    (0x0C55, '\u{D38F}'), (0x0C56, '\u{D390}'), (0x0C57, '\u{D391}'), (0x0C58, '\u{D398}'), (0x0C59, '\u{D399}'), (0x0C5A, '\u{D39C}'),
    (0x0C5B, '\u{D3A0}'), (0x0C5C, '\u{D3A8}'), (0x0C5D, '\u{D3A9}'), (0x0C5E, '\u{D3AB}'), (0x0C5F, '\u{D3AD}'), (0x0C60, '\u{D3B4}'),
    (0x0C61, '\u{D3B8}'), (0x0C62, '\u{D3BC}'), (0x0C63, '\u{D3C4}'), (0x0C64, '\u{D3C5}'), (0x0C65, '\u{D3C8}'), (0x0C66, '\u{D3C9}'),
    (0x0C67, '\u{D3D0}'), (0x0C68, '\u{D3D8}'), (0x0C69, '\u{D3E1}'), (0x0C6A, '\u{D3E3}'), (0x0C6B, '\u{D3EC}'), (0x0C6C, '\u{D3ED}'),
    (0x0C6D, '\u{D3F0}'), (0x0C6E, '\u{D3F4}'), (0x0C6F, '\u{D3FC}'), (0x0C70, '\u{D3FD}'), (0x0C71, '\u{D3FF}'), (0x0C72, '\u{D401}'),
    (0x0C73, '\u{D408}'), (0x0C74, '\u{D41D}'), (0x0C75, '\u{D440}'), (0x0C76, '\u{D444}'), (0x0C77, '\u{D45C}'), (0x0C78, '\u{D460}'),
    (0x0C79, '\u{D464}'), (0x0C7A, '\u{D46D}'), (0x0C7B, '\u{D46F}'), (0x0C7C, '\u{D478}'), (0x0C7D, '\u{D479}'), (0x0C7E, '\u{D47C}'),
    (0x0C7F, '\u{D47F}'), (0x0C80, '\u{D480}'), (0x0C81, '\u{D482}'), (0x0C82, '\u{D488}'), (0x0C83, '\u{D489}'), (0x0C84, '\u{D48B}'),
    (0x0C85, '\u{D48D}'), (0x0C86, '\u{D494}'), (0x0C87, '\u{D4A9}'), (0x0C88, '\u{D4CC}'), (0x0C89, '\u{D4D0}'), (0x0C8A, '\u{D4D4}'),
    (0x0C8B, '\u{D4DC}'), (0x0C8C, '\u{D4DF}'), (0x0C8D, '\u{D4E8}'), (0x0C8E, '\u{D4EC}'), (0x0C8F, '\u{D4F0}'), (0x0C90, '\u{D4F8}'),
    (0x0C91, '\u{D4FB}'), (0x0C92, '\u{D4FD}'), (0x0C93, '\u{D504}'), (0x0C94, '\u{D508}'), (0x0C95, '\u{D50C}'), (0x0C96, '\u{D514}'),
    (0x0C97, '\u{D515}'), (0x0C98, '\u{D517}'), (0x0C99, '\u{D53C}'), (0x0C9A, '\u{D53D}'), (0x0C9B, '\u{D540}'), (0x0C9C, '\u{D544}'),
    (0x0C9D, '\u{D54C}'), (0x0C9E, '\u{D54D}'), (0x0C9F, '\u{D54F}'), (0x0CA0, '\u{D551}'), (0x0CA1, '\u{D558}'), (0x0CA2, '\u{D559}'),
    (0x0CA3, '\u{D55C}'), (0x0CA4, '\u{D560}'), (0x0CA5, '\u{D565}'), (0x0CA6, '\u{D568}'), (0x0CA7, '\u{D569}'), (0x0CA8, '\u{D56B}'),
    (0x0CA9, '\u{D56D}'), (0x0CAA, '\u{D574}'), (0x0CAB, '\u{D575}'), (0x0CAC, '\u{D578}'), (0x0CAD, '\u{D57C}'), (0x0CAE, '\u{D584}'),
    (0x0CAF, '\u{D585}'), (0x0CB0, '\u{D587}'), (0x0CB1, '\u{D588}'), (0x0CB2, '\u{D589}'), (0x0CB3, '\u{D590}'), (0x0CB4, '\u{D5A5}'),
    (0x0CB5, '\u{D5C8}'), (0x0CB6, '\u{D5C9}'), (0x0CB7, '\u{D5CC}'), (0x0CB8, '\u{D5D0}'), (0x0CB9, '\u{D5D2}'), (0x0CBA, '\u{D5D8}'),
    (0x0CBB, '\u{D5D9}'), (0x0CBC, '\u{D5DB}'), (0x0CBD, '\u{D5DD}'), (0x0CBE, '\u{D5E4}'), (0x0CBF, '\u{D5E5}'), (0x0CC0, '\u{D5E8}'),
    (0x0CC1, '\u{D5EC}'), (0x0CC2, '\u{D5F4}'), (0x0CC3, '\u{D5F5}'), (0x0CC4, '\u{D5F7}'), (0x0CC5, '\u{D5F9}'), (0x0CC6, '\u{D600}'),
    (0x0CC7, '\u{D601}'), (0x0CC8, '\u{D604}'), (0x0CC9, '\u{D608}'), (0x0CCA, '\u{D610}'), (0x0CCB, '\u{D611}'), (0x0CCC, '\u{D613}'),
    (0x0CCD, '\u{D614}'), (0x0CCE, '\u{D615}'), (0x0CCF, '\u{D61C}'), (0x0CD0, '\u{D620}'), (0x0CD1, '\u{D624}'), (0x0CD2, '\u{D62D}'),
    (0x0CD3, '\u{D638}'), (0x0CD4, '\u{D639}'), (0x0CD5, '\u{D63C}'), (0x0CD6, '\u{D640}'), (0x0CD7, '\u{D645}'), (0x0CD8, '\u{D648}'),
    (0x0CD9, '\u{D649}'), (0x0CDA, '\u{D64B}'), (0x0CDB, '\u{D64D}'), (0x0CDC, '\u{D651}'), (0x0CDD, '\u{D654}'), (0x0CDE, '\u{D655}'),
    (0x0CDF, '\u{D658}'), (0x0CE0, '\u{D65C}'), (0x0CE1, '\u{D667}'), (0x0CE2, '\u{D669}'), (0x0CE3, '\u{D670}'), (0x0CE4, '\u{D671}'),
    (0x0CE5, '\u{D674}'), (0x0CE6, '\u{D683}'), (0x0CE7, '\u{D685}'), (0x0CE8, '\u{D68C}'), (0x0CE9, '\u{D68D}'), (0x0CEA, '\u{D690}'),
    (0x0CEB, '\u{D694}'), (0x0CEC, '\u{D69D}'), (0x0CED, '\u{D69F}'), (0x0CEE, '\u{D6A1}'), (0x0CEF, '\u{D6A8}'), (0x0CF0, '\u{D6AC}'),
    (0x0CF1, '\u{D6B0}'), (0x0CF2, '\u{D6B9}'), (0x0CF3, '\u{D6BB}'), (0x0CF4, '\u{D6C4}'), (0x0CF5, '\u{D6C5}'), (0x0CF6, '\u{D6C8}'),
    (0x0CF7, '\u{D6CC}'), (0x0CF8, '\u{D6D1}'), (0x0CF9, '\u{D6D4}'), (0x0CFA, '\u{D6D7}'), (0x0CFB, '\u{D6D9}'), (0x0CFC, '\u{D6E0}'),
    (0x0CFD, '\u{D6E4}'), (0x0CFE, '\u{D6E8}'), (0x0CFF, '\u{D6F0}'), (0x0D00, '\u{D6F5}'), (0x0D01, '\u{D6FC}'), (0x0D02, '\u{D6FD}'),
    (0x0D03, '\u{D700}'), (0x0D04, '\u{D704}'), (0x0D05, '\u{D711}'), (0x0D06, '\u{D718}'), (0x0D07, '\u{D719}'), (0x0D08, '\u{D71C}'),
    (0x0D09, '\u{D720}'), (0x0D0A, '\u{D728}'), (0x0D0B, '\u{D729}'), (0x0D0C, '\u{D72B}'), (0x0D0D, '\u{D72D}'), (0x0D0E, '\u{D734}'),
    (0x0D0F, '\u{D735}'), (0x0D10, '\u{D738}'), (0x0D11, '\u{D73C}'), (0x0D12, '\u{D744}'), (0x0D13, '\u{D747}'), (0x0D14, '\u{D749}'),
    (0x0D15, '\u{D750}'), (0x0D16, '\u{D751}'), (0x0D17, '\u{D754}'), (0x0D18, '\u{D756}'), (0x0D19, '\u{D757}'), (0x0D1A, '\u{D758}'),
    (0x0D1B, '\u{D759}'), (0x0D1C, '\u{D760}'), (0x0D1D, '\u{D761}'), (0x0D1E, '\u{D763}'), (0x0D1F, '\u{D765}'), (0x0D20, '\u{D769}'),
    (0x0D21, '\u{D76C}'), (0x0D22, '\u{D770}'), (0x0D23, '\u{D774}'), (0x0D24, '\u{D77C}'), (0x0D25, '\u{D77D}'), (0x0D26, '\u{D781}'),
    (0x0D27, '\u{D788}'), (0x0D28, '\u{D789}'), (0x0D29, '\u{D78C}'), (0x0D2A, '\u{D790}'), (0x0D2B, '\u{D798}'), (0x0D2C, '\u{D799}'),
    (0x0D2D, '\u{D79B}'), (0x0D2E, '\u{D79D}'), (0x0D31, '\u{1100}'), (0x0D32, '\u{1101}'), (0x0D33, '\u{1102}'), (0x0D34, '\u{1103}'),
    (0x0D35, '\u{1104}'), (0x0D36, '\u{1105}'), (0x0D37, '\u{1106}'), (0x0D38, '\u{1107}'), (0x0D39, '\u{1108}'), (0x0D3A, '\u{1109}'),
    (0x0D3B, '\u{110A}'), (0x0D3C, '\u{110B}'), (0x0D3D, '\u{110C}'), (0x0D3E, '\u{110D}'), (0x0D3F, '\u{110E}'), (0x0D40, '\u{110F}'),
    (0x0D41, '\u{1110}'), (0x0D42, '\u{1111}'), (0x0D43, '\u{1112}'), (0x0D44, '\u{1161}'), (0x0D45, '\u{1162}'), (0x0D46, '\u{1163}'),
    (0x0D47, '\u{1164}'), (0x0D48, '\u{1165}'), (0x0D49, '\u{1166}'), (0x0D4A, '\u{1167}'), (0x0D4B, '\u{1168}'), (0x0D4C, '\u{1169}'),
    (0x0D4D, '\u{116D}'), (0x0D4E, '\u{116E}'), (0x0D4F, '\u{1172}'), (0x0D50, '\u{1173}'), (0x0D51, '\u{1175}'), (0x0D61, '\u{B894}'),
    (0x0D62, '\u{C330}'), (0x0D63, '\u{C3BC}'), (0x0D64, '\u{C4D4}'), (0x0D65, '\u{CB2C}'), (0xE000, '\u{000A}'), (0x25BC, '\u{000D}'),
    (0x25BD, '\u{000C}'),
];

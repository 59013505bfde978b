//! Built-in profiles for the published hashquine artworks.
//!
//! Every constant here is pinned by a shipped file: header lengths and
//! digests identify the exact build, position lists were fixed when the
//! containers were assembled, and the side policies match how each
//! display is wired. None of it is derivable at run time.

use hashquine_core::{BitOrder, Family, OneOfNScheme, Side, SideRule, SizePick};

use crate::profile::{Positions, Profile, Strategy};

/// Block indexes of the GIF one-of-16 display, in group order.
///
/// The spacing is irregular because each instance sits inside its own
/// graphic-control sub-block; the table is copied from the build, not
/// computed.
const GIF_AVP_POSITIONS: [usize; 512] = [
    1613, 1622, 1632, 1641, 1649, 1658, 1666, 1674, 1683, 1692, 1702, 1711,
    1721, 1730, 1739, 1748, 1757, 1766, 1775, 1783, 1791, 1800, 1809, 1818,
    1828, 1837, 1847, 1855, 1863, 1873, 1882, 1890, 1900, 1909, 1917, 1927,
    1936, 1946, 1955, 1964, 1974, 1982, 1991, 2000, 2009, 2019, 2028, 2037,
    2046, 2055, 2063, 2073, 2081, 2091, 2100, 2108, 2118, 2127, 2135, 2144,
    2154, 2164, 2173, 2182, 2192, 2201, 2209, 2217, 2226, 2234, 2242, 2250,
    2260, 2269, 2277, 2287, 2297, 2305, 2315, 2325, 2334, 2343, 2352, 2361,
    2370, 2379, 2387, 2396, 2405, 2414, 2422, 2430, 2439, 2449, 2459, 2468,
    2478, 2486, 2495, 2505, 2514, 2523, 2531, 2539, 2548, 2557, 2566, 2575,
    2585, 2594, 2604, 2613, 2623, 2631, 2640, 2648, 2657, 2666, 2675, 2683,
    2693, 2701, 2709, 2718, 2728, 2736, 2745, 2753, 2762, 2771, 2781, 2790,
    2799, 2807, 2817, 2827, 2835, 2844, 2852, 2861, 2870, 2879, 2889, 2898,
    2906, 2915, 2924, 2933, 2942, 2951, 2960, 2969, 2978, 2987, 2996, 3005,
    3014, 3023, 3032, 3040, 3049, 3059, 3068, 3076, 3085, 3094, 3103, 3112,
    3122, 3132, 3141, 3150, 3160, 3170, 3179, 3188, 3196, 3205, 3214, 3223,
    3232, 3241, 3251, 3260, 3269, 3278, 3287, 3295, 3304, 3313, 3322, 3330,
    3340, 3349, 3358, 3367, 3375, 3384, 3393, 3402, 3410, 3418, 3427, 3435,
    3445, 3453, 3462, 3470, 3480, 3490, 3499, 3509, 3519, 3528, 3537, 3547,
    3556, 3564, 3573, 3582, 3591, 3600, 3609, 3618, 3627, 3637, 3646, 3654,
    3662, 3670, 3680, 3689, 3698, 3707, 3715, 3724, 3734, 3743, 3752, 3761,
    3770, 3779, 3788, 3797, 3807, 3816, 3825, 3835, 3844, 3853, 3861, 3870,
    3880, 3890, 3898, 3908, 3916, 3925, 3935, 3945, 3954, 3963, 3973, 3981,
    3990, 3999, 4007, 4015, 4024, 4033, 4042, 4052, 4061, 4070, 4078, 4087,
    4096, 4104, 4113, 4121, 4129, 4138, 4147, 4156, 4166, 4175, 4185, 4195,
    4204, 4213, 4222, 4230, 4238, 4248, 4257, 4265, 4274, 4283, 4292, 4300,
    4310, 4319, 4327, 4336, 4346, 4355, 4365, 4375, 4384, 4393, 4403, 4412,
    4421, 4429, 4439, 4447, 4457, 4466, 4475, 4484, 4493, 4502, 4511, 4520,
    4529, 4539, 4549, 4558, 4567, 4577, 4586, 4595, 4604, 4614, 4623, 4632,
    4641, 4650, 4659, 4668, 4676, 4685, 4694, 4702, 4712, 4720, 4728, 4737,
    4746, 4754, 4763, 4772, 4782, 4791, 4799, 4808, 4817, 4827, 4835, 4843,
    4853, 4862, 4871, 4879, 4889, 4899, 4907, 4917, 4925, 4934, 4943, 4952,
    4961, 4970, 4979, 4988, 4997, 5006, 5016, 5026, 5036, 5045, 5054, 5062,
    5070, 5078, 5087, 5096, 5106, 5116, 5125, 5135, 5143, 5152, 5161, 5170,
    5180, 5190, 5199, 5209, 5218, 5227, 5235, 5243, 5252, 5261, 5269, 5278,
    5288, 5296, 5305, 5313, 5322, 5332, 5340, 5350, 5359, 5368, 5377, 5387,
    5396, 5404, 5413, 5422, 5431, 5439, 5448, 5456, 5465, 5475, 5484, 5493,
    5503, 5512, 5521, 5530, 5539, 5548, 5558, 5568, 5577, 5586, 5594, 5603,
    5612, 5620, 5629, 5639, 5648, 5657, 5665, 5673, 5682, 5691, 5700, 5709,
    5718, 5727, 5737, 5746, 5756, 5765, 5775, 5785, 5794, 5802, 5810, 5819,
    5828, 5836, 5846, 5855, 5864, 5872, 5881, 5890, 5900, 5909, 5919, 5928,
    5937, 5946, 5955, 5964, 5972, 5981, 5990, 5999, 6008, 6016, 6025, 6034,
    6043, 6053, 6061, 6070, 6079, 6088, 6097, 6106, 6116, 6125, 6133, 6143,
    6152, 6161, 6170, 6179, 6188, 6197, 6207, 6217,
];

fn gz() -> Profile {
    Profile {
        name: "gz".to_string(),
        summary: "GZIP hashquine: greedy hex ticker over 192 UniColl instances".to_string(),
        family: Family::Uni,
        header_len: 85760,
        header_md5: "de4a4312a137a2b95c3dfaa3dceb6520".to_string(),
        full_md5: Some("ad5de2581f4bd8f35051b789df379d36".to_string()),
        positions: Positions::Arithmetic {
            start: 1,
            step: 7,
            count: 192,
        },
        strategy: Strategy::Greedy,
        value_len: 32,
    }
}

fn lz4() -> Profile {
    Profile {
        name: "lz4".to_string(),
        summary: "LZ4 hashquine: greedy hex ticker over 160 UniColl instances".to_string(),
        family: Family::Uni,
        header_len: 71424,
        header_md5: "fab0c435f531fe109f9c5f43e9b2a035".to_string(),
        full_md5: None,
        positions: Positions::Arithmetic {
            start: 1,
            step: 7,
            count: 160,
        },
        strategy: Strategy::Greedy,
        value_len: 32,
    }
}

fn ps() -> Profile {
    Profile {
        name: "ps".to_string(),
        summary: "PostScript hashquine: one bit per instance, LSB first, over 128 FastColl \
                  instances"
            .to_string(),
        family: Family::Fast,
        header_len: 41344,
        header_md5: "54add7e1da7b2a31b5a5900be13622df".to_string(),
        full_md5: Some("768d9d89d2bc825a319eb8962ad30580".to_string()),
        positions: Positions::Arithmetic {
            start: 9,
            step: 5,
            count: 128,
        },
        strategy: Strategy::Bits {
            one: Side::B,
            order: BitOrder::LsbFirst,
        },
        value_len: 32,
    }
}

fn nes() -> Profile {
    Profile {
        name: "nes".to_string(),
        summary: "NES ROM hashquine: one bit per instance, MSB first, over 128 FastColl \
                  instances"
            .to_string(),
        family: Family::Fast,
        header_len: 24960,
        header_md5: "5ec939f775d49bff5fbb3b1e7f9de1c2".to_string(),
        full_md5: None,
        positions: Positions::Arithmetic {
            start: 134,
            step: 2,
            count: 128,
        },
        strategy: Strategy::Bits {
            one: Side::A,
            order: BitOrder::MsbFirst,
        },
        value_len: 32,
    }
}

fn gif_avp() -> Profile {
    Profile {
        name: "gif-avp".to_string(),
        summary: "GIF hashquine: one-of-16 over 512 FastColl instances, sides picked by size"
            .to_string(),
        family: Family::Fast,
        header_len: 398016,
        header_md5: "136e622f9d89c84f35729d2354ca3017".to_string(),
        full_md5: None,
        positions: Positions::Table(GIF_AVP_POSITIONS.to_vec()),
        strategy: Strategy::OneOfN(OneOfNScheme {
            group: 16,
            baseline: SideRule::BySize {
                diff_offset: 0x7b,
                pick: SizePick::Smaller,
            },
            selected: SideRule::BySize {
                diff_offset: 0x7b,
                pick: SizePick::Larger,
            },
            reset: true,
        }),
        value_len: 32,
    }
}

fn tar_zst() -> Profile {
    Profile {
        name: "tar-zst".to_string(),
        summary: "tar.zst hashquine: one-of-16 over the 512 display instances of a 653-long \
                  UniColl run"
            .to_string(),
        family: Family::Uni,
        header_len: 292288,
        header_md5: "a7b9c184887213304fd55f9fb06686aa".to_string(),
        full_md5: None,
        positions: Positions::Arithmetic {
            start: 988,
            step: 7,
            count: 512,
        },
        strategy: Strategy::OneOfN(OneOfNScheme {
            group: 16,
            baseline: SideRule::Explicit(Side::A),
            selected: SideRule::Explicit(Side::B),
            reset: true,
        }),
        value_len: 32,
    }
}

/// All built-in profiles, in a stable listing order.
pub fn builtins() -> Vec<Profile> {
    vec![gz(), lz4(), ps(), nes(), gif_avp(), tar_zst()]
}

/// Look a built-in profile up by name (case-insensitive).
pub fn find(name: &str) -> Option<Profile> {
    builtins()
        .into_iter()
        .find(|profile| profile.name.eq_ignore_ascii_case(name))
}

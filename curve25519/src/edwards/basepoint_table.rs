//! Precomputed multiples of the Ed25519 basepoint.

use super::PrecomputedPoint;
use crate::field::FieldElement;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

/// The multiples `[P, 2P, ..., 8P]` of a single point `P`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LookupTable(pub(crate) [PrecomputedPoint; 8]);

impl LookupTable {
    /// Given `-8 <= x <= 8`, return `x * P` in constant time.
    pub(crate) fn select(&self, x: i8) -> PrecomputedPoint {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = ((x + xmask) ^ xmask) as u8;

        // Set t = 0 * P = identity
        let mut t = PrecomputedPoint::IDENTITY;
        for j in 1..9 {
            // Copy `points[j-1] == j*P` onto `t` in constant time if `|x| == j`.
            let c = xabs.ct_eq(&(j as u8));
            t.conditional_assign(&self.0[j - 1], c);
        }
        // Now t == |x| * P.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_negate(neg_mask);
        // Now t == x * P.

        t
    }
}

/// `2^256 * B`, the weight of the carry out of the top radix-16 digit.
pub(crate) const BASEPOINT_2_256: PrecomputedPoint = PrecomputedPoint {
    y_plus_x: FieldElement([
        0x0_5c01_4dce_6191,
        0x1_4923_f3bf_9aad,
        0x0_301b_7da7_914a,
        0x5_5563_4490_94c1,
        0x1_3f85_b8ff_c7ed,
    ]),
    y_minus_x: FieldElement([
        0x0_fe09_7e44_b439,
        0x0_6ae1_0fba_e24d,
        0x6_b66c_f38d_3ea2,
        0x7_4c1a_65ca_ab98,
        0x6_c906_8c07_c8de,
    ]),
    xy2d: FieldElement([
        0x1_6cba_d956_f568,
        0x1_4c16_3b48_e00b,
        0x7_7143_370c_5c64,
        0x5_3cc4_bb05_e3c3,
        0x3_1a35_ea4c_1a2f,
    ]),
};

/// Row `i` holds `[1..=8] * 256^i * B`.
pub(crate) static BASEPOINT_TABLE: [LookupTable; 32] = [
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_93c6_f58c_3b85,
                0x0_df71_81c3_25f7,
                0x0_f50b_0b3e_4cb7,
                0x5_3293_85a4_4c32,
                0x0_7cf9_d3a3_3d4b,
            ]),
            y_minus_x: FieldElement([
                0x0_3905_d740_913e,
                0x0_ba28_17d6_73a2,
                0x2_3e28_27f4_e67c,
                0x1_33d2_e0c2_1a34,
                0x4_4fd2_f929_8f81,
            ]),
            xy2d: FieldElement([
                0x1_1205_877a_aa68,
                0x4_7995_5893_d579,
                0x5_0d66_309b_67a0,
                0x2_d42d_0dbe_e5ee,
                0x6_f117_b689_f0c6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_e7fc_933c_71d7,
                0x2_cf41_feb6_b244,
                0x7_581c_0a7d_1a76,
                0x7_172d_534d_32f0,
                0x5_90c0_63fa_87d2,
            ]),
            y_minus_x: FieldElement([
                0x1_a560_42b4_d5a8,
                0x1_89cc_159e_d153,
                0x5_b8de_aa3c_ae04,
                0x2_aaf0_4f11_b5d8,
                0x6_bb59_5a66_9c92,
            ]),
            xy2d: FieldElement([
                0x2_a8b3_a59b_7a5f,
                0x3_abb3_59ef_087f,
                0x4_f5a8_c4db_05af,
                0x5_b9a8_07d0_4205,
                0x7_01af_5b13_ea50,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_b0a8_4cee_9730,
                0x6_1d10_c971_55e4,
                0x4_059c_c809_6a10,
                0x4_7a60_8da8_014f,
                0x7_a164_e1b9_a80f,
            ]),
            y_minus_x: FieldElement([
                0x1_1fe8_a4fc_d265,
                0x7_bcb8_374f_aacc,
                0x5_2f5a_f4ef_4d4f,
                0x5_3140_98f9_8d10,
                0x2_ab91_5875_55bd,
            ]),
            xy2d: FieldElement([
                0x6_933f_0dd0_d889,
                0x4_4386_bb4c_4295,
                0x3_cb6d_3162_508c,
                0x2_6368_b872_a2c6,
                0x5_a282_6af1_2b9b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_51b9_8efc_099f,
                0x6_8fbf_a4a7_050e,
                0x4_2a49_959d_971b,
                0x3_93e5_1a46_9efd,
                0x6_80e9_1032_1e58,
            ]),
            y_minus_x: FieldElement([
                0x6_050a_0568_18bf,
                0x6_2acc_1f55_32bf,
                0x2_8141_ccc9_fa25,
                0x2_4d61_f471_e683,
                0x2_7933_f4c7_445a,
            ]),
            xy2d: FieldElement([
                0x3_fbe9_c476_ff09,
                0x0_af6b_982e_4b42,
                0x0_ad12_51ba_78e5,
                0x7_15ae_edee_7c88,
                0x7_f9d0_cbf6_3553,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_bc44_08a5_bb33,
                0x0_78eb_dda0_5442,
                0x2_ffb1_1235_4123,
                0x3_75ee_8df5_862d,
                0x2_945c_cf14_6e20,
            ]),
            y_minus_x: FieldElement([
                0x1_82c3_a447_d6ba,
                0x2_2964_e536_eff2,
                0x1_9282_1f54_0053,
                0x2_f9f1_9e78_8e5c,
                0x1_54a7_e73e_b1b5,
            ]),
            xy2d: FieldElement([
                0x3_dbf1_812a_8285,
                0x0_fa17_ba3f_9797,
                0x6_f69c_b49c_3820,
                0x3_4d5a_0db3_858d,
                0x4_3aab_e696_b3bb,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_eeeb_7715_7131,
                0x1_2019_15f1_0741,
                0x1_669c_da6c_9c56,
                0x4_5ec0_32db_346d,
                0x5_1e57_bb6a_2cc3,
            ]),
            y_minus_x: FieldElement([
                0x0_06b6_7b7d_8ca4,
                0x0_84fa_44e7_2933,
                0x1_154e_e55d_6f8a,
                0x4_425d_842e_7390,
                0x3_8b64_c41a_e417,
            ]),
            xy2d: FieldElement([
                0x4_3267_02ea_4b71,
                0x0_6834_3760_30b5,
                0x0_ef05_12f9_c380,
                0x0_f1a9_f251_2584,
                0x1_0b8e_91a9_f0d6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_5cd0_944e_a3bf,
                0x7_5673_b81a_4d63,
                0x1_50b9_25d1_c0d4,
                0x1_3f38_d929_4114,
                0x4_61be_a692_83c9,
            ]),
            y_minus_x: FieldElement([
                0x7_2c9a_aa32_21b1,
                0x2_6777_4474_f74d,
                0x0_64b0_e9b2_8085,
                0x3_f04e_f53b_27c9,
                0x1_d6ed_d5d2_e531,
            ]),
            xy2d: FieldElement([
                0x3_6dc8_01b8_b3a2,
                0x0_e0a7_d493_5e30,
                0x1_deb7_cecc_0d7d,
                0x0_53a9_4e20_dd2c,
                0x7_a9fb_b1c6_a0f9,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_5966_04dd_3e8f,
                0x6_fc51_0e05_8b36,
                0x3_670c_8db2_cc0d,
                0x2_97d8_99ce_332f,
                0x0_915e_7606_1bce,
            ]),
            y_minus_x: FieldElement([
                0x7_5ded_f392_34d9,
                0x0_1c36_ab1f_3c54,
                0x0_f08f_ee58_f5da,
                0x0_e196_13a0_d637,
                0x3_a902_4a13_20e0,
            ]),
            xy2d: FieldElement([
                0x1_f5d9_c9a2_911a,
                0x7_1179_94fa_fcf8,
                0x2_d8a8_cae2_8dc5,
                0x7_4ab1_b209_0c87,
                0x2_6907_c5c2_ecc4,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_dd0e_632f_9c1d,
                0x2_ced1_2622_a5d9,
                0x1_8de9_6147_42da,
                0x7_9ca9_6fdb_b5d4,
                0x6_dd37_d49a_00ee,
            ]),
            y_minus_x: FieldElement([
                0x3_6354_49aa_515e,
                0x3_e178_d047_5dab,
                0x5_0b47_12a1_9712,
                0x2_dcc2_860f_f4ad,
                0x3_0d76_d6f0_3d31,
            ]),
            xy2d: FieldElement([
                0x4_4417_2106_e4c7,
                0x0_1251_afed_2d88,
                0x5_34fc_9bed_4f5a,
                0x5_d85a_39cf_5234,
                0x1_0c69_7112_e864,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_2aa0_8358_c805,
                0x4_6f44_0848_e194,
                0x4_47b7_71a8_f52b,
                0x3_77ba_3269_d31d,
                0x0_3bf9_baf5_5080,
            ]),
            y_minus_x: FieldElement([
                0x3_c427_7dbe_5fde,
                0x5_a335_afd4_4c92,
                0x0_c116_4099_753e,
                0x7_0487_006f_e423,
                0x2_5e61_cabe_d66f,
            ]),
            xy2d: FieldElement([
                0x3_e128_cc58_6604,
                0x5_968b_2e8f_c7e2,
                0x0_49a3_d5bd_61cf,
                0x1_1650_5b1e_f6e6,
                0x5_66d7_8634_586e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_4285_c65a_2fd0,
                0x5_5e62_ccf8_7420,
                0x4_6bb9_61b1_9044,
                0x1_1534_0571_2039,
                0x1_4fba_5f34_793b,
            ]),
            y_minus_x: FieldElement([
                0x7_a49f_9cc1_0834,
                0x2_b513_788a_22c6,
                0x5_ff4b_6ef2_395b,
                0x2_ec8e_5af6_07bf,
                0x3_3975_bca5_ecc3,
            ]),
            xy2d: FieldElement([
                0x7_4616_6985_f7d4,
                0x0_9939_000a_e79a,
                0x5_844c_7964_f97a,
                0x1_3617_e1f9_5b3d,
                0x1_4829_cea8_3fc5,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_0b2f_4e71_ecb8,
                0x7_2814_8efc_643c,
                0x0_753e_0399_5b76,
                0x5_bf5f_b2ab_6767,
                0x0_5fc3_bc45_35d7,
            ]),
            y_minus_x: FieldElement([
                0x3_7b84_97dd_95c2,
                0x6_1549_d6b4_ffe8,
                0x2_17a2_2db1_d138,
                0x0_b9cf_062e_b09e,
                0x2_fd9c_71e5_f758,
            ]),
            xy2d: FieldElement([
                0x0_b3ae_52af_dedd,
                0x1_9da7_6619_e497,
                0x6_fa06_54d2_558e,
                0x7_8219_d25e_41d4,
                0x3_7376_7475_c651,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_95cb_1424_6590,
                0x0_02d8_2aa6_ac68,
                0x4_42f1_83bc_4851,
                0x6_464f_1c0a_0644,
                0x6_bf59_0573_0907,
            ]),
            y_minus_x: FieldElement([
                0x2_99fd_40d1_add9,
                0x5_f2de_9a04_e5f7,
                0x7_c0ee_bacc_1c59,
                0x4_cca1_b1f8_290a,
                0x1_fbea_56c3_b18f,
            ]),
            xy2d: FieldElement([
                0x7_78f1_e141_5b8a,
                0x6_f758_74ef_c1f4,
                0x2_8a69_4019_027f,
                0x5_2b37_a96b_dc4d,
                0x0_2521_cf67_a635,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_6720_772f_5ee4,
                0x6_32c0_f359_d622,
                0x2_b209_2ba3_e252,
                0x6_6225_7c11_2680,
                0x0_0175_3d9f_7cd6,
            ]),
            y_minus_x: FieldElement([
                0x7_ee0b_0a9d_5294,
                0x3_81fb_eb4c_ca27,
                0x7_841f_3a3e_639d,
                0x6_76ea_30c3_445f,
                0x3_fa00_a7e7_1382,
            ]),
            xy2d: FieldElement([
                0x1_232d_963d_db34,
                0x3_5692_e70b_078d,
                0x2_47ca_1477_7a1f,
                0x6_db55_6be8_fcd0,
                0x1_2b5f_e2fa_048e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_7c26_ad6f_1e92,
                0x4_6a09_7122_7be5,
                0x4_722f_0d2d_9b4c,
                0x3_dc46_204e_e03a,
                0x6_f7e9_3c20_796c,
            ]),
            y_minus_x: FieldElement([
                0x0_fbc4_96fc_e34d,
                0x5_75be_6b7d_ae3e,
                0x4_a315_85ce_e609,
                0x0_37e9_0239_30ff,
                0x7_49b7_6f96_fb12,
            ]),
            xy2d: FieldElement([
                0x2_f604_aea6_ae05,
                0x6_37dc_9393_23eb,
                0x3_fdad_9b04_8d47,
                0x0_a8b0_d404_5af7,
                0x0_fcec_10f0_1e02,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_d29d_c424_4e45,
                0x6_927b_1bc1_47be,
                0x0_3085_34ac_0839,
                0x4_8536_6403_3f41,
                0x4_1377_9166_feab,
            ]),
            y_minus_x: FieldElement([
                0x5_58a6_49fe_1e44,
                0x4_4635_aeef_cc89,
                0x1_ff43_4887_f2ba,
                0x0_f981_220e_2d44,
                0x4_901a_a718_3c51,
            ]),
            xy2d: FieldElement([
                0x1_b754_8c1a_f8f0,
                0x7_848c_5336_8116,
                0x0_1b64_e738_3de9,
                0x1_09fb_b058_7c8f,
                0x4_1bb8_87b7_26d1,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_4c59_7c66_91ae,
                0x7_a150_b699_0fc4,
                0x5_2beb_9d92_2274,
                0x7_0eed_7164_861a,
                0x0_a871_e070_c6a9,
            ]),
            y_minus_x: FieldElement([
                0x0_7d44_7443_46be,
                0x2_82b6_a564_a81d,
                0x4_ed80_f875_236b,
                0x6_fbbe_1d45_0c50,
                0x4_eb72_8c12_fcdb,
            ]),
            xy2d: FieldElement([
                0x1_b599_4bbc_8989,
                0x7_4b7b_a84c_0660,
                0x7_5678_f1cd_aeb8,
                0x2_3206_b0d6_f10c,
                0x3_ee73_00f2_685d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_7947_841e_7518,
                0x3_2c73_88da_e87f,
                0x4_14ad_d397_1be9,
                0x0_1850_832f_0ef1,
                0x7_d47c_6a2c_fb89,
            ]),
            y_minus_x: FieldElement([
                0x2_55e4_9e7d_d6b7,
                0x3_8c21_63d5_9eba,
                0x3_861f_2a00_5845,
                0x2_e11e_4ccb_aec9,
                0x1_3815_7629_7912,
            ]),
            xy2d: FieldElement([
                0x2_d014_8ef0_d6e0,
                0x3_522a_8de7_87fb,
                0x2_ee05_5e74_f9d2,
                0x6_4038_f631_0813,
                0x1_48cf_58d3_4c9e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_2f7d_9ae4_756d,
                0x7_711e_690f_fc4a,
                0x5_82a2_355b_0d16,
                0x0_dccf_e885_b6b4,
                0x2_78fe_bad4_eaea,
            ]),
            y_minus_x: FieldElement([
                0x4_92f6_7934_f027,
                0x7_ded0_8155_28d4,
                0x5_8461_511a_6612,
                0x5_ea2e_50de_1544,
                0x3_ff2f_a1eb_d5db,
            ]),
            xy2d: FieldElement([
                0x2_681f_8c93_3966,
                0x3_8405_2193_1635,
                0x6_74f1_4a30_8652,
                0x3_bd9c_88a9_4890,
                0x4_104d_d02f_e9c6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_4e06_db09_6ab8,
                0x1_219c_89e6_b024,
                0x2_78ab_d486_a2db,
                0x2_40b2_9260_9520,
                0x0_165b_5a48_efca,
            ]),
            y_minus_x: FieldElement([
                0x2_bf5e_1124_422a,
                0x6_7314_6756_ae56,
                0x1_4ad9_9a87_e830,
                0x1_eaca_65b0_80fd,
                0x2_c863_b00a_faf5,
            ]),
            xy2d: FieldElement([
                0x0_a474_a084_6a76,
                0x0_99a5_ef98_1e32,
                0x2_a8ae_3c4b_bfe6,
                0x4_5c34_af14_832c,
                0x5_91b6_7d9b_ffec,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_b371_9f18_b55d,
                0x7_5431_8c83_d337,
                0x2_7c17_b791_9797,
                0x1_45b0_8408_9b61,
                0x4_89b4_f867_0301,
            ]),
            y_minus_x: FieldElement([
                0x7_0d1c_80b4_9bfa,
                0x3_d57e_7d91_4625,
                0x3_c072_2165_e545,
                0x5_e5b9_3819_e04f,
                0x3_de02_ec7c_a8f7,
            ]),
            xy2d: FieldElement([
                0x2_102d_3aeb_92ef,
                0x6_8c22_d50c_3a46,
                0x4_2ea8_9385_894e,
                0x7_5f9e_bf55_f38c,
                0x4_9f5f_bba4_96cb,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_628c_1e9c_572e,
                0x5_98b1_08e8_22ab,
                0x5_5d8f_ae29_361a,
                0x0_adc8_d1a9_7b28,
                0x0_6a1a_6c28_8675,
            ]),
            y_minus_x: FieldElement([
                0x4_9a10_8a5b_cfd4,
                0x6_178c_8e7d_6612,
                0x1_f034_7371_0375,
                0x7_3a49_614a_6098,
                0x5_604a_86dc_bfa6,
            ]),
            xy2d: FieldElement([
                0x0_d1d4_7c17_64b6,
                0x0_1c08_316a_2e51,
                0x2_b3db_45c9_5045,
                0x1_634f_818d_300c,
                0x2_0989_e89f_e274,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_278b_85ea_ec2e,
                0x0_ef59_657b_e2ce,
                0x7_2fd1_6958_8770,
                0x2_e9b2_0526_0b30,
                0x7_30b9_950f_7059,
            ]),
            y_minus_x: FieldElement([
                0x7_77fd_3a2d_cc7f,
                0x5_94a9_fb12_4932,
                0x0_1f8e_80ca_15f0,
                0x7_14d1_3cec_3269,
                0x0_403e_d1d0_ca67,
            ]),
            xy2d: FieldElement([
                0x3_2d35_874e_c552,
                0x1_f304_8df1_b929,
                0x3_00d7_3b17_9b23,
                0x6_e67b_e5a3_7d0b,
                0x5_bd74_5430_8303,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_9321_15e7_792a,
                0x4_57b9_bbb9_30b8,
                0x6_8f5d_8b19_3226,
                0x4_164e_8f1e_d456,
                0x5_bb7d_b123_067f,
            ]),
            y_minus_x: FieldElement([
                0x2_d195_28b2_4cc2,
                0x4_ac66_b830_2ff3,
                0x7_01c8_d9fd_ad51,
                0x6_c1b3_5c5b_3727,
                0x1_33a7_8007_380a,
            ]),
            xy2d: FieldElement([
                0x1_f467_c6ca_62be,
                0x2_c423_2a5d_c12c,
                0x7_551d_c013_b087,
                0x0_690c_11b0_3bcd,
                0x7_40dc_a6d5_8f0e,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_8c57_0478_433c,
                0x1_d850_2873_a463,
                0x7_641e_7ede_d49c,
                0x1_eced_d54c_f571,
                0x2_c03f_5256_c2b0,
            ]),
            y_minus_x: FieldElement([
                0x0_ee07_52cf_ce4e,
                0x6_60dd_8116_fbe9,
                0x5_5167_130f_ffeb,
                0x1_c682_b885_955c,
                0x1_61d2_5fa9_63ea,
            ]),
            xy2d: FieldElement([
                0x7_1875_7b53_a47d,
                0x6_19e1_8b0f_2f21,
                0x5_fbdf_e4c1_ec04,
                0x5_d798_c81e_bb92,
                0x6_9946_8bdb_d96b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_3de6_6aa9_1948,
                0x0_45f8_1a59_9b1b,
                0x3_f7a8_bd21_4193,
                0x7_1d4d_a412_331a,
                0x2_93e1_c4e6_c4a2,
            ]),
            y_minus_x: FieldElement([
                0x7_2f46_f4da_fecf,
                0x2_948f_fade_f7a3,
                0x1_1ecd_fdf3_bc04,
                0x3_c2e9_8ffe_ed25,
                0x5_2521_9a47_3905,
            ]),
            xy2d: FieldElement([
                0x6_134b_9251_12e1,
                0x6_bb94_2bb4_06ed,
                0x0_70c4_45c0_dde2,
                0x4_11d8_22c4_d7a3,
                0x5_b605_c447_f032,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_fec6_f0e7_f04c,
                0x3_cebc_692c_477d,
                0x0_7798_6a19_a95e,
                0x6_eaaa_a177_8b0f,
                0x2_f12f_ef4c_c5ab,
            ]),
            y_minus_x: FieldElement([
                0x5_8059_20c4_7c89,
                0x1_9247_71f9_972c,
                0x3_8bbd_df9f_c040,
                0x1_f700_0092_b281,
                0x2_4a76_dcea_8aeb,
            ]),
            xy2d: FieldElement([
                0x5_22b2_dfc0_c740,
                0x7_e819_3480_e148,
                0x3_3fd9_a043_41b9,
                0x3_c863_678a_20bc,
                0x5_e607_b251_8a43,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_431c_a596_cf14,
                0x0_15da_7c80_1405,
                0x0_3c9b_6f8f_10b5,
                0x0_3469_2293_4017,
                0x2_01f3_3139_e457,
            ]),
            y_minus_x: FieldElement([
                0x3_1d8f_6cdf_1818,
                0x1_f86c_4b14_4b16,
                0x3_9875_b8d7_3e9d,
                0x2_fbf0_d9ff_a7b3,
                0x5_067a_cab6_ccdd,
            ]),
            xy2d: FieldElement([
                0x2_7f6b_0803_9d51,
                0x4_802f_8000_dfaa,
                0x0_9692_a062_c525,
                0x1_baea_9107_5817,
                0x3_97cb_a886_2460,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_c3fb_c813_79e7,
                0x4_1bbc_255e_2f02,
                0x6_a3f7_5699_8650,
                0x1_297f_d4e0_7c42,
                0x7_71b4_022c_1e1c,
            ]),
            y_minus_x: FieldElement([
                0x1_3093_f059_59b2,
                0x1_bd35_2f2e_c618,
                0x0_7578_9b88_ea86,
                0x6_1d11_17ea_48b9,
                0x2_339d_3207_66e6,
            ]),
            xy2d: FieldElement([
                0x5_d986_513a_2fa7,
                0x6_3f3a_99e1_1b0f,
                0x2_8a0e_cfd6_b26d,
                0x5_3b68_35e1_8d8f,
                0x3_31a1_8921_9971,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_2f3a_9d75_72af,
                0x1_0d00_e953_c4ca,
                0x6_03df_116f_2f8a,
                0x3_3dc2_76e0_e088,
                0x1_ac96_19ff_649a,
            ]),
            y_minus_x: FieldElement([
                0x6_6f45_fb4f_80c6,
                0x3_cc38_eeb9_fea2,
                0x1_0764_7270_db1f,
                0x7_10f1_ea74_0dc8,
                0x3_1167_c6b8_3bdf,
            ]),
            xy2d: FieldElement([
                0x3_3842_524b_1068,
                0x7_7dd3_9d30_fe45,
                0x1_8943_2141_a0d0,
                0x0_88fe_4eb8_c225,
                0x6_1243_6341_f08b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_49e3_1a2d_2638,
                0x0_137a_7fa6_b16c,
                0x6_81ae_9277_7edc,
                0x2_22bf_c5f8_dc51,
                0x1_522a_a317_8d90,
            ]),
            y_minus_x: FieldElement([
                0x5_41db_874e_898d,
                0x6_2d80_fb84_1b33,
                0x0_3e6e_f027_fa97,
                0x7_a03c_9e96_33e8,
                0x4_6ebe_2309_e5ef,
            ]),
            xy2d: FieldElement([
                0x0_2f53_6961_4938,
                0x3_56e5_ada2_0587,
                0x1_1bc8_9f6b_f902,
                0x0_3674_6419_c8db,
                0x4_5fe7_0f50_5243,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_4920_c895_1491,
                0x1_07ec_6194_4c5e,
                0x7_2752_e017_c01f,
                0x1_22b7_dda2_e97a,
                0x1_6619_f6db_57a2,
            ]),
            y_minus_x: FieldElement([
                0x0_75a6_960c_0b8c,
                0x6_dde1_c5e4_1b49,
                0x4_2e3f_516d_a341,
                0x1_6a03_fda8_e79e,
                0x4_28d1_623a_0e39,
            ]),
            xy2d: FieldElement([
                0x7_4a44_01a3_08fd,
                0x0_6ed4_b955_8109,
                0x7_46f1_f6a0_8867,
                0x4_636f_5c6f_2321,
                0x1_d815_92d6_0bd3,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_b69f_7b85_c5e8,
                0x1_7a2d_1756_50ec,
                0x4_cc3e_6dbf_c19e,
                0x7_3e1d_3873_be0e,
                0x3_a5f6_d51b_0af8,
            ]),
            y_minus_x: FieldElement([
                0x6_8756_a60d_ac5f,
                0x5_5d75_7b8a_ec26,
                0x3_383d_f45f_80bd,
                0x6_783f_8c9f_96a6,
                0x2_0234_a778_9ecd,
            ]),
            xy2d: FieldElement([
                0x2_0db6_7178_b252,
                0x7_3aa3_da2c_0eda,
                0x7_9045_c01c_70d3,
                0x1_b37b_1525_1059,
                0x7_cd68_2353_cffe,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_cd60_68ac_f4f3,
                0x3_079a_fc7a_74cc,
                0x5_8097_650b_64b4,
                0x4_7fab_ac9c_4e99,
                0x3_ef02_53b2_b2cd,
            ]),
            y_minus_x: FieldElement([
                0x1_a45b_d887_fab6,
                0x6_5748_076d_c17c,
                0x5_b980_00aa_11a8,
                0x4_a1ec_c908_0974,
                0x2_838c_8863_bdc0,
            ]),
            xy2d: FieldElement([
                0x3_b0cf_4a46_5030,
                0x0_22b8_aef5_7a2d,
                0x2_ad06_77e9_25ad,
                0x4_0941_67d7_457a,
                0x2_1dcb_8a60_6a82,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_00fa_be77_31ba,
                0x7_cc53_c311_3351,
                0x7_cf65_fe08_0d81,
                0x3_c5d9_6601_1ba1,
                0x5_d840_dbf6_c6f6,
            ]),
            y_minus_x: FieldElement([
                0x0_0446_8c9d_9fc8,
                0x5_da85_5479_6b8c,
                0x3_b8be_7095_0025,
                0x6_d589_2da6_a609,
                0x0_bc3d_0819_4a31,
            ]),
            xy2d: FieldElement([
                0x6_380d_309f_e18b,
                0x4_d73c_2cb8_ee0d,
                0x6_b882_adba_c0b6,
                0x3_6eab_dddd_4cbe,
                0x3_a427_6232_ac19,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_c172_db44_7ecb,
                0x3_f8c5_05b7_a77f,
                0x6_a857_f97f_3f10,
                0x4_fcc0_567f_e03a,
                0x0_770c_9e82_4e1a,
            ]),
            y_minus_x: FieldElement([
                0x2_432c_8a70_84fa,
                0x4_7bf7_3ca8_a968,
                0x1_6391_7626_2867,
                0x5_e8df_4f80_10ce,
                0x1_ff17_7cea_16de,
            ]),
            xy2d: FieldElement([
                0x1_d99a_45b5_b5fd,
                0x5_2367_4f24_99ec,
                0x0_f8fa_2618_2613,
                0x5_8f73_9804_8c98,
                0x3_9f26_4fd4_1500,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_4aab_fe09_7be1,
                0x4_3bfc_0325_3a33,
                0x2_9bc7_fe91_b7f3,
                0x0_a761_e484_4a16,
                0x6_5c62_1272_c35f,
            ]),
            y_minus_x: FieldElement([
                0x5_3417_dbe7_e29c,
                0x5_4573_8273_94f5,
                0x5_65ee_a6f6_50dd,
                0x4_2050_748d_c749,
                0x1_712d_7346_8889,
            ]),
            xy2d: FieldElement([
                0x3_89f8_ce31_93dd,
                0x2_d424_b817_7ce5,
                0x0_73fa_0d34_40cd,
                0x1_3902_0cd4_9e97,
                0x2_2f98_00ab_19ce,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_9fdd_9a6e_fdac,
                0x7_c694_a928_2840,
                0x6_f7cd_eee4_4b3a,
                0x5_5a32_07b2_5cc3,
                0x4_171a_4d38_598c,
            ]),
            y_minus_x: FieldElement([
                0x2_368a_3e9e_f8cb,
                0x4_54aa_08e2_ac0b,
                0x4_9092_3f8f_a700,
                0x3_72aa_9ea4_582f,
                0x1_3f41_6cd6_4762,
            ]),
            xy2d: FieldElement([
                0x7_58aa_99c9_4c8c,
                0x5_f600_1700_ff44,
                0x7_694e_488c_01bd,
                0x0_d5fd_e948_eed6,
                0x5_0821_4fa5_74bd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_15bb_53d0_03d6,
                0x1_179e_792c_a8c3,
                0x1_a0e9_6ac8_40a2,
                0x2_2393_e2bb_3ab6,
                0x3_a775_8a4c_86cb,
            ]),
            y_minus_x: FieldElement([
                0x2_6915_3ed6_fe4b,
                0x7_2a23_aef8_9840,
                0x0_52be_5299_699c,
                0x3_a5e5_ef13_2316,
                0x2_2f96_0ec6_faba,
            ]),
            xy2d: FieldElement([
                0x1_11f6_93ae_5076,
                0x3_e3bf_aa94_ca90,
                0x4_4579_9476_b887,
                0x2_4a09_1246_4879,
                0x5_d9fd_15f8_de7f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_4d2a_eed7_521e,
                0x5_0865_d2c2_a7e4,
                0x2_705b_5238_ea40,
                0x4_6c70_b25d_3b97,
                0x3_bc18_7fa4_7eb9,
            ]),
            y_minus_x: FieldElement([
                0x4_08d3_6d63_727f,
                0x5_faf8_f6a6_6062,
                0x2_bb89_2da8_de6b,
                0x7_69d4_f0c7_e2e6,
                0x3_32f3_5914_f8fb,
            ]),
            xy2d: FieldElement([
                0x7_0115_ea86_c20c,
                0x1_6d88_da24_ada8,
                0x1_9806_2266_2adf,
                0x5_01eb_bc19_5a9d,
                0x4_50d8_1ce9_06fb,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_d896_1cae_743f,
                0x6_bdc3_8c7d_ba0e,
                0x7_d3b4_a7e1_b463,
                0x0_844b_dee2_adf3,
                0x4_cbad_2796_63ab,
            ]),
            y_minus_x: FieldElement([
                0x3_b6a1_a620_5275,
                0x2_e827_91d0_6dcf,
                0x2_3d72_caa9_3c87,
                0x5_f0b7_ab68_aaf4,
                0x2_de25_d4ba_6345,
            ]),
            xy2d: FieldElement([
                0x1_9024_a0d7_1fcd,
                0x1_5f65_115f_101a,
                0x4_e990_6714_9708,
                0x1_19d8_d1cb_a5af,
                0x7_d7fb_cefe_2007,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_5dc5_f3c2_9094,
                0x3_4552_20b5_79af,
                0x0_70c1_631e_068a,
                0x2_6bc0_630e_9b21,
                0x4_f9cd_196d_cd8d,
            ]),
            y_minus_x: FieldElement([
                0x7_1e6a_266b_2801,
                0x0_9aae_73e2_df5d,
                0x4_0dd8_b219_b1a3,
                0x5_46fb_4517_de0d,
                0x5_9754_35e8_7b75,
            ]),
            xy2d: FieldElement([
                0x2_97d8_6a7b_3768,
                0x4_835a_2f4c_6332,
                0x0_7030_5f43_4160,
                0x1_83dd_014e_56ae,
                0x7_ccdd_0843_87a0,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_8418_6760_cc93,
                0x7_4356_6553_3361,
                0x0_2f68_6336_b801,
                0x5_2254_46f6_4331,
                0x3_593c_a848_190c,
            ]),
            y_minus_x: FieldElement([
                0x6_422c_6d26_0417,
                0x2_1290_4817_bb94,
                0x5_a319_deb8_54f5,
                0x7_a9d4_e060_da7d,
                0x4_28bd_0ed6_1d0c,
            ]),
            xy2d: FieldElement([
                0x3_189a_5e84_9aa7,
                0x6_acbb_1f59_b242,
                0x7_f6ef_4753_630c,
                0x1_f346_292a_2da9,
                0x2_7398_308d_a2d6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_0e4c_0a70_2453,
                0x4_daaf_a37b_d734,
                0x4_9f6b_dc3e_8961,
                0x1_feff_dcec_dae6,
                0x5_72c2_9454_92c3,
            ]),
            y_minus_x: FieldElement([
                0x3_8d28_435e_d413,
                0x4_064f_1999_2858,
                0x7_680f_bef5_43cd,
                0x1_aadd_83d5_8d3c,
                0x2_6959_7aeb_e8c3,
            ]),
            xy2d: FieldElement([
                0x7_c745_d6cd_30be,
                0x2_7c77_55df_78ef,
                0x1_7768_3393_7fa3,
                0x5_4051_1644_1855,
                0x7_f985_498c_05bc,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_1552_0fbf_6363,
                0x0_b9e9_bf74_da6a,
                0x4_fe83_0820_1169,
                0x1_73f7_6127_de43,
                0x3_0f26_53cd_69b1,
            ]),
            y_minus_x: FieldElement([
                0x1_ce88_9f0b_e117,
                0x3_6f6a_9451_0709,
                0x7_f248_7200_16b4,
                0x1_821e_d1e1_cf91,
                0x7_6c2e_c470_a31f,
            ]),
            xy2d: FieldElement([
                0x0_c938_aac1_0c85,
                0x4_1b64_ed79_7141,
                0x1_beb1_c118_5e6d,
                0x1_ed54_9060_0f07,
                0x2_f127_3f15_9647,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_8bd7_55a7_0bc0,
                0x4_9e3a_885c_e609,
                0x1_6585_881b_5ad6,
                0x3_c275_68d3_4f5e,
                0x3_8ac1_997e_dc5f,
            ]),
            y_minus_x: FieldElement([
                0x1_fc7c_8ae0_1e11,
                0x2_094d_5573_e8e7,
                0x5_ca3c_bbf5_49d2,
                0x4_f920_ecc5_4143,
                0x5_d9e5_72ad_85b6,
            ]),
            xy2d: FieldElement([
                0x6_b517_a751_b13b,
                0x0_cfd3_70b1_80cc,
                0x5_3779_25d1_f41a,
                0x3_4e56_5660_08a2,
                0x2_2dfc_d9cb_fe9e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_59b4_103b_e0a1,
                0x5_9a4b_3f2d_2add,
                0x7_d734_c8bb_8eeb,
                0x2_393c_be59_4a09,
                0x0_fe98_7782_4cde,
            ]),
            y_minus_x: FieldElement([
                0x3_d2e0_c30d_0cd9,
                0x3_f597_6866_71bb,
                0x0_aa58_7eb6_3999,
                0x0_e3c7_b592_c619,
                0x6_b291_6c05_448c,
            ]),
            xy2d: FieldElement([
                0x3_34d1_0aba_913b,
                0x0_45cd_b581_cfdb,
                0x5_e3e0_553a_8f36,
                0x5_0bb3_041e_ffb2,
                0x4_c303_f307_ff00,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_0358_0dd9_4500,
                0x4_8df7_7d92_653f,
                0x3_8a9f_e3b3_49ea,
                0x0_ea89_850a_afe1,
                0x4_16b1_51ab_706a,
            ]),
            y_minus_x: FieldElement([
                0x2_3bd6_17b2_8c85,
                0x6_e72e_e77d_5a61,
                0x1_a972_ff17_4dde,
                0x3_e263_6373_c60f,
                0x0_d61b_8f78_b2ab,
            ]),
            xy2d: FieldElement([
                0x0_d7ef_e9c1_36b0,
                0x1_ab1c_8964_0ad5,
                0x5_5f82_aef4_1f97,
                0x4_6957_f317_ed0d,
                0x1_91a2_af74_277e,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_2b43_4f46_0efb,
                0x2_94c6_c0fa_d3fc,
                0x6_8368_937b_4c0f,
                0x5_c9f8_2910_875b,
                0x2_37e7_dbe0_0545,
            ]),
            y_minus_x: FieldElement([
                0x6_f74b_c53c_1431,
                0x1_c40e_5dbb_d9c2,
                0x6_c8fb_9cae_5c97,
                0x4_845c_5ce1_b7da,
                0x7_e2e0_e450_b5cc,
            ]),
            xy2d: FieldElement([
                0x5_75ed_6701_b430,
                0x4_d3e1_7fa2_0026,
                0x7_91fc_888c_4253,
                0x2_f1ba_9907_8ac1,
                0x7_1afa_699b_1115,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_3c1c_473b_50d6,
                0x3_e767_1de2_1d48,
                0x3_26fa_5547_a1e8,
                0x5_0e4d_c25f_afd9,
                0x0_0731_fbc7_8f89,
            ]),
            y_minus_x: FieldElement([
                0x6_6f9b_3953_b61d,
                0x5_55f4_283c_ccb9,
                0x7_dd67_fb19_60e7,
                0x1_4707_a1af_fed4,
                0x0_2114_2e9c_2b1c,
            ]),
            xy2d: FieldElement([
                0x0_c718_48f8_1880,
                0x4_4bd9_d823_3c86,
                0x6_e857_8efe_5830,
                0x4_045b_6d70_41b5,
                0x4_c4d6_f334_7e15,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_ddfc_988f_1970,
                0x4_f617_3ea3_65e1,
                0x6_45da_f9ae_4588,
                0x7_d437_63db_623b,
                0x3_8bf9_500a_88f9,
            ]),
            y_minus_x: FieldElement([
                0x7_eccf_c17d_1fc9,
                0x4_ca28_0782_831e,
                0x7_b833_7db1_d7d6,
                0x5_116d_ef38_95fb,
                0x1_93fd_daaa_7e47,
            ]),
            xy2d: FieldElement([
                0x2_c93c_37e8_876f,
                0x3_431a_28c5_83fa,
                0x4_9049_da8b_d879,
                0x4_b4a8_407a_c11c,
                0x6_a6fb_99eb_f0d4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_22b5_b6e4_23c6,
                0x2_1e50_dff1_ddd6,
                0x7_3d76_324e_75c0,
                0x5_8848_5495_418e,
                0x1_36fd_a9f4_2c5e,
            ]),
            y_minus_x: FieldElement([
                0x6_c1bb_5608_55eb,
                0x7_1f12_7e13_ad48,
                0x5_c6b3_0490_5aec,
                0x3_756b_8e88_9bc7,
                0x7_5f76_914a_3189,
            ]),
            xy2d: FieldElement([
                0x4_dfb1_a305_bdd1,
                0x3_b3ff_0581_1f29,
                0x6_ed62_283c_d92e,
                0x6_5d15_43ec_52e1,
                0x0_2218_3510_be8d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_7101_4330_7a7f,
                0x3_d88f_b48b_f3ab,
                0x2_49eb_4ec1_8f7a,
                0x1_3611_5dff_295f,
                0x1_387c_441f_d404,
            ]),
            y_minus_x: FieldElement([
                0x7_6638_5ead_2d14,
                0x0_194f_8b06_095e,
                0x0_8478_f682_3b62,
                0x6_0186_89d3_7308,
                0x6_a071_ce17_b806,
            ]),
            xy2d: FieldElement([
                0x3_c3d1_8797_8af8,
                0x7_afe1_c882_76ba,
                0x5_1df2_81c8_ad68,
                0x6_4906_bda4_245d,
                0x3_171b_26aa_f1ed,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_b7d8_b28a_47d1,
                0x2_c2ee_149e_34c1,
                0x7_76f5_629a_fc53,
                0x1_f4ea_50fc_49a9,
                0x6_c514_a633_4424,
            ]),
            y_minus_x: FieldElement([
                0x7_3190_9756_4ca8,
                0x1_844e_bc23_3525,
                0x2_1d45_43fd_eee1,
                0x1_ad27_aaff_1bd2,
                0x2_21fd_4873_cf08,
            ]),
            xy2d: FieldElement([
                0x2_204f_3a15_6341,
                0x5_3741_4065_a464,
                0x4_3c0c_3bed_cf83,
                0x5_557e_706e_a620,
                0x4_8daa_596f_b924,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_1d5d_c84c_9793,
                0x4_7de8_3040_c29e,
                0x1_89de_b265_07e7,
                0x4_d4e6_fadc_479a,
                0x5_8c83_7fa0_e8a7,
            ]),
            y_minus_x: FieldElement([
                0x2_8e66_5ca5_9cc7,
                0x1_65c7_1594_0dd9,
                0x0_785f_3aa1_1c95,
                0x5_7b98_d7e3_8469,
                0x6_76dd_6fcc_ad84,
            ]),
            xy2d: FieldElement([
                0x1_6885_96fc_9058,
                0x6_6f6a_d403_619f,
                0x4_d759_a877_72ef,
                0x7_856e_6173_bea4,
                0x1_c4f7_3f2c_6a57,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_706e_fc7c_3484,
                0x6_9878_39ec_366d,
                0x0_731f_95cf_7f26,
                0x3_ae75_8ebc_e4bc,
                0x7_0459_adb7_daf6,
            ]),
            y_minus_x: FieldElement([
                0x2_4fbd_305f_a0bb,
                0x4_0a98_cc75_a1cf,
                0x7_8ce1_220a_7533,
                0x6_217a_10e1_c197,
                0x7_95ac_80d1_bf64,
            ]),
            xy2d: FieldElement([
                0x1_db49_91b4_2bb3,
                0x4_6960_5b99_4372,
                0x6_31e3_715c_9a58,
                0x7_e9cf_efcf_728f,
                0x5_fe16_2848_ce21,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_852d_5d7c_b208,
                0x6_0d0f_be5c_e50f,
                0x5_a1e2_46e3_7b75,
                0x5_1aee_05ff_d590,
                0x2_b44c_0436_77da,
            ]),
            y_minus_x: FieldElement([
                0x1_214f_e194_961a,
                0x0_e1ae_39a9_e9cb,
                0x5_43c8_b526_f9f7,
                0x1_1949_8067_e91d,
                0x4_789d_446f_c917,
            ]),
            xy2d: FieldElement([
                0x4_87ab_074e_b78e,
                0x1_d33b_5e8c_e343,
                0x1_3e41_9feb_1b46,
                0x2_721f_565d_e6a4,
                0x6_0c52_eef2_bb9a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_c5c2_7cae_6d11,
                0x3_6a94_9195_6e05,
                0x1_24ba_c913_1da6,
                0x3_b6f7_de20_2b5d,
                0x7_0d77_248d_9b66,
            ]),
            y_minus_x: FieldElement([
                0x5_89bc_3bfd_8bf1,
                0x6_f93e_6aa3_416b,
                0x4_c0a3_d6c1_ae48,
                0x5_5587_260b_586a,
                0x1_0bc9_c312_ccfc,
            ]),
            xy2d: FieldElement([
                0x2_e84b_3ec2_a05b,
                0x6_9da2_f03c_1551,
                0x2_3a17_4661_a67b,
                0x2_09bc_a289_f238,
                0x6_3755_bd3a_976f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_1018_97f1_acb7,
                0x3_d82c_b77b_07b8,
                0x6_8408_3d77_69f5,
                0x5_2b28_472d_ce07,
                0x2_7637_5173_7c52,
            ]),
            y_minus_x: FieldElement([
                0x7_a03e_2ad1_0853,
                0x2_13dc_c6ad_36ab,
                0x1_a6e2_40d5_bdd6,
                0x7_c24f_fcf8_fedf,
                0x0_d8cc_1c48_bc16,
            ]),
            xy2d: FieldElement([
                0x4_02d3_6eb4_19a9,
                0x7_cef6_8c14_a052,
                0x0_f125_5bc2_d139,
                0x3_73e7_d431_186a,
                0x7_0c2d_d8a7_ad16,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_967d_b8ed_7e13,
                0x1_5aee_d02f_523a,
                0x6_1495_91d0_94bc,
                0x6_72f2_04c1_7006,
                0x3_2b86_1381_6a53,
            ]),
            y_minus_x: FieldElement([
                0x1_9450_9f6f_ec0e,
                0x5_28d8_ca31_acac,
                0x7_826d_73b8_b9fa,
                0x2_4acb_99e0_f9b3,
                0x2_e0fa_c636_3948,
            ]),
            xy2d: FieldElement([
                0x7_f7be_e448_cd64,
                0x4_e10f_10da_0f3c,
                0x3_936c_b9ab_20e9,
                0x7_a0fc_4fea_6cd0,
                0x4_1792_15c7_35a4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_33b9_286b_cd34,
                0x6_cab3_badb_9c95,
                0x7_4e38_7edf_bdfa,
                0x1_4313_c58a_0fd9,
                0x3_1fa8_5662_241c,
            ]),
            y_minus_x: FieldElement([
                0x0_94e7_d7dc_ed2a,
                0x0_68fa_738e_118e,
                0x4_1b64_0a5f_ee2b,
                0x6_bb70_9df0_19d4,
                0x7_0034_4a30_cd99,
            ]),
            xy2d: FieldElement([
                0x2_6c42_2e36_22f4,
                0x0_f306_6a05_b5f0,
                0x4_e244_8f04_80a6,
                0x2_44cd_e0db_f095,
                0x2_4bb2_312a_9952,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_0c2a_f5f8_5c6b,
                0x0_609f_4cf2_883f,
                0x6_e86e_b5a1_ca13,
                0x6_8b44_a2ef_ccd1,
                0x0_d1d2_af9f_feb5,
            ]),
            y_minus_x: FieldElement([
                0x0_ed17_32de_67c3,
                0x3_08c3_6929_1635,
                0x3_3ef3_48f2_d250,
                0x0_0447_5ea1_a1bb,
                0x0_fee3_e871_e188,
            ]),
            xy2d: FieldElement([
                0x2_8aa1_3262_1edf,
                0x4_2b24_4caf_353b,
                0x6_6b06_4cc2_e08a,
                0x6_bb20_020c_bdd3,
                0x1_6acd_7971_8531,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_c6c5_7887_b6ad,
                0x5_abf2_1fd7_592b,
                0x5_0bd4_1253_867a,
                0x3_800b_7127_3151,
                0x1_64ed_34b1_8161,
            ]),
            y_minus_x: FieldElement([
                0x7_72af_2d9b_1d3d,
                0x6_d486_448b_4e5b,
                0x2_ce58_dd8d_18a8,
                0x1_849f_6750_3c8b,
                0x1_23e0_ef6b_9302,
            ]),
            xy2d: FieldElement([
                0x6_d94c_192f_e69a,
                0x5_4752_22a2_690f,
                0x6_9378_9d86_b8b3,
                0x1_f5c3_bdfb_69dc,
                0x7_8da0_fc61_073f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_80f1_680c_3a94,
                0x2_a35d_3cfc_d453,
                0x0_05e5_cdc7_ddf8,
                0x6_ee88_8078_ac24,
                0x0_54aa_4b31_6b38,
            ]),
            y_minus_x: FieldElement([
                0x1_5d28_e52b_c66a,
                0x3_0e1e_0351_cb7e,
                0x3_0a2f_74b1_1f8c,
                0x3_9d12_0cd7_de03,
                0x2_d25d_eeb2_56b1,
            ]),
            xy2d: FieldElement([
                0x0_468d_1926_7cb8,
                0x3_8cdc_a9b5_fbf9,
                0x1_bbb0_5c2c_a1e2,
                0x3_b015_758e_9533,
                0x1_3461_0a6a_b7da,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_65e7_77d1_f515,
                0x0_f1f5_4c1e_39a5,
                0x2_f01b_9552_2646,
                0x4_fdd8_db9d_de6d,
                0x6_5487_8cba_97cc,
            ]),
            y_minus_x: FieldElement([
                0x3_8ec7_8df6_b0fe,
                0x1_3cae_bea3_6a22,
                0x5_ebc6_e54e_5f6a,
                0x3_2804_903d_0eb8,
                0x2_102f_dba2_b20d,
            ]),
            xy2d: FieldElement([
                0x6_e405_055c_e6a1,
                0x5_024a_35a5_32d3,
                0x1_f690_54da_f29d,
                0x1_5d1d_0d7a_8bd5,
                0x0_ad72_5db2_9ecb,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_bc0c_9b05_6f85,
                0x5_1cfe_bffa_ffd8,
                0x4_4abb_e94d_f549,
                0x7_ecbb_d7e3_3121,
                0x4_f675_f530_2399,
            ]),
            y_minus_x: FieldElement([
                0x2_67b1_834e_2457,
                0x6_ae19_c378_bb88,
                0x7_457b_5ed9_d512,
                0x3_280d_783d_05fb,
                0x4_aefc_ffb7_1a03,
            ]),
            xy2d: FieldElement([
                0x5_3636_0415_171e,
                0x2_3133_0907_7865,
                0x2_5144_4334_afbc,
                0x2_b0c3_8537_56e8,
                0x0_bccb_b72a_2a86,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_5e4c_50fe_1296,
                0x0_5fdd_13ef_c30d,
                0x1_c0c6_c380_e5ee,
                0x3_e11d_e3fb_62a8,
                0x6_678f_d691_08f3,
            ]),
            y_minus_x: FieldElement([
                0x6_962f_eab1_a9c8,
                0x6_aca2_8fb9_a30b,
                0x5_6db7_ca1b_9f98,
                0x3_9f58_4970_18dd,
                0x4_024f_0ab5_9d6b,
            ]),
            xy2d: FieldElement([
                0x6_fa31_6368_63c2,
                0x1_0ae5_a67e_42b0,
                0x2_7abb_f01f_da31,
                0x3_80a7_b9e6_4fbc,
                0x2_d42e_2108_ead4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_7b0d_0f53_7593,
                0x1_6263_c0c9_842e,
                0x4_ab82_7e45_39a4,
                0x6_370d_db43_d73a,
                0x4_20bf_3a79_b423,
            ]),
            y_minus_x: FieldElement([
                0x5_1315_94df_d29b,
                0x3_a627_e98d_52fe,
                0x1_1540_4185_5661,
                0x1_9175_d09f_8384,
                0x6_76b2_608b_8d2d,
            ]),
            xy2d: FieldElement([
                0x0_ba65_1c5b_2b47,
                0x5_8623_6370_1027,
                0x0_c4d6_c219_c6db,
                0x0_f03d_ff86_58de,
                0x7_45d2_ffa9_c0cf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_df57_21d3_4e6a,
                0x4_f32f_767a_0c06,
                0x1_d5ab_eac7_6e20,
                0x4_1ce9_e104_e1e4,
                0x0_6e15_be54_c1dc,
            ]),
            y_minus_x: FieldElement([
                0x2_5a1e_2bc9_c8bd,
                0x1_04c8_f3b0_37ea,
                0x4_0557_6fa9_6c98,
                0x2_e86a_88e3_876f,
                0x1_ae23_ceb9_60cf,
            ]),
            xy2d: FieldElement([
                0x2_5d87_1932_994a,
                0x6_b9d6_3b56_0b6e,
                0x2_df28_14c8_d472,
                0x0_fbbe_e20a_a4ed,
                0x5_8ded_8612_78ec,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_5ba8_b6c2_c9a8,
                0x1_dea5_8b31_85bf,
                0x4_b455_cd23_bbbe,
                0x5_ec19_c048_83f8,
                0x0_8ba6_96b5_31d5,
            ]),
            y_minus_x: FieldElement([
                0x7_3793_f266_c55c,
                0x0_b988_a9c9_3b02,
                0x0_9b0e_a323_25db,
                0x3_7cae_71c1_7c5e,
                0x2_ff39_de85_485f,
            ]),
            xy2d: FieldElement([
                0x5_3eee_c3ef_c57a,
                0x2_fa9f_e902_2efd,
                0x6_99c7_2c13_8154,
                0x7_2a75_1ebd_1ff8,
                0x1_2063_3b49_47cf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_3147_4912_100a,
                0x5_afcd_f7c0_d057,
                0x7_a9e7_1b78_8ded,
                0x5_ef70_8f3b_0c88,
                0x0_7433_be3c_b393,
            ]),
            y_minus_x: FieldElement([
                0x4_9878_9161_0042,
                0x7_9d9d_7f5d_0172,
                0x3_c293_013b_9ec4,
                0x0_c2b8_5f39_caca,
                0x3_5d30_a99b_4d59,
            ]),
            xy2d: FieldElement([
                0x1_44c0_5ce9_97f4,
                0x4_960b_8a34_7fef,
                0x1_da11_f15d_74f7,
                0x5_4fac_19c0_fead,
                0x2_d873_ede7_af6d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_02e1_4e5d_f981,
                0x2_ea02_bc3e_b54c,
                0x3_8875_b288_3564,
                0x1_298c_513a_e9dd,
                0x0_5436_18a0_1600,
            ]),
            y_minus_x: FieldElement([
                0x2_3164_4337_3409,
                0x5_de95_503b_22af,
                0x6_9920_1bea_e2df,
                0x3_db58_49ff_737a,
                0x2_e773_6547_07fa,
            ]),
            xy2d: FieldElement([
                0x2_bdf4_974c_23c1,
                0x4_b3b9_c8d2_61bd,
                0x2_6ae8_b2a9_bc28,
                0x3_0682_1016_5c51,
                0x4_b144_3362_d079,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_54e9_1c52_9ccb,
                0x2_4c98_c6bf_72cf,
                0x0_4865_94c3_d89a,
                0x7_ae13_a3d7_fa3c,
                0x1_7038_418e_af66,
            ]),
            y_minus_x: FieldElement([
                0x4_b7c7_b66e_1f7a,
                0x4_bea1_85ef_d998,
                0x4_fabc_7110_55f8,
                0x1_fb9f_7836_fe38,
                0x5_82f4_4675_2da6,
            ]),
            xy2d: FieldElement([
                0x1_7bd3_2032_4ce4,
                0x5_1489_1178_98c6,
                0x1_684d_92a0_410b,
                0x6_e4d9_0f78_c5a7,
                0x0_c2a1_c4bc_da28,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_8148_69bd_6945,
                0x7_b7c3_91a4_5db8,
                0x5_7316_ac35_b641,
                0x6_41e3_1de9_096a,
                0x5_a6a9_b30a_314d,
            ]),
            y_minus_x: FieldElement([
                0x5_c7d0_6f1f_0447,
                0x7_db70_f80b_3a49,
                0x6_cb4a_3ec8_9a78,
                0x4_3be8_ad81_397d,
                0x7_c558_bd1c_6f64,
            ]),
            xy2d: FieldElement([
                0x4_1524_d396_463d,
                0x1_586b_449e_1a1d,
                0x2_f17e_904a_ed8a,
                0x7_e1d2_861d_3c8e,
                0x0_404a_5ca0_afba,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_9e1b_2a41_6fd1,
                0x5_1c6a_0b31_6c57,
                0x5_75a5_9ed7_1bdc,
                0x7_4c02_1a1f_ec1e,
                0x3_9527_516e_7f8e,
            ]),
            y_minus_x: FieldElement([
                0x7_4007_0aa7_43d6,
                0x1_6b64_cbdd_1183,
                0x2_3f4b_7b32_eb43,
                0x3_19ab_a582_35b3,
                0x4_6395_bfdc_add9,
            ]),
            xy2d: FieldElement([
                0x7_db2d_1a5d_9a9c,
                0x7_9a20_0b85_422f,
                0x3_55bf_aa71_dd16,
                0x0_0b77_ea5f_78aa,
                0x7_6579_a29e_822d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_b513_52b4_34f2,
                0x1_327b_d01c_2667,
                0x4_34d7_3b60_c8a1,
                0x3_e0da_a894_43ba,
                0x0_2c51_4bb2_a277,
            ]),
            y_minus_x: FieldElement([
                0x6_8e7e_49c0_2a17,
                0x4_5795_346f_e8b6,
                0x0_8930_6c8f_3546,
                0x6_d89f_6b2f_88f6,
                0x4_3a38_4dc9_e05b,
            ]),
            xy2d: FieldElement([
                0x3_d5da_8bf1_b645,
                0x7_ded6_a96a_6d09,
                0x6_c349_4fee_2f4d,
                0x0_2c98_9c8b_6bd4,
                0x1_1609_2096_1548,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_5616_369b_4dcd,
                0x4_ecab_86ac_6f47,
                0x3_c600_85d7_00b2,
                0x0_213e_e10d_fcea,
                0x2_f637_d749_1e6e,
            ]),
            y_minus_x: FieldElement([
                0x5_1669_29da_cfaa,
                0x1_9082_6b31_f689,
                0x4_f555_6769_4a7d,
                0x7_05f4_f7b1_e522,
                0x3_51e1_25bc_5698,
            ]),
            xy2d: FieldElement([
                0x4_9b46_1af6_7bbe,
                0x7_5915_712c_3a96,
                0x6_9a67_ef58_0c0d,
                0x5_4d38_ef70_cffc,
                0x7_f182_d06e_7ce2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_4b72_8e21_7522,
                0x6_9a90_971b_0128,
                0x5_1a40_f2a9_63a3,
                0x1_0be9_ac12_a6bf,
                0x4_4acc_0432_41c5,
            ]),
            y_minus_x: FieldElement([
                0x4_8e64_ab01_68ec,
                0x2_a2bd_b8a8_6f4f,
                0x7_343b_6b2d_6929,
                0x1_d804_aa8c_e9a3,
                0x6_7d4a_c8c3_43e9,
            ]),
            xy2d: FieldElement([
                0x5_6bbb_4f7a_5777,
                0x2_9230_627c_238f,
                0x5_ad1a_122c_d7fb,
                0x0_dea5_6e50_e364,
                0x5_56d1_c831_2ad7,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_6756_b11b_e821,
                0x4_6214_7e7b_b03e,
                0x2_6519_743e_bfe0,
                0x7_82fc_5968_2ab5,
                0x0_97ab_e38c_c8c7,
            ]),
            y_minus_x: FieldElement([
                0x7_40e3_0c8d_3982,
                0x7_c2b4_7f46_82fd,
                0x5_cd91_b8c7_dc1c,
                0x7_7fa7_90f9_e583,
                0x7_46c6_c6d1_d824,
            ]),
            xy2d: FieldElement([
                0x1_c987_7ea5_2da4,
                0x2_b37b_83a8_6189,
                0x7_33af_4931_0da5,
                0x2_5e81_161c_04fb,
                0x5_77e1_4a34_bee8,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_cebe_bd4d_d72b,
                0x3_40c1_e442_329f,
                0x3_2347_ffd1_a93f,
                0x1_4a89_252c_bbe0,
                0x7_0530_4b8f_b009,
            ]),
            y_minus_x: FieldElement([
                0x2_68ac_61a7_3b0a,
                0x2_06f2_34be_be1c,
                0x5_b403_a7cb_ebe8,
                0x7_a160_f09f_4135,
                0x6_0fa7_ee96_fd78,
            ]),
            xy2d: FieldElement([
                0x5_1d35_4d29_6ec6,
                0x7_cbf5_a63b_16c7,
                0x2_f50b_b3cf_0c14,
                0x1_feb3_85ca_c65a,
                0x2_1398_e0ca_1635,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_aaf9_b4b7_5601,
                0x2_6b91_b5ae_44f3,
                0x6_de80_8d7a_b1c8,
                0x6_a769_6755_30b0,
                0x1_bbfb_284e_98f7,
            ]),
            y_minus_x: FieldElement([
                0x5_058a_382b_33f3,
                0x1_75a9_1816_913e,
                0x4_f6cd_b96b_8ae8,
                0x1_7347_c9da_81d2,
                0x5_aa3e_d9d9_5a23,
            ]),
            xy2d: FieldElement([
                0x7_77e9_c7d9_6561,
                0x2_8e58_f006_ccac,
                0x5_41bb_bb2c_ac49,
                0x3_e632_8299_4cec,
                0x4_a07e_14e5_e895,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_58cd_c477_a49b,
                0x3_cc88_fe02_e481,
                0x7_21aa_b7f4_e36b,
                0x0_408c_c946_9953,
                0x5_0af7_aed8_4afa,
            ]),
            y_minus_x: FieldElement([
                0x4_12cb_980d_f999,
                0x5_e78d_d8ee_29dc,
                0x1_71df_f68c_575d,
                0x2_015d_d2f6_ef49,
                0x3_f0ba_c391_d313,
            ]),
            xy2d: FieldElement([
                0x7_de01_15f6_5be5,
                0x4_242c_2136_4dc9,
                0x6_b75b_64a6_6098,
                0x0_033c_0102_c085,
                0x1_921a_316b_aebd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_ad9a_d9f3_c18b,
                0x5_ec16_3833_9aeb,
                0x5_703b_6559_a83b,
                0x3_fa9f_4d05_d612,
                0x7_b049_deca_062c,
            ]),
            y_minus_x: FieldElement([
                0x2_2f7e_dfb8_70fc,
                0x5_69ee_d677_b128,
                0x3_0937_dcb0_a5af,
                0x7_5803_9c78_ea1b,
                0x6_458d_f41e_273a,
            ]),
            xy2d: FieldElement([
                0x3_e37a_3544_4483,
                0x6_61fd_b7d2_7b99,
                0x3_1776_1dd6_21e4,
                0x7_323c_3002_6189,
                0x6_093d_ccbc_2950,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_eebe_6084_034b,
                0x6_cf01_f70a_8d7b,
                0x0_b41a_54c6_670a,
                0x6_c84b_99bb_55db,
                0x6_e318_0c98_b647,
            ]),
            y_minus_x: FieldElement([
                0x3_9a85_85e0_706d,
                0x3_167c_e726_63fe,
                0x6_3d14_ecdb_4297,
                0x4_be21_dcf9_70b8,
                0x5_7d1e_a084_827a,
            ]),
            xy2d: FieldElement([
                0x2_b6e7_a128_b071,
                0x5_b275_1175_5dcf,
                0x0_8584_c293_0565,
                0x6_8c7b_da6f_4159,
                0x3_63e9_99dd_d97b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_48dc_e24b_aec6,
                0x2_b757_95ec_05e3,
                0x3_bfa4_c5da_6dc9,
                0x1_aac8_659e_371e,
                0x2_31f9_79bc_6f9b,
            ]),
            y_minus_x: FieldElement([
                0x0_43c1_35ee_1fc4,
                0x2_a11c_9919_f2d5,
                0x6_334c_c25d_bacd,
                0x2_95da_17b4_00da,
                0x4_8ee9_b786_93a0,
            ]),
            xy2d: FieldElement([
                0x1_de4b_cc2a_f3c6,
                0x6_1fc4_11a3_eb86,
                0x5_3ed1_9ac1_2ec0,
                0x2_09db_c6b8_04e0,
                0x0_79bf_a9b0_8792,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_ed80_a2d5_4245,
                0x7_0efe_c72a_5e79,
                0x4_2151_d42a_822d,
                0x1_b5eb_b6d6_31e8,
                0x1_ef4f_b159_4706,
            ]),
            y_minus_x: FieldElement([
                0x0_3a51_da30_0df4,
                0x4_67b5_2b56_1c72,
                0x4_d592_0210_e590,
                0x0_ca76_9e78_9685,
                0x0_38c7_7f68_4817,
            ]),
            xy2d: FieldElement([
                0x6_5ee6_5b16_7bec,
                0x0_52da_19b8_50a9,
                0x0_4086_6565_6429,
                0x7_ab39_596f_9a4c,
                0x5_75ee_92a4_a0bf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_bc45_0aa4_d801,
                0x4_f4a6_773b_0ba8,
                0x6_241b_0b0e_bc48,
                0x4_0d9c_4f1d_9315,
                0x2_00a1_e7e3_82f5,
            ]),
            y_minus_x: FieldElement([
                0x0_8090_8a18_2fcf,
                0x0_5329_13b7_ba98,
                0x3_dccf_78c3_85c3,
                0x6_8002_dd5e_aba9,
                0x4_3d4e_7112_cd3f,
            ]),
            xy2d: FieldElement([
                0x5_b967_eaf9_3ac5,
                0x3_60ac_ca58_0a31,
                0x1_c65f_d5c6_f262,
                0x7_1c7f_15c2_ecab,
                0x0_50ec_a526_51e4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_3976_60e6_68ea,
                0x7_c2a7_5692_f2f5,
                0x3_b29e_7e6c_66ef,
                0x7_2ba6_58bc_da9a,
                0x6_151c_09fa_131a,
            ]),
            y_minus_x: FieldElement([
                0x3_1ade_453f_0c9c,
                0x3_dfee_0773_7868,
                0x6_11ec_f7a7_d411,
                0x2_637e_6cbd_64f6,
                0x4_b0ee_6c21_c58f,
            ]),
            xy2d: FieldElement([
                0x5_5c0d_fdf0_5d96,
                0x4_0556_9dcf_475e,
                0x0_5c5c_2774_98bb,
                0x1_8588_d95d_c389,
                0x1_fef2_4fa8_00f0,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_aff5_3097_6b86,
                0x0_d85a_48c0_845a,
                0x7_96eb_9636_42e0,
                0x6_0bee_50c4_b626,
                0x2_8005_fe6c_8340,
            ]),
            y_minus_x: FieldElement([
                0x6_53fb_1aa7_3196,
                0x6_07fa_ec83_06fa,
                0x4_e85e_c83e_5254,
                0x0_9f56_9005_84fd,
                0x5_44d4_9292_fc86,
            ]),
            xy2d: FieldElement([
                0x7_ba9f_3452_8688,
                0x2_84a2_0fb4_2d5d,
                0x3_652c_d970_6ffe,
                0x6_fd7b_addd_e6b3,
                0x7_2e47_2930_f316,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_f635_d32a_7627,
                0x0_cbec_acde_00fe,
                0x3_4111_41ea_a936,
                0x2_1c1e_42f3_cb94,
                0x1_fee7_f000_fe06,
            ]),
            y_minus_x: FieldElement([
                0x5_208c_9781_084f,
                0x1_6468_a1dc_24d2,
                0x7_bf78_0ac5_40a8,
                0x1_a67e_ced7_5301,
                0x5_a9d2_e8c2_733a,
            ]),
            xy2d: FieldElement([
                0x3_05da_03db_f7e5,
                0x1_2286_99b7_aeca,
                0x1_2a23_b293_6bc9,
                0x2_a1bd_a56a_e6e9,
                0x0_0f94_051e_e040,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_93bb_07af_9753,
                0x1_e7b6_ecd4_fafd,
                0x0_2c7b_1560_fb43,
                0x2_2967_34cc_5fb7,
                0x4_7b7f_fd25_dd40,
            ]),
            y_minus_x: FieldElement([
                0x5_6b23_c3d3_30b2,
                0x3_7608_e360_d1a6,
                0x1_0ae0_f3c8_722e,
                0x0_86d9_b618_b637,
                0x0_7d79_c7e8_beab,
            ]),
            xy2d: FieldElement([
                0x3_fb9c_bc08_dd12,
                0x7_5c3d_d853_70ff,
                0x4_7f06_fe28_19ac,
                0x5_db06_ab92_15ed,
                0x1_c352_0a35_ea64,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_6f40_216b_c059,
                0x3_a257_9b0f_d9b5,
                0x7_1c26_407e_ec8c,
                0x7_2ada_4ab5_4f0b,
                0x3_8750_c3b6_6d12,
            ]),
            y_minus_x: FieldElement([
                0x2_53a6_bccb_a34a,
                0x4_2707_0433_701a,
                0x2_0b8e_58f9_870e,
                0x3_37c8_61db_00cc,
                0x1_c3d0_5775_d0ee,
            ]),
            xy2d: FieldElement([
                0x6_f140_9422_e51a,
                0x7_856b_bece_2d25,
                0x1_3380_a72f_031c,
                0x4_3e10_80a7_f3ba,
                0x0_621e_2c7d_3304,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_1796_b0db_f0f3,
                0x7_3c2f_9c32_d6f5,
                0x6_aa8e_d153_7ebe,
                0x7_4e92_c918_38f4,
                0x5_d8e5_89ca_1002,
            ]),
            y_minus_x: FieldElement([
                0x0_60cc_8259_838d,
                0x0_38d3_f35b_95f3,
                0x5_6078_c243_a923,
                0x2_de32_9324_1bb2,
                0x0_007d_6097_bd3a,
            ]),
            xy2d: FieldElement([
                0x7_1d95_0842_a94b,
                0x4_6b11_e5c7_d817,
                0x5_478b_becb_4f0d,
                0x7_c305_4b0a_1c5d,
                0x1_583d_7783_c1cb,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_4704_cc9d_28c7,
                0x3_dee5_98b1_f200,
                0x1_6e1c_9874_6d9e,
                0x4_050b_7095_afdf,
                0x4_9580_64e8_3c55,
            ]),
            y_minus_x: FieldElement([
                0x6_a2ef_5da2_7ae1,
                0x2_8aac_e02e_9d9d,
                0x0_2459_e965_f0e8,
                0x7_b864_d315_0933,
                0x2_52a5_f2e8_1ed8,
            ]),
            xy2d: FieldElement([
                0x0_9426_5066_e80d,
                0x0_a60f_918d_61a5,
                0x0_444b_f7f3_0fde,
                0x1_c40d_a9ed_3c06,
                0x0_79c1_70bd_843b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_cd50_c0d5_d056,
                0x5_b760_6ae7_79ba,
                0x7_0fbd_226b_dda1,
                0x5_661e_5339_1ff9,
                0x6_768c_0d73_17b8,
            ]),
            y_minus_x: FieldElement([
                0x6_ece4_64fa_6fff,
                0x3_cc40_bca4_60a0,
                0x6_e3a9_0afb_8d0c,
                0x5_801a_bca1_1228,
                0x6_dec0_5e34_ac9f,
            ]),
            xy2d: FieldElement([
                0x6_25e5_f155_c1b3,
                0x4_f32f_6f72_3296,
                0x5_ac98_0105_efce,
                0x1_7a61_165e_ee36,
                0x5_1445_e14d_dcd5,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_47ab_2bbe_a455,
                0x1_f240_f225_3126,
                0x0_c3de_9e31_4e89,
                0x2_1ea5_a4fc_a45f,
                0x1_2e99_0086_e4fd,
            ]),
            y_minus_x: FieldElement([
                0x0_2b4b_3b14_4951,
                0x5_6889_7796_6aea,
                0x1_8e17_6e39_9ffd,
                0x2_e45c_5eb4_938b,
                0x1_3186_f31e_3929,
            ]),
            xy2d: FieldElement([
                0x4_96b3_7fdf_bb2e,
                0x3_c243_9d5f_3e21,
                0x1_6e60_fe7e_6a4d,
                0x4_d7ef_889b_621d,
                0x7_7b2e_3f05_d3e9,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_639c_12dd_b0a4,
                0x6_1804_90cd_7ab3,
                0x3_f391_8297_467c,
                0x7_4568_be17_81ac,
                0x0_7a19_5152_e095,
            ]),
            y_minus_x: FieldElement([
                0x7_a9c5_9c2e_c4de,
                0x7_e9f0_9e79_652d,
                0x6_a3e4_22f2_2d86,
                0x2_ae8e_3b83_6c8b,
                0x6_3b79_5fc7_ad32,
            ]),
            xy2d: FieldElement([
                0x6_8f02_389e_5fc8,
                0x0_59f1_bc87_7506,
                0x5_0499_0e41_0cec,
                0x0_9bd7_d0fe_aee2,
                0x3_e8fe_83d0_32f0,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_4c8d_e8ef_d13c,
                0x1_c67c_06e6_210e,
                0x1_8337_8f7f_146a,
                0x6_4352_ceae_d289,
                0x2_2d60_899a_6258,
            ]),
            y_minus_x: FieldElement([
                0x3_15b9_0570_a294,
                0x6_0ce1_08a9_25f1,
                0x6_eff6_1253_c909,
                0x0_03ef_0e2d_70b0,
                0x7_5ba3_b797_fac4,
            ]),
            xy2d: FieldElement([
                0x1_dbc0_70cd_d196,
                0x1_6d8f_b153_4c47,
                0x5_0049_8183_fa2a,
                0x7_2f59_c423_de75,
                0x0_904d_07b8_7779,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_2d66_48f9_40b9,
                0x1_97a5_a187_3e86,
                0x2_07e4_c41a_54bc,
                0x5_360b_3b4b_d6d0,
                0x6_240a_aceb_af72,
            ]),
            y_minus_x: FieldElement([
                0x6_1fd4_ddba_919c,
                0x7_d8e9_91b5_5699,
                0x6_1b31_473c_c76c,
                0x7_0396_31e6_31d6,
                0x4_3e21_43fb_c1dd,
            ]),
            xy2d: FieldElement([
                0x4_749c_5ba2_95a0,
                0x3_7946_fa4b_5f06,
                0x7_24c5_ab5a_51f1,
                0x6_5633_789d_d3f3,
                0x5_6bda_f238_db40,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_d36c_c19d_3bb2,
                0x6_ec44_70d7_2262,
                0x6_853d_7018_a9ae,
                0x3_aa3e_4dc2_c8eb,
                0x0_3aa3_1507_e1e5,
            ]),
            y_minus_x: FieldElement([
                0x2_b9e3_f535_33eb,
                0x2_add7_27a8_06c5,
                0x5_6955_c8ce_15a3,
                0x1_8c4f_070a_290e,
                0x1_d24a_86d8_3741,
            ]),
            xy2d: FieldElement([
                0x4_7648_ffd4_ce1f,
                0x6_0a95_9183_9e9d,
                0x4_24d5_f381_17ab,
                0x4_2cc4_6912_c10e,
                0x4_3b26_1dc9_aeb4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_3d8b_6c95_1364,
                0x4_c001_7e8f_632a,
                0x5_3e55_9e53_f9c4,
                0x4_b201_4688_6eea,
                0x0_2b4d_5e24_2940,
            ]),
            y_minus_x: FieldElement([
                0x3_1e19_88bb_79bb,
                0x7_b82f_46b3_bcab,
                0x0_f7a8_ce82_7b41,
                0x5_e158_1617_7130,
                0x3_2605_5cf5_b276,
            ]),
            xy2d: FieldElement([
                0x1_55cb_28d1_8df2,
                0x0_c30d_9ca1_1694,
                0x2_090e_27ab_3119,
                0x2_0862_4e7a_49b6,
                0x2_7a6c_809a_e5d3,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_270a_c43d_6954,
                0x2_ed4c_d956_59a5,
                0x7_5c0d_b375_28f9,
                0x2_ccbc_fd2c_9234,
                0x2_2150_3603_d8c2,
            ]),
            y_minus_x: FieldElement([
                0x6_ebcd_1f0d_b188,
                0x7_4ceb_4b7d_1174,
                0x7_d561_68df_4f5c,
                0x0_bf79_176f_d18a,
                0x2_cb67_174f_f60a,
            ]),
            xy2d: FieldElement([
                0x6_cdf9_390b_e1d0,
                0x0_8e51_9c7e_2b3d,
                0x2_53c3_d2a5_0881,
                0x2_1b41_448e_333d,
                0x7_b1df_4b73_890f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_2218_07f8_f58c,
                0x3_fa92_813a_8be5,
                0x6_da98_c38d_5572,
                0x0_1ed9_5554_468f,
                0x6_8698_245d_352e,
            ]),
            y_minus_x: FieldElement([
                0x2_f2e0_b3b2_a224,
                0x0_c56a_a22c_1c92,
                0x5_fdec_39f1_b278,
                0x4_c90a_f5c7_f106,
                0x6_1fce_f265_8fc5,
            ]),
            xy2d: FieldElement([
                0x1_5d85_2a18_187a,
                0x2_70db_b59a_fb76,
                0x7_db12_0bcf_92ab,
                0x0_e7a2_5d71_4087,
                0x4_6cf4_c473_daf0,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_6ea7_f149_8140,
                0x7_0725_690a_8427,
                0x0_a73a_e9f0_79fb,
                0x2_dd92_4461_c62b,
                0x1_065a_ae50_d8cc,
            ]),
            y_minus_x: FieldElement([
                0x5_25ed_9ec4_e5f9,
                0x0_22d2_0660_684c,
                0x7_972b_7039_7b68,
                0x7_a039_58d3_f965,
                0x2_9387_bcd1_4eb5,
            ]),
            xy2d: FieldElement([
                0x4_4525_df20_0d57,
                0x2_d7f9_4ce9_4385,
                0x6_0d00_c170_ecb7,
                0x3_8b05_03f3_d8f0,
                0x6_9a19_8e64_f1ce,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_4434_dcc5_caed,
                0x2_c790_9f66_7c20,
                0x6_1a83_9d1f_b576,
                0x4_f238_00ca_bb76,
                0x2_5b26_97bd_267f,
            ]),
            y_minus_x: FieldElement([
                0x2_b2e0_d91a_78bc,
                0x3_990a_12cc_f20c,
                0x1_41c2_e11f_2622,
                0x0_dfce_faa5_3320,
                0x7_369e_6a92_493a,
            ]),
            xy2d: FieldElement([
                0x7_3ffb_1398_6864,
                0x3_282b_b8f7_13ac,
                0x4_9ced_78f2_97ef,
                0x6_6970_2766_1def,
                0x1_4206_83db_54e4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_bb6f_c1cc_5ad0,
                0x5_32c8_d591_669d,
                0x1_af79_4da8_6c33,
                0x0_e0e9_d86d_24d3,
                0x3_1e83_b416_1d08,
            ]),
            y_minus_x: FieldElement([
                0x0_bd1e_249d_d197,
                0x0_0bcb_1820_568f,
                0x2_eab1_7188_30d4,
                0x3_96fd_8169_97e6,
                0x6_0b63_bebf_508a,
            ]),
            xy2d: FieldElement([
                0x0_c712_9e06_2b4f,
                0x1_e526_415b_12fd,
                0x4_61a0_fd27_923d,
                0x1_8bad_f670_a5b7,
                0x5_5cf1_eb62_d550,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_b5e3_7df5_8c52,
                0x3_bcf3_3986_c60e,
                0x4_4fb8_835c_eae7,
                0x0_99de_c18e_71a4,
                0x1_a56f_baa6_2ba0,
            ]),
            y_minus_x: FieldElement([
                0x1_1010_65c2_3d58,
                0x5_aa12_9033_8b0f,
                0x3_157e_9e2e_7421,
                0x0_ea71_2017_d489,
                0x6_69a6_5645_7089,
            ]),
            xy2d: FieldElement([
                0x6_6b50_5c9d_c9ec,
                0x7_74ef_86e3_5287,
                0x4_d1d9_44c0_955e,
                0x5_2e4c_39d7_2b20,
                0x1_3c48_3679_9c58,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_fb6a_5d8b_d080,
                0x5_8ae3_4908_589b,
                0x3_954d_977b_af13,
                0x4_13ea_5974_41dc,
                0x5_0bdc_87dc_8e5b,
            ]),
            y_minus_x: FieldElement([
                0x2_5d46_5ab3_e1b9,
                0x0_f8fe_27ec_2847,
                0x2_d6e6_dbf0_4f06,
                0x3_038c_fc1b_3276,
                0x6_6f80_c93a_637b,
            ]),
            xy2d: FieldElement([
                0x5_3783_6edf_e111,
                0x2_be02_357b_2c0d,
                0x6_dcee_58c8_d4f8,
                0x2_d732_581d_6192,
                0x1_dd56_4447_25fd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_e600_08ba_c89a,
                0x2_3d5c_387c_1852,
                0x7_9e5d_f1f5_33a8,
                0x2_e6f9_f1c5_f0cf,
                0x3_a3a4_50f6_3a30,
            ]),
            y_minus_x: FieldElement([
                0x4_7ff8_3362_127d,
                0x0_8e39_af82_b1f4,
                0x4_8832_2ef2_7dab,
                0x1_9737_38a2_a1a4,
                0x0_e645_9122_19f7,
            ]),
            xy2d: FieldElement([
                0x7_2f31_d839_4627,
                0x0_7bd2_94a2_00f1,
                0x6_65be_00e2_74c6,
                0x4_3de8_f1b6_368b,
                0x3_18c8_d939_3a9a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_9e29_ab1d_d398,
                0x3_0685_b3c7_6bac,
                0x5_65cf_37f2_4859,
                0x5_7b2a_c28e_fef9,
                0x5_09a4_1c32_5950,
            ]),
            y_minus_x: FieldElement([
                0x4_5d03_2aff_fe19,
                0x1_2fe4_9b6c_de4e,
                0x2_1663_bc32_7cf1,
                0x1_8a5e_4c69_f1dd,
                0x2_24c7_c679_a1d5,
            ]),
            xy2d: FieldElement([
                0x0_6edc_a6f9_25e9,
                0x6_8c83_63e6_77b8,
                0x6_0cfa_25e4_fbcf,
                0x1_c4c1_7609_404e,
                0x0_5bff_0232_8a11,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_a0dd_0dc5_12e4,
                0x1_0894_bf5f_cd10,
                0x5_2949_013f_9c37,
                0x1_f50f_ba47_35c7,
                0x5_7627_7cde_e01a,
            ]),
            y_minus_x: FieldElement([
                0x2_1370_23ca_e00b,
                0x1_5a35_99eb_26c6,
                0x0_6872_2151_2b3c,
                0x2_53cb_3a08_24e9,
                0x7_80b8_cc3f_a2a4,
            ]),
            xy2d: FieldElement([
                0x3_8abc_234f_305f,
                0x7_a280_bbc1_03de,
                0x3_98a8_3669_5dfe,
                0x3_d0af_4152_8a1a,
                0x5_ff41_8726_271b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_47e8_13b6_9540,
                0x7_6864_c21c_3cbb,
                0x1_e049_dbcd_74a8,
                0x5_b4d6_0f93_749c,
                0x2_9d4d_b8ca_0a0c,
            ]),
            y_minus_x: FieldElement([
                0x6_080c_1789_db9d,
                0x4_be7c_ef1e_a731,
                0x2_f40d_769d_8080,
                0x3_5f7d_4c44_a603,
                0x1_06a0_3dc2_5a96,
            ]),
            xy2d: FieldElement([
                0x5_0aaf_3333_53d0,
                0x4_b59a_613c_bb35,
                0x2_23df_c0e1_9a76,
                0x7_7d1e_2bb2_c564,
                0x4_ab38_a510_52cb,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_d1ef_5fdd_c09c,
                0x7_beea_ebb9_dad9,
                0x0_58d3_0ba0_acfb,
                0x5_cd92_eab5_ae90,
                0x3_041c_6bb0_4ed2,
            ]),
            y_minus_x: FieldElement([
                0x4_2b25_6768_d593,
                0x2_e884_5942_7b4f,
                0x0_2b38_7663_0701,
                0x3_4878_d405_eae5,
                0x2_9cdd_1adc_088a,
            ]),
            xy2d: FieldElement([
                0x2_f2f9_d956_e148,
                0x6_b3e6_ad65_c1fe,
                0x5_b009_72b7_9e5d,
                0x5_3d8d_234c_5daf,
                0x1_04bb_d681_4049,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_9a5f_d67f_f163,
                0x3_a998_ead0_352b,
                0x0_83c9_5fa4_af9a,
                0x6_fadb_fc01_266f,
                0x2_04f2_a20f_b072,
            ]),
            y_minus_x: FieldElement([
                0x0_fd31_68f1_ed67,
                0x1_bb0d_e778_4a3e,
                0x3_4bcb_78b2_0477,
                0x0_a4a2_6e2e_2182,
                0x5_be8c_c570_92a7,
            ]),
            xy2d: FieldElement([
                0x4_3b3d_30eb_b079,
                0x3_57ac_a5c6_1902,
                0x5_b570_c5d6_2455,
                0x3_0fb2_9e1e_18c7,
                0x2_570f_b17c_2791,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_a955_0bb8_245a,
                0x5_11f2_0a1a_2325,
                0x2_9324_d723_9bee,
                0x3_343c_c375_16c4,
                0x2_41c5_f91d_e018,
            ]),
            y_minus_x: FieldElement([
                0x2_367f_2cb6_1575,
                0x6_c39a_c04d_87df,
                0x6_d495_8bd7_e5bd,
                0x5_66f4_638a_1532,
                0x3_dcb6_5ea5_3030,
            ]),
            xy2d: FieldElement([
                0x0_1729_40de_6caa,
                0x6_045b_2e67_451b,
                0x5_6c07_463e_fcb3,
                0x0_728b_6bfe_6e91,
                0x0_8420_edd5_fcdf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_c34e_04f4_10ce,
                0x3_44ed_c0d0_a06b,
                0x6_e454_86d8_4d6d,
                0x4_4e2e_cb38_63f5,
                0x0_4d65_4f32_1db8,
            ]),
            y_minus_x: FieldElement([
                0x7_20ab_8362_fa4a,
                0x2_9c43_47cd_d9bf,
                0x0_e798_ad5f_8463,
                0x4_fef1_8bcb_0bfe,
                0x0_d9a5_3efb_c176,
            ]),
            xy2d: FieldElement([
                0x5_c116_ddbd_b5d5,
                0x6_d1b4_bba5_abcf,
                0x4_d28a_48a5_537a,
                0x5_6b8e_5b04_0b99,
                0x4_a7a4_f261_8991,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_b291_af37_2a4b,
                0x6_0e30_28fe_4498,
                0x2_267b_ca4f_6a09,
                0x7_19ee_c242_b243,
                0x4_a963_1422_3e0e,
            ]),
            y_minus_x: FieldElement([
                0x7_1802_5fb1_5f95,
                0x6_8d6b_8371_fe94,
                0x3_8044_48f7_d97c,
                0x4_2466_fe78_4280,
                0x1_1b50_c4cd_dd31,
            ]),
            xy2d: FieldElement([
                0x0_2744_08a4_ffd6,
                0x7_d382_aedb_34dd,
                0x4_0acf_c9ce_385d,
                0x6_28bb_99a4_5b1e,
                0x4_f4bc_e4dc_e6bc,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_616e_c49d_0b6f,
                0x1_f95d_8462_e61c,
                0x1_ad3e_9b91_59c6,
                0x7_9ba4_75a0_4df9,
                0x3_042c_ee56_1595,
            ]),
            y_minus_x: FieldElement([
                0x7_ce5a_e224_2584,
                0x2_d25e_b153_d4e3,
                0x3_a8f3_d09b_a9c9,
                0x0_f369_0d04_eb8e,
                0x7_3fcd_d14b_71c0,
            ]),
            xy2d: FieldElement([
                0x6_7079_449b_ac41,
                0x5_b79c_4621_484f,
                0x6_1069_f215_6b8d,
                0x0_eb26_573b_10af,
                0x3_89e7_40c9_a9ce,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_78f6_570e_ac28,
                0x6_44f2_339c_3937,
                0x6_6e47_b795_6c2c,
                0x3_4832_fe1f_55d0,
                0x2_5c42_5e5d_6263,
            ]),
            y_minus_x: FieldElement([
                0x4_b3ae_34dc_b9ce,
                0x4_7c69_1a15_ac9f,
                0x3_18e0_6e5d_400c,
                0x3_c422_d9f8_3eb1,
                0x6_1545_3794_65a6,
            ]),
            xy2d: FieldElement([
                0x6_06a6_f1d7_de6e,
                0x4_f1c0_c461_07e7,
                0x2_29b1_dcfb_e5d8,
                0x3_acc6_0a7b_1327,
                0x6_539a_0891_5484,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_dbd4_14bb_4a19,
                0x7_9308_49f1_dbb8,
                0x3_29c5_a466_caf0,
                0x6_c824_544f_eb9b,
                0x0_f653_20ef_019b,
            ]),
            y_minus_x: FieldElement([
                0x2_1f74_c3d2_f773,
                0x0_24b8_8d08_bd3a,
                0x6_e678_cf05_4151,
                0x4_3631_272e_747c,
                0x1_1c5e_4aac_5cd1,
            ]),
            xy2d: FieldElement([
                0x6_d1b1_cafd_e0c6,
                0x4_62c7_6a30_3a90,
                0x3_ca4e_693c_ff9b,
                0x3_952c_d457_86fd,
                0x4_cabc_7bde_c330,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_788f_3f78_d289,
                0x5_9428_09b3_f811,
                0x5_9732_77f8_c29c,
                0x0_10f9_3bc5_fe67,
                0x7_ee49_8165_acb2,
            ]),
            y_minus_x: FieldElement([
                0x6_9624_089c_0a2e,
                0x0_075f_c8e7_0473,
                0x1_3e84_ab1d_2313,
                0x2_c10b_edf6_953b,
                0x6_39b9_3f03_21c8,
            ]),
            xy2d: FieldElement([
                0x5_08e3_9111_a1c3,
                0x2_9012_0e91_2f7a,
                0x1_cbf4_64ac_ae43,
                0x1_5373_e957_6157,
                0x0_edf4_93c8_5b60,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_c4d2_8476_4113,
                0x7_fefe_bf06_acec,
                0x3_9afb_7a82_4100,
                0x1_b48e_47e7_fd65,
                0x0_4c00_c54d_1dfa,
            ]),
            y_minus_x: FieldElement([
                0x4_8158_599b_5a68,
                0x1_fd75_bc41_d5d9,
                0x2_d9fc_1fa9_5d3c,
                0x7_da27_f20e_ba11,
                0x4_03b9_2e30_19d4,
            ]),
            xy2d: FieldElement([
                0x2_2f81_8b46_5cf8,
                0x3_4290_1dff_09b8,
                0x3_1f59_5dc6_83cd,
                0x3_7a57_745f_d682,
                0x3_55bb_12ab_2617,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_dac7_5a8c_7318,
                0x3_b679_d542_3460,
                0x6_b8fc_b7b6_400e,
                0x6_c737_83be_5f9d,
                0x7_518e_af8e_052a,
            ]),
            y_minus_x: FieldElement([
                0x6_64cc_7493_bbf4,
                0x3_3d94_7618_74e3,
                0x0_179e_1796_f613,
                0x1_8905_35e2_867d,
                0x0_f9b8_1321_82ec,
            ]),
            xy2d: FieldElement([
                0x0_59c4_1b7f_6c32,
                0x7_9e87_0653_1491,
                0x6_c747_643c_b582,
                0x2_e20c_0ad4_94e4,
                0x4_7c38_71bb_b175,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_5d50_c850_66b0,
                0x6_1674_5336_1f7c,
                0x0_6ba3_818b_b312,
                0x6_aff2_9baa_7522,
                0x0_8fea_02ce_8d48,
            ]),
            y_minus_x: FieldElement([
                0x4_5397_71ec_4f48,
                0x7_b931_8bad_ca28,
                0x7_0f19_afe0_16c5,
                0x4_ee7b_b160_8d23,
                0x0_0b89_b857_6469,
            ]),
            xy2d: FieldElement([
                0x5_dd76_68de_ead0,
                0x4_096d_0ba4_7049,
                0x6_2759_9721_9114,
                0x2_9bda_8a67_e6ae,
                0x4_7382_9a74_f75d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_533a_ad39_02c9,
                0x1_dde0_6b11_e47b,
                0x7_84be_d193_0b77,
                0x1_c80a_92b9_c867,
                0x6_c668_b4d4_4e4d,
            ]),
            y_minus_x: FieldElement([
                0x2_da75_4679_c418,
                0x3_164c_31be_105a,
                0x1_1fac_2b98_ef5f,
                0x3_5a1a_af77_9256,
                0x2_0786_84c4_833c,
            ]),
            xy2d: FieldElement([
                0x0_cf21_7a78_820c,
                0x6_5024_e7d2_e769,
                0x2_3bb5_efdd_a82a,
                0x1_9fd4_b632_d3c6,
                0x7_411a_6054_f8a4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_e53d_18b1_75b4,
                0x3_3e72_5420_4af3,
                0x3_bcd7_d5a1_c4c5,
                0x4_c7c2_2af6_5d0f,
                0x1_ec9a_8724_58c3,
            ]),
            y_minus_x: FieldElement([
                0x5_9d32_b99d_c86d,
                0x6_ac07_5e22_a9ac,
                0x3_0b92_2011_3371,
                0x2_7fd9_a638_966e,
                0x7_c136_574f_b813,
            ]),
            xy2d: FieldElement([
                0x6_a4d4_00a2_509b,
                0x0_4179_1056_971c,
                0x6_55d5_866e_075c,
                0x2_302b_f3e6_4df8,
                0x3_add8_8a5c_7cd6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_98d4_5939_3046,
                0x3_0bfe_cb3d_90b8,
                0x3_d9b8_ea3d_f8d6,
                0x3_900e_9651_1579,
                0x6_1ba1_131a_406a,
            ]),
            y_minus_x: FieldElement([
                0x1_5770_b635_dcf2,
                0x5_9ecd_83f7_9571,
                0x2_db46_1c0b_7fbd,
                0x7_3a42_a981_345f,
                0x2_4992_9fcc_c879,
            ]),
            xy2d: FieldElement([
                0x0_a0f1_1695_9029,
                0x5_974f_d7b1_347a,
                0x1_e0cc_1c08_edad,
                0x6_73bd_f8ad_1f13,
                0x5_6203_10cb_bd8e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_b5f4_77e2_85d6,
                0x4_ed91_ec32_6cc8,
                0x6_d653_7503_a3fd,
                0x6_26d3_7639_88d5,
                0x7_ec84_6f36_58ce,
            ]),
            y_minus_x: FieldElement([
                0x1_9343_4934_d643,
                0x0_d4a2_445e_aa51,
                0x7_d070_8ae7_6fe0,
                0x3_9847_b6c3_c7e1,
                0x3_7676_a2a4_d9d9,
            ]),
            xy2d: FieldElement([
                0x6_8f3f_1da2_2ec7,
                0x6_ed80_39a2_736b,
                0x2_627e_e04c_3c75,
                0x6_ea90_a647_e7d1,
                0x6_daaf_7233_99b9,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_04bf_acad_8ea2,
                0x5_0291_7d10_8b07,
                0x0_4317_6ca6_dd0f,
                0x5_d515_8f2c_1d84,
                0x2_b544_9e58_eb3b,
            ]),
            y_minus_x: FieldElement([
                0x2_7562_eb3d_be47,
                0x2_91d7_b417_0be7,
                0x5_d1ca_67df_a8e1,
                0x2_a880_61f2_98a2,
                0x1_304e_9e71_627d,
            ]),
            xy2d: FieldElement([
                0x0_14d2_6adc_9cfe,
                0x7_f169_1ba1_6f13,
                0x5_e718_28f0_6eac,
                0x3_49ed_07f0_fffc,
                0x4_468d_e2d7_c2dd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_d8c6_f863_07ce,
                0x6_286b_a185_0973,
                0x5_e9dc_b084_44d4,
                0x1_a96a_5433_62b2,
                0x5_da64_27e6_3247,
            ]),
            y_minus_x: FieldElement([
                0x3_355e_9419_469e,
                0x1_847b_b8ea_8a37,
                0x1_fe65_88cf_9b71,
                0x6_b1c9_d2db_6b22,
                0x6_cce7_c6ff_b44b,
            ]),
            xy2d: FieldElement([
                0x4_c688_deac_22ca,
                0x6_f775_c3ff_0352,
                0x5_6560_3ee4_19bb,
                0x6_5444_56c6_1c46,
                0x5_8f29_abfe_79f2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_64bf_710e_cdf6,
                0x7_08c5_8527_896b,
                0x4_2cea_e6c5_3394,
                0x4_381b_21e8_2b6a,
                0x6_af93_7241_85b4,
            ]),
            y_minus_x: FieldElement([
                0x6_cfab_8de7_3e68,
                0x3_e6ef_ced4_bd21,
                0x0_0566_0950_0dbe,
                0x7_1b78_24ad_85df,
                0x5_7762_9c4a_7f41,
            ]),
            xy2d: FieldElement([
                0x0_0245_09c6_a888,
                0x2_696a_b12e_6644,
                0x0_cca2_7f4b_80d8,
                0x0_c7c1_f11b_119e,
                0x7_01f2_5bb0_caec,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_f6d9_7cbe_c113,
                0x4_ce97_fb7c_93a3,
                0x1_3983_5a11_281b,
                0x7_2890_7ada_9156,
                0x7_20a5_bc05_0955,
            ]),
            y_minus_x: FieldElement([
                0x0_b0f8_e461_6ced,
                0x1_d3c4_b50f_b875,
                0x2_f296_73dc_0198,
                0x5_f4b0_f183_0ffa,
                0x2_e0c9_2bfb_dc40,
            ]),
            xy2d: FieldElement([
                0x7_0943_9b80_5a35,
                0x6_ec48_557f_8187,
                0x0_8a4d_1ba1_3a2c,
                0x0_7634_8a0b_f9ae,
                0x0_e9b9_cbb1_44ef,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_9bd5_5db1_beee,
                0x6_e14e_47f7_31bd,
                0x1_a35e_4727_0eac,
                0x6_6f22_5478_df8e,
                0x3_66d4_4191_cfd3,
            ]),
            y_minus_x: FieldElement([
                0x2_d48f_fb57_20ad,
                0x5_7b7f_21a1_df77,
                0x5_550e_ffba_0645,
                0x5_ec6a_4098_a931,
                0x2_2110_4eb3_f337,
            ]),
            xy2d: FieldElement([
                0x4_1743_f2bc_8c14,
                0x7_96b0_ad87_73c7,
                0x2_9fee_5cbb_689b,
                0x1_2266_5c17_8734,
                0x4_167a_4e6b_c593,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_2665_f8ce_8fee,
                0x2_9d10_1ac5_9857,
                0x4_d93b_bba5_9ffc,
                0x1_7b78_9737_3f17,
                0x3_4b33_370c_b7ed,
            ]),
            y_minus_x: FieldElement([
                0x3_9d28_76f6_2700,
                0x0_01ce_cd1d_6c87,
                0x7_f01a_1174_7675,
                0x2_350d_a5a1_8190,
                0x7_938b_b7e2_2552,
            ]),
            xy2d: FieldElement([
                0x5_91ee_8681_d6cc,
                0x3_9db0_b4ea_79b8,
                0x2_0222_0f38_0842,
                0x2_f276_ba42_e0ac,
                0x1_176f_c6e2_dfe6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_e289_4977_0eb8,
                0x5_559e_8814_7b72,
                0x3_5e1e_6e63_ef30,
                0x3_5b10_9aa7_ff6f,
                0x1_f6a3_e54f_2690,
            ]),
            y_minus_x: FieldElement([
                0x7_6cd0_5b9c_619b,
                0x6_9654_b090_1695,
                0x7_a537_10b7_7f27,
                0x7_9a1e_a7d2_8175,
                0x0_8fc3_a4c6_77d5,
            ]),
            xy2d: FieldElement([
                0x4_c199_d307_34ea,
                0x6_c622_cb9a_cc14,
                0x5_660a_5503_0216,
                0x0_68f1_199f_11fb,
                0x4_f2fa_d011_6b90,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_d91d_b73b_b638,
                0x5_5f82_5381_12c5,
                0x6_d85a_2798_15de,
                0x7_40b7_b0cd_9cf9,
                0x3_4519_95f2_944e,
            ]),
            y_minus_x: FieldElement([
                0x6_b241_94ae_4e54,
                0x2_230a_fded_8897,
                0x2_3412_617d_5071,
                0x3_d5d3_0f35_969b,
                0x4_4548_4a49_72ef,
            ]),
            xy2d: FieldElement([
                0x2_fcd0_9fea_7d7c,
                0x2_9612_6b9e_d22a,
                0x4_a171_012a_05b2,
                0x1_db92_c74d_5523,
                0x1_0b89_ca60_4289,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_41be_5a45_f06e,
                0x5_adb3_8bec_aea7,
                0x3_fd46_db41_f2bb,
                0x6_d488_bbb5_ce39,
                0x1_7d2d_1d9e_f0d4,
            ]),
            y_minus_x: FieldElement([
                0x1_4749_9718_289c,
                0x0_a48a_67e4_c7ab,
                0x3_0fbc_544b_afe3,
                0x0_c701_315f_e58a,
                0x2_0b87_8d57_7b75,
            ]),
            xy2d: FieldElement([
                0x2_af18_073f_3e6a,
                0x3_3aea_420d_24fe,
                0x2_9800_8bf4_ff94,
                0x3_5391_71db_961e,
                0x7_2214_f63c_c65c,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_b7b9_f43b_29c9,
                0x1_49ea_31ee_a3b3,
                0x4_be77_1358_1609,
                0x2_d879_6039_5e98,
                0x1_f24a_c855_a154,
            ]),
            y_minus_x: FieldElement([
                0x3_7f40_5307_a693,
                0x2_e5e6_6cf2_b69c,
                0x5_d842_66ae_9c53,
                0x5_e4eb_7de8_53b9,
                0x5_fdf4_8c58_171c,
            ]),
            xy2d: FieldElement([
                0x6_0832_8e95_05aa,
                0x2_2182_841d_c49a,
                0x3_ec96_891d_2307,
                0x2_f363_fff2_2e03,
                0x0_0ba7_39e2_ae39,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_26f5_ea88_bb26,
                0x3_3092_e77f_75c8,
                0x1_a539_40d8_19e7,
                0x1_132e_4f81_8613,
                0x7_2297_de7d_518d,
            ]),
            y_minus_x: FieldElement([
                0x6_98de_5c87_90d6,
                0x2_68b8_545b_eb25,
                0x6_d264_8b96_fedf,
                0x4_7988_ad1d_b07c,
                0x0_3283_a3e6_7ad7,
            ]),
            xy2d: FieldElement([
                0x4_1dc7_be0c_b939,
                0x1_b16c_6610_0904,
                0x0_a24c_20cb_c66d,
                0x4_a2e9_efe4_8681,
                0x0_5e12_9684_6271,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_bbc8_242c_4550,
                0x5_9a06_103b_35b7,
                0x7_237e_4af3_2033,
                0x7_2642_1ab3_537a,
                0x7_8cf2_5d38_258c,
            ]),
            y_minus_x: FieldElement([
                0x2_eeb3_2d9c_495a,
                0x7_9e25_772f_9750,
                0x6_d747_833b_bf23,
                0x6_cdd8_16d5_d749,
                0x3_9c00_c9c1_3698,
            ]),
            xy2d: FieldElement([
                0x6_6b8e_3148_9d68,
                0x5_7385_7e10_e2b5,
                0x1_3be8_16aa_1472,
                0x4_1964_d3ad_4bf8,
                0x0_06b5_2076_b3ff,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_7e16_b9ce_082d,
                0x1_882f_5785_3eb9,
                0x7_d29e_acd0_1fc5,
                0x2_e76a_59b5_e715,
                0x7_de2e_9561_a9f7,
            ]),
            y_minus_x: FieldElement([
                0x0_cfe1_9d95_781c,
                0x3_12cc_621c_453c,
                0x1_45ac_e6da_077c,
                0x0_912b_ef9c_e9b8,
                0x4_d57e_3443_bc76,
            ]),
            xy2d: FieldElement([
                0x0_d4f4_b6a5_5ecb,
                0x7_ebb0_bb73_3bce,
                0x7_ba6a_0520_0549,
                0x4_f6ed_e4e2_2069,
                0x6_b2a9_0af1_a602,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_f324_5bb2_d80a,
                0x0_e5f7_20f3_6efd,
                0x3_b9cc_cf60_c06d,
                0x0_84e3_23f3_7926,
                0x4_6581_2c82_76c2,
            ]),
            y_minus_x: FieldElement([
                0x3_f4fc_9ae6_1e97,
                0x3_bc07_ebfa_2d24,
                0x3_b744_b55c_d4a0,
                0x7_2553_b257_21f3,
                0x5_fd8f_4e9d_12d3,
            ]),
            xy2d: FieldElement([
                0x3_beb2_2a10_62d9,
                0x6_a706_3b82_c9a8,
                0x0_a5a3_5dc1_97ed,
                0x3_c80c_06a5_3def,
                0x0_5b32_c2b1_cb16,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_a42c_7ad5_8195,
                0x5_c866_7e79_9eff,
                0x0_2e5e_74c8_50a1,
                0x3_f0db_614e_869a,
                0x3_1771_a485_6730,
            ]),
            y_minus_x: FieldElement([
                0x0_5ecc_d24d_a8fd,
                0x5_80bb_fdf0_7918,
                0x7_e735_8687_3c6a,
                0x7_4ced_df77_f93e,
                0x3_b555_6a37_b471,
            ]),
            xy2d: FieldElement([
                0x0_c524_e14d_d482,
                0x2_8345_7496_c656,
                0x0_ad6b_cfb6_cd45,
                0x3_75d1_e8b0_2414,
                0x4_fc07_9d27_a733,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_8b44_0c86_c50d,
                0x1_3992_9cca_3b86,
                0x0_f8f2_e44c_df2f,
                0x6_8432_117b_a6b2,
                0x2_4117_0c2b_ae3c,
            ]),
            y_minus_x: FieldElement([
                0x1_38b0_89bf_2f7f,
                0x4_a05b_fd34_ea39,
                0x2_0391_4c92_5ef5,
                0x7_497f_ffe0_4e3c,
                0x1_2456_7cec_af98,
            ]),
            xy2d: FieldElement([
                0x1_ab86_0ac4_73b4,
                0x5_c022_7c86_a7ff,
                0x7_1b12_bfc2_4477,
                0x0_06a5_73a8_3075,
                0x3_f861_2966_c870,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_fcfa_3604_8d13,
                0x6_6e71_33bb_b383,
                0x6_4b42_a8a4_5676,
                0x4_ea6e_4f9a_85cf,
                0x2_6f57_eee8_78a1,
            ]),
            y_minus_x: FieldElement([
                0x2_0cc9_782a_0dde,
                0x6_5d4e_3070_aab3,
                0x7_bc8e_3154_7736,
                0x0_9ebf_b143_2d98,
                0x5_04aa_7767_9736,
            ]),
            xy2d: FieldElement([
                0x3_2cd5_5687_efb1,
                0x4_448f_5e2f_6195,
                0x5_6891_9d46_0345,
                0x0_34c2_e0ad_1a27,
                0x4_0419_43d9_dba3,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_7743_a26c_aadd,
                0x4_8c91_56f9_c964,
                0x7_ef27_8d1e_9ad0,
                0x0_0ce5_8ea7_bd01,
                0x1_2d93_1429_800d,
            ]),
            y_minus_x: FieldElement([
                0x0_eeba_43eb_cc96,
                0x3_84dd_5395_f878,
                0x1_df33_1a35_d272,
                0x2_07ec_fd4a_f70e,
                0x1_420a_1d97_6843,
            ]),
            xy2d: FieldElement([
                0x6_7799_d337_594f,
                0x0_1647_548f_6018,
                0x5_7fce_5578_f145,
                0x0_0922_0c14_2a71,
                0x1_b4f9_2314_359a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_3030_a498_66b1,
                0x2_442b_e90b_2679,
                0x7_7bd3_d894_7dcf,
                0x1_fb55_c155_2028,
                0x5_ff19_1d56_f9a2,
            ]),
            y_minus_x: FieldElement([
                0x4_109d_8915_0951,
                0x2_25bd_2d2d_47cb,
                0x5_7cc0_80e7_3bea,
                0x6_d710_7572_1fcb,
                0x2_39b5_72a7_f132,
            ]),
            xy2d: FieldElement([
                0x6_d433_ac2d_9068,
                0x7_2bf9_30a4_7033,
                0x6_4fac_f4a2_0ead,
                0x3_65f7_a2b9_402a,
                0x0_20c5_26a7_58f3,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_ef59_f042_cc89,
                0x3_b1c2_4976_dd26,
                0x3_1d66_5cb1_6272,
                0x2_8656_e470_c557,
                0x4_52cf_e0a5_602c,
            ]),
            y_minus_x: FieldElement([
                0x0_34f8_9ed8_dbbc,
                0x7_3b8f_948d_8ef3,
                0x7_86c1_d323_caab,
                0x4_3bd4_a926_6e51,
                0x0_2aac_c461_5313,
            ]),
            xy2d: FieldElement([
                0x0_f7a0_6478_77df,
                0x4_e1cc_0f93_f0d4,
                0x7_ec47_26ef_1190,
                0x3_bdd5_8bf5_12f8,
                0x4_cfb7_d7b3_04b8,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_99c2_9789_ef12,
                0x6_3bea_e321_bc50,
                0x3_25c3_40ad_bb35,
                0x5_62e1_a1e4_2bf6,
                0x5_b1d4_cbc4_34d3,
            ]),
            y_minus_x: FieldElement([
                0x4_3d6c_b89b_75fe,
                0x3_338d_5b90_0e56,
                0x3_8d32_7d53_1a53,
                0x1_b25c_61d5_1b9f,
                0x1_4b46_22b3_9075,
            ]),
            xy2d: FieldElement([
                0x3_2615_cc0a_9f26,
                0x5_7711_b99c_b6df,
                0x5_a69c_14e9_3c38,
                0x6_e889_80a4_c599,
                0x2_f98f_7125_8592,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_ae44_4f54_a701,
                0x6_1539_7afb_c5c2,
                0x6_0d77_83f3_f8fb,
                0x2_aa67_5fc4_86ba,
                0x1_d806_2e9e_7614,
            ]),
            y_minus_x: FieldElement([
                0x4_a74c_b50f_9e56,
                0x5_31d1_c264_0192,
                0x0_c03d_9d6c_7fd2,
                0x5_7ccd_1566_10c1,
                0x3_a6ae_249d_806a,
            ]),
            xy2d: FieldElement([
                0x2_da85_a990_7c5a,
                0x6_b237_21ec_4caf,
                0x4_d2d3_a468_3aa2,
                0x7_f9c6_870e_fdef,
                0x2_98b8_ce8a_ef25,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_72ea_0a21_65de,
                0x6_8179_ef3e_d06f,
                0x4_e2b9_c0fe_ac1e,
                0x3_ee29_0b1b_63bb,
                0x6_ba62_7180_3a7d,
            ]),
            y_minus_x: FieldElement([
                0x2_7953_eff7_0cb2,
                0x5_4f22_ae0e_c552,
                0x2_9f3d_a92e_2724,
                0x2_42ca_0c22_bd18,
                0x3_4b8a_8404_d5ce,
            ]),
            xy2d: FieldElement([
                0x6_ecb5_8369_3335,
                0x3_ec76_bfdf_b84d,
                0x2_c895_cf56_a04f,
                0x6_3551_49d5_4d52,
                0x7_1d62_bdd4_65e1,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_b5da_b1f7_5ef5,
                0x1_e2d6_0cbe_b9a5,
                0x5_27c2_175d_fe57,
                0x5_9e8a_2b8f_f51f,
                0x1_c333_6212_62b2,
            ]),
            y_minus_x: FieldElement([
                0x3_cc28_d378_df80,
                0x7_2141_f496_8ca6,
                0x4_0769_6bdb_6d0d,
                0x5_d271_b22f_fcfb,
                0x7_4d5f_317f_3172,
            ]),
            xy2d: FieldElement([
                0x7_e554_67d9_ca81,
                0x6_a565_3186_f50d,
                0x6_b188_ece6_2df1,
                0x4_c66d_3684_4971,
                0x4_aebc_c454_7e9d,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_8d9e_7354_b610,
                0x2_6b75_0b6d_c168,
                0x1_6288_1e01_acc9,
                0x7_966d_f31d_01a5,
                0x1_73bd_9ddc_9a1d,
            ]),
            y_minus_x: FieldElement([
                0x0_071b_276d_01c9,
                0x0_b0d8_918e_025e,
                0x7_5bee_a79e_e2eb,
                0x3_c929_8409_4db8,
                0x5_d88f_bf95_a3db,
            ]),
            xy2d: FieldElement([
                0x0_0f1e_fe58_72df,
                0x5_da87_2318_256a,
                0x5_9ceb_8163_5960,
                0x1_8cf3_7693_c764,
                0x0_6e1c_d13b_19ea,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_af62_9e5b_0353,
                0x2_04f1_a088_e8e5,
                0x1_0efc_9cee_a82e,
                0x5_8986_3c2f_a34b,
                0x7_f3a6_a1a8_d837,
            ]),
            y_minus_x: FieldElement([
                0x0_ad51_6f16_6f23,
                0x2_63f5_6d57_c81a,
                0x1_3422_3846_38ca,
                0x1_331f_f1af_0a50,
                0x3_0806_0352_6e16,
            ]),
            xy2d: FieldElement([
                0x6_4439_5d3d_800b,
                0x2_b920_3dbe_defc,
                0x4_b18c_e656_a355,
                0x0_3f34_66bc_182c,
                0x3_0d0f_ded2_e513,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_971e_68b8_4750,
                0x5_2ccc_9779_f396,
                0x3_e904_ae82_55c8,
                0x4_ecae_46f3_9339,
                0x4_6150_8435_1c58,
            ]),
            y_minus_x: FieldElement([
                0x1_4d1a_f212_33b3,
                0x1_de19_89b3_9c0b,
                0x5_2669_dc6f_6f9e,
                0x4_3434_b28c_3fc7,
                0x0_a921_4202_c099,
            ]),
            xy2d: FieldElement([
                0x0_19c0_aeb9_a02e,
                0x1_a2c0_6995_d792,
                0x6_64cb_b157_1c44,
                0x6_ff07_36fa_80b2,
                0x3_bca0_d289_5ca5,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_8eb6_9ecc_01bf,
                0x5_b4c8_912d_f38d,
                0x5_ea7f_8bc2_f20e,
                0x1_20e5_16ca_afaf,
                0x4_ea8b_4038_df28,
            ]),
            y_minus_x: FieldElement([
                0x0_31bc_3c5d_62a4,
                0x7_d9fe_0f4c_081e,
                0x4_3ed5_1467_f22c,
                0x1_e6cc_0c1e_d109,
                0x5_631d_edda_e8f1,
            ]),
            xy2d: FieldElement([
                0x5_460a_f1ca_d202,
                0x0_b491_9dd0_655d,
                0x7_c469_7d18_c14c,
                0x2_31c8_90bb_a2a4,
                0x2_4ce0_9305_42ca,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_a155_fdf3_0b85,
                0x1_c6c6_e5d4_87f9,
                0x2_4be1_134b_dc5a,
                0x1_4059_7032_6f32,
                0x5_4992_8a73_24f4,
            ]),
            y_minus_x: FieldElement([
                0x0_90f5_fd06_c106,
                0x6_abb1_021e_43fd,
                0x2_32bc_fad7_11a0,
                0x3_a5c1_3c04_7f37,
                0x4_1d4e_3c28_a06d,
            ]),
            xy2d: FieldElement([
                0x6_32a7_63ee_1a2e,
                0x6_fa4b_ffbd_5e4d,
                0x5_fd35_a6ba_4792,
                0x7_b55e_1de9_9de8,
                0x4_91b6_6dec_0dcf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_4a8e_d0da_64a1,
                0x5_ecfc_4509_6ebe,
                0x5_edee_93b4_88b2,
                0x5_b3c1_1a51_bc8f,
                0x4_cf6b_8b0b_7018,
            ]),
            y_minus_x: FieldElement([
                0x5_b13d_c7ea_32a7,
                0x1_8fc2_db73_131e,
                0x7_e365_1f8f_57e3,
                0x2_5656_055f_a965,
                0x0_8f33_8d0c_85ee,
            ]),
            xy2d: FieldElement([
                0x3_a821_991a_73bd,
                0x0_3be6_418f_5870,
                0x1_ddc1_8eac_9ef0,
                0x5_4ce0_9e99_8dc2,
                0x5_30d4_a82e_b078,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_7345_6c9a_bf9e,
                0x7_8920_1510_0dad,
                0x3_3ee1_4095_fecb,
                0x6_ad95_d67a_0964,
                0x0_db3e_7e00_cbfb,
            ]),
            y_minus_x: FieldElement([
                0x4_3630_e1f9_4825,
                0x4_d195_6a6b_4009,
                0x2_13fe_2df8_b5e0,
                0x0_5ce3_a411_91e6,
                0x6_5ea7_53f1_0177,
            ]),
            xy2d: FieldElement([
                0x6_fc3e_e209_6363,
                0x7_ec36_b96d_67ac,
                0x5_10ec_6a07_58b1,
                0x0_ed87_df02_2109,
                0x0_2a4e_c192_1e1a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_6162_f1cf_795f,
                0x3_24dd_cafe_5eb9,
                0x0_18d5_e046_3218,
                0x7_e78b_9092_428e,
                0x3_6d12_b5de_c067,
            ]),
            y_minus_x: FieldElement([
                0x6_259a_3b24_b8a2,
                0x1_88b5_f417_0b9c,
                0x6_81c0_dee1_5deb,
                0x4_dfe6_65f3_7445,
                0x3_d143_c511_2780,
            ]),
            xy2d: FieldElement([
                0x5_2791_7915_4557,
                0x3_9f8f_0741_424d,
                0x4_5e6e_b357_923d,
                0x4_2c9b_5edb_746f,
                0x2_ef51_7885_ba82,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_bffb_305b_2f51,
                0x5_b112_b2d7_12dd,
                0x3_5774_974f_e4e2,
                0x0_4af8_7a96_e3a3,
                0x5_7968_290b_b3a0,
            ]),
            y_minus_x: FieldElement([
                0x7_974e_8c58_aedc,
                0x7_757e_0834_88c6,
                0x6_01c6_2ae7_bc8b,
                0x4_5370_c2ec_ab74,
                0x2_f1b7_8fab_143a,
            ]),
            xy2d: FieldElement([
                0x2_b843_0a20_e101,
                0x1_a49e_1d88_fee3,
                0x3_8bbb_47ce_4d96,
                0x1_f0e7_ba84_d437,
                0x7_dc43_e35d_c2aa,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_2a5c_273e_9718,
                0x3_2bc9_dfb2_8b4f,
                0x4_8df4_f8d5_db1a,
                0x5_4c87_976c_028f,
                0x0_44fb_81d8_2d50,
            ]),
            y_minus_x: FieldElement([
                0x6_6665_887d_d9c3,
                0x6_2976_0a6a_b0b2,
                0x4_81e6_c724_3e6c,
                0x0_97e3_7046_fc77,
                0x7_ef72_0167_58cc,
            ]),
            xy2d: FieldElement([
                0x7_18c5_a907_e3d9,
                0x3_b9c9_8c6b_383b,
                0x0_06ed_255e_ccdc,
                0x6_9765_3822_9a59,
                0x7_f798_23f9_c30d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_1ff0_68f5_87ba,
                0x1_c00a_191b_cd53,
                0x7_b56f_9c20_9e25,
                0x3_781e_5fcc_aabe,
                0x6_4a9b_0431_c06d,
            ]),
            y_minus_x: FieldElement([
                0x4_d239_a3b5_13e8,
                0x2_9723_f51b_1066,
                0x6_42f4_cf04_d9c3,
                0x4_da09_5aa0_9b7a,
                0x0_a4e0_373d_784d,
            ]),
            xy2d: FieldElement([
                0x3_d6a1_5b7d_2919,
                0x4_1aa7_5046_a5d6,
                0x6_9175_1ec2_d3da,
                0x2_3638_ab67_21c4,
                0x0_71a7_d0ac_e183,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_3552_20e1_4431,
                0x0_e136_2a28_3981,
                0x2_757c_d835_9654,
                0x2_e9cd_7ab1_0d90,
                0x7_c69b_cf76_1775,
            ]),
            y_minus_x: FieldElement([
                0x7_2daa_c887_ba0b,
                0x0_b7f4_ac5d_da60,
                0x3_bdda_2c04_98a4,
                0x7_4e67_aa18_0160,
                0x2_c3bc_c714_6ea7,
            ]),
            xy2d: FieldElement([
                0x0_d7eb_04e8_295f,
                0x4_a5ea_1e6f_a0fe,
                0x4_5e63_5c43_6c60,
                0x2_8ef4_a8d4_d18b,
                0x6_f5a9_a732_2aca,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_d4eb_a3d9_44be,
                0x0_100f_15f3_dce5,
                0x6_1a70_0e36_7825,
                0x5_9222_92ab_3d23,
                0x0_2ab9_680e_e8d3,
            ]),
            y_minus_x: FieldElement([
                0x1_000c_2f41_c6c5,
                0x0_219f_df73_7174,
                0x3_1472_7f12_7de7,
                0x7_e527_7d23_b81e,
                0x4_94e2_1a2e_147a,
            ]),
            xy2d: FieldElement([
                0x4_8a85_dde5_0d9a,
                0x1_c1f7_3449_3df4,
                0x4_7bdb_6486_6889,
                0x5_9a7d_048f_8eec,
                0x6_b5d7_6cbe_a46b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_4117_1e78_2522,
                0x6_806d_26da_7c1f,
                0x3_f31d_1bc7_9ab9,
                0x0_9f20_459f_5168,
                0x1_6fb8_69c0_3dd3,
            ]),
            y_minus_x: FieldElement([
                0x7_556c_ec0c_d994,
                0x5_eb9a_03b7_510a,
                0x5_0ad1_dd91_cb71,
                0x1_aa57_80b4_8a47,
                0x0_ae33_3f68_5277,
            ]),
            xy2d: FieldElement([
                0x6_1997_33b6_0962,
                0x6_9b15_7c26_6511,
                0x6_4740_f893_f1ca,
                0x0_3aa4_08fb_f684,
                0x3_f81e_38b8_f70d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_7f35_5f17_c824,
                0x0_7ae8_5334_815b,
                0x7_e3ab_ddd2_e48f,
                0x6_1eea_be1f_45e5,
                0x0_ad3e_2d34_cded,
            ]),
            y_minus_x: FieldElement([
                0x1_0fcc_7ed9_affe,
                0x4_248c_b0e9_6ff2,
                0x4_311c_1151_72e2,
                0x4_c9d4_1cbf_6925,
                0x5_0510_fc10_4f50,
            ]),
            xy2d: FieldElement([
                0x4_0fc5_336e_249d,
                0x3_3866_39fb_2de1,
                0x7_bbf8_71d1_7b78,
                0x7_5f79_6b7e_8004,
                0x1_27c1_58bf_0fa1,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_8fc4_ae51_b974,
                0x2_6e89_bfd2_dbd4,
                0x4_e122_a076_65cf,
                0x7_cab1_2034_05c3,
                0x4_ed82_479d_167d,
            ]),
            y_minus_x: FieldElement([
                0x1_7c42_2e98_79a2,
                0x2_8a59_46c8_fec3,
                0x5_3ab3_2e91_2b77,
                0x7_b44d_a09f_e0a5,
                0x3_54ef_87d0_7ef4,
            ]),
            xy2d: FieldElement([
                0x3_b522_60c5_d975,
                0x7_9d68_3617_1fdc,
                0x7_d994_f140_d4bb,
                0x1_b6c4_0456_1854,
                0x3_02d9_2d20_5392,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_6fb6_e4e0_f177,
                0x5_3497_ad52_65b7,
                0x1_ebdb_a013_86fc,
                0x0_302f_0cb3_6a3c,
                0x0_edc5_f5eb_426d,
            ]),
            y_minus_x: FieldElement([
                0x3_c1a2_bca4_283d,
                0x2_3430_c7bb_2f02,
                0x1_a3ea_1bb5_8bc2,
                0x7_2657_63de_5c61,
                0x1_0e5d_3b76_f1ca,
            ]),
            xy2d: FieldElement([
                0x3_bfd6_53da_8e67,
                0x5_8495_3ec8_2a8a,
                0x5_5e28_8fa7_707b,
                0x5_395f_c393_1d81,
                0x4_5b46_c513_61cb,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_4ddd_8a7f_e3e4,
                0x2_cecc_41c6_19d3,
                0x4_3a65_62ac_4d91,
                0x4_efa5_aca7_bdd9,
                0x5_c1c0_aef3_2122,
            ]),
            y_minus_x: FieldElement([
                0x0_2abf_314f_7fa1,
                0x3_91d1_9e8a_1528,
                0x6_a2fa_1389_5fc7,
                0x0_9d8e_ddea_a591,
                0x2_177b_fa36_dcb7,
            ]),
            xy2d: FieldElement([
                0x0_1bbc_fa79_db8f,
                0x3_d84b_eb36_66e1,
                0x2_0c92_1d81_2204,
                0x2_dd84_3d3b_32ce,
                0x4_ae61_9387_d8ab,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_7e44_985b_fb83,
                0x5_4e32_c626_cc22,
                0x0_9641_2ff3_8118,
                0x6_b241_d61a_246a,
                0x7_5685_abe5_ba43,
            ]),
            y_minus_x: FieldElement([
                0x3_f6aa_5344_a32e,
                0x6_9683_680f_11bb,
                0x0_4c35_81f6_23aa,
                0x7_01af_5875_cba5,
                0x1_a00d_91b1_7bf3,
            ]),
            xy2d: FieldElement([
                0x6_0933_eb61_f2b2,
                0x5_193f_e92a_4dd2,
                0x3_d995_a550_f43e,
                0x3_556f_b93a_883d,
                0x1_3552_9b62_3b0e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_16bc_e22e_83fe,
                0x3_3d01_30b8_3eb8,
                0x0_952a_bad0_afac,
                0x3_09f6_4ed3_1b8a,
                0x5_972e_a051_590a,
            ]),
            y_minus_x: FieldElement([
                0x0_dbd7_add1_d518,
                0x1_19f8_23e2_231e,
                0x4_51d6_6e5e_7de2,
                0x5_00c3_9970_f838,
                0x7_9b5b_81a6_5ca3,
            ]),
            xy2d: FieldElement([
                0x4_ac20_dc8f_7811,
                0x2_9589_a9f5_01fa,
                0x4_d810_d26a_6b4a,
                0x5_ede0_0d96_b259,
                0x4_f7e9_c959_05f3,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_443d_3552_99fe,
                0x3_9b7d_7d5a_ee39,
                0x6_9251_9a2f_34ec,
                0x6_e440_4924_cf78,
                0x1_942e_ec4a_144a,
            ]),
            y_minus_x: FieldElement([
                0x7_4bbc_5781_302e,
                0x7_3135_bb81_ec4c,
                0x7_ef67_1b61_483c,
                0x7_2646_14cc_d729,
                0x3_1993_ad92_e638,
            ]),
            xy2d: FieldElement([
                0x4_5319_ae23_4992,
                0x2_219d_47d2_4fb5,
                0x4_f044_88b0_6cf6,
                0x5_3aaa_9e72_4a12,
                0x2_a0a6_5314_ef9c,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_1acd_3c1c_793a,
                0x5_8b46_b787_79e6,
                0x3_369a_acbe_7af2,
                0x5_09b0_7430_74d4,
                0x0_55dc_39b6_dea1,
            ]),
            y_minus_x: FieldElement([
                0x7_937f_f7f9_27c2,
                0x0_c2fa_14c6_a5b6,
                0x5_56bd_db6d_d07c,
                0x6_f6ac_c179_d108,
                0x4_cf6e_2186_47c2,
            ]),
            xy2d: FieldElement([
                0x1_227c_c28d_5bb6,
                0x7_8ee9_bff5_7623,
                0x2_8cb2_241f_893a,
                0x2_5b54_1e3c_6772,
                0x1_21a3_0771_0aa2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_713e_c774_83c9,
                0x6_f705_72d5_facb,
                0x2_5ef3_4e22_ff81,
                0x5_4d94_4f14_1188,
                0x5_27bb_94a6_ced3,
            ]),
            y_minus_x: FieldElement([
                0x3_5d5e_9f03_4a97,
                0x1_2606_9785_bc9b,
                0x5_474e_c785_4ff0,
                0x2_96a3_02a3_48ca,
                0x3_33fc_76c7_a40e,
            ]),
            xy2d: FieldElement([
                0x5_992a_995b_482e,
                0x7_8dc7_0700_2ac7,
                0x5_9363_94d0_1741,
                0x4_fba4_281a_ef17,
                0x6_b890_69b2_0a7a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_fa8c_b5c7_db77,
                0x7_18e6_982a_a810,
                0x3_9e95_f81a_1a1b,
                0x5_e794_f364_6cfb,
                0x0_473d_308a_7639,
            ]),
            y_minus_x: FieldElement([
                0x2_a041_6270_220d,
                0x7_5f24_8b69_d025,
                0x1_cbbc_1665_6a27,
                0x5_b9ff_d6e2_6728,
                0x2_3bc2_103a_a73e,
            ]),
            xy2d: FieldElement([
                0x6_7926_0358_9e05,
                0x2_48db_9892_595d,
                0x0_06a5_3cad_2d08,
                0x2_0d01_50f7_ba73,
                0x1_02f7_3bfd_e043,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_dae0_b551_1c9a,
                0x5_257f_ffe0_d456,
                0x5_4108_d1eb_2180,
                0x0_96cc_0f9b_aefa,
                0x3_f6bd_725d_a4ea,
            ]),
            y_minus_x: FieldElement([
                0x0_b9ab_7f57_45c6,
                0x5_caf0_f8d2_1d63,
                0x7_debe_a408_ea2b,
                0x0_9edb_9389_6d16,
                0x3_6597_d25e_a5c0,
            ]),
            xy2d: FieldElement([
                0x5_8d7b_1060_58ac,
                0x3_cdf8_d20b_ee69,
                0x0_0a4c_b765_015e,
                0x3_6832_337c_7cc9,
                0x7_b7ec_c19d_a60d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_4a51_a77c_fa9b,
                0x2_9cf4_70ca_0db5,
                0x4_b60b_6e08_98d9,
                0x5_5d04_ddff_e6c7,
                0x0_3bed_c661_bf5c,
            ]),
            y_minus_x: FieldElement([
                0x2_373c_695c_690d,
                0x4_c0c8_520d_cf18,
                0x3_84af_4b74_94b9,
                0x4_ab4a_8ea2_2225,
                0x4_235a_d760_1743,
            ]),
            xy2d: FieldElement([
                0x0_cb0d_0789_75f5,
                0x2_9231_3e53_0c4b,
                0x3_8dbb_9124_a509,
                0x3_50d0_655a_11f1,
                0x0_e7ce_2b0c_df06,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_fedf_d94b_70f9,
                0x2_383f_9745_bfd4,
                0x4_beae_27c4_c301,
                0x7_5aa4_416a_3f3f,
                0x6_1525_6138_aece,
            ]),
            y_minus_x: FieldElement([
                0x4_643a_c48c_85a3,
                0x6_878c_2735_b892,
                0x3_a535_23f4_d877,
                0x3_a504_ed8b_ee9d,
                0x6_66e0_a5d8_fb46,
            ]),
            xy2d: FieldElement([
                0x3_f64e_4870_cb0d,
                0x6_1548_b16d_6557,
                0x7_a261_7735_96f3,
                0x7_724d_5f27_5d3a,
                0x7_f0bc_810d_514d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_9dad_7372_13a0,
                0x7_45de_e5d3_1075,
                0x7_b1a5_5e7f_dbe2,
                0x5_ba98_8f17_6ea1,
                0x1_d3a9_07dd_ec5a,
            ]),
            y_minus_x: FieldElement([
                0x0_6ba4_26f4_136f,
                0x3_cafc_0606_b720,
                0x5_18f0_a235_9cda,
                0x5_fae5_e46f_eca7,
                0x0_d1f8_dbcf_8eed,
            ]),
            xy2d: FieldElement([
                0x6_9331_3ed0_81dc,
                0x5_b0a3_6690_1742,
                0x4_0c87_2ca4_ca7e,
                0x6_f180_9400_9e01,
                0x0_0011_b44a_31bf,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_1f69_6a0a_a75c,
                0x3_8b0a_57ad_42ca,
                0x1_e59a_b706_fdc9,
                0x0_1308_d46e_bfcd,
                0x6_3d98_8a2d_2851,
            ]),
            y_minus_x: FieldElement([
                0x7_a06c_3fc6_6c0c,
                0x1_c9ba_c1ba_47fb,
                0x2_3935_c575_038e,
                0x3_f0bd_71c5_9c13,
                0x3_ac48_d916_e835,
            ]),
            xy2d: FieldElement([
                0x2_0753_afbd_232e,
                0x7_1fbb_1ed0_6002,
                0x3_9cae_47a4_af3a,
                0x0_337c_0b34_d9c2,
                0x3_3fad_52b2_368a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_c8d0_c422_cfe8,
                0x7_60b4_2759_71a5,
                0x3_da95_bc1c_ad3d,
                0x0_f151_ff5b_7376,
                0x3_cc35_5ccb_90a7,
            ]),
            y_minus_x: FieldElement([
                0x6_49c6_c5e4_1e16,
                0x6_0667_eee6_aa80,
                0x4_179d_182b_e190,
                0x6_53d9_567e_6979,
                0x1_6c0f_429a_256d,
            ]),
            xy2d: FieldElement([
                0x6_9443_903e_9131,
                0x1_6f4a_c6f9_dd36,
                0x2_ea49_12e2_9253,
                0x2_b464_3e68_d25d,
                0x6_31ea_f426_bae7,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_75b9_a370_0de8,
                0x7_7c5f_00aa_48fb,
                0x3_9177_85ca_0317,
                0x0_5aa9_b2c7_9399,
                0x4_31f2_c7f6_65f8,
            ]),
            y_minus_x: FieldElement([
                0x1_0410_da66_fe9f,
                0x2_4d82_dcb4_d67d,
                0x3_e6fe_0e17_752d,
                0x4_dade_1ecb_b08f,
                0x5_5996_48b1_ea91,
            ]),
            xy2d: FieldElement([
                0x2_6344_858f_7b19,
                0x5_f43d_4a29_5ac0,
                0x2_42a7_5c52_acd4,
                0x5_9344_8022_0d10,
                0x7_b047_15f9_1253,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_c280_c4e6_bac6,
                0x3_ada3_b361_766e,
                0x4_2fe5_125c_3b4f,
                0x1_11d8_4d4a_ac22,
                0x4_8d0a_cfa5_7cde,
            ]),
            y_minus_x: FieldElement([
                0x5_bd28_acf6_ae43,
                0x1_6fab_8f56_907d,
                0x7_acb1_1218_d5f2,
                0x4_1fe0_2023_b4db,
                0x5_9b37_bf5c_2f65,
            ]),
            xy2d: FieldElement([
                0x7_26e4_7dab_e671,
                0x2_ec45_e746_f6c1,
                0x6_580e_53c7_4686,
                0x5_eda1_0467_3f74,
                0x1_6234_1913_36d3,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_9cd6_1ff3_8640,
                0x0_60c6_c4b4_1ba9,
                0x7_5cf7_0ca7_366f,
                0x1_18a8_f16c_011e,
                0x4_a257_07a2_03b9,
            ]),
            y_minus_x: FieldElement([
                0x4_99de_f626_7ff6,
                0x7_6e85_8108_773c,
                0x6_93ca_c5dd_cb29,
                0x0_0311_d00a_9ff4,
                0x2_cdfd_fecd_5d05,
            ]),
            xy2d: FieldElement([
                0x7_668a_53f6_ed6a,
                0x3_03ba_2e14_2556,
                0x3_8805_84c1_0909,
                0x4_fe20_000a_261d,
                0x5_7218_96d2_48e4,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_5091_a1d0_da4e,
                0x4_f6bf_c7c1_050b,
                0x6_4e4e_cd2e_a9be,
                0x0_7eb1_f28b_be70,
                0x0_3c93_5afc_4b03,
            ]),
            y_minus_x: FieldElement([
                0x6_5517_fd18_1bae,
                0x3_e577_2c76_816d,
                0x0_1918_9640_898a,
                0x1_ed2a_84de_7499,
                0x5_78ed_d74f_63c1,
            ]),
            xy2d: FieldElement([
                0x2_76c6_492b_0c3d,
                0x0_9bfc_40bf_932e,
                0x5_88e8_f11f_330b,
                0x3_d16e_694d_c26e,
                0x3_ec2a_b590_288c,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_3a09_ae32_d1cb,
                0x3_e81e_b85a_b4e4,
                0x0_7aac_a43c_ae1f,
                0x6_2f05_d752_6374,
                0x0_e1bf_66c6_adba,
            ]),
            y_minus_x: FieldElement([
                0x0_d27b_e4d8_7bb9,
                0x5_6c27_235d_b434,
                0x7_2e6e_0ea6_2d37,
                0x5_674c_d06e_e839,
                0x2_dd5c_25a2_00fc,
            ]),
            xy2d: FieldElement([
                0x3_d5e9_792c_887e,
                0x3_1972_4dab_bc55,
                0x2_b97c_7868_0800,
                0x7_afdf_dd34_e6dd,
                0x7_3054_8b35_ae88,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_094b_a1d6_e334,
                0x6_e126_a7e3_300b,
                0x0_89c0_aefc_fbc5,
                0x2_eea1_1f83_6583,
                0x5_85a2_277d_8784,
            ]),
            y_minus_x: FieldElement([
                0x5_51a3_cba8_b8ee,
                0x3_b642_2be2_d886,
                0x6_30e1_4196_89bc,
                0x4_653b_07a7_a955,
                0x3_0434_43b4_11db,
            ]),
            xy2d: FieldElement([
                0x2_5f82_33d4_8962,
                0x6_bd8f_04af_f431,
                0x4_f907_fd9a_6312,
                0x4_0fd3_c737_d29b,
                0x7_6562_7895_0ef9,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_73a3_ea86_cf9d,
                0x6_e0e2_abfb_9c2e,
                0x6_0e2a_38ea_33ee,
                0x3_0b24_29f3_fe18,
                0x2_8bbf_484b_613f,
            ]),
            y_minus_x: FieldElement([
                0x3_cf59_d51f_c8c0,
                0x7_a0a0_d6de_4718,
                0x5_5c3a_3e6f_b74b,
                0x3_5313_5f88_4fd5,
                0x3_f416_0a8c_1b84,
            ]),
            xy2d: FieldElement([
                0x1_2f5c_6f13_6c7c,
                0x0_fedb_a237_de4c,
                0x7_79bc_cebf_ab44,
                0x3_aea9_3f4d_6909,
                0x1_e79c_b358_188f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_53d8_f5e0_8181,
                0x0_8533_bbdb_2efd,
                0x1_1497_9612_9431,
                0x1_7a6e_3616_8643,
                0x4_78ab_52d3_9d1f,
            ]),
            y_minus_x: FieldElement([
                0x4_36c3_eef7_e3f1,
                0x7_ffd3_c21f_0026,
                0x3_e77b_f20a_2da9,
                0x4_18bf_fc84_72de,
                0x6_5d79_51b3_a3b3,
            ]),
            xy2d: FieldElement([
                0x6_a4d3_9252_d159,
                0x7_90e3_5900_ecd4,
                0x3_0725_bf97_7786,
                0x1_0a5c_1635_a053,
                0x1_6d87_a411_a212,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_d5e2_d54e_0583,
                0x2_e5d7_b33f_5f74,
                0x3_a5de_3f88_7ebf,
                0x6_ef24_bd61_39b7,
                0x1_f990_b577_a5a6,
            ]),
            y_minus_x: FieldElement([
                0x5_7e5a_4206_6215,
                0x1_a18b_4498_3677,
                0x3_e652_de1e_6f8f,
                0x6_532b_e02e_d8eb,
                0x2_8f87_c816_5f38,
            ]),
            xy2d: FieldElement([
                0x4_4ead_1be8_f7d6,
                0x5_759d_4f31_f466,
                0x0_3781_49f4_7943,
                0x6_9f3b_e32b_4f29,
                0x4_5882_fe15_34d6,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_9929_943c_6fe4,
                0x4_3470_7254_5b15,
                0x3_226b_ced7_e7c5,
                0x0_3a13_4ced_89df,
                0x7_dcf8_43ce_405f,
            ]),
            y_minus_x: FieldElement([
                0x1_345d_7579_83d6,
                0x2_22f5_4234_cccd,
                0x1_784a_3d8a_dbb4,
                0x3_6ebe_ee8c_2bcc,
                0x6_88fe_5b8f_626f,
            ]),
            xy2d: FieldElement([
                0x0_d648_4a47_32c0,
                0x7_b94a_c653_2d92,
                0x5_771b_8754_850f,
                0x4_8dd9_df14_61c8,
                0x6_7396_87e7_3271,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_cc9d_c80c_1ac0,
                0x6_8367_1486_d4cd,
                0x7_6f5f_1a5e_8173,
                0x6_d5d3_f5f9_df4a,
                0x7_da0b_8f68_d7e7,
            ]),
            y_minus_x: FieldElement([
                0x0_2014_3856_75a6,
                0x6_155f_b53d_1def,
                0x3_7ea3_2e89_927c,
                0x0_59a6_68f5_a82e,
                0x4_6115_aba1_d4dc,
            ]),
            xy2d: FieldElement([
                0x7_1953_c3b5_da76,
                0x6_6422_33d3_7a81,
                0x2_c965_8076_b1bd,
                0x5_a581_e630_10ff,
                0x5_a5f8_87e8_3674,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_28d3_a0a6_43b9,
                0x0_1cd8_640c_93d2,
                0x0_b7b0_cad7_0f2c,
                0x3_864d_a981_44be,
                0x4_3e37_ae2d_5d1c,
            ]),
            y_minus_x: FieldElement([
                0x3_01cf_70a1_3d11,
                0x2_a6a1_ba18_91ec,
                0x2_f291_fb3f_3ae0,
                0x2_1a7b_814b_ea52,
                0x3_669b_656e_44d1,
            ]),
            xy2d: FieldElement([
                0x6_3f06_eda6_e133,
                0x2_3334_2758_070f,
                0x0_98e0_459c_c075,
                0x4_df5e_ad6c_7c1b,
                0x6_a21e_6cd4_fd5e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_2912_6699_b2e3,
                0x0_ee11_a260_3de8,
                0x6_0ac2_f5c7_4c21,
                0x5_9b19_2a19_6808,
                0x4_5371_b070_01e8,
            ]),
            y_minus_x: FieldElement([
                0x6_170a_3046_e65f,
                0x5_401a_46a4_9e38,
                0x2_0add_5561_c4a8,
                0x7_abb4_edde_9e46,
                0x5_86bf_9f1a_195f,
            ]),
            xy2d: FieldElement([
                0x3_088d_5ef8_790b,
                0x3_8c21_26fc_b4db,
                0x6_85ba_e149_e3c3,
                0x0_bcd6_01a4_e930,
                0x0_eafb_0379_0e52,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_805e_0f75_ae1d,
                0x4_64cc_5986_0a28,
                0x2_48e5_b7b0_0bef,
                0x5_d996_75ef_8f75,
                0x4_4ae3_344c_5435,
            ]),
            y_minus_x: FieldElement([
                0x5_55c1_3748_042f,
                0x4_d041_7542_32c0,
                0x5_21b4_3086_6907,
                0x3_308e_40fb_9c39,
                0x3_09ac_c675_a02c,
            ]),
            xy2d: FieldElement([
                0x2_89b9_bba5_43ee,
                0x3_ab59_2e28_539e,
                0x6_4d82_abcd_d83a,
                0x3_c78e_c172_e327,
                0x6_2d52_21b7_f946,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_d426_3af7_7a3c,
                0x2_3fdd_2289_aeb0,
                0x7_dc64_f77e_b9ec,
                0x0_1bd2_8338_402c,
                0x1_4f29_a538_3922,
            ]),
            y_minus_x: FieldElement([
                0x4_299c_18d0_936d,
                0x5_9141_8341_8a49,
                0x5_2a18_c721_aed5,
                0x2_b151_ba82_976d,
                0x5_c0ef_de4b_c754,
            ]),
            xy2d: FieldElement([
                0x1_7edc_25b2_d7f5,
                0x3_7336_a608_1bee,
                0x7_b531_8887_e5c3,
                0x4_9f6d_491a_5be1,
                0x5_e723_65c7_bee0,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_3906_2f08_b33e,
                0x4_bbf3_e657_cfb2,
                0x6_7af7_f56e_5967,
                0x4_dbd6_7f9e_d68f,
                0x7_0b20_555c_b734,
            ]),
            y_minus_x: FieldElement([
                0x3_fc07_4571_217f,
                0x3_a0d2_9b2b_6aeb,
                0x0_6478_ccdd_e59d,
                0x5_5e4d_051b_ddfa,
                0x7_7f11_04c4_7b4e,
            ]),
            xy2d: FieldElement([
                0x1_13c5_5511_2c4c,
                0x7_5351_03f9_b7ca,
                0x1_40ed_1d9a_2108,
                0x0_2522_333b_c2af,
                0x0_e343_98f4_a064,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_0b09_3e4b_1928,
                0x1_ce7e_7ec8_0312,
                0x4_e575_bdf7_8f84,
                0x6_1f7a_190b_ed39,
                0x6_f8ad_ed6c_a379,
            ]),
            y_minus_x: FieldElement([
                0x5_22d9_3ece_bde8,
                0x0_24f0_45e0_f6cf,
                0x1_6db6_3426_cfa1,
                0x1_b93a_1fd3_0fd8,
                0x5_e540_5368_a362,
            ]),
            xy2d: FieldElement([
                0x0_123d_fdb7_b29a,
                0x4_3443_5652_3c68,
                0x7_9a52_7921_ee5f,
                0x7_4bfc_cb3e_817e,
                0x7_80de_72ec_8d3d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_eaf3_00f4_2772,
                0x5_4551_8835_4ce3,
                0x4_dcca_4a3d_cbac,
                0x3_d314_d0bf_ebcb,
                0x1_defc_6ad3_2b58,
            ]),
            y_minus_x: FieldElement([
                0x2_8545_089a_e7bc,
                0x1_e38f_e9a0_c15c,
                0x1_2046_e0e2_377b,
                0x6_721c_560a_a885,
                0x0_eb28_bf67_1928,
            ]),
            xy2d: FieldElement([
                0x3_be1a_ef51_95a7,
                0x6_f22f_62bd_b5eb,
                0x3_9768_b852_3049,
                0x4_3394_c8fb_fdbd,
                0x4_67d2_01bf_8dd2,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_f4bd_567a_e7a9,
                0x6_5ac8_9317_b783,
                0x0_7d3b_20fd_8932,
                0x0_00f2_0832_6916,
                0x2_ef9c_5a5b_a384,
            ]),
            y_minus_x: FieldElement([
                0x6_919a_74ef_4fad,
                0x5_9ed4_6114_52bf,
                0x6_91ec_04ea_09ef,
                0x3_cbcb_2700_e984,
                0x7_1c43_c4f5_ba3c,
            ]),
            xy2d: FieldElement([
                0x5_6df6_fa9e_74cd,
                0x7_9c95_e4cf_56df,
                0x7_be64_3bc6_09e2,
                0x1_49c1_2ad9_e878,
                0x5_a758_ca39_0c5f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_918b_1d61_dc94,
                0x0_d350_260c_d19c,
                0x7_a2ab_4e37_b4d9,
                0x2_1fea_7354_14d7,
                0x0_a738_027f_639d,
            ]),
            y_minus_x: FieldElement([
                0x7_2710_d946_2495,
                0x2_5aaf_aa00_7456,
                0x2_d21f_28ea_a31b,
                0x1_7671_ea00_5fd0,
                0x2_dbae_244b_3eb7,
            ]),
            xy2d: FieldElement([
                0x7_4a2f_57ff_e1cc,
                0x1_bc30_7308_7301,
                0x7_ec57_f401_9c34,
                0x3_4e08_2e1f_a524,
                0x2_698c_a635_126a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_702f_5e3d_d90e,
                0x3_1c9a_4a70_c5c7,
                0x1_36a5_aa78_fc24,
                0x1_992f_3b9f_7b01,
                0x3_c004_b0c4_afa3,
            ]),
            y_minus_x: FieldElement([
                0x5_3188_32b0_ba78,
                0x6_f24b_9ff1_7cec,
                0x0_a47f_30e0_60c7,
                0x5_8384_540d_c8d0,
                0x1_fb43_dcc4_9cae,
            ]),
            xy2d: FieldElement([
                0x1_46ac_06f4_b82b,
                0x4_b500_d89e_7355,
                0x3_351e_1c72_8a12,
                0x1_0b9f_6993_2fe3,
                0x6_b43f_d01c_d1fd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_4258_3e76_0ef3,
                0x7_3dc1_5732_16b8,
                0x4_ae48_fdd7_714a,
                0x4_f85f_8a13_e103,
                0x7_3420_b2d6_ff0d,
            ]),
            y_minus_x: FieldElement([
                0x7_5d4b_4697_c544,
                0x1_1be1_fff7_f8f4,
                0x1_19e1_6857_f7e1,
                0x3_8a14_345c_f5d5,
                0x5_a68d_7105_b52f,
            ]),
            xy2d: FieldElement([
                0x4_f6cb_9e85_1e06,
                0x2_78c4_4718_95e5,
                0x7_efcd_ce3d_64e4,
                0x6_4f6d_455c_4b4c,
                0x3_db56_32fe_a34b,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_90b1_8298_25d5,
                0x0_e7d3_5132_25c9,
                0x1_c12b_e3b7_abae,
                0x5_8777_781e_9ca6,
                0x5_9197_ea49_5df2,
            ]),
            y_minus_x: FieldElement([
                0x6_ee2b_f75d_d9d8,
                0x6_c72c_eb34_be8d,
                0x6_79c9_cc34_5ec7,
                0x7_898d_f968_98a4,
                0x0_4321_adf4_9d75,
            ]),
            xy2d: FieldElement([
                0x1_6019_e4e5_5aae,
                0x7_4fc5_f25d_209c,
                0x4_566a_939d_ed0d,
                0x6_6063_e716_e0b7,
                0x4_5eaf_dc1f_4d70,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_4624_cfcc_b1ed,
                0x2_57ab_8072_b6c1,
                0x0_1207_2567_6f0a,
                0x4_a018_d04e_8eee,
                0x3_f73c_eea5_d56d,
            ]),
            y_minus_x: FieldElement([
                0x4_0185_8045_d72b,
                0x4_59e5_e0ca_2d30,
                0x4_88b7_1930_8bea,
                0x5_6f4a_0d1b_32b5,
                0x5_a5ee_bc80_362d,
            ]),
            xy2d: FieldElement([
                0x7_bfd1_0a4e_8dc6,
                0x7_c899_3667_36f4,
                0x5_5ebb_eaf9_5c01,
                0x4_6db0_6090_3f8a,
                0x2_6058_8912_6621,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_8e3c_c676_e542,
                0x2_6079_d995_a990,
                0x0_4a7c_2179_08b2,
                0x1_dc76_03e6_655a,
                0x0_dedf_a10b_2444,
            ]),
            y_minus_x: FieldElement([
                0x7_04a6_8360_ff04,
                0x3_cecc_3cde_8b3e,
                0x2_1cd5_470f_64ff,
                0x6_abc1_8d95_3989,
                0x5_4ad0_c2e4_e615,
            ]),
            xy2d: FieldElement([
                0x3_67d5_b82b_522a,
                0x0_d3f4_b83d_7dc7,
                0x3_067f_4cdb_c58d,
                0x2_0452_da69_7937,
                0x6_2ecb_2baa_77a9,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_2836_afb6_2874,
                0x0_af3c_2094_b240,
                0x0_c285_297f_357a,
                0x7_cc2d_5680_d6e3,
                0x6_1913_d507_5663,
            ]),
            y_minus_x: FieldElement([
                0x5_7952_6115_2b3d,
                0x7_a1db_bafa_3cbd,
                0x5_ad31_c525_88d5,
                0x4_5f3a_4164_685c,
                0x2_e59f_919a_966d,
            ]),
            xy2d: FieldElement([
                0x6_2d36_1a32_31da,
                0x6_5284_004e_01b8,
                0x6_5653_3be9_1d60,
                0x6_ae01_6c00_a89f,
                0x3_ddbc_2a13_1c05,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_57a2_2796_bb14,
                0x6_f360_fb44_3e75,
                0x6_80e4_7220_eaea,
                0x2_fcf2_a5f1_0c18,
                0x5_ee7f_b38d_8320,
            ]),
            y_minus_x: FieldElement([
                0x4_0ff9_ce5e_c54b,
                0x5_7185_e261_b35b,
                0x3_e254_540e_70a9,
                0x1_b581_4003_e3f8,
                0x7_8968_314a_c04b,
            ]),
            xy2d: FieldElement([
                0x5_fdcb_4144_6a8e,
                0x5_2869_26ff_2a71,
                0x0_f231_e296_b3f6,
                0x6_84a3_57c8_4693,
                0x6_1d06_33c9_bca0,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_28bc_f8fc_73df,
                0x3_b4de_06ff_95b4,
                0x3_0aa4_27ba_11a5,
                0x5_ee31_bfda_6d9c,
                0x5_b23a_c2df_8067,
            ]),
            y_minus_x: FieldElement([
                0x4_4935_ffdb_2566,
                0x1_2f01_6d17_6c6e,
                0x4_fbb0_0f16_f5ae,
                0x3_fab7_8d99_402a,
                0x6_e965_fd84_7aed,
            ]),
            xy2d: FieldElement([
                0x2_b953_ee80_527b,
                0x5_5f5b_cdb1_b35a,
                0x4_3a0b_3fa2_3c66,
                0x7_6e07_388b_820a,
                0x7_9b9b_bb9d_d95d,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_7dae_8e9f_7374,
                0x7_19f7_6102_da33,
                0x5_117c_2a80_ca8b,
                0x4_1a66_b65d_0936,
                0x1_ba81_1460_accb,
            ]),
            y_minus_x: FieldElement([
                0x3_5540_6a31_26c2,
                0x5_0d19_1872_7d76,
                0x6_e5ea_0b49_8e0e,
                0x0_a3b6_0632_14f2,
                0x5_065f_158c_9fd2,
            ]),
            xy2d: FieldElement([
                0x1_69fb_0c42_9954,
                0x5_9aed_d9ec_ee10,
                0x3_9916_eb85_1802,
                0x5_7917_555c_c538,
                0x3_981f_39e5_8a4f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_dfa5_6de6_6fde,
                0x0_0588_0907_5908,
                0x6_d3d8_cb85_4a94,
                0x5_b2f4_e970_b1e3,
                0x3_0f44_52ed_cbc1,
            ]),
            y_minus_x: FieldElement([
                0x3_8a75_5923_0a93,
                0x5_2c1c_de8b_a31f,
                0x2_a4f2_d474_5a3d,
                0x0_7e9d_42d4_a28a,
                0x3_8dc0_8370_5acd,
            ]),
            xy2d: FieldElement([
                0x5_2782_c575_9740,
                0x5_3f33_97d9_90ad,
                0x3_a939_c7e8_4d15,
                0x2_34c4_227e_39e0,
                0x6_32d9_a1a5_93f2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_fd11_ed0c_84a7,
                0x0_21b3_ed27_57e1,
                0x7_3e1d_e58f_c1c6,
                0x5_d110_c846_16ab,
                0x3_a5a7_df28_af64,
            ]),
            y_minus_x: FieldElement([
                0x3_6b15_b807_cba6,
                0x3_f78a_9e1a_fed7,
                0x0_a59c_2c60_8f1f,
                0x5_2bdd_8ecb_81b7,
                0x0_b24f_4884_7ed4,
            ]),
            xy2d: FieldElement([
                0x2_d4be_511b_eac7,
                0x6_bda4_d99e_5b9b,
                0x1_7e69_9691_4e01,
                0x7_b1f0_ce7f_cf80,
                0x3_4fcf_7447_5481,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_1dab_78cf_aa98,
                0x4_e321_6e5e_54b7,
                0x2_4982_3973_b689,
                0x2_5849_84e4_8885,
                0x0_119a_3042_fb37,
            ]),
            y_minus_x: FieldElement([
                0x7_e04c_7897_67ca,
                0x1_671b_28cf_b832,
                0x7_e57e_a2e1_c537,
                0x1_fbaa_ef44_4141,
                0x3_d3bd_c164_dfa6,
            ]),
            xy2d: FieldElement([
                0x2_d89c_e8c2_177d,
                0x6_cd12_ba18_2cf4,
                0x2_0a8a_c19a_7697,
                0x5_39fa_b2cc_72d9,
                0x5_6c08_8f1e_de20,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_5fac_24f3_8f02,
                0x7_d75c_6197_ab03,
                0x3_3e4b_c2a4_2fa7,
                0x1_c7cd_10b4_8145,
                0x0_38b7_ea48_3590,
            ]),
            y_minus_x: FieldElement([
                0x5_3d11_10a8_6e17,
                0x6_416e_b65f_466d,
                0x4_1ca6_235f_ce20,
                0x5_c3fc_8a99_bb12,
                0x0_9674_c6b9_9108,
            ]),
            xy2d: FieldElement([
                0x6_f821_9931_6ff8,
                0x0_5d54_f1a9_f3e9,
                0x3_bcc5_d0bd_274a,
                0x5_b284_b8d2_d5ad,
                0x6_e5e3_1025_969e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_fb0e_6306_6222,
                0x1_30f5_9747_e660,
                0x0_4186_8fec_d41a,
                0x3_105e_8c92_3bc6,
                0x3_058a_d43d_1838,
            ]),
            y_minus_x: FieldElement([
                0x4_62f5_87e5_93fb,
                0x3_d94b_a7ce_362d,
                0x3_30f9_b526_67b7,
                0x5_d45a_48e0_f00a,
                0x0_8f51_1478_9a8d,
            ]),
            xy2d: FieldElement([
                0x4_0ffd_e576_63d0,
                0x7_1445_d4c2_0647,
                0x2_653e_6817_0f7c,
                0x6_4cde_e3c5_5ed6,
                0x2_6549_fa4e_fe3d,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_8549_af3f_666e,
                0x0_9e29_41d4_bb68,
                0x2_e831_1f5d_ff3c,
                0x6_429e_f91f_fbd2,
                0x3_a10d_fe13_2ce3,
            ]),
            y_minus_x: FieldElement([
                0x5_5a46_1e6b_f9d6,
                0x7_8eee_f4b0_2e83,
                0x1_d34f_648c_16cf,
                0x0_7fea_2aba_5132,
                0x1_926e_1dc6_401e,
            ]),
            xy2d: FieldElement([
                0x7_4e8a_ea17_cea0,
                0x0_c743_f83f_bc0f,
                0x7_cb03_c4bf_5455,
                0x6_8a8b_a991_7e98,
                0x1_fa1d_01d8_61e5,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_ac00_d1df_94ab,
                0x3_ba21_01bd_271b,
                0x7_5789_88b9_c4af,
                0x0_f2bf_89f4_9f7e,
                0x7_3fce_d18e_e9a0,
            ]),
            y_minus_x: FieldElement([
                0x0_5594_7d59_9832,
                0x3_46fe_2aa4_1990,
                0x0_164c_8079_195b,
                0x7_99cc_fb7b_ba27,
                0x7_7356_3bc6_a75c,
            ]),
            xy2d: FieldElement([
                0x1_e908_6313_9cb3,
                0x4_f8b4_07d9_a0d6,
                0x5_8e24_ca92_4f69,
                0x7_a246_bbe7_6456,
                0x1_f426_b701_b864,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_35c8_91a1_2552,
                0x2_6aeb_d38e_de2f,
                0x6_6dc8_fadd_ae05,
                0x2_1c7d_41a0_3786,
                0x0_b76b_b1b3_fa7e,
            ]),
            y_minus_x: FieldElement([
                0x1_264c_4191_1c01,
                0x7_02f4_4584_bdf9,
                0x4_3c51_1fc6_8ede,
                0x0_482c_3aed_35f9,
                0x4_e1af_5271_d31b,
            ]),
            xy2d: FieldElement([
                0x0_c1f9_7f92_939b,
                0x1_7a88_956d_c117,
                0x6_ee00_5ef9_9dc7,
                0x4_aa91_72b2_31cc,
                0x7_b6dd_61eb_772a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_abf9_ab01_d2c7,
                0x3_8802_8763_0ae6,
                0x3_2eca_045b_eddb,
                0x5_7f43_365f_32d0,
                0x5_3fa9_b659_bff6,
            ]),
            y_minus_x: FieldElement([
                0x5_c1e8_50f3_3d92,
                0x1_ec11_9ab9_f6f5,
                0x7_f16f_6de6_63e9,
                0x7_a7d6_cb16_dec6,
                0x7_03e9_bcea_f1d2,
            ]),
            xy2d: FieldElement([
                0x4_c8e9_9488_5455,
                0x4_ccb5_da9c_ad82,
                0x3_596b_c610_e975,
                0x7_a80c_0ddb_9f5e,
                0x3_98d9_3e5c_4c61,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_7c60_d2e7_e3f2,
                0x4_0610_5176_3870,
                0x6_7bc4_e0ec_d2aa,
                0x2_bb94_1f13_73b9,
                0x6_99c9_c900_2c30,
            ]),
            y_minus_x: FieldElement([
                0x3_d167_33e2_48f3,
                0x0_e2b7_e14b_e389,
                0x4_2c0d_daf6_784a,
                0x5_89ea_1fc6_7850,
                0x5_3b09_b5dd_f191,
            ]),
            xy2d: FieldElement([
                0x6_a723_5946_f1cc,
                0x6_b99c_bb2f_be60,
                0x6_d3a5_d648_5c62,
                0x4_8394_66e9_23c0,
                0x5_1caf_30c6_fcdd,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_f99a_18ac_54c7,
                0x3_98a3_9661_ee6f,
                0x3_8433_1e40_cde3,
                0x4_cd15_c4de_19a6,
                0x1_2ae2_9c18_9f8e,
            ]),
            y_minus_x: FieldElement([
                0x3_a742_7674_e00a,
                0x6_142f_4f7e_74c1,
                0x4_cc93_318c_3a15,
                0x6_d51b_ac2b_1ee7,
                0x5_504a_a292_383f,
            ]),
            xy2d: FieldElement([
                0x6_c0cb_1f0d_01cf,
                0x1_8746_9ef5_d533,
                0x2_7138_8837_47bf,
                0x2_f52a_e53a_90e8,
                0x5_fd14_fe95_8eba,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_fe5e_bf93_cb8e,
                0x2_26da_8acb_e788,
                0x1_0883_a2fb_7ea1,
                0x0_9470_7842_cf44,
                0x7_dd73_f960_725d,
            ]),
            y_minus_x: FieldElement([
                0x4_2ddf_2845_ab2c,
                0x6_214f_fd32_76bb,
                0x0_0b8d_181a_5246,
                0x2_68a6_d579_eb20,
                0x0_93ff_26e5_8647,
            ]),
            xy2d: FieldElement([
                0x5_24fe_6805_9829,
                0x6_5b75_e47c_b621,
                0x1_5eb0_a5d5_cc19,
                0x0_5209_b392_9d5a,
                0x2_f59b_cbc8_6b47,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_d560_b691_c301,
                0x7_f5ba_fce3_ce08,
                0x4_cd56_1614_806c,
                0x4_588b_6170_b188,
                0x2_aa55_e3d0_1082,
            ]),
            y_minus_x: FieldElement([
                0x4_7d42_9917_135f,
                0x3_eacf_a07a_f070,
                0x1_deab_46b4_6e44,
                0x7_a53f_3ba4_6cdf,
                0x5_458b_42e2_e51a,
            ]),
            xy2d: FieldElement([
                0x1_92e6_0c07_444f,
                0x5_ae88_43a2_1daa,
                0x6_d721_910b_1538,
                0x3_321a_95a6_417e,
                0x1_3e90_04a8_a768,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_00c9_193b_877f,
                0x2_1c1b_8a0d_7765,
                0x3_7992_7fb3_8ea2,
                0x7_0d76_79db_e01b,
                0x5_f460_4089_8de9,
            ]),
            y_minus_x: FieldElement([
                0x5_8845_832f_cedb,
                0x1_35cd_7f0c_6e73,
                0x5_3ffb_dfe8_e35b,
                0x2_2f19_5e06_e55b,
                0x7_3937_e881_4bce,
            ]),
            xy2d: FieldElement([
                0x3_7116_297b_f48d,
                0x4_5a9e_0d06_9720,
                0x2_5af7_1aa7_44ec,
                0x4_1af0_cb8a_aba3,
                0x2_cf8a_4e89_1d5e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_487e_17d0_6ba2,
                0x3_872a_032d_6596,
                0x6_5e28_c093_48e0,
                0x2_7b6b_b2ce_40c2,
                0x7_a6f7_f289_1d6a,
            ]),
            y_minus_x: FieldElement([
                0x3_fd87_0711_0f67,
                0x2_6f87_16a9_2db2,
                0x1_cdaa_1b75_3027,
                0x5_04be_58b5_2661,
                0x2_049b_d6e5_8252,
            ]),
            xy2d: FieldElement([
                0x1_fd8d_6a9a_ef49,
                0x7_cb67_b721_6fa1,
                0x6_7aff_53c3_b982,
                0x2_0ea6_10da_9628,
                0x6_011a_adfc_5459,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_d0c8_02cb_f890,
                0x1_41bf_ed55_4c7b,
                0x6_dbb6_67ef_4263,
                0x5_8f31_2685_7edc,
                0x6_9ce1_8b77_9340,
            ]),
            y_minus_x: FieldElement([
                0x7_926d_cf95_f83c,
                0x4_2e25_120e_2bec,
                0x6_3de9_6df1_fa15,
                0x4_f06b_50f3_f9cc,
                0x6_fc5c_c1b0_b62f,
            ]),
            xy2d: FieldElement([
                0x7_5528_b298_79cb,
                0x7_9a8f_d212_5a3d,
                0x2_7c8d_4b74_6ab8,
                0x0_f889_3f02_210c,
                0x1_5596_b3ae_5710,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_3116_7e51_24ca,
                0x1_7b38_e8bb_e13f,
                0x3_d55b_942f_9056,
                0x0_9c14_95be_913f,
                0x3_aa4e_241a_fb6d,
            ]),
            y_minus_x: FieldElement([
                0x7_39d2_3f91_79a2,
                0x6_32fa_dbb9_e8c4,
                0x7_c852_2bfe_0c48,
                0x6_ed09_83ef_5aa9,
                0x0_d223_7687_b5f4,
            ]),
            xy2d: FieldElement([
                0x1_38bf_2a33_05f5,
                0x1_f45d_24d8_6598,
                0x5_274b_ad21_60fe,
                0x1_b604_1d58_d12a,
                0x3_2fca_a6e4_687a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_a473_2787_ccdf,
                0x1_1e42_7c7f_0640,
                0x0_3659_385f_8c64,
                0x5_f4ea_d976_6bfb,
                0x7_46f6_336c_2600,
            ]),
            y_minus_x: FieldElement([
                0x5_6e8d_c57d_9af5,
                0x5_b3be_17be_4f78,
                0x3_bf92_8cf8_2f4b,
                0x5_2e55_600a_6f11,
                0x4_627e_9cef_ebd6,
            ]),
            xy2d: FieldElement([
                0x2_f345_ab6c_971c,
                0x6_5328_6e63_e7e9,
                0x5_1061_b78a_23ad,
                0x1_4999_acb5_4501,
                0x7_b491_7007_ed66,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_1b28_dd53_a2dd,
                0x3_7be8_5f87_ea86,
                0x7_4be3_d2a8_5e41,
                0x1_be87_fac9_6ca6,
                0x1_d036_20fe_08cd,
            ]),
            y_minus_x: FieldElement([
                0x5_fb5c_ab84_b064,
                0x2_513e_7782_85b0,
                0x4_5738_3125_e043,
                0x6_bda3_b56e_223d,
                0x1_22ba_376f_844f,
            ]),
            xy2d: FieldElement([
                0x2_32cd_a2b4_e554,
                0x0_422b_a30f_f840,
                0x7_51e7_667b_43f5,
                0x6_2617_55da_5f3e,
                0x0_2c70_bf52_b68e,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_32bf_458d_72e1,
                0x4_0f96_e796_b59c,
                0x2_2ef7_9d6f_9da3,
                0x5_01ab_67be_ca77,
                0x6_b069_7e3f_eb43,
            ]),
            y_minus_x: FieldElement([
                0x7_ec4b_5d0b_2fbb,
                0x2_00e9_1059_5450,
                0x7_4205_7105_715e,
                0x2_f070_2253_0f60,
                0x2_6334_f0a4_09ef,
            ]),
            xy2d: FieldElement([
                0x0_f04a_df62_a3c0,
                0x5_e0ed_b48b_b6d9,
                0x7_c34a_a4fb_c003,
                0x7_d74e_4e5c_ac24,
                0x1_cc37_f434_41b2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_56f1_c9ce_aeb9,
                0x7_031c_acad_5aec,
                0x1_308c_d071_6c57,
                0x4_1c13_7394_1942,
                0x3_a346_f772_f196,
            ]),
            y_minus_x: FieldElement([
                0x7_565a_5cc7_324f,
                0x0_1ca0_d524_4a11,
                0x1_16b0_6741_8713,
                0x0_a57d_8c55_edae,
                0x6_c680_9c10_3803,
            ]),
            xy2d: FieldElement([
                0x5_5112_e2da_6ac8,
                0x6_363d_0a3d_ba5a,
                0x3_19c9_8ba6_f40c,
                0x2_e84b_03a3_6ec7,
                0x0_5911_b9f6_ef7c,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_acf3_512e_eaef,
                0x2_6398_3969_2a69,
                0x6_69a2_3483_0507,
                0x6_8b92_0c06_03d4,
                0x5_55ef_9d1c_64b2,
            ]),
            y_minus_x: FieldElement([
                0x3_9983_f5df_0ebb,
                0x1_ea25_8995_9826,
                0x6_ce63_8703_cdd6,
                0x6_3116_7889_8505,
                0x6_b3ce_cf9a_a270,
            ]),
            xy2d: FieldElement([
                0x7_70ba_3b73_bd08,
                0x1_1475_f7e1_86d4,
                0x0_251b_c989_2bbc,
                0x2_4eab_9bff_cc5a,
                0x6_75f4_de13_3817,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_f6d9_3bda_b31d,
                0x1_f3ac_a5bf_d425,
                0x2_fa52_1c1c_9760,
                0x6_2180_ce27_f9cd,
                0x6_0f45_0b88_2cd3,
            ]),
            y_minus_x: FieldElement([
                0x4_5203_6b17_82fc,
                0x0_2d95_b076_81c5,
                0x5_901c_f992_05b2,
                0x2_9068_6e5e_ecb4,
                0x1_3d99_df70_164c,
            ]),
            xy2d: FieldElement([
                0x3_5ec3_21e5_c0ca,
                0x1_3ae3_37f4_4029,
                0x4_008e_813f_2da7,
                0x6_4027_2f8e_0c3a,
                0x1_c06d_e9e5_5eda,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_2b40_ff6d_69aa,
                0x3_1b88_0937_7ffa,
                0x5_3662_5cd1_4c2c,
                0x5_16af_252e_17d1,
                0x7_8096_f8e7_d32b,
            ]),
            y_minus_x: FieldElement([
                0x7_7ad6_a33e_c4e2,
                0x7_17c5_dc11_d321,
                0x4_a114_5598_23e4,
                0x3_06ce_50a1_e2b1,
                0x4_cf38_a1fe_c2db,
            ]),
            xy2d: FieldElement([
                0x2_aa65_0dfa_5ce7,
                0x5_4916_a8f1_9415,
                0x0_0dc9_6fe7_1278,
                0x5_5f27_84e6_3eb8,
                0x3_73ca_d3a2_6091,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_a8fb_89dd_bbad,
                0x7_8c35_d5d9_7e37,
                0x6_6e36_74ef_2cb2,
                0x3_4347_ac53_dd8f,
                0x2_1547_eda5_112a,
            ]),
            y_minus_x: FieldElement([
                0x4_634d_82c9_f57c,
                0x4_2492_68a6_d652,
                0x6_336d_687f_2ff7,
                0x4_fe4f_4e26_d9a0,
                0x0_040f_3d94_5441,
            ]),
            xy2d: FieldElement([
                0x5_e939_fd59_86d3,
                0x1_2a21_4701_9bdf,
                0x4_c466_e7d0_9cb2,
                0x6_fa5b_95d2_03dd,
                0x6_3550_a334_a254,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_5845_7254_7b49,
                0x7_5c58_811c_1377,
                0x4_d3c6_37cc_171b,
                0x3_3d30_747d_34e3,
                0x3_9a92_bafa_a7d7,
            ]),
            y_minus_x: FieldElement([
                0x7_d6ed_b569_cf37,
                0x6_0194_a5dc_2ca0,
                0x5_af59_745e_10a6,
                0x7_a8f5_3e00_4875,
                0x3_eea6_2c7d_af78,
            ]),
            xy2d: FieldElement([
                0x4_c713_e693_274e,
                0x6_ed1b_7a6e_b3a4,
                0x6_2ace_697d_8e15,
                0x2_66b8_292a_b075,
                0x6_8436_a066_5c9c,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_d317_e820_107c,
                0x0_9081_5d2c_a3ca,
                0x0_3ff1_eb14_99a1,
                0x2_3960_f050_e319,
                0x5_3736_69c9_1611,
            ]),
            y_minus_x: FieldElement([
                0x2_35e8_202f_3f27,
                0x4_4c9f_2eb6_1780,
                0x6_3090_5b1d_7003,
                0x4_fcc8_d274_ead1,
                0x1_7b6e_7f68_ab78,
            ]),
            xy2d: FieldElement([
                0x0_14ab_9a0e_5257,
                0x0_9939_567f_8ba5,
                0x4_b47b_2a42_3c82,
                0x6_88d7_e57a_c42d,
                0x1_cb4b_5a67_8f87,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_aa62_a2a0_07e7,
                0x6_1e0e_38f6_2d6e,
                0x0_2f88_8fcc_4782,
                0x7_562b_83f2_1c00,
                0x2_dc0f_d2d8_2ef6,
            ]),
            y_minus_x: FieldElement([
                0x4_c06b_394a_fc6c,
                0x4_931b_4bf6_36cc,
                0x7_2b60_d032_2378,
                0x2_5127_c681_8b25,
                0x3_30bc_a78d_e743,
            ]),
            xy2d: FieldElement([
                0x6_ff84_1119_744e,
                0x2_c560_e8e4_9305,
                0x7_254f_efe5_a57a,
                0x6_7ae2_c560_a7df,
                0x3_c31b_e1b3_69f1,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_bc93_f9cb_4272,
                0x3_f8f9_db73_182d,
                0x2_b235_eaba_e1c4,
                0x2_ddbf_8729_551a,
                0x4_1cec_1097_e7d5,
            ]),
            y_minus_x: FieldElement([
                0x4_864d_0894_8aee,
                0x5_d237_438d_f61e,
                0x2_b285_601f_7067,
                0x2_5dbc_bae6_d753,
                0x3_30b6_1134_262d,
            ]),
            xy2d: FieldElement([
                0x6_19d7_a26d_808a,
                0x3_c3b3_c2ad_bef2,
                0x6_877c_9eec_7f52,
                0x3_beb9_ebe1_b66d,
                0x2_6b44_cd91_f287,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_f293_6273_0383,
                0x7_fd79_5145_9c36,
                0x7_504c_512d_49e7,
                0x0_87ed_7e3b_c55f,
                0x7_deb1_0149_c726,
            ]),
            y_minus_x: FieldElement([
                0x0_4847_8f38_7475,
                0x6_9397_d967_8a3e,
                0x6_7c81_56c9_76f3,
                0x2_eb4d_5589_226c,
                0x2_c709_e6c1_c10a,
            ]),
            xy2d: FieldElement([
                0x2_af6a_8766_ee7a,
                0x0_8aaa_79a1_d96c,
                0x4_2f92_d59b_2fb0,
                0x1_752c_4000_9c07,
                0x0_8e68_e9ff_62ce,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_09d5_0ab8_f2f9,
                0x1_b8ab_247b_e5e5,
                0x5_d9b2_e6b2_e486,
                0x4_faa5_479a_1339,
                0x4_cb13_bd73_8f71,
            ]),
            y_minus_x: FieldElement([
                0x5_500a_4bc1_30ad,
                0x1_27a1_7a93_8695,
                0x0_2a26_fa34_e36d,
                0x5_84d1_2e1e_cc28,
                0x2_f1f3_f87e_eba3,
            ]),
            xy2d: FieldElement([
                0x4_8c75_e515_b64a,
                0x7_5b69_5207_1ef0,
                0x5_d46d_4296_5406,
                0x7_7461_0698_9f9f,
                0x1_9a1e_353c_0ae2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_72cd_d596_bdbd,
                0x0_731d_df88_1684,
                0x1_0426_d64f_8115,
                0x7_1a4f_d8a9_a3da,
                0x7_36bd_3990_266a,
            ]),
            y_minus_x: FieldElement([
                0x4_7560_bafa_05c3,
                0x4_18dc_abcc_2fa3,
                0x3_5991_cecf_8682,
                0x2_4371_a94b_8c60,
                0x4_1546_b11c_20c3,
            ]),
            xy2d: FieldElement([
                0x3_2d50_9334_b3b4,
                0x1_6c10_2cae_70aa,
                0x1_720d_d51b_f445,
                0x5_ae66_2faf_9821,
                0x4_1229_5a2b_87fa,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x5_5261_e293_eac6,
                0x0_6426_759b_65cc,
                0x4_0265_ae11_6a48,
                0x6_c023_04ba_e5bc,
                0x0_760b_b8d1_95ad,
            ]),
            y_minus_x: FieldElement([
                0x1_9b88_f57e_d6e9,
                0x4_cdbf_1904_a339,
                0x4_2b49_cd4e_4f2c,
                0x7_1a2e_7719_09d9,
                0x1_4e15_3ebb_52d2,
            ]),
            xy2d: FieldElement([
                0x6_1a17_cde6_818a,
                0x5_3dad_3410_8827,
                0x3_2b32_c55c_55b6,
                0x2_f916_5f93_47a3,
                0x6_b34b_e9bc_33ac,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_6965_6571_f2d3,
                0x0_aa61_ce6f_423f,
                0x3_f940_d71b_27a1,
                0x1_85f1_9d73_d16a,
                0x0_1b9c_7b62_e6dd,
            ]),
            y_minus_x: FieldElement([
                0x7_2f64_3a78_c0b2,
                0x3_de45_c04f_9e7b,
                0x7_06d6_8d30_fa5c,
                0x6_96f6_3e8e_2f24,
                0x2_012c_18f0_922d,
            ]),
            xy2d: FieldElement([
                0x3_55e5_5ac8_9d29,
                0x3_e8b4_14ec_7101,
                0x3_9db0_7c52_0c90,
                0x6_f41e_9b77_efe1,
                0x0_8af5_b784_e4ba,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_14d2_89cc_2c4b,
                0x2_3450_e2f1_bc4e,
                0x0_cd93_392f_92f4,
                0x1_370c_6a94_6b7d,
                0x6_423c_1d5a_fd98,
            ]),
            y_minus_x: FieldElement([
                0x4_99dc_881f_2533,
                0x3_4ef2_6476_c506,
                0x4_d107_d274_1497,
                0x3_46c4_bd6e_fdb3,
                0x3_2b79_d711_63a1,
            ]),
            xy2d: FieldElement([
                0x5_f8d9_edfc_b36a,
                0x1_e6e8_dcbf_3990,
                0x7_974f_348a_f30a,
                0x6_e672_4ef1_9c7c,
                0x4_80a5_efbc_13e2,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x1_4ce4_42ce_221f,
                0x1_8980_a725_16cc,
                0x0_72f8_0db8_6677,
                0x7_0333_1fda_526e,
                0x2_4b31_d476_91c8,
            ]),
            y_minus_x: FieldElement([
                0x1_e70b_0162_2071,
                0x1_f163_b5f8_a16a,
                0x5_6aaf_341a_d417,
                0x7_9896_35d8_30f7,
                0x4_7aa2_7600_cb7b,
            ]),
            xy2d: FieldElement([
                0x4_1eed_c015_f8c3,
                0x7_cf8d_27ef_854a,
                0x2_89e3_5846_93f9,
                0x0_4a78_57b3_09a7,
                0x5_45b5_85d1_4dda,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x4_e4d0_e3b3_21e1,
                0x7_451f_e3d2_ac40,
                0x6_66f6_78ee_a98d,
                0x0_3885_8667_fead,
                0x4_d22d_c3e6_4c8d,
            ]),
            y_minus_x: FieldElement([
                0x7_275e_a0d4_3a0f,
                0x6_8113_7dd7_ccf7,
                0x1_e79c_bab7_9a38,
                0x2_2a21_4489_a66a,
                0x0_f62f_9c33_2ba5,
            ]),
            xy2d: FieldElement([
                0x4_6589_d63b_5f39,
                0x7_eaf9_79ec_3f96,
                0x4_ebe8_1572_b9a8,
                0x2_1b7f_5d61_694a,
                0x1_c0fa_01a3_6371,
            ]),
        },
    ]),
    LookupTable([
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_2b0e_8c93_6a50,
                0x6_b83b_58b6_cd21,
                0x3_7ed8_d3e7_2680,
                0x0_a037_db9f_2a62,
                0x4_0054_19b1_d2bc,
            ]),
            y_minus_x: FieldElement([
                0x6_04b6_2294_3dff,
                0x1_c899_f674_1a58,
                0x6_0219_e2f2_32fb,
                0x3_5fae_92a7_f9cb,
                0x0_fa36_14f3_b1ca,
            ]),
            xy2d: FieldElement([
                0x3_febd_b9be_82f0,
                0x5_e748_9592_1400,
                0x5_53ea_3882_2706,
                0x5_a17c_24cf_c88c,
                0x1_fba2_18ae_f40a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x6_5704_3e7b_0194,
                0x5_c11b_55ef_e9e7,
                0x7_737b_c6a0_74fb,
                0x0_eae4_1ce3_55cc,
                0x6_c535_d13f_f776,
            ]),
            y_minus_x: FieldElement([
                0x4_9448_fac8_f53e,
                0x3_4f74_c6e8_356a,
                0x0_ad78_0607_dba2,
                0x7_213a_7eb6_3eb6,
                0x3_92e3_acaa_8c86,
            ]),
            xy2d: FieldElement([
                0x5_34e9_3e8a_35af,
                0x0_8b10_fd02_c997,
                0x2_6ac2_acb8_1e05,
                0x0_9d8c_98ce_3b79,
                0x2_5e17_fe4d_50ac,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_7ff5_76f1_21a7,
                0x4_e5f9_b0fc_722b,
                0x4_6f94_9b0d_28c8,
                0x4_cde6_5d17_ef26,
                0x6_bba8_28f8_9698,
            ]),
            y_minus_x: FieldElement([
                0x0_9bd7_1e04_f676,
                0x2_5ac8_41f2_a145,
                0x1_a47e_ac82_3871,
                0x1_a8a8_c36c_581a,
                0x2_5575_1442_a9fb,
            ]),
            xy2d: FieldElement([
                0x1_bc66_90fe_3901,
                0x3_1413_2f5a_bc5a,
                0x6_1183_5132_d528,
                0x5_f24b_8eb4_8a57,
                0x5_59d5_04f7_f6b7,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x0_91e7_f6d2_66fd,
                0x3_6060_ef03_7389,
                0x1_8788_ec1d_1286,
                0x2_8744_1c47_8eb0,
                0x1_23ea_6a33_54bd,
            ]),
            y_minus_x: FieldElement([
                0x3_8378_b3eb_54d5,
                0x4_d4aa_a78f_94ee,
                0x4_a002_e875_a74d,
                0x1_0b85_1367_b17c,
                0x0_1ab1_2d58_07e3,
            ]),
            xy2d: FieldElement([
                0x5_1890_41e3_2d96,
                0x0_5b06_2b09_0231,
                0x0_c917_66e7_b78f,
                0x0_aa0f_55a1_38ec,
                0x4_a396_1e2c_918a,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x7_d644_f323_3f1e,
                0x1_c69f_9e02_c064,
                0x3_6ae5_e526_6898,
                0x0_8fc1_dad3_8b79,
                0x6_8ace_ead9_bd41,
            ]),
            y_minus_x: FieldElement([
                0x4_3be0_f8e6_bba0,
                0x6_8fdf_fc61_4e3b,
                0x4_e91d_ab5b_3be0,
                0x3_b1d4_c921_2ff0,
                0x2_cd6b_ce3f_b1db,
            ]),
            xy2d: FieldElement([
                0x4_c90e_f3d7_c210,
                0x4_96f5_a081_8716,
                0x7_9cf8_8cc2_39b8,
                0x2_cb9c_306c_f8db,
                0x5_9576_0d5b_508f,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_cbeb_fd02_2790,
                0x0_b882_2aec_1105,
                0x4_d1cf_d226_bccc,
                0x5_15b2_fa49_71be,
                0x2_cb2c_5df5_4515,
            ]),
            y_minus_x: FieldElement([
                0x1_bfe1_04aa_6397,
                0x1_1494_ff99_6c25,
                0x6_4251_623e_5800,
                0x0_d49f_c5e0_44be,
                0x7_09fa_43ed_cb29,
            ]),
            xy2d: FieldElement([
                0x2_5d8c_63fd_2aca,
                0x4_c5cd_29df_fd61,
                0x3_2ec0_eb48_af05,
                0x1_8f93_91f9_b77c,
                0x7_0f02_9ecf_0c81,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x2_afaa_5e10_b0b9,
                0x6_1de0_8355_254d,
                0x0_eb58_7de3_c28d,
                0x4_f0bb_9f7d_bbd5,
                0x4_4eca_5a2a_74bd,
            ]),
            y_minus_x: FieldElement([
                0x3_07b3_2eed_3e33,
                0x6_748a_b03c_e8c2,
                0x5_7c0d_9ab8_10bc,
                0x4_2c64_a224_e98c,
                0x0_b7d5_d8a6_c314,
            ]),
            xy2d: FieldElement([
                0x4_4832_7b95_d543,
                0x0_1466_81e3_a4ba,
                0x3_8714_adc3_4e0c,
                0x4_f26f_0e29_8e30,
                0x2_7222_4512_c7de,
            ]),
        },
        PrecomputedPoint {
            y_plus_x: FieldElement([
                0x3_bb8a_42a9_75fc,
                0x6_f2d5_b46b_17ef,
                0x7_b6a9_2231_70e5,
                0x0_5371_3fe3_b7e6,
                0x1_9735_fd7f_6bc2,
            ]),
            y_minus_x: FieldElement([
                0x4_92af_49c5_342e,
                0x2_365c_df5a_0357,
                0x3_2138_a7ff_bb60,
                0x2_a1f7_d146_46fe,
                0x1_1b5d_f18a_44cc,
            ]),
            xy2d: FieldElement([
                0x3_90d0_42c8_4266,
                0x1_efe3_2a8f_dc75,
                0x6_925e_e7ae_1238,
                0x4_af92_81d0_e832,
                0x0_fef9_1119_1df8,
            ]),
        },
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdwardsPoint;

    #[test]
    fn table_matches_generator_multiples() {
        let mut row_base = EdwardsPoint::GENERATOR;
        for table in BASEPOINT_TABLE.iter() {
            let mut multiple = row_base;
            for entry in table.0.iter() {
                assert_eq!(*entry, PrecomputedPoint::from(&multiple.to_affine()));
                multiple += row_base;
            }
            for _ in 0..8 {
                row_base = row_base.double();
            }
        }
    }

    #[test]
    fn select_covers_all_digits() {
        let table = &BASEPOINT_TABLE[0];
        let mut expected = EdwardsPoint::IDENTITY;
        for x in 0..=8i8 {
            let positive = PrecomputedPoint::from(&expected.to_affine());
            let negative = PrecomputedPoint::from(&(-expected).to_affine());
            assert_eq!(table.select(x), positive);
            assert_eq!(table.select(-x), negative);
            expected += EdwardsPoint::GENERATOR;
        }
    }

    #[test]
    fn select_zero_is_identity() {
        for table in BASEPOINT_TABLE.iter() {
            assert_eq!(table.select(0), PrecomputedPoint::IDENTITY);
        }
    }

    #[test]
    fn top_carry_weight() {
        let mut expected = EdwardsPoint::GENERATOR;
        for _ in 0..256 {
            expected = expected.double();
        }
        assert_eq!(
            BASEPOINT_2_256,
            PrecomputedPoint::from(&expected.to_affine())
        );
    }
}

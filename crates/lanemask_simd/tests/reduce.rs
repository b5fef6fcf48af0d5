use lanemask_simd::*;

#[test]
fn alternating() {
    let mask = mask32x8::new(true, false, true, false, true, false, true, false);

    assert_eq!(mask.popcnt(), 4);
    assert!(!mask.all());
    assert!(mask.any());
    assert!(!mask.none());
    assert_eq!(mask.movemask(), 0b0101_0101);
    assert_eq!(mask.to_bitmask(), 0b0101_0101);
}

#[test]
fn all_true() {
    let mask = mask32x8::all_true();

    assert_eq!(mask.to_array(), [true; 8]);
    assert_eq!(mask.popcnt(), 8);
    assert!(mask.all());
    assert!(mask.any());
    assert!(!mask.none());
    assert_eq!(mask.movemask(), 0b1111_1111);
}

#[test]
fn all_false() {
    let mask = mask32x8::all_false();

    assert_eq!(mask.to_array(), [false; 8]);
    assert_eq!(mask.popcnt(), 0);
    assert!(!mask.all());
    assert!(!mask.any());
    assert!(mask.none());
    assert_eq!(mask.movemask(), 0);
}

#[test]
fn reductions_agree_with_movemask() {
    for bits in 0..=u8::MAX {
        let mask = mask32x8::from_bitmask(bits);

        assert_eq!(mask.movemask(), bits);
        assert_eq!(mask.popcnt(), bits.count_ones());
        assert_eq!(mask.all(), bits == 0xFF);
        assert_eq!(mask.any(), bits != 0);
        assert_eq!(mask.none(), bits == 0);
        assert_eq!(mask.none(), !mask.any());
        assert_eq!(mask.reduce_and(), mask.all());
        assert_eq!(mask.reduce_or(), mask.any());

        for lane in 0..8 {
            assert_eq!(mask[lane], bits & (1 << lane) != 0);
        }
    }
}

#[test]
fn single_lane() {
    for lane in 0..8 {
        let mut mask = mask32x8::all_false();
        mask.set(lane, true);

        assert_eq!(mask.movemask(), 1 << lane);
        assert_eq!(mask.popcnt(), 1);
        assert!(mask.any());
        assert!(!mask.all());

        let inv = !mask;
        assert_eq!(inv.popcnt(), 7);
        assert!(!inv.all());
        assert!(!inv.none());
    }
}

#[test]
fn reductions_read_sign_bits() {
    let mask = mask32x8::from_int_unchecked([1, i32::MIN, 0x7FFF_FFFF, -3, 0, 0, 0, 0]);

    assert_eq!(mask.movemask(), 0b0000_1010);
    assert_eq!(mask.popcnt(), 2);
    assert!(mask.any());
    assert!(!mask.all());

    let positive = mask32x8::from_int_unchecked([1, 2, 3, 4, 5, 6, 7, i32::MAX]);
    assert!(positive.none());
    assert_eq!(positive.popcnt(), 0);

    let negative = mask32x8::from_int_unchecked([i32::MIN, -2, -3, -4, -5, -6, -7, -8]);
    assert!(negative.all());
}

#[test]
fn half_bitmask() {
    let half = mask32x4::new(false, true, true, false);
    assert_eq!(half.movemask(), 0b0110);
    assert_eq!(half.to_bitmask(), 0b0110);
    assert_eq!(half.popcnt(), 2);
    assert_eq!(mask32x4::from_bitmask(0b1001).to_array(), [true, false, false, true]);
    assert_eq!(mask32x4::from_bitmask(0xF9).to_array(), [true, false, false, true]);
}

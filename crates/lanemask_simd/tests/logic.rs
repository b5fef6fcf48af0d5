use lanemask_simd::*;

fn mask(bits: u8) -> mask32x8 {
    mask32x8::from_bitmask(bits)
}

#[test]
fn binary_ops() {
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            let (ma, mb) = (mask(a), mask(b));

            assert_eq!((ma & mb).to_bitmask(), a & b);
            assert_eq!((ma | mb).to_bitmask(), a | b);
            assert_eq!((ma ^ mb).to_bitmask(), a ^ b);
            assert_eq!(ma.simd_eq(mb).to_bitmask(), !(a ^ b));
            assert_eq!(ma.simd_ne(mb).to_bitmask(), a ^ b);
        }
    }
}

#[test]
fn results_stay_canonical() {
    for a in 0..=u8::MAX {
        let ma = mask(a);
        let mb = mask(a.rotate_left(3));

        for result in [ma & mb, ma | mb, ma ^ mb, !ma, ma.simd_eq(mb), ma.simd_ne(mb)] {
            assert!(result.to_int().iter().all(|&bits| bits == TRUE_BITS || bits == FALSE_BITS), "{result:?}");
        }
    }
}

#[test]
fn not() {
    for a in 0..=u8::MAX {
        let ma = mask(a);
        assert_eq!((!ma).to_bitmask(), !a);
        assert_eq!(!!ma, ma);
        assert_eq!(ma ^ mask32x8::all_true(), !ma);
    }
}

#[test]
fn identities() {
    let t = mask32x8::all_true();
    let f = mask32x8::all_false();

    for a in 0..=u8::MAX {
        let ma = mask(a);
        assert_eq!(ma & t, ma);
        assert_eq!(ma & f, f);
        assert_eq!(ma | f, ma);
        assert_eq!(ma | t, t);
        assert_eq!(ma ^ ma, f);
        assert_eq!(ma.simd_eq(ma), t);
        assert_eq!(ma & !ma, f);
        assert_eq!(ma | !ma, t);
    }
}

#[test]
fn bool_operands() {
    let ma = mask32x8::new(true, false, false, true, true, false, true, false);

    assert_eq!(ma & true, ma);
    assert_eq!(ma & false, mask32x8::all_false());
    assert_eq!(ma | true, mask32x8::all_true());
    assert_eq!(ma | false, ma);
    assert_eq!(ma ^ true, !ma);
    assert_eq!(ma ^ false, ma);

    assert_eq!(true & ma, ma);
    assert_eq!(false | ma, ma);
    assert_eq!(true ^ ma, !ma);
}

#[test]
fn assign_ops() {
    let ma = mask32x8::new(true, true, false, false, true, false, true, false);
    let mb = mask32x8::new(true, false, true, false, false, false, true, true);

    let mut res = ma;
    res &= mb;
    assert_eq!(res.to_array(), [true, false, false, false, false, false, true, false]);

    let mut res = ma;
    res |= mb;
    assert_eq!(res.to_array(), [true, true, true, false, true, false, true, true]);

    let mut res = ma;
    res ^= mb;
    assert_eq!(res.to_array(), [false, true, true, false, true, false, false, true]);

    let mut res = ma;
    res ^= true;
    assert_eq!(res, !ma);
    res &= false;
    assert_eq!(res, mask32x8::all_false());
    res |= true;
    assert_eq!(res, mask32x8::all_true());
}

#[test]
fn equality_reads_sign_bits() {
    let canonical = mask32x8::new(true, false, true, false, false, false, false, true);
    let raw = mask32x8::from_int_unchecked([i32::MIN, 1, -7, 0x7FFF_FFFF, 0, 0, 0, -1]);
    assert_eq!(canonical, raw);

    let other = mask32x8::from_int_unchecked([i32::MIN, -1, -7, 0x7FFF_FFFF, 0, 0, 0, -1]);
    assert_ne!(canonical, other);
}

#[test]
fn half_ops() {
    let a = mask32x4::new(true, true, false, false);
    let b = mask32x4::new(true, false, true, false);

    assert_eq!((a & b).to_array(), [true, false, false, false]);
    assert_eq!((a | b).to_array(), [true, true, true, false]);
    assert_eq!((a ^ b).to_array(), [false, true, true, false]);
    assert_eq!((!a).to_array(), [false, false, true, true]);
    assert_eq!((!a).to_int(), [0, 0, -1, -1]);
}

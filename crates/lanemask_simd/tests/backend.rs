use lanemask_simd::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, PartialEq, Default)]
struct Results {
    lanes : Vec<[i32; 8]>,
    halves: Vec<[i32; 4]>,
    reduce: Vec<u32>,
}

macro_rules! record {
    ($res:ident.lanes: $($e:expr),* $(,)?) => { $( $res.lanes.push($e.to_int()); )* };
    ($res:ident.halves: $($e:expr),* $(,)?) => { $( $res.halves.push($e.to_int()); )* };
    ($res:ident.reduce: $($e:expr),* $(,)?) => { $( $res.reduce.push($e as u32); )* };
}

fn run<B: Backend>(a: mask32x8, b: mask32x8, c: mask32x8) -> Results
    where mask32x8 : SimdSetImpl<B> + SimdNotImpl<B> + SimdAndImpl<B> + SimdOrImpl<B> + SimdXorImpl<B> +
                     SimdSelectImpl<B> + SimdMaskOpsImpl<B> + SimdHalvesImpl<B> + SimdShuffleImpl<B>
{
    let mut res = Results::default();

    record!(res.lanes:
        mask32x8::simd_all_true::<B>(),
        mask32x8::simd_all_false::<B>(),
        mask32x8::simd_from_halves::<B>(b.low(), a.high()),
        a.simd_not::<B>(),
        a.simd_and::<B>(b),
        a.simd_or::<B>(b),
        a.simd_xor::<B>(b),
        a.simd_eq_with::<B>(b),
        a.simd_ne_with::<B>(b),
        a.simd_select::<B>(b, c),
        c.simd_select::<B>(a, b),
        a.simd_permute::<3, 1, 2, 0, B>(),
        a.simd_permute::<0, 0, 2, 2, B>(),
        a.simd_permute::<1, 1, 3, 3, B>(),
        a.simd_permute::<0, 1, 0, 1, B>(),
        a.simd_permute_general::<0, 0, 2, 2, B>(),
        a.simd_permute_general::<2, 2, 2, 2, B>(),
        a.simd_shuffle::<1, 2, 3, 0, B>(b),
        a.simd_shuffle::<0, 0, 3, 3, B>(c),
        a.simd_dup_even::<B>(),
        a.simd_dup_odd::<B>(),
        a.simd_dup_low_pair::<B>(),
        a.simd_unpack_lo::<B>(b),
        a.simd_unpack_hi::<B>(b),
        a.simd_shuffle_halves::<1, 0, B>(b),
        a.simd_shuffle_halves::<3, 2, B>(b),
        a.simd_shuffle_halves::<0, 3, B>(b),
        a.simd_insert::<0, B>(c.high()),
        a.simd_insert::<1, B>(c.low()),
    );

    record!(res.halves:
        a.simd_extract::<0, B>(),
        a.simd_extract::<1, B>(),
    );

    record!(res.reduce:
        a.simd_movemask::<B>(),
        a.simd_popcnt::<B>(),
        a.simd_all::<B>(),
        a.simd_any::<B>(),
        a.simd_none::<B>(),
    );

    res
}

fn check_all_backends(a: mask32x8, b: mask32x8, c: mask32x8) {
    let expected = run::<Scalar>(a, b, c);

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    assert_eq!(run::<Sse>(a, b, c), expected, "SSE differs for {a:?} {b:?} {c:?}");
    #[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
    assert_eq!(run::<Avx>(a, b, c), expected, "AVX differs for {a:?} {b:?} {c:?}");

    let _ = expected;
}

#[test]
fn canonical_masks() {
    for bits in 0..=u8::MAX {
        let a = mask32x8::from_bitmask(bits);
        let b = mask32x8::from_bitmask(bits.rotate_left(1) ^ 0x5A);
        let c = mask32x8::from_bitmask(!bits);
        check_all_backends(a, b, c);
    }

    let t = mask32x8::all_true();
    let f = mask32x8::all_false();
    check_all_backends(t, f, t);
    check_all_backends(f, t, f);
}

#[test]
fn raw_lanes() {
    let mut rng = StdRng::seed_from_u64(0x6261_636b);

    for _ in 0..1024 {
        let a = mask32x8::from_int_unchecked(rng.gen());
        let b = mask32x8::from_int_unchecked(rng.gen());
        let c = mask32x8::from_int_unchecked(rng.gen());
        check_all_backends(a, b, c);
    }
}

#[test]
fn default_backend() {
    let a = mask32x8::new(true, false, true, true, false, false, true, false);
    let b = mask32x8::new(false, false, true, false, true, true, true, false);

    assert_eq!((a & b).to_int(), a.simd_and::<DefBackend>(b).to_int());
    assert_eq!((a & b).to_int(), a.simd_and::<Scalar>(b).to_int());
    assert_eq!(a.movemask(), a.simd_movemask::<Scalar>());
    assert_eq!(a.select(a, b).to_int(), a.simd_select::<Scalar>(a, b).to_int());
}

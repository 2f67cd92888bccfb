use hbt_logic::{Belnap, BelnapVec, Contradiction, Kleene, KleeneVec};
use proptest::prelude::*;

fn arb_kleene() -> impl Strategy<Value = Kleene> {
    prop_oneof![Just(Kleene::Unknown), Just(Kleene::True), Just(Kleene::False)]
}

fn arb_belnap() -> impl Strategy<Value = Belnap> {
    prop_oneof![
        Just(Belnap::Unknown),
        Just(Belnap::True),
        Just(Belnap::False),
        Just(Belnap::Both),
    ]
}

// Widths up to 200 cover empty, single-word and multi-word vectors with
// every tail length.
fn arb_kleene_vec() -> impl Strategy<Value = KleeneVec> {
    prop::collection::vec(arb_kleene(), 0..200).prop_map(|v| v.into_iter().collect::<KleeneVec>())
}

fn arb_belnap_vec() -> impl Strategy<Value = BelnapVec> {
    prop::collection::vec(arb_belnap(), 0..200).prop_map(|v| v.into_iter().collect::<BelnapVec>())
}

fn kleene_at(v: &KleeneVec, i: usize) -> Kleene {
    v.get(i).unwrap_or(Kleene::Unknown)
}

fn belnap_at(v: &BelnapVec, i: usize) -> Belnap {
    v.get(i).unwrap_or(Belnap::Unknown)
}

proptest! {
    #[test]
    fn kleene_ops_are_elementwise(a in arb_kleene_vec(), b in arb_kleene_vec()) {
        let width = a.width().max(b.width());
        let (and, or, implies, not) = (a.and(&b), a.or(&b), a.implies(&b), a.not());
        prop_assert_eq!(and.width(), width);
        prop_assert_eq!(or.width(), width);
        prop_assert_eq!(implies.width(), width);
        prop_assert_eq!(not.width(), a.width());
        for i in 0..width {
            let (x, y) = (kleene_at(&a, i), kleene_at(&b, i));
            prop_assert_eq!(kleene_at(&and, i), x & y);
            prop_assert_eq!(kleene_at(&or, i), x | y);
            prop_assert_eq!(kleene_at(&implies, i), x.implies(y));
        }
        for i in 0..a.width() {
            prop_assert_eq!(kleene_at(&not, i), !kleene_at(&a, i));
        }
    }

    #[test]
    fn belnap_ops_are_elementwise(a in arb_belnap_vec(), b in arb_belnap_vec()) {
        let width = a.width().max(b.width());
        let (and, or, merge, implies) = (a.and(&b), a.or(&b), a.merge(&b), a.implies(&b));
        prop_assert_eq!(merge.width(), width);
        for i in 0..width {
            let (x, y) = (belnap_at(&a, i), belnap_at(&b, i));
            prop_assert_eq!(belnap_at(&and, i), x & y);
            prop_assert_eq!(belnap_at(&or, i), x | y);
            prop_assert_eq!(belnap_at(&merge, i), x.merge(y));
            prop_assert_eq!(belnap_at(&implies, i), x.implies(y));
        }
    }

    #[test]
    fn binary_ops_commute(a in arb_belnap_vec(), b in arb_belnap_vec()) {
        prop_assert_eq!(a.and(&b), b.and(&a));
        prop_assert_eq!(a.or(&b), b.or(&a));
        prop_assert_eq!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn kleene_binary_ops_commute(a in arb_kleene_vec(), b in arb_kleene_vec()) {
        prop_assert_eq!(a.and(&b), b.and(&a));
        prop_assert_eq!(a.or(&b), b.or(&a));
    }

    #[test]
    fn merge_is_associative(a in arb_belnap_vec(), b in arb_belnap_vec(), c in arb_belnap_vec()) {
        prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    #[test]
    fn merge_with_unknown_is_identity(a in arb_belnap_vec()) {
        prop_assert_eq!(a.merge(&BelnapVec::new(a.width())), a.clone());
        prop_assert_eq!(BelnapVec::new(0).merge(&a), a);
    }

    #[test]
    fn not_is_an_involution(a in arb_belnap_vec(), k in arb_kleene_vec()) {
        prop_assert_eq!(a.not().not(), a);
        prop_assert_eq!(k.not().not(), k);
    }

    #[test]
    fn de_morgan(a in arb_kleene_vec(), b in arb_kleene_vec()) {
        prop_assert_eq!(a.and(&b).not(), a.not().or(&b.not()));
        prop_assert_eq!(a.or(&b).not(), a.not().and(&b.not()));
    }

    #[test]
    fn counts_partition_width(a in arb_belnap_vec(), k in arb_kleene_vec()) {
        prop_assert_eq!(
            a.count_true() + a.count_false() + a.count_unknown() + a.count_both(),
            a.width()
        );
        prop_assert_eq!(k.count_true() + k.count_false() + k.count_unknown(), k.width());
        let both = a.iter().filter(|b| b.is_contradicted()).count();
        prop_assert_eq!(a.count_both(), both);
        prop_assert_eq!(a.is_consistent(), both == 0);
    }

    #[test]
    fn kleene_round_trips_through_belnap(k in arb_kleene_vec()) {
        let b = BelnapVec::from(&k);
        prop_assert!(b.is_consistent());
        prop_assert_eq!(b.count_both(), 0);
        prop_assert_eq!(b.count_true(), k.count_true());
        prop_assert_eq!(b.to_kleene(), Ok(k));
    }

    #[test]
    fn projection_fails_on_first_both(a in arb_belnap_vec()) {
        let first = a.iter().position(Belnap::is_contradicted);
        match first {
            Some(index) => {
                prop_assert_eq!(a.to_kleene(), Err(Contradiction { index }));
            }
            None => {
                let k = a.to_kleene().unwrap();
                prop_assert_eq!(BelnapVec::from(&k), a);
            }
        }
    }

    #[test]
    fn resize_then_truncate(a in arb_belnap_vec(), extra in 0usize..150, fill in arb_belnap()) {
        let mut v = a.clone();
        v.resize(a.width() + extra, fill);
        prop_assert_eq!(v.width(), a.width() + extra);
        for i in 0..a.width() {
            prop_assert_eq!(v.get(i), a.get(i));
        }
        for i in a.width()..v.width() {
            prop_assert_eq!(v.get(i), Ok(fill));
        }
        v.truncate(a.width());
        prop_assert_eq!(v, a);
    }

    #[test]
    fn set_grows_with_unknown(a in arb_kleene_vec(), gap in 0usize..150, value in arb_kleene()) {
        let mut v = a.clone();
        let i = a.width() + gap;
        v.set(i, value);
        prop_assert_eq!(v.width(), i + 1);
        prop_assert_eq!(v.get(i), Ok(value));
        for j in a.width()..i {
            prop_assert_eq!(v.get(j), Ok(Kleene::Unknown));
        }
        prop_assert!(v.get(i + 1).is_err());
    }
}

#[test]
fn scenario_resize_and_truncate() {
    let mut v = KleeneVec::all_true(10);
    v.resize(100, Kleene::Unknown);
    assert_eq!(v.count_true(), 10);
    assert_eq!(v.count_unknown(), 90);

    let mut v = KleeneVec::all_true(200);
    v.truncate(65);
    assert_eq!(v.width(), 65);
    assert!(v.is_all_true());
    assert_eq!(v.count_true(), 65);
}

#[test]
fn scenario_mismatched_width_and() {
    let short = BelnapVec::all_true(10);
    let long = BelnapVec::all_false(100);
    let (ab, ba) = (short.and(&long), long.and(&short));
    for i in 0..100 {
        assert_eq!(ab.get(i), ba.get(i), "index {i}");
    }
}

use super::*;
use crate::error::StallingsError;
use proptest::prelude::*;

fn el(f: &[Symbol]) -> Element {
    Element::from(f)
}

fn sg(base: &[&[Symbol]]) -> Subgroup {
    Subgroup::from_base(base.iter().map(|w| el(w)).collect())
}

fn recompose(s: &Subgroup, coords: &[Symbol]) -> Element {
    coords
        .iter()
        .fold(Element::empty(), |acc, &c| acc.product(&s.base_element(c)))
}

#[test]
fn two_petals_share_the_inverse_edge() {
    // {ab, a⁻¹ba}: both petals leave the root by a⁻¹ (one as the closing edge).
    let s = sg(&[&[1, 2], &[-1, 2, 1]]);
    assert_eq!(s.foldings().len(), 1);
    assert_eq!(s.graph().size(), 3);
    assert!(s.graph().is_folded());
    assert!(s.contains(&el(&[1, 2])));
    assert!(s.contains(&el(&[-1, 2, 1])));
    assert!(!s.contains(&el(&[2])));
    assert!(!s.contains(&el(&[1])));
    assert_eq!(s.rank(), 2);
}

#[test]
fn coordinates_follow_the_base() {
    let s = sg(&[&[1, 2], &[-1, 2, 1]]);
    assert_eq!(s.coordinates(&el(&[1, 2])).unwrap(), vec![1]);
    assert_eq!(s.coordinates(&el(&[1, 2, -1, 2, 1])).unwrap(), vec![1, 2]);
    // Inverse of the second generator needs a detour through the fold.
    assert_eq!(s.coordinates(&el(&[-1, -2, 1])).unwrap(), vec![-2]);
    assert_eq!(s.coordinates(&Element::empty()).unwrap(), Vec::<Symbol>::new());
    assert_eq!(
        s.coordinates(&el(&[2])),
        Err(StallingsError::NotAMember)
    );
}

#[test]
fn square_of_a_has_index_two_in_rank_one() {
    let s = sg(&[&[1, 1]]);
    assert!(s.foldings().is_empty());
    assert_eq!(s.graph().size(), 2);
    assert_eq!(s.index(1), Index::Finite(2));
    assert_eq!(s.index(2), Index::Infinite);
    assert_eq!(s.index_auto(), Index::Finite(2));
    assert_eq!(s.cosets(1).unwrap(), vec![Element::empty(), el(&[1])]);
    assert_eq!(s.coset_of(&el(&[1, 1, 1])), Some(1));
    assert_eq!(
        s.cosets(2),
        Err(StallingsError::InfiniteIndex { rank: 2 })
    );
    assert_eq!(s.coordinates(&el(&[-1, -1])).unwrap(), vec![-1]);
    assert_eq!(s.coordinates(&el(&[1, 1, 1, 1])).unwrap(), vec![1, 1]);
}

#[test]
fn finite_index_cosets_are_distinct_shortest_words() {
    // <a², b, a b a⁻¹> has index 2 in F(a, b).
    let s = sg(&[&[1, 1], &[2], &[1, 2, -1]]);
    assert_eq!(s.index(2), Index::Finite(2));
    let cosets = s.cosets(2).unwrap();
    assert_eq!(cosets.len(), 2);
    assert_eq!(cosets[0], Element::empty());
    assert_eq!(cosets[1].len(), 1);
    for (i, rep) in cosets.iter().enumerate() {
        assert_eq!(s.coset_of(rep), Some(i));
    }
}

#[test]
fn whole_group_folds_to_one_vertex() {
    let s = sg(&[&[1], &[2], &[1, 2]]);
    assert_eq!(s.graph().size(), 1);
    assert_eq!(s.index(2), Index::Finite(1));
    assert_eq!(s.rank(), 2);
    let c = s.coordinates(&el(&[2, 1])).unwrap();
    assert_eq!(recompose(&s, &c), el(&[2, 1]));
}

#[test]
fn identity_generators_keep_their_slot() {
    let s = sg(&[&[1, -1], &[2]]);
    assert!(s.base()[0].is_empty());
    assert_eq!(s.coordinates(&el(&[2, 2])).unwrap(), vec![2, 2]);
}

#[test]
fn intersection_of_cyclic_subgroups() {
    let h = sg(&[&[1, 1]]);
    let k = sg(&[&[1, 1, 1]]);
    let i = Subgroup::intersection(&h, &k);
    assert_eq!(i.graph().size(), 6);
    assert!(i.contains(&el(&[1; 6])));
    assert!(!i.contains(&el(&[1, 1])));
    assert!(i.equals(&sg(&[&[1; 6]])));
}

#[test]
fn intersection_with_whole_group_is_identity_op() {
    let whole = sg(&[&[1], &[2]]);
    let k = sg(&[&[1, 2], &[-1, 2, 1]]);
    let i = Subgroup::intersection(&whole, &k);
    assert!(i.equals(&k));
    assert!(k.equals(&i));
}

#[test]
fn intersection_can_be_trivial() {
    let i = Subgroup::intersection(&sg(&[&[1]]), &sg(&[&[2]]));
    assert_eq!(i.graph().size(), 1);
    assert!(i.base().is_empty());
    assert_eq!(i.rank(), 0);
}

#[test]
fn intersection_trims_hanging_trees() {
    // <ab> ∩ <ac>: the pullback is a single `a` edge hanging off the root.
    let h = sg(&[&[1, 2]]);
    let k = sg(&[&[1, 3]]);
    let i = Subgroup::intersection(&h, &k);
    assert_eq!(i.graph().size(), 1);
    assert_eq!(i.rank(), 0);
}

#[test]
fn intersection_drops_components_away_from_root() {
    // <a b a⁻¹> ∩ <b>: the shared b-loop sits in a component the root never reaches.
    let h = sg(&[&[1, 2, -1]]);
    let k = sg(&[&[2]]);
    let i = Subgroup::intersection(&h, &k);
    assert_eq!(i.graph().size(), 1);
    assert!(!i.contains(&el(&[2])));
}

#[test]
fn from_graph_reads_fundamental_cycles() {
    let mut g = Graph::new(1);
    g.add_edge(0, 0, 1);
    g.add_edge(0, 0, 2);
    let s = Subgroup::from_graph(&g);
    assert_eq!(s.base().len(), 2);
    assert!(s.equals(&sg(&[&[1], &[2]])));

    // A square a b a⁻¹ b⁻¹ drawn on four vertices.
    let mut sq = Graph::new(4);
    sq.add_edge(0, 1, 1);
    sq.add_edge(1, 2, 2);
    sq.add_edge(3, 2, 1);
    sq.add_edge(0, 3, 2);
    let c = Subgroup::from_graph(&sq);
    assert_eq!(c.base().len(), 1);
    assert!(c.contains(&el(&[1, 2, -1, -2])));
}

#[test]
fn fringe_of_a_squared() {
    let s = sg(&[&[1, 1]]);
    let fringe = s.fringe(FringeCfg::default()).unwrap();
    assert_eq!(fringe.len(), 2);
    assert!(fringe.iter().any(|f| f.equals(&s)));
    assert!(fringe.iter().any(|f| f.equals(&sg(&[&[1]]))));
    assert_eq!(
        s.fringe(FringeCfg { max_vertices: 1 }).unwrap_err(),
        StallingsError::FringeTooLarge {
            vertices: 2,
            limit: 1
        }
    );
}

#[test]
fn inclusion_and_free_factor() {
    let a = sg(&[&[1]]);
    let a2 = sg(&[&[1, 1]]);
    let whole = sg(&[&[1], &[2]]);
    assert!(a2.is_subgroup_of(&a));
    assert!(!a.is_subgroup_of(&a2));
    assert!(a.is_free_factor_of(&whole));
    assert!(!a.equals(&a2));
}

// ---- properties ----

fn word(rank: Symbol, max_len: usize) -> impl Strategy<Value = Element> {
    prop::collection::vec((1..=rank, any::<bool>()), 0..=max_len).prop_map(|fs| {
        Element::new(fs.into_iter().map(|(m, pos)| if pos { m } else { -m }).collect()).reduce()
    })
}

fn base(rank: Symbol) -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(word(rank, 6), 1..=4)
}

fn combination(len: usize) -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..len, any::<bool>()), 0..=5)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn folding_terminates_deterministically(b in base(3)) {
        let s1 = Subgroup::from_base(b.clone());
        let s2 = Subgroup::from_base(b);
        prop_assert!(s1.graph().is_folded());
        prop_assert_eq!(s1.graph(), s2.graph());
        prop_assert_eq!(s1.foldings().len(), s2.foldings().len());
        prop_assert!(s1.foldings().len() <= s1.petal_graph().num_edges());
    }

    #[test]
    fn base_elements_are_members_with_round_trip(b in base(3)) {
        let s = Subgroup::from_base(b);
        for e in s.base() {
            prop_assert!(s.contains(e));
            let c = s.coordinates(e).unwrap();
            prop_assert_eq!(recompose(&s, &c), e.clone());
        }
    }

    #[test]
    fn products_of_generators_round_trip(b in base(2), combo in combination(4)) {
        let s = Subgroup::from_base(b);
        let n = s.base().len();
        let coords: Vec<Symbol> = combo
            .into_iter()
            .map(|(i, pos)| {
                let c = (i % n + 1) as Symbol;
                if pos { c } else { -c }
            })
            .collect();
        let e = recompose(&s, &coords);
        prop_assert!(s.contains(&e));
        let lifted = s.coordinates(&e).unwrap();
        prop_assert_eq!(recompose(&s, &lifted), e);
    }

    #[test]
    fn inverse_and_associativity(x in word(3, 8), y in word(3, 8), z in word(3, 8)) {
        prop_assert!(x.product(&x.inverse()).is_empty());
        prop_assert_eq!(x.product(&y).product(&z), x.product(&y.product(&z)));
    }

    #[test]
    fn cosets_match_index(b in base(2)) {
        let s = Subgroup::from_base(b);
        match s.index(2) {
            Index::Finite(n) => {
                let cosets = s.cosets(2).unwrap();
                prop_assert_eq!(cosets.len(), n);
                let sp = s.graph().all_shortest_paths();
                for (i, rep) in cosets.iter().enumerate() {
                    prop_assert_eq!(s.coset_of(rep), Some(i));
                    prop_assert_eq!(Some(rep.len()), sp.dist[i]);
                }
            }
            Index::Infinite => prop_assert!(s.cosets(2).is_err()),
        }
    }

    #[test]
    fn intersection_is_exactly_the_common_part(h in base(2), k in base(2), w in word(2, 12)) {
        let h = Subgroup::from_base(h);
        let k = Subgroup::from_base(k);
        let i = Subgroup::intersection(&h, &k);
        prop_assert!(i.is_subgroup_of(&h));
        prop_assert!(i.is_subgroup_of(&k));
        prop_assert_eq!(i.contains(&w), h.contains(&w) && k.contains(&w));
        // Random words rarely land in both; a product of base elements does.
        let hk = h.base().iter().fold(Element::empty(), |acc, e| acc.product(e));
        prop_assert_eq!(i.contains(&hk), h.contains(&hk) && k.contains(&hk));
        prop_assert!(i.equals(&Subgroup::intersection(&k, &h)));
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in base(2), b in base(2)) {
        let a = Subgroup::from_base(a);
        let b = Subgroup::from_base(b);
        prop_assert!(a.equals(&a));
        prop_assert_eq!(a.equals(&b), b.equals(&a));
        prop_assert!(Subgroup::from_graph(a.graph()).equals(&a));
    }
}

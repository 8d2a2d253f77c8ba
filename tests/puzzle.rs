//! End-to-end tests for puzzle generation.
//!
//! Tests cover uniqueness, structural constraints of generated expressions,
//! hand-made scenarios, and the retry loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use superlogic::command::{Command, Outcome, Selection};
use superlogic::generator::NEGATION_BUDGET;
use superlogic::puzzle::{is_consistent, solutions, Attempt, Puzzle, PuzzleBuilder, PuzzleConfig};
use superlogic::{Assignment, Error, Expr, Op, Var};

fn v(i: usize) -> Expr {
    Expr::var(Var::new(i))
}

fn builder(num_vars: usize) -> PuzzleBuilder {
    PuzzleBuilder::new(PuzzleConfig::default().with_num_vars(num_vars)).unwrap()
}

// ─── Generated Puzzles ─────────────────────────────────────────────────────────

#[test]
fn generated_puzzles_are_unique() {
    for n in [3, 4] {
        let builder = builder(n);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let puzzle = builder.build(&mut rng).unwrap();

            let satisfying: Vec<Assignment> = Assignment::all(n)
                .filter(|&a| {
                    Var::all(n).all(|var| a.get(var) == puzzle.expression(var).eval(a))
                })
                .collect();
            assert_eq!(satisfying, vec![puzzle.solution()], "seed {}:\n{}", seed, puzzle);
        }
    }
}

#[test]
fn generated_expressions_never_refer_to_themselves() {
    for n in [3, 4] {
        let builder = builder(n);
        for seed in 0..200 {
            let puzzle = builder.build(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            for var in Var::all(n) {
                assert!(!puzzle.expression(var).mentions(var), "{}", puzzle);
            }
        }
    }
}

#[test]
fn generated_expressions_respect_negation_budget() {
    let builder = builder(4);
    for seed in 0..200 {
        let puzzle = builder.build(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        for e in puzzle.expressions() {
            assert!(e.count_not() <= NEGATION_BUDGET, "{}", e);
        }
    }
}

#[test]
fn four_variables_terminate_within_cap() {
    let builder = PuzzleBuilder::new(
        PuzzleConfig::default()
            .with_num_vars(4)
            .with_max_attempts(Some(10_000)),
    )
    .unwrap();
    for seed in 1000..1100 {
        let puzzle = builder.build(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        assert_eq!(solutions(puzzle.expressions()).len(), 1);
    }
}

#[test]
fn layout_matches_render() {
    let builder = builder(4);
    for seed in 0..50 {
        let puzzle = builder.build(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        for e in puzzle.expressions() {
            let mut tokens = String::new();
            let width = e.instantiate(0.0, false, &mut |c, _| {
                tokens.push(c);
                1.0
            });
            assert_eq!(tokens, e.render(false));
            assert_eq!(width as usize, tokens.chars().count());
        }
    }
}

// ─── Hand-made Scenarios ───────────────────────────────────────────────────────

#[test]
fn scenario_without_solution_is_rejected() {
    // A = B∧C, B = ¬A∨C, C = A⊻B
    let exprs = vec![
        Expr::binary(v(1), v(2), Op::And),
        Expr::binary(Expr::not(v(0)), v(2), Op::Or),
        Expr::binary(v(0), v(1), Op::Xor),
    ];
    assert_eq!(exprs[0].to_string(), "B∧C");
    assert_eq!(exprs[1].to_string(), "¬A∨C");
    assert_eq!(exprs[2].to_string(), "A⊻B");

    // No candidate survives direct substitution.
    for a in Assignment::all(3) {
        assert!(!is_consistent(&exprs, a), "{}", a.to_tf_string(3));
    }
    assert_eq!(
        Puzzle::from_expressions(exprs),
        Err(Error::NotUnique { solutions: 0 })
    );
}

#[test]
fn scenario_with_unique_solution() {
    // A = B∧C, B = ¬A∨C, C = A↓B
    let exprs = vec![
        Expr::binary(v(1), v(2), Op::And),
        Expr::binary(Expr::not(v(0)), v(2), Op::Or),
        Expr::binary(v(0), v(1), Op::Nor),
    ];
    let claimed = Assignment::from_values(&[false, true, false]);

    // Direct substitution: A = T∧F = F, B = ¬F∨F = T, C = F↓T = F.
    assert!(!exprs[0].eval(claimed));
    assert!(exprs[1].eval(claimed));
    assert!(!exprs[2].eval(claimed));

    for a in Assignment::all(3) {
        assert_eq!(is_consistent(&exprs, a), a == claimed, "{}", a.to_tf_string(3));
    }

    let puzzle = Puzzle::from_expressions(exprs).unwrap();
    assert_eq!(puzzle.solution(), claimed);
    assert_eq!(puzzle.solution().bits(), 0b010);
}

// ─── Retry Loop ────────────────────────────────────────────────────────────────

#[test]
fn rejected_attempts_do_not_leak() {
    let builder = builder(3);

    // Pick a seed that needs at least two attempts.
    let seed = (0..1000)
        .find(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            matches!(builder.attempt(&mut rng), Attempt::Rejected { .. })
        })
        .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rejected = Vec::new();
    let accepted = loop {
        match builder.attempt(&mut rng) {
            Attempt::Accepted(puzzle) => break puzzle,
            Attempt::Rejected {
                expressions,
                solutions: found,
            } => {
                assert_ne!(found.len(), 1);
                assert_eq!(solutions(&expressions), found);
                rejected.push(expressions);
            }
        }
        assert!(rejected.len() < 10_000);
    };
    assert!(!rejected.is_empty());

    let built = builder.build(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
    assert_eq!(built, accepted);
    for expressions in &rejected {
        assert_ne!(built.expressions(), &expressions[..]);
    }
}

#[test]
fn attempts_are_independent_of_builder_id() {
    let a = PuzzleBuilder::new(PuzzleConfig::default().with_id(1)).unwrap();
    let b = PuzzleBuilder::new(PuzzleConfig::default().with_id(2)).unwrap();
    let pa = a.build(&mut ChaCha8Rng::seed_from_u64(17)).unwrap();
    let pb = b.build(&mut ChaCha8Rng::seed_from_u64(17)).unwrap();
    assert_eq!(pa, pb);
}

// ─── Playing ───────────────────────────────────────────────────────────────────

#[test]
fn playing_a_generated_puzzle() {
    let builder = builder(4);
    let puzzle = builder.build(&mut ChaCha8Rng::seed_from_u64(8)).unwrap();
    let mut selection = Selection::new(4);

    // Toggle each variable that should be true, then submit.
    for var in Var::all(4) {
        if puzzle.solution().get(var) {
            let command = Command::parse(&var.to_string(), 4).unwrap();
            selection.apply(&command, &puzzle).unwrap();
        }
    }
    let submit = Command::parse("submit", 4).unwrap();
    assert_eq!(
        selection.apply(&submit, &puzzle),
        Ok(Outcome::Submitted { correct: true })
    );

    // Setting all values to the complement is always wrong.
    let wrong: String = puzzle
        .solution()
        .to_values(4)
        .iter()
        .map(|&b| if b { 'F' } else { 'T' })
        .collect();
    let command = Command::parse(&wrong, 4).unwrap();
    assert_eq!(selection.apply(&command, &puzzle), Ok(Outcome::Set));
    assert_eq!(
        selection.apply(&submit, &puzzle),
        Ok(Outcome::Submitted { correct: false })
    );
}

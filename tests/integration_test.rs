#[cfg(test)]
mod integration_test {
    use std::io;

    use approx::assert_abs_diff_eq;
    use tabsimplex::{
        self,
        config::Config,
        helpers::problem_file::ProblemFile,
        problem::OptimizationDirection,
        solver::{Solver, SolverTryNew},
        solvers::tableau_simplex::{Status, TableauSolver},
    };

    fn load(path: &str) -> ProblemFile {
        let file = std::fs::File::open(path).unwrap();
        let input = io::BufReader::new(file);
        ProblemFile::parse(input).unwrap()
    }

    #[test]
    fn product_mix_test() {
        let _ = env_logger::builder().is_test(true).try_init();

        let file = load("resources/problems/product_mix.txt");
        println!("{}", file.problem);

        let config = Config::default().with_seed(42);
        let mut solver = TableauSolver::try_new(&file.problem, config).unwrap();
        let solution = solver.solve().unwrap();

        assert!(solution.is_solved());
        assert_abs_diff_eq!(solution.objective_value(), -36.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.var_value(0), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.var_value(1), 6.0, epsilon = 1e-9);
        println!("{}", solution);
    }

    #[test]
    fn maximize_from_file_test() {
        let _ = env_logger::builder().is_test(true).try_init();

        // The file minimizes -c'x; maximizing c'x with the signs flipped is the same problem.
        let mut problem = load("resources/problems/three_by_three.txt").problem;
        for coeff in problem.objective.iter_mut() {
            *coeff = -*coeff;
        }

        let config = Config::default()
            .with_seed(7)
            .with_direction(OptimizationDirection::Maximize);
        let mut solver = TableauSolver::try_new(&problem, config).unwrap();
        let solution = solver.solve().unwrap();

        assert!(solution.is_solved());
        assert_abs_diff_eq!(solution.objective_value(), 5.6, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.var_value(0), 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.var_value(1), 2.2, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.var_value(2), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn unbounded_from_file_test() {
        let _ = env_logger::builder().is_test(true).try_init();

        let file = load("resources/problems/unbounded.txt");
        let mut solver = TableauSolver::try_new(&file.problem, Config::default()).unwrap();
        let solution = solver.solve().unwrap();

        assert_eq!(solution.status(), Status::Unbounded);
        assert!(!solution.is_solved());
        println!("{}", solution);
    }

    #[test]
    fn step_by_step_test() {
        let _ = env_logger::builder().is_test(true).try_init();

        let file = load("resources/problems/product_mix.txt");
        let config = Config::default().with_seed(1).with_verbose(false);
        let mut solver = TableauSolver::try_new(&file.problem, config).unwrap();

        let mut rounds = 0;
        while solver.step().unwrap() == Status::Iterating {
            rounds += 1;
            println!("after round {}:\n{}", rounds, solver.tableau());
        }

        assert_eq!(rounds, 2);
        assert_eq!(solver.iteration(), 3);
        assert!(solver.is_solved());
    }
}

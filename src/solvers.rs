pub mod tableau_simplex;

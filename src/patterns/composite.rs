//! Composite: a painting company and a solo painter look the same to the
//! house owner, and companies may employ other companies.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Without the pattern the owner has to understand every kind of painter.
pub mod problem {
    pub struct Painter {
        /// Days this painter needs for one house.
        pub painting_speed: f32,
    }

    impl Painter {
        pub fn new(painting_speed: f32) -> Self {
            Self { painting_speed }
        }

        pub fn estimate_painting_days(&self, houses: u32) -> f32 {
            self.painting_speed * houses as f32
        }
    }

    pub struct HouseOwner {
        painters: Vec<Painter>,
        houses: u32,
    }

    impl HouseOwner {
        pub fn new(painters: Vec<Painter>, houses: u32) -> Self {
            Self { painters, houses }
        }

        /// Only handles a flat list; a company of companies would need
        /// another special case here.
        pub fn estimate_painting_days(&self) -> f32 {
            let houses_per_day: f32 = self.painters.iter().map(|p| 1.0 / p.painting_speed).sum();
            self.houses as f32 / houses_per_day
        }
    }
}

// =============================================================================
// Component, leaf, composite
// =============================================================================

pub trait Painter {
    /// Days needed for one house.
    fn painting_speed(&self) -> f32;

    fn estimate_painting_days(&self, houses: u32) -> f32 {
        self.painting_speed() * houses as f32
    }
}

pub struct SoloPainter {
    painting_speed: f32,
}

impl SoloPainter {
    pub fn new(painting_speed: f32) -> Self {
        Self { painting_speed }
    }
}

impl Painter for SoloPainter {
    fn painting_speed(&self) -> f32 {
        self.painting_speed
    }
}

pub struct PaintingCompany {
    painters: Vec<Box<dyn Painter>>,
}

impl PaintingCompany {
    pub fn new(painters: Vec<Box<dyn Painter>>) -> Self {
        Self { painters }
    }

    /// Working in parallel, the team's rates add up.
    fn houses_per_day(&self) -> f32 {
        self.painters.iter().map(|p| 1.0 / p.painting_speed()).sum()
    }
}

impl Painter for PaintingCompany {
    fn painting_speed(&self) -> f32 {
        1.0 / self.houses_per_day()
    }

    fn estimate_painting_days(&self, houses: u32) -> f32 {
        houses as f32 / self.houses_per_day()
    }
}

/// Client: depends on the trait only.
pub struct HouseOwner {
    painter: Box<dyn Painter>,
    houses: u32,
}

impl HouseOwner {
    pub fn new(painter: Box<dyn Painter>, houses: u32) -> Self {
        Self { painter, houses }
    }

    pub fn estimate_painting_days(&self) -> f32 {
        self.painter.estimate_painting_days(self.houses)
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let houses = 10;

    let owner = problem::HouseOwner::new(
        vec![
            problem::Painter::new(5.0),
            problem::Painter::new(4.0),
            problem::Painter::new(3.0),
        ],
        houses,
    );
    console.say(format!(
        "{} days are required to paint {houses} houses",
        owner.estimate_painting_days()
    ));

    let company = PaintingCompany::new(vec![
        Box::new(SoloPainter::new(5.0)),
        Box::new(SoloPainter::new(4.0)),
        Box::new(SoloPainter::new(3.0)),
    ]);
    let owner = HouseOwner::new(Box::new(company), houses);
    console.say(format!(
        "{} days are required to paint {houses} houses",
        owner.estimate_painting_days()
    ));

    let holding = PaintingCompany::new(vec![
        Box::new(PaintingCompany::new(vec![
            Box::new(SoloPainter::new(5.0)),
            Box::new(SoloPainter::new(4.0)),
        ])),
        Box::new(SoloPainter::new(3.0)),
    ]);
    let owner = HouseOwner::new(Box::new(holding), houses);
    console.say(format!(
        "{} days are required to paint {houses} houses (company of companies)",
        owner.estimate_painting_days()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_solo_painter() {
        let painter = SoloPainter::new(2.5);
        assert!(close(painter.estimate_painting_days(4), 10.0));
    }

    #[test]
    fn test_company_of_two_equal_painters_halves_time() {
        let company = PaintingCompany::new(vec![
            Box::new(SoloPainter::new(4.0)),
            Box::new(SoloPainter::new(4.0)),
        ]);
        assert!(close(company.painting_speed(), 2.0));
        assert!(close(company.estimate_painting_days(3), 6.0));
    }

    #[test]
    fn test_flat_company_matches_problem_estimate() {
        let flat = problem::HouseOwner::new(
            vec![
                problem::Painter::new(5.0),
                problem::Painter::new(4.0),
                problem::Painter::new(3.0),
            ],
            10,
        );
        let composite = HouseOwner::new(
            Box::new(PaintingCompany::new(vec![
                Box::new(SoloPainter::new(5.0)),
                Box::new(SoloPainter::new(4.0)),
                Box::new(SoloPainter::new(3.0)),
            ])),
            10,
        );
        assert_eq!(flat.estimate_painting_days(), composite.estimate_painting_days());
        assert!(close(composite.estimate_painting_days(), 12.765957));
    }

    #[test]
    fn test_nesting_does_not_change_estimate() {
        let nested = PaintingCompany::new(vec![
            Box::new(PaintingCompany::new(vec![
                Box::new(SoloPainter::new(5.0)),
                Box::new(SoloPainter::new(4.0)),
            ])),
            Box::new(SoloPainter::new(3.0)),
        ]);
        let flat = PaintingCompany::new(vec![
            Box::new(SoloPainter::new(5.0)),
            Box::new(SoloPainter::new(4.0)),
            Box::new(SoloPainter::new(3.0)),
        ]);
        assert!(close(nested.estimate_painting_days(10), flat.estimate_painting_days(10)));
    }

    #[test]
    fn test_demo_prints_three_estimates() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        let lines = console.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[1]);
        assert!(lines
            .iter()
            .all(|line| line.contains("days are required to paint 10 houses")));
    }
}

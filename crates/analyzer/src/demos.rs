//! Bundled demo schemas driven by the `analyzer` binary.
//!
//! Each demo is a small textbook relation built in code; the engine takes
//! already-structured sets, so there is nothing to parse.

use schema::{AttributeSet, Fd, RelationSchema};

/// A named relation schema bundled with the analyzer.
#[derive(Debug, Clone)]
pub struct Demo {
    name: &'static str,
    description: &'static str,
    schema: RelationSchema,
}

impl Demo {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn schema(&self) -> &RelationSchema {
        &self.schema
    }
}

fn attrs(list: &[&str]) -> AttributeSet {
    list.iter().copied().collect()
}

fn fd(lhs: &[&str], rhs: &[&str]) -> Fd {
    Fd::admit(attrs(lhs), attrs(rhs)).expect("demo dependency is admissible")
}

/// All bundled demo schemas, in presentation order.
#[must_use]
pub fn demo_schemas() -> Vec<Demo> {
    vec![
        Demo {
            name: "textbook",
            description: "classic five-attribute example failing every form above 1NF",
            schema: RelationSchema::new(
                attrs(&["A", "B", "C", "D", "E"]),
                vec![
                    fd(&["A"], &["B", "C"]),
                    fd(&["B"], &["D"]),
                    fd(&["A", "E"], &["C"]),
                ],
            ),
        },
        Demo {
            name: "orders",
            description: "order lines with product data partially dependent on the key",
            schema: RelationSchema::new(
                attrs(&["order", "product", "quantity", "product_name", "unit_price"]),
                vec![
                    fd(&["order", "product"], &["quantity"]),
                    fd(&["product"], &["product_name", "unit_price"]),
                ],
            ),
        },
        Demo {
            name: "employees",
            description: "transitive dependency through the department",
            schema: RelationSchema::new(
                attrs(&["employee", "department", "department_head"]),
                vec![
                    fd(&["employee"], &["department"]),
                    fd(&["department"], &["department_head"]),
                ],
            ),
        },
        Demo {
            name: "teaching",
            description: "3NF but not BCNF: the teacher determines the course",
            schema: RelationSchema::new(
                attrs(&["student", "course", "teacher"]),
                vec![
                    fd(&["student", "course"], &["teacher"]),
                    fd(&["teacher"], &["course"]),
                ],
            ),
        },
        Demo {
            name: "books",
            description: "already in BCNF",
            schema: RelationSchema::new(
                attrs(&["isbn", "title", "author"]),
                vec![fd(&["isbn"], &["title", "author"])],
            ),
        },
    ]
}

/// Look up a bundled demo by name.
#[must_use]
pub fn find_demo(name: &str) -> Option<Demo> {
    demo_schemas().into_iter().find(|demo| demo.name == name)
}

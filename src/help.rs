//! Operations guide shown by the help command.

pub struct HelpSection {
    pub title: &'static str,
    /// (heading, description) pairs.
    pub entries: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Simple Operations",
        entries: &[
            ("Addition (+)", "Adds two numbers.\nExample: 5 + 3 = 8"),
            ("Subtraction (-)", "Subtracts the second number from the first.\nExample: 10 - 4 = 6"),
            ("Multiplication (*)", "Multiplies two numbers.\nExample: 7 * 6 = 42"),
            ("Division (/)", "Divides the first number by the second.\nExample: 20 / 4 = 5"),
            ("Decimal Point (.)", "Enters decimal numbers.\nExample: 5.5 + 2.3 = 7.8"),
            ("Clear (C)", "Resets the display to 0."),
            ("Delete (DEL)", "Removes the last character of the input."),
            ("Equals (=)", "Evaluates the expression and shows the result."),
        ],
    },
    HelpSection {
        title: "Advanced Operations",
        entries: &[
            ("Square Root (√)", "Square root of the following group.\nExample: √(16) = 4"),
            ("Square (x²)", "Raises the preceding number to the power of 2.\nExample: 5x² = 25"),
            ("Cube (x³)", "Raises the preceding number to the power of 3.\nExample: 3x³ = 27"),
            ("Power (^)", "Raises a base to any exponent.\nExample: 2^8 = 256"),
            ("Sine (sin)", "Sine of an angle in radians.\nExample: sin(0) = 0"),
            ("Cosine (cos)", "Cosine of an angle in radians.\nExample: cos(0) = 1"),
            ("Tangent (tan)", "Tangent of an angle in radians.\nExample: tan(0) = 0"),
            ("Logarithm (log)", "Base 10 logarithm.\nExample: log(100) = 2"),
            ("Natural Log (ln)", "Logarithm to base e.\nExample: ln(e) = 1"),
            ("Factorial (x!)", "Product of all positive integers up to n.\nExample: 5! = 120"),
            ("Percent (%)", "Divides the preceding number by 100.\nExample: 200*10% = 20"),
            ("Pi (π)", "The constant π ≈ 3.14159.\nExample: 2*π ≈ 6.28318"),
            ("Euler's Number (e)", "The constant e ≈ 2.71828.\nExample: ln(e) = 1"),
            ("Parentheses ()", "Group operations.\nExample: (2+3)*4 = 20"),
        ],
    },
    HelpSection {
        title: "Tips & Tricks",
        entries: &[
            (
                "Order of Operations",
                "Parentheses first, then powers, then * and / (left to right), \
                 then + and - (left to right).\nExample: 2+3*4 = 14",
            ),
            (
                "Trigonometry",
                "sin, cos and tan take radians: radians = degrees*π/180.\n\
                 Example: sin(π/2) = 1",
            ),
            (
                "Keyboard",
                "Digits, + - * / ( ) . and ^ type directly.\n\
                 Enter or = evaluates, Backspace deletes, Escape clears.",
            ),
            (
                "History",
                "Every successful calculation is kept, most recent first.\n\
                 Selecting an entry loads its result for further calculation.",
            ),
            (
                "Errors",
                "Invalid input, division by zero and out-of-range values show Error.\n\
                 Clear (C) before starting a new calculation.",
            ),
        ],
    },
    HelpSection {
        title: "About",
        entries: &[(
            concat!("ORCA v", env!("CARGO_PKG_VERSION")),
            "On-the-fly Ready Calculator Add-on.\n\
             Simple and advanced keypads, keyboard input, calculation history.",
        )],
    },
];

/// Render every section as plain text.
pub fn render() -> String {
    let mut out = String::new();
    for section in SECTIONS {
        out.push_str(&format!("== {} ==\n", section.title));
        for (heading, description) in section.entries {
            out.push_str(heading);
            out.push('\n');
            for line in description.lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out
}

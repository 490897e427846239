use crate::error::Result;
use colored::Colorize;
use jobinfo_common::ParseResult;

const LABEL_WIDTH: usize = 17;
const VALUE_WIDTH: usize = 58;

/// Report sections, each a list of (field, label).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Job Information",
        &[
            ("Job_Id", "Job ID"),
            ("Job_Name", "Job Name"),
            ("Job_Owner", "User Name"),
            ("Queue", "Queue"),
            ("Nodes", "Nodes"),
            ("Run_Status", "Run Status"),
            ("Exit_Status", "Exit Status"),
        ],
    ),
    (
        "Times",
        &[
            ("Submit_Time", "Submit Time"),
            ("Queue_Time", "Queue Time"),
            ("Start_Time", "Start Time"),
            ("Finish_Time", "Finish Time"),
        ],
    ),
    (
        "Resources",
        &[
            ("Cpus_Requested", "CPUs"),
            ("Walltime_Requested", "Walltime"),
            ("Walltime_Used", "Walltime Used"),
            ("Memory_Used_GB", "Memory Used"),
        ],
    ),
    (
        "Paths",
        &[
            ("Work_Directory", "Work Directory"),
            ("Submit_Directory", "Submit Directory"),
            ("Output_Path", "Output Path"),
            ("Error_Path", "Error Path"),
            ("Submit_Arguments", "Submit Arguments"),
        ],
    ),
];

/// Boxed, human readable report.
pub fn render_table(result: &ParseResult) -> String {
    let mut out = String::new();
    out.push_str(&border('┌', '─', '┐'));
    for (i, (title, rows)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            out.push_str(&border('├', '┴', '┤'));
        }
        let title = format!("{:<width$}", title, width = LABEL_WIDTH + VALUE_WIDTH + 3);
        out.push_str(&format!("│ {} │\n", title.as_str().bold()));
        out.push_str(&border('├', '┬', '┤'));
        for (field, label) in rows.iter() {
            let value = result
                .get(field)
                .map(|v| v.to_string())
                .unwrap_or_default();
            for (n, chunk) in wrap(&value, VALUE_WIDTH).iter().enumerate() {
                let label = if n == 0 { *label } else { "" };
                out.push_str(&format!(
                    "│ {:<lw$} │ {:<vw$} │\n",
                    label,
                    chunk,
                    lw = LABEL_WIDTH,
                    vw = VALUE_WIDTH
                ));
            }
        }
    }
    out.push_str(&border('└', '┴', '┘'));
    out
}

/// Pretty JSON for scripts. Unknown fields are `null`.
pub fn render_json(result: &ParseResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn border(left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    line.push_str(&"─".repeat(LABEL_WIDTH + 2));
    line.push(mid);
    line.push_str(&"─".repeat(VALUE_WIDTH + 2));
    line.push(right);
    line.push('\n');
    line
}

fn wrap(value: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

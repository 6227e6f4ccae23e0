//! Interactive advising session
//!
//! A line-oriented loop with a student portal (advise, enroll, drop) and an
//! advisor portal (add, prereq, list, delete). Generic over the input and
//! output streams so tests can drive it with in-memory buffers.

use super::{
    normalize_code, parse_cgpa, parse_code_list, write_advising, write_registered,
    StudentProfile,
};
use course_advisor::core::models::{CatalogStore, CourseField, CourseForm, DeleteOutcome};
use course_advisor::{debug, info};
use std::io::{self, BufRead, Write};

/// Prompting reader/writer pair
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Split a command line into its verb and the remaining argument text
fn split_command(line: &str) -> (String, &str) {
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    (verb.to_ascii_lowercase(), rest.trim())
}

/// Run the session until `quit` or end of input
///
/// # Errors
/// Returns any error from reading `input` or writing `output`
pub fn run<R: BufRead, W: Write>(
    catalog: &mut CatalogStore,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut console = Console { input, output };
    writeln!(console.output, "Academic Advisor System")?;
    info!("Session started with {} course(s)", catalog.len());

    loop {
        let Some(line) = console.prompt("\nmain (student | advisor | quit)> ")? else {
            break;
        };
        match line.to_ascii_lowercase().as_str() {
            "" => {}
            "student" => {
                if !student_portal(catalog, &mut console)? {
                    break;
                }
            }
            "advisor" => {
                if !advisor_portal(catalog, &mut console)? {
                    break;
                }
            }
            "quit" | "exit" => break,
            other => writeln!(console.output, "Unknown command: '{other}'")?,
        }
    }

    writeln!(console.output, "Goodbye.")?;
    Ok(())
}

/// Ask for the student's details; `Ok(None)` on bad input or end of input
fn read_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<StudentProfile>> {
    let Some(semester) = console.prompt("Enter your current semester: ")? else {
        return Ok(None);
    };
    let Some(cgpa) = console.prompt("Enter your CGPA: ")? else {
        return Ok(None);
    };
    let (Ok(semester), Ok(cgpa)) = (semester.parse::<u32>(), parse_cgpa(&cgpa)) else {
        writeln!(
            console.output,
            "Please enter valid inputs for semester and CGPA."
        )?;
        return Ok(None);
    };
    let passed = console
        .prompt("Enter passed course codes (comma-separated): ")?
        .unwrap_or_default();
    let failed = console
        .prompt("Enter failed course codes (comma-separated): ")?
        .unwrap_or_default();

    Ok(Some(StudentProfile {
        semester,
        cgpa,
        passed: parse_code_list(&passed),
        failed: parse_code_list(&failed),
    }))
}

/// Student portal; returns `false` when input ended
fn student_portal<R: BufRead, W: Write>(
    catalog: &CatalogStore,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    let Some(profile) = read_profile(console)? else {
        return Ok(true);
    };
    let mut student = profile.to_record();
    debug!(
        "Student portal: semester {}, cap {} credit hours",
        student.semester(),
        student.max_credit_hours()
    );
    write_advising(&mut console.output, &student, catalog)?;

    loop {
        let Some(line) =
            console.prompt("\nstudent (advise | enroll CODE | drop CODE | enrolled | back)> ")?
        else {
            return Ok(false);
        };
        let (verb, arg) = split_command(&line);
        match verb.as_str() {
            "" => {}
            "advise" => write_advising(&mut console.output, &student, catalog)?,
            "enroll" if !arg.is_empty() => match catalog.resolve(&normalize_code(arg)) {
                Ok(course) => writeln!(console.output, "{}", student.enroll(course))?,
                Err(_) => writeln!(console.output, "Course not found.")?,
            },
            "drop" if !arg.is_empty() => {
                writeln!(console.output, "{}", student.drop(&normalize_code(arg)))?;
            }
            "enrolled" => write_registered(&mut console.output, &student)?,
            "back" => return Ok(true),
            "enroll" | "drop" => writeln!(console.output, "Usage: {verb} CODE")?,
            other => writeln!(console.output, "Unknown command: '{other}'")?,
        }
    }
}

/// Prompt for every form field and add the course if it validates
fn add_course<R: BufRead, W: Write>(
    catalog: &mut CatalogStore,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    let mut form = CourseForm::default();
    for field in CourseField::ALL {
        let Some(value) = console.prompt(&format!("Enter {field}: "))? else {
            return Ok(false);
        };
        let value = match field {
            CourseField::Code => normalize_code(&value),
            CourseField::Prerequisites => parse_code_list(&value).join(","),
            _ => value,
        };
        form.set(field, value);
    }

    match form.validate() {
        Ok(entry) => {
            let code = entry.code.clone();
            catalog.add_course(entry);
            writeln!(console.output, "New course '{code}' added successfully.")?;
        }
        Err(errors) => {
            writeln!(console.output, "Course not added:")?;
            for e in errors {
                writeln!(console.output, "  {e}")?;
            }
        }
    }
    Ok(true)
}

/// Advisor portal; returns `false` when input ended
fn advisor_portal<R: BufRead, W: Write>(
    catalog: &mut CatalogStore,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    loop {
        let Some(line) = console
            .prompt("\nadvisor (add | prereq CODE PREREQ | list | delete CODE | back)> ")?
        else {
            return Ok(false);
        };
        let (verb, arg) = split_command(&line);
        match verb.as_str() {
            "" => {}
            "add" => {
                if !add_course(catalog, console)? {
                    return Ok(false);
                }
            }
            "prereq" => {
                let codes: Vec<String> = arg.split_whitespace().map(normalize_code).collect();
                if let [course, prereq] = codes.as_slice() {
                    writeln!(console.output, "{}", catalog.add_prerequisite(course, prereq))?;
                } else {
                    writeln!(console.output, "Usage: prereq CODE PREREQ")?;
                }
            }
            "list" => super::catalog::list(catalog, &mut console.output)?,
            "delete" if !arg.is_empty() => {
                let code = normalize_code(arg);
                match catalog.delete_course(&code) {
                    DeleteOutcome::Deleted => {
                        writeln!(console.output, "Course {code} deleted successfully.")?;
                    }
                    DeleteOutcome::NotFound => writeln!(console.output, "Course not found.")?,
                }
            }
            "delete" => writeln!(console.output, "Usage: delete CODE")?,
            "back" => return Ok(true),
            other => writeln!(console.output, "Unknown command: '{other}'")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_advisor::core::models::CourseCatalogEntry;
    use std::io::Cursor;

    fn catalog() -> CatalogStore {
        let mut catalog = CatalogStore::new();
        catalog.add_course(CourseCatalogEntry::new(
            "CS101".to_string(),
            "Programming I".to_string(),
            3,
            1,
        ));
        catalog.add_course(
            CourseCatalogEntry::new("CS201".to_string(), "Data Structures".to_string(), 3, 2)
                .with_prerequisites(["CS101"]),
        );
        catalog
    }

    fn session(catalog: &mut CatalogStore, script: &str) -> String {
        let mut out = Vec::new();
        run(catalog, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_student_enroll_and_drop() {
        let mut catalog = catalog();
        let text = session(
            &mut catalog,
            concat!(
                "student\n2\n2.0\n\n\n",
                "enroll cs201\nenroll cs101\nenroll CS101\nenrolled\n",
                "drop cs101\ndrop cs101\nback\nquit\n",
            ),
        );

        assert!(text.contains("You can enroll in 20 credit hours."));
        assert!(text.contains("have not passed the following prerequisite(s): CS101"));
        assert!(text.contains("Enrolled in course: Programming I"));
        assert!(text.contains("You are already enrolled in this course."));
        assert!(text.contains("Total: 3 of 20 credit hours"));
        assert!(text.contains("Dropped course: Programming I"));
        assert!(text.contains("Course not found in registered courses."));
        assert!(text.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_student_bad_inputs_return_to_main() {
        let mut catalog = catalog();
        let text = session(&mut catalog, "student\nthird\nNaN\nquit\n");
        assert!(text.contains("Please enter valid inputs for semester and CGPA."));
        assert!(text.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_advisor_add_prereq_delete() {
        let mut catalog = catalog();
        let text = session(
            &mut catalog,
            concat!(
                "advisor\nadd\ncs301\nAlgorithms\n3\n2\n2\n3\nCore\ncs201\n",
                "prereq CS301 CS101\nprereq CS301 XX1\n",
                "delete CS101\nlist\nback\nquit\n",
            ),
        );

        assert!(text.contains("New course 'CS301' added successfully."));
        assert!(text.contains("Prerequisite added."));
        assert!(text.contains("Course or prerequisite not found."));
        assert!(text.contains("Course CS101 deleted successfully."));
        assert!(text.contains("CS201: Data Structures\nCS301: Algorithms\n"));
        assert_eq!(
            catalog.get_course_by_code("CS301").unwrap().prerequisites,
            vec!["CS201", "CS101"]
        );
    }

    #[test]
    fn test_advisor_add_reports_bad_fields() {
        let mut catalog = catalog();
        let text = session(
            &mut catalog,
            "advisor\nadd\nCS999\n\nthree\n0\n0\n1\nElective\n\nback\nquit\n",
        );

        assert!(text.contains("Course not added:"));
        assert!(text.contains("  Name: must not be empty"));
        assert!(text.contains("  Credit Hours: expected a non-negative whole number, got 'three'"));
        assert!(catalog.get_course_by_code("CS999").is_none());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut catalog = catalog();
        let text = session(&mut catalog, "student\n1\n3.5\nCS101\n\nadvise\n");
        assert!(text.contains("You can enroll in 22 credit hours."));
        assert!(text.ends_with("Goodbye.\n"));
    }
}

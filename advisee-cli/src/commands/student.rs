//! Student details

use advisee_core::{Semester, StudentUpdate};
use clap::Args;

use super::Context;
use crate::output::print_one;

/// Show or edit student details
#[derive(Args, Debug)]
pub struct StudentArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub middle_initial: Option<String>,

    #[arg(long)]
    pub surname: Option<String>,

    #[arg(long)]
    pub student_id: Option<String>,

    #[arg(long)]
    pub contact_no: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Academic year (e.g. 2025)
    #[arg(long)]
    pub academic_year: Option<String>,

    /// Fall, Winter, Spring or Summer
    #[arg(long)]
    pub semester: Option<Semester>,

    /// Term you intend to graduate at the end of
    #[arg(long)]
    pub graduation_term: Option<String>,
}

impl StudentArgs {
    fn to_update(&self) -> StudentUpdate {
        StudentUpdate {
            first_name: self.first_name.clone(),
            middle_initial: self.middle_initial.clone(),
            surname: self.surname.clone(),
            student_id: self.student_id.clone(),
            contact_no: self.contact_no.clone(),
            email: self.email.clone(),
            academic_year: self.academic_year.clone(),
            semester: self.semester,
            graduation_term: self.graduation_term.clone(),
        }
    }

    /// Execute the student command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let mut session = ctx.load_session()?;

        let update = self.to_update();
        if !update.is_empty() {
            update.apply(session.student_mut());
            ctx.save_session(&session)?;
            tracing::debug!("Student details updated");
        }

        let info = session.student().clone();
        print_one(ctx.json, info, |info| {
            println!("Student Information");
            println!("===================");
            println!("  Name:            {}", info.full_name());
            println!("  Student ID:      {}", info.student_id);
            println!("  Contact Number:  {}", info.contact_no);
            println!("  Email:           {}", info.email);
            println!("  Academic Year:   {}", info.academic_year);
            println!("  Semester:        {}", info.semester);
            println!("  Graduation Term: {}", info.graduation_term);

            let missing = info.missing_fields();
            if !missing.is_empty() {
                println!();
                println!("Missing: {}", missing.join(", "));
            }
        })
    }
}

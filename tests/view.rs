#[cfg(test)]
mod tests {
    use chrono::Local;
    use roster::commands::demo;
    use roster::libs::roster::RosterStore;
    use roster::libs::student::NewStudent;
    use roster::libs::subject::NewSubject;
    use roster::libs::view::View;

    fn render(store: &RosterStore) -> String {
        let mut out = Vec::new();
        View::write_roster(&mut out, &store.list_subjects().unwrap()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_listing() {
        let mut store = RosterStore::open_in_memory().unwrap();
        demo::seed(&mut store).unwrap();

        assert_eq!(render(&store), "Subject: Mathematics\nEnrolled Students:\n- Alice\n- Bob\n");
    }

    #[test]
    fn test_listing_keeps_subject_order() {
        let mut store = RosterStore::open_in_memory().unwrap();
        let now = Local::now().naive_local();

        let art = store.add_subject(&NewSubject::new("Art", 12)).unwrap();
        store.add_subject(&NewSubject::new("Biology", 20)).unwrap();
        let carol = store.add_student(&NewStudent::new("Carol", now)).unwrap();
        store.enroll_student_in_subject(carol.id, art.id).unwrap();

        assert_eq!(
            render(&store),
            "Subject: Art\nEnrolled Students:\n- Carol\nSubject: Biology\nEnrolled Students:\n"
        );
    }

    #[test]
    fn test_empty_store_prints_nothing() {
        let store = RosterStore::open_in_memory().unwrap();
        assert_eq!(render(&store), "");
    }
}

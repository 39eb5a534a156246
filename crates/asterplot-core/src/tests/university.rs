use crate::university::University;

#[test]
fn known_names_round_trip() {
    for uni in University::ALL {
        assert_eq!(University::from_name(uni.name()), Some(uni));
    }
}

#[test]
fn unknown_name_is_rejected() {
    assert_eq!(University::from_name("Hogwarts"), None);
    assert_eq!(University::from_name("cambridge"), None);
}

#[test]
fn initials_are_distinct() {
    let mut initials: Vec<char> = University::ALL.iter().map(|u| u.initial()).collect();
    initials.sort_unstable();
    initials.dedup();
    assert_eq!(initials.len(), University::ALL.len());
}

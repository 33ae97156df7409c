use seatwatch_domain::{SeatNotification, ShowtimeContext};
use seatwatch_infra::EmailMessage;

/// Render the notification email for one watch request.
///
/// Two unsubscribe links are embedded: one for this seat alone and one for
/// all of the user's watches on this showtime. Both are handled by an
/// external HTTP service.
pub fn render_notification(
    notification: &SeatNotification,
    meta: &ShowtimeContext,
    first_time: bool,
    unsubscribe_base_url: &str,
) -> EmailMessage {
    let seat = &notification.seat_number;
    let seat_unsubscribe_url = format!("{}/unsubscribe/{}", unsubscribe_base_url, notification.id);
    let showtime_unsubscribe_url = format!(
        "{}/unsubscribe/{}/{}",
        unsubscribe_base_url, meta.showtime_id, notification.user_email
    );

    let reminder_prefix = if first_time { "" } else { "Reminder: " };
    let intro = if notification.is_specifically_requested {
        format!("{}Seat {} is now available", reminder_prefix, seat)
    } else {
        format!("{}A seat ({}) just opened up", reminder_prefix, seat)
    };

    let subject = format!(
        "Seat {} Available - {} at {}",
        seat, meta.movie_name, meta.theater_name
    );

    let text_body = format!(
        "{intro}\n\n\
         {movie}\n\
         Theater: {theater}\n\
         Date: {date}\n\
         Time: {time}\n\
         Seat: {seat}\n\n\
         Book your seat: {booking_url}\n\n\
         Booked your seat or want to stop notifications?\n\
         Unsubscribe from seat {seat}: {seat_unsubscribe_url}\n\
         Unsubscribe from this showing: {showtime_unsubscribe_url}\n",
        intro = intro,
        movie = meta.movie_name,
        theater = meta.theater_name,
        date = meta.date_string,
        time = meta.time_string,
        seat = seat,
        booking_url = meta.seating_url,
        seat_unsubscribe_url = seat_unsubscribe_url,
        showtime_unsubscribe_url = showtime_unsubscribe_url,
    );

    let html_body = format!(
        r#"<html>
  <body style="background-color: #1A1A1A; color: #FFFFFF; font-family: sans-serif; line-height: 1.6; padding: 20px;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #222222; border-radius: 12px; overflow: hidden;">
      <div style="background-color: #000000; padding: 24px; text-align: center;">
        <h1 style="color: #F5F5F5; font-size: 28px; margin: 0;">Seat Alert!</h1>
      </div>
      <div style="padding: 32px 24px;">
        <h2 style="color: #E21836; font-size: 24px; text-align: center;">{intro}</h2>
        <div style="background-color: #2A2A2A; padding: 24px; border-radius: 8px; margin: 24px 0;">
          <h3 style="font-size: 22px; text-align: center;">{movie}</h3>
          <p><span style="color: #999999;">Theater:</span> {theater}</p>
          <p><span style="color: #999999;">Date:</span> {date}</p>
          <p><span style="color: #999999;">Time:</span> {time}</p>
          <p><span style="color: #999999;">Seat:</span> {seat}</p>
        </div>
        <div style="text-align: center; margin-bottom: 32px;">
          <a href="{booking_url}" style="display: inline-block; background-color: #E21836; color: #FFFFFF; padding: 16px 32px; text-decoration: none; border-radius: 8px; font-weight: 600;">Book Your Seat Now</a>
        </div>
        <div style="border-top: 1px solid #333333; padding-top: 24px; text-align: center;">
          <p style="color: #999999;">Booked your seat or want to stop notifications?</p>
          <p><a href="{seat_unsubscribe_url}" style="color: #FFFFFF;">Unsubscribe from Seat {seat}</a></p>
          <p><a href="{showtime_unsubscribe_url}" style="color: #FFFFFF;">Unsubscribe from this showing</a></p>
        </div>
      </div>
      <div style="background-color: #000000; padding: 16px; text-align: center;">
        <p style="color: #666666; font-size: 12px; margin: 0;">This email was sent automatically. Do not reply.</p>
      </div>
    </div>
  </body>
</html>"#,
        intro = intro,
        movie = meta.movie_name,
        theater = meta.theater_name,
        date = meta.date_string,
        time = meta.time_string,
        seat = seat,
        booking_url = meta.seating_url,
        seat_unsubscribe_url = seat_unsubscribe_url,
        showtime_unsubscribe_url = showtime_unsubscribe_url,
    );

    EmailMessage {
        to: notification.user_email.clone(),
        subject,
        html_body,
        text_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwatch_domain::ID;

    fn meta() -> ShowtimeContext {
        ShowtimeContext {
            showtime_id: ID::new(),
            seating_url: "https://example.com/seats/1".to_string(),
            movie_name: "The Movie".to_string(),
            theater_name: "Empire 25".to_string(),
            date_string: "Sunday, February 16, 2025".to_string(),
            time_string: "7:30 pm".to_string(),
        }
    }

    fn notification() -> SeatNotification {
        SeatNotification::new("user@example.com", "A2", &ID::new(), true)
    }

    #[test]
    fn first_time_email_has_no_reminder_prefix() {
        let email = render_notification(&notification(), &meta(), true, "http://base");
        assert_eq!(email.to, "user@example.com");
        assert_eq!(email.subject, "Seat A2 Available - The Movie at Empire 25");
        assert!(email.text_body.contains("Seat A2 is now available"));
        assert!(!email.text_body.contains("Reminder:"));
    }

    #[test]
    fn repeat_email_is_phrased_as_reminder() {
        let email = render_notification(&notification(), &meta(), false, "http://base");
        assert!(email.text_body.contains("Reminder: Seat A2 is now available"));
        assert!(email.html_body.contains("Reminder: Seat A2 is now available"));
    }

    #[test]
    fn generic_watch_uses_opened_up_phrasing() {
        let n = SeatNotification::new("user@example.com", "B1", &ID::new(), false);
        let email = render_notification(&n, &meta(), true, "http://base");
        assert!(email.text_body.contains("A seat (B1) just opened up"));
    }

    #[test]
    fn both_unsubscribe_links_are_embedded() {
        let n = notification();
        let m = meta();
        let email = render_notification(&n, &m, true, "http://base");
        assert!(email
            .html_body
            .contains(&format!("http://base/unsubscribe/{}", n.id)));
        assert!(email.html_body.contains(&format!(
            "http://base/unsubscribe/{}/{}",
            m.showtime_id, n.user_email
        )));
    }
}
